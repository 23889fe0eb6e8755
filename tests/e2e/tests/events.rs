use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
async fn test_every_event_has_a_card() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    page.find_element(".event_card").expect("Cards should render");
    let expected = festival::catalog().expect("catalog").len();
    assert_eq!(page.count(".event_card").unwrap(), expected);

    let first = page
        .find_element("#event-card-0 h3")
        .expect("First card title");
    assert_eq!(first.trim(), "Hackathon");
}

#[tokio::test]
async fn test_card_opens_and_backdrop_closes_overlay() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    assert!(!page.exists(".modal_backdrop").unwrap());

    page.click("#event-card-0").expect("Failed to open event");
    let title = page
        .find_element(".modal_heading h2")
        .expect("Overlay should open");
    assert_eq!(title.trim(), "Hackathon");
    let meta = page.find_element(".modal_meta").expect("Schedule rows");
    assert!(meta.contains("March 15, 2024"));
    assert!(meta.contains("Auditorium, Engineering Block"));

    // Clicks inside the panel keep it open
    page.click(".modal_description").unwrap();
    assert!(page.exists(".modal_backdrop").unwrap());

    page.dispatch_click(".modal_backdrop").unwrap();
    std::thread::sleep(std::time::Duration::from_millis(200));
    assert!(
        !page.exists(".modal_backdrop").unwrap(),
        "Backdrop click should close the overlay"
    );
}

#[tokio::test]
async fn test_close_button_closes_overlay() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    page.click("#event-card-2").expect("Failed to open event");
    let title = page
        .find_element(".modal_heading h2")
        .expect("Overlay should open");
    assert_eq!(title.trim(), "AI Summit");
    assert!(!page.exists(".modal_rules").unwrap());

    page.click(".modal_close").unwrap();
    std::thread::sleep(std::time::Duration::from_millis(200));
    assert!(!page.exists(".modal_backdrop").unwrap());
}

use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(
        body.contains("<title>TANTRAZ 2025</title>"),
        "Should serve the festival index page"
    );
}

#[tokio::test]
async fn test_sections_and_anchors() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    for id in ["#home", "#events", "#about"] {
        page.find_element(id).expect("Section should exist");
        let selector = format!("a.nav_link[href='{id}']");
        assert!(page.exists(&selector).unwrap(), "Missing nav link {id}");
    }

    page.click("a.nav_link[href='#about']")
        .expect("Failed to click nav link");
    let url = page.url().unwrap();
    assert!(url.ends_with("#about"), "Anchor should update the url: {url}");
}

#[tokio::test]
async fn test_navbar_toggles_on_scroll() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");
    page.find_element("nav.site_nav").expect("Navbar should render");

    assert!(!page.exists("nav.site_nav.scrolled").unwrap());

    page.scroll_to(400.0).unwrap();
    assert!(
        page.exists("nav.site_nav.scrolled").unwrap(),
        "Navbar should turn opaque past the threshold"
    );

    page.scroll_to(0.0).unwrap();
    assert!(
        !page.exists("nav.site_nav.scrolled").unwrap(),
        "Navbar should turn transparent again at the top"
    );
}

#[tokio::test]
async fn test_only_asset_requests_leave_the_page() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");
    page.find_element(".event_card").expect("Cards should render");

    let foreign = page
        .eval(
            r#"JSON.stringify(performance.getEntriesByType("resource")
                .map((r) => ({ name: r.name, kind: r.initiatorType }))
                .filter((r) => !r.name.startsWith(location.origin))
                .filter((r) => !["img", "css", "link"].includes(r.kind))
                .map((r) => r.name))"#,
        )
        .unwrap();
    assert_eq!(
        foreign.as_str(),
        Some("[]"),
        "Unexpected cross-origin requests: {foreign}"
    );
}

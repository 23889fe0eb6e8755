use dioxus::prelude::*;
use festival::SiteConfig;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const FONT_CSS: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap";

fn main() {
    install_panic_hook();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}

fn log_site_config() {
    // The browser has no process environment; these were fixed when the bundle was built.
    match SiteConfig::build_time() {
        Ok(config) => tracing::info!("startup: {}", config_summary(&config)),
        Err(err) => tracing::warn!("startup: build-time config invalid: {err}"),
    }

    match festival::catalog() {
        Ok(catalog) => tracing::info!("startup: {} events in catalog", catalog.len()),
        Err(err) => tracing::warn!("startup: event catalog failed to load: {err}"),
    }
}

fn config_summary(config: &SiteConfig) -> String {
    format!(
        "build-time base_path={} dev_port={}",
        config.route_prefix(),
        config.dev_port
    )
}

#[component]
fn App() -> Element {
    use_hook(log_site_config);

    rsx! {
        // Global app resources
        document::Title { "TANTRAZ 2025" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: FONT_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::FestivalTheme {}
        ui::WindowProvider {
            div { class: "page",
                ui::Navbar {}
                ui::Hero {}
                ui::EventCatalog {}
                ui::About {}
            }
        }
    }
}

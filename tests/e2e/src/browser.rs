use anyhow::{anyhow, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((1280, 800)))
            .build()
            .map_err(|e| anyhow!("Failed to build launch options: {e}"))?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn exists(&self, selector: &str) -> Result<bool> {
        let found = self.eval(&format!(
            "document.querySelector({}) !== null",
            serde_json::to_string(selector)?
        ))?;
        Ok(found.as_bool().unwrap_or(false))
    }

    pub fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.tab.find_elements(selector).map(|els| els.len()).unwrap_or(0))
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    /// Dispatch a click whose target is the element itself, not one of its children.
    pub fn dispatch_click(&self, selector: &str) -> Result<()> {
        self.tab.wait_for_element(selector)?;
        self.eval(&format!(
            r#"(function(){{
                const el = document.querySelector({});
                el.dispatchEvent(new MouseEvent("click", {{ bubbles: true }}));
                return true;
            }})()"#,
            serde_json::to_string(selector)?
        ))?;
        Ok(())
    }

    pub fn scroll_to(&self, y: f64) -> Result<()> {
        self.eval(&format!("window.scrollTo(0, {y}); window.scrollY"))?;
        // Let the scroll listener post back and the page re-render.
        std::thread::sleep(Duration::from_millis(300));
        Ok(())
    }

    pub fn eval(&self, expression: &str) -> Result<serde_json::Value> {
        let result = self.tab.evaluate(expression, false)?;
        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    pub fn url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }
}

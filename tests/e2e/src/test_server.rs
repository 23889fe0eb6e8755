use anyhow::Result;
use festival::SiteConfig;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

pub struct TestServer {
    url: String,
    process: Option<Child>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let mut config = SiteConfig::from_env()?;
        config.dev_port = get_random_port()?;

        // Serve the web package through the dioxus CLI on a free port
        let process = Command::new("dx")
            .args([
                "serve",
                "--package",
                "web",
                "--platform",
                "web",
                "--port",
                &config.dev_port.to_string(),
            ])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let url = config.dev_url();

        // Wait for server to be ready
        wait_for_server(&url).await?;

        Ok(Self {
            url,
            process: Some(process),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
        }
    }
}

fn get_random_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    Ok(port)
}

async fn wait_for_server(url: &str) -> Result<()> {
    // Wait up to 180 seconds for the wasm build and dev server to come up
    for i in 0..1800 {
        if let Ok(response) = reqwest::get(url).await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Log progress every 10 seconds
        if i > 0 && i % 100 == 0 {
            eprintln!("Still waiting for dev server... ({}s)", i / 10);
        }
    }
    anyhow::bail!("Dev server did not start in time (waited 180s)")
}

// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod get;
mod post;
pub mod server;
mod state;
mod template;

#[cfg(test)]
mod tests {
    use std::fs::write;
    use std::time::Duration;

    use reqwest::StatusCode;
    use tokio::net::TcpStream;
    use tokio::spawn;
    use tokio::time::sleep;

    use crate::error::Fallible;
    use crate::web::server::start_server;

    /// Starts a server on an unused port over a one-card "Greetings"
    /// collection, and returns the base URL once it accepts connections.
    async fn start_test_server() -> Fallible<String> {
        let directory = tempfile::tempdir()?;
        write(
            directory.path().join("greetings.toml"),
            "name = \"Greetings\"\n\n[[cards]]\nkey = \"Hello\"\nvalue = \"Namaste\"\n",
        )?;
        let path = directory.path().display().to_string();
        let port = portpicker::pick_unused_port().unwrap();
        spawn(async move {
            let _directory = directory;
            start_server(Some(path), port).await
        });
        loop {
            if let Ok(stream) = TcpStream::connect(format!("0.0.0.0:{port}")).await {
                drop(stream);
                break;
            }
            sleep(Duration::from_millis(1)).await;
        }
        Ok(format!("http://0.0.0.0:{port}"))
    }

    #[tokio::test]
    async fn test_start_server_on_non_existent_directory() {
        let result = start_server(Some("./derpherp".to_string()), 8000).await;
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
    }

    #[tokio::test]
    async fn test_start_server_on_empty_directory() -> Fallible<()> {
        let directory = tempfile::tempdir()?;
        let path = directory.path().display().to_string();
        let result = start_server(Some(path), 8000).await;
        assert!(result.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_static_assets() -> Fallible<()> {
        let base = start_test_server().await?;

        // Hit the `style.css` endpoint.
        let response = reqwest::get(format!("{base}/style.css")).await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");
        assert_eq!(
            response.headers().get("cache-control").unwrap(),
            "public, max-age=604800, immutable"
        );

        // Hit the `script.js` endpoint.
        let response = reqwest::get(format!("{base}/script.js")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/javascript"
        );

        // Hit the not found endpoint.
        let response = reqwest::get(format!("{base}/herp-derp")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn test_e2e() -> Fallible<()> {
        let base = start_test_server().await?;
        let client = reqwest::Client::new();

        // The root endpoint starts in the idle state.
        let response = reqwest::get(format!("{base}/")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let html = response.text().await?;
        assert!(html.contains("Choose a category to start studying."));

        // Select the category: every card is selected, the first entry is
        // shown face down.
        let response = client
            .post(format!("{base}/"))
            .form(&[("action", "SelectCategory"), ("category", "Greetings")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let html = response.text().await?;
        assert!(html.contains("Hello"));
        assert!(html.contains("1 / 2"));
        assert!(!html.contains("Namaste"));

        // Flip the card to reveal the answer.
        let response = client
            .post(format!("{base}/"))
            .form(&[("action", "Flip")])
            .send()
            .await?;
        let html = response.text().await?;
        assert!(html.contains("Namaste"));

        // Advance to the inverted entry. The flip state resets, so "Hello"
        // only appears in the hidden answer.
        let response = client
            .post(format!("{base}/"))
            .form(&[("action", "Next")])
            .send()
            .await?;
        let html = response.text().await?;
        assert!(html.contains("Namaste"));
        assert!(html.contains("2 / 2"));

        // Advancing again wraps around to the first entry.
        let response = client
            .post(format!("{base}/"))
            .form(&[("action", "Next")])
            .send()
            .await?;
        let html = response.text().await?;
        assert!(html.contains("1 / 2"));

        // Open the table view: both directions of the card are listed, and
        // the row is checked.
        let response = client
            .post(format!("{base}/"))
            .form(&[("action", "View All")])
            .send()
            .await?;
        let html = response.text().await?;
        assert!(html.contains("Greetings"));
        assert!(html.contains("Deselect All"));
        assert!(html.contains("Namaste"));
        assert!(html.contains("checked"));

        // Uncheck the only row and close the table: the deck is empty.
        let response = client
            .post(format!("{base}/"))
            .form(&[
                ("action", "ToggleRow"),
                ("index", "0"),
                ("checked", "false"),
            ])
            .send()
            .await?;
        assert!(response.status().is_success());
        let response = client
            .post(format!("{base}/"))
            .form(&[("action", "Close")])
            .send()
            .await?;
        let html = response.text().await?;
        assert!(html.contains("No cards selected."));

        // Re-select everything from the table view and close it: the deck
        // comes back in card order.
        let response = client
            .post(format!("{base}/"))
            .form(&[("action", "View All")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let response = client
            .post(format!("{base}/"))
            .form(&[("action", "Select All")])
            .send()
            .await?;
        assert!(response.status().is_success());
        let response = client
            .post(format!("{base}/"))
            .form(&[("action", "Close")])
            .send()
            .await?;
        let html = response.text().await?;
        assert!(html.contains("Hello"));
        assert!(html.contains("1 / 2"));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_category_returns_to_idle() -> Fallible<()> {
        let base = start_test_server().await?;
        let client = reqwest::Client::new();

        let response = client
            .post(format!("{base}/"))
            .form(&[("action", "SelectCategory"), ("category", "Greetings")])
            .send()
            .await?;
        assert!(response.status().is_success());

        let response = client
            .post(format!("{base}/"))
            .form(&[("action", "SelectCategory"), ("category", "Bogus")])
            .send()
            .await?;
        let html = response.text().await?;
        assert!(html.contains("Choose a category to start studying."));

        Ok(())
    }
}

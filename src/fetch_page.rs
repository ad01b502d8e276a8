use log::error;
use reqwest::Client;

// Attempts to get the content at `url` with a single HTTP GET request.
// Returns the body text if the response looks usable, None otherwise.
// Transport-level failures are logged here and never propagated.
pub async fn simple_get(client: &Client, url: &str) -> Option<String> {
    match client.get(url).send().await {
        Ok(response) => {
            if is_good_response(&response) {
                match response.text().await {
                    Ok(body) => Some(body),
                    Err(e) => {
                        error!("Error during request to {} : {}", url, e);
                        None
                    }
                }
            } else {
                // Non-success classification is silent
                None
            }
        }
        Err(e) => {
            error!("Error during request to {} : {}", url, e);
            None
        }
    }
}

// A response is usable when it carries a 200 status and a Content-Type header
fn is_good_response(response: &reqwest::Response) -> bool {
    response.status() == reqwest::StatusCode::OK &&
        response.headers().get(reqwest::header::CONTENT_TYPE).is_some()
}

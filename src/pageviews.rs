use std::error::Error;

use log::error;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::fetch_page::simple_get;

// Monthly pageview counts for the English Wikipedia article, January 2015
// through May 2020 inclusive
const PAGEVIEWS_URL_ROOT: &str =
    "https://wikimedia.org/api/rest_v1/metrics/pageviews/per-article/en.wikipedia.org/all-access/all-agents";
const PAGEVIEWS_RANGE: &str = "monthly/20150101/20200501";

// Removes middle name tokens so the name matches the API's article keys.
// Known to mishandle suffixes, hyphenation and multi-word surnames; kept
// as-is rather than guessing at the right matching rule.
pub fn normalize_name(name: &str) -> String {
    let split: Vec<&str> = name.split(' ').collect();
    if split.len() > 2 {
        format!("{} {}", split[0], split[split.len() - 1])
    } else {
        name.to_string()
    }
}

// Builds the per-article request URL. The name is substituted raw; the URL
// parser's own percent-encoding is the only escaping applied.
fn pageview_url(name: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{}/{}/{}", PAGEVIEWS_URL_ROOT, name, PAGEVIEWS_RANGE))
}

// Sums the monthly view counts in a pageviews API response body. Missing
// fields surface as generic errors for the caller to handle.
pub fn sum_monthly_views(body: &str) -> Result<u64, Box<dyn Error>> {
    let js: Value = serde_json::from_str(body)?;
    let items = js["items"].as_array().ok_or("no items in pageviews response")?;

    let mut view_count: u64 = 0;
    for month in items {
        view_count += month["views"].as_u64().ok_or("no views field in pageviews item")?;
    }
    Ok(view_count)
}

// Accepts a mathematician's name and returns the number of pageviews their
// Wikipedia article received across the fixed window. Ok(None) means the API
// had no data for the name, which is not the same as Ok(Some(0)).
pub async fn get_hits_on_name(client: &Client, name: &str) -> Result<Option<u64>, Box<dyn Error>> {
    let normalized: String = normalize_name(name);
    let url: Url = pageview_url(&normalized)?;

    match simple_get(client, url.as_str()).await {
        Some(body) => Ok(Some(sum_monthly_views(&body)?)),
        None => {
            error!("No pageviews found for {}", name);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ normalize_name, pageview_url, sum_monthly_views };

    #[test]
    fn short_names_pass_through_unchanged() {
        assert_eq!(normalize_name("Euclid"), "Euclid");
        assert_eq!(normalize_name("Isaac Newton"), "Isaac Newton");
    }

    #[test]
    fn middle_tokens_are_dropped() {
        assert_eq!(normalize_name("Carl Friedrich Gauss"), "Carl Gauss");
        assert_eq!(normalize_name("Isaac Newton Middleword Extra"), "Isaac Extra");
    }

    #[test]
    fn url_percent_encodes_the_space() {
        let url = pageview_url("Isaac Newton").unwrap();
        assert!(url.as_str().contains("/Isaac%20Newton/"));
        assert!(url.as_str().ends_with("/monthly/20150101/20200501"));
    }

    #[test]
    fn monthly_views_are_summed() {
        let body = r#"{"items":[{"views":10},{"views":20},{"views":5}]}"#;
        assert_eq!(sum_monthly_views(body).unwrap(), 35);
    }

    #[test]
    fn empty_items_sum_to_zero() {
        assert_eq!(sum_monthly_views(r#"{"items":[]}"#).unwrap(), 0);
    }

    #[test]
    fn missing_items_is_an_error() {
        assert!(sum_monthly_views(r#"{"type":"not_found"}"#).is_err());
    }

    #[test]
    fn non_integer_views_is_an_error() {
        assert!(sum_monthly_views(r#"{"items":[{"views":"many"}]}"#).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(sum_monthly_views("<html>definitely not json</html>").is_err());
    }
}

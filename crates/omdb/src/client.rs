// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::OmdbError;
use crate::models::{Rating, RatingsResponse};
use crate::Result;
use diagnostics::*;
use std::time::Duration;
use url::Url;

/// Connection settings for the ratings service
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

/// Blocking OMDb API client
pub struct Client {
    http_client: reqwest::blocking::Client,
    base_url: Url,
    api_key: String,
}

impl Client {
    /// Create a client. No request is made until the first lookup.
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|source| OmdbError::BaseUrl {
            url: config.base_url.clone(),
            source,
        })?;

        let http_client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(OmdbError::Client)?;

        Ok(Client {
            http_client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch the ratings for one title.
    ///
    /// The title is sent verbatim (query-escaped). Any non-success status,
    /// unreadable body, or "no match" answer is an error.
    pub fn ratings(&self, title: &str) -> Result<Vec<Rating>> {
        debug!("requesting ratings for {title}", title: title);

        let response = self
            .http_client
            .get(self.title_url(title))
            .send()
            .map_err(OmdbError::http)?;

        let status = response.status();
        let body = response.text().map_err(OmdbError::http)?;

        if !status.is_success() {
            return Err(OmdbError::Status { status, body });
        }

        parse_ratings(title, &body)
    }

    fn title_url(&self, title: &str) -> Url {
        let mut url = self.base_url.clone();
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("apiKey", &self.api_key)
            .append_pair("t", title);
        url
    }
}

fn parse_ratings(title: &str, body: &str) -> Result<Vec<Rating>> {
    let response: RatingsResponse = serde_json::from_str(body)?;

    if response.is_failure() {
        return Err(OmdbError::NotFound {
            title: title.to_string(),
            message: response.error.unwrap_or_default(),
        });
    }

    response.ratings.ok_or_else(|| OmdbError::MissingRatings {
        title: title.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> Client {
        Client::new(&Config {
            base_url: base_url.to_string(),
            api_key: "k3y".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_url_construction() {
        assert_eq!(
            client("http://www.omdbapi.com").title_url("NineLives").as_str(),
            "http://www.omdbapi.com/?apiKey=k3y&t=NineLives"
        );

        assert_eq!(
            client("http://www.omdbapi.com/").title_url("The Aristocats").as_str(),
            "http://www.omdbapi.com/?apiKey=k3y&t=The+Aristocats"
        );

        assert_eq!(
            client("http://localhost:8080/omdb").title_url("Fast & Furious").as_str(),
            "http://localhost:8080/omdb/?apiKey=k3y&t=Fast+%26+Furious"
        );
    }

    #[test]
    fn test_bad_base_url() {
        let result = Client::new(&Config {
            base_url: "not a url".to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(1),
        });
        assert!(matches!(result, Err(OmdbError::BaseUrl { .. })));
    }

    #[test]
    fn test_parse_ratings_keeps_order() {
        let body = r#"{"Ratings":[
            {"Source":"Metacritic","Value":"11/100"},
            {"Source":"Internet Movie Database","Value":"5.3/10"}]}"#;
        let ratings = parse_ratings("NineLives", body).unwrap();
        assert_eq!(
            ratings,
            vec![
                Rating {
                    source: "Metacritic".to_string(),
                    value: "11/100".to_string()
                },
                Rating {
                    source: "Internet Movie Database".to_string(),
                    value: "5.3/10".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_parse_not_found() {
        let body = r#"{"Response":"False","Error":"Movie not found!"}"#;
        match parse_ratings("Nope", body) {
            Err(OmdbError::NotFound { title, message }) => {
                assert_eq!(title, "Nope");
                assert_eq!(message, "Movie not found!");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_missing_ratings() {
        let result = parse_ratings("Odd", r#"{"Title":"Odd","Response":"True"}"#);
        assert!(matches!(result, Err(OmdbError::MissingRatings { .. })));
    }

    #[test]
    fn test_parse_malformed() {
        let result = parse_ratings("Odd", "<html>bad gateway</html>");
        assert!(matches!(result, Err(OmdbError::Decode(_))));

        let result = parse_ratings("Odd", r#"{"Ratings":"none"}"#);
        assert!(matches!(result, Err(OmdbError::Decode(_))));
    }
}

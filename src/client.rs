use reqwest::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue, AUTHORIZATION};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Anon key is not a valid header value: {0}")]
    InvalidKey(#[from] InvalidHeaderValue),

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Handle for a Supabase project: normalized project URL plus an HTTP
/// client carrying the `apikey` and bearer headers on every request.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    base_url: String,
    http: reqwest::Client,
}

impl SupabaseClient {
    pub fn connect(url: &str, anon_key: &str) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();

        let mut key_value = HeaderValue::from_str(anon_key)?;
        key_value.set_sensitive(true);
        headers.insert(HeaderName::from_static("apikey"), key_value);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {anon_key}"))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url: url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// PostgREST endpoint for a table, e.g. `rest_url("likes")`.
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

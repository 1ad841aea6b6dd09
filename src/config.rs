use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

impl SupabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("SUPABASE_URL").ok(),
            anon_key: env::var("SUPABASE_ANON_KEY").ok(),
        }
    }

    /// True when both credentials are present and non-empty. An empty
    /// environment variable counts as unconfigured.
    pub fn is_configured(&self) -> bool {
        non_empty(&self.url) && non_empty(&self.anon_key)
    }
}

fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

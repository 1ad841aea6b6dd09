use crate::client::SupabaseClient;
use crate::config::SupabaseConfig;
use crate::Result;
use tracing::warn;

/// Availability gate for the like feature. Built once at startup; holds
/// the client handle iff both Supabase credentials were configured.
#[derive(Debug, Clone)]
pub struct LikeBackend {
    config: SupabaseConfig,
    client: Option<SupabaseClient>,
}

impl LikeBackend {
    pub fn from_env() -> Result<Self> {
        Self::from_config(SupabaseConfig::from_env())
    }

    pub fn from_config(config: SupabaseConfig) -> Result<Self> {
        let client = if config.is_configured() {
            // is_configured guarantees both values are present and non-empty
            let url = config.url.as_deref().unwrap_or_default();
            let key = config.anon_key.as_deref().unwrap_or_default();
            Some(SupabaseClient::connect(url, key)?)
        } else {
            None
        };
        Ok(Self { config, client })
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// The client handle, or `None` when unconfigured. Absence is an
    /// expected outcome, not an error.
    pub fn client(&self) -> Option<&SupabaseClient> {
        self.client.as_ref()
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    /// Returns the availability flag; warns on every call made while
    /// unconfigured.
    pub fn check_available(&self) -> bool {
        if !self.is_configured() {
            warn!("Supabase is not configured. Like feature will be disabled.");
            return false;
        }
        true
    }
}

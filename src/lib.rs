pub mod backend;
pub mod client;
pub mod config;

pub use backend::LikeBackend;
pub use client::SupabaseClient;
pub use config::SupabaseConfig;

#[derive(Debug, thiserror::Error)]
pub enum SupalikeError {
    #[error("Client error: {0}")]
    Client(#[from] client::ClientError),
}

pub type Result<T> = std::result::Result<T, SupalikeError>;

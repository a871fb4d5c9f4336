pub mod config;
pub mod credentials;
pub mod paths;

pub use config::{CatalogConfig, Config, ImageConfig, LoggingConfig, DEFAULT_API_BASE_URL, DEFAULT_IMAGE_BASE_URL};
pub use credentials::{CredentialStore, Credentials, ACCESS_TOKEN_ENV, API_KEY_ENV};
pub use paths::{PathManager, CONFIG_DIR_ENV};

pub mod context;
pub mod logging;

pub use context::{resolve_credentials, store_credentials, AppContext, CredentialUpdate};
pub use logging::init_logging;

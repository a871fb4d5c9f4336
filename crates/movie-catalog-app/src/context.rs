use anyhow::Context;
use movie_catalog_config::{Config, CredentialStore, Credentials, PathManager};
use movie_catalog_core::{FeedSection, FeedSummary, HomeFeed, ScopeGuard, WishlistStore};
use movie_catalog_models::Movie;
use movie_catalog_sources::{FetchError, ImageUrlBuilder, TmdbClient};
use tracing::info;

/// Everything a running app holds: configuration, the catalog client, the
/// image URL builder and the wishlist.
///
/// Views borrow the pieces they need from here; nothing is global. The
/// wishlist starts empty and is discarded by [`AppContext::shutdown`].
pub struct AppContext {
    config: Config,
    catalog: TmdbClient,
    images: ImageUrlBuilder,
    wishlist: WishlistStore,
}

impl AppContext {
    pub fn start(config: Config, credentials: Credentials) -> anyhow::Result<Self> {
        config.validate().context("Invalid configuration")?;

        let catalog = TmdbClient::from_config(&config.catalog, credentials)?;
        let images = ImageUrlBuilder::from_config(&config.images);

        info!("App context started");
        Ok(Self {
            config,
            catalog,
            images,
            wishlist: WishlistStore::new(),
        })
    }

    /// Start from `config.toml` and `credentials.toml` under `paths`.
    ///
    /// `env` credentials take precedence over the credential file.
    pub fn from_paths(paths: &PathManager, env: Credentials) -> anyhow::Result<Self> {
        info!("Loading configuration from {}", paths.config_dir().display());
        let config_file = paths.config_file();
        let config = Config::load_or_default(&config_file)
            .with_context(|| format!("Failed to load {}", config_file.display()))?;
        let credentials = resolve_credentials(paths, env)?;
        Self::start(config, credentials)
    }

    /// Start from the platform config directory and the process environment
    pub fn from_environment() -> anyhow::Result<Self> {
        Self::from_paths(&PathManager::default(), Credentials::from_env())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &TmdbClient {
        &self.catalog
    }

    pub fn images(&self) -> &ImageUrlBuilder {
        &self.images
    }

    pub fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    pub fn wishlist_mut(&mut self) -> &mut WishlistStore {
        &mut self.wishlist
    }

    pub async fn load_home<F>(&self, scope: &ScopeGuard, on_section: F) -> FeedSummary
    where
        F: FnMut(FeedSection, Result<Vec<Movie>, FetchError>),
    {
        HomeFeed::new().load(&self.catalog, scope, on_section).await
    }

    pub fn shutdown(mut self) {
        let bookmarked = self.wishlist.len();
        self.wishlist.clear();
        info!("App context shut down, discarded {} wishlist entries", bookmarked);
    }
}

/// Merge environment credentials with the credential file under `paths`
pub fn resolve_credentials(paths: &PathManager, env: Credentials) -> anyhow::Result<Credentials> {
    let mut store = CredentialStore::new(paths.credentials_file());
    store
        .load()
        .with_context(|| format!("Failed to read {}", paths.credentials_file().display()))?;
    Ok(Credentials::resolve(env, &store))
}

/// Changes to apply to `credentials.toml`
#[derive(Debug, Default)]
pub struct CredentialUpdate {
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    /// Forget both stored values before applying the others
    pub clear: bool,
}

/// Apply `update` to the credential file under `paths` and return what is stored afterwards
pub fn store_credentials(paths: &PathManager, update: CredentialUpdate) -> anyhow::Result<Credentials> {
    let mut store = CredentialStore::new(paths.credentials_file());
    store.load()?;

    if update.clear {
        store.remove_api_key();
        store.remove_access_token();
    }
    if let Some(api_key) = update.api_key.filter(|k| !k.trim().is_empty()) {
        store.set_api_key(api_key);
    }
    if let Some(token) = update.access_token.filter(|t| !t.trim().is_empty()) {
        store.set_access_token(token);
    }

    paths.ensure_directories()?;
    store
        .save()
        .with_context(|| format!("Failed to write {}", paths.credentials_file().display()))?;
    info!("Updated credentials in {}", paths.credentials_file().display());

    Ok(Credentials::resolve(Credentials::default(), &store))
}

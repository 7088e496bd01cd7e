use cinemix_api::Gateway;
use cinemix_config::{Config, CredentialStore, PathManager, SessionStore};
use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::i18n::Catalog;

/// Everything a command needs, assembled once at startup: paths, effective
/// settings, the locale catalog and the hydrated session/credential
/// stores. Injected into commands explicitly; there is no global state.
pub struct AppContext {
    pub paths: PathManager,
    pub config: Config,
    pub catalog: Catalog,
    pub credentials: CredentialStore,
    pub session: SessionStore,
}

impl AppContext {
    /// Resolution order for the API root: `--api-url` flag, then
    /// `CINEMIX_API_URL`, then the config file, then the built-in default.
    /// Same for the language, minus the env var.
    pub fn init(api_url: Option<String>, lang: Option<String>) -> Result<Self> {
        let paths = PathManager::default();
        paths
            .ensure_directories()
            .map_err(|err| eyre!("Failed to create config directory: {}", err))?;
        let mut config = Config::load_or_default(&paths.config_file()).map_err(|err| {
            eyre!(
                "Failed to load config from {}: {}",
                paths.config_file().display(),
                err
            )
        })?;

        if let Ok(url) = std::env::var("CINEMIX_API_URL") {
            config.api_url = url;
        }
        if let Some(url) = api_url {
            config.api_url = url;
        }
        if let Some(lang) = lang {
            config.language = lang;
        }

        let catalog = Catalog::load(&config.language);

        let mut credentials = CredentialStore::new(paths.credentials_file());
        credentials
            .load()
            .map_err(|err| eyre!("Failed to load credentials: {}", err))?;

        let mut session = SessionStore::new(paths.session_file());
        session
            .load()
            .map_err(|err| eyre!("Failed to load session: {}", err))?;

        Ok(Self {
            paths,
            config,
            catalog,
            credentials,
            session,
        })
    }

    /// A gateway carrying whatever access token durable storage has now.
    pub fn gateway(&self) -> Gateway {
        Gateway::from_credentials(&self.config.api_url, &self.credentials)
    }
}

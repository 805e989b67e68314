use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use macsign_core::{Context, Error, ProvideCredential, Result};
use serde::Deserialize;

use crate::config::Config;
use crate::constants::DEFAULT_PROFILE;
use crate::Credential;

/// ProfileCredentialProvider loads credentials from a TOML credentials file.
///
/// The file defaults to `~/.bracket/credentials.toml`; `BRACKET_CONFIG_FILE`
/// overrides it and `BRACKET_PROFILE` selects a profile:
///
/// ```toml
/// identity = "uuid"
/// credential = "apikey"
///
/// [profile.staging]
/// identity = "staging-uuid"
/// credential = "staging-apikey"
/// ```
///
/// The `default` profile reads `[profile.default]` if present, otherwise the
/// top level keys. A missing file or profile yields no credential; a file
/// that isn't valid TOML is a [`ConfigInvalid`](macsign_core::ErrorKind::ConfigInvalid) error.
#[derive(Debug, Default)]
pub struct ProfileCredentialProvider {
    config: Arc<Config>,
}

impl ProfileCredentialProvider {
    /// Create a new ProfileCredentialProvider reading its settings from env.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new ProfileCredentialProvider with the given config.
    ///
    /// Unset fields are still filled from env on every load.
    pub fn with_config(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CredentialsFile {
    identity: Option<String>,
    credential: Option<String>,
    #[serde(default)]
    profile: HashMap<String, ProfileSection>,
}

#[derive(Debug, Deserialize)]
struct ProfileSection {
    identity: Option<String>,
    credential: Option<String>,
}

#[async_trait]
impl ProvideCredential for ProfileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.as_ref().clone().from_env(ctx);

        let path = ctx.expand_home_dir(config.config_file()).ok_or_else(|| {
            Error::unexpected(format!(
                "failed to expand home dir for {}",
                config.config_file()
            ))
        })?;

        let content = match ctx.file_read_as_string(&path).await {
            Ok(content) => content,
            Err(_) => {
                debug!("bracket credentials file not found at {path:?}");
                return Ok(None);
            }
        };

        let file: CredentialsFile = toml::from_str(&content).map_err(|e| {
            Error::config_invalid(format!("failed to parse credentials file {path}"))
                .with_source(e)
        })?;

        let profile = config.profile();
        let (identity, credential) = match file.profile.get(profile) {
            Some(section) => (section.identity.clone(), section.credential.clone()),
            None if profile == DEFAULT_PROFILE => (file.identity, file.credential),
            None => {
                debug!("profile {profile} not found in {path:?}");
                return Ok(None);
            }
        };

        match (identity, credential) {
            (Some(identity), Some(secret)) => {
                debug!("loaded bracket credential from profile {profile} in {path:?}");
                Ok(Some(Credential { identity, secret }))
            }
            _ => {
                debug!("incomplete profile {profile} in {path:?}, skipping");
                Ok(None)
            }
        }
    }
}

use std::sync::Arc;

use crate::{Config, Credential};
use async_trait::async_trait;
use macsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads bracket credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `BRACKET_IDENTITY`: The MAC key identifier
/// - `BRACKET_CREDENTIAL`: The shared MAC key
///
/// Values set on the [`Config`] take precedence over the environment.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider {
    config: Arc<Config>,
}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new EnvCredentialProvider with the given config.
    pub fn with_config(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.as_ref().clone().from_env(ctx);

        match (config.identity, config.credential) {
            (Some(identity), Some(secret)) => Ok(Some(Credential { identity, secret })),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use macsign_core::StaticEnv;
    use std::collections::HashMap;

    fn ctx_with(envs: &[(&str, &str)]) -> Context {
        Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let ctx = ctx_with(&[(BRACKET_IDENTITY, "uuid"), (BRACKET_CREDENTIAL, "apikey")]);

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!("uuid", cred.identity);
        assert_eq!("apikey", cred.secret);

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_partial_credentials() -> anyhow::Result<()> {
        let ctx = ctx_with(&[(BRACKET_IDENTITY, "uuid")]);
        assert!(EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .is_none());

        let ctx = ctx_with(&[(BRACKET_CREDENTIAL, "apikey")]);
        assert!(EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_config_wins() -> anyhow::Result<()> {
        let ctx = ctx_with(&[(BRACKET_IDENTITY, "env-uuid"), (BRACKET_CREDENTIAL, "env-apikey")]);
        let config = Config::new().with_identity("config-uuid");

        let cred = EnvCredentialProvider::with_config(Arc::new(config))
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!("config-uuid", cred.identity);
        assert_eq!("env-apikey", cred.secret);

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_missing_credentials() -> anyhow::Result<()> {
        let cred = EnvCredentialProvider::new()
            .provide_credential(&Context::new())
            .await?;
        assert!(cred.is_none());

        Ok(())
    }
}

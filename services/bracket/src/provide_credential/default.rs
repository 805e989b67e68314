use std::sync::Arc;

use async_trait::async_trait;
use macsign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

use crate::config::Config;
use crate::credential::Credential;
use crate::provide_credential::{EnvCredentialProvider, ProfileCredentialProvider};

/// DefaultCredentialProvider will try to load credential from different sources.
///
/// Resolution order:
///
/// 1. [`Config`] values, then environment variables
/// 2. Credentials file (`~/.bracket/credentials.toml` unless overridden)
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider
    pub fn new() -> Self {
        Self::with_config(Arc::new(Config::default()))
    }

    /// Create a new DefaultCredentialProvider whose providers share `config`.
    pub fn with_config(config: Arc<Config>) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(EnvCredentialProvider::with_config(config.clone()))
            .push(ProfileCredentialProvider::with_config(config));

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    /// Add a credential provider to the front of the default chain.
    ///
    /// This allows adding a high-priority credential source that will be tried
    /// before all other providers in the default chain.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use macsign_bracket::{DefaultCredentialProvider, StaticCredentialProvider};
    ///
    /// let provider = DefaultCredentialProvider::new()
    ///     .push_front(StaticCredentialProvider::new("uuid", "apikey"));
    /// ```
    pub fn push_front(mut self, provider: impl ProvideCredential<Credential = Credential>) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::StaticCredentialProvider;
    use macsign_core::StaticEnv;
    use macsign_file_read_tokio::TokioFileRead;
    use std::collections::HashMap;
    use std::io::Write;

    #[tokio::test]
    async fn test_default_loader_without_env() {
        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: None,
                envs: HashMap::new(),
            });

        let loader = DefaultCredentialProvider::new();
        let credential = loader.provide_credential(&ctx).await.unwrap();

        assert!(credential.is_none());
    }

    #[tokio::test]
    async fn test_default_loader_with_env() {
        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: None,
                envs: HashMap::from_iter([
                    (BRACKET_IDENTITY.to_string(), "uuid".to_string()),
                    (BRACKET_CREDENTIAL.to_string(), "apikey".to_string()),
                ]),
            });

        let loader = DefaultCredentialProvider::new();
        let credential = loader.provide_credential(&ctx).await.unwrap().unwrap();

        assert_eq!("uuid", credential.identity);
        assert_eq!("apikey", credential.secret);
    }

    #[tokio::test]
    async fn test_default_loader_falls_back_to_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"identity = \"file-uuid\"\ncredential = \"file-apikey\"\n")
            .unwrap();

        // An empty env credential is invalid and must not shadow the file.
        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: None,
                envs: HashMap::from_iter([
                    (BRACKET_IDENTITY.to_string(), "uuid".to_string()),
                    (BRACKET_CREDENTIAL.to_string(), String::new()),
                    (
                        BRACKET_CONFIG_FILE.to_string(),
                        f.path().to_string_lossy().to_string(),
                    ),
                ]),
            });

        let credential = DefaultCredentialProvider::new()
            .provide_credential(&ctx)
            .await
            .unwrap()
            .unwrap();

        assert_eq!("file-uuid", credential.identity);
        assert_eq!("file-apikey", credential.secret);
    }

    #[tokio::test]
    async fn test_default_loader_push_front() {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from_iter([
                (BRACKET_IDENTITY.to_string(), "uuid".to_string()),
                (BRACKET_CREDENTIAL.to_string(), "apikey".to_string()),
            ]),
        });

        let credential = DefaultCredentialProvider::new()
            .push_front(StaticCredentialProvider::new("static-uuid", "static-apikey"))
            .provide_credential(&ctx)
            .await
            .unwrap()
            .unwrap();

        assert_eq!("static-uuid", credential.identity);
    }
}

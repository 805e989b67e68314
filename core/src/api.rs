use crate::{Context, Result};
use std::fmt::{self, Debug};

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential from the environment.
///
/// The credential is fetched again for every request, so implementations that
/// refresh credentials must hand out a complete, immutable value per call.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this loader.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load signing credential from current env.
    ///
    /// Returns `Ok(None)` if this source has no credential to offer.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to sign the request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this builder.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request in place.
    ///
    /// ## Credential
    ///
    /// The `credential` parameter is the snapshot fetched for this request only.
    /// Implementations must not keep it.
    ///
    /// ## Failure
    ///
    /// On error `req` must be left exactly as it was passed in: a request is
    /// either fully signed or untouched.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}

/// A chain of credential providers that will be tried in order.
///
/// The first provider returning a valid credential wins. Providers that return
/// nothing, return an invalid credential, or fail are skipped.
pub struct ProvideCredentialChain<C> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C: SigningCredential> ProvideCredentialChain<C> {
    /// Create a new empty credential provider chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a credential provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Add a credential provider to the front of the chain.
    pub fn push_front(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.insert(0, Box::new(provider));
        self
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl<C: SigningCredential> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers", &self.providers)
            .finish()
    }
}

#[async_trait::async_trait]
impl<C: SigningCredential> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            log::debug!("trying credential provider: {provider:?}");

            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) if cred.is_valid() => {
                    log::debug!("loaded credential from provider: {provider:?}");
                    return Ok(Some(cred));
                }
                Ok(Some(_)) => {
                    log::debug!("provider {provider:?} returned an invalid credential, skipped");
                }
                Ok(None) => {
                    log::debug!("no credential found in provider: {provider:?}");
                }
                Err(e) => {
                    log::warn!("error loading credential from provider {provider:?}: {e:?}");
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Clone, Debug, PartialEq)]
    struct TestCredential(String);

    impl SigningCredential for TestCredential {
        fn is_valid(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[derive(Debug)]
    enum Mock {
        Some(&'static str),
        None,
        Fail,
    }

    #[async_trait::async_trait]
    impl ProvideCredential for Mock {
        type Credential = TestCredential;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            match self {
                Mock::Some(v) => Ok(Some(TestCredential(v.to_string()))),
                Mock::None => Ok(None),
                Mock::Fail => Err(Error::config_invalid("mock provider failed")),
            }
        }
    }

    #[tokio::test]
    async fn test_chain_skips_none_errors_and_invalid() {
        let _ = env_logger::builder().is_test(true).try_init();

        let chain = ProvideCredentialChain::new()
            .push(Mock::None)
            .push(Mock::Fail)
            .push(Mock::Some(""))
            .push(Mock::Some("second"))
            .push(Mock::Some("third"));
        assert_eq!(5, chain.len());

        let cred = chain.provide_credential(&Context::new()).await.unwrap();
        assert_eq!(Some(TestCredential("second".to_string())), cred);
    }

    #[tokio::test]
    async fn test_chain_push_front() {
        let chain = ProvideCredentialChain::new()
            .push(Mock::Some("back"))
            .push_front(Mock::Some("front"));

        let cred = chain.provide_credential(&Context::new()).await.unwrap();
        assert_eq!(Some(TestCredential("front".to_string())), cred);
    }

    #[tokio::test]
    async fn test_empty_chain() {
        let chain = ProvideCredentialChain::<TestCredential>::new();
        assert!(chain.is_empty());
        assert_eq!(None, chain.provide_credential(&Context::new()).await.unwrap());
    }

    #[test]
    fn test_option_credential_validity() {
        assert!(!None::<TestCredential>.is_valid());
        assert!(!Some(TestCredential(String::new())).is_valid());
        assert!(Some(TestCredential("k".to_string())).is_valid());
    }
}

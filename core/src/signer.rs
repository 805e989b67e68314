use crate::{Context, Error, ProvideCredential, Result, SignRequest, SigningCredential};
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// A fresh credential snapshot is fetched for every request and dropped once
/// the request is signed, so a refreshed credential takes effect on the next
/// call. `Signer` is cheap to clone and safe to share across tasks.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
        }
    }

    /// Get the context used by this signer.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Sign the request in place.
    ///
    /// On error `req` is left untouched and must not be sent.
    pub async fn sign(&self, req: &mut http::request::Parts) -> Result<()> {
        let cred = self
            .loader
            .provide_credential(&self.ctx)
            .await
            .map_err(|e| {
                Error::credential_unavailable("failed to load credential").with_source(e)
            })?
            .ok_or_else(|| Error::credential_unavailable("no credential configured"))?;

        self.builder
            .sign_request(&self.ctx, req, Some(&cred))
            .await
    }

    /// Return a signed copy of `req`, leaving the original as it was.
    ///
    /// Retrying callers keep the unsigned original and call this again, which
    /// yields a new timestamp and nonce.
    pub async fn signed<B: Clone>(&self, req: &http::Request<B>) -> Result<http::Request<B>> {
        let (mut parts, body) = req.clone().into_parts();
        self.sign(&mut parts).await?;
        Ok(http::Request::from_parts(parts, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::AUTHORIZATION;
    use http::request::Parts;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Debug)]
    struct Token(String);

    impl SigningCredential for Token {
        fn is_valid(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[derive(Debug, Default)]
    struct Rotating {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl ProvideCredential for Rotating {
        type Credential = Token;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(Token(format!("token-{n}"))))
        }
    }

    #[derive(Debug)]
    struct Missing;

    #[async_trait::async_trait]
    impl ProvideCredential for Missing {
        type Credential = Token;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            Ok(None)
        }
    }

    #[derive(Debug)]
    struct Bearer;

    #[async_trait::async_trait]
    impl SignRequest for Bearer {
        type Credential = Token;

        async fn sign_request(
            &self,
            _: &Context,
            req: &mut Parts,
            credential: Option<&Self::Credential>,
        ) -> Result<()> {
            let cred = credential.ok_or_else(|| Error::credential_unavailable("missing"))?;
            req.headers
                .insert(AUTHORIZATION, format!("Bearer {}", cred.0).parse()?);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_credential_fetched_per_request() -> anyhow::Result<()> {
        let signer = Signer::new(Context::new(), Rotating::default(), Bearer);
        let req = http::Request::get("https://portal.brkt.com/v1").body(())?;

        let first = signer.signed(&req).await?;
        let second = signer.signed(&req).await?;

        assert_eq!("Bearer token-0", first.headers()[AUTHORIZATION]);
        assert_eq!("Bearer token-1", second.headers()[AUTHORIZATION]);
        assert!(req.headers().get(AUTHORIZATION).is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_credential() -> anyhow::Result<()> {
        let signer = Signer::new(Context::new(), Missing, Bearer);
        let (mut parts, _) = http::Request::get("https://portal.brkt.com/v1")
            .header("x-request-id", "1")
            .body(())?
            .into_parts();
        let before = parts.headers.clone();

        let err = signer.sign(&mut parts).await.unwrap_err();
        assert_eq!(crate::ErrorKind::CredentialUnavailable, err.kind());
        assert_eq!(before, parts.headers);
        Ok(())
    }
}

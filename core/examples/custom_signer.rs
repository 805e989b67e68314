use async_trait::async_trait;
use http::header::{HeaderName, HeaderValue};
use http::request::Parts;
use macsign_core::hash::base64_hmac_sha256;
use macsign_core::utils::Redact;
use macsign_core::{
    Context, Error, OsEnv, ProvideCredential, Result, SignRequest, Signer, SigningCredential,
    SigningRequest,
};
use std::fmt::{self, Debug};

// A credential for a service signing requests with its own header.
#[derive(Clone)]
struct ApiKey {
    key_id: String,
    secret: String,
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("key_id", &self.key_id)
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}

impl SigningCredential for ApiKey {
    fn is_valid(&self) -> bool {
        !self.key_id.is_empty() && !self.secret.is_empty()
    }
}

#[derive(Debug)]
struct EnvApiKeyProvider;

#[async_trait]
impl ProvideCredential for EnvApiKeyProvider {
    type Credential = ApiKey;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let (Some(key_id), Some(secret)) =
            (ctx.env_var("MY_API_KEY_ID"), ctx.env_var("MY_API_SECRET"))
        else {
            println!("MY_API_KEY_ID/MY_API_SECRET not set, using demo credentials");
            return Ok(Some(ApiKey {
                key_id: "demo-key".to_string(),
                secret: "demo-secret".to_string(),
            }));
        };

        Ok(Some(ApiKey { key_id, secret }))
    }
}

// Signs `<ts>\n<nonce>\n<METHOD>\n<path>` into `x-api-signature`.
#[derive(Debug)]
struct HeaderSigner;

#[async_trait]
impl SignRequest for HeaderSigner {
    type Credential = ApiKey;

    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_unavailable("no api key"))?;
        let signing = SigningRequest::build(req)?;

        let ts = ctx.now_seconds();
        let nonce = ctx.nonce();
        let content = format!("{ts}\n{nonce}\n{}\n{}", signing.method, signing.path);
        let signature = base64_hmac_sha256(cred.secret.as_bytes(), content.as_bytes())?;

        let value = format!("key={}, ts={ts}, nonce={nonce}, sig={signature}", cred.key_id);
        let mut value = HeaderValue::from_str(&value)?;
        value.set_sensitive(true);

        req.headers
            .insert(HeaderName::from_static("x-api-signature"), value);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new().with_env(OsEnv);
    let signer = Signer::new(ctx, EnvApiKeyProvider, HeaderSigner);

    let mut parts = http::Request::get("https://api.example.com/v1/users")
        .body(())?
        .into_parts()
        .0;

    match signer.sign(&mut parts).await {
        Ok(()) => println!("signed headers: {:?}", parts.headers),
        Err(e) => eprintln!("failed to sign request: {e}"),
    }

    Ok(())
}

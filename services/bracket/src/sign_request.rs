//! Bracket cell API request signer.
use std::fmt::Write;

use http::header::AUTHORIZATION;
use http::request::Parts;
use http::HeaderValue;
use log::debug;
use macsign_core::hash::{base64_decode, base64_hmac_sha256, verify_hmac_sha256};
use macsign_core::{Context, Error, Result, SignRequest, SigningRequest};

use crate::authorization::MacAuthorization;
use crate::credential::Credential;

/// RequestSigner that implements HTTP MAC access authentication for the
/// bracket cell API.
///
/// The timestamp and nonce come from the [`Context`] clock and nonce
/// generator, so every call yields a new signature.
///
/// - [HTTP Authentication: MAC Access Authentication](https://datatracker.ietf.org/doc/html/draft-ietf-oauth-v2-http-mac-01)
#[derive(Debug, Default)]
pub struct RequestSigner {}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        ctx: &Context,
        parts: &mut Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred =
            credential.ok_or_else(|| Error::credential_unavailable("missing credential"))?;
        if cred.secret.is_empty() {
            return Err(Error::signing_failure(
                "hmac-sha256 requires a non-empty secret",
            ));
        }
        if !is_quotable(&cred.identity) {
            return Err(Error::credential_invalid(
                "identity must be visible ASCII without `\"`",
            ));
        }

        let req = SigningRequest::build(parts)?;

        let ts = ctx.now_seconds();
        if ts < 0 {
            return Err(Error::signing_failure(format!(
                "clock returned a timestamp before the unix epoch: {ts}"
            )));
        }
        let nonce = ctx.nonce();

        let string_to_sign = string_to_sign(&req, ts, &nonce)?;
        let mac = base64_hmac_sha256(cred.secret.as_bytes(), string_to_sign.as_bytes())?;

        let authorization = MacAuthorization {
            id: cred.identity.clone(),
            ts,
            nonce,
            mac,
        };
        let mut value = HeaderValue::from_str(&authorization.to_string()).map_err(|e| {
            Error::signing_failure("authorization is not a valid header value").with_source(e)
        })?;
        value.set_sensitive(true);

        // Everything fallible is done, so the request is only touched here.
        parts.headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// Timestamp + "\n" +
/// Nonce + "\n" +
/// HTTP-Method + "\n" +
/// Request-URI-Path + "\n" +
/// Host + "\n" +
/// Port + "\n" +
/// Ext + "\n"
/// ```
///
/// `Ext` is always empty, which leaves the string ending in `"\n\n"`.
///
/// ## Reference
///
/// - [Normalized Request String](https://datatracker.ietf.org/doc/html/draft-ietf-oauth-v2-http-mac-01#section-3.2.1)
pub fn string_to_sign(req: &SigningRequest, timestamp: i64, nonce: &str) -> Result<String> {
    if !is_quotable(nonce) {
        return Err(Error::signing_failure(
            "nonce must be visible ASCII without `\"`",
        ));
    }

    let mut s = String::with_capacity(64 + req.path.len() + req.host.len());
    writeln!(&mut s, "{timestamp}")?;
    writeln!(&mut s, "{nonce}")?;
    writeln!(&mut s, "{}", req.method)?;
    writeln!(&mut s, "{}", req.path)?;
    writeln!(&mut s, "{}", req.host)?;
    writeln!(&mut s, "{}", req.port)?;
    s.push('\n');

    debug!("string to sign: {:?}", &s);
    Ok(s)
}

/// Verify the `Authorization` header of a signed request against `secret`.
///
/// The canonical string is rebuilt from the request and the header's own
/// `ts` and `nonce`. Returns `Ok(false)` if the MAC doesn't match. Checking
/// clock skew and nonce reuse is left to the caller.
pub fn verify_request(parts: &Parts, secret: &str) -> Result<bool> {
    if secret.is_empty() {
        return Err(Error::signing_failure(
            "hmac-sha256 requires a non-empty secret",
        ));
    }

    let value = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::request_invalid("request has no authorization header"))?;
    let authorization: MacAuthorization = value.to_str()?.parse()?;

    let req = SigningRequest::build(parts)?;
    let string_to_sign = string_to_sign(&req, authorization.ts, &authorization.nonce)?;

    let Ok(expected) = base64_decode(&authorization.mac) else {
        return Ok(false);
    };
    verify_hmac_sha256(secret.as_bytes(), string_to_sign.as_bytes(), &expected)
}

/// Whether `v` can sit inside a quoted field of the `Authorization` header
/// and still be read back as a string.
fn is_quotable(v: &str) -> bool {
    v.bytes().all(|b| b.is_ascii_graphic() && b != b'"')
}

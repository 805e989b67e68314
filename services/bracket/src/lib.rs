//! Signers for the Bracket Computing cell API.
//!
//! Every request is authenticated with an `Authorization` header following
//! [HTTP MAC Access Authentication](https://datatracker.ietf.org/doc/html/draft-ietf-oauth-v2-http-mac-01),
//! keyed with HMAC-SHA256.
//!
//! ```no_run
//! use macsign_bracket::{DefaultCredentialProvider, RequestSigner};
//! use macsign_core::{Context, OsEnv, Signer};
//! use macsign_file_read_tokio::TokioFileRead;
//!
//! # async fn example() -> macsign_core::Result<()> {
//! let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);
//! let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());
//!
//! let req = http::Request::get("https://portal.brkt.com/v1/api/v1/workload").body(())?;
//! let req = signer.signed(&req).await?;
//! # Ok(())
//! # }
//! ```

mod authorization;
pub use authorization::MacAuthorization;

mod config;
pub use config::Config;

mod constants;
pub use constants::*;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::{string_to_sign, verify_request, RequestSigner};

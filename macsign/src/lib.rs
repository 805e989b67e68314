//! Sign HTTP requests with MAC access authentication.
//!
//! This crate bundles [`macsign_core`] with the service implementations
//! behind feature flags:
//!
//! - `bracket`: the Bracket Computing portal API signer.
//! - `default-context`: a [`Context`] reading files with tokio and
//!   environment from the OS.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> macsign::Result<()> {
//! let signer = macsign::bracket::default_signer();
//!
//! let mut parts = http::Request::get("https://portal.brkt.com/v1/api/v1/workload")
//!     .body(())
//!     .expect("request must be valid")
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts).await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use macsign_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

#[cfg(feature = "bracket")]
pub mod bracket;

// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Bracket portal API signing with convenience APIs.

pub use macsign_bracket::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Signer};

/// Default Bracket signer type.
#[cfg(feature = "default-context")]
pub type DefaultSigner = Signer<Credential>;

/// Create a Bracket signer with the standard setup:
///
/// - [`default_context`](crate::default_context) for files and environment
/// - [`DefaultCredentialProvider`] reading `BRACKET_IDENTITY`/`BRACKET_CREDENTIAL`,
///   then `~/.bracket/credentials.toml`
/// - [`RequestSigner`] producing the `MAC` authorization header
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> macsign::Result<()> {
/// let signer = macsign::bracket::default_signer();
///
/// let req = http::Request::delete("https://portal.brkt.com/v1/api/v1/workload/42")
///     .body(())
///     .expect("request must be valid");
/// let signed = signer.signed(&req).await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer() -> DefaultSigner {
    let ctx = default_context();
    let provider = DefaultCredentialProvider::new();
    let signer = RequestSigner::new();
    Signer::new(ctx, provider, signer)
}

/// Create a Bracket signer with a fixed credential on top of the default context.
#[cfg(feature = "default-context")]
pub fn static_signer(identity: &str, secret: &str) -> DefaultSigner {
    Signer::new(
        default_context(),
        StaticCredentialProvider::new(identity, secret),
        RequestSigner::new(),
    )
}

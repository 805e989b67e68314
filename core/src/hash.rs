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

//! Hash related utils.

use crate::{Error, Result};
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Base64 encode
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}

/// Base64 decode
pub fn base64_decode(content: &str) -> Result<Vec<u8>> {
    BASE64_STANDARD
        .decode(content)
        .map_err(|e| Error::unexpected("base64 decode failed").with_source(e))
}

fn new_hmac_sha256(key: &[u8]) -> Result<HmacSha256> {
    HmacSha256::new_from_slice(key)
        .map_err(|_| Error::signing_failure("hmac-sha256 rejected the signing key"))
}

/// HMAC with SHA256 hash.
pub fn hmac_sha256(key: &[u8], content: &[u8]) -> Result<Vec<u8>> {
    let mut h = new_hmac_sha256(key)?;
    h.update(content);

    Ok(h.finalize().into_bytes().to_vec())
}

/// Base64 encoded HMAC with SHA256 hash.
///
/// Use this function instead of `base64_encode(hmac_sha256(key, content))` can
/// reduce extra copy.
pub fn base64_hmac_sha256(key: &[u8], content: &[u8]) -> Result<String> {
    let mut h = new_hmac_sha256(key)?;
    h.update(content);

    Ok(base64_encode(&h.finalize().into_bytes()))
}

/// Check `expected` against the HMAC-SHA256 of `content` in constant time.
pub fn verify_hmac_sha256(key: &[u8], content: &[u8], expected: &[u8]) -> Result<bool> {
    let mut h = new_hmac_sha256(key)?;
    h.update(content);

    Ok(h.verify_slice(expected).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // RFC 4231, test case 2.
    #[test]
    fn test_hmac_sha256_rfc4231() {
        let mac = hmac_sha256(b"Jefe", b"what do ya want for nothing?").unwrap();
        assert_eq!(
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
            mac.iter().map(|b| format!("{b:02x}")).collect::<String>()
        );
    }

    #[test]
    fn test_base64_hmac_sha256() {
        let mac = base64_hmac_sha256(b"Jefe", b"what do ya want for nothing?").unwrap();
        assert_eq!("W9zBRr9gdU5qBCQmCJV1x1oAPwidJzmDnexYuWTsOEM=", mac);
    }

    #[test]
    fn test_verify_hmac_sha256() {
        let mac = hmac_sha256(b"secret", b"content").unwrap();
        assert!(verify_hmac_sha256(b"secret", b"content", &mac).unwrap());
        assert!(!verify_hmac_sha256(b"other", b"content", &mac).unwrap());
        assert!(!verify_hmac_sha256(b"secret", b"content!", &mac).unwrap());
        assert!(!verify_hmac_sha256(b"secret", b"content", &mac[..16]).unwrap());
    }

    #[test]
    fn test_base64_decode_invalid() {
        assert!(base64_decode("not base64!").is_err());
        assert_eq!(b"hello".to_vec(), base64_decode("aGVsbG8=").unwrap());
    }
}

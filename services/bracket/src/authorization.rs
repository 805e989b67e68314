//! The `Authorization` header value of MAC access authentication.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use macsign_core::Error;

use crate::constants::MAC_SCHEME;

/// Parsed form of `MAC id="..", ts="..", nonce="..", mac=".."`.
///
/// The field order and quoting are fixed by the server side verifier, so
/// [`Display`] and [`FromStr`] only accept this exact layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacAuthorization {
    /// MAC key identifier.
    pub id: String,
    /// Unix timestamp in seconds used while signing.
    pub ts: i64,
    /// Nonce used while signing.
    pub nonce: String,
    /// Base64 encoded HMAC-SHA256 over the canonical string.
    pub mac: String,
}

impl Display for MacAuthorization {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"{MAC_SCHEME} id="{}", ts="{}", nonce="{}", mac="{}""#,
            self.id, self.ts, self.nonce, self.mac
        )
    }
}

impl FromStr for MacAuthorization {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| {
            Error::request_invalid(format!("malformed MAC authorization header: {reason}"))
        };

        let mut rest = s
            .strip_prefix(MAC_SCHEME)
            .and_then(|v| v.strip_prefix(' '))
            .ok_or_else(|| invalid("missing MAC scheme"))?;

        let mut fields = [""; 4];
        for (idx, name) in ["id", "ts", "nonce", "mac"].into_iter().enumerate() {
            if idx > 0 {
                rest = rest
                    .strip_prefix(", ")
                    .ok_or_else(|| invalid("fields must be separated by \", \""))?;
            }

            let quoted = rest
                .strip_prefix(name)
                .and_then(|v| v.strip_prefix("=\""))
                .ok_or_else(|| invalid(&format!("expect field `{name}`")))?;
            let end = quoted
                .find('"')
                .ok_or_else(|| invalid(&format!("unterminated field `{name}`")))?;

            fields[idx] = &quoted[..end];
            rest = &quoted[end + 1..];
        }

        if !rest.is_empty() {
            return Err(invalid("unexpected trailing data"));
        }

        let [id, ts, nonce, mac] = fields;
        if ts.is_empty() || !ts.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("`ts` must be decimal seconds"));
        }
        let ts = ts
            .parse()
            .map_err(|e| invalid("`ts` out of range").with_source(e))?;

        Ok(MacAuthorization {
            id: id.to_string(),
            ts,
            nonce: nonce.to_string(),
            mac: mac.to_string(),
        })
    }
}

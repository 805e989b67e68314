use http::request::Parts;

use crate::{Error, Result};

/// The signable attributes of an outgoing request.
///
/// Built from a borrowed [`Parts`] so the request itself is never touched
/// while a signature is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequest {
    /// HTTP method, upper-cased.
    pub method: String,
    /// URI scheme, `http` if the request has none.
    pub scheme: String,
    /// Host name without port, lower-cased.
    pub host: String,
    /// Effective port.
    pub port: u16,
    /// Request-target path, query excluded.
    pub path: String,
}

impl SigningRequest {
    /// Build a signing request from http::request::Parts.
    ///
    /// Fails with [`ErrorKind::RequestInvalid`](crate::ErrorKind::RequestInvalid)
    /// if the URI carries no host.
    pub fn build(parts: &Parts) -> Result<Self> {
        let uri = &parts.uri;

        let host = match uri.host() {
            Some(host) if !host.is_empty() => host.to_ascii_lowercase(),
            _ => {
                return Err(Error::request_invalid(format!(
                    "request without host is invalid for signing: {uri}"
                )))
            }
        };
        let scheme = uri.scheme_str().unwrap_or("http").to_string();
        let port = uri
            .port_u16()
            .unwrap_or_else(|| Self::default_port(&scheme));

        Ok(SigningRequest {
            method: parts.method.as_str().to_ascii_uppercase(),
            scheme,
            host,
            port,
            path: uri.path().to_string(),
        })
    }

    /// Port used when the URI doesn't carry one: `443` for https, `80` otherwise.
    pub fn default_port(scheme: &str) -> u16 {
        if scheme.eq_ignore_ascii_case("https") {
            443
        } else {
            80
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn parts(method: &str, uri: &str) -> Parts {
        http::Request::builder()
            .method(method)
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[test_case("https://portal.brkt.com/v1/api/v1/workload", 443; "https default")]
    #[test_case("http://portal.brkt.com/v1/api/v1/workload", 80; "http default")]
    #[test_case("HTTPS://portal.brkt.com/v1", 443; "scheme case insensitive")]
    #[test_case("https://portal.brkt.com:8443/v1", 8443; "explicit port wins")]
    #[test_case("http://portal.brkt.com:443/v1", 443; "explicit port on http")]
    fn test_port(uri: &str, expected: u16) {
        let req = SigningRequest::build(&parts("GET", uri)).unwrap();
        assert_eq!(expected, req.port);
    }

    #[test]
    fn test_build() {
        let req = SigningRequest::build(&parts(
            "post",
            "https://Portal.BRKT.com/v1/api/v1/workload?zone=a&x=1",
        ))
        .unwrap();

        assert_eq!(
            SigningRequest {
                method: "POST".to_string(),
                scheme: "https".to_string(),
                host: "portal.brkt.com".to_string(),
                port: 443,
                path: "/v1/api/v1/workload".to_string(),
            },
            req
        );
    }

    #[test]
    fn test_build_without_path() {
        let req = SigningRequest::build(&parts("GET", "http://example.com")).unwrap();
        assert_eq!("/", req.path);
    }

    #[test]
    fn test_build_without_host() {
        let err = SigningRequest::build(&parts("GET", "/resource/1")).unwrap_err();
        assert_eq!(crate::ErrorKind::RequestInvalid, err.kind());
    }

    #[test]
    fn test_default_port() {
        assert_eq!(443, SigningRequest::default_port("https"));
        assert_eq!(80, SigningRequest::default_port("http"));
        assert_eq!(80, SigningRequest::default_port("ws"));
    }
}

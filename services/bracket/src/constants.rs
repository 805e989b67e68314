// Env values used in bracket services.
pub const BRACKET_IDENTITY: &str = "BRACKET_IDENTITY";
pub const BRACKET_CREDENTIAL: &str = "BRACKET_CREDENTIAL";
pub const BRACKET_CONFIG_FILE: &str = "BRACKET_CONFIG_FILE";
pub const BRACKET_PROFILE: &str = "BRACKET_PROFILE";

/// Credentials file read when `BRACKET_CONFIG_FILE` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "~/.bracket/credentials.toml";
/// Profile read when `BRACKET_PROFILE` is unset.
pub const DEFAULT_PROFILE: &str = "default";

/// Base URL of the Bracket portal API.
pub const DEFAULT_ENDPOINT: &str = "https://portal.brkt.com";
/// Version segment of the API path, as in `/v1/api/...`.
pub const API_VERSION: &str = "1";

/// Scheme token of the `Authorization` header.
pub const MAC_SCHEME: &str = "MAC";

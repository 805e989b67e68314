use std::fmt::{Debug, Formatter};

use macsign_core::{utils::Redact, Context};

use crate::constants::*;

/// Config carries all the configuration for the bracket signer.
#[derive(Clone, Default)]
pub struct Config {
    /// `identity` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`BRACKET_IDENTITY`]
    pub identity: Option<String>,
    /// `credential` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`BRACKET_CREDENTIAL`]
    pub credential: Option<String>,
    /// `config_file` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`BRACKET_CONFIG_FILE`]
    /// - default to [`DEFAULT_CONFIG_FILE`]
    pub config_file: Option<String>,
    /// `profile` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`BRACKET_PROFILE`]
    /// - default to [`DEFAULT_PROFILE`]
    pub profile: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set identity
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Set credential
    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// Set config_file
    pub fn with_config_file(mut self, config_file: impl Into<String>) -> Self {
        self.config_file = Some(config_file.into());
        self
    }

    /// Set profile
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(BRACKET_IDENTITY) {
            self.identity.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(BRACKET_CREDENTIAL) {
            self.credential.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(BRACKET_CONFIG_FILE) {
            self.config_file.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(BRACKET_PROFILE) {
            self.profile.get_or_insert(v);
        }

        self
    }

    /// The credentials file to read, falling back to [`DEFAULT_CONFIG_FILE`].
    pub fn config_file(&self) -> &str {
        self.config_file.as_deref().unwrap_or(DEFAULT_CONFIG_FILE)
    }

    /// The profile to read, falling back to [`DEFAULT_PROFILE`].
    pub fn profile(&self) -> &str {
        self.profile.as_deref().unwrap_or(DEFAULT_PROFILE)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("identity", &self.identity.as_ref().map(Redact::from))
            .field("credential", &self.credential.as_ref().map(Redact::from))
            .field("config_file", &self.config_file)
            .field("profile", &self.profile)
            .finish()
    }
}

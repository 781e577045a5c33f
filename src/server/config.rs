use crate::error::ServerError;
use derive_builder::Builder;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
/// Same ceiling as the usual JSON body parser default (100 KiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;

/// Transport settings for the HTTP server.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(pattern = "owned")]
pub struct ServerConfig {
    #[builder(default = "DEFAULT_HOST.to_owned()", setter(into))]
    pub host: String,
    #[builder(default = "DEFAULT_PORT")]
    pub port: u16,
    /// Answer preflights and allow any origin.
    #[builder(default = "true")]
    pub cors: bool,
    #[builder(default = "DEFAULT_MAX_BODY_BYTES")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            cors: true,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.host.trim().is_empty() {
            return Err(ServerError::InvalidConfig("host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(ServerError::InvalidConfig("port must be >= 1".into()));
        }
        if self.max_body_bytes == 0 {
            return Err(ServerError::InvalidConfig(
                "max_body_bytes must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl ServerConfigBuilder {
    pub fn build_validated(self) -> Result<ServerConfig, ServerError> {
        let config = self
            .build()
            .map_err(|e| ServerError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

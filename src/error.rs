/// Rejected input to one of the roll operations.
///
/// Both variants are the single `InvalidInput` kind; they differ only in the
/// message the transport hands back to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    #[error("Public seed required")]
    PublicSeedRequired,
    #[error("Both publicSeed and secretSeed required")]
    BothSeedsRequired,
}

/// Errors raised while configuring or running the HTTP transport.
#[cfg(feature = "server")]
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

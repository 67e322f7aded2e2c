use thiserror::Error;

pub type Result<T> = std::result::Result<T, CaptureError>;

#[derive(Debug, Error, PartialEq)]
pub enum CaptureError {
    /// A configuration value is out of its valid range.
    #[error("invalid value {value} for `{field}`: must be finite and greater than zero")]
    InvalidConfig { field: &'static str, value: f32 },
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// Errors surfaced by the channel-backed bridge.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BridgeError {
    #[error("bridge receiver was dropped")]
    Disconnected,
}

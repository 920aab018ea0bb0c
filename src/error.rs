//! Error types.
//!
//! Two very different kinds of failure flow through this crate:
//!
//! - [`GatewayError`] is a result code reported by the input runtime. These are
//!   transient: the fetch and refresh paths log them and fall back to a zero
//!   value, so they never reach query callers.
//! - [`InputError`] is returned to callers. Its only per-tick variant is
//!   [`InputError::TypeMismatch`], which means an action was wired up with the
//!   wrong type and the call site has to be fixed.
//!
//! [`ConfigError`] covers loading configuration and manifest files.

use crate::action::ActionType;
use std::path::PathBuf;
use thiserror::Error;

/// Result code reported by the input runtime for a failed call.
///
/// Variants follow the runtime's `EVRInputError` numbering so that the raw
/// code can be logged and compared against the runtime's own documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GatewayError {
    #[error("name not found")]
    NameNotFound,
    #[error("wrong type")]
    WrongType,
    #[error("invalid handle")]
    InvalidHandle,
    #[error("invalid param")]
    InvalidParam,
    #[error("no steam")]
    NoSteam,
    #[error("max capacity reached")]
    MaxCapacityReached,
    #[error("ipc error")]
    IpcError,
    #[error("no active action set")]
    NoActiveActionSet,
    #[error("invalid device")]
    InvalidDevice,
    #[error("no data")]
    NoData,
    #[error("buffer too small")]
    BufferTooSmall,
    #[error("mismatched action manifest")]
    MismatchedActionManifest,
    #[error("invalid priority")]
    InvalidPriority,
    #[error("permission denied")]
    PermissionDenied,
    /// Any other non-success code.
    #[error("unknown runtime error")]
    Other(i32),
}

impl GatewayError {
    /// Map a raw runtime result code. `0` is success and yields `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        let err = match code {
            0 => return None,
            1 => Self::NameNotFound,
            2 => Self::WrongType,
            3 => Self::InvalidHandle,
            4 => Self::InvalidParam,
            5 => Self::NoSteam,
            6 => Self::MaxCapacityReached,
            7 => Self::IpcError,
            8 => Self::NoActiveActionSet,
            9 => Self::InvalidDevice,
            13 => Self::NoData,
            14 => Self::BufferTooSmall,
            15 => Self::MismatchedActionManifest,
            18 => Self::InvalidPriority,
            19 => Self::PermissionDenied,
            other => Self::Other(other),
        };
        Some(err)
    }

    /// Raw runtime result code.
    pub fn code(self) -> i32 {
        match self {
            Self::NameNotFound => 1,
            Self::WrongType => 2,
            Self::InvalidHandle => 3,
            Self::InvalidParam => 4,
            Self::NoSteam => 5,
            Self::MaxCapacityReached => 6,
            Self::IpcError => 7,
            Self::NoActiveActionSet => 8,
            Self::InvalidDevice => 9,
            Self::NoData => 13,
            Self::BufferTooSmall => 14,
            Self::MismatchedActionManifest => 15,
            Self::InvalidPriority => 18,
            Self::PermissionDenied => 19,
            Self::Other(code) => code,
        }
    }
}

/// Errors returned to callers of the fetch and query APIs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Data of one type was requested for an action declared with another.
    #[error("action {action} is declared {declared:?} but {requested:?} data was requested")]
    TypeMismatch {
        action: String,
        declared: ActionType,
        requested: ActionType,
    },
}

/// Errors raised while loading configuration or manifest files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to encode config: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("invalid action manifest: {0}")]
    Json(#[from] serde_json::Error),
}

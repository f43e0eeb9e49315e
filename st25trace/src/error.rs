// st25trace-rs/st25trace/src/error.rs

use crate::types::Timestamp;
use thiserror::Error;

/// Decoding error type.
///
/// The decoder is a best-effort annotator: unrecognized opcodes and unmapped
/// register addresses are not errors (they degrade to `?` placeholders in the
/// emitted record). The only failures reported here are bus events that
/// arrive outside an enable/disable bracket.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("transfer at {at} outside an enable/disable bracket")]
    StrayTransfer { at: Timestamp },

    #[error("disable at {at} without a matching enable")]
    StrayDisable { at: Timestamp },
}

pub type Result<T> = std::result::Result<T, Error>;

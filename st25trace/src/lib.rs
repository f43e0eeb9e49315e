// st25trace-rs/st25trace/src/lib.rs

//! st25trace
//!
//! SPI transaction decoder for the STMicroelectronics ST25R3916 NFC
//! front-end. Consumes bus-level enable/transfer/disable events and produces
//! an ordered stream of annotated transaction records.
#![warn(missing_docs)]

pub mod bus;
pub mod commands;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod prelude;
pub mod registers;
pub mod test_support;
pub mod types;
pub mod utils;

// `crate::Error`, `crate::Result` and the core types are usable straight
// from the crate root; `prelude` builds on these re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;

// st25trace-rs/st25trace/src/prelude.rs

pub use crate::bus::BusEvent;
pub use crate::decoder::{Decoder, DecoderConfig, Record, Records, decode_capture};
pub use crate::{Bank, Direction, Error, RegisterAddress, Result, Timestamp, TransactionKind};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex_prefixed, parse_hex};

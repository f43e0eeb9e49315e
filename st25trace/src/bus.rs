// st25trace-rs/st25trace/src/bus.rs

//! Bus-level input events delivered by the capture layer.
//!
//! The capture layer is trusted to deliver well-formed, strictly
//! time-ordered `Enable` / `Transfer`* / `Disable` brackets sampled with the
//! chip's SPI settings: MSB-first, 8 bits per transfer, CPOL = 0 / CPHA = 1,
//! active-low chip select. None of that is re-validated here.

use crate::types::Timestamp;

/// One bus-level signal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusEvent {
    /// Chip select asserted: a transaction begins.
    Enable {
        /// Assertion time.
        at: Timestamp,
    },
    /// One byte clocked in each direction simultaneously.
    Transfer {
        /// Time of the first clock edge of the byte.
        start: Timestamp,
        /// Time of the last clock edge of the byte.
        end: Timestamp,
        /// Master-out byte.
        mosi: u8,
        /// Slave-out byte.
        miso: u8,
    },
    /// Chip select de-asserted: the transaction ends.
    Disable {
        /// De-assertion time.
        at: Timestamp,
    },
}

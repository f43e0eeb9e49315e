// st25trace-rs/st25trace/src/registers/mod.rs

//! Register-name tables for the chip's three address spaces.
//!
//! Pure lookup data. Per-bank tables live in `registers::<bank>.rs` and are
//! dispatched here on the [`Bank`] selected by the decoder.

mod bank_a;
mod bank_b;

use crate::types::{Bank, RegisterAddress};

/// Resolve a register address to its datasheet name in the given bank.
///
/// Returns `None` for addresses the bank leaves unmapped; callers render
/// those as `?`.
pub fn register_name(bank: Bank, addr: RegisterAddress) -> Option<&'static str> {
    match bank {
        Bank::A => bank_a::name(addr.as_u8()),
        Bank::B => bank_b::name(addr.as_u8()),
        Bank::Test => bank_test::name(addr.as_u8()),
    }
}

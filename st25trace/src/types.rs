// st25trace-rs/st25trace/src/types.rs

use derive_more::Display;

/// Capture timestamp - Newtype Pattern (nanoseconds since capture start)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[display(fmt = "{}ns", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(u64);

impl Timestamp {
    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    pub fn as_nanos(&self) -> u64 {
        self.0
    }
}

/// Register address - Newtype Pattern (6-bit register/memory address)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:#04x}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterAddress(u8);

impl RegisterAddress {
    /// Mask applied to register-mode opcodes to extract the address bits.
    pub const ADDRESS_MASK: u8 = 0x3f;

    pub const fn new(addr: u8) -> Self {
        Self(addr & Self::ADDRESS_MASK)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// Register bank selected by a prior direct command.
///
/// The chip exposes three address-to-name spaces. Bank `A` is the power-on
/// default and is re-selected at the start of every transaction; `B` and
/// `TEST` stay selected only for the remainder of the current transaction
/// bracket once the matching direct command has been observed.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bank {
    #[default]
    #[display(fmt = "A")]
    A,
    #[display(fmt = "B")]
    B,
    #[display(fmt = "TEST")]
    Test,
}

/// Direction of the data phase of a transaction.
///
/// `Write` accumulates MOSI bytes, `Read` accumulates MISO bytes.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[display(fmt = "write")]
    Write,
    #[display(fmt = "read")]
    Read,
}

/// Classified transaction kind.
///
/// Display strings match the record labels consumed by the reporting layer.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransactionKind {
    #[display(fmt = "Direct_Command")]
    DirectCommand,
    #[display(fmt = "Register_Write")]
    RegisterWrite,
    #[display(fmt = "Register_Read")]
    RegisterRead,
    #[display(fmt = "FIFO_Load")]
    FifoLoad,
    #[display(fmt = "PT_Memory_Load_A_config")]
    PtMemoryLoadAConfig,
    #[display(fmt = "PT_Memory_Load_F_config")]
    PtMemoryLoadFConfig,
    #[display(fmt = "PT_Memory_Load_TSN_data")]
    PtMemoryLoadTsnData,
    #[display(fmt = "PT_Memory_Read")]
    PtMemoryRead,
    #[display(fmt = "FIFO_Read")]
    FifoRead,
    #[display(fmt = "Unk")]
    Unknown,
}

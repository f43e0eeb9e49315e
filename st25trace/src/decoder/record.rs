// st25trace-rs/st25trace/src/decoder/record.rs

use crate::commands;
use crate::registers;
use crate::types::{Bank, RegisterAddress, Timestamp, TransactionKind};
use crate::utils::bytes_to_hex_prefixed;

/// One decoded transaction record.
///
/// `operation` and `data` are pre-formatted annotation strings; which of the
/// two is present depends on the kind. Direct commands carry `operation`
/// only, register accesses carry both, everything else carries `data` only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Classified transaction kind.
    pub kind: TransactionKind,
    /// Start of the decoded span (opcode byte start).
    pub start: Timestamp,
    /// End of the decoded span (disable edge, or opcode byte end for direct
    /// commands).
    pub end: Timestamp,
    /// Formatted operation annotation, when the kind defines one.
    pub operation: Option<String>,
    /// Formatted data annotation, when the kind has a data phase.
    pub data: Option<String>,
}

impl Record {
    /// Record for a direct command, spanning the single opcode transfer.
    pub(crate) fn direct_command(code: u8, start: Timestamp, end: Timestamp) -> Self {
        Self {
            kind: TransactionKind::DirectCommand,
            start,
            end,
            operation: Some(format!(
                "{:#04x} - {}",
                code,
                commands::mnemonic(code).unwrap_or("?")
            )),
            data: None,
        }
    }

    /// Record for a register access, resolving the name in the given bank.
    pub(crate) fn register(
        kind: TransactionKind,
        bank: Bank,
        addr: RegisterAddress,
        data: &[u8],
        start: Timestamp,
        end: Timestamp,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            operation: Some(format!(
                "[{}] {} - {}",
                bank,
                addr,
                registers::register_name(bank, addr).unwrap_or("?")
            )),
            data: Some(bytes_to_hex_prefixed(data)),
        }
    }

    /// Record carrying only the accumulated data bytes.
    pub(crate) fn data_only(
        kind: TransactionKind,
        data: &[u8],
        start: Timestamp,
        end: Timestamp,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            operation: None,
            data: Some(bytes_to_hex_prefixed(data)),
        }
    }
}

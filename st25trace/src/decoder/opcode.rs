// st25trace-rs/st25trace/src/decoder/opcode.rs

use crate::constants::*;
use crate::types::{Direction, RegisterAddress, TransactionKind};

/// Classification of the first MOSI byte of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Classified {
    /// Single-byte instruction, no address or data phase.
    Direct { code: u8 },
    /// Operation with a data phase.
    Framed {
        kind: TransactionKind,
        direction: Direction,
        base: RegisterAddress,
    },
}

/// Classify an opcode byte.
///
/// Matched in priority order: the two-bit mode tests first, then the
/// fixed-opcode operations. Anything left over is `Unknown`; its data phase
/// still runs, capturing the MISO side.
pub(crate) fn classify(code: u8) -> Classified {
    use TransactionKind::*;

    if code & MODE_MASK == DIRECT_COMMAND_MODE {
        return Classified::Direct { code };
    }

    let (kind, direction, base) = match code {
        c if c & MODE_MASK == REGISTER_WRITE_MODE => (RegisterWrite, Direction::Write, c),
        c if c & MODE_MASK == REGISTER_READ_MODE => (RegisterRead, Direction::Read, c),
        FIFO_LOAD => (FifoLoad, Direction::Write, 0),
        PT_MEMORY_LOAD_A_CONFIG => (PtMemoryLoadAConfig, Direction::Write, 0),
        PT_MEMORY_LOAD_F_CONFIG => (PtMemoryLoadFConfig, Direction::Write, PT_MEMORY_F_CONFIG_BASE),
        PT_MEMORY_LOAD_TSN_DATA => (PtMemoryLoadTsnData, Direction::Write, PT_MEMORY_TSN_DATA_BASE),
        PT_MEMORY_READ => (PtMemoryRead, Direction::Read, 0),
        FIFO_READ => (FifoRead, Direction::Read, 0),
        _ => (Unknown, Direction::Read, 0),
    };

    Classified::Framed {
        kind,
        direction,
        base: RegisterAddress::new(base),
    }
}

//! Test support helpers intended for use by unit and integration tests.
//!
//! These builders centralize bus-event construction so tests across the
//! crate and tests/ directory describe captures the same way. Timestamps are
//! nanoseconds; a transfer's end edge is placed one byte period after its
//! start.

use crate::bus::BusEvent;
use crate::types::Timestamp;

/// Nominal duration of one 8-bit transfer at a few MHz of SPI clock.
pub const BYTE_PERIOD_NS: u64 = 1_250;

/// Chip-select assertion at `at_ns`.
#[doc(hidden)]
pub fn enable(at_ns: u64) -> BusEvent {
    BusEvent::Enable {
        at: Timestamp::from_nanos(at_ns),
    }
}

/// One byte transfer starting at `start_ns`.
#[doc(hidden)]
pub fn transfer(start_ns: u64, mosi: u8, miso: u8) -> BusEvent {
    BusEvent::Transfer {
        start: Timestamp::from_nanos(start_ns),
        end: Timestamp::from_nanos(start_ns + BYTE_PERIOD_NS),
        mosi,
        miso,
    }
}

/// Chip-select de-assertion at `at_ns`.
#[doc(hidden)]
pub fn disable(at_ns: u64) -> BusEvent {
    BusEvent::Disable {
        at: Timestamp::from_nanos(at_ns),
    }
}

/// Full bracket writing `mosi_bytes` after the given opcode.
///
/// MISO is held at 0x00; events are spaced one byte period apart.
#[doc(hidden)]
pub fn write_bracket(start_ns: u64, opcode: u8, mosi_bytes: &[u8]) -> Vec<BusEvent> {
    let mut t = start_ns;
    let mut events = vec![enable(t)];
    t += BYTE_PERIOD_NS;
    events.push(transfer(t, opcode, 0x00));
    for &b in mosi_bytes {
        t += BYTE_PERIOD_NS;
        events.push(transfer(t, b, 0x00));
    }
    events.push(disable(t + BYTE_PERIOD_NS));
    events
}

/// Full bracket reading `miso_bytes` after the given opcode.
///
/// MOSI is held at 0x00 during the data phase, as a master typically clocks
/// out idle bytes while reading.
#[doc(hidden)]
pub fn read_bracket(start_ns: u64, opcode: u8, miso_bytes: &[u8]) -> Vec<BusEvent> {
    let mut t = start_ns;
    let mut events = vec![enable(t)];
    t += BYTE_PERIOD_NS;
    events.push(transfer(t, opcode, 0x00));
    for &b in miso_bytes {
        t += BYTE_PERIOD_NS;
        events.push(transfer(t, 0x00, b));
    }
    events.push(disable(t + BYTE_PERIOD_NS));
    events
}

/// Full bracket carrying a single direct command.
#[doc(hidden)]
pub fn command_bracket(start_ns: u64, code: u8) -> Vec<BusEvent> {
    let t = start_ns + BYTE_PERIOD_NS;
    vec![
        enable(start_ns),
        transfer(t, code, 0x00),
        disable(t + BYTE_PERIOD_NS),
    ]
}

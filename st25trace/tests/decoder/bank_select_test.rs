#[path = "../common/mod.rs"]
mod common;

use st25trace::prelude::*;
use st25trace::test_support::{BYTE_PERIOD_NS, disable, enable, transfer};

fn bracket(start: u64, bytes: &[(u8, u8)]) -> Vec<BusEvent> {
    let mut t = start;
    let mut events = vec![enable(t)];
    for &(mosi, miso) in bytes {
        t += BYTE_PERIOD_NS;
        events.push(transfer(t, mosi, miso));
    }
    events.push(disable(t + BYTE_PERIOD_NS));
    events
}

#[test]
fn test_access_selects_the_test_bank() {
    // 0xfc then a read of TEST address 0x01 in the same bracket
    let events = bracket(0, &[(0xfc, 0x00), (0x41, 0x00), (0x00, 0x5a)]);
    let records = decode_capture(DecoderConfig::default(), &events).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].operation.as_deref(),
        Some("[TEST] 0x01 - ANALOG_TEST_AND_OBSERVATION_1")
    );
}

#[test]
fn bank_resets_to_a_on_every_enable() {
    let mut events = bracket(0, &[(0xfb, 0x00), (0x45, 0x00), (0x00, 0x11)]);
    // Same register address in a fresh bracket: resolves in bank A again
    events.extend(bracket(100_000, &[(0x45, 0x00), (0x00, 0x22)]));
    let records = decode_capture(DecoderConfig::default(), &events).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].operation.as_deref(),
        Some("[B] 0x05 - EMD_SUP_CONF")
    );
    assert_eq!(
        records[1].operation.as_deref(),
        Some("[A] 0x05 - ISO14443A_NFC")
    );
}

#[test]
fn show_bank_select_emits_the_select_records() {
    let config = DecoderConfig {
        show_bank_select: true,
    };
    let mut events = bracket(0, &[(0xfb, 0x00), (0x45, 0x00), (0x00, 0x11)]);
    events.extend(bracket(100_000, &[(0xfc, 0x00)]));
    let records = decode_capture(config, &events).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].kind, TransactionKind::DirectCommand);
    assert_eq!(
        records[0].operation.as_deref(),
        Some("0xfb - SPACE_B_ACCESS")
    );
    // The switch still applies to the register access that follows
    assert_eq!(
        records[1].operation.as_deref(),
        Some("[B] 0x05 - EMD_SUP_CONF")
    );
    assert_eq!(records[2].operation.as_deref(), Some("0xfc - TEST_ACCESS"));
}

#[test]
fn only_bank_selects_are_ever_suppressed() {
    // Every other direct command is emitted even with the flag off
    let events = bracket(0, &[(0xdb, 0x00)]);
    let records = decode_capture(DecoderConfig::default(), &events).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].operation.as_deref(), Some("0xdb - CLEAR_FIFO"));
}

#[test]
fn unmapped_address_in_selected_bank_renders_placeholder() {
    // Bank B leaves 0x00 unmapped
    let events = bracket(0, &[(0xfb, 0x00), (0x40, 0x00), (0x00, 0x99)]);
    let records = decode_capture(DecoderConfig::default(), &events).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].operation.as_deref(), Some("[B] 0x00 - ?"));
    assert_eq!(records[0].data.as_deref(), Some("0x99"));
}

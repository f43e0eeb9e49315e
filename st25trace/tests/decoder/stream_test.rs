#[path = "../common/mod.rs"]
mod common;

use st25trace::prelude::*;
use st25trace::test_support::{disable, enable, read_bracket, transfer, write_bracket};

#[test]
fn boot_sequence_decodes_in_bus_order() {
    let events = common::fixtures::boot_sequence();
    let records = decode_capture(DecoderConfig::default(), &events).unwrap();

    let kinds: Vec<TransactionKind> = records.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TransactionKind::DirectCommand,
            TransactionKind::RegisterWrite,
            TransactionKind::FifoLoad,
            TransactionKind::DirectCommand,
            TransactionKind::FifoRead,
        ]
    );
    // Record spans never overlap and never go backwards
    for pair in records.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
}

#[test]
fn decoding_the_same_capture_twice_is_identical() {
    let events = common::fixtures::boot_sequence();
    let first = decode_capture(DecoderConfig::default(), &events).unwrap();
    let second = decode_capture(DecoderConfig::default(), &events).unwrap();
    assert_eq!(first, second);
}

#[test]
fn write_data_is_the_mosi_sequence_in_transfer_order() {
    let payload = hex::decode("93207001").unwrap();
    let events = common::fixtures::fifo_load(&payload);
    let records = decode_capture(DecoderConfig::default(), &events).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, TransactionKind::FifoLoad);
    assert_eq!(records[0].data.as_deref(), Some("0x93 0x20 0x70 0x01"));
}

#[test]
fn read_data_is_the_miso_sequence_in_transfer_order() {
    let events = read_bracket(0, 0xbf, &[0x01, 0x02, 0x03]);
    let records = decode_capture(DecoderConfig::default(), &events).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, TransactionKind::PtMemoryRead);
    assert_eq!(records[0].data.as_deref(), Some("0x01 0x02 0x03"));
}

#[test]
fn pt_memory_loads_carry_data_but_no_operation() {
    let mut events = write_bracket(0, 0xa0, &[0x44]);
    events.extend(write_bracket(50_000, 0xa8, &[0x55]));
    events.extend(write_bracket(100_000, 0xac, &[0x66]));
    let records = decode_capture(DecoderConfig::default(), &events).unwrap();

    assert_eq!(records.len(), 3);
    for (rec, kind) in records.iter().zip([
        TransactionKind::PtMemoryLoadAConfig,
        TransactionKind::PtMemoryLoadFConfig,
        TransactionKind::PtMemoryLoadTsnData,
    ]) {
        assert_eq!(rec.kind, kind);
        assert_eq!(rec.operation, None);
        assert!(rec.data.is_some());
    }
}

#[test]
fn record_data_roundtrips_through_the_hex_parser() {
    let payload = vec![0x00, 0x7f, 0xff];
    let events = common::fixtures::fifo_load(&payload);
    let records = decode_capture(DecoderConfig::default(), &events).unwrap();
    let rendered = records[0].data.as_deref().unwrap();
    assert_eq!(parse_hex(rendered).unwrap(), payload);
}

#[test]
fn records_iterator_surfaces_stray_events_as_errors() {
    let events = vec![
        transfer(0, 0x02, 0x00), // stray: no enable yet
        enable(1000),
        transfer(1100, 0x02, 0x00),
        transfer(3000, 0x42, 0x00),
        disable(5000),
    ];
    let mut records = Decoder::default().records(events);

    assert!(matches!(records.next(), Some(Err(Error::StrayTransfer { .. }))));
    // Decoding continues past the error
    let rec = records.next().unwrap().unwrap();
    assert_eq!(rec.kind, TransactionKind::RegisterWrite);
    assert_eq!(rec.data.as_deref(), Some("0x42"));
    assert!(records.next().is_none());
}

// Decode a canned ST25R3916 capture and print the annotated records.

// The capture below mirrors a typical reader bring-up: soft reset, mode
// configuration, a FIFO load plus transmit, a read-back, and a register
// access in the B space. Run with RUST_LOG=debug to watch the decoder's
// internal transitions.

use st25trace::prelude::*;
use st25trace::test_support::{
    BYTE_PERIOD_NS, command_bracket, disable, enable, read_bracket, transfer, write_bracket,
};

fn capture() -> Vec<BusEvent> {
    let mut events = Vec::new();
    events.extend(command_bracket(0, 0xc1)); // SET_DEFAULT
    events.extend(write_bracket(10_000, 0x03, &[0x08])); // MODE <- iso14443a initiator
    events.extend(write_bracket(20_000, 0x02, &[0xc8])); // OP_CONTROL
    events.extend(write_bracket(30_000, 0x80, &[0x26])); // FIFO <- REQA
    events.extend(command_bracket(40_000, 0xc4)); // TRANSMIT_WITH_CRC
    events.extend(read_bracket(50_000, 0x5e, &[0x02, 0x00])); // FIFO_STATUS1/2
    events.extend(read_bracket(60_000, 0x9f, &[0x04, 0x00])); // FIFO read ATQA

    // B-space access keeps chip select low across the select command and
    // the register opcode.
    let mut t = 70_000;
    events.push(enable(t));
    t += BYTE_PERIOD_NS;
    events.push(transfer(t, 0xfb, 0x00)); // SPACE_B_ACCESS
    t += BYTE_PERIOD_NS;
    events.push(transfer(t, 0x45, 0x00)); // read EMD_SUP_CONF
    t += BYTE_PERIOD_NS;
    events.push(transfer(t, 0x00, 0x51));
    events.push(disable(t + BYTE_PERIOD_NS));

    events
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DecoderConfig {
        show_bank_select: std::env::args().any(|a| a == "--show-bank-select"),
    };

    println!("decoding {} bus events...\n", capture().len());
    for result in Decoder::new(config).records(capture()) {
        let record = result?;
        let mut line = format!("{} .. {}  {}", record.start, record.end, record.kind);
        if let Some(op) = &record.operation {
            line.push_str(&format!("  {}", op));
        }
        if let Some(data) = &record.data {
            line.push_str(&format!("  [{}]", data));
        }
        println!("{}", line);
    }

    Ok(())
}

// st25trace-rs/st25trace/src/registers/bank_a.rs

//! Bank A register names. The full 6-bit space is mapped.

/// Datasheet name of a bank A register.
pub(crate) fn name(addr: u8) -> Option<&'static str> {
    Some(match addr {
        0x00 => "IO_CONF1",
        0x01 => "IO_CONF2",
        0x02 => "OP_CONTROL",
        0x03 => "MODE",
        0x04 => "BIT_RATE",
        0x05 => "ISO14443A_NFC",
        0x06 => "ISO14443B_1",
        0x07 => "ISO14443B_2",
        0x08 => "PASSIVE_TARGET",
        0x09 => "STREAM_MODE",
        0x0a => "AUX",
        0x0b => "RX_CONF1",
        0x0c => "RX_CONF2",
        0x0d => "RX_CONF3",
        0x0e => "RX_CONF4",
        0x0f => "MASK_RX_TIMER",
        0x10 => "NO_RESPONSE_TIMER1",
        0x11 => "NO_RESPONSE_TIMER2",
        0x12 => "TIMER_EMV_CONTROL",
        0x13 => "GPT1",
        0x14 => "GPT2",
        0x15 => "PPON2",
        0x16 => "IRQ_MASK_MAIN",
        0x17 => "IRQ_MASK_TIMER_NFC",
        0x18 => "IRQ_MASK_ERROR_WUP",
        0x19 => "IRQ_MASK_TARGET",
        0x1a => "IRQ_MAIN",
        0x1b => "IRQ_TIMER_NFC",
        0x1c => "IRQ_ERROR_WUP",
        0x1d => "IRQ_TARGET",
        0x1e => "FIFO_STATUS1",
        0x1f => "FIFO_STATUS2",
        0x20 => "COLLISION_STATUS",
        0x21 => "PASSIVE_TARGET_STATUS",
        0x22 => "NUM_TX_BYTES1",
        0x23 => "NUM_TX_BYTES2",
        0x24 => "NFCIP1_BIT_RATE",
        0x25 => "AD_RESULT",
        0x26 => "ANT_TUNE_A",
        0x27 => "ANT_TUNE_B",
        0x28 => "TX_DRIVER",
        0x29 => "PT_MOD",
        0x2a => "FIELD_THRESHOLD_ACTV",
        0x2b => "FIELD_THRESHOLD_DEACTV",
        0x2c => "REGULATOR_CONTROL",
        0x2d => "RSSI_RESULT",
        0x2e => "GAIN_RED_STATE",
        0x2f => "CAP_SENSOR_CONTROL",
        0x30 => "CAP_SENSOR_RESULT",
        0x31 => "AUX_DISPLAY",
        0x32 => "WUP_TIMER_CONTROL",
        0x33 => "AMPLITUDE_MEASURE_CONF",
        0x34 => "AMPLITUDE_MEASURE_REF",
        0x35 => "AMPLITUDE_MEASURE_AA_RESULT",
        0x36 => "AMPLITUDE_MEASURE_RESULT",
        0x37 => "PHASE_MEASURE_CONF",
        0x38 => "PHASE_MEASURE_REF",
        0x39 => "PHASE_MEASURE_AA_RESULT",
        0x3a => "PHASE_MEASURE_RESULT",
        0x3b => "CAPACITANCE_MEASURE_CONF",
        0x3c => "CAPACITANCE_MEASURE_REF",
        0x3d => "CAPACITANCE_MEASURE_AA_RESULT",
        0x3e => "CAPACITANCE_MEASURE_RESULT",
        0x3f => "IC_IDENTITY",
        _ => return None,
    })
}

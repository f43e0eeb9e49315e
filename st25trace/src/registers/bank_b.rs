// st25trace-rs/st25trace/src/registers/bank_b.rs

//! Bank B register names. Sparse: only the addresses below are defined.

/// Datasheet name of a bank B register.
pub(crate) fn name(addr: u8) -> Option<&'static str> {
    Some(match addr {
        0x05 => "EMD_SUP_CONF",
        0x06 => "SUBC_START_TIME",
        0x0b => "P2P_RX_CONF",
        0x0c => "CORR_CONF1",
        0x0d => "CORR_CONF2",
        0x0f => "SQUELCH_TIMER",
        0x15 => "FIELD_ON_GT",
        0x28 => "AUX_MOD",
        0x29 => "TX_DRIVER_TIMING",
        0x2a => "RES_AM_MOD",
        0x2b => "TX_DRIVER_STATUS",
        0x2c => "REGULATOR_RESULT",
        0x2e => "AWS_CONF1",
        0x2f => "AWS_CONF2",
        0x30 => "OVERSHOOT_CONF1",
        0x31 => "OVERSHOOT_CONF2",
        0x32 => "UNDERSHOOT_CONF1",
        0x33 => "UNDERSHOOT_CONF2",
        0x34 => "AWS_TIME1",
        0x35 => "AWS_TIME2",
        0x36 => "AWS_TIME3",
        0x37 => "AWS_TIME4",
        0x38 => "AWS_TIME5",
        0x39 => "AWS_TIME6",
        _ => return None,
    })
}

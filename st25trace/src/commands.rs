// st25trace-rs/st25trace/src/commands.rs

//! Direct command mnemonics.
//!
//! Direct commands are single-byte instructions in the `11xxxxxx` space.
//! Not every code in that space is defined; undefined codes still classify
//! as direct commands and render with a `?` mnemonic.

/// Mnemonic for a direct command code, if the chip defines one.
pub fn mnemonic(code: u8) -> Option<&'static str> {
    Some(match code {
        0xc1 => "SET_DEFAULT",
        0xc2 => "STOP",
        0xc4 => "TRANSMIT_WITH_CRC",
        0xc5 => "TRANSMIT_WITHOUT_CRC",
        0xc6 => "TRANSMIT_REQA",
        0xc7 => "TRANSMIT_WUPA",
        0xc8 => "INITIAL_RF_COLLISION",
        0xc9 => "RESPONSE_RF_COLLISION_N",
        0xcd => "GOTO_SENSE",
        0xce => "GOTO_SLEEP",
        0xd0 => "MASK_RECEIVE_DATA",
        0xd1 => "UNMASK_RECEIVE_DATA",
        0xd2 => "AM_MOD_STATE_CHANGE",
        0xd3 => "MEASURE_AMPLITUDE",
        0xd5 => "RESET_RXGAIN",
        0xd6 => "ADJUST_REGULATORS",
        0xd8 => "CALIBRATE_DRIVER_TIMING",
        0xd9 => "MEASURE_PHASE",
        0xda => "CLEAR_RSSI",
        0xdb => "CLEAR_FIFO",
        0xdc => "TRANSPARENT_MODE",
        0xdd => "CALIBRATE_C_SENSOR",
        0xde => "MEASURE_CAPACITANCE",
        0xdf => "MEASURE_VDD",
        0xe0 => "START_GP_TIMER",
        0xe1 => "START_WUP_TIMER",
        0xe2 => "START_MASK_RECEIVE_TIMER",
        0xe3 => "START_NO_RESPONSE_TIMER",
        0xe4 => "START_PPON2_TIMER",
        0xe8 => "STOP_NRT",
        0xea => "RC_CAL",
        0xfb => "SPACE_B_ACCESS",
        0xfc => "TEST_ACCESS",
        _ => return None,
    })
}

// st25trace-rs/st25trace/src/decoder/mod.rs

//! The transaction decoder state machine.
//!
//! One [`Decoder`] owns the state of one capture session. Bus events are
//! pushed one at a time; each push yields at most one [`Record`]. Register
//! accesses and memory/FIFO operations emit on the disable edge, direct
//! commands emit immediately on their opcode byte.

mod opcode;
mod record;

pub use record::Record;

use crate::bus::BusEvent;
use crate::constants::{CMD_SPACE_B_ACCESS, CMD_TEST_ACCESS};
use crate::types::{Bank, Direction, RegisterAddress, Timestamp, TransactionKind};
use crate::{Error, Result};
use log::{debug, trace};
use opcode::Classified;

/// Decoder configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoderConfig {
    /// Emit records for the bank-select direct commands (`0xfb`, `0xfc`).
    ///
    /// Hidden by default; the bank switch itself happens either way.
    pub show_bank_select: bool,
}

/// Position within the current transaction bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    AwaitingOpcode,
    Accumulating {
        kind: TransactionKind,
        direction: Direction,
        base: RegisterAddress,
        started: Timestamp,
    },
}

/// SPI transaction decoder for one capture session.
///
/// Create one per capture; the decoder does not restart once its event
/// source is exhausted. All degradation on unexpected input is local: an
/// unrecognized opcode or unmapped register renders as `?`/`Unk` in the
/// record, never an error.
#[derive(Debug)]
pub struct Decoder {
    config: DecoderConfig,
    phase: Phase,
    bank: Bank,
    data: Vec<u8>,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

impl Decoder {
    /// Fresh decoder in the idle state.
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            bank: Bank::A,
            data: Vec::new(),
        }
    }

    /// The register bank applied to lookups at this point in the stream.
    pub fn active_bank(&self) -> Bank {
        self.bank
    }

    /// Consume one bus event, returning at most one decoded record.
    ///
    /// `Transfer`/`Disable` outside an enable/disable bracket return an
    /// error and leave the decoder idle; an `Enable` while a transaction is
    /// open restarts the bracket cleanly, dropping the undecoded remainder.
    pub fn push(&mut self, event: BusEvent) -> Result<Option<Record>> {
        trace!("bus event: {:?}", event);
        match event {
            BusEvent::Enable { at } => {
                if self.phase != Phase::Idle {
                    debug!("enable at {} restarts an open transaction", at);
                }
                self.phase = Phase::AwaitingOpcode;
                self.bank = Bank::A;
                self.data.clear();
                Ok(None)
            }
            BusEvent::Transfer {
                start,
                end,
                mosi,
                miso,
            } => self.on_transfer(start, end, mosi, miso),
            BusEvent::Disable { at } => self.on_disable(at),
        }
    }

    /// Decode lazily from an event source.
    ///
    /// The iterator yields records in bus order; stopping mid-transaction
    /// simply leaves the last transaction undecoded.
    pub fn records<I>(self, events: I) -> Records<I::IntoIter>
    where
        I: IntoIterator<Item = BusEvent>,
    {
        Records {
            decoder: self,
            events: events.into_iter(),
        }
    }

    fn on_transfer(
        &mut self,
        start: Timestamp,
        end: Timestamp,
        mosi: u8,
        miso: u8,
    ) -> Result<Option<Record>> {
        match self.phase {
            Phase::Idle => Err(Error::StrayTransfer { at: start }),
            // First byte of the bracket (or a byte following a direct
            // command): the MOSI byte is an opcode.
            Phase::AwaitingOpcode => match opcode::classify(mosi) {
                Classified::Direct { code } => Ok(self.on_direct_command(code, start, end)),
                Classified::Framed {
                    kind,
                    direction,
                    base,
                } => {
                    self.data.clear();
                    self.phase = Phase::Accumulating {
                        kind,
                        direction,
                        base,
                        started: start,
                    };
                    Ok(None)
                }
            },
            Phase::Accumulating { direction, .. } => {
                self.data.push(match direction {
                    Direction::Write => mosi,
                    Direction::Read => miso,
                });
                Ok(None)
            }
        }
    }

    fn on_direct_command(&mut self, code: u8, start: Timestamp, end: Timestamp) -> Option<Record> {
        let bank_select = match code {
            CMD_SPACE_B_ACCESS => {
                self.bank = Bank::B;
                true
            }
            CMD_TEST_ACCESS => {
                self.bank = Bank::Test;
                true
            }
            _ => false,
        };
        if bank_select {
            debug!("register bank switched to {}", self.bank);
            if !self.config.show_bank_select {
                return None;
            }
        }
        let record = Record::direct_command(code, start, end);
        debug!("emit {}: {:?}", record.kind, record.operation);
        Some(record)
    }

    fn on_disable(&mut self, at: Timestamp) -> Result<Option<Record>> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => Err(Error::StrayDisable { at }),
            // Nothing accumulated: the bracket held only direct commands (or
            // nothing at all), so there is nothing left to emit.
            Phase::AwaitingOpcode => Ok(None),
            Phase::Accumulating {
                kind,
                base,
                started,
                ..
            } => {
                let record = match kind {
                    TransactionKind::RegisterWrite | TransactionKind::RegisterRead => {
                        Record::register(kind, self.bank, base, &self.data, started, at)
                    }
                    _ => Record::data_only(kind, &self.data, started, at),
                };
                debug!("emit {} ({} data bytes)", record.kind, self.data.len());
                Ok(Some(record))
            }
        }
    }
}

/// Lazy record iterator returned by [`Decoder::records`].
#[derive(Debug)]
pub struct Records<I> {
    decoder: Decoder,
    events: I,
}

impl<I> Iterator for Records<I>
where
    I: Iterator<Item = BusEvent>,
{
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let event = self.events.next()?;
            match self.decoder.push(event) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Eagerly decode a whole capture into a record list.
pub fn decode_capture(config: DecoderConfig, events: &[BusEvent]) -> Result<Vec<Record>> {
    let mut decoder = Decoder::new(config);
    let mut records = Vec::new();
    for &event in events {
        if let Some(record) = decoder.push(event)? {
            records.push(record);
        }
    }
    Ok(records)
}

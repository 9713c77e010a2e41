//! Recording transport for unit tests

use heapless::Vec;

use crate::transport::{DisplayError, Mode, Transport};

/// Room for an init, a handful of clears and some text
const CAPACITY: usize = 8192;

/// One transmitted byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Command(u8),
    Data(u8),
}

/// Transport that records every byte
pub struct Recorder {
    ops: Vec<Op, CAPACITY>,
    fail_after: Option<usize>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fail_after: None,
        }
    }

    /// Accept `count` bytes, then fail with a bus error
    pub fn failing_after(count: usize) -> Self {
        Self {
            ops: Vec::new(),
            fail_after: Some(count),
        }
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn data(&self) -> impl Iterator<Item = u8> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::Data(byte) => Some(*byte),
            Op::Command(_) => None,
        })
    }

    pub fn data_count(&self) -> usize {
        self.data().count()
    }

    pub fn command_count(&self) -> usize {
        self.ops.len() - self.data_count()
    }
}

impl Transport for Recorder {
    fn transmit(&mut self, mode: Mode, byte: u8) -> Result<(), DisplayError> {
        if self.fail_after.is_some_and(|limit| self.ops.len() >= limit) {
            return Err(DisplayError::Bus);
        }
        let op = match mode {
            Mode::Command => Op::Command(byte),
            Mode::Data => Op::Data(byte),
        };
        self.ops.push(op).map_err(|_| DisplayError::Bus)
    }
}

//! Console I/O
//!
//! `In` and `ListInit` read through [`Console`], `Out` writes through it.
//! [`IOHandler`] is the in-memory implementation used by tests and by
//! non-interactive runs.

use std::collections::VecDeque;
use crate::error::{Result, RuntimeError};
use vm13_spec::Value;

/// External numeric console
pub trait Console {
    /// Read one value (blocking)
    fn read_value(&mut self) -> Result<Value>;

    /// Read the value for element `index` of an array being filled by `ListInit`
    fn read_element(&mut self, _index: usize) -> Result<Value> {
        self.read_value()
    }

    /// Write one value
    fn write_value(&mut self, value: Value) -> Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_value(&mut self) -> Result<Value> {
        (**self).read_value()
    }

    fn read_element(&mut self, index: usize) -> Result<Value> {
        (**self).read_element(index)
    }

    fn write_value(&mut self, value: Value) -> Result<()> {
        (**self).write_value(value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct IOHandler {
    inputs: VecDeque<Value>,
    outputs: Vec<Value>,
    reads: usize,
}

impl IOHandler {
    pub fn new(inputs: Vec<Value>) -> Self {
        IOHandler {
            inputs: inputs.into(),
            outputs: Vec::new(),
            reads: 0,
        }
    }

    pub fn push_input(&mut self, value: Value) {
        self.inputs.push_back(value);
    }

    pub fn outputs(&self) -> &[Value] {
        &self.outputs
    }

    pub fn take_outputs(&mut self) -> Vec<Value> {
        std::mem::take(&mut self.outputs)
    }

    /// Inputs not yet consumed
    pub fn remaining_inputs(&self) -> Vec<Value> {
        self.inputs.iter().copied().collect()
    }

    /// Number of values read so far
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl Console for IOHandler {
    fn read_value(&mut self) -> Result<Value> {
        let value = self.inputs.pop_front().ok_or(RuntimeError::InputExhausted)?;
        self.reads += 1;
        Ok(value)
    }

    fn write_value(&mut self, value: Value) -> Result<()> {
        self.outputs.push(value);
        Ok(())
    }
}

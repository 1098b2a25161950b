//! VM state for VM13

use std::collections::BTreeMap;
use vm13_spec::{Register, Value, NUM_REGISTERS};

/// VM state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VMState {
    /// Registers r00-r11, all starting at 0
    pub registers: [Value; NUM_REGISTERS],

    /// Arrays bound by `List`, keyed by register code
    pub arrays: BTreeMap<Register, Vec<Value>>,

    /// Instructions executed so far
    pub steps: u64,
}

impl VMState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn read_reg(&self, reg: Register) -> Value {
        self.registers[reg.index()]
    }

    #[inline]
    pub fn write_reg(&mut self, reg: Register, value: Value) {
        self.registers[reg.index()] = value;
    }

    /// Array bound to `reg`, if any
    pub fn array(&self, reg: Register) -> Option<&[Value]> {
        self.arrays.get(&reg).map(Vec::as_slice)
    }

    pub fn array_mut(&mut self, reg: Register) -> Option<&mut Vec<Value>> {
        self.arrays.get_mut(&reg)
    }

    /// Bind a fresh zero-filled array, replacing any previous one
    pub fn bind_array(&mut self, reg: Register, len: usize) {
        self.arrays.insert(reg, vec![0; len]);
    }

    /// Zero all registers. Arrays are left alone.
    pub fn clear_registers(&mut self) {
        self.registers = [0; NUM_REGISTERS];
    }

    #[inline]
    pub fn inc_steps(&mut self) {
        self.steps += 1;
    }
}

//! Instruction execution for VM13

use tracing::{debug, trace};
use vm13_spec::{Instruction, ListSize, Register, Value};
use crate::error::{Result, RuntimeError};
use crate::io::Console;
use crate::state::VMState;
use crate::vm::VMConfig;

/// What the fetch loop does after an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Halt,
}

/// Execute single instruction
pub fn execute(
    instr: &Instruction,
    state: &mut VMState,
    console: &mut dyn Console,
    config: &VMConfig,
) -> Result<Flow> {
    match instr {
        Instruction::Stop => return Ok(Flow::Halt),

        // ========== Console ==========

        Instruction::In { dest } => {
            let value = console.read_value()?;
            trace!(reg = %dest, value, "in");
            state.write_reg(*dest, value);
        }

        Instruction::Out { src } => {
            let value = state.read_reg(*src);
            trace!(reg = %src, value, "out");
            console.write_value(value)?;
        }

        // ========== Arithmetic (wrapping) ==========

        Instruction::Incr { reg, amount } => {
            let result = state.read_reg(*reg).wrapping_add(Value::from(amount.value()));
            state.write_reg(*reg, result);
        }

        Instruction::Add { dest, lhs, rhs } => {
            let result = state.read_reg(*lhs).wrapping_add(state.read_reg(*rhs));
            state.write_reg(*dest, result);
        }

        Instruction::Sub { dest, lhs, rhs } => {
            let result = state.read_reg(*lhs).wrapping_sub(state.read_reg(*rhs));
            state.write_reg(*dest, result);
        }

        Instruction::Mul { dest, lhs, rhs } => {
            let result = state.read_reg(*lhs).wrapping_mul(state.read_reg(*rhs));
            state.write_reg(*dest, result);
        }

        // ========== Arrays ==========

        Instruction::List { dest, size } => {
            let requested = match size {
                ListSize::Literal(n) => u64::from(n.value()),
                ListSize::Indirect(reg) => u64::from(state.read_reg(*reg)),
            };
            let len = checked_len(*dest, requested, config)?;
            state.bind_array(*dest, len);
        }

        Instruction::ListInit { src } => {
            let Some(len) = state.array(*src).map(<[Value]>::len) else {
                debug!(reg = %src, "listinit on unbound array, nothing read");
                return Ok(Flow::Continue);
            };

            let mut values = Vec::with_capacity(len);
            for index in 0..len {
                let value = console.read_element(index)?;
                trace!(reg = %src, index, value, "listinit");
                values.push(value);
            }
            state.arrays.insert(*src, values);
        }

        Instruction::ListSum { dest, src } => {
            let sum = match state.array(*src) {
                Some(values) => values.iter().fold(0, |acc: Value, v| acc.wrapping_add(*v)),
                None => {
                    debug!(reg = %src, "listsum on unbound array, storing 0");
                    0
                }
            };
            state.write_reg(*dest, sum);
        }

        Instruction::TidyUp => state.clear_registers(),
    }

    Ok(Flow::Continue)
}

fn checked_len(register: Register, requested: u64, config: &VMConfig) -> Result<usize> {
    usize::try_from(requested)
        .ok()
        .filter(|len| *len <= config.max_array_len)
        .ok_or(RuntimeError::ArrayTooLarge {
            register,
            requested,
            limit: config.max_array_len,
        })
}

//! Instruction disassembler for MIPS I machine code.
//!
//! Converts a 32-bit instruction word and its address into one
//! human-readable assembly line.
//!
//! # Line grammar
//!
//! - Register format: `<mnemonic> $rd, $rs, $rt`, except the constant
//!   shifts, which print a decimal shift amount in the last slot.
//! - Jump format: `<mnemonic> 0x<target>`, target reconstructed from the
//!   word and the instruction's address.
//! - Immediate format: `<mnemonic> $rt, $rs, 0x<imm>`, except `addi` and
//!   `slti`, which print the immediate as signed decimal.
//! - Anything unrecognized: `invalid instruction 0x<word>`.
//!
//! Hexadecimal is always lowercase with no leading zeros; register
//! operands always go through the name table.
//!
//! # Usage
//!
//! ```
//! use mipsdis_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x00851820, 0), "add $v1, $a0, $a1");
//! ```

use crate::isa::abi::reg;
use crate::isa::decode::{ImmediateOp, Instruction, RegisterOp, decode, jump_target};

/// Disassembles a 32-bit MIPS instruction into a human-readable line.
///
/// `pc` is the address of the word being decoded; it only influences
/// jump-target reconstruction. Unrecognized encodings render as the
/// invalid-instruction diagnostic rather than failing.
pub fn disassemble(word: u32, pc: u32) -> String {
    match decode(word) {
        Instruction::Register {
            op,
            rs,
            rt,
            rd,
            shamt,
        } => disasm_register(op, rs, rt, rd, shamt),
        Instruction::Jump { op, index } => {
            format!("{} {:#x}", op.mnemonic(), jump_target(index, pc))
        }
        Instruction::Immediate { op, rs, rt, imm } => disasm_immediate(op, rs, rt, imm),
        Instruction::Invalid { word } => format!("invalid instruction {word:#x}"),
    }
}

/// Renders a register-format instruction.
fn disasm_register(op: RegisterOp, rs: usize, rt: usize, rd: usize, shamt: u32) -> String {
    match op {
        RegisterOp::Sll | RegisterOp::Srl => {
            format!("{} ${}, ${}, {}", op.mnemonic(), reg(rd), reg(rs), shamt)
        }
        // sra repeats the destination name in the first source slot.
        RegisterOp::Sra => format!("sra ${0}, ${0}, {1}", reg(rd), shamt),
        // jr, jalr, and the hi/lo moves take fewer operands than they
        // print; the listing keeps the full three-register template.
        _ => {
            format!(
                "{} ${}, ${}, ${}",
                op.mnemonic(),
                reg(rd),
                reg(rs),
                reg(rt)
            )
        }
    }
}

/// Renders an immediate-format instruction.
fn disasm_immediate(op: ImmediateOp, rs: usize, rt: usize, imm: u16) -> String {
    match op {
        // addi and slti display the immediate as signed decimal.
        ImmediateOp::Addi | ImmediateOp::Slti => {
            format!("{} ${}, ${}, {}", op.mnemonic(), reg(rt), reg(rs), imm as i16)
        }
        _ => format!("{} ${}, ${}, {imm:#x}", op.mnemonic(), reg(rt), reg(rs)),
    }
}

//! Function codes for the register format.
//!
//! Defines the 6-bit function codes (bits 5-0) that select the operation
//! when the primary opcode is [`super::opcodes::OP_SPECIAL`].

/// Shift Left Logical (SLL).
pub const SLL: u32 = 0x00;

/// Shift Right Logical (SRL).
pub const SRL: u32 = 0x02;

/// Shift Right Arithmetic (SRA).
pub const SRA: u32 = 0x03;

/// Jump Register (JR).
pub const JR: u32 = 0x08;

/// Jump And Link Register (JALR).
pub const JALR: u32 = 0x09;

/// Move From HI (MFHI).
pub const MFHI: u32 = 0x10;

/// Move To HI (MTHI).
pub const MTHI: u32 = 0x11;

/// Move From LO (MFLO).
pub const MFLO: u32 = 0x12;

/// Move To LO (MTLO).
pub const MTLO: u32 = 0x13;

/// Multiply (MULT).
pub const MULT: u32 = 0x18;

/// Multiply Unsigned (MULTU).
pub const MULTU: u32 = 0x19;

/// Divide (DIV).
pub const DIV: u32 = 0x1A;

/// Divide Unsigned (DIVU).
pub const DIVU: u32 = 0x1B;

/// Add (ADD).
pub const ADD: u32 = 0x20;

/// Add Unsigned (ADDU).
pub const ADDU: u32 = 0x21;

/// Subtract (SUB).
pub const SUB: u32 = 0x22;

/// Subtract Unsigned (SUBU).
pub const SUBU: u32 = 0x23;

/// And (AND).
pub const AND: u32 = 0x24;

/// Or (OR).
pub const OR: u32 = 0x25;

/// Exclusive Or (XOR).
pub const XOR: u32 = 0x26;

/// Nor (NOR).
pub const NOR: u32 = 0x27;

/// Set On Less Than (SLT).
pub const SLT: u32 = 0x2A;

/// Set On Less Than Unsigned (SLTU).
pub const SLTU: u32 = 0x2B;

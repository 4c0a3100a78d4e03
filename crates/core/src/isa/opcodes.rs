//! MIPS I primary opcodes.
//!
//! Defines the major opcodes (bits 31-26) understood by the disassembler.
//! Opcode 0 selects the register format (dispatched further on the
//! function code, see [`super::funct`]); opcodes 2 and 3 select the jump
//! format; everything else is immediate format.

/// Register-format instructions, selected further by function code.
pub const OP_SPECIAL: u32 = 0x00;

/// Jump (J).
pub const OP_J: u32 = 0x02;

/// Jump And Link (JAL).
pub const OP_JAL: u32 = 0x03;

/// Branch On Equal (BEQ).
pub const OP_BEQ: u32 = 0x04;

/// Branch On Not Equal (BNE).
pub const OP_BNE: u32 = 0x05;

/// Branch On Less Than Or Equal To Zero (BLEZ).
pub const OP_BLEZ: u32 = 0x06;

/// Branch On Greater Than Zero (BGTZ).
pub const OP_BGTZ: u32 = 0x07;

/// Add Immediate (ADDI).
pub const OP_ADDI: u32 = 0x08;

/// Add Immediate Unsigned (ADDIU).
pub const OP_ADDIU: u32 = 0x09;

/// Set On Less Than Immediate (SLTI).
pub const OP_SLTI: u32 = 0x0A;

/// Set On Less Than Immediate Unsigned (SLTIU).
pub const OP_SLTIU: u32 = 0x0B;

/// And Immediate (ANDI).
pub const OP_ANDI: u32 = 0x0C;

/// Or Immediate (ORI).
pub const OP_ORI: u32 = 0x0D;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0x0F;

/// Load Byte (LB).
pub const OP_LB: u32 = 0x20;

/// Load Word (LW).
pub const OP_LW: u32 = 0x23;

/// Load Byte Unsigned (LBU).
pub const OP_LBU: u32 = 0x24;

/// Load Halfword Unsigned (LHU).
pub const OP_LHU: u32 = 0x25;

/// Store Byte (SB).
pub const OP_SB: u32 = 0x28;

/// Store Halfword (SH).
pub const OP_SH: u32 = 0x29;

/// Store Word (SW).
pub const OP_SW: u32 = 0x2B;

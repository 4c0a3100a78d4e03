//! MIPS I instruction classification.
//!
//! Routes a raw 32-bit word into one of the three MIPS instruction formats
//! and resolves the operation it encodes. The opcode and function-code
//! tables are expressed as tagged enumerations matched exhaustively, so a
//! missing case is a visible gap rather than a silent fallthrough; any
//! encoding outside the recognized sets classifies as [`Instruction::Invalid`].

use crate::isa::funct;
use crate::isa::instruction::{InstructionBits, REGION_MASK};
use crate::isa::opcodes;

/// Register-format operations, selected by the function code under
/// [`opcodes::OP_SPECIAL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterOp {
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Jump register.
    Jr,
    /// Jump and link register.
    Jalr,
    /// Move from HI.
    Mfhi,
    /// Move to HI.
    Mthi,
    /// Move from LO.
    Mflo,
    /// Move to LO.
    Mtlo,
    /// Multiply.
    Mult,
    /// Multiply unsigned.
    Multu,
    /// Divide.
    Div,
    /// Divide unsigned.
    Divu,
    /// Add.
    Add,
    /// Add unsigned.
    Addu,
    /// Subtract.
    Sub,
    /// Subtract unsigned.
    Subu,
    /// Bitwise and.
    And,
    /// Bitwise or.
    Or,
    /// Bitwise exclusive or.
    Xor,
    /// Bitwise nor.
    Nor,
    /// Set on less than.
    Slt,
    /// Set on less than unsigned.
    Sltu,
}

impl RegisterOp {
    /// Resolves a 6-bit function code, or `None` for codes outside the
    /// recognized set.
    pub const fn from_funct(code: u32) -> Option<Self> {
        match code {
            funct::SLL => Some(Self::Sll),
            funct::SRL => Some(Self::Srl),
            funct::SRA => Some(Self::Sra),
            funct::JR => Some(Self::Jr),
            funct::JALR => Some(Self::Jalr),
            funct::MFHI => Some(Self::Mfhi),
            funct::MTHI => Some(Self::Mthi),
            funct::MFLO => Some(Self::Mflo),
            funct::MTLO => Some(Self::Mtlo),
            funct::MULT => Some(Self::Mult),
            funct::MULTU => Some(Self::Multu),
            funct::DIV => Some(Self::Div),
            funct::DIVU => Some(Self::Divu),
            funct::ADD => Some(Self::Add),
            funct::ADDU => Some(Self::Addu),
            funct::SUB => Some(Self::Sub),
            funct::SUBU => Some(Self::Subu),
            funct::AND => Some(Self::And),
            funct::OR => Some(Self::Or),
            funct::XOR => Some(Self::Xor),
            funct::NOR => Some(Self::Nor),
            funct::SLT => Some(Self::Slt),
            funct::SLTU => Some(Self::Sltu),
            _ => None,
        }
    }

    /// Assembly mnemonic for the operation.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Jr => "jr",
            Self::Jalr => "jalr",
            Self::Mfhi => "mfhi",
            Self::Mthi => "mthi",
            Self::Mflo => "mflo",
            Self::Mtlo => "mtlo",
            Self::Mult => "mult",
            Self::Multu => "multu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Add => "add",
            Self::Addu => "addu",
            Self::Sub => "sub",
            Self::Subu => "subu",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Nor => "nor",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
        }
    }
}

/// Jump-format operations (opcodes 2 and 3).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpOp {
    /// Jump.
    J,
    /// Jump and link.
    Jal,
}

impl JumpOp {
    /// Assembly mnemonic for the operation.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::J => "j",
            Self::Jal => "jal",
        }
    }
}

/// Immediate-format operations, selected directly by the primary opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImmediateOp {
    /// Branch on equal.
    Beq,
    /// Branch on not equal.
    Bne,
    /// Branch on less than or equal to zero.
    Blez,
    /// Branch on greater than zero.
    Bgtz,
    /// Add immediate.
    Addi,
    /// Add immediate unsigned.
    Addiu,
    /// Set on less than immediate.
    Slti,
    /// Set on less than immediate unsigned.
    Sltiu,
    /// And immediate.
    Andi,
    /// Or immediate.
    Ori,
    /// Load upper immediate.
    Lui,
    /// Load byte.
    Lb,
    /// Load word.
    Lw,
    /// Load byte unsigned.
    Lbu,
    /// Load halfword unsigned.
    Lhu,
    /// Store byte.
    Sb,
    /// Store halfword.
    Sh,
    /// Store word.
    Sw,
}

impl ImmediateOp {
    /// Resolves a 6-bit primary opcode, or `None` for opcodes outside the
    /// recognized set.
    pub const fn from_opcode(opcode: u32) -> Option<Self> {
        match opcode {
            opcodes::OP_BEQ => Some(Self::Beq),
            opcodes::OP_BNE => Some(Self::Bne),
            opcodes::OP_BLEZ => Some(Self::Blez),
            opcodes::OP_BGTZ => Some(Self::Bgtz),
            opcodes::OP_ADDI => Some(Self::Addi),
            opcodes::OP_ADDIU => Some(Self::Addiu),
            opcodes::OP_SLTI => Some(Self::Slti),
            opcodes::OP_SLTIU => Some(Self::Sltiu),
            opcodes::OP_ANDI => Some(Self::Andi),
            opcodes::OP_ORI => Some(Self::Ori),
            opcodes::OP_LUI => Some(Self::Lui),
            opcodes::OP_LB => Some(Self::Lb),
            opcodes::OP_LW => Some(Self::Lw),
            opcodes::OP_LBU => Some(Self::Lbu),
            opcodes::OP_LHU => Some(Self::Lhu),
            opcodes::OP_SB => Some(Self::Sb),
            opcodes::OP_SH => Some(Self::Sh),
            opcodes::OP_SW => Some(Self::Sw),
            _ => None,
        }
    }

    /// Assembly mnemonic for the operation.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blez => "blez",
            Self::Bgtz => "bgtz",
            Self::Addi => "addi",
            Self::Addiu => "addiu",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Lui => "lui",
            Self::Lb => "lb",
            Self::Lw => "lw",
            Self::Lbu => "lbu",
            Self::Lhu => "lhu",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
        }
    }
}

/// A classified instruction word.
///
/// Each variant carries the fields its format consumes; the raw word is
/// kept only for the invalid case, where it feeds the diagnostic line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Register format (opcode 0).
    Register {
        /// Operation selected by the function code.
        op: RegisterOp,
        /// First source register index.
        rs: usize,
        /// Second source register index.
        rt: usize,
        /// Destination register index.
        rd: usize,
        /// Constant shift amount.
        shamt: u32,
    },
    /// Jump format (opcodes 2 and 3).
    Jump {
        /// Jump or jump-and-link.
        op: JumpOp,
        /// 26-bit pseudo-direct target index.
        index: u32,
    },
    /// Immediate format (every other recognized opcode).
    Immediate {
        /// Operation selected by the primary opcode.
        op: ImmediateOp,
        /// Source register index.
        rs: usize,
        /// Target register index.
        rt: usize,
        /// Raw 16-bit immediate; signedness is a display decision.
        imm: u16,
    },
    /// Unrecognized encoding, kept verbatim for the diagnostic line.
    Invalid {
        /// The raw word.
        word: u32,
    },
}

/// Classifies a 32-bit instruction word.
///
/// The top 6 bits route the word: opcode 0 to the register format
/// (resolved further on the function code), opcodes 2 and 3 to the jump
/// format, and everything else to the immediate format. Codes outside the
/// recognized sets classify as [`Instruction::Invalid`]; there is no error
/// path.
pub fn decode(word: u32) -> Instruction {
    match word.opcode() {
        opcodes::OP_SPECIAL => RegisterOp::from_funct(word.funct()).map_or(
            Instruction::Invalid { word },
            |op| Instruction::Register {
                op,
                rs: word.rs(),
                rt: word.rt(),
                rd: word.rd(),
                shamt: word.shamt(),
            },
        ),
        opcodes::OP_J => Instruction::Jump {
            op: JumpOp::J,
            index: word.target(),
        },
        opcodes::OP_JAL => Instruction::Jump {
            op: JumpOp::Jal,
            index: word.target(),
        },
        opcode => ImmediateOp::from_opcode(opcode).map_or(
            Instruction::Invalid { word },
            |op| Instruction::Immediate {
                op,
                rs: word.rs(),
                rt: word.rt(),
                imm: word.imm(),
            },
        ),
    }
}

/// Reconstructs the absolute target of a pseudo-direct jump.
///
/// The low 28 bits come from the word's 26-bit index shifted onto a word
/// boundary; the top 4 bits come from the address of the instruction being
/// decoded, not from the word itself.
#[inline]
pub const fn jump_target(index: u32, pc: u32) -> u32 {
    (index << 2) | (pc & REGION_MASK)
}

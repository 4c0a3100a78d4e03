//! MIPS register name table.
//!
//! Maps the 5-bit register-number fields to their symbolic assembly names.
//! The table is fixed and shared by every decode call; register operands
//! are always rendered through it, never as raw numbers.

/// Symbolic names for registers 0-31, indexed by register number.
pub const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", //
    "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7", //
    "t8", "t9", "s0", "s1", "s2", "s3", "s4", "s5", //
    "s6", "s7", "k0", "k1", "gp", "sp", "s8", "ra",
];

/// Returns the symbolic name for a register index.
#[inline]
pub fn reg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("??")
}

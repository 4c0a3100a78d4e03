//! # ISA Unit Tests
//!
//! This module contains unit tests for the MIPS I instruction-set layer.
//! It covers classification, field extraction, and disassembly.

//! # Listing Walk Tests
//!
//! This module contains unit tests for the listing walk over flat binary
//! images, the image loader, and start-address parsing.

use std::io::Write;

use mipsdis_core::error::Error;
use mipsdis_core::listing::{parse_start_address, write_listing};
use mipsdis_core::loader::load_binary;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

/// Helper to run a listing over words serialized little-endian.
fn listing_of(words: &[u32], start: u32) -> String {
    let mut image = Vec::new();
    for word in words {
        image.extend_from_slice(&word.to_le_bytes());
    }
    let mut out = Vec::new();
    write_listing(&image, start, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Helper to create a temporary binary file for loader tests.
fn create_temp_binary(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

// ──────────────────────────────────────────────────────────
// Listing walk
// ──────────────────────────────────────────────────────────

#[test]
fn lists_one_line_per_word() {
    let text = listing_of(&[0x00851820, 0x08000010], 0);
    assert_eq!(text, "add $v1, $a0, $a1\nj 0x40\n");
}

#[test]
fn empty_image_lists_nothing() {
    let text = listing_of(&[], 0);
    assert_eq!(text, "");
}

#[test]
fn start_address_seeds_the_jump_region() {
    let text = listing_of(&[0x08000010], 0x80000000);
    assert_eq!(text, "j 0x80000040\n");
}

#[test]
fn pc_advances_by_four_per_word() {
    // The second jump decodes 4 bytes later, across a region boundary:
    // the first word sits at 0x0FFFFFFC, the second at 0x10000000.
    let text = listing_of(&[0x08000000, 0x08000000], 0x0FFFFFF8);
    assert_eq!(text, "j 0x0\nj 0x10000000\n");
}

#[test]
fn invalid_words_keep_the_walk_going() {
    let text = listing_of(&[0xFC000000, 0x00851820], 0);
    assert_eq!(text, "invalid instruction 0xfc000000\nadd $v1, $a0, $a1\n");
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut image = 0x00851820u32.to_le_bytes().to_vec();
    image.extend_from_slice(&[0xAA, 0xBB]);
    let mut out = Vec::new();
    write_listing(&image, 0, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "add $v1, $a0, $a1\n");
}

// ──────────────────────────────────────────────────────────
// Start-address parsing
// ──────────────────────────────────────────────────────────

#[test]
fn parses_prefixed_hex_addresses() {
    assert_eq!(parse_start_address("0x0").unwrap(), 0);
    assert_eq!(parse_start_address("0x40").unwrap(), 0x40);
    assert_eq!(parse_start_address("0xbfc00000").unwrap(), 0xBFC0_0000);
    assert_eq!(parse_start_address("0xFFFFFFFF").unwrap(), u32::MAX);
}

#[test]
fn rejects_addresses_without_prefix() {
    assert!(matches!(
        parse_start_address("40"),
        Err(Error::StartAddressNotHex { .. })
    ));
}

#[test]
fn rejects_bare_prefix() {
    assert!(matches!(
        parse_start_address("0x"),
        Err(Error::StartAddressNotHex { .. })
    ));
}

#[test]
fn rejects_non_hex_payload() {
    assert!(matches!(
        parse_start_address("0xzz"),
        Err(Error::StartAddressInvalid { .. })
    ));
}

#[test]
fn rejects_addresses_wider_than_32_bits() {
    assert!(matches!(
        parse_start_address("0x1ffffffff"),
        Err(Error::StartAddressInvalid { .. })
    ));
}

// ──────────────────────────────────────────────────────────
// Image loading
// ──────────────────────────────────────────────────────────

#[test]
fn load_binary_roundtrip() {
    let data = 0x00851820u32.to_le_bytes();
    let file = create_temp_binary(&data);
    let image = load_binary(file.path()).unwrap();
    assert_eq!(image, data);
}

#[test]
fn load_binary_empty_file() {
    let file = create_temp_binary(&[]);
    let image = load_binary(file.path()).unwrap();
    assert!(image.is_empty());
}

#[test]
fn load_binary_missing_file_names_the_path() {
    let err = load_binary("no/such/image.bin").unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
    assert!(err.to_string().contains("no/such/image.bin"));
}

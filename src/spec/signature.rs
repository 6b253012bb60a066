// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Helpers for matching the four-byte record signatures against raw archive bytes.

use crate::error::{Result, ZipError};
use crate::spec::consts::*;

/// Returns the bytes of a signature in the order they appear within an archive.
pub fn to_bytes(signature: u32) -> [u8; SIGNATURE_LENGTH] {
    signature.to_le_bytes()
}

/// Read a little-endian signature from the start of the buffer.
pub fn read(buffer: &[u8]) -> Result<u32> {
    match buffer.get(..SIGNATURE_LENGTH) {
        Some(bytes) => Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
        None => Err(ZipError::SignatureTruncated(buffer.len())),
    }
}

/// Assert that the buffer starts with the expected signature.
pub fn assert(buffer: &[u8], expected: u32) -> Result<()> {
    match read(buffer)? {
        actual if actual == expected => Ok(()),
        actual => Err(ZipError::UnexpectedHeaderError(actual, expected)),
    }
}

/// Returns the offset of the last occurrence of the signature within the buffer.
///
/// The end of central directory record may be followed by a variable-length comment, so its start can only be
/// found by searching backwards from the end of the data for its signature.
pub fn reverse_search(buffer: &[u8], signature: u32) -> Option<usize> {
    let signature = to_bytes(signature);

    if buffer.len() < SIGNATURE_LENGTH {
        return None;
    }

    (0..=buffer.len() - SIGNATURE_LENGTH).rev().find(|&index| buffer[index..index + SIGNATURE_LENGTH] == signature)
}

/// Returns the record name(s) a signature is known by, for diagnostics.
///
/// Bit patterns shared between two roles report both.
pub fn name(signature: u32) -> Option<&'static str> {
    match signature {
        LOCAL_HEADER_SIGNATURE => Some("local file header"),
        CENTRAL_HEADER_SIGNATURE => Some("central directory file header"),
        END_OF_CENTRAL_DIRECTORY_SIGNATURE => Some("end of central directory record"),
        DATA_DESCRIPTOR_SIGNATURE => Some("data descriptor / spanning marker"),
        SPANNING_TEMP_SIGNATURE => Some("temporary spanning marker"),
        ZIP64_CENTRAL_FILE_HEADER_SIGNATURE => Some("zip64 end of central directory record"),
        ZIP64_CENTRAL_DIR_LOCATOR_SIGNATURE => Some("zip64 end of central directory locator / archive extra data"),
        CENTRAL_HEADER_DIGITAL_SIGNATURE => Some("central directory digital signature"),
        _ => None,
    }
}

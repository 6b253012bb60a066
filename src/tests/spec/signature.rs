// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::ZipError;
use crate::spec::consts::*;
use crate::spec::signature;

#[test]
fn read_and_assert() {
    let buffer = [0x50, 0x4b, 0x03, 0x04, 0x14, 0x00];

    assert_eq!(Ok(LOCAL_HEADER_SIGNATURE), signature::read(&buffer));
    assert!(signature::assert(&buffer, LOCAL_HEADER_SIGNATURE).is_ok());
    assert_eq!(
        Err(ZipError::UnexpectedHeaderError(LOCAL_HEADER_SIGNATURE, CENTRAL_HEADER_SIGNATURE)),
        signature::assert(&buffer, CENTRAL_HEADER_SIGNATURE)
    );
}

#[test]
fn read_truncated() {
    assert_eq!(Err(ZipError::SignatureTruncated(0)), signature::read(&[]));
    assert_eq!(Err(ZipError::SignatureTruncated(3)), signature::read(b"PK\x05"));
    assert_eq!(Err(ZipError::SignatureTruncated(2)), signature::assert(b"PK", END_OF_CENTRAL_DIRECTORY_SIGNATURE));
}

#[test]
fn to_bytes_matches_wire_order() {
    assert_eq!(*b"PK\x01\x02", signature::to_bytes(CENTRAL_HEADER_SIGNATURE));
    assert_eq!(*b"PK00", signature::to_bytes(SPANNING_TEMP_SIGNATURE));
}

#[test]
fn reverse_search_empty() {
    assert!(signature::reverse_search(&[], END_OF_CENTRAL_DIRECTORY_SIGNATURE).is_none());
    assert!(signature::reverse_search(b"PK\x05", END_OF_CENTRAL_DIRECTORY_SIGNATURE).is_none());
    assert!(signature::reverse_search(&[0; 64], END_OF_CENTRAL_DIRECTORY_SIGNATURE).is_none());
}

#[test]
fn reverse_search_exact() {
    assert_eq!(Some(0), signature::reverse_search(b"PK\x05\x06", END_OF_CENTRAL_DIRECTORY_SIGNATURE));
}

#[test]
fn reverse_search_finds_last_occurrence() {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(b"PK\x05\x06");
    buffer.extend_from_slice(&[0; 18]);
    buffer.extend_from_slice(b"PK\x05\x06");
    buffer.extend_from_slice(&[0; 16]);
    // A comment that happens to contain a partial signature at the very end.
    buffer.extend_from_slice(b"PK\x05");

    assert_eq!(Some(22), signature::reverse_search(&buffer, END_OF_CENTRAL_DIRECTORY_SIGNATURE));
    assert_eq!(None, signature::reverse_search(&buffer, LOCAL_HEADER_SIGNATURE));
}

#[test]
fn names() {
    assert_eq!(Some("local file header"), signature::name(LOCAL_HEADER_SIGNATURE));
    assert_eq!(signature::name(DATA_DESCRIPTOR_SIGNATURE), signature::name(SPANNING_SIGNATURE));
    assert_eq!(signature::name(ZIP64_CENTRAL_DIR_LOCATOR_SIGNATURE), signature::name(ARCHIVE_EXTRA_DATA_SIGNATURE));
    assert_eq!(None, signature::name(0xdeadbeef));
}

// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::ZipError;
use crate::spec::compression::CompressionMethod;

#[test]
fn wire_values() {
    let pairs = [
        (CompressionMethod::Stored, 0u16),
        (CompressionMethod::Deflated, 8),
        (CompressionMethod::Deflate64, 9),
        (CompressionMethod::BZip2, 11),
        (CompressionMethod::WinZipAES, 99),
    ];

    for (method, value) in pairs {
        assert_eq!(value, u16::from(method));
        assert_eq!(method, CompressionMethod::try_from(value).expect("known method identifier"));
    }
}

#[test]
fn unknown_identifier_rejected() {
    assert_eq!(Err(ZipError::UnknownCompressionMethod(14)), CompressionMethod::try_from(14));
    assert_eq!(Err(ZipError::UnknownCompressionMethod(u16::MAX)), CompressionMethod::try_from(u16::MAX));
}

#[test]
fn unsupported_methods_are_representable_but_rejected() {
    assert_eq!(Ok(CompressionMethod::Stored), CompressionMethod::Stored.ensure_supported());
    assert_eq!(Ok(CompressionMethod::Deflated), CompressionMethod::Deflated.ensure_supported());

    assert_eq!(Err(ZipError::CompressionNotSupported(9)), CompressionMethod::Deflate64.ensure_supported());
    assert_eq!(Err(ZipError::CompressionNotSupported(11)), CompressionMethod::BZip2.ensure_supported());
    assert_eq!(Err(ZipError::CompressionNotSupported(99)), CompressionMethod::WinZipAES.ensure_supported());
}

#[test]
fn unsupported_error_message() {
    let error = CompressionMethod::BZip2.ensure_supported().unwrap_err();
    assert_eq!("compression not supported: 11", error.to_string());
}

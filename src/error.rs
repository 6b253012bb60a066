// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ZipError {
    #[error("compression not supported: {0}")]
    CompressionNotSupported(u16),
    #[error("unknown compression method identifier: {0}")]
    UnknownCompressionMethod(u16),

    #[error("code page not supported: {0}")]
    UnsupportedCodePage(u16),
    #[error("requested {length} bytes for conversion but only {available} are available")]
    LengthOutOfRange { length: usize, available: usize },
    #[error("character {character:?} cannot be represented in code page {code_page}")]
    UnmappableCharacter { character: char, code_page: u16 },

    #[error("expected a four byte signature but only {0} bytes were available")]
    SignatureTruncated(usize),
    #[error("Encountered an unexpected header (actual: {0:#x}, expected: {1:#x}).")]
    UnexpectedHeaderError(u32, u32),
}

// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

/// A compression method identifier as stored in local and central headers.
///
/// Every method listed here can be represented so that callers are able to recognise it, but only [`Stored`] and
/// [`Deflated`] are supported. Use [`CompressionMethod::ensure_supported()`] before acting on an entry's method.
///
/// [`Stored`]: CompressionMethod::Stored
/// [`Deflated`]: CompressionMethod::Deflated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionMethod {
    /// A direct copy of the file contents.
    Stored,
    /// A sliding dictionary of up to 32KiB with Huffman coding.
    Deflated,
    /// The 64KiB window extension to deflate.
    Deflate64,
    BZip2,
    /// WinZip's AES encryption marker. The real method is held in the entry's AES extra field.
    WinZipAES,
}

impl CompressionMethod {
    /// Returns whether collaborators built on this vocabulary can act on entries using this method.
    pub fn is_supported(&self) -> bool {
        matches!(self, CompressionMethod::Stored | CompressionMethod::Deflated)
    }

    /// Returns this method, or an error if it's representable but not supported.
    pub fn ensure_supported(self) -> Result<Self> {
        if !self.is_supported() {
            tracing::debug!(method = ?self, "rejecting unsupported compression method");
            return Err(ZipError::CompressionNotSupported(self.into()));
        }

        Ok(self)
    }
}

impl TryFrom<u16> for CompressionMethod {
    type Error = ZipError;

    // Convert a u16 stored with little endianness into a compression method.
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#445
    fn try_from(value: u16) -> Result<Self> {
        match value {
            0 => Ok(CompressionMethod::Stored),
            8 => Ok(CompressionMethod::Deflated),
            9 => Ok(CompressionMethod::Deflate64),
            11 => Ok(CompressionMethod::BZip2),
            99 => Ok(CompressionMethod::WinZipAES),
            _ => Err(ZipError::UnknownCompressionMethod(value)),
        }
    }
}

impl From<&CompressionMethod> for u16 {
    // Convert a compression method into its relevant u16 stored with little endianness.
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#445
    fn from(method: &CompressionMethod) -> u16 {
        match method {
            CompressionMethod::Stored => 0,
            CompressionMethod::Deflated => 8,
            CompressionMethod::Deflate64 => 9,
            CompressionMethod::BZip2 => 11,
            CompressionMethod::WinZipAES => 99,
        }
    }
}

impl From<CompressionMethod> for u16 {
    fn from(method: CompressionMethod) -> u16 {
        (&method).into()
    }
}

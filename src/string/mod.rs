// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Conversion of entry names and comments between raw archive bytes and strings.
//!
//! Names were stored in whatever code page the producing host used long before the format gained a UTF-8 flag, so
//! reading them correctly means matching that code page at runtime. [`TextCodec`] carries the code page explicitly
//! and is the preferred interface. The free functions in this module use the process-wide default instead.

pub(crate) mod codepage;
pub(crate) mod default;
pub(crate) mod host;
pub(crate) mod oem;

pub use codepage::CodePage;
pub use default::{default_code_page, set_default_code_page};
pub use host::host_code_page;

use crate::error::{Result, ZipError};

/// Converts between bytes and strings using a single code page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextCodec {
    code_page: CodePage,
}

impl TextCodec {
    /// Constructs a new codec for the given code page.
    ///
    /// The code page isn't validated until the first conversion.
    pub fn new(code_page: CodePage) -> Self {
        Self { code_page }
    }

    /// Returns the code page this codec converts with.
    pub fn code_page(&self) -> CodePage {
        self.code_page
    }

    /// Decodes all of the provided bytes.
    pub fn decode(&self, data: &[u8]) -> Result<String> {
        self.decode_prefix(data, data.len())
    }

    /// Decodes `data[..length]`.
    ///
    /// # Errors
    /// A `length` larger than the buffer is rejected rather than clamped.
    #[tracing::instrument(skip(data))]
    pub fn decode_prefix(&self, data: &[u8], length: usize) -> Result<String> {
        let data = data.get(..length).ok_or(ZipError::LengthOutOfRange { length, available: data.len() })?;
        let (text, lossy) = self.code_page.backend()?.decode(data);

        if lossy {
            tracing::debug!("malformed byte sequences were replaced with U+FFFD");
        }

        Ok(text)
    }

    /// Encodes the string into bytes.
    ///
    /// # Errors
    /// Any character the code page cannot represent fails the whole conversion.
    #[tracing::instrument(skip(text))]
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        self.code_page.backend()?.encode(text, self.code_page.0)
    }
}

impl Default for TextCodec {
    /// A codec using the process-wide default code page at the time of the call.
    fn default() -> Self {
        Self::new(default_code_page())
    }
}

impl From<CodePage> for TextCodec {
    fn from(code_page: CodePage) -> Self {
        Self::new(code_page)
    }
}

/// Converts the first `length` bytes to a string using the default code page.
///
/// No data converts to an empty string.
pub fn bytes_to_string_with_length(data: Option<&[u8]>, length: usize) -> Result<String> {
    match data {
        Some(data) => TextCodec::default().decode_prefix(data, length),
        None => Ok(String::new()),
    }
}

/// Converts all of the bytes to a string using the default code page.
///
/// No data converts to an empty string.
pub fn bytes_to_string(data: Option<&[u8]>) -> Result<String> {
    match data {
        Some(data) => bytes_to_string_with_length(Some(data), data.len()),
        None => Ok(String::new()),
    }
}

/// Converts a string to bytes using the default code page.
///
/// No string converts to an empty vector.
pub fn string_to_bytes(text: Option<&str>) -> Result<Vec<u8>> {
    match text {
        Some(text) => TextCodec::default().encode(text),
        None => Ok(Vec::new()),
    }
}

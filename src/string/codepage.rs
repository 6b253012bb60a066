// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};
use crate::string::oem::{self, Table};

use std::borrow::Cow;
use std::fmt;

/// A numeric legacy code page identifier, as used by Windows and DOS.
///
/// Any value can be held. Whether the code page is supported is only checked once a conversion is attempted, see
/// [`CodePage::is_supported()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodePage(pub u16);

impl CodePage {
    pub const IBM437: CodePage = CodePage(437);
    pub const IBM850: CodePage = CodePage(850);
    pub const IBM866: CodePage = CodePage(866);
    pub const SHIFT_JIS: CodePage = CodePage(932);
    pub const GBK: CodePage = CodePage(936);
    pub const WINDOWS_1250: CodePage = CodePage(1250);
    pub const WINDOWS_1251: CodePage = CodePage(1251);
    pub const WINDOWS_1252: CodePage = CodePage(1252);
    pub const US_ASCII: CodePage = CodePage(20127);
    pub const UTF8: CodePage = CodePage(65001);

    /// Returns whether conversions using this code page are available in this build.
    pub fn is_supported(self) -> bool {
        self.backend().is_ok()
    }

    pub(crate) fn backend(self) -> Result<Backend> {
        match self.0 {
            437 => Ok(Backend::Table(&oem::CP437)),
            850 => Ok(Backend::Table(&oem::CP850)),
            20127 => Ok(Backend::Ascii),
            65001 => Ok(Backend::Utf8),
            #[cfg(feature = "encoding")]
            value => match encoding_for(value) {
                Some(encoding) => Ok(Backend::Encoding(encoding)),
                None => Err(ZipError::UnsupportedCodePage(value)),
            },
            #[cfg(not(feature = "encoding"))]
            value => Err(ZipError::UnsupportedCodePage(value)),
        }
    }
}

impl From<u16> for CodePage {
    fn from(value: u16) -> Self {
        CodePage(value)
    }
}

impl From<CodePage> for u16 {
    fn from(value: CodePage) -> Self {
        value.0
    }
}

impl fmt::Display for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cp{}", self.0)
    }
}

/// The conversion routine behind a code page.
#[derive(Clone, Copy)]
pub(crate) enum Backend {
    Table(&'static Table),
    Ascii,
    Utf8,
    #[cfg(feature = "encoding")]
    Encoding(&'static encoding_rs::Encoding),
}

impl Backend {
    /// Decode the bytes, returning whether any malformed sequence was replaced with U+FFFD.
    pub(crate) fn decode(self, data: &[u8]) -> (String, bool) {
        match self {
            Backend::Table(table) => (oem::decode(table, data), false),
            Backend::Ascii => {
                let lossy = !data.is_ascii();
                let text = data.iter().map(|&byte| if byte.is_ascii() { char::from(byte) } else { '\u{fffd}' });
                (text.collect(), lossy)
            }
            Backend::Utf8 => match String::from_utf8_lossy(data) {
                Cow::Borrowed(text) => (text.to_owned(), false),
                Cow::Owned(text) => (text, true),
            },
            #[cfg(feature = "encoding")]
            Backend::Encoding(encoding) => {
                let (text, lossy) = encoding.decode_without_bom_handling(data);
                (text.into_owned(), lossy)
            }
        }
    }

    pub(crate) fn encode(self, text: &str, code_page: u16) -> Result<Vec<u8>> {
        match self {
            Backend::Table(table) => oem::encode(table, text, code_page),
            Backend::Ascii => match text.chars().find(|character| !character.is_ascii()) {
                Some(character) => Err(ZipError::UnmappableCharacter { character, code_page }),
                None => Ok(text.as_bytes().to_vec()),
            },
            Backend::Utf8 => Ok(text.as_bytes().to_vec()),
            #[cfg(feature = "encoding")]
            Backend::Encoding(encoding) => {
                let (bytes, _, unmappable) = encoding.encode(text);

                if !unmappable {
                    return Ok(bytes.into_owned());
                }

                // encoding_rs substitutes numeric character references, so find the culprit for the error instead.
                let mut scratch = [0; 4];
                let character = text
                    .chars()
                    .find(|character| encoding.encode(character.encode_utf8(&mut scratch)).2)
                    .unwrap_or(char::REPLACEMENT_CHARACTER);

                Err(ZipError::UnmappableCharacter { character, code_page })
            }
        }
    }
}

#[cfg(feature = "encoding")]
fn encoding_for(code_page: u16) -> Option<&'static encoding_rs::Encoding> {
    use encoding_rs::*;

    let encoding = match code_page {
        866 => IBM866,
        874 => WINDOWS_874,
        932 => SHIFT_JIS,
        936 => GBK,
        949 => EUC_KR,
        950 => BIG5,
        1250 => WINDOWS_1250,
        1251 => WINDOWS_1251,
        1252 => WINDOWS_1252,
        1253 => WINDOWS_1253,
        1254 => WINDOWS_1254,
        1255 => WINDOWS_1255,
        1256 => WINDOWS_1256,
        1257 => WINDOWS_1257,
        1258 => WINDOWS_1258,
        10000 => MACINTOSH,
        10007 => X_MAC_CYRILLIC,
        20866 => KOI8_R,
        20932 => EUC_JP,
        21866 => KOI8_U,
        28592 => ISO_8859_2,
        28593 => ISO_8859_3,
        28594 => ISO_8859_4,
        28595 => ISO_8859_5,
        28596 => ISO_8859_6,
        28597 => ISO_8859_7,
        28598 => ISO_8859_8,
        28603 => ISO_8859_13,
        28604 => ISO_8859_14,
        28605 => ISO_8859_15,
        28606 => ISO_8859_16,
        38598 => ISO_8859_8_I,
        50220 => ISO_2022_JP,
        51932 => EUC_JP,
        51936 => GBK,
        51949 => EUC_KR,
        54936 => GB18030,
        _ => return None,
    };

    Some(encoding)
}

// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! # zip_constants
//!
//! The binary vocabulary shared by every ZIP reader and writer: record signatures, fixed header sizes, version
//! thresholds, compression method identifiers and general purpose flags, plus a codec for the legacy code pages
//! entry names and comments were historically stored in.
//!
//! This crate performs no I/O, compression, encryption or CRC computation. It only supplies the literal values and
//! conversions those layers agree on.
//!
//! ## Features
//! - Bit-exact constants following the [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT).
//! - Built-in code pages 437 and 850, plus US-ASCII and UTF-8.
//! - Windows, ISO-8859 and CJK code pages via `encoding_rs` (the `encoding` feature, enabled by default).
//!
//! ## Example
//! ```
//! use zip_constants::spec::consts::LOCAL_HEADER_SIGNATURE;
//! use zip_constants::{CodePage, TextCodec};
//!
//! assert_eq!(&LOCAL_HEADER_SIGNATURE.to_le_bytes(), b"PK\x03\x04");
//!
//! let codec = TextCodec::new(CodePage::IBM850);
//! let raw = codec.encode("café.txt").unwrap();
//! assert_eq!("café.txt", codec.decode(&raw).unwrap());
//! ```

pub mod error;
pub mod spec;
pub mod string;

pub use crate::spec::compression::CompressionMethod;
pub use crate::spec::header::GeneralPurposeFlag;
pub use crate::string::{CodePage, TextCodec};

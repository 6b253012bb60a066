// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::compression::CompressionMethod;
use crate::spec::consts::{VERSION_MADE_BY, VERSION_STRONG_ENCRYPTION, VERSION_ZIP64};
use crate::spec::header::GeneralPurposeFlag;

/// The properties of an entry which decide its "version needed to extract".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryFeatures<'a> {
    pub filename: &'a str,
    pub compression: CompressionMethod,
    pub flags: GeneralPurposeFlag,
    pub zip64: bool,
}

impl<'a> EntryFeatures<'a> {
    /// Constructs features for an entry without flags or Zip64 extensions.
    pub fn new(filename: &'a str, compression: CompressionMethod) -> Self {
        Self { filename, compression, flags: GeneralPurposeFlag::empty(), zip64: false }
    }

    pub fn flags(mut self, flags: GeneralPurposeFlag) -> Self {
        self.flags = flags;
        self
    }

    pub fn zip64(mut self, zip64: bool) -> Self {
        self.zip64 = zip64;
        self
    }
}

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#443
pub fn needed_to_extract(features: &EntryFeatures<'_>) -> u16 {
    let mut version = match features.compression {
        CompressionMethod::Stored => 10,
        CompressionMethod::Deflated => 20,
        CompressionMethod::Deflate64 => 21,
        CompressionMethod::BZip2 => 46,
        CompressionMethod::WinZipAES => 51,
    };

    if features.filename.ends_with('/') || features.flags.contains(GeneralPurposeFlag::ENCRYPTED) {
        version = std::cmp::max(version, 20);
    }

    if features.zip64 {
        version = std::cmp::max(version, VERSION_ZIP64);
    }

    if features.flags.contains(GeneralPurposeFlag::STRONG_ENCRYPTION) {
        version = std::cmp::max(version, VERSION_STRONG_ENCRYPTION);
    }

    version
}

/// Returns whether an entry declaring this "version needed to extract" is within what we declare as producer.
///
/// The upper byte of the field identifies the host system and is ignored.
pub fn can_extract(version_needed: u16) -> bool {
    (version_needed & 0xff) <= VERSION_MADE_BY
}

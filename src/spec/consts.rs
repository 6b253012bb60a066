// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Literal signatures, record sizes and version numbers.
//!
//! Every signature is four ASCII bytes `'P' 'K' b3 b4` read as a little-endian u32. Some bit patterns serve two
//! roles within the format; each role keeps its own name.

/// Builds a signature from its two role bytes, ie. `'P' | 'K' << 8 | b3 << 16 | b4 << 24`.
const fn signature(b3: u8, b4: u8) -> u32 {
    u32::from_le_bytes([b'P', b'K', b3, b4])
}

/// The length in bytes of a signature. All signatures are u32s, so 4 bytes long.
pub const SIGNATURE_LENGTH: usize = 4;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#437
pub const LOCAL_HEADER_SIGNATURE: u32 = signature(3, 4);

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312
pub const CENTRAL_HEADER_SIGNATURE: u32 = signature(1, 2);

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316
pub const END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = signature(5, 6);

/// Precedes the CRC and sizes written after the entry data when they weren't known up front (ie. when the output
/// couldn't be seeked back to patch the local header).
///
/// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#439
pub const DATA_DESCRIPTOR_SIGNATURE: u32 = signature(7, 8);

/// Marks the first segment of a split or spanned archive. Same bit pattern as [`DATA_DESCRIPTOR_SIGNATURE`].
///
/// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#853
pub const SPANNING_SIGNATURE: u32 = signature(7, 8);

/// Written by some tools at the start of an archive that was expected to span but fit in a single segment.
pub const SPANNING_TEMP_SIGNATURE: u32 = signature(b'0', b'0');

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4314
pub const ZIP64_CENTRAL_FILE_HEADER_SIGNATURE: u32 = signature(6, 6);

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4315
pub const ZIP64_CENTRAL_DIR_LOCATOR_SIGNATURE: u32 = signature(6, 7);

/// Introduces the archive extra data record used when the central directory is encrypted. Same bit pattern as
/// [`ZIP64_CENTRAL_DIR_LOCATOR_SIGNATURE`].
///
/// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4311
pub const ARCHIVE_EXTRA_DATA_SIGNATURE: u32 = signature(6, 7);

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4313
pub const CENTRAL_HEADER_DIGITAL_SIGNATURE: u32 = signature(5, 5);

// Record sizes, excluding any variable length fields.

/// Local file header, up to and including the extra field length.
pub const LOCAL_HEADER_BASE_SIZE: usize = 30;

/// Central directory header, up to and including the relative offset of the local header.
pub const CENTRAL_HEADER_BASE_SIZE: usize = 46;

/// End of central directory record, up to and including the comment length.
pub const END_OF_CENTRAL_RECORD_BASE_SIZE: usize = 22;

/// Signature, CRC and two 32-bit sizes.
pub const DATA_DESCRIPTOR_SIZE: usize = 16;

/// CRC and two 64-bit sizes. Unlike [`DATA_DESCRIPTOR_SIZE`], this doesn't count the signature.
pub const ZIP64_DATA_DESCRIPTOR_SIZE: usize = 20;

/// The 'classic' (ZipCrypto) encryption header stored before any entry data.
pub const CRYPTO_HEADER_SIZE: usize = 12;

// Versions, as stored in the low byte of the "version made by" and "version needed to extract" fields.
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#443

/// The version we declare as producer. Entries needing a later version can't be handled by collaborators using this
/// vocabulary.
pub const VERSION_MADE_BY: u16 = 45;

/// The minimum version required to support strong encryption.
pub const VERSION_STRONG_ENCRYPTION: u16 = 50;

/// The version required for Zip64 extensions.
pub const VERSION_ZIP64: u16 = 45;

/// Older upper-case names for the constants above.
///
/// These are plain aliases kept for callers written against the short historical names.
pub mod legacy {
    use super::*;

    #[deprecated(note = "use `LOCAL_HEADER_SIGNATURE` instead")]
    pub const LOCSIG: u32 = LOCAL_HEADER_SIGNATURE;
    #[deprecated(note = "use `CENTRAL_HEADER_SIGNATURE` instead")]
    pub const CENSIG: u32 = CENTRAL_HEADER_SIGNATURE;
    #[deprecated(note = "use `END_OF_CENTRAL_DIRECTORY_SIGNATURE` instead")]
    pub const ENDSIG: u32 = END_OF_CENTRAL_DIRECTORY_SIGNATURE;
    #[deprecated(note = "use `DATA_DESCRIPTOR_SIGNATURE` instead")]
    pub const EXTSIG: u32 = DATA_DESCRIPTOR_SIGNATURE;
    #[deprecated(note = "use `SPANNING_SIGNATURE` instead")]
    pub const SPANNINGSIG: u32 = SPANNING_SIGNATURE;
    #[deprecated(note = "use `SPANNING_TEMP_SIGNATURE` instead")]
    pub const SPANTEMPSIG: u32 = SPANNING_TEMP_SIGNATURE;
    #[deprecated(note = "use `ZIP64_CENTRAL_FILE_HEADER_SIGNATURE` instead")]
    pub const CENSIG64: u32 = ZIP64_CENTRAL_FILE_HEADER_SIGNATURE;
    #[deprecated(note = "use `CENTRAL_HEADER_DIGITAL_SIGNATURE` instead")]
    pub const CENDIGITALSIG: u32 = CENTRAL_HEADER_DIGITAL_SIGNATURE;

    #[deprecated(note = "use `LOCAL_HEADER_BASE_SIZE` instead")]
    pub const LOCHDR: usize = LOCAL_HEADER_BASE_SIZE;
    #[deprecated(note = "use `CENTRAL_HEADER_BASE_SIZE` instead")]
    pub const CENHDR: usize = CENTRAL_HEADER_BASE_SIZE;
    #[deprecated(note = "use `END_OF_CENTRAL_RECORD_BASE_SIZE` instead")]
    pub const ENDHDR: usize = END_OF_CENTRAL_RECORD_BASE_SIZE;
    #[deprecated(note = "use `DATA_DESCRIPTOR_SIZE` instead")]
    pub const EXTHDR: usize = DATA_DESCRIPTOR_SIZE;
}

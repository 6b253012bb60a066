// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use bitflags::bitflags;

bitflags! {
    /// The general purpose bit flag field of local and central headers.
    ///
    /// Only the bits named here have a meaning within this crate, but writers are free to set others (eg. the UTF-8
    /// name flag or vendor bits). Those are kept as-is by every operation, so a value read from an archive can always
    /// be written back unchanged via [`GeneralPurposeFlag::from_bits_retain()`] and [`GeneralPurposeFlag::bits()`].
    ///
    /// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#444
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GeneralPurposeFlag: u16 {
        /// The entry is encrypted.
        const ENCRYPTED = 0x0001;
        /// Two bits selecting a compression sub-option (only for imploding and deflating).
        const METHOD = 0x0006;
        /// The CRC and sizes follow the entry data in a data descriptor.
        const DESCRIPTOR = 0x0008;
        const RESERVED = 0x0010;
        /// The entry contains PKZIP compressed patched data.
        const PATCHED = 0x0020;
        /// Strong encryption was used for this entry.
        const STRONG_ENCRYPTION = 0x0040;
        /// Reserved by PKWARE for enhanced compression.
        const ENHANCED_COMPRESSION = 0x1000;
        /// Local header values are masked and the central directory is encrypted.
        const HEADER_MASKED = 0x2000;

        // Any bit may be set by a conforming writer.
        const _ = !0;
    }
}

impl GeneralPurposeFlag {
    /// The union of every bit with a name above.
    pub const KNOWN_BITS: u16 = 0x307f;

    /// Returns the two-bit compression sub-option in the range `0..=3`.
    pub fn method_option(&self) -> u8 {
        ((self.bits() & Self::METHOD.bits()) >> 1) as u8
    }

    /// Returns a copy with the compression sub-option replaced. Only the low two bits of `option` are used.
    pub fn with_method_option(self, option: u8) -> Self {
        let cleared = self.bits() & !Self::METHOD.bits();
        Self::from_bits_retain(cleared | ((u16::from(option) << 1) & Self::METHOD.bits()))
    }

    /// Returns the set bits which have no name in this crate.
    pub fn unknown_bits(&self) -> u16 {
        self.bits() & !Self::KNOWN_BITS
    }
}

impl From<u16> for GeneralPurposeFlag {
    fn from(value: u16) -> Self {
        GeneralPurposeFlag::from_bits_retain(value)
    }
}

impl From<GeneralPurposeFlag> for u16 {
    fn from(value: GeneralPurposeFlag) -> Self {
        value.bits()
    }
}

// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::header::GeneralPurposeFlag;

#[test]
fn named_bits() {
    assert_eq!(0x0001, GeneralPurposeFlag::ENCRYPTED.bits());
    assert_eq!(0x0006, GeneralPurposeFlag::METHOD.bits());
    assert_eq!(0x0008, GeneralPurposeFlag::DESCRIPTOR.bits());
    assert_eq!(0x0010, GeneralPurposeFlag::RESERVED.bits());
    assert_eq!(0x0020, GeneralPurposeFlag::PATCHED.bits());
    assert_eq!(0x0040, GeneralPurposeFlag::STRONG_ENCRYPTION.bits());
    assert_eq!(0x1000, GeneralPurposeFlag::ENHANCED_COMPRESSION.bits());
    assert_eq!(0x2000, GeneralPurposeFlag::HEADER_MASKED.bits());
}

#[test]
fn unknown_bits_round_trip() {
    for raw in [0x0000, 0x0800, 0x8001, 0xc000, 0xffff] {
        let flags = GeneralPurposeFlag::from(raw);
        assert_eq!(raw, u16::from(flags));
    }

    let flags = GeneralPurposeFlag::from_bits_truncate(0x0808);
    assert_eq!(0x0808, flags.bits());
}

#[test]
fn unknown_bits_survive_mutation() {
    let mut flags = GeneralPurposeFlag::from_bits_retain(0x0800 | 0x0008);

    flags.insert(GeneralPurposeFlag::ENCRYPTED);
    assert_eq!(0x0809, flags.bits());

    flags.remove(GeneralPurposeFlag::DESCRIPTOR);
    assert_eq!(0x0801, flags.bits());

    flags.set(GeneralPurposeFlag::ENCRYPTED, false);
    assert_eq!(0x0800, flags.bits());
    assert_eq!(0x0800, flags.unknown_bits());

    assert_eq!(0xfffe, (!GeneralPurposeFlag::ENCRYPTED).bits());
}

#[test]
fn unknown_bits_reported() {
    let flags = GeneralPurposeFlag::ENCRYPTED | GeneralPurposeFlag::HEADER_MASKED;
    assert_eq!(0, flags.unknown_bits());

    let flags = GeneralPurposeFlag::from_bits_retain(0xffff);
    assert_eq!(0xcf80, flags.unknown_bits());
}

#[test]
fn method_option() {
    let flags = GeneralPurposeFlag::DESCRIPTOR;
    assert_eq!(0, flags.method_option());

    let flags = flags.with_method_option(3);
    assert_eq!(3, flags.method_option());
    assert_eq!(0x000e, flags.bits());

    let flags = flags.with_method_option(2);
    assert_eq!(2, flags.method_option());
    assert_eq!(0x000c, flags.bits());

    // Only the low two bits are stored.
    let flags = GeneralPurposeFlag::from_bits_retain(0x8000).with_method_option(0xfd);
    assert_eq!(1, flags.method_option());
    assert_eq!(0x8002, flags.bits());
}

#[test]
fn contains() {
    let flags = GeneralPurposeFlag::from_bits_retain(0x0049);

    assert!(flags.contains(GeneralPurposeFlag::ENCRYPTED));
    assert!(flags.contains(GeneralPurposeFlag::DESCRIPTOR));
    assert!(flags.contains(GeneralPurposeFlag::STRONG_ENCRYPTION));
    assert!(!flags.contains(GeneralPurposeFlag::PATCHED));
    assert!(!flags.contains(GeneralPurposeFlag::METHOD));
}

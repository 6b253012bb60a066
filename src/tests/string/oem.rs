// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::string::oem::{self, CP437, CP850};

#[test]
fn lower_half_is_ascii() {
    let ascii: Vec<u8> = (0..0x80).collect();

    for table in [&CP437, &CP850] {
        let decoded = oem::decode(table, &ascii);
        assert_eq!(ascii, decoded.as_bytes());
    }
}

#[test]
fn upper_half_round_trips() {
    let upper: Vec<u8> = (0x80..=0xff).collect();

    for (table, code_page) in [(&CP437, 437), (&CP850, 850)] {
        let decoded = oem::decode(table, &upper);
        assert_eq!(128, decoded.chars().count());
        assert_eq!(upper, oem::encode(table, &decoded, code_page).expect("failed to encode"));
    }
}

#[test]
fn known_positions() {
    assert_eq!("Ç", oem::decode(&CP437, b"\x80"));
    assert_eq!("╬", oem::decode(&CP437, b"\xce"));
    assert_eq!("\u{a0}", oem::decode(&CP437, b"\xff"));

    assert_eq!("Ø", oem::decode(&CP850, b"\x9d"));
    assert_eq!("¤", oem::decode(&CP850, b"\xcf"));
    assert_eq!("\u{ad}", oem::decode(&CP850, b"\xf0"));
}

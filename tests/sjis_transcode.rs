//! End-to-end tests for the Shift-JIS transcoder.

use nubuf::sjis;

// "こんにちはAｶﾅ亜" mixing full-width, ASCII, and halfwidth katakana
const MIXED: &[u8] = &[
    0x82, 0xb1, 0x82, 0xf1, 0x82, 0xc9, 0x82, 0xbf, 0x82, 0xcd, // こんにちは
    b'A', // ASCII
    0xb6, 0xc5, // ｶﾅ
    0x88, 0x9f, // 亜
];

#[test]
fn mixed_string_round_trips_exactly() {
    let utf8 = sjis::to_utf8(MIXED);
    assert_eq!(utf8, "こんにちはAｶﾅ亜");
    assert_eq!(sjis::from_utf8(&utf8), MIXED);
}

#[test]
fn ascii_passes_through_both_ways() {
    let ascii = b"The quick brown fox 0123456789!";
    assert_eq!(sjis::to_utf8(ascii), String::from_utf8_lossy(ascii));
    assert_eq!(sjis::from_utf8(std::str::from_utf8(ascii).unwrap()), ascii);
}

#[test]
fn halfwidth_katakana_block() {
    // the entire single-byte katakana range maps into U+FF60..=U+FF9F
    for b in 0xa0..=0xdfu8 {
        let (c, n) = sjis::decode_char(&[b]).unwrap();
        assert_eq!(n, 1);
        assert_eq!(c as u32, 0xff60 + u32::from(b - 0xa0));
    }

    // and comes back as single bytes
    let raw: Vec<u8> = (0xa1..=0xdfu8).collect();
    assert_eq!(sjis::from_utf8(&sjis::to_utf8(&raw)), raw);
}

#[test]
fn index_maps_characters_to_byte_offsets() {
    assert_eq!(sjis::index(b"AB", 1), Some(1));
    assert_eq!(sjis::index(MIXED, 5), Some(10)); // 'A' after five double-byte chars
    assert_eq!(sjis::index(MIXED, 6), Some(11)); // first halfwidth
    assert_eq!(sjis::index(MIXED, 8), Some(13)); // the final double-byte char
    assert_eq!(sjis::index(MIXED, 9), None); // one past the end
}

#[test]
fn unmappable_codepoints_become_question_marks() {
    assert_eq!(sjis::from_utf8("€"), b"?");
    assert_eq!(sjis::from_utf8("😀"), b"?");
    assert_eq!(sjis::from_utf8("x€y"), b"x?y");
    assert_eq!(sjis::encoded_length("x€y"), 3);
}

#[test]
fn encoded_length_counts_substitutions_as_one() {
    for s in ["", "plain", "こんにちは", "ｶﾅ", "a€b😀c", "亜ｱA"] {
        assert_eq!(
            sjis::encoded_length(s),
            sjis::from_utf8(s).len(),
            "input {s:?}"
        );
    }
}

#[test]
fn uppercase_leaves_double_byte_intact() {
    // full-width 'ａ' is 0x82 0x81; its trail byte is in the ASCII letter range
    let mut s = vec![0x82, 0x81, b'l', b'o', b'w'];
    sjis::make_upper(&mut s);
    assert_eq!(s, [0x82, 0x81, b'L', b'O', b'W']);
}

#[test]
fn classification_over_real_strings() {
    assert!(sjis::has_hankaku(MIXED));
    assert!(sjis::has_zenkaku(MIXED));
    assert_eq!(sjis::count_chars(MIXED), 9);

    let zenkaku = &MIXED[..10];
    assert!(!sjis::has_hankaku(zenkaku));
    assert_eq!(sjis::count_chars(zenkaku), 5);
}

#[test]
fn legacy_pair_quirk_is_preserved() {
    // 0x81 0x45 has no table mapping, yet the validity check accepts it;
    // the decoder emits the sentinel codepoint for it
    assert!(sjis::char_is_valid(&[0x81, 0x45]));
    assert_eq!(sjis::decode_char(&[0x81, 0x45]), Some(('\u{ff}', 2)));
    assert_eq!(sjis::table::lookup(0x81, 0x45), None);

    // any other unmapped pair fails the validity check but still decodes
    assert!(!sjis::char_is_valid(&[0x82, 0xf2]));
    assert_eq!(sjis::decode_char(&[0x82, 0xf2]), Some(('\u{ff}', 2)));
}

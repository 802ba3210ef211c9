//! Round-trip and invariant tests for the buffer cursor types.

use nubuf::buffer::{BitReader, Reader, Writer};
use nubuf::Error;

#[test]
fn fixed_width_round_trip() {
    let mut writer = Writer::new();
    writer.write_u8(0x5A);
    writer.write_u16(0xBEEF);
    writer.write_u32(0xDEAD_BEEF);
    writer.write_f32(-123.456);

    let bytes = writer.into_bytes();
    let mut reader = Reader::new(&bytes);

    assert_eq!(reader.read_u8().unwrap(), 0x5A);
    assert_eq!(reader.read_u16().unwrap(), 0xBEEF);
    assert_eq!(reader.read_u32().unwrap(), 0xDEAD_BEEF);
    assert_eq!(reader.read_f32().unwrap(), -123.456);
    assert!(reader.at_end());
}

#[test]
fn extreme_values_round_trip() {
    let values_u32 = [0u32, 1, 0x7FFF_FFFF, 0x8000_0000, u32::MAX];
    let values_f32 = [0.0f32, -0.0, f32::MIN, f32::MAX, f32::EPSILON];

    for v in values_u32 {
        let mut writer = Writer::new();
        writer.write_u32(v);
        let bytes = writer.into_bytes();
        assert_eq!(Reader::new(&bytes).read_u32().unwrap(), v);
    }

    for v in values_f32 {
        let mut writer = Writer::new();
        writer.write_f32(v);
        let bytes = writer.into_bytes();
        assert_eq!(Reader::new(&bytes).read_f32().unwrap(), v);
    }
}

#[test]
fn string_round_trips() {
    let mut writer = Writer::new();
    writer.write_cstring(b"terminated");
    writer.write_pascal_string(b"prefixed");
    writer.write_pascal_string(b"");

    let bytes = writer.into_bytes();
    let mut reader = Reader::new(&bytes);

    assert_eq!(reader.read_cstring().unwrap(), b"terminated");
    assert_eq!(reader.read_pascal_string().unwrap(), b"prefixed");
    assert_eq!(reader.read_pascal_string().unwrap(), b"");
    assert!(reader.at_end());
}

#[test]
fn interleaved_writes_never_corrupt_earlier_bytes() {
    // deterministic width sequence; enough volume to force several growths
    let mut writer = Writer::new();
    let mut expected = Vec::new();
    let mut state = 0x1234_5678u32;

    for _ in 0..500 {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        match state % 4 {
            0 => {
                writer.write_u8(state as u8);
                expected.push(state as u8);
            }
            1 => {
                writer.write_u16(state as u16);
                expected.extend_from_slice(&(state as u16).to_le_bytes());
            }
            2 => {
                writer.write_u32(state);
                expected.extend_from_slice(&state.to_le_bytes());
            }
            _ => {
                writer.write_bytes(&state.to_le_bytes()[..3]);
                expected.extend_from_slice(&state.to_le_bytes()[..3]);
            }
        }

        // capacity is a power-of-two multiple of 64 covering the written length
        let cap = writer.capacity();
        assert!(cap >= writer.len());
        assert_eq!(cap % 64, 0);
        assert!((cap / 64).is_power_of_two());
    }

    assert_eq!(writer.as_slice(), expected.as_slice());
}

#[test]
fn backpatched_header_reads_back() {
    let mut writer = Writer::new();
    writer.write_u32(0); // total size, unknown yet
    writer.write_u32(7); // record count
    writer.write_cstring(b"records");
    let total = writer.len() as u32;
    writer.write_u32_at(0, total);

    let bytes = writer.into_bytes();
    let mut reader = Reader::new(&bytes);
    assert_eq!(reader.read_u32().unwrap(), total);
    assert_eq!(reader.read_u32().unwrap(), 7);
    assert_eq!(reader.skip_cstring().unwrap(), b"records");
    assert!(reader.at_end());
}

#[test]
fn check_bytes_consumes_on_mismatch() {
    let mut writer = Writer::new();
    writer.write_bytes(b"HDRX");
    writer.write_u16(0x0102);
    let bytes = writer.into_bytes();

    let mut reader = Reader::new(&bytes);
    assert!(!reader.check_bytes(b"HDRZ"));
    // the magic field was still consumed; the next field lines up
    assert_eq!(reader.position(), 4);
    assert_eq!(reader.read_u16().unwrap(), 0x0102);
}

#[test]
fn truncated_reads_are_fatal_and_sticky() {
    let data = [0x01, 0x00, 0x00]; // one byte short of a u32
    let mut reader = Reader::new(&data);

    assert!(matches!(reader.read_u32(), Err(Error::OutOfBounds)));
    assert_eq!(reader.position(), 0);
    // the cursor did not move; a narrower read still works
    assert_eq!(reader.read_u16().unwrap(), 1);
}

#[test]
fn pascal_length_validation() {
    // declared length runs past the end of the buffer
    let mut writer = Writer::new();
    writer.write_u32(1000);
    writer.write_bytes(b"short");
    let bytes = writer.into_bytes();

    let mut reader = Reader::new(&bytes);
    assert!(matches!(
        reader.read_pascal_string(),
        Err(Error::InvalidLength(1000))
    ));
}

#[test]
fn bit_reads_match_byte_layout() {
    let data = [0b1011_0000, 0b0001_1111];
    let mut bits = BitReader::new(&data);

    assert!(bits.read_bit().unwrap());
    assert!(!bits.read_bit().unwrap());
    assert!(bits.read_bit().unwrap());
    assert!(bits.read_bit().unwrap());

    // unary prefix: run of zeros up to the first one-bit
    assert_eq!(bits.read_zeros(16).unwrap(), 7);
    // remaining payload bits
    assert_eq!(bits.read_number(4).unwrap(), 0b1111);
    assert!(matches!(bits.read_bit(), Err(Error::BitOverflow)));
}

#[test]
fn bit_stream_over_writer_output() {
    let mut writer = Writer::new();
    writer.write_u8(0b1010_1010);
    writer.write_u8(0b1100_0011);
    let bytes = writer.into_bytes();

    let mut bits = BitReader::new(&bytes);
    assert_eq!(bits.read_number(8).unwrap(), 0b1010_1010);
    assert_eq!(bits.read_number(8).unwrap(), 0b1100_0011);
}

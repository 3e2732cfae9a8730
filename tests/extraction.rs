//! Bit-field extract/insert vectors: alignment, byte-boundary crossing, sign
//! extension, endianness, and the error contract.

use icdcodec::{extract, insert, swap_endian, CodecError, Endianness};

const BYTE0: u8 = 0b0001_0000;
const BYTE1: u8 = 0b0001_1001;
const BYTE2: u8 = 0b1000_0001;
const BYTE3: u8 = 0b0111_1101;

fn buffer() -> [u8; 4] {
    [BYTE0, BYTE1, BYTE2, BYTE3]
}

#[test]
fn uint8_aligned() {
    let buf = buffer();
    let be: u8 = extract(&buf, 0, 0, 8, Endianness::Big).expect("extract");
    assert_eq!(be, 0x10);
    let le: u8 = extract(&buf, 0, 0, 8, Endianness::Little).expect("extract");
    assert_eq!(le, 0x10);
}

#[test]
fn uint8_misaligned() {
    let buf = buffer();
    let be: u8 = extract(&buf, 0, 1, 8, Endianness::Big).expect("extract");
    assert_eq!(be, BYTE0 << 1);
    // A single-byte field is endianness-invariant.
    let le: u8 = extract(&buf, 0, 1, 8, Endianness::Little).expect("extract");
    assert_eq!(le, BYTE0 << 1);
}

#[test]
fn uint8_misaligned_cross_boundary() {
    let buf = buffer();
    let expected = ((BYTE2 & 0x01) << 7) | (BYTE3 >> 1);
    let be: u8 = extract(&buf, 2, 7, 8, Endianness::Big).expect("extract");
    assert_eq!(be, expected);
    let le: u8 = extract(&buf, 2, 7, 8, Endianness::Little).expect("extract");
    assert_eq!(le, expected);
}

#[test]
fn uint8_nibble_cross_boundary() {
    let buf = buffer();
    let expected = ((BYTE2 & 0x01) << 3) | (BYTE3 >> 5);
    let be: u8 = extract(&buf, 2, 7, 4, Endianness::Big).expect("extract");
    assert_eq!(be, expected);
    let le: u8 = extract(&buf, 2, 7, 4, Endianness::Little).expect("extract");
    assert_eq!(le, expected);
}

#[test]
fn int16_aligned() {
    let buf = buffer();
    let be: i16 = extract(&buf, 0, 0, 16, Endianness::Big).expect("extract");
    assert_eq!(be, ((BYTE0 as u16) << 8 | BYTE1 as u16) as i16);
    let le: i16 = extract(&buf, 0, 0, 16, Endianness::Little).expect("extract");
    assert_eq!(le, ((BYTE1 as u16) << 8 | BYTE0 as u16) as i16);
}

#[test]
fn int16_misaligned() {
    let buf = buffer();
    let msb = BYTE0 << 1 | BYTE1 >> 7;
    let lsb = BYTE1 << 1 | BYTE2 >> 7;
    let be: i16 = extract(&buf, 0, 1, 16, Endianness::Big).expect("extract");
    assert_eq!(be, ((msb as u16) << 8 | lsb as u16) as i16);
    let le: i16 = extract(&buf, 0, 1, 16, Endianness::Little).expect("extract");
    assert_eq!(le, ((lsb as u16) << 8 | msb as u16) as i16);
}

#[test]
fn int16_sign_extension() {
    let buf = buffer();
    // BYTE2 has its top bit set: the big-endian reading is negative, the
    // little-endian reading of the same bits is positive.
    let be: i16 = extract(&buf, 2, 0, 16, Endianness::Big).expect("extract");
    assert_eq!(be, ((BYTE2 as u16) << 8 | BYTE3 as u16) as i16);
    assert!(be < 0);
    let le: i16 = extract(&buf, 2, 0, 16, Endianness::Little).expect("extract");
    assert_eq!(le, ((BYTE3 as u16) << 8 | BYTE2 as u16) as i16);
    assert!(le > 0);
}

#[test]
fn unsigned_view_of_negative_bits_is_positive() {
    let buf = buffer();
    let unsigned: u16 = extract(&buf, 2, 0, 16, Endianness::Big).expect("extract");
    assert_eq!(unsigned, (BYTE2 as u16) << 8 | BYTE3 as u16);
    let signed: i16 = extract(&buf, 2, 0, 16, Endianness::Big).expect("extract");
    assert_eq!(signed as u16, unsigned);
}

#[test]
fn partial_width_sign_extension() {
    let buf = [0b1111_0000u8];
    let v: i8 = extract(&buf, 0, 0, 4, Endianness::Big).expect("extract");
    assert_eq!(v, -1);
    let v: i8 = extract(&buf, 0, 4, 4, Endianness::Big).expect("extract");
    assert_eq!(v, 0);
}

#[test]
fn error_null_parameter() {
    let empty: [u8; 0] = [];
    let err = extract::<u8>(&empty, 3, 7, 4, Endianness::Big).unwrap_err();
    assert_eq!(err, CodecError::NullParameter);
    assert_eq!(err.code(), 2);
}

#[test]
fn error_not_enough_data() {
    let buf = buffer();
    let err = extract::<u8>(&buf, buf.len() - 1, 7, 4, Endianness::Big).unwrap_err();
    assert_eq!(err, CodecError::NotEnoughData);
    assert_eq!(err.code(), 3);
}

#[test]
fn error_container_too_small() {
    let buf = buffer();
    let err = extract::<u8>(&buf, 0, 0, 9, Endianness::Big).unwrap_err();
    assert_eq!(err, CodecError::ContainerTooSmall);
    assert_eq!(err.code(), 5);
}

#[test]
fn insert_checks_match_extract_checks() {
    let mut empty: [u8; 0] = [];
    assert_eq!(
        insert(&mut empty, 0, 0, 4, Endianness::Big, 0u8).unwrap_err(),
        CodecError::NullParameter
    );
    let mut buf = buffer();
    assert_eq!(
        insert(&mut buf, 3, 7, 4, Endianness::Big, 0u8).unwrap_err(),
        CodecError::NotEnoughData
    );
    assert_eq!(
        insert(&mut buf, 0, 0, 9, Endianness::Big, 0u8).unwrap_err(),
        CodecError::ContainerTooSmall
    );
    // Failed inserts leave the buffer untouched.
    assert_eq!(buf, buffer());
}

#[test]
fn insert_cross_boundary() {
    let mut buf = [0u8; 4];
    insert(&mut buf, 2, 7, 8, Endianness::Big, 0xBEu8).expect("insert");
    assert_eq!(buf, [0x00, 0x00, 0x01, 0x7C]);
}

#[test]
fn insert_preserves_surrounding_bits() {
    let mut buf = [0xFFu8; 2];
    insert(&mut buf, 0, 2, 3, Endianness::Big, 0b101u8).expect("insert");
    assert_eq!(buf, [0b1110_1111, 0xFF]);
}

#[test]
fn insert_little_endian_swaps_wire_bytes() {
    let mut buf = [0u8; 4];
    insert(&mut buf, 0, 0, 16, Endianness::Little, 0x1234u16).expect("insert");
    assert_eq!(&buf[..2], &[0x34, 0x12]);

    let mut buf = [0u8; 4];
    insert(&mut buf, 1, 0, 16, Endianness::Big, 0x1234u16).expect("insert");
    assert_eq!(buf, [0x00, 0x12, 0x34, 0x00]);
}

#[test]
fn insert_takes_low_bits() {
    let mut buf = [0u8; 2];
    insert(&mut buf, 0, 0, 12, Endianness::Big, 0x0ABCu16).expect("insert");
    assert_eq!(buf, [0xAB, 0xC0]);
    let back: u16 = extract(&buf, 0, 0, 12, Endianness::Big).expect("extract");
    assert_eq!(back, 0x0ABC);
}

#[test]
fn sub_byte_width_ignores_declared_byte_order() {
    let mut big = [0u8; 2];
    let mut little = [0u8; 2];
    insert(&mut big, 0, 0, 12, Endianness::Big, 0x0ABCu16).expect("insert");
    insert(&mut little, 0, 0, 12, Endianness::Little, 0x0ABCu16).expect("insert");
    assert_eq!(big, little);
}

#[test]
fn round_trip_full_width_signed() {
    for endianness in [Endianness::Big, Endianness::Little] {
        let mut buf = [0u8; 4];
        insert(&mut buf, 1, 3, 16, endianness, -1234i16).expect("insert");
        let back: i16 = extract(&buf, 1, 3, 16, endianness).expect("extract");
        assert_eq!(back, -1234);
    }
}

#[test]
fn round_trip_partial_width_signed() {
    let mut buf = [0u8; 1];
    insert(&mut buf, 0, 2, 4, Endianness::Big, -3i8).expect("insert");
    let back: i8 = extract(&buf, 0, 2, 4, Endianness::Big).expect("extract");
    assert_eq!(back, -3);
}

#[test]
fn round_trip_u32_wide_container() {
    let mut buf = [0u8; 8];
    insert(&mut buf, 2, 5, 24, Endianness::Big, 0x00AB_CDEFu32).expect("insert");
    let back: u32 = extract(&buf, 2, 5, 24, Endianness::Big).expect("extract");
    assert_eq!(back, 0x00AB_CDEF);
}

#[test]
fn swap_endian_involution() {
    assert_eq!(swap_endian(0x1234u16), 0x3412);
    assert_eq!(swap_endian(swap_endian(0x1234u16)), 0x1234);
    assert_eq!(swap_endian(swap_endian(0xDEAD_BEEFu32)), 0xDEAD_BEEF);
    assert_eq!(swap_endian(swap_endian(-12345i16)), -12345);
    assert_eq!(swap_endian(swap_endian(-123_456_789i32)), -123_456_789);
    assert_eq!(swap_endian(0xABu8), 0xAB);
}

//! Bit-field extraction and insertion over byte buffers.
//!
//! Fields are addressed by byte offset + intra-byte bit position + bit length,
//! assembled MSB-first (bit 0 = MSB of byte 0), with configurable byte order
//! for whole-byte field widths. All boundary and capacity validation happens
//! here, before any bit is touched.

use crate::bits;
use crate::field::{FieldDescriptor, FieldType};
use crate::value::FieldValue;

/// Byte order of a field's value as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Big,
    Little,
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endianness::Big => write!(f, "big-endian"),
            Endianness::Little => write!(f, "little-endian"),
        }
    }
}

/// Byte order of the runtime environment, resolved at compile time.
pub fn host_endianness() -> Endianness {
    if cfg!(target_endian = "big") {
        Endianness::Big
    } else {
        Endianness::Little
    }
}

/// Codec failure. Each variant maps to a stable numeric code via
/// [`CodecError::code`]; code 0 means success and is never an error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("generic codec failure")]
    Generic,
    #[error("buffer is null or empty")]
    NullParameter,
    #[error("requested bit span exceeds the buffer length")]
    NotEnoughData,
    #[error("destination type is too narrow for the requested bit length")]
    ContainerTooSmall,
}

impl CodecError {
    /// Stable numeric code for wire-facing callers. 0 is success, 4 is
    /// reserved and never produced.
    pub fn code(&self) -> u32 {
        match self {
            CodecError::Generic => 1,
            CodecError::NullParameter => 2,
            CodecError::NotEnoughData => 3,
            CodecError::ContainerTooSmall => 5,
        }
    }
}

/// Fixed-width integer usable as a bit-field container.
///
/// Implemented for the widths the [`FieldType`] set names: `u8`, `i8`, `u16`,
/// `i16`, `u32`, `i32`.
pub trait FieldInt: Copy {
    /// Width of the type in bits.
    const BITS: u32;

    /// Builds the value from the low `n` assembled bits of `raw`,
    /// sign-extending bit `n - 1` for signed types.
    fn from_raw(raw: u64, n: u32) -> Self;

    /// The raw bit pattern, zero-extended to 64 bits.
    fn to_raw(self) -> u64;

    /// Reverses the byte order of the value.
    fn swap_bytes(self) -> Self;
}

macro_rules! impl_field_int_unsigned {
    ($($t:ty),*) => {$(
        impl FieldInt for $t {
            const BITS: u32 = <$t>::BITS;

            fn from_raw(raw: u64, n: u32) -> Self {
                let mask = if n >= 64 { u64::MAX } else { (1u64 << n) - 1 };
                (raw & mask) as $t
            }

            fn to_raw(self) -> u64 {
                self as u64
            }

            fn swap_bytes(self) -> Self {
                <$t>::swap_bytes(self)
            }
        }
    )*};
}

macro_rules! impl_field_int_signed {
    ($($t:ty => $u:ty),*) => {$(
        impl FieldInt for $t {
            const BITS: u32 = <$t>::BITS;

            fn from_raw(raw: u64, n: u32) -> Self {
                if n == 0 {
                    return 0;
                }
                // Left-align within 64 bits, then shift back arithmetically so
                // bit n-1 of the field becomes the sign.
                let shift = 64 - n.min(64);
                (((raw << shift) as i64) >> shift) as $t
            }

            fn to_raw(self) -> u64 {
                self as $u as u64
            }

            fn swap_bytes(self) -> Self {
                <$t>::swap_bytes(self)
            }
        }
    )*};
}

impl_field_int_unsigned!(u8, u16, u32);
impl_field_int_signed!(i8 => u8, i16 => u16, i32 => u32);

/// Reverses the byte order of `value`.
pub fn swap_endian<T: FieldInt>(value: T) -> T {
    value.swap_bytes()
}

/// Reverses the low `n_bytes` bytes of `raw`.
fn swap_field_bytes(raw: u64, n_bytes: usize) -> u64 {
    let mut out = 0u64;
    for i in 0..n_bytes {
        out = (out << 8) | ((raw >> (8 * i)) & 0xFF);
    }
    out
}

fn check_span<T: FieldInt>(
    buffer_len: usize,
    byte_idx: usize,
    bit_pos: usize,
    bit_length: usize,
) -> Result<(), CodecError> {
    if buffer_len == 0 {
        return Err(CodecError::NullParameter);
    }
    let span_end = byte_idx
        .saturating_mul(8)
        .saturating_add(bit_pos)
        .saturating_add(bit_length);
    if span_end > buffer_len * 8 {
        return Err(CodecError::NotEnoughData);
    }
    if (bit_length + 7) / 8 > (T::BITS / 8) as usize {
        return Err(CodecError::ContainerTooSmall);
    }
    Ok(())
}

/// Extracts a `bit_length`-bit field starting at `byte_idx * 8 + bit_pos`.
///
/// Bits are assembled MSB-first. A `Little` field whose `bit_length` is a
/// whole number of bytes has those bytes reversed; a field narrower than a
/// byte multiple is an MSB-first bit string with no byte order, so both
/// endiannesses agree. Signed containers sign-extend the field's top bit.
///
/// Validation happens before any bit is read, in order: empty buffer
/// (`NullParameter`), span past the buffer end (`NotEnoughData`), destination
/// narrower than `ceil(bit_length / 8)` bytes (`ContainerTooSmall`).
pub fn extract<T: FieldInt>(
    buffer: &[u8],
    byte_idx: usize,
    bit_pos: usize,
    bit_length: usize,
    endianness: Endianness,
) -> Result<T, CodecError> {
    check_span::<T>(buffer.len(), byte_idx, bit_pos, bit_length)?;

    let offset = byte_idx * 8 + bit_pos;
    let mut raw = 0u64;
    for i in 0..bit_length {
        raw = (raw << 1) | u64::from(bits::get_bit(buffer, offset + i));
    }

    if endianness == Endianness::Little && bit_length % 8 == 0 {
        raw = swap_field_bytes(raw, bit_length / 8);
    }

    Ok(T::from_raw(raw, bit_length as u32))
}

/// Inserts the low `bit_length` bits of `value` at `byte_idx * 8 + bit_pos`.
///
/// The exact inverse of [`extract`]: same checks, same bit and byte order.
/// Once validation passes the write fully succeeds; bits are written in place
/// with no scratch buffer or rollback.
pub fn insert<T: FieldInt>(
    buffer: &mut [u8],
    byte_idx: usize,
    bit_pos: usize,
    bit_length: usize,
    endianness: Endianness,
    value: T,
) -> Result<(), CodecError> {
    check_span::<T>(buffer.len(), byte_idx, bit_pos, bit_length)?;

    if bit_length == 0 {
        return Ok(());
    }

    let mask = if bit_length >= 64 {
        u64::MAX
    } else {
        (1u64 << bit_length) - 1
    };
    let mut raw = value.to_raw() & mask;
    if endianness == Endianness::Little && bit_length % 8 == 0 {
        raw = swap_field_bytes(raw, bit_length / 8);
    }

    let offset = byte_idx * 8 + bit_pos;
    for i in 0..bit_length {
        let bit = ((raw >> (bit_length - 1 - i)) & 1) as u8;
        bits::set_bit(buffer, offset + i, bit);
    }
    Ok(())
}

/// Decodes one field from `buffer` into the descriptor's storage, dispatching
/// on the declared [`FieldType`]. Ascii/Binary fields are byte-range copies at
/// the field's byte offset, clamped to `min(remaining buffer, storage length)`;
/// everything else goes through the typed [`extract`].
pub fn extract_field(buffer: &[u8], field: &mut FieldDescriptor) -> Result<(), CodecError> {
    let byte_idx = field.byte_offset();
    let bit_pos = field.bit_offset();
    let bit_length = field.bit_length();
    let endianness = field.endianness();

    let value = match field.field_type() {
        FieldType::UInt8 => {
            FieldValue::U8(extract(buffer, byte_idx, bit_pos, bit_length, endianness)?)
        }
        FieldType::Int8 => {
            FieldValue::I8(extract(buffer, byte_idx, bit_pos, bit_length, endianness)?)
        }
        FieldType::UInt16 => {
            FieldValue::U16(extract(buffer, byte_idx, bit_pos, bit_length, endianness)?)
        }
        FieldType::Int16 => {
            FieldValue::I16(extract(buffer, byte_idx, bit_pos, bit_length, endianness)?)
        }
        FieldType::UInt32 => {
            FieldValue::U32(extract(buffer, byte_idx, bit_pos, bit_length, endianness)?)
        }
        FieldType::Int32 => {
            FieldValue::I32(extract(buffer, byte_idx, bit_pos, bit_length, endianness)?)
        }
        FieldType::Enum => {
            FieldValue::Enum(extract(buffer, byte_idx, bit_pos, bit_length, endianness)?)
        }
        FieldType::Ascii | FieldType::Binary => {
            if buffer.is_empty() {
                return Err(CodecError::NullParameter);
            }
            let mut bytes = match field.value() {
                FieldValue::Ascii(b) | FieldValue::Binary(b) => b.clone(),
                _ => return Err(CodecError::Generic),
            };
            let available = buffer.len().saturating_sub(byte_idx);
            let n = bytes.len().min(available);
            if n > 0 {
                bytes[..n].copy_from_slice(&buffer[byte_idx..byte_idx + n]);
            }
            match field.field_type() {
                FieldType::Ascii => FieldValue::Ascii(bytes),
                _ => FieldValue::Binary(bytes),
            }
        }
    };

    field.set_decoded(value);
    Ok(())
}

/// Encodes one field from the descriptor's storage into `buffer`; the
/// symmetric counterpart of [`extract_field`].
pub fn insert_field(buffer: &mut [u8], field: &FieldDescriptor) -> Result<(), CodecError> {
    let byte_idx = field.byte_offset();
    let bit_pos = field.bit_offset();
    let bit_length = field.bit_length();
    let endianness = field.endianness();

    match field.value() {
        FieldValue::U8(v) => insert(buffer, byte_idx, bit_pos, bit_length, endianness, *v),
        FieldValue::I8(v) => insert(buffer, byte_idx, bit_pos, bit_length, endianness, *v),
        FieldValue::U16(v) => insert(buffer, byte_idx, bit_pos, bit_length, endianness, *v),
        FieldValue::I16(v) => insert(buffer, byte_idx, bit_pos, bit_length, endianness, *v),
        FieldValue::U32(v) => insert(buffer, byte_idx, bit_pos, bit_length, endianness, *v),
        FieldValue::I32(v) | FieldValue::Enum(v) => {
            insert(buffer, byte_idx, bit_pos, bit_length, endianness, *v)
        }
        FieldValue::Ascii(bytes) | FieldValue::Binary(bytes) => {
            if buffer.is_empty() {
                return Err(CodecError::NullParameter);
            }
            let available = buffer.len().saturating_sub(byte_idx);
            let n = bytes.len().min(available);
            if n > 0 {
                buffer[byte_idx..byte_idx + n].copy_from_slice(&bytes[..n]);
            }
            Ok(())
        }
    }
}

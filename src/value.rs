//! Typed field storage (codec representation).
//!
//! `FieldValue` is the tagged-union storage behind a
//! [`FieldDescriptor`](crate::field::FieldDescriptor): one variant per
//! [`FieldType`](crate::field::FieldType), so only the declared type is ever
//! representable. Accessors here are `Option`-style; the descriptor wraps them
//! into explicit type-mismatch errors.

use crate::field::FieldType;

/// A single field's stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    /// Enumerated value, backed by a 32-bit signed integer on the wire.
    Enum(i32),
    /// ASCII byte string; length fixed at construction.
    Ascii(Vec<u8>),
    /// Opaque byte string; length fixed at construction.
    Binary(Vec<u8>),
}

impl FieldValue {
    /// Zero-initialized storage for `field_type`. Ascii/Binary get
    /// `ceil(bit_length / 8)` bytes; fixed-width types get their full width.
    pub fn zeroed(field_type: FieldType, bit_length: usize) -> Self {
        match field_type {
            FieldType::UInt8 => FieldValue::U8(0),
            FieldType::Int8 => FieldValue::I8(0),
            FieldType::UInt16 => FieldValue::U16(0),
            FieldType::Int16 => FieldValue::I16(0),
            FieldType::UInt32 => FieldValue::U32(0),
            FieldType::Int32 => FieldValue::I32(0),
            FieldType::Enum => FieldValue::Enum(0),
            FieldType::Ascii => FieldValue::Ascii(vec![0; (bit_length + 7) / 8]),
            FieldType::Binary => FieldValue::Binary(vec![0; (bit_length + 7) / 8]),
        }
    }

    /// The `FieldType` tag this variant stores.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::U8(_) => FieldType::UInt8,
            FieldValue::I8(_) => FieldType::Int8,
            FieldValue::U16(_) => FieldType::UInt16,
            FieldValue::I16(_) => FieldType::Int16,
            FieldValue::U32(_) => FieldType::UInt32,
            FieldValue::I32(_) => FieldType::Int32,
            FieldValue::Enum(_) => FieldType::Enum,
            FieldValue::Ascii(_) => FieldType::Ascii,
            FieldValue::Binary(_) => FieldType::Binary,
        }
    }

    /// Storage capacity in bytes.
    pub fn byte_len(&self) -> usize {
        match self {
            FieldValue::U8(_) | FieldValue::I8(_) => 1,
            FieldValue::U16(_) | FieldValue::I16(_) => 2,
            FieldValue::U32(_) | FieldValue::I32(_) | FieldValue::Enum(_) => 4,
            FieldValue::Ascii(b) | FieldValue::Binary(b) => b.len(),
        }
    }

    pub fn as_u8(&self) -> Option<u8> {
        match self {
            FieldValue::U8(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_i8(&self) -> Option<i8> {
        match self {
            FieldValue::I8(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_u16(&self) -> Option<u16> {
        match self {
            FieldValue::U16(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            FieldValue::I16(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            FieldValue::U32(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            FieldValue::I32(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<i32> {
        match self {
            FieldValue::Enum(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_ascii(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Ascii(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Binary(b) => Some(b),
            _ => None,
        }
    }

    /// Widening view of any fixed-width unsigned variant.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::U8(x) => Some(*x as u64),
            FieldValue::U16(x) => Some(*x as u64),
            FieldValue::U32(x) => Some(*x as u64),
            _ => None,
        }
    }

    /// Widening view of any fixed-width integer variant.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::U8(x) => Some(*x as i64),
            FieldValue::U16(x) => Some(*x as i64),
            FieldValue::U32(x) => Some(*x as i64),
            FieldValue::I8(x) => Some(*x as i64),
            FieldValue::I16(x) => Some(*x as i64),
            FieldValue::I32(x) => Some(*x as i64),
            FieldValue::Enum(x) => Some(*x as i64),
            _ => None,
        }
    }
}

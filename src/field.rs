//! Field descriptors: a named, typed, positioned field with owned storage.

use std::collections::HashMap;

use byteorder::{ByteOrder, NativeEndian};

use crate::codec::Endianness;
use crate::hex;
use crate::value::FieldValue;

/// Declared type of a field. Fixed-width variants pin the storage byte length;
/// Ascii/Binary storage is `ceil(bit_length / 8)` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    UInt8,
    Int8,
    UInt16,
    Int16,
    UInt32,
    Int32,
    /// Enumerated value, backed by a 32-bit signed integer.
    Enum,
    Ascii,
    Binary,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldType::UInt8 => "uint8",
            FieldType::Int8 => "int8",
            FieldType::UInt16 => "uint16",
            FieldType::Int16 => "int16",
            FieldType::UInt32 => "uint32",
            FieldType::Int32 => "int32",
            FieldType::Enum => "enum",
            FieldType::Ascii => "ascii",
            FieldType::Binary => "binary",
        };
        write!(f, "{}", name)
    }
}

/// Field-level failure: wrong-type access or a bad hex literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("field is {actual}, not {requested}")]
    TypeMismatch {
        requested: FieldType,
        actual: FieldType,
    },
    #[error("invalid hex literal: {0}")]
    InvalidHex(String),
}

/// A named, typed, positioned field inside a message.
///
/// Position (`byte_offset`, `bit_offset`, `bit_length`), type and endianness
/// are fixed at construction. The descriptor exclusively owns its storage; the
/// storage variant never changes, and its content is mutated only by decoding
/// ([`crate::codec::extract_field`]) or by the explicit setters here. Whether
/// `bit_length` fits the storage is checked at codec time, not here.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    field_type: FieldType,
    name: String,
    byte_offset: usize,
    bit_offset: usize,
    bit_length: usize,
    endianness: Endianness,
    value: FieldValue,
    enum_labels: HashMap<i32, String>,
}

impl FieldDescriptor {
    /// Creates a descriptor with zeroed storage sized for `field_type`.
    /// `bit_offset` counts from the MSB of the byte at `byte_offset` and is
    /// expected in `0..=7`.
    pub fn new(
        field_type: FieldType,
        name: impl Into<String>,
        byte_offset: usize,
        bit_offset: usize,
        bit_length: usize,
        endianness: Endianness,
    ) -> Self {
        FieldDescriptor {
            field_type,
            name: name.into(),
            byte_offset,
            bit_offset,
            bit_length,
            endianness,
            value: FieldValue::zeroed(field_type, bit_length),
            enum_labels: HashMap::new(),
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub fn bit_offset(&self) -> usize {
        self.bit_offset
    }

    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// The stored value.
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Storage capacity in bytes.
    pub fn byte_len(&self) -> usize {
        self.value.byte_len()
    }

    fn mismatch(&self, requested: FieldType) -> FieldError {
        FieldError::TypeMismatch {
            requested,
            actual: self.field_type,
        }
    }

    pub fn as_u8(&self) -> Result<u8, FieldError> {
        self.value.as_u8().ok_or_else(|| self.mismatch(FieldType::UInt8))
    }

    pub fn as_i8(&self) -> Result<i8, FieldError> {
        self.value.as_i8().ok_or_else(|| self.mismatch(FieldType::Int8))
    }

    pub fn as_u16(&self) -> Result<u16, FieldError> {
        self.value.as_u16().ok_or_else(|| self.mismatch(FieldType::UInt16))
    }

    pub fn as_i16(&self) -> Result<i16, FieldError> {
        self.value.as_i16().ok_or_else(|| self.mismatch(FieldType::Int16))
    }

    pub fn as_u32(&self) -> Result<u32, FieldError> {
        self.value.as_u32().ok_or_else(|| self.mismatch(FieldType::UInt32))
    }

    pub fn as_i32(&self) -> Result<i32, FieldError> {
        self.value.as_i32().ok_or_else(|| self.mismatch(FieldType::Int32))
    }

    pub fn enum_value(&self) -> Result<i32, FieldError> {
        self.value.as_enum().ok_or_else(|| self.mismatch(FieldType::Enum))
    }

    pub fn as_ascii(&self) -> Result<&[u8], FieldError> {
        self.value.as_ascii().ok_or_else(|| self.mismatch(FieldType::Ascii))
    }

    pub fn as_binary(&self) -> Result<&[u8], FieldError> {
        self.value.as_binary().ok_or_else(|| self.mismatch(FieldType::Binary))
    }

    /// Replaces the stored value. The variant must match the declared type;
    /// Ascii/Binary payloads are truncated or zero-padded to the fixed storage
    /// length.
    pub fn set(&mut self, value: FieldValue) -> Result<(), FieldError> {
        if value.field_type() != self.field_type {
            return Err(self.mismatch(value.field_type()));
        }
        let capacity = self.value.byte_len();
        self.value = match value {
            FieldValue::Ascii(mut b) => {
                b.resize(capacity, 0);
                FieldValue::Ascii(b)
            }
            FieldValue::Binary(mut b) => {
                b.resize(capacity, 0);
                FieldValue::Binary(b)
            }
            other => other,
        };
        Ok(())
    }

    /// Sets the value from a hex literal, interpreted per the declared type:
    /// fixed-width types parse the literal as a number (optional `0x` prefix),
    /// Ascii copies the literal's bytes verbatim, Binary decodes hex pairs.
    pub fn set_hex(&mut self, hex_str: &str) -> Result<(), FieldError> {
        match self.field_type {
            FieldType::Ascii => {
                let mut bytes = hex_str.as_bytes().to_vec();
                bytes.resize(self.value.byte_len(), 0);
                self.value = FieldValue::Ascii(bytes);
                Ok(())
            }
            FieldType::Binary => {
                let mut bytes = hex::decode_hex(hex_str)
                    .map_err(|_| FieldError::InvalidHex(hex_str.to_string()))?;
                bytes.resize(self.value.byte_len(), 0);
                self.value = FieldValue::Binary(bytes);
                Ok(())
            }
            _ => {
                let digits = hex_str.trim().trim_start_matches("0x");
                let raw = u64::from_str_radix(digits, 16)
                    .map_err(|_| FieldError::InvalidHex(hex_str.to_string()))?;
                self.value = match self.field_type {
                    FieldType::UInt8 => FieldValue::U8(raw as u8),
                    FieldType::Int8 => FieldValue::I8(raw as i8),
                    FieldType::UInt16 => FieldValue::U16(raw as u16),
                    FieldType::Int16 => FieldValue::I16(raw as i16),
                    FieldType::UInt32 => FieldValue::U32(raw as u32),
                    FieldType::Int32 => FieldValue::I32(raw as i32),
                    _ => FieldValue::Enum(raw as i32),
                };
                Ok(())
            }
        }
    }

    /// Copies `bytes` into the storage as native-endian data, clamped to the
    /// storage capacity. Shorter inputs overwrite only the leading bytes.
    pub fn set_raw(&mut self, bytes: &[u8]) {
        match &mut self.value {
            FieldValue::U8(v) => {
                if let Some(&b) = bytes.first() {
                    *v = b;
                }
            }
            FieldValue::I8(v) => {
                if let Some(&b) = bytes.first() {
                    *v = b as i8;
                }
            }
            FieldValue::U16(v) => {
                let mut buf = [0u8; 2];
                NativeEndian::write_u16(&mut buf, *v);
                let n = bytes.len().min(2);
                buf[..n].copy_from_slice(&bytes[..n]);
                *v = NativeEndian::read_u16(&buf);
            }
            FieldValue::I16(v) => {
                let mut buf = [0u8; 2];
                NativeEndian::write_i16(&mut buf, *v);
                let n = bytes.len().min(2);
                buf[..n].copy_from_slice(&bytes[..n]);
                *v = NativeEndian::read_i16(&buf);
            }
            FieldValue::U32(v) => {
                let mut buf = [0u8; 4];
                NativeEndian::write_u32(&mut buf, *v);
                let n = bytes.len().min(4);
                buf[..n].copy_from_slice(&bytes[..n]);
                *v = NativeEndian::read_u32(&buf);
            }
            FieldValue::I32(v) | FieldValue::Enum(v) => {
                let mut buf = [0u8; 4];
                NativeEndian::write_i32(&mut buf, *v);
                let n = bytes.len().min(4);
                buf[..n].copy_from_slice(&bytes[..n]);
                *v = NativeEndian::read_i32(&buf);
            }
            FieldValue::Ascii(b) | FieldValue::Binary(b) => {
                let n = bytes.len().min(b.len());
                b[..n].copy_from_slice(&bytes[..n]);
            }
        }
    }

    /// Native-endian serialization of the storage.
    pub fn raw_bytes(&self) -> Vec<u8> {
        match &self.value {
            FieldValue::U8(v) => vec![*v],
            FieldValue::I8(v) => vec![*v as u8],
            FieldValue::U16(v) => {
                let mut buf = vec![0u8; 2];
                NativeEndian::write_u16(&mut buf, *v);
                buf
            }
            FieldValue::I16(v) => {
                let mut buf = vec![0u8; 2];
                NativeEndian::write_i16(&mut buf, *v);
                buf
            }
            FieldValue::U32(v) => {
                let mut buf = vec![0u8; 4];
                NativeEndian::write_u32(&mut buf, *v);
                buf
            }
            FieldValue::I32(v) | FieldValue::Enum(v) => {
                let mut buf = vec![0u8; 4];
                NativeEndian::write_i32(&mut buf, *v);
                buf
            }
            FieldValue::Ascii(b) | FieldValue::Binary(b) => b.clone(),
        }
    }

    /// Registers a code → label mapping. Enum fields only.
    pub fn register_enum(&mut self, code: i32, label: impl Into<String>) -> Result<(), FieldError> {
        if self.field_type != FieldType::Enum {
            return Err(self.mismatch(FieldType::Enum));
        }
        self.enum_labels.insert(code, label.into());
        Ok(())
    }

    /// Resolves a code to its registered label. An unmapped code is a normal
    /// outcome (`Ok(None)`); calling this on a non-enum field is a type
    /// mismatch.
    pub fn enum_label(&self, code: i32) -> Result<Option<&str>, FieldError> {
        if self.field_type != FieldType::Enum {
            return Err(self.mismatch(FieldType::Enum));
        }
        Ok(self.enum_labels.get(&code).map(String::as_str))
    }

    /// Label for the currently stored enum value, if registered.
    pub fn current_enum_label(&self) -> Result<Option<&str>, FieldError> {
        let code = self.enum_value()?;
        self.enum_label(code)
    }

    pub(crate) fn set_decoded(&mut self, value: FieldValue) {
        self.value = value;
    }
}

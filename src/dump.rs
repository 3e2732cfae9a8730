//! Human-readable formatting for buffers and schemas.

use std::fmt::Write;

use crate::field::FieldType;
use crate::hex;
use crate::message::MessageSchema;
use crate::value::FieldValue;

/// Formats each byte of `buffer` as binary, one line per byte.
pub fn dump_bits(buffer: &[u8]) -> String {
    let mut out = String::new();
    for (i, byte) in buffer.iter().enumerate() {
        let _ = writeln!(out, "{:04}: {:08b} (0x{:02x})", i, byte, byte);
    }
    out
}

/// Classic hex dump: 16 bytes per row with offset and ASCII column.
pub fn dump_hex(buffer: &[u8]) -> String {
    let mut out = String::new();
    for (row, chunk) in buffer.chunks(16).enumerate() {
        let _ = write!(out, "{:08x}  ", row * 16);
        for i in 0..16 {
            match chunk.get(i) {
                Some(b) => {
                    let _ = write!(out, "{:02x} ", b);
                }
                None => out.push_str("   "),
            }
            if i == 7 {
                out.push(' ');
            }
        }
        out.push(' ');
        for b in chunk {
            out.push(if b.is_ascii_graphic() || *b == b' ' {
                *b as char
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}

/// Formats every field of `schema` on its own line: position, type,
/// endianness and current value, with enum labels resolved when registered.
pub fn dump_fields(schema: &MessageSchema) -> String {
    let mut out = String::new();
    for field in schema.fields() {
        let _ = write!(
            out,
            "{} @ byte {} bit {} len {} ({}, {}) = ",
            field.name(),
            field.byte_offset(),
            field.bit_offset(),
            field.bit_length(),
            field.field_type(),
            field.endianness(),
        );
        match field.value() {
            FieldValue::U8(v) => {
                let _ = write!(out, "{} (0x{:02x})", v, v);
            }
            FieldValue::I8(v) => {
                let _ = write!(out, "{}", v);
            }
            FieldValue::U16(v) => {
                let _ = write!(out, "{} (0x{:04x})", v, v);
            }
            FieldValue::I16(v) => {
                let _ = write!(out, "{}", v);
            }
            FieldValue::U32(v) => {
                let _ = write!(out, "{} (0x{:08x})", v, v);
            }
            FieldValue::I32(v) => {
                let _ = write!(out, "{}", v);
            }
            FieldValue::Enum(v) => match field.enum_label(*v) {
                Ok(Some(label)) => {
                    let _ = write!(out, "{} ({})", v, label);
                }
                _ => {
                    let _ = write!(out, "{}", v);
                }
            },
            FieldValue::Ascii(b) => {
                let _ = write!(out, "{:?}", String::from_utf8_lossy(b));
            }
            FieldValue::Binary(b) => {
                let _ = write!(out, "0x{}", hex::encode_hex(b));
            }
        }
        if field.field_type() == FieldType::Ascii || field.field_type() == FieldType::Binary {
            let _ = write!(out, " [{} bytes]", field.byte_len());
        }
        out.push('\n');
    }
    out
}

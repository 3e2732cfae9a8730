//! # icdcodec — Bit-Precise ICD Message Codec
//!
//! Reads and writes integer-valued fields that occupy an arbitrary bit offset
//! and bit length inside a byte buffer, honoring a configurable endianness,
//! and composes such fields into a schema-described message that encodes to or
//! decodes from a wire buffer. Targets protocol/ICD-style binary messages
//! whose fields are not byte-aligned (packed telemetry, command words).
//!
//! ## Layers
//!
//! - [`bits`]: single-bit get/set at an absolute MSB-first bit index (unchecked
//!   leaf primitives)
//! - [`codec`]: validated bit-field [`extract`]/[`insert`] over the fixed-width
//!   integer types, plus the [`FieldType`]-dispatched
//!   [`extract_field`]/[`insert_field`]
//! - [`field`]: [`FieldDescriptor`] — a named, typed, positioned field with
//!   owned storage, typed accessors and an enum label registry
//! - [`message`]: [`MessageSchema`] — fields ordered by
//!   `(byte_offset, bit_offset)` driving whole-message encode/decode
//!
//! Bit numbering: within a byte, bit 0 is the most significant bit; byte 0's
//! bits precede byte 1's. A field's absolute bit position is
//! `byte_offset * 8 + bit_offset`.
//!
//! ## Example
//!
//! ```
//! use icdcodec::{Endianness, FieldDescriptor, FieldType, FieldValue, MessageSchema};
//!
//! let mut schema = MessageSchema::new();
//! schema.add(FieldDescriptor::new(FieldType::UInt8, "version", 0, 0, 3, Endianness::Big))?;
//! schema.add(FieldDescriptor::new(FieldType::UInt8, "flags", 0, 3, 5, Endianness::Big))?;
//! schema.add(FieldDescriptor::new(FieldType::UInt16, "counter", 1, 0, 16, Endianness::Little))?;
//!
//! schema.field_mut("version").unwrap().set(FieldValue::U8(5))?;
//! schema.field_mut("counter").unwrap().set(FieldValue::U16(0x1234))?;
//!
//! let mut wire = vec![0u8; schema.byte_len()];
//! schema.encode(&mut wire)?;
//! assert_eq!(wire, [0b1010_0000, 0x34, 0x12]);
//!
//! let mut received = schema.clone();
//! received.decode(&wire)?;
//! assert_eq!(received.field("counter").unwrap().as_u16()?, 0x1234);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Encode and decode process fields in layout order and stop at the first
//! error; they are deliberately not atomic across fields (fields decoded or
//! bytes written before the failure keep their new state).
//!
//! Schema construction from external ICD descriptions goes through the
//! [`SchemaParser`] trait; concrete parsers live in consumer crates.

pub mod bits;
pub mod codec;
pub mod dump;
pub mod field;
pub mod hex;
pub mod message;
pub mod parser;
pub mod value;

pub use codec::{
    extract, extract_field, host_endianness, insert, insert_field, swap_endian, CodecError,
    Endianness, FieldInt,
};
pub use field::{FieldDescriptor, FieldError, FieldType};
pub use hex::{decode_hex, encode_hex, HexError};
pub use message::{MessageSchema, SchemaError};
pub use parser::{ParseError, SchemaParser};
pub use value::FieldValue;

//! Message schemas: ordered field collections driving bulk encode/decode.

use crate::codec::{self, CodecError};
use crate::field::FieldDescriptor;

/// Schema construction failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("field {name} duplicates position (byte {byte_offset}, bit {bit_offset})")]
    DuplicatePosition {
        name: String,
        byte_offset: usize,
        bit_offset: usize,
    },
}

/// An ordered set of [`FieldDescriptor`]s, unique and ascending by
/// `(byte_offset, bit_offset)`. That order is both the layout order and the
/// processing order for [`encode`](MessageSchema::encode) and
/// [`decode`](MessageSchema::decode).
///
/// Fields are added at setup time; the set is structurally immutable once
/// encoding or decoding begins. The schema exclusively owns its descriptors.
#[derive(Debug, Clone, Default)]
pub struct MessageSchema {
    fields: Vec<FieldDescriptor>,
}

impl MessageSchema {
    pub fn new() -> Self {
        MessageSchema { fields: Vec::new() }
    }

    /// Inserts a descriptor at its sorted position. A second descriptor at an
    /// already occupied `(byte_offset, bit_offset)` is rejected.
    pub fn add(&mut self, field: FieldDescriptor) -> Result<(), SchemaError> {
        let key = (field.byte_offset(), field.bit_offset());
        match self
            .fields
            .binary_search_by_key(&key, |f| (f.byte_offset(), f.bit_offset()))
        {
            Ok(_) => Err(SchemaError::DuplicatePosition {
                name: field.name().to_string(),
                byte_offset: field.byte_offset(),
                bit_offset: field.bit_offset(),
            }),
            Err(idx) => {
                self.fields.insert(idx, field);
                Ok(())
            }
        }
    }

    /// Descriptors in ascending `(byte_offset, bit_offset)` order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Looks a descriptor up by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Mutable lookup by name, for setting values before encoding.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldDescriptor> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Minimal buffer length, in bytes, covering every field's bit span.
    pub fn byte_len(&self) -> usize {
        self.fields
            .iter()
            .map(|f| (f.byte_offset() * 8 + f.bit_offset() + f.bit_length() + 7) / 8)
            .max()
            .unwrap_or(0)
    }

    /// Decodes every field from `buffer` into its storage, in layout order.
    ///
    /// Stops at the first field error and returns it unchanged. Decode is not
    /// atomic across fields: fields decoded before the failure retain their
    /// new values.
    pub fn decode(&mut self, buffer: &[u8]) -> Result<(), CodecError> {
        for field in &mut self.fields {
            codec::extract_field(buffer, field)?;
        }
        Ok(())
    }

    /// Encodes every field's storage into `buffer`, in layout order.
    ///
    /// Stops at the first field error and returns it unchanged. Encode is not
    /// atomic across fields: bytes written by prior fields remain written.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<(), CodecError> {
        for field in &self.fields {
            codec::insert_field(buffer, field)?;
        }
        Ok(())
    }
}

//! Sibling entries holding variable-length property payloads.
//!
//! Variable-length values do not live inside the property stream itself; each
//! one is stored in a sibling entry next to the stream, named after the property
//! identifier and wire type it belongs to. This module provides the [`Chunk`]
//! type for those entries together with the naming scheme that links a record
//! in the stream to its payload.
//!
//! # Entry Naming
//!
//! A sibling entry name is the fixed prefix [`VARIABLE_ENTRY_PREFIX`] followed
//! by eight uppercase hex digits: four for the property identifier and four for
//! the wire type code. The property stream itself is always named
//! [`PROPERTIES_ENTRY_NAME`].
//!
//! ```text
//! __substg1.0_0037001F
//! |----------||--||--|
//!    prefix    id  type  ->  property 0x0037 (Subject), type 0x001F (Unicode)
//! ```
//!
//! # Usage Examples
//!
//! ```rust
//! use msgscope::mapi::{Chunk, MapiType};
//!
//! let chunk = Chunk::new(0x0037, MapiType::UNICODE, b"h\0i\0".to_vec());
//! assert_eq!(chunk.entry_name(), "__substg1.0_0037001F");
//!
//! let (id, type_code) = Chunk::parse_entry_name("__substg1.0_0037001F").unwrap();
//! assert_eq!(id, 0x0037);
//! assert_eq!(type_code, 0x001F);
//! ```

use std::sync::Arc;

use crate::mapi::types::MapiType;

/// Name prefix shared by all sibling entries holding variable-length payloads.
pub const VARIABLE_ENTRY_PREFIX: &str = "__substg1.0_";

/// Name of the property stream entry itself.
pub const PROPERTIES_ENTRY_NAME: &str = "__properties_version1.0";

/// A reference-counted [`Chunk`]
pub type ChunkRc = Arc<Chunk>;

/// A sibling entry carrying the payload of one variable-length property.
///
/// A `Chunk` pairs the raw payload bytes with the property identifier and wire
/// type they were stored under. For string types the payload keeps its on-wire
/// encoding (UTF-16LE for [`MapiType::UNICODE`], an 8-bit codepage for
/// [`MapiType::STRING8`]); decoding to text happens at access time, not here.
///
/// # Examples
///
/// ```rust
/// use msgscope::mapi::{Chunk, MapiType};
///
/// let chunk = Chunk::new(0x1000, MapiType::BINARY, vec![0xDE, 0xAD]);
/// assert_eq!(chunk.id(), 0x1000);
/// assert_eq!(chunk.data(), &[0xDE, 0xAD]);
/// assert_eq!(chunk.entry_name(), "__substg1.0_10000102");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Identifier of the property this payload belongs to
    id: u32,
    /// Wire type the payload was stored under
    mapi_type: MapiType,
    /// The raw payload bytes, in their on-wire encoding
    data: Vec<u8>,
}

impl Chunk {
    /// Creates a chunk from a property identifier, wire type, and payload.
    ///
    /// # Arguments
    /// * `id` - Identifier of the property the payload belongs to
    /// * `mapi_type` - Wire type the payload is stored under
    /// * `data` - The raw payload bytes
    #[must_use]
    pub fn new(id: u32, mapi_type: MapiType, data: Vec<u8>) -> Self {
        Chunk {
            id,
            mapi_type,
            data,
        }
    }

    /// Returns the identifier of the property this payload belongs to.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns the wire type the payload was stored under.
    #[must_use]
    pub const fn mapi_type(&self) -> MapiType {
        self.mapi_type
    }

    /// Returns the raw payload bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the payload size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Builds the sibling entry name for this chunk.
    ///
    /// The name is [`VARIABLE_ENTRY_PREFIX`] followed by the identifier and
    /// type code, each as four uppercase hex digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::mapi::{Chunk, MapiType};
    ///
    /// let chunk = Chunk::new(0x0037, MapiType::UNICODE, Vec::new());
    /// assert_eq!(chunk.entry_name(), "__substg1.0_0037001F");
    /// ```
    #[must_use]
    pub fn entry_name(&self) -> String {
        format!(
            "{VARIABLE_ENTRY_PREFIX}{:04X}{}",
            self.id,
            self.mapi_type.file_suffix()
        )
    }

    /// Parses a sibling entry name into its property identifier and type code.
    ///
    /// Returns [`None`] when the name does not carry the sibling prefix or the
    /// eight hex digits are malformed. Lowercase hex digits are accepted even
    /// though writers emit uppercase.
    ///
    /// # Arguments
    /// * `name` - The entry name to parse
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::mapi::Chunk;
    ///
    /// assert_eq!(
    ///     Chunk::parse_entry_name("__substg1.0_10000102"),
    ///     Some((0x1000, 0x0102))
    /// );
    /// assert_eq!(Chunk::parse_entry_name("__properties_version1.0"), None);
    /// assert_eq!(Chunk::parse_entry_name("__substg1.0_XYZ"), None);
    /// ```
    #[must_use]
    pub fn parse_entry_name(name: &str) -> Option<(u32, u16)> {
        let digits = name.strip_prefix(VARIABLE_ENTRY_PREFIX)?;
        if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let id = u32::from_str_radix(&digits[..4], 16).ok()?;
        let type_code = u16::from_str_radix(&digits[4..], 16).ok()?;
        Some((id, type_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_name_components() {
        let chunk = Chunk::new(0x0037, MapiType::UNICODE, Vec::new());
        assert_eq!(chunk.entry_name(), "__substg1.0_0037001F");

        let chunk = Chunk::new(0x3701, MapiType::BINARY, Vec::new());
        assert_eq!(chunk.entry_name(), "__substg1.0_37010102");

        let chunk = Chunk::new(0x1000, MapiType::STRING8, Vec::new());
        assert_eq!(chunk.entry_name(), "__substg1.0_1000001E");
    }

    #[test]
    fn entry_name_round_trip() {
        let chunk = Chunk::new(0x8001, MapiType::UNICODE, b"data".to_vec());
        let (id, type_code) = Chunk::parse_entry_name(&chunk.entry_name()).unwrap();

        assert_eq!(id, chunk.id());
        assert_eq!(i32::from(type_code), chunk.mapi_type().id());
    }

    #[test]
    fn parse_rejects_malformed_names() {
        assert_eq!(Chunk::parse_entry_name("__properties_version1.0"), None);
        assert_eq!(Chunk::parse_entry_name("__substg1.0_"), None);
        assert_eq!(Chunk::parse_entry_name("__substg1.0_0037"), None);
        assert_eq!(Chunk::parse_entry_name("__substg1.0_0037001F00"), None);
        assert_eq!(Chunk::parse_entry_name("__substg1.0_GGGG001F"), None);
        assert_eq!(Chunk::parse_entry_name("substg1.0_0037001F"), None);
    }

    #[test]
    fn parse_accepts_lowercase() {
        assert_eq!(
            Chunk::parse_entry_name("__substg1.0_0037001f"),
            Some((0x0037, 0x001F))
        );
    }

    #[test]
    fn chunk_equality() {
        let a = Chunk::new(0x0037, MapiType::UNICODE, vec![1, 2, 3]);
        let b = Chunk::new(0x0037, MapiType::UNICODE, vec![1, 2, 3]);
        let c = Chunk::new(0x0037, MapiType::UNICODE, vec![1, 2, 4]);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn payload_access() {
        let chunk = Chunk::new(0x1009, MapiType::BINARY, vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(chunk.len(), 4);
        assert!(!chunk.is_empty());
        assert_eq!(chunk.data(), &[0xDE, 0xAD, 0xBE, 0xEF]);

        let empty = Chunk::new(0x1009, MapiType::BINARY, Vec::new());
        assert!(empty.is_empty());
    }
}

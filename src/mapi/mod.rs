//! MAPI property stream decoding, resolution and encoding.
//!
//! This module implements the property subsystem of Outlook MSG compound documents.
//! Every storage in such a document (the message itself, each recipient, each
//! attachment) carries a `__properties_version1.0` stream holding a table of typed
//! properties, and a family of `__substg1.0_XXXXTTTT` sibling entries holding the
//! payloads of the variable-length ones. This module decodes those streams, binds
//! the placeholders to their payload entries, and serializes tables back out.
//!
//! # Stream Anatomy
//!
//! A property stream is a reserved preamble (whose layout depends on which storage
//! the stream belongs to) followed by 16-byte records. Each record is an 8-byte tag
//! header plus an 8-byte value slot:
//!
//! - **Fixed-width types** (integers, booleans, floats, timestamps, currency) store
//!   their value directly in the slot, zero-padded to 8 bytes.
//! - **Variable-length types** (strings, binary blobs, GUIDs, multi-valued
//!   properties) store only a declared size; the payload lives in a sibling entry
//!   named after the property id and type, and is attached in a separate resolution
//!   pass once the container has been fully listed.
//!
//! # Key Components
//!
//! - [`crate::mapi::properties::PropertyTable`] - The codec: decode, resolve, encode
//! - [`crate::mapi::property::MapiProperty`] - Well-known identity catalog and custom identities
//! - [`crate::mapi::types::MapiType`] - Wire type catalog with fixed widths
//! - [`crate::mapi::value::PropertyValue`] - Typed values with conversion accessors
//! - [`crate::mapi::chunk::Chunk`] - Sibling entry naming and payload carriage
//! - [`crate::mapi::diagnostics::Diagnostics`] - Anomaly collection for forgiving decodes
//!
//! # Examples
//!
//! ```rust,no_run
//! use msgscope::mapi::{DecodeConfig, MapiProperty, PropertyTable, TableKind};
//!
//! # fn example(stream: &[u8], siblings: &[msgscope::ChunkRc]) -> msgscope::Result<()> {
//! let table = PropertyTable::parse(stream, TableKind::TopLevel, &DecodeConfig::default())?;
//! table.resolve_chunks(siblings)?;
//!
//! if let Some(subject) = table.get(&MapiProperty::SUBJECT) {
//!     println!("Subject: {:?}", subject.as_text());
//! }
//! # Ok(())
//! # }
//! ```

/// Sibling entry representation and the `__substg1.0_` naming scheme
pub mod chunk;
/// Collection of non-fatal anomalies encountered while decoding
pub mod diagnostics;
/// The property table codec: preambles, records, resolution, serialization
pub mod properties;
/// The catalog of well-known property identities
pub mod property;
/// The catalog of wire types and their fixed widths
pub mod types;
/// Typed property values, flags and conversion accessors
pub mod value;

pub use chunk::{Chunk, ChunkRc, PROPERTIES_ENTRY_NAME, VARIABLE_ENTRY_PREFIX};
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticSeverity, Diagnostics};
pub use properties::{DecodeConfig, MessageCounts, PropertyTable, TableKind};
pub use property::MapiProperty;
pub use types::{MapiType, TypeLength};
pub use value::{PointerValue, PropertyData, PropertyFlags, PropertyValue};

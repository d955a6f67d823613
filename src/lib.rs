// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![allow(dead_code)]

//! # msgscope
//!
//! [![Crates.io](https://img.shields.io/crates/v/msgscope.svg)](https://crates.io/crates/msgscope)
//! [![Documentation](https://docs.rs/msgscope/badge.svg)](https://docs.rs/msgscope)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/msgscope/blob/main/LICENSE-APACHE)
//!
//! A cross-platform library for decoding and writing the MAPI property streams found in
//! Outlook MSG compound documents. Built in pure Rust, `msgscope` parses the
//! `__properties_version1.0` streams and their `__substg1.0_` sibling entries without
//! requiring Windows, Outlook or a MAPI runtime.
//!
//! ## Features
//!
//! - **🛡️ Forgiving by design** - Truncated and slightly corrupted streams decode to
//!   whatever prefix is intact, with every anomaly recorded in a diagnostics sink
//! - **🔍 Complete catalogs** - All documented wire types and over a hundred well-known
//!   property identities, plus custom identity minting for everything else
//! - **🧩 Typed access** - Booleans, integers, floats, currency, FILETIME timestamps,
//!   GUIDs, narrow and wide strings through one accessor surface
//! - **✍️ Writer support** - Build tables from scratch or round-trip decoded ones back
//!   into header bytes and sibling entry payloads
//! - **⚡ Hostile-input hardened** - Bounds-checked cursors everywhere and a configurable
//!   allocation ceiling against crafted length fields
//! - **🔧 Cross-platform** - No platform dependencies anywhere in the stack
//!
//! ## Quick Start
//!
//! Add `msgscope` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! msgscope = "0.2"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust
//! use msgscope::prelude::*;
//!
//! // 8-byte reserved preamble, then one record: Boolean `HasAttach` = true.
//! let mut stream = vec![0u8; 8];
//! stream.extend_from_slice(&[
//!     0x0B, 0x00, 0x1B, 0x0E, 0x06, 0x00, 0x00, 0x00,
//!     0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
//! ]);
//!
//! let table = PropertyTable::parse(&stream, TableKind::Storage, &DecodeConfig::default())?;
//! let has_attach = table.get(&MapiProperty::HAS_ATTACH).unwrap();
//! assert_eq!(has_attach.as_bool(), Some(true));
//! # Ok::<(), msgscope::Error>(())
//! ```
//!
//! ### Basic Usage
//!
//! ```rust,no_run
//! use msgscope::{DecodeConfig, PropertyTable, TableKind};
//!
//! // The container layer extracts the raw stream bytes; any CFB reader works.
//! let stream: Vec<u8> = std::fs::read("message.properties.bin")?;
//!
//! let table = PropertyTable::parse(&stream, TableKind::TopLevel, &DecodeConfig::default())?;
//!
//! println!(
//!     "{} properties, {} recipients, {} attachments",
//!     table.len(),
//!     table.counts().recipient_count,
//!     table.counts().attachment_count,
//! );
//!
//! for (property, value) in table.iter() {
//!     println!("  {property} = {:?}", value.data());
//! }
//!
//! if table.diagnostics().has_any() {
//!     println!("{}", table.diagnostics().summary());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Writing Properties
//!
//! ```rust
//! use msgscope::{MapiProperty, PropertyFlags, PropertyTable, PropertyValue, TableKind};
//!
//! let mut table = PropertyTable::new(TableKind::Storage);
//! table.set(PropertyValue::unicode(
//!     MapiProperty::DISPLAY_NAME,
//!     PropertyFlags::READABLE | PropertyFlags::WRITEABLE,
//!     "Jane Doe",
//! ));
//!
//! // `header` becomes the property stream, each chunk a named sibling entry.
//! let (header, chunks) = table.encode()?;
//! for chunk in &chunks {
//!     println!("write {} ({} bytes)", chunk.entry_name(), chunk.len());
//! }
//! # Ok::<(), msgscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `msgscope` is organized into a small set of modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`mapi`] - The property subsystem: tables, identities, types, values, chunks
//! - [`Error`] and [`Result`] - Error handling for the whole crate
//!
//! The [`mapi::properties::PropertyTable`] is the main entry point. It decodes a
//! property stream in one forward pass, binds variable-length values to their sibling
//! chunks in a second pass, and serializes everything back with
//! [`mapi::properties::PropertyTable::encode`].
//!
//! ## Standards Compliance
//!
//! The wire format implemented here is the property stream layout of the **MS-OXMSG**
//! specification (Outlook Item File Format), with property types and identities drawn
//! from **MS-OXCDATA** and **MS-OXPROPS**.
//!
//! ### References
//!
//! - [MS-OXMSG](https://learn.microsoft.com/en-us/openspecs/exchange_server_protocols/ms-oxmsg/) - Outlook Item (.msg) File Format
//! - [MS-OXCDATA](https://learn.microsoft.com/en-us/openspecs/exchange_server_protocols/ms-oxcdata/) - Data Structures
//! - [MS-OXPROPS](https://learn.microsoft.com/en-us/openspecs/exchange_server_protocols/ms-oxprops/) - Property List
//!
//! ## Error Handling
//!
//! Decoding is deliberately lenient: a damaged table yields its intact prefix plus
//! diagnostics, not an error. The exception is a declared payload size above the
//! configured allocation ceiling, which is rejected as hostile input:
//!
//! ```rust,no_run
//! use msgscope::{DecodeConfig, Error, PropertyTable, TableKind};
//!
//! # fn example(stream: &[u8]) {
//! match PropertyTable::parse(stream, TableKind::Storage, &DecodeConfig::default()) {
//!     Ok(table) => println!("{} properties", table.len()),
//!     Err(Error::AllocationLimit { requested, limit }) => {
//!         println!("rejected: {requested} bytes declared, limit {limit}");
//!     }
//!     Err(e) => println!("error: {e}"),
//! }
//! # }
//! ```
//!
//! ## Testing
//!
//! The test suite runs on crafted streams covering the documented layout and the
//! malformations seen in real-world files:
//!
//! ```bash
//! cargo test
//! cargo bench  # Decode/encode throughput
//! ```

#[macro_use]
pub(crate) mod error;
pub(crate) mod io;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the msgscope library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust,no_run
/// use msgscope::prelude::*;
///
/// # fn example(stream: &[u8]) -> msgscope::Result<()> {
/// let table = PropertyTable::parse(stream, TableKind::TopLevel, &DecodeConfig::default())?;
/// println!("{} properties", table.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude;

/// MAPI property streams: tables, identities, wire types, values and chunks.
///
/// This module implements the property subsystem of MSG compound documents. Every
/// storage in such a document carries a property stream plus named sibling entries
/// for variable-length payloads; this module decodes, resolves and re-encodes them.
///
/// # Key Components
///
/// ## The Codec
/// - [`mapi::properties::PropertyTable`] - Decode, resolve and encode property streams
/// - [`mapi::properties::TableKind`] - Stream placement and preamble layout
/// - [`mapi::properties::DecodeConfig`] - The allocation ceiling
///
/// ## Identities and Types
/// - [`mapi::property::MapiProperty`] - The well-known identity catalog
/// - [`mapi::types::MapiType`] - The wire type catalog
///
/// ## Values and Payloads
/// - [`mapi::value::PropertyValue`] - Typed values with conversion accessors
/// - [`mapi::chunk::Chunk`] - Sibling entries and their naming scheme
/// - [`mapi::diagnostics::Diagnostics`] - Anomalies collected during decoding
///
/// # Examples
///
/// ```rust,no_run
/// use msgscope::mapi::{DecodeConfig, MapiProperty, PropertyTable, TableKind};
///
/// # fn example(stream: &[u8]) -> msgscope::Result<()> {
/// let table = PropertyTable::parse(stream, TableKind::TopLevel, &DecodeConfig::default())?;
///
/// if let Some(subject) = table.get(&MapiProperty::SUBJECT) {
///     println!("Subject: {:?}", subject.as_text());
/// }
/// # Ok(())
/// # }
/// ```
pub mod mapi;

/// `msgscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. This is used consistently throughout the crate for all fallible
/// operations.
///
/// # Examples
///
/// ```rust,no_run
/// use msgscope::{DecodeConfig, PropertyTable, Result, TableKind};
///
/// fn load_table(stream: &[u8]) -> Result<PropertyTable> {
///     PropertyTable::parse(stream, TableKind::TopLevel, &DecodeConfig::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `msgscope` Error type
///
/// The main error type for all operations in this crate. Most structural anomalies in
/// property streams are reported through diagnostics rather than errors; the variants
/// here cover the conditions where aborting is the only safe choice.
///
/// # Examples
///
/// ```rust,no_run
/// use msgscope::{DecodeConfig, Error, PropertyTable, TableKind};
///
/// # fn example(stream: &[u8]) {
/// match PropertyTable::parse(stream, TableKind::Storage, &DecodeConfig::default()) {
///     Ok(table) => println!("parsed {} properties", table.len()),
///     Err(Error::AllocationLimit { requested, .. }) => println!("hostile: {requested} bytes"),
///     Err(e) => println!("error: {e}"),
/// }
/// # }
/// ```
pub use error::Error;

/// Main entry point for working with property streams.
///
/// See [`mapi::properties::PropertyTable`] for decoding, resolution and encoding.
///
/// # Example
///
/// ```rust,no_run
/// use msgscope::{DecodeConfig, PropertyTable, TableKind};
///
/// # fn example(stream: &[u8]) -> msgscope::Result<()> {
/// let table = PropertyTable::parse(stream, TableKind::TopLevel, &DecodeConfig::default())?;
/// println!("{} properties", table.len());
/// # Ok(())
/// # }
/// ```
pub use mapi::properties::{DecodeConfig, MessageCounts, PropertyTable, TableKind};

/// Identities, wire types, values and diagnostics for direct access.
///
/// These types make up the data model behind [`PropertyTable`]:
/// - [`MapiProperty`] - Well-known identity catalog and custom identities
/// - [`MapiType`] - Wire type catalog with fixed widths
/// - [`PropertyValue`] / [`PropertyData`] - Typed values and their payloads
/// - [`PropertyFlags`] - The per-record flag word
/// - [`Chunk`] / [`ChunkRc`] - Sibling entries holding variable-length payloads
/// - [`Diagnostics`] - Anomalies collected while decoding
///
/// # Example
///
/// ```rust
/// use msgscope::{MapiProperty, MapiType};
///
/// assert_eq!(MapiProperty::SUBJECT.id(), 0x0037);
/// assert_eq!(MapiType::UNICODE.fixed_width(), None);
/// ```
pub use mapi::{
    Chunk, ChunkRc, Diagnostic, DiagnosticCategory, DiagnosticSeverity, Diagnostics, MapiProperty,
    MapiType, PointerValue, PropertyData, PropertyFlags, PropertyValue, TypeLength,
    PROPERTIES_ENTRY_NAME, VARIABLE_ENTRY_PREFIX,
};

/// Provides access to the low-level stream parsing cursor.
///
/// The [`Parser`] type is used for walking raw stream bytes with bounds checks.
///
/// # Example
///
/// ```rust
/// use msgscope::Parser;
///
/// let header = [0x1F, 0x00, 0x37, 0x00, 0x06, 0x00, 0x00, 0x00];
/// let mut parser = Parser::new(&header);
///
/// let type_code: u16 = parser.read_le()?;
/// let id: u16 = parser.read_le()?;
/// assert_eq!((type_code, id), (0x001F, 0x0037));
/// # Ok::<(), msgscope::Error>(())
/// ```
pub use io::Parser;

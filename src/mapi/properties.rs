//! Property table codec for `__properties_version1.0` streams.
//!
//! This module implements the heart of the crate: decoding a property stream into a
//! [`crate::mapi::properties::PropertyTable`], binding its variable-length entries to
//! the sibling chunks of the enclosing storage, and serializing a table back into
//! header bytes plus the chunk payloads the container layer must persist next to them.
//!
//! # Architecture
//!
//! A property stream is a reserved preamble followed by a sequence of 16-byte records.
//! Every record opens with an 8-byte tag header (wire type code, property id, flags)
//! and closes with an 8-byte value slot. Fixed-width scalars live inline in the slot,
//! zero-padded to its full width; variable-length values store only a declared size
//! there and keep their payload in a separately named sibling entry. Decoding is a
//! single forward pass, resolution is a second pass once the container has been fully
//! listed, and encoding reverses both in one step.
//!
//! Decoding is deliberately forgiving. Real-world files are frequently truncated or
//! carry records the producer got wrong, and callers want whatever prefix of the
//! table is intact rather than a refusal. Anomalies are recorded in a shared
//! [`crate::mapi::diagnostics::Diagnostics`] sink; the only condition treated as
//! fatal is a declared payload size above the configured allocation ceiling, which
//! indicates either corruption or a crafted length field.
//!
//! # Key Components
//!
//! - [`crate::mapi::properties::PropertyTable`] - The decoded table and its entry map
//! - [`crate::mapi::properties::TableKind`] - Stream placement, selects the preamble layout
//! - [`crate::mapi::properties::MessageCounts`] - Recipient and attachment counters
//! - [`crate::mapi::properties::DecodeConfig`] - Allocation ceiling configuration
//!
//! # Usage Examples
//!
//! ```rust
//! use msgscope::mapi::properties::{DecodeConfig, PropertyTable, TableKind};
//! use msgscope::mapi::property::MapiProperty;
//!
//! // 8-byte reserved preamble, then one record: Int32 `Importance` = 1.
//! let mut stream = vec![0u8; 8];
//! stream.extend_from_slice(&[
//!     0x03, 0x00, 0x17, 0x00, 0x06, 0x00, 0x00, 0x00,
//!     0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
//! ]);
//!
//! let table = PropertyTable::parse(&stream, TableKind::Storage, &DecodeConfig::default())?;
//! assert_eq!(table.len(), 1);
//!
//! let importance = table.get(&MapiProperty::IMPORTANCE).unwrap();
//! assert_eq!(importance.as_i32(), Some(1));
//! # Ok::<(), msgscope::Error>(())
//! ```

use std::{collections::BTreeMap, sync::Arc};

use strum::EnumIter;

use crate::{
    io::{write_le_at, Parser},
    mapi::{
        chunk::{Chunk, ChunkRc},
        diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticSeverity, Diagnostics},
        property::MapiProperty,
        types::{MapiType, TypeLength},
        value::{terminator_allowance, PointerValue, PropertyData, PropertyFlags, PropertyValue},
    },
    Error, Result,
};

/// Byte length of one property record: an 8-byte tag header followed by the
/// 8-byte value slot.
pub const RECORD_SIZE: usize = 16;

/// Width of the inline value slot that follows every record header.
const VALUE_SLOT_SIZE: usize = 8;

/// Default ceiling for declared payload sizes, in bytes.
pub const DEFAULT_MAX_ALLOCATION: usize = 1_000_000;

/// Placement of a property stream inside the containing document.
///
/// The stream opens with a reserved preamble whose length depends on where the
/// stream lives. [`TableKind`] selects that layout for both decoding and
/// encoding; the record format that follows the preamble is identical for all
/// three placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum TableKind {
    /// Stream of a top level message, with a 32-byte preamble carrying the
    /// recipient and attachment counters.
    TopLevel,
    /// Stream of a message embedded as an attachment, with a 24-byte preamble
    /// carrying the same counters.
    Embedded,
    /// Stream of a recipient or attachment storage, with a plain 8-byte
    /// reserved preamble.
    Storage,
}

impl TableKind {
    /// Number of reserved preamble bytes before the first property record.
    #[must_use]
    pub const fn preamble_len(self) -> usize {
        match self {
            TableKind::TopLevel => 32,
            TableKind::Embedded => 24,
            TableKind::Storage => 8,
        }
    }

    /// `true` if the preamble carries the next-id and count fields.
    #[must_use]
    pub const fn has_counts(self) -> bool {
        matches!(self, TableKind::TopLevel | TableKind::Embedded)
    }
}

/// Recipient and attachment bookkeeping carried by message preambles.
///
/// Top level and embedded message streams store the next free recipient and
/// attachment storage ids together with the number of such storages present in
/// the container. Storage streams carry no counters; their tables keep this at
/// its default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageCounts {
    /// Next free recipient storage id.
    pub next_recipient_id: u32,

    /// Next free attachment storage id.
    pub next_attachment_id: u32,

    /// Number of recipient storages in the container.
    pub recipient_count: u32,

    /// Number of attachment storages in the container.
    pub attachment_count: u32,
}

/// Tunable limits for [`crate::mapi::properties::PropertyTable::parse`].
///
/// The configuration is owned by the caller and passed explicitly into each
/// decode, so concurrent decodes of different documents cannot interfere with
/// each other through shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Largest declared payload size accepted for a single property, in bytes.
    ///
    /// A variable-length record declaring more than this aborts the decode
    /// with [`crate::Error::AllocationLimit`] before any buffer is allocated.
    /// Crafted length fields are the classic allocation-bomb vector in this
    /// format, so oversized declarations are rejected outright instead of
    /// being truncated.
    pub max_allocation: usize,
}

impl DecodeConfig {
    /// Creates a configuration with a custom allocation ceiling.
    #[must_use]
    pub const fn with_max_allocation(max_allocation: usize) -> Self {
        DecodeConfig { max_allocation }
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        DecodeConfig {
            max_allocation: DEFAULT_MAX_ALLOCATION,
        }
    }
}

/// A decoded property table: the preamble counters plus an id-ordered map of
/// identities to values.
///
/// `PropertyTable` is the unit the container layer works with. It is produced
/// by [`PropertyTable::parse`] from the raw bytes of a property stream,
/// completed by [`PropertyTable::resolve_chunks`] once the sibling entries of
/// the storage are known, and turned back into bytes by
/// [`PropertyTable::encode`]. Tables can also be built from scratch with
/// [`PropertyTable::new`] and [`PropertyTable::set`] when writing documents.
///
/// Entries are keyed by [`crate::mapi::property::MapiProperty`] identity and
/// held in id order, so iteration and encoding are deterministic regardless of
/// the order in which properties were inserted.
///
/// ## Decoding a stream
///
/// ```rust
/// use msgscope::mapi::properties::{DecodeConfig, PropertyTable, TableKind};
///
/// # fn example(stream: &[u8]) -> msgscope::Result<()> {
/// let table = PropertyTable::parse(stream, TableKind::TopLevel, &DecodeConfig::default())?;
///
/// println!(
///     "{} properties, {} recipients, {} attachments",
///     table.len(),
///     table.counts().recipient_count,
///     table.counts().attachment_count,
/// );
///
/// for (property, value) in table.iter() {
///     println!("  {property}: {:?}", value.actual_type());
/// }
///
/// if table.diagnostics().has_any() {
///     println!("{}", table.diagnostics().summary());
/// }
/// # Ok(())
/// # }
/// ```
///
/// ## Building and encoding a table
///
/// ```rust
/// use msgscope::mapi::properties::{PropertyTable, TableKind};
/// use msgscope::mapi::property::MapiProperty;
/// use msgscope::mapi::value::{PropertyData, PropertyFlags, PropertyValue};
///
/// let mut table = PropertyTable::new(TableKind::Embedded);
/// table.counts_mut().recipient_count = 1;
///
/// table.set(PropertyValue::new(
///     MapiProperty::IMPORTANCE,
///     PropertyFlags::READABLE,
///     PropertyData::Int32(2),
/// ));
/// table.set(PropertyValue::unicode(
///     MapiProperty::SMTP_ADDRESS,
///     PropertyFlags::READABLE | PropertyFlags::WRITEABLE,
///     "mail@example.com",
/// ));
///
/// let (header, chunks) = table.encode()?;
/// assert_eq!(header.len(), 24 + 2 * 16);
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].entry_name(), "__substg1.0_39FE001F");
/// # Ok::<(), msgscope::Error>(())
/// ```
#[derive(Debug)]
pub struct PropertyTable {
    /// Placement of the stream this table was read from or will be written to.
    kind: TableKind,

    /// Counters from the preamble. All zero for storage streams.
    counts: MessageCounts,

    /// Decoded entries, keyed by identity and ordered by id.
    values: BTreeMap<MapiProperty, PropertyValue>,

    /// Sink for anomalies found while decoding, resolving and encoding.
    diagnostics: Arc<Diagnostics>,
}

impl PropertyTable {
    /// Creates an empty table for the given stream placement.
    #[must_use]
    pub fn new(kind: TableKind) -> Self {
        PropertyTable {
            kind,
            counts: MessageCounts::default(),
            values: BTreeMap::new(),
            diagnostics: Arc::new(Diagnostics::new()),
        }
    }

    /// Decodes a property stream with a fresh diagnostics sink.
    ///
    /// # Arguments
    ///
    /// * `data` - The raw bytes of the property stream
    /// * `kind` - Placement of the stream, selecting the preamble layout
    /// * `config` - Decode limits, normally [`DecodeConfig::default`]
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::AllocationLimit`] if a record declares a payload
    /// larger than `config.max_allocation`. All other anomalies are reported
    /// through the table's diagnostics and end the decode early, keeping every
    /// record parsed up to that point.
    pub fn parse(data: &[u8], kind: TableKind, config: &DecodeConfig) -> Result<Self> {
        Self::parse_with_diagnostics(data, kind, config, Arc::new(Diagnostics::new()))
    }

    /// Decodes a property stream, reporting anomalies into a shared sink.
    ///
    /// Container layers decoding many streams of one document pass the same
    /// sink to each call so the anomalies of the whole document end up in one
    /// place.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::AllocationLimit`] if a record declares a payload
    /// larger than `config.max_allocation`.
    pub fn parse_with_diagnostics(
        data: &[u8],
        kind: TableKind,
        config: &DecodeConfig,
        diagnostics: Arc<Diagnostics>,
    ) -> Result<Self> {
        let mut table = PropertyTable {
            kind,
            counts: MessageCounts::default(),
            values: BTreeMap::new(),
            diagnostics,
        };

        let mut parser = Parser::new(data);
        if parser.remaining() < kind.preamble_len() {
            table.diagnostics.warning(
                DiagnosticCategory::Properties,
                format!(
                    "property stream holds {} bytes, shorter than the {}-byte preamble",
                    parser.remaining(),
                    kind.preamble_len()
                ),
            );
            return Ok(table);
        }

        parser.advance_by(8)?;
        if kind.has_counts() {
            table.counts.next_recipient_id = parser.read_le()?;
            table.counts.next_attachment_id = parser.read_le()?;
            table.counts.recipient_count = parser.read_le()?;
            table.counts.attachment_count = parser.read_le()?;
        }
        if kind == TableKind::TopLevel {
            parser.advance_by(8)?;
        }

        table.parse_records(&mut parser, config)?;
        Ok(table)
    }

    /// Decodes records until the stream ends or an anomaly stops the pass.
    fn parse_records(&mut self, parser: &mut Parser<'_>, config: &DecodeConfig) -> Result<()> {
        loop {
            let offset = parser.pos() as u64;
            let remaining = parser.remaining();
            if remaining < RECORD_SIZE {
                if remaining != 0 {
                    self.diagnostics.push(
                        Diagnostic::new(
                            DiagnosticSeverity::Warning,
                            DiagnosticCategory::Properties,
                            format!("{remaining} trailing bytes do not form a complete record"),
                        )
                        .with_offset(offset),
                    );
                }
                return Ok(());
            }

            let type_code: u16 = parser.read_le()?;
            let id: u16 = parser.read_le()?;
            let flags = PropertyFlags::from_bits_retain(parser.read_le::<u32>()?);

            let Some(declared) = MapiType::by_id(type_code) else {
                self.diagnostics.push(
                    Diagnostic::new(
                        DiagnosticSeverity::Warning,
                        DiagnosticCategory::Type,
                        format!(
                            "unrecognized wire type {type_code:#06x}, keeping the {} entries decoded so far",
                            self.values.len()
                        ),
                    )
                    .with_offset(offset)
                    .with_property(u32::from(id)),
                );
                return Ok(());
            };

            let property = Self::identify(id, declared);

            let usual = property.usual_type();
            if usual != declared {
                if usual == MapiType::UNKNOWN {
                    self.diagnostics.info(
                        DiagnosticCategory::Type,
                        format!("open-typed property {property} arrives as {declared}"),
                    );
                } else if !string_substitution(usual, declared) {
                    self.diagnostics.push(
                        Diagnostic::new(
                            DiagnosticSeverity::Error,
                            DiagnosticCategory::Properties,
                            format!(
                                "declared type {declared} conflicts with the usual type {usual} of {property}"
                            ),
                        )
                        .with_offset(offset)
                        .with_property(u32::from(id)),
                    );
                    return Ok(());
                }
            }

            let value = match declared.length() {
                TypeLength::Fixed(width) => {
                    let raw = parser.read_bytes(width)?;
                    let data = PropertyData::from_fixed(declared, raw)?;
                    parser.advance_by(VALUE_SLOT_SIZE - width)?;
                    PropertyValue::new(property.clone(), flags, data)
                }
                TypeLength::Variable => {
                    let declared_size: u32 = parser.read_le()?;
                    let _reserved: u32 = parser.read_le()?;

                    let requested = declared_size as usize;
                    if requested > config.max_allocation {
                        return Err(Error::AllocationLimit {
                            requested,
                            limit: config.max_allocation,
                        });
                    }

                    PropertyValue::new(
                        property.clone(),
                        flags,
                        PropertyData::Pointer(PointerValue::new(declared, declared_size)),
                    )
                }
            };

            if self.values.insert(property.clone(), value).is_some() {
                self.diagnostics.push(
                    Diagnostic::new(
                        DiagnosticSeverity::Warning,
                        DiagnosticCategory::Properties,
                        format!("duplicate property {property} overwrites an earlier entry"),
                    )
                    .with_offset(offset)
                    .with_property(u32::from(id)),
                );
            }
        }
    }

    /// Resolves a wire id to its registered identity, minting a custom one
    /// wrapping the declared type for ids outside the catalog.
    fn identify(id: u16, declared: MapiType) -> MapiProperty {
        let registered = MapiProperty::get(i32::from(id));
        if registered.id() == i32::from(id) {
            registered.clone()
        } else {
            MapiProperty::create_custom(i32::from(id), declared, format!("Unknown {id}"))
        }
    }

    /// Binds every unresolved pointer property to the sibling chunk with the
    /// matching numeric id.
    ///
    /// Matching considers the id alone. The type tag in an entry name is
    /// ignored so that values written under a substituted string type still
    /// find their payload. Properties without a matching chunk stay unresolved
    /// and are reported as [`crate::mapi::diagnostics::DiagnosticCategory::Chunk`]
    /// warnings; queries against them yield absent values rather than errors.
    ///
    /// Already-resolved properties are skipped, so running the pass twice with
    /// the same chunk set is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::Error::ChunkAlreadyBound`] from a concurrent bind of
    /// the same property to different payload bytes.
    pub fn resolve_chunks(&self, chunks: &[ChunkRc]) -> Result<()> {
        for value in self.values.values() {
            let Some(pointer) = value.pointer() else {
                continue;
            };
            if pointer.is_resolved() {
                continue;
            }

            let Ok(id) = u32::try_from(value.property().id()) else {
                continue;
            };

            if let Some(chunk) = chunks.iter().find(|chunk| chunk.id() == id) {
                pointer.bind(chunk.clone())?;
            } else {
                self.diagnostics.push(
                    Diagnostic::new(
                        DiagnosticSeverity::Warning,
                        DiagnosticCategory::Chunk,
                        format!(
                            "no sibling entry found for pointer property {}",
                            value.property()
                        ),
                    )
                    .with_property(id),
                );
            }
        }

        Ok(())
    }

    /// Serializes the table into header bytes plus the chunks to be written as
    /// sibling entries.
    ///
    /// Records are emitted in id order. Narrow string values are promoted to
    /// wide on the way out: the record tag, the chunk type and the entry name
    /// all use the wide type code, while the declared size keeps the
    /// single-byte terminator allowance of the narrow original and the payload
    /// bytes are carried over unchanged. Identities with negative ids have no
    /// wire form and are skipped silently; pointer properties that were never
    /// resolved have no payload to emit and are skipped with a warning, so the
    /// output never references a sibling entry that does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Malformed`] if a payload is too long for its
    /// 32-bit declared size field, and propagates buffer write failures from
    /// the underlying io helpers.
    pub fn encode(&self) -> Result<(Vec<u8>, Vec<Chunk>)> {
        let mut rows: Vec<(&MapiProperty, &PropertyValue)> = Vec::with_capacity(self.values.len());
        for (property, value) in &self.values {
            if property.id() < 0 {
                continue;
            }
            if let Some(pointer) = value.pointer() {
                if !pointer.is_resolved() {
                    self.diagnostics.push(
                        Diagnostic::new(
                            DiagnosticSeverity::Warning,
                            DiagnosticCategory::Chunk,
                            format!("pointer property {property} was never resolved and is not emitted"),
                        )
                        .with_property(u32::from(wire_code(property.id()))),
                    );
                    continue;
                }
            }
            rows.push((property, value));
        }

        let mut buffer = vec![0u8; self.kind.preamble_len() + rows.len() * RECORD_SIZE];
        let mut chunks = Vec::new();

        // Leading and trailing reserved preamble bytes stay zero.
        let mut offset = 8;
        if self.kind.has_counts() {
            write_le_at(&mut buffer, &mut offset, self.counts.next_recipient_id)?;
            write_le_at(&mut buffer, &mut offset, self.counts.next_attachment_id)?;
            write_le_at(&mut buffer, &mut offset, self.counts.recipient_count)?;
            write_le_at(&mut buffer, &mut offset, self.counts.attachment_count)?;
        }
        offset = self.kind.preamble_len();

        for (property, value) in rows {
            let actual = value.actual_type();
            let canonical = canonical_type(actual);

            write_le_at(&mut buffer, &mut offset, wire_code(canonical.id()))?;
            write_le_at(&mut buffer, &mut offset, wire_code(property.id()))?;
            write_le_at(&mut buffer, &mut offset, value.flags().bits())?;

            match value.data() {
                PropertyData::Pointer(pointer) => {
                    let slot_end = offset + VALUE_SLOT_SIZE;
                    if let Some(chunk) = pointer.chunk() {
                        let logical = chunk.len() + terminator_allowance(actual);
                        let Ok(declared) = u32::try_from(logical) else {
                            return Err(malformed_error!(
                                "Payload of {} bytes does not fit the 32-bit size field",
                                logical
                            ));
                        };
                        write_le_at(&mut buffer, &mut offset, declared)?;

                        chunks.push(Chunk::new(
                            u32::from(wire_code(property.id())),
                            canonical,
                            chunk.data().to_vec(),
                        ));
                    }
                    // The second half of the slot is the reserved zero field.
                    offset = slot_end;
                }
                data => write_fixed_slot(&mut buffer, &mut offset, data)?,
            }
        }

        Ok((buffer, chunks))
    }

    /// Placement of this table inside the containing document.
    #[must_use]
    pub const fn kind(&self) -> TableKind {
        self.kind
    }

    /// Recipient and attachment counters from the stream preamble.
    #[must_use]
    pub const fn counts(&self) -> MessageCounts {
        self.counts
    }

    /// Mutable access to the preamble counters, for writers maintaining
    /// recipient and attachment storages.
    pub fn counts_mut(&mut self) -> &mut MessageCounts {
        &mut self.counts
    }

    /// Looks up the value stored for an identity.
    #[must_use]
    pub fn get(&self, property: &MapiProperty) -> Option<&PropertyValue> {
        self.values.get(property)
    }

    /// Looks up the value stored for a numeric property id, regardless of the
    /// identity's type.
    #[must_use]
    pub fn get_by_id(&self, id: i32) -> Option<&PropertyValue> {
        self.values
            .iter()
            .find(|(property, _)| property.id() == id)
            .map(|(_, value)| value)
    }

    /// Inserts or replaces a value, keyed by the identity it carries.
    ///
    /// Returns the previous value stored for the same identity, if any.
    pub fn set(&mut self, value: PropertyValue) -> Option<PropertyValue> {
        self.values.insert(value.property().clone(), value)
    }

    /// Number of properties in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if the table holds no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the stored identities and values in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&MapiProperty, &PropertyValue)> {
        self.values.iter()
    }

    /// Diagnostics collected while decoding, resolving and encoding this table.
    #[must_use]
    pub fn diagnostics(&self) -> &Arc<Diagnostics> {
        &self.diagnostics
    }
}

/// Narrow strings are always promoted to wide on write; every other type,
/// including the multi-valued string codes, keeps its tag.
fn canonical_type(actual: MapiType) -> MapiType {
    if actual == MapiType::STRING8 {
        MapiType::UNICODE
    } else {
        actual
    }
}

/// Narrow and wide strings substitute for each other in either direction.
fn string_substitution(usual: MapiType, declared: MapiType) -> bool {
    (usual == MapiType::STRING8 && declared == MapiType::UNICODE)
        || (usual == MapiType::UNICODE && declared == MapiType::STRING8)
}

/// Low 16 bits of an identity or type id, as stored in a record header.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn wire_code(id: i32) -> u16 {
    (id & 0xFFFF) as u16
}

/// Writes a fixed-width scalar into its 8-byte slot, leaving the unused tail
/// zero.
fn write_fixed_slot(buffer: &mut [u8], offset: &mut usize, data: &PropertyData) -> Result<()> {
    let slot_end = *offset + VALUE_SLOT_SIZE;

    match data {
        PropertyData::Null => {}
        PropertyData::Boolean(value) => write_le_at(buffer, offset, i16::from(*value))?,
        PropertyData::Int16(value) => write_le_at(buffer, offset, *value)?,
        PropertyData::Int32(value) => write_le_at(buffer, offset, *value)?,
        PropertyData::Int64(value) | PropertyData::Currency(value) => {
            write_le_at(buffer, offset, *value)?;
        }
        PropertyData::Float(value) => write_le_at(buffer, offset, *value)?,
        PropertyData::Double(value) => write_le_at(buffer, offset, *value)?,
        PropertyData::Time(ticks) => write_le_at(buffer, offset, *ticks)?,
        PropertyData::Fixed { bytes, .. } => {
            let width = bytes.len().min(VALUE_SLOT_SIZE);
            if *offset + width > buffer.len() {
                return Err(Error::OutOfBounds);
            }
            buffer[*offset..*offset + width].copy_from_slice(&bytes[..width]);
            *offset += width;
        }
        // A pointer carrying a fixed type id has no inline form; its slot
        // stays zero.
        PropertyData::Pointer(_) => {}
    }

    *offset = slot_end;
    Ok(())
}

//! Property values and their typed representations.
//!
//! This module provides the value side of the property model: [`PropertyValue`]
//! pairs a [`MapiProperty`] identity with access flags and a typed payload, and
//! [`PropertyData`] enumerates the payload representations the decoder produces.
//!
//! # Architecture
//!
//! Fixed-length payloads are decoded eagerly into native representations
//! ([`PropertyData::Int32`], [`PropertyData::Time`], ...). Variable-length
//! payloads decode to a [`PropertyData::Pointer`] carrying only the declared
//! size from the stream; the payload itself lives in a sibling entry that is
//! attached later through [`PointerValue::bind`], once the enclosing container
//! has enumerated its entries.
//!
//! Binding is set-once. A pointer that never gets bound simply yields absent
//! results from the typed accessors ([`PropertyValue::as_text`],
//! [`PropertyValue::resolved_data`], ...) rather than an error.
//!
//! # Usage Examples
//!
//! ```rust
//! use msgscope::mapi::{MapiProperty, PropertyData, PropertyFlags, PropertyValue};
//!
//! // A fixed-length value, ready to use
//! let size = PropertyValue::new(
//!     MapiProperty::MESSAGE_SIZE,
//!     PropertyFlags::READABLE,
//!     PropertyData::Int32(2048),
//! );
//! assert_eq!(size.as_i32(), Some(2048));
//!
//! // A string value for writing, with its sibling payload already attached
//! let subject = PropertyValue::unicode(
//!     MapiProperty::SUBJECT,
//!     PropertyFlags::READABLE | PropertyFlags::WRITEABLE,
//!     "Quarterly report",
//! );
//! assert_eq!(subject.as_text().as_deref(), Some("Quarterly report"));
//! ```

use std::sync::OnceLock;

use bitflags::bitflags;
use chrono::{DateTime, TimeZone, Utc};
use uguid::Guid;
use widestring::U16CString;

use crate::{
    io::read_le,
    mapi::{
        chunk::{Chunk, ChunkRc},
        property::MapiProperty,
        types::MapiType,
    },
    Error, Result,
};

/// Seconds between the timestamp epoch (1601-01-01) and the Unix epoch.
const EPOCH_OFFSET_SECS: i64 = 11_644_473_600;

/// Timestamp ticks per second (one tick is 100 nanoseconds).
const TICKS_PER_SEC: u64 = 10_000_000;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Access flags carried in the third dword of every record header.
    ///
    /// Unknown bits are preserved across decode and encode, so flags written by
    /// other producers survive a round trip untouched.
    pub struct PropertyFlags: u32 {
        /// The property must be understood by all consumers.
        const MANDATORY = 0x0001;
        /// The property value is readable.
        const READABLE = 0x0002;
        /// The property value is writeable.
        const WRITEABLE = 0x0004;
    }
}

/// An unresolved or resolved reference to a variable-length payload.
///
/// The property stream stores only a declared byte size for variable-length
/// values; the payload itself sits in a sibling entry. `PointerValue` keeps the
/// declared size from the slot and, once the sibling set is known, the bound
/// [`Chunk`] holding the actual bytes.
///
/// Binding is set-once: rebinding the same entry is a no-op, while binding a
/// conflicting entry fails with [`Error::ChunkAlreadyBound`] and leaves the
/// original in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerValue {
    /// Wire type the payload is stored under
    mapi_type: MapiType,
    /// Byte size declared in the slot, including any string terminator allowance
    declared_size: u32,
    /// The sibling entry payload, once resolution has run
    chunk: OnceLock<ChunkRc>,
}

impl PointerValue {
    /// Creates an unresolved pointer from the slot's declared size.
    ///
    /// # Arguments
    /// * `mapi_type` - Wire type the payload is stored under
    /// * `declared_size` - Byte size declared in the slot
    #[must_use]
    pub fn new(mapi_type: MapiType, declared_size: u32) -> Self {
        PointerValue {
            mapi_type,
            declared_size,
            chunk: OnceLock::new(),
        }
    }

    /// Creates a pointer already bound to a payload.
    ///
    /// Used when building values for writing. The declared size is computed
    /// from the payload length plus the terminator allowance of the chunk's
    /// type (one byte for narrow strings, two for wide strings).
    #[must_use]
    pub fn with_chunk(chunk: ChunkRc) -> Self {
        let logical = chunk.len() + terminator_allowance(chunk.mapi_type());
        let pointer = PointerValue {
            mapi_type: chunk.mapi_type(),
            declared_size: u32::try_from(logical).unwrap_or(u32::MAX),
            chunk: OnceLock::new(),
        };
        // A fresh OnceLock always accepts its first value
        let _ = pointer.chunk.set(chunk);
        pointer
    }

    /// Attaches the sibling entry payload to this pointer.
    ///
    /// Binding the same entry again is accepted and does nothing, which keeps
    /// repeated resolution passes idempotent.
    ///
    /// # Arguments
    /// * `chunk` - The sibling entry payload to attach
    ///
    /// # Errors
    /// Returns [`Error::ChunkAlreadyBound`] if a different payload is already
    /// attached; the original binding is left in place.
    pub fn bind(&self, chunk: ChunkRc) -> Result<()> {
        match self.chunk.set(chunk) {
            Ok(()) => Ok(()),
            Err(rejected) => {
                let Some(existing) = self.chunk.get() else {
                    return Err(Error::ChunkAlreadyBound(rejected.id()));
                };
                if **existing == *rejected {
                    Ok(())
                } else {
                    Err(Error::ChunkAlreadyBound(rejected.id()))
                }
            }
        }
    }

    /// Returns the bound payload, if resolution has run.
    #[must_use]
    pub fn chunk(&self) -> Option<&ChunkRc> {
        self.chunk.get()
    }

    /// Returns `true` if a payload is bound.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.chunk.get().is_some()
    }

    /// Returns the wire type the payload is stored under.
    #[must_use]
    pub const fn mapi_type(&self) -> MapiType {
        self.mapi_type
    }

    /// Returns the byte size declared in the slot.
    ///
    /// For string types this includes the terminator allowance, so it can
    /// exceed the actual payload length by one or two bytes.
    #[must_use]
    pub const fn declared_size(&self) -> u32 {
        self.declared_size
    }
}

/// Terminator bytes a string type adds to its declared slot size.
pub(crate) fn terminator_allowance(mapi_type: MapiType) -> usize {
    if mapi_type == MapiType::STRING8 {
        1
    } else if mapi_type == MapiType::UNICODE {
        2
    } else {
        0
    }
}

/// The typed payload of a property.
///
/// Fixed-length payloads are represented natively. Types the decoder has no
/// native representation for ([`MapiType::APP_TIME`], [`MapiType::ERROR`], and
/// custom fixed-width types) keep their raw bytes in [`PropertyData::Fixed`].
/// Variable-length payloads are represented by [`PropertyData::Pointer`].
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyData {
    /// An explicitly absent value.
    Null,
    /// A boolean, true when the stored 16-bit integer is greater than zero.
    Boolean(bool),
    /// A signed 16-bit integer.
    Int16(i16),
    /// A signed 32-bit integer.
    Int32(i32),
    /// A signed 64-bit integer.
    Int64(i64),
    /// A 32-bit IEEE floating point number.
    Float(f32),
    /// A 64-bit IEEE floating point number.
    Double(f64),
    /// A currency amount in ten-thousandths of the currency unit.
    Currency(i64),
    /// A timestamp in 100-nanosecond ticks since 1601-01-01 UTC.
    Time(u64),
    /// Raw bytes of a fixed-length type without a native representation.
    Fixed {
        /// Wire type the bytes were stored under
        mapi_type: MapiType,
        /// The raw value bytes, without slot padding
        bytes: Vec<u8>,
    },
    /// A reference to a variable-length payload in a sibling entry.
    Pointer(PointerValue),
}

impl PropertyData {
    /// Decodes a fixed-length payload into its typed representation.
    ///
    /// `data` must hold exactly the declared width of the type; the caller
    /// slices the inline value area before any slot padding. Types without a
    /// native representation keep their raw bytes.
    ///
    /// # Arguments
    /// * `mapi_type` - The declared wire type of the payload
    /// * `data` - The raw value bytes
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `data` is shorter than the
    /// native representation requires.
    pub fn from_fixed(mapi_type: MapiType, data: &[u8]) -> Result<Self> {
        match mapi_type.id() {
            0x0001 => Ok(PropertyData::Null),
            0x0002 => Ok(PropertyData::Int16(read_le::<i16>(data)?)),
            0x0003 => Ok(PropertyData::Int32(read_le::<i32>(data)?)),
            0x0004 => Ok(PropertyData::Float(read_le::<f32>(data)?)),
            0x0005 => Ok(PropertyData::Double(read_le::<f64>(data)?)),
            0x0006 => Ok(PropertyData::Currency(read_le::<i64>(data)?)),
            0x000B => Ok(PropertyData::Boolean(read_le::<i16>(data)? > 0)),
            0x0014 => Ok(PropertyData::Int64(read_le::<i64>(data)?)),
            0x0040 => Ok(PropertyData::Time(read_le::<u64>(data)?)),
            _ => Ok(PropertyData::Fixed {
                mapi_type,
                bytes: data.to_vec(),
            }),
        }
    }

    /// Returns the wire type this payload is stored under.
    #[must_use]
    pub fn mapi_type(&self) -> MapiType {
        match self {
            PropertyData::Null => MapiType::NULL,
            PropertyData::Boolean(_) => MapiType::BOOLEAN,
            PropertyData::Int16(_) => MapiType::INT16,
            PropertyData::Int32(_) => MapiType::INT32,
            PropertyData::Int64(_) => MapiType::INT64,
            PropertyData::Float(_) => MapiType::FLOAT,
            PropertyData::Double(_) => MapiType::DOUBLE,
            PropertyData::Currency(_) => MapiType::CURRENCY,
            PropertyData::Time(_) => MapiType::TIME,
            PropertyData::Fixed { mapi_type, .. } => *mapi_type,
            PropertyData::Pointer(pointer) => pointer.mapi_type(),
        }
    }
}

/// A property as it appears in a decoded table: identity, flags, and payload.
///
/// `PropertyValue` is the unit the [`crate::PropertyTable`] stores. The typed
/// accessors return [`Option`] rather than errors: a value of the wrong type,
/// an unresolved pointer, or a multi-valued payload all yield [`None`].
///
/// # Examples
///
/// ```rust
/// use msgscope::mapi::{MapiProperty, PropertyData, PropertyFlags, PropertyValue};
///
/// let flags = PropertyValue::new(
///     MapiProperty::MESSAGE_FLAGS,
///     PropertyFlags::READABLE,
///     PropertyData::Int32(0x0001),
/// );
///
/// assert_eq!(flags.as_i32(), Some(1));
/// assert_eq!(flags.as_i64(), Some(1));
/// assert_eq!(flags.as_text(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValue {
    /// Identity of the property this value belongs to
    property: MapiProperty,
    /// Access flags from the record header
    flags: PropertyFlags,
    /// The typed payload
    data: PropertyData,
}

impl PropertyValue {
    /// Creates a property value from its parts.
    ///
    /// # Arguments
    /// * `property` - Identity of the property
    /// * `flags` - Access flags for the record header
    /// * `data` - The typed payload
    #[must_use]
    pub fn new(property: MapiProperty, flags: PropertyFlags, data: PropertyData) -> Self {
        PropertyValue {
            property,
            flags,
            data,
        }
    }

    /// Creates a wide string value with its payload chunk already attached.
    ///
    /// The text is encoded as UTF-16LE without a terminator; the terminator
    /// allowance appears only in the declared slot size.
    ///
    /// # Arguments
    /// * `property` - Identity of the property
    /// * `flags` - Access flags for the record header
    /// * `text` - The string content
    #[must_use]
    pub fn unicode(property: MapiProperty, flags: PropertyFlags, text: &str) -> Self {
        let payload: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
        let chunk = ChunkRc::new(Chunk::new(wire_id(&property), MapiType::UNICODE, payload));
        PropertyValue {
            property,
            flags,
            data: PropertyData::Pointer(PointerValue::with_chunk(chunk)),
        }
    }

    /// Creates a narrow string value with its payload chunk already attached.
    ///
    /// Characters above U+00FF have no narrow representation and are replaced
    /// with `?`. Values built this way are still promoted to wide on encode;
    /// this constructor exists to reproduce narrow payloads byte-for-byte.
    ///
    /// # Arguments
    /// * `property` - Identity of the property
    /// * `flags` - Access flags for the record header
    /// * `text` - The string content
    #[must_use]
    pub fn string8(property: MapiProperty, flags: PropertyFlags, text: &str) -> Self {
        let payload: Vec<u8> = text
            .chars()
            .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
            .collect();
        let chunk = ChunkRc::new(Chunk::new(wire_id(&property), MapiType::STRING8, payload));
        PropertyValue {
            property,
            flags,
            data: PropertyData::Pointer(PointerValue::with_chunk(chunk)),
        }
    }

    /// Creates a binary value with its payload chunk already attached.
    ///
    /// # Arguments
    /// * `property` - Identity of the property
    /// * `flags` - Access flags for the record header
    /// * `data` - The payload bytes
    #[must_use]
    pub fn binary(property: MapiProperty, flags: PropertyFlags, data: Vec<u8>) -> Self {
        let chunk = ChunkRc::new(Chunk::new(wire_id(&property), MapiType::BINARY, data));
        PropertyValue {
            property,
            flags,
            data: PropertyData::Pointer(PointerValue::with_chunk(chunk)),
        }
    }

    /// Returns the identity of the property this value belongs to.
    #[must_use]
    pub const fn property(&self) -> &MapiProperty {
        &self.property
    }

    /// Returns the access flags from the record header.
    #[must_use]
    pub const fn flags(&self) -> PropertyFlags {
        self.flags
    }

    /// Returns the typed payload.
    #[must_use]
    pub const fn data(&self) -> &PropertyData {
        &self.data
    }

    /// Returns the wire type this value is stored under.
    ///
    /// For decoded values this is the declared type from the record, which can
    /// differ from the identity's usual type when a substitution was accepted.
    #[must_use]
    pub fn actual_type(&self) -> MapiType {
        self.data.mapi_type()
    }

    /// Returns the pointer for variable-length values, [`None`] otherwise.
    #[must_use]
    pub const fn pointer(&self) -> Option<&PointerValue> {
        match &self.data {
            PropertyData::Pointer(pointer) => Some(pointer),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a boolean value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.data {
            PropertyData::Boolean(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the 16-bit integer payload, if this is an `Int16` value.
    #[must_use]
    pub fn as_i16(&self) -> Option<i16> {
        match self.data {
            PropertyData::Int16(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the payload as a 32-bit integer, widening `Int16`.
    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        match self.data {
            PropertyData::Int16(value) => Some(i32::from(value)),
            PropertyData::Int32(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the payload as a 64-bit integer, widening the smaller integer types.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self.data {
            PropertyData::Int16(value) => Some(i64::from(value)),
            PropertyData::Int32(value) => Some(i64::from(value)),
            PropertyData::Int64(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the 32-bit float payload, if this is a `Float` value.
    #[must_use]
    pub fn as_f32(&self) -> Option<f32> {
        match self.data {
            PropertyData::Float(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the payload as a 64-bit float, widening `Float`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self.data {
            PropertyData::Float(value) => Some(f64::from(value)),
            PropertyData::Double(value) => Some(value),
            _ => None,
        }
    }

    /// Returns a currency payload in ten-thousandths of the currency unit.
    #[must_use]
    pub fn as_currency_units(&self) -> Option<i64> {
        match self.data {
            PropertyData::Currency(units) => Some(units),
            _ => None,
        }
    }

    /// Returns a currency payload as an approximate decimal amount.
    ///
    /// The exact value is available through
    /// [`PropertyValue::as_currency_units`]; the division here is subject to
    /// floating point rounding.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_currency(&self) -> Option<f64> {
        self.as_currency_units().map(|units| units as f64 / 10_000.0)
    }

    /// Returns a timestamp payload as a UTC datetime.
    ///
    /// Returns [`None`] for non-timestamp values and for tick counts outside
    /// the representable datetime range.
    #[must_use]
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self.data {
            PropertyData::Time(ticks) => {
                let secs = i64::try_from(ticks / TICKS_PER_SEC)
                    .ok()?
                    .checked_sub(EPOCH_OFFSET_SECS)?;
                let nanos = u32::try_from((ticks % TICKS_PER_SEC) * 100).ok()?;
                Utc.timestamp_opt(secs, nanos).single()
            }
            _ => None,
        }
    }

    /// Returns the raw timestamp ticks, if this is a `Time` value.
    #[must_use]
    pub fn as_filetime(&self) -> Option<u64> {
        match self.data {
            PropertyData::Time(ticks) => Some(ticks),
            _ => None,
        }
    }

    /// Returns a resolved GUID payload.
    ///
    /// Requires a resolved [`MapiType::CLS_ID`] pointer with exactly 16 payload
    /// bytes; anything else yields [`None`].
    #[must_use]
    pub fn as_guid(&self) -> Option<Guid> {
        let pointer = self.pointer()?;
        if pointer.mapi_type() != MapiType::CLS_ID {
            return None;
        }

        let bytes: [u8; 16] = self.resolved_data()?.try_into().ok()?;
        Some(Guid::from_bytes(bytes))
    }

    /// Returns a resolved string payload as text.
    ///
    /// Wide payloads decode as UTF-16LE and narrow payloads as an 8-bit
    /// codepage mapped directly to the first 256 code points. Both stop at the
    /// first NUL, matching how other producers over-allocate terminated
    /// payloads. Non-string and unresolved values yield [`None`].
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        let pointer = self.pointer()?;
        let mapi_type = pointer.mapi_type();
        let data = self.resolved_data()?;

        if mapi_type == MapiType::UNICODE {
            let units: Vec<u16> = data
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            Some(U16CString::from_vec_truncate(units).to_string_lossy())
        } else if mapi_type == MapiType::STRING8 {
            Some(
                data.iter()
                    .take_while(|&&byte| byte != 0)
                    .map(|&byte| char::from(byte))
                    .collect(),
            )
        } else {
            None
        }
    }

    /// Returns the resolved payload bytes of a variable-length value.
    ///
    /// Yields [`None`] for fixed-length values, unresolved pointers, and
    /// multi-valued payloads, which this layer does not split into their
    /// elements.
    #[must_use]
    pub fn resolved_data(&self) -> Option<&[u8]> {
        let pointer = self.pointer()?;
        if pointer.mapi_type().is_multi_valued() {
            return None;
        }
        pointer.chunk().map(|chunk| chunk.data())
    }
}

// Entry names carry four hex digits, so only the low 16 bits of an identifier
// reach disk.
#[allow(clippy::cast_sign_loss)]
fn wire_id(property: &MapiProperty) -> u32 {
    (property.id() & 0xFFFF) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_preserve_unknown_bits() {
        let flags = PropertyFlags::from_bits_retain(0x8007);
        assert!(flags.contains(PropertyFlags::MANDATORY));
        assert!(flags.contains(PropertyFlags::READABLE));
        assert!(flags.contains(PropertyFlags::WRITEABLE));
        assert_eq!(flags.bits(), 0x8007);
    }

    #[test]
    fn fixed_dispatch() {
        let data = PropertyData::from_fixed(MapiType::INT16, &[0x2A, 0x00]).unwrap();
        assert_eq!(data, PropertyData::Int16(42));

        let data = PropertyData::from_fixed(MapiType::INT32, &[0xFF, 0xFF, 0xFF, 0xFF]).unwrap();
        assert_eq!(data, PropertyData::Int32(-1));

        let data = PropertyData::from_fixed(
            MapiType::INT64,
            &[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80],
        )
        .unwrap();
        assert_eq!(data, PropertyData::Int64(i64::MIN + 1));

        let data = PropertyData::from_fixed(MapiType::NULL, &[]).unwrap();
        assert_eq!(data, PropertyData::Null);

        let data = PropertyData::from_fixed(
            MapiType::CURRENCY,
            &[0x40, 0xE2, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00],
        )
        .unwrap();
        assert_eq!(data, PropertyData::Currency(123_456));
    }

    #[test]
    fn fixed_dispatch_without_native_representation() {
        let bytes = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F];
        let data = PropertyData::from_fixed(MapiType::APP_TIME, &bytes).unwrap();
        assert_eq!(
            data,
            PropertyData::Fixed {
                mapi_type: MapiType::APP_TIME,
                bytes: bytes.to_vec(),
            }
        );
        assert_eq!(data.mapi_type(), MapiType::APP_TIME);
    }

    #[test]
    fn fixed_dispatch_underrun() {
        assert!(PropertyData::from_fixed(MapiType::INT32, &[0x01, 0x02]).is_err());
    }

    #[test]
    fn boolean_is_strictly_positive() {
        let decode = |bytes: &[u8]| PropertyData::from_fixed(MapiType::BOOLEAN, bytes).unwrap();

        assert_eq!(decode(&[0x01, 0x00]), PropertyData::Boolean(true));
        assert_eq!(decode(&[0x00, 0x00]), PropertyData::Boolean(false));
        // Negative stored values are not true
        assert_eq!(decode(&[0xFF, 0xFF]), PropertyData::Boolean(false));
    }

    #[test]
    fn integer_widening() {
        let value = PropertyValue::new(
            MapiProperty::MESSAGE_SIZE,
            PropertyFlags::READABLE,
            PropertyData::Int16(-3),
        );
        assert_eq!(value.as_i16(), Some(-3));
        assert_eq!(value.as_i32(), Some(-3));
        assert_eq!(value.as_i64(), Some(-3));
        assert_eq!(value.as_f64(), None);
    }

    #[test]
    fn currency_conversion() {
        let value = PropertyValue::new(
            MapiProperty::create_custom(0x8002, MapiType::CURRENCY, "Amount"),
            PropertyFlags::READABLE,
            PropertyData::Currency(123_456),
        );
        assert_eq!(value.as_currency_units(), Some(123_456));
        assert!((value.as_currency().unwrap() - 12.3456).abs() < 1e-9);
    }

    #[test]
    fn filetime_conversion() {
        // 1970-01-01T00:00:00Z in 100ns ticks since 1601
        let unix_epoch = PropertyValue::new(
            MapiProperty::CLIENT_SUBMIT_TIME,
            PropertyFlags::READABLE,
            PropertyData::Time(116_444_736_000_000_000),
        );
        assert_eq!(
            unix_epoch.as_datetime().unwrap(),
            Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap()
        );

        // 2020-01-01T00:00:00Z
        let recent = PropertyValue::new(
            MapiProperty::CLIENT_SUBMIT_TIME,
            PropertyFlags::READABLE,
            PropertyData::Time(132_223_104_000_000_000),
        );
        assert_eq!(
            recent.as_datetime().unwrap(),
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(recent.as_filetime(), Some(132_223_104_000_000_000));
    }

    #[test]
    fn pointer_bind_is_set_once() {
        let pointer = PointerValue::new(MapiType::BINARY, 4);
        assert!(!pointer.is_resolved());

        let chunk = ChunkRc::new(Chunk::new(0x1234, MapiType::BINARY, vec![1, 2, 3, 4]));
        pointer.bind(chunk.clone()).unwrap();
        assert!(pointer.is_resolved());

        // Same entry again: no-op
        pointer.bind(chunk).unwrap();

        // Different payload: rejected, original kept
        let other = ChunkRc::new(Chunk::new(0x1234, MapiType::BINARY, vec![9, 9]));
        let err = pointer.bind(other).unwrap_err();
        assert!(matches!(err, Error::ChunkAlreadyBound(0x1234)));
        assert_eq!(pointer.chunk().unwrap().data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn unicode_constructor() {
        let value = PropertyValue::unicode(
            MapiProperty::SUBJECT,
            PropertyFlags::READABLE,
            "hi",
        );

        let pointer = value.pointer().unwrap();
        assert_eq!(pointer.mapi_type(), MapiType::UNICODE);
        assert_eq!(pointer.declared_size(), 6); // 4 payload bytes + wide terminator
        assert_eq!(value.resolved_data(), Some(&[0x68, 0x00, 0x69, 0x00][..]));
        assert_eq!(value.as_text().as_deref(), Some("hi"));
    }

    #[test]
    fn string8_constructor() {
        let value = PropertyValue::string8(
            MapiProperty::SUBJECT,
            PropertyFlags::READABLE,
            "héllo",
        );

        let pointer = value.pointer().unwrap();
        assert_eq!(pointer.mapi_type(), MapiType::STRING8);
        assert_eq!(pointer.declared_size(), 6); // 5 payload bytes + narrow terminator
        assert_eq!(
            value.resolved_data(),
            Some(&[0x68, 0xE9, 0x6C, 0x6C, 0x6F][..])
        );
        assert_eq!(value.as_text().as_deref(), Some("héllo"));

        // Characters without a narrow representation degrade to '?'
        let value = PropertyValue::string8(
            MapiProperty::SUBJECT,
            PropertyFlags::READABLE,
            "π",
        );
        assert_eq!(value.resolved_data(), Some(&[b'?'][..]));
    }

    #[test]
    fn binary_constructor() {
        let value = PropertyValue::binary(
            MapiProperty::ENTRY_ID,
            PropertyFlags::READABLE,
            vec![0xDE, 0xAD, 0xBE, 0xEF],
        );

        assert_eq!(value.pointer().unwrap().declared_size(), 4);
        assert_eq!(value.resolved_data(), Some(&[0xDE, 0xAD, 0xBE, 0xEF][..]));
        assert_eq!(value.as_text(), None);
    }

    #[test]
    fn text_truncates_at_nul() {
        let chunk = ChunkRc::new(Chunk::new(
            0x0037,
            MapiType::UNICODE,
            vec![0x68, 0x00, 0x69, 0x00, 0x00, 0x00, 0x21, 0x00],
        ));
        let value = PropertyValue::new(
            MapiProperty::SUBJECT,
            PropertyFlags::READABLE,
            PropertyData::Pointer(PointerValue::with_chunk(chunk)),
        );
        assert_eq!(value.as_text().as_deref(), Some("hi"));
    }

    #[test]
    fn unresolved_pointer_yields_absent() {
        let value = PropertyValue::new(
            MapiProperty::BODY,
            PropertyFlags::READABLE,
            PropertyData::Pointer(PointerValue::new(MapiType::UNICODE, 12)),
        );

        assert_eq!(value.resolved_data(), None);
        assert_eq!(value.as_text(), None);
        assert_eq!(value.as_guid(), None);
    }

    #[test]
    fn multi_valued_yields_absent() {
        let mv_unicode = MapiType::by_id(0x101F).unwrap();
        let chunk = ChunkRc::new(Chunk::new(0x8010, mv_unicode, vec![0x41, 0x00]));
        let value = PropertyValue::new(
            MapiProperty::create_custom(0x8010, mv_unicode, "Keywords"),
            PropertyFlags::READABLE,
            PropertyData::Pointer(PointerValue::with_chunk(chunk)),
        );

        assert!(value.pointer().unwrap().is_resolved());
        assert_eq!(value.resolved_data(), None);
        assert_eq!(value.as_text(), None);
    }

    #[test]
    fn guid_accessor() {
        let bytes = vec![
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD,
            0xEE, 0xFF,
        ];
        let chunk = ChunkRc::new(Chunk::new(0x8011, MapiType::CLS_ID, bytes));
        let value = PropertyValue::new(
            MapiProperty::create_custom(0x8011, MapiType::CLS_ID, "StoreGuid"),
            PropertyFlags::READABLE,
            PropertyData::Pointer(PointerValue::with_chunk(chunk)),
        );

        let guid = value.as_guid().unwrap();
        assert_eq!(guid, uguid::guid!("33221100-5544-7766-8899-aabbccddeeff"));

        // Wrong payload width yields absent
        let short = ChunkRc::new(Chunk::new(0x8011, MapiType::CLS_ID, vec![1, 2, 3]));
        let value = PropertyValue::new(
            MapiProperty::create_custom(0x8011, MapiType::CLS_ID, "StoreGuid"),
            PropertyFlags::READABLE,
            PropertyData::Pointer(PointerValue::with_chunk(short)),
        );
        assert_eq!(value.as_guid(), None);
    }

    #[test]
    fn terminator_allowances() {
        assert_eq!(terminator_allowance(MapiType::STRING8), 1);
        assert_eq!(terminator_allowance(MapiType::UNICODE), 2);
        assert_eq!(terminator_allowance(MapiType::BINARY), 0);
        assert_eq!(terminator_allowance(MapiType::DIRECTORY), 0);
    }
}

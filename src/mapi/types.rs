//! Wire type catalog for MAPI property values.
//!
//! This module defines the value types that can appear in a property stream. Each
//! record in the stream declares its value type with a 16-bit code, and that code
//! determines whether the value is stored inline (fixed-length types) or in a
//! separate sibling entry (variable-length types).
//!
//! # Architecture
//!
//! The catalog is a closed set of [`MapiType`] constants matching the type codes
//! defined by the MAPI property model:
//!
//! - **Fixed-length types** - Stored inline in the 8-byte value slot of a record,
//!   zero-padded to the slot width (e.g. [`MapiType::INT32`], [`MapiType::TIME`])
//! - **Variable-length types** - Stored in a sibling entry, with the slot holding
//!   only a declared size (e.g. [`MapiType::UNICODE`], [`MapiType::BINARY`])
//! - **Multi-valued types** - Any catalog code with the [`MULTI_VALUED_FLAG`] bit
//!   set; always stored in sibling entries
//!
//! Codes outside the catalog can still be represented through
//! [`MapiType::create_custom`], which makes it possible to construct values with
//! vendor-specific types without the catalog knowing about them.
//!
//! # Usage Examples
//!
//! ```rust
//! use msgscope::mapi::{MapiType, TypeLength};
//!
//! // Catalog lookup by wire code
//! let unicode = MapiType::by_id(0x001F).unwrap();
//! assert_eq!(unicode, MapiType::UNICODE);
//! assert_eq!(unicode.length(), TypeLength::Variable);
//!
//! // Fixed-length types know their inline width
//! assert_eq!(MapiType::INT32.fixed_width(), Some(4));
//! assert_eq!(MapiType::BINARY.fixed_width(), None);
//!
//! // Multi-valued variants of catalog types resolve too
//! let mv_unicode = MapiType::by_id(0x101F).unwrap();
//! assert!(mv_unicode.is_multi_valued());
//! ```

use std::fmt;

/// Bit set in a wire type code to mark a multi-valued property.
///
/// A type code with this bit set holds several values of the base type, each
/// stored in its own sibling entry. The base type is the code with this bit
/// cleared.
pub const MULTI_VALUED_FLAG: u16 = 0x1000;

/// Storage class of a MAPI value type.
///
/// Decides whether a value lives inline in its slot or in a sibling entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeLength {
    /// The value occupies exactly this many bytes inline in the slot,
    /// zero-padded to the 8-byte value area.
    Fixed(usize),

    /// The value lives in a sibling entry; the slot holds only the declared
    /// byte size of that entry.
    Variable,
}

/// A MAPI value type, identified by its 16-bit wire code.
///
/// `MapiType` pairs a wire code with its storage class. The catalog constants
/// ([`MapiType::INT32`], [`MapiType::UNICODE`], ...) cover the codes defined by
/// the MAPI property model; [`MapiType::create_custom`] mints instances for codes
/// outside the catalog.
///
/// The identifier is kept as [`i32`] rather than [`u16`] so that the
/// [`MapiType::UNKNOWN`] sentinel can sit outside the wire code space at `-1`.
///
/// # Examples
///
/// ```rust
/// use msgscope::mapi::MapiType;
///
/// assert_eq!(MapiType::BOOLEAN.id(), 0x000B);
/// assert_eq!(MapiType::BOOLEAN.fixed_width(), Some(2));
/// assert!(MapiType::BINARY.is_variable());
/// assert_eq!(format!("{}", MapiType::UNICODE), "Unicode (0x001F)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapiType {
    /// Wire code of this type, or `-1` for the unknown sentinel
    id: i32,
    /// Storage class of values with this type
    length: TypeLength,
}

impl MapiType {
    /// Placeholder for a value whose type is not declared (`0x0000`).
    pub const UNSPECIFIED: MapiType = MapiType {
        id: 0x0000,
        length: TypeLength::Variable,
    };
    /// An explicitly absent value (`0x0001`), carrying no data.
    pub const NULL: MapiType = MapiType {
        id: 0x0001,
        length: TypeLength::Fixed(0),
    };
    /// Signed 16-bit integer (`0x0002`).
    pub const INT16: MapiType = MapiType {
        id: 0x0002,
        length: TypeLength::Fixed(2),
    };
    /// Signed 32-bit integer (`0x0003`).
    pub const INT32: MapiType = MapiType {
        id: 0x0003,
        length: TypeLength::Fixed(4),
    };
    /// 32-bit IEEE floating point (`0x0004`).
    pub const FLOAT: MapiType = MapiType {
        id: 0x0004,
        length: TypeLength::Fixed(4),
    };
    /// 64-bit IEEE floating point (`0x0005`).
    pub const DOUBLE: MapiType = MapiType {
        id: 0x0005,
        length: TypeLength::Fixed(8),
    };
    /// Currency amount (`0x0006`), a signed 64-bit count of ten-thousandths
    /// of the currency unit.
    pub const CURRENCY: MapiType = MapiType {
        id: 0x0006,
        length: TypeLength::Fixed(8),
    };
    /// Application time (`0x0007`), a 64-bit floating point day count.
    pub const APP_TIME: MapiType = MapiType {
        id: 0x0007,
        length: TypeLength::Fixed(8),
    };
    /// SCODE error value (`0x000A`).
    pub const ERROR: MapiType = MapiType {
        id: 0x000A,
        length: TypeLength::Fixed(4),
    };
    /// Boolean (`0x000B`), stored as a 16-bit integer where any value
    /// greater than zero is true.
    pub const BOOLEAN: MapiType = MapiType {
        id: 0x000B,
        length: TypeLength::Fixed(2),
    };
    /// Embedded directory object (`0x000D`), such as a nested message.
    pub const DIRECTORY: MapiType = MapiType {
        id: 0x000D,
        length: TypeLength::Variable,
    };
    /// Signed 64-bit integer (`0x0014`).
    pub const INT64: MapiType = MapiType {
        id: 0x0014,
        length: TypeLength::Fixed(8),
    };
    /// Narrow string in an 8-bit codepage (`0x001E`), NUL-terminated on the wire.
    pub const STRING8: MapiType = MapiType {
        id: 0x001E,
        length: TypeLength::Variable,
    };
    /// UTF-16LE string (`0x001F`), NUL-terminated on the wire.
    pub const UNICODE: MapiType = MapiType {
        id: 0x001F,
        length: TypeLength::Variable,
    };
    /// Timestamp (`0x0040`), a 64-bit count of 100-nanosecond intervals
    /// since January 1, 1601 UTC.
    pub const TIME: MapiType = MapiType {
        id: 0x0040,
        length: TypeLength::Fixed(8),
    };
    /// 16-byte GUID (`0x0048`), stored in a sibling entry.
    pub const CLS_ID: MapiType = MapiType {
        id: 0x0048,
        length: TypeLength::Variable,
    };
    /// Raw byte sequence (`0x0102`).
    pub const BINARY: MapiType = MapiType {
        id: 0x0102,
        length: TypeLength::Variable,
    };
    /// Sentinel for an unrecognized type, outside the wire code space.
    pub const UNKNOWN: MapiType = MapiType {
        id: -1,
        length: TypeLength::Variable,
    };

    /// Looks up a catalog type by its wire code.
    ///
    /// Codes with the [`MULTI_VALUED_FLAG`] bit set resolve when their base code
    /// is in the catalog; the returned type keeps the full multi-valued code and
    /// is always variable-length. Returns [`None`] for codes the catalog does not
    /// define.
    ///
    /// # Arguments
    /// * `id` - The 16-bit wire code to look up
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::mapi::MapiType;
    ///
    /// assert_eq!(MapiType::by_id(0x0102), Some(MapiType::BINARY));
    /// assert_eq!(MapiType::by_id(0x00F0), None);
    ///
    /// let mv_binary = MapiType::by_id(0x1102).unwrap();
    /// assert!(mv_binary.is_multi_valued());
    /// assert_eq!(mv_binary.id(), 0x1102);
    /// ```
    #[must_use]
    pub fn by_id(id: u16) -> Option<MapiType> {
        match id {
            0x0000 => Some(Self::UNSPECIFIED),
            0x0001 => Some(Self::NULL),
            0x0002 => Some(Self::INT16),
            0x0003 => Some(Self::INT32),
            0x0004 => Some(Self::FLOAT),
            0x0005 => Some(Self::DOUBLE),
            0x0006 => Some(Self::CURRENCY),
            0x0007 => Some(Self::APP_TIME),
            0x000A => Some(Self::ERROR),
            0x000B => Some(Self::BOOLEAN),
            0x000D => Some(Self::DIRECTORY),
            0x0014 => Some(Self::INT64),
            0x001E => Some(Self::STRING8),
            0x001F => Some(Self::UNICODE),
            0x0040 => Some(Self::TIME),
            0x0048 => Some(Self::CLS_ID),
            0x0102 => Some(Self::BINARY),
            code if code & MULTI_VALUED_FLAG != 0 => {
                Self::by_id(code & !MULTI_VALUED_FLAG).map(|_| MapiType {
                    id: i32::from(code),
                    length: TypeLength::Variable,
                })
            }
            _ => None,
        }
    }

    /// Mints a type for a wire code outside the catalog.
    ///
    /// Custom types are treated as variable-length, matching how unrecognized
    /// payloads are stored. They compare equal to other custom types with the
    /// same code.
    ///
    /// # Arguments
    /// * `id` - The 16-bit wire code of the custom type
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::mapi::MapiType;
    ///
    /// let custom = MapiType::create_custom(0x00F0);
    /// assert_eq!(custom.id(), 0x00F0);
    /// assert!(custom.is_variable());
    /// assert_eq!(custom, MapiType::create_custom(0x00F0));
    /// ```
    #[must_use]
    pub fn create_custom(id: u16) -> MapiType {
        MapiType {
            id: i32::from(id),
            length: TypeLength::Variable,
        }
    }

    /// Returns the identifier of this type.
    ///
    /// Catalog and custom types return their wire code; [`MapiType::UNKNOWN`]
    /// returns `-1`.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// Returns the storage class of this type.
    #[must_use]
    pub const fn length(&self) -> TypeLength {
        self.length
    }

    /// Returns the inline byte width for fixed-length types, [`None`] otherwise.
    #[must_use]
    pub const fn fixed_width(&self) -> Option<usize> {
        match self.length {
            TypeLength::Fixed(width) => Some(width),
            TypeLength::Variable => None,
        }
    }

    /// Returns `true` if values of this type are stored inline in their slot.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        matches!(self.length, TypeLength::Fixed(_))
    }

    /// Returns `true` if values of this type are stored in a sibling entry.
    #[must_use]
    pub const fn is_variable(&self) -> bool {
        matches!(self.length, TypeLength::Variable)
    }

    /// Returns `true` if this type carries the [`MULTI_VALUED_FLAG`] bit.
    #[must_use]
    pub fn is_multi_valued(&self) -> bool {
        self.id >= 0 && (self.id & i32::from(MULTI_VALUED_FLAG)) != 0
    }

    /// Returns the catalog name of this type.
    ///
    /// Multi-valued and custom codes report generic names since the catalog
    /// does not track them individually.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self.id {
            0x0000 => "Unspecified",
            0x0001 => "Null",
            0x0002 => "Int16",
            0x0003 => "Int32",
            0x0004 => "Float",
            0x0005 => "Double",
            0x0006 => "Currency",
            0x0007 => "AppTime",
            0x000A => "Error",
            0x000B => "Boolean",
            0x000D => "Directory",
            0x0014 => "Int64",
            0x001E => "String8",
            0x001F => "Unicode",
            0x0040 => "Time",
            0x0048 => "ClsId",
            0x0102 => "Binary",
            -1 => "Unknown",
            _ if self.is_multi_valued() => "MultiValued",
            _ => "Custom",
        }
    }

    /// Formats the wire code as the four uppercase hex digits used in sibling
    /// entry names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::mapi::MapiType;
    ///
    /// assert_eq!(MapiType::UNICODE.file_suffix(), "001F");
    /// assert_eq!(MapiType::BINARY.file_suffix(), "0102");
    /// ```
    #[must_use]
    pub fn file_suffix(&self) -> String {
        format!("{:04X}", self.id & 0xFFFF)
    }
}

impl fmt::Display for MapiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:04X})", self.name(), self.id & 0xFFFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_widths() {
        assert_eq!(MapiType::NULL.fixed_width(), Some(0));
        assert_eq!(MapiType::INT16.fixed_width(), Some(2));
        assert_eq!(MapiType::INT32.fixed_width(), Some(4));
        assert_eq!(MapiType::FLOAT.fixed_width(), Some(4));
        assert_eq!(MapiType::DOUBLE.fixed_width(), Some(8));
        assert_eq!(MapiType::CURRENCY.fixed_width(), Some(8));
        assert_eq!(MapiType::APP_TIME.fixed_width(), Some(8));
        assert_eq!(MapiType::ERROR.fixed_width(), Some(4));
        assert_eq!(MapiType::BOOLEAN.fixed_width(), Some(2));
        assert_eq!(MapiType::INT64.fixed_width(), Some(8));
        assert_eq!(MapiType::TIME.fixed_width(), Some(8));

        assert!(MapiType::UNSPECIFIED.is_variable());
        assert!(MapiType::DIRECTORY.is_variable());
        assert!(MapiType::STRING8.is_variable());
        assert!(MapiType::UNICODE.is_variable());
        assert!(MapiType::CLS_ID.is_variable());
        assert!(MapiType::BINARY.is_variable());
        assert!(MapiType::UNKNOWN.is_variable());
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(MapiType::by_id(0x0003), Some(MapiType::INT32));
        assert_eq!(MapiType::by_id(0x001F), Some(MapiType::UNICODE));
        assert_eq!(MapiType::by_id(0x0102), Some(MapiType::BINARY));
        assert_eq!(MapiType::by_id(0x00F0), None);
        assert_eq!(MapiType::by_id(0xFFFF), None);
    }

    #[test]
    fn lookup_multi_valued() {
        let mv_unicode = MapiType::by_id(0x101F).unwrap();
        assert_eq!(mv_unicode.id(), 0x101F);
        assert!(mv_unicode.is_multi_valued());
        assert!(mv_unicode.is_variable());

        // Fixed base types become variable when multi-valued
        let mv_int32 = MapiType::by_id(0x1003).unwrap();
        assert!(mv_int32.is_variable());

        // Multi-valued flag on an unknown base stays unknown
        assert_eq!(MapiType::by_id(0x10F0), None);
    }

    #[test]
    fn custom_types() {
        let custom = MapiType::create_custom(0x00F0);
        assert_eq!(custom.id(), 0x00F0);
        assert!(custom.is_variable());
        assert!(!custom.is_multi_valued());
        assert_eq!(custom.name(), "Custom");
        assert_eq!(custom, MapiType::create_custom(0x00F0));
        assert_ne!(custom, MapiType::create_custom(0x00F1));
    }

    #[test]
    fn unknown_sentinel() {
        assert_eq!(MapiType::UNKNOWN.id(), -1);
        assert!(!MapiType::UNKNOWN.is_multi_valued());
        assert_eq!(MapiType::UNKNOWN.name(), "Unknown");
    }

    #[test]
    fn file_suffix_formatting() {
        assert_eq!(MapiType::INT32.file_suffix(), "0003");
        assert_eq!(MapiType::UNICODE.file_suffix(), "001F");
        assert_eq!(MapiType::BINARY.file_suffix(), "0102");
        assert_eq!(MapiType::by_id(0x101F).unwrap().file_suffix(), "101F");
    }

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", MapiType::UNICODE), "Unicode (0x001F)");
        assert_eq!(format!("{}", MapiType::BINARY), "Binary (0x0102)");
        assert_eq!(format!("{}", MapiType::UNKNOWN), "Unknown (0xFFFF)");
    }
}

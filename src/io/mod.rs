//! Low-level byte order and safe reading/writing utilities for property-stream parsing.
//!
//! This module provides endian-aware binary data reading and writing functionality for
//! decoding MAPI property streams and their sibling entries. It implements safe,
//! bounds-checked operations for reading and writing primitive types from/to byte buffers,
//! preventing overruns while walking untrusted documents.
//!
//! # Architecture
//!
//! The module is built around the [`crate::io::MapiIO`] trait which provides a unified
//! interface for converting primitive types to and from their wire representation. All
//! multi-byte quantities in a property stream are little-endian, so only the
//! little-endian half of the conversion surface exists here:
//!
//! - Generic trait-based reading and writing for all primitive types the wire format carries
//! - Automatic bounds checking to prevent buffer overruns
//! - Consistent error handling through the [`crate::Result`] type
//!
//! # Key Components
//!
//! - [`crate::io::MapiIO`] - Trait defining the byte-array conversion for each primitive type
//! - [`crate::io::read_le`] - Read a value from the start of a buffer
//! - [`crate::io::read_le_at`] - Read a value at an offset, advancing the offset
//! - [`crate::io::write_le`] - Write a value to the start of a buffer
//! - [`crate::io::write_le_at`] - Write a value at an offset, advancing the offset
//! - [`crate::io::Parser`] - Stateful bounds-checked cursor built on top of these helpers
//!
//! # Usage Examples
//!
//! ```rust,ignore
//! use msgscope::io::{read_le_at, write_le_at};
//!
//! let mut data = [0u8; 8];
//! let mut offset = 0;
//!
//! write_le_at(&mut data, &mut offset, 0x001F_u16)?; // type code
//! write_le_at(&mut data, &mut offset, 0x0037_u16)?; // property id
//! write_le_at(&mut data, &mut offset, 0x0006_u32)?; // flags
//! assert_eq!(offset, 8);
//!
//! offset = 0;
//! let code: u16 = read_le_at(&data, &mut offset)?;
//! assert_eq!(code, 0x001F);
//! # Ok::<(), msgscope::Error>(())
//! ```
//!
//! # Error Handling
//!
//! All reading and writing functions return [`crate::Result<T>`] and will return
//! [`crate::Error::OutOfBounds`] if there are insufficient bytes in the buffer to complete
//! the operation.
//!
//! # Thread Safety
//!
//! All functions in this module are pure operations over caller-owned buffers and are safe
//! to call concurrently from multiple threads.

pub(crate) mod parser;

pub use parser::Parser;

use crate::{Error::OutOfBounds, Result};

/// Trait for implementing type-specific safe binary data conversion.
///
/// This trait provides a unified interface for reading and writing primitive types from
/// byte slices in a safe, little-endian-aware manner. It abstracts over the conversion
/// between byte arrays and typed values for every scalar the property-stream wire format
/// carries: record headers (`u16`/`u32`), fixed-width scalar payloads (`i16`, `i32`,
/// `i64`, `f32`, `f64`), currency amounts (`i64`) and FILETIME ticks (`u64`).
///
/// # Implementation Details
///
/// Each implementation defines a `Bytes` associated type that represents the fixed-size
/// byte array required for that particular type (e.g., `[u8; 4]` for `u32`). The trait
/// methods then convert these byte arrays to and from the target type.
///
/// # Thread Safety
///
/// All implementations of [`MapiIO`] are thread-safe as they only work with primitive
/// types and perform pure conversion operations without any shared state modification.
pub trait MapiIO: Sized {
    /// Associated type representing the byte array type for this numeric type.
    ///
    /// This type must be convertible from a byte slice and is used for reading
    /// binary data from the little-endian wire format.
    type Bytes: Sized + for<'a> TryFrom<&'a [u8]> + AsRef<[u8]>;

    /// Read T from a byte buffer in little-endian
    fn from_le_bytes(bytes: Self::Bytes) -> Self;

    /// Write T to a byte buffer in little-endian
    fn to_le_bytes(self) -> Self::Bytes;
}

// Implement MapiIO support for u8
impl MapiIO for u8 {
    type Bytes = [u8; 1];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u8::from_le_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        u8::to_le_bytes(self)
    }
}

// Implement MapiIO support for u16
impl MapiIO for u16 {
    type Bytes = [u8; 2];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u16::from_le_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        u16::to_le_bytes(self)
    }
}

// Implement MapiIO support for u32
impl MapiIO for u32 {
    type Bytes = [u8; 4];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u32::from_le_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        u32::to_le_bytes(self)
    }
}

// Implement MapiIO support for u64
impl MapiIO for u64 {
    type Bytes = [u8; 8];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u64::from_le_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        u64::to_le_bytes(self)
    }
}

// Implement MapiIO support for i16
impl MapiIO for i16 {
    type Bytes = [u8; 2];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        i16::from_le_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        i16::to_le_bytes(self)
    }
}

// Implement MapiIO support for i32
impl MapiIO for i32 {
    type Bytes = [u8; 4];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        i32::from_le_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        i32::to_le_bytes(self)
    }
}

// Implement MapiIO support for i64
impl MapiIO for i64 {
    type Bytes = [u8; 8];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        i64::from_le_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        i64::to_le_bytes(self)
    }
}

// Implement MapiIO support for f32
impl MapiIO for f32 {
    type Bytes = [u8; 4];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        f32::from_le_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        f32::to_le_bytes(self)
    }
}

// Implement MapiIO support for f64
impl MapiIO for f64 {
    type Bytes = [u8; 8];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        f64::from_le_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        f64::to_le_bytes(self)
    }
}

/// Safely reads a value of type `T` in little-endian byte order from a data buffer.
///
/// This function reads from the beginning of the buffer and supports all types that
/// implement the [`crate::io::MapiIO`] trait (u8, u16, u32, u64, i16, i32, i64, f32, f64).
///
/// # Arguments
///
/// * `data` - The byte buffer to read from
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
///
/// # Examples
///
/// ```rust,ignore
/// use msgscope::io::read_le;
///
/// let data = [0x01, 0x00, 0x00, 0x00]; // Little-endian u32: 1
/// let value: u32 = read_le(&data)?;
/// assert_eq!(value, 1);
/// # Ok::<(), msgscope::Error>(())
/// ```
pub fn read_le<T: MapiIO>(data: &[u8]) -> Result<T> {
    let mut offset = 0_usize;
    read_le_at(data, &mut offset)
}

/// Safely reads a value of type `T` in little-endian byte order at a specific offset.
///
/// This function reads from the specified offset and automatically advances the offset
/// by the number of bytes read. Supports all types that implement the
/// [`crate::io::MapiIO`] trait.
///
/// # Arguments
///
/// * `data` - The byte buffer to read from
/// * `offset` - Mutable reference to the offset position (will be advanced after reading)
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
///
/// # Examples
///
/// ```rust,ignore
/// use msgscope::io::read_le_at;
///
/// let data = [0x01, 0x00, 0x02, 0x00]; // Two u16 values: 1, 2
/// let mut offset = 0;
///
/// let first: u16 = read_le_at(&data, &mut offset)?;
/// assert_eq!(first, 1);
/// assert_eq!(offset, 2);
/// # Ok::<(), msgscope::Error>(())
/// ```
pub fn read_le_at<T: MapiIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    if (type_len + *offset) > data.len() {
        return Err(OutOfBounds);
    }

    let Ok(read) = data[*offset..*offset + type_len].try_into() else {
        return Err(OutOfBounds);
    };

    *offset += type_len;

    Ok(T::from_le_bytes(read))
}

/// Safely writes a value of type `T` in little-endian byte order to a data buffer.
///
/// This function writes to the beginning of the buffer and supports all types that
/// implement the [`crate::io::MapiIO`] trait.
///
/// # Arguments
///
/// * `data` - The byte buffer to write to
/// * `value` - The value to encode
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the buffer is too small for the value.
///
/// # Examples
///
/// ```rust,ignore
/// use msgscope::io::write_le;
///
/// let mut data = [0u8; 4];
/// write_le(&mut data, 1u32)?;
/// assert_eq!(data, [0x01, 0x00, 0x00, 0x00]);
/// # Ok::<(), msgscope::Error>(())
/// ```
pub fn write_le<T: MapiIO>(data: &mut [u8], value: T) -> Result<()> {
    let mut offset = 0_usize;
    write_le_at(data, &mut offset, value)
}

/// Safely writes a value of type `T` in little-endian byte order at a specific offset.
///
/// This function writes at the specified offset and automatically advances the offset
/// by the number of bytes written. The encode pass fills its pre-sized header buffer
/// through this helper.
///
/// # Arguments
///
/// * `data` - The byte buffer to write to
/// * `offset` - Mutable reference to the offset position (will be advanced after writing)
/// * `value` - The value to encode
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there is insufficient space in the buffer.
///
/// # Examples
///
/// ```rust,ignore
/// use msgscope::io::write_le_at;
///
/// let mut data = [0u8; 8];
/// let mut offset = 0;
///
/// write_le_at(&mut data, &mut offset, 1u16)?;  // offset: 0 -> 2
/// write_le_at(&mut data, &mut offset, 2u16)?;  // offset: 2 -> 4
/// write_le_at(&mut data, &mut offset, 3u32)?;  // offset: 4 -> 8
///
/// assert_eq!(data, [0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x00, 0x00]);
/// # Ok::<(), msgscope::Error>(())
/// ```
pub fn write_le_at<T: MapiIO>(data: &mut [u8], offset: &mut usize, value: T) -> Result<()> {
    let type_len = std::mem::size_of::<T>();
    if (type_len + *offset) > data.len() {
        return Err(OutOfBounds);
    }

    let bytes = value.to_le_bytes();
    data[*offset..*offset + type_len].copy_from_slice(bytes.as_ref());

    *offset += type_len;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_BUFFER: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    #[test]
    fn read_le_u8() {
        let result = read_le::<u8>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x01);
    }

    #[test]
    fn read_le_u16() {
        let result = read_le::<u16>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0201);
    }

    #[test]
    fn read_le_i16() {
        let result = read_le::<i16>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0201);
    }

    #[test]
    fn read_le_u32() {
        let result = read_le::<u32>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0403_0201);
    }

    #[test]
    fn read_le_i32() {
        let result = read_le::<i32>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0403_0201);
    }

    #[test]
    fn read_le_u64() {
        let result = read_le::<u64>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0807060504030201);
    }

    #[test]
    fn read_le_i64() {
        let result = read_le::<i64>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0807060504030201);
    }

    #[test]
    fn read_le_f32() {
        let result = read_le::<f32>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 1.5399896e-36);
    }

    #[test]
    fn read_le_f64() {
        let result = read_le::<f64>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 5.447603722011605e-270);
    }

    #[test]
    fn read_le_from() {
        let mut offset = 2_usize;
        let result = read_le_at::<u16>(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(result, 0x403);
        assert_eq!(offset, 4);
    }

    #[test]
    fn read_le_error() {
        let mut offset = 7_usize;
        let result = read_le_at::<u16>(&TEST_BUFFER, &mut offset);
        assert!(matches!(result, Err(OutOfBounds)));
        assert_eq!(offset, 7);
    }

    #[test]
    fn write_le_u16() {
        let mut buffer = [0u8; 2];
        write_le(&mut buffer, 0x0201_u16).unwrap();
        assert_eq!(buffer, [0x01, 0x02]);
    }

    #[test]
    fn write_le_roundtrip() {
        let mut buffer = [0u8; 8];
        let mut offset = 0_usize;

        write_le_at(&mut buffer, &mut offset, 0x001E_u16).unwrap();
        write_le_at(&mut buffer, &mut offset, 0x0037_u16).unwrap();
        write_le_at(&mut buffer, &mut offset, 0x0000_0006_u32).unwrap();
        assert_eq!(offset, 8);

        offset = 0;
        assert_eq!(read_le_at::<u16>(&buffer, &mut offset).unwrap(), 0x001E);
        assert_eq!(read_le_at::<u16>(&buffer, &mut offset).unwrap(), 0x0037);
        assert_eq!(read_le_at::<u32>(&buffer, &mut offset).unwrap(), 6);
    }

    #[test]
    fn write_le_error() {
        let mut buffer = [0u8; 4];
        let mut offset = 2_usize;
        let result = write_le_at(&mut buffer, &mut offset, 0xAABB_CCDD_u32);
        assert!(matches!(result, Err(OutOfBounds)));
        assert_eq!(offset, 2);
    }

    #[test]
    fn write_le_f64() {
        let mut buffer = [0u8; 8];
        write_le(&mut buffer, 5.447603722011605e-270_f64).unwrap();
        assert_eq!(buffer, TEST_BUFFER);
    }
}

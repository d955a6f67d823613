//! Low-level byte stream parser for property-stream decoding.
//!
//! This module provides the [`crate::io::Parser`] type, a cursor-based binary data parser
//! designed for reading MAPI property streams. It offers bounds-checked access to binary
//! data so that truncated or malformed documents surface as recoverable
//! [`crate::Error::OutOfBounds`] conditions instead of panics.
//!
//! # Architecture
//!
//! The parser is built around a simple cursor-based model that maintains a position within
//! a byte slice:
//!
//! - **Position tracking** - Maintains current offset for sequential parsing operations
//! - **Bounds checking** - All operations validate data availability before reading
//! - **Type-safe reading** - Strongly typed methods via the [`crate::io::MapiIO`] trait
//!
//! # Key Components
//!
//! ## Navigation Methods
//! - [`crate::io::Parser::seek`] - Move to specific position
//! - [`crate::io::Parser::advance_by`] - Move forward by specified bytes
//! - [`crate::io::Parser::pos`] - Get current position
//!
//! ## Data Access Methods
//! - [`crate::io::Parser::read_le`] - Read primitive types (little-endian)
//! - [`crate::io::Parser::peek_le`] - Peek at upcoming values without advancing
//! - [`crate::io::Parser::read_bytes`] - Take a raw sub-slice and advance past it
//!
//! # Usage Examples
//!
//! ```rust
//! use msgscope::Parser;
//!
//! let data = [0x1F, 0x00, 0x37, 0x00, 0x06, 0x00, 0x00, 0x00];
//! let mut parser = Parser::new(&data);
//!
//! // One record header: type code, property id, flags
//! let type_code = parser.read_le::<u16>()?;
//! let property_id = parser.read_le::<u16>()?;
//! let flags = parser.read_le::<u32>()?;
//!
//! assert_eq!(type_code, 0x001F);
//! assert_eq!(property_id, 0x0037);
//! assert_eq!(flags, 0x0006);
//! assert!(!parser.has_more_data());
//! # Ok::<(), msgscope::Error>(())
//! ```

use crate::{
    io::{read_le_at, MapiIO},
    Result,
};

/// A generic binary data parser for reading property-stream structures.
///
/// `Parser` provides a cursor-based interface for reading the little-endian binary data
/// of a MAPI property stream: the reserved preamble, the 16-byte property records, and
/// the padding tail. It maintains an internal position cursor and provides bounds checking
/// to prevent buffer overruns when reading malformed or truncated data.
///
/// # Features
///
/// - **Bounds checking**: All read operations validate data availability
/// - **Position tracking**: Maintains current offset for sequential parsing
/// - **Flexible seeking**: Random access to any position within the data
/// - **Type safety**: Strongly typed reading methods for common data types
///
/// # Examples
///
/// ```rust
/// use msgscope::Parser;
///
/// let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
/// let mut parser = Parser::new(&data);
///
/// // Read little-endian values
/// let first = parser.read_le::<u32>()?;
/// assert_eq!(first, 0x04030201);
///
/// // Seek to a specific position
/// parser.seek(6)?;
/// let last_bytes = parser.read_le::<u16>()?;
/// assert_eq!(last_bytes, 0x0807);
/// # Ok::<(), msgscope::Error>(())
/// ```
pub struct Parser<'a> {
    /// The binary data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`crate::io::Parser`] from a byte slice.
    ///
    /// # Arguments
    /// * `data` - The byte slice to read from
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::Parser;
    /// let data = [0x01, 0x02, 0x03, 0x04];
    /// let parser = Parser::new(&data);
    /// assert_eq!(parser.len(), 4);
    /// ```
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::Parser;
    /// let data = [0x01, 0x02, 0x03];
    /// let parser = Parser::new(&data);
    /// assert_eq!(parser.len(), 3);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the parser has no data.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::Parser;
    /// let empty_data = [];
    /// let parser = Parser::new(&empty_data);
    /// assert!(parser.is_empty());
    ///
    /// let data = [0x01];
    /// let parser = Parser::new(&data);
    /// assert!(!parser.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if there is more data available to parse.
    ///
    /// This checks if the current position is before the end of the data buffer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::Parser;
    /// let data = [0x01, 0x02];
    /// let mut parser = Parser::new(&data);
    /// assert!(parser.has_more_data());
    ///
    /// let _word = parser.read_le::<u16>()?;
    /// assert!(!parser.has_more_data());
    /// # Ok::<(), msgscope::Error>(())
    /// ```
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Returns the number of bytes between the current position and the end of the data.
    ///
    /// The decode loop uses this to tell a clean end of stream (no bytes left) apart
    /// from a genuinely truncated record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::Parser;
    /// let data = [0x01, 0x02, 0x03, 0x04];
    /// let mut parser = Parser::new(&data);
    ///
    /// assert_eq!(parser.remaining(), 4);
    /// let _byte = parser.read_le::<u8>()?;
    /// assert_eq!(parser.remaining(), 3);
    /// # Ok::<(), msgscope::Error>(())
    /// ```
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Move the current position to the specified index.
    ///
    /// # Arguments
    /// * `pos` - The position to move the cursor to
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if position is beyond the data length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::Parser;
    /// let data = [0x01, 0x02, 0x03, 0x04];
    /// let mut parser = Parser::new(&data);
    ///
    /// parser.seek(2)?;
    /// assert_eq!(parser.pos(), 2);
    /// let value = parser.read_le::<u8>()?;
    /// assert_eq!(value, 0x03);
    /// # Ok::<(), msgscope::Error>(())
    /// ```
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos >= self.data.len() {
            return Err(out_of_bounds_error!());
        }

        self.position = pos;
        Ok(())
    }

    /// Move the position forward by the specified number of bytes.
    ///
    /// # Arguments
    /// * `step` - Amount of bytes to advance
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if advancing by step would exceed the data length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::Parser;
    /// let data = [0x01, 0x02, 0x03, 0x04, 0x05];
    /// let mut parser = Parser::new(&data);
    ///
    /// assert_eq!(parser.pos(), 0);
    /// parser.advance_by(3)?;
    /// assert_eq!(parser.pos(), 3);
    /// # Ok::<(), msgscope::Error>(())
    /// ```
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        if self.position + step > self.data.len() {
            return Err(out_of_bounds_error!());
        }

        self.position += step;
        Ok(())
    }

    /// Get the current position of the parser within the data buffer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::Parser;
    /// let data = [0x01, 0x02, 0x03];
    /// let mut parser = Parser::new(&data);
    ///
    /// assert_eq!(parser.pos(), 0);
    /// let _byte = parser.read_le::<u8>()?;
    /// assert_eq!(parser.pos(), 1);
    /// # Ok::<(), msgscope::Error>(())
    /// ```
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Get access to the underlying data buffer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::Parser;
    /// let data = [0x01, 0x02, 0x03];
    /// let parser = Parser::new(&data);
    /// assert_eq!(parser.data(), &[0x01, 0x02, 0x03]);
    /// ```
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.data
    }

    /// Peek at a value of type `T` in little-endian format without advancing the position.
    ///
    /// This method reads a value from the current position but does not modify the
    /// parser state, allowing inspection of upcoming data before deciding how to proceed.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading `T` would exceed the data length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::Parser;
    /// let data = [0x01, 0x02, 0x03, 0x04];
    /// let mut parser = Parser::new(&data);
    ///
    /// let peeked: u16 = parser.peek_le()?;
    /// assert_eq!(peeked, 0x0201);
    /// assert_eq!(parser.pos(), 0); // Position unchanged
    /// # Ok::<(), msgscope::Error>(())
    /// ```
    pub fn peek_le<T: MapiIO>(&self) -> Result<T> {
        let mut temp_position = self.position;
        read_le_at::<T>(self.data, &mut temp_position)
    }

    /// Read a value of type `T` in little-endian format, advancing the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading `T` would exceed the data length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::Parser;
    /// let data = [0x02, 0x00, 0x1A, 0x00];
    /// let mut parser = Parser::new(&data);
    ///
    /// let type_code = parser.read_le::<u16>()?;
    /// let property_id = parser.read_le::<u16>()?;
    /// assert_eq!(type_code, 0x0002);
    /// assert_eq!(property_id, 0x001A);
    /// # Ok::<(), msgscope::Error>(())
    /// ```
    pub fn read_le<T: MapiIO>(&mut self) -> Result<T> {
        read_le_at::<T>(self.data, &mut self.position)
    }

    /// Read `len` raw bytes as a sub-slice, advancing the position past them.
    ///
    /// The returned slice borrows from the parser's underlying buffer, so no copy is
    /// made; callers that need to keep the bytes copy them into owned storage.
    ///
    /// # Arguments
    /// * `len` - Number of bytes to take
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `len` bytes remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use msgscope::Parser;
    /// let data = [0xDE, 0xAD, 0xBE, 0xEF, 0x00];
    /// let mut parser = Parser::new(&data);
    ///
    /// let payload = parser.read_bytes(4)?;
    /// assert_eq!(payload, &[0xDE, 0xAD, 0xBE, 0xEF]);
    /// assert_eq!(parser.pos(), 4);
    /// # Ok::<(), msgscope::Error>(())
    /// ```
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.position + len > self.data.len() {
            return Err(out_of_bounds_error!());
        }

        let slice = &self.data[self.position..self.position + len];
        self.position += len;
        Ok(slice)
    }
}

use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all possible error conditions that can occur while decoding, resolving
/// and re-encoding MAPI property streams. Each variant provides specific context about the
/// failure mode to enable appropriate error handling.
///
/// Note that most structural anomalies in real-world property streams are deliberately *not*
/// errors: the decoder keeps whatever it parsed successfully and records the anomaly in the
/// [`crate::mapi::Diagnostics`] sink instead. The variants below cover the conditions where
/// aborting is the only safe choice.
///
/// # Error Categories
///
/// ## Stream Parsing Errors
/// - [`Error::Malformed`] - Corrupted or invalid stream structure
/// - [`Error::OutOfBounds`] - Attempted to read beyond buffer boundaries
///
/// ## Resource Protection
/// - [`Error::AllocationLimit`] - Declared payload size above the configured ceiling
///
/// ## Resolution Errors
/// - [`Error::ChunkAlreadyBound`] - Conflicting rebind of an already-resolved pointer
///
/// # Examples
///
/// ```rust
/// use msgscope::{Error, DecodeConfig, PropertyTable, TableKind};
///
/// let data = [0u8; 8];
/// match PropertyTable::parse(&data, TableKind::Storage, &DecodeConfig::default()) {
///     Ok(table) => {
///         println!("Parsed {} properties", table.len());
///     }
///     Err(Error::AllocationLimit { requested, limit }) => {
///         eprintln!("Hostile input: {} bytes requested, limit is {}", requested, limit);
///     }
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("Malformed stream: {} ({}:{})", message, file, line);
///     }
///     Err(e) => {
///         eprintln!("Other error: {}", e);
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The stream is damaged and could not be parsed.
    ///
    /// This error indicates that the stream structure is corrupted or doesn't
    /// conform to the expected property-stream layout. The error includes the
    /// source location where the malformation was detected for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while parsing the stream.
    ///
    /// This error occurs when trying to read data beyond the end of the buffer.
    /// It's a safety check to prevent overruns during parsing. Inside the decode
    /// loop this condition is absorbed as the ordinary end of the table; it only
    /// surfaces from the lower-level cursor and write helpers.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// A declared payload size exceeds the configured allocation ceiling.
    ///
    /// Variable-length records carry a 32-bit size field; a value far beyond any
    /// plausible payload signals either corruption or a crafted allocation bomb.
    /// The decoder rejects the whole stream before allocating anything.
    ///
    /// The limit is configured per decode call via [`crate::DecodeConfig`].
    #[error("Declared payload of {requested} bytes exceeds the allocation limit of {limit} bytes")]
    AllocationLimit {
        /// The payload size the stream asked for
        requested: usize,
        /// The configured ceiling that was exceeded
        limit: usize,
    },

    /// A resolved pointer property was asked to rebind to a different entry.
    ///
    /// Pointer bindings are set-once. Running the resolution pass again with the
    /// same sibling set is a no-op; presenting a *different* entry for an already
    /// bound property id fails loudly instead of silently swapping payloads.
    ///
    /// The associated value is the property id whose binding conflicted.
    #[error("Property 0x{0:04X} is already bound to a different sibling entry")]
    ChunkAlreadyBound(u32),
}

use thiserror::Error;

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds
    };
}

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

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all possible error conditions that can occur while reading from or writing
/// to the buffer types and while transcoding text. Each variant provides specific context about
/// the failure mode to enable appropriate error handling.
///
/// Text transcoding never produces an error: malformed input is substituted with `?` by design
/// (see the [`crate::sjis`] module documentation).
///
/// # Examples
///
/// ```rust
/// use nubuf::{buffer::Reader, Error};
///
/// let data = [0x01, 0x02];
/// let mut reader = Reader::new(&data);
///
/// match reader.read_u32() {
///     Ok(value) => println!("read {value}"),
///     Err(Error::OutOfBounds) => eprintln!("buffer too short"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An out of bound access was attempted while reading from a buffer.
    ///
    /// This error occurs when trying to read data beyond the end of the
    /// underlying storage. It's a safety check to prevent buffer overruns,
    /// and the cursor is never advanced when it is returned.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// A length-prefixed string declared more bytes than the buffer holds.
    ///
    /// The associated value is the declared length. This indicates corrupt
    /// input: a well-formed pascal string's prefix never exceeds the bytes
    /// remaining after it.
    #[error("Invalid string length - {0}")]
    InvalidLength(u32),

    /// A bit-level read was attempted past the end of the bit stream.
    ///
    /// Returned by [`crate::buffer::BitReader`] when the mask is exhausted
    /// and no further bytes remain within the declared byte limit.
    #[error("Bit buffer overflowed")]
    BitOverflow,

    /// The buffer contents are damaged and could not be read.
    ///
    /// The error includes the source location where the malformation was
    /// detected for debugging purposes.
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
}

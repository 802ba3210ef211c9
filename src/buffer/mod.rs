//! Cursor-based buffer reading and writing.
//!
//! This module is the binary half of the crate: bounds-checked, little-endian
//! access to raw byte sequences through three cursor types, plus the
//! endian-aware primitive codec they are built on.
//!
//! # Key Components
//!
//! - [`crate::buffer::Reader`] - Bounds-checked cursor over a borrowed byte slice
//! - [`crate::buffer::Writer`] - Growable, owned write buffer with backpatching
//! - [`crate::buffer::BitReader`] - MSB-first bit-level cursor
//! - [`crate::buffer::io`] - Endian codec underlying the byte cursors
//!
//! # Architecture
//!
//! Read mode and write mode are distinct types rather than one buffer with a
//! mode flag: a [`Reader`] borrows caller-owned data and can never write or
//! grow, while a [`Writer`] owns its storage exclusively and can never
//! observe foreign bytes. This split removes the read-length/write-capacity
//! ambiguity a single shared size field would have, and lets the borrow
//! checker enforce that no view into writer storage survives a reallocation.
//!
//! Buffers are created per parse/serialize session and discarded by the
//! caller; there is no shared or global buffer state.
//!
//! # Usage Examples
//!
//! ```rust
//! use nubuf::buffer::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.write_u32(0x1234_5678);
//! writer.write_pascal_string(b"entry");
//!
//! let bytes = writer.into_bytes();
//! let mut reader = Reader::new(&bytes);
//! assert_eq!(reader.read_u32()?, 0x1234_5678);
//! assert_eq!(reader.read_pascal_string()?, b"entry");
//! # Ok::<(), nubuf::Error>(())
//! ```

pub mod io;

mod bits;
mod reader;
mod writer;

pub use bits::BitReader;
pub use reader::Reader;
pub use writer::Writer;

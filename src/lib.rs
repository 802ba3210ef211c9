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
#![allow(dead_code)]
//#![deny(unsafe_code)]
// - 'buffer/reader.rs' uses unaligned pointer reads for the unchecked read variants

//! # nubuf
//!
//! [![Crates.io](https://img.shields.io/crates/v/nubuf.svg)](https://crates.io/crates/nubuf)
//! [![Documentation](https://docs.rs/nubuf/badge.svg)](https://docs.rs/nubuf)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/nubuf/blob/main/LICENSE-APACHE)
//!
//! Bounds-checked cursor buffers and Shift-JIS transcoding primitives for legacy binary
//! formats. Built in pure Rust, `nubuf` provides the two low-level building blocks that
//! parsers for old Japanese game data need everywhere: safe sequential access to raw byte
//! sequences (including bit streams), and exact, quirk-preserving conversion between
//! Shift-JIS and UTF-8.
//!
//! ## Features
//!
//! - **🛡️ Bounds-checked by default** - Every read validates availability; unchecked
//!   variants exist for pre-validated tight loops
//! - **📦 Zero-copy reading** - Readers borrow caller-owned data; string and byte-range
//!   views point into the source
//! - **📈 Growable writing** - Writers own their storage and grow it with a predictable
//!   doubling policy, with backpatching for late-bound size fields
//! - **🔢 Bit-level access** - MSB-first bit reads for unary and fixed-width prefix codes
//! - **🈂️ Exact Shift-JIS semantics** - Table-driven transcoding that reproduces the
//!   byte-for-byte behavior downstream formats depend on, quirks included
//! - **🔧 Cross-platform** - No endianness or alignment assumptions about the host
//!
//! ## Quick Start
//!
//! Add `nubuf` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! nubuf = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust
//! use nubuf::prelude::*;
//!
//! let data = [0x04, 0x00, 0x00, 0x00, 0x9c, 0x82, 0xa0, 0x00];
//! let mut reader = Reader::new(&data);
//! let size = reader.read_u32()?;
//! assert_eq!(size, 4);
//! # Ok::<(), nubuf::Error>(())
//! ```
//!
//! ### Reading a Binary Record
//!
//! ```rust
//! use nubuf::{buffer::Reader, sjis};
//!
//! // magic, version, then a null-terminated Shift-JIS name
//! let data = [b'A', b'R', b'C', 0x02, 0x00, 0x82, 0xa0, 0x00];
//! let mut reader = Reader::new(&data);
//!
//! assert!(reader.check_bytes(b"ARC"));
//! let version = reader.read_u16()?;
//! let name = reader.skip_cstring()?;
//! assert_eq!(version, 2);
//! assert_eq!(sjis::to_utf8(name), "あ");
//! # Ok::<(), nubuf::Error>(())
//! ```
//!
//! ### Writing with Backpatching
//!
//! ```rust
//! use nubuf::buffer::Writer;
//!
//! let mut writer = Writer::new();
//! writer.write_u32(0); // size, patched below
//! writer.write_pascal_string(b"payload");
//! writer.write_u32_at(0, writer.len() as u32);
//! let bytes = writer.into_bytes();
//! assert_eq!(bytes.len(), 15);
//! ```
//!
//! ## Architecture
//!
//! `nubuf` is organized into two modules:
//!
//! - [`buffer`] - Cursor-based binary reading and writing:
//!   [`buffer::Reader`], [`buffer::Writer`], [`buffer::BitReader`], and the
//!   endian codec in [`buffer::io`]
//! - [`sjis`] - The Shift-JIS↔UTF-8 transcoder and its mapping table
//!
//! Plus [`Error`] and [`Result`] for error handling, and [`prelude`] for glob imports.
//!
//! ## Error Handling
//!
//! Buffer access errors are structural and fatal to the operation: out-of-bounds reads,
//! corrupt length prefixes, and bit-stream overflow all return [`Err`] without moving
//! the cursor, so a parser can stop cleanly at the first sign of corrupt input. Text
//! transcoding takes the opposite stance and never fails: unmappable characters and
//! malformed sequences degrade to `?`, because the legacy data this crate exists for is
//! full of them and forward progress matters more than strictness. See [`Error`] and the
//! [`sjis`] module documentation for the details.
//!
//! ```rust
//! use nubuf::{buffer::Reader, Error};
//!
//! let mut reader = Reader::new(&[0x01]);
//! match reader.read_u32() {
//!     Err(Error::OutOfBounds) => {} // truncated input
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
//!
//! ## Concurrency
//!
//! Everything is synchronous and lock-free. Buffers are independent values with no
//! shared state; the Shift-JIS mapping table is immutable static data, safe for any
//! number of concurrent readers.

#[macro_use]
pub(crate) mod error;

/// Cursor-based buffer reading and writing.
///
/// This module provides bounds-checked, little-endian access to raw byte
/// sequences:
///
/// - [`buffer::Reader`] - Sequential reads over a borrowed byte slice
/// - [`buffer::Writer`] - Growable owned storage with mirror write operations
/// - [`buffer::BitReader`] - MSB-first bit-level reads
/// - [`buffer::io`] - The endian-aware primitive codec underneath
///
/// # Examples
///
/// ```rust
/// use nubuf::buffer::{Reader, Writer};
///
/// let mut writer = Writer::new();
/// writer.write_u16(0xCAFE);
///
/// let bytes = writer.into_bytes();
/// let mut reader = Reader::new(&bytes);
/// assert_eq!(reader.read_u16()?, 0xCAFE);
/// # Ok::<(), nubuf::Error>(())
/// ```
pub mod buffer;

/// Bidirectional transcoding between Shift-JIS and UTF-8.
///
/// Decoding, encoding, and the string-level helpers format parsers need:
/// classification ([`sjis::has_hankaku`], [`sjis::has_zenkaku`]), counting
/// ([`sjis::count_chars`]), indexing ([`sjis::index`]), and in-place
/// uppercasing ([`sjis::make_upper`]). Transcoding is lossy by design and
/// never fails; see the module documentation for the exact substitution
/// rules and preserved legacy quirks.
///
/// # Examples
///
/// ```rust
/// use nubuf::sjis;
///
/// assert_eq!(sjis::to_utf8(&[0x82, 0xa0]), "あ");
/// assert_eq!(sjis::from_utf8("あ"), [0x82, 0xa0]);
/// ```
pub mod sjis;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use nubuf::prelude::*;
///
/// let mut writer = Writer::new();
/// writer.write_u8(1);
/// assert_eq!(writer.len(), 1);
/// ```
pub mod prelude;

/// `nubuf` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. This is used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `nubuf` Error type
///
/// The main error type for all operations in this crate. See the variants for the
/// failure modes of buffer access; text transcoding never produces one.
pub use error::Error;

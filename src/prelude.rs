//! # nubuf Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and
//! functions from the nubuf library. Import this module to get quick access to the
//! essential types for binary parsing and text transcoding.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all nubuf operations
pub use crate::Error;

/// The result type used throughout nubuf
pub use crate::Result;

// ================================================================================================
// Buffer Cursors
// ================================================================================================

/// Cursor types for binary reading and writing
pub use crate::buffer::{BitReader, Reader, Writer};

// ================================================================================================
// Text Transcoding
// ================================================================================================

/// The Shift-JIS transcoder module, for qualified calls like `sjis::to_utf8`
pub use crate::sjis;

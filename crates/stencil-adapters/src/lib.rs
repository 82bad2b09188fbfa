//! Infrastructure adapters for stencil.
//!
//! Implementations of the `Filesystem` port defined in `stencil-core`:
//!
//! - [`LocalFilesystem`] — production, backed by `std::fs`;
//! - [`MemoryFilesystem`] — hermetic, for tests.

pub mod filesystem;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};

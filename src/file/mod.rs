//! File handles and the operations layered on top of them
//!
//! [`FileHandle`] is the narrow storage interface; [`ExtendedFile`] composes a
//! handle with extension parsing, size formatting, content sniffing, hashing,
//! comparison and deletion.

pub mod delete;
pub mod extended;
pub mod handle;
pub mod mime;
pub mod size;

pub use delete::Deleter;
pub use extended::{split_extension, ExtendedFile};
pub use handle::{FileHandle, LocalFile};
pub use size::format_size;

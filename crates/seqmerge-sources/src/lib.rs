//! Sequence providers for seqmerge.
//!
//! - [`StringSource`] -- The characters of a string
//! - [`TextFileSource`] / [`TextLine`] -- The lines of a text file, compared
//!   by a hash of their trimmed content

pub mod error;
pub mod string;
pub mod text_file;

pub use error::{SourceError, SourceResult};
pub use string::StringSource;
pub use text_file::{LineHash, TextFileSource, TextLine};

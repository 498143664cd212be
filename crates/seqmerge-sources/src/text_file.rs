//! Line-oriented text as a [`Sequence`].
//!
//! Each line is reduced to the BLAKE3 hash of its trimmed content. Lines
//! that differ only in leading or trailing whitespace compare equal; the raw
//! text is kept for rendering.

use std::cmp::Ordering;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use seqmerge_types::Sequence;
use tracing::debug;

use crate::error::{SourceError, SourceResult};

/// Hash of a line's trimmed content.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineHash([u8; 32]);

impl LineHash {
    pub fn of(line: &str) -> Self {
        Self(*blake3::hash(line.trim().as_bytes()).as_bytes())
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Debug for LineHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineHash({})", self.short_hex())
    }
}

/// One line of a text file.
///
/// Equality and ordering look only at [`LineHash`].
#[derive(Clone, Debug)]
pub struct TextLine {
    line: String,
    hash: LineHash,
}

impl TextLine {
    pub fn new(line: impl Into<String>) -> Self {
        let line = line.into();
        let hash = LineHash::of(&line);
        Self { line, hash }
    }

    /// The raw line, without its terminator.
    pub fn as_str(&self) -> &str {
        &self.line
    }

    pub fn hash(&self) -> LineHash {
        self.hash
    }
}

impl PartialEq for TextLine {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for TextLine {}

impl PartialOrd for TextLine {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TextLine {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hash.cmp(&other.hash)
    }
}

impl fmt::Display for TextLine {
    /// The raw line followed by a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.line)
    }
}

/// The lines of a text file.
#[derive(Clone, Debug)]
pub struct TextFileSource {
    name: PathBuf,
    lines: Vec<TextLine>,
}

impl TextFileSource {
    /// Read `path` line by line.
    pub fn open(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
            _ => SourceError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let source = Self::from_text(path, &text);
        debug!(path = ?path, lines = source.lines.len(), "loaded text source");
        Ok(source)
    }

    /// Build from in-memory text, labelled `name`.
    pub fn from_text(name: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            name: name.into(),
            lines: text.lines().map(TextLine::new).collect(),
        }
    }

    /// The path (or label) the lines came from.
    pub fn name(&self) -> &Path {
        &self.name
    }

    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }
}

impl Sequence for TextFileSource {
    type Item = TextLine;

    fn len(&self) -> usize {
        self.lines.len()
    }

    fn get(&self, index: usize) -> Option<&TextLine> {
        self.lines.get(index)
    }
}

impl fmt::Display for TextFileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} lines)", self.name.display(), self.lines.len())
    }
}

use std::fmt;

use seqmerge_types::Sequence;

/// The characters of a string as a [`Sequence`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringSource {
    text: String,
    chars: Vec<char>,
}

impl StringSource {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// The original text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Sequence for StringSource {
    type Item = char;

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn get(&self, index: usize) -> Option<&char> {
        self.chars.get(index)
    }
}

impl fmt::Display for StringSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

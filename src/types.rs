/// Raw UTF-8 bytes of one high-byte character, as read from the mapping source.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(Vec<u8>);

impl Token {
    /// Returns `None` for an empty run.
    pub fn new(bytes: Vec<u8>) -> Option<Self> {
        if bytes.is_empty() {
            None
        } else {
            Some(Token(bytes))
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One slot of the table. `byte_len` counts raw bytes, not characters of `literal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterEntry {
    pub literal: String,
    pub byte_len: usize,
}

/// 256 entries indexed by raw byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    pub(crate) entries: Vec<CharacterEntry>,
}

impl LookupTable {
    pub fn entries(&self) -> &[CharacterEntry] {
        &self.entries
    }

    pub fn get(&self, byte: u8) -> &CharacterEntry {
        &self.entries[byte as usize]
    }
}

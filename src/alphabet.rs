//! Candidate alphabets.

use crate::error::{Error, Result};

/// Named character sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Charset {
    /// a-z
    Lower,
    /// A-Z
    Upper,
    /// 0-9
    Digits,
    /// a-z, A-Z, 0-9
    Alnum,
    /// 0-9, a-f
    Hex,
}

impl Charset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Charset::Lower => "lower",
            Charset::Upper => "upper",
            Charset::Digits => "digits",
            Charset::Alnum => "alnum",
            Charset::Hex => "hex",
        }
    }

    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lower" | "lowercase" => Ok(Charset::Lower),
            "upper" | "uppercase" => Ok(Charset::Upper),
            "digits" => Ok(Charset::Digits),
            "alnum" => Ok(Charset::Alnum),
            "hex" => Ok(Charset::Hex),
            _ => Err(Error::UnknownCharset(s.to_string())),
        }
    }

    fn symbols(&self) -> &'static str {
        match self {
            Charset::Lower => "abcdefghijklmnopqrstuvwxyz",
            Charset::Upper => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Charset::Digits => "0123456789",
            Charset::Alnum => "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
            Charset::Hex => "0123456789abcdef",
        }
    }
}

/// Ordered set of characters candidates are built from.
///
/// Order matters: it defines the enumeration order of candidates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build from characters, dropping repeats (first occurrence wins).
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut symbols: Vec<char> = Vec::new();
        for c in chars {
            if !symbols.contains(&c) {
                symbols.push(c);
            }
        }
        Self { symbols }
    }

    pub fn preset(charset: Charset) -> Self {
        Self::new(charset.symbols().chars())
    }

    /// Lowercase Latin letters.
    pub fn lowercase() -> Self {
        Self::preset(Charset::Lower)
    }

    /// Parse a preset name, or `custom:<chars>` for a literal set.
    pub fn parse(s: &str) -> Result<Self> {
        match s.strip_prefix("custom:") {
            Some(chars) => Ok(Self::new(chars.chars())),
            None => Charset::from_str(s).map(Self::preset),
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_order() {
        let alphabet = Alphabet::lowercase();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.symbols()[0], 'a');
        assert_eq!(alphabet.symbols()[25], 'z');
    }

    #[test]
    fn test_duplicates_dropped() {
        let alphabet = Alphabet::new("abca".chars());
        assert_eq!(alphabet.symbols(), &['a', 'b', 'c']);
        assert_eq!(alphabet.to_string(), "abc");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Alphabet::parse("digits").unwrap().len(), 10);
        assert_eq!(Alphabet::parse("alnum").unwrap().len(), 62);
        assert_eq!(Alphabet::parse("custom:xyz").unwrap().to_string(), "xyz");
        assert!(Alphabet::parse("custom:").unwrap().is_empty());
        assert!(matches!(
            Alphabet::parse("greek"),
            Err(Error::UnknownCharset(_))
        ));
    }
}

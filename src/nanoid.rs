//! NanoID alphabets and the mapping of random bytes onto them.

use crate::{generator::RandSource, Error};

/// The default 64-symbol URL-safe alphabet.
pub const URL_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Strategy that turns one random byte into one symbol.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mapping {
    /// Takes `byte % alphabet_len`.
    ///
    /// Symbols at the front of the alphabet are slightly more likely when the alphabet length
    /// does not divide 256 (e.g. with 62 symbols, the first 8 appear with probability 5/256 and
    /// the rest 4/256). Alphabets of 2, 4, 8, 16, 32, 64, 128 or 256 symbols are unbiased.
    #[default]
    Modulo,

    /// Discards bytes at or above the largest multiple of the alphabet length and draws again,
    /// so that every symbol is equally likely.
    Uniform,
}

/// A non-empty set of at most 256 symbols that identifiers are drawn from.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet from the characters of `symbols`, in order.
    ///
    /// Repeated characters are kept and weight the distribution accordingly.
    pub fn new(symbols: &str) -> Result<Self, Error> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() || symbols.len() > 256 {
            return Err(Error::InvalidOption {
                option: "alphabet",
                reason: format!("must have 1 to 256 symbols, got {}", symbols.len()),
            });
        }
        Ok(Self { symbols })
    }

    /// Returns the default URL-safe alphabet ([`URL_ALPHABET`]).
    pub fn url_safe() -> Self {
        Self {
            symbols: URL_ALPHABET.chars().collect(),
        }
    }

    /// Returns the symbols in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the symbol that `byte` maps to by [`Mapping::Modulo`].
    pub fn map_modulo(&self, byte: u8) -> char {
        self.symbols[byte as usize % self.symbols.len()]
    }

    /// Returns the symbol that `byte` maps to by [`Mapping::Uniform`], or `None` if the byte has
    /// to be discarded.
    pub fn map_uniform(&self, byte: u8) -> Option<char> {
        let n = self.symbols.len();
        let limit = 256 - 256 % n;
        ((byte as usize) < limit).then(|| self.symbols[byte as usize % n])
    }

    /// Appends `length` random symbols to `dst`.
    pub(crate) fn fill<R: RandSource + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
        mapping: Mapping,
        dst: &mut String,
    ) -> Result<(), Error> {
        let mut buffer = vec![0u8; length];
        rng.try_fill_bytes(&mut buffer)?;
        match mapping {
            Mapping::Modulo => dst.extend(buffer.iter().map(|&e| self.map_modulo(e))),
            Mapping::Uniform => {
                let mut remaining = length;
                loop {
                    for e in buffer.iter().filter_map(|&e| self.map_uniform(e)) {
                        if remaining == 0 {
                            break;
                        }
                        dst.push(e);
                        remaining -= 1;
                    }
                    if remaining == 0 {
                        break;
                    }
                    rng.try_fill_bytes(&mut buffer)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::url_safe()
    }
}

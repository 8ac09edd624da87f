use serde::{Serialize, Serializer};
use thiserror::Error;

/// Errors raised by nucleotide operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Invalid nucleotide '{base}' at position {position}")]
    InvalidNucleotide { base: char, position: usize },
}

/// Complement a single base (A<->T, C<->G, N<->N).
///
/// Returns `None` for anything outside the `ACGTN` alphabet, lowercase included.
#[inline]
#[must_use]
pub const fn complement_base(base: u8) -> Option<u8> {
    match base {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        b'N' => Some(b'N'),
        _ => None,
    }
}

/// An immutable nucleotide sequence (a chromosome or a primer)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<u8>);

impl Sequence {
    pub fn new(bases: impl Into<Vec<u8>>) -> Self {
        Self(bases.into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return a copy with all bases folded to uppercase
    #[must_use]
    pub fn to_uppercase(&self) -> Self {
        Self(self.0.to_ascii_uppercase())
    }

    /// Reverse complement of this sequence, i.e. the opposite strand read 5' to 3'.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::InvalidNucleotide` for the first base (in input
    /// order) that is not one of `A`, `C`, `G`, `T` or `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use virtual_pcr::Sequence;
    ///
    /// let primer = Sequence::from("ATCTGTGT");
    /// assert_eq!(primer.reverse_complement().unwrap(), Sequence::from("ACACAGAT"));
    /// assert!(Sequence::from("ACXT").reverse_complement().is_err());
    /// ```
    pub fn reverse_complement(&self) -> Result<Self, SequenceError> {
        let mut complemented = self
            .0
            .iter()
            .enumerate()
            .map(|(position, &base)| {
                complement_base(base).ok_or(SequenceError::InvalidNucleotide {
                    base: char::from(base),
                    position,
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        complemented.reverse();
        Ok(Self(complemented))
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Sequence {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<Vec<u8>> for Sequence {
    fn from(bases: Vec<u8>) -> Self {
        Self(bases)
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement_base() {
        assert_eq!(complement_base(b'A'), Some(b'T'));
        assert_eq!(complement_base(b'T'), Some(b'A'));
        assert_eq!(complement_base(b'C'), Some(b'G'));
        assert_eq!(complement_base(b'G'), Some(b'C'));
        assert_eq!(complement_base(b'N'), Some(b'N'));

        // Lowercase and IUPAC codes are outside the alphabet
        for base in [b'a', b'n', b'R', b'Y', b'-', b'X'] {
            assert_eq!(complement_base(base), None);
        }
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(
            Sequence::from("").reverse_complement().unwrap(),
            Sequence::from("")
        );
        assert_eq!(
            Sequence::from("AAAA").reverse_complement().unwrap(),
            Sequence::from("TTTT")
        );
        assert_eq!(
            Sequence::from("ACGTN").reverse_complement().unwrap(),
            Sequence::from("NACGT")
        );
        assert_eq!(
            Sequence::from("GACTGATA").reverse_complement().unwrap(),
            Sequence::from("TATCAGTC")
        );
        // Palindromic site
        assert_eq!(
            Sequence::from("GAATTC").reverse_complement().unwrap(),
            Sequence::from("GAATTC")
        );
    }

    #[test]
    fn test_reverse_complement_is_involution() {
        for s in ["A", "ACGT", "GACTGATA", "NNACGTTTGCAN", "CCCCGGGGAAT"] {
            let seq = Sequence::from(s);
            let rc = seq.reverse_complement().unwrap();
            assert_eq!(rc.len(), seq.len());
            assert_eq!(rc.reverse_complement().unwrap(), seq);
        }
    }

    #[test]
    fn test_reverse_complement_invalid_base() {
        let err = Sequence::from("ACGUA").reverse_complement().unwrap_err();
        assert_eq!(
            err,
            SequenceError::InvalidNucleotide {
                base: 'U',
                position: 3
            }
        );
        assert_eq!(err.to_string(), "Invalid nucleotide 'U' at position 3");

        // First offending base in input order is reported
        let err = Sequence::from("acgt").reverse_complement().unwrap_err();
        assert_eq!(
            err,
            SequenceError::InvalidNucleotide {
                base: 'a',
                position: 0
            }
        );
    }

    #[test]
    fn test_to_uppercase() {
        assert_eq!(
            Sequence::from("acgtNn").to_uppercase(),
            Sequence::from("ACGTNN")
        );
    }
}

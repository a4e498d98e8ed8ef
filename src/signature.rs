use hex::FromHexError;
use thiserror::Error;

/// Error parsing a signature's canonical character form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureParseError {
    #[error("signature text has odd length {0}")]
    OddLength(usize),
    #[error("invalid hex character {ch:?} at index {index}")]
    InvalidChar { index: usize, ch: char },
    #[error("signature text length {0} does not decode to whole bytes")]
    InvalidLength(usize),
}

/// Raw bytes of a package signing signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    pub fn new(bytes: Vec<u8>) -> Self {
        Signature(bytes)
    }

    /// Parse the canonical character form produced by [`Signature::to_chars_string`].
    /// Upper-case digits are accepted.
    pub fn from_chars_string(text: &str) -> Result<Self, SignatureParseError> {
        hex::decode(text).map(Signature).map_err(|e| match e {
            // Every byte before `index` is an ASCII digit, so it is a char boundary
            FromHexError::InvalidHexCharacter { c, index } => SignatureParseError::InvalidChar {
                index,
                ch: text.get(index..).and_then(|s| s.chars().next()).unwrap_or(c),
            },
            FromHexError::OddLength => SignatureParseError::OddLength(text.len()),
            FromHexError::InvalidStringLength => SignatureParseError::InvalidLength(text.len()),
        })
    }

    /// Canonical character form: two lowercase hex digits per byte.
    pub fn to_chars_string(&self) -> String {
        hex::encode(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_lowercase_chars() {
        let sig = Signature::new(vec![0x30, 0x82, 0xab, 0x0f]);
        assert_eq!(sig.to_chars_string(), "3082ab0f");
    }

    #[test]
    fn empty_signature_renders_empty() {
        assert_eq!(Signature::new(Vec::new()).to_chars_string(), "");
    }

    #[test]
    fn parses_chars_back() {
        let sig = Signature::from_chars_string("3082AB0f").unwrap();
        assert_eq!(sig, Signature::new(vec![0x30, 0x82, 0xab, 0x0f]));
        assert_eq!(sig.to_chars_string(), "3082ab0f");
    }

    #[test]
    fn rejects_odd_length() {
        assert_eq!(
            Signature::from_chars_string("abc"),
            Err(SignatureParseError::OddLength(3))
        );
    }

    #[test]
    fn reports_multibyte_char_at_its_index() {
        assert_eq!(
            Signature::from_chars_string("aé0"),
            Err(SignatureParseError::InvalidChar { index: 1, ch: 'é' })
        );
    }

    #[test]
    fn rejects_non_hex() {
        assert_eq!(
            Signature::from_chars_string("30zz"),
            Err(SignatureParseError::InvalidChar { index: 2, ch: 'z' })
        );
    }
}

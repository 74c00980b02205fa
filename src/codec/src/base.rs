use crate::error::CodecError;

/// One of the four canonical DNA bases, 2-bit encoded as `A=0, C=1, G=2, T=3`.
///
/// `N` (unknown base) deliberately has no variant here: it never survives
/// into a packed guide word, it short-circuits encoding into the reserved
/// error word instead (see [`crate::encode`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base { A, C, G, T }

impl Base {
    #[must_use]
    pub fn bits(self) -> u64 {
        match self {
            Base::A => 0b00,
            Base::C => 0b01,
            Base::G => 0b10,
            Base::T => 0b11,
        }
    }

    #[must_use]
    pub fn from_bits(bits: u64) -> Base {
        match bits & 0b11 {
            0b00 => Base::A,
            0b01 => Base::C,
            0b10 => Base::G,
            _    => Base::T,
        }
    }

    #[must_use]
    pub fn complement(self) -> Base {
        match self {
            Base::A => Base::T,
            Base::T => Base::A,
            Base::C => Base::G,
            Base::G => Base::C,
        }
    }
}

impl From<Base> for char {
    fn from(value: Base) -> Self {
        match value {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
        }
    }
}

impl TryFrom<char> for Base {
    type Error = CodecError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'T' => Ok(Base::T),
            other => Err(CodecError::InvalidBase(other)),
        }
    }
}

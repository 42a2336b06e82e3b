//! Allowed character sets for HexaURL tokens

/// Character-set policy for a token
///
/// ASCII letters (both cases) and digits are always allowed; the variants
/// differ only in which delimiters they admit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum Composition {
    /// Letters and digits
    Alphanumeric = 0,
    /// Letters, digits and hyphen
    #[default]
    AlphanumericHyphen = 1,
    /// Letters, digits and underscore
    AlphanumericUnderscore = 2,
    /// Letters, digits, hyphen and underscore
    AlphanumericHyphenUnderscore = 3,
}

impl Composition {
    pub const fn allows_hyphen(&self) -> bool {
        matches!(
            self,
            Composition::AlphanumericHyphen | Composition::AlphanumericHyphenUnderscore
        )
    }

    pub const fn allows_underscore(&self) -> bool {
        matches!(
            self,
            Composition::AlphanumericUnderscore | Composition::AlphanumericHyphenUnderscore
        )
    }

    /// Check whether a single character belongs to this set
    pub const fn allows(&self, c: char) -> bool {
        match c {
            '0'..='9' | 'A'..='Z' | 'a'..='z' => true,
            '-' => self.allows_hyphen(),
            '_' => self.allows_underscore(),
            _ => false,
        }
    }

    /// The allowed set in words, used in rejection messages
    pub const fn description(&self) -> &'static str {
        match self {
            Composition::Alphanumeric => "alphabets or numbers",
            Composition::AlphanumericHyphen => "alphabets, numbers, or hyphens",
            Composition::AlphanumericUnderscore => "alphabets, numbers, or underscores",
            Composition::AlphanumericHyphenUnderscore => {
                "alphabets, numbers, hyphens, or underscores"
            }
        }
    }

    const fn as_str(&self) -> &'static str {
        match self {
            Composition::Alphanumeric => "alphanumeric",
            Composition::AlphanumericHyphen => "alphanumeric_hyphen",
            Composition::AlphanumericUnderscore => "alphanumeric_underscore",
            Composition::AlphanumericHyphenUnderscore => "alphanumeric_hyphen_underscore",
        }
    }
}

impl core::fmt::Display for Composition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

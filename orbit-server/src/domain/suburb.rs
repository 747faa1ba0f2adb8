//! Suburb (network location) names.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid suburb name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid suburb name: must not be blank")]
pub struct InvalidSuburb;

/// A named location in the orbit network.
///
/// Suburb names are matched case-insensitively: `"silk drob"` and
/// `"Silk Drob"` are the same suburb. The spelling used at construction is
/// kept for display.
///
/// # Examples
///
/// ```
/// use orbit_server::domain::Suburb;
///
/// let a = Suburb::parse("Silk Drob").unwrap();
/// let b = Suburb::parse("  silk DROB ").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "Silk Drob");
///
/// assert!(Suburb::parse("   ").is_err());
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Suburb {
    name: String,
    key: String,
}

impl Suburb {
    /// Parse a suburb name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidSuburb> {
        let name = s.trim();
        if name.is_empty() {
            return Err(InvalidSuburb);
        }

        Ok(Self {
            name: name.to_string(),
            key: name.to_lowercase(),
        })
    }

    /// Returns the suburb name as originally spelled.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Suburb {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Suburb {}

impl Hash for Suburb {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl TryFrom<String> for Suburb {
    type Error = InvalidSuburb;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Suburb> for String {
    fn from(suburb: Suburb) -> Self {
        suburb.name
    }
}

impl fmt::Debug for Suburb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Suburb({})", self.name)
    }
}

impl fmt::Display for Suburb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

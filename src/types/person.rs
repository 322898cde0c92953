//! Person types for the acquaintance graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical, case-insensitive name of a person.
///
/// This is the only place raw identifiers are normalized: surrounding
/// whitespace is trimmed and the remainder is lowercased. Every lookup in the
/// graph goes through this type, so `"Sam"`, `"sam"` and `" SAM "` all refer
/// to the same person.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonName(String);

impl PersonName {
    /// Canonicalize a raw name.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Get the canonical form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the canonical form is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// School affiliation, canonicalized like [`PersonName`].
///
/// A school is never empty; "no school" is modelled as `Option::<School>::None`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct School(String);

impl School {
    /// Parse a raw school value. Blank input means no school.
    pub fn parse(raw: &str) -> Option<Self> {
        let canonical = raw.trim().to_lowercase();
        if canonical.is_empty() {
            None
        } else {
            Some(Self(canonical))
        }
    }

    /// Get the canonical form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for School {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A person in the acquaintance graph.
///
/// Immutable once built. `Display` renders the record line used by the text
/// format: `name|y|school` or `name|n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: PersonName,
    school: Option<School>,
}

impl Person {
    /// Create a person from raw name and school values.
    pub fn new(name: &str, school: Option<&str>) -> Self {
        Self {
            name: PersonName::new(name),
            school: school.and_then(School::parse),
        }
    }

    /// Create a person from already-canonical parts.
    pub fn from_parts(name: PersonName, school: Option<School>) -> Self {
        Self { name, school }
    }

    /// Canonical name.
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// School affiliation, if any.
    pub fn school(&self) -> Option<&School> {
        self.school.as_ref()
    }

    /// Whether this person's affiliation equals `school` (`None` matches
    /// people without a school).
    pub fn attends(&self, school: Option<&School>) -> bool {
        self.school.as_ref() == school
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.school {
            Some(school) => write!(f, "{}|y|{}", self.name, school),
            None => write!(f, "{}|n", self.name),
        }
    }
}

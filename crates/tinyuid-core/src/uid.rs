use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A generated short identifier.
///
/// Ids are short enough that [`SmolStr`] keeps them inline without heap
/// allocation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Uid(SmolStr);

impl Uid {
    /// Creates a `Uid` from an already-encoded string.
    ///
    /// Use this only for ids produced by trusted internal sources (the
    /// generators); the input is not validated against the dictionary.
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(SmolStr::new(value))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Uid").field(&self.0).finish()
    }
}

impl Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Uid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Uid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Ok(Self(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_as_str() {
        let uid = Uid::new("a1B2c3");
        assert_eq!(uid.to_string(), "a1B2c3");
        assert_eq!(uid.as_str(), "a1B2c3");
    }

    #[test]
    fn serializes_as_a_plain_string() {
        let uid = Uid::new("xYz");
        let json = serde_json::to_string(&uid).unwrap();
        assert_eq!(json, "\"xYz\"");

        let back: Uid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uid);
    }

    #[test]
    fn equality_is_by_content() {
        assert_eq!(Uid::new("abc"), Uid::new("abc"));
        assert_ne!(Uid::new("abc"), Uid::new("abd"));
    }
}

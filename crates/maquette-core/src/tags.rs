//! Built-in tag names and the [`TagSet`] collection.
//!
//! Every element and relationship carries a set of tags that styling rules
//! key on. The constants in this module are the tags the model applies
//! automatically on creation; user code can add its own on top.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tag applied to every model element.
pub const ELEMENT: &str = "Element";

/// Tag applied to people.
pub const PERSON: &str = "Person";

/// Tag applied to software systems.
pub const SOFTWARE_SYSTEM: &str = "Software System";

/// Tag applied to containers.
pub const CONTAINER: &str = "Container";

/// Tag applied to components.
pub const COMPONENT: &str = "Component";

/// Tag applied to every relationship.
pub const RELATIONSHIP: &str = "Relationship";

/// Tag applied to synchronous relationships.
pub const SYNCHRONOUS: &str = "Synchronous";

/// Tag applied to asynchronous relationships.
pub const ASYNCHRONOUS: &str = "Asynchronous";

/// An ordered, duplicate-free collection of tags.
///
/// Tags preserve insertion order and serialize as a single comma-separated
/// string, matching the workspace file format.
///
/// # Examples
///
/// ```
/// use maquette_core::tags::TagSet;
///
/// let mut tags = TagSet::new();
/// tags.add("Element");
/// tags.add("Person");
/// tags.add("Element"); // already present, ignored
///
/// assert!(tags.contains("Person"));
/// assert_eq!(tags.to_string(), "Element,Person");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// Creates an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag, ignoring duplicates and blank input.
    ///
    /// Returns `true` if the tag was newly added.
    pub fn add(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Removes a tag. Returns `true` if it was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Returns `true` if the tag is present.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Iterates over the tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Returns `true` if no tags are present.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tags.join(","))
    }
}

impl FromStr for TagSet {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tags = Self::new();
        for tag in s.split(',') {
            tags.add(tag);
        }
        Ok(tags)
    }
}

impl Serialize for TagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(value.parse().expect("parsing a tag set is infallible"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_deduplicates_and_preserves_order() {
        let mut tags = TagSet::new();
        assert!(tags.add("Element"));
        assert!(tags.add("Container"));
        assert!(!tags.add("Element"));

        let collected: Vec<_> = tags.iter().collect();
        assert_eq!(collected, vec!["Element", "Container"]);
    }

    #[test]
    fn add_ignores_blank_tags() {
        let mut tags = TagSet::new();
        assert!(!tags.add(""));
        assert!(!tags.add("   "));
        assert!(tags.is_empty());
    }

    #[test]
    fn remove_drops_present_tags() {
        let mut tags = TagSet::new();
        tags.add("Element");
        tags.add("Person");

        assert!(tags.remove("Element"));
        assert!(!tags.remove("Element"));
        assert_eq!(tags.to_string(), "Person");
    }

    #[test]
    fn parses_comma_separated_strings() {
        let tags: TagSet = "Element, Person,,Person".parse().unwrap();
        let collected: Vec<_> = tags.iter().collect();
        assert_eq!(collected, vec!["Element", "Person"]);
    }

    #[test]
    fn serializes_as_a_single_string() {
        let mut tags = TagSet::new();
        tags.add("Element");
        tags.add("Software System");

        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, "\"Element,Software System\"");

        let back: TagSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);
    }
}

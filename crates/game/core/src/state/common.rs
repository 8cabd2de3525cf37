use std::borrow::Borrow;
use std::fmt;

/// Whether `raw` can be used as a quest or item identifier.
///
/// Identifiers are written into comma separated save lists and `item=effect`
/// pairs, so they must be non-empty without surrounding whitespace and must
/// not contain `,`, `=` or control characters.
pub fn is_well_formed_id(raw: &str) -> bool {
    !raw.is_empty()
        && raw.trim() == raw
        && !raw.contains([',', '='])
        && !raw.chars().any(char::is_control)
}

/// Identifier of a quest definition in the content registry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QuestId(pub String);

impl QuestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// See [`is_well_formed_id`].
    pub fn is_well_formed(&self) -> bool {
        is_well_formed_id(&self.0)
    }
}

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for QuestId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for QuestId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Identifier of an item definition in the content registry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// See [`is_well_formed_id`].
    pub fn is_well_formed(&self) -> bool {
        is_well_formed_id(&self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_ids() {
        assert!(QuestId::new("first_steps").is_well_formed());
        assert!(ItemId::new("health potion").is_well_formed());

        for raw in ["", " padded", "a,b", "sword=strength:5", "line\nbreak", "tab\t"] {
            assert!(!is_well_formed_id(raw), "{raw:?} should be rejected");
        }
    }
}

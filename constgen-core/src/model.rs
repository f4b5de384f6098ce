//! Tag and layer data model.

use std::{collections::BTreeSet, fmt};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Number of layer slots a Unity project has.
pub const LAYER_COUNT: usize = 32;

/// Tags Unity defines in every project. They are not stored in
/// `TagManager.asset` but are reported ahead of user tags.
pub const BUILTIN_TAGS: &[&str] = &[
    "Untagged",
    "Respawn",
    "Finish",
    "EditorOnly",
    "MainCamera",
    "Player",
    "GameController",
];

/// One layer slot. Unnamed slots carry an empty name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerEntry {
    pub index: u8,
    pub name: String,
}

impl LayerEntry {
    pub fn new(index: u8, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }

    /// Whether the slot has a name and therefore gets emitted.
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }

    /// Bitmask selecting only this layer.
    pub fn mask(&self) -> u32 {
        1u32 << self.index
    }
}

/// The full set of 32 layer slots, ordered by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layers {
    slots: Vec<LayerEntry>,
}

impl Layers {
    /// All 32 slots unnamed.
    pub fn empty() -> Self {
        Self::from_names(std::iter::empty::<String>())
    }

    /// Build from names in slot order. Missing trailing slots are left
    /// unnamed; anything beyond slot 31 is dropped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = names.into_iter();
        let slots = (0..LAYER_COUNT as u8)
            .map(|index| {
                let name: String = names.next().map(Into::into).unwrap_or_default();
                LayerEntry::new(index, name.trim().to_string())
            })
            .collect();
        Self { slots }
    }

    /// Name the slot at `index`. Indices outside `0..32` leave the set unchanged.
    pub fn with(mut self, index: u8, name: impl Into<String>) -> Self {
        if let Some(slot) = self.slots.get_mut(usize::from(index)) {
            slot.name = name.into();
        }
        self
    }

    /// All slots, including unnamed ones.
    pub fn slots(&self) -> &[LayerEntry] {
        &self.slots
    }

    /// Named slots in ascending index order.
    pub fn named(&self) -> impl Iterator<Item = &LayerEntry> {
        self.slots.iter().filter(|slot| slot.is_named())
    }

    pub fn get(&self, index: u8) -> Option<&LayerEntry> {
        self.slots.get(usize::from(index))
    }
}

impl Default for Layers {
    fn default() -> Self {
        Self::empty()
    }
}

/// A constant value carried by a generated member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(i64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

/// Name → value pairs encoded by a generated type, in declaration order.
///
/// Equality through [`Snapshot::same_members`] ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: IndexMap<String, Value>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a member, returning the previous value for that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Member names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Unordered view of the (name, value) pairs.
    pub fn to_set(&self) -> BTreeSet<(&str, &Value)> {
        self.iter().collect()
    }

    /// True when both snapshots hold the same pairs, regardless of order.
    pub fn same_members(&self, other: &Snapshot) -> bool {
        self.len() == other.len() && self.to_set() == other.to_set()
    }
}

impl<K, V> FromIterator<(K, V)> for Snapshot
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut snapshot = Snapshot::new();
        for (name, value) in iter {
            snapshot.insert(name, value);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_always_have_32_slots() {
        assert_eq!(Layers::empty().slots().len(), LAYER_COUNT);
        assert_eq!(Layers::from_names(["Default"]).slots().len(), LAYER_COUNT);

        let too_many: Vec<String> = (0..40).map(|i| format!("L{}", i)).collect();
        let layers = Layers::from_names(too_many);
        assert_eq!(layers.slots().len(), LAYER_COUNT);
        assert_eq!(layers.get(31).unwrap().name, "L31");
    }

    #[test]
    fn test_layers_named_skips_empty_slots() {
        let layers = Layers::from_names(["Default", "", "", "Water"]);
        let named: Vec<_> = layers.named().map(|l| (l.index, l.name.as_str())).collect();
        assert_eq!(named, vec![(0, "Default"), (3, "Water")]);
    }

    #[test]
    fn test_whitespace_only_layer_name_is_unnamed() {
        let layers = Layers::from_names(["Default", "   "]);
        assert!(!layers.get(1).unwrap().is_named());
    }

    #[test]
    fn test_layers_with_out_of_range_is_ignored() {
        let layers = Layers::empty().with(32, "Nope");
        assert_eq!(layers.named().count(), 0);
    }

    #[test]
    fn test_layer_mask() {
        for index in 0..LAYER_COUNT as u8 {
            assert_eq!(
                LayerEntry::new(index, "X").mask(),
                2u32.pow(u32::from(index))
            );
        }
    }

    #[test]
    fn test_snapshot_order_insensitive() {
        let a: Snapshot = [("Untagged", "Untagged"), ("Player", "Player")]
            .into_iter()
            .collect();
        let b: Snapshot = [("Player", "Player"), ("Untagged", "Untagged")]
            .into_iter()
            .collect();

        assert!(a.same_members(&b));
        assert_eq!(a.names().collect::<Vec<_>>(), vec!["Untagged", "Player"]);
    }

    #[test]
    fn test_snapshot_detects_changed_value() {
        let a: Snapshot = [("Water", 4i64)].into_iter().collect();
        let b: Snapshot = [("Water", 5i64)].into_iter().collect();
        assert!(!a.same_members(&b));
    }

    #[test]
    fn test_value_serializes_untagged() {
        let snapshot: Snapshot = [("Player", Value::from("Player")), ("Water", Value::from(4i64))]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"Player":"Player","Water":4}"#);
    }
}

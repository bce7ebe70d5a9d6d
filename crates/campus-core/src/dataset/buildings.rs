//! Ordered building table
//!
//! Deserializes from a map, keeping file order and rejecting a key that
//! appears twice.

use std::collections::HashSet;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::graph::types::LocationInfo;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buildings(Vec<(String, LocationInfo)>);

impl Buildings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a building; returns false if `name` is already listed verbatim
    pub fn insert(&mut self, name: impl Into<String>, info: LocationInfo) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push((name, info));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|(existing, _)| existing == name)
    }

    pub fn get(&self, name: &str) -> Option<&LocationInfo> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, info)| info)
    }

    /// Buildings in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocationInfo)> {
        self.0.iter().map(|(name, info)| (name.as_str(), info))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, LocationInfo)> for Buildings {
    fn from_iter<I: IntoIterator<Item = (String, LocationInfo)>>(iter: I) -> Self {
        let mut buildings = Buildings::new();
        for (name, info) in iter {
            buildings.insert(name, info);
        }
        buildings
    }
}

impl Serialize for Buildings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, info) in &self.0 {
            map.serialize_entry(name, info)?;
        }
        map.end()
    }
}

struct BuildingsVisitor;

impl<'de> Visitor<'de> for BuildingsVisitor {
    type Value = Buildings;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of building names to building details")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Buildings, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        let mut seen = HashSet::new();
        while let Some((name, info)) = access.next_entry::<String, LocationInfo>()? {
            if !seen.insert(name.clone()) {
                return Err(de::Error::custom(format!("duplicate building `{}`", name)));
            }
            entries.push((name, info));
        }
        Ok(Buildings(entries))
    }
}

impl<'de> Deserialize<'de> for Buildings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BuildingsVisitor)
    }
}

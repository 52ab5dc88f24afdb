//! Snapshot input model.
//!
//! A [`Snapshot`] is one period's validated ranking document. Values are
//! immutable once parsed; the delta engines only borrow them.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Vehicle class tag partitioning the model lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassTag {
    /// Battery electric vehicle
    #[serde(rename = "BEV")]
    Bev,
    /// Plug-in hybrid electric vehicle
    #[serde(rename = "PHEV")]
    Phev,
}

impl ClassTag {
    /// Canonical label, as used in documents and alert messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassTag::Bev => "BEV",
            ClassTag::Phev => "PHEV",
        }
    }

    /// Name of the snapshot document array holding this class
    pub fn rankings_field(&self) -> &'static str {
        match self {
            ClassTag::Bev => "bev_rankings",
            ClassTag::Phev => "phev_rankings",
        }
    }
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite identity of a ranked model within one class list
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey {
    pub manufacturer: String,
    pub model: String,
}

impl EntityKey {
    pub fn new(manufacturer: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.manufacturer, self.model)
    }
}

/// One ranked model's sales record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEntry {
    pub manufacturer: String,
    pub model: String,
    /// 1 = best; unique within its list
    pub rank: u32,
    pub sales_units: u64,
}

impl ModelEntry {
    pub fn new(
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        rank: u32,
        sales_units: u64,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
            rank,
            sales_units,
        }
    }

    /// Identity key used to join entries across snapshots
    pub fn key(&self) -> EntityKey {
        EntityKey::new(self.manufacturer.clone(), self.model.clone())
    }
}

/// Largest unit count accepted anywhere in a snapshot.
///
/// Changes are signed, so every count must fit in an `i64`.
pub const MAX_UNITS: u64 = i64::MAX as u64;

/// Per-manufacturer sales totals; `total == bev + phev`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerTotals {
    pub bev: u64,
    pub phev: u64,
    pub total: u64,
}

impl ManufacturerTotals {
    /// Build totals from the two class sums
    ///
    /// `None` when `bev + phev` exceeds [`MAX_UNITS`].
    pub fn from_classes(bev: u64, phev: u64) -> Option<Self> {
        let total = bev.checked_add(phev).filter(|t| *t <= MAX_UNITS)?;
        Some(Self { bev, phev, total })
    }
}

/// Manufacturer totals keyed by name, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManufacturerTotalsTable {
    entries: Vec<(String, ManufacturerTotals)>,
    index: HashMap<String, usize>,
}

impl ManufacturerTotalsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a manufacturer's totals. Replacement keeps the
    /// original position.
    pub fn insert(&mut self, manufacturer: impl Into<String>, totals: ManufacturerTotals) {
        let manufacturer = manufacturer.into();
        match self.index.get(&manufacturer) {
            Some(&pos) => self.entries[pos].1 = totals,
            None => {
                self.index.insert(manufacturer.clone(), self.entries.len());
                self.entries.push((manufacturer, totals));
            }
        }
    }

    pub fn get(&self, manufacturer: &str) -> Option<&ManufacturerTotals> {
        self.index.get(manufacturer).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, manufacturer: &str) -> bool {
        self.index.contains_key(manufacturer)
    }

    /// Iterate in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ManufacturerTotals)> {
        self.entries.iter().map(|(name, t)| (name.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ManufacturerTotals)> for ManufacturerTotalsTable {
    fn from_iter<I: IntoIterator<Item = (String, ManufacturerTotals)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, totals) in iter {
            table.insert(name, totals);
        }
        table
    }
}

impl Serialize for ManufacturerTotalsTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, totals) in &self.entries {
            map.serialize_entry(name, totals)?;
        }
        map.end()
    }
}

/// A validated point-in-time ranking dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Opaque period label, e.g. "Q3 2025"
    pub period: String,
    pub bev_rankings: Vec<ModelEntry>,
    pub phev_rankings: Vec<ModelEntry>,
    pub manufacturer_totals: ManufacturerTotalsTable,
}

impl Snapshot {
    /// Model list for the given class tag
    pub fn rankings(&self, class: ClassTag) -> &[ModelEntry] {
        match class {
            ClassTag::Bev => &self.bev_rankings,
            ClassTag::Phev => &self.phev_rankings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_key_distinguishes_join_character() {
        // "A_B" + "C" and "A" + "B_C" collide under a string join
        let a = EntityKey::new("A_B", "C");
        let b = EntityKey::new("A", "B_C");
        assert_ne!(a, b);
    }

    #[test]
    fn test_totals_table_keeps_document_order() {
        let table: ManufacturerTotalsTable = vec![
            ("Tesla".to_string(), ManufacturerTotals::from_classes(10, 0).unwrap()),
            ("BYD".to_string(), ManufacturerTotals::from_classes(5, 5).unwrap()),
            ("Tesla".to_string(), ManufacturerTotals::from_classes(20, 0).unwrap()),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = table.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Tesla", "BYD"]);
        assert_eq!(table.get("Tesla").map(|t| t.total), Some(20));
    }

    #[test]
    fn test_totals_table_serializes_as_object() {
        let mut table = ManufacturerTotalsTable::new();
        table.insert("Zeekr", ManufacturerTotals::from_classes(3, 0).unwrap());
        table.insert("Audi", ManufacturerTotals::from_classes(1, 2).unwrap());
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"{"Zeekr":{"bev":3,"phev":0,"total":3},"Audi":{"bev":1,"phev":2,"total":3}}"#
        );
    }

    #[test]
    fn test_class_tag_labels() {
        assert_eq!(ClassTag::Bev.to_string(), "BEV");
        assert_eq!(ClassTag::Phev.rankings_field(), "phev_rankings");
        assert_eq!(serde_json::to_string(&ClassTag::Phev).unwrap(), "\"PHEV\"");
    }
}

//! The material price catalog.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::MaterialLine;

/// Mapping from material name to unit price.
///
/// Keys are normalized (trimmed, lower-cased) on both insert and lookup, so
/// manual entry, price-list overrides, and model-inferred names all match
/// under one rule.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    prices: HashMap<String, Decimal>,
}

/// The one normalization rule for catalog keys.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl MaterialCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The builtin catalog of common materials with approximate unit prices.
    ///
    /// Prices are illustrative; load a price list to reflect local market
    /// conditions.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert("2x4", dec!(3.50)); // price per linear foot
        catalog.insert("drywall sheet", dec!(13.00)); // per 4x8 sheet
        catalog.insert("nails (per lb)", dec!(2.50));
        catalog.insert("paint (per gallon)", dec!(25.00));
        catalog.insert("concrete (per bag)", dec!(6.50));
        catalog
    }

    /// Insert or replace a price.
    pub fn insert(&mut self, name: impl AsRef<str>, price: Decimal) {
        self.prices.insert(normalize(name.as_ref()), price);
    }

    /// Look up a unit price.
    pub fn price_of(&self, name: &str) -> Option<Decimal> {
        self.prices.get(&normalize(name)).copied()
    }

    /// Whether the catalog knows this material.
    pub fn contains(&self, name: &str) -> bool {
        self.prices.contains_key(&normalize(name))
    }

    /// Overlay another catalog: matching keys are replaced, new keys added.
    pub fn apply_override(&mut self, other: &MaterialCatalog) {
        for (name, price) in &other.prices {
            self.prices.insert(name.clone(), *price);
        }
    }

    /// Resolve `(name, quantity)` pairs into material lines, attaching the
    /// catalog price where one exists. Unmatched names become unpriced
    /// lines rather than being dropped.
    pub fn resolve(&self, quantities: &[(String, Decimal)]) -> Vec<MaterialLine> {
        quantities
            .iter()
            .map(|(name, quantity)| match self.price_of(name) {
                Some(price) => MaterialLine::priced(name.clone(), *quantity, price),
                None => MaterialLine::unpriced(name.clone(), *quantity),
            })
            .collect()
    }

    /// All entries, sorted by name for stable display.
    pub fn entries(&self) -> Vec<(String, Decimal)> {
        let mut entries: Vec<_> = self
            .prices
            .iter()
            .map(|(name, price)| (name.clone(), *price))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

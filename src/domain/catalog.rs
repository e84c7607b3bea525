//! In-memory index over the loaded catalog.

use std::collections::HashMap;

use tracing::warn;

use super::{
    entities::{CatalogItem, ItemRecord},
    names::LabelMode,
    tier::Tier,
};

/// Number of items shown in the highlight panel.
pub const TOP_PICKS: usize = 3;

/// Immutable view of the catalog with tier and display name derived once per
/// record. Rebuilt from scratch whenever the catalog or label mode changes.
#[derive(Clone, Debug, Default)]
pub struct CatalogIndex {
    items: Vec<CatalogItem>,
    by_display_name: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    /// Item positions per tier, in `Tier::ALL` order, value descending.
    tiers: [Vec<usize>; 5],
    /// All item positions, value descending.
    ranked: Vec<usize>,
}

impl CatalogIndex {
    pub fn build(records: Vec<ItemRecord>, label_mode: LabelMode) -> Self {
        let items: Vec<CatalogItem> = records
            .into_iter()
            .map(|record| CatalogItem::derive(record, label_mode))
            .collect();

        let mut by_display_name = HashMap::with_capacity(items.len());
        let mut by_name = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            by_name.entry(item.record.name.clone()).or_insert(idx);
            if by_display_name.contains_key(&item.display_name) {
                warn!(
                    display_name = %item.display_name,
                    "duplicate display name in catalog; keeping the first entry"
                );
                continue;
            }
            by_display_name.insert(item.display_name.clone(), idx);
        }

        // sort_by_key is stable, so equal values keep catalog order.
        let mut ranked: Vec<usize> = (0..items.len()).collect();
        ranked.sort_by_key(|&idx| std::cmp::Reverse(items[idx].value()));

        let mut tiers: [Vec<usize>; 5] = Default::default();
        for &idx in &ranked {
            tiers[items[idx].tier.index()].push(idx);
        }

        Self {
            items,
            by_display_name,
            by_name,
            tiers,
            ranked,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Display names in catalog order, for populating the pickers.
    pub fn options(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|item| item.display_name.as_str())
            .collect()
    }

    pub fn get(&self, display_name: &str) -> Option<&CatalogItem> {
        self.by_display_name
            .get(display_name)
            .map(|&idx| &self.items[idx])
    }

    /// Lookup by canonical catalog name, independent of the label mode.
    pub fn get_by_name(&self, name: &str) -> Option<&CatalogItem> {
        self.by_name.get(name).map(|&idx| &self.items[idx])
    }

    pub fn contains(&self, display_name: &str) -> bool {
        self.by_display_name.contains_key(display_name)
    }

    pub fn tier_group(&self, tier: Tier) -> Vec<&CatalogItem> {
        self.tiers[tier.index()]
            .iter()
            .map(|&idx| &self.items[idx])
            .collect()
    }

    pub fn tier_count(&self, tier: Tier) -> usize {
        self.tiers[tier.index()].len()
    }

    /// The `n` most valuable items, value descending, ties in catalog order.
    pub fn top_n(&self, n: usize) -> Vec<&CatalogItem> {
        self.ranked
            .iter()
            .take(n)
            .map(|&idx| &self.items[idx])
            .collect()
    }
}

use super::{
    names::{display_name_for, LabelMode},
    tier::Tier,
};

/// Validated catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRecord {
    pub name: String,
    pub value: u64,
    pub image: String,
    pub category: String,
    pub trend: String,
}

impl ItemRecord {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
            image: String::new(),
            category: String::new(),
            trend: String::new(),
        }
    }

    /// True when the market marks the item as overpaid.
    pub fn is_hot(&self) -> bool {
        self.trend.trim().eq_ignore_ascii_case("overpaid")
    }
}

/// A record together with the fields derived from it when the index is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogItem {
    pub record: ItemRecord,
    pub tier: Tier,
    pub display_name: String,
}

impl CatalogItem {
    pub fn derive(record: ItemRecord, mode: LabelMode) -> Self {
        Self {
            tier: Tier::classify(record.value),
            display_name: display_name_for(&record.name, mode),
            record,
        }
    }

    pub fn value(&self) -> u64 {
        self.record.value
    }
}

/// One side of a trade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Mine,
    Theirs,
}

impl Side {
    pub fn title(&self) -> &'static str {
        match self {
            Side::Mine => "You give",
            Side::Theirs => "You receive",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Side::Mine => "📤",
            Side::Theirs => "📥",
        }
    }

    pub fn total_label(&self) -> &'static str {
        match self {
            Side::Mine => "Your value",
            Side::Theirs => "Their value",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_computes_tier_and_label() {
        let item = CatalogItem::derive(ItemRecord::new("Kitsune", 120_000_000), LabelMode::Bilingual);
        assert_eq!(item.tier, Tier::SS);
        assert_eq!(item.display_name, "Kitsune (키츠네)");

        let plain = CatalogItem::derive(ItemRecord::new("Kitsune", 10), LabelMode::CanonicalOnly);
        assert_eq!(plain.tier, Tier::C);
        assert_eq!(plain.display_name, "Kitsune");
    }

    #[test]
    fn test_is_hot() {
        let mut record = ItemRecord::new("Leopard", 1);
        assert!(!record.is_hot());
        record.trend = "Overpaid".to_string();
        assert!(record.is_hot());
        record.trend = " overpaid ".to_string();
        assert!(record.is_hot());
        record.trend = "Stable".to_string();
        assert!(!record.is_hot());
    }
}

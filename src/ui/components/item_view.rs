use crate::domain::{short_label, CatalogIndex, CatalogItem, Tier};
use crate::util::format_value;

/// Render-ready copy of a catalog item.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemView {
    pub display_name: String,
    pub short_name: String,
    pub image: String,
    pub value_label: String,
    pub category: String,
    pub is_hot: bool,
    pub tier: Tier,
}

impl From<&CatalogItem> for ItemView {
    fn from(item: &CatalogItem) -> Self {
        Self {
            short_name: short_label(&item.display_name).to_string(),
            display_name: item.display_name.clone(),
            image: item.record.image.clone(),
            value_label: format_value(item.value()),
            category: item.record.category.clone(),
            is_hot: item.record.is_hot(),
            tier: item.tier,
        }
    }
}

/// A selected name, resolved against the current index if possible.
#[derive(Clone, Debug, PartialEq)]
pub struct ChipView {
    pub display_name: String,
    pub item: Option<ItemView>,
}

impl ChipView {
    pub fn resolve(index: &CatalogIndex, display_name: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            item: index.get(display_name).map(ItemView::from),
        }
    }
}

use std::{path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    catalog::CatalogIndex,
    entities::Side,
    evaluation::{evaluate_trade, ValuationResult},
    names::LabelMode,
};

/// Default catalog file, resolved against the working directory.
pub const DEFAULT_CATALOG_FILE: &str = "fruits_data.json";

/// Environment override for the catalog path.
pub const CATALOG_PATH_ENV: &str = "FRUIT_TRADE_CATALOG";

/// User settings persisted between runs. Trade selections are never stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub label_mode: LabelMode,
}

impl Settings {
    /// Catalog path to read: environment override, then setting, then default.
    pub fn resolved_catalog_path(&self) -> PathBuf {
        Self::resolve_catalog_path(std::env::var_os(CATALOG_PATH_ENV).map(PathBuf::from), self)
    }

    fn resolve_catalog_path(env_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
        env_override
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| settings.catalog_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE))
    }
}

/// Outcome of the most recent catalog load, shown on the settings page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    #[default]
    NotLoaded,
    Loaded {
        path: PathBuf,
        items: usize,
        rejected: usize,
    },
    Unavailable {
        path: PathBuf,
        reason: String,
    },
}

/// Per-session state. The index is shared read-only; selections belong to
/// this session alone.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub catalog: Arc<CatalogIndex>,
    pub catalog_status: CatalogStatus,
    pub my_selection: Vec<String>,
    pub their_selection: Vec<String>,
    pub settings: Settings,
}

impl AppState {
    pub fn selection(&self, side: Side) -> &[String] {
        match side {
            Side::Mine => &self.my_selection,
            Side::Theirs => &self.their_selection,
        }
    }

    fn selection_mut(&mut self, side: Side) -> &mut Vec<String> {
        match side {
            Side::Mine => &mut self.my_selection,
            Side::Theirs => &mut self.their_selection,
        }
    }

    pub fn add_selection(&mut self, side: Side, display_name: impl Into<String>) {
        self.selection_mut(side).push(display_name.into());
    }

    /// Removes the entry at `position`; out-of-range positions are ignored.
    pub fn remove_selection(&mut self, side: Side, position: usize) -> Option<String> {
        let selection = self.selection_mut(side);
        (position < selection.len()).then(|| selection.remove(position))
    }

    pub fn clear_selections(&mut self) {
        self.my_selection.clear();
        self.their_selection.clear();
    }

    pub fn has_selection(&self) -> bool {
        !self.my_selection.is_empty() || !self.their_selection.is_empty()
    }

    pub fn valuation(&self) -> ValuationResult {
        evaluate_trade(&self.catalog, &self.my_selection, &self.their_selection)
    }

    /// Swaps in a freshly built index. Selections are carried over by
    /// canonical name, so a label mode change keeps the trade intact. Items
    /// dropped from the catalog keep their old label and count as zero.
    pub fn replace_catalog(&mut self, index: CatalogIndex, status: CatalogStatus) {
        let previous = std::mem::replace(&mut self.catalog, Arc::new(index));
        self.catalog_status = status;

        let mut stale = 0;
        for selection in [&mut self.my_selection, &mut self.their_selection] {
            stale += rekey_selection(selection, &previous, &self.catalog);
        }
        if stale > 0 {
            warn!(stale, "selected items are missing from the new catalog; counting them as zero");
        }
    }

    pub fn apply_persisted(&mut self, persisted: Settings) {
        self.settings = persisted;
    }

    pub fn to_persisted(&self) -> Settings {
        self.settings.clone()
    }
}

/// Rewrites each entry to its label in `next`. Returns how many entries
/// `next` cannot resolve.
fn rekey_selection(selection: &mut [String], previous: &CatalogIndex, next: &CatalogIndex) -> usize {
    let mut stale = 0;
    for entry in selection.iter_mut() {
        let canonical = previous
            .get(entry.as_str())
            .map(|item| item.record.name.as_str())
            .unwrap_or(entry.as_str());
        match next.get_by_name(canonical).or_else(|| next.get(entry.as_str())) {
            Some(item) => *entry = item.display_name.clone(),
            None => stale += 1,
        }
    }
    stale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{entities::ItemRecord, evaluation::TradeOutcome};

    fn state() -> AppState {
        let mut state = AppState::default();
        state.replace_catalog(
            CatalogIndex::build(
                vec![ItemRecord::new("Gas", 300), ItemRecord::new("Spin", 100)],
                LabelMode::Bilingual,
            ),
            CatalogStatus::NotLoaded,
        );
        state
    }

    #[test]
    fn test_selection_flow() {
        let mut state = state();
        assert!(!state.has_selection());
        state.add_selection(Side::Mine, "Spin (회전)");
        state.add_selection(Side::Mine, "Spin (회전)");
        state.add_selection(Side::Theirs, "Gas (가스)");
        assert!(state.has_selection());

        let result = state.valuation();
        assert_eq!(result.my_total, 200);
        assert_eq!(result.their_total, 300);
        assert_eq!(result.outcome, TradeOutcome::TheirGain);

        assert_eq!(state.remove_selection(Side::Mine, 0).as_deref(), Some("Spin (회전)"));
        assert_eq!(state.remove_selection(Side::Mine, 5), None);
        assert_eq!(state.selection(Side::Mine).len(), 1);

        state.clear_selections();
        assert!(!state.has_selection());
        assert_eq!(state.valuation().outcome, TradeOutcome::Even);
    }

    #[test]
    fn test_label_mode_switch_keeps_trade() {
        let mut state = state();
        state.add_selection(Side::Mine, "Spin (회전)");
        state.add_selection(Side::Theirs, "Gas (가스)");
        let before = state.valuation();

        state.replace_catalog(
            CatalogIndex::build(
                vec![ItemRecord::new("Gas", 300), ItemRecord::new("Spin", 100)],
                LabelMode::CanonicalOnly,
            ),
            CatalogStatus::NotLoaded,
        );
        assert_eq!(state.selection(Side::Mine), ["Spin".to_string()]);
        assert_eq!(state.selection(Side::Theirs), ["Gas".to_string()]);

        let after = state.valuation();
        assert_eq!(after.my_total, before.my_total);
        assert_eq!(after.their_total, before.their_total);
        assert_eq!(after.outcome, TradeOutcome::TheirGain);
        assert!(after.unresolved.is_empty());
    }

    #[test]
    fn test_removed_item_stays_unresolved_after_reload() {
        let mut state = state();
        state.add_selection(Side::Mine, "Spin (회전)");
        state.add_selection(Side::Theirs, "Gas (가스)");
        state.replace_catalog(
            CatalogIndex::build(vec![ItemRecord::new("Gas", 500)], LabelMode::Bilingual),
            CatalogStatus::NotLoaded,
        );

        let result = state.valuation();
        assert_eq!(result.my_total, 0);
        assert_eq!(result.their_total, 500);
        assert_eq!(result.unresolved, vec!["Spin (회전)".to_string()]);
    }

    #[test]
    fn test_catalog_path_resolution() {
        let mut settings = Settings::default();
        assert_eq!(
            Settings::resolve_catalog_path(None, &settings),
            PathBuf::from(DEFAULT_CATALOG_FILE)
        );

        settings.catalog_path = Some(PathBuf::from("/data/fruits.json"));
        assert_eq!(
            Settings::resolve_catalog_path(None, &settings),
            PathBuf::from("/data/fruits.json")
        );
        assert_eq!(
            Settings::resolve_catalog_path(Some(PathBuf::from("/env/fruits.json")), &settings),
            PathBuf::from("/env/fruits.json")
        );
        assert_eq!(
            Settings::resolve_catalog_path(Some(PathBuf::new()), &settings),
            PathBuf::from("/data/fruits.json")
        );
    }

    #[test]
    fn test_settings_json_defaults() {
        let settings: Settings = serde_json::from_str("{}").expect("empty object parses");
        assert_eq!(settings, Settings::default());

        let json = serde_json::to_string(&Settings {
            catalog_path: Some(PathBuf::from("x.json")),
            label_mode: LabelMode::CanonicalOnly,
        })
        .expect("serializes");
        let back: Settings = serde_json::from_str(&json).expect("round trip");
        assert_eq!(back.label_mode, LabelMode::CanonicalOnly);
    }
}

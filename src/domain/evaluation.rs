use tracing::debug;

use super::catalog::CatalogIndex;
use crate::util::{format_value, version::APP_NAME};

/// Result of comparing the two sides, named relative to
/// `their_total - my_total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TradeOutcome {
    /// The side you receive is worth more.
    TheirGain,
    /// The side you give is worth more.
    MyGain,
    Even,
}

impl TradeOutcome {
    pub fn from_difference(difference: i64) -> Self {
        match difference {
            d if d > 0 => TradeOutcome::TheirGain,
            d if d < 0 => TradeOutcome::MyGain,
            _ => TradeOutcome::Even,
        }
    }

    pub fn headline(&self, difference: i64) -> String {
        let amount = format_value(difference.unsigned_abs());
        match self {
            TradeOutcome::TheirGain => format!("🚀 Great deal! (+{amount})"),
            TradeOutcome::MyGain => format!("😭 You are overpaying (-{amount})"),
            TradeOutcome::Even => "⚖️ Perfectly fair trade".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValuationResult {
    pub my_total: u64,
    pub their_total: u64,
    pub difference: i64,
    pub outcome: TradeOutcome,
    /// Selected names the index could not resolve; counted as zero.
    pub unresolved: Vec<String>,
}

impl ValuationResult {
    pub fn headline(&self) -> String {
        self.outcome.headline(self.difference)
    }
}

/// Sums both selections against the index. Every occurrence of a name counts,
/// so selecting an item twice adds its value twice.
pub fn evaluate_trade<S: AsRef<str>>(
    index: &CatalogIndex,
    mine: &[S],
    theirs: &[S],
) -> ValuationResult {
    let mut unresolved = Vec::new();
    let my_total = side_total(index, mine, &mut unresolved);
    let their_total = side_total(index, theirs, &mut unresolved);

    let difference = to_signed(their_total) - to_signed(my_total);

    if !unresolved.is_empty() {
        debug!(
            count = unresolved.len(),
            names = ?unresolved,
            "selection references items missing from the catalog; counting them as zero"
        );
    }

    ValuationResult {
        my_total,
        their_total,
        difference,
        outcome: TradeOutcome::from_difference(difference),
        unresolved,
    }
}

fn side_total<S: AsRef<str>>(
    index: &CatalogIndex,
    selection: &[S],
    unresolved: &mut Vec<String>,
) -> u64 {
    selection.iter().fold(0_u64, |total, name| {
        let name = name.as_ref();
        match index.get(name) {
            Some(item) => total.saturating_add(item.value()),
            None => {
                unresolved.push(name.to_string());
                total
            }
        }
    })
}

fn to_signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Plain-text summary meant to be pasted into a chat.
pub fn share_summary<S: AsRef<str>>(result: &ValuationResult, mine: &[S], theirs: &[S]) -> String {
    format!(
        "[{APP_NAME} result]\n\
         📤 Me: {mine}\n\
         📥 Them: {theirs}\n\
         ----------------\n\
         📊 {headline}\n\
         💰 Me: {my_total} vs Them: {their_total}",
        mine = join_or_none(mine),
        theirs = join_or_none(theirs),
        headline = result.headline(),
        my_total = format_value(result.my_total),
        their_total = format_value(result.their_total),
    )
}

fn join_or_none<S: AsRef<str>>(names: &[S]) -> String {
    if names.is_empty() {
        "None".to_string()
    } else {
        names
            .iter()
            .map(|name| name.as_ref())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{entities::ItemRecord, names::LabelMode};

    fn index() -> CatalogIndex {
        CatalogIndex::build(
            vec![
                ItemRecord::new("A", 1_000_000),
                ItemRecord::new("B", 2_000_000),
                ItemRecord::new("C", 500_000),
            ],
            LabelMode::Bilingual,
        )
    }

    #[test]
    fn test_their_gain() {
        let result = evaluate_trade(&index(), &["A", "C"], &["B"]);
        assert_eq!(result.my_total, 1_500_000);
        assert_eq!(result.their_total, 2_000_000);
        assert_eq!(result.difference, 500_000);
        assert_eq!(result.outcome, TradeOutcome::TheirGain);
        assert!(result.unresolved.is_empty());
    }

    #[test]
    fn test_my_gain() {
        let result = evaluate_trade(&index(), &["B"], &["C"]);
        assert_eq!(result.difference, -1_500_000);
        assert_eq!(result.outcome, TradeOutcome::MyGain);
    }

    #[test]
    fn test_empty_selections_are_even() {
        let empty: [&str; 0] = [];
        let result = evaluate_trade(&index(), &empty, &empty);
        assert_eq!(result.my_total, 0);
        assert_eq!(result.their_total, 0);
        assert_eq!(result.difference, 0);
        assert_eq!(result.outcome, TradeOutcome::Even);

        let on_empty_catalog = evaluate_trade(&CatalogIndex::default(), &empty, &empty);
        assert_eq!(on_empty_catalog.outcome, TradeOutcome::Even);
    }

    #[test]
    fn test_repeated_name_counts_twice() {
        let result = evaluate_trade(&index(), &["A", "A"], &[]);
        assert_eq!(result.my_total, 2_000_000);
    }

    #[test]
    fn test_same_item_on_both_sides() {
        let result = evaluate_trade(&index(), &["B"], &["B"]);
        assert_eq!(result.outcome, TradeOutcome::Even);
        assert_eq!(result.my_total, 2_000_000);
    }

    #[test]
    fn test_unknown_name_counts_as_zero() {
        let result = evaluate_trade(&index(), &["A", "Ghost Fruit"], &["C"]);
        assert_eq!(result.my_total, 1_000_000);
        assert_eq!(result.unresolved, vec!["Ghost Fruit".to_string()]);
        assert_eq!(result.outcome, TradeOutcome::MyGain);
    }

    #[test]
    fn test_share_summary() {
        let mine = vec!["A".to_string(), "C".to_string()];
        let theirs: Vec<String> = Vec::new();
        let result = evaluate_trade(&index(), &mine, &theirs);
        let text = share_summary(&result, &mine, &theirs);
        assert!(text.contains("Me: A, C"));
        assert!(text.contains("Them: None"));
        assert!(text.contains("(-$1,500,000)"));
        assert!(text.contains("Me: $1,500,000 vs Them: $0"));
    }
}

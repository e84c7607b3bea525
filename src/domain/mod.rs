//! Domain logic for trade valuation lives here.

pub mod app_state;
pub mod catalog;
pub mod codes;
pub mod entities;
pub mod evaluation;
pub mod names;
pub mod tier;

#[allow(unused_imports)]
pub use app_state::{AppState, CatalogStatus, Settings};
#[allow(unused_imports)]
pub use catalog::{CatalogIndex, TOP_PICKS};
#[allow(unused_imports)]
pub use codes::{CodeKind, PromoCode, ACTIVE_CODES, RESET_CODES};
#[allow(unused_imports)]
pub use entities::{CatalogItem, ItemRecord, Side};
#[allow(unused_imports)]
pub use evaluation::{evaluate_trade, share_summary, TradeOutcome, ValuationResult};
#[allow(unused_imports)]
pub use names::{display_name, short_label, LabelMode};
#[allow(unused_imports)]
pub use tier::Tier;

//! Class helpers keeping tier, side and outcome styling consistent across pages.

use crate::domain::{CodeKind, TradeOutcome, Tier};

// ============================================
// TIER STYLES
// ============================================

pub fn tier_class(tier: Tier) -> &'static str {
    match tier {
        Tier::SS => "tier-ss",
        Tier::S => "tier-s",
        Tier::A => "tier-a",
        Tier::B => "tier-b",
        Tier::C => "tier-c",
    }
}

pub fn tier_tab(tier: Tier, active: bool) -> String {
    if active {
        format!("tier-tab active {}", tier_class(tier))
    } else {
        format!("tier-tab {}", tier_class(tier))
    }
}

/// Podium styling for the top picks, by rank (0 = first).
pub fn podium(rank: usize) -> (&'static str, &'static str) {
    match rank {
        0 => ("🥇", "podium-card podium-gold"),
        1 => ("🥈", "podium-card podium-silver"),
        _ => ("🥉", "podium-card podium-bronze"),
    }
}

// ============================================
// OUTCOME STYLES
// ============================================

pub fn outcome_banner(outcome: TradeOutcome) -> &'static str {
    match outcome {
        TradeOutcome::TheirGain => "outcome-banner outcome-gain",
        TradeOutcome::MyGain => "outcome-banner outcome-loss",
        TradeOutcome::Even => "outcome-banner outcome-even",
    }
}

pub fn outcome_message(outcome: TradeOutcome) -> &'static str {
    match outcome {
        TradeOutcome::TheirGain => "✅ You come out ahead",
        TradeOutcome::MyGain => "🔻 You lose value on this trade",
        TradeOutcome::Even => "⚖️ Both sides are worth the same",
    }
}

// ============================================
// MISC
// ============================================

pub fn trend_icon(is_hot: bool) -> &'static str {
    if is_hot {
        "🔥"
    } else {
        "➖"
    }
}

pub fn code_kind_badge(kind: CodeKind) -> &'static str {
    match kind {
        CodeKind::StatReset => "kind-badge kind-reset",
        CodeKind::Boost => "kind-badge kind-boost",
        CodeKind::Title => "kind-badge kind-title",
        CodeKind::Currency => "kind-badge kind-currency",
    }
}

pub fn nav_tab(active: bool) -> &'static str {
    if active {
        "nav-tab active"
    } else {
        "nav-tab"
    }
}

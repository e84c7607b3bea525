//! Redeemable promo codes shown on the codes page. Entered in game through the
//! Twitter-bird button.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeKind {
    StatReset,
    Boost,
    Title,
    Currency,
}

impl CodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            CodeKind::StatReset => "Stat reset",
            CodeKind::Boost => "Boost",
            CodeKind::Title => "Title",
            CodeKind::Currency => "Currency",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PromoCode {
    pub code: &'static str,
    pub reward: &'static str,
    pub kind: CodeKind,
}

const fn promo(code: &'static str, reward: &'static str, kind: CodeKind) -> PromoCode {
    PromoCode { code, reward, kind }
}

pub const RESET_CODES: &[PromoCode] = &[
    promo("SUB2GAMERROBOT_RESET1", "Stat reset", CodeKind::StatReset),
    promo("KITT_RESET", "Stat reset", CodeKind::StatReset),
    promo("Sub2UncleKizaru", "Stat reset", CodeKind::StatReset),
];

pub const ACTIVE_CODES: &[PromoCode] = &[
    promo("AXIORE", "20 min 2x EXP", CodeKind::Boost),
    promo("SUB2GAMERROBOT_EXP1", "30 min 2x EXP", CodeKind::Boost),
    promo("KITTGAMING", "20 min 2x EXP", CodeKind::Boost),
    promo("ENYU_IS_PRO", "20 min 2x EXP", CodeKind::Boost),
    promo("BLUXXY", "20 min 2x EXP", CodeKind::Boost),
    promo("JCWK", "20 min 2x EXP", CodeKind::Boost),
    promo("MAGICBUS", "20 min 2x EXP", CodeKind::Boost),
    promo("STARCODEHEO", "20 min 2x EXP", CodeKind::Boost),
    promo("SUB2CAPTAINMAUI", "20 min 2x EXP", CodeKind::Boost),
    promo("BIGNEWS", "Title 'Bignews'", CodeKind::Title),
    promo("FUDD10", "1 Beli ($1)", CodeKind::Currency),
];

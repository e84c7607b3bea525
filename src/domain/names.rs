//! User-facing item labels.

use serde::{Deserialize, Serialize};

/// Canonical fruit name to Korean label.
const KOREAN_LABELS: &[(&str, &str)] = &[
    ("Kitsune", "키츠네"),
    ("West Dragon", "서쪽 용"),
    ("East Dragon", "동쪽 용"),
    ("Dragon", "용"),
    ("Leopard", "레오파드"),
    ("Dough", "도우(떡)"),
    ("T-Rex", "티렉스"),
    ("Spirit", "스피릿(영혼)"),
    ("Venom", "베놈(독)"),
    ("Control", "컨트롤"),
    ("Mammoth", "맘모스"),
    ("Shadow", "그림자"),
    ("Gravity", "중력"),
    ("Blizzard", "눈보라"),
    ("Pain", "페인"),
    ("Lightning", "번개"),
    ("Portal", "포탈"),
    ("Phoenix", "불사조"),
    ("Sound", "소리"),
    ("Spider", "거미"),
    ("Love", "러브"),
    ("Buddha", "부처(대불)"),
    ("Quake", "흔들"),
    ("Magma", "마그마"),
    ("Ghost", "유령"),
    ("Rubber", "고무"),
    ("Light", "빛"),
    ("Diamond", "다이아"),
    ("Dark", "어둠"),
    ("Sand", "모래"),
    ("Ice", "얼음"),
    ("Flame", "이글"),
    ("Spike", "가시"),
    ("Smoke", "연기"),
    ("Bomb", "폭탄"),
    ("Spring", "용수철"),
    ("Spin", "회전"),
    ("Rocket", "로켓"),
    ("Yeti", "예티"),
    ("Gas", "가스"),
    ("Tiger", "호랑이"),
    ("Fruit Notifier", "탐지기"),
    ("Dark Blade", "요루(닥블)"),
    ("Rumble", "럼블"),
    ("Barrier", "배리어"),
    ("Chop", "동강"),
    ("Falcon", "매"),
];

/// How display names are built from canonical names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelMode {
    /// `"Kitsune (키츠네)"`
    #[default]
    Bilingual,
    /// `"Kitsune"`
    CanonicalOnly,
}

impl LabelMode {
    pub fn name(&self) -> &'static str {
        match self {
            LabelMode::Bilingual => "English + 한국어",
            LabelMode::CanonicalOnly => "English only",
        }
    }
}

pub fn localized_label(canonical: &str) -> Option<&'static str> {
    KOREAN_LABELS
        .iter()
        .find(|(name, _)| *name == canonical)
        .map(|(_, label)| *label)
}

/// Formats a canonical name for display. Unmapped names pass through unchanged.
pub fn display_name(canonical: &str) -> String {
    match localized_label(canonical) {
        Some(label) => format!("{canonical} ({label})"),
        None => canonical.to_string(),
    }
}

pub fn display_name_for(canonical: &str, mode: LabelMode) -> String {
    match mode {
        LabelMode::Bilingual => display_name(canonical),
        LabelMode::CanonicalOnly => canonical.to_string(),
    }
}

/// Drops the localized suffix from a display name, for compact cards.
pub fn short_label(display: &str) -> &str {
    display
        .split_once(" (")
        .map(|(head, _)| head)
        .unwrap_or(display)
        .trim_end()
}

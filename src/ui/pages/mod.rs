pub mod calculator;
pub mod codes;
pub mod settings;
pub mod tiers;

pub use calculator::CalculatorPage;
pub use codes::CodesPage;
pub use settings::SettingsPage;
pub use tiers::TiersPage;

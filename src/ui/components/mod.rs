pub mod item_view;
pub mod outcome_banner;
pub mod side_panel;
pub mod tier_table;
pub mod toast;
pub mod total_box;

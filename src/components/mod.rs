pub mod entity_dialog;
pub mod modal;
pub mod note_dialog;
pub mod record_table;
pub mod searchable_select;
pub mod sidebar;
pub mod stat_card;
pub mod status_badge;
pub mod stock_movement_dialog;

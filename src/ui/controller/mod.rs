pub mod confirm;
pub mod menu;
pub mod query_state;
pub mod selection;

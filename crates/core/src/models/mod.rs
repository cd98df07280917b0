pub mod asset_class;
pub mod commitment;
pub mod investor;
pub mod settings;
pub mod view_state;

pub mod detail_modal;
pub mod filter_panel;
pub mod header;
pub mod pagination;
pub mod search_bar;
pub mod wanted_grid;

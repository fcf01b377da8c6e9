// src/gui/components/mod.rs
pub mod card_board;
pub mod export_bar;
pub mod filter_panel;
pub mod glance_table;
pub mod search_bar;
pub mod status_bar;
pub mod tabs;

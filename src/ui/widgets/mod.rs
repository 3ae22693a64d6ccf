pub mod header;
pub mod popups;
pub mod tree_view;

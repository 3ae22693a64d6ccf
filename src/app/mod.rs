pub mod cli;
pub mod config;
pub mod events;
pub mod input_handler;
pub mod keys;
pub mod state;
pub mod tree_state;

pub use state::*;
pub use tree_state::{RememberedView, TreeViewState, VisibleRow};

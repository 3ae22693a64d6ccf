use crate::medialib::LibraryIndex;
use serde::{Deserialize, Serialize};

/// Automatically saved session state
/// stored in `state.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistentState {
    #[serde(default)]
    pub last_index: Option<LibraryIndex>,
}

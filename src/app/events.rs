use crate::medialib::MediaLibrary;
use crossterm::event::Event;

pub enum AppEvent {
    Input(Event),
    /// Result of a background scan; errors are already rendered to text.
    LibraryScanned(Result<MediaLibrary, String>),
    Tick,
}

/// Requests from input handling that the event loop has to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Rescan,
}

//! TUI type definitions - input modes

/// Current input mode
///
/// The delete prompt is not a mode: it is open exactly while the dashboard
/// has a pending delete, and key handling checks that first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Help,
    /// Typing into the search box, the filter updates live
    Search,
    /// Typing a new URL into the add box
    AddUrl,
}

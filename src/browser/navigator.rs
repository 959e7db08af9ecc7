use crate::error::Result;

/// A component that fetches and renders URLs and owns the back-navigation history.
///
/// The shell never keeps its own history; it only asks the navigator whether a
/// step back is possible.
pub trait Navigator {
    /// Fetch and display a fully-qualified URL
    fn load(&mut self, url: &str) -> Result<()>;

    /// Whether there is an earlier history entry to return to
    fn can_go_back(&self) -> Result<bool>;

    /// Return to the previous history entry
    fn go_back(&mut self) -> Result<()>;

    /// URL currently displayed, if any
    fn current_url(&self) -> Option<String>;

    /// Drain links the page tried to open that the navigator cannot render
    /// (`mailto:`, `tel:`, app schemes), oldest first
    fn take_intercepted_links(&mut self) -> Result<Vec<String>>;
}

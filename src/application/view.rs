// Display surface the services write into

/// A page region addressed by slot or container id.
///
/// Both setters return `false` when the page has no element with that id.
/// Writers treat that as a partial layout and carry on.
pub trait DashboardView: Send + Sync {
    /// Replace a slot's text. The value is plain text, not markup.
    fn set_text(&self, slot_id: &str, value: &str) -> bool;

    /// Replace a container's content with already-rendered markup.
    fn set_html(&self, container_id: &str, html: &str) -> bool;
}

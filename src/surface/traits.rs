//! Render surface abstraction
//!
//! The rendered card list is owned by an external collaborator; the
//! engine only needs a narrow DOM-like contract to hide, reorder, and
//! annotate it. Cards live under a list container located by selector,
//! each keyed by its item identifier; counter and empty-state elements
//! are optional chrome located the same way.

/// Externally-owned render surface holding keyed card elements
pub trait RenderSurface {
    /// Whether any element matches the selector
    fn exists(&self, selector: &str) -> bool;

    /// Keyed card ids under the list container, in current order
    fn card_order(&self, list: &str) -> Vec<String>;

    /// Hidden state of one card
    fn is_hidden(&self, list: &str, id: &str) -> bool;

    /// Show or hide one card
    fn set_hidden(&mut self, list: &str, id: &str, hidden: bool);

    /// Move one card to the end of the container, keeping the others'
    /// relative order
    fn move_to_end(&mut self, list: &str, id: &str);

    /// Replace the text content of the element at the selector
    fn set_text(&mut self, selector: &str, text: &str);

    /// Show or hide the element at the selector
    fn set_element_hidden(&mut self, selector: &str, hidden: bool);
}

//! Reconciliation of a resolved id sequence onto the render surface
//!
//! Side effects only: show/hide, reorder, counter text, empty-state
//! visibility. Cards are never created or destroyed here — the
//! rendering collaborator owns them.

use crate::surface::{Anchors, RenderSurface};

/// Apply the ordered id sequence to the surface
///
/// Cards not mentioned in `ordered_ids` are hidden and keep their
/// relative position; mentioned cards are re-appended in sequence
/// order. Ids with no corresponding card are skipped silently. The
/// counter reads `"<visible> of <total>"` and the empty-state element
/// shows only when the sequence is empty.
///
/// Missing chrome is skipped per target; a missing list container
/// skips the whole pass. Redundant calls with an unchanged sequence
/// perform no surface mutations: hidden state is only flipped when it
/// differs, and the reorder runs only when the mentioned cards are not
/// already an ordered suffix of the container.
pub fn apply(
    ordered_ids: &[String],
    surface: &mut impl RenderSurface,
    anchors: &Anchors,
    total: usize,
) {
    let Some(list) = anchors.list.locate(surface) else {
        return;
    };

    let order = surface.card_order(list);

    for id in &order {
        let hide = !ordered_ids.contains(id);
        if surface.is_hidden(list, id) != hide {
            surface.set_hidden(list, id, hide);
        }
    }

    let existing: Vec<String> = ordered_ids
        .iter()
        .filter(|id| order.contains(id))
        .cloned()
        .collect();
    if !order.ends_with(&existing) {
        for id in &existing {
            surface.move_to_end(list, id);
        }
    }

    if let Some(empty) = anchors.empty.locate(surface) {
        surface.set_element_hidden(empty, !ordered_ids.is_empty());
    }

    if let Some(counter) = anchors.counter.locate(surface) {
        surface.set_text(counter, &format!("{} of {}", ordered_ids.len(), total));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ListingKind;
    use crate::surface::MockSurface;

    fn anchors() -> Anchors {
        Anchors::for_kind(ListingKind::Projects)
    }

    fn surface(card_ids: &[&str]) -> MockSurface {
        MockSurface::new("#projects-list", card_ids)
            .with_element("#projects-count")
            .with_element("#projects-empty")
    }

    fn ids(slugs: &[&str]) -> Vec<String> {
        slugs.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_hides_unmentioned_and_reorders_mentioned() {
        let mut surface = surface(&["a", "b", "c"]);

        apply(&ids(&["c", "a"]), &mut surface, &anchors(), 3);

        assert_eq!(surface.visible_order(), vec!["c", "a"]);
        assert!(surface.is_hidden("#projects-list", "b"));
        assert_eq!(surface.text_of("#projects-count"), Some("2 of 3"));
        assert_eq!(surface.element_hidden("#projects-empty"), Some(true));
    }

    #[test]
    fn test_hidden_cards_keep_relative_position() {
        let mut surface = surface(&["a", "b", "c", "d"]);

        apply(&ids(&["d", "c"]), &mut surface, &anchors(), 4);

        // a and b stay put, in their original relative order
        assert_eq!(surface.full_order(), vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn test_empty_sequence_shows_empty_state() {
        let mut surface = surface(&["a", "b"]);

        apply(&[], &mut surface, &anchors(), 2);

        assert!(surface.visible_order().is_empty());
        assert_eq!(surface.text_of("#projects-count"), Some("0 of 2"));
        assert_eq!(surface.element_hidden("#projects-empty"), Some(false));
    }

    #[test]
    fn test_second_apply_is_a_no_op() {
        let mut surface = surface(&["a", "b", "c"]);
        let sequence = ids(&["b", "a"]);

        apply(&sequence, &mut surface, &anchors(), 3);
        surface.reset_mutations();

        apply(&sequence, &mut surface, &anchors(), 3);
        assert_eq!(surface.mutations(), 0);
        assert_eq!(surface.visible_order(), vec!["b", "a"]);
    }

    #[test]
    fn test_unrendered_ids_are_skipped_silently() {
        let mut surface = surface(&["a"]);

        apply(&ids(&["ghost", "a"]), &mut surface, &anchors(), 2);

        assert_eq!(surface.visible_order(), vec!["a"]);
        // The counter reflects the resolved sequence, not the cards found
        assert_eq!(surface.text_of("#projects-count"), Some("2 of 2"));
    }

    #[test]
    fn test_missing_list_container_skips_everything() {
        let mut surface = MockSurface::new("#elsewhere", &["a"]).with_element("#projects-count");

        apply(&ids(&["a"]), &mut surface, &anchors(), 1);

        assert_eq!(surface.mutations(), 0);
        assert_eq!(surface.text_of("#projects-count"), Some(""));
    }

    #[test]
    fn test_missing_chrome_is_skipped_per_target() {
        let mut surface = MockSurface::new("#projects-list", &["a", "b"]);

        // No counter or empty element registered; the card pass still runs
        apply(&ids(&["b"]), &mut surface, &anchors(), 2);

        assert_eq!(surface.visible_order(), vec!["b"]);
    }

    #[test]
    fn test_reshowing_a_hidden_card() {
        let mut surface = surface(&["a", "b"]);

        apply(&ids(&["a"]), &mut surface, &anchors(), 2);
        assert!(surface.is_hidden("#projects-list", "b"));

        apply(&ids(&["a", "b"]), &mut surface, &anchors(), 2);
        assert_eq!(surface.visible_order(), vec!["a", "b"]);
        assert!(!surface.is_hidden("#projects-list", "b"));
    }
}

//! In-memory render surface for tests and CLI previews

use super::selectors::Anchors;
use super::traits::RenderSurface;
use std::collections::HashMap;

/// DOM-like structure with keyed cards and named chrome elements
///
/// Mutating calls that would not change anything are no-ops, and the
/// surface counts the calls that did change state — reconciliation
/// idempotence is observable as a zero mutation count.
#[derive(Debug, Clone, Default)]
pub struct MockSurface {
    list_selector: String,
    /// Cards in order: (id, hidden)
    cards: Vec<(String, bool)>,
    /// Chrome elements by selector
    elements: HashMap<String, Element>,
    mutations: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Element {
    text: String,
    hidden: bool,
}

impl MockSurface {
    /// Surface with a card list answering to `list_selector`, every
    /// card visible
    #[must_use]
    pub fn new(list_selector: impl Into<String>, card_ids: &[&str]) -> Self {
        Self {
            list_selector: list_selector.into(),
            cards: card_ids.iter().map(|id| ((*id).to_string(), false)).collect(),
            elements: HashMap::new(),
            mutations: 0,
        }
    }

    /// Register an empty chrome element at the selector
    #[must_use]
    pub fn with_element(mut self, selector: impl Into<String>) -> Self {
        self.elements.insert(selector.into(), Element::default());
        self
    }

    /// Surface pre-seeded for a listing: cards plus the counter and
    /// empty-state chrome at the anchors' type-default selectors
    #[must_use]
    pub fn seeded(anchors: &Anchors, card_ids: &[String]) -> Self {
        let ids: Vec<&str> = card_ids.iter().map(String::as_str).collect();
        Self::new(anchors.list.type_default.clone(), &ids)
            .with_element(anchors.counter.type_default.clone())
            .with_element(anchors.empty.type_default.clone())
    }

    /// Text of the chrome element at the selector
    #[must_use]
    pub fn text_of(&self, selector: &str) -> Option<&str> {
        self.elements.get(selector).map(|e| e.text.as_str())
    }

    /// Hidden state of the chrome element at the selector
    #[must_use]
    pub fn element_hidden(&self, selector: &str) -> Option<bool> {
        self.elements.get(selector).map(|e| e.hidden)
    }

    /// Visible card ids, in current order
    #[must_use]
    pub fn visible_order(&self) -> Vec<String> {
        self.cards
            .iter()
            .filter(|(_, hidden)| !hidden)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// All card ids in current order, hidden ones included
    #[must_use]
    pub fn full_order(&self) -> Vec<String> {
        self.cards.iter().map(|(id, _)| id.clone()).collect()
    }

    /// State changes observed since construction or the last reset
    #[must_use]
    pub const fn mutations(&self) -> usize {
        self.mutations
    }

    /// Reset the mutation counter
    pub const fn reset_mutations(&mut self) {
        self.mutations = 0;
    }

    fn card_index(&self, list: &str, id: &str) -> Option<usize> {
        if list != self.list_selector {
            return None;
        }
        self.cards.iter().position(|(card, _)| card == id)
    }
}

impl RenderSurface for MockSurface {
    fn exists(&self, selector: &str) -> bool {
        selector == self.list_selector || self.elements.contains_key(selector)
    }

    fn card_order(&self, list: &str) -> Vec<String> {
        if list == self.list_selector {
            self.full_order()
        } else {
            Vec::new()
        }
    }

    fn is_hidden(&self, list: &str, id: &str) -> bool {
        self.card_index(list, id)
            .is_some_and(|idx| self.cards[idx].1)
    }

    fn set_hidden(&mut self, list: &str, id: &str, hidden: bool) {
        if let Some(idx) = self.card_index(list, id)
            && self.cards[idx].1 != hidden
        {
            self.cards[idx].1 = hidden;
            self.mutations += 1;
        }
    }

    fn move_to_end(&mut self, list: &str, id: &str) {
        if let Some(idx) = self.card_index(list, id)
            && idx != self.cards.len() - 1
        {
            let card = self.cards.remove(idx);
            self.cards.push(card);
            self.mutations += 1;
        }
    }

    fn set_text(&mut self, selector: &str, text: &str) {
        if let Some(element) = self.elements.get_mut(selector)
            && element.text != text
        {
            element.text = text.to_string();
            self.mutations += 1;
        }
    }

    fn set_element_hidden(&mut self, selector: &str, hidden: bool) {
        if let Some(element) = self.elements.get_mut(selector)
            && element.hidden != hidden
        {
            element.hidden = hidden;
            self.mutations += 1;
        }
    }
}

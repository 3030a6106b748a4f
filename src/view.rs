//! Element-level view interface and the HTML-backed implementation.
//!
//! The render layer and the form controller only talk to [`View`]; the page
//! template reads the element states that [`HtmlView`] collected.

use crate::models::TeamId;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementId {
    AttendeeName,
    TeamSelect,
    Greeting,
    AttendeeCount,
    ProgressBar,
    TeamCount(TeamId),
    AttendeeList,
    Celebration,
}

impl ElementId {
    pub fn dom_id(self) -> &'static str {
        match self {
            ElementId::AttendeeName => "attendeeName",
            ElementId::TeamSelect => "teamSelect",
            ElementId::Greeting => "greeting",
            ElementId::AttendeeCount => "attendeeCount",
            ElementId::ProgressBar => "progressBar",
            ElementId::TeamCount(TeamId::Water) => "waterCount",
            ElementId::TeamCount(TeamId::Zero) => "zeroCount",
            ElementId::TeamCount(TeamId::Power) => "powerCount",
            ElementId::AttendeeList => "attendeeList",
            ElementId::Celebration => "celebration",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Placeholder(String),
    Attendee { name: String, team_label: String },
}

pub trait View {
    fn has_element(&self, id: ElementId) -> bool;
    fn set_text(&mut self, id: ElementId, text: &str);
    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str);
    fn set_visible(&mut self, id: ElementId, visible: bool);
    fn set_entries(&mut self, id: ElementId, entries: Vec<ListEntry>);
    /// Form field value.
    fn set_value(&mut self, id: ElementId, value: &str);
    fn focus(&mut self, id: ElementId);
}

/// Which optional elements the page carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub attendee_list: bool,
    pub celebration: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            attendee_list: true,
            celebration: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub text: String,
    pub attributes: BTreeMap<String, String>,
    pub hidden: bool,
    pub value: String,
    pub entries: Vec<ListEntry>,
}

static UNSET: ElementState = ElementState {
    text: String::new(),
    attributes: BTreeMap::new(),
    hidden: false,
    value: String::new(),
    entries: Vec::new(),
};

#[derive(Debug, Clone)]
pub struct HtmlView {
    layout: Layout,
    elements: BTreeMap<ElementId, ElementState>,
    focused: Option<ElementId>,
}

impl HtmlView {
    pub fn new(layout: Layout) -> Self {
        let mut elements = BTreeMap::new();
        // Status line and banner start out hidden until something is shown.
        for id in [ElementId::Greeting, ElementId::Celebration] {
            elements.insert(
                id,
                ElementState {
                    hidden: true,
                    ..ElementState::default()
                },
            );
        }
        Self {
            layout,
            elements,
            focused: None,
        }
    }

    /// `None` only for elements missing from the layout; present elements
    /// that were never written read as empty and visible.
    pub fn element(&self, id: ElementId) -> Option<&ElementState> {
        if !self.has_element(id) {
            return None;
        }
        Some(self.elements.get(&id).unwrap_or(&UNSET))
    }

    pub fn text(&self, id: ElementId) -> &str {
        self.element(id).map_or("", |el| el.text.as_str())
    }

    pub fn value(&self, id: ElementId) -> &str {
        self.element(id).map_or("", |el| el.value.as_str())
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id)
            .and_then(|el| el.attributes.get(name))
            .map(String::as_str)
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        self.element(id).is_some_and(|el| !el.hidden)
    }

    pub fn entries(&self, id: ElementId) -> &[ListEntry] {
        self.element(id)
            .map(|el| el.entries.as_slice())
            .unwrap_or_default()
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut ElementState> {
        if !self.has_element(id) {
            return None;
        }
        Some(self.elements.entry(id).or_default())
    }
}

impl View for HtmlView {
    fn has_element(&self, id: ElementId) -> bool {
        match id {
            ElementId::AttendeeList => self.layout.attendee_list,
            ElementId::Celebration => self.layout.celebration,
            _ => true,
        }
    }

    fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(el) = self.element_mut(id) {
            el.text = text.to_string();
        }
    }

    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_visible(&mut self, id: ElementId, visible: bool) {
        if let Some(el) = self.element_mut(id) {
            el.hidden = !visible;
        }
    }

    fn set_entries(&mut self, id: ElementId, entries: Vec<ListEntry>) {
        if let Some(el) = self.element_mut(id) {
            el.entries = entries;
        }
    }

    fn set_value(&mut self, id: ElementId, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.value = value.to_string();
        }
    }

    fn focus(&mut self, id: ElementId) {
        if self.has_element(id) {
            self.focused = Some(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_optional_elements_ignore_writes() {
        let mut view = HtmlView::new(Layout {
            attendee_list: false,
            celebration: false,
        });
        view.set_entries(
            ElementId::AttendeeList,
            vec![ListEntry::Placeholder("No attendees yet.".to_string())],
        );
        view.set_visible(ElementId::Celebration, true);

        assert!(view.element(ElementId::AttendeeList).is_none());
        assert!(view.entries(ElementId::AttendeeList).is_empty());
        assert!(!view.is_visible(ElementId::Celebration));
    }

    #[test]
    fn greeting_starts_hidden() {
        let view = HtmlView::new(Layout::default());
        assert!(!view.is_visible(ElementId::Greeting));
        assert!(view.is_visible(ElementId::AttendeeCount));
        assert_eq!(view.focused(), None);
    }

    #[test]
    fn unwritten_elements_read_empty() {
        let view = HtmlView::new(Layout::default());
        assert!(view.is_visible(ElementId::ProgressBar));
        assert!(view.is_visible(ElementId::AttendeeList));
        assert_eq!(view.text(ElementId::TeamCount(TeamId::Water)), "");
        assert_eq!(view.value(ElementId::AttendeeName), "");
        assert_eq!(view.attribute(ElementId::ProgressBar, "style"), None);
        assert!(view.element(ElementId::AttendeeCount).is_some());
    }

    #[test]
    fn dom_ids_follow_page_contract() {
        assert_eq!(ElementId::TeamCount(TeamId::Zero).dom_id(), "zeroCount");
        assert_eq!(ElementId::ProgressBar.dom_id(), "progressBar");
        assert_eq!(ElementId::AttendeeList.dom_id(), "attendeeList");
    }
}

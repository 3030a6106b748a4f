use crate::models::PrefillQuery;
use crate::view::{ElementId, View};

/// Copies invitation-link parameters into the form as-is.
pub fn prefill_from_query(query: &PrefillQuery, view: &mut impl View) {
    if let Some(name) = query.attendee_name.as_deref().filter(|v| !v.is_empty()) {
        view.set_value(ElementId::AttendeeName, name);
    }
    if let Some(team) = query.team.as_deref().filter(|v| !v.is_empty()) {
        view.set_value(ElementId::TeamSelect, team);
    }
}

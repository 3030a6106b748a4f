use crate::models::{CheckinState, TeamId};
use crate::stats::{celebration_message, percent_of_goal};
use crate::view::{ElementId, ListEntry, View};

pub const EMPTY_ROSTER: &str = "No attendees yet.";

pub fn render(state: &CheckinState, goal: u64, view: &mut impl View) {
    render_counts(state, view);
    render_progress(state.total, goal, view);
    render_attendees(state, view);
    render_celebration(state, goal, view);
}

fn render_counts(state: &CheckinState, view: &mut impl View) {
    view.set_text(ElementId::AttendeeCount, &state.total.to_string());
    for team in TeamId::ALL {
        view.set_text(ElementId::TeamCount(team), &state.teams.get(team).to_string());
    }
}

fn render_progress(total: u64, goal: u64, view: &mut impl View) {
    let pct = percent_of_goal(total, goal);
    let bar = ElementId::ProgressBar;
    view.set_attribute(bar, "style", &format!("width: {pct}%"));
    view.set_attribute(bar, "aria-valuemin", "0");
    view.set_attribute(bar, "aria-valuemax", &goal.to_string());
    view.set_attribute(bar, "aria-valuenow", &total.to_string());
    view.set_attribute(bar, "role", "progressbar");
    view.set_attribute(bar, "title", &format!("Progress: {pct}%"));
}

fn render_attendees(state: &CheckinState, view: &mut impl View) {
    if !view.has_element(ElementId::AttendeeList) {
        return;
    }
    let entries = if state.attendees.is_empty() {
        vec![ListEntry::Placeholder(EMPTY_ROSTER.to_string())]
    } else {
        state
            .attendees
            .iter()
            .map(|attendee| ListEntry::Attendee {
                name: attendee.name.clone(),
                team_label: attendee.team.label().to_string(),
            })
            .collect()
    };
    view.set_entries(ElementId::AttendeeList, entries);
}

fn render_celebration(state: &CheckinState, goal: u64, view: &mut impl View) {
    if !view.has_element(ElementId::Celebration) {
        return;
    }
    match celebration_message(state, goal) {
        Some(message) => {
            view.set_text(ElementId::Celebration, &message);
            view.set_visible(ElementId::Celebration, true);
        }
        None => view.set_visible(ElementId::Celebration, false),
    }
}

use crate::errors::ValidationError;
use crate::models::{Attendee, CheckinRequest, CheckinState, TeamId};
use crate::render::render;
use crate::storage::{self, LocalStore};
use crate::view::{ElementId, View};
use tracing::{info, warn};

/// Trims, collapses whitespace runs and title-cases each word.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Leading punctuation is kept; the first alphanumeric character is uppercased.
fn title_case_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut capitalized = false;
    for c in word.chars() {
        if !capitalized && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
            capitalized = true;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

pub fn validate(input: &CheckinRequest) -> Result<(String, TeamId), ValidationError> {
    let name = normalize_name(&input.attendee_name);
    let team = input.team.parse::<TeamId>().map_err(|_| ValidationError)?;
    if name.is_empty() {
        return Err(ValidationError);
    }
    Ok((name, team))
}

/// Validates and records a check-in without touching storage or the view.
pub fn apply(state: &mut CheckinState, input: &CheckinRequest) -> Result<Attendee, ValidationError> {
    let (name, team) = validate(input)?;
    Ok(state.record(name, team).clone())
}

pub fn welcome_message(attendee: &Attendee) -> String {
    format!(
        "Welcome, {}! You’re checked in for {}.",
        attendee.name,
        attendee.team.label()
    )
}

/// Runs one form submission end to end: validate, mutate, persist, repaint,
/// greet, reset. Storage failures are logged and do not block the check-in.
pub async fn submit(
    state: &mut CheckinState,
    input: &CheckinRequest,
    store: &LocalStore,
    goal: u64,
    view: &mut impl View,
) -> Result<Attendee, ValidationError> {
    let attendee = match apply(state, input) {
        Ok(attendee) => attendee,
        Err(err) => {
            warn!(team = %input.team, "rejected check-in");
            show_status(view, Status::Error, &err.to_string());
            return Err(err);
        }
    };

    if let Err(err) = storage::save(store, state).await {
        warn!("check-in kept in memory only: {err}");
    }
    render(state, goal, view);
    greet(view, &attendee);
    info!(team = %attendee.team, total = state.total, "checked in");

    Ok(attendee)
}

/// Success status plus an empty form ready for the next attendee.
pub fn greet(view: &mut impl View, attendee: &Attendee) {
    show_status(view, Status::Success, &welcome_message(attendee));
    view.set_value(ElementId::AttendeeName, "");
    view.set_value(ElementId::TeamSelect, "");
    view.focus(ElementId::AttendeeName);
}

#[derive(Debug, Clone, Copy)]
enum Status {
    Success,
    Error,
}

fn show_status(view: &mut impl View, status: Status, message: &str) {
    let class = match status {
        Status::Success => "success-message",
        Status::Error => "error-message",
    };
    view.set_attribute(ElementId::Greeting, "class", class);
    view.set_text(ElementId::Greeting, message);
    view.set_visible(ElementId::Greeting, true);
}

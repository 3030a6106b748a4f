use crate::checkin::{self, welcome_message};
use crate::errors::AppError;
use crate::models::{
    CheckinRequest, CheckinResponse, CheckinState, LeadersResponse, PrefillQuery, StateResponse,
};
use crate::prefill::prefill_from_query;
use crate::render::render;
use crate::state::AppState;
use crate::stats::{celebration_message, leading_teams, percent_of_goal};
use crate::ui::render_index;
use crate::view::{ElementId, View};
use axum::{
    Form, Json,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::debug;

pub async fn index(State(state): State<AppState>, Query(query): Query<PrefillQuery>) -> Html<String> {
    let data = state.data.lock().await;
    let mut view = state.view();
    render(&data, state.goal, &mut view);
    if let Some(attendee) = query
        .checked_in
        .as_deref()
        .and_then(|position| position.parse::<usize>().ok())
        .and_then(|position| position.checked_sub(1))
        .and_then(|index| data.attendees.get(index))
    {
        checkin::greet(&mut view, attendee);
    }
    prefill_from_query(&query, &mut view);
    Html(render_index(&view))
}

/// Successful posts redirect to the page so a refresh cannot check in twice.
pub async fn checkin_form(
    State(state): State<AppState>,
    Form(input): Form<CheckinRequest>,
) -> Response {
    let mut data = state.data.lock().await;
    let mut view = state.view();
    render(&data, state.goal, &mut view);
    // The browser keeps what was typed until a check-in succeeds.
    view.set_value(ElementId::AttendeeName, &input.attendee_name);
    view.set_value(ElementId::TeamSelect, &input.team);

    match checkin::submit(&mut data, &input, &state.store, state.goal, &mut view).await {
        Ok(_) => Redirect::to(&format!("/?checkedIn={}", data.attendees.len())).into_response(),
        Err(err) => {
            debug!("re-rendering rejected form: {err}");
            Html(render_index(&view)).into_response()
        }
    }
}

pub async fn get_state(State(state): State<AppState>) -> Json<StateResponse> {
    let data = state.data.lock().await;
    Json(snapshot(&data, state.goal))
}

pub async fn checkin(
    State(state): State<AppState>,
    Json(input): Json<CheckinRequest>,
) -> Result<Json<CheckinResponse>, AppError> {
    let mut data = state.data.lock().await;
    let mut view = state.view();
    let attendee = checkin::submit(&mut data, &input, &state.store, state.goal, &mut view).await?;

    Ok(Json(CheckinResponse {
        message: welcome_message(&attendee),
        attendee,
        state: snapshot(&data, state.goal),
    }))
}

fn snapshot(data: &CheckinState, goal: u64) -> StateResponse {
    let leaders = leading_teams(&data.teams);
    StateResponse {
        total: data.total,
        teams: data.teams,
        attendees: data.attendees.clone(),
        goal,
        percent: percent_of_goal(data.total, goal),
        leaders: LeadersResponse {
            max: leaders.max,
            winners: leaders.winners,
        },
        celebration: celebration_message(data, goal),
    }
}

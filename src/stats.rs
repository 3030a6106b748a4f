use crate::models::{CheckinState, TeamCounts, TeamId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaders {
    pub max: u64,
    pub winners: Vec<TeamId>,
}

pub fn percent_of_goal(total: u64, goal: u64) -> u8 {
    let pct = (total as f64 / goal as f64 * 100.0).round();
    if !pct.is_finite() {
        return 0;
    }
    pct.min(100.0) as u8
}

/// Every team sharing the highest count is a winner; ties are never broken.
pub fn leading_teams(teams: &TeamCounts) -> Leaders {
    let max = TeamId::ALL
        .into_iter()
        .map(|team| teams.get(team))
        .fold(0, u64::max);
    let winners = TeamId::ALL
        .into_iter()
        .filter(|team| teams.get(*team) == max)
        .collect();
    Leaders { max, winners }
}

pub fn celebration_message(state: &CheckinState, goal: u64) -> Option<String> {
    if state.total < goal {
        return None;
    }
    let leaders = leading_teams(&state.teams);
    if leaders.max == 0 {
        return None;
    }
    let labels = leaders
        .winners
        .iter()
        .map(|team| team.label())
        .collect::<Vec<_>>()
        .join(" & ");
    Some(format!(
        "🎉 Goal reached! {labels} leading with {} check-ins.",
        leaders.max
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_and_clamps() {
        assert_eq!(percent_of_goal(0, 50), 0);
        assert_eq!(percent_of_goal(25, 50), 50);
        assert_eq!(percent_of_goal(50, 50), 100);
        assert_eq!(percent_of_goal(75, 50), 100);
        assert_eq!(percent_of_goal(1, 3), 33);
        assert_eq!(percent_of_goal(1, 8), 13);
    }

    #[test]
    fn percent_with_zero_goal_is_zero() {
        assert_eq!(percent_of_goal(0, 0), 0);
        assert_eq!(percent_of_goal(7, 0), 0);
    }

    #[test]
    fn leaders_keep_ties() {
        let leaders = leading_teams(&TeamCounts { water: 3, zero: 3, power: 1 });
        assert_eq!(leaders.max, 3);
        assert_eq!(leaders.winners, vec![TeamId::Water, TeamId::Zero]);
    }

    #[test]
    fn leaders_with_no_checkins_is_three_way_tie_at_zero() {
        let leaders = leading_teams(&TeamCounts::default());
        assert_eq!(leaders.max, 0);
        assert_eq!(leaders.winners, TeamId::ALL.to_vec());
    }

    #[test]
    fn celebration_names_tied_leaders() {
        let state = CheckinState {
            total: 50,
            teams: TeamCounts { water: 20, zero: 20, power: 10 },
            attendees: Vec::new(),
        };
        let message = celebration_message(&state, 50).expect("goal reached");
        assert_eq!(
            message,
            "🎉 Goal reached! Team Water Wise & Team Net Zero leading with 20 check-ins."
        );
    }

    #[test]
    fn no_celebration_below_goal_or_without_checkins() {
        let state = CheckinState {
            total: 49,
            teams: TeamCounts { water: 49, zero: 0, power: 0 },
            attendees: Vec::new(),
        };
        assert_eq!(celebration_message(&state, 50), None);
        assert_eq!(celebration_message(&CheckinState::default(), 0), None);
    }
}

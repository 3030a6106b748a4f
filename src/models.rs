use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamId {
    Water,
    Zero,
    Power,
}

impl TeamId {
    pub const ALL: [TeamId; 3] = [TeamId::Water, TeamId::Zero, TeamId::Power];

    pub fn as_str(self) -> &'static str {
        match self {
            TeamId::Water => "water",
            TeamId::Zero => "zero",
            TeamId::Power => "power",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TeamId::Water => "Team Water Wise",
            TeamId::Zero => "Team Net Zero",
            TeamId::Power => "Team Renewables",
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTeam(pub String);

impl FromStr for TeamId {
    type Err = UnknownTeam;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TeamId::ALL
            .into_iter()
            .find(|team| team.as_str() == value)
            .ok_or_else(|| UnknownTeam(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TeamCounts {
    pub water: u64,
    pub zero: u64,
    pub power: u64,
}

impl TeamCounts {
    pub fn get(&self, team: TeamId) -> u64 {
        match team {
            TeamId::Water => self.water,
            TeamId::Zero => self.zero,
            TeamId::Power => self.power,
        }
    }

    pub fn increment(&mut self, team: TeamId) {
        let bucket = match team {
            TeamId::Water => &mut self.water,
            TeamId::Zero => &mut self.zero,
            TeamId::Power => &mut self.power,
        };
        *bucket = bucket.saturating_add(1);
    }

    pub fn sum(&self) -> u64 {
        TeamId::ALL.into_iter().map(|team| self.get(team)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub name: String,
    pub team: TeamId,
}

/// Persisted tally. `total`, `teams.sum()` and `attendees.len()` move together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CheckinState {
    pub total: u64,
    pub teams: TeamCounts,
    pub attendees: Vec<Attendee>,
}

impl CheckinState {
    /// Appends a check-in. Callers validate `name` first.
    pub fn record(&mut self, name: String, team: TeamId) -> &Attendee {
        self.total = self.total.saturating_add(1);
        self.teams.increment(team);
        self.attendees.push(Attendee { name, team });
        &self.attendees[self.attendees.len() - 1]
    }

    pub fn is_consistent(&self) -> bool {
        self.total == self.teams.sum() && self.total == self.attendees.len() as u64
    }
}

/// Raw form fields as submitted, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckinRequest {
    #[serde(rename = "attendeeName", default)]
    pub attendee_name: String,
    #[serde(default)]
    pub team: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrefillQuery {
    #[serde(rename = "attendeeName")]
    pub attendee_name: Option<String>,
    pub team: Option<String>,
    /// Roster position (1-based) of the attendee just checked in.
    #[serde(rename = "checkedIn")]
    pub checked_in: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LeadersResponse {
    pub max: u64,
    pub winners: Vec<TeamId>,
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub total: u64,
    pub teams: TeamCounts,
    pub attendees: Vec<Attendee>,
    pub goal: u64,
    pub percent: u8,
    pub leaders: LeadersResponse,
    pub celebration: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckinResponse {
    pub message: String,
    pub attendee: Attendee,
    pub state: StateResponse,
}

//! Raw setup input and its defaults.
use cricket_core::{Lineup, MatchConfig, MatchState, SetupError, Team, TeamId, TossDecision};

use crate::config::SetupConfig;

/// What the scorer typed into the setup screens.
///
/// Blank fields fall back to defaults: "Team A"/"Team B" for names,
/// "Player i" for players and the configured overs for an unusable overs
/// field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetupForm {
    pub team_a_name: String,
    pub team_b_name: String,
    /// Batting order; missing entries are filled with defaults.
    pub team_a_players: Vec<String>,
    pub team_b_players: Vec<String>,
    pub overs: String,
    pub toss_winner: TeamId,
    pub toss_decision: TossDecision,
}

impl SetupForm {
    pub fn team_name(&self, id: TeamId) -> String {
        let (raw, fallback) = match id {
            TeamId::A => (&self.team_a_name, "Team A"),
            TeamId::B => (&self.team_b_name, "Team B"),
        };
        or_default(raw, || fallback.to_string())
    }

    pub fn players(&self, id: TeamId) -> Vec<String> {
        let raw = match id {
            TeamId::A => &self.team_a_players,
            TeamId::B => &self.team_b_players,
        };
        (0..MatchConfig::SQUAD_SIZE)
            .map(|slot| {
                let entered = raw.get(slot).map(String::as_str).unwrap_or_default();
                or_default(entered, || format!("Player {}", slot + 1))
            })
            .collect()
    }

    /// Overs per innings read from the leading digits of the field (`"2.5"`
    /// is 2); falls back unless that prefix is a positive integer.
    pub fn total_overs(&self, config: &SetupConfig) -> u32 {
        let field = self.overs.trim_start();
        let field = field.strip_prefix('+').unwrap_or(field);
        let digits = field
            .find(|c: char| !c.is_ascii_digit())
            .map_or(field, |end| &field[..end]);

        digits
            .parse::<u32>()
            .ok()
            .filter(|overs| *overs > 0)
            .unwrap_or(config.default_overs)
    }

    pub fn into_match_state(self, config: &SetupConfig) -> Result<MatchState, SetupError> {
        let match_config =
            MatchConfig::new(self.total_overs(config), self.toss_winner, self.toss_decision);
        let team_a = Team::new(self.team_name(TeamId::A), Lineup::new(self.players(TeamId::A))?);
        let team_b = Team::new(self.team_name(TeamId::B), Lineup::new(self.players(TeamId::B))?);

        tracing::debug!(
            team_a = %team_a.name(),
            team_b = %team_b.name(),
            total_overs = match_config.total_overs,
            toss_winner = ?match_config.toss_winner,
            toss_decision = %match_config.toss_decision,
            "Setup form accepted"
        );
        MatchState::new(team_a, team_b, match_config)
    }
}

fn or_default(raw: &str, fallback: impl FnOnce() -> String) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        fallback()
    } else {
        trimmed.to_string()
    }
}

//! Text formatting for scoreboard figures.

use cricket_core::{BallKind, BallRecord, MatchConfig};

/// `overs.balls`, e.g. `3.4`.
pub fn overs(legal_balls: u32) -> String {
    format!(
        "{}.{}",
        legal_balls / MatchConfig::BALLS_PER_OVER,
        legal_balls % MatchConfig::BALLS_PER_OVER
    )
}

/// Two decimal places.
pub fn rate(value: f64) -> String {
    format!("{value:.2}")
}

/// Runs per six legal balls; zero before the first legal ball.
pub fn run_rate(score: u32, legal_balls: u32) -> f64 {
    scaled(score, legal_balls, f64::from(MatchConfig::BALLS_PER_OVER))
}

/// Runs per hundred balls faced; zero before the first ball faced.
pub fn strike_rate(runs: u32, balls: u32) -> f64 {
    scaled(runs, balls, 100.0)
}

/// Runs needed per six balls to reach the target; zero once no balls remain.
pub fn required_rate(runs_to_win: u32, balls_left: u32) -> f64 {
    scaled(runs_to_win, balls_left, f64::from(MatchConfig::BALLS_PER_OVER))
}

fn scaled(runs: u32, balls: u32, scale: f64) -> f64 {
    if balls == 0 {
        return 0.0;
    }
    f64::from(runs) * scale / f64::from(balls)
}

/// `{over}.{ball}: {batsman} - {outcome}[ (Free Hit)] | Score: {total}/{wickets}`
pub fn history_line(record: &BallRecord) -> String {
    let outcome = match record.kind {
        BallKind::Wicket => "WICKET".to_string(),
        BallKind::Wide => format!("Wide ({})", record.runs),
        BallKind::NoBall => format!(
            "No Ball ({} total, {} off bat)",
            record.runs,
            record.bat_runs.unwrap_or(0)
        ),
        BallKind::Normal | BallKind::Boundary => {
            let unit = if record.runs == 1 { "run" } else { "runs" };
            format!("{} {unit}", record.runs)
        }
    };
    let free_hit = if record.free_hit { " (Free Hit)" } else { "" };

    format!(
        "{}.{}: {} - {outcome}{free_hit} | Score: {}/{}",
        record.over, record.ball, record.batsman, record.total, record.wickets
    )
}

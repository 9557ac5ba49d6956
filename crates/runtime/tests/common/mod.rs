#![allow(dead_code)]

use cricket_core::{Delivery, Lineup, MatchConfig, Team, TeamId, TossDecision};
use runtime::{Command, CommandOutcome, MatchController, RuntimeConfig};

pub fn lineup(prefix: &str) -> Lineup {
    Lineup::new((1..=MatchConfig::SQUAD_SIZE).map(|i| format!("{prefix} {i}")))
        .expect("ten players form a lineup")
}

/// Team A bats first.
pub fn controller(total_overs: u32) -> MatchController {
    let mut controller = MatchController::new(RuntimeConfig::default());
    controller
        .configure(
            Team::new("Team A", lineup("A")),
            Team::new("Team B", lineup("B")),
            MatchConfig::new(total_overs, TeamId::A, TossDecision::Bat),
        )
        .expect("valid setup");
    controller.drain_events().for_each(drop);
    controller
}

pub fn bowl(controller: &mut MatchController, delivery: Delivery) -> CommandOutcome {
    controller.dispatch(Command::Delivery(delivery))
}

pub fn bowl_many(controller: &mut MatchController, delivery: Delivery, count: usize) {
    for _ in 0..count {
        bowl(controller, delivery);
    }
}

mod common;

use common::{bowl, bowl_many, controller, lineup};
use cricket_core::{
    Delivery, DeliveryError, Innings, InningsTransition, MatchConfig, MatchResult, Team, TeamId,
    TossDecision,
};
use runtime::{Command, CommandOutcome, IgnoreReason, MatchController, MatchEvent, RuntimeConfig};

#[test]
fn second_innings_starts_after_six_overs() {
    let mut controller = controller(6);

    bowl_many(&mut controller, Delivery::runs(1), 35);
    let state = controller.state().unwrap();
    assert_eq!(state.innings().innings, Innings::First);
    assert_eq!(state.batting_team().overs_completed(), 5);

    let outcome = bowl(&mut controller, Delivery::runs(1));
    assert_eq!(
        outcome,
        CommandOutcome::Applied {
            transition: InningsTransition::InningsEnded
        }
    );

    let state = controller.state().unwrap();
    assert_eq!(state.team(TeamId::A).score(), 36);
    assert_eq!(state.team(TeamId::A).overs_completed(), 6);
    assert_eq!(state.innings().innings, Innings::Second);
    assert_eq!(state.innings().batting, TeamId::B);
    assert_eq!(state.crease().striker.name, "B 1");
    assert_eq!(state.target(), Some(37));

    let events: Vec<_> = controller.drain_events().collect();
    assert!(events.contains(&MatchEvent::InningsEnded {
        innings: Innings::First,
        batting: TeamId::B,
    }));
}

#[test]
fn extras_in_the_last_over_do_not_end_the_innings_early() {
    let mut controller = controller(6);
    bowl_many(&mut controller, Delivery::runs(0), 30);

    // Final over: two extras before every legal ball.
    for legal in 1..=5u32 {
        bowl(&mut controller, Delivery::wide());
        bowl(&mut controller, Delivery::no_ball(2));
        bowl(&mut controller, Delivery::runs(0));

        let state = controller.state().unwrap();
        assert_eq!(state.innings().innings, Innings::First);
        assert_eq!(state.batting_team().legal_balls(), 30 + legal);
    }

    bowl(&mut controller, Delivery::wide());
    bowl(&mut controller, Delivery::no_ball(0));
    let state = controller.state().unwrap();
    assert_eq!(state.innings().innings, Innings::First);
    assert_eq!(state.batting_team().legal_balls(), 35);
    assert_eq!(state.batting_team().score(), 5 * 4 + 2);

    let outcome = bowl(&mut controller, Delivery::runs(0));
    assert_eq!(
        outcome,
        CommandOutcome::Applied {
            transition: InningsTransition::InningsEnded
        }
    );

    let state = controller.state().unwrap();
    assert_eq!(state.team(TeamId::A).legal_balls(), 36);
    assert_eq!(state.team(TeamId::A).overs_completed(), 6);
    assert_eq!(state.innings().innings, Innings::Second);
}

#[test]
fn team_b_win_is_in_wickets_even_when_batting_first() {
    let mut controller = MatchController::new(RuntimeConfig::default());
    controller
        .configure(
            Team::new("Team A", lineup("A")),
            Team::new("Team B", lineup("B")),
            MatchConfig::new(1, TeamId::A, TossDecision::Bowl),
        )
        .unwrap();

    bowl(&mut controller, Delivery::runs(6));
    controller.dispatch(Command::EndInnings);
    assert_eq!(controller.state().unwrap().innings().batting, TeamId::A);
    bowl(&mut controller, Delivery::runs(2));
    controller.dispatch(Command::EndInnings);

    let state = controller.state().unwrap();
    assert!(state.is_complete());
    assert_eq!(
        state.result(),
        Some(&MatchResult::WonByWickets {
            winner: TeamId::B,
            wickets_in_hand: 10
        })
    );
    assert_eq!(
        controller.summary().as_deref(),
        Some("Team B won by 10 wickets")
    );
}

#[test]
fn chase_ends_the_moment_target_is_passed() {
    let mut controller = controller(6);

    // Team A: 100 in 17 balls, then declares.
    bowl_many(&mut controller, Delivery::runs(6), 16);
    bowl(&mut controller, Delivery::runs(4));
    controller.dispatch(Command::EndInnings);
    assert_eq!(controller.state().unwrap().target(), Some(101));

    // Team B: one down, 96 on the board.
    bowl(&mut controller, Delivery::wicket());
    bowl_many(&mut controller, Delivery::runs(6), 16);
    assert!(!controller.state().unwrap().is_complete());

    let outcome = bowl(&mut controller, Delivery::runs(6));
    assert_eq!(
        outcome,
        CommandOutcome::Applied {
            transition: InningsTransition::MatchEnded
        }
    );

    let state = controller.state().unwrap();
    assert!(state.is_complete());
    assert_eq!(state.team(TeamId::B).score(), 102);
    assert_eq!(
        state.result(),
        Some(&MatchResult::WonByWickets {
            winner: TeamId::B,
            wickets_in_hand: 9
        })
    );
    assert_eq!(
        controller.summary().as_deref(),
        Some("Team B won by 9 wickets")
    );

    let completed = controller
        .drain_events()
        .find(|event| matches!(event, MatchEvent::MatchCompleted { .. }));
    assert!(completed.is_some());

    // Nothing moves once the match is over.
    let after = bowl(&mut controller, Delivery::runs(4));
    assert!(after.is_ignored());
    assert_eq!(controller.state().unwrap().team(TeamId::B).score(), 102);
    assert_eq!(
        controller.dispatch(Command::Undo),
        CommandOutcome::Ignored(IgnoreReason::MatchComplete)
    );
}

#[test]
fn all_out_ends_innings_mid_over() {
    let mut controller = controller(6);

    bowl_many(&mut controller, Delivery::wicket(), 9);

    let state = controller.state().unwrap();
    let team_a = state.team(TeamId::A);
    assert_eq!(team_a.wickets(), 9);
    assert_eq!(team_a.legal_balls(), 9);
    assert_eq!(team_a.overs_completed(), 1);
    assert_eq!(state.innings().innings, Innings::Second);
    assert_eq!(state.target(), Some(1));
}

#[test]
fn wicket_on_free_hit_changes_nothing() {
    let mut controller = controller(6);

    bowl(&mut controller, Delivery::no_ball(0));
    let before = controller.state().unwrap().clone();
    let history = controller.history_len();
    controller.drain_events().for_each(drop);

    let outcome = bowl(&mut controller, Delivery::wicket());
    match outcome {
        CommandOutcome::Ignored(IgnoreReason::Rejected(error)) => {
            assert_eq!(error.delivery_error(), Some(&DeliveryError::FreeHitReprieve));
        }
        other => panic!("expected reprieve, got {other:?}"),
    }

    assert_eq!(controller.state().unwrap(), &before);
    assert_eq!(controller.history_len(), history);
    assert!(matches!(
        controller.drain_events().next(),
        Some(MatchEvent::DeliveryIgnored { .. })
    ));
}

#[test]
fn wide_keeps_free_hit_armed() {
    let mut controller = controller(6);

    bowl(&mut controller, Delivery::no_ball(1));
    bowl(&mut controller, Delivery::wide());
    assert!(controller.state().unwrap().is_free_hit());

    bowl(&mut controller, Delivery::runs(2));
    let state = controller.state().unwrap();
    assert!(!state.is_free_hit());
    let last = state.ball_log().last().unwrap();
    assert!(last.free_hit);
    assert_eq!(state.batting_team().score(), 2 + 1 + 2);
}

#[test]
fn each_command_is_undone_exactly() {
    let mut controller = controller(2);
    let script = [
        Delivery::runs(1),
        Delivery::runs(4),
        Delivery::wide(),
        Delivery::no_ball(3),
        Delivery::runs(6),
        Delivery::wicket(),
        Delivery::runs(0),
        Delivery::runs(3),
    ];

    for delivery in script {
        let before = controller.state().unwrap().clone();
        bowl(&mut controller, delivery);
        assert_eq!(controller.dispatch(Command::Undo), CommandOutcome::Undone);
        assert_eq!(controller.state().unwrap(), &before);

        // Replay so the next step starts further in.
        bowl(&mut controller, delivery);
    }
}

#[test]
fn manual_innings_end_can_be_undone() {
    let mut controller = controller(6);
    bowl(&mut controller, Delivery::runs(4));

    controller.dispatch(Command::EndInnings);
    assert_eq!(controller.state().unwrap().innings().batting, TeamId::B);

    assert_eq!(controller.dispatch(Command::Undo), CommandOutcome::Undone);
    let state = controller.state().unwrap();
    assert_eq!(state.innings().innings, Innings::First);
    assert_eq!(state.batting_team().score(), 4);
}

#[test]
fn undo_history_is_capped_at_ten() {
    let mut controller = controller(6);
    bowl_many(&mut controller, Delivery::runs(1), 15);
    assert_eq!(controller.history_len(), 10);

    for _ in 0..10 {
        assert_eq!(controller.dispatch(Command::Undo), CommandOutcome::Undone);
    }
    assert!(!controller.can_undo());
    assert_eq!(
        controller.dispatch(Command::Undo),
        CommandOutcome::Ignored(IgnoreReason::NothingToUndo)
    );
    assert_eq!(controller.state().unwrap().batting_team().score(), 5);
}

#[test]
fn new_match_discards_state() {
    let mut controller = controller(6);
    bowl(&mut controller, Delivery::runs(2));
    controller.drain_events().for_each(drop);

    assert_eq!(controller.dispatch(Command::NewMatch), CommandOutcome::Reset);
    assert!(controller.state().is_none());
    assert_eq!(controller.history_len(), 0);
    assert_eq!(
        controller.drain_events().collect::<Vec<_>>(),
        vec![MatchEvent::MatchReset]
    );

    assert_eq!(
        bowl(&mut controller, Delivery::runs(1)),
        CommandOutcome::Ignored(IgnoreReason::NoMatch)
    );
    assert_eq!(
        controller.dispatch(Command::EndInnings),
        CommandOutcome::Ignored(IgnoreReason::NoMatch)
    );
}

#[test]
fn accepted_delivery_publishes_record() {
    let mut controller = controller(6);
    bowl(&mut controller, Delivery::runs(4));

    let events: Vec<_> = controller.drain_events().collect();
    assert_eq!(events.len(), 1);
    match &events[0] {
        MatchEvent::DeliveryRecorded { record, delta, .. } => {
            assert_eq!(record.runs, 4);
            assert_eq!(record.total, 4);
            assert_eq!(delta.appended, 1);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(controller.drain_events().next().is_none());
}

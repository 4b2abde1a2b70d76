//! Unit tests for `Action` CLI enum parsing.
//!
//! Covers the default action, parsing of all four lifecycle commands, and
//! rejection of anything outside the closed variant set.

use chatmux::action::Action;
use clap::ValueEnum as _;

#[test]
fn action_default_is_start() {
    let action = Action::default();
    assert_eq!(action, Action::Start, "omitted command must mean start");
}

#[test]
fn action_start_parsed_from_string() {
    let action = Action::from_str("start", false).expect("start is a valid action");
    assert_eq!(action, Action::Start);
}

#[test]
fn action_stop_parsed_from_string() {
    let action = Action::from_str("stop", false).expect("stop is a valid action");
    assert_eq!(action, Action::Stop);
}

#[test]
fn action_status_parsed_from_string() {
    let action = Action::from_str("status", false).expect("status is a valid action");
    assert_eq!(action, Action::Status);
}

#[test]
fn action_logs_parsed_from_string() {
    let action = Action::from_str("logs", false).expect("logs is a valid action");
    assert_eq!(action, Action::Logs);
}

#[test]
fn action_unrecognized_value_rejected() {
    let result = Action::from_str("restart", false);
    assert!(result.is_err(), "restart is outside the closed variant set");
}

#[test]
fn action_all_variants_have_possible_values() {
    for action in [Action::Start, Action::Stop, Action::Status, Action::Logs] {
        assert!(
            action.to_possible_value().is_some(),
            "action {action:?} must have a ValueEnum possible value"
        );
    }
}

#[test]
fn action_possible_value_names_are_lowercase_commands() {
    let names: Vec<String> = [Action::Start, Action::Stop, Action::Status, Action::Logs]
        .iter()
        .map(|a| {
            a.to_possible_value()
                .expect("has possible value")
                .get_name()
                .to_owned()
        })
        .collect();
    assert_eq!(names, ["start", "stop", "status", "logs"]);
}

#[test]
fn action_is_copy() {
    let action = Action::Logs;
    let copy = action;
    assert_eq!(action, copy);
}

use digital_clock::config::{MAX_TIMER_SECS, START_TIMER_LABEL};
use digital_clock::utils::{format_stopwatch, format_timer};
use digital_clock::{Mode, Screen, WidgetAction, WidgetState};
use std::rc::Rc;
use yew::Reducible;

/// Feed actions through the reducer the same way the component does.
fn run(actions: impl IntoIterator<Item = WidgetAction>) -> Rc<WidgetState> {
    actions
        .into_iter()
        .fold(Rc::new(WidgetState::default()), |state, action| state.reduce(action))
}

#[test]
fn committing_valid_values_sets_remaining() {
    for v in [1, 2, 59, 60, 3_600, 86_399, MAX_TIMER_SECS] {
        let state = run([
            WidgetAction::SwitchMode(Mode::Timer),
            WidgetAction::InputChanged(v.to_string()),
            WidgetAction::CommitInput,
        ]);
        assert_eq!(state.remaining_secs, v);
        assert_eq!(state.error_message(), "");
    }
}

#[test]
fn committing_out_of_range_values_is_rejected() {
    for v in [0_u64, 86_401, 100_000, 999_999, u64::MAX] {
        let state = run([
            WidgetAction::SwitchMode(Mode::Timer),
            WidgetAction::InputChanged(v.to_string()),
            WidgetAction::CommitInput,
        ]);
        assert_eq!(state.remaining_secs, 60, "value {}", v);
        assert!(!state.error_message().is_empty());
    }
}

#[test]
fn oversized_input_disables_start() {
    let state = run([
        WidgetAction::SwitchMode(Mode::Timer),
        WidgetAction::InputChanged("999999".into()),
    ]);
    assert!(state.error_message().contains("between 1 and 86400"));
    assert!(!state.can_start_timer());

    let state = state.reduce(WidgetAction::Start);
    assert_eq!(state.screen, Screen::Timer { running: false });
}

#[test]
fn blur_commits_120_seconds() {
    let state = run([
        WidgetAction::SwitchMode(Mode::Timer),
        WidgetAction::InputChanged("120".into()),
        WidgetAction::CommitInput,
    ]);
    assert_eq!(state.remaining_secs, 120);
    assert_eq!(state.error_message(), "");
    assert!(!state.error_message().contains("Invalid timer value"));
    assert_eq!(format_timer(state.remaining_secs), "02:00");
}

#[test]
fn stopwatch_start_then_reset() {
    let state = run([
        WidgetAction::SwitchMode(Mode::Stopwatch),
        WidgetAction::ToggleRun,
    ]);
    assert!(state.is_running());

    let state = run([
        WidgetAction::SwitchMode(Mode::Stopwatch),
        WidgetAction::ToggleRun,
        WidgetAction::StopwatchTick,
        WidgetAction::StopwatchTick,
        WidgetAction::Reset,
    ]);
    assert!(!state.is_running());
    assert_eq!(format_stopwatch(state.elapsed_ms), "00:00.00");
}

#[test]
fn timer_start_then_reset() {
    let state = run([WidgetAction::SwitchMode(Mode::Timer), WidgetAction::ToggleRun]);
    assert_eq!(state.screen, Screen::Timer { running: true });

    let state = state
        .reduce(WidgetAction::TimerTick)
        .reduce(WidgetAction::Reset);
    assert!(!state.is_running());
    assert_eq!(format_timer(state.remaining_secs), "01:00");
    assert_eq!(state.input_text, "60");
}

#[test]
fn timer_expires_after_last_second() {
    let state = run([
        WidgetAction::SwitchMode(Mode::Timer),
        WidgetAction::InputChanged("1".into()),
        WidgetAction::Start,
        WidgetAction::TimerTick,
    ]);
    assert_eq!(state.remaining_secs, 0);
    assert!(!state.is_running());

    let state = state.reduce(WidgetAction::TimerTick);
    assert_eq!(state.remaining_secs, 0);
}

#[test]
fn switching_away_pauses_without_resetting() {
    let state = run([
        WidgetAction::SwitchMode(Mode::Stopwatch),
        WidgetAction::ToggleRun,
        WidgetAction::StopwatchTick,
        WidgetAction::SwitchMode(Mode::Timer),
        WidgetAction::StopwatchTick,
    ]);
    assert_eq!(state.screen, Screen::Timer { running: false });
    assert_eq!(state.elapsed_ms, 10);

    let state = state.reduce(WidgetAction::SwitchMode(Mode::Stopwatch));
    assert_eq!(state.screen, Screen::Stopwatch { running: false });
    assert_eq!(state.elapsed_ms, 10);
}

#[test]
fn mode_labels_match_controls() {
    let labels: Vec<_> = Mode::ALL.iter().map(|m| m.label()).collect();
    assert_eq!(labels, ["Clock mode", "Stopwatch mode", "Timer mode"]);
    assert_eq!(START_TIMER_LABEL, "Start timer");
}

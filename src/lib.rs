//! State machine behind the digital clock widget.
//!
//! All mutation goes through [`WidgetState`]'s operations, which the Yew
//! component drives via [`Reducible`]. Nothing here touches the DOM or timers,
//! so it is testable on the host.

use log::debug;
use std::rc::Rc;
use yew::Reducible;

pub mod config;
pub mod style;
pub mod timezone;
pub mod utils;

use config::{DEFAULT_TIMER_SECS, INVALID_VALUE_PREFIX, STOPWATCH_STEP_MS};
use utils::{filter_digits, parse_duration, DurationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Clock,
    Stopwatch,
    Timer,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Clock, Mode::Stopwatch, Mode::Timer];

    /// Accessible label of the mode selector.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Clock => "Clock mode",
            Mode::Stopwatch => "Stopwatch mode",
            Mode::Timer => "Timer mode",
        }
    }
}

/// The active mode together with its running flag.
///
/// Only the engine named by the variant can be running, so a stopwatch and a
/// timer advancing at the same time is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Clock,
    Stopwatch { running: bool },
    Timer { running: bool },
}

impl Screen {
    /// The screen for `mode` with its engine stopped.
    pub fn idle(mode: Mode) -> Self {
        match mode {
            Mode::Clock => Screen::Clock,
            Mode::Stopwatch => Screen::Stopwatch { running: false },
            Mode::Timer => Screen::Timer { running: false },
        }
    }

    pub fn mode(self) -> Mode {
        match self {
            Screen::Clock => Mode::Clock,
            Screen::Stopwatch { .. } => Mode::Stopwatch,
            Screen::Timer { .. } => Mode::Timer,
        }
    }

    pub fn is_running(self) -> bool {
        matches!(
            self,
            Screen::Stopwatch { running: true } | Screen::Timer { running: true }
        )
    }

    fn with_running(self, running: bool) -> Self {
        match self {
            Screen::Clock => Screen::Clock,
            Screen::Stopwatch { .. } => Screen::Stopwatch { running },
            Screen::Timer { .. } => Screen::Timer { running },
        }
    }
}

/// Everything the widget remembers between renders (except the wall clock,
/// which lives in its own hook).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    pub screen: Screen,
    /// Stopwatch reading in milliseconds.
    pub elapsed_ms: u64,
    /// Timer reading in seconds.
    pub remaining_secs: u32,
    /// Digits-only contents of the duration field.
    pub input_text: String,
    pub input_error: Option<String>,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            screen: Screen::Clock,
            elapsed_ms: 0,
            remaining_secs: DEFAULT_TIMER_SECS,
            input_text: DEFAULT_TIMER_SECS.to_string(),
            input_error: None,
        }
    }
}

/// User and timer events understood by the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    SwitchMode(Mode),
    /// Start/pause the engine of the current mode.
    ToggleRun,
    Start,
    Reset,
    StopwatchTick,
    TimerTick,
    /// Raw text from the duration field, before filtering.
    InputChanged(String),
    /// Duration field lost focus or saw Enter.
    CommitInput,
}

impl WidgetState {
    pub fn mode(&self) -> Mode {
        self.screen.mode()
    }

    pub fn is_running(&self) -> bool {
        self.screen.is_running()
    }

    /// Text of the error region; empty when the input is acceptable.
    pub fn error_message(&self) -> &str {
        self.input_error.as_deref().unwrap_or("")
    }

    /// Whether the timer's start control is enabled.
    pub fn can_start_timer(&self) -> bool {
        self.input_error.is_none()
    }

    pub fn apply(&mut self, action: WidgetAction) {
        match action {
            WidgetAction::SwitchMode(mode) => self.switch_mode(mode),
            WidgetAction::ToggleRun => self.toggle_run(),
            WidgetAction::Start => {
                self.start();
            }
            WidgetAction::Reset => self.reset(),
            WidgetAction::StopwatchTick => self.stopwatch_tick(),
            WidgetAction::TimerTick => self.timer_tick(),
            WidgetAction::InputChanged(raw) => self.input_changed(&raw),
            WidgetAction::CommitInput => {
                let _ = self.commit_input();
            }
        }
    }

    /// Select `mode` and stop whatever was running. Durations are kept.
    pub fn switch_mode(&mut self, mode: Mode) {
        debug!("switching mode {:?} -> {:?}", self.mode(), mode);
        self.screen = Screen::idle(mode);
    }

    pub fn toggle_run(&mut self) {
        match self.screen {
            Screen::Clock => {}
            Screen::Stopwatch { running } => {
                debug!("stopwatch {}", if running { "paused" } else { "started" });
                self.screen = Screen::Stopwatch { running: !running };
            }
            Screen::Timer { running: true } => {
                debug!("timer paused at {}s", self.remaining_secs);
                self.screen = Screen::Timer { running: false };
            }
            Screen::Timer { running: false } => {
                self.start();
            }
        }
    }

    /// Start the current engine. The timer first commits the duration field
    /// and refuses to start if that fails or there is nothing left to count.
    ///
    /// Returns whether the engine is running afterwards.
    pub fn start(&mut self) -> bool {
        match self.screen {
            Screen::Clock => false,
            Screen::Stopwatch { .. } => {
                self.screen = Screen::Stopwatch { running: true };
                true
            }
            Screen::Timer { running: true } => true,
            Screen::Timer { running: false } => {
                if let Err(e) = self.commit_input() {
                    debug!("timer start refused: {}", e);
                    return false;
                }
                if self.remaining_secs == 0 {
                    debug!("timer start refused: nothing left to count");
                    return false;
                }
                debug!("timer started at {}s", self.remaining_secs);
                self.screen = Screen::Timer { running: true };
                true
            }
        }
    }

    /// Stopwatch: zero the reading. Timer: restore every timer default.
    /// Both stop the engine.
    pub fn reset(&mut self) {
        match self.screen {
            Screen::Clock => {}
            Screen::Stopwatch { .. } => {
                debug!("stopwatch reset");
                self.elapsed_ms = 0;
                self.screen = Screen::Stopwatch { running: false };
            }
            Screen::Timer { .. } => {
                debug!("timer reset");
                self.remaining_secs = DEFAULT_TIMER_SECS;
                self.input_text = DEFAULT_TIMER_SECS.to_string();
                self.input_error = None;
                self.screen = Screen::Timer { running: false };
            }
        }
    }

    /// Ticks that arrive while the stopwatch is not running are dropped.
    pub fn stopwatch_tick(&mut self) {
        if self.screen == (Screen::Stopwatch { running: true }) {
            self.elapsed_ms = self.elapsed_ms.saturating_add(STOPWATCH_STEP_MS);
        }
    }

    /// Count down one second; the last second lands on zero and stops the timer.
    pub fn timer_tick(&mut self) {
        if self.screen != (Screen::Timer { running: true }) {
            return;
        }
        if self.remaining_secs <= 1 {
            debug!("timer expired");
            self.remaining_secs = 0;
            self.screen = self.screen.with_running(false);
        } else {
            self.remaining_secs -= 1;
        }
    }

    /// Live keystroke feedback. Never touches the timer reading.
    pub fn input_changed(&mut self, raw: &str) {
        self.input_text = filter_digits(raw);
        self.input_error = parse_duration(&self.input_text)
            .err()
            .map(|e| e.to_string());
    }

    /// Apply the duration field to the timer reading.
    ///
    /// Empty text is a no-op. On failure the reading is left alone and the
    /// error region shows an "invalid value" message.
    pub fn commit_input(&mut self) -> Result<(), DurationError> {
        match parse_duration(&self.input_text) {
            Ok(Some(secs)) => {
                debug!("timer duration committed: {}s", secs);
                self.remaining_secs = secs;
                self.input_text = secs.to_string();
                self.input_error = None;
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                self.input_error = Some(format!("{} {}", INVALID_VALUE_PREFIX, e));
                Err(e)
            }
        }
    }
}

impl Reducible for WidgetState {
    type Action = WidgetAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        // Keep the same Rc when nothing changed so stale ticks don't re-render.
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

//! Application-level configuration constants.

// Tick periods
pub const CLOCK_TICK_MS: u32 = 1_000;
pub const STOPWATCH_TICK_MS: u32 = 10;
pub const TIMER_TICK_MS: u32 = 1_000;

/// Amount added to the stopwatch on every tick; ticks are counted, not measured.
pub const STOPWATCH_STEP_MS: u64 = 10;

// Timer duration limits (seconds)
pub const MIN_TIMER_SECS: u32 = 1;
pub const MAX_TIMER_SECS: u32 = 86_400;
pub const DEFAULT_TIMER_SECS: u32 = 60;

// Control labels
pub const START_STOPWATCH_LABEL: &str = "Start stopwatch";
pub const PAUSE_STOPWATCH_LABEL: &str = "Pause stopwatch";
pub const RESET_STOPWATCH_LABEL: &str = "Reset stopwatch";
pub const START_TIMER_LABEL: &str = "Start timer";
pub const PAUSE_TIMER_LABEL: &str = "Pause timer";
pub const RESET_TIMER_LABEL: &str = "Reset timer";
pub const DURATION_INPUT_LABEL: &str = "Set timer duration";

// DOM ids
pub const DURATION_INPUT_ID: &str = "timer-duration";
pub const DURATION_ERROR_ID: &str = "timer-duration-error";

pub const INVALID_VALUE_PREFIX: &str = "Invalid timer value.";
pub const FOOTER_NOTICE: &str = "© 2024 MK-PROJECTS";

#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;

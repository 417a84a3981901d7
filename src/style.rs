//! Closed set of visual variants used by the widget.
//!
//! Each variant resolves to a fixed Tailwind class string or glyph, so an
//! unknown colour or icon cannot be requested.

use crate::Mode;

/// Accent colour of a control or readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Emerald,
    Blue,
    Amber,
    Zinc,
}

impl Accent {
    /// Classes for a round action button.
    pub fn button_class(self) -> &'static str {
        match self {
            Accent::Emerald => "bg-emerald-500 hover:bg-emerald-600 shadow-emerald-500/20",
            Accent::Blue => "bg-blue-500 hover:bg-blue-600 shadow-blue-500/20",
            Accent::Amber => "bg-amber-500 hover:bg-amber-600 shadow-amber-500/20",
            Accent::Zinc => "bg-zinc-700 hover:bg-zinc-600 shadow-zinc-500/20",
        }
    }

    /// Classes for the large time readout.
    pub fn readout_class(self) -> &'static str {
        match self {
            Accent::Emerald => "text-emerald-400 text-neon",
            Accent::Blue => "text-blue-400",
            Accent::Amber => "text-amber-400",
            Accent::Zinc => "text-zinc-400",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Clock,
    History,
    Timer,
    Play,
    Pause,
    Reset,
    Globe,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Clock => "🕒",
            Icon::History => "⏱",
            Icon::Timer => "⏳",
            Icon::Play => "▶",
            Icon::Pause => "⏸",
            Icon::Reset => "↺",
            Icon::Globe => "🌐",
        }
    }
}

impl Mode {
    pub fn icon(self) -> Icon {
        match self {
            Mode::Clock => Icon::Clock,
            Mode::Stopwatch => Icon::History,
            Mode::Timer => Icon::Timer,
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            Mode::Clock => Accent::Emerald,
            Mode::Stopwatch => Accent::Blue,
            Mode::Timer => Accent::Amber,
        }
    }
}

/// Classes for a mode selector button.
pub fn mode_button_class(active: bool) -> &'static str {
    if active {
        "p-4 rounded-2xl transition-all bg-emerald-500/10 text-emerald-400 border border-emerald-500/20"
    } else {
        "p-4 rounded-2xl transition-all text-zinc-600 hover:text-zinc-300"
    }
}

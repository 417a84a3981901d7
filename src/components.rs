//! Pure Yew view components for the clock widget.
//!
//! This module contains stateless components that render based on props;
//! all state lives in `WidgetState`.

use chrono::{DateTime, Local};
use digital_clock::config::*;
use digital_clock::style::{mode_button_class, Accent, Icon};
use digital_clock::utils::{filter_digits, format_clock, format_long_date, format_stopwatch, format_timer};
use digital_clock::Mode;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    html! {
        <span class="icon" aria-hidden="true">{ props.icon.glyph() }</span>
    }
}

/// Mode selector button.
#[derive(Properties, PartialEq)]
pub struct ModeButtonProps {
    pub mode: Mode,
    pub active: bool,
    pub onselect: Callback<Mode>,
}

#[function_component(ModeButton)]
pub fn mode_button(props: &ModeButtonProps) -> Html {
    let onclick = {
        let mode = props.mode;
        props.onselect.reform(move |_: MouseEvent| mode)
    };

    html! {
        <button
            type="button"
            class={mode_button_class(props.active)}
            aria-label={props.mode.label()}
            aria-pressed={props.active.to_string()}
            {onclick}
        >
            <IconGlyph icon={props.mode.icon()} />
        </button>
    }
}

/// Round start/pause/reset button.
#[derive(Properties, PartialEq)]
pub struct ActionButtonProps {
    pub icon: Icon,
    pub label: AttrValue,
    pub accent: Accent,
    #[prop_or_default]
    pub disabled: bool,
    pub onclick: Callback<()>,
}

#[function_component(ActionButton)]
pub fn action_button(props: &ActionButtonProps) -> Html {
    let onclick = props.onclick.reform(|_: MouseEvent| ());

    html! {
        <button
            type="button"
            class={classes!(
                "w-16", "h-16", "rounded-full", "flex", "items-center", "justify-center",
                "text-white", "transition-all", "shadow-xl", "active:scale-90",
                "disabled:opacity-40", "disabled:cursor-not-allowed",
                props.accent.button_class()
            )}
            aria-label={props.label.clone()}
            disabled={props.disabled}
            {onclick}
        >
            <IconGlyph icon={props.icon} />
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClockFaceProps {
    pub now: DateTime<Local>,
}

#[function_component(ClockFace)]
pub fn clock_face(props: &ClockFaceProps) -> Html {
    html! {
        <div class="space-y-4">
            <h2 class={classes!("readout", Mode::Clock.accent().readout_class())}>
                { format_clock(&props.now) }
            </h2>
            <p class="text-xl text-emerald-600/60 font-medium tracking-widest uppercase">
                { format_long_date(&props.now) }
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StopwatchFaceProps {
    pub elapsed_ms: u64,
    pub running: bool,
    pub on_toggle: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(StopwatchFace)]
pub fn stopwatch_face(props: &StopwatchFaceProps) -> Html {
    let (icon, label) = if props.running {
        (Icon::Pause, PAUSE_STOPWATCH_LABEL)
    } else {
        (Icon::Play, START_STOPWATCH_LABEL)
    };

    html! {
        <div class="space-y-8">
            <h2 class={classes!("readout", "whitespace-nowrap", Mode::Stopwatch.accent().readout_class())}>
                { format_stopwatch(props.elapsed_ms) }
            </h2>
            <div class="flex justify-center gap-6">
                <ActionButton {icon} {label} accent={Mode::Stopwatch.accent()} onclick={props.on_toggle.clone()} />
                <ActionButton icon={Icon::Reset} label={RESET_STOPWATCH_LABEL} accent={Accent::Zinc} onclick={props.on_reset.clone()} />
            </div>
        </div>
    }
}

/// Digits-only duration field. Commits on blur and on Enter.
#[derive(Properties, PartialEq)]
pub struct DurationFieldProps {
    pub text: AttrValue,
    pub error: Option<AttrValue>,
    pub on_input: Callback<String>,
    pub on_commit: Callback<()>,
}

#[function_component(DurationField)]
pub fn duration_field(props: &DurationFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // The vdom value may not change when only rejected characters were
            // typed, so strip them from the element directly.
            let digits = filter_digits(&input.value());
            if digits != input.value() {
                input.set_value(&digits);
            }
            on_input.emit(digits);
        })
    };
    let onblur = props.on_commit.reform(|_: FocusEvent| ());
    let onkeydown = {
        let on_commit = props.on_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_commit.emit(());
            }
        })
    };

    html! {
        <div class="form-group">
            <label for={DURATION_INPUT_ID} class="sr-only">{ DURATION_INPUT_LABEL }</label>
            <input
                id={DURATION_INPUT_ID}
                type="text"
                inputmode="numeric"
                class="duration-input"
                aria-label={DURATION_INPUT_LABEL}
                aria-invalid={props.error.is_some().to_string()}
                aria-describedby={props.error.as_ref().map(|_| DURATION_ERROR_ID)}
                value={props.text.clone()}
                {oninput}
                {onblur}
                {onkeydown}
            />
            if let Some(err) = &props.error {
                <p id={DURATION_ERROR_ID} class="current-error" role="alert">
                    { err.clone() }
                </p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerFaceProps {
    pub remaining_secs: u32,
    pub running: bool,
    pub can_start: bool,
    pub text: AttrValue,
    pub error: Option<AttrValue>,
    pub on_toggle: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_input: Callback<String>,
    pub on_commit: Callback<()>,
}

#[function_component(TimerFace)]
pub fn timer_face(props: &TimerFaceProps) -> Html {
    let (icon, label) = if props.running {
        (Icon::Pause, PAUSE_TIMER_LABEL)
    } else {
        (Icon::Play, START_TIMER_LABEL)
    };
    // Pausing stays possible while the field holds a bad value.
    let disabled = !props.running && !props.can_start;

    html! {
        <div class="space-y-8">
            <h2 class={classes!("readout", Mode::Timer.accent().readout_class())}>
                { format_timer(props.remaining_secs) }
            </h2>
            <DurationField
                text={props.text.clone()}
                error={props.error.clone()}
                on_input={props.on_input.clone()}
                on_commit={props.on_commit.clone()}
            />
            <div class="flex justify-center gap-6">
                <ActionButton {icon} {label} accent={Mode::Timer.accent()} {disabled} onclick={props.on_toggle.clone()} />
                <ActionButton icon={Icon::Reset} label={RESET_TIMER_LABEL} accent={Accent::Zinc} onclick={props.on_reset.clone()} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub timezone: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <div class="mt-16 pt-8 border-t border-zinc-800 flex justify-between items-center text-zinc-500 text-xs">
            <div class="flex items-center gap-2">
                <IconGlyph icon={Icon::Globe} />
                <span>{ format!("LOCAL TIMEZONE: {}", props.timezone) }</span>
            </div>
            <p>{ FOOTER_NOTICE }</p>
        </div>
    }
}

//! Main module for the digital clock application using Yew.
//! Wires the widget state, periodic callbacks and view components.

use digital_clock::{
    config::{LOG_LEVEL, STOPWATCH_TICK_MS, TIMER_TICK_MS},
    timezone::local_timezone,
    Mode, Screen, WidgetAction, WidgetState,
};
use log::info;
use yew::prelude::*;

mod components;
mod hooks;

use components::{ClockFace, Footer, ModeButton, StopwatchFace, TimerFace};
use hooks::{use_interval, use_local_time};

/// Clock, stopwatch and countdown timer in one card.
#[function_component(TimeDisplayWidget)]
fn time_display_widget() -> Html {
    let state = use_reducer(WidgetState::default);
    let now = use_local_time();

    // One owned interval per engine; each is dropped as soon as its engine
    // stops running, switches away or the widget unmounts.
    {
        let dispatcher = state.dispatcher();
        use_interval(
            STOPWATCH_TICK_MS,
            state.screen == (Screen::Stopwatch { running: true }),
            Callback::from(move |_: ()| dispatcher.dispatch(WidgetAction::StopwatchTick)),
        );
    }
    {
        let dispatcher = state.dispatcher();
        use_interval(
            TIMER_TICK_MS,
            state.screen == (Screen::Timer { running: true }),
            Callback::from(move |_: ()| dispatcher.dispatch(WidgetAction::TimerTick)),
        );
    }

    use_effect_with((), |_| {
        info!("time display widget mounted");
        || info!("time display widget unmounted")
    });

    // Callbacks built from the dispatcher, which is stable across renders.
    let dispatch = |action: WidgetAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(action.clone()))
    };
    let on_select_mode = {
        let dispatcher = state.dispatcher();
        Callback::from(move |mode: Mode| dispatcher.dispatch(WidgetAction::SwitchMode(mode)))
    };
    let on_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |text: String| dispatcher.dispatch(WidgetAction::InputChanged(text)))
    };

    let face = match state.screen {
        Screen::Clock => html! { <ClockFace key="clock" {now} /> },
        Screen::Stopwatch { running } => html! {
            <StopwatchFace
                key="stopwatch"
                elapsed_ms={state.elapsed_ms}
                {running}
                on_toggle={dispatch(WidgetAction::ToggleRun)}
                on_reset={dispatch(WidgetAction::Reset)}
            />
        },
        Screen::Timer { running } => html! {
            <TimerFace
                key="timer"
                remaining_secs={state.remaining_secs}
                {running}
                can_start={state.can_start_timer()}
                text={state.input_text.clone()}
                error={state.input_error.clone().map(AttrValue::from)}
                on_toggle={dispatch(WidgetAction::ToggleRun)}
                on_reset={dispatch(WidgetAction::Reset)}
                {on_input}
                on_commit={dispatch(WidgetAction::CommitInput)}
            />
        },
    };

    html! {
        <div class="relative z-10 w-full max-w-2xl bg-zinc-900/50 backdrop-blur-xl border border-zinc-800 p-12 rounded-[3rem] text-center neon-shadow">
            <div class="flex justify-center gap-4 mb-12">
                { Mode::ALL.iter().map(|&mode| html! {
                    <ModeButton
                        key={mode.label()}
                        {mode}
                        active={state.mode() == mode}
                        onselect={on_select_mode.clone()}
                    />
                }).collect::<Html>() }
            </div>
            { face }
            <Footer timezone={local_timezone()} />
        </div>
    }
}

/// Page shell around the widget.
#[function_component]
pub fn App() -> Html {
    html! {
        <div class="min-h-screen bg-black flex flex-col items-center justify-center p-6 font-mono">
            <div class="absolute top-0 left-0 w-full h-full opacity-20 pointer-events-none overflow-hidden">
                <div class="glow" />
            </div>
            <TimeDisplayWidget />
        </div>
    }
}

/// Entry point: installs the panic hook and logger, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    yew::Renderer::<App>::new().render();
}

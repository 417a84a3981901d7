use chrono::{DateTime, Local};
use digital_clock::config::CLOCK_TICK_MS;
use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Emit `callback` every `millis` while `active` is true.
///
/// The interval handle is owned by the effect: whenever `millis` or `active`
/// changes, or the component unmounts, the previous handle is dropped (which
/// cancels it) before any new one is scheduled.
#[hook]
pub fn use_interval(millis: u32, active: bool, callback: Callback<()>) {
    use_effect_with((millis, active), move |&(millis, active)| {
        let handle = active.then(|| Interval::new(millis, move || callback.emit(())));
        move || drop(handle)
    });
}

/// Current local time, refreshed once per second for as long as the
/// component is mounted.
#[hook]
pub fn use_local_time() -> DateTime<Local> {
    let now = use_state(Local::now);

    let refresh = {
        let now = now.clone();
        Callback::from(move |_: ()| now.set(Local::now()))
    };
    use_interval(CLOCK_TICK_MS, true, refresh);

    *now
}

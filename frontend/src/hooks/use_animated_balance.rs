use gloo::timers::callback::Interval;
use shared::{AnimationConfig, BalanceCounter};
use yew::prelude::*;

use crate::services::logging::Logger;

const COMPONENT: &str = "animated-balance";

/// Result from the animated balance hook
pub struct UseAnimatedBalanceResult {
    /// Value to display right now
    pub value: f64,
    /// True once the counter reached the target and the timer is gone
    pub settled: bool,
}

/// Count the displayed balance up from zero to `target` once, on mount.
///
/// A repeating timer fires every `config.interval_ms()` and advances a
/// [`BalanceCounter`]. The timer handle lives in a mutable ref owned by the
/// hook:
/// - it is dropped (which clears the browser interval) as soon as the counter settles
/// - it is dropped on unmount if the animation has not finished yet
///
/// Later changes to `target` or `config` do not restart the animation.
#[hook]
pub fn use_animated_balance(target: f64, config: AnimationConfig) -> UseAnimatedBalanceResult {
    let value = use_state(|| 0.0f64);
    let settled = use_state(|| false);
    let timer = use_mut_ref(|| Option::<Interval>::None);

    // Start the counter on mount
    {
        let value = value.clone();
        let settled = settled.clone();
        let timer = timer.clone();

        use_effect_with((), move |_| {
            let mut counter = BalanceCounter::new(target, &config);

            if counter.is_settled() {
                value.set(counter.current());
                settled.set(true);
            } else {
                Logger::debug_with_component(
                    COMPONENT,
                    &format!(
                        "Starting balance animation: {} steps every {}ms",
                        config.steps,
                        config.interval_ms()
                    ),
                );

                let handle = Interval::new(config.interval_ms(), move || {
                    if let Some(next) = counter.tick() {
                        value.set(next);
                        if counter.is_settled() {
                            settled.set(true);
                        }
                    }
                });
                *timer.borrow_mut() = Some(handle);
            }

            move || {
                if timer.borrow_mut().take().is_some() {
                    Logger::debug_with_component(COMPONENT, "Unmounted mid-animation, timer cleared");
                }
            }
        });
    }

    // The interval must not be dropped from inside its own callback, so it is
    // cleared here on the render after the counter settles.
    {
        let timer = timer.clone();
        use_effect_with(*settled, move |settled| {
            if *settled && timer.borrow_mut().take().is_some() {
                Logger::info_with_component(COMPONENT, "Balance animation finished, timer cleared");
            }
            || ()
        });
    }

    UseAnimatedBalanceResult {
        value: *value,
        settled: *settled,
    }
}

use shared::BalanceVisibility;
use yew::prelude::*;

pub struct UseBalanceVisibilityResult {
    pub visibility: BalanceVisibility,
    pub toggle: Callback<MouseEvent>,
}

/// Show/hide state of the total balance. Starts visible and is not persisted.
#[hook]
pub fn use_balance_visibility() -> UseBalanceVisibilityResult {
    let visibility = use_state(BalanceVisibility::default);

    let toggle = {
        let visibility = visibility.clone();
        Callback::from(move |_: MouseEvent| {
            visibility.set(visibility.toggled());
        })
    };

    UseBalanceVisibilityResult {
        visibility: *visibility,
        toggle,
    }
}

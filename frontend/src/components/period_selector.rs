use shared::Period;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct PeriodSelectorProps {
    pub value: Period,
    pub on_change: Callback<Period>,
}

#[function_component(PeriodSelector)]
pub fn period_selector(props: &PeriodSelectorProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<Period>() {
                Ok(period) => on_change.emit(period),
                Err(e) => Logger::warn_with_component("period-selector", &e.to_string()),
            }
        })
    };

    html! {
        <select class="period-select" {onchange}>
            {for Period::ALL.iter().map(|period| html! {
                <option value={period.value()} selected={*period == props.value}>
                    {period.label()}
                </option>
            })}
        </select>
    }
}

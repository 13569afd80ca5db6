use shared::{SummaryCard, SummaryValue};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub cards: Vec<SummaryCard>,
    /// Current text of the total balance (animated amount or mask)
    pub balance_text: String,
    pub balance_visible: bool,
    /// True while the balance counter is still running
    pub balance_animating: bool,
    pub on_toggle_visibility: Callback<MouseEvent>,
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    html! {
        <section class="summary-grid">
            {for props.cards.iter().map(|card| {
                let is_balance = matches!(card.value, SummaryValue::Balance);
                let value_class = if is_balance {
                    classes!(
                        "summary-value",
                        "gradient-text",
                        props.balance_animating.then_some("counting")
                    )
                } else {
                    classes!("summary-value", card.tone.css_class())
                };
                let trend_glyph = if card.trending_up() { "📈" } else { "📉" };

                html! {
                    <div class={classes!("card", "summary-card", is_balance.then_some("neon-glow"))}>
                        <div class="summary-header">
                            <span class="summary-title">{card.title}</span>
                            {if is_balance {
                                html! {
                                    <button
                                        class="icon-btn visibility-toggle"
                                        aria-label={if props.balance_visible { "Hide balance" } else { "Show balance" }}
                                        onclick={props.on_toggle_visibility.clone()}
                                    >
                                        {if props.balance_visible { "👁" } else { "🙈" }}
                                    </button>
                                }
                            } else {
                                html! {}
                            }}
                        </div>
                        <div class={value_class}>{card.value_text(&props.balance_text)}</div>
                        <div class={classes!("summary-change", card.tone.css_class())}>
                            <span class="trend-icon">{trend_glyph}</span>
                            {card.change_text()}
                        </div>
                    </div>
                }
            })}
        </section>
    }
}

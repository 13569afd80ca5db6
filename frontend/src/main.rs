mod components;
mod hooks;
mod services;

use shared::{sample_data, Period};
use yew::prelude::*;

use components::{BalanceTrendChart, GoalCard, Header, SpendingChart, SummaryCards, TransactionList};
use hooks::{use_animated_balance, use_balance_visibility};
use services::{config::load_dashboard_config, Logger};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_dashboard_config());

    // Sample data is fixed for the lifetime of the page
    let balance_history = use_memo((), |_| sample_data::balance_history());
    let categories = use_memo((), |_| sample_data::expense_categories());
    let transactions = use_memo((), |_| sample_data::recent_transactions());
    let goals = use_memo((), |_| sample_data::goals());
    let cards = use_memo((), |_| sample_data::summary_cards());

    let visibility = use_balance_visibility();
    let animated = use_animated_balance(config.target_balance, config.animation);
    let selected_period = use_state(Period::default);

    // Only the selector reflects the choice; the trend chart keeps the full history
    let on_period_change = {
        let selected_period = selected_period.clone();
        Callback::from(move |period: Period| {
            Logger::debug_with_component("dashboard", &format!("Period selected: {}", period.value()));
            selected_period.set(period);
        })
    };

    let balance_text = visibility
        .visibility
        .render(animated.value, &config.balance_mask);

    html! {
        <>
            <Header />

            <main class="main">
                <div class="container">
                    <section class="welcome">
                        <h2>{config.welcome_heading()}</h2>
                        <p class="muted">{"Here's what's happening with your money today."}</p>
                    </section>

                    <SummaryCards
                        cards={(*cards).clone()}
                        {balance_text}
                        balance_visible={visibility.visibility.is_visible()}
                        balance_animating={!animated.settled}
                        on_toggle_visibility={visibility.toggle.clone()}
                    />

                    <div class="charts-grid">
                        <BalanceTrendChart
                            points={(*balance_history).clone()}
                            period={*selected_period}
                            {on_period_change}
                        />
                        <SpendingChart categories={(*categories).clone()} />
                    </div>

                    <div class="details-grid">
                        <GoalCard goals={(*goals).clone()} />
                        <TransactionList transactions={(*transactions).clone()} />
                    </div>
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

use shared::Transaction;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub transactions: Vec<Transaction>,
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    html! {
        <section class="card transactions-section">
            <div class="card-header">
                <h3 class="card-title">{"Recent Transactions"}</h3>
                // Filtering and export are not available yet
                <div class="header-actions">
                    <button class="icon-btn" title="Filter" aria-label="Filter">{"⏷"}</button>
                    <button class="icon-btn" title="Download" aria-label="Download">{"⭳"}</button>
                </div>
            </div>

            {if props.transactions.is_empty() {
                html! { <div class="empty">{"No recent transactions"}</div> }
            } else {
                html! {
                    <ul class="transaction-list">
                        {for props.transactions.iter().map(|transaction| {
                            let icon = transaction.icon();

                            html! {
                                <li class="transaction-row" key={transaction.id}>
                                    <div class="transaction-main">
                                        <div class={icon.css_class()}>{icon.glyph()}</div>
                                        <div>
                                            <p class="description">{&transaction.description}</p>
                                            <p class="subtitle">{transaction.subtitle()}</p>
                                        </div>
                                    </div>
                                    <div class="transaction-side">
                                        <p class={transaction.amount_type().css_class()}>
                                            {transaction.display_amount()}
                                        </p>
                                        <span class="badge">{transaction.kind.as_str()}</span>
                                    </div>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
        </section>
    }
}

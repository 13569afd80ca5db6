pub mod charts;
pub mod goal_card;
pub mod header;
pub mod period_selector;
pub mod summary_cards;
pub mod transactions;

pub use charts::{BalanceTrendChart, SpendingChart};
pub use goal_card::GoalCard;
pub use header::Header;
pub use summary_cards::SummaryCards;
pub use transactions::TransactionList;

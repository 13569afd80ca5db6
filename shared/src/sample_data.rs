//! Fixed sample records the dashboard renders. They stand in for a real data
//! source and are rebuilt on every call; nothing mutates them.

use crate::{
    BalancePoint, ExpenseCategory, Goal, Rgb, SummaryCard, SummaryValue, Tone, Transaction,
    TransactionKind,
};

pub const INDIGO: Rgb = Rgb::from_hex(0x6366F1);
pub const VIOLET: Rgb = Rgb::from_hex(0x8B5CF6);
pub const CYAN: Rgb = Rgb::from_hex(0x06B6D4);
pub const EMERALD: Rgb = Rgb::from_hex(0x10B981);
pub const AMBER: Rgb = Rgb::from_hex(0xF59E0B);
pub const RED: Rgb = Rgb::from_hex(0xEF4444);

/// Number of categories listed under the spending donut
pub const CATEGORY_LEGEND_LEN: usize = 3;

pub fn balance_history() -> Vec<BalancePoint> {
    [
        ("Jan", 45000.0, 12000.0, 8000.0),
        ("Feb", 52000.0, 15000.0, 8000.0),
        ("Mar", 48000.0, 11000.0, 15000.0),
        ("Apr", 61000.0, 18000.0, 5000.0),
        ("May", 55000.0, 14000.0, 20000.0),
        ("Jun", 67000.0, 22000.0, 10000.0),
    ]
    .into_iter()
    .map(|(month, balance, income, expenses)| BalancePoint {
        month: month.to_string(),
        balance,
        income,
        expenses,
    })
    .collect()
}

pub fn expense_categories() -> Vec<ExpenseCategory> {
    [
        ("Food & Dining", 2800.0, INDIGO),
        ("Transportation", 1200.0, VIOLET),
        ("Shopping", 1800.0, CYAN),
        ("Entertainment", 800.0, EMERALD),
        ("Bills & Utilities", 1500.0, AMBER),
        ("Healthcare", 600.0, RED),
    ]
    .into_iter()
    .map(|(name, value, color)| ExpenseCategory {
        name: name.to_string(),
        value,
        color,
    })
    .collect()
}

pub fn recent_transactions() -> Vec<Transaction> {
    use TransactionKind::*;

    [
        (1, "Spotify Premium", -9.99, "Entertainment", "2024-01-15", Subscription),
        (2, "Salary Deposit", 5200.00, "Income", "2024-01-15", Income),
        (3, "Grocery Store", -127.45, "Food & Dining", "2024-01-14", Expense),
        (4, "Gas Station", -45.20, "Transportation", "2024-01-14", Expense),
        (5, "Amazon Purchase", -89.99, "Shopping", "2024-01-13", Expense),
        (6, "Freelance Payment", 850.00, "Income", "2024-01-12", Income),
        (7, "Netflix", -15.99, "Entertainment", "2024-01-12", Subscription),
        (8, "Electric Bill", -98.50, "Bills & Utilities", "2024-01-11", Expense),
    ]
    .into_iter()
    .map(|(id, description, amount, category, date, kind)| Transaction {
        id,
        description: description.to_string(),
        amount,
        category: category.to_string(),
        date: date.to_string(),
        kind,
    })
    .collect()
}

pub fn goals() -> Vec<Goal> {
    [
        ("Emergency Fund", 8500.0, 15000.0, INDIGO),
        ("Vacation", 2300.0, 5000.0, VIOLET),
        ("New Car", 12000.0, 25000.0, CYAN),
        ("Investment", 4200.0, 10000.0, EMERALD),
    ]
    .into_iter()
    .map(|(name, current, target, color)| Goal {
        name: name.to_string(),
        current,
        target,
        color,
    })
    .collect()
}

pub fn summary_cards() -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            title: "Total Balance",
            value: SummaryValue::Balance,
            change_percent: 12.5,
            tone: Tone::Positive,
        },
        SummaryCard {
            title: "Monthly Income",
            value: SummaryValue::WholeDollars(22450.0),
            change_percent: 8.2,
            tone: Tone::Positive,
        },
        SummaryCard {
            title: "Monthly Expenses",
            value: SummaryValue::WholeDollars(8720.0),
            change_percent: -3.1,
            tone: Tone::Negative,
        },
        SummaryCard {
            title: "Savings Rate",
            value: SummaryValue::Percent(61.2),
            change_percent: 5.3,
            tone: Tone::Info,
        },
    ]
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod animation;
pub mod config;
pub mod error;
pub mod format;
pub mod sample_data;

pub use animation::BalanceCounter;
pub use config::{AnimationConfig, DashboardConfig};
pub use error::DashboardError;
pub use format::{format_change, format_currency, format_percent, format_whole_dollars};

/// An RGB display color, written as `#RRGGBB` in CSS and config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// CSS color literal, e.g. `#6366F1`
    pub fn css(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

impl FromStr for Rgb {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        // from_str_radix alone would accept a leading sign
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DashboardError::InvalidConfig(format!("bad color {s:?}")));
        }
        u32::from_str_radix(digits, 16)
            .map(Rgb::from_hex)
            .map_err(|_| DashboardError::InvalidConfig(format!("bad color {s:?}")))
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.css())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One month of account history for the balance trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    /// Short month label shown on the x axis ("Jan", "Feb", ...)
    pub month: String,
    pub balance: f64,
    pub income: f64,
    pub expenses: f64,
}

/// Spending aggregated under one category label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub name: String,
    pub value: f64,
    pub color: Rgb,
}

impl ExpenseCategory {
    /// Legend text for the category value, printed as a bare integer: `$2800`
    pub fn legend_value(&self) -> String {
        format!("${:.0}", self.value)
    }
}

/// Kind of a transaction, used for the icon and the badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
    Subscription,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
            TransactionKind::Subscription => "subscription",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
impl FromStr for TransactionKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            "subscription" => Ok(TransactionKind::Subscription),
            other => Err(DashboardError::UnknownTransactionKind(other.to_string())),
        }
    }
}

/// Directional indicator shown next to a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionIcon {
    ArrowUpRight,
    ArrowDownRight,
    Neutral,
}

impl TransactionIcon {
    pub fn for_kind(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => TransactionIcon::ArrowUpRight,
            TransactionKind::Expense | TransactionKind::Subscription => {
                TransactionIcon::ArrowDownRight
            }
        }
    }

    /// Icon for a raw kind label; labels that are not a known kind get the neutral glyph.
    #[cfg(test)]
    pub(crate) fn for_label(label: &str) -> Self {
        label
            .parse::<TransactionKind>()
            .map(Self::for_kind)
            .unwrap_or(TransactionIcon::Neutral)
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            TransactionIcon::ArrowUpRight => "↗",
            TransactionIcon::ArrowDownRight => "↘",
            TransactionIcon::Neutral => "⋯",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TransactionIcon::ArrowUpRight => "tx-icon up",
            TransactionIcon::ArrowDownRight => "tx-icon down",
            TransactionIcon::Neutral => "tx-icon neutral",
        }
    }
}

/// Type of transaction amount for styling and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountType {
    Positive,
    Negative,
    Zero,
}

impl AmountType {
    pub fn classify(amount: f64) -> Self {
        if amount > 0.0 {
            AmountType::Positive
        } else if amount < 0.0 {
            AmountType::Negative
        } else {
            AmountType::Zero
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AmountType::Positive => "amount positive",
            AmountType::Negative => "amount negative",
            AmountType::Zero => "amount zero",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub description: String,
    /// Signed amount (positive for income, negative for spending)
    pub amount: f64,
    pub category: String,
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn amount_type(&self) -> AmountType {
        AmountType::classify(self.amount)
    }

    /// Amount as shown in the list: positive values get an explicit `+`.
    pub fn display_amount(&self) -> String {
        let prefix = if self.amount > 0.0 { "+" } else { "" };
        format!("{}{}", prefix, format_currency(self.amount))
    }

    /// Second line of a transaction row: `Food & Dining • 2024-01-14`
    pub fn subtitle(&self) -> String {
        format!("{} • {}", self.category, self.date)
    }

    pub fn icon(&self) -> TransactionIcon {
        TransactionIcon::for_kind(self.kind)
    }
}

/// A savings target with its current progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub current: f64,
    pub target: f64,
    pub color: Rgb,
}

impl Goal {
    /// Progress bar fill in percent, clamped to `[0, 100]`.
    /// A goal without a positive target has no progress.
    pub fn progress_percent(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.current / self.target * 100.0).clamp(0.0, 100.0)
    }

    /// Whole-number completion shown under the bar
    pub fn completion_percent(&self) -> u32 {
        self.progress_percent().round() as u32
    }

    pub fn completion_caption(&self) -> String {
        format!("{}% complete", self.completion_percent())
    }

    /// `$8,500.00 / $15,000.00`
    pub fn progress_label(&self) -> String {
        format!(
            "{} / {}",
            format_currency(self.current),
            format_currency(self.target)
        )
    }
}

/// Time window offered by the balance trend selector.
///
/// The selection is stored but the chart keeps drawing the fixed six-month
/// history regardless of the chosen window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[default]
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
    ];

    /// Value stored in the `<select>` element
    pub fn value(&self) -> &'static str {
        match self {
            Period::OneMonth => "1m",
            Period::ThreeMonths => "3m",
            Period::SixMonths => "6m",
            Period::OneYear => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::OneMonth => "1M",
            Period::ThreeMonths => "3M",
            Period::SixMonths => "6M",
            Period::OneYear => "1Y",
        }
    }
}

impl FromStr for Period {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|period| period.value() == s)
            .ok_or_else(|| DashboardError::UnknownPeriod(s.to_string()))
    }
}

/// Whether the total balance is shown or masked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BalanceVisibility {
    #[default]
    Visible,
    Hidden,
}

impl BalanceVisibility {
    pub fn toggled(self) -> Self {
        match self {
            BalanceVisibility::Visible => BalanceVisibility::Hidden,
            BalanceVisibility::Hidden => BalanceVisibility::Visible,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, BalanceVisibility::Visible)
    }

    /// Formatted balance while visible, the mask otherwise
    pub fn render(&self, amount: f64, mask: &str) -> String {
        match self {
            BalanceVisibility::Visible => format_currency(amount),
            BalanceVisibility::Hidden => mask.to_string(),
        }
    }
}

/// Color tone of a summary card's value and trend line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Info,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Positive => "tone-positive",
            Tone::Negative => "tone-negative",
            Tone::Info => "tone-info",
        }
    }
}

/// Headline value of a summary card
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryValue {
    /// The animated total balance, subject to the visibility toggle
    Balance,
    WholeDollars(f64),
    Percent(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: SummaryValue,
    /// Month-over-month change in percent
    pub change_percent: f64,
    pub tone: Tone,
}

impl SummaryCard {
    /// Text of the headline value. `balance_text` is what the balance card shows
    /// right now (animated amount or mask).
    pub fn value_text(&self, balance_text: &str) -> String {
        match self.value {
            SummaryValue::Balance => balance_text.to_string(),
            SummaryValue::WholeDollars(amount) => format_whole_dollars(amount),
            SummaryValue::Percent(rate) => format_percent(rate),
        }
    }

    pub fn change_text(&self) -> String {
        format_change(self.change_percent)
    }

    pub fn trending_up(&self) -> bool {
        self.change_percent >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(amount: f64, kind: TransactionKind) -> Transaction {
        Transaction {
            id: 1,
            description: "Test".to_string(),
            amount,
            category: "Income".to_string(),
            date: "2024-01-15".to_string(),
            kind,
        }
    }

    #[test]
    fn test_rgb_round_trip_css() {
        let color = Rgb::from_hex(0x6366F1);
        assert_eq!(color, Rgb { r: 0x63, g: 0x66, b: 0xF1 });
        assert_eq!(color.css(), "#6366F1");
        assert_eq!("#6366f1".parse::<Rgb>().unwrap(), color);
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#GGGGGG".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_rgb_rejects_signed_digits() {
        assert!("#+FFFFF".parse::<Rgb>().is_err());
        assert!("-FFFFF".parse::<Rgb>().is_err());
        assert!(serde_json::from_str::<Rgb>("\"#+12345\"").is_err());
        assert_eq!("FFFFFF".parse::<Rgb>().unwrap(), Rgb::from_hex(0xFFFFFF));
    }

    #[test]
    fn test_transaction_kind_parse() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert_eq!(
            "subscription".parse::<TransactionKind>().unwrap(),
            TransactionKind::Subscription
        );
        assert_eq!(
            "transfer".parse::<TransactionKind>(),
            Err(DashboardError::UnknownTransactionKind("transfer".to_string()))
        );
    }

    #[test]
    fn test_icon_mapping() {
        assert_eq!(TransactionIcon::for_kind(TransactionKind::Income), TransactionIcon::ArrowUpRight);
        assert_eq!(TransactionIcon::for_kind(TransactionKind::Expense), TransactionIcon::ArrowDownRight);
        assert_eq!(
            TransactionIcon::for_kind(TransactionKind::Subscription),
            TransactionIcon::ArrowDownRight
        );
        assert_eq!(TransactionIcon::for_label("refund"), TransactionIcon::Neutral);
        assert_eq!(TransactionIcon::for_label(""), TransactionIcon::Neutral);
        assert_eq!(TransactionIcon::for_label("income"), TransactionIcon::ArrowUpRight);
    }

    #[test]
    fn test_transaction_display_amount() {
        let income = transaction(5200.0, TransactionKind::Income);
        assert_eq!(income.display_amount(), "+$5,200.00");
        assert_eq!(income.amount_type(), AmountType::Positive);
        assert_eq!(income.icon(), TransactionIcon::ArrowUpRight);

        let expense = transaction(-127.45, TransactionKind::Expense);
        assert_eq!(expense.display_amount(), "-$127.45");
        assert_eq!(expense.amount_type(), AmountType::Negative);
        assert_eq!(expense.amount_type().css_class(), "amount negative");

        let zero = transaction(0.0, TransactionKind::Expense);
        assert_eq!(zero.display_amount(), "$0.00");
        assert_eq!(zero.amount_type(), AmountType::Zero);
    }

    #[test]
    fn test_transaction_subtitle() {
        let tx = transaction(-9.99, TransactionKind::Subscription);
        assert_eq!(tx.subtitle(), "Income • 2024-01-15");
    }

    #[test]
    fn test_goal_percentages() {
        let goal = Goal {
            name: "Emergency Fund".to_string(),
            current: 8500.0,
            target: 15000.0,
            color: Rgb::from_hex(0x6366F1),
        };
        assert_eq!(goal.completion_percent(), 57);
        assert_eq!(goal.completion_caption(), "57% complete");
        assert_eq!(goal.progress_label(), "$8,500.00 / $15,000.00");
        assert!((goal.progress_percent() - 56.666).abs() < 0.01);
    }

    #[test]
    fn test_goal_percent_is_clamped() {
        let mut goal = Goal {
            name: "Overfunded".to_string(),
            current: 150.0,
            target: 100.0,
            color: Rgb::from_hex(0x10B981),
        };
        assert_eq!(goal.completion_percent(), 100);

        goal.current = -20.0;
        assert_eq!(goal.completion_percent(), 0);

        goal.current = 50.0;
        goal.target = 0.0;
        assert_eq!(goal.progress_percent(), 0.0);
    }

    #[test]
    fn test_period_values() {
        assert_eq!(Period::default(), Period::SixMonths);
        for period in Period::ALL {
            assert_eq!(period.value().parse::<Period>().unwrap(), period);
        }
        assert_eq!(Period::OneYear.label(), "1Y");
        assert_eq!(
            "2w".parse::<Period>(),
            Err(DashboardError::UnknownPeriod("2w".to_string()))
        );
        assert_eq!(serde_json::to_string(&Period::ThreeMonths).unwrap(), "\"3m\"");
    }

    #[test]
    fn test_visibility_toggle_alternates_rendering() {
        let mask = "••••••";
        let visible = BalanceVisibility::default();
        assert_eq!(visible.render(67420.5, mask), "$67,420.50");

        let hidden = visible.toggled();
        assert!(!hidden.is_visible());
        assert_eq!(hidden.render(67420.5, mask), mask);

        let back = hidden.toggled();
        assert!(back.is_visible());
        assert_eq!(back.render(67420.5, mask), "$67,420.50");
    }

    #[test]
    fn test_summary_card_text() {
        let income = SummaryCard {
            title: "Monthly Income",
            value: SummaryValue::WholeDollars(22450.0),
            change_percent: 8.2,
            tone: Tone::Positive,
        };
        assert_eq!(income.value_text("ignored"), "$22,450");
        assert_eq!(income.change_text(), "+8.2% from last month");
        assert!(income.trending_up());

        let balance = SummaryCard {
            title: "Total Balance",
            value: SummaryValue::Balance,
            change_percent: -3.1,
            tone: Tone::Negative,
        };
        assert_eq!(balance.value_text("••••••"), "••••••");
        assert!(!balance.trending_up());
        assert_eq!(balance.tone.css_class(), "tone-negative");
    }
}

//! Number formatting and the dashboard's summary cards.

use api::DashboardStats;

/// Which statistic a card shows; drives the icon and styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    Users,
    Appointments,
    Barbers,
    Revenue,
    Pending,
    Rating,
}

/// One rendered summary card.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryCard {
    pub kind: CardKind,
    pub title: &'static str,
    pub value: String,
}

/// Build the six dashboard cards. Absent stats render as zeros.
pub fn summary_cards(stats: Option<&DashboardStats>, currency_symbol: &str) -> Vec<SummaryCard> {
    let s = stats.copied().unwrap_or_default();
    vec![
        SummaryCard {
            kind: CardKind::Users,
            title: "Total Users",
            value: format_count(s.total_users),
        },
        SummaryCard {
            kind: CardKind::Appointments,
            title: "Total Appointments",
            value: format_count(s.total_appointments),
        },
        SummaryCard {
            kind: CardKind::Barbers,
            title: "Total Barbers",
            value: format_count(s.total_barbers),
        },
        SummaryCard {
            kind: CardKind::Revenue,
            title: "Total Revenue",
            value: format_currency(s.total_revenue, currency_symbol),
        },
        SummaryCard {
            kind: CardKind::Pending,
            title: "Pending Appointments",
            value: format_count(s.pending_appointments),
        },
        SummaryCard {
            kind: CardKind::Rating,
            title: "Average Rating",
            value: format_rating(s.average_rating),
        },
    ]
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_count(n: u32) -> String {
    group_thousands(u64::from(n))
}

/// Currency with grouped thousands; cents only when non-zero (`$12,500`, `$12,500.50`).
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    match cents % 100 {
        0 => format!("{sign}{symbol}{whole}"),
        frac => format!("{sign}{symbol}{whole}.{frac:02}"),
    }
}

/// One decimal place, e.g. `4.5`, `0.0`.
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

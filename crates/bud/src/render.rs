//! Plain-text table output for `bud ls`.
use std::fmt::Write;

use crossterm::style::{Color, Stylize, style};
use ledger::{Balance, Category, Listing, Record, Totals};

const HEADERS: [&str; 6] = ["IDX", "NAME", "TYPE", "AMOUNT", "CURRENCY", "CONFIDENCE"];

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub income: Color,
    pub expense: Color,
    pub pending_income: Color,
    pub pending_expense: Color,
    /// `false` renders without escape codes.
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            income: Color::Green,
            expense: Color::Red,
            pending_income: Color::Yellow,
            pending_expense: Color::Magenta,
            enabled: true,
        }
    }
}

impl Theme {
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    fn color_of(&self, category: Category) -> Color {
        match category {
            Category::Income => self.income,
            Category::Expense => self.expense,
            Category::PendingIncome => self.pending_income,
            Category::PendingExpense => self.pending_expense,
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.enabled {
            style(text).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

fn cells(index: usize, record: &Record) -> [String; 6] {
    [
        index.to_string(),
        record.name.clone(),
        record.kind.to_string(),
        format!("{:.2}", record.amount),
        record.currency.clone(),
        format!("{:.2}", record.confidence),
    ]
}

/// Renders the records table followed by the totals.
pub fn listing(listing: &Listing, currency: &str, theme: &Theme) -> String {
    let rows: Vec<(Category, [String; 6])> = listing
        .indexed()
        .map(|(i, record)| (record.kind.category(), cells(i, record)))
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for (_, row) in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = widths.iter().fold(String::from("+"), |mut acc, w| {
        acc.push_str(&"-".repeat(w + 2));
        acc.push('+');
        acc
    });

    let mut out = String::new();
    let _ = writeln!(out, "{border}");
    out.push('|');
    for (header, width) in HEADERS.iter().zip(widths) {
        let _ = write!(out, " {} |", theme.bold(&pad(header, width)));
    }
    out.push('\n');
    let _ = writeln!(out, "{border}");
    for (category, row) in &rows {
        let color = theme.color_of(*category);
        out.push('|');
        for (cell, width) in row.iter().zip(widths) {
            let _ = write!(out, " {} |", theme.paint(&pad(cell, width), color));
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{border}");

    out.push('\n');
    out.push_str(&totals(&listing.totals, currency, theme));
    out
}

/// The three summary lines under the table.
pub fn totals(totals: &Totals, currency: &str, theme: &Theme) -> String {
    let plus = theme.paint("+", theme.income);
    let minus = theme.paint("-", theme.expense);
    let net = totals.net();

    let mut out = String::new();
    let _ = writeln!(out, "Total Income: {plus}{:.2} {currency}", totals.income);
    let _ = writeln!(out, "Total Expense: {minus}{:.2} {currency}", totals.expense);
    let _ = match totals.balance() {
        Balance::Positive => writeln!(out, "Net Balance: {plus}{net:.2} {currency}"),
        Balance::Negative => writeln!(out, "Net Balance: {minus}{:.2} {currency}", -net),
        Balance::Zero => writeln!(out, "Net Balance: {:.2} {currency}", net.abs()),
    };
    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

use core::fmt;

use serde::{Deserialize, Serialize};

/// What a record represents. Serialized as its snake_case name, see
/// [`RecordKind::as_str`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RecordKind {
    #[default]
    Expense,
    Income,
    PendingExpense,
    PendingIncome,
}

/// Display category a renderer picks colors from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Income,
    Expense,
    PendingIncome,
    PendingExpense,
}

impl RecordKind {
    /// Every kind, in the order forms offer them.
    pub const ALL: [RecordKind; 4] = [
        Self::Expense,
        Self::Income,
        Self::PendingExpense,
        Self::PendingIncome,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
            Self::PendingExpense => "pending_expense",
            Self::PendingIncome => "pending_income",
        }
    }

    /// Human label, e.g. `Pending Income`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Expense => "Expense",
            Self::Income => "Income",
            Self::PendingExpense => "Pending Expense",
            Self::PendingIncome => "Pending Income",
        }
    }

    /// Pending kinds carry a confidence score instead of certainty.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::PendingExpense | Self::PendingIncome)
    }

    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Expense => Category::Expense,
            Self::Income => Category::Income,
            Self::PendingExpense => Category::PendingExpense,
            Self::PendingIncome => Category::PendingIncome,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RecordKind {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            "pending_expense" => Ok(Self::PendingExpense),
            "pending_income" => Ok(Self::PendingIncome),
            other => Err(format!("invalid record kind: {other}")),
        }
    }
}

impl TryFrom<String> for RecordKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<RecordKind> for String {
    fn from(kind: RecordKind) -> Self {
        kind.as_str().to_string()
    }
}

use crate::{Record, RecordKind};

/// Sign of the net balance, drives how it is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Balance {
    Positive,
    Negative,
    Zero,
}

/// Running totals of a record set. Pending kinds count toward neither sum.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

impl Totals {
    pub fn from_records(records: &[Record]) -> Self {
        records.iter().fold(Self::default(), |mut totals, record| {
            match record.kind {
                RecordKind::Income => totals.income += record.amount,
                RecordKind::Expense => totals.expense += record.amount,
                RecordKind::PendingIncome | RecordKind::PendingExpense => {}
            }
            totals
        })
    }

    /// Income minus expense.
    #[must_use]
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }

    #[must_use]
    pub fn balance(&self) -> Balance {
        let net = self.net();
        if net > 0.0 {
            Balance::Positive
        } else if net < 0.0 {
            Balance::Negative
        } else {
            Balance::Zero
        }
    }
}

//! Personal ledger: budget records kept in a single MessagePack file.
//!
//! [`Store`] owns the file, [`Ledger`] runs the operations on top of it and
//! talks to the user only through a [`RecordForm`].
pub use commands::{Ledger, LedgerBuilder, Listing, Outcome};
pub use error::{LedgerError, Op};
pub use form::{FormOutcome, RecordForm};
pub use index::{check_bounds, parse_index, resolve_index};
pub use kind::{Category, RecordKind};
pub use location::{DATA_HOME_ENV, FILE_NAME, StorageLocation};
pub use record::{CERTAIN, CURRENCIES, Record, sort_by_name};
pub use store::Store;
pub use totals::{Balance, Totals};

mod commands;
mod error;
mod form;
mod index;
mod kind;
mod location;
mod record;
mod store;
mod totals;

pub type ResultLedger<T> = Result<T, LedgerError>;

//! Records have no stored identifier: edit and delete address them by their
//! position in the name-sorted set of the current load. Every lookup goes
//! through this module: [`parse_index`] before the load, [`check_bounds`]
//! once the length is known.
use crate::{LedgerError, ResultLedger};

/// Parses what the user typed. Runs before anything touches the disk.
pub fn parse_index(raw: &str) -> ResultLedger<i64> {
    raw.trim()
        .parse()
        .map_err(|_| LedgerError::InvalidIndex(raw.to_string()))
}

/// Checks a parsed index against a set of `len` records.
pub fn check_bounds(index: i64, len: usize) -> ResultLedger<usize> {
    usize::try_from(index)
        .ok()
        .filter(|i| *i < len)
        .ok_or(LedgerError::IndexOutOfRange { index, len })
}

/// [`parse_index`] then [`check_bounds`].
pub fn resolve_index(raw: &str, len: usize) -> ResultLedger<usize> {
    check_bounds(parse_index(raw)?, len)
}

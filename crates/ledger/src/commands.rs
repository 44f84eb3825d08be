//! Ledger operations.
//!
//! Every operation is one load → mutate → save cycle against the [`Store`];
//! nothing is kept in memory between calls. Indexes handed out by
//! [`Ledger::list`] are only meaningful until the next write.
use tracing::debug;

use crate::{
    FormOutcome, Record, RecordForm, ResultLedger, StorageLocation, Store, Totals,
    index::{check_bounds, parse_index},
};

/// Records as shown to the user, with their totals.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub records: Vec<Record>,
    pub totals: Totals,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records paired with the index `edit` and `delete` accept.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &Record)> {
        self.records.iter().enumerate()
    }
}

/// Result of an operation that involved a form.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    Done(T),
    Cancelled,
}

#[derive(Debug)]
pub struct Ledger {
    store: Store,
}

impl Ledger {
    /// Return a builder for `Ledger`.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn list(&self) -> ResultLedger<Listing> {
        let records = self.store.load()?;
        let totals = Totals::from_records(&records);
        Ok(Listing { records, totals })
    }

    /// Appends the record produced by `form`. The set is saved in append
    /// order; the next load sorts it.
    pub fn add(&self, form: &mut impl RecordForm) -> ResultLedger<Outcome<Record>> {
        let mut records = self.store.load()?;

        let mut record = match form.collect(Record::default())? {
            FormOutcome::Submitted(record) => record,
            FormOutcome::Cancelled => return Ok(Outcome::Cancelled),
        };
        record.normalize();

        records.push(record.clone());
        self.store.save(&records)?;
        debug!(name = %record.name, "record added");
        Ok(Outcome::Done(record))
    }

    /// Replaces the record at `raw_index` with what `form` returns.
    pub fn edit(
        &self,
        raw_index: &str,
        form: &mut impl RecordForm,
    ) -> ResultLedger<Outcome<Record>> {
        let index = parse_index(raw_index)?;
        let mut records = self.store.load()?;
        let index = check_bounds(index, records.len())?;

        let mut record = match form.collect(records[index].clone())? {
            FormOutcome::Submitted(record) => record,
            FormOutcome::Cancelled => return Ok(Outcome::Cancelled),
        };
        record.normalize();

        records[index] = record.clone();
        self.store.save(&records)?;
        debug!(index, name = %record.name, "record edited");
        Ok(Outcome::Done(record))
    }

    /// Removes the record at `raw_index`, keeping the others in order.
    pub fn delete(&self, raw_index: &str) -> ResultLedger<(usize, Record)> {
        let index = parse_index(raw_index)?;
        let mut records = self.store.load()?;
        let index = check_bounds(index, records.len())?;

        let removed = records.remove(index);
        self.store.save(&records)?;
        debug!(index, name = %removed.name, "record deleted");
        Ok((index, removed))
    }

    /// Drops every record by removing the file.
    pub fn flush(&self) -> ResultLedger<bool> {
        self.store.flush()
    }
}

/// Builder for [`Ledger`].
#[derive(Debug, Default)]
pub struct LedgerBuilder {
    location: Option<StorageLocation>,
}

impl LedgerBuilder {
    /// Use `location` instead of resolving one from the environment.
    pub fn location(mut self, location: StorageLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn build(self) -> ResultLedger<Ledger> {
        let location = match self.location {
            Some(location) => location,
            None => StorageLocation::resolve(None)?,
        };
        Ok(Ledger::new(Store::new(location)))
    }
}

//! Seam between the command layer and whatever gathers field values from the
//! user.
use crate::{Record, ResultLedger};

/// Result of running a form.
#[derive(Clone, Debug, PartialEq)]
pub enum FormOutcome {
    Submitted(Record),
    Cancelled,
}

/// Something that can fill in a record, usually by asking the user.
///
/// `existing` is the starting point: a default record for `add`, the current
/// one for `edit`. Returning [`FormOutcome::Cancelled`] stops the command
/// before anything is saved.
pub trait RecordForm {
    fn collect(&mut self, existing: Record) -> ResultLedger<FormOutcome>;
}

impl<F> RecordForm for F
where
    F: FnMut(Record) -> ResultLedger<FormOutcome>,
{
    fn collect(&mut self, existing: Record) -> ResultLedger<FormOutcome> {
        self(existing)
    }
}

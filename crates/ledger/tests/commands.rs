use std::fs;

use ledger::{
    Balance, FormOutcome, Ledger, LedgerError, Outcome, Record, RecordForm, RecordKind,
    ResultLedger, StorageLocation,
};
use tempfile::TempDir;

fn ledger_in_tempdir() -> (Ledger, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let ledger = Ledger::builder()
        .location(StorageLocation::new(dir.path()))
        .build()
        .unwrap();
    (ledger, dir)
}

fn seed(ledger: &Ledger, records: &[Record]) {
    ledger.store().save(records).unwrap();
}

fn names(ledger: &Ledger) -> Vec<String> {
    ledger
        .list()
        .unwrap()
        .records
        .into_iter()
        .map(|r| r.name)
        .collect()
}

/// Form that answers from a script and remembers what it was shown.
struct ScriptedForm {
    answers: Vec<FormOutcome>,
    seen: Vec<Record>,
}

impl ScriptedForm {
    fn answering(answers: Vec<FormOutcome>) -> Self {
        Self {
            answers,
            seen: Vec::new(),
        }
    }
}

impl RecordForm for ScriptedForm {
    fn collect(&mut self, existing: Record) -> ResultLedger<FormOutcome> {
        self.seen.push(existing);
        Ok(self.answers.remove(0))
    }
}

fn panicking_form(_: Record) -> ResultLedger<FormOutcome> {
    panic!("form must not run");
}

#[test]
fn list_reports_totals_without_pending() {
    let (ledger, _dir) = ledger_in_tempdir();
    seed(
        &ledger,
        &[
            Record::new("salary", RecordKind::Income, 100.0, "PEN", 1.0),
            Record::new("food", RecordKind::Expense, 40.0, "PEN", 1.0),
            Record::new("lottery", RecordKind::PendingIncome, 9999.0, "PEN", 0.01),
        ],
    );

    let listing = ledger.list().unwrap();

    assert_eq!(listing.records.len(), 3);
    assert_eq!(format!("{:.2}", listing.totals.income), "100.00");
    assert_eq!(format!("{:.2}", listing.totals.expense), "40.00");
    assert_eq!(format!("{:.2}", listing.totals.net()), "60.00");
    assert_eq!(listing.totals.balance(), Balance::Positive);
}

#[test]
fn list_on_first_run_is_empty() {
    let (ledger, _dir) = ledger_in_tempdir();

    let listing = ledger.list().unwrap();

    assert!(listing.is_empty());
    assert_eq!(listing.totals.balance(), Balance::Zero);
}

#[test]
fn add_appends_and_next_load_sorts() {
    let (ledger, _dir) = ledger_in_tempdir();
    seed(
        &ledger,
        &[Record::new("rent", RecordKind::Expense, 40.0, "PEN", 1.0)],
    );
    let mut form = ScriptedForm::answering(vec![FormOutcome::Submitted(Record::new(
        "bonus",
        RecordKind::Income,
        10.0,
        "USD",
        1.0,
    ))]);

    let outcome = ledger.add(&mut form).unwrap();

    assert!(matches!(outcome, Outcome::Done(ref r) if r.name == "bonus"));
    assert_eq!(form.seen, vec![Record::default()]);
    // saved in append order
    let raw = ledger.store().location().file_path();
    let on_disk: Vec<Record> = rmp_serde::from_slice(&fs::read(raw).unwrap()).unwrap();
    assert_eq!(on_disk[1].name, "bonus");
    assert_eq!(names(&ledger), vec!["bonus", "rent"]);
}

#[test]
fn add_normalizes_confidence() {
    let (ledger, _dir) = ledger_in_tempdir();
    let mut submitted = Record::default();
    submitted.name = "salary".to_string();
    submitted.kind = RecordKind::Income;
    submitted.confidence = 0.3;
    let mut form = ScriptedForm::answering(vec![FormOutcome::Submitted(submitted)]);

    ledger.add(&mut form).unwrap();

    assert_eq!(ledger.list().unwrap().records[0].confidence, 1.0);
}

#[test]
fn cancelled_add_does_not_save() {
    let (ledger, _dir) = ledger_in_tempdir();
    seed(
        &ledger,
        &[Record::new("rent", RecordKind::Expense, 40.0, "PEN", 1.0)],
    );
    let path = ledger.store().location().file_path();
    let before = fs::read(&path).unwrap();
    let mut form = ScriptedForm::answering(vec![FormOutcome::Cancelled]);

    assert_eq!(ledger.add(&mut form).unwrap(), Outcome::Cancelled);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn edit_hands_current_record_to_form() {
    let (ledger, _dir) = ledger_in_tempdir();
    seed(
        &ledger,
        &[
            Record::new("b", RecordKind::Expense, 2.0, "PEN", 1.0),
            Record::new("a", RecordKind::Expense, 1.0, "PEN", 1.0),
        ],
    );
    let mut form = ScriptedForm::answering(vec![FormOutcome::Submitted(Record::new(
        "c",
        RecordKind::PendingExpense,
        3.0,
        "USD",
        0.4,
    ))]);

    ledger.edit("0", &mut form).unwrap();

    assert_eq!(form.seen[0].name, "a");
    let records = ledger.list().unwrap().records;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "b");
    assert_eq!(records[1].kind, RecordKind::PendingExpense);
    assert_eq!(records[1].confidence, 0.4);
}

#[test]
fn cancelled_edit_does_not_save() {
    let (ledger, _dir) = ledger_in_tempdir();
    seed(
        &ledger,
        &[Record::new("rent", RecordKind::Expense, 40.0, "PEN", 1.0)],
    );
    let path = ledger.store().location().file_path();
    let before = fs::read(&path).unwrap();
    let mut form = ScriptedForm::answering(vec![FormOutcome::Cancelled]);

    assert_eq!(ledger.edit("0", &mut form).unwrap(), Outcome::Cancelled);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn edit_and_delete_reject_bad_indexes_without_saving() {
    let (ledger, _dir) = ledger_in_tempdir();
    seed(
        &ledger,
        &[
            Record::new("a", RecordKind::Expense, 1.0, "PEN", 1.0),
            Record::new("b", RecordKind::Expense, 2.0, "PEN", 1.0),
        ],
    );
    let path = ledger.store().location().file_path();
    let before = fs::read(&path).unwrap();

    for raw in ["-1", "2"] {
        let err = ledger.edit(raw, &mut panicking_form).unwrap_err();
        assert!(matches!(err, LedgerError::IndexOutOfRange { len: 2, .. }));
        let err = ledger.delete(raw).unwrap_err();
        assert!(matches!(err, LedgerError::IndexOutOfRange { len: 2, .. }));
    }
    assert_eq!(
        ledger.delete("x").unwrap_err(),
        LedgerError::InvalidIndex("x".to_string())
    );
    assert!(
        ledger
            .edit("1e0", &mut panicking_form)
            .unwrap_err()
            .is_user_input()
    );

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn bad_index_text_is_rejected_before_loading() {
    let (ledger, _dir) = ledger_in_tempdir();
    let path = ledger.store().location().file_path();

    let err = ledger.delete("abc").unwrap_err();
    assert_eq!(err, LedgerError::InvalidIndex("abc".to_string()));
    let err = ledger.edit("abc", &mut panicking_form).unwrap_err();
    assert_eq!(err, LedgerError::InvalidIndex("abc".to_string()));
    // first run bootstrap did not happen
    assert!(!path.exists());

    fs::write(&path, b"garbage").unwrap();
    let err = ledger.delete("abc").unwrap_err();
    assert_eq!(err, LedgerError::InvalidIndex("abc".to_string()));
    assert!(err.is_user_input());
    assert!(matches!(
        ledger.delete("0"),
        Err(LedgerError::Decode { .. })
    ));
    assert_eq!(fs::read(&path).unwrap(), b"garbage");
}

#[test]
fn delete_then_list() {
    let (ledger, _dir) = ledger_in_tempdir();
    seed(
        &ledger,
        &[
            Record::new("C", RecordKind::Expense, 3.0, "PEN", 1.0),
            Record::new("A", RecordKind::Expense, 1.0, "PEN", 1.0),
            Record::new("B", RecordKind::Income, 2.0, "PEN", 1.0),
        ],
    );

    let (index, removed) = ledger.delete("1").unwrap();

    assert_eq!(index, 1);
    assert_eq!(removed.name, "B");
    let raw = ledger.store().location().file_path();
    let on_disk: Vec<Record> = rmp_serde::from_slice(&fs::read(raw).unwrap()).unwrap();
    let persisted: Vec<&str> = on_disk.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(persisted, vec!["A", "C"]);

    let listing = ledger.list().unwrap();
    let rows: Vec<(usize, &str)> = listing
        .indexed()
        .map(|(i, r)| (i, r.name.as_str()))
        .collect();
    assert_eq!(rows, vec![(0, "A"), (1, "C")]);
}

#[test]
fn flush_removes_everything() {
    let (ledger, _dir) = ledger_in_tempdir();
    seed(
        &ledger,
        &[Record::new("a", RecordKind::Expense, 1.0, "PEN", 1.0)],
    );

    assert!(ledger.flush().unwrap());
    assert!(!ledger.flush().unwrap());
    assert!(ledger.list().unwrap().is_empty());
}

#[test]
fn form_errors_propagate_without_saving() {
    let (ledger, _dir) = ledger_in_tempdir();
    let mut broken = |_: Record| -> ResultLedger<FormOutcome> {
        Err(LedgerError::Form("terminal went away".to_string()))
    };

    let err = ledger.add(&mut broken).unwrap_err();

    assert_eq!(err, LedgerError::Form("terminal went away".to_string()));
    // only the bootstrap file exists
    let path = ledger.store().location().file_path();
    assert_eq!(fs::metadata(path).unwrap().len(), 0);
}

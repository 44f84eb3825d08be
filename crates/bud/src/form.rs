//! Interactive record form on the terminal.
//!
//! Prompts are drawn on stderr in raw mode. Esc or Ctrl-C on any prompt
//! cancels the whole form.
use std::io::{self, Write};

use crossterm::{
    cursor, execute,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{Print, Stylize, style},
    terminal::{self, ClearType},
};
use ledger::{CERTAIN, CURRENCIES, FormOutcome, LedgerError, Record, RecordForm, RecordKind, ResultLedger};

struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Enter,
    Cancel,
    Backspace,
    Prev,
    Next,
    Char(char),
    Other,
}

fn classify(code: KeyCode, modifiers: KeyModifiers) -> Key {
    match code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Cancel,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Key::Cancel,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab => Key::Prev,
        KeyCode::Right | KeyCode::Down | KeyCode::Tab => Key::Next,
        KeyCode::Char(ch) if !modifiers.contains(KeyModifiers::CONTROL) => Key::Char(ch),
        _ => Key::Other,
    }
}

fn next_key() -> io::Result<Key> {
    loop {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event::read()?
        else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }
        return Ok(classify(code, modifiers));
    }
}

/// Text shown in an amount or confidence input; zero shows as empty.
fn prefill(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// Parsed number, or `current` when the input is not a number.
fn parse_or(raw: &str, current: f64) -> f64 {
    raw.trim().parse().unwrap_or(current)
}

/// Currency choices and the one preselected. An unknown stored code stays
/// selectable.
fn currency_options(existing: &str, default: &str) -> (Vec<String>, usize) {
    let mut options: Vec<String> = CURRENCIES.iter().map(|c| c.to_string()).collect();
    let wanted = if existing.is_empty() { default } else { existing };
    if !wanted.is_empty() && !options.iter().any(|c| c == wanted) {
        options.push(wanted.to_string());
    }
    let selected = options.iter().position(|c| c == wanted).unwrap_or(0);
    (options, selected)
}

/// Form driven by crossterm key events.
pub struct TerminalForm {
    default_currency: String,
}

impl TerminalForm {
    pub fn new(default_currency: impl Into<String>) -> Self {
        Self {
            default_currency: default_currency.into(),
        }
    }

    fn run(&self, mut record: Record) -> io::Result<FormOutcome> {
        let _raw = RawModeGuard::enter()?;
        let mut out = io::stderr();

        let labels: Vec<&str> = RecordKind::ALL.iter().map(|k| k.label()).collect();
        let current = RecordKind::ALL
            .iter()
            .position(|k| *k == record.kind)
            .unwrap_or(0);
        let Some(kind) = select(
            &mut out,
            "Transaction type",
            "Choose what kind of entry this is.",
            &labels,
            current,
        )?
        else {
            return cancelled(&mut out);
        };

        let Some(name) = input(
            &mut out,
            "Name",
            "Label this entry (e.g. groceries, salary, refund)",
            &record.name,
        )?
        else {
            return cancelled(&mut out);
        };

        let Some(amount) = input(
            &mut out,
            "Amount",
            "Enter the amount as a number",
            &prefill(record.amount),
        )?
        else {
            return cancelled(&mut out);
        };

        let (currencies, current) = currency_options(&record.currency, &self.default_currency);
        let options: Vec<&str> = currencies.iter().map(String::as_str).collect();
        let Some(currency) = select(&mut out, "Currency", "", &options, current)? else {
            return cancelled(&mut out);
        };

        record.kind = RecordKind::ALL[kind];
        record.name = name;
        record.amount = parse_or(&amount, record.amount);
        record.currency = currencies[currency].clone();

        if record.kind.is_pending() {
            let Some(confidence) = input(
                &mut out,
                "Confidence",
                "How likely is this to happen? (0.0 to 1.0)",
                &prefill(record.confidence),
            )?
            else {
                return cancelled(&mut out);
            };
            record.confidence = parse_or(&confidence, record.confidence);
        } else {
            record.confidence = CERTAIN;
        }

        Ok(FormOutcome::Submitted(record))
    }
}

impl RecordForm for TerminalForm {
    fn collect(&mut self, existing: Record) -> ResultLedger<FormOutcome> {
        self.run(existing)
            .map_err(|err| LedgerError::Form(err.to_string()))
    }
}

fn cancelled(out: &mut impl Write) -> io::Result<FormOutcome> {
    execute!(out, Print("\r\n"))?;
    Ok(FormOutcome::Cancelled)
}

fn header(out: &mut impl Write, title: &str, description: &str) -> io::Result<()> {
    execute!(out, Print(style(title).bold()), Print("\r\n"))?;
    if !description.is_empty() {
        execute!(out, Print(style(description).dim()), Print("\r\n"))?;
    }
    Ok(())
}

fn select(
    out: &mut impl Write,
    title: &str,
    description: &str,
    options: &[&str],
    mut current: usize,
) -> io::Result<Option<usize>> {
    header(out, title, description)?;
    loop {
        execute!(
            out,
            cursor::MoveToColumn(0),
            terminal::Clear(ClearType::CurrentLine),
            Print(format!("  < {} >", options[current]))
        )?;
        out.flush()?;

        match next_key()? {
            Key::Enter => {
                execute!(out, Print("\r\n"))?;
                return Ok(Some(current));
            }
            Key::Cancel => return Ok(None),
            Key::Prev => current = (current + options.len() - 1) % options.len(),
            Key::Next => current = (current + 1) % options.len(),
            _ => {}
        }
    }
}

fn input(
    out: &mut impl Write,
    title: &str,
    description: &str,
    initial: &str,
) -> io::Result<Option<String>> {
    header(out, title, description)?;
    let mut buf = initial.to_string();
    execute!(out, Print("> "), Print(&buf))?;
    out.flush()?;

    loop {
        match next_key()? {
            Key::Enter => {
                execute!(out, Print("\r\n"))?;
                return Ok(Some(buf));
            }
            Key::Cancel => return Ok(None),
            Key::Backspace => {
                if buf.pop().is_some() {
                    execute!(out, cursor::MoveLeft(1), Print(" "), cursor::MoveLeft(1))?;
                }
            }
            Key::Char(ch) => {
                buf.push(ch);
                execute!(out, Print(ch))?;
            }
            Key::Prev | Key::Next | Key::Other => {}
        }
        out.flush()?;
    }
}

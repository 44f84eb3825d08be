//! The module contains the errors the ledger can return.
//!
//! The errors fall in three groups:
//!
//! - storage failures ([`Io`], [`Decode`], [`Encode`], [`NoDataDir`]), always
//!   annotated with the operation that failed;
//! - user input failures ([`InvalidIndex`], [`IndexOutOfRange`]), raised
//!   before anything is mutated or saved;
//! - [`Form`] when the interactive collaborator breaks down.
//!
//! A cancelled form is not an error, see [`FormOutcome`].
//!
//!  [`Io`]: LedgerError::Io
//!  [`Decode`]: LedgerError::Decode
//!  [`Encode`]: LedgerError::Encode
//!  [`NoDataDir`]: LedgerError::NoDataDir
//!  [`InvalidIndex`]: LedgerError::InvalidIndex
//!  [`IndexOutOfRange`]: LedgerError::IndexOutOfRange
//!  [`Form`]: LedgerError::Form
//!  [`FormOutcome`]: crate::FormOutcome
use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Store operation an I/O error happened in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Load,
    Save,
    Flush,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Load => "load",
            Op::Save => "save",
            Op::Flush => "flush",
        })
    }
}

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("failed to {op} {}: {source}", path.display())]
    Io {
        op: Op,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to load {}: corrupt data: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rmp_serde::decode::Error,
    },
    #[error("failed to save: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("no data directory available, set XDG_DATA_HOME")]
    NoDataDir,
    #[error("invalid index: {0}")]
    InvalidIndex(String),
    #[error("index out of range ({index}, total {len})")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("form failed: {0}")]
    Form(String),
}

impl LedgerError {
    pub(crate) fn io(op: Op, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for errors caused by what the user typed.
    #[must_use]
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidIndex(_) | Self::IndexOutOfRange { .. }
        )
    }
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Io {
                    op: a, path: pa, ..
                },
                Self::Io {
                    op: b, path: pb, ..
                },
            ) => a == b && pa == pb,
            (Self::Decode { path: a, .. }, Self::Decode { path: b, .. }) => a == b,
            (Self::Encode(a), Self::Encode(b)) => a.to_string() == b.to_string(),
            (Self::NoDataDir, Self::NoDataDir) => true,
            (Self::InvalidIndex(a), Self::InvalidIndex(b)) => a == b,
            (
                Self::IndexOutOfRange { index: a, len: la },
                Self::IndexOutOfRange { index: b, len: lb },
            ) => a == b && la == lb,
            (Self::Form(a), Self::Form(b)) => a == b,
            _ => false,
        }
    }
}

//! Durable storage of the record set.
//!
//! The whole set is read and written at once as MessagePack. There is no
//! locking: two processes saving at the same time race and the last writer
//! wins.
use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{
    LedgerError, Record, ResultLedger, StorageLocation,
    error::Op,
    record::sort_by_name,
};

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

#[derive(Clone, Debug)]
pub struct Store {
    location: StorageLocation,
}

impl Store {
    pub fn new(location: StorageLocation) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &StorageLocation {
        &self.location
    }

    /// Reads every record, sorted by name.
    ///
    /// A missing file is created empty on the spot, so the first run sees an
    /// empty ledger. An empty file is an empty ledger too.
    pub fn load(&self) -> ResultLedger<Vec<Record>> {
        let path = self.location.file_path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.bootstrap(&path)?;
                fs::read(&path).map_err(|e| LedgerError::io(Op::Load, &path, e))?
            }
            Err(err) => return Err(LedgerError::io(Op::Load, path, err)),
        };

        let mut records =
            decode(&bytes).map_err(|source| LedgerError::Decode {
                path: path.clone(),
                source,
            })?;
        records.iter_mut().for_each(Record::normalize);
        sort_by_name(&mut records);

        debug!(path = %path.display(), records = records.len(), "ledger loaded");
        Ok(records)
    }

    /// Replaces the file content with `records`, in the given order.
    pub fn save(&self, records: &[Record]) -> ResultLedger<()> {
        let dir = self.location.dir();
        let path = self.location.file_path();
        let payload = rmp_serde::to_vec_named(records)?;

        create_dir(dir).map_err(|e| LedgerError::io(Op::Save, dir, e))?;

        // Write next to the target and rename over it, a crash leaves the
        // previous file intact.
        let mut tmp =
            NamedTempFile::new_in(dir).map_err(|e| LedgerError::io(Op::Save, dir, e))?;
        tmp.write_all(&payload)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| LedgerError::io(Op::Save, tmp.path(), e))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(tmp.path(), fs::Permissions::from_mode(FILE_MODE))
                .map_err(|e| LedgerError::io(Op::Save, tmp.path(), e))?;
        }
        tmp.persist(&path)
            .map_err(|e| LedgerError::io(Op::Save, &path, e.error))?;

        debug!(path = %path.display(), records = records.len(), "ledger saved");
        Ok(())
    }

    /// Removes the file. Returns `false` if there was nothing to remove.
    pub fn flush(&self) -> ResultLedger<bool> {
        let path = self.location.file_path();
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), "ledger flushed");
                Ok(true)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(LedgerError::io(Op::Flush, path, err)),
        }
    }

    fn bootstrap(&self, path: &Path) -> ResultLedger<()> {
        let dir = self.location.dir();
        create_dir(dir).map_err(|e| LedgerError::io(Op::Load, dir, e))?;
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| LedgerError::io(Op::Load, path, e))?;
        info!(path = %path.display(), "created empty ledger");
        Ok(())
    }
}

/// Empty input and a nil payload both mean "no records". A truncated
/// non-empty payload is a decode error.
fn decode(bytes: &[u8]) -> Result<Vec<Record>, rmp_serde::decode::Error> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let records: Option<Vec<Record>> = rmp_serde::from_slice(bytes)?;
    Ok(records.unwrap_or_default())
}

fn create_dir(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(dir)
}

//! File sink. The handle is opened on first use in append mode and kept until closed.

use super::{LogRecord, Output};
use crate::internal;
use crate::policy::{DecoratedLine, Sink};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
enum FileState {
    Closed,
    Open(File),
    /// A lazy open failed. Writes are skipped until an explicit `open`.
    Failed,
}

#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    state: Mutex<FileState>,
}

impl FileOutput {
    /// Nothing touches the filesystem until `open` or the first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: Mutex::new(FileState::Closed),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(*self.lock(), FileState::Open(_))
    }

    /// True after a lazy open failed; the sink then drops lines.
    #[must_use]
    pub fn has_failed(&self) -> bool {
        matches!(*self.lock(), FileState::Failed)
    }

    fn lock(&self) -> MutexGuard<'_, FileState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn open_file(&self) -> Result<File, crate::Error> {
        let fail = |source| crate::Error::FileOpen {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(fail)?;
            internal::debug("FILE", &format!("Created directory: {}", parent.display()));
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(fail)?;
        internal::debug("FILE", &format!("Opened {}", self.path.display()));
        Ok(file)
    }
}

impl Output for FileOutput {
    fn sink(&self) -> Sink {
        Sink::File
    }

    fn write(&self, line: &DecoratedLine, record: &LogRecord) -> Result<(), crate::Error> {
        let mut state = self.lock();

        if matches!(*state, FileState::Closed) {
            match self.open_file() {
                Ok(file) => *state = FileState::Open(file),
                Err(e) => {
                    *state = FileState::Failed;
                    return Err(e);
                }
            }
        }

        let FileState::Open(file) = &mut *state else {
            return Ok(());
        };

        let mut content = line.render(false);
        if record.newline {
            content.push('\n');
        }
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn open(&self) -> Result<(), crate::Error> {
        let mut state = self.lock();
        if matches!(*state, FileState::Open(_)) {
            return Ok(());
        }
        match self.open_file() {
            Ok(file) => {
                *state = FileState::Open(file);
                Ok(())
            }
            Err(e) => {
                *state = FileState::Failed;
                Err(e)
            }
        }
    }

    fn close(&self) -> Result<(), crate::Error> {
        let mut state = self.lock();
        if let FileState::Open(file) = &mut *state {
            file.flush()?;
            internal::debug("FILE", &format!("Closed {}", self.path.display()));
        }
        *state = FileState::Closed;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        if let FileState::Open(file) = &mut *self.lock() {
            file.flush()?;
        }
        Ok(())
    }
}

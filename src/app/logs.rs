use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::{AppResult, RunError};

const CURRENT_PREFIX: &str = "current-execution-";
const PERSISTENT_PREFIX: &str = "execution-";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S%.3f";

/// Log file of one run. It is renamed on [`ExecutionLogs::finish`] when
/// persisted, and removed otherwise.
#[derive(Debug)]
pub(crate) struct ExecutionLogs {
    current: PathBuf,
    persistent: PathBuf,
    persist: bool,
}

impl ExecutionLogs {
    pub(crate) fn create(dir: &Path, persist: bool) -> Result<(Self, File), RunError> {
        let setup_error = |source| RunError::LogSetupFailed {
            path: dir.to_path_buf(),
            source,
        };
        fs::create_dir_all(dir).map_err(setup_error)?;

        let stamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let current = dir.join(format!("{}{}.log", CURRENT_PREFIX, stamp));
        let persistent = dir.join(format!("{}{}.log", PERSISTENT_PREFIX, stamp));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&current)
            .map_err(setup_error)?;

        Ok((
            Self {
                current,
                persistent,
                persist,
            },
            file,
        ))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.current
    }

    pub(crate) fn describe(&self) -> String {
        let action = if self.persist {
            format!(
                "transformed to persistent file '{}'",
                self.persistent.display()
            )
        } else {
            "auto cleaned".to_owned()
        };
        format!(
            "Created temporary log file '{}' which will be {} after execution",
            self.path().display(),
            action
        )
    }

    /// Renames or removes the log file. Returns the persisted path, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the rename or removal fails.
    pub(crate) fn finish(self) -> AppResult<Option<PathBuf>> {
        if self.persist {
            fs::rename(&self.current, &self.persistent)?;
            return Ok(Some(self.persistent));
        }
        fs::remove_file(&self.current)?;
        Ok(None)
    }
}

//! Temporary output file and the commit/discard confirmation.
//!
//! The rendered document is first written next to its destination as
//! `.<name>.tmp`. A single y/n answer then either moves it into place or
//! removes it. [`PendingDoc`] owns the temporary file until one of those
//! happens and removes it when dropped, so an error or an early return
//! never leaves it behind.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const PROMPT: &str = "Commit changes? (y/n): ";
pub const COMMITTED_MSG: &str = "Write successful.";
pub const DISCARDED_MSG: &str = "User chose not to commit, exiting and cleaning up.";

#[derive(Debug, Error)]
pub enum CommitError {
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to read confirmation: {0}")]
    Prompt(#[source] io::Error),

    #[error("failed to move {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("failed to remove {}: {source}", path.display())]
    Remove { path: PathBuf, source: io::Error },
}

/// How a confirmation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Committed(PathBuf),
    Discarded,
}

/// Where the temporary and final documents live.
#[derive(Debug, Clone)]
pub struct Session {
    tmp_path: PathBuf,
    out_path: PathBuf,
}

impl Session {
    pub fn new(tmp_path: impl Into<PathBuf>, out_path: impl Into<PathBuf>) -> Self {
        Self {
            tmp_path: tmp_path.into(),
            out_path: out_path.into(),
        }
    }

    /// `DOCS.md` -> temporary `.DOCS.md.tmp` in the same directory.
    pub fn for_output(out_path: impl Into<PathBuf>) -> Self {
        let out_path = out_path.into();
        let name = out_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "DOCS.md".to_string());
        Self::new(out_path.with_file_name(format!(".{}.tmp", name)), out_path)
    }

    pub fn tmp_path(&self) -> &Path {
        &self.tmp_path
    }

    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Write `contents` to the temporary file.
    pub fn write(&self, contents: &str) -> Result<PendingDoc<'_>, CommitError> {
        // Take ownership before writing so a partial write is cleaned up too.
        let pending = PendingDoc {
            session: self,
            armed: true,
        };
        fs::write(&self.tmp_path, contents).map_err(|source| CommitError::Write {
            path: self.tmp_path.clone(),
            source,
        })?;
        debug!(path = %self.tmp_path.display(), bytes = contents.len(), "wrote temporary document");
        Ok(pending)
    }
}

/// A written temporary document awaiting a decision.
#[derive(Debug)]
pub struct PendingDoc<'a> {
    session: &'a Session,
    armed: bool,
}

impl PendingDoc<'_> {
    /// Move the temporary file onto the output path.
    pub fn commit(mut self) -> Result<PathBuf, CommitError> {
        let from = &self.session.tmp_path;
        let to = &self.session.out_path;
        fs::rename(from, to).map_err(|source| CommitError::Rename {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;
        self.armed = false;
        info!(path = %to.display(), "committed documentation");
        Ok(to.clone())
    }

    /// Remove the temporary file.
    pub fn discard(mut self) -> Result<(), CommitError> {
        self.armed = false;
        let path = &self.session.tmp_path;
        fs::remove_file(path).map_err(|source| CommitError::Remove {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "discarded documentation");
        Ok(())
    }

    /// Ask once on `output`, read one line from `input`, and act on it.
    ///
    /// Only `y` (any case) commits. Anything else, end of input included,
    /// discards.
    pub fn confirm<R: BufRead, W: Write>(
        self,
        mut input: R,
        mut output: W,
    ) -> Result<Outcome, CommitError> {
        write!(output, "{}", PROMPT).map_err(CommitError::Prompt)?;
        output.flush().map_err(CommitError::Prompt)?;

        let mut answer = String::new();
        input.read_line(&mut answer).map_err(CommitError::Prompt)?;

        // The decision is final once acted on; a failed status line only warns.
        if answer.trim().eq_ignore_ascii_case("y") {
            let path = self.commit()?;
            report(&mut output, COMMITTED_MSG);
            Ok(Outcome::Committed(path))
        } else {
            self.discard()?;
            report(&mut output, DISCARDED_MSG);
            Ok(Outcome::Discarded)
        }
    }
}

fn report<W: Write>(output: &mut W, message: &str) {
    if let Err(e) = writeln!(output, "{}", message).and_then(|_| output.flush()) {
        warn!(error = %e, "failed to print status line");
    }
}

impl Drop for PendingDoc<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = fs::remove_file(&self.session.tmp_path) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(path = %self.session.tmp_path.display(), error = %e, "failed to clean up temporary document");
            }
        }
    }
}

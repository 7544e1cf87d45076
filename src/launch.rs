//! Detached launch of the helper program that consumes the saved config.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{ConfigToolError, Result};

/// Executable the editor hands the saved config to.
pub const HELPER_PROGRAM: &str = "djc-helper.exe";

/// Process-launch collaborator. Fire and forget: the editor never waits on
/// or observes the spawned process.
pub trait HelperLauncher {
    fn spawn(&self, program: &Path, working_dir: &Path) -> Result<()>;
}

pub struct ProcessLauncher;

impl HelperLauncher for ProcessLauncher {
    fn spawn(&self, program: &Path, working_dir: &Path) -> Result<()> {
        Command::new(program)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ConfigToolError::Launch(format!("{}: {e}", program.display())))?;

        // Dropping the Child detaches it; the helper outlives this editor.
        Ok(())
    }
}

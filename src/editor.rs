//! Document controller: load -> project -> (edits) -> reconcile -> persist.

use std::path::Path;

use log::{info, warn};

use crate::binder::{reconcile_by_position, AccountBinding, CommonBinding};
use crate::config::{AccountConfig, ConfigDocument, ConfigStore};
use crate::error::{ConfigToolError, Result};
use crate::launch::{HelperLauncher, HELPER_PROGRAM};

/// Where the helper keeps per-account login state.
pub const CACHED_DIR: &str = ".cached";

/// Owns the live binding tree for one editing session. Reloading into a
/// running session is unsupported: to pick up external edits the operator
/// restarts the tool.
pub struct ConfigEditor<S: ConfigStore> {
    store: S,
    pub common: CommonBinding,
    pub accounts: Vec<AccountBinding>,
}

impl<S: ConfigStore> ConfigEditor<S> {
    /// Reads the document and projects it into widget state. A missing or
    /// unreadable document is replaced by schema defaults so the editor
    /// always starts.
    pub fn new(store: S) -> Self {
        let doc = match store.read() {
            Ok(doc) => doc,
            Err(e) => {
                warn!("using default config, read failed: {e}");
                ConfigDocument::default()
            }
        };

        let editor = Self {
            common: CommonBinding::project(&doc.common),
            accounts: doc.account_configs.iter().map(AccountBinding::project).collect(),
            store,
        };
        info!("config loaded, {} account(s)", editor.accounts.len());
        editor
    }

    /// Reconciles the widget state against a fresh read of the document and
    /// writes the result back. The fresh read (not the snapshot projected at
    /// startup) is the base so fields the form never exposed — including
    /// hand edits made since startup — survive the save. Accounts merge by
    /// position; an account added this session has no persisted counterpart
    /// and merges into schema defaults.
    pub fn save(&self) -> Result<()> {
        let mut doc = match self.store.read() {
            Ok(doc) => doc,
            Err(e) => {
                warn!("reconciling against defaults, reread failed: {e}");
                ConfigDocument::default()
            }
        };

        doc.common = self.common.reconcile(&doc.common);
        doc.account_configs = reconcile_by_position(
            &self.accounts,
            &doc.account_configs,
            AccountBinding::reconcile,
        );

        self.store.write(&doc)?;
        info!("config saved, {} account(s)", doc.account_configs.len());
        Ok(())
    }

    /// Appends a new account tab with schema defaults. The name is the
    /// operator-facing identity and must not collide with a live tab.
    pub fn add_account(&mut self, name: &str) -> Result<()> {
        if self.accounts.iter().any(|a| a.display_name() == name) {
            return Err(ConfigToolError::DuplicateIdentity(name.to_string()));
        }

        let account = AccountConfig {
            name: name.to_string(),
            ..AccountConfig::default()
        };
        self.accounts.push(AccountBinding::project(&account));
        info!("added account {name}");
        Ok(())
    }

    /// Removes the first account tab whose name matches.
    pub fn remove_account(&mut self, name: &str) -> Result<()> {
        let idx = self
            .accounts
            .iter()
            .position(|a| a.display_name() == name)
            .ok_or_else(|| ConfigToolError::IdentityNotFound(name.to_string()))?;

        self.accounts.remove(idx);
        info!("removed account {name}");
        Ok(())
    }

    pub fn account_names(&self) -> Vec<String> {
        self.accounts.iter().map(|a| a.display_name().to_string()).collect()
    }

    /// Saves, then starts the helper detached in the current directory.
    pub fn run_helper<L: HelperLauncher>(&self, launcher: &L) -> Result<()> {
        info!("saving config before launching the helper");
        self.save()?;

        launcher.spawn(Path::new(HELPER_PROGRAM), Path::new("."))?;
        info!("{HELPER_PROGRAM} started");
        Ok(())
    }

    /// Wipes cached login state so the next run logs in from scratch.
    pub fn clear_login_status(&self) -> Result<()> {
        let _ = std::fs::remove_dir_all(CACHED_DIR);
        std::fs::create_dir_all(CACHED_DIR)?;
        info!("login status cleared");
        Ok(())
    }
}

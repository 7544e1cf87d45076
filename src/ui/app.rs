use super::forms;
use crate::config::TomlStore;
use crate::editor::ConfigEditor;
use crate::launch::ProcessLauncher;

pub const CONFIG_PATH: &str = "config.toml";

enum PromptAction {
    Add,
    Remove,
}

/// Modal name prompt for the add/remove account commands.
struct NamePrompt {
    action: PromptAction,
    name: String,
}

pub struct ConfigToolApp {
    editor: ConfigEditor<TomlStore>,
    /// 0 is the common tab, `i + 1` is account `i`.
    selected_tab: usize,
    status: String,
    prompt: Option<NamePrompt>,
}

impl ConfigToolApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            editor: ConfigEditor::new(TomlStore::new(CONFIG_PATH)),
            selected_tab: 0,
            status: "Config loaded. Adjust as needed and remember to save.".to_string(),
            prompt: None,
        }
    }

    fn show_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Load config").clicked() {
                // Re-projecting into a live session is unsupported; the
                // operator restarts the tool to pick up external edits.
                self.status =
                    "Reloading is not supported; close and reopen the tool to re-read the config."
                        .to_string();
            }
            if ui.button("Save config").clicked() {
                self.status = match self.editor.save() {
                    Ok(()) => "Saved. Comments in config.toml are not kept; see \
                               config.toml.example for the annotated version."
                        .to_string(),
                    Err(e) => format!("Save failed: {e}"),
                };
            }
        });

        ui.horizontal(|ui| {
            if ui.button("Add account").clicked() {
                self.prompt = Some(NamePrompt {
                    action: PromptAction::Add,
                    name: String::new(),
                });
            }
            if ui.button("Remove account").clicked() {
                self.prompt = Some(NamePrompt {
                    action: PromptAction::Remove,
                    name: String::new(),
                });
            }
            if ui.button("Clear login status").clicked() {
                self.status = match self.editor.clear_login_status() {
                    Ok(()) => "Login status cleared; the next run logs in fresh.".to_string(),
                    Err(e) => format!("Clearing login status failed: {e}"),
                };
            }
            if ui.button("Run helper").clicked() {
                self.status = match self.editor.run_helper(&ProcessLauncher) {
                    Ok(()) => "Helper started; it runs on its own from here.".to_string(),
                    Err(e) => format!("Could not run the helper: {e}"),
                };
            }
        });
    }

    fn show_tab_strip(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            if ui.selectable_label(self.selected_tab == 0, "Common").clicked() {
                self.selected_tab = 0;
            }
            for (idx, name) in self.editor.account_names().iter().enumerate() {
                let label = if name.is_empty() { "(unnamed)" } else { name };
                if ui.selectable_label(self.selected_tab == idx + 1, label).clicked() {
                    self.selected_tab = idx + 1;
                }
            }
        });
    }

    fn show_prompt(&mut self, ctx: &egui::Context) {
        let Some(prompt) = &mut self.prompt else {
            return;
        };

        let title = match prompt.action {
            PromptAction::Add => "Add account",
            PromptAction::Remove => "Remove account",
        };

        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Account name:");
                ui.text_edit_singleline(&mut prompt.name);
                ui.horizontal(|ui| {
                    confirmed = ui.button("OK").clicked();
                    cancelled = ui.button("Cancel").clicked();
                });
            });

        if cancelled {
            self.prompt = None;
            return;
        }
        if !confirmed {
            return;
        }

        let name = prompt.name.clone();
        self.status = match prompt.action {
            PromptAction::Add => match self.editor.add_account(&name) {
                Ok(()) => {
                    self.selected_tab = self.editor.accounts.len();
                    format!("Added account {name}. Remember to save when you are done.")
                }
                Err(e) => format!("Add failed: {e}"),
            },
            PromptAction::Remove => match self.editor.remove_account(&name) {
                Ok(()) => format!("Removed account {name}. Remember to save when you are done."),
                Err(e) => format!("Remove failed: {e}"),
            },
        };
        self.prompt = None;
    }
}

impl eframe::App for ConfigToolApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Helper config tool");
            ui.label("For settings not shown here, edit config.toml in a text editor.");
            ui.separator();
            self.show_buttons(ui);
            ui.separator();
            self.show_tab_strip(ui);
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.label(&self.status);
        });

        // A removed tab can leave the selection past the end.
        let tab_count = self.editor.accounts.len() + 1;
        if self.selected_tab >= tab_count {
            self.selected_tab = tab_count - 1;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if self.selected_tab == 0 {
                    forms::common_form(ui, &mut self.editor.common);
                } else {
                    let idx = self.selected_tab - 1;
                    forms::account_form(ui, idx, &mut self.editor.accounts[idx]);
                }
            });
        });

        self.show_prompt(ctx);
    }
}

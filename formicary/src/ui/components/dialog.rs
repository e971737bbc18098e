use new_egui_macroquad::egui;

/// Dialog content types
#[derive(Debug, Clone)]
pub enum DialogMode {
    Info {
        message: String,
    },
    Confirm {
        message: String,
    },
    SaveInput {
        value: String,
    },
    LoadPicker {
        options: Vec<String>,
        selected: usize,
    },
}

/// Dialog result types
#[derive(Debug, Clone)]
pub enum DialogResult {
    InfoOk,
    Confirmed,
    Cancelled,
    SaveConfirmed(String),
    LoadPicked(String),
}

/// Modal popup shown over the game. While one is open it consumes all input.
pub struct DialogPopup {
    pub mode: DialogMode,
    pub result: Option<DialogResult>,
}

impl DialogPopup {
    pub fn new_info(message: &str) -> Self {
        Self {
            mode: DialogMode::Info {
                message: message.to_string(),
            },
            result: None,
        }
    }

    pub fn new_confirm(message: &str) -> Self {
        Self {
            mode: DialogMode::Confirm {
                message: message.to_string(),
            },
            result: None,
        }
    }

    pub fn new_save_input(prefill: &str) -> Self {
        Self {
            mode: DialogMode::SaveInput {
                value: prefill.to_string(),
            },
            result: None,
        }
    }

    pub fn new_load_picker(options: Vec<String>) -> Self {
        Self {
            mode: DialogMode::LoadPicker {
                options,
                selected: 0,
            },
            result: None,
        }
    }

    /// Draw the dialog. Returns false once it has produced a result and
    /// should be closed.
    pub fn draw(&mut self, egui_ctx: &egui::Context) -> bool {
        let mut result = None;

        egui::Window::new("dialog")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(egui_ctx, |ui| match &mut self.mode {
                DialogMode::Info { message } => {
                    ui.label(message.as_str());
                    ui.vertical_centered(|ui| {
                        if ui.button("OK").clicked() {
                            result = Some(DialogResult::InfoOk);
                        }
                    });
                }
                DialogMode::Confirm { message } => {
                    ui.label(message.as_str());
                    ui.horizontal(|ui| {
                        if ui.button("Yes").clicked() {
                            result = Some(DialogResult::Confirmed);
                        }
                        if ui.button("Cancel").clicked() {
                            result = Some(DialogResult::Cancelled);
                        }
                    });
                }
                DialogMode::SaveInput { value } => {
                    ui.label("Save name:");
                    ui.text_edit_singleline(value);
                    ui.horizontal(|ui| {
                        if ui.button("Save").clicked() && !value.is_empty() {
                            result = Some(DialogResult::SaveConfirmed(value.clone()));
                        }
                        if ui.button("Cancel").clicked() {
                            result = Some(DialogResult::Cancelled);
                        }
                    });
                }
                DialogMode::LoadPicker { options, selected } => {
                    ui.label("Load a save:");
                    for (i, name) in options.iter().enumerate() {
                        ui.radio_value(selected, i, name);
                    }
                    ui.horizontal(|ui| {
                        if ui.button("Load").clicked() {
                            if let Some(name) = options.get(*selected) {
                                result = Some(DialogResult::LoadPicked(name.clone()));
                            }
                        }
                        if ui.button("Cancel").clicked() {
                            result = Some(DialogResult::Cancelled);
                        }
                    });
                }
            });

        if result.is_some() {
            self.result = result;
            return false;
        }
        true
    }
}

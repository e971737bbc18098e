use catppuccin_egui::set_theme;
use macroquad::prelude::*;

use crate::simulation::Simulation;
use crate::ui::components::{DialogPopup, DialogResult, TopPanel};
use crate::ui::events::{AppAction, UIEvent};

pub struct UIManager {
    drag_started_on_ui: bool,
    pub top_panel: TopPanel,
    pub dialog_popup: Option<DialogPopup>,
}

impl UIManager {
    pub fn new() -> Self {
        Self {
            drag_started_on_ui: false,
            top_panel: TopPanel::new(),
            dialog_popup: None,
        }
    }

    /// Build this frame's UI. Returns an action for the app to handle and
    /// whether the UI consumed pointer input.
    pub fn update(&mut self, simulation: &Simulation) -> (Option<AppAction>, bool) {
        self.top_panel.update();

        let mut input_consumed = false;
        let mut app_action = None;
        let mut ui_event = None;

        new_egui_macroquad::ui(|egui_ctx| {
            set_theme(egui_ctx, catppuccin_egui::MOCHA);

            if let Some(dialog) = &mut self.dialog_popup {
                let still_open = dialog.draw(egui_ctx);
                if !still_open {
                    if let Some(result) = dialog.result.take() {
                        match result {
                            DialogResult::Confirmed => {
                                app_action = Some(AppAction::RequestReset);
                            }
                            DialogResult::SaveConfirmed(name) => {
                                app_action = Some(AppAction::RequestSave(name));
                            }
                            DialogResult::LoadPicked(name) => {
                                app_action = Some(AppAction::RequestLoad(name));
                            }
                            DialogResult::Cancelled | DialogResult::InfoOk => {}
                        }
                    }
                    self.dialog_popup = None;
                }
                input_consumed = true;
            } else {
                let (panel_event, panel_action) = self.top_panel.draw(egui_ctx, simulation);
                if panel_event.is_some() {
                    ui_event = panel_event;
                }
                if panel_action.is_some() {
                    app_action = panel_action;
                }
                input_consumed = egui_ctx.is_pointer_over_area();
                self.update_drag_state(egui_ctx);
            }
        });

        if let Some(event) = ui_event {
            match event {
                UIEvent::ShowResetConfirmDialog => self.show_dialog(DialogPopup::new_confirm(
                    "Reset the colony? All progress is lost.",
                )),
            }
        }

        (app_action, input_consumed || self.drag_started_on_ui)
    }

    pub fn show_dialog(&mut self, dialog: DialogPopup) {
        self.dialog_popup = Some(dialog);
    }

    pub fn close_dialog(&mut self) {
        self.dialog_popup = None;
    }

    fn update_drag_state(&mut self, egui_ctx: &egui::Context) {
        if is_mouse_button_down(MouseButton::Left) && egui_ctx.is_pointer_over_area() {
            self.drag_started_on_ui = true;
        } else if !is_mouse_button_down(MouseButton::Left) {
            self.drag_started_on_ui = false;
        }
    }

    pub fn render(&self) {
        new_egui_macroquad::draw();
    }
}

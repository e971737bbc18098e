use macroquad::prelude::{get_fps, get_frame_time};
use new_egui_macroquad::egui::{self, RichText};

use crate::simulation::Simulation;
use crate::ui::events::{AppAction, UIEvent};
use crate::ui::{BASE_PADDING, BASE_SPACING};

/// The HUD strip along the top: colony stats and game controls.
pub struct TopPanel {
    displayed_fps: i32,
    fps_timer: f32,
}

impl TopPanel {
    pub fn new() -> Self {
        Self {
            displayed_fps: get_fps(),
            fps_timer: 0.0,
        }
    }

    /// Refresh the FPS readout at a readable rate.
    pub fn update(&mut self) {
        self.fps_timer += get_frame_time();
        if self.fps_timer >= 0.5 {
            self.displayed_fps = get_fps();
            self.fps_timer = 0.0;
        }
    }

    pub fn draw(
        &mut self,
        egui_ctx: &egui::Context,
        simulation: &Simulation,
    ) -> (Option<UIEvent>, Option<AppAction>) {
        let mut ui_event = None;
        let mut app_action = None;

        egui::TopBottomPanel::top("hud_top_panel").show(egui_ctx, |ui| {
            ui.add_space(BASE_PADDING);
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = BASE_SPACING * 2.0;

                ui.label(RichText::new(format!("Food: {}", simulation.nest.food_stored)).strong());
                ui.label(format!("Ants: {}", simulation.ant_count()));
                ui.label(format!("Delivered: {}", simulation.nest.total_delivered));
                ui.label(format!(
                    "On ground: {}",
                    simulation.world.remaining_food()
                ));

                ui.separator();

                let pause_label = if simulation.is_paused {
                    "Resume"
                } else {
                    "Pause"
                };
                if ui.button(pause_label).clicked() {
                    app_action = Some(AppAction::TogglePause);
                }
                if ui.button("Reset").clicked() {
                    ui_event = Some(UIEvent::ShowResetConfirmDialog);
                }
                if ui.button("Save").clicked() {
                    app_action = Some(AppAction::RequestSave(String::new()));
                }
                if ui.button("Load").clicked() {
                    app_action = Some(AppAction::RequestLoad(String::new()));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} fps", self.displayed_fps));
                    if simulation.is_paused {
                        ui.label(RichText::new("paused").weak());
                    }
                });
            });
            ui.add_space(BASE_PADDING);
        });

        (ui_event, app_action)
    }
}

use crate::globe::resources::{ClimateInputs, TextureSummary};
use crate::inputs::logic::summary_lines;
use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Region names for the picker, the global sentinel first.
#[derive(Resource, Clone)]
pub struct RegionChoices(pub Vec<String>);

pub fn render_inputs_panel(
    mut contexts: EguiContexts,
    mut inputs: ResMut<ClimateInputs>,
    choices: Res<RegionChoices>,
    summary: Res<TextureSummary>,
    mut app_exit_events: MessageWriter<AppExit>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    // Edit a copy so the resource is only marked changed on a real edit
    let mut edited = inputs.clone();

    egui::SidePanel::right("climate_inputs")
        .default_width(300.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Climate Inputs");
            ui.add_space(10.0);

            egui::ComboBox::from_label("Region")
                .selected_text(edited.region.as_str())
                .show_ui(ui, |ui| {
                    for name in &choices.0 {
                        ui.selectable_value(&mut edited.region, name.clone(), name.as_str());
                    }
                });
            ui.horizontal(|ui| {
                ui.label("Custom region");
                ui.text_edit_singleline(&mut edited.region);
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            metric_field(ui, "Temperature anomaly (°C)", &mut edited.metrics.temperature);
            metric_field(ui, "Precipitation change", &mut edited.metrics.precipitation);
            metric_field(ui, "Sea level rise", &mut edited.metrics.sea_level);
            metric_field(ui, "Extreme events", &mut edited.metrics.extreme_events);

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            ui.heading("Texture");
            for line in summary_lines(&summary) {
                ui.label(line);
            }

            ui.add_space(20.0);
            ui.separator();
            ui.add_space(10.0);

            if ui.button("Quit").clicked() {
                app_exit_events.write(AppExit::Success);
            }
        });

    inputs.set_if_neq(edited);
}

fn metric_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.text_edit_singleline(value);
    ui.add_space(5.0);
}

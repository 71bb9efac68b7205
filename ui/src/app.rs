use egui::ScrollArea;

use crate::state::State;

pub struct DataGridApp {
    state: State,
}

impl DataGridApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl eframe::App for DataGridApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.checkbox(&mut self.state.options.is_row_editable, "Editable rows");
                ui.separator();

                let editing = self.state.grid.editing_row().is_some();
                if ui
                    .add_enabled(editing, egui::Button::new("Commit"))
                    .clicked()
                {
                    self.state.commit();
                }
                if ui.button("Load sample").clicked() {
                    self.state.load_sample();
                }
                if ui.button("Clear").clicked() {
                    self.state.clear();
                }
            });
        });

        egui::TopBottomPanel::bottom("event_log")
            .resizable(true)
            .default_height(120.0)
            .show(ctx, |ui| {
                ui.strong("Events");
                ScrollArea::vertical().show(ui, |ui| {
                    for event in &self.state.events {
                        ui.monospace(event);
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            // The central panel the region left after adding TopPanel's and SidePanel's
            ui.heading("Data Grid");
            match self.state.grid.editing_row() {
                Some(row) => ui.label(format!("Editing row {row}")),
                None => ui.weak("Click a row to edit it"),
            };
            ui.separator();

            ScrollArea::horizontal().show(ui, |ui| {
                self.state.show_grid(ui);
            });

            powered_by_egui_and_eframe(ui);
        });
    }
}

fn powered_by_egui_and_eframe(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("Powered by ");
        ui.hyperlink_to("egui", "https://github.com/emilk/egui");
        ui.label(" and ");
        ui.hyperlink_to(
            "eframe",
            "https://github.com/emilk/egui/tree/master/crates/eframe",
        );
        ui.label(".");
    });
}

//! Cell rendering for the data grid.

use datagrid_business::{CellContent, GridInteraction};
use egui::{Key, Label, TextEdit, Ui};
use ustr::Ustr;

/// Renders one resolved cell and records input changes.
///
/// Static content is not selectable so a press on it reaches the row.
#[inline]
pub fn render_cell(ui: &mut Ui, content: CellContent, interactions: &mut Vec<GridInteraction>) {
    match content {
        CellContent::Input { field, value } => {
            render_input_cell(ui, field, value, interactions);
        }
        CellContent::Rendered(text) => {
            ui.add(Label::new(text).selectable(false));
        }
        CellContent::Text(text) => {
            ui.add(Label::new(text).truncate().selectable(false));
        }
        CellContent::Empty => {}
    }
}

/// Enter in an input commits the open session.
#[inline]
fn render_input_cell(
    ui: &mut Ui,
    field: Ustr,
    mut value: String,
    interactions: &mut Vec<GridInteraction>,
) {
    let response = ui.add(
        TextEdit::singleline(&mut value)
            .id_salt(field.as_str())
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        interactions.push(GridInteraction::CellEdited { field, value });
    }
    if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
        interactions.push(GridInteraction::Commit);
    }
}

//! Header row rendering for the data grid.

use datagrid_business::{ColumnModel, GridInteraction, Record};
use egui::{Label, RichText, Sense, Ui};
use egui_extras::TableRow;

/// Renders one bold, clickable label per visible column.
///
/// Clicks are recorded as [`GridInteraction::HeaderClicked`] carrying the
/// descriptor's position in the caller's full column list.
#[inline]
pub fn render_table_header<R: Record>(
    header: &mut TableRow<'_, '_>,
    model: &ColumnModel<'_, R>,
    interactions: &mut Vec<GridInteraction>,
) {
    for column in model.columns() {
        header.col(|ui| {
            if render_header_cell(ui, column.header(), column.sortable) {
                interactions.push(GridInteraction::HeaderClicked(column.descriptor_index));
            }
        });
    }
}

/// Returns `true` if the header label was clicked.
#[inline]
fn render_header_cell(ui: &mut Ui, label: &str, sortable: bool) -> bool {
    ui.horizontal_centered(|ui| {
        let clicked = ui
            .add(
                Label::new(RichText::new(label).strong())
                    .selectable(false)
                    .sense(Sense::click()),
            )
            .clicked();
        if sortable {
            ui.weak("⇅");
        }
        clicked
    })
    .inner
}

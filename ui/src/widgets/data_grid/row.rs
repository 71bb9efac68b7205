//! Row rendering for the data grid.

use datagrid_business::{ColumnModel, EditSession, GridInteraction, Record};
use egui::{Stroke, Ui};
use egui_extras::TableRow;

use super::cells::render_cell;

/// Renders every visible cell of `record` and records row interactions.
///
/// A double-click also reports the click that preceded it, the same order a
/// browser dispatches `click` and `dblclick`.
#[inline]
pub fn render_data_row<R: Record>(
    row: &mut TableRow<'_, '_>,
    model: &ColumnModel<'_, R>,
    record: &R,
    session: &EditSession<R>,
    interactions: &mut Vec<GridInteraction>,
) {
    let index = row.index();
    row.set_selected(session.is_editing_row(index));

    for column in model.columns() {
        let content = model.cell_content(column, record, index, session);
        row.col(|ui| {
            render_cell(ui, content, interactions);
            draw_cell_bottom_border(ui);
        });
    }

    let response = row.response();
    if response.clicked() {
        interactions.push(GridInteraction::RowClicked(index));
    }
    if response.double_clicked() {
        interactions.push(GridInteraction::RowDoubleClicked(index));
    }
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}

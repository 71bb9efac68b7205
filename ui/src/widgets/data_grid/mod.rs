//! Editable data grid widget.
//!
//! The widget is split into smaller components:
//! - `columns`: layout column sizing
//! - `header`: clickable header row
//! - `row`: data rows and row-level clicks
//! - `cells`: static and editable cell content
//!
//! Cells are re-derived every frame from the dataset, the column model and
//! the edit session held in [`DataGridState`]. Clicks and input changes are
//! collected while the table is laid out and applied afterwards.

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use std::hash::Hash;

use datagrid_business::{
    ColumnDescriptor, ColumnModel, EditController, EditSession, GridCallbacks, GridInteraction,
    GridOptions, Record,
};
use egui::{Id, Layout, Response, RichText, Sense, Ui};
use egui_extras::TableBuilder;
use ustr::Ustr;

use columns::table_columns;
use header::render_table_header;
use row::render_data_row;

/// Edit session storage that outlives a single frame.
///
/// Keep one per grid next to the dataset it edits.
pub struct DataGridState<R: Record> {
    controller: EditController<R>,
}

impl<R: Record> Default for DataGridState<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> DataGridState<R> {
    pub fn new() -> Self {
        Self {
            controller: EditController::default(),
        }
    }

    pub fn session(&self) -> &EditSession<R> {
        self.controller.session()
    }

    /// Row of the open edit session, if any.
    pub fn editing_row(&self) -> Option<usize> {
        self.controller.session().active_row()
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.controller.set_editable(editable);
    }

    /// Commit the open session outside of any row click.
    pub fn commit(&mut self, data: &[R], callbacks: &mut GridCallbacks<'_, R>) -> bool {
        self.controller.commit(data, callbacks)
    }

    pub fn row_clicked(
        &mut self,
        data: &[R],
        index: usize,
        callbacks: &mut GridCallbacks<'_, R>,
    ) -> bool {
        self.controller.row_click(data, index, callbacks)
    }

    pub fn row_double_clicked(
        &self,
        data: &[R],
        index: usize,
        callbacks: &mut GridCallbacks<'_, R>,
    ) {
        self.controller.row_double_click(data, index, callbacks);
    }

    /// `descriptor_index` is the column's position in the full column list.
    pub fn header_clicked(
        &self,
        columns: &[ColumnDescriptor<R>],
        descriptor_index: usize,
        callbacks: &mut GridCallbacks<'_, R>,
    ) {
        if let Some(column) = columns.get(descriptor_index) {
            self.controller.header_click(column, callbacks);
        }
    }

    pub fn cell_edited(&mut self, field: impl Into<Ustr>, value: impl Into<String>) -> bool {
        self.controller.cell_edit(field.into(), value.into())
    }
}

/// What happened during one [`DataGrid::show`] call.
pub struct DataGridResponse {
    pub response: Response,
    /// Interactions applied this frame, in the order they were observed.
    pub interactions: Vec<GridInteraction>,
    /// Whether the edit session opened, changed or closed.
    pub session_changed: bool,
}

/// A table of records with single-row inline editing.
///
/// ```ignore
/// DataGrid::new(&data, &columns)
///     .row_editable(true)
///     .callbacks(GridCallbacks::new().on_data_change(|next| updated = Some(next)))
///     .show(ui, &mut grid_state);
/// ```
pub struct DataGrid<'d, 'c, R: Record> {
    id_salt: Id,
    data: &'d [R],
    columns: &'d [ColumnDescriptor<R>],
    options: GridOptions,
    callbacks: GridCallbacks<'c, R>,
}

impl<'d, 'c, R: Record> DataGrid<'d, 'c, R> {
    pub fn new(data: &'d [R], columns: &'d [ColumnDescriptor<R>]) -> Self {
        Self {
            id_salt: Id::new("data_grid"),
            data,
            columns,
            options: GridOptions::default(),
            callbacks: GridCallbacks::default(),
        }
    }

    /// Needed when more than one grid shares a `Ui`.
    pub fn id_salt(mut self, id_salt: impl Hash) -> Self {
        self.id_salt = Id::new(id_salt);
        self
    }

    pub fn options(mut self, options: GridOptions) -> Self {
        self.options = options;
        self
    }

    pub fn row_editable(mut self, editable: bool) -> Self {
        self.options.is_row_editable = editable;
        self
    }

    pub fn callbacks(mut self, callbacks: GridCallbacks<'c, R>) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn show(self, ui: &mut Ui, state: &mut DataGridState<R>) -> DataGridResponse {
        let Self {
            id_salt,
            data,
            columns,
            options,
            mut callbacks,
        } = self;

        state.set_editable(options.is_row_editable);

        let inner = ui.vertical(|ui| {
            let mut interactions = Vec::new();
            let model = ColumnModel::new(columns, options.is_row_editable);

            if !model.is_empty() {
                render_table(
                    ui,
                    id_salt,
                    &options,
                    &model,
                    data,
                    state.session(),
                    &mut interactions,
                );
            }

            if data.is_empty() {
                ui.add_space(8.0);
                ui.label(RichText::new(&options.empty_text).weak());
            }

            interactions
        });

        let interactions = inner.inner;
        let mut session_changed = false;
        for interaction in &interactions {
            session_changed |= state
                .controller
                .apply(interaction.clone(), data, columns, &mut callbacks);
        }

        if session_changed {
            ui.ctx().request_repaint();
        }

        DataGridResponse {
            response: inner.response,
            interactions,
            session_changed,
        }
    }
}

fn render_table<R: Record>(
    ui: &mut Ui,
    id_salt: Id,
    options: &GridOptions,
    model: &ColumnModel<'_, R>,
    data: &[R],
    session: &EditSession<R>,
    interactions: &mut Vec<GridInteraction>,
) {
    let mut table = TableBuilder::new(ui)
        .id_salt(id_salt)
        .striped(options.striped)
        .resizable(options.resizable)
        .sense(Sense::click())
        .cell_layout(Layout::left_to_right(egui::Align::Center))
        .min_scrolled_height(0.0);

    for column in table_columns(model, options.min_column_width) {
        table = table.column(column);
    }

    table
        .header(options.header_height, |mut header| {
            render_table_header(&mut header, model, interactions);
        })
        .body(|body| {
            body.rows(options.row_height, data.len(), |mut row| {
                let Some(record) = data.get(row.index()) else {
                    return;
                };
                render_data_row(&mut row, model, record, session, interactions);
            });
        });
}

//! Render-ready columns and per-cell content resolution.

use egui::WidgetText;
use log::warn;
use ustr::Ustr;

use crate::{ColumnDescriptor, EditSession, Record};

/// What a single cell shows for the current frame.
#[derive(Debug, Clone)]
pub enum CellContent {
    /// Editable text input bound to `field`.
    Input { field: Ustr, value: String },
    /// Output of a column's custom renderer, used verbatim.
    Rendered(WidgetText),
    /// Raw field value as text.
    Text(String),
    /// Column has neither a field nor a renderer.
    Empty,
}

impl CellContent {
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input { .. })
    }

    /// Plain text of the content, mostly useful in tests and logs.
    pub fn text(&self) -> &str {
        match self {
            Self::Input { value, .. } | Self::Text(value) => value,
            Self::Rendered(text) => text.text(),
            Self::Empty => "",
        }
    }
}

/// One visible column, ready for layout.
#[derive(Debug)]
pub struct GridColumn<'a, R: Record> {
    /// Position of the descriptor in the caller's full (unfiltered) list.
    pub descriptor_index: usize,
    pub descriptor: &'a ColumnDescriptor<R>,
    /// Exact width; `None` leaves sizing to the layout engine.
    pub size: Option<f32>,
    pub sortable: bool,
}

impl<R: Record> GridColumn<'_, R> {
    pub fn id(&self) -> Ustr {
        self.descriptor.id
    }

    pub fn header(&self) -> &str {
        &self.descriptor.header
    }

    pub fn field(&self) -> Option<Ustr> {
        self.descriptor.field
    }
}

/// The caller's descriptors after the visibility filter.
pub struct ColumnModel<'a, R: Record> {
    columns: Vec<GridColumn<'a, R>>,
    editable: bool,
}

impl<'a, R: Record> ColumnModel<'a, R> {
    pub fn new(descriptors: &'a [ColumnDescriptor<R>], editable: bool) -> Self {
        let columns = descriptors
            .iter()
            .enumerate()
            .filter(|(_, descriptor)| descriptor.is_visible())
            .map(|(descriptor_index, descriptor)| GridColumn {
                descriptor_index,
                descriptor,
                size: resolve_size(descriptor),
                sortable: descriptor.is_sortable(),
            })
            .collect();

        Self { columns, editable }
    }

    pub fn columns(&self) -> &[GridColumn<'a, R>] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Resolve the content of one cell.
    ///
    /// Priority: edit input on the session row, then the custom renderer,
    /// then the raw field value.
    pub fn cell_content(
        &self,
        column: &GridColumn<'_, R>,
        record: &R,
        row_index: usize,
        session: &EditSession<R>,
    ) -> CellContent {
        let descriptor = column.descriptor;

        if self.editable
            && session.is_editing_row(row_index)
            && let Some(field) = descriptor.field
        {
            let value = session
                .pending_value(field)
                .map(str::to_owned)
                .unwrap_or_else(|| record.field_text(&field));
            return CellContent::Input { field, value };
        }

        let value = descriptor.field.and_then(|field| record.field(&field));

        if let Some(render) = &descriptor.render {
            return CellContent::Rendered(render(value, record));
        }

        match descriptor.field {
            Some(field) => CellContent::Text(record.field_text(&field)),
            None => CellContent::Empty,
        }
    }
}

fn resolve_size<R: Record>(descriptor: &ColumnDescriptor<R>) -> Option<f32> {
    match descriptor.size_hint()? {
        Ok(size) => Some(size),
        Err(err) => {
            warn!("column {}: {err}; using default sizing", descriptor.id);
            None
        }
    }
}

//! Caller-supplied notification hooks.

use crate::{ColumnDescriptor, Record};

type RowHandler<'a, R> = Box<dyn FnMut(&R, usize) + 'a>;

/// Optional handlers invoked by the grid. All of them default to unset.
///
/// `on_data_change` is the only way committed edits leave the grid; without
/// it a commit clears the session and drops the edits.
pub struct GridCallbacks<'a, R: Record> {
    pub(crate) on_row_click: Option<RowHandler<'a, R>>,
    pub(crate) on_row_double_click: Option<RowHandler<'a, R>>,
    pub(crate) on_header_click: Option<Box<dyn FnMut(&ColumnDescriptor<R>) + 'a>>,
    pub(crate) on_data_change: Option<Box<dyn FnMut(Vec<R>) + 'a>>,
}

impl<R: Record> Default for GridCallbacks<'_, R> {
    fn default() -> Self {
        Self {
            on_row_click: None,
            on_row_double_click: None,
            on_header_click: None,
            on_data_change: None,
        }
    }
}

impl<'a, R: Record> GridCallbacks<'a, R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_row_click(mut self, handler: impl FnMut(&R, usize) + 'a) -> Self {
        self.on_row_click = Some(Box::new(handler));
        self
    }

    pub fn on_row_double_click(mut self, handler: impl FnMut(&R, usize) + 'a) -> Self {
        self.on_row_double_click = Some(Box::new(handler));
        self
    }

    pub fn on_header_click(mut self, handler: impl FnMut(&ColumnDescriptor<R>) + 'a) -> Self {
        self.on_header_click = Some(Box::new(handler));
        self
    }

    pub fn on_data_change(mut self, handler: impl FnMut(Vec<R>) + 'a) -> Self {
        self.on_data_change = Some(Box::new(handler));
        self
    }

    pub(crate) fn row_clicked(&mut self, record: &R, index: usize) {
        if let Some(handler) = self.on_row_click.as_mut() {
            handler(record, index);
        }
    }

    pub(crate) fn row_double_clicked(&mut self, record: &R, index: usize) {
        if let Some(handler) = self.on_row_double_click.as_mut() {
            handler(record, index);
        }
    }

    pub(crate) fn header_clicked(&mut self, column: &ColumnDescriptor<R>) {
        if let Some(handler) = self.on_header_click.as_mut() {
            handler(column);
        }
    }
}

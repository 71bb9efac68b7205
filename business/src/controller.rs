//! Edit session state machine.
//!
//! Transitions:
//! - row click while editing is disabled only notifies
//! - row click on the active row only notifies
//! - row click on another row commits the open session (if any), then opens a
//!   session on the clicked row, then notifies
//! - input change merges into the pending edits of the open session
//! - commit merges pending edits over the current record, hands a new dataset
//!   to `on_data_change` and always returns to `Idle`
//! - double-clicks and header clicks never touch the session
//!
//! Nothing here fails: requests that make no sense in the current state are
//! no-ops.

use log::{debug, trace, warn};
use ustr::Ustr;

use crate::{ColumnDescriptor, EditSession, GridCallbacks, GridInteraction, Record};

pub struct EditController<R: Record> {
    session: EditSession<R>,
    editable: bool,
}

impl<R: Record> Default for EditController<R> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<R: Record> EditController<R> {
    pub fn new(editable: bool) -> Self {
        Self {
            session: EditSession::Idle,
            editable,
        }
    }

    pub fn session(&self) -> &EditSession<R> {
        &self.session
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Toggle row editing. An open session is kept and still commits on the
    /// next trigger.
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    /// Handle a click on row `index`. Returns `true` when the session changed.
    pub fn row_click(
        &mut self,
        data: &[R],
        index: usize,
        callbacks: &mut GridCallbacks<'_, R>,
    ) -> bool {
        let Some(record) = data.get(index) else {
            warn!("row click on index {index} outside dataset of {}", data.len());
            return false;
        };

        let mut changed = false;
        if self.editable && !self.session.is_editing_row(index) {
            if self.session.is_editing() {
                self.commit(data, callbacks);
            }
            debug!("opening edit session on row {index}");
            self.session = EditSession::open(index, record.clone());
            changed = true;
        }

        callbacks.row_clicked(record, index);
        changed
    }

    /// Forward a double-click. Never touches the session.
    pub fn row_double_click(
        &self,
        data: &[R],
        index: usize,
        callbacks: &mut GridCallbacks<'_, R>,
    ) {
        match data.get(index) {
            Some(record) => callbacks.row_double_clicked(record, index),
            None => warn!(
                "double click on index {index} outside dataset of {}",
                data.len()
            ),
        }
    }

    /// Forward a header click with the clicked column's descriptor.
    pub fn header_click(
        &self,
        column: &ColumnDescriptor<R>,
        callbacks: &mut GridCallbacks<'_, R>,
    ) {
        trace!("header click on column {}", column.id);
        callbacks.header_clicked(column);
    }

    /// Merge an input change into the open session.
    pub fn cell_edit(&mut self, field: Ustr, value: String) -> bool {
        trace!("edit {field} = {value:?}");
        let recorded = self.session.record_edit(field, value);
        if !recorded {
            debug!("ignoring edit of {field}: no open edit session");
        }
        recorded
    }

    /// Commit the open session into a new dataset.
    ///
    /// Returns `true` when a session was open; it is always closed afterwards.
    pub fn commit(&mut self, data: &[R], callbacks: &mut GridCallbacks<'_, R>) -> bool {
        let Some(edit) = self.session.take() else {
            return false;
        };
        let row = edit.row();

        let Some(on_data_change) = callbacks.on_data_change.as_mut() else {
            warn!(
                "discarding {} pending edit(s) on row {row}: no data change handler",
                edit.pending().len()
            );
            return true;
        };

        let Some(current) = data.get(row) else {
            warn!(
                "commit for row {row} outside dataset of {}; dropping edits",
                data.len()
            );
            return true;
        };

        let mut updated = current.clone();
        for (field, value) in edit.into_pending() {
            updated.assign(&field, value);
        }

        let mut next = data.to_vec();
        next[row] = updated;
        debug!("committing row {row}");
        on_data_change(next);
        true
    }

    /// Apply an interaction collected during layout.
    ///
    /// `columns` is the caller's full descriptor list; header interactions
    /// refer to it by position.
    pub fn apply(
        &mut self,
        interaction: GridInteraction,
        data: &[R],
        columns: &[ColumnDescriptor<R>],
        callbacks: &mut GridCallbacks<'_, R>,
    ) -> bool {
        match interaction {
            GridInteraction::RowClicked(index) => self.row_click(data, index, callbacks),
            GridInteraction::RowDoubleClicked(index) => {
                self.row_double_click(data, index, callbacks);
                false
            }
            GridInteraction::HeaderClicked(descriptor_index) => {
                match columns.get(descriptor_index) {
                    Some(column) => self.header_click(column, callbacks),
                    None => warn!("header click on unknown column {descriptor_index}"),
                }
                false
            }
            GridInteraction::CellEdited { field, value } => self.cell_edit(field, value),
            GridInteraction::Commit => self.commit(data, callbacks),
        }
    }
}

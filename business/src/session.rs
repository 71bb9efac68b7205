//! The single in-flight row edit.

use std::collections::HashMap;

use ustr::Ustr;

use crate::Record;

/// Row being edited and its uncommitted field edits.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveEdit<R> {
    row: usize,
    baseline: R,
    pending: HashMap<Ustr, String>,
}

impl<R: Record> ActiveEdit<R> {
    pub fn row(&self) -> usize {
        self.row
    }

    /// Snapshot of the row taken when the session opened.
    pub fn baseline(&self) -> &R {
        &self.baseline
    }

    pub fn pending(&self) -> &HashMap<Ustr, String> {
        &self.pending
    }

    pub(crate) fn into_pending(self) -> HashMap<Ustr, String> {
        self.pending
    }
}

/// At most one row is edited at a time; `Idle` carries no edits at all.
#[derive(Debug, Clone, PartialEq)]
pub enum EditSession<R> {
    Idle,
    Editing(ActiveEdit<R>),
}

impl<R> Default for EditSession<R> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<R: Record> EditSession<R> {
    /// Open a session on `row` with an empty edit map.
    pub fn open(row: usize, baseline: R) -> Self {
        Self::Editing(ActiveEdit {
            row,
            baseline,
            pending: HashMap::new(),
        })
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn active_row(&self) -> Option<usize> {
        match self {
            Self::Editing(edit) => Some(edit.row),
            Self::Idle => None,
        }
    }

    pub fn is_editing_row(&self, row: usize) -> bool {
        self.active_row() == Some(row)
    }

    pub fn active(&self) -> Option<&ActiveEdit<R>> {
        match self {
            Self::Editing(edit) => Some(edit),
            Self::Idle => None,
        }
    }

    pub fn pending_value(&self, field: Ustr) -> Option<&str> {
        self.active()?.pending.get(&field).map(String::as_str)
    }

    pub fn pending_len(&self) -> usize {
        self.active().map_or(0, |edit| edit.pending.len())
    }

    /// Whether any pending edit differs from the row as it was when opened.
    pub fn is_dirty(&self) -> bool {
        self.active().is_some_and(|edit| {
            edit.pending
                .iter()
                .any(|(field, value)| edit.baseline.field_text(field) != *value)
        })
    }

    /// Merge one field edit. Returns `false` when no session is open.
    pub fn record_edit(&mut self, field: Ustr, value: String) -> bool {
        match self {
            Self::Editing(edit) => {
                edit.pending.insert(field, value);
                true
            }
            Self::Idle => false,
        }
    }

    /// Reset to `Idle`, handing back whatever was being edited.
    pub fn take(&mut self) -> Option<ActiveEdit<R>> {
        match std::mem::take(self) {
            Self::Editing(edit) => Some(edit),
            Self::Idle => None,
        }
    }
}

use ustr::Ustr;

/// A user interaction observed while laying out the grid.
///
/// The widget collects these during a frame and applies them once the layout
/// pass no longer borrows the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridInteraction {
    RowClicked(usize),
    RowDoubleClicked(usize),
    /// Position of the descriptor in the caller's full column list.
    HeaderClicked(usize),
    CellEdited { field: Ustr, value: String },
    /// Enter pressed in an input of the editing row.
    Commit,
}

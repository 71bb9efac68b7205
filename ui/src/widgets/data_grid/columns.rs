//! Layout columns for the grid table.

use datagrid_business::{ColumnModel, Record};
use egui_extras::Column;

/// One `egui_extras` column per visible grid column, in order.
///
/// Columns with a parsed width are exact; the rest size to their content but
/// never below `min_width`.
#[inline]
pub fn table_columns<R: Record>(model: &ColumnModel<'_, R>, min_width: f32) -> Vec<Column> {
    model
        .columns()
        .iter()
        .map(|column| match column.size {
            Some(width) => Column::exact(width).clip(true),
            None => Column::auto().at_least(min_width).clip(true),
        })
        .collect()
}

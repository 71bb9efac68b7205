//! Column descriptors as supplied by the grid's caller.

use std::fmt;
use std::sync::Arc;

use bon::Builder;
use egui::WidgetText;
use ustr::Ustr;

use crate::{Record, WidthError};

/// Custom cell renderer: `(field value, full record) -> cell content`.
pub type CellRenderer<R> = Arc<dyn Fn(Option<&<R as Record>::Value>, &R) -> WidgetText>;

/// Declarative metadata for one grid column.
///
/// ```ignore
/// let column: ColumnDescriptor<Row> = ColumnDescriptor::builder()
///     .id("name")
///     .header("Name")
///     .field("name")
///     .width("160px")
///     .build();
/// ```
#[derive(Builder)]
pub struct ColumnDescriptor<R: Record> {
    /// Unique within the column list.
    #[builder(into)]
    pub id: Ustr,
    #[builder(into)]
    pub header: String,
    /// Record field shown (and edited) in this column.
    #[builder(into)]
    pub field: Option<Ustr>,
    /// Raw width such as `"120"` or `"120px"`.
    #[builder(into)]
    pub width: Option<String>,
    pub visible: Option<bool>,
    pub sortable: Option<bool>,
    #[builder(skip)]
    pub render: Option<CellRenderer<R>>,
}

impl<R: Record> ColumnDescriptor<R> {
    /// Attach a custom renderer.
    pub fn with_renderer(
        mut self,
        render: impl Fn(Option<&R::Value>, &R) -> WidgetText + 'static,
    ) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Hidden only when `visible` is explicitly `false`.
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    /// Sortable unless explicitly marked `false`. Advisory only.
    pub fn is_sortable(&self) -> bool {
        self.sortable != Some(false)
    }

    /// Parsed width, `None` when no width was given.
    pub fn size_hint(&self) -> Option<Result<f32, WidthError>> {
        self.width.as_deref().map(parse_width)
    }
}

impl<R: Record> Clone for ColumnDescriptor<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            header: self.header.clone(),
            field: self.field,
            width: self.width.clone(),
            visible: self.visible,
            sortable: self.sortable,
            render: self.render.clone(),
        }
    }
}

impl<R: Record> fmt::Debug for ColumnDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("field", &self.field)
            .field("width", &self.width)
            .field("visible", &self.visible)
            .field("sortable", &self.sortable)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Parse a width string by its leading integer.
///
/// Leading whitespace and a sign are accepted and anything after the digits
/// is ignored, so `"120px"` is `120.0`.
pub fn parse_width(raw: &str) -> Result<f32, WidthError> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(WidthError::not_a_number(raw));
    }

    let value: f64 = rest[..digits_len]
        .parse()
        .map_err(|_| WidthError::not_a_number(raw))?;

    if !value.is_finite() || value > f64::from(f32::MAX) {
        return Err(WidthError::not_a_number(raw));
    }
    if negative || value == 0.0 {
        return Err(WidthError::non_positive(raw));
    }

    Ok(value as f32)
}

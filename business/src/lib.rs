//! Core of the data grid: column model, edit session and the commit protocol.
//!
//! Nothing in here draws. The `ui` crate lays cells out with egui and feeds
//! clicks and input changes back through [`EditController`].

mod callbacks;
mod column;
mod column_model;
mod config;
mod controller;
mod error;
mod interaction;
mod record;
mod session;

pub use callbacks::GridCallbacks;
pub use column::{CellRenderer, ColumnDescriptor, parse_width};
pub use column_model::{CellContent, ColumnModel, GridColumn};
pub use config::{ENV_PREFIX, GridOptions};
pub use controller::EditController;
pub use error::WidthError;
pub use interaction::GridInteraction;
pub use record::{CellValue, Record};
pub use session::{ActiveEdit, EditSession};

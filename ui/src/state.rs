use datagrid_business::{ColumnDescriptor, GridCallbacks, GridOptions};
use egui::{RichText, Ui, WidgetText};
use flume::{Receiver, Sender};
use log::{info, warn};
use serde_json::{Map, Value, json};
use ustr::Ustr;

use crate::utils::colors::status_color;
use crate::widgets::{DataGrid, DataGridResponse, DataGridState};

/// Record type shown by the demo.
pub type Row = Map<String, Value>;

/// How many entries the event log keeps.
const EVENT_LOG_LIMIT: usize = 50;

/// Notifications raised by the grid's callbacks.
///
/// Callbacks run while the grid is borrowed, so they only queue events; the
/// app applies them once the frame's grid pass is done.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoEvent {
    RowClicked(usize),
    RowDoubleClicked(usize),
    HeaderClicked(Ustr),
    DataChanged(Vec<Row>),
}

pub type DemoEventSender = Sender<DemoEvent>;
pub type DemoEventReceiver = Receiver<DemoEvent>;

/// The main application state.
///
/// Note: We manually implement Default because the event channel
/// doesn't implement Default.
pub struct State {
    pub data: Vec<Row>,
    pub columns: Vec<ColumnDescriptor<Row>>,
    pub grid: DataGridState<Row>,
    pub options: GridOptions,
    /// Most recent first.
    pub events: Vec<String>,
    event_sender: DemoEventSender,
    event_receiver: DemoEventReceiver,
}

impl Default for State {
    fn default() -> Self {
        Self::new(GridOptions::default())
    }
}

impl State {
    pub fn new(options: GridOptions) -> Self {
        Self::with_data(options, sample_rows())
    }

    pub fn with_data(options: GridOptions, data: Vec<Row>) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();
        Self {
            data,
            columns: sample_columns(),
            grid: DataGridState::new(),
            options,
            events: Vec::new(),
            event_sender,
            event_receiver,
        }
    }

    /// Lays out the grid and applies whatever its callbacks queued.
    pub fn show_grid(&mut self, ui: &mut Ui) -> DataGridResponse {
        let sender = &self.event_sender;
        let response = DataGrid::new(&self.data, &self.columns)
            .options(self.options.clone())
            .callbacks(event_callbacks(sender))
            .show(ui, &mut self.grid);

        self.drain_events();
        response
    }

    /// Commit the open edit session, if any, without a row click.
    pub fn commit(&mut self) -> bool {
        let changed = {
            let mut callbacks = event_callbacks(&self.event_sender);
            self.grid.commit(&self.data, &mut callbacks)
        };
        self.drain_events();
        changed
    }

    pub fn load_sample(&mut self) {
        self.commit();
        self.data = sample_rows();
        self.push_event("loaded sample rows".to_owned());
    }

    pub fn clear(&mut self) {
        self.commit();
        self.data.clear();
        self.push_event("cleared all rows".to_owned());
    }

    /// Applies queued callback events to the demo state.
    pub fn drain_events(&mut self) {
        let events: Vec<DemoEvent> = self.event_receiver.try_iter().collect();
        for event in events {
            match event {
                DemoEvent::RowClicked(index) => self.push_event(format!("row {index} clicked")),
                DemoEvent::RowDoubleClicked(index) => {
                    self.push_event(format!("row {index} double-clicked"));
                }
                DemoEvent::HeaderClicked(id) => {
                    self.push_event(format!("header `{id}` clicked"));
                }
                DemoEvent::DataChanged(next) => {
                    self.push_event(format!("data changed ({} rows)", next.len()));
                    self.data = next;
                }
            }
        }
    }

    fn push_event(&mut self, message: String) {
        info!("{message}");
        self.events.insert(0, message);
        self.events.truncate(EVENT_LOG_LIMIT);
    }
}

/// Callbacks that forward every grid notification into the event channel.
pub fn event_callbacks(sender: &DemoEventSender) -> GridCallbacks<'_, Row> {
    GridCallbacks::new()
        .on_row_click(move |_, index| send(sender, DemoEvent::RowClicked(index)))
        .on_row_double_click(move |_, index| send(sender, DemoEvent::RowDoubleClicked(index)))
        .on_header_click(move |column| send(sender, DemoEvent::HeaderClicked(column.id)))
        .on_data_change(move |next| send(sender, DemoEvent::DataChanged(next)))
}

fn send(sender: &DemoEventSender, event: DemoEvent) {
    if sender.send(event).is_err() {
        warn!("Demo event receiver dropped");
    }
}

/// Columns shown by the demo. `notes` is hidden and `actions` has no field.
pub fn sample_columns() -> Vec<ColumnDescriptor<Row>> {
    vec![
        ColumnDescriptor::builder()
            .id("id")
            .header("ID")
            .field("id")
            .width("60px")
            .sortable(false)
            .build(),
        ColumnDescriptor::builder()
            .id("name")
            .header("Name")
            .field("name")
            .width("160px")
            .build(),
        ColumnDescriptor::builder()
            .id("email")
            .header("Email")
            .field("email")
            .build(),
        ColumnDescriptor::builder()
            .id("role")
            .header("Role")
            .field("role")
            .width("120")
            .build(),
        ColumnDescriptor::builder()
            .id("status")
            .header("Status")
            .field("status")
            .width("110px")
            .build()
            .with_renderer(render_status),
        ColumnDescriptor::builder()
            .id("notes")
            .header("Notes")
            .field("notes")
            .visible(false)
            .build(),
        ColumnDescriptor::builder()
            .id("actions")
            .header("")
            .width("48px")
            .sortable(false)
            .build()
            .with_renderer(|_, record: &Row| {
                let id = record.get("id").map(Value::to_string).unwrap_or_default();
                RichText::new(format!("#{id}")).weak().into()
            }),
    ]
}

fn render_status(value: Option<&Value>, _record: &Row) -> WidgetText {
    let text = match value {
        Some(Value::String(status)) => status.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    match status_color(&text) {
        Some(color) => RichText::new(text).color(color).into(),
        None => text.into(),
    }
}

/// A handful of rows with mixed value types.
pub fn sample_rows() -> Vec<Row> {
    let rows = json!([
        { "id": 1, "name": "Ada Lovelace", "email": "ada@example.com", "role": "admin", "status": "active", "notes": "founder" },
        { "id": 2, "name": "Grace Hopper", "email": "grace@example.com", "role": "editor", "status": "invited", "notes": null },
        { "id": 3, "name": "Alan Turing", "email": "alan@example.com", "role": "viewer", "status": "suspended" },
        { "id": 4, "name": "Edsger Dijkstra", "email": null, "role": "editor", "status": "active" },
        { "id": 5, "name": "Barbara Liskov", "email": "barbara@example.com", "role": "viewer", "status": "archived" },
    ]);

    match rows {
        Value::Array(rows) => rows
            .into_iter()
            .filter_map(|row| match row {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

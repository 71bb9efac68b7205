//! Behavior of the edit session protocol as seen by a grid's caller.
//!
//! Records are JSON objects, the shape a web page would hand the grid.

use std::cell::RefCell;

use datagrid_business::{
    CellContent, ColumnDescriptor, ColumnModel, EditController, EditSession, GridCallbacks,
    GridInteraction,
};
use serde_json::{Map, Value, json};
use ustr::Ustr;

type Row = Map<String, Value>;

/// Events observed by callbacks, in the order they fired.
#[derive(Debug, Clone, PartialEq)]
enum Seen {
    RowClick(usize),
    DoubleClick(usize),
    Header(Ustr),
    DataChange(Vec<Row>),
}

fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn dataset() -> Vec<Row> {
    init_logger();
    vec![
        row(json!({"id": 1, "name": "A"})),
        row(json!({"id": 2, "name": "B"})),
    ]
}

fn columns() -> Vec<ColumnDescriptor<Row>> {
    vec![
        ColumnDescriptor::builder().id("id").header("ID").field("id").build(),
        ColumnDescriptor::builder()
            .id("name")
            .header("Name")
            .field("name")
            .build(),
    ]
}

fn recording_callbacks(seen: &RefCell<Vec<Seen>>) -> GridCallbacks<'_, Row> {
    GridCallbacks::new()
        .on_row_click(move |_, index| seen.borrow_mut().push(Seen::RowClick(index)))
        .on_row_double_click(move |_, index| seen.borrow_mut().push(Seen::DoubleClick(index)))
        .on_header_click(move |column| seen.borrow_mut().push(Seen::Header(column.id)))
        .on_data_change(move |next| seen.borrow_mut().push(Seen::DataChange(next)))
}

fn data_changes(seen: &[Seen]) -> Vec<&Vec<Row>> {
    seen.iter()
        .filter_map(|event| match event {
            Seen::DataChange(next) => Some(next),
            _ => None,
        })
        .collect()
}

mod commit_ordering {
    use super::*;

    #[test]
    fn test_clicking_another_row_commits_before_reopening() {
        let data = dataset();
        let seen = RefCell::new(Vec::new());
        let mut callbacks = recording_callbacks(&seen);
        let mut controller = EditController::new(true);

        controller.row_click(&data, 0, &mut callbacks);
        controller.cell_edit(Ustr::from("name"), "A2".to_owned());
        controller.row_click(&data, 1, &mut callbacks);
        drop(callbacks);

        let seen = seen.into_inner();
        let expected_first = row(json!({"id": 1, "name": "A2"}));
        assert_eq!(
            seen,
            vec![
                Seen::RowClick(0),
                Seen::DataChange(vec![expected_first, data[1].clone()]),
                Seen::RowClick(1),
            ]
        );
        assert_eq!(controller.session().active_row(), Some(1));
        assert_eq!(controller.session().pending_len(), 0);
    }

    #[test]
    fn test_commit_does_not_see_new_row_data() {
        let data = dataset();
        let committed = RefCell::new(Vec::new());
        let mut callbacks: GridCallbacks<'_, Row> =
            GridCallbacks::new().on_data_change(|next| committed.borrow_mut().push(next));
        let mut controller = EditController::new(true);

        controller.row_click(&data, 0, &mut callbacks);
        controller.cell_edit(Ustr::from("name"), "A2".to_owned());
        controller.row_click(&data, 1, &mut callbacks);
        drop(callbacks);

        let committed = committed.into_inner();
        assert_eq!(committed.len(), 1);
        assert_eq!(committed[0][1], data[1], "row 1 must not be touched by row 0's commit");
    }

    #[test]
    fn test_at_most_one_row_is_ever_active() {
        let data: Vec<Row> = (0..5)
            .map(|id| row(json!({"id": id, "name": format!("row {id}")})))
            .collect();
        let mut callbacks: GridCallbacks<'_, Row> = GridCallbacks::new().on_data_change(|_| {});
        let mut controller = EditController::new(true);

        for index in [0, 3, 3, 1, 4, 0, 2, 2] {
            controller.row_click(&data, index, &mut callbacks);
            controller.cell_edit(Ustr::from("name"), format!("edited {index}"));
            assert_eq!(controller.session().active_row(), Some(index));
            assert_eq!(controller.session().pending_len(), 1);
        }
    }
}

mod reclick {
    use super::*;

    #[test]
    fn test_reclicking_active_row_keeps_edits_and_still_notifies() {
        let data = dataset();
        let seen = RefCell::new(Vec::new());
        let mut callbacks = recording_callbacks(&seen);
        let mut controller = EditController::new(true);

        controller.row_click(&data, 0, &mut callbacks);
        controller.cell_edit(Ustr::from("name"), "A2".to_owned());
        let before = controller.session().clone();

        assert!(!controller.row_click(&data, 0, &mut callbacks));
        drop(callbacks);

        assert_eq!(controller.session(), &before);
        assert_eq!(seen.into_inner(), vec![Seen::RowClick(0), Seen::RowClick(0)]);
    }
}

mod discard {
    use super::*;

    #[test]
    fn test_edits_are_dropped_without_data_change_handler() {
        let data = dataset();
        let original = data.clone();
        let clicks = RefCell::new(Vec::new());
        let mut callbacks: GridCallbacks<'_, Row> =
            GridCallbacks::new().on_row_click(|_, index| clicks.borrow_mut().push(index));
        let mut controller = EditController::new(true);

        controller.row_click(&data, 0, &mut callbacks);
        controller.cell_edit(Ustr::from("name"), "lost".to_owned());
        controller.row_click(&data, 1, &mut callbacks);
        drop(callbacks);

        assert_eq!(data, original);
        assert_eq!(controller.session().active_row(), Some(1));
        assert_eq!(controller.session().pending_len(), 0);
        assert_eq!(clicks.into_inner(), [0, 1]);
    }

    #[test]
    fn test_explicit_commit_without_handler_still_clears() {
        let data = dataset();
        let mut callbacks: GridCallbacks<'_, Row> = GridCallbacks::new();
        let mut controller = EditController::new(true);

        controller.row_click(&data, 1, &mut callbacks);
        controller.cell_edit(Ustr::from("name"), "lost".to_owned());
        assert!(controller.commit(&data, &mut callbacks));
        assert_eq!(controller.session(), &EditSession::Idle);
    }
}

mod no_edit_commit {
    use super::*;

    #[test]
    fn test_clicking_away_without_edits_produces_equal_dataset() {
        let data = dataset();
        let seen = RefCell::new(Vec::new());
        let mut callbacks = recording_callbacks(&seen);
        let mut controller = EditController::new(true);

        controller.row_click(&data, 0, &mut callbacks);
        controller.row_click(&data, 1, &mut callbacks);
        drop(callbacks);

        let seen = seen.into_inner();
        for next in data_changes(&seen) {
            assert_eq!(next, &data);
        }
    }
}

mod passthrough {
    use super::*;

    #[test]
    fn test_header_click_forwards_descriptor_and_leaves_session() {
        let data = dataset();
        let columns = columns();
        let seen = RefCell::new(Vec::new());
        let mut callbacks = recording_callbacks(&seen);
        let mut controller = EditController::new(true);

        controller.row_click(&data, 0, &mut callbacks);
        controller.cell_edit(Ustr::from("name"), "A2".to_owned());
        let before = controller.session().clone();

        controller.header_click(&columns[1], &mut callbacks);
        drop(callbacks);

        assert_eq!(controller.session(), &before);
        assert_eq!(
            seen.into_inner(),
            vec![Seen::RowClick(0), Seen::Header(Ustr::from("name"))]
        );
    }

    #[test]
    fn test_double_click_never_opens_or_commits() {
        let data = dataset();
        let seen = RefCell::new(Vec::new());
        let mut callbacks = recording_callbacks(&seen);
        let mut controller = EditController::new(true);

        controller.row_double_click(&data, 1, &mut callbacks);
        assert!(!controller.session().is_editing());

        controller.row_click(&data, 0, &mut callbacks);
        controller.row_double_click(&data, 1, &mut callbacks);
        assert_eq!(controller.session().active_row(), Some(0));
        drop(callbacks);

        assert_eq!(
            seen.into_inner(),
            vec![
                Seen::DoubleClick(1),
                Seen::RowClick(0),
                Seen::DoubleClick(1)
            ]
        );
    }
}

mod rendering {
    use super::*;

    #[test]
    fn test_active_row_cells_become_inputs_after_interactions() {
        let data = dataset();
        let columns = columns();
        let mut callbacks: GridCallbacks<'_, Row> = GridCallbacks::new();
        let mut controller = EditController::new(true);

        for interaction in [
            GridInteraction::RowClicked(1),
            GridInteraction::CellEdited {
                field: Ustr::from("name"),
                value: "B2".to_owned(),
            },
        ] {
            controller.apply(interaction, &data, &columns, &mut callbacks);
        }

        let model = ColumnModel::new(&columns, controller.is_editable());
        let session = controller.session();
        let name = &model.columns()[1];

        let editing = model.cell_content(name, &data[1], 1, session);
        assert!(matches!(editing, CellContent::Input { ref value, .. } if value == "B2"));

        let id = model.cell_content(&model.columns()[0], &data[1], 1, session);
        assert!(matches!(id, CellContent::Input { ref value, .. } if value == "2"));

        let other = model.cell_content(name, &data[0], 0, session);
        assert!(matches!(other, CellContent::Text(ref text) if text == "A"));
    }
}

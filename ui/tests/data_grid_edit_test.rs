//! Edit session tests for the data grid widget driven through
//! [`DataGridState`](datagrid_ui::DataGridState).
//!
//! These call the same entry points a host uses for clicks that happen
//! outside the grid and check what the grid renders on the following frames.
//! Pointer-driven coverage lives in `data_grid_pointer_test.rs`.

mod common;

use std::cell::RefCell;

use datagrid_business::GridCallbacks;
use datagrid_ui::state::Row;
use egui::accesskit::Role;
use kittest::Queryable;

use crate::common::{editable_state, grid_harness, settle};

fn text_inputs<T>(harness: &egui_kittest::Harness<'_, T>) -> usize {
    harness.query_all_by_role(Role::TextInput).count()
}

#[test]
fn test_row_click_opens_inputs_on_that_row_only() {
    let mut harness = grid_harness(editable_state());
    assert_eq!(text_inputs(&harness), 0);

    {
        let state = harness.state_mut();
        let mut callbacks = GridCallbacks::new();
        assert!(state.grid.row_clicked(&state.data, 1, &mut callbacks));
    }
    settle(&mut harness);

    // id, name, email, role and status; `actions` has no field.
    assert_eq!(text_inputs(&harness), 5);
    assert_eq!(harness.state().grid.editing_row(), Some(1));
    // Rows that are not being edited keep their labels.
    assert!(harness.query_by_label("Ada Lovelace").is_some());
    assert!(harness.query_by_label("#2").is_some());
}

#[test]
fn test_external_commit_publishes_edits() {
    let mut harness = grid_harness(editable_state());

    {
        let state = harness.state_mut();
        let mut callbacks = GridCallbacks::new();
        state.grid.row_clicked(&state.data, 1, &mut callbacks);
        state.grid.cell_edited("name", "Grace Brewster Hopper");
    }
    settle(&mut harness);
    assert_eq!(
        harness.state().grid.session().pending_value("name".into()),
        Some("Grace Brewster Hopper")
    );

    assert!(harness.state_mut().commit());
    settle(&mut harness);

    let state = harness.state();
    assert_eq!(state.grid.editing_row(), None);
    assert_eq!(state.data[1]["name"], "Grace Brewster Hopper");
    assert_eq!(state.data[0]["name"], "Ada Lovelace");
    assert!(
        state
            .events
            .iter()
            .any(|event| event.starts_with("data changed"))
    );
    assert_eq!(text_inputs(&harness), 0);
    assert!(harness.query_by_label("Grace Brewster Hopper").is_some());
}

#[test]
fn test_clicking_another_row_commits_then_moves_session() {
    let mut harness = grid_harness(editable_state());
    let published: RefCell<Vec<Vec<Row>>> = RefCell::new(Vec::new());

    {
        let state = harness.state_mut();
        let mut callbacks = GridCallbacks::new()
            .on_data_change(|next| published.borrow_mut().push(next));
        state.grid.row_clicked(&state.data, 0, &mut callbacks);
        state.grid.cell_edited("role", "owner");
        state.grid.row_clicked(&state.data, 3, &mut callbacks);
    }

    let published = published.into_inner();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0][0]["role"], "owner");

    harness.state_mut().data = published[0].clone();
    settle(&mut harness);

    assert_eq!(harness.state().grid.editing_row(), Some(3));
    assert_eq!(text_inputs(&harness), 5);
    assert!(harness.query_by_label("owner").is_some());
}

#[test]
fn test_commit_without_session_changes_nothing() {
    let mut harness = grid_harness(editable_state());
    let before = harness.state().data.clone();

    assert!(!harness.state_mut().commit());
    settle(&mut harness);

    assert_eq!(harness.state().data, before);
    assert!(harness.state().events.is_empty());
}

use datagrid_business::GridOptions;
use datagrid_ui::DataGridApp;
use datagrid_ui::state::{Row, State};
use egui_kittest::Harness;

/// Harness that lays out only the demo grid.
#[allow(unused)]
pub fn grid_harness<'a>(state: State) -> Harness<'a, State> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut harness = Harness::new_ui_state(
        |ui, state: &mut State| {
            state.show_grid(ui);
        },
        state,
    );
    settle(&mut harness);
    harness
}

/// Demo state with the sample rows and editing switched on.
#[allow(unused)]
pub fn editable_state() -> State {
    State::new(GridOptions {
        is_row_editable: true,
        ..GridOptions::default()
    })
}

#[allow(unused)]
pub fn app_harness<'a>(state: State) -> Harness<'a, DataGridApp> {
    let _ = env_logger::builder().is_test(true).try_init();
    let app = DataGridApp::new(state);
    let mut harness = Harness::new_eframe(|_| app);
    settle(&mut harness);
    harness
}

#[allow(unused)]
pub fn row(value: serde_json::Value) -> Row {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

/// A few frames so auto-sized columns and repaint requests settle.
pub fn settle<T>(harness: &mut Harness<'_, T>) {
    for _ in 0..3 {
        harness.step();
    }
}

/// Press and release the primary button at `pos`, then let the grid react.
#[allow(unused)]
pub fn pointer_click<T>(harness: &mut Harness<'_, T>, pos: egui::Pos2) {
    pointer_clicks(harness, pos, 1);
}

/// `count` clicks at `pos` inside one frame, so two of them form a double-click.
#[allow(unused)]
pub fn pointer_clicks<T>(harness: &mut Harness<'_, T>, pos: egui::Pos2, count: usize) {
    harness.input_mut().events.push(egui::Event::PointerMoved(pos));
    harness.step();

    let events = &mut harness.input_mut().events;
    for _ in 0..count {
        for pressed in [true, false] {
            events.push(egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                modifiers: egui::Modifiers::NONE,
            });
        }
    }
    settle(harness);
}

/// Center of the node labelled `label`.
#[allow(unused)]
pub fn label_center<T>(harness: &Harness<'_, T>, label: &str) -> egui::Pos2 {
    use kittest::Queryable as _;
    harness.get_by_label(label).rect().center()
}

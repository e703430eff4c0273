use std::sync::{Arc, Mutex};

use griddle::{Column, GridModel, ModelEvent, TableModel};

fn sample_model() -> GridModel {
    GridModel::with_rows(
        vec![
            Column::new("Column 1", 10),
            Column::new("Column 2", 10),
            Column::new("Column 3", 10),
        ],
        Column::new("Delete", 10),
        vec![
            vec!["A1".into(), "B1".into(), "C1".into()],
            vec!["A2".into(), "B2".into(), "C2".into()],
            vec!["A3".into(), "B3".into(), "C3".into()],
            vec!["A4".into(), "B4".into(), "C4".into()],
        ],
    )
}

fn record_events(model: &mut GridModel) -> Arc<Mutex<Vec<ModelEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    model.subscribe(Arc::new(move |event| sink.lock().unwrap().push(*event)));
    events
}

fn snapshot(model: &GridModel) -> Vec<Vec<String>> {
    (0..model.row_count())
        .map(|row| {
            (0..model.action_column())
                .map(|col| model.cell_value(row, col).unwrap().to_string())
                .collect()
        })
        .collect()
}

// ============================================================================
// Shape and headers
// ============================================================================

#[test]
fn test_counts_and_headers() {
    let model = sample_model();

    assert_eq!(model.row_count(), 4);
    assert_eq!(model.column_count(), 4);
    assert_eq!(model.action_column(), 3);

    assert_eq!(model.header_label(0), Some("Column 1"));
    assert_eq!(model.header_label(1), Some("Column 2"));
    assert_eq!(model.header_label(2), Some("Column 3"));
    assert_eq!(model.header_label(3), Some("Delete"));
    assert_eq!(model.header_label(4), None);
}

#[test]
fn test_is_editable_matrix() {
    let model = sample_model();

    for row in 0..model.row_count() {
        for col in 0..3 {
            assert!(model.is_editable(row, col), "({row}, {col}) must be editable");
        }
        assert!(!model.is_editable(row, 3), "action column must not be editable");
    }

    assert!(!model.is_editable(4, 0));
    assert!(!model.is_editable(0, 4));
}

// ============================================================================
// Cell reads and writes
// ============================================================================

#[test]
fn test_set_then_get_roundtrip() {
    let mut model = sample_model();

    for row in 0..model.row_count() {
        for col in 0..3 {
            let value = format!("v{row}{col}");
            assert!(model.set_cell_value(row, col, value.clone()));
            assert_eq!(model.cell_value(row, col), Some(value.as_str()));
        }
    }
}

#[test]
fn test_action_column_rejects_writes() {
    let mut model = sample_model();
    let events = record_events(&mut model);
    let before = snapshot(&model);

    assert!(!model.set_cell_value(0, 3, "nope".into()));

    assert_eq!(model.cell_value(0, 3), None);
    assert_eq!(snapshot(&model), before);
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn test_out_of_range_write_rejected() {
    let mut model = sample_model();
    let events = record_events(&mut model);

    assert!(!model.set_cell_value(9, 0, "x".into()));
    assert!(!model.set_cell_value(0, 9, "x".into()));
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn test_out_of_range_reads_are_none() {
    let model = sample_model();

    assert_eq!(model.cell_value(99, 0), None);
    assert_eq!(model.cell_value(0, 99), None);
    assert_eq!(model.cell_value(0, 3), None);
}

#[test]
fn test_cell_changed_notification_scoped() {
    let mut model = sample_model();
    let events = record_events(&mut model);

    assert!(model.set_cell_value(2, 1, "edited".into()));

    let events = events.lock().unwrap();
    assert_eq!(*events, vec![ModelEvent::CellChanged { row: 2, col: 1 }]);
}

// ============================================================================
// Row removal
// ============================================================================

#[test]
fn test_remove_row_shifts_following_rows() {
    let mut model = sample_model();

    model.remove_row(1);

    assert_eq!(model.row_count(), 3);
    assert_eq!(
        snapshot(&model),
        vec![
            vec!["A1".to_string(), "B1".into(), "C1".into()],
            vec!["A3".to_string(), "B3".into(), "C3".into()],
            vec!["A4".to_string(), "B4".into(), "C4".into()],
        ]
    );
}

#[test]
fn test_removal_indices_are_not_stale() {
    let mut model = sample_model();

    // The second call must hit what moved up into position 1, not a
    // remembered row.
    model.remove_row(1);
    model.remove_row(1);

    assert_eq!(model.row_count(), 2);
    assert_eq!(model.cell_value(0, 0), Some("A1"));
    assert_eq!(model.cell_value(1, 0), Some("A4"));
}

#[test]
fn test_remove_first_and_last() {
    let mut model = sample_model();

    model.remove_row(0);
    assert_eq!(model.cell_value(0, 0), Some("A2"));

    model.remove_row(model.row_count() - 1);
    assert_eq!(model.row_count(), 2);
    assert_eq!(model.cell_value(1, 0), Some("A3"));
}

#[test]
fn test_removal_notification_bracket() {
    let mut model = sample_model();
    let events = record_events(&mut model);

    model.remove_row(1);

    let events = events.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            ModelEvent::RowsAboutToBeRemoved { first: 1, last: 1 },
            ModelEvent::RowsRemoved { first: 1, last: 1 },
        ]
    );
}

#[test]
fn test_observers_called_in_registration_order() {
    let mut model = sample_model();
    let order = Arc::new(Mutex::new(Vec::new()));

    for tag in ["first", "second"] {
        let sink = Arc::clone(&order);
        model.subscribe(Arc::new(move |event| {
            if matches!(event, ModelEvent::RowsRemoved { .. }) {
                sink.lock().unwrap().push(tag);
            }
        }));
    }

    model.remove_row(0);

    assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_remove_row_out_of_range_panics() {
    let mut model = sample_model();
    model.remove_row(10);
}

#[test]
fn test_failed_removal_emits_nothing() {
    let mut model = sample_model();
    let events = record_events(&mut model);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        model.remove_row(10);
    }));

    assert!(result.is_err());
    assert!(events.lock().unwrap().is_empty());
}

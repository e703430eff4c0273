use griddle::{
    Alignment, Buffer, Column, Event, GridModel, GridView, MouseButton, Rect, TableModel,
};

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

fn sample_view() -> GridView<GridModel> {
    GridView::with_row_actions(sample_model(), "Delete")
}

fn render(view: &mut GridView<GridModel>) -> Buffer {
    let mut buf = Buffer::new(50, 10);
    view.render(Rect::from_size(50, 10), &mut buf);
    buf
}

fn line(buf: &Buffer, y: u16) -> String {
    (0..buf.width())
        .map(|x| match buf.get(x, y).unwrap().ch {
            '\0' => ' ',
            ch => ch,
        })
        .collect()
}

// ============================================================================
// Basic painting
// ============================================================================

#[test]
fn test_renders_headers_and_rows() {
    let mut view = sample_view();
    let buf = render(&mut view);

    let header = line(&buf, 0);
    assert!(header.contains("Column 1"));
    assert!(header.contains("Column 2"));
    assert!(header.contains("Column 3"));
    assert!(header.contains("Delete"));

    assert!(line(&buf, 1).starts_with("A1"));
    assert!(line(&buf, 1).contains("B1"));
    assert!(line(&buf, 1).contains("C1"));
    assert!(line(&buf, 4).starts_with("A4"));
    // No fifth data row.
    assert_eq!(line(&buf, 5).trim(), "");
}

#[test]
fn test_headers_are_bold() {
    let mut view = sample_view();
    let buf = render(&mut view);

    // 'C' of "Column 1" sits at the origin.
    assert!(buf.get(0, 0).unwrap().style.bold);
    assert!(!buf.get(0, 1).unwrap().style.bold);
}

#[test]
fn test_action_column_paints_button_per_row() {
    let mut view = sample_view();
    let buf = render(&mut view);

    for row in 1..=4 {
        assert!(
            line(&buf, row).contains("[ Delete ]"),
            "row {row} must carry a button"
        );
    }
}

#[test]
fn test_button_uses_theme_colors() {
    let mut view = sample_view();
    let button_bg = view.theme().button_bg.to_rgb();
    let buf = render(&mut view);

    // Anywhere inside the action cell of the first row.
    assert_eq!(buf.get(32, 1).unwrap().bg, button_bg);
    assert_ne!(buf.get(5, 1).unwrap().bg, button_bg);
}

#[test]
fn test_right_aligned_column() {
    let model = GridModel::with_rows(
        vec![Column::new("Qty", 10).align(Alignment::Right)],
        Column::new("Delete", 10),
        vec![vec!["42".into()]],
    );
    let mut view = GridView::with_row_actions(model, "Delete");
    let buf = render(&mut view);

    assert!(line(&buf, 1).starts_with("        42"));
}

#[test]
fn test_long_values_truncated_with_ellipsis() {
    let mut view = sample_view();
    assert!(view
        .model_mut()
        .set_cell_value(0, 0, "much longer than ten".into()));
    let buf = render(&mut view);

    let row = line(&buf, 1);
    assert!(row.starts_with("much long…"));
    // The neighbour column is untouched.
    assert!(row.contains("B1"));
}

// ============================================================================
// Repaint after mutation
// ============================================================================

#[test]
fn test_rerender_after_removal_shifts_rows() {
    let mut view = sample_view();
    render(&mut view);

    view.model_mut().remove_row(1);
    let buf = render(&mut view);

    assert!(line(&buf, 1).starts_with("A1"));
    assert!(line(&buf, 2).starts_with("A3"));
    assert!(line(&buf, 3).starts_with("A4"));
    assert_eq!(line(&buf, 4).trim(), "");

    // Three buttons remain, not four.
    assert!(line(&buf, 3).contains("[ Delete ]"));
    assert!(!line(&buf, 4).contains("[ Delete ]"));
}

#[test]
fn test_open_editor_paints_overlay() {
    let mut view = sample_view();
    render(&mut view);

    let result = view.handle_event(&Event::Click {
        x: 2,
        y: 1,
        button: MouseButton::Left,
    });
    assert!(result.is_handled());

    let editor_bg = view.theme().editor_bg.to_rgb();
    let buf = render(&mut view);

    assert_eq!(buf.get(0, 1).unwrap().bg, editor_bg);
    // The edited value is painted back into the cell.
    assert!(line(&buf, 1).starts_with("A1"));
}

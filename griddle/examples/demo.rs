use std::fs::File;
use std::time::Duration;

use griddle::{Column, Event, GridModel, GridView, Key, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    let log_file = File::create("griddle-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let model = GridModel::with_rows(
        vec![
            Column::new("Column 1", 12),
            Column::new("Column 2", 12),
            Column::new("Column 3", 12),
        ],
        Column::new("Delete", 10),
        vec![
            vec!["A1".into(), "B1".into(), "C1".into()],
            vec!["A2".into(), "B2".into(), "C2".into()],
            vec!["A3".into(), "B3".into(), "C3".into()],
            vec!["A4".into(), "B4".into(), "C4".into()],
        ],
    );
    let mut view = GridView::with_row_actions(model, "Delete");

    let mut term = Terminal::new()?;
    loop {
        for event in term.poll(Some(Duration::from_millis(100)))? {
            if view.handle_event(&event).is_handled() {
                continue;
            }
            if let Event::Key {
                key: Key::Char('q') | Key::Escape,
                ..
            } = event
            {
                return Ok(());
            }
        }

        term.draw(|area, buf| view.render(area, buf))?;
    }
}

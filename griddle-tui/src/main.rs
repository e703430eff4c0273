use std::fs::File;
use std::time::Duration;

use griddle::{Alignment, Column, Event, GridModel, GridView, Key, Modifiers, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

#[derive(Debug, Error)]
enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

fn main() {
    let log_file = File::create("griddle-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {e}");
    }
}

fn run() -> Result<(), AppError> {
    let mut view = GridView::with_row_actions(contacts(), "Delete");
    let mut term = Terminal::new()?;
    log::info!("[app] started, terminal {:?}", term.size());

    loop {
        for event in term.poll(Some(Duration::from_millis(100)))? {
            if view.handle_event(&event).is_handled() {
                continue;
            }
            if should_quit(&event) {
                log::info!("[app] quit requested");
                return Ok(());
            }
        }

        term.draw(|area, buf| view.render(area, buf))?;
    }
}

fn should_quit(event: &Event) -> bool {
    matches!(
        event,
        Event::Key {
            key: Key::Char('q'),
            ..
        } | Event::Key {
            key: Key::Char('c'),
            modifiers: Modifiers { ctrl: true, .. },
        }
    )
}

fn contacts() -> GridModel {
    let columns = vec![
        Column::new("Name", 20),
        Column::new("Email", 28),
        Column::new("Extension", 10).align(Alignment::Right),
    ];
    let rows = [
        ["Ada Ferguson", "ada@example.org", "114"],
        ["Bram Holt", "bram@example.org", "207"],
        ["Cleo Marchetti", "cleo@example.org", "311"],
        ["Dmitri Walsh", "dmitri@example.org", "402"],
        ["Eila Norström", "eila@example.org", "518"],
    ];

    GridModel::with_rows(
        columns,
        Column::new("Delete", 10),
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    )
}

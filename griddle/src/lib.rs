pub mod buffer;
pub mod event;
pub mod layout;
pub mod model;
pub mod render;
pub mod style;
pub mod terminal;
pub mod text;
pub mod view;

pub use buffer::{Buffer, Cell};
pub use event::{Event, EventResult, Key, Modifiers, MouseButton};
pub use layout::{GridLayout, Rect};
pub use model::{Column, GridModel, ModelEvent, ModelObserver, TableModel};
pub use render::{CellRenderer, RowActionRenderer, TextCell};
pub use style::{Alignment, Color, Rgb, TextStyle, Theme};
pub use terminal::Terminal;
pub use view::GridView;

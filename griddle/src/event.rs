//! Input events delivered to the grid, plus the result type handlers
//! answer with.

/// One input event, already translated from the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Key press.
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button pressed.
    Click { x: u16, y: u16, button: MouseButton },
    /// Mouse button released.
    Release { x: u16, y: u16, button: MouseButton },
    /// Mouse moved with no button held.
    MouseMove { x: u16, y: u16 },
    /// Mouse wheel; positive delta scrolls down.
    Scroll { x: u16, y: u16, delta: i16 },
    /// Terminal resized.
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Translate a raw crossterm event, dropping those the grid has no
    /// use for.
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

        match event {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key {
                key: key.code.into(),
                modifiers: key.modifiers.into(),
            }),
            CtEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(button) => Some(Event::Click {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Up(button) => Some(Event::Release {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Moved => Some(Event::MouseMove { x, y }),
                    MouseEventKind::ScrollUp => Some(Event::Scroll { x, y, delta: -1 }),
                    MouseEventKind::ScrollDown => Some(Event::Scroll { x, y, delta: 1 }),
                    _ => None,
                }
            }
            CtEvent::Resize(width, height) => Some(Event::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }

    /// Screen position of a pointer event.
    pub fn position(&self) -> Option<(u16, u16)> {
        match *self {
            Event::Click { x, y, .. }
            | Event::Release { x, y, .. }
            | Event::MouseMove { x, y }
            | Event::Scroll { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }
}

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Result of offering an event to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    /// Event was not handled, try other handlers.
    #[default]
    Ignored,
    /// Event was consumed, stop dispatch.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled (not Ignored).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            // Unsupported keys collapse to NUL and are never matched.
            _ => Key::Char('\0'),
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

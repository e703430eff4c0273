use crate::layout::Rect;
use crate::style::{Rgb, TextStyle};
use crate::text::char_width;

/// A single painted terminal cell.
///
/// The NUL character marks the shadow cell behind a double-width glyph;
/// the flush pass skips those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::new(),
        }
    }
}

impl Cell {
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            ..Default::default()
        }
    }

    pub fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

/// Row-major grid of cells the widget paints into.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Paint `text` starting at `(x, y)`, clipped to `max_width` columns
    /// and to the buffer edge. Double-width glyphs occupy two cells.
    pub fn put_str(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        max_width: u16,
        fg: Rgb,
        bg: Rgb,
        style: TextStyle,
    ) {
        let limit = (x.saturating_add(max_width)).min(self.width);
        let mut cursor = x;

        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if cursor + w > limit {
                break;
            }
            self.set(cursor, y, Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style));
            if w == 2 {
                self.set(
                    cursor + 1,
                    y,
                    Cell::new('\0').with_fg(fg).with_bg(bg).with_style(style),
                );
            }
            cursor += w;
        }
    }

    /// Set the background color of every cell inside `rect`.
    pub fn fill(&mut self, rect: Rect, bg: Rgb) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.bg = bg;
                }
            }
        }
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}

//! The hosting view: ties a model to per-column renderers, paints the
//! grid, and routes input.
//!
//! Every paint computes a fresh [`GridLayout`] and the previous one is
//! discarded, so pointer events always resolve to the row currently on
//! screen. Row indices are never cached across passes; that is what
//! keeps the delete button correct after earlier rows have been removed.

use std::collections::HashMap;

use crate::buffer::{Buffer, Cell};
use crate::event::{Event, EventResult, Key, Modifiers};
use crate::layout::{GridLayout, Rect};
use crate::model::TableModel;
use crate::render::{CellRenderer, RowActionRenderer, TextCell};
use crate::style::{Alignment, TextStyle, Theme};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};

static DEFAULT_RENDERER: TextCell = TextCell;

/// In-place editing state for a single cell. The cursor is a char index.
#[derive(Debug, Clone)]
struct CellEditor {
    row: usize,
    col: usize,
    text: String,
    cursor: usize,
}

impl CellEditor {
    fn new(row: usize, col: usize, text: String) -> Self {
        let cursor = text.chars().count();
        Self {
            row,
            col,
            text,
            cursor,
        }
    }

    fn insert(&mut self, ch: char) {
        let at = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = char_to_byte_index(&self.text, self.cursor);
            self.text.remove(at);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let at = char_to_byte_index(&self.text, self.cursor);
            self.text.remove(at);
        }
    }

    fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    fn move_home(&mut self) {
        self.cursor = 0;
    }

    fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }
}

/// Grid widget over any [`TableModel`].
///
/// Columns render through [`TextCell`] unless an override is installed;
/// the usual setup gives the action column a [`RowActionRenderer`] and
/// leaves the rest alone.
pub struct GridView<M: TableModel> {
    model: M,
    renderers: HashMap<usize, Box<dyn CellRenderer>>,
    theme: Theme,
    layout: Option<GridLayout>,
    editor: Option<CellEditor>,
}

impl<M: TableModel> GridView<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            renderers: HashMap::new(),
            theme: Theme::default(),
            layout: None,
            editor: None,
        }
    }

    /// A view whose action column carries a delete button.
    pub fn with_row_actions(model: M, label: impl Into<String>) -> Self {
        let col = model.action_column();
        Self::new(model).with_renderer(col, Box::new(RowActionRenderer::new(label)))
    }

    /// Install a renderer override for one column.
    pub fn with_renderer(mut self, col: usize, renderer: Box<dyn CellRenderer>) -> Self {
        self.renderers.insert(col, renderer);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Coordinate of the cell currently being edited.
    pub fn editing_cell(&self) -> Option<(usize, usize)> {
        self.editor.as_ref().map(|e| (e.row, e.col))
    }

    /// Paint the grid into `area` and retain the resulting layout for
    /// input routing.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let widths: Vec<u16> = (0..self.model.column_count())
            .map(|col| self.model.column(col).map_or(0, |c| c.width))
            .collect();
        let layout = GridLayout::new(area, &widths, self.model.row_count());

        buf.fill(area, self.theme.background.to_rgb());
        self.render_headers(&layout, buf);

        // Cells are rebuilt from the model on every pass; nothing is
        // retained per row between paints.
        for row in 0..self.model.row_count() {
            for col in 0..self.model.column_count() {
                let Some(region) = layout.cell_rect(row, col) else {
                    continue;
                };
                let value = self.model.cell_value(row, col).unwrap_or("");
                let align = self.model.column(col).map_or(Alignment::Left, |c| c.align);
                self.renderer_for(col)
                    .render(value, align, region, &self.theme, buf);
            }
        }

        self.render_editor(&layout, buf);
        self.layout = Some(layout);
    }

    /// Route one input event. Key events go to an open editor first;
    /// pointer events are hit-tested against the layout of the last
    /// paint and offered to the column's renderer before the default
    /// edit path runs.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        if self.editor.is_some() {
            if let Event::Key { key, modifiers } = event {
                return self.handle_editor_key(*key, *modifiers);
            }
        }

        let Some(layout) = self.layout.clone() else {
            return EventResult::Ignored;
        };

        match *event {
            Event::Click { x, y, .. } | Event::Release { x, y, .. } => {
                // A press outside the edited cell commits the pending
                // edit before anything else happens.
                let pressed_outside_editor = matches!(event, Event::Click { .. })
                    && self.editor.as_ref().is_some_and(|editor| {
                        !layout
                            .cell_rect(editor.row, editor.col)
                            .is_some_and(|r| r.contains(x, y))
                    });
                if pressed_outside_editor {
                    self.commit_edit();
                }

                let Some((row, col)) = layout.cell_at(x, y) else {
                    return EventResult::Ignored;
                };
                // The layout may describe a pass the host has not
                // refreshed since a removal; never hand out a row the
                // model no longer has.
                if row >= self.model.row_count() {
                    return EventResult::Ignored;
                }

                let rows_before = self.model.row_count();
                let mut result = EventResult::Ignored;
                if let Some(renderer) = self.renderers.get(&col) {
                    if let Some(region) = layout.cell_rect(row, col) {
                        result = renderer.handle_input(event, region, row, &mut self.model);
                    }
                }
                if self.model.row_count() != rows_before {
                    self.cancel_edit_after_removal();
                }
                if result.is_handled() {
                    return result;
                }

                if matches!(event, Event::Click { .. }) && self.model.is_editable(row, col) {
                    self.begin_edit(row, col);
                    return EventResult::Consumed;
                }

                EventResult::Ignored
            }
            _ => EventResult::Ignored,
        }
    }

    fn renderer_for(&self, col: usize) -> &dyn CellRenderer {
        self.renderers
            .get(&col)
            .map(|r| r.as_ref())
            .unwrap_or(&DEFAULT_RENDERER)
    }

    fn render_headers(&self, layout: &GridLayout, buf: &mut Buffer) {
        let area = layout.area();
        if area.height == 0 {
            return;
        }
        let fg = self.theme.header_fg.to_rgb();
        let bg = self.theme.header_bg.to_rgb();
        buf.fill(Rect::new(area.x, area.y, area.width, 1), bg);

        for col in 0..self.model.column_count() {
            let Some(region) = layout.header_rect(col) else {
                continue;
            };
            let label = self.model.header_label(col).unwrap_or("");
            let text = truncate_to_width(label, region.width as usize);
            let align = self.model.column(col).map_or(Alignment::Left, |c| c.align);
            let dx = align_offset(display_width(&text), region.width as usize, align) as u16;
            buf.put_str(
                region.x + dx,
                region.y,
                &text,
                region.width - dx,
                fg,
                bg,
                TextStyle::new().bold(),
            );
        }
    }

    fn render_editor(&self, layout: &GridLayout, buf: &mut Buffer) {
        let Some(editor) = &self.editor else {
            return;
        };
        let Some(region) = layout.cell_rect(editor.row, editor.col) else {
            return;
        };
        let fg = self.theme.editor_fg.to_rgb();
        let bg = self.theme.editor_bg.to_rgb();

        for x in region.x..region.right().min(buf.width()) {
            buf.set(x, region.y, Cell::new(' ').with_fg(fg).with_bg(bg));
        }
        buf.put_str(
            region.x,
            region.y,
            &editor.text,
            region.width,
            fg,
            bg,
            TextStyle::new(),
        );

        // Cursor cell, inverted.
        let dx = (editor
            .text
            .chars()
            .take(editor.cursor)
            .map(char_width)
            .sum::<usize>() as u16)
            .min(region.width.saturating_sub(1));
        let x = region.x + dx;
        let ch = match buf.get(x, region.y).map(|c| c.ch) {
            Some('\0') | None => ' ',
            Some(ch) => ch,
        };
        buf.set(x, region.y, Cell::new(ch).with_fg(bg).with_bg(fg));
    }

    fn handle_editor_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        match key {
            Key::Enter => {
                self.commit_edit();
                EventResult::Consumed
            }
            Key::Escape => {
                log::debug!("[view] edit cancelled");
                self.editor = None;
                EventResult::Consumed
            }
            _ => {
                let Some(editor) = self.editor.as_mut() else {
                    return EventResult::Ignored;
                };
                match key {
                    Key::Char(c) if !modifiers.ctrl && !modifiers.alt => editor.insert(c),
                    Key::Backspace => editor.backspace(),
                    Key::Delete => editor.delete(),
                    Key::Left => editor.move_left(),
                    Key::Right => editor.move_right(),
                    Key::Home => editor.move_home(),
                    Key::End => editor.move_end(),
                    _ => return EventResult::Ignored,
                }
                EventResult::Consumed
            }
        }
    }

    fn begin_edit(&mut self, row: usize, col: usize) {
        let text = self.model.cell_value(row, col).unwrap_or("").to_string();
        log::debug!("[view] editing cell ({row}, {col})");
        self.editor = Some(CellEditor::new(row, col, text));
    }

    fn commit_edit(&mut self) {
        if let Some(editor) = self.editor.take() {
            if !self.model.set_cell_value(editor.row, editor.col, editor.text) {
                log::warn!(
                    "[view] edit commit rejected at ({}, {})",
                    editor.row,
                    editor.col
                );
            }
        }
    }

    fn cancel_edit_after_removal(&mut self) {
        // Row indices shifted under the editor; the coordinate it holds
        // no longer names the cell the user started editing.
        if self.editor.take().is_some() {
            log::debug!("[view] edit cancelled by row removal");
        }
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

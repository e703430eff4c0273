//! Per-column cell rendering and input strategies.
//!
//! The view paints every cell through a [`CellRenderer`] and offers
//! pointer input to the renderer of the column it landed in. A column
//! with no override uses [`TextCell`]; the action column gets a
//! [`RowActionRenderer`].

use crate::buffer::Buffer;
use crate::event::{Event, EventResult, MouseButton};
use crate::layout::Rect;
use crate::model::TableModel;
use crate::style::{Alignment, TextStyle, Theme};
use crate::text::{align_offset, display_width, truncate_to_width};

/// Rendering and input behavior for one column.
pub trait CellRenderer: Send + Sync {
    /// Paint one cell into `region`.
    fn render(&self, value: &str, align: Alignment, region: Rect, theme: &Theme, buf: &mut Buffer);

    /// Offer an input event that landed in this column.
    ///
    /// `row` is resolved by the view against the current render pass and
    /// is valid at the moment of the call only; implementations must not
    /// retain it.
    fn handle_input(
        &self,
        _event: &Event,
        _region: Rect,
        _row: usize,
        _model: &mut dyn TableModel,
    ) -> EventResult {
        EventResult::Ignored
    }
}

/// Default renderer: plain, truncated, aligned text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCell;

impl CellRenderer for TextCell {
    fn render(&self, value: &str, align: Alignment, region: Rect, theme: &Theme, buf: &mut Buffer) {
        if region.is_empty() {
            return;
        }
        let text = truncate_to_width(value, region.width as usize);
        let dx = align_offset(display_width(&text), region.width as usize, align) as u16;
        buf.put_str(
            region.x + dx,
            region.y,
            &text,
            region.width - dx,
            theme.text.to_rgb(),
            theme.background.to_rgb(),
            TextStyle::new(),
        );
    }
}

/// Renderer for the reserved action column: paints a button in every row
/// and turns a release on it into removal of that row.
///
/// The button is repainted from scratch on every pass and bound to the
/// row index the view resolved for this event. Nothing is retained
/// between paints, so the control a position maps to always matches the
/// dataset row currently rendered there, including right after earlier
/// rows were deleted.
pub struct RowActionRenderer {
    label: String,
}

impl RowActionRenderer {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl CellRenderer for RowActionRenderer {
    fn render(
        &self,
        _value: &str,
        _align: Alignment,
        region: Rect,
        theme: &Theme,
        buf: &mut Buffer,
    ) {
        if region.is_empty() {
            return;
        }
        let caption = truncate_to_width(&format!("[ {} ]", self.label), region.width as usize);
        let dx = align_offset(
            display_width(&caption),
            region.width as usize,
            Alignment::Center,
        ) as u16;
        buf.fill(region, theme.button_bg.to_rgb());
        buf.put_str(
            region.x + dx,
            region.y,
            &caption,
            region.width - dx,
            theme.button_fg.to_rgb(),
            theme.button_bg.to_rgb(),
            TextStyle::new().bold(),
        );
    }

    fn handle_input(
        &self,
        event: &Event,
        region: Rect,
        row: usize,
        model: &mut dyn TableModel,
    ) -> EventResult {
        let Some((x, y)) = event.position() else {
            return EventResult::Ignored;
        };
        if !region.contains(x, y) {
            return EventResult::Ignored;
        }

        match event {
            Event::Release {
                button: MouseButton::Left,
                ..
            } => {
                log::debug!("[action] {} row {row}", self.label);
                model.remove_row(row);
                EventResult::Consumed
            }
            // Presses inside the button are swallowed whole so the view
            // never routes them into the edit path.
            Event::Click { .. } | Event::Release { .. } => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }
}

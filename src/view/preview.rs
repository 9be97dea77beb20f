//! Grid preview widget.
//!
//! Draws the host's viewport into a ratatui buffer: every attached item that
//! intersects the viewport becomes a bordered block titled with its position.
//! Layout units are scaled down by a fixed units-per-cell factor on both axes.

use crate::host::{AttachedItem, GridHost, ItemSource};
use crate::model::{Orientation, Rect};
use ratatui::{
    buffer::Buffer,
    layout::Rect as CellRect,
    widgets::{Block, Widget},
};

/// Symbol used for items too small to carry a border.
const SLIVER_SYMBOL: &str = "▒";

/// Preview of a laid-out viewport.
#[derive(Debug, Clone)]
pub struct GridPreview {
    items: Vec<AttachedItem>,
    orientation: Orientation,
    /// Layout-unit coordinate drawn at the buffer's top-left cell.
    origin: (i32, i32),
    viewport: (i32, i32),
    scale: i32,
}

impl GridPreview {
    /// Captures the attached items of `host`.
    ///
    /// `scale` is the number of layout units per terminal cell (clamped to >= 1).
    pub fn from_host<S: ItemSource>(host: &GridHost<S>, scale: i32) -> Self {
        let engine = host.engine();
        let orientation = engine.orientation();
        let viewport = host.viewport();
        let cross_origin = engine.padding().cross_start(orientation);
        let origin = match orientation {
            Orientation::Vertical => (cross_origin, viewport.0),
            Orientation::Horizontal => (viewport.0, cross_origin),
        };

        Self {
            items: host.attached().copied().collect(),
            orientation,
            origin,
            viewport,
            scale: scale.max(1),
        }
    }

    /// Renders into a fresh `width` x `height` buffer and returns it as text.
    ///
    /// Trailing spaces and trailing blank lines are dropped.
    pub fn render_text(self, width: u16, height: u16) -> String {
        let area = CellRect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        self.render(area, &mut buffer);

        let mut lines: Vec<String> = (area.top()..area.bottom())
            .map(|y| {
                let line: String = (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect();
                line.trim_end().to_string()
            })
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }

    /// Maps a layout rectangle to the cells it covers inside `area`.
    fn to_cells(&self, rect: &Rect, area: CellRect) -> Option<CellRect> {
        let scale = self.scale;
        let (ox, oy) = self.origin;

        let left = rect.left.saturating_sub(ox).div_euclid(scale).max(0);
        let top = rect.top.saturating_sub(oy).div_euclid(scale).max(0);
        let right = rect
            .right
            .saturating_sub(ox)
            .div_euclid(scale)
            .min(i32::from(area.width));
        let bottom = rect
            .bottom
            .saturating_sub(oy)
            .div_euclid(scale)
            .min(i32::from(area.height));

        if right <= left || bottom <= top {
            return None;
        }

        Some(CellRect::new(
            area.x + left as u16,
            area.y + top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }
}

impl Widget for GridPreview {
    fn render(self, area: CellRect, buf: &mut Buffer) {
        let (start, end) = self.viewport;

        for item in &self.items {
            if !item.rect.intersects_main(self.orientation, start, end) {
                continue;
            }
            let Some(cells) = self.to_cells(&item.rect, area) else {
                continue;
            };

            if cells.width < 2 || cells.height < 2 {
                for y in cells.top()..cells.bottom() {
                    for x in cells.left()..cells.right() {
                        buf[(x, y)].set_symbol(SLIVER_SYMBOL);
                    }
                }
                continue;
            }

            Block::bordered()
                .title(item.position.to_string())
                .render(cells, buf);
        }
    }
}

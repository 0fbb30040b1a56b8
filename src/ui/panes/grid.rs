//! Sort grid rendering
//!
//! Draws a single [`Snapshot`]: one column per element position, one row per
//! recursion depth. Each element is a cell colored by its state, and every
//! sorted region is a bar just beneath the row of its depth.
//!
//! # Layout
//!
//! ```text
//! ┌──┐┌──┐┌──┐        row 0 (pivots stay here)
//! │ 1││ 2││ 3│
//! └──┘└──┘└──┘
//! ▀▀▀▀                sorted bar for depth 0
//!     ┌──┐┌──┐        row 1
//! ```
//!
//! Short terminals fall back to one-line cells with the bar line kept, then
//! to one-line cells packed without bar lines. Sorted regions are then only
//! visible through the cell color. When even that does not fit, nothing is
//! drawn and the pane says so.
//!
//! Only the snapshot's own fields are read, so any step can be drawn on its
//! own.

use crate::snapshot::{Element, Snapshot, SortedRegion};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Widest a cell is allowed to grow
pub const MAX_CELL_WIDTH: u16 = 8;

/// Cell height with borders
const BORDERED_CELL_HEIGHT: u16 = 3;

/// Where cells and bars go inside the grid area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_width: u16,
    pub cell_height: u16,
    /// Vertical distance between rows: the cell plus its bar line, if any
    pub row_stride: u16,
}

impl GridGeometry {
    pub fn bordered(&self) -> bool {
        self.cell_height >= BORDERED_CELL_HEIGHT
    }

    pub fn has_bar_line(&self) -> bool {
        self.row_stride > self.cell_height
    }

    pub fn cell_rect(&self, column: usize, row: usize) -> Rect {
        Rect::new(
            self.origin_x + column as u16 * self.cell_width,
            self.origin_y + row as u16 * self.row_stride,
            self.cell_width,
            self.cell_height,
        )
    }

    /// `None` when rows are packed without a bar line
    pub fn bar_rect(&self, region: &SortedRegion) -> Option<Rect> {
        if !self.has_bar_line() {
            return None;
        }
        Some(Rect::new(
            self.origin_x + region.start_column as u16 * self.cell_width,
            self.origin_y + region.depth as u16 * self.row_stride + self.cell_height,
            region.width() as u16 * self.cell_width,
            1,
        ))
    }
}

/// Fit `columns` x `rows` cells into `area`.
///
/// Every row always fits. Cells shrink to a single borderless line when the
/// bordered rows would not fit, and the bar lines go next. Returns `None` when
/// there is nothing to draw or one line per row is still too tall.
pub fn grid_geometry(area: Rect, columns: usize, rows: usize) -> Option<GridGeometry> {
    if columns == 0 || rows == 0 || area.width == 0 || area.height == 0 {
        return None;
    }

    let cell_width = (area.width as usize / columns).min(MAX_CELL_WIDTH as usize) as u16;
    if cell_width == 0 {
        return None;
    }

    let height = area.height as usize;
    let (cell_height, row_stride) = if rows * (BORDERED_CELL_HEIGHT as usize + 1) <= height {
        (BORDERED_CELL_HEIGHT, BORDERED_CELL_HEIGHT + 1)
    } else if rows * 2 <= height {
        (1, 2)
    } else if rows <= height {
        (1, 1)
    } else {
        return None;
    };

    let used_width = cell_width * columns as u16;
    Some(GridGeometry {
        origin_x: area.x + (area.width - used_width) / 2,
        origin_y: area.y,
        cell_width,
        cell_height,
        row_stride,
    })
}

fn fits(area: Rect, rect: Rect) -> bool {
    rect.x >= area.x
        && rect.y >= area.y
        && rect.right() <= area.right()
        && rect.bottom() <= area.bottom()
}

fn render_cell(frame: &mut Frame, rect: Rect, element: &Element, bordered: bool) {
    let color = DEFAULT_THEME.state_color(element.state);
    let text = Line::from(element.value.to_string());

    let paragraph = if bordered {
        Paragraph::new(text)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
    } else {
        Paragraph::new(text).style(
            Style::default()
                .bg(color)
                .fg(DEFAULT_THEME.current_line_bg)
                .add_modifier(Modifier::BOLD),
        )
    };

    frame.render_widget(paragraph.alignment(Alignment::Center), rect);
}

fn render_bar(frame: &mut Frame, rect: Rect) {
    let bar = Paragraph::new("▀".repeat(rect.width as usize))
        .style(Style::default().fg(DEFAULT_THEME.success));
    frame.render_widget(bar, rect);
}

/// Render the grid pane for one snapshot
pub fn render_grid_pane(frame: &mut Frame, area: Rect, snapshot: Option<&Snapshot>) {
    let block = Block::default()
        .title(" QuickSort ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(snapshot) = snapshot else {
        let paragraph =
            Paragraph::new("(no snapshot)").style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, inner);
        return;
    };

    let Some(geometry) = grid_geometry(inner, snapshot.column_count(), snapshot.row_count())
    else {
        let message = if snapshot.elements.is_empty() {
            "(empty array)"
        } else {
            "(terminal too small)"
        };
        let paragraph = Paragraph::new(message).style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, inner);
        return;
    };

    // Bars first so a cell never gets painted over
    for region in &snapshot.sorted_regions {
        if let Some(rect) = geometry.bar_rect(region) {
            if fits(inner, rect) {
                render_bar(frame, rect);
            }
        }
    }

    for element in &snapshot.elements {
        let rect = geometry.cell_rect(element.column, element.row());
        if fits(inner, rect) {
            render_cell(frame, rect, element, geometry.bordered());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_degenerate() {
        assert_eq!(grid_geometry(Rect::new(0, 0, 80, 20), 0, 1), None);
        assert_eq!(grid_geometry(Rect::new(0, 0, 0, 20), 5, 1), None);
        // fewer cells of width than columns
        assert_eq!(grid_geometry(Rect::new(0, 0, 4, 20), 5, 1), None);
    }

    #[test]
    fn test_geometry_caps_and_centers() {
        let geometry = grid_geometry(Rect::new(2, 1, 100, 30), 5, 3).unwrap();

        assert_eq!(geometry.cell_width, MAX_CELL_WIDTH);
        assert_eq!(geometry.origin_x, 2 + (100 - 5 * MAX_CELL_WIDTH) / 2);
        assert_eq!(geometry.origin_y, 1);
        assert!(geometry.bordered());
        assert_eq!(geometry.row_stride, 4);
    }

    #[test]
    fn test_geometry_shrinks_rows_when_short() {
        let geometry = grid_geometry(Rect::new(0, 0, 60, 10), 12, 4).unwrap();

        assert_eq!(geometry.cell_width, 5);
        assert!(!geometry.bordered());
        assert_eq!(geometry.row_stride, 2);
    }

    #[test]
    fn test_geometry_packs_rows_without_bars() {
        // 80x24 terminal, 20 values reaching depth 14
        let area = Rect::new(1, 1, 78, 16);
        let geometry = grid_geometry(area, 20, 15).unwrap();

        assert_eq!(geometry.cell_height, 1);
        assert_eq!(geometry.row_stride, 1);
        assert!(!geometry.has_bar_line());
        assert_eq!(geometry.bar_rect(&SortedRegion::single(0, 0)), None);
        assert!(geometry.cell_rect(19, 14).bottom() <= area.bottom());
    }

    #[test]
    fn test_geometry_too_many_rows() {
        let area = Rect::new(1, 1, 78, 16);
        assert!(grid_geometry(area, 20, 16).is_some());
        assert_eq!(grid_geometry(area, 20, 17), None);
    }

    #[test]
    fn test_cells_and_bars_stay_inside() {
        for height in [5, 16, 22] {
            let area = Rect::new(1, 1, 78, height);
            for columns in 1..=20 {
                for rows in 1..=20 {
                    let Some(geometry) = grid_geometry(area, columns, rows) else {
                        assert!(rows > height as usize);
                        continue;
                    };
                    for row in 0..rows {
                        for column in 0..columns {
                            let rect = geometry.cell_rect(column, row);
                            assert!(fits(area, rect), "cell {column},{row} in {area:?}");
                        }
                        let region = SortedRegion::new(0, columns - 1, row);
                        if let Some(bar) = geometry.bar_rect(&region) {
                            assert!(fits(area, bar), "bar row {row} in {area:?}");
                            // the bar line never overlaps the next row
                            assert!(bar.y < geometry.cell_rect(0, row + 1).y);
                        }
                    }
                }
            }
        }
    }
}

//! Root layout: toolbar, grid + contact panel, status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the toolbar (controls row inside a border).
pub const TOOLBAR_HEIGHT: u16 = 3;
/// Width of the contact panel when shown.
pub const CONTACT_WIDTH: u16 = 38;
/// Below this terminal width the contact panel moves under the grid.
pub const STACK_THRESHOLD: u16 = 90;
/// Height of the contact panel when stacked.
pub const CONTACT_STACKED_HEIGHT: u16 = 9;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    pub toolbar: Rect,
    pub grid: Rect,
    pub contact: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Length(TOOLBAR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

        let body = rows[1];
        let (grid, contact) = if area.width < STACK_THRESHOLD {
            let parts = Layout::vertical([
                Constraint::Min(1),
                Constraint::Length(CONTACT_STACKED_HEIGHT),
            ])
            .split(body);
            (parts[0], parts[1])
        } else {
            let parts =
                Layout::horizontal([Constraint::Min(1), Constraint::Length(CONTACT_WIDTH)])
                    .split(body);
            (parts[0], parts[1])
        };

        AppLayout {
            toolbar: rows[0],
            grid,
            contact,
            status: rows[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_side_by_side() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::compute(area);
        assert_eq!(layout.toolbar.height, TOOLBAR_HEIGHT);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.contact.width, CONTACT_WIDTH);
        assert_eq!(layout.grid.width + layout.contact.width, area.width);
        assert_eq!(layout.grid.y, layout.contact.y);
    }

    #[test]
    fn test_narrow_layout_stacks() {
        let area = Rect::new(0, 0, 70, 40);
        let layout = AppLayout::compute(area);
        assert_eq!(layout.contact.width, area.width);
        assert_eq!(layout.contact.height, CONTACT_STACKED_HEIGHT);
        assert!(layout.contact.y > layout.grid.y);
    }
}

use super::*;
use timesheet::GridCell;

impl App {
    pub fn move_cursor_up(&mut self) {
        if self.cursor_row == 0 {
            self.focused_area = FocusedArea::QuickAdd;
            return;
        }
        self.cursor_row -= 1;
        self.ensure_cursor_visible();
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor_row + 1 < self.grid.rows.len() {
            self.cursor_row += 1;
            self.ensure_cursor_visible();
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_col = self.cursor_col.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_col + 1 < Week::DAYS {
            self.cursor_col += 1;
        }
    }

    pub fn cursor_cell(&self) -> Option<&GridCell> {
        self.grid.cell(self.cursor_row, self.cursor_col)
    }

    /// Move focus between the quick-add header and the grid.
    pub fn toggle_focus_area(&mut self) {
        self.focused_area = match self.focused_area {
            FocusedArea::QuickAdd => FocusedArea::Grid,
            FocusedArea::Grid => FocusedArea::QuickAdd,
            FocusedArea::Editor => FocusedArea::Editor,
        };
    }

    pub fn ensure_cursor_visible(&mut self) {
        if self.grid_view_height == 0 {
            return;
        }
        if self.cursor_row < self.grid_scroll {
            self.grid_scroll = self.cursor_row;
        } else if self.cursor_row >= self.grid_scroll + self.grid_view_height {
            self.grid_scroll = self.cursor_row + 1 - self.grid_view_height;
        }
        // A shrunken grid must not leave empty space below the last row.
        self.grid_scroll = self
            .grid_scroll
            .min(self.grid.rows.len().saturating_sub(self.grid_view_height));
    }

    /// Centre the viewport on the case row and put the cursor on the given
    /// day. Does nothing when the case has no row.
    pub fn scroll_to(&mut self, target: &ScrollTarget) {
        let Some(row) = self.grid.row_of_case(&target.case_id) else {
            tracing::debug!(case = %target.case_id, "scroll target has no row");
            return;
        };
        self.cursor_row = row;
        if let Some(col) = self.week.index_of(target.day) {
            self.cursor_col = col;
        }

        let height = self.grid_view_height.max(1);
        let max_scroll = self.grid.rows.len().saturating_sub(height);
        self.grid_scroll = row.saturating_sub(height / 2).min(max_scroll);
    }
}

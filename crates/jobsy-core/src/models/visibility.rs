//! Assistant window state.

use serde::{Deserialize, Serialize};

/// Whether the assistant is shown and whether it is collapsed.
///
/// `minimized` only matters while `visible` is true.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Visibility {
    pub visible: bool,
    pub minimized: bool,
}

impl Visibility {
    /// Shows the assistant expanded.
    pub fn show(&mut self) {
        self.visible = true;
        self.minimized = false;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn minimize(&mut self) {
        self.minimized = true;
    }

    pub fn restore(&mut self) {
        self.minimized = false;
    }

    /// Visible and expanded.
    pub fn is_open(&self) -> bool {
        self.visible && !self.minimized
    }
}

// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! The right-click menu shown over an equipment

use kurbo::Point;

/// Entries of the equipment context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    ChangeName,
    ChangeIcon,
    CreateLink,
    /// Completes a pending link on this equipment; not available yet
    LinkToThis,
}

impl ContextAction {
    /// All entries, in menu order
    pub const ALL: [ContextAction; 4] = [
        Self::ChangeName,
        Self::ChangeIcon,
        Self::CreateLink,
        Self::LinkToThis,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ChangeName => "Change Name",
            Self::ChangeIcon => "Change Icon",
            Self::CreateLink => "Create Link",
            Self::LinkToThis => "Link to this equipment",
        }
    }

    pub fn is_enabled(self) -> bool {
        !matches!(self, Self::LinkToThis)
    }
}

/// Open/closed state of the context menu
#[derive(Debug, Clone, Default)]
pub struct ContextMenu {
    anchor: Option<Point>,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, anchor: Point) {
        self.anchor = Some(anchor);
    }

    pub fn close(&mut self) {
        self.anchor = None;
    }

    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    /// Where the menu was opened, while it is open
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_in_order_with_link_completion_disabled() {
        let labels: Vec<&str> = ContextAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            ["Change Name", "Change Icon", "Create Link", "Link to this equipment"]
        );
        assert!(ContextAction::ChangeName.is_enabled());
        assert!(!ContextAction::LinkToThis.is_enabled());
    }

    #[test]
    fn open_and_close() {
        let mut menu = ContextMenu::new();
        assert!(!menu.is_open());
        menu.open(Point::new(3.0, 4.0));
        assert_eq!(menu.anchor(), Some(Point::new(3.0, 4.0)));
        menu.close();
        assert_eq!(menu.anchor(), None);
    }
}

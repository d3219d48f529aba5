//! Shared menu UI
//!
//! Colors, font sizes, and the `MenuList` widget used by every screen with a
//! keyboard-driven item list. Text is drawn with a top-left anchor so layout
//! math matches positions rather than baselines.

use macroquad::prelude::*;

/// Primary text color
pub const REGULAR_COLOR: Color = WHITE;

/// Color of the selected menu item
pub const HIGHLIGHT_COLOR: Color = ORANGE;

/// Standard text size
pub const FONT_SIZE: u16 = 28;

/// Text size of the selected menu item
pub const HIGHLIGHT_FONT_SIZE: u16 = 32;

/// Vertical distance between menu lines
pub const LINE_SPACING: f32 = 36.0;

/// Draw `text` with its top-left corner at `position`.
pub fn draw_label(text: &str, font: &Font, position: Vec2, font_size: u16, color: Color) {
    draw_text_ex(
        text,
        position.x,
        position.y + font_size as f32,
        TextParams {
            font: Some(font),
            font_size,
            color,
            ..Default::default()
        },
    );
}

/// A vertical list of selectable items. Up/Down moves the selection with
/// wrap-around in both directions; Enter confirms it.
pub struct MenuList {
    items: Vec<&'static str>,
    selected: usize,
}

impl MenuList {
    pub fn new(items: Vec<&'static str>) -> Self {
        Self { items, selected: 0 }
    }

    /// Poll input; returns the confirmed item index when Enter is pressed.
    pub fn update(&mut self) -> Option<usize> {
        if is_key_pressed(KeyCode::Down) {
            self.select_next();
        } else if is_key_pressed(KeyCode::Up) {
            self.select_previous();
        } else if is_key_pressed(KeyCode::Enter) {
            return Some(self.selected);
        }
        None
    }

    pub fn select_next(&mut self) {
        self.selected += 1;
        if self.selected >= self.items.len() {
            self.selected = 0;
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected == 0 {
            self.selected = self.items.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Draw the items top-down from `origin`, highlighting the selection.
    pub fn draw(&self, font: &Font, origin: Vec2) {
        let mut position = origin;
        for (index, item) in self.items.iter().enumerate() {
            let (size, color) = if index == self.selected {
                (HIGHLIGHT_FONT_SIZE, HIGHLIGHT_COLOR)
            } else {
                (FONT_SIZE, REGULAR_COLOR)
            };
            draw_label(item, font, position, size, color);
            position.y += LINE_SPACING;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps_forward() {
        let mut list = MenuList::new(vec!["a", "b", "c"]);
        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), 2);
        list.select_next();
        assert_eq!(list.selected(), 0);
    }

    #[test]
    fn test_selection_wraps_backward() {
        let mut list = MenuList::new(vec!["a", "b", "c"]);
        list.select_previous();
        assert_eq!(list.selected(), 2);
        list.select_previous();
        assert_eq!(list.selected(), 1);
    }
}

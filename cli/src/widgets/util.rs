use std::rc::Rc;

use ratatui::layout::{ Constraint, Flex, Layout, Rect };

/// Stack rows of fixed `heights` in the vertical middle of `area`.
///
/// Rows that do not fit are cut from the bottom.
pub fn centered_rows(area: Rect, heights: &[u16]) -> Rc<[Rect]> {
  Layout::vertical(heights.iter().map(|height| Constraint::Length(*height)))
    .flex(Flex::Center)
    .split(area)
}

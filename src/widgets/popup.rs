use ratatui::{Frame, layout::Rect, widgets::Clear};
use unicode_width::UnicodeWidthStr;

use crate::tooltip::Position;

/// Rect for a box placed absolutely at `position`, clipped to the frame
///
/// The box is never moved to fit; whatever falls outside the frame is cut off.
pub fn popup_at_position(frame_area: Rect, position: Position, width: u16, height: u16) -> Rect {
    let x = position.left.min(frame_area.right());
    let y = position.top.min(frame_area.bottom());

    Rect {
        x,
        y,
        width: width.min(frame_area.right().saturating_sub(x)),
        height: height.min(frame_area.bottom().saturating_sub(y)),
    }
}

/// Greedy word wrap measured in display cells
///
/// Words wider than `max_width` get a line of their own and are clipped at render time.
pub fn wrap_text(text: &str, max_width: u16) -> Vec<String> {
    let max_width = usize::from(max_width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Outer size of a bordered box holding `lines`
pub fn bordered_size(lines: &[String]) -> (u16, u16) {
    let content_width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
    let width = u16::try_from(content_width).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

    (width.saturating_add(2), height.saturating_add(2))
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;

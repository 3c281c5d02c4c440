use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::{App, FIELD_AREA, Focus, TRIGGER_AREA};
use crate::widgets::popup::{bordered_size, clear_area, popup_at_position, wrap_text};

const FIELD_TITLE: &str = " Name ";
const TRIGGER_HINT: &str = "hover or focus me";
const KEY_HINTS: &str = " Tab/Shift+Tab focus | Esc dismiss | mouse hover | q quit ";

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn flag(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

impl App {
    /// Recompute hit regions for a frame of `area`
    pub fn update_layout(&mut self, area: Rect) {
        self.viewport = area;
        self.layout_regions.field = Some(FIELD_AREA.intersection(area));
        self.layout_regions.trigger = Some(self.trigger.area.intersection(area));
        self.refresh_tooltip_region();
    }

    /// Where the tooltip box is drawn, if it is shown
    pub fn tooltip_area(&self) -> Option<Rect> {
        let view = self.tooltip_view();
        if !view.visible {
            return None;
        }
        let position = view.placement?;
        let lines = wrap_text(&view.text, view.max_width);
        let (width, height) = bordered_size(&lines);
        let area = popup_at_position(self.viewport, position, width, height);
        (!area.is_empty()).then_some(area)
    }

    pub(super) fn refresh_tooltip_region(&mut self) {
        self.layout_regions.tooltip = self.tooltip_area();
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.update_layout(area);

        let title = Paragraph::new(Line::from(Span::styled(
            " hovertip ",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, Rect::new(area.x, area.y, area.width, 1.min(area.height)));

        self.render_field(frame, area);
        self.render_trigger(frame, area);
        self.render_status(frame, area);
        // Drawn last so it sits above everything else
        self.render_tooltip(frame);
    }

    fn render_field(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(FIELD_TITLE)
            .border_style(border_style(self.focus == Focus::Field));

        let content = Paragraph::new(self.field.as_str()).block(block);
        frame.render_widget(content, FIELD_AREA.intersection(area));
    }

    fn render_trigger(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.trigger.label))
            .border_style(border_style(self.focus == Focus::Trigger));

        let content = Paragraph::new(TRIGGER_HINT)
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(content, self.trigger.area.intersection(area));
    }

    fn render_tooltip(&self, frame: &mut Frame) {
        let Some(tooltip_area) = self.tooltip_area() else {
            return;
        };
        let view = self.tooltip_view();

        let lines: Vec<Line> = wrap_text(&view.text, view.max_width)
            .into_iter()
            .map(Line::from)
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if self.focus == Focus::Tooltip {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Yellow)
            });

        clear_area(frame, tooltip_area);
        frame.render_widget(Paragraph::new(lines).block(block), tooltip_area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if area.height < 2 {
            return;
        }

        let flags = self.tooltip.flags();
        let status = match &self.config_warning {
            Some(warning) => Line::from(Span::styled(
                format!(" config ignored: {} ", warning),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(format!(
                " hover: {} | focus: {} | dismissed: {} | aria-hidden: {} ",
                flag(flags.hover_active),
                flag(flags.focus_active),
                flag(flags.dismissed_by_escape),
                self.tooltip_view().aria_hidden,
            )),
        };

        let bottom = area.bottom();
        let status_area = Rect::new(area.x, bottom - 1, area.width, 1);
        let hints_area = Rect::new(area.x, bottom - 2, area.width, 1);

        frame.render_widget(Paragraph::new(status), status_area);
        frame.render_widget(
            Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::DarkGray)),
            hints_area,
        );
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::{App, Focus};
use crate::layout::{Region, region_at};
use crate::tooltip::{EventSource, Propagation, TooltipEvent};

fn element_for(region: Option<Region>) -> Option<EventSource> {
    match region {
        Some(Region::Trigger) => Some(EventSource::Trigger),
        Some(Region::Tooltip) => Some(EventSource::Tooltip),
        Some(Region::Field) | None => None,
    }
}

impl App {
    /// Handle one terminal event and update application state
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    /// Deliver a key to the focused element, then fall back to global keys
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let target = match self.focus {
            Focus::Trigger => Some(EventSource::Trigger),
            Focus::Tooltip => Some(EventSource::Tooltip),
            Focus::Field | Focus::Document => None,
        };

        let propagation = match target {
            Some(source) => self.deliver(source, TooltipEvent::KeyDown(key)),
            None => Propagation::Continue,
        };

        if !propagation.is_stopped() {
            self.handle_default_key(key);
        }

        self.flush_pending();
    }

    fn handle_default_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Backspace if self.focus == Focus::Field => {
                self.field.pop();
            }
            KeyCode::Char(c) if self.focus == Focus::Field => {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    self.field.push(c);
                }
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.handle_pointer_move(mouse.column, mouse.row)
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => {}
        }
        self.flush_pending();
    }

    /// Synthesize pointer-leave/pointer-enter when the element under the pointer changes
    fn handle_pointer_move(&mut self, column: u16, row: u16) {
        let region = region_at(&self.layout_regions, column, row);
        let under_pointer = element_for(region);
        if under_pointer == self.hovered {
            return;
        }

        let previous = std::mem::replace(&mut self.hovered, under_pointer);
        if let Some(source) = previous {
            self.deliver(source, TooltipEvent::PointerLeave);
        }
        if let Some(source) = under_pointer {
            self.deliver(source, TooltipEvent::PointerEnter);
        }
        self.refresh_tooltip_region();
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let focus = match region_at(&self.layout_regions, column, row) {
            Some(Region::Field) => Focus::Field,
            Some(Region::Trigger) => Focus::Trigger,
            Some(Region::Tooltip) => Focus::Tooltip,
            None => Focus::Document,
        };
        self.set_focus(focus);
    }

    /// Tab order: field, trigger, then the tooltip while it can take focus
    pub fn focus_next(&mut self) {
        let next = match self.focus {
            Focus::Field => Focus::Trigger,
            Focus::Trigger if self.tooltip_view().is_focusable() => Focus::Tooltip,
            Focus::Trigger | Focus::Tooltip | Focus::Document => Focus::Field,
        };
        self.set_focus(next);
    }

    pub fn focus_prev(&mut self) {
        let prev = match self.focus {
            Focus::Field | Focus::Document if self.tooltip_view().is_focusable() => Focus::Tooltip,
            Focus::Field | Focus::Document => Focus::Trigger,
            Focus::Trigger => Focus::Field,
            Focus::Tooltip => Focus::Trigger,
        };
        self.set_focus(prev);
    }

    /// Move focus, firing blur on the old element and focus on the new one
    pub fn set_focus(&mut self, focus: Focus) {
        if focus == self.focus {
            return;
        }

        let previous = std::mem::replace(&mut self.focus, focus);
        log::debug!("Focus {:?} -> {:?}", previous, focus);

        match previous {
            Focus::Trigger => {
                self.deliver(EventSource::Trigger, TooltipEvent::FocusLoss);
            }
            Focus::Tooltip => {
                self.deliver(EventSource::Tooltip, TooltipEvent::FocusLoss);
            }
            Focus::Field | Focus::Document => {}
        }

        match focus {
            Focus::Trigger => {
                self.deliver(EventSource::Trigger, TooltipEvent::FocusGain);
            }
            Focus::Tooltip => {
                self.deliver(EventSource::Tooltip, TooltipEvent::FocusGain);
            }
            Focus::Field | Focus::Document => {}
        }
        self.refresh_tooltip_region();
    }

    /// Hand an event to the controller if the element subscribed to it
    ///
    /// Hiding the tooltip while it holds focus blurs it. That blur is queued and
    /// delivered once the current handler has returned.
    pub(super) fn deliver(&mut self, source: EventSource, event: TooltipEvent) -> Propagation {
        let subscribed = match source {
            EventSource::Trigger => self.trigger.is_subscribed(event.kind()),
            EventSource::Tooltip => self.tooltip_view().is_subscribed(event.kind()),
        };
        if !subscribed {
            return Propagation::Continue;
        }

        let propagation = self.tooltip.dispatch(source, event);

        if self.focus == Focus::Tooltip && !self.tooltip_view().visible {
            log::debug!("Focused tooltip was hidden, moving focus to document");
            self.focus = Focus::Document;
            self.pending
                .push_back((EventSource::Tooltip, TooltipEvent::FocusLoss));
        }

        propagation
    }

    /// Deliver events queued by re-entrant visibility changes
    pub(super) fn flush_pending(&mut self) {
        while let Some((source, event)) = self.pending.pop_front() {
            self.deliver(source, event);
        }
        self.refresh_tooltip_region();
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;

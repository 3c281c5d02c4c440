use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::element::{EventSource, Propagation, TooltipEvent, TooltipSurface};
use super::tooltip_state::TooltipController;

impl<S: TooltipSurface> TooltipController<S> {
    /// Route an event delivered from `source` to its handler
    ///
    /// Focus-loss is only bound on the tooltip; a trigger blur is ignored.
    pub fn dispatch(&mut self, source: EventSource, event: TooltipEvent) -> Propagation {
        match event {
            TooltipEvent::KeyDown(key) => self.handle_key_down(source, key),
            TooltipEvent::PointerEnter => self.handle_pointer_enter(source),
            TooltipEvent::PointerLeave => self.handle_pointer_leave(source),
            TooltipEvent::FocusGain => self.handle_focus(source),
            TooltipEvent::FocusLoss => match source {
                EventSource::Tooltip => self.handle_blur(),
                EventSource::Trigger => Propagation::Continue,
            },
        }
    }

    /// Escape hides the tooltip and marks it dismissed. Modified keys are left alone.
    pub fn handle_key_down(&mut self, source: EventSource, key: KeyEvent) -> Propagation {
        if key
            .modifiers
            .intersects(KeyModifiers::SHIFT | KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Propagation::Continue;
        }

        if key.code == KeyCode::Esc {
            self.hide_tip();
            self.dismissed_by_escape = true;
            log::debug!("Tooltip '{}' dismissed from {:?}", self.tooltip_id(), source);
            return Propagation::Stop;
        }

        Propagation::Continue
    }

    pub fn handle_pointer_enter(&mut self, source: EventSource) -> Propagation {
        self.show_tip();
        self.hover_active = true;
        log::debug!("Pointer entered {:?}", source);
        Propagation::Stop
    }

    /// Hide unless focus is holding the tooltip open. An Escape dismissal overrides focus.
    pub fn handle_pointer_leave(&mut self, source: EventSource) -> Propagation {
        if self.dismissed_by_escape || !self.focus_active {
            self.hide_tip();
        }
        self.hover_active = false;
        log::debug!("Pointer left {:?}", source);
        Propagation::Stop
    }

    pub fn handle_focus(&mut self, source: EventSource) -> Propagation {
        self.show_tip();
        self.focus_active = true;
        log::debug!("Focus gained on {:?}", source);
        Propagation::Stop
    }

    /// Tooltip lost focus: hide unless the pointer rests on it, and start clean
    pub fn handle_blur(&mut self) -> Propagation {
        if !self.hover_active {
            self.hide_tip();
        }
        self.focus_active = false;
        self.dismissed_by_escape = false;
        log::debug!("Tooltip '{}' lost focus", self.tooltip_id());
        Propagation::Stop
    }
}

#[cfg(test)]
#[path = "tooltip_events_tests.rs"]
mod tooltip_events_tests;

//! Boundary between the controller and the host toolkit
//!
//! The controller never touches rendering or event plumbing directly. A host
//! hands it a trigger that can report its geometry and its tooltip reference,
//! and a tooltip surface that accepts visibility and attribute commands.

use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

/// Horizontal distance between the trigger's right edge and the tooltip
pub const DEFAULT_GAP: u16 = 0;

/// Events bound on both the trigger and the tooltip
pub const SHARED_EVENTS: [EventKind; 4] = [
    EventKind::KeyDown,
    EventKind::PointerEnter,
    EventKind::PointerLeave,
    EventKind::FocusGain,
];

/// Events bound on the tooltip only
pub const TOOLTIP_ONLY_EVENTS: [EventKind; 1] = [EventKind::FocusLoss];

/// On-screen box of the trigger, read once at bind time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub top: u16,
    pub left: u16,
    pub width: u16,
}

impl From<Rect> for Geometry {
    fn from(rect: Rect) -> Self {
        Self {
            top: rect.y,
            left: rect.x,
            width: rect.width,
        }
    }
}

/// Absolute placement of the tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub top: u16,
    pub left: u16,
}

impl Position {
    /// Place the tooltip level with the trigger, `gap` cells past its right edge
    pub fn beside(geometry: Geometry, gap: u16) -> Self {
        Self {
            top: geometry.top,
            left: geometry
                .left
                .saturating_add(geometry.width)
                .saturating_add(gap),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    PointerEnter,
    PointerLeave,
    FocusGain,
    FocusLoss,
}

/// Which element fired the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    Trigger,
    Tooltip,
}

/// A normalized input event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipEvent {
    KeyDown(KeyEvent),
    PointerEnter,
    PointerLeave,
    FocusGain,
    FocusLoss,
}

impl TooltipEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            TooltipEvent::KeyDown(_) => EventKind::KeyDown,
            TooltipEvent::PointerEnter => EventKind::PointerEnter,
            TooltipEvent::PointerLeave => EventKind::PointerLeave,
            TooltipEvent::FocusGain => EventKind::FocusGain,
            TooltipEvent::FocusLoss => EventKind::FocusLoss,
        }
    }
}

/// Whether the host should keep propagating the event and run its default action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

impl Propagation {
    pub fn is_stopped(self) -> bool {
        self == Propagation::Stop
    }
}

/// The interactive element that owns the tooltip reference
pub trait TriggerElement {
    /// Id of the tooltip element (the `aria-describedby` cross-reference)
    fn described_by(&self) -> Option<&str>;

    fn geometry(&self) -> Geometry;

    /// Ask the host to deliver these events from the trigger
    fn subscribe(&mut self, kinds: &[EventKind]);
}

/// The content element shown and hidden by the controller
///
/// `show` and `hide` must be idempotent: hiding an already hidden surface has
/// no effect beyond the final state.
pub trait TooltipSurface {
    fn show(&mut self);

    fn hide(&mut self);

    fn set_aria_hidden(&mut self, hidden: bool);

    /// Make the surface keyboard-focusable (`0`) or not (`-1`)
    fn set_tab_index(&mut self, index: i32);

    /// Switch to absolute positioning at `position`
    fn place_absolute(&mut self, position: Position);

    /// Ask the host to deliver these events from the tooltip
    fn subscribe(&mut self, kinds: &[EventKind]);
}

/// Resolves element ids to tooltip surfaces
pub trait ElementHost {
    type Surface: TooltipSurface;

    fn resolve(&mut self, id: &str) -> Option<Self::Surface>;
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod element_tests;

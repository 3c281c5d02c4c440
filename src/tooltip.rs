//! Tooltip module
//!
//! Hover/focus tooltip controller. A trigger and its tooltip are each
//! hoverable and focusable; the controller arbitrates their event streams
//! and issues show/hide commands to the tooltip. Escape dismisses the
//! tooltip until it next loses focus.

mod element;
mod tooltip_events;
mod tooltip_state;

pub use element::{
    DEFAULT_GAP, ElementHost, EventKind, EventSource, Geometry, Position, Propagation,
    SHARED_EVENTS, TOOLTIP_ONLY_EVENTS, TooltipEvent, TooltipSurface, TriggerElement,
};
pub use tooltip_state::{TooltipController, TooltipFlags};

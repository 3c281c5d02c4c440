//! Terminal host for the tooltip controller
//!
//! Owns a text field, a trigger and its tooltip. Terminal key and mouse input
//! is turned into the controller's focus, pointer and key events, and the
//! tooltip surface is drawn wherever the controller placed it.

mod app_events;
mod app_render;
mod app_state;

pub use app_state::{
    App, DEFAULT_VIEWPORT, Document, FIELD_AREA, Focus, TOOLTIP_ID, TRIGGER_AREA, TooltipView,
    TriggerView,
};

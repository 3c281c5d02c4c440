//! Hover/focus tooltip controller
//!
//! A trigger element and its tooltip can each be hovered and focused. The
//! [`tooltip::TooltipController`] arbitrates their event streams, shows and
//! hides the tooltip, and honours Escape as an explicit dismissal. The
//! [`app`] module hosts a controller in a terminal UI.

pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod tooltip;
pub mod widgets;

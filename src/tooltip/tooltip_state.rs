use super::element::{
    DEFAULT_GAP, ElementHost, Position, SHARED_EVENTS, TOOLTIP_ONLY_EVENTS, TooltipSurface,
    TriggerElement,
};
use crate::error::TooltipError;

/// Snapshot of the controller's transient flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TooltipFlags {
    pub hover_active: bool,
    pub focus_active: bool,
    pub dismissed_by_escape: bool,
}

/// Decides tooltip visibility for one trigger/tooltip pair
///
/// Visibility is not tracked here. Each handler issues show/hide commands to
/// the surface, and the flags only gate those commands.
pub struct TooltipController<S: TooltipSurface> {
    pub(super) tip: S,
    tip_id: String,
    position: Position,
    /// Pointer is over the trigger or the tooltip. Reset on every pointer-leave.
    pub(super) hover_active: bool,
    /// Set by focus on either element, cleared only by the tooltip's blur
    pub(super) focus_active: bool,
    /// Set by Escape, cleared only by the tooltip's blur
    pub(super) dismissed_by_escape: bool,
}

impl<S: TooltipSurface> TooltipController<S> {
    /// Bind a controller to `trigger` and the tooltip it references
    pub fn bind<T, H>(trigger: &mut T, host: &mut H) -> Result<Self, TooltipError>
    where
        T: TriggerElement,
        H: ElementHost<Surface = S>,
    {
        Self::bind_with_gap(trigger, host, DEFAULT_GAP)
    }

    pub fn bind_with_gap<T, H>(
        trigger: &mut T,
        host: &mut H,
        gap: u16,
    ) -> Result<Self, TooltipError>
    where
        T: TriggerElement,
        H: ElementHost<Surface = S>,
    {
        let tip_id = trigger
            .described_by()
            .ok_or(TooltipError::MissingDescribedBy)?
            .to_string();
        let mut tip = host
            .resolve(&tip_id)
            .ok_or_else(|| TooltipError::TooltipNotFound(tip_id.clone()))?;

        let position = Position::beside(trigger.geometry(), gap);

        tip.set_tab_index(0);

        trigger.subscribe(&SHARED_EVENTS);
        tip.subscribe(&SHARED_EVENTS);
        tip.subscribe(&TOOLTIP_ONLY_EVENTS);

        let mut controller = Self {
            tip,
            tip_id,
            position,
            hover_active: false,
            focus_active: false,
            dismissed_by_escape: false,
        };
        controller.init();

        log::debug!(
            "Bound tooltip '{}' at top={} left={}",
            controller.tip_id,
            position.top,
            position.left
        );

        Ok(controller)
    }

    fn init(&mut self) {
        self.hide_tip();
        self.tip.place_absolute(self.position);
    }

    pub(super) fn show_tip(&mut self) {
        self.tip.show();
        self.tip.set_aria_hidden(false);
    }

    pub(super) fn hide_tip(&mut self) {
        self.tip.hide();
        self.tip.set_aria_hidden(true);
    }

    pub fn hover_active(&self) -> bool {
        self.hover_active
    }

    pub fn focus_active(&self) -> bool {
        self.focus_active
    }

    pub fn dismissed_by_escape(&self) -> bool {
        self.dismissed_by_escape
    }

    pub fn flags(&self) -> TooltipFlags {
        TooltipFlags {
            hover_active: self.hover_active,
            focus_active: self.focus_active,
            dismissed_by_escape: self.dismissed_by_escape,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn tooltip_id(&self) -> &str {
        &self.tip_id
    }

    pub fn surface(&self) -> &S {
        &self.tip
    }
}

#[cfg(test)]
#[path = "tooltip_state_tests.rs"]
mod tooltip_state_tests;

use std::collections::{HashMap, VecDeque};

use ratatui::layout::Rect;

use crate::config::Config;
use crate::error::TooltipError;
use crate::layout::LayoutRegions;
use crate::tooltip::{
    ElementHost, EventKind, EventSource, Geometry, Position, TooltipController, TooltipEvent,
    TooltipSurface, TriggerElement,
};

/// Element id the trigger's `aria-describedby` points at
pub const TOOLTIP_ID: &str = "tooltip";

/// Frame size assumed until the first render reports the real one
pub const DEFAULT_VIEWPORT: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

pub const FIELD_AREA: Rect = Rect {
    x: 2,
    y: 2,
    width: 30,
    height: 3,
};

pub const TRIGGER_AREA: Rect = Rect {
    x: 2,
    y: 6,
    width: 24,
    height: 3,
};

/// Which element holds input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field,
    Trigger,
    Tooltip,
    /// Nothing focusable; where focus lands when a focused tooltip is hidden
    Document,
}

/// The labelled input that owns the tooltip reference
#[derive(Debug, Clone)]
pub struct TriggerView {
    pub label: String,
    pub area: Rect,
    described_by: Option<String>,
    subscriptions: Vec<EventKind>,
}

impl TriggerView {
    pub fn new(label: &str, area: Rect, described_by: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            area,
            described_by: described_by.map(str::to_string),
            subscriptions: Vec::new(),
        }
    }

    pub fn is_subscribed(&self, kind: EventKind) -> bool {
        self.subscriptions.contains(&kind)
    }
}

impl TriggerElement for TriggerView {
    fn described_by(&self) -> Option<&str> {
        self.described_by.as_deref()
    }

    fn geometry(&self) -> Geometry {
        Geometry::from(self.area)
    }

    fn subscribe(&mut self, kinds: &[EventKind]) {
        for kind in kinds {
            if !self.subscriptions.contains(kind) {
                self.subscriptions.push(*kind);
            }
        }
    }
}

/// Host-side record of the tooltip element, read by the renderer
#[derive(Debug, Clone)]
pub struct TooltipView {
    pub text: String,
    pub max_width: u16,
    pub visible: bool,
    pub aria_hidden: bool,
    pub tab_index: i32,
    pub placement: Option<Position>,
    subscriptions: Vec<EventKind>,
}

impl TooltipView {
    pub fn new(text: &str, max_width: u16) -> Self {
        Self {
            text: text.to_string(),
            max_width,
            visible: true,
            aria_hidden: false,
            tab_index: -1,
            placement: None,
            subscriptions: Vec::new(),
        }
    }

    pub fn is_subscribed(&self, kind: EventKind) -> bool {
        self.subscriptions.contains(&kind)
    }

    /// Focusable only while shown with a non-negative tab index
    pub fn is_focusable(&self) -> bool {
        self.visible && self.tab_index >= 0
    }
}

impl TooltipSurface for TooltipView {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn set_aria_hidden(&mut self, hidden: bool) {
        self.aria_hidden = hidden;
    }

    fn set_tab_index(&mut self, index: i32) {
        self.tab_index = index;
    }

    fn place_absolute(&mut self, position: Position) {
        self.placement = Some(position);
    }

    fn subscribe(&mut self, kinds: &[EventKind]) {
        for kind in kinds {
            if !self.subscriptions.contains(kind) {
                self.subscriptions.push(*kind);
            }
        }
    }
}

/// Elements not yet claimed by a controller, keyed by id
#[derive(Debug, Default)]
pub struct Document {
    elements: HashMap<String, TooltipView>,
}

impl Document {
    pub fn insert(&mut self, id: &str, view: TooltipView) {
        self.elements.insert(id.to_string(), view);
    }
}

impl ElementHost for Document {
    type Surface = TooltipView;

    fn resolve(&mut self, id: &str) -> Option<TooltipView> {
        self.elements.remove(id)
    }
}

/// Application state
pub struct App {
    pub field: String,
    pub trigger: TriggerView,
    pub tooltip: TooltipController<TooltipView>,
    pub focus: Focus,
    /// Element currently under the pointer
    pub hovered: Option<EventSource>,
    pub layout_regions: LayoutRegions,
    pub viewport: Rect,
    pub config_warning: Option<String>,
    pub(super) pending: VecDeque<(EventSource, TooltipEvent)>,
    pub(super) should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, TooltipError> {
        let mut trigger =
            TriggerView::new(&config.trigger.label, TRIGGER_AREA, Some(TOOLTIP_ID));

        let mut document = Document::default();
        document.insert(
            TOOLTIP_ID,
            TooltipView::new(&config.tooltip.text, config.tooltip.max_width),
        );

        let tooltip =
            TooltipController::bind_with_gap(&mut trigger, &mut document, config.tooltip.gap)?;

        let mut app = Self {
            field: String::new(),
            trigger,
            tooltip,
            focus: Focus::Field,
            hovered: None,
            layout_regions: LayoutRegions::new(),
            viewport: DEFAULT_VIEWPORT,
            config_warning: None,
            pending: VecDeque::new(),
            should_quit: false,
        };
        app.update_layout(DEFAULT_VIEWPORT);

        Ok(app)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn tooltip_view(&self) -> &TooltipView {
        self.tooltip.surface()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;

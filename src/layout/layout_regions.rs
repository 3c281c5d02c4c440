use ratatui::layout::Rect;

/// Interactive components that can sit under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Field,
    Trigger,
    Tooltip,
}

/// Where each component was drawn on the last frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub field: Option<Rect>,
    pub trigger: Option<Rect>,
    /// Only set while the tooltip is shown
    pub tooltip: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }
}

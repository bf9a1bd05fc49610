//! Numeric targets handed to the animation and styling layers for the current
//! hover state.

use crate::config::ToolbarConfig;
use crate::core::geometry::Rect;
use crate::core::hover::HoverTracker;
use crate::core::registry::{self, ToolbarItem};

/// Opacity and blur of a group label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelVisual {
    pub opacity: f64,
    pub blur_px: f64,
}

impl LabelVisual {
    pub const CLEAR: Self = Self {
        opacity: 1.0,
        blur_px: 0.0,
    };

    pub fn css(&self) -> String {
        format!("opacity: {}; filter: blur({}px);", self.opacity, self.blur_px)
    }
}

/// Labels stay clear when nothing is hovered; otherwise every label except the
/// hovered item's is dimmed and blurred.
pub fn label_visual(tracker: &HoverTracker, id: &str, config: &ToolbarConfig) -> LabelVisual {
    match tracker.hovered() {
        Some(hovered) if hovered != id => LabelVisual {
            opacity: config.dim_opacity,
            blur_px: config.dim_blur_px,
        },
        _ => LabelVisual::CLEAR,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightTarget {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipTarget {
    pub id: &'static str,
    pub x: f64,
    pub opacity: f64,
}

/// Everything the motion layer animates, for one hover state.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTargets {
    pub highlight: HighlightTarget,
    /// One entry per registry item, in registry order.
    pub tooltips: Vec<TooltipTarget>,
}

impl FrameTargets {
    pub fn derive(tracker: &HoverTracker, rect: Rect, config: &ToolbarConfig) -> Self {
        let padded = config.padding.apply(rect);
        let highlight = HighlightTarget {
            x: padded.x,
            y: padded.y,
            width: padded.width,
            height: padded.height,
            opacity: if tracker.is_active() { 1.0 } else { 0.0 },
        };
        let tooltips = registry::items()
            .iter()
            .map(|item: &ToolbarItem| TooltipTarget {
                id: item.id,
                x: rect.x,
                opacity: if tracker.is_hovered(item.id) { 1.0 } else { 0.0 },
            })
            .collect();

        Self {
            highlight,
            tooltips,
        }
    }

    pub fn tooltip(&self, id: &str) -> Option<&TooltipTarget> {
        self.tooltips.iter().find(|t| t.id == id)
    }
}

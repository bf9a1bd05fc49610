//! Spring state behind the highlight pill and the tooltip strip.

use crate::core::registry;
use crate::core::spring::{Spring, SpringParams};
use crate::core::visuals::FrameTargets;

/// Longest step fed to the springs; a stalled tab resumes instead of jumping.
pub const MAX_FRAME_DT: f64 = 0.064;

#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarMotion {
    highlight_x: Spring,
    highlight_y: Spring,
    highlight_width: Spring,
    highlight_height: Spring,
    highlight_opacity: Spring,
    tooltip_x: Spring,
    /// Registry order.
    tooltip_opacity: Vec<(&'static str, Spring)>,
}

/// Current animated values for the highlight pill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
}

impl HighlightFrame {
    pub fn css(&self) -> String {
        format!(
            "transform: translate({:.2}px, {:.2}px); width: {:.2}px; height: {:.2}px; opacity: {:.3};",
            self.x,
            self.y,
            self.width.max(0.0),
            self.height.max(0.0),
            self.opacity.clamp(0.0, 1.0)
        )
    }
}

impl ToolbarMotion {
    /// Everything at rest and invisible.
    pub fn new(params: SpringParams) -> Self {
        let spring = || Spring::new(0.0, params);
        Self {
            highlight_x: spring(),
            highlight_y: spring(),
            highlight_width: spring(),
            highlight_height: spring(),
            highlight_opacity: spring(),
            tooltip_x: spring(),
            tooltip_opacity: registry::items()
                .iter()
                .map(|item| (item.id, spring()))
                .collect(),
        }
    }

    pub fn retarget(&mut self, targets: &FrameTargets) {
        let h = &targets.highlight;
        self.highlight_x.set_target(h.x);
        self.highlight_y.set_target(h.y);
        self.highlight_width.set_target(h.width);
        self.highlight_height.set_target(h.height);
        self.highlight_opacity.set_target(h.opacity);

        for tooltip in &targets.tooltips {
            if let Some((_, spring)) = self
                .tooltip_opacity
                .iter_mut()
                .find(|(id, _)| *id == tooltip.id)
            {
                spring.set_target(tooltip.opacity);
            }
        }
        // Tooltips share one horizontal offset.
        if let Some(first) = targets.tooltips.first() {
            self.tooltip_x.set_target(first.x);
        }
    }

    pub fn step(&mut self, dt: f64) {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        for spring in self.springs_mut() {
            spring.update(dt);
        }
    }

    pub fn is_settled(&self) -> bool {
        self.springs().all(Spring::arrived)
    }

    pub fn highlight(&self) -> HighlightFrame {
        HighlightFrame {
            x: self.highlight_x.position(),
            y: self.highlight_y.position(),
            width: self.highlight_width.position(),
            height: self.highlight_height.position(),
            opacity: self.highlight_opacity.position(),
        }
    }

    pub fn tooltip_x(&self) -> f64 {
        self.tooltip_x.position()
    }

    pub fn tooltip_opacity(&self, id: &str) -> f64 {
        self.tooltip_opacity
            .iter()
            .find(|(item, _)| *item == id)
            .map(|(_, spring)| spring.position().clamp(0.0, 1.0))
            .unwrap_or(0.0)
    }

    fn springs(&self) -> impl Iterator<Item = &Spring> {
        [
            &self.highlight_x,
            &self.highlight_y,
            &self.highlight_width,
            &self.highlight_height,
            &self.highlight_opacity,
            &self.tooltip_x,
        ]
        .into_iter()
        .chain(self.tooltip_opacity.iter().map(|(_, s)| s))
    }

    fn springs_mut(&mut self) -> impl Iterator<Item = &mut Spring> {
        [
            &mut self.highlight_x,
            &mut self.highlight_y,
            &mut self.highlight_width,
            &mut self.highlight_height,
            &mut self.highlight_opacity,
            &mut self.tooltip_x,
        ]
        .into_iter()
        .chain(self.tooltip_opacity.iter_mut().map(|(_, s)| s))
    }
}

//! Fixed, ordered list of toolbar entries.
//!
//! The registry is static for the lifetime of the program: items are never
//! added, removed or mutated. Everything else in the crate refers to items by
//! their `id`, never by index, so reordering `ITEMS` only changes layout.

/// Which label row an item's floating label is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Top,
    Bottom,
}

impl Group {
    /// Sign applied to the label fan-out; the bottom row mirrors the top one.
    fn tilt_sign(self) -> f64 {
        match self {
            Group::Top => 1.0,
            Group::Bottom => -1.0,
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Group::Top => "toolbar-labels--top",
            Group::Bottom => "toolbar-labels--bottom",
        }
    }
}

/// Outline glyphs available to toolbar buttons (see `components::icons`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    MessageCircle,
    Inbox,
    Flag,
    Pencil,
    Share,
    Menu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarItem {
    pub id: &'static str,
    /// English label; localized text is looked up through `i18n::item_label`.
    pub label: &'static str,
    /// Color token, mapped to a `.swatch--<token>` class in the stylesheet.
    pub color_token: &'static str,
    pub group: Group,
    pub icon: Glyph,
}

impl ToolbarItem {
    /// Fluent message id holding this item's localized label.
    pub fn label_key(&self) -> String {
        format!("item-{}", self.id)
    }

    pub fn swatch_class(&self) -> String {
        format!("swatch--{}", self.color_token)
    }
}

pub static ITEMS: [ToolbarItem; 6] = [
    ToolbarItem {
        id: "comment",
        label: "Comment",
        color_token: "blue-500",
        group: Group::Top,
        icon: Glyph::MessageCircle,
    },
    ToolbarItem {
        id: "inbox",
        label: "Inbox",
        color_token: "orange-500",
        group: Group::Top,
        icon: Glyph::Inbox,
    },
    ToolbarItem {
        id: "feature",
        label: "Feature Flag",
        color_token: "green-500",
        group: Group::Top,
        icon: Glyph::Flag,
    },
    ToolbarItem {
        id: "draft",
        label: "Draft Mode",
        color_token: "emerald-500",
        group: Group::Bottom,
        icon: Glyph::Pencil,
    },
    ToolbarItem {
        id: "share",
        label: "Share",
        color_token: "red-500",
        group: Group::Bottom,
        icon: Glyph::Share,
    },
    ToolbarItem {
        id: "menu",
        label: "Menu",
        color_token: "purple-500",
        group: Group::Bottom,
        icon: Glyph::Menu,
    },
];

pub fn items() -> &'static [ToolbarItem] {
    &ITEMS
}

pub fn find(id: &str) -> Option<&'static ToolbarItem> {
    ITEMS.iter().find(|item| item.id == id)
}

pub fn position(id: &str) -> Option<usize> {
    ITEMS.iter().position(|item| item.id == id)
}

/// Items belonging to `group`, in registry order.
pub fn group(group: Group) -> Vec<&'static ToolbarItem> {
    ITEMS.iter().filter(|item| item.group == group).collect()
}

/// Stable split into (top, bottom) rows.
pub fn partition() -> (Vec<&'static ToolbarItem>, Vec<&'static ToolbarItem>) {
    ITEMS.iter().partition(|item| item.group == Group::Top)
}

/// Rotation and vertical shift fanning a label row out around its middle entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelTilt {
    pub rotate_deg: f64,
    pub translate_y_px: f64,
}

impl LabelTilt {
    pub fn css_transform(&self) -> String {
        format!(
            "rotate({}deg) translateY({}px)",
            self.rotate_deg, self.translate_y_px
        )
    }
}

/// Tilt for the label at `index` within its group row.
pub fn label_tilt(group: Group, index: usize, deg_step: f64, px_step: f64) -> LabelTilt {
    let offset = (index as f64 - 1.0) * group.tilt_sign();
    LabelTilt {
        rotate_deg: offset * deg_step,
        translate_y_px: offset * px_step,
    }
}

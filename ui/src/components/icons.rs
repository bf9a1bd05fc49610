use dioxus::prelude::*;

use crate::core::registry::Glyph;

/// 24x24 outline glyph, stroked with `currentColor`.
#[component]
pub fn Icon(glyph: Glyph, size: u32) -> Element {
    rsx! {
        svg {
            class: "toolbar__icon",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {glyph_body(glyph)}
        }
    }
}

fn glyph_body(glyph: Glyph) -> Element {
    match glyph {
        Glyph::MessageCircle => rsx! {
            path { d: "M7.9 20A9 9 0 1 0 4 16.1L2 22Z" }
        },
        Glyph::Inbox => rsx! {
            polyline { points: "22 12 16 12 14 15 10 15 8 12 2 12" }
            path { d: "M5.45 5.11 2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.45-6.89A2 2 0 0 0 16.76 4H7.24a2 2 0 0 0-1.79 1.11z" }
        },
        Glyph::Flag => rsx! {
            path { d: "M4 15s1-1 4-1 5 2 8 2 4-1 4-1V3s-1 1-4 1-5-2-8-2-4 1-4 1z" }
            line { x1: "4", x2: "4", y1: "22", y2: "15" }
        },
        Glyph::Pencil => rsx! {
            path { d: "M21.174 6.812a1 1 0 0 0-3.986-3.987L3.842 16.174a2 2 0 0 0-.5.83l-1.321 4.352a.5.5 0 0 0 .623.622l4.353-1.32a2 2 0 0 0 .83-.497z" }
            path { d: "m15 5 4 4" }
        },
        Glyph::Share => rsx! {
            path { d: "M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8" }
            polyline { points: "16 6 12 2 8 6" }
            line { x1: "12", x2: "12", y1: "2", y2: "15" }
        },
        Glyph::Menu => rsx! {
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        },
    }
}

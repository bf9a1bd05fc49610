use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::icons::Icon;
use crate::components::measure::{ButtonHandles, LayoutSnapshot};
use crate::config;
use crate::core::geometry::{HighlightPositioner, Remeasure};
use crate::core::hover::HoverTracker;
use crate::core::motion::ToolbarMotion;
use crate::core::registry::{self, Group, ToolbarItem};
use crate::core::timing::{self, FrameClock};
use crate::core::visuals::{self, FrameTargets};
use crate::i18n;
use crate::t;

const TOOLBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/toolbar.css"
));

/// Floating toolbar with hover highlight, tooltips and fanned label rows.
#[component]
pub fn Toolbar() -> Element {
    i18n::init();
    let cfg = config::current();

    let hover = use_signal(HoverTracker::new);
    let mut positioner = use_signal(HighlightPositioner::default);
    let handles = use_signal(ButtonHandles::new);
    let mut container = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut motion = use_signal(|| ToolbarMotion::new(cfg.spring));

    // Phase two of a hover change: runs after the commit, so the hovered
    // button is laid out before it is measured.
    use_effect(move || {
        let Some(id) = hover.read().hovered() else {
            return;
        };
        let button = handles.peek().get(id).cloned();
        let parent = container.peek().clone();
        spawn(async move {
            let layout = LayoutSnapshot::capture(id, button, parent).await;
            let current = hover.peek().hovered();
            let outcome = positioner.with_mut(|p| p.apply(current, id, &layout));
            if let Remeasure::Updated(rect) = outcome {
                tracing::debug!(id, ?rect, "highlight rect updated");
            }
        });
    });

    // Feed the springs whenever the hover state or measured rect changes.
    use_effect(move || {
        let targets = FrameTargets::derive(&hover.read(), positioner.read().rect(), cfg);
        motion.with_mut(|m| m.retarget(&targets));
    });

    use_future(move || async move {
        let mut clock = FrameClock::start();
        loop {
            timing::sleep_ms(timing::FRAME_MS).await;
            let dt = clock.tick();
            if !motion.peek().is_settled() {
                motion.with_mut(|m| m.step(dt));
            }
        }
    });

    let tracker = hover();
    let highlight_style = motion.read().highlight().css();
    let tooltips: Vec<(&'static str, String, String)> = {
        let m = motion.read();
        let x = m.tooltip_x();
        registry::items()
            .iter()
            .map(|item| {
                let style = format!(
                    "transform: translateX({x:.2}px); opacity: {:.3};",
                    m.tooltip_opacity(item.id)
                );
                (item.id, style, i18n::item_label(item))
            })
            .collect()
    };
    let (top, bottom) = registry::partition();

    rsx! {
        document::Style { "{TOOLBAR_CSS_INLINE}" }

        div { class: "toolbar-page",
            div { class: "toolbar-stage",
                {label_row(Group::Top, &top, &tracker)}

                div {
                    class: "toolbar",
                    role: "toolbar",
                    aria_label: t!("toolbar-aria-label"),
                    onmounted: move |evt: MountedEvent| container.set(Some(evt.data())),

                    div { class: "toolbar__highlight", style: "{highlight_style}" }

                    div { class: "toolbar__tooltips",
                        for (id, style, label) in tooltips {
                            div {
                                key: "{id}",
                                class: "toolbar__tooltip",
                                role: "tooltip",
                                style: "{style}",
                                "{label}"
                            }
                        }
                    }

                    for item in registry::items() {
                        {toolbar_button(item, hover, handles, cfg.icon_size_px)}
                    }
                }

                {label_row(Group::Bottom, &bottom, &tracker)}
            }
        }
    }
}

fn toolbar_button(
    item: &'static ToolbarItem,
    mut hover: Signal<HoverTracker>,
    mut handles: Signal<ButtonHandles>,
    icon_size: u32,
) -> Element {
    let id = item.id;
    rsx! {
        button {
            key: "{id}",
            r#type: "button",
            class: "toolbar__button",
            aria_label: i18n::item_label(item),
            onmounted: move |evt: MountedEvent| {
                handles.write().insert(id, evt.data());
            },
            onmouseenter: move |_| {
                hover.with_mut(|h| h.on_enter(id));
            },
            onmouseleave: move |_| {
                hover.with_mut(|h| h.on_leave());
            },
            Icon { glyph: item.icon, size: icon_size }
        }
    }
}

fn label_row(group: Group, items: &[&'static ToolbarItem], tracker: &HoverTracker) -> Element {
    let cfg = config::current();
    let row = match group {
        Group::Top => "top",
        Group::Bottom => "bottom",
    };
    let modifier = group.css_modifier();
    let labels: Vec<(&'static str, String, String, String)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let tilt = registry::label_tilt(group, index, cfg.tilt_deg, cfg.tilt_px);
            let visual = visuals::label_visual(tracker, item.id, cfg);
            let style = format!("transform: {}; {}", tilt.css_transform(), visual.css());
            (item.id, item.swatch_class(), style, i18n::item_label(item))
        })
        .collect();

    rsx! {
        div {
            class: "toolbar-labels {modifier}",
            aria_label: t!("labels-aria-label", row = row),
            for (id, swatch, style, label) in labels {
                div {
                    key: "{id}",
                    class: "toolbar-label {swatch}",
                    style: "{style}",
                    "{label}"
                }
            }
        }
    }
}

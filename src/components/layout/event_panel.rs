//! Event Panel Component
//!
//! Displays the events emitted by the component of the active story.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::assets::CustomIconName;
use crate::i18n::t;
use crate::state::event_log_state::EventEntry;
use crate::theme::PricingColors;

/// Maximum number of rendered entries
const VISIBLE_ENTRIES: usize = 100;

/// Event panel component
pub struct EventPanel {
    entities: AppEntities,
}

impl EventPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe event changes
        cx.observe(&entities.events, |_this, _, cx| cx.notify())
            .detach();

        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_entry(&self, entry: &EventEntry) -> impl IntoElement {
        let time = entry.timestamp.format("%H:%M:%S%.3f").to_string();

        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(PricingColors::text_muted())
                    .text_size(px(11.0))
                    .min_w(px(85.0))
                    .child(time),
            )
            .child(
                div()
                    .text_color(PricingColors::warning())
                    .text_size(px(11.0))
                    .min_w(px(120.0))
                    .child(entry.source),
            )
            .child(
                div()
                    .text_color(PricingColors::success())
                    .text_size(px(11.0))
                    .min_w(px(110.0))
                    .child(entry.name),
            )
            .child(
                div()
                    .text_color(PricingColors::text_light())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(entry.payload.clone()),
            )
    }
}

impl Render for EventPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let events = self.entities.events.read(cx);
        let collapsed = events.collapsed;
        let title = t(locale, "app.events");
        let clear_label = t(locale, "app.clear");

        let height = if collapsed { px(32.0) } else { px(180.0) };

        let clear_entities = self.entities.clone();
        let toggle_entities = self.entities.clone();

        let mut panel = div()
            .h(height)
            .w_full()
            .bg(PricingColors::event_panel_bg())
            .flex()
            .flex_col()
            // Header
            .child(
                div()
                    .h(px(32.0))
                    .w_full()
                    .px_4()
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(gpui::rgba(0xffffff22))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                Icon::from(CustomIconName::Events)
                                    .size_4()
                                    .text_color(PricingColors::text_muted()),
                            )
                            .child(
                                div()
                                    .text_color(PricingColors::text_light())
                                    .text_size(px(13.0))
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .child(title),
                            )
                            .child(
                                div()
                                    .text_color(PricingColors::text_muted())
                                    .text_size(px(11.0))
                                    .child(format!("({})", events.len())),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            // Clear button
                            .child(
                                div()
                                    .id("clear-events")
                                    .px_2()
                                    .py_1()
                                    .rounded_sm()
                                    .text_color(PricingColors::text_muted())
                                    .text_size(px(11.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                                    .on_click(move |_event: &ClickEvent, _window, cx| {
                                        clear_entities.events.update(cx, |events, cx| {
                                            events.clear();
                                            cx.notify();
                                        });
                                    })
                                    .child(clear_label),
                            )
                            // Toggle button
                            .child(
                                div()
                                    .id("toggle-events")
                                    .px_1()
                                    .py_1()
                                    .rounded_sm()
                                    .cursor_pointer()
                                    .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                                    .on_click(move |_event: &ClickEvent, _window, cx| {
                                        toggle_entities.events.update(cx, |events, cx| {
                                            events.toggle_collapsed();
                                            cx.notify();
                                        });
                                    })
                                    .child(
                                        Icon::from(if collapsed {
                                            CustomIconName::ChevronUp
                                        } else {
                                            CustomIconName::ChevronDown
                                        })
                                        .size_4()
                                        .text_color(PricingColors::text_muted()),
                                    ),
                            ),
                    ),
            );

        // Entries (only when expanded)
        if !collapsed {
            let body = if events.is_empty() {
                div()
                    .py_2()
                    .text_color(PricingColors::text_muted())
                    .text_size(px(12.0))
                    .child(t(locale, "app.no_events"))
            } else {
                div().children(
                    events
                        .newest_first()
                        .take(VISIBLE_ENTRIES)
                        .map(|entry| self.render_entry(entry)),
                )
            };

            panel = panel.child(
                div()
                    .id("event-entries")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_4()
                    .py_1()
                    .child(body),
            );
        }

        panel
    }
}

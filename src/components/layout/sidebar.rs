//! Sidebar Component
//!
//! Navigation sidebar listing the catalog stories, grouped by component.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Story;
use crate::constants::SIDEBAR_WIDTH;
use crate::i18n::{t, Locale};
use crate::theme::PricingColors;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Observe story changes
        cx.observe(&entities.catalog, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(&self, story: Story, locale: Locale, active: Story) -> impl IntoElement {
        let is_active = story == active;
        let label = t(locale, &story.title_key());
        let entities = self.entities.clone();

        let bg_color = if is_active {
            PricingColors::accent_soft()
        } else {
            PricingColors::transparent()
        };

        let text_color = if is_active {
            PricingColors::accent()
        } else {
            PricingColors::text_secondary()
        };

        let border_color = if is_active {
            PricingColors::accent()
        } else {
            PricingColors::transparent()
        };

        div()
            .id(SharedString::from(format!("nav-{}", story.slug())))
            .w_full()
            .px_4()
            .py_2()
            .bg(bg_color)
            .border_l_2()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(px(13.0))
            .cursor_pointer()
            .hover(|s| s.bg(PricingColors::table_row_hover()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.catalog.update(cx, |catalog, cx| {
                    catalog.set_active_story(story);
                    cx.notify();
                });
                entities.config.update(cx, |config, _cx| {
                    config.update_and_save(|c| c.catalog.story = Some(story.slug().to_string()));
                });
            })
            .child(label)
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let active = self.entities.catalog.read(cx).active_story;

        let mut list = div()
            .id("sidebar-stories")
            .flex()
            .flex_col()
            .flex_1()
            .overflow_y_scroll();

        let mut previous_group = None;
        for story in Story::all() {
            let group = story.group();
            if previous_group != Some(group) {
                list = list.child(
                    div()
                        .px_4()
                        .pt_4()
                        .pb_1()
                        .text_size(px(11.0))
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .text_color(PricingColors::text_muted())
                        .child(group.label()),
                );
                previous_group = Some(group);
            }
            list = list.child(self.render_nav_item(*story, locale, active));
        }

        div()
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .bg(PricingColors::sidebar_bg())
            .border_r_1()
            .border_color(PricingColors::border())
            .flex()
            .flex_col()
            .child(
                div()
                    .px_4()
                    .pt_4()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(PricingColors::text_primary())
                    .child(t(locale, "app.stories")),
            )
            .child(list)
    }
}

//! Header Component
//!
//! The catalog header with title, active story and language switcher.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::assets::CustomIconName;
use crate::i18n::t;
use crate::theme::PricingColors;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Observe story changes
        cx.observe(&entities.catalog, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let story = self.entities.catalog.read(cx).active_story;
        let title = t(locale, "app.title");
        let lang_label = locale.display_name();

        let entities = self.entities.clone();

        div()
            .h(px(48.0))
            .w_full()
            .bg(PricingColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: title and current component
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .text_color(PricingColors::text_light())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(title),
                    )
                    .child(
                        div()
                            .px_2()
                            .rounded_sm()
                            .bg(gpui::rgba(0xffffff22))
                            .text_color(PricingColors::text_light())
                            .text_size(px(12.0))
                            .child(story.group().label()),
                    ),
            )
            // Right side: language switcher
            .child(
                div()
                    .id("lang-switcher")
                    .flex()
                    .items_center()
                    .gap_2()
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(gpui::rgba(0xffffff22))
                    .text_color(PricingColors::text_light())
                    .text_size(px(13.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(gpui::rgba(0xffffff44)))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        let locale = entities.i18n.update(cx, |i18n, cx| {
                            i18n.toggle_locale();
                            cx.notify();
                            i18n.locale
                        });
                        tracing::info!(locale = locale.code(), "Locale changed");
                        entities.config.update(cx, |config, _cx| {
                            config.update_and_save(|c| c.locale = Some(locale.code().to_string()));
                        });
                    })
                    .child(Icon::from(CustomIconName::Languages).size_4())
                    .child(lang_label),
            )
    }
}

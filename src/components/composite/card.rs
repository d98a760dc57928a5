//! Card Component
//!
//! A collapsible card: the header is always visible and toggles the body.

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::assets::CustomIconName;
use crate::theme::PricingColors;

/// Card component
#[derive(IntoElement)]
pub struct Card {
    id: ElementId,
    title: SharedString,
    subtitle: Option<SharedString>,
    open: bool,
    children: Vec<AnyElement>,
    footer: Option<AnyElement>,
    on_toggle: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Card {
    /// Create a new card
    pub fn new(id: impl Into<ElementId>, title: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            open: false,
            children: Vec::new(),
            footer: None,
            on_toggle: None,
        }
    }

    /// Text shown at the right of the header
    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Whether the body is visible
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Add a body element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Element always shown below the header
    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer = Some(footer.into_any_element());
        self
    }

    /// Set the header click handler
    pub fn on_toggle(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let chevron = if self.open {
            CustomIconName::ChevronUp
        } else {
            CustomIconName::ChevronDown
        };

        div()
            .id(self.id)
            .bg(PricingColors::card_bg())
            .border_1()
            .border_color(PricingColors::border())
            .rounded_lg()
            .flex()
            .flex_col()
            // Header
            .child(
                div()
                    .id("card-header")
                    .px_4()
                    .py_3()
                    .flex()
                    .items_center()
                    .justify_between()
                    .gap_2()
                    .cursor_pointer()
                    .hover(|s| s.bg(PricingColors::table_row_hover()))
                    .when_some(self.on_toggle, |el, handler| {
                        el.on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
                    })
                    .child(
                        div()
                            .text_size(px(16.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(PricingColors::text_primary())
                            .child(self.title),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .when_some(self.subtitle, |el, subtitle| {
                                el.child(
                                    div()
                                        .text_sm()
                                        .text_color(PricingColors::text_secondary())
                                        .child(subtitle),
                                )
                            })
                            .child(Icon::from(chevron).size_4().text_color(PricingColors::text_muted())),
                    ),
            )
            // Content
            .when(self.open, |el| {
                el.child(
                    div()
                        .px_4()
                        .py_2()
                        .border_t_1()
                        .border_color(PricingColors::border())
                        .flex()
                        .flex_col()
                        .gap_1()
                        .children(self.children),
                )
            })
            .when_some(self.footer, |el, footer| {
                el.child(div().px_4().pb_3().pt_1().flex().justify_end().child(footer))
            })
    }
}

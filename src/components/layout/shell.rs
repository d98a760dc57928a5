//! Shell Component
//!
//! Catalog frame: header on top, sidebar and story area in the middle,
//! event panel at the bottom.

use gpui::{
    div, prelude::*, px, AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window,
};

use crate::theme::{PricingColors, Typography};

/// Catalog layout frame
#[derive(IntoElement, Default)]
pub struct Shell {
    header: Option<AnyElement>,
    sidebar: Option<AnyElement>,
    content: Option<AnyElement>,
    footer: Option<AnyElement>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: impl IntoElement) -> Self {
        self.header = Some(header.into_any_element());
        self
    }

    pub fn sidebar(mut self, sidebar: impl IntoElement) -> Self {
        self.sidebar = Some(sidebar.into_any_element());
        self
    }

    /// Main area, takes the remaining space
    pub fn content(mut self, content: impl IntoElement) -> Self {
        self.content = Some(content.into_any_element());
        self
    }

    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer = Some(footer.into_any_element());
        self
    }
}

impl RenderOnce for Shell {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(PricingColors::background())
            .text_size(px(Typography::TEXT_SM))
            .text_color(PricingColors::text_primary())
            .children(self.header)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .children(self.sidebar)
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .bg(PricingColors::content_bg())
                            .children(self.content),
                    ),
            )
            .children(self.footer)
    }
}

//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::{Icon, tooltip::Tooltip};

use crate::assets::CustomIconName;
use crate::theme::PricingColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (purple)
    #[default]
    Primary,
    /// Secondary button (gray)
    Secondary,
    /// Ghost button (transparent)
    Ghost,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: Option<SharedString>,
    icon: Option<CustomIconName>,
    tooltip: Option<SharedString>,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: Some(label.into()),
            icon: None,
            tooltip: None,
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            on_click: None,
        }
    }

    /// Create a button showing only an icon
    pub fn icon_only(id: impl Into<ElementId>, icon: CustomIconName) -> Self {
        Self {
            label: None,
            icon: Some(icon),
            ..Self::new(id, "")
        }
        .variant(ButtonVariant::Ghost)
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Prefix the label with an icon
    pub fn icon(mut self, icon: CustomIconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Accessible label, used as hover title
    pub fn tooltip(mut self, tooltip: impl Into<SharedString>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                PricingColors::accent(),
                PricingColors::button_primary_text(),
                PricingColors::accent_hover(),
            ),
            ButtonVariant::Secondary => (
                PricingColors::button_secondary_bg(),
                PricingColors::text_primary(),
                PricingColors::button_secondary_hover(),
            ),
            ButtonVariant::Ghost => (
                PricingColors::transparent(),
                PricingColors::button_ghost_text(),
                PricingColors::button_ghost_hover(),
            ),
        };

        let (padding_x, padding_y, font_size) = match (self.size, self.label.is_some()) {
            (_, false) => (px(4.0), px(4.0), px(14.0)),
            (ButtonSize::Small, true) => (px(8.0), px(4.0), px(12.0)),
            (ButtonSize::Medium, true) => (px(16.0), px(8.0), px(14.0)),
        };

        let opacity = if self.disabled { 0.5 } else { 1.0 };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_1()
            .px(padding_x)
            .py(padding_y)
            .bg(bg_color)
            .text_color(text_color)
            .text_size(font_size)
            .rounded_md()
            .opacity(opacity)
            .when_some(self.icon, |el, icon| {
                el.child(Icon::from(icon).size_4().text_color(text_color))
            })
            .when_some(self.label, |el, label| el.child(label));

        if let Some(tooltip) = self.tooltip {
            element = element.tooltip(move |window, cx| {
                Tooltip::new(tooltip.clone()).build(window, cx)
            });
        }

        if !self.disabled {
            element = element.cursor_pointer().hover(|s| s.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

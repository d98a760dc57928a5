//! Select Component
//!
//! A segmented selector: every option is visible and clicking one selects it.

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::PricingColors;

/// A select option
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: SharedString,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

type ChangeHandler = Box<dyn Fn(&SharedString, &mut Window, &mut App) + 'static>;

/// A select component
#[derive(IntoElement)]
pub struct Select {
    id: ElementId,
    selected: Option<SharedString>,
    options: Vec<SelectOption>,
    disabled: bool,
    on_change: Option<ChangeHandler>,
}

impl Select {
    /// Create a new select
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            selected: None,
            options: Vec::new(),
            disabled: false,
            on_change: None,
        }
    }

    /// Set the selected value
    pub fn selected(mut self, value: impl Into<SharedString>) -> Self {
        self.selected = Some(value.into());
        self
    }

    /// Set the options
    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with the value of the clicked option, unless it is already selected
    pub fn on_change(
        mut self,
        handler: impl Fn(&SharedString, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Select {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let opacity = if self.disabled { 0.5 } else { 1.0 };
        let on_change = self.on_change.map(std::rc::Rc::new);

        div()
            .id(self.id)
            .flex()
            .items_center()
            .p(px(2.0))
            .gap(px(2.0))
            .bg(PricingColors::input_bg())
            .border_1()
            .border_color(PricingColors::input_border())
            .rounded_md()
            .text_sm()
            .opacity(opacity)
            .children(self.options.into_iter().enumerate().map(|(ix, option)| {
                let is_selected = self.selected.as_ref() == Some(&option.value);
                let value = option.value.clone();
                let on_change = on_change.clone();

                div()
                    .id(ix)
                    .px_3()
                    .py_1()
                    .rounded_sm()
                    .when(is_selected, |el| {
                        el.bg(PricingColors::accent())
                            .text_color(PricingColors::button_primary_text())
                    })
                    .when(!is_selected, |el| el.text_color(PricingColors::text_primary()))
                    .when(!is_selected && !self.disabled, |el| {
                        el.cursor_pointer()
                            .hover(|s| s.bg(PricingColors::accent_soft()))
                            .when_some(on_change, |el, handler| {
                                el.on_click(move |_, window, cx| handler(&value, window, cx))
                            })
                    })
                    .child(option.label)
            }))
    }
}

//! Pricing Estimation
//!
//! One line per selected plan with quantity controls, followed by a recap
//! with the monthly total and the call-to-action buttons. The recap is laid
//! out on one row from [`ESTIMATION_RECAP_BREAKPOINT`] and stacked below it.

use gpui::{
    div, prelude::*, px, AnyElement, Context, EventEmitter, IntoElement, ParentElement, Render,
    SharedString, Styled, WeakEntity, Window,
};

use crate::app::entities::current_locale;
use crate::assets::CustomIconName;
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::components::resize::{width_probe, ResizeAware, ResizeObserver};
use crate::constants::ESTIMATION_RECAP_BREAKPOINT;
use crate::domain::{Currency, QuantityChange, SelectedProduct, Selection};
use crate::eventing::ComponentEvent;
use crate::i18n::{t, Locale};
use crate::theme::{PricingColors, Typography};
use crate::utils::format::format_price;

/// Events emitted by [`PricingEstimation`]
#[derive(Debug, Clone, PartialEq)]
pub enum EstimationEvent {
    /// `+` or `-` was clicked on a line
    ChangeQuantity(QuantityChange),
    ContactSales,
    SignUp,
}

impl ComponentEvent for EstimationEvent {
    const SOURCE: &'static str = "pricing-estimation";

    fn name(&self) -> &'static str {
        match self {
            EstimationEvent::ChangeQuantity(_) => "change-quantity",
            EstimationEvent::ContactSales => "contact-sales",
            EstimationEvent::SignUp => "sign-up",
        }
    }

    fn payload(&self) -> String {
        match self {
            EstimationEvent::ChangeQuantity(change) => {
                format!("{} / {} x{}", change.product_name, change.item.name, change.quantity)
            }
            EstimationEvent::ContactSales | EstimationEvent::SignUp => String::new(),
        }
    }
}

/// How the recap block is arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecapLayout {
    Row,
    Column,
}

impl RecapLayout {
    pub fn for_observer(observer: &ResizeObserver) -> Self {
        if observer.at_least(ESTIMATION_RECAP_BREAKPOINT) {
            RecapLayout::Row
        } else {
            RecapLayout::Column
        }
    }
}

/// Pricing estimation component
pub struct PricingEstimation {
    selection: Selection,
    currency: Currency,
    resize: ResizeObserver,
}

impl EventEmitter<EstimationEvent> for PricingEstimation {}

impl ResizeAware for PricingEstimation {
    fn resize_observer(&mut self) -> &mut ResizeObserver {
        &mut self.resize
    }
}

impl PricingEstimation {
    pub fn new(selection: Selection, currency: Currency) -> Self {
        Self {
            selection,
            currency,
            resize: ResizeObserver::new(),
        }
    }

    pub fn set_selection(&mut self, selection: Selection, cx: &mut Context<Self>) {
        if !self.selection.same_as(&selection) {
            self.selection = selection;
            cx.notify();
        }
    }

    pub fn set_currency(&mut self, currency: Currency, cx: &mut Context<Self>) {
        if self.currency != currency {
            self.currency = currency;
            cx.notify();
        }
    }

    pub fn total_price(&self) -> f64 {
        self.selection.total_price()
    }

    pub fn recap_layout(&self) -> RecapLayout {
        RecapLayout::for_observer(&self.resize)
    }

    fn change_quantity(&mut self, change: QuantityChange, cx: &mut Context<Self>) {
        tracing::debug!(plan = %change.item.id, quantity = change.quantity, "Quantity change");
        cx.emit(EstimationEvent::ChangeQuantity(change));
    }

    fn quantity_button(
        view: &WeakEntity<Self>,
        line: &SelectedProduct,
        delta: i64,
    ) -> Button {
        let (prefix, icon) = if delta > 0 {
            ("inc", CustomIconName::Plus)
        } else {
            ("dec", CustomIconName::Minus)
        };
        let view = view.clone();
        let change = line.quantity_change(delta);

        Button::icon_only(SharedString::from(format!("{prefix}-{}", line.item.id)), icon)
            .variant(ButtonVariant::Secondary)
            .size(ButtonSize::Small)
            .on_click(move |_, _window, cx| {
                let change = change.clone();
                let _ = view.update(cx, |this, cx| this.change_quantity(change, cx));
            })
    }

    fn render_line(
        &self,
        view: &WeakEntity<Self>,
        line: &SelectedProduct,
        locale: Locale,
    ) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_3()
            .py_2()
            .border_b_1()
            .border_color(PricingColors::border())
            .text_sm()
            .child(
                div()
                    .flex_1()
                    .min_w(px(80.0))
                    .text_color(PricingColors::text_secondary())
                    .child(line.product_name.clone()),
            )
            .child(
                div()
                    .flex_1()
                    .min_w(px(60.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(line.item.name.clone()),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(Self::quantity_button(view, line, -1))
                    .child(
                        div()
                            .min_w(px(24.0))
                            .flex()
                            .justify_center()
                            .child(line.quantity.to_string()),
                    )
                    .child(Self::quantity_button(view, line, 1)),
            )
            .child(
                div()
                    .w(px(110.0))
                    .flex()
                    .justify_end()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(format_price(line.line_price(), self.currency, locale)),
            )
    }

    fn render_lines(&self, locale: Locale, cx: &mut Context<Self>) -> AnyElement {
        if self.selection.is_empty() {
            return div()
                .py_4()
                .text_sm()
                .text_color(PricingColors::text_muted())
                .child(t(locale, "pricing_estimation.empty"))
                .into_any_element();
        }

        let view = cx.entity().downgrade();
        let header = div()
            .flex()
            .gap_3()
            .pb_2()
            .border_b_1()
            .border_color(PricingColors::border())
            .text_xs()
            .text_color(PricingColors::text_muted())
            .child(div().flex_1().min_w(px(80.0)).child(t(locale, "pricing_estimation.product")))
            .child(div().flex_1().min_w(px(60.0)).child(t(locale, "pricing_estimation.size")))
            .child(div().w(px(96.0)).child(t(locale, "pricing_estimation.quantity")))
            .child(
                div()
                    .w(px(110.0))
                    .flex()
                    .justify_end()
                    .child(t(locale, "pricing_estimation.price")),
            );

        div()
            .flex()
            .flex_col()
            .child(header)
            .children(
                self.selection
                    .iter()
                    .map(|line| self.render_line(&view, line, locale)),
            )
            .into_any_element()
    }

    fn render_recap(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let layout = self.recap_layout();
        let contact_view = cx.entity().downgrade();
        let sign_up_view = contact_view.clone();

        let buttons = div()
            .flex()
            .gap_2()
            .child(
                Button::primary("estimation-contact-sales", t(locale, "pricing_estimation.contact_sales"))
                    .on_click(move |_, _window, cx| {
                        let _ = contact_view.update(cx, |_, cx| cx.emit(EstimationEvent::ContactSales));
                    }),
            )
            .child(
                Button::secondary("estimation-sign-up", t(locale, "pricing_estimation.sign_up"))
                    .on_click(move |_, _window, cx| {
                        let _ = sign_up_view.update(cx, |_, cx| cx.emit(EstimationEvent::SignUp));
                    }),
            );

        div()
            .mt_4()
            .p_4()
            .rounded_md()
            .bg(PricingColors::accent_soft())
            .flex()
            .gap_4()
            .when(layout == RecapLayout::Row, |el| el.items_center().justify_between())
            .when(layout == RecapLayout::Column, |el| el.flex_col().items_start())
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_sm()
                            .text_color(PricingColors::text_secondary())
                            .child(t(locale, "pricing_estimation.monthly_estimate")),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_2XL))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(PricingColors::accent())
                            .child(format_price(self.total_price(), self.currency, locale)),
                    ),
            )
            .child(buttons)
    }
}

impl Render for PricingEstimation {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = current_locale(cx);

        div()
            .relative()
            .w_full()
            .flex()
            .flex_col()
            .child(width_probe(cx))
            .child(self.render_lines(locale, cx))
            .child(self.render_recap(locale, cx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PricingItem, ProductSelection};

    fn add(id: &str, price: f64) -> ProductSelection {
        ProductSelection {
            product_name: "Redis".to_string(),
            item: PricingItem::new(id, id.to_uppercase(), price),
        }
    }

    #[test]
    fn test_total_is_recomputed_from_selection() {
        let estimation = PricingEstimation::new(Selection::new(), Currency::Eur);
        assert_eq!(estimation.total_price(), 0.0);

        let selection = Selection::new()
            .with_added(&add("s", 8.0))
            .with_added(&add("s", 8.0))
            .with_added(&add("m", 20.5));
        let estimation = PricingEstimation::new(selection, Currency::Eur);
        assert_eq!(estimation.total_price(), 36.5);
    }

    #[test]
    fn test_recap_layout_breakpoint() {
        let mut estimation = PricingEstimation::new(Selection::new(), Currency::Eur);
        assert_eq!(estimation.recap_layout(), RecapLayout::Column);

        estimation.resize_observer().observe(599.0);
        assert_eq!(estimation.recap_layout(), RecapLayout::Column);

        estimation.resize_observer().observe(600.0);
        assert_eq!(estimation.recap_layout(), RecapLayout::Row);
    }

    #[test]
    fn test_change_quantity_event() {
        let line = SelectedProduct {
            product_name: "Redis".to_string(),
            item: PricingItem::new("s", "S", 8.0),
            quantity: 2,
        };
        let plus = EstimationEvent::ChangeQuantity(line.quantity_change(1));
        let minus = EstimationEvent::ChangeQuantity(line.quantity_change(-1));

        assert_eq!(plus.name(), "change-quantity");
        assert_eq!(plus.payload(), "Redis / S x3");
        assert_eq!(minus.payload(), "Redis / S x1");
        assert_eq!(EstimationEvent::SignUp.name(), "sign-up");
    }
}

//! Pricing Header
//!
//! Currency selector and running monthly total of the selection.

use gpui::{
    div, prelude::*, px, Context, EventEmitter, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::current_locale;
use crate::components::primitives::select::{Select, SelectOption};
use crate::domain::{Currency, Selection};
use crate::eventing::ComponentEvent;
use crate::i18n::t;
use crate::theme::{PricingColors, Typography};
use crate::utils::format::format_price;

/// Events emitted by [`PricingHeader`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderEvent {
    /// A currency was picked
    ChangeCurrency(Currency),
}

impl ComponentEvent for HeaderEvent {
    const SOURCE: &'static str = "pricing-header";

    fn name(&self) -> &'static str {
        match self {
            HeaderEvent::ChangeCurrency(_) => "change-currency",
        }
    }

    fn payload(&self) -> String {
        match self {
            HeaderEvent::ChangeCurrency(currency) => currency.code().to_string(),
        }
    }
}

/// Pricing header component
pub struct PricingHeader {
    selection: Selection,
    currency: Currency,
}

impl EventEmitter<HeaderEvent> for PricingHeader {}

impl PricingHeader {
    pub fn new(selection: Selection, currency: Currency) -> Self {
        Self {
            selection,
            currency,
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

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Monthly total of the current selection
    pub fn total_price(&self) -> f64 {
        self.selection.total_price()
    }

    fn change_currency(&mut self, code: &str, cx: &mut Context<Self>) {
        match code.parse::<Currency>() {
            Ok(currency) => {
                tracing::debug!(currency = %currency, "Currency picked");
                cx.emit(HeaderEvent::ChangeCurrency(currency));
            }
            Err(err) => tracing::warn!(error = %err, "Ignoring currency"),
        }
    }
}

impl Render for PricingHeader {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = current_locale(cx);
        let view = cx.entity().downgrade();

        let options = Currency::all()
            .iter()
            .map(|c| SelectOption::new(c.code(), format!("{} {}", c.symbol(), c.code())))
            .collect();

        div()
            .w_full()
            .flex()
            .flex_wrap()
            .items_center()
            .justify_between()
            .gap_4()
            .px_4()
            .py_3()
            .rounded_md()
            .bg(PricingColors::accent_soft())
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_sm()
                            .text_color(PricingColors::text_secondary())
                            .child(t(locale, "pricing_header.currency")),
                    )
                    .child(
                        Select::new("pricing-header-currency")
                            .options(options)
                            .selected(self.currency.code())
                            .on_change(move |value, _window, cx| {
                                let _ = view.update(cx, |this, cx| this.change_currency(value, cx));
                            }),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_baseline()
                    .gap_2()
                    .child(
                        div()
                            .text_sm()
                            .text_color(PricingColors::text_secondary())
                            .child(t(locale, "pricing_header.total")),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_2XL))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(PricingColors::accent())
                            .child(format_price(self.total_price(), self.currency, locale)),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PricingItem, ProductSelection};

    #[test]
    fn test_total_follows_selection() {
        let add = ProductSelection {
            product_name: "Postgresql".to_string(),
            item: PricingItem::new("pg-xs", "XS", 17.5),
        };
        let header = PricingHeader::new(Selection::new(), Currency::Eur);
        assert_eq!(header.total_price(), 0.0);

        let header = PricingHeader::new(Selection::new().with_added(&add).with_added(&add), Currency::Usd);
        assert_eq!(header.total_price(), 35.0);
        assert_eq!(header.currency(), Currency::Usd);
    }

    #[test]
    fn test_change_currency_event() {
        let event = HeaderEvent::ChangeCurrency(Currency::Gbp);
        assert_eq!(HeaderEvent::SOURCE, "pricing-header");
        assert_eq!(event.name(), "change-currency");
        assert_eq!(event.payload(), "GBP");
    }
}

//! Pricing Page
//!
//! Composition root of the pricing components. The page owns the
//! [`PricingState`]: children report user intents as events, the page turns
//! them into [`PricingMsg`]s, reduces, and pushes what changed back down.

use gpui::{
    div, prelude::*, Context, Entity, EventEmitter, IntoElement, ParentElement, Render, Styled,
    Subscription, Window,
};

use super::estimation::{EstimationEvent, PricingEstimation};
use super::header::{HeaderEvent, PricingHeader};
use super::product::{PricingProduct, ProductEvent, ProductState};
use crate::domain::{Currency, Selection};
use crate::eventing::ComponentEvent;
use crate::state::pricing_state::{PricingMsg, PricingState};
use crate::theme::PricingColors;

impl ComponentEvent for PricingMsg {
    const SOURCE: &'static str = "pricing-page";

    fn name(&self) -> &'static str {
        match self {
            PricingMsg::AddProduct(_) => "add-product",
            PricingMsg::ChangeQuantity(_) => "change-quantity",
            PricingMsg::ChangeCurrency(_) => "change-currency",
        }
    }

    fn payload(&self) -> String {
        match self {
            PricingMsg::AddProduct(selection) => {
                format!("{} / {}", selection.product_name, selection.item.name)
            }
            PricingMsg::ChangeQuantity(change) => {
                format!("{} / {} x{}", change.product_name, change.item.name, change.quantity)
            }
            PricingMsg::ChangeCurrency(currency) => currency.code().to_string(),
        }
    }
}

/// Map an estimation event to a page message, if it concerns the selection
fn estimation_msg(event: &EstimationEvent) -> Option<PricingMsg> {
    match event {
        EstimationEvent::ChangeQuantity(change) => Some(PricingMsg::ChangeQuantity(change.clone())),
        EstimationEvent::ContactSales | EstimationEvent::SignUp => None,
    }
}

/// Pricing page component
pub struct PricingPage {
    state: PricingState,
    header: Entity<PricingHeader>,
    products: Vec<Entity<PricingProduct>>,
    estimation: Entity<PricingEstimation>,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<PricingMsg> for PricingPage {}
impl EventEmitter<EstimationEvent> for PricingPage {}

impl PricingPage {
    pub fn new(products: Vec<ProductState>, currency: Currency, cx: &mut Context<Self>) -> Self {
        let state = PricingState::new(currency);

        let header = cx.new(|_| PricingHeader::new(state.selection.clone(), currency));
        let estimation = cx.new(|_| PricingEstimation::new(state.selection.clone(), currency));
        let products: Vec<_> = products
            .into_iter()
            .map(|product| cx.new(|cx| PricingProduct::new(product, currency, cx)))
            .collect();

        let mut subscriptions = vec![
            cx.subscribe(&header, |this, _, event: &HeaderEvent, cx| match event {
                HeaderEvent::ChangeCurrency(currency) => {
                    this.dispatch(PricingMsg::ChangeCurrency(*currency), cx)
                }
            }),
            cx.subscribe(&estimation, |this, _, event: &EstimationEvent, cx| {
                match estimation_msg(event) {
                    Some(msg) => this.dispatch(msg, cx),
                    // Call-to-action clicks are not ours to handle
                    None => cx.emit(event.clone()),
                }
            }),
        ];
        subscriptions.extend(products.iter().map(|product| {
            cx.subscribe(product, |this, _, event: &ProductEvent, cx| match event {
                ProductEvent::AddProduct(selection) => {
                    this.dispatch(PricingMsg::AddProduct(selection.clone()), cx)
                }
            })
        }));

        Self {
            state,
            header,
            products,
            estimation,
            _subscriptions: subscriptions,
        }
    }

    pub fn state(&self) -> &PricingState {
        &self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    /// Reduce a message and propagate the result to the children
    pub fn dispatch(&mut self, msg: PricingMsg, cx: &mut Context<Self>) {
        let next = self.state.reduce(&msg);
        let selection_changed = !next.selection.same_as(&self.state.selection);
        let currency_changed = next.currency != self.state.currency;
        self.state = next;

        tracing::debug!(
            msg = msg.name(),
            selection_changed,
            currency_changed,
            lines = self.state.selection.len(),
            "Pricing message reduced"
        );

        if selection_changed {
            let selection = self.state.selection.clone();
            self.header
                .update(cx, |header, cx| header.set_selection(selection.clone(), cx));
            self.estimation
                .update(cx, |estimation, cx| estimation.set_selection(selection, cx));
        }

        if currency_changed {
            let currency = self.state.currency;
            self.header
                .update(cx, |header, cx| header.set_currency(currency, cx));
            self.estimation
                .update(cx, |estimation, cx| estimation.set_currency(currency, cx));
            for product in &self.products {
                product.update(cx, |product, cx| product.set_currency(currency, cx));
            }
        }

        cx.emit(msg);
    }
}

impl Render for PricingPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_6()
            .child(self.header.clone())
            .children(self.products.iter().map(|product| {
                div()
                    .p_4()
                    .rounded_md()
                    .border_1()
                    .border_color(PricingColors::border())
                    .bg(PricingColors::card_bg())
                    .child(product.clone())
            }))
            .child(self.estimation.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PricingItem, ProductSelection, QuantityChange};

    #[test]
    fn test_estimation_events_mapping() {
        let change = QuantityChange {
            product_name: "Redis".to_string(),
            item: PricingItem::new("s", "S", 8.0),
            quantity: 0,
        };
        assert_eq!(
            estimation_msg(&EstimationEvent::ChangeQuantity(change.clone())),
            Some(PricingMsg::ChangeQuantity(change))
        );
        assert_eq!(estimation_msg(&EstimationEvent::ContactSales), None);
        assert_eq!(estimation_msg(&EstimationEvent::SignUp), None);
    }

    #[test]
    fn test_page_message_description() {
        let msg = PricingMsg::AddProduct(ProductSelection {
            product_name: "Postgresql".to_string(),
            item: PricingItem::new("pg-xs", "XS", 17.5),
        });
        assert_eq!(PricingMsg::SOURCE, "pricing-page");
        assert_eq!(msg.name(), "add-product");
        assert_eq!(msg.payload(), "Postgresql / XS");
        assert_eq!(PricingMsg::ChangeCurrency(Currency::Usd).payload(), "USD");
    }
}

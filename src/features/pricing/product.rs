//! Pricing Product
//!
//! Product presentation (icon, title, description) around a pricing table.
//! Plans added from the table are reported with the product name attached.

use gpui::{
    div, img, prelude::*, px, AnyElement, Context, Entity, EventEmitter, IntoElement, ParentElement,
    Render, SharedString, Styled, Subscription, Window,
};
use gpui_component::Icon;

use super::table::{PricingTable, PricingTableEvent};
use crate::app::entities::current_locale;
use crate::assets::CustomIconName;
use crate::constants::SKELETON_TEXT;
use crate::domain::{Currency, Product, ProductSelection};
use crate::eventing::ComponentEvent;
use crate::i18n::t;
use crate::theme::{PricingColors, Typography};

/// Events emitted by [`PricingProduct`]
#[derive(Debug, Clone, PartialEq)]
pub enum ProductEvent {
    /// A plan of this product was added
    AddProduct(ProductSelection),
}

impl ComponentEvent for ProductEvent {
    const SOURCE: &'static str = "pricing-product";

    fn name(&self) -> &'static str {
        match self {
            ProductEvent::AddProduct(_) => "add-product",
        }
    }

    fn payload(&self) -> String {
        match self {
            ProductEvent::AddProduct(selection) => {
                format!("{} / {}", selection.product_name, selection.item.name)
            }
        }
    }
}

/// What the product displays
#[derive(Debug, Clone)]
pub enum ProductState {
    Loaded(Product),
    /// Plans are loading
    Skeleton,
    /// Plans could not be loaded
    Error,
}

impl ProductState {
    /// Whether a plan table is displayed under the header
    pub fn shows_table(&self) -> bool {
        !matches!(self, ProductState::Error)
    }
}

/// Pricing product component
pub struct PricingProduct {
    state: ProductState,
    /// Absent when the product failed to load
    table: Option<Entity<PricingTable>>,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<ProductEvent> for PricingProduct {}

impl PricingProduct {
    pub fn new(state: ProductState, currency: Currency, cx: &mut Context<Self>) -> Self {
        let table = state.shows_table().then(|| {
            cx.new(|_| match &state {
                ProductState::Loaded(product) => {
                    PricingTable::new(&product.items, product.features.clone(), currency)
                }
                _ => PricingTable::skeleton(Vec::new()),
            })
        });

        let subscriptions: Vec<Subscription> = table
            .iter()
            .map(|table| {
                cx.subscribe(table, |this, _table, event, cx| match event {
                    PricingTableEvent::AddItem(item) => {
                        let ProductState::Loaded(product) = &this.state else {
                            return;
                        };
                        cx.emit(ProductEvent::AddProduct(ProductSelection {
                            product_name: product.title.clone(),
                            item: item.clone(),
                        }));
                    }
                })
            })
            .collect();

        Self {
            state,
            table,
            _subscriptions: subscriptions,
        }
    }

    pub fn set_currency(&mut self, currency: Currency, cx: &mut Context<Self>) {
        if let Some(table) = &self.table {
            table.update(cx, |table, cx| table.set_currency(currency, cx));
        }
    }

    fn render_icon(icon: Option<SharedString>) -> AnyElement {
        let fallback = || {
            Icon::from(CustomIconName::Database)
                .size_8()
                .text_color(PricingColors::accent())
                .into_any_element()
        };

        match icon {
            Some(url) if !url.is_empty() => img(url)
                .size(px(40.0))
                .with_fallback(fallback)
                .into_any_element(),
            _ => fallback(),
        }
    }

    fn render_header(
        icon: Option<SharedString>,
        title: SharedString,
        description: SharedString,
        skeleton: bool,
    ) -> impl IntoElement {
        let filler = |el: gpui::Div| {
            el.rounded_sm()
                .bg(PricingColors::skeleton())
                .text_color(PricingColors::transparent())
        };

        div()
            .flex()
            .items_center()
            .gap_3()
            .child(if skeleton {
                div()
                    .size(px(40.0))
                    .rounded_md()
                    .bg(PricingColors::skeleton())
                    .into_any_element()
            } else {
                Self::render_icon(icon)
            })
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_XL))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(PricingColors::text_primary())
                            .when(skeleton, filler)
                            .child(title),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(PricingColors::text_secondary())
                            .when(skeleton, filler)
                            .child(description),
                    ),
            )
    }
}

impl Render for PricingProduct {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = current_locale(cx);

        let root = div().w_full().flex().flex_col().gap_4();

        match &self.state {
            ProductState::Loaded(product) => root
                .child(Self::render_header(
                    Some(product.icon.clone().into()),
                    product.title.clone().into(),
                    product.description.clone().into(),
                    false,
                ))
                .children(self.table.clone()),
            ProductState::Skeleton => root
                .child(Self::render_header(
                    None,
                    SKELETON_TEXT.into(),
                    format!("{SKELETON_TEXT} {SKELETON_TEXT}").into(),
                    true,
                ))
                .children(self.table.clone()),
            ProductState::Error => root.child(
                div()
                    .p_4()
                    .rounded_md()
                    .border_1()
                    .border_color(PricingColors::danger())
                    .text_color(PricingColors::danger())
                    .child(t(locale, "pricing_product.error")),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricingItem;

    #[test]
    fn test_add_product_event() {
        let event = ProductEvent::AddProduct(ProductSelection {
            product_name: "Redis".to_string(),
            item: PricingItem::new("redis-s", "S", 8.67),
        });
        assert_eq!(ProductEvent::SOURCE, "pricing-product");
        assert_eq!(event.name(), "add-product");
        assert_eq!(event.payload(), "Redis / S");
    }

    #[test]
    fn test_error_state_has_no_table() {
        let product = crate::fixtures::redis().expect("redis fixture");
        assert!(ProductState::Loaded(product).shows_table());
        assert!(ProductState::Skeleton.shows_table());
        assert!(!ProductState::Error.shows_table());
    }
}

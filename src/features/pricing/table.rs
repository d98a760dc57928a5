//! Pricing Table
//!
//! Lists the plans of a product, as a table when there is room for it and
//! as collapsible cards otherwise. The table holds no selection: adding a
//! plan only emits [`PricingTableEvent::AddItem`].

use gpui::{
    div, prelude::*, px, AnyElement, Context, EventEmitter, IntoElement, ParentElement, Render,
    SharedString, Styled, WeakEntity, Window,
};

use super::cells::{column_align, feature_cell_or_placeholder, row_cells};
use super::layout::{sorted_by_price, CardStates, LayoutMode};
use crate::app::entities::current_locale;
use crate::components::composite::card::Card;
use crate::components::composite::data_table::{Column, ColumnAlign, DataTable};
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::resize::{width_probe, ResizeAware, ResizeObserver};
use crate::constants::{SKELETON_ROWS, SKELETON_TEXT};
use crate::domain::{Currency, FeatureColumn, PricingItem};
use crate::eventing::ComponentEvent;
use crate::i18n::{t, t_args, Locale};
use crate::theme::PricingColors;
use crate::utils::format::format_price;

/// Events emitted by [`PricingTable`]
#[derive(Debug, Clone, PartialEq)]
pub enum PricingTableEvent {
    /// The user asked to add a plan
    AddItem(PricingItem),
}

impl ComponentEvent for PricingTableEvent {
    const SOURCE: &'static str = "pricing-table";

    fn name(&self) -> &'static str {
        match self {
            PricingTableEvent::AddItem(_) => "add-item",
        }
    }

    fn payload(&self) -> String {
        match self {
            PricingTableEvent::AddItem(item) => format!("{} ({})", item.name, item.id),
        }
    }
}

/// Pricing table component
pub struct PricingTable {
    /// Plans, sorted by price
    items: Vec<PricingItem>,
    features: Vec<FeatureColumn>,
    currency: Currency,
    skeleton: bool,
    cards: CardStates,
    resize: ResizeObserver,
}

impl EventEmitter<PricingTableEvent> for PricingTable {}

impl ResizeAware for PricingTable {
    fn resize_observer(&mut self) -> &mut ResizeObserver {
        &mut self.resize
    }
}

impl PricingTable {
    pub fn new(items: &[PricingItem], features: Vec<FeatureColumn>, currency: Currency) -> Self {
        Self {
            items: sorted_by_price(items),
            features,
            currency,
            skeleton: false,
            cards: CardStates::default(),
            resize: ResizeObserver::new(),
        }
    }

    /// A table showing filler rows and no add action
    pub fn skeleton(features: Vec<FeatureColumn>) -> Self {
        Self {
            skeleton: true,
            ..Self::new(&[], features, Currency::default())
        }
    }

    /// Plans in display order
    pub fn items(&self) -> &[PricingItem] {
        &self.items
    }

    pub fn set_currency(&mut self, currency: Currency, cx: &mut Context<Self>) {
        if self.currency != currency {
            self.currency = currency;
            cx.notify();
        }
    }

    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::for_container(&self.resize)
    }

    fn toggle_card(&mut self, item: &PricingItem, cx: &mut Context<Self>) {
        let open = self.cards.toggle(&item.id);
        tracing::debug!(plan = %item.id, open, "Toggled plan card");
        cx.notify();
    }

    fn add_item(&mut self, item: PricingItem, cx: &mut Context<Self>) {
        tracing::debug!(plan = %item.id, "Add plan");
        cx.emit(PricingTableEvent::AddItem(item));
    }

    fn add_button(view: &WeakEntity<Self>, item: &PricingItem, locale: Locale) -> Button {
        let view = view.clone();
        let item = item.clone();
        Button::primary(
            SharedString::from(format!("add-{}", item.id)),
            t(locale, "pricing_table.add"),
        )
        .size(ButtonSize::Small)
        .tooltip(t_args(locale, "pricing_table.add_plan", &[("plan", item.name.as_str())]))
        .on_click(move |_, _window, cx| {
            let item = item.clone();
            let _ = view.update(cx, |this, cx| this.add_item(item, cx));
        })
    }

    fn columns(&self, locale: Locale, cx: &mut Context<Self>) -> Vec<Column<PricingItem>> {
        let view = cx.entity().downgrade();
        let currency = self.currency;
        let mut columns = Vec::with_capacity(self.features.len() + 3);

        columns.push(
            Column::new("plan", t(locale, "pricing_table.plan"), |row: &PricingItem| {
                div()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(row.name.clone())
                    .into_any_element()
            })
            .flex_width(60.0),
        );

        for feature in &self.features {
            let align = column_align(&self.items, feature);
            let column = feature.clone();

            columns.push(
                Column::new(feature.code.clone(), feature.name.clone(), move |row: &PricingItem| {
                    let cell = feature_cell_or_placeholder(row, &column, locale);
                    div().child(cell.text).into_any_element()
                })
                .align(align),
            );
        }

        columns.push(
            Column::new("price", t(locale, "pricing_table.price"), move |row: &PricingItem| {
                div()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(format_price(row.price, currency, locale))
                    .into_any_element()
            })
            .align(ColumnAlign::End)
            .flex_width(90.0),
        );

        columns.push(
            Column::new("add", "", move |row: &PricingItem| {
                Self::add_button(&view, row, locale).into_any_element()
            })
            .fixed_width(90.0)
            .align(ColumnAlign::End),
        );

        columns
    }

    fn render_table(&self, locale: Locale, cx: &mut Context<Self>) -> AnyElement {
        DataTable::new(self.columns(locale, cx), self.items.clone())
            .empty_message(t(locale, "pricing_table.empty"))
            .into_any_element()
    }

    fn render_cards(&self, locale: Locale, cx: &mut Context<Self>) -> AnyElement {
        let view = cx.entity().downgrade();

        if self.items.is_empty() {
            return div()
                .py_6()
                .text_color(PricingColors::text_muted())
                .child(t(locale, "pricing_table.empty"))
                .into_any_element();
        }

        div()
            .flex()
            .flex_col()
            .gap_2()
            .children(self.items.iter().map(|item| {
                let toggle_view = view.clone();
                let toggle_item = item.clone();

                let mut card = Card::new(SharedString::from(format!("card-{}", item.id)), item.name.clone())
                    .subtitle(format_price(item.price, self.currency, locale))
                    .open(self.cards.is_open(&item.id))
                    .on_toggle(move |_window, cx| {
                        let _ = toggle_view.update(cx, |this, cx| this.toggle_card(&toggle_item, cx));
                    })
                    .footer(Self::add_button(&view, item, locale));

                let cells = row_cells(item, &self.features, locale);
                for (column, cell) in self.features.iter().zip(cells) {
                    let label = item
                        .feature(&column.code)
                        .and_then(|f| f.name.clone())
                        .unwrap_or_else(|| column.name.clone());
                    card = card.child(
                        div()
                            .flex()
                            .justify_between()
                            .gap_4()
                            .text_sm()
                            .child(div().text_color(PricingColors::text_secondary()).child(label))
                            .child(div().child(cell.text)),
                    );
                }

                card
            }))
            .into_any_element()
    }

    fn render_skeleton(&self) -> AnyElement {
        div()
            .flex()
            .flex_col()
            .gap_2()
            .children((0..SKELETON_ROWS).map(|_| {
                div()
                    .h(px(44.0))
                    .px_3()
                    .flex()
                    .items_center()
                    .rounded_md()
                    .bg(PricingColors::skeleton())
                    .text_color(PricingColors::transparent())
                    .child(SKELETON_TEXT)
            }))
            .into_any_element()
    }
}

impl Render for PricingTable {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = current_locale(cx);

        let content = if self.skeleton {
            self.render_skeleton()
        } else {
            match self.layout_mode() {
                LayoutMode::Table => self.render_table(locale, cx),
                LayoutMode::Cards => self.render_cards(locale, cx),
            }
        };

        div()
            .relative()
            .w_full()
            .child(width_probe(cx))
            .child(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_a_copy() {
        let items = vec![
            PricingItem::new("l", "L", 100.0),
            PricingItem::new("s", "S", 10.0),
        ];
        let table = PricingTable::new(&items, Vec::new(), Currency::Eur);

        assert_eq!(table.items()[0].id.as_str(), "s");
        assert_eq!(items[0].id.as_str(), "l");
    }

    #[test]
    fn test_cards_until_width_is_known() {
        let mut table = PricingTable::new(&[], Vec::new(), Currency::Eur);
        assert_eq!(table.layout_mode(), LayoutMode::Cards);

        table.resize_observer().observe(551.0);
        assert_eq!(table.layout_mode(), LayoutMode::Table);

        table.resize_observer().observe(550.0);
        assert_eq!(table.layout_mode(), LayoutMode::Cards);
    }

    #[test]
    fn test_add_item_event() {
        let event = PricingTableEvent::AddItem(PricingItem::new("pg-xs", "XS", 5.25));
        assert_eq!(PricingTableEvent::SOURCE, "pricing-table");
        assert_eq!(event.name(), "add-item");
        assert_eq!(event.payload(), "XS (pg-xs)");
    }
}

//! Workspace - Catalog Shell and Story Host
//!
//! The workspace holds the header, sidebar, story area and event panel.
//! The active story's component is created when the story is selected and
//! every event it emits is recorded in the event log.

use gpui::{
    div, prelude::*, px, AnyView, Context, Entity, EventEmitter, IntoElement, ParentElement,
    Render, Styled, Subscription, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Story;
use crate::components::layout::event_panel::EventPanel;
use crate::components::layout::header::Header;
use crate::components::layout::shell::Shell;
use crate::components::layout::sidebar::Sidebar;
use crate::components::primitives::input_text::{InputText, InputTextEvent, InputTextProps};
use crate::domain::{Currency, Product, Selection};
use crate::error::Result;
use crate::eventing::{record_event, ComponentEvent};
use crate::features::pricing::estimation::{EstimationEvent, PricingEstimation};
use crate::features::pricing::header::{HeaderEvent, PricingHeader};
use crate::features::pricing::page::PricingPage;
use crate::features::pricing::product::{PricingProduct, ProductEvent, ProductState};
use crate::features::pricing::table::{PricingTable, PricingTableEvent};
use crate::fixtures;
use crate::i18n::t;
use crate::state::pricing_state::PricingMsg;
use crate::theme::Typography;

const SAMPLE_TOKEN: &str = "4b3a2f1e-9c8d-4e7f-a6b5-c4d3e2f1a0b9";

/// The component currently shown, with the subscriptions feeding the event log
struct StoryHost {
    story: Story,
    view: AnyView,
    _subscriptions: Vec<Subscription>,
}

/// Main workspace containing the catalog layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    event_panel: Entity<EventPanel>,
    host: Option<StoryHost>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));
        let event_panel = cx.new(|cx| EventPanel::new(entities.clone(), cx));

        // Story changes rebuild the hosted component on next render
        cx.observe(&entities.catalog, |_this, _, cx| cx.notify())
            .detach();
        // Components read the locale while rendering
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            header,
            sidebar,
            event_panel,
            host: None,
        }
    }

    /// Subscribe to a component's events and record them in the event log
    fn record<T, E>(entity: &Entity<T>, cx: &mut Context<Self>) -> Subscription
    where
        T: EventEmitter<E>,
        E: ComponentEvent + 'static,
    {
        cx.subscribe(entity, |this, _, event: &E, cx| {
            record_event(&this.entities.events, event, cx);
        })
    }

    fn currency(&self, cx: &Context<Self>) -> Currency {
        self.entities.config.read(cx).config.currency
    }

    fn product_state(product: Result<Product>) -> ProductState {
        match product {
            Ok(product) => ProductState::Loaded(product),
            Err(err) => {
                tracing::error!(error = %err, "Failed to load product fixture");
                ProductState::Error
            }
        }
    }

    fn input_story(
        props: InputTextProps,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> (AnyView, Vec<Subscription>) {
        let input = cx.new(|cx| InputText::new(props, window, cx));
        let subscriptions = vec![Self::record::<_, InputTextEvent>(&input, cx)];
        (input.into(), subscriptions)
    }

    fn table_story(
        &self,
        product: Result<Product>,
        cx: &mut Context<Self>,
    ) -> (AnyView, Vec<Subscription>) {
        let currency = self.currency(cx);
        let table = cx.new(|_| match product {
            Ok(product) => PricingTable::new(&product.items, product.features, currency),
            Err(err) => {
                tracing::error!(error = %err, "Failed to load product fixture");
                PricingTable::new(&[], Vec::new(), currency)
            }
        });
        let subscriptions = vec![Self::record::<_, PricingTableEvent>(&table, cx)];
        (table.into(), subscriptions)
    }

    fn product_story(
        &self,
        state: ProductState,
        cx: &mut Context<Self>,
    ) -> (AnyView, Vec<Subscription>) {
        let currency = self.currency(cx);
        let product = cx.new(|cx| PricingProduct::new(state, currency, cx));
        let subscriptions = vec![Self::record::<_, ProductEvent>(&product, cx)];
        (product.into(), subscriptions)
    }

    fn sample_selection() -> Selection {
        let products: Vec<Product> = [fixtures::postgres(), fixtures::redis()]
            .into_iter()
            .filter_map(|product| {
                product
                    .inspect_err(|err| tracing::error!(error = %err, "Failed to load product fixture"))
                    .ok()
            })
            .collect();
        fixtures::sample_selection(&products)
    }

    fn build_story(&self, story: Story, window: &mut Window, cx: &mut Context<Self>) -> StoryHost {
        let (view, subscriptions) = match story {
            Story::InputTextSimple => Self::input_story(
                InputTextProps {
                    name: "simple".into(),
                    placeholder: "Type something".into(),
                    ..Default::default()
                },
                window,
                cx,
            ),
            Story::InputTextMulti => Self::input_story(
                InputTextProps {
                    name: "multi".into(),
                    value: "Line one\nLine two\nLine three".to_string(),
                    multi: true,
                    ..Default::default()
                },
                window,
                cx,
            ),
            Story::InputTextClipboard => Self::input_story(
                InputTextProps {
                    name: "clipboard".into(),
                    value: SAMPLE_TOKEN.to_string(),
                    clipboard: true,
                    ..Default::default()
                },
                window,
                cx,
            ),
            Story::InputTextReadonly => Self::input_story(
                InputTextProps {
                    name: "readonly".into(),
                    value: SAMPLE_TOKEN.to_string(),
                    clipboard: true,
                    readonly: true,
                    ..Default::default()
                },
                window,
                cx,
            ),
            Story::InputTextDisabled => Self::input_story(
                InputTextProps {
                    name: "disabled".into(),
                    value: "Cannot be edited".to_string(),
                    clipboard: true,
                    disabled: true,
                    ..Default::default()
                },
                window,
                cx,
            ),
            Story::InputTextSkeleton => Self::input_story(
                InputTextProps {
                    name: "skeleton".into(),
                    clipboard: true,
                    skeleton: true,
                    ..Default::default()
                },
                window,
                cx,
            ),
            Story::PricingTablePostgres => self.table_story(fixtures::postgres(), cx),
            Story::PricingTableRedis => self.table_story(fixtures::redis(), cx),
            Story::PricingProductPostgres => {
                self.product_story(Self::product_state(fixtures::postgres()), cx)
            }
            Story::PricingProductRedis => {
                self.product_story(Self::product_state(fixtures::redis()), cx)
            }
            Story::PricingProductSkeleton => self.product_story(ProductState::Skeleton, cx),
            Story::PricingProductError => self.product_story(ProductState::Error, cx),
            Story::PricingEstimation => {
                let currency = self.currency(cx);
                let selection = Self::sample_selection();
                let estimation = cx.new(|_| PricingEstimation::new(selection, currency));
                let subscriptions = vec![Self::record::<_, EstimationEvent>(&estimation, cx)];
                (estimation.into(), subscriptions)
            }
            Story::PricingHeader => {
                let currency = self.currency(cx);
                let selection = Self::sample_selection();
                let header = cx.new(|_| PricingHeader::new(selection, currency));
                let subscriptions = vec![Self::record::<_, HeaderEvent>(&header, cx)];
                (header.into(), subscriptions)
            }
            Story::PricingPage => {
                let currency = self.currency(cx);
                let products = vec![
                    Self::product_state(fixtures::postgres()),
                    Self::product_state(fixtures::redis()),
                ];
                let page = cx.new(|cx| PricingPage::new(products, currency, cx));
                let subscriptions = vec![
                    Self::record::<_, PricingMsg>(&page, cx),
                    Self::record::<_, EstimationEvent>(&page, cx),
                ];
                (page.into(), subscriptions)
            }
        };

        tracing::debug!(story = story.slug(), "Story mounted");

        StoryHost {
            story,
            view,
            _subscriptions: subscriptions,
        }
    }

    /// Get the hosted view, rebuilding it when the active story changed
    fn story_view(&mut self, story: Story, window: &mut Window, cx: &mut Context<Self>) -> AnyView {
        match &self.host {
            Some(host) if host.story == story => host.view.clone(),
            _ => {
                let host = self.build_story(story, window, cx);
                let view = host.view.clone();
                self.host = Some(host);
                view
            }
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let story = self.entities.catalog.read(cx).active_story;
        let locale = self.entities.i18n.read(cx).locale;
        let view = self.story_view(story, window, cx);

        let content = div()
            .id("story-content")
            .size_full()
            .overflow_y_scroll()
            .p_6()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_LG))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(t(locale, &story.title_key())),
                    )
                    .child(view),
            );

        Shell::new()
            .header(self.header.clone())
            .sidebar(self.sidebar.clone())
            .content(content)
            .footer(self.event_panel.clone())
    }
}

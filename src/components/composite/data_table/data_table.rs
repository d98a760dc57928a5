//! DataTable Component
//!
//! Rows are rendered in the order given; the table keeps no state.

use gpui::{
    div, prelude::*, px, App, Div, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window,
};

use super::column::{Column, ColumnAlign, ColumnWidth};
use crate::theme::PricingColors;

/// DataTable component
#[derive(IntoElement)]
pub struct DataTable<R: 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    row_height: f32,
    header_height: f32,
    empty_message: SharedString,
}

impl<R: 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(columns: Vec<Column<R>>, rows: Vec<R>) -> Self {
        Self {
            columns,
            rows,
            row_height: 44.0,
            header_height: 40.0,
            empty_message: "No data".into(),
        }
    }

    /// Set the empty message
    pub fn empty_message(mut self, message: impl Into<SharedString>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Size a cell container according to its column
    fn cell(col: &Column<R>) -> Div {
        let cell = match col.width {
            ColumnWidth::Fixed(w) => div().w(px(w)).flex_none(),
            ColumnWidth::Flex { min } => div().flex_1().min_w(px(min)),
        };
        let cell = cell.px_3().flex().items_center().overflow_hidden();
        match col.align {
            ColumnAlign::Start => cell.justify_start(),
            ColumnAlign::End => cell.justify_end(),
        }
    }

    /// Render the header row
    fn render_header(&self) -> impl IntoElement {
        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(PricingColors::table_header_bg())
            .border_b_1()
            .border_color(PricingColors::border())
            .children(self.columns.iter().map(|col| {
                Self::cell(col)
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(PricingColors::text_secondary())
                    .child(col.label.clone())
            }))
    }

    /// Render a data row
    fn render_row(&self, row: &R, index: usize) -> impl IntoElement {
        let bg = if index % 2 == 0 {
            PricingColors::content_bg()
        } else {
            PricingColors::table_row_alt()
        };

        div()
            .id(("data-table-row", index))
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(PricingColors::table_row_hover()))
            .border_b_1()
            .border_color(PricingColors::border())
            .children(self.columns.iter().map(|col| {
                Self::cell(col)
                    .text_sm()
                    .text_color(PricingColors::text_primary())
                    .child(col.render_cell(row))
            }))
    }

    /// Render empty state
    fn render_empty(&self) -> impl IntoElement {
        div()
            .py_6()
            .flex()
            .items_center()
            .justify_center()
            .text_color(PricingColors::text_muted())
            .child(self.empty_message.clone())
    }
}

impl<R: 'static> RenderOnce for DataTable<R> {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let body = if self.rows.is_empty() {
            self.render_empty().into_any_element()
        } else {
            div()
                .flex()
                .flex_col()
                .children(
                    self.rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(row, i)),
                )
                .into_any_element()
        };

        div()
            .w_full()
            .flex()
            .flex_col()
            .bg(PricingColors::content_bg())
            .border_1()
            .border_color(PricingColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(self.render_header())
            .child(body)
    }
}

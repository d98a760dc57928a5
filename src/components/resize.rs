//! Resize - Container Width Observation
//!
//! A component that lays itself out differently depending on its own width
//! keeps a [`ResizeObserver`] and renders a [`width_probe`] inside its root
//! element. The probe reports the root's width after layout and the
//! component re-renders when it changed.

use gpui::{canvas, div, prelude::*, Context, IntoElement, Styled};

/// Last observed width of a container
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResizeObserver {
    width: Option<f32>,
}

impl ResizeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a width; returns true if it differs from the previous one
    pub fn observe(&mut self, width: f32) -> bool {
        if self.width == Some(width) {
            return false;
        }
        self.width = Some(width);
        true
    }

    /// Width in logical pixels, `None` before the first layout
    pub fn width(&self) -> Option<f32> {
        self.width
    }

    /// Whether the observed width is strictly greater than `breakpoint`
    pub fn wider_than(&self, breakpoint: f32) -> bool {
        self.width.is_some_and(|w| w > breakpoint)
    }

    /// Whether the observed width is at least `breakpoint`
    pub fn at_least(&self, breakpoint: f32) -> bool {
        self.width.is_some_and(|w| w >= breakpoint)
    }
}

/// Views that observe their own width
pub trait ResizeAware: Sized + 'static {
    fn resize_observer(&mut self) -> &mut ResizeObserver;
}

/// An invisible element covering its (relatively positioned) parent that
/// feeds the parent's width to the view's observer.
pub fn width_probe<V: ResizeAware>(cx: &mut Context<V>) -> impl IntoElement {
    let view = cx.entity().downgrade();

    div().absolute().top_0().left_0().size_full().child(
        canvas(
            move |bounds, window, cx| {
                let width = f32::from(bounds.size.width);
                window.defer(cx, move |_window, cx| {
                    let _ = view.update(cx, |view, cx| {
                        if view.resize_observer().observe(width) {
                            tracing::trace!(width, "Container resized");
                            cx.notify();
                        }
                    });
                });
            },
            |_, _, _, _| {},
        )
        .size_full(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unobserved_width() {
        let observer = ResizeObserver::new();
        assert_eq!(observer.width(), None);
        assert!(!observer.wider_than(0.0));
        assert!(!observer.at_least(0.0));
    }

    #[test]
    fn test_observe_reports_changes() {
        let mut observer = ResizeObserver::new();
        assert!(observer.observe(400.0));
        assert!(!observer.observe(400.0));
        assert!(observer.observe(800.0));
        assert_eq!(observer.width(), Some(800.0));
    }

    #[test]
    fn test_breakpoints() {
        let mut observer = ResizeObserver::new();
        observer.observe(550.0);
        assert!(!observer.wider_than(550.0));
        assert!(observer.at_least(550.0));

        observer.observe(551.0);
        assert!(observer.wider_than(550.0));
    }
}

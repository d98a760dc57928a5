//! InputText Component
//!
//! Single or multiline text field with an optional copy-to-clipboard button.
//! Key events are consumed by the field and never reach its ancestors.

use std::rc::Rc;
use std::time::{Duration, Instant};

use gpui::{
    div, prelude::*, px, App, Context, EventEmitter, FocusHandle, Focusable, InteractiveElement,
    IntoElement, KeyDownEvent, MouseButton, ParentElement, Render, SharedString, Styled,
    Subscription, Task, Window,
};

use crate::app::entities::current_locale;
use crate::assets::CustomIconName;
use crate::components::primitives::button::Button;
use crate::constants::{COPY_CONFIRMATION_MS, INPUT_LINE_HEIGHT, SKELETON_TEXT};
use crate::eventing::ComponentEvent;
use crate::i18n::t;
use crate::services::clipboard::{ClipboardWriter, SystemClipboard};
use crate::theme::PricingColors;

/// Events emitted by [`InputText`]
#[derive(Debug, Clone, PartialEq)]
pub enum InputTextEvent {
    /// The value was edited by the user
    Input(SharedString),
}

impl ComponentEvent for InputTextEvent {
    const SOURCE: &'static str = "input-text";

    fn name(&self) -> &'static str {
        match self {
            InputTextEvent::Input(_) => "input",
        }
    }

    fn payload(&self) -> String {
        match self {
            InputTextEvent::Input(value) => format!("{:?}", value.as_ref()),
        }
    }
}

/// Configuration of an input text
#[derive(Debug, Clone, Default)]
pub struct InputTextProps {
    /// Field name, used in logs
    pub name: SharedString,
    pub value: String,
    pub placeholder: SharedString,
    /// Enter inserts a newline and the field grows with its content
    pub multi: bool,
    /// Show a copy-to-clipboard button
    pub clipboard: bool,
    /// Value can be selected and copied but not edited
    pub readonly: bool,
    pub disabled: bool,
    /// Loading placeholder
    pub skeleton: bool,
}

/// Copy confirmation state.
///
/// Each successful copy bumps the generation and pushes the hide deadline
/// back; an expiry only hides the confirmation if no copy happened since it
/// was scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    generation: u64,
    hide_at: Option<Instant>,
}

impl CopyFeedback {
    /// Show the confirmation from `now` and return the generation to expire later
    pub fn show(&mut self, now: Instant) -> u64 {
        self.generation += 1;
        self.hide_at = Some(now + Duration::from_millis(COPY_CONFIRMATION_MS));
        self.generation
    }

    /// Time left before the confirmation hides, `None` when hidden
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.hide_at.map(|at| at.saturating_duration_since(now))
    }

    /// Hide the confirmation if `generation` is still the latest one
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.hide_at.is_some() && generation == self.generation {
            self.hide_at = None;
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        self.hide_at.is_some()
    }
}

/// Apply a key press to `value`. Returns whether the value changed.
///
/// The caret always sits at the end of the value.
pub fn apply_key(
    value: &mut String,
    key: &str,
    key_char: Option<&str>,
    with_command_modifier: bool,
    multi: bool,
) -> bool {
    if with_command_modifier {
        return false;
    }

    match key {
        "backspace" => value.pop().is_some(),
        "enter" if multi => {
            value.push('\n');
            true
        }
        "enter" | "tab" | "escape" => false,
        _ => match key_char {
            Some(text) if !text.is_empty() && !text.chars().any(char::is_control) => {
                value.push_str(text);
                true
            }
            _ => false,
        },
    }
}

/// Number of visual lines of a value (at least one)
pub fn line_count(value: &str) -> usize {
    value.split('\n').count().max(1)
}

/// A text input component
pub struct InputText {
    props: InputTextProps,
    focus_handle: FocusHandle,
    /// Readonly fields select their whole content on focus
    selected_all: bool,
    copy_feedback: CopyFeedback,
    copy_task: Option<Task<()>>,
    clipboard: Rc<dyn ClipboardWriter>,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<InputTextEvent> for InputText {}

impl InputText {
    /// Create a new input text using the system clipboard
    pub fn new(props: InputTextProps, window: &mut Window, cx: &mut Context<Self>) -> Self {
        Self::with_clipboard(props, Rc::new(SystemClipboard), window, cx)
    }

    /// Create a new input text writing to the given clipboard
    pub fn with_clipboard(
        props: InputTextProps,
        clipboard: Rc<dyn ClipboardWriter>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();

        let subscriptions = vec![
            cx.on_focus(&focus_handle, window, |this, _window, cx| {
                if this.props.readonly {
                    this.selected_all = true;
                    cx.notify();
                }
            }),
            cx.on_blur(&focus_handle, window, |this, _window, cx| {
                this.selected_all = false;
                cx.notify();
            }),
        ];

        Self {
            props,
            focus_handle,
            selected_all: false,
            copy_feedback: CopyFeedback::default(),
            copy_task: None,
            clipboard,
            _subscriptions: subscriptions,
        }
    }

    /// Get the value
    pub fn value(&self) -> &str {
        &self.props.value
    }

    fn is_editable(&self) -> bool {
        !self.props.readonly && !self.props.disabled && !self.props.skeleton
    }

    fn show_clipboard(&self) -> bool {
        self.props.clipboard && !self.props.disabled && !self.props.skeleton
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        cx.stop_propagation();

        let keystroke = &event.keystroke;
        let command = keystroke.modifiers.control || keystroke.modifiers.platform;

        if command && keystroke.key == "c" && (self.selected_all || self.props.readonly) {
            self.copy_value(cx);
            return;
        }

        if !self.is_editable() {
            return;
        }

        if apply_key(
            &mut self.props.value,
            &keystroke.key,
            keystroke.key_char.as_deref(),
            command,
            self.props.multi,
        ) {
            cx.emit(InputTextEvent::Input(self.props.value.clone().into()));
            cx.notify();
        }
    }

    /// Copy the value; on success show the confirmation for a fixed delay,
    /// restarting the delay on every copy.
    fn copy_value(&mut self, cx: &mut Context<Self>) {
        if let Err(e) = self.clipboard.write_text(&self.props.value, cx) {
            tracing::warn!(name = %self.props.name, error = %e, "Copy to clipboard failed");
            return;
        }

        let now = Instant::now();
        let generation = self.copy_feedback.show(now);
        let delay = self.copy_feedback.remaining(now).unwrap_or_default();
        self.copy_task = Some(cx.spawn(async move |handle, cx| {
            cx.background_executor().timer(delay).await;
            let _ = handle.update(cx, |this, cx| {
                if this.copy_feedback.expire(generation) {
                    cx.notify();
                }
            });
        }));
        cx.notify();
    }

    fn render_skeleton(&self) -> gpui::AnyElement {
        div()
            .px_3()
            .py_2()
            .rounded_md()
            .bg(PricingColors::skeleton())
            .text_color(PricingColors::transparent())
            .text_sm()
            .child(SKELETON_TEXT)
            .into_any_element()
    }

    fn render_value(&self, window: &Window) -> gpui::AnyElement {
        let show_caret = self.is_editable() && self.focus_handle.is_focused(window);
        let caret = || div().w(px(1.5)).h(px(16.0)).bg(PricingColors::border_focus());

        if self.props.value.is_empty() {
            return div()
                .flex()
                .items_center()
                .when(show_caret, |el| el.child(caret()))
                .child(
                    div()
                        .text_color(PricingColors::input_placeholder())
                        .child(self.props.placeholder.clone()),
                )
                .into_any_element();
        }

        let lines: Vec<SharedString> = self
            .props
            .value
            .split('\n')
            .map(|line| SharedString::from(line.to_string()))
            .collect();
        let last = lines.len() - 1;

        div()
            .flex()
            .flex_col()
            .when(self.selected_all, |el| el.bg(PricingColors::accent_soft()))
            .children(lines.into_iter().enumerate().map(|(ix, line)| {
                div()
                    .flex()
                    .items_center()
                    .h(px(INPUT_LINE_HEIGHT))
                    .child(line)
                    .when(show_caret && ix == last, |el| el.child(caret()))
            }))
            .into_any_element()
    }
}

impl Focusable for InputText {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for InputText {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.props.skeleton {
            return self.render_skeleton();
        }

        let locale = current_locale(cx);
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            PricingColors::border_focus()
        } else {
            PricingColors::input_border()
        };
        let bg = if self.props.disabled {
            PricingColors::input_disabled_bg()
        } else {
            PricingColors::input_bg()
        };
        let min_height = if self.props.multi {
            px(INPUT_LINE_HEIGHT * line_count(&self.props.value) as f32)
        } else {
            px(INPUT_LINE_HEIGHT)
        };

        let field = div()
            .id("input-text-field")
            .flex_1()
            .min_h(min_height)
            .px_3()
            .py_1()
            .bg(bg)
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(PricingColors::text_primary())
            .text_sm()
            .min_w(px(200.0))
            .when(self.props.disabled, |el| el.opacity(0.6))
            .when(!self.props.disabled, |el| {
                el.track_focus(&self.focus_handle)
                    .cursor_text()
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _, window, _cx| window.focus(&this.focus_handle)),
                    )
                    .on_key_down(cx.listener(Self::on_key_down))
            })
            .child(self.render_value(window));

        let copy_icon = if self.copy_feedback.is_visible() {
            CustomIconName::Tick
        } else {
            CustomIconName::Clipboard
        };

        div()
            .flex()
            .items_start()
            .gap_2()
            .child(field)
            .when(self.show_clipboard(), |el| {
                el.child(
                    Button::icon_only("input-text-copy", copy_icon)
                        .tooltip(t(locale, "input_text.clipboard"))
                        .on_click(cx.listener(|this, _, _window, cx| this.copy_value(cx))),
                )
            })
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_appends() {
        let mut value = String::from("ab");
        assert!(apply_key(&mut value, "c", Some("c"), false, false));
        assert_eq!(value, "abc");
    }

    #[test]
    fn test_backspace() {
        let mut value = String::from("é");
        assert!(apply_key(&mut value, "backspace", None, false, false));
        assert_eq!(value, "");
        assert!(!apply_key(&mut value, "backspace", None, false, false));
    }

    #[test]
    fn test_enter_depends_on_multi() {
        let mut value = String::from("a");
        assert!(!apply_key(&mut value, "enter", Some("\n"), false, false));
        assert_eq!(value, "a");

        assert!(apply_key(&mut value, "enter", Some("\n"), false, true));
        assert_eq!(value, "a\n");
        assert_eq!(line_count(&value), 2);
    }

    #[test]
    fn test_command_shortcuts_do_not_edit() {
        let mut value = String::from("a");
        assert!(!apply_key(&mut value, "v", Some("v"), true, false));
        assert!(!apply_key(&mut value, "left", None, false, false));
        assert_eq!(value, "a");
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("one"), 1);
        assert_eq!(line_count("one\ntwo\nthree"), 3);
    }

    #[test]
    fn test_copy_feedback_expires() {
        let mut feedback = CopyFeedback::default();
        let generation = feedback.show(Instant::now());
        assert!(feedback.is_visible());

        assert!(feedback.expire(generation));
        assert!(!feedback.is_visible());
        assert!(!feedback.expire(generation));
    }

    #[test]
    fn test_copy_feedback_restarts() {
        let mut feedback = CopyFeedback::default();
        let start = Instant::now();
        let first = feedback.show(start);
        let second = feedback.show(start);

        // The first delay elapsing must not hide the second confirmation
        assert!(!feedback.expire(first));
        assert!(feedback.is_visible());

        assert!(feedback.expire(second));
        assert!(!feedback.is_visible());
    }

    #[test]
    fn test_copy_confirmation_delay() {
        let mut feedback = CopyFeedback::default();
        let start = Instant::now();
        assert_eq!(feedback.remaining(start), None);

        feedback.show(start);
        assert_eq!(feedback.remaining(start), Some(Duration::from_millis(1000)));
        assert_eq!(
            feedback.remaining(start + Duration::from_millis(400)),
            Some(Duration::from_millis(600))
        );

        // A second copy half way through restarts the full delay
        let second = feedback.show(start + Duration::from_millis(500));
        assert_eq!(
            feedback.remaining(start + Duration::from_millis(1000)),
            Some(Duration::from_millis(500))
        );
        assert_eq!(
            feedback.remaining(start + Duration::from_millis(1500)),
            Some(Duration::ZERO)
        );

        feedback.expire(second);
        assert_eq!(feedback.remaining(start + Duration::from_millis(1500)), None);
    }

    #[test]
    fn test_input_event_payload() {
        let event = InputTextEvent::Input("a\nb".into());
        assert_eq!(InputTextEvent::SOURCE, "input-text");
        assert_eq!(event.name(), "input");
        assert_eq!(event.payload(), "\"a\\nb\"");
    }
}

//! Small DOM utilities shared by the job submission component.
//!
//! - **User feedback**: temporary "toast" notifications for validation and
//!   submission errors. Toasts are the only user-visible error channel;
//!   transient poll failures never reach them.
//! - **Form access**: reading the current value out of a referenced
//!   `<select>` or `<input>` without panicking when the node is absent.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Displays a temporary notification message at the bottom of the screen.
///
/// Injects a styled `div` into `document.body` and removes it again after
/// a few seconds. Does nothing outside a browser context.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    let toast: HtmlElement = toast.unchecked_into();
    let style = toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "24px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", "rgba(20, 20, 20, 0.85)").ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 18px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-family", "sans-serif").ok();

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(4000).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}

/// Current value of a referenced `<select>`, or an empty string when the
/// node is not mounted.
pub fn select_value(node: &NodeRef) -> String {
    node.cast::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

/// Current value of a referenced `<input>`, or an empty string when the
/// node is not mounted.
pub fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

//! Transient confirmation shown after a case is created.

const TOAST_MILLIS: u32 = 3000;

/// Appends a `.toast` element to the page body and removes it after three
/// seconds. A page without a body gets no toast.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_class_name("toast");
    toast.set_text_content(Some(message));
    if body.append_child(&toast).is_err() {
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
        toast.remove();
    });
}

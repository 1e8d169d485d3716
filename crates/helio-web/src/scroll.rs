use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Owned scroll listener. Computes normalized page scroll progress and
/// hands it to a callback on every scroll event. The listener is removed
/// on `detach` or when the observer is dropped.
pub struct ScrollObserver {
    target: web_sys::EventTarget,
    closure: Closure<dyn FnMut()>,
}

impl ScrollObserver {
    /// Attach to the window scroll event. The callback fires once
    /// immediately with the current progress, then on every scroll.
    pub fn attach(mut on_progress: impl FnMut(f32) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        if let Some(progress) = read_progress(&window) {
            on_progress(progress);
        }

        let win = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(progress) = read_progress(&win) {
                on_progress(progress);
            }
        }) as Box<dyn FnMut()>);

        let target: web_sys::EventTarget = window.into();
        target.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;

        Ok(Self { target, closure })
    }

    /// Remove the scroll listener. Safe to call more than once.
    pub fn detach(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref());
    }
}

impl Drop for ScrollObserver {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Progress = scroll_y / scrollable track length, clamped to [0, 1].
/// The track is scroll_height minus the viewport height, floored at 1
/// so unscrollable pages report 0 instead of dividing by zero.
fn read_progress(window: &web_sys::Window) -> Option<f32> {
    let scroll_y = window.scroll_y().ok()? as f32;
    let root = window.document()?.document_element()?;
    let scroll_height = root.scroll_height() as f32;
    let inner_height = window.inner_height().ok()?.as_f64()? as f32;
    let track = (scroll_height - inner_height).max(1.0);
    Some((scroll_y / track).clamp(0.0, 1.0))
}

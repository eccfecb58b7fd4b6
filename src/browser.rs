//! Thin bindings over the browser environment.
//!
//! Everything here degrades to a no-op or an error on native targets so the
//! state logic stays testable off the browser.

use std::time::Duration;

use crate::error::{LandingError, LandingResult};
use crate::types::SectionId;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Distance from the viewport top to the section's top edge, in CSS pixels.
/// `None` when the element is not in the document.
#[cfg(target_arch = "wasm32")]
pub fn section_top(section: SectionId) -> Option<f64> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(section.anchor_id())?;
    Some(element.get_bounding_client_rect().top())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn section_top(_section: SectionId) -> Option<f64> {
    None
}

/// A `scroll` listener on `window`, removed again when dropped.
#[cfg(target_arch = "wasm32")]
pub struct ScrollListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl ScrollListener {
    pub fn attach(handler: impl FnMut() + 'static) -> LandingResult<Self> {
        let window = web_sys::window().ok_or(LandingError::NoWindow)?;
        window.document().ok_or(LandingError::NoDocument)?;

        let callback = Closure::<dyn FnMut()>::new(handler);
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(Self { window, callback })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            tracing::warn!("failed to detach scroll listener: {}", LandingError::from(err));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct ScrollListener;

#[cfg(not(target_arch = "wasm32"))]
impl ScrollListener {
    pub fn attach(_handler: impl FnMut() + 'static) -> LandingResult<Self> {
        Err(LandingError::NoWindow)
    }
}

/// Suspend the current task for `duration`.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .ok_or(LandingError::NoWindow)
            .and_then(|window| {
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
                    .map_err(LandingError::from)
            });
        if let Err(err) = scheduled {
            // Resolve right away rather than leave the task parked forever
            tracing::warn!("setTimeout unavailable: {}", err);
            let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

pub fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_full_year() as i32
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use chrono::Datelike;
        chrono::Local::now().year()
    }
}

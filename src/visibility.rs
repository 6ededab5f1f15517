use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::timeline::OneShot;

/// An `IntersectionObserver` that reports the first time its target crosses
/// the threshold and then stops watching. Dropping it disconnects the
/// observer, so no callback can run against a torn-down component.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatch {
    pub fn first_crossing(
        target: &Element,
        threshold: f64,
        on_visible: Callback<()>,
    ) -> Result<Self, JsValue> {
        let mut guard = OneShot::default();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let crossed = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if crossed && guard.fire() {
                observer.disconnect();
                on_visible.emit(());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Emits `on_visible` once, the first time `node` is at least `threshold`
/// in view. If the observer can't be set up the callback fires right away so
/// the content never stays hidden.
#[hook]
pub fn use_first_visible(node: NodeRef, threshold: f64, on_visible: Callback<()>) {
    use_effect_with_deps(
        move |_| {
            let watch = match node.cast::<Element>() {
                Some(target) => {
                    match VisibilityWatch::first_crossing(&target, threshold, on_visible.clone()) {
                        Ok(watch) => {
                            debug!("Watching visibility at threshold {}", threshold);
                            Some(watch)
                        }
                        Err(err) => {
                            error!("IntersectionObserver unavailable: {:?}", err);
                            on_visible.emit(());
                            None
                        }
                    }
                }
                None => {
                    warn!("Visibility target not mounted, revealing immediately");
                    on_visible.emit(());
                    None
                }
            };
            move || drop(watch)
        },
        (),
    );
}

//! One-shot viewport reveal. Elements tagged with the marker class start
//! hidden and get the reveal class the first time they cross into view; they
//! never revert.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Marker class put on animatable elements in the markup.
pub const REVEAL_TARGET_CLASS: &str = "animate-on-scroll";
/// Initial hidden state, added when the element is registered. It stays on
/// after reveal; the reveal animation's forwards fill overrides it, which
/// keeps the element hidden through any per-element animation delay.
pub const REVEAL_HIDDEN_CLASS: &str = "awaiting-reveal";
/// Added once, the first time the element intersects.
pub const REVEAL_VISIBLE_CLASS: &str = "revealed";

const REVEAL_THRESHOLD: f64 = 0.1;
// Negative bottom margin so the reveal fires slightly before full entry.
const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Owns the intersection observer and the callback backing it. Dropping the
/// struct alone would leak the observer; call [`RevealObserver::disconnect`]
/// from the effect destructor.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    /// Register every `.animate-on-scroll` element in the document and start
    /// watching. Returns `None` outside a browser document or if observer
    /// construction fails.
    pub fn observe_all(document: &Document) -> Option<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        reveal(&entry.target());
                        observer.unobserve(&entry.target());
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;

        let targets = document
            .query_selector_all(&format!(".{REVEAL_TARGET_CLASS}"))
            .ok()?;
        for index in 0..targets.length() {
            if let Some(element) = targets
                .get(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                let _ = element.class_list().add_1(REVEAL_HIDDEN_CLASS);
                observer.observe(&element);
            }
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }

    /// Stop watching all remaining targets. Revealed elements keep their
    /// class.
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

fn reveal(element: &Element) {
    let _ = element.class_list().add_1(REVEAL_VISIBLE_CLASS);
}

pub mod pointer;
pub mod resize;
pub mod touch;

pub use pointer::wire_pointer;
pub use resize::wire_resize;
pub use touch::wire_touch;

use crate::core::FrameDriver;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedDriver = Rc<RefCell<FrameDriver<StdRng>>>;

/// An attached event listener that can be removed again.
///
/// Keeps the closure alive for as long as the subscription exists;
/// [`Listener::detach`] unsubscribes and then drops it.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    /// Subscribe `handler` to `kind` events on `target`. The event is cast
    /// to `E` without a runtime check; the event kind determines its type.
    pub fn attach<E>(
        target: &web::EventTarget,
        kind: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> Option<Self>
    where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            handler(ev.unchecked_into::<E>());
        }) as Box<dyn FnMut(web::Event)>);
        if let Err(e) = target.add_event_listener_with_callback(kind, as_function(&closure)) {
            log::error!("[events] could not subscribe to {}: {:?}", kind, e);
            return None;
        }
        Some(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    pub fn detach(self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, as_function(&self.closure));
    }
}

#[inline]
fn as_function(closure: &Closure<dyn FnMut(web::Event)>) -> &js_sys::Function {
    closure.as_ref().unchecked_ref()
}

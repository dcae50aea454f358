use super::{Listener, SharedDriver};
use crate::dom;
use web_sys as web;

/// Track the pointer anywhere over the page; leaving the document releases
/// it so particles settle back.
pub fn wire_pointer(
    window: &web::Window,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    driver: &SharedDriver,
) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(2);

    let move_driver = driver.clone();
    let move_canvas = canvas.clone();
    listeners.extend(Listener::attach(
        window,
        "pointermove",
        move |ev: web::PointerEvent| {
            let pos = dom::canvas_point(&move_canvas, ev.client_x() as f64, ev.client_y() as f64);
            move_driver.borrow_mut().pointer_move(pos);
        },
    ));

    // `pointerleave` does not fire on window; the root element sees the
    // pointer exit the viewport
    if let Some(root) = document.document_element() {
        let leave_driver = driver.clone();
        listeners.extend(Listener::attach(
            &root,
            "pointerleave",
            move |_ev: web::PointerEvent| {
                leave_driver.borrow_mut().pointer_leave();
            },
        ));
    }

    listeners
}

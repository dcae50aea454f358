use super::{Listener, SharedDriver};
use crate::dom;
use web_sys as web;

/// Resize the backing store and reseed the field whenever the window
/// changes size.
pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    driver: &SharedDriver,
) -> Option<Listener> {
    let window_resize = window.clone();
    let canvas = canvas.clone();
    let ctx = ctx.clone();
    let driver = driver.clone();
    Listener::attach(window, "resize", move |_ev: web::Event| {
        let size = dom::sync_surface(&window_resize, &canvas, &ctx);
        driver.borrow_mut().resize(size);
    })
}

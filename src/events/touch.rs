use super::{Listener, SharedDriver};
use crate::dom;
use web_sys as web;

pub fn wire_touch(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    driver: &SharedDriver,
) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(2);

    let move_driver = driver.clone();
    let move_canvas = canvas.clone();
    listeners.extend(Listener::attach(
        window,
        "touchmove",
        move |ev: web::TouchEvent| match ev.touches().get(0) {
            Some(t) => {
                let pos = dom::canvas_point(&move_canvas, t.client_x() as f64, t.client_y() as f64);
                move_driver.borrow_mut().touch_move(&[pos]);
            }
            None => move_driver.borrow_mut().touch_move(&[]),
        },
    ));

    let end_driver = driver.clone();
    listeners.extend(Listener::attach(
        window,
        "touchend",
        move |_ev: web::TouchEvent| {
            end_driver.borrow_mut().touch_end();
        },
    ));

    listeners
}

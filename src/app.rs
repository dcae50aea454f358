use crate::constants::CANVAS_ID;
use crate::core::{FieldParams, FrameDriver};
use crate::events::{self, Listener, SharedDriver};
use crate::{dom, frame, render};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

thread_local! {
    // Field mounted by `start()` onto the page's default canvas.
    static AUTO_MOUNTED: RefCell<Option<FieldHandle>> = const { RefCell::new(None) };
}

struct Mounted {
    driver: SharedDriver,
    frame_loop: frame::FrameLoop,
    listeners: Vec<Listener>,
}

/// A particle field running on one canvas. Unmounts when freed.
#[wasm_bindgen]
pub struct FieldHandle {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl FieldHandle {
    /// Stop the animation and remove every listener. Idempotent.
    pub fn unmount(&mut self) {
        let Some(m) = self.inner.take() else {
            return;
        };
        m.frame_loop.stop();
        m.driver.borrow_mut().cancel();
        for l in m.listeners {
            l.detach();
        }
        log::info!("[mount] unmounted");
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.inner.is_some()
    }
}

impl Drop for FieldHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-field starting");

    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    match dom::find_canvas(&document, CANVAS_ID) {
        Some(canvas) => match mount_canvas(canvas) {
            Ok(handle) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle)),
            Err(e) => log::error!("mount error: {:?}", e),
        },
        None => log::info!("no #{} canvas; waiting for mount()", CANVAS_ID),
    }
    Ok(())
}

/// Mount a field onto `canvas`. Keep the handle; freeing it unmounts.
#[wasm_bindgen]
pub fn mount(canvas: web::HtmlCanvasElement) -> Result<FieldHandle, JsValue> {
    mount_canvas(canvas).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

/// Unmount the field `start()` attached to the default canvas, if any.
#[wasm_bindgen]
pub fn stop() {
    if let Some(mut handle) = AUTO_MOUNTED.with(|slot| slot.borrow_mut().take()) {
        handle.unmount();
    }
}

fn mount_canvas(canvas: web::HtmlCanvasElement) -> anyhow::Result<FieldHandle> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let ctx = dom::context_2d(&canvas)?;

    let driver: SharedDriver = Rc::new(RefCell::new(FrameDriver::from_entropy(
        FieldParams::default(),
    )));
    let mut painter = render::CanvasPainter::new(ctx.clone());
    let size = dom::sync_surface(&window, &canvas, &ctx);
    driver.borrow_mut().mount(size, &mut painter);

    let mut listeners = Vec::new();
    listeners.extend(events::wire_resize(&window, &canvas, &ctx, &driver));
    listeners.extend(events::wire_pointer(&window, &document, &canvas, &driver));
    listeners.extend(events::wire_touch(&window, &canvas, &driver));

    let frame_loop = frame::start_loop(driver.clone(), painter);
    log::info!(
        "[mount] {:.0}x{:.0} particles={} listeners={}",
        size.width,
        size.height,
        driver.borrow().field().particles().len(),
        listeners.len()
    );

    Ok(FieldHandle {
        inner: Some(Mounted {
            driver,
            frame_loop,
            listeners,
        }),
    })
}

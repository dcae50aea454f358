use crate::core::SurfaceSize;
use anyhow::anyhow;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn find_canvas(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow!("canvas has no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("unexpected context object: {:?}", e))
}

/// Logical size of the canvas: its layout box, or the viewport when the
/// element has not been laid out yet.
fn logical_size(window: &web::Window, canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    let rect = canvas.get_bounding_client_rect();
    if rect.width() > 0.0 && rect.height() > 0.0 {
        return SurfaceSize::new(rect.width() as f32, rect.height() as f32);
    }
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    SurfaceSize::new(w as f32, h as f32)
}

/// Match the backing store to CSS size * devicePixelRatio and scale the
/// context so all later drawing happens in logical pixels.
pub fn sync_surface(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> SurfaceSize {
    let dpr = SurfaceSize::backing_scale(window.device_pixel_ratio());
    let size = logical_size(window, canvas);
    canvas.set_width(((size.width as f64 * dpr) as u32).max(1));
    canvas.set_height(((size.height as f64 * dpr) as u32).max(1));
    // assigning width/height resets the transform, so reapply it every time
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    log::debug!(
        "[dom] surface {:.0}x{:.0} dpr={:.2}",
        size.width,
        size.height,
        dpr
    );
    size
}

/// Client coordinates to logical canvas coordinates.
#[inline]
pub fn canvas_point(canvas: &web::HtmlCanvasElement, client_x: f64, client_y: f64) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        (client_x - rect.left()) as f32,
        (client_y - rect.top()) as f32,
    )
}

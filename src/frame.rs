use crate::constants::FRAME_STATS_INTERVAL;
use crate::events::SharedDriver;
use crate::render::CanvasPainter;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Rolling wall-clock frame time, logged at debug level.
struct FrameStats {
    window_start: Instant,
    frames: u32,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
        }
    }

    fn record(&mut self, particles: usize, pulses: usize) {
        self.frames += 1;
        if self.frames < FRAME_STATS_INTERVAL {
            return;
        }
        let elapsed = self.window_start.elapsed();
        let mean_ms = elapsed.as_secs_f64() * 1000.0 / self.frames as f64;
        log::debug!(
            "[frame] mean {:.2} ms over {} frames (particles={} pulses={})",
            mean_ms,
            self.frames,
            particles,
            pulses
        );
        *self = Self::new();
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running requestAnimationFrame loop.
pub struct FrameLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Cancel the queued frame and drop the tick closure. Safe to call more
    /// than once.
    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure's reference to its own slot
        self.tick.borrow_mut().take();
    }
}

fn schedule(slot: &TickSlot, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = slot.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(driver: SharedDriver, mut painter: CanvasPainter) -> FrameLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    let mut stats = FrameStats::new();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        let ran = {
            let mut d = driver.borrow_mut();
            let ran = d.frame(&mut painter);
            if ran {
                stats.record(d.field().particles().len(), d.field().pulses().len());
            }
            ran
        };
        if ran {
            schedule(&tick_clone, &pending_clone);
        }
    }) as Box<dyn FnMut()>));

    schedule(&tick, &pending);
    FrameLoop { tick, pending }
}

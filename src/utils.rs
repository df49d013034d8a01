use std::cell::RefCell;
use std::rc::Rc;
use gloo::render::{request_animation_frame, AnimationFrame};
use log::warn;
use web_sys::window;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn prefers_reduced_motion() -> bool {
    let Some(window) = window() else {
        return false;
    };
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(list)) => list.matches(),
        Ok(None) => false,
        Err(e) => {
            warn!("matchMedia failed: {:?}", e);
            false
        }
    }
}

/// Pending double `requestAnimationFrame`. Dropping it cancels whichever
/// frame has not fired yet.
pub struct NextPaint {
    _outer: AnimationFrame,
    inner: Rc<RefCell<Option<AnimationFrame>>>,
}

impl Drop for NextPaint {
    fn drop(&mut self) {
        self.inner.borrow_mut().take();
    }
}

/// Runs `f` on the frame after the next one, so styles committed before the
/// call have been computed at least once when `f` runs.
pub fn after_next_paint<F>(f: F) -> NextPaint
where
    F: FnOnce() + 'static,
{
    let inner = Rc::new(RefCell::new(None));
    let slot = inner.clone();
    let outer = request_animation_frame(move |_| {
        let frame = request_animation_frame(move |_| f());
        *slot.borrow_mut() = Some(frame);
    });
    NextPaint { _outer: outer, inner }
}

pub fn scale_style(scale: f64) -> String {
    format!("transform: scale({}); transition: transform 0.15s ease-out;", scale)
}

//! Smooth scrolling for in-page navigation.
//!
//! Frames are chained timeouts, each scheduling the next until the animation
//! completes, so nothing has to be owned or cancelled by the caller.

use gloo_console as console;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub const SCROLL_DURATION_MS: f64 = 1000.0;
const FRAME_MS: u32 = 16;

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    distance: f64,
    started_at: f64,
    duration: f64,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, started_at: f64) -> Self {
        Self {
            from,
            distance: to - from,
            started_at,
            duration: SCROLL_DURATION_MS,
        }
    }

    /// Fraction of the animation elapsed at `now`, within `[0, 1]`.
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    pub fn position_at(&self, now: f64) -> f64 {
        self.from + self.distance * ease_in_out_cubic(self.progress(now))
    }

    pub fn finished_at(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

pub fn window_scroll_y() -> f64 {
    gloo_utils::window().scroll_y().unwrap_or_default()
}

pub fn scroll_to_section(id: &str) {
    let target = gloo_utils::document()
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    match target {
        Some(element) => animate_to(element.offset_top() as f64),
        None => console::log!(format!("no section with id {id:?} to scroll to")),
    }
}

pub fn scroll_to_top() {
    animate_to(0.0);
}

fn animate_to(target: f64) {
    step(ScrollAnimation::new(
        window_scroll_y(),
        target,
        js_sys::Date::now(),
    ));
}

fn step(animation: ScrollAnimation) {
    let now = js_sys::Date::now();
    gloo_utils::window().scroll_to_with_x_and_y(0.0, animation.position_at(now));

    if !animation.finished_at(now) {
        Timeout::new(FRAME_MS, move || step(animation)).forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert!(ease_in_out_cubic(0.0).abs() < EPSILON);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < EPSILON);
        assert!((ease_in_out_cubic(1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn easing_is_symmetric_and_monotonic() {
        let mut previous = 0.0;
        for step in 0..=100 {
            let t = f64::from(step) / 100.0;
            let eased = ease_in_out_cubic(t);
            assert!((eased + ease_in_out_cubic(1.0 - t) - 1.0).abs() < EPSILON);
            assert!(eased >= previous);
            previous = eased;
        }
    }

    #[test]
    fn animation_moves_from_start_to_target() {
        let animation = ScrollAnimation::new(200.0, 1200.0, 5000.0);

        assert!((animation.position_at(5000.0) - 200.0).abs() < EPSILON);
        assert!((animation.position_at(5500.0) - 700.0).abs() < EPSILON);
        assert!((animation.position_at(6000.0) - 1200.0).abs() < EPSILON);
        assert!(!animation.finished_at(5999.0));
        assert!(animation.finished_at(6000.0));
    }

    #[test]
    fn progress_is_clamped() {
        let animation = ScrollAnimation::new(800.0, 0.0, 1000.0);

        assert_eq!(animation.progress(0.0), 0.0);
        assert_eq!(animation.progress(10_000.0), 1.0);
        assert!((animation.position_at(10_000.0)).abs() < EPSILON);
    }

    #[test]
    fn scrolling_up_mirrors_scrolling_down() {
        let down = ScrollAnimation::new(0.0, 1000.0, 0.0);
        let up = ScrollAnimation::new(1000.0, 0.0, 0.0);

        for now in [100.0, 250.0, 600.0, 900.0] {
            assert!((down.position_at(now) + up.position_at(now) - 1000.0).abs() < EPSILON);
        }
    }
}

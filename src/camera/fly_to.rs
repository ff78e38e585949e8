//! Animated translation toward a target ("fly-to").
//!
//! The animation is a task the host drives by calling
//! [`CameraController::tick_animation`] from its timer or frame loop. At most
//! one task exists; starting another cancels the first.

use glam::Vec3;
use web_time::{Duration, Instant};

use super::controller::CameraController;
use crate::util::easing::EasingFunction;

/// Total length of a fly-to.
pub const FLY_TO_DURATION: Duration = Duration::from_millis(1000);

/// Minimum spacing between two animation steps (about 60 Hz).
pub const FLY_TO_TICK: Duration = Duration::from_micros(16_600);

/// Identifies one fly-to; a new token is issued for every start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationToken(u64);

pub(crate) struct FlyTo {
    token: AnimationToken,
    start: Instant,
    last_tick: Instant,
    delta: Vec3,
    progress: f32,
    easing: EasingFunction,
    redraw: Box<dyn FnMut()>,
}

impl FlyTo {
    /// Advance to `now`.
    ///
    /// Returns the translation increment and whether the end was reached, or
    /// `None` when called again before a tick interval has passed.
    fn step(&mut self, now: Instant) -> Option<(Vec3, bool)> {
        if now.saturating_duration_since(self.last_tick) < FLY_TO_TICK {
            return None;
        }
        self.last_tick = now;
        let elapsed = now.saturating_duration_since(self.start);
        let eased = self
            .easing
            .evaluate(elapsed.as_secs_f32() / FLY_TO_DURATION.as_secs_f32());
        let increment = eased - self.progress;
        self.progress = eased;
        Some((self.delta * increment, eased >= 1.0))
    }
}

impl CameraController {
    /// Animate the translation to `target` with ease-out quartic easing.
    ///
    /// `redraw` runs once per animation step. Any fly-to already running is
    /// cancelled first.
    pub fn fly_to(
        &mut self,
        target: Vec3,
        now: Instant,
        redraw: impl FnMut() + 'static,
    ) -> AnimationToken {
        self.fly_to_with_easing(target, EasingFunction::QuarticOut, now, redraw)
    }

    /// [`fly_to`](Self::fly_to) with an explicit easing curve.
    pub fn fly_to_with_easing(
        &mut self,
        target: Vec3,
        easing: EasingFunction,
        now: Instant,
        redraw: impl FnMut() + 'static,
    ) -> AnimationToken {
        if let Some(previous) = self.cancel_fly_to() {
            log::debug!("fly-to {previous:?} superseded");
        }
        self.next_animation += 1;
        let token = AnimationToken(self.next_animation);
        self.fly_to = Some(FlyTo {
            token,
            start: now,
            last_tick: now,
            delta: target - self.state.translation,
            progress: 0.0,
            easing,
            redraw: Box::new(redraw),
        });
        log::debug!("fly-to {token:?} toward {target}");
        token
    }

    /// Advance the running fly-to, if any.
    ///
    /// Each step adds only the change in eased progress to the translation,
    /// so edits made to the translation mid-flight are kept rather than
    /// overwritten. Returns whether an animation is still running.
    pub fn tick_animation(&mut self, now: Instant) -> bool {
        let Some(mut task) = self.fly_to.take() else {
            return false;
        };
        let Some((increment, finished)) = task.step(now) else {
            self.fly_to = Some(task);
            return true;
        };
        self.state.translation += increment;
        self.refresh_after_translation();
        (task.redraw)();
        log::trace!("fly-to {:?} at {:.3}", task.token, task.progress);
        if finished {
            log::debug!("fly-to {:?} finished", task.token);
            return false;
        }
        self.fly_to = Some(task);
        true
    }

    /// Stop the running fly-to where it is, returning its token.
    pub fn cancel_fly_to(&mut self) -> Option<AnimationToken> {
        self.fly_to.take().map(|task| task.token)
    }

    /// Whether a fly-to is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.fly_to.is_some()
    }

    /// Token of the running fly-to.
    #[must_use]
    pub fn active_animation(&self) -> Option<AnimationToken> {
        self.fly_to.as_ref().map(|task| task.token)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::camera::{ProjectionMode, MIN_DOLLY};
    use crate::options::CameraOptions;

    fn camera(projection: ProjectionMode) -> CameraController {
        let options = CameraOptions {
            projection,
            ..CameraOptions::default()
        };
        let mut camera = CameraController::with_viewport(&options, 800.0, 600.0);
        camera.set_translation(Vec3::new(0.0, 0.0, 30.0));
        camera
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, move || handle.set(handle.get() + 1))
    }

    fn run_to_end(camera: &mut CameraController, start: Instant) -> u32 {
        let mut ticks = 0;
        let mut now = start;
        while camera.is_animating() && ticks < 1000 {
            now += Duration::from_millis(17);
            let _ = camera.tick_animation(now);
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn reaches_target() {
        for projection in [ProjectionMode::Perspective, ProjectionMode::Orthographic] {
            let mut camera = camera(projection);
            let start = Instant::now();
            let (redraws, redraw) = counter();
            let target = Vec3::new(4.0, -2.0, 12.0);
            let _ = camera.fly_to(target, start, redraw);

            let ticks = run_to_end(&mut camera, start);

            assert!(!camera.is_animating());
            assert!(camera.translation().distance(target) < 1e-4);
            assert_eq!(redraws.get(), ticks);
            // 1000 ms at 17 ms per tick
            assert_eq!(ticks, 59);
        }
    }

    #[test]
    fn flight_to_zero_dolly_stops_at_the_floor() {
        for projection in [ProjectionMode::Perspective, ProjectionMode::Orthographic] {
            let mut camera = camera(projection);
            let start = Instant::now();
            let _ = camera.fly_to(Vec3::new(1.0, 2.0, 0.0), start, || {});
            let _ = run_to_end(&mut camera, start);

            let end = camera.translation();
            assert!(end.z >= MIN_DOLLY, "dolly {}", end.z);
            assert!((end.truncate() - glam::Vec2::new(1.0, 2.0)).length() < 1e-4);
            assert!(camera.view_matrix().is_finite());
            assert!(camera.projection_matrix().is_finite());
            assert!(camera.project(Vec3::ZERO).is_finite());
        }
    }

    #[test]
    fn early_ticks_are_ignored() {
        let mut camera = camera(ProjectionMode::Perspective);
        let start = Instant::now();
        let (redraws, redraw) = counter();
        let _ = camera.fly_to(Vec3::new(1.0, 0.0, 30.0), start, redraw);
        assert!(camera.tick_animation(start + Duration::from_millis(5)));
        assert_eq!(redraws.get(), 0);
        assert_eq!(camera.translation(), Vec3::new(0.0, 0.0, 30.0));
        assert!(camera.tick_animation(start + Duration::from_millis(20)));
        assert_eq!(redraws.get(), 1);
        assert!(camera.translation().x > 0.0);
    }

    #[test]
    fn new_fly_to_cancels_previous() {
        let mut camera = camera(ProjectionMode::Perspective);
        let start = Instant::now();
        let (first_redraws, first) = counter();
        let first_token = camera.fly_to(Vec3::new(10.0, 0.0, 30.0), start, first);
        let _ = camera.tick_animation(start + Duration::from_millis(100));
        let (_, second) = counter();
        let target = Vec3::new(-5.0, 5.0, 20.0);
        let second_token = camera.fly_to(target, start + Duration::from_millis(100), second);

        assert_ne!(first_token, second_token);
        assert_eq!(camera.active_animation(), Some(second_token));
        let _ = run_to_end(&mut camera, start + Duration::from_millis(100));
        assert_eq!(first_redraws.get(), 1);
        assert!(camera.translation().distance(target) < 1e-4);
    }

    #[test]
    fn interleaved_pan_is_kept() {
        let mut camera = camera(ProjectionMode::Perspective);
        let start = Instant::now();
        let target = Vec3::new(6.0, 0.0, 30.0);
        let _ = camera.fly_to(target, start, || {});
        let _ = camera.tick_animation(start + Duration::from_millis(300));
        let mid = camera.translation();
        camera.set_translation(mid + Vec3::new(0.0, 1.0, 0.0));
        let _ = run_to_end(&mut camera, start + Duration::from_millis(300));
        assert!(camera.translation().distance(target + Vec3::Y) < 1e-4);
    }

    #[test]
    fn cancel_stops_in_place() {
        let mut camera = camera(ProjectionMode::Perspective);
        let start = Instant::now();
        let token = camera.fly_to(Vec3::new(6.0, 0.0, 30.0), start, || {});
        let _ = camera.tick_animation(start + Duration::from_millis(200));
        let here = camera.translation();
        assert_eq!(camera.cancel_fly_to(), Some(token));
        assert!(!camera.tick_animation(start + Duration::from_millis(400)));
        assert_eq!(camera.translation(), here);
    }

    #[test]
    fn reset_view_cancels() {
        let mut camera = camera(ProjectionMode::Perspective);
        let _ = camera.fly_to(Vec3::ONE, Instant::now(), || {});
        camera.reset_view();
        assert!(!camera.is_animating());
    }

    #[test]
    fn linear_easing_moves_evenly() {
        let mut camera = camera(ProjectionMode::Perspective);
        let start = Instant::now();
        let _ = camera.fly_to_with_easing(
            Vec3::new(10.0, 0.0, 30.0),
            EasingFunction::Linear,
            start,
            || {},
        );
        let _ = camera.tick_animation(start + Duration::from_millis(500));
        assert!((camera.translation().x - 5.0).abs() < 1e-3);
    }
}

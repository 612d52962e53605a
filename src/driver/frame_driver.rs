use crate::camera::Camera3d;
use crate::driver::FrameClock;
use crate::scene::SceneRoot;
use std::f64::consts::TAU;

/// Rate, relative to the first renderable, added per position in the scene.
pub const SPEED_STEP: f64 = 0.1;

/// The rotation angle, in radians, of the `index`-th renderable after
/// `elapsed` seconds.
///
/// The first renderable turns at one radian per second and every following
/// one a tenth faster than the first. The angle is not wrapped.
#[inline]
pub fn rotation_angle(elapsed: f64, index: usize) -> f64 {
    elapsed * (1.0 + index as f64 * SPEED_STEP)
}

/// Wraps `angle` into `[0, 2π)` before narrowing it to `f32`.
#[inline]
fn wrapped_angle(angle: f64) -> f32 {
    angle.rem_euclid(TAU) as f32
}

/// The host side of the frame loop: draws the scene and waits for the next
/// display refresh.
///
/// Implemented by [`Window`](crate::window::Window). Frames never leave the
/// thread that owns the scene, so the returned future is not `Send`.
#[allow(async_fn_in_trait)]
pub trait FramePresenter {
    /// Draws `root` seen from `camera`, then yields until the next frame.
    ///
    /// Returns `false`, without drawing anything, when the loop should stop.
    async fn present(&mut self, root: &SceneRoot, camera: &dyn Camera3d) -> bool;
}

/// Spins every renderable of a scene, once per frame.
pub struct FrameDriver<C: FrameClock> {
    clock: C,
    frames: u64,
}

impl<C: FrameClock> FrameDriver<C> {
    pub fn new(clock: C) -> Self {
        FrameDriver { clock, frames: 0 }
    }

    /// Number of frames the presenter accepted so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Sets the X and Y rotation of every renderable from `elapsed`.
    ///
    /// Renderables are indexed in insertion order. Angles are stored wrapped
    /// into `[0, 2π)`.
    pub fn update(&self, root: &mut SceneRoot, elapsed: f64) {
        for (i, renderable) in root.iter_mut().enumerate() {
            let angle = wrapped_angle(rotation_angle(elapsed, i));
            let rotation = &mut renderable.transform_mut().rotation;
            rotation.x = angle;
            rotation.y = angle;
        }
    }

    /// Samples the clock and updates `root`, returning the time used.
    pub fn step(&mut self, root: &mut SceneRoot) -> f64 {
        let elapsed = self.clock.elapsed();
        self.update(root, elapsed);
        elapsed
    }

    /// Updates and presents frames until `presenter` asks to stop.
    ///
    /// Each iteration awaits the presenter exactly once, so the loop advances
    /// at the pace of the host's frames. Returns the number of frames the
    /// presenter accepted during this call. The call that stops the loop
    /// draws nothing and is not counted.
    pub async fn run<P: FramePresenter>(
        &mut self,
        presenter: &mut P,
        root: &mut SceneRoot,
        camera: &dyn Camera3d,
    ) -> u64 {
        let first = self.frames;

        loop {
            let elapsed = self.step(root);
            if self.frames == first {
                log::debug!(
                    "first frame at t = {elapsed:.3}s with {} renderables",
                    root.len()
                );
            }

            if !presenter.present(root, camera).await {
                break;
            }
            self.frames += 1;
            log::trace!("frame {} presented at t = {elapsed:.3}s", self.frames);
        }

        log::info!("frame loop ended after {} frames", self.frames - first);
        self.frames - first
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::FixedStepClock;
    use crate::procedural::unit_cuboid;
    use crate::resource::MeshMaterial;
    use crate::scene::Transform;
    use approx::assert_relative_eq;
    use std::rc::Rc;

    #[test]
    fn angle_grows_a_tenth_faster_per_index() {
        assert_eq!(rotation_angle(0.0, 7), 0.0);
        assert_eq!(rotation_angle(2.0, 0), 2.0);
        assert_relative_eq!(rotation_angle(1.0, 1), 1.1);
        assert_relative_eq!(rotation_angle(1.0, 2), 1.2);
        assert_relative_eq!(rotation_angle(10.0, 10), 20.0);
    }

    #[test]
    fn stored_angles_wrap_into_one_turn() {
        assert_relative_eq!(wrapped_angle(TAU + 0.5), 0.5, epsilon = 1e-6);
        assert_relative_eq!(wrapped_angle(20.0), (20.0 - 3.0 * TAU) as f32, epsilon = 1e-6);
        assert_eq!(wrapped_angle(0.0), 0.0);
    }

    #[test]
    fn consecutive_frames_differ_after_days_of_running() {
        let mut root = SceneRoot::new();
        let id = root.add(
            Rc::new(unit_cuboid()),
            MeshMaterial::default(),
            Transform::IDENTITY,
        );
        let mut driver = FrameDriver::new(FixedStepClock::starting_at(700_000.0, 1.0 / 60.0));

        let angles: Vec<f32> = (0..4)
            .map(|_| {
                driver.step(&mut root);
                root.get(id).unwrap().transform().rotation.x
            })
            .collect();

        for pair in angles.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
        assert!(angles.iter().all(|a| (0.0..std::f32::consts::TAU).contains(a)));
    }

    #[test]
    fn update_sets_x_and_y_only() {
        let mut root = SceneRoot::new();
        let id = root.add(
            Rc::new(unit_cuboid()),
            MeshMaterial::default(),
            Transform::IDENTITY,
        );
        let driver = FrameDriver::new(FixedStepClock::new(1.0));

        driver.update(&mut root, 3.0);

        let t = root.get(id).unwrap().transform();
        assert_eq!(t.rotation.x, 3.0);
        assert_eq!(t.rotation.y, 3.0);
        assert_eq!(t.rotation.z, 0.0);
        assert_eq!(t.position, glamx::Vec3::ZERO);
    }

    #[test]
    fn update_on_an_empty_scene_is_a_no_op() {
        let mut root = SceneRoot::new();
        FrameDriver::new(FixedStepClock::new(1.0)).update(&mut root, 5.0);
        assert!(root.is_empty());
    }
}

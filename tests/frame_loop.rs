//! The demo scene and its frame loop, driven without a GPU.
#![cfg(not(target_arch = "wasm32"))]

use approx::assert_relative_eq;
use cubescene::prelude::*;
use std::collections::HashSet;

/// Stands in for the window: records what each frame would draw, and turns
/// the loop down without drawing once it holds `stop_after` frames.
struct Recorder {
    frames: Vec<Frame>,
    rotations: Vec<Vec<Vec3>>,
    stop_after: usize,
}

impl Recorder {
    fn stopping_after(stop_after: usize) -> Self {
        Recorder {
            frames: Vec::new(),
            rotations: Vec::new(),
            stop_after,
        }
    }
}

impl FramePresenter for Recorder {
    async fn present(&mut self, root: &SceneRoot, camera: &dyn Camera3d) -> bool {
        if self.frames.len() >= self.stop_after {
            return false;
        }
        self.frames.push(Frame::build(root, camera));
        self.rotations
            .push(root.iter().map(|r| r.transform().rotation).collect());
        true
    }
}

fn three_cubes() -> Vec<CubeSpec> {
    vec![
        CubeSpec::new(color::hex(0x44aa88), 0.0),
        CubeSpec::new(color::hex(0x8844aa), -2.0),
        CubeSpec::new(color::hex(0xaa8844), 2.0),
    ]
}

fn assembled(specs: &[CubeSpec]) -> SceneRoot {
    let mut root = SceneRoot::new();
    assemble(&mut root, &Rc::new(unit_cuboid()), specs, Shading::Phong);
    root
}

#[test]
fn assembly_places_one_cube_per_pair() {
    let specs = three_cubes();
    let root = assembled(&specs);

    assert_eq!(root.len(), specs.len());
    let offsets: Vec<f32> = root.iter().map(|r| r.transform().position.x).collect();
    assert_eq!(offsets, vec![0.0, -2.0, 2.0]);
    assert!(root
        .iter()
        .all(|r| r.transform().position.y == 0.0 && r.transform().position.z == 0.0));
}

#[test]
fn reassembling_from_scratch_gives_the_same_layout() {
    let specs = three_cubes();
    let a = assembled(&specs);
    let b = assembled(&specs);

    assert_eq!(a.len(), b.len());
    for (ra, rb) in a.iter().zip(b.iter()) {
        assert_eq!(ra.transform(), rb.transform());
        assert_eq!(ra.material(), rb.material());
    }
}

#[test]
fn cubes_share_geometry_but_not_appearance() {
    let root = assembled(&three_cubes());

    let geometries: HashSet<_> = root.iter().map(|r| r.geometry().id()).collect();
    assert_eq!(geometries.len(), 1);

    let ids: HashSet<_> = root.iter().map(|r| r.id()).collect();
    assert_eq!(ids.len(), 3);

    let colors: Vec<Color> = root.iter().map(|r| r.material().color).collect();
    assert_ne!(colors[0], colors[1]);
    assert_ne!(colors[1], colors[2]);
    assert_ne!(colors[0], colors[2]);
}

#[test]
fn rotations_at_one_second() {
    let mut root = assembled(&three_cubes());
    let driver = FrameDriver::new(FixedStepClock::new(0.0));
    driver.update(&mut root, 1.0);

    let expected = [1.0, 1.1, 1.2];
    for (r, angle) in root.iter().zip(expected) {
        let rotation = r.transform().rotation;
        assert_relative_eq!(rotation.x, angle);
        assert_relative_eq!(rotation.y, angle);
        assert_eq!(rotation.z, 0.0);
    }
}

#[test]
fn same_time_gives_the_same_frame() {
    let camera = PerspectiveCamera3d::default();
    let driver = FrameDriver::new(FixedStepClock::new(0.0));

    let mut a = assembled(&three_cubes());
    let mut b = assembled(&three_cubes());
    driver.update(&mut a, 2.5);
    driver.update(&mut b, 2.5);

    let fa = Frame::build(&a, &camera);
    let fb = Frame::build(&b, &camera);
    assert_eq!(fa.draws.len(), fb.draws.len());
    for (da, db) in fa.draws.iter().zip(&fb.draws) {
        assert_eq!(da.model, db.model);
        assert_eq!(da.color, db.color);
    }
    assert_eq!(Frame::build(&a, &camera), fa);
}

#[test]
fn run_presents_until_the_presenter_stops() {
    let mut root = assembled(&three_cubes());
    let camera = PerspectiveCamera3d::default();
    let mut driver = FrameDriver::new(FixedStepClock::starting_at(1.0, 0.5));
    let mut recorder = Recorder::stopping_after(4);

    let presented = pollster::block_on(driver.run(&mut recorder, &mut root, &camera));

    assert_eq!(presented, 4);
    assert_eq!(driver.frames(), 4);
    assert_eq!(recorder.frames.len(), 4);

    for (k, rotations) in recorder.rotations.iter().enumerate() {
        let t = 1.0 + 0.5 * k as f64;
        for (i, rotation) in rotations.iter().enumerate() {
            let angle = rotation_angle(t, i) as f32;
            assert_eq!(rotation.x, angle);
            assert_eq!(rotation.y, angle);
        }
    }
}

#[test]
fn run_on_an_empty_scene_still_presents() {
    let mut root = SceneRoot::new();
    let camera = PerspectiveCamera3d::default();
    let mut recorder = Recorder::stopping_after(2);

    let presented = pollster::block_on(
        FrameDriver::new(FixedStepClock::new(1.0 / 60.0)).run(&mut recorder, &mut root, &camera),
    );

    assert_eq!(presented, 2);
    assert!(recorder.frames.iter().all(Frame::is_empty));
}

#[test]
fn a_presenter_that_stops_at_once_counts_no_frames() {
    let mut root = assembled(&three_cubes());
    let camera = PerspectiveCamera3d::default();
    let mut driver = FrameDriver::new(FixedStepClock::new(1.0 / 60.0));
    let mut recorder = Recorder::stopping_after(0);

    let presented = pollster::block_on(driver.run(&mut recorder, &mut root, &camera));

    assert_eq!(presented, 0);
    assert_eq!(driver.frames(), 0);
    assert!(recorder.frames.is_empty());
}

#[test]
fn spinning_stays_smooth_after_a_week() {
    let mut root = assembled(&three_cubes());
    let camera = PerspectiveCamera3d::default();
    let mut driver = FrameDriver::new(FixedStepClock::starting_at(700_000.0, 1.0 / 60.0));
    let mut recorder = Recorder::stopping_after(3);

    pollster::block_on(driver.run(&mut recorder, &mut root, &camera));

    for pair in recorder.rotations.windows(2) {
        for (before, after) in pair[0].iter().zip(&pair[1]) {
            assert_ne!(before.x, after.x);
            assert_ne!(before.y, after.y);
        }
    }
}

#[test]
fn stock_demo_matches_its_description() {
    let config = DemoConfig::default();
    assert_eq!(config.canvas.canvas_id, "c");
    assert_eq!(config.cubes, three_cubes());

    let camera = demo::camera(&config.camera, Some((1920, 1080)));
    assert_eq!(camera.fov(), 75.0);
    assert_eq!(camera.aspect(), 2.0);
    assert_eq!(camera.clip_planes(), (0.1, 5.0));
    assert_eq!(camera.eye(), Vec3::new(0.0, 0.0, 2.0));

    let root = demo::scene(&config);
    let light = &root.lights()[0];
    assert_eq!(light.intensity, 3.0);
    assert_eq!(light.position, Vec3::new(-1.0, 2.0, 4.0));
}

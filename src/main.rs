use cubescene::prelude::*;

async fn run(config: DemoConfig) {
    let mut window = match Window::open(&config.canvas).await {
        Ok(window) => window,
        Err(e) => {
            log::error!("cannot open the drawing surface: {e}");
            return;
        }
    };

    let camera = demo::camera(&config.camera, Some((window.width(), window.height())));
    let mut root = demo::scene(&config);

    FrameDriver::new(WallClock::new())
        .run(&mut window, &mut root, &camera)
        .await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    pollster::block_on(run(DemoConfig::default()));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    wasm_bindgen_futures::spawn_local(run(DemoConfig::default()));
}

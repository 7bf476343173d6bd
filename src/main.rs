//! Mabkhara entry point
//!
//! The browser build is driven from JS through `platform::web`. The native
//! binary runs the scene headless and reports what a host would render.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use mabkhara::consts::MAX_LIFE;
    use mabkhara::{QualityPreset, Scene, Settings};

    mabkhara::platform::init_logging();
    log::info!("Mabkhara (native) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    let preset = args
        .next()
        .and_then(|s| QualityPreset::parse(&s))
        .unwrap_or_default();

    let settings = Settings::from_preset(preset);
    let mut scene = Scene::new(seed, &settings);
    log::info!("Seed {} at {} quality", seed, preset.as_str());

    let dt = 1.0 / 60.0;
    let frames = (MAX_LIFE * 2.0 / dt).ceil() as u32;
    for _ in 0..frames {
        scene.frame(dt);
    }

    let visible = scene.pool.iter().filter(|p| p.opacity > 0.01).count();
    let top = scene
        .pool
        .iter()
        .map(|p| p.position.y)
        .fold(f32::NEG_INFINITY, f32::max);

    println!("studs:      {}", scene.studs().len());
    println!("particles:  {}", scene.pool.len());
    println!("frames:     {} ({:.1}s)", frames, scene.elapsed);
    println!("recycled:   {}", scene.pool.recycled);
    println!("visible:    {}", visible);
    println!("plume top:  {:.3}", top);
    println!("body sway:  {:.4} rad", scene.body_sway());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}

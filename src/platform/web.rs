//! Browser bindings
//!
//! The JS host (three.js scene) owns all meshes; it asks for flat float
//! buffers every frame and maps index `i` to its own instance `i`.

use wasm_bindgen::prelude::*;

use crate::renderer::{colors, instance};
use crate::scene::{MODEL_OFFSET, Scene};
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Mabkhara core loaded");
}

#[wasm_bindgen]
pub struct WebScene {
    scene: Scene,
    particles: Vec<instance::ParticleInstance>,
}

impl WebScene {
    fn with_settings(seed: Option<u64>, settings: Settings) -> WebScene {
        let seed = seed.unwrap_or_else(|| (js_sys::Math::random() * u32::MAX as f64) as u64);
        log::info!("Scene seed: {}", seed);
        let scene = Scene::new(seed, &settings);
        let particles = Vec::with_capacity(scene.pool.len());
        WebScene { scene, particles }
    }
}

#[wasm_bindgen]
impl WebScene {
    /// Build from stored settings; a missing seed draws one from `Math.random`
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> WebScene {
        Self::with_settings(seed, Settings::load())
    }

    /// Build from a settings JSON string, falling back to defaults
    #[wasm_bindgen(js_name = fromSettingsJson)]
    pub fn from_settings_json(seed: Option<u64>, json: &str) -> WebScene {
        let settings = match Settings::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Invalid settings JSON ({}), using defaults", e);
                Settings::default()
            }
        };
        Self::with_settings(seed, settings)
    }

    /// Advance by `dt` seconds (one render tick)
    pub fn frame(&mut self, dt: f32) {
        self.scene.frame(dt);
    }

    /// `[x, y, z, scale, rot_x, rot_z, opacity, pad]` per particle
    #[wasm_bindgen(js_name = particleBuffer)]
    pub fn particle_buffer(&mut self) -> Vec<f32> {
        instance::write_particle_instances(&self.scene.pool, &mut self.particles);
        instance::as_floats(&self.particles).to_vec()
    }

    /// `[x, y, z, yaw]` per stud
    #[wasm_bindgen(js_name = studBuffer)]
    pub fn stud_buffer(&self) -> Vec<f32> {
        let studs = instance::stud_instances(self.scene.studs());
        instance::as_floats(&studs).to_vec()
    }

    #[wasm_bindgen(js_name = particleStride)]
    pub fn particle_stride() -> usize {
        instance::PARTICLE_STRIDE
    }

    #[wasm_bindgen(js_name = studStride)]
    pub fn stud_stride() -> usize {
        instance::STUD_STRIDE
    }

    /// Yaw of the whole model this frame
    #[wasm_bindgen(js_name = bodySway)]
    pub fn body_sway(&self) -> f32 {
        self.scene.body_sway()
    }

    /// Yaw for the prism mesh so its faces line up with the studs
    #[wasm_bindgen(js_name = bodyMeshRotation)]
    pub fn body_mesh_rotation(&self) -> f32 {
        self.scene.spec.body_mesh_rotation()
    }

    #[wasm_bindgen(js_name = modelOffset)]
    pub fn model_offset() -> Vec<f32> {
        MODEL_OFFSET.to_array().to_vec()
    }

    /// RGBA tint by part name (`gold`, `silver`, `stud`, `smoke`, `ember`, `oud`)
    pub fn tint(name: &str) -> Option<Vec<f32>> {
        let rgba = match name {
            "gold" => colors::GOLD,
            "silver" => colors::SILVER,
            "stud" => colors::STUD,
            "smoke" => colors::SMOKE,
            "ember" => colors::EMBER,
            "oud" => colors::OUD_WOOD,
            _ => return None,
        };
        Some(rgba.to_vec())
    }
}

//! Browser bindings
//!
//! Exposes a `Session` to the JavaScript presentation layer. Data crosses the
//! boundary as JSON strings: the renderer draws `snapshot()`, the overlay and
//! synthesizer react to the events and cues returned by `step()`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::audio::{AudioMixer, SoundEffect, ToneSpec};
use crate::config::GameConfig;
use crate::platform::{InputAdapter, Key};
use crate::sim::{GameEvent, Session, TickInput};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // Already set after a hot reload
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("Brickfall core loaded");
}

#[derive(Serialize)]
struct TickOutput {
    events: Vec<GameEvent>,
    cues: Vec<(SoundEffect, ToneSpec)>,
}

fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize for JS: {e}");
            String::new()
        }
    }
}

/// Seed from the JS clock when the caller passes 0.
///
/// JS numbers convert with `as`: fractions truncate, values above
/// `u64::MAX` saturate and NaN or negatives fall back to the clock.
fn seed_or_now(seed: f64) -> u64 {
    if seed > 0.0 {
        seed as u64
    } else {
        js_sys::Date::now() as u64
    }
}

#[wasm_bindgen]
pub struct WasmSession {
    session: Session,
    input: InputAdapter,
    mixer: AudioMixer,
}

impl WasmSession {
    fn run(&mut self, input: &TickInput) -> String {
        let events = self.session.tick(input);
        let cues = self.mixer.cues(&events);
        to_json(&TickOutput { events, cues })
    }
}

#[wasm_bindgen]
impl WasmSession {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> WasmSession {
        let session = Session::with_seed(seed_or_now(seed));
        let input = InputAdapter::with_dead_zone(session.config().paddle_speed);
        WasmSession {
            session,
            input,
            mixer: AudioMixer::default(),
        }
    }

    /// Build from a JSON config; missing fields take defaults
    pub fn with_config(json: &str, seed: f64) -> Result<WasmSession, JsValue> {
        let config = GameConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let session = Session::new(config, seed_or_now(seed))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let input = InputAdapter::with_dead_zone(session.config().paddle_speed);
        Ok(WasmSession {
            session,
            input,
            mixer: AudioMixer::default(),
        })
    }

    // === Input ===

    /// `KeyboardEvent.key` pressed. Returns true if the game uses the key.
    pub fn key_down(&mut self, key: &str) -> bool {
        match Key::from_key_name(key) {
            Some(key) => {
                self.input.key_down(key);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        match Key::from_key_name(key) {
            Some(key) => {
                self.input.key_up(key);
                true
            }
            None => false,
        }
    }

    pub fn pointer_move(&mut self, x: f32) {
        self.input.pointer_move(x);
    }

    pub fn pointer_release(&mut self) {
        self.input.pointer_release();
    }

    pub fn tap(&mut self) {
        self.input.tap();
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.mixer.set_muted(muted);
    }

    pub fn set_master_volume(&mut self, vol: f32) {
        self.mixer.set_master_volume(vol);
    }

    // === Simulation ===

    /// One tick from the buffered device input. Returns `{events, cues}` JSON.
    pub fn step(&mut self) -> String {
        let input = self.input.poll(self.session.paddle().center_x());
        self.run(&input)
    }

    /// One tick from explicit intent. Returns `{events, cues}` JSON.
    pub fn tick(&mut self, left: bool, right: bool, launch: bool) -> String {
        self.run(&TickInput {
            left,
            right,
            launch,
        })
    }

    pub fn snapshot(&self) -> String {
        to_json(&self.session.snapshot())
    }

    // === Menu/overlay entry points ===

    pub fn start_game(&mut self) {
        self.session.start_game();
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    pub fn advance_level(&mut self) -> bool {
        self.session.advance_level()
    }

    pub fn resume(&mut self) -> bool {
        self.session.resume()
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.session.toggle_pause()
    }
}

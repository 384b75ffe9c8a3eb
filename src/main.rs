//! Portfolio FX entry point
//!
//! In the browser this mounts the canvas effects and page widgets. Natively it
//! runs the simulations headless and logs what they did.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    portfolio_fx::platform::web::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Portfolio FX (native) starting...");
    log::info!("Native mode has no canvas - build for wasm32 to see the effects");

    let config = portfolio_fx::FxConfig::load();
    headless::run_field(&config);
    headless::run_orb(&config);
    headless::run_typing(&config);
    if let Err(e) = headless::run_theme() {
        log::error!("Theme check failed: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use portfolio_fx::renderer::scene;
    use portfolio_fx::sim::{OrbMascot, ParticleField, TypingEffect};
    use portfolio_fx::{FxConfig, FxError, MemoryStore, ThemeController};

    /// Frames per simulated second
    const FPS: f64 = 60.0;

    pub fn run_field(config: &FxConfig) {
        let mut field = ParticleField::from_seed(42, 1280.0, 720.0, config.field.clone());
        for frame in 0..600u32 {
            field.step();
            if frame % 120 == 0 {
                let cmds = scene::particle_field(&field);
                log::info!(
                    "field frame {:>3}: {} particles, {} links, {} draw calls",
                    frame,
                    field.len(),
                    field.links().len(),
                    cmds.len()
                );
            }
        }
    }

    pub fn run_orb(config: &FxConfig) {
        let mut mascot = OrbMascot::new(320.0, 320.0, config.orb.clone());
        mascot.pointer_move(280.0, 40.0);
        for frame in 0..240u32 {
            if frame == 120 {
                mascot.pointer_leave();
            }
            mascot.step();
            if frame % 40 == 0 {
                let pose = mascot.pose(frame as f64 * 1000.0 / FPS);
                log::info!(
                    "orb frame {:>3}: pos ({:.1}, {:.1}) target ({:.1}, {:.1}) bob {:+.2}",
                    frame,
                    mascot.orb().pos.x,
                    mascot.orb().pos.y,
                    mascot.orb().target.x,
                    mascot.orb().target.y,
                    pose.bob
                );
            }
        }
    }

    pub fn run_typing(config: &FxConfig) {
        let mut effect = TypingEffect::new(config.typing.clone());
        let mut elapsed = 0u32;
        while let Some(frame) = effect.tick() {
            elapsed += frame.delay_ms;
            if effect.is_deleting() && frame.delay_ms == config.typing.hold_delay_ms {
                log::info!("typed {:?} after {}ms", frame.text, elapsed);
            }
            if elapsed > 10_000 {
                break;
            }
        }
    }

    pub fn run_theme() -> Result<(), FxError> {
        let mut controller = ThemeController::load(MemoryStore::new())?;
        let before = controller.theme();
        let after = controller.toggle()?;
        log::info!("theme {} -> {}", before.as_str(), after.as_str());
        Ok(())
    }
}

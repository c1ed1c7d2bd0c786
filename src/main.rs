//! Portfolio page entry point
//!
//! The browser build starts from `web::start` (wasm-bindgen start hook).
//! Natively this runs a headless preview of the particle field, or with
//! `--settings` prints the default settings block for the page.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Portfolio page (native) starting...");
    log::info!("The page itself runs in the browser - build the wasm32 target for that");

    if std::env::args().any(|arg| arg == "--settings") {
        print_settings();
        return;
    }

    preview_field();
}

/// Print the JSON a page can embed in `#portfolio-settings`
#[cfg(not(target_arch = "wasm32"))]
fn print_settings() {
    use portfolio_web::Settings;

    match Settings::load().to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize settings: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}

/// Simulate a few seconds of background at 60 fps and report link density
#[cfg(not(target_arch = "wasm32"))]
fn preview_field() {
    use portfolio_web::renderer::{RecordingSurface, draw_field};
    use portfolio_web::{FieldState, Settings, Viewport, field};

    const FRAMES: u64 = 600;

    let settings = Settings::load();
    let mut state = FieldState::new(42, Viewport::new(1280.0, 720.0), settings.field.clone());
    let mut surface = RecordingSurface::default();

    for viewport in [Viewport::new(1280.0, 720.0), Viewport::new(390.0, 844.0)] {
        state.resize(viewport);
        log::info!(
            "{}x{}: {:?} density, {} particles",
            viewport.width,
            viewport.height,
            state.density(),
            state.particles().len()
        );

        let mut total_lines = 0;
        for _ in 0..FRAMES {
            field::step(&mut state);
            surface.reset();
            let stats = draw_field(&mut surface, &state);
            total_lines += stats.lines;
            if state.frame() % 120 == 0 {
                log::debug!("frame {}: {} lines", state.frame(), stats.lines);
            }
        }

        let outside = state
            .particles()
            .iter()
            .filter(|p| !viewport.contains(p.pos))
            .count();
        let avg_lines = total_lines as f64 / FRAMES as f64;
        println!(
            "{}",
            summary(viewport, state.particles().len(), avg_lines, outside)
        );
    }
}

/// One line of preview output; `outside` counts particles past an edge
#[cfg(not(target_arch = "wasm32"))]
fn summary(
    viewport: portfolio_web::Viewport,
    particles: usize,
    avg_lines: f64,
    outside: usize,
) -> String {
    format!(
        "{:>4}x{:<4} {:>3} particles, {:.1} lines/frame avg, {} outside",
        viewport.width, viewport.height, particles, avg_lines, outside
    )
}

/**
 * XFContacts Desktop App - Main Entry Point
 *
 * Loads configuration, installs tracing, and runs the eframe app.
 */
use std::time::Duration;

use eframe::egui;
use xfcontacts::egui_app::{logging, theme, views, AppState, Config};

/// Repaint cadence while a navigation is in flight
const PENDING_REPAINT: Duration = Duration::from_millis(30);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    logging::init_tracing(config.log_filter());
    tracing::info!("[STARTUP] Opening {}", config.initial_url());

    let state = AppState::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "XF Contacts",
        options,
        Box::new(|cc| {
            theme::styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(ContactsApp { state }))
        }),
    )?;
    Ok(())
}

/// Main application state
struct ContactsApp {
    state: AppState,
}

impl eframe::App for ContactsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();

        let mut actions = Vec::new();
        views::render_top_bar(ctx, &self.state, &mut actions);
        views::render_main_panel(ctx, &mut self.state, &mut actions);

        for action in actions {
            if let Err(e) = self.state.apply(action) {
                tracing::error!("[APP] Action failed: {}", e);
            }
        }

        if !self.state.router.navigation().is_idle() || self.state.router.is_revalidating() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}

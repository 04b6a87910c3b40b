//! DateTime Clippy: a tray menu that copies the current date/time.
//!
//! Each time the menu opens, every pattern is rendered against the current
//! time. Picking an entry copies its text to the clipboard and moves it into
//! the recently-used group at the bottom of the menu.

use parking_lot::Mutex;
use tauri::{Manager, RunEvent};

mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod locale;
pub mod menu;
pub mod patterns;
pub mod session;

use clock::SystemClock;
use config::AppConfig;
use locale::LocaleInfo;
use patterns::PatternSet;
use session::Session;

pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    let app = tauri::Builder::default()
        // Registered first: a second instance exits inside this plugin,
        // before any tray icon exists.
        .plugin(tauri_plugin_single_instance::init(|_app, args, _cwd| {
            log::info!(
                "Ignored another launch with {} argument(s)",
                args.len().saturating_sub(1)
            );
        }))
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(move |app| {
            let locale = LocaleInfo::host();
            let (patterns, source) = PatternSet::resolve(&config, &locale);
            log::info!(
                "Loaded {} pattern(s) from {} (locale {})",
                patterns.len(),
                source,
                locale.name()
            );

            app.manage(Mutex::new(Session::new(
                patterns,
                locale,
                Box::new(SystemClock),
            )));
            app::tray::init(app)?;

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|_app, event| {
        // There are no windows, so only an explicit exit code ends the loop
        if let RunEvent::ExitRequested { code: None, api, .. } = event {
            api.prevent_exit();
        }
    });
}

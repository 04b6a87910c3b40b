//! Tray icon and menu event handlers.
//!
//! Registered on the tray builder in `tray::init`. Both run on the event
//! loop thread.

use parking_lot::Mutex;
use tauri::{
    menu::MenuEvent,
    tray::{MouseButtonState, TrayIcon, TrayIconEvent},
    AppHandle, Manager,
};
use tauri_plugin_clipboard_manager::ClipboardExt;

use crate::app::tray;
use crate::error::ClippyError;
use crate::menu::EXIT_ID;
use crate::session::Session;

/// Handle a click on a menu item.
pub fn handle_menu_event(app: &AppHandle, event: MenuEvent) {
    let id = event.id.as_ref();
    if id == EXIT_ID {
        log::info!("Exit selected, shutting down");
        app.exit(0);
        return;
    }

    let copied = app
        .state::<Mutex<Session>>()
        .lock()
        .select(id, |text| app.clipboard().write_text(text));

    match copied {
        Ok(Some(text)) => log::info!("Copied {:?} to clipboard", text),
        Ok(None) => {
            log::debug!("Ignoring menu id {} not in the current menu", id);
            return;
        },
        Err(e) => {
            // Fatal: the entry is already stamped and nothing was copied
            log::error!("{}", ClippyError::Clipboard(e.to_string()));
            app.exit(1);
            return;
        },
    }

    if let Err(e) = tray::refresh(app) {
        log::error!("Failed to rebuild tray menu: {}", e);
    }
}

/// Rebuild the menu right before the tray shows it.
pub fn handle_tray_icon_event(tray_icon: &TrayIcon, event: TrayIconEvent) {
    let opening = matches!(
        event,
        TrayIconEvent::Enter { .. }
            | TrayIconEvent::Click {
                button_state: MouseButtonState::Down,
                ..
            }
    );

    if opening {
        if let Err(e) = tray::refresh(tray_icon.app_handle()) {
            log::error!("Failed to rebuild tray menu: {}", e);
        }
    }
}

//! System tray setup and menu rebuilding.
//!
//! Tauri has no "menu about to open" callback, so the menu is rebuilt from
//! the session whenever the pointer reaches the icon, on every mouse-down,
//! after each selection and once at startup.
//!
//! On Linux the tray is an appindicator, which reports no pointer events.
//! There the menu shows the time of the last selection (or of startup), not
//! the time it was opened.

use parking_lot::Mutex;
use tauri::{
    image::Image,
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::TrayIconBuilder,
    App, AppHandle, Manager, Wry,
};

use crate::app::events;
use crate::error::{ClippyError, ClippyResult, OptionExt};
use crate::menu::{MenuSlot, EXIT_ID};
use crate::session::Session;

pub const TRAY_ID: &str = "datetime-clippy";

const TOOLTIP: &str = "DateTime Clippy";

/// Holds the menu attached to the tray and the one it replaced.
///
/// muda frees the items of a replaced menu even while the native menu is
/// still on screen. Keeping the previous `Menu` here keeps them alive until
/// the next rebuild.
pub struct TrayState<M = Menu<Wry>> {
    current: Option<M>,
    previous: Option<M>,
}

impl<M> Default for TrayState<M> {
    fn default() -> Self {
        Self {
            current: None,
            previous: None,
        }
    }
}

impl<M> TrayState<M> {
    /// Record a newly attached menu and hand back the one that can be freed.
    fn push(&mut self, menu: M) -> Option<M> {
        let evicted = self.previous.take();
        self.previous = self.current.replace(menu);
        evicted
    }
}

/// Create the tray icon. The session must already be managed.
pub fn init(app: &App) -> ClippyResult<()> {
    app.manage(Mutex::new(TrayState::<Menu<Wry>>::default()));

    let menu = build_menu(app.handle())?;

    // 32x32 is standard for system tray
    let icon = Image::from_bytes(include_bytes!("../../icons/32x32.png"))
        .map_err(|e| ClippyError::Icon(e.to_string()))?;

    TrayIconBuilder::with_id(TRAY_ID)
        .icon(icon)
        .tooltip(TOOLTIP)
        .menu(&menu)
        .show_menu_on_left_click(true)
        .on_menu_event(events::handle_menu_event)
        .on_tray_icon_event(events::handle_tray_icon_event)
        .build(app)?;

    app.state::<Mutex<TrayState>>().lock().push(menu);
    log::info!("Tray icon ready");
    Ok(())
}

/// Rebuild the session snapshot and attach a fresh menu to the tray.
pub fn refresh(app: &AppHandle) -> ClippyResult<()> {
    let menu = build_menu(app)?;
    let tray = app.tray_by_id(TRAY_ID).context("tray icon not found")?;
    tray.set_menu(Some(menu.clone()))?;
    let evicted = app.state::<Mutex<TrayState>>().lock().push(menu);
    drop(evicted);
    Ok(())
}

fn build_menu(app: &AppHandle) -> ClippyResult<Menu<Wry>> {
    let session = app.state::<Mutex<Session>>();
    let mut session = session.lock();
    let snapshot = session.open_menu();

    let menu = Menu::new(app)?;
    for slot in snapshot.slots() {
        match slot {
            MenuSlot::Entry(entry) => {
                let item = MenuItem::with_id(app, entry.id(), entry.label(), true, None::<&str>)?;
                menu.append(&item)?;
            },
            MenuSlot::Separator => menu.append(&PredefinedMenuItem::separator(app)?)?,
            MenuSlot::Exit => {
                let item = MenuItem::with_id(app, EXIT_ID, "Exit", true, None::<&str>)?;
                menu.append(&item)?;
            },
        }
    }

    let shown = snapshot.entries().count();
    log::debug!(
        "Rebuilt tray menu: {} of {} pattern(s) shown",
        shown,
        session.patterns().len()
    );
    Ok(menu)
}

#[cfg(test)]
mod tests {
    use super::TrayState;

    #[test]
    fn test_push_keeps_replaced_menu() {
        let mut state = TrayState::<&str>::default();

        assert_eq!(state.push("startup"), None);
        assert_eq!(state.push("first open"), None);
        assert_eq!(state.current, Some("first open"));
        assert_eq!(state.previous, Some("startup"));

        // Only the menu two rebuilds back is released
        assert_eq!(state.push("second open"), Some("startup"));
        assert_eq!(state.current, Some("second open"));
        assert_eq!(state.previous, Some("first open"));
    }
}

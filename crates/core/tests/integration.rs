//! Integration tests for the director core.
//!
//! These exercise the public `Director` API the way the event loop, the
//! IPC handler and the CLI all do: construct, `refresh()` against the
//! real (or stubbed, off-Windows) monitor enumeration, then drive window
//! and workspace operations through it.

use splitwm_core::config::schema::Config;
use splitwm_core::director::Director;
use splitwm_core::win_tree::{Rect, Win};
use windows::Win32::Foundation::HWND;

fn handle(n: isize) -> splitwm_core::utils::win32::WindowHandle {
    splitwm_core::utils::win32::WindowHandle::from_hwnd(HWND(n as _))
}

fn director_with_monitor() -> (Director, String) {
    let director = Director::new(Config::default());
    director.refresh().expect("refresh should discover at least one monitor");
    let name = director
        .monitors_snapshot()
        .first()
        .expect("refresh should produce a monitor")
        .name
        .clone();
    (director, name)
}

#[test]
fn test_full_initialization() {
    let (director, _name) = director_with_monitor();
    assert!(
        !director.monitors_snapshot().is_empty(),
        "Should have at least one monitor after refresh"
    );
}

#[test]
fn test_monitor_enumeration() {
    let (director, _name) = director_with_monitor();

    let monitors = director.monitors_snapshot();
    assert!(!monitors.is_empty(), "Should detect at least one monitor");

    for monitor in &monitors {
        assert!(!monitor.name.is_empty(), "Monitor should have a name");
        assert!(monitor.work_rect.width > 0, "Monitor work area width should be positive");
        assert!(monitor.work_rect.height > 0, "Monitor work area height should be positive");
    }

    // Refreshing again should not change the monitor count on a static
    // (non-hotplugging) test environment.
    director.refresh().expect("second refresh should succeed");
    assert_eq!(director.monitors_snapshot().len(), monitors.len());
}

#[test]
fn test_workspace_switching() {
    let (director, _name) = director_with_monitor();

    director.switch_to_ws("two").unwrap();
    let active = director
        .monitors_snapshot()
        .into_iter()
        .find(|m| m.focused)
        .and_then(|m| m.active_workspace);
    assert_eq!(active.as_deref(), Some("two"));

    director.switch_to_ws("one").unwrap();
    let active = director
        .monitors_snapshot()
        .into_iter()
        .find(|m| m.focused)
        .and_then(|m| m.active_workspace);
    assert_eq!(active.as_deref(), Some("one"));

    // Switching to the same workspace twice is a no-op, not an error.
    director.switch_to_ws("one").unwrap();
}

#[test]
fn test_window_management_lifecycle() {
    let (director, monitor) = director_with_monitor();

    let win = handle(1);
    director.add_win(&monitor, Win::new(win, Rect::new(0, 0, 800, 600))).unwrap();

    assert!(director.is_window_managed(win));
    assert_eq!(director.active_window(), Some(win));

    let windows = director.windows_snapshot(None);
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].handle, win);

    director.remove_win(win).unwrap();
    assert!(!director.is_window_managed(win));
    assert!(director.windows_snapshot(None).is_empty());
}

#[test]
fn test_move_window_between_workspaces() {
    let (director, monitor) = director_with_monitor();

    let win = handle(2);
    director.add_win(&monitor, Win::new(win, Rect::new(0, 0, 100, 100))).unwrap();

    director.move_active_win_to_ws("archive").unwrap();

    let on_archive = director
        .windows_snapshot(Some("archive"))
        .iter()
        .any(|w| w.handle == win);
    assert!(on_archive, "window should have moved to the archive workspace");
}

#[test]
fn test_floating_toggle() {
    let (director, monitor) = director_with_monitor();

    let win = handle(3);
    director.add_win(&monitor, Win::new(win, Rect::new(0, 0, 100, 100))).unwrap();

    director.active_win_toggle_floating().unwrap();
    let floating = director.windows_snapshot(None).into_iter().find(|w| w.handle == win).unwrap().floating;
    assert!(floating, "window should be floating after toggle");

    director.active_win_toggle_floating().unwrap();
    let floating = director.windows_snapshot(None).into_iter().find(|w| w.handle == win).unwrap().floating;
    assert!(!floating, "window should be tiled again after second toggle");
}

#[test]
fn test_close_active_window_without_focus_fails() {
    let (director, _monitor) = director_with_monitor();
    assert!(director.close_active_win().is_err());
}

#[test]
#[cfg(target_os = "windows")]
fn test_window_enumeration() {
    use splitwm_core::utils::win32;

    let result = win32::enumerate_windows();
    assert!(result.is_ok(), "Window enumeration should succeed");

    let windows = result.unwrap();
    println!("Found {} windows", windows.len());

    for window in windows.iter().take(5) {
        let title = window.get_title();
        assert!(title.is_ok(), "Should be able to get window title");

        let class = window.get_class_name();
        assert!(class.is_ok(), "Should be able to get window class");

        let pid = window.get_process_id();
        assert!(pid > 0, "Process ID should be positive");
    }
}

#[test]
#[cfg(target_os = "windows")]
fn test_window_filtering() {
    use splitwm_core::utils::win32;

    let (director, _monitor) = director_with_monitor();

    let result = win32::enumerate_app_windows();
    assert!(result.is_ok(), "App window enumeration should succeed");

    let windows = result.unwrap();
    println!("Found {} app windows", windows.len());

    for window in windows.iter().take(3) {
        let should_manage = director.should_manage(*window);
        if should_manage {
            let title = window.get_title().unwrap_or_default();
            println!("Would manage window: {}", title);
        }
    }
}

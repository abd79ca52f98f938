//! Window enumeration functions.
//!
//! This module provides functions for enumerating Windows windows.

use windows::{
    Win32::Foundation::{BOOL, HWND, LPARAM},
    Win32::UI::WindowsAndMessaging::{EnumWindows, GetForegroundWindow},
};

use super::WindowHandle;

/// Enumerate all top-level windows in the system.
///
/// This function calls the Windows `EnumWindows` API to retrieve all top-level windows,
/// including both visible and hidden windows.
///
/// # Returns
///
/// A vector of `WindowHandle` objects representing all enumerated windows.
///
/// # Errors
///
/// Returns an error if the Windows API call fails.
///
/// # Examples
///
/// ```no_run
/// # use splitwm_core::utils::win32::enumerate_windows;
/// let windows = enumerate_windows().unwrap();
/// for window in windows {
///     if let Ok(title) = window.get_title() {
///         println!("Window: {}", title);
///     }
/// }
/// ```
pub fn enumerate_windows() -> anyhow::Result<Vec<WindowHandle>> {
    let mut windows = Vec::new();

    unsafe {
        EnumWindows(
            Some(enum_windows_callback),
            LPARAM(&mut windows as *mut Vec<WindowHandle> as isize),
        )?;
    }

    Ok(windows)
}

/// Callback function for EnumWindows.
///
/// This is an internal callback that gets called for each window during enumeration.
/// It safely converts the LPARAM back to a mutable reference to our vector and adds
/// the window handle to it.
///
/// # Safety
///
/// This function is marked as unsafe because it dereferences a raw pointer.
/// However, it's safe in this context because:
/// - The pointer is created from a valid mutable reference in `enumerate_windows`
/// - The lifetime of the reference is controlled by the `enumerate_windows` function
/// - Windows guarantees that the callback will not be called after `EnumWindows` returns
///
/// ## Safety Requirements for Callers
///
/// This function must only be called by Windows' `EnumWindows` with an LPARAM
/// that points to a valid `Vec<WindowHandle>` for the duration of enumeration.
unsafe extern "system" fn enum_windows_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let windows = &mut *(lparam.0 as *mut Vec<WindowHandle>);
    windows.push(WindowHandle::from_hwnd(hwnd));
    true.into()
}

/// Enumerate only visible windows.
///
/// This is a convenience function that filters the results of `enumerate_windows`
/// to include only windows that are currently visible.
///
/// # Returns
///
/// A vector of `WindowHandle` objects representing visible windows.
///
/// # Errors
///
/// Returns an error if the Windows API call fails.
///
/// # Examples
///
/// ```no_run
/// # use splitwm_core::utils::win32::enumerate_visible_windows;
/// let visible_windows = enumerate_visible_windows().unwrap();
/// println!("Found {} visible windows", visible_windows.len());
/// ```
pub fn enumerate_visible_windows() -> anyhow::Result<Vec<WindowHandle>> {
    let all_windows = enumerate_windows()?;
    Ok(all_windows.into_iter().filter(|w| w.is_visible()).collect())
}

/// Enumerate only application windows.
///
/// This function filters windows to include only those that appear to be
/// standard application windows (visible, with title, no owner).
///
/// # Returns
///
/// A vector of `WindowHandle` objects representing application windows.
///
/// # Errors
///
/// Returns an error if the Windows API call fails.
///
/// # Examples
///
/// ```no_run
/// # use splitwm_core::utils::win32::enumerate_app_windows;
/// let app_windows = enumerate_app_windows().unwrap();
/// for window in app_windows {
///     if let Ok(title) = window.get_title() {
///         println!("Application: {}", title);
///     }
/// }
/// ```
pub fn enumerate_app_windows() -> anyhow::Result<Vec<WindowHandle>> {
    let all_windows = enumerate_windows()?;
    Ok(all_windows
        .into_iter()
        .filter(|w| w.is_app_window())
        .collect())
}

/// Get the currently focused foreground window.
///
/// # Returns
///
/// Some(WindowHandle) if there is a foreground window, None otherwise.
///
/// # Examples
///
/// ```no_run
/// # use splitwm_core::utils::win32::get_foreground_window;
/// if let Some(window) = get_foreground_window() {
///     let title = window.get_title().unwrap_or_default();
///     println!("Active window: {}", title);
/// }
/// ```
pub fn get_foreground_window() -> Option<WindowHandle> {
    unsafe {
        let hwnd = GetForegroundWindow();
        if hwnd.0 != 0 {
            Some(WindowHandle::from_hwnd(hwnd))
        } else {
            None
        }
    }
}

/// Enumerate physical display monitors.
///
/// Yields `(device_name, monitor_rect, work_rect)` for each attached
/// monitor, sorted left-to-right/top-to-bottom by work-area origin so the
/// director's monitor list has a stable, predictable order across refreshes.
#[cfg(target_os = "windows")]
pub fn enumerate_monitors() -> anyhow::Result<Vec<(String, crate::win_tree::Rect, crate::win_tree::Rect)>> {
    use windows::Win32::Foundation::{BOOL, LPARAM, RECT};
    use windows::Win32::Graphics::Gdi::{
        EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFOEXW,
    };

    fn rect_from_win32(r: &RECT) -> crate::win_tree::Rect {
        crate::win_tree::Rect::new(r.left, r.top, r.right - r.left, r.bottom - r.top)
    }

    unsafe extern "system" fn callback(
        hmonitor: HMONITOR,
        _hdc: HDC,
        _rect: *mut RECT,
        lparam: LPARAM,
    ) -> BOOL {
        let out = &mut *(lparam.0 as *mut Vec<(String, crate::win_tree::Rect, crate::win_tree::Rect)>);

        let mut info = MONITORINFOEXW {
            monitorInfo: windows::Win32::Graphics::Gdi::MONITORINFO {
                cbSize: std::mem::size_of::<MONITORINFOEXW>() as u32,
                ..Default::default()
            },
            ..Default::default()
        };

        if GetMonitorInfoW(hmonitor, &mut info.monitorInfo as *mut _ as *mut _).as_bool() {
            let name = String::from_utf16_lossy(&info.szDevice)
                .trim_end_matches('\0')
                .to_string();
            let full = rect_from_win32(&info.monitorInfo.rcMonitor);
            let work = rect_from_win32(&info.monitorInfo.rcWork);
            out.push((name, full, work));
        }

        true.into()
    }

    let mut monitors = Vec::new();
    unsafe {
        let ptr = &mut monitors as *mut Vec<(String, crate::win_tree::Rect, crate::win_tree::Rect)>;
        if !EnumDisplayMonitors(HDC(0), None, Some(callback), LPARAM(ptr as isize)).as_bool() {
            anyhow::bail!("EnumDisplayMonitors failed");
        }
    }

    monitors.sort_by_key(|(_, _, work)| (work.x, work.y));
    Ok(monitors)
}

/// Non-Windows stub: a single synthetic monitor, enough for headless tests
/// and development off-target.
#[cfg(not(target_os = "windows"))]
pub fn enumerate_monitors() -> anyhow::Result<Vec<(String, crate::win_tree::Rect, crate::win_tree::Rect)>> {
    let rect = crate::win_tree::Rect::new(0, 0, 1920, 1080);
    Ok(vec![("primary".to_string(), rect, rect)])
}

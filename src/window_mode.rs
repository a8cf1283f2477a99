use eframe::egui;

pub const WS_EX_TRANSPARENT_BITS: u32 = 0x0000_0020;
pub const WS_EX_LAYERED_BITS: u32 = 0x0008_0000;

/// Extended window style for the overlay in the given mode.
///
/// Passive mode is layered and transparent to input; settings mode drops only
/// the transparent bit so the window keeps its layered compositing.
pub fn compose_ex_style(current: u32, interactive: bool) -> u32 {
    if interactive {
        current & !WS_EX_TRANSPARENT_BITS
    } else {
        current | WS_EX_LAYERED_BITS | WS_EX_TRANSPARENT_BITS
    }
}

/// Switches input routing between click-through and interactive.
pub fn apply_window_mode(ctx: &egui::Context, frame: &eframe::Frame, interactive: bool) {
    ctx.send_viewport_cmd(egui::ViewportCommand::MousePassthrough(!interactive));

    #[cfg(windows)]
    {
        match platform::get_hwnd(frame) {
            Some(hwnd) => platform::set_clickthrough_style(hwnd, interactive),
            None => tracing::warn!("overlay window handle unavailable, using viewport passthrough"),
        }
    }
    #[cfg(not(windows))]
    let _ = frame;

    if interactive {
        ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
    }
    tracing::debug!(interactive, "window mode applied");
}

#[cfg(windows)]
mod platform {
    use super::compose_ex_style;
    use raw_window_handle::{HasWindowHandle, RawWindowHandle};
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::{
        GetWindowLongPtrW, SetWindowLongPtrW, GWL_EXSTYLE,
    };

    pub fn get_hwnd(frame: &eframe::Frame) -> Option<HWND> {
        frame
            .window_handle()
            .ok()
            .and_then(|wh| match wh.as_raw() {
                RawWindowHandle::Win32(handle) => {
                    Some(HWND(handle.hwnd.get() as *mut core::ffi::c_void))
                }
                _ => None,
            })
    }

    pub fn set_clickthrough_style(hwnd: HWND, interactive: bool) {
        unsafe {
            let current = GetWindowLongPtrW(hwnd, GWL_EXSTYLE) as u32;
            let next = compose_ex_style(current, interactive);
            if next != current {
                let _ = SetWindowLongPtrW(hwnd, GWL_EXSTYLE, next as isize);
            }
        }
    }
}

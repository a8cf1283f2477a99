use eframe::egui;
use image::{Rgba, RgbaImage};

pub const ICON_COLOR: Rgba<u8> = Rgba([255, 140, 0, 255]);

/// Orange cross on a transparent background: two rounded bars, each 3/4 of
/// the icon long and 1/8 of it thick.
pub fn orange_cross(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let s = size as f32;
    let half_len = s * 0.75 / 2.0;
    let half_bar = (size / 8) as f32 / 2.0;
    let center = (size / 2) as f32;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let px = x as f32 + 0.5 - center;
        let py = y as f32 + 0.5 - center;
        if in_rounded_bar(px, py, half_len, half_bar) || in_rounded_bar(py, px, half_len, half_bar)
        {
            *pixel = ICON_COLOR;
        }
    }
    img
}

/// Horizontal capsule centred on the origin.
fn in_rounded_bar(x: f32, y: f32, half_len: f32, half_bar: f32) -> bool {
    if y.abs() > half_bar {
        return false;
    }
    let straight = half_len - half_bar;
    if x.abs() <= straight {
        return true;
    }
    let dx = x.abs() - straight;
    dx * dx + y * y <= half_bar * half_bar
}

pub fn icon_data(size: u32) -> egui::IconData {
    let img = orange_cross(size);
    let (width, height) = img.dimensions();
    egui::IconData {
        rgba: img.into_raw(),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_covers_the_center_and_leaves_corners_clear() {
        let img = orange_cross(64);
        assert_eq!(*img.get_pixel(32, 32), ICON_COLOR);
        assert_eq!(*img.get_pixel(32, 10), ICON_COLOR);
        assert_eq!(*img.get_pixel(10, 32), ICON_COLOR);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(63, 63).0[3], 0);
        assert_eq!(img.get_pixel(10, 10).0[3], 0);
    }

    #[test]
    fn icon_data_is_tightly_packed_rgba() {
        let icon = icon_data(32);
        assert_eq!((icon.width, icon.height), (32, 32));
        assert_eq!(icon.rgba.len(), 32 * 32 * 4);
    }
}

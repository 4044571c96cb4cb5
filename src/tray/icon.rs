//! Tray icon image, drawn in code so no resource file is needed

use anyhow::Result;
use tray_icon::Icon;

/// Edge length of the generated icon in pixels
pub const ICON_SIZE: u32 = 32;

const FRAME: [u8; 4] = [0x1f, 0x4e, 0x8c, 0xff];
const SCREEN: [u8; 4] = [0xe8, 0xf1, 0xfb, 0xff];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

/// RGBA pixels of a monitor-like glyph: a rounded frame around a light screen.
pub fn icon_rgba(size: u32) -> Vec<u8> {
    let border = (size / 8).max(1);
    let radius = size / 6;
    let last = size.saturating_sub(1);
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let dx = radius.saturating_sub(x.min(last - x));
            let dy = radius.saturating_sub(y.min(last - y));
            let pixel = if dx * dx + dy * dy > radius * radius {
                CLEAR
            } else if x < border || y < border || x > last - border || y > last - border {
                FRAME
            } else {
                SCREEN
            };
            rgba.extend_from_slice(&pixel);
        }
    }
    rgba
}

pub fn tray_icon_image() -> Result<Icon> {
    Ok(Icon::from_rgba(icon_rgba(ICON_SIZE), ICON_SIZE, ICON_SIZE)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(rgba: &[u8], size: u32, x: u32, y: u32) -> &[u8] {
        let i = ((y * size + x) * 4) as usize;
        &rgba[i..i + 4]
    }

    #[test]
    fn test_buffer_size() {
        assert_eq!(icon_rgba(ICON_SIZE).len(), 32 * 32 * 4);
        assert_eq!(icon_rgba(16).len(), 16 * 16 * 4);
    }

    #[test]
    fn test_corners_transparent_center_opaque() {
        let rgba = icon_rgba(ICON_SIZE);
        assert_eq!(pixel(&rgba, ICON_SIZE, 0, 0), CLEAR);
        assert_eq!(pixel(&rgba, ICON_SIZE, 31, 31), CLEAR);
        assert_eq!(pixel(&rgba, ICON_SIZE, 16, 16), SCREEN);
        assert_eq!(pixel(&rgba, ICON_SIZE, 16, 0), FRAME);
    }
}

use eframe::egui::Color32;

pub trait ColorExt {
    fn from_hex(hex: &str) -> Option<Self>
    where
        Self: Sized;
}

impl ColorExt for Color32 {
    fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color32::from_rgb(r, g, b))
    }
}

/// Brand and status colors used across the window.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub primary: Color32,
    pub primary_dark: Color32,
    pub success: Color32,
    pub error: Color32,
    pub muted: Color32,
    pub selected_fill: Color32,
}

impl Palette {
    pub const PRIMARY_HEX: &'static str = "#5B47E0";
    pub const PRIMARY_DARK_HEX: &'static str = "#4936C7";

    pub fn new() -> Self {
        Self {
            primary: Color32::from_hex(Self::PRIMARY_HEX).unwrap_or(Color32::LIGHT_BLUE),
            primary_dark: Color32::from_hex(Self::PRIMARY_DARK_HEX).unwrap_or(Color32::BLUE),
            success: Color32::from_rgb(0, 180, 0),
            error: Color32::from_rgb(220, 50, 50),
            muted: Color32::from_rgb(150, 150, 150),
            selected_fill: Color32::from_rgba_unmultiplied(91, 71, 224, 40),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_accepts_optional_hash() {
        assert_eq!(Color32::from_hex("#5B47E0"), Some(Color32::from_rgb(91, 71, 224)));
        assert_eq!(Color32::from_hex("ffffff"), Some(Color32::WHITE));
        assert_eq!(Color32::from_hex("#fff"), None);
        assert_eq!(Color32::from_hex("#zzzzzz"), None);
    }
}

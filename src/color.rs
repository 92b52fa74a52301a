/// Opaque 16-bit display color (RGB565).
///
/// The engine only ever compares colors for identity; conversion helpers exist
/// for surfaces that need full 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);

    pub const fn from_rgb888(red: u8, green: u8, blue: u8) -> Self {
        let r = (red as u16 >> 3) << 11;
        let g = (green as u16 >> 2) << 5;
        let b = blue as u16 >> 3;
        Color(r | g | b)
    }

    /// Expand back to 8-bit channels, replicating the high bits into the low ones
    pub fn to_rgb888(self) -> (u8, u8, u8) {
        let r5 = ((self.0 >> 11) & 0x1F) as u8;
        let g6 = ((self.0 >> 5) & 0x3F) as u8;
        let b5 = (self.0 & 0x1F) as u8;
        (
            (r5 << 3) | (r5 >> 2),
            (g6 << 2) | (g6 >> 4),
            (b5 << 3) | (b5 >> 2),
        )
    }
}

// Eye color presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPalette {
    Classic,     // White
    Forest,      // Green
    Fire,        // Red/Orange
    Ocean,       // Blue/Cyan
    Purple,      // Purple/Pink
}

impl ColorPalette {
    pub fn next(&self) -> Self {
        match self {
            ColorPalette::Classic => ColorPalette::Forest,
            ColorPalette::Forest => ColorPalette::Fire,
            ColorPalette::Fire => ColorPalette::Ocean,
            ColorPalette::Ocean => ColorPalette::Purple,
            ColorPalette::Purple => ColorPalette::Classic,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ColorPalette::Classic => "Classic (White)",
            ColorPalette::Forest => "Forest (Green)",
            ColorPalette::Fire => "Fire (Red/Orange)",
            ColorPalette::Ocean => "Ocean (Blue/Cyan)",
            ColorPalette::Purple => "Purple/Pink",
        }
    }

    /// Foreground color used for the eye shapes
    pub fn eye_color(&self) -> Color {
        match self {
            ColorPalette::Classic => Color::WHITE,
            ColorPalette::Forest => Color::from_rgb888(64, 192, 96),
            ColorPalette::Fire => Color::from_rgb888(255, 96, 0),
            ColorPalette::Ocean => Color::from_rgb888(32, 128, 255),
            ColorPalette::Purple => Color::from_rgb888(192, 64, 192),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        ColorPalette::Classic
    }
}

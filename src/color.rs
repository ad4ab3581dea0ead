// Simple color struct with a floating point alpha, created from an unsigned 32
// representing 0xRRGGBB. Formats itself as a css rgba() string for the canvas.

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::from_u32(0xffffff, 1.0);
    pub const ACCENT: Color = Color::from_u32(0x7ab800, 1.0);

    pub const fn from_u32(num: u32, a: f64) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Color {
        Color { a, ..self }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// Particle colors, all translucent
pub const PALETTE: [Color; 3] = [
    Color::from_u32(0x00a3e0, 0.8),
    Color::from_u32(0x7ab800, 0.8),
    Color::from_u32(0xffffff, 0.7),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_channels() {
        let c = Color::from_u32(0x00a3e0, 0.8);
        assert_eq!((c.r, c.g, c.b), (0, 163, 224));
    }

    #[test]
    fn palette_formats_as_css() {
        let css: Vec<String> = PALETTE.iter().map(Color::to_css).collect();
        assert_eq!(
            css,
            vec![
                "rgba(0, 163, 224, 0.8)",
                "rgba(122, 184, 0, 0.8)",
                "rgba(255, 255, 255, 0.7)",
            ]
        );
    }

    #[test]
    fn alpha_is_replaced_not_blended() {
        let faded = Color::ACCENT.with_alpha(0.25);
        assert_eq!(faded.to_css(), "rgba(122, 184, 0, 0.25)");
        assert_eq!(Color::ACCENT.a, 1.0);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        let (r, g, b, a) = match s.len() {
            6 => (
                u8::from_str_radix(&s[0..2], 16).unwrap_or(0),
                u8::from_str_radix(&s[2..4], 16).unwrap_or(0),
                u8::from_str_radix(&s[4..6], 16).unwrap_or(0),
                255,
            ),
            8 => (
                u8::from_str_radix(&s[0..2], 16).unwrap_or(0),
                u8::from_str_radix(&s[2..4], 16).unwrap_or(0),
                u8::from_str_radix(&s[4..6], 16).unwrap_or(0),
                u8::from_str_radix(&s[6..8], 16).unwrap_or(255),
            ),
            _ => (0, 0, 0, 255),
        };
        Color(r, g, b, a)
    }
    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    /// `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn to_css(self) -> String {
        if self.3 == 255 {
            format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.0,
                self.1,
                self.2,
                self.3 as f32 / 255.0
            )
        }
    }
}

/// Brush for filling shapes and text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Linear gradient along `angle_deg` (CSS convention, 0deg points up).
    Linear {
        angle_deg: f32,
        start_color: Color,
        end_color: Color,
    },
}

impl Brush {
    pub fn to_css(&self) -> String {
        match self {
            Brush::Solid(c) => c.to_css(),
            Brush::Linear {
                angle_deg,
                start_color,
                end_color,
            } => format!(
                "linear-gradient({}deg, {}, {})",
                angle_deg,
                start_color.to_css(),
                end_color.to_css()
            ),
        }
    }
}

impl From<Color> for Brush {
    fn from(c: Color) -> Self {
        Brush::Solid(c)
    }
}

pub struct LinearGradient;

impl LinearGradient {
    pub fn diagonal(from: Color, to: Color) -> Brush {
        Brush::Linear {
            angle_deg: 135.0,
            start_color: from,
            end_color: to,
        }
    }
}

//! Colors, text attributes, and the grid theme.

/// Concrete terminal color, ready to hand to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color in either sRGB or OKLCH, resolved to [`Rgb`] at paint time.
///
/// Lightness adjustments go through OKLCH so derived colors stay
/// perceptually consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb(Rgb),
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    pub fn lighten(self, amount: f32) -> Self {
        let (l, c, h) = self.to_oklch();
        Self::Oklch {
            l: (l + amount).clamp(0.0, 1.0),
            c,
            h,
        }
    }

    pub fn darken(self, amount: f32) -> Self {
        self.lighten(-amount)
    }

    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Rgb(rgb) => rgb,
            Self::Oklch { l, c, h } => oklch_to_rgb(l, c, h),
        }
    }

    fn to_oklch(self) -> (f32, f32, f32) {
        match self {
            Self::Oklch { l, c, h } => (l, c, h),
            Self::Rgb(rgb) => rgb_to_oklch(rgb),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

fn rgb_to_oklch(rgb: Rgb) -> (f32, f32, f32) {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch: Oklch = Srgb::new(rgb.r, rgb.g, rgb.b)
        .into_format::<f32>()
        .into_color();

    (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
}

/// Text attributes for a painted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
            underline: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// Horizontal alignment for cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Colors for the grid chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub header_fg: Color,
    pub header_bg: Color,
    pub button_fg: Color,
    pub button_bg: Color,
    pub editor_fg: Color,
    pub editor_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        let background = Color::oklch(0.18, 0.02, 260.0);
        Self {
            background,
            text: Color::oklch(0.92, 0.01, 260.0),
            header_fg: Color::oklch(0.95, 0.02, 250.0),
            header_bg: Color::oklch(0.3, 0.1, 250.0),
            button_fg: Color::oklch(0.97, 0.01, 25.0),
            button_bg: Color::oklch(0.5, 0.14, 25.0),
            editor_fg: Color::oklch(0.15, 0.02, 260.0),
            editor_bg: background.lighten(0.6),
        }
    }
}

//! Colour constants and two-stop gradients.
//!
//! Values follow the Tailwind palette the mockups were drawn with, so a
//! gradient named `from-green-300 to-teal-300` looks the same here.

use ratatui::style::Color;

pub const PURPLE_100: Color = Color::Rgb(243, 232, 255); // #f3e8ff
pub const PINK_100: Color = Color::Rgb(252, 231, 243); // #fce7f3

pub const PURPLE_300: Color = Color::Rgb(216, 180, 254); // #d8b4fe
pub const PINK_300: Color = Color::Rgb(249, 168, 212); // #f9a8d4
pub const ORANGE_300: Color = Color::Rgb(253, 186, 116); // #fdba74
pub const RED_300: Color = Color::Rgb(252, 165, 165); // #fca5a5
pub const GREEN_300: Color = Color::Rgb(134, 239, 172); // #86efac
pub const TEAL_300: Color = Color::Rgb(94, 234, 212); // #5eead4
pub const BLUE_300: Color = Color::Rgb(147, 197, 253); // #93c5fd
pub const CYAN_300: Color = Color::Rgb(103, 232, 249); // #67e8f9

pub const PURPLE_500: Color = Color::Rgb(168, 85, 247); // #a855f7
pub const PINK_500: Color = Color::Rgb(236, 72, 153); // #ec4899

/// A two-stop linear gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Color,
    pub to: Color,
}

impl Gradient {
    pub const fn new(from: Color, to: Color) -> Self {
        Self { from, to }
    }

    /// Brand gradient used for the logo and the primary call-to-action
    pub const BRAND: Gradient = Gradient::new(PURPLE_500, PINK_500);
    /// Soft chip background of the suggestion strip
    pub const CHIP: Gradient = Gradient::new(PURPLE_100, PINK_100);

    /// Colour at position `t` in `0.0..=1.0`.
    ///
    /// Non-RGB stops can't be blended; the nearer stop wins.
    pub fn at(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        match (self.from, self.to) {
            (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => Color::Rgb(
                lerp(r1, r2, t),
                lerp(g1, g2, t),
                lerp(b1, b2, t),
            ),
            _ if t < 0.5 => self.from,
            _ => self.to,
        }
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    let v = a as f32 + (b as f32 - a as f32) * t;
    v.round().clamp(0.0, 255.0) as u8
}

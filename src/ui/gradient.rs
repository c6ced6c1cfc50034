//! Gradient background widget

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::palette::Gradient;

/// Direction the gradient runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientDirection {
    /// Left to right (`bg-gradient-to-r`)
    Horizontal,
    /// Top-left to bottom-right (`bg-gradient-to-br`)
    Diagonal,
}

/// Paints the background of every cell in its area, leaving symbols alone
pub struct GradientFill {
    gradient: Gradient,
    direction: GradientDirection,
}

impl GradientFill {
    pub fn new(gradient: Gradient, direction: GradientDirection) -> Self {
        Self { gradient, direction }
    }
}

impl Widget for GradientFill {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let span_x = (area.width.max(2) - 1) as f32;
        let span_y = (area.height.max(2) - 1) as f32;

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let fx = (x - area.x) as f32 / span_x;
                let fy = (y - area.y) as f32 / span_y;
                let t = match self.direction {
                    GradientDirection::Horizontal => fx,
                    GradientDirection::Diagonal => (fx + fy) / 2.0,
                };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(self.gradient.at(t));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};

    const G: Gradient = Gradient::new(Color::Rgb(0, 0, 0), Color::Rgb(100, 100, 100));

    #[test]
    fn test_diagonal_corners() {
        let area = Rect::new(0, 0, 11, 5);
        let mut buf = Buffer::empty(area);
        GradientFill::new(G, GradientDirection::Diagonal).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].bg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(10, 4)].bg, Color::Rgb(100, 100, 100));
        assert_eq!(buf[(10, 0)].bg, Color::Rgb(50, 50, 50));
    }

    #[test]
    fn test_horizontal_ignores_rows() {
        let area = Rect::new(2, 1, 5, 3);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));
        GradientFill::new(G, GradientDirection::Horizontal).render(area, &mut buf);

        assert_eq!(buf[(2, 1)].bg, buf[(2, 3)].bg);
        assert_eq!(buf[(6, 2)].bg, Color::Rgb(100, 100, 100));
        // Outside the area is untouched
        assert_eq!(buf[(0, 0)].bg, Color::Reset);
    }

    #[test]
    fn test_keeps_symbols() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "ab", Style::default());
        GradientFill::new(G, GradientDirection::Horizontal).render(area, &mut buf);
        assert_eq!(buf[(1, 0)].symbol(), "b");
    }
}

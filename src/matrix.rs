// LED matrix output: a Surface backed by an rpi-led-matrix chain

use rpi_led_matrix::{LedCanvas, LedColor, LedMatrix};
use tracing::debug;

use crate::color::Color;
use crate::ports::Surface;

/// Double-buffered matrix surface.
///
/// Draws into the off-screen canvas and swaps it in on `present`.
pub struct MatrixSurface {
    matrix: LedMatrix,
    canvas: Option<LedCanvas>,
    width: i32,
    height: i32,
    flip_vertical: bool,  // Panels mounted upside down
    brightness: f64,      // 0.0 to 1.0
}

impl MatrixSurface {
    pub fn new(matrix: LedMatrix, flip_vertical: bool) -> Self {
        let canvas = matrix.offscreen_canvas();
        let (width, height) = canvas.canvas_size();
        Self {
            matrix,
            canvas: Some(canvas),
            width,
            height,
            flip_vertical,
            brightness: 1.0,
        }
    }

    pub fn set_brightness(&mut self, brightness: f64) {
        self.brightness = brightness.clamp(0.1, 1.0);
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    fn led_color(&self, color: Color) -> LedColor {
        let (r, g, b) = color.to_rgb888();
        let scale = |c: u8| (c as f64 * self.brightness) as u8;
        LedColor {
            red: scale(r),
            green: scale(g),
            blue: scale(b),
        }
    }

    /// Fill one row from `x0` to `x1` inclusive, clipped to the panel
    fn span(&mut self, x0: i32, x1: i32, y: i32, color: &LedColor) {
        if y < 0 || y >= self.height {
            return;
        }
        let y = if self.flip_vertical { self.height - 1 - y } else { y };
        let (x0, x1) = (x0.max(0), x1.min(self.width - 1));
        if let Some(canvas) = self.canvas.as_mut() {
            for x in x0..=x1 {
                canvas.set(x, y, color);
            }
        }
    }
}

impl Surface for MatrixSurface {
    fn clear(&mut self, color: Color) {
        let led = self.led_color(color);
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.fill(&led);
        }
    }

    fn fill_round_rect(&mut self, x: i32, y: i32, width: i32, height: i32, radius: i32, color: Color) {
        if width <= 0 || height <= 0 {
            return;
        }
        let led = self.led_color(color);
        let r = radius.min(width / 2).min(height / 2).max(0);

        for row in 0..height {
            // Vertical distance into the corner arc, 0 outside the corners
            let dy = if row < r {
                r - row
            } else if row >= height - r {
                row - (height - 1 - r)
            } else {
                0
            };
            let inset = if dy > 0 {
                let reach = ((r * r - dy * dy).max(0) as f32).sqrt() as i32;
                r - reach
            } else {
                0
            };
            self.span(x + inset, x + width - 1 - inset, y + row, &led);
        }
    }

    fn fill_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, color: Color) {
        let led = self.led_color(color);
        let mut pts = [(x1, y1), (x2, y2), (x3, y3)];
        pts.sort_by_key(|&(_, y)| y);
        let [(ax, ay), (bx, by), (cx, cy)] = pts;

        // x where the edge from `p` to `q` crosses row `y`
        let edge_x = |(px, py): (i32, i32), (qx, qy): (i32, i32), y: i32| -> i32 {
            if qy == py {
                return px;
            }
            px + ((qx - px) as f32 * (y - py) as f32 / (qy - py) as f32).round() as i32
        };

        for y in ay..=cy {
            let long = edge_x((ax, ay), (cx, cy), y);
            let short = if y < by {
                edge_x((ax, ay), (bx, by), y)
            } else {
                edge_x((bx, by), (cx, cy), y)
            };
            self.span(long.min(short), long.max(short), y, &led);
        }
    }

    fn resize(&mut self, width: i32, height: i32) {
        // The chain is fixed; drawing is clipped to the physical panel
        debug!(width, height, panel_width = self.width, panel_height = self.height, "resize on fixed matrix");
    }

    fn present(&mut self) {
        if let Some(canvas) = self.canvas.take() {
            self.canvas = Some(self.matrix.swap(canvas));
        }
    }
}

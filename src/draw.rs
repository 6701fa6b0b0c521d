use crate::config::{Palette, Rgba};
use crate::game::GameState;
use crate::grid::{GridCell, GridLayout};

/// RGBA8 pixel buffer view with clipped primitives.
struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        Self { frame, width, height }
    }

    fn clear(&mut self, color: Rgba) {
        for px in self.frame.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    fn put(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = ((y as usize) * self.width as usize + x as usize) * 4;
        if let Some(px) = self.frame.get_mut(idx..idx + 4) {
            px.copy_from_slice(&color);
        }
    }

    /// Axis-aligned line, both ends inclusive.
    fn line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba) {
        if x0 == x1 {
            for y in y0.min(y1)..=y0.max(y1) {
                self.put(x0, y, color);
            }
        } else if y0 == y1 {
            for x in x0.min(x1)..=x0.max(x1) {
                self.put(x, y0, color);
            }
        }
    }

    fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, color: Rgba) {
        let x2 = (x + w as i64).min(self.width as i64);
        let y2 = (y + h as i64).min(self.height as i64);
        for py in y.max(0)..y2 {
            for px in x.max(0)..x2 {
                self.put(px, py, color);
            }
        }
    }
}

/// Draws the board. Grid lines never change, so they are rendered once into
/// `stage` and copied under every frame.
pub struct Renderer {
    layout: GridLayout,
    palette: Palette,
    stage: Vec<u8>,
}

impl Renderer {
    pub fn new(layout: GridLayout, palette: Palette) -> Self {
        let (width, height) = (layout.screen_width(), layout.screen_height());
        let mut stage = vec![0; width as usize * height as usize * 4];
        render_stage(&mut Canvas::new(&mut stage, width, height), &layout, &palette);
        Self {
            layout,
            palette,
            stage,
        }
    }

    #[cfg(test)]
    fn stage(&self) -> &[u8] {
        &self.stage
    }

    pub fn draw(&self, frame: &mut [u8], game: &GameState) {
        let mut canvas = Canvas::new(frame, self.layout.screen_width(), self.layout.screen_height());
        if canvas.frame.len() == self.stage.len() {
            canvas.frame.copy_from_slice(&self.stage);
        } else {
            log::warn!(
                "frame is {} bytes, stage is {}; drawing without grid",
                canvas.frame.len(),
                self.stage.len()
            );
            canvas.clear(self.palette.background);
        }

        self.fill_cell(&mut canvas, game.food(), self.palette.food);
        for cell in game.snake().iter() {
            self.fill_cell(&mut canvas, cell, self.palette.snake);
        }
    }

    fn fill_cell(&self, canvas: &mut Canvas, cell: GridCell, color: Rgba) {
        if !self.layout.contains(cell) {
            return;
        }
        let p = self.layout.grid_to_pixel(cell);
        let size = self.layout.cell_size();
        canvas.fill_rect(p.x as i64, p.y as i64, size, size, color);
    }
}

fn render_stage(canvas: &mut Canvas, layout: &GridLayout, palette: &Palette) {
    canvas.clear(palette.background);

    let size = layout.cell_size() as i64;
    let (xo, yo) = (layout.x_offset() as i64, layout.y_offset() as i64);
    let (w, h) = (layout.screen_width() as i64, layout.screen_height() as i64);

    for i in 0..=layout.columns() as i64 {
        let x = xo + i * size;
        canvas.line(x, yo, x, h - yo, palette.grid);
    }
    for i in 0..=layout.rows() as i64 {
        let y = yo + i * size;
        canvas.line(xo, y, w - xo, y, palette.grid);
    }
}

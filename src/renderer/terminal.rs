//! Terminal backend
//!
//! Draws the scene into an RGB pixel buffer and flushes it with half-block
//! characters, two pixels per terminal cell. The last terminal row is
//! reserved for a plain-text HUD line.

use std::io::{self, Stdout, Write, stdout};

use crossterm::{
    cursor,
    queue,
    style::{self, Color},
    terminal,
};

use super::{Renderer, Scene, ShapeKind};
use crate::sim::GamePhase;

#[derive(Clone, Copy, PartialEq)]
struct Rgb(u8, u8, u8);

const SKY_TOP: Rgb = Rgb(70, 180, 200);
const SKY_BOT: Rgb = Rgb(190, 232, 245);
const PIPE: Rgb = Rgb(42, 157, 143);
const PIPE_CAP: Rgb = Rgb(29, 122, 107);
const GROUND: Rgb = Rgb(139, 69, 19);
const BIRD: Rgb = Rgb(255, 215, 0);
const BIRD_WING: Rgb = Rgb(255, 165, 0);
const SCORE_FG: Rgb = Rgb(255, 255, 255);
const SHADOW: Rgb = Rgb(30, 30, 30);

/// 3x5 bitmap digits for the score
#[rustfmt::skip]
const DIGITS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

/// RGB pixel buffer; height is terminal rows x 2
struct PixelBuf {
    w: usize,
    h: usize,
    px: Vec<Rgb>,
}

impl PixelBuf {
    fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![SKY_TOP; w * h],
        }
    }

    fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.resize(w * h, SKY_TOP);
    }

    fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    fn fill_sky(&mut self) {
        for y in 0..self.h {
            let t = (y * 256 / self.h.max(1)) as i32;
            let c = Rgb(
                (SKY_TOP.0 as i32 + (SKY_BOT.0 as i32 - SKY_TOP.0 as i32) * t / 256) as u8,
                (SKY_TOP.1 as i32 + (SKY_BOT.1 as i32 - SKY_TOP.1 as i32) * t / 256) as u8,
                (SKY_TOP.2 as i32 + (SKY_BOT.2 as i32 - SKY_TOP.2 as i32) * t / 256) as u8,
            );
            for x in 0..self.w {
                self.px[y * self.w + x] = c;
            }
        }
    }

    /// Flush with U+2580 half blocks, one cell per two vertical pixels
    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut prev_fg: Option<Rgb> = None;
        let mut prev_bg: Option<Rgb> = None;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);

                if prev_fg != Some(top) {
                    queue!(
                        out,
                        style::SetForegroundColor(Color::Rgb {
                            r: top.0,
                            g: top.1,
                            b: top.2
                        })
                    )?;
                    prev_fg = Some(top);
                }
                if prev_bg != Some(bot) {
                    queue!(
                        out,
                        style::SetBackgroundColor(Color::Rgb {
                            r: bot.0,
                            g: bot.1,
                            b: bot.2
                        })
                    )?;
                    prev_bg = Some(bot);
                }
                queue!(out, style::Print('\u{2580}'))?;
            }
            queue!(out, style::ResetColor, style::Print("\r\n"))?;
            prev_fg = None;
            prev_bg = None;
        }
        Ok(())
    }
}

fn draw_digit(buf: &mut PixelBuf, x: i32, y: i32, d: u8, fg: Rgb) {
    let glyph = &DIGITS[d as usize];
    for row in 0..5 {
        for col in 0..3 {
            if glyph[row * 3 + col] == 1 {
                let px = x + col as i32;
                let py = y + row as i32;
                buf.set(px + 1, py + 1, SHADOW);
                buf.set(px, py, fg);
            }
        }
    }
}

fn draw_number(buf: &mut PixelBuf, cx: i32, y: i32, n: u32, fg: Rgb) {
    let s = n.to_string();
    let total_w = s.len() as i32 * 4 - 1; // 3px per digit + 1px spacing
    let start_x = cx - total_w / 2;
    for (i, ch) in s.chars().enumerate() {
        let d = ch as u8 - b'0';
        draw_digit(buf, start_x + i as i32 * 4, y, d, fg);
    }
}

/// Crossterm half-block renderer
pub struct TerminalRenderer {
    out: Stdout,
    buf: PixelBuf,
    cols: u16,
    rows: u16,
}

impl TerminalRenderer {
    pub fn new() -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let mut renderer = Self {
            out: stdout(),
            buf: PixelBuf::new(1, 2),
            cols: 0,
            rows: 0,
        };
        renderer.resize(cols, rows);
        Ok(renderer)
    }

    /// Track a terminal resize; the bottom row stays text-only
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(2);
        self.rows = rows.max(2);
        let pixel_rows = (self.rows - 1) as usize * 2;
        self.buf.resize(self.cols as usize, pixel_rows);
    }

    fn hud_line(&self, scene: &Scene) -> String {
        let hint = match scene.phase {
            GamePhase::Idle => "ENTER to start",
            GamePhase::Running => "SPACE to flap",
            GamePhase::GameOver => "game over - ENTER to retry",
        };
        format!(
            " score {}  best {}  |  {hint}  |  Q quits",
            scene.score, scene.best
        )
    }
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, scene: &Scene) -> io::Result<()> {
        // Uniform scale, centered horizontally, anchored to the top
        let sx = self.buf.w as f32 / scene.width;
        let sy = self.buf.h as f32 / scene.height;
        let s = sx.min(sy);
        let ox = (self.buf.w as f32 - scene.width * s) / 2.0;

        self.buf.fill_sky();

        for rect in &scene.rects {
            let color = match rect.kind {
                ShapeKind::Avatar => BIRD,
                ShapeKind::PipeTop | ShapeKind::PipeBottom => PIPE,
                ShapeKind::Ground => GROUND,
            };
            let x = (ox + rect.x * s) as i32;
            let y = (rect.y * s) as i32;
            let w = ((rect.width * s) as i32).max(1);
            let h = ((rect.height * s) as i32).max(1);
            self.buf.fill_rect(x, y, w, h, color);

            // A touch of detail: pipe caps at the gap and a wing stripe
            match rect.kind {
                ShapeKind::PipeTop => self.buf.fill_rect(x, y + h - 1, w, 1, PIPE_CAP),
                ShapeKind::PipeBottom => self.buf.fill_rect(x, y, w, 1, PIPE_CAP),
                ShapeKind::Avatar => self.buf.fill_rect(x, y + h / 3, (w / 3).max(1), 2, BIRD_WING),
                ShapeKind::Ground => {}
            }
        }

        let center_x = self.buf.w as i32 / 2;
        draw_number(&mut self.buf, center_x, 3, scene.score, SCORE_FG);

        self.buf.render(&mut self.out)?;

        // Text HUD on the reserved bottom row
        let mut hud = self.hud_line(scene);
        hud.truncate(self.cols as usize);
        queue!(
            self.out,
            cursor::MoveTo(0, self.rows - 1),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(hud)
        )?;
        self.out.flush()
    }
}

//! Frames-per-second indicator, drawn after the tree so nothing covers it.
//!
//! Digits are seven-segment glyphs built from plain rects, which keeps the
//! overlay on the same renderer (and in the same paint order) as the scene.

use std::time::Instant;

use sprig_engine::coords::{Rect, Vec2};
use sprig_engine::paint::Color;
use sprig_engine::time::FpsCounter;

use crate::painter::Painter;

/// Distance from the right window edge to the overlay's left edge.
pub const FPS_OFFSET_FROM_RIGHT: f32 = 80.0;

const DIGIT_W: f32 = 10.0;
const DIGIT_H: f32 = 18.0;
const STROKE: f32 = 2.0;
const ADVANCE: f32 = DIGIT_W + 4.0;
const PADDING: f32 = 4.0;
const MAX_SHOWN: u32 = 9999;

// Segment bits: a=top, b=upper right, c=lower right, d=bottom,
// e=lower left, f=upper left, g=middle.
const A: u8 = 1 << 0;
const B: u8 = 1 << 1;
const C: u8 = 1 << 2;
const D: u8 = 1 << 3;
const E: u8 = 1 << 4;
const F: u8 = 1 << 5;
const G: u8 = 1 << 6;

const DIGITS: [u8; 10] = [
    A | B | C | D | E | F,
    B | C,
    A | B | D | E | G,
    A | B | C | D | G,
    B | C | F | G,
    A | C | D | F | G,
    A | C | D | E | F | G,
    A | B | C,
    A | B | C | D | E | F | G,
    A | B | C | D | F | G,
];

pub struct FpsOverlay {
    counter: FpsCounter,
    color: Color,
}

impl FpsOverlay {
    pub fn new() -> Self {
        Self { counter: FpsCounter::new(), color: Color::LIME }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Records a presented frame.
    pub fn record(&mut self, now: Instant) {
        self.counter.record(now);
    }

    pub fn fps(&self) -> u32 {
        self.counter.fps()
    }

    /// Draws the current rate at `(window_width - 80, 0)`.
    pub fn draw(&self, painter: &mut Painter<'_>, window_width: f32) {
        let origin = Vec2::new(window_width - FPS_OFFSET_FROM_RIGHT + PADDING, PADDING);
        draw_number(painter, self.fps().min(MAX_SHOWN), origin, self.color);
    }
}

impl Default for FpsOverlay {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_number(painter: &mut Painter<'_>, value: u32, origin: Vec2, color: Color) {
    let text = value.to_string();
    for (i, ch) in text.bytes().enumerate() {
        let digit = (ch - b'0') as usize;
        let at = Vec2::new(origin.x + i as f32 * ADVANCE, origin.y);
        for rect in segments(DIGITS[digit], at) {
            painter.fill_rect(rect, color);
        }
    }
}

fn segments(mask: u8, at: Vec2) -> impl Iterator<Item = Rect> {
    let (x, y) = (at.x, at.y);
    let half = DIGIT_H * 0.5;
    let vert = half - 1.5 * STROKE;
    let mid = y + half;

    let rects = [
        (A, Rect::new(x + STROKE, y, DIGIT_W - 2.0 * STROKE, STROKE)),
        (B, Rect::new(x + DIGIT_W - STROKE, y + STROKE, STROKE, vert)),
        (C, Rect::new(x + DIGIT_W - STROKE, mid + 0.5 * STROKE, STROKE, vert)),
        (D, Rect::new(x + STROKE, y + DIGIT_H - STROKE, DIGIT_W - 2.0 * STROKE, STROKE)),
        (E, Rect::new(x, mid + 0.5 * STROKE, STROKE, vert)),
        (F, Rect::new(x, y + STROKE, STROKE, vert)),
        (G, Rect::new(x + STROKE, mid - 0.5 * STROKE, DIGIT_W - 2.0 * STROKE, STROKE)),
    ];

    rects
        .into_iter()
        .filter(move |(bit, _)| mask & bit != 0)
        .map(|(_, rect)| rect)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sprig_engine::scene::{DrawCmd, DrawList};

    use super::*;

    fn rects(dl: &DrawList) -> Vec<Rect> {
        dl.items().iter().map(|DrawCmd::RoundedRect(r)| r.rect).collect()
    }

    #[test]
    fn segment_counts_match_glyphs() {
        let count = |d: usize| segments(DIGITS[d], Vec2::zero()).count();
        assert_eq!(count(8), 7);
        assert_eq!(count(1), 2);
        assert_eq!(count(0), 6);
        assert_eq!(count(7), 3);
    }

    #[test]
    fn segments_stay_inside_the_cell() {
        for rect in segments(DIGITS[8], Vec2::new(5.0, 5.0)) {
            assert!(rect.x() >= 5.0 && rect.max().x <= 5.0 + DIGIT_W);
            assert!(rect.y() >= 5.0 && rect.max().y <= 5.0 + DIGIT_H);
        }
    }

    #[test]
    fn draws_in_top_right_corner() {
        let mut overlay = FpsOverlay::new();
        let t0 = Instant::now();
        for i in 0..=60u32 {
            overlay.record(t0 + Duration::from_micros(16_667) * i);
        }
        assert_eq!(overlay.fps(), 60);

        let mut dl = DrawList::new();
        overlay.draw(&mut Painter::new(&mut dl), 400.0);

        // "6" and "0" are six segments each
        let all = rects(&dl);
        assert_eq!(all.len(), 12);
        for r in all {
            assert!(r.x() >= 320.0 && r.max().x <= 400.0);
            assert!(r.y() >= 0.0 && r.max().y <= 30.0);
        }
    }

    #[test]
    fn zero_fps_draws_a_zero() {
        let mut dl = DrawList::new();
        FpsOverlay::new().draw(&mut Painter::new(&mut dl), 400.0);
        assert_eq!(dl.len(), 6);
    }
}

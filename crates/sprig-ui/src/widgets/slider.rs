use sprig_engine::coords::{CornerRadii, Rect};
use sprig_engine::paint::Color;

use crate::ctx::UiCtx;
use crate::input::PointerSnapshot;
use crate::painter::Painter;
use crate::signal::UiSignal;
use crate::widget::{Propagation, Widget};

/// Visual interaction state of a [`Slider`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SliderState {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

/// Strongest pointer delivery seen since the last update.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Delivery {
    Hover,
    Press,
}

/// A horizontal slider for selecting a value in a range.
///
/// Pressing captures the pointer, so a drag keeps updating the value even
/// after the pointer leaves the slider. Releasing while captured emits
/// [`UiSignal::Clicked`] and gives the pointer back.
///
/// # Example
/// ```rust,ignore
/// Slider::new()
///     .min(0.0).max(100.0).value(50.0)
///     .pressed_color(Color::DARK_BLUE)
/// ```
pub struct Slider {
    state: SliderState,
    delivered: Option<Delivery>,

    /// Current value (clamped to [min, max]).
    value: f32,
    min: f32,
    max: f32,

    idle_color: Color,
    hover_color: Color,
    pressed_color: Color,
    fill_color: Color,
    thumb_color: Color,
    corner_radius: f32,
    thumb_width: f32,
}

impl Slider {
    pub fn new() -> Self {
        Self {
            state: SliderState::Idle,
            delivered: None,
            value: 0.0,
            min: 0.0,
            max: 1.0,
            idle_color: Color::LIGHT_GRAY,
            hover_color: Color::SKY_BLUE,
            pressed_color: Color::BLUE,
            fill_color: Color::DARK_BLUE,
            thumb_color: Color::WHITE,
            corner_radius: 6.0,
            thumb_width: 6.0,
        }
    }

    pub fn value(mut self, v: f32) -> Self {
        self.value = self.clamp(v);
        self
    }
    pub fn min(mut self, v: f32) -> Self { self.min = v; self.value = self.clamp(self.value); self }
    pub fn max(mut self, v: f32) -> Self { self.max = v; self.value = self.clamp(self.value); self }
    pub fn idle_color(mut self, v: Color) -> Self { self.idle_color = v; self }
    pub fn hover_color(mut self, v: Color) -> Self { self.hover_color = v; self }
    pub fn pressed_color(mut self, v: Color) -> Self { self.pressed_color = v; self }
    pub fn fill_color(mut self, v: Color) -> Self { self.fill_color = v; self }
    pub fn thumb_color(mut self, v: Color) -> Self { self.thumb_color = v; self }
    pub fn corner_radius(mut self, v: f32) -> Self { self.corner_radius = v; self }

    pub fn state(&self) -> SliderState {
        self.state
    }

    pub fn current(&self) -> f32 {
        self.value
    }

    /// Background color for the current state.
    pub fn state_color(&self) -> Color {
        match self.state {
            SliderState::Idle => self.idle_color,
            SliderState::Hovered => self.hover_color,
            SliderState::Pressed => self.pressed_color,
        }
    }

    /// Normalized value in [0, 1].
    fn normalized(&self) -> f32 {
        if (self.max - self.min).abs() < f32::EPSILON {
            0.0
        } else {
            ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
        }
    }

    fn clamp(&self, v: f32) -> f32 {
        let (lo, hi) = if self.min <= self.max { (self.min, self.max) } else { (self.max, self.min) };
        v.clamp(lo, hi)
    }

    fn value_at(&self, x: f32, rect: Rect) -> f32 {
        if rect.width() <= 0.0 {
            return self.value;
        }
        let t = ((x - rect.x()) / rect.width()).clamp(0.0, 1.0);
        self.min + t * (self.max - self.min)
    }
}

impl Default for Slider { fn default() -> Self { Self::new() } }

impl Widget for Slider {
    fn update(&mut self, ctx: &mut UiCtx<'_>) {
        let delivered = self.delivered.take();

        self.state = match (self.state, delivered) {
            (_, Some(Delivery::Press)) => SliderState::Pressed,
            // Release edge. No delivery at all means the pointer went elsewhere,
            // e.g. an overlapping sibling took the capture.
            (SliderState::Pressed, released) => {
                let node = ctx.node();
                ctx.emit(UiSignal::Clicked(node));
                ctx.release_pointer();
                if released.is_some() { SliderState::Hovered } else { SliderState::Idle }
            }
            (_, Some(Delivery::Hover)) => SliderState::Hovered,
            (_, None) => SliderState::Idle,
        };
    }

    fn draw(&self, painter: &mut Painter<'_>, rect: Rect) {
        painter.fill_rounded_rect(rect, self.corner_radius, self.state_color());

        // Track fill, left of the thumb. Square on the right where it meets the thumb.
        let inner = rect.inset(3.0);
        let fill_w = inner.width() * self.normalized();
        if fill_w > 0.0 {
            let fill = Rect::new(inner.x(), inner.y(), fill_w, inner.height());
            let r = (self.corner_radius - 3.0).max(0.0);
            painter.fill_rounded_rect_corners(fill, CornerRadii::new(r, 0.0, 0.0, r), self.fill_color);
        }

        // Thumb
        let thumb_x = (inner.x() + fill_w - self.thumb_width * 0.5)
            .clamp(inner.x(), (inner.max().x - self.thumb_width).max(inner.x()));
        let thumb = Rect::new(thumb_x, inner.y(), self.thumb_width, inner.height());
        painter.fill_rounded_rect(thumb, 2.0, self.thumb_color);
    }

    fn on_pointer(&mut self, pointer: &PointerSnapshot, ctx: &mut UiCtx<'_>) -> Propagation {
        if !pointer.left_down {
            if self.delivered.is_none() {
                self.delivered = Some(Delivery::Hover);
            }
            return Propagation::Stop;
        }

        self.delivered = Some(Delivery::Press);
        ctx.capture_pointer();

        let value = self.value_at(pointer.position.x, ctx.rect());
        if value != self.value {
            self.value = value;
            let node = ctx.node();
            ctx.emit(UiSignal::ValueChanged { node, value });
        }
        Propagation::Stop
    }
}

use std::time::Instant;

use anyhow::Result;
use winit::dpi::LogicalSize;

use sprig_engine::coords::Size;
use sprig_engine::core::{App as EngineApp, AppControl, FrameCtx};
use sprig_engine::device::GpuInit;
use sprig_engine::paint::Color;
use sprig_engine::render::RoundedRectRenderer;
use sprig_engine::scene::DrawList;
use sprig_engine::window::{Runtime, RuntimeConfig};

use crate::dispatch::Dispatcher;
use crate::input::{KeySnapshot, PointerSnapshot};
use crate::overlay::FpsOverlay;
use crate::painter::Painter;
use crate::signal::{Signals, UiSignal};
use crate::tree::Tree;

type SignalHandler = Box<dyn FnMut(&UiSignal, &mut Tree)>;

/// When inactive nodes are removed from the tree.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SweepPolicy {
    /// After every update.
    #[default]
    EveryFrame,
    /// Only when the application calls `Tree::sweep_inactive` itself,
    /// typically from a signal handler.
    Manual,
}

// ── Application ───────────────────────────────────────────────────────────

/// Top-level UI application builder.
///
/// ```rust,ignore
/// Application::new()
///     .title("sprig")
///     .size(400.0, 600.0)
///     .on_signal(|signal, _tree| println!("{signal:?}"))
///     .run(|size| {
///         let mut tree = Tree::new(AbsoluteLayout::new(), Vec2::zero(), size);
///         tree.add_child(tree.root(), Vec2::new(100.0, 280.0), Size::new(200.0, 40.0), Slider::new())?;
///         Ok(tree)
///     })
/// ```
pub struct Application {
    title:        String,
    width:        f64,
    height:       f64,
    target_fps:   Option<u32>,
    clear_color:  Color,
    sweep_policy: SweepPolicy,
    show_fps:     bool,
    on_signal:    Option<SignalHandler>,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title:        "sprig".to_string(),
            width:        400.0,
            height:       600.0,
            target_fps:   Some(60),
            clear_color:  Color::WHITE,
            sweep_policy: SweepPolicy::EveryFrame,
            show_fps:     true,
            on_signal:    None,
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    /// Frame rate the loop paces to. `None` leaves pacing to vsync alone.
    pub fn target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn sweep_policy(mut self, policy: SweepPolicy) -> Self {
        self.sweep_policy = policy;
        self
    }

    /// Toggle the FPS indicator in the top-right corner.
    pub fn show_fps(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }

    /// Called for every signal, after it has been logged.
    pub fn on_signal(mut self, f: impl FnMut(&UiSignal, &mut Tree) + 'static) -> Self {
        self.on_signal = Some(Box::new(f));
        self
    }

    // ── Entry point ───────────────────────────────────────────────────────

    /// Builds the scene and runs the event loop until the window closes.
    ///
    /// `build` receives the initial window size in logical pixels.
    pub fn run<F>(self, build: F) -> Result<()>
    where
        F: FnOnce(Size) -> Result<Tree>,
    {
        let tree = build(Size::new(self.width as f32, self.height as f32))?;
        log::debug!("scene built with {} node(s)", tree.len());

        let config = RuntimeConfig {
            title:        self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            target_fps:   self.target_fps,
        };
        let state = UiAppState::new(self, tree);
        Runtime::run(config, GpuInit::default(), state)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Implements `sprig_engine::core::App`. Everything engine-specific lives here.
struct UiAppState {
    tree:       Tree,
    dispatcher: Dispatcher,
    signals:    Signals,

    draw_list: DrawList,
    renderer:  RoundedRectRenderer,
    overlay:   Option<FpsOverlay>,

    clear_color:  Color,
    sweep_policy: SweepPolicy,
    on_signal:    Option<SignalHandler>,
}

impl UiAppState {
    fn new(app: Application, tree: Tree) -> Self {
        Self {
            tree,
            dispatcher:   Dispatcher::new(),
            signals:      Signals::new(),
            draw_list:    DrawList::new(),
            renderer:     RoundedRectRenderer::new(),
            overlay:      app.show_fps.then(FpsOverlay::new),
            clear_color:  app.clear_color,
            sweep_policy: app.sweep_policy,
            on_signal:    app.on_signal,
        }
    }

    /// Input and state half of a frame: dispatch, update, sweep, signals.
    fn step(&mut self, pointer: &PointerSnapshot, keys: &KeySnapshot) {
        self.dispatcher
            .dispatch(&mut self.tree, pointer, keys, &mut self.signals);
        self.tree.update(self.dispatcher.captures_mut(), &mut self.signals);

        if self.sweep_policy == SweepPolicy::EveryFrame {
            self.tree.sweep_inactive();
        }

        for signal in self.signals.drain() {
            log::info!("signal: {signal:?}");
            if let Some(handler) = self.on_signal.as_mut() {
                handler(&signal, &mut self.tree);
            }
        }

        // Handlers may deactivate or sweep nodes.
        self.dispatcher.prune(&self.tree);
    }

    /// Records the frame's draw list: the tree, then the FPS overlay on top.
    fn record(&mut self, window_width: f32, now: Instant) {
        self.draw_list.clear();
        let mut painter = Painter::new(&mut self.draw_list);
        self.tree.full_draw(&mut painter);

        if let Some(overlay) = self.overlay.as_mut() {
            overlay.record(now);
            overlay.draw(&mut painter, window_width);
        }
    }
}

impl EngineApp for UiAppState {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let pointer = PointerSnapshot::sample(ctx.input);
        let keys = KeySnapshot::sample(ctx.input, ctx.input_frame);
        self.step(&pointer, &keys);

        let size = ctx.window.logical_size();
        self.record(size.width, ctx.time.now);

        let (renderer, draw_list) = (&mut self.renderer, &self.draw_list);
        ctx.render(self.clear_color, |rctx, target| {
            renderer.render(rctx, target, draw_list);
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use sprig_engine::coords::Vec2;
    use sprig_engine::scene::DrawCmd;

    use super::*;
    use crate::tree::NodeId;
    use crate::widgets::{AbsoluteLayout, Slider};

    fn scene() -> (Tree, NodeId) {
        let mut tree = Tree::new(AbsoluteLayout::new(), Vec2::zero(), Size::new(400.0, 600.0));
        let slider = tree
            .add_child(tree.root(), Vec2::new(100.0, 280.0), Size::new(200.0, 40.0), Slider::new())
            .unwrap();
        (tree, slider)
    }

    fn pointer(x: f32, y: f32, left_down: bool) -> PointerSnapshot {
        PointerSnapshot::new(Vec2::new(x, y), left_down)
    }

    #[test]
    fn click_reaches_signal_handler() {
        let seen: Rc<RefCell<Vec<UiSignal>>> = Rc::default();
        let sink = seen.clone();
        let app = Application::new().on_signal(move |s, _| sink.borrow_mut().push(*s));

        let (tree, slider) = scene();
        let mut state = UiAppState::new(app, tree);
        let keys = KeySnapshot::default();

        state.step(&pointer(150.0, 300.0, false), &keys);
        state.step(&pointer(150.0, 300.0, true), &keys);
        state.step(&pointer(150.0, 300.0, false), &keys);

        let clicks: Vec<UiSignal> = seen
            .borrow()
            .iter()
            .copied()
            .filter(|s| matches!(s, UiSignal::Clicked(_)))
            .collect();
        assert_eq!(clicks, vec![UiSignal::Clicked(slider)]);
        assert!(state.signals.is_empty());
    }

    #[test]
    fn every_frame_policy_sweeps() {
        let (mut tree, slider) = scene();
        tree.set_active(slider, false).unwrap();
        let mut state = UiAppState::new(Application::new(), tree);

        state.step(&PointerSnapshot::default(), &KeySnapshot::default());
        assert!(!state.tree.contains(slider));
    }

    #[test]
    fn manual_policy_keeps_inactive_nodes() {
        let (mut tree, slider) = scene();
        tree.set_active(slider, false).unwrap();
        let app = Application::new().sweep_policy(SweepPolicy::Manual);
        let mut state = UiAppState::new(app, tree);

        state.step(&PointerSnapshot::default(), &KeySnapshot::default());
        assert!(state.tree.contains(slider));
    }

    #[test]
    fn handler_can_deactivate_the_capturing_node() {
        // Deactivate the slider the moment its value changes; the capture it
        // holds must not survive the frame.
        let app = Application::new().on_signal(|s, tree| {
            if let UiSignal::ValueChanged { node, .. } = *s {
                tree.set_active(node, false).unwrap();
            }
        });
        let (tree, slider) = scene();
        let mut state = UiAppState::new(app.sweep_policy(SweepPolicy::Manual), tree);

        state.step(&pointer(150.0, 300.0, true), &KeySnapshot::default());
        assert!(state.tree.contains(slider));
        assert_eq!(state.dispatcher.pointer_capture(), None);
    }

    #[test]
    fn overlay_is_drawn_last() {
        let (tree, _) = scene();
        let mut state = UiAppState::new(Application::new(), tree);
        state.step(&PointerSnapshot::default(), &KeySnapshot::default());
        state.record(400.0, Instant::now());

        let items = state.draw_list.items();
        let DrawCmd::RoundedRect(first) = &items[0];
        let DrawCmd::RoundedRect(last) = &items[items.len() - 1];
        assert_eq!(first.color, Color::LIGHT_GRAY);
        assert_eq!(last.color, Color::LIME);
        assert!(last.rect.x() >= 320.0);
    }

    #[test]
    fn overlay_can_be_disabled() {
        let (tree, _) = scene();
        let mut state = UiAppState::new(Application::new().show_fps(false), tree);
        state.record(400.0, Instant::now());

        assert!(state
            .draw_list
            .items()
            .iter()
            .all(|DrawCmd::RoundedRect(r)| r.color != Color::LIME));
    }

    #[test]
    fn builder_defaults() {
        let app = Application::default();
        assert_eq!(app.title, "sprig");
        assert_eq!((app.width, app.height), (400.0, 600.0));
        assert_eq!(app.target_fps, Some(60));
        assert_eq!(app.clear_color, Color::WHITE);
        assert_eq!(app.sweep_policy, SweepPolicy::EveryFrame);
        assert!(app.show_fps);
    }
}

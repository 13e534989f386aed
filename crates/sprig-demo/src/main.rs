use anyhow::Result;

use sprig_engine::logging::{LoggingConfig, init_logging};
use sprig_ui::prelude::*;

const SLIDER_SIZE: Size = Size::new(200.0, 40.0);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Application::new()
        .title("sprig")
        .size(400.0, 600.0)
        .target_fps(Some(60))
        .clear_color(Color::WHITE)
        .on_signal(|signal, tree| {
            let node = signal.node();
            if let UiSignal::ValueChanged { value, .. } = *signal {
                log::debug!("slider {node:?} at {value:.1} (rect {:?})", tree.rect(node));
            }
        })
        .run(build_scene)
}

/// Root container filling the window, with one slider centered in it.
fn build_scene(size: Size) -> Result<Tree> {
    let mut tree = Tree::new(AbsoluteLayout::new(), Vec2::zero(), size);

    let centered = Vec2::new(
        (size.width - SLIDER_SIZE.width) * 0.5,
        (size.height - SLIDER_SIZE.height) * 0.5,
    );
    tree.add_child(
        tree.root(),
        centered,
        SLIDER_SIZE,
        Slider::new().min(0.0).max(100.0).value(50.0),
    )?;

    Ok(tree)
}

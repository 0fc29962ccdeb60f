use anyhow::Result;

use facet_engine::coords::{Rgba, Vec2};
use facet_engine::logging::{LoggingConfig, init_logging};
use facet_engine::scene::{Circle, Rectangle, Scene, SceneConfig, Triangle};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut scene = Scene::new(SceneConfig::default())?;

    scene.push_primitive(Triangle::new(
        Vec2::new(300.0, 100.0),
        Vec2::new(50.0, 250.0),
        Vec2::new(400.0, 250.0),
    ));
    scene.push_primitive(Triangle::solid(
        Vec2::new(500.0, 100.0),
        Vec2::new(400.0, 250.0),
        Vec2::new(600.0, 250.0),
        Rgba::rgb(255, 70, 0),
    ));

    scene.push_primitive(Rectangle::colored(100, 100, 600, 600, Rgba::rgb(122, 255, 66)));
    scene.push_primitive(Rectangle::colored(400, 100, 200, 400, Rgba::rgb(64, 0, 128)));

    scene.push_primitive(Circle::colored(400, 800, 100, Rgba::rgb(255, 128, 192)));
    scene.push_primitive(Circle::new(800, 800, 50));

    log::info!("scene ready: {} primitives", scene.primitive_count());

    scene.run()
}

//! Demo scene: an airplane over rolling ground, a missile, clouds and a fuel
//! canister, all built from library shapes.
//!
//! Screen coordinates are y-down, so "up" in local space is negative y.

use rasterkit::colors;
use rasterkit::prelude::*;

fn poly(points: &[(f64, f64)]) -> Shape {
    Shape::Polygon(points.iter().copied().map(Vec2::from).collect())
}

fn mirrored() -> Transform {
    let mut t = Transform::new();
    t.set_scale(Vec2::new(1.0, -1.0));
    t
}

pub fn airplane(x: f64, y: f64, rotation: f64, propeller_angle: f64) -> Sprite {
    let body = poly(&[
        (30.0, 0.0),
        (20.0, -8.0),
        (-25.0, -8.0),
        (-30.0, -15.0),
        (-30.0, 5.0),
        (-25.0, 8.0),
        (20.0, 8.0),
    ]);
    let wing = poly(&[(5.0, 0.0), (15.0, -20.0), (-10.0, -20.0), (-15.0, 0.0)]);
    let tail = poly(&[(-22.0, -5.0), (-18.0, -12.0), (-30.0, -12.0), (-32.0, -5.0)]);

    let mut sprite = Sprite::new("airplane").with_transform({
        let mut t = Transform::at(x, y);
        t.set_rotation(rotation);
        t
    });

    sprite
        .push(ShapeInstance::new(wing.clone(), PaintStyle::Fill, colors::AIRPLANE_WING))
        .push(
            ShapeInstance::new(wing, PaintStyle::Fill, colors::AIRPLANE_WING)
                .with_transform(mirrored()),
        )
        .push(ShapeInstance::new(tail.clone(), PaintStyle::Fill, colors::AIRPLANE_ACCENT))
        .push(
            ShapeInstance::new(tail, PaintStyle::Fill, colors::AIRPLANE_ACCENT)
                .with_transform(mirrored()),
        )
        .push(
            ShapeInstance::new(body, PaintStyle::Fill, colors::AIRPLANE_BODY)
                .with_outline(colors::OUTLINE),
        )
        .push(ShapeInstance::new(
            Shape::Ellipse {
                center: Vec2::new(10.0, -3.0),
                rx: 8,
                ry: 5,
            },
            PaintStyle::Fill,
            colors::COCKPIT,
        ))
        .push(ShapeInstance::new(
            Shape::Circle {
                center: Vec2::new(25.0, 0.0),
                radius: 6,
            },
            PaintStyle::Fill,
            colors::AIRPLANE_ACCENT,
        ));

    for offset in [0.0, 90.0] {
        let blade = Shape::Line {
            from: Vec2::new(0.0, -12.0),
            to: Vec2::new(0.0, 12.0),
        };
        let mut t = Transform::at(32.0, 0.0);
        t.set_rotation(propeller_angle + offset);
        sprite.push(
            ShapeInstance::new(blade, PaintStyle::Stroke, colors::OUTLINE).with_transform(t),
        );
    }

    sprite
}

pub fn missile(x: f64, y: f64, length: f64) -> Sprite {
    let (l, h) = (length, 8.0);
    let body = poly(&[
        (-l / 2.0, 0.0),
        (-l / 4.0, -h / 2.0),
        (l / 2.0, -h / 2.0),
        (l / 2.0 + 5.0, -h),
        (l / 2.0, 0.0),
        (l / 2.0 + 5.0, h),
        (l / 2.0, h / 2.0),
        (-l / 4.0, h / 2.0),
    ]);

    let mut sprite = Sprite::new("missile").with_transform(Transform::at(x, y));
    sprite
        .push(
            ShapeInstance::new(body, PaintStyle::Fill, colors::MISSILE)
                .with_outline(colors::OUTLINE),
        )
        .push(ShapeInstance::new(
            Shape::Ellipse {
                center: Vec2::new(-l / 2.0 + 5.0, 0.0),
                rx: 8,
                ry: 4,
            },
            PaintStyle::Fill,
            colors::MISSILE,
        ));

    let tail = Vec2::new(l / 2.0 + 5.0, 0.0);
    for (i, spread) in [-3.0, 0.0, 3.0].into_iter().enumerate() {
        let flame = Shape::Line {
            from: tail,
            to: tail + Vec2::new(14.0 + 5.0 * i as f64, spread),
        };
        sprite.push(ShapeInstance::new(flame, PaintStyle::Stroke, colors::FLAME));
    }

    sprite
}

pub fn cloud(x: f64, y: f64, puffs: &[(f64, f64, i32)]) -> Sprite {
    let mut sprite = Sprite::new("cloud").with_transform(Transform::at(x, y));
    for &(cx, cy, r) in puffs {
        sprite.push(ShapeInstance::new(
            Shape::Circle {
                center: Vec2::new(cx, cy),
                radius: r,
            },
            PaintStyle::Fill,
            colors::CLOUD,
        ));
    }
    sprite
}

pub fn fuel_canister(x: f64, y: f64) -> Sprite {
    let mut sprite = Sprite::new("fuel").with_transform(Transform::at(x, y));
    sprite
        .push(ShapeInstance::new(
            poly(&[(-10.0, -15.0), (10.0, -15.0), (10.0, 15.0), (-10.0, 15.0)]),
            PaintStyle::Fill,
            colors::FUEL,
        ))
        .push(ShapeInstance::new(
            Shape::Circle {
                center: Vec2::new(0.0, -18.0),
                radius: 6,
            },
            PaintStyle::Fill,
            colors::FUEL,
        ))
        .push(ShapeInstance::new(
            Shape::Line {
                from: Vec2::new(-5.0, 0.0),
                to: Vec2::new(5.0, 0.0),
            },
            PaintStyle::Stroke,
            Color::WHITE,
        ))
        .push(ShapeInstance::new(
            Shape::Line {
                from: Vec2::new(0.0, -5.0),
                to: Vec2::new(0.0, 5.0),
            },
            PaintStyle::Stroke,
            Color::WHITE,
        ));
    sprite
}

/// Rolling terrain along the bottom edge, closed off below the canvas.
pub fn ground(width: u32, height: u32) -> Sprite {
    let (w, h) = (width as f64, height as f64);
    let mut ridge: Vec<Vec2> = Vec::new();
    let mut x = -20.0;
    while x <= w + 20.0 {
        let y = h - (30.0 + 15.0 * (x * 0.02).sin() + 10.0 * (x * 0.05).sin());
        ridge.push(Vec2::new(x, y));
        x += 10.0;
    }

    let mut outline = ridge.clone();
    if let (Some(first), Some(last)) = (ridge.first().copied(), ridge.last().copied()) {
        outline.push(Vec2::new(last.x, h + 20.0));
        outline.push(Vec2::new(first.x, h + 20.0));
    }

    let mut sprite = Sprite::new("ground");
    sprite
        .push(ShapeInstance::new(Shape::Polygon(outline), PaintStyle::Fill, colors::GROUND))
        .push(ShapeInstance::new(Shape::Polyline(ridge), PaintStyle::Stroke, colors::GRASS));
    sprite
}

/// Every sprite of the demo in painting order.
pub fn build(width: u32, height: u32) -> Vec<Sprite> {
    let (w, h) = (width as f64, height as f64);
    vec![
        cloud(w * 0.2, h * 0.2, &[(-20.0, 0.0, 18), (0.0, -8.0, 24), (22.0, 2.0, 16)]),
        cloud(
            w * 0.7,
            h * 0.15,
            &[(-25.0, 4.0, 15), (-5.0, -6.0, 22), (18.0, 0.0, 20), (35.0, 5.0, 12)],
        ),
        cloud(w * 1.02, h * 0.35, &[(0.0, 0.0, 26), (-30.0, 6.0, 18)]),
        ground(width, height),
        fuel_canister(w * 0.55, h * 0.6),
        missile(w * 0.85, h * 0.45, 40.0),
        airplane(w * 0.3, h * 0.5, 10.0, 20.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_renders_inside_canvas() {
        let window = ClipWindow::from_size(320, 200);
        for sprite in build(320, 200) {
            let parts = sprite.render(Some(&window));
            assert!(parts.iter().any(|p| !p.is_empty()), "{} is invisible", sprite.name());
        }
    }

    #[test]
    fn test_ground_is_clipped_to_canvas() {
        let window = ClipWindow::from_size(320, 200);
        let parts = ground(320, 200).render(Some(&window));
        assert!(parts
            .iter()
            .flat_map(|p| p.fill.iter().chain(p.outline.iter()))
            .all(|p| window.contains(p.to_vec2())));
        assert!(parts[0].fill.contains(Pixel::new(160, 199)));
    }

    #[test]
    fn test_airplane_wings_are_mirror_images() {
        let plane = airplane(100.0, 100.0, 0.0, 0.0);
        let rendered = plane.render(None);
        let (top, bottom) = (&rendered[0].fill, &rendered[1].fill);
        assert_eq!(top.len(), bottom.len());
    }
}

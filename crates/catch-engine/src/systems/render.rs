use crate::extensions::easing::Easing;
use crate::renderer::commands::{DrawCommand, DrawList, TextAlign};
use crate::systems::effects::{FloatText, Particle};

/// How far a float text drifts upward over its lifetime, in world units.
pub const FLOAT_TEXT_RISE: f32 = 30.0;
/// Font size of float texts.
pub const FLOAT_TEXT_SIZE: f32 = 20.0;

/// Append particles as fading circles (alpha follows remaining life).
pub fn draw_particles<'a>(particles: impl Iterator<Item = &'a Particle>, list: &mut DrawList) {
    for p in particles {
        if p.life <= 0.0 {
            continue;
        }
        list.push(DrawCommand::Circle {
            x: p.pos.x,
            y: p.pos.y,
            radius: p.radius,
            color: p.color.with_alpha(p.life),
        });
    }
}

/// Append float texts: each rises with `QuadOut` easing and fades linearly.
pub fn draw_float_texts<'a>(
    texts: impl Iterator<Item = &'a FloatText>,
    now_ms: f64,
    list: &mut DrawList,
) {
    for t in texts {
        if t.is_expired(now_ms) {
            continue;
        }
        let progress = t.progress(now_ms);
        let rise = Easing::QuadOut.apply(progress) * FLOAT_TEXT_RISE;
        list.push(DrawCommand::Text {
            text: t.text.clone(),
            x: t.pos.x,
            y: t.pos.y - rise,
            size: FLOAT_TEXT_SIZE,
            bold: true,
            align: TextAlign::Center,
            color: t.color.with_alpha(1.0 - progress),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::color::Color;
    use glam::Vec2;

    #[test]
    fn dead_particles_are_skipped() {
        let mut dead = Particle::new(Vec2::ZERO, Vec2::ZERO, 2.0, Color::WHITE);
        dead.life = 0.0;
        let alive = Particle::new(Vec2::ZERO, Vec2::ZERO, 2.0, Color::WHITE);
        let particles = vec![dead, alive];

        let mut list = DrawList::new();
        draw_particles(particles.iter(), &mut list);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn float_text_rises_and_fades() {
        let texts = vec![FloatText::new("+5", Vec2::new(100.0, 200.0), Color::WHITE, 0.0)];
        let mut list = DrawList::new();
        draw_float_texts(texts.iter(), 600.0, &mut list);

        match &list.commands()[0] {
            DrawCommand::Text { y, color, .. } => {
                assert!(*y < 200.0 && *y > 200.0 - FLOAT_TEXT_RISE);
                assert!((color.a - 0.5).abs() < 1e-6);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn expired_float_text_is_not_drawn() {
        let texts = vec![FloatText::new("+5", Vec2::ZERO, Color::WHITE, 0.0)];
        let mut list = DrawList::new();
        draw_float_texts(texts.iter(), 1200.0, &mut list);
        assert!(list.is_empty());
    }
}

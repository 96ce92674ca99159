//! Render pass: turns the game state into one frame of draw commands.

use catch_engine::{ease, Color, DrawCommand, Easing, RenderContext, TextAlign};

use crate::ball::{Ball, BallKind};
use crate::game::CatchGame;
use crate::session::Phase;

const SKY_TOP: Color = Color::hex(0x0f172a);
const SKY_BOTTOM: Color = Color::hex(0x1e3a8a);
const ICE: Color = Color::hex(0xbae6fd);
const CATCHER: Color = Color::hex(0xe2e8f0);
const CATCHER_BONUS: Color = Color::hex(0xfacc15);
const HUD_SIZE: f32 = 18.0;
const BANNER_SIZE: f32 = 16.0;
const ICE_CRYSTALS: u32 = 24;
/// Freeze overlay fades out over its last stretch.
const FREEZE_FADE_MS: f64 = 500.0;
/// Period of the pulsing prompt text.
const PULSE_MS: f64 = 1600.0;

pub fn frame(game: &CatchGame, ctx: &mut RenderContext) {
    background(ctx);
    freeze_overlay(game, ctx);
    catcher(game, ctx);
    for ball in game.balls().iter() {
        draw_ball(ball, ctx);
    }
    ctx.draw_particles();
    hud(game, ctx);
    ctx.draw_float_texts();
    match game.session().phase() {
        Phase::Idle => idle_overlay(ctx),
        Phase::Ended => ended_overlay(game, ctx),
        Phase::Running => {}
    }
}

fn background(ctx: &mut RenderContext) {
    let (w, h) = (ctx.world_width, ctx.world_height);
    ctx.draw.push(DrawCommand::Clear { width: w, height: h });
    ctx.draw.push(DrawCommand::GradientRect {
        x: 0.0,
        y: 0.0,
        w,
        h,
        stops: vec![(0.0, SKY_TOP), (1.0, SKY_BOTTOM)],
    });
}

fn freeze_overlay(game: &CatchGame, ctx: &mut RenderContext) {
    let Some(left) = game.session().power.freeze_remaining(ctx.now_ms) else {
        return;
    };
    let strength = if left < FREEZE_FADE_MS {
        ease(0.0, 1.0, (left / FREEZE_FADE_MS) as f32, Easing::CubicOut)
    } else {
        1.0
    };
    let (w, h) = (ctx.world_width, ctx.world_height);
    ctx.draw.rect(0.0, 0.0, w, h, ICE.with_alpha(0.18 * strength));

    // Fixed crystal layout so the pattern does not jump between frames
    for i in 0..ICE_CRYSTALS {
        let x = ((i * 73 + 17) % 400) as f32 / 400.0 * w;
        let y = ((i * 131 + 41) % 600) as f32 / 600.0 * h;
        let twinkle = 0.5 + 0.3 * ((ctx.now_ms * 0.004) as f32 + i as f32).sin();
        ctx.draw.circle(x, y, 1.5 + (i % 3) as f32, Color::WHITE.with_alpha(twinkle * strength));
    }
}

fn catcher(game: &CatchGame, ctx: &mut RenderContext) {
    let c = game.catcher();
    let color = if game.session().power.is_bonus(ctx.now_ms) {
        CATCHER_BONUS
    } else {
        CATCHER
    };
    ctx.draw.push(DrawCommand::RoundedRect {
        x: c.x,
        y: c.top,
        w: c.width,
        h: c.height,
        radius: c.height / 2.0,
        color,
    });
}

fn draw_ball(ball: &Ball, ctx: &mut RenderContext) {
    ctx.draw.push(DrawCommand::ShadedCircle {
        x: ball.pos.x,
        y: ball.pos.y,
        radius: ball.radius,
        highlight: ball.color.lighten(0.55),
        base: ball.color,
    });
    if let Some(glyph) = ball.kind.glyph() {
        ctx.draw.push(DrawCommand::Ring {
            x: ball.pos.x,
            y: ball.pos.y,
            radius: ball.radius + 1.0,
            line_width: 2.0,
            color: Color::WHITE,
        });
        ctx.draw
            .bold_text(glyph, ball.pos.x, ball.pos.y, ball.radius * 1.2, TextAlign::Center, Color::WHITE);
    }
}

fn banner_label(kind: BallKind) -> &'static str {
    match kind {
        BallKind::Freeze => "FROZEN",
        BallKind::Bonus => "x2 BONUS",
        BallKind::Shrink => "SHRINK",
        BallKind::Expand => "EXPAND",
        BallKind::Good | BallKind::Bad => "",
    }
}

fn hud(game: &CatchGame, ctx: &mut RenderContext) {
    let session = game.session();
    let w = ctx.world_width;
    ctx.draw.bold_text(
        format!("Time: {}s", session.time_left()),
        12.0,
        22.0,
        HUD_SIZE,
        TextAlign::Left,
        Color::WHITE,
    );
    ctx.draw.bold_text(
        format!("Score: {}", session.score()),
        w - 12.0,
        22.0,
        HUD_SIZE,
        TextAlign::Right,
        Color::WHITE,
    );

    for (row, (kind, left_ms)) in session.power.active(ctx.now_ms).into_iter().enumerate() {
        let secs = (left_ms / 1000.0).ceil() as u32;
        ctx.draw.bold_text(
            format!("{} {}s", banner_label(kind), secs),
            w / 2.0,
            52.0 + row as f32 * 22.0,
            BANNER_SIZE,
            TextAlign::Center,
            kind.color().lighten(0.3),
        );
    }
}

/// 0 → 1 → 0 over `PULSE_MS`, eased at both ends.
fn pulse(now_ms: f64) -> f32 {
    let t = (now_ms % PULSE_MS / PULSE_MS) as f32;
    let tri = if t < 0.5 { t * 2.0 } else { 2.0 - t * 2.0 };
    ease(0.4, 1.0, tri, Easing::SineInOut)
}

fn dim(ctx: &mut RenderContext) {
    let (w, h) = (ctx.world_width, ctx.world_height);
    ctx.draw.rect(0.0, 0.0, w, h, Color::BLACK.with_alpha(0.55));
}

fn idle_overlay(ctx: &mut RenderContext) {
    dim(ctx);
    let (cx, cy) = (ctx.world_width / 2.0, ctx.world_height / 2.0);
    ctx.draw.bold_text("Catch!", cx, cy - 40.0, 40.0, TextAlign::Center, Color::WHITE);
    ctx.draw.text(
        "Catch green, dodge red",
        cx,
        cy,
        16.0,
        TextAlign::Center,
        Color::WHITE.with_alpha(0.8),
    );
    let alpha = pulse(ctx.now_ms);
    ctx.draw.bold_text(
        "Press Start or Enter",
        cx,
        cy + 40.0,
        18.0,
        TextAlign::Center,
        Color::WHITE.with_alpha(alpha),
    );
}

fn ended_overlay(game: &CatchGame, ctx: &mut RenderContext) {
    dim(ctx);
    let session = game.session();
    let (cx, cy) = (ctx.world_width / 2.0, ctx.world_height / 2.0);
    ctx.draw.bold_text("Time's up!", cx, cy - 60.0, 36.0, TextAlign::Center, Color::WHITE);
    ctx.draw.bold_text(
        format!("Final score: {}", session.score()),
        cx,
        cy - 10.0,
        24.0,
        TextAlign::Center,
        CATCHER_BONUS,
    );
    ctx.draw.text(
        format!("Best: {}", session.best_score()),
        cx,
        cy + 22.0,
        16.0,
        TextAlign::Center,
        Color::WHITE.with_alpha(0.8),
    );
    let alpha = pulse(ctx.now_ms);
    ctx.draw.bold_text(
        "Press Enter to play again",
        cx,
        cy + 60.0,
        18.0,
        TextAlign::Center,
        Color::WHITE.with_alpha(alpha),
    );
}

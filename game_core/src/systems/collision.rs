use glam::DVec2;

use crate::{Ball, Config, Events, GameEvent, MatchState, Paddle, Side};

/// Bounce the ball off the top and bottom walls
pub fn check_wall_collisions(state: &mut MatchState, events: &mut Events) {
    let height = state.court.height;
    let ball = &mut state.ball;

    if ball.top() <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::WallHit);
    }
    if ball.bottom() >= height {
        ball.pos.y = height - ball.size;
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::WallHit);
    }
}

/// Check ball against the human paddle, then the opponent paddle
pub fn check_paddle_collisions(state: &mut MatchState, config: &Config, events: &mut Events) {
    for side in [Side::Human, Side::Opponent] {
        let paddle = *state.paddle(side);
        if touches(&state.ball, &paddle) {
            bounce_off(&mut state.ball, &paddle, config);
            log::trace!(
                "ball hit {side:?} paddle, speed now {:.3}",
                state.ball.speed()
            );
            events.push(GameEvent::PaddleHit(side));
        }
    }
}

/// Leading edge at or past the paddle face, with vertical overlap
fn touches(ball: &Ball, paddle: &Paddle) -> bool {
    let crossed = match paddle.side {
        Side::Human => ball.left() <= paddle.x + paddle.width,
        Side::Opponent => ball.right() >= paddle.x,
    };
    crossed && ball.bottom() > paddle.y && ball.top() < paddle.y + paddle.height
}

/// Where on the paddle the ball struck, from -1 (bottom) to 1 (top)
pub fn hit_offset(ball: &Ball, paddle: &Paddle) -> f64 {
    let rel_intersect = paddle.center_y() - ball.center().y;
    (rel_intersect / (paddle.height / 2.0)).clamp(-1.0, 1.0)
}

/// Velocity after a paddle hit: angle from the hit offset, speed raised by
/// the configured acceleration, x pointing away from the paddle.
pub fn bounce_velocity(ball: &Ball, paddle: &Paddle, config: &Config) -> DVec2 {
    let bounce_angle = hit_offset(ball, paddle) * config.ball_max_angle;
    let speed = ball.speed() + config.ball_accel;
    let away = -paddle.side.direction();

    let mut vel = DVec2::new(
        away * speed * bounce_angle.cos(),
        -speed * bounce_angle.sin(),
    );
    // Never send the ball back into the paddle it just left
    if vel.x * away < 0.0 {
        vel.x = -vel.x;
    }
    vel
}

/// Snap the ball flush against the paddle face and apply the rebound
fn bounce_off(ball: &mut Ball, paddle: &Paddle, config: &Config) {
    ball.pos.x = match paddle.side {
        Side::Human => paddle.x + paddle.width,
        Side::Opponent => paddle.x - ball.size,
    };
    ball.vel = bounce_velocity(ball, paddle, config);
}

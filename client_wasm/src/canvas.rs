//! Canvas 2D presenter

use game_core::{game_over_headline, Court, Presenter, Rect, Side, SinkError, RESTART_PROMPT};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const ACCENT: &str = "#52e3c2";
const PADDLE_COLOR: &str = "#e8eaed";
const OVERLAY_COLOR: &str = "#191c20";
const PROMPT_COLOR: &str = "#eebd89";

fn present_err(e: JsValue) -> SinkError {
    SinkError::Present(format!("{e:?}"))
}

pub struct CanvasPresenter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPresenter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Presenter for CanvasPresenter {
    fn clear(&mut self, court: Court) -> Result<(), SinkError> {
        self.ctx.clear_rect(0.0, 0.0, court.width, court.height);
        Ok(())
    }

    fn draw_divider(&mut self, court: Court) -> Result<(), SinkError> {
        let dash = js_sys::Array::of2(&JsValue::from_f64(14.0), &JsValue::from_f64(28.0));
        self.ctx.save();
        self.ctx.set_stroke_style_str(ACCENT);
        let result = self.ctx.set_line_dash(&dash).map_err(present_err);
        self.ctx.set_line_width(4.0);
        self.ctx.begin_path();
        self.ctx.move_to(court.center_x(), 0.0);
        self.ctx.line_to(court.center_x(), court.height);
        self.ctx.stroke();
        self.ctx.restore();
        result
    }

    fn draw_paddle(&mut self, rect: Rect) -> Result<(), SinkError> {
        self.ctx.set_fill_style_str(PADDLE_COLOR);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        Ok(())
    }

    fn draw_ball(&mut self, rect: Rect) -> Result<(), SinkError> {
        self.ctx.save();
        self.ctx.set_fill_style_str(ACCENT);
        self.ctx.set_shadow_color(ACCENT);
        self.ctx.set_shadow_blur(20.0);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        self.ctx.restore();
        Ok(())
    }

    fn draw_game_over(&mut self, court: Court, winner: Side) -> Result<(), SinkError> {
        let mid_x = court.center_x();
        let mid_y = court.height / 2.0;

        self.ctx.save();
        self.ctx.set_global_alpha(0.93);
        self.ctx.set_fill_style_str(OVERLAY_COLOR);
        self.ctx.fill_rect(0.0, mid_y - 85.0, court.width, 170.0);
        self.ctx.set_global_alpha(1.0);

        self.ctx.set_text_align("center");
        self.ctx.set_fill_style_str(ACCENT);
        self.ctx.set_font("bold 2.9rem Segoe UI, Arial");
        let headline = self
            .ctx
            .fill_text(&game_over_headline(winner), mid_x, mid_y + 20.0)
            .map_err(present_err);

        self.ctx.set_font("1.2rem Segoe UI, Arial");
        self.ctx.set_fill_style_str(PROMPT_COLOR);
        let prompt = self
            .ctx
            .fill_text(RESTART_PROMPT, mid_x, mid_y + 62.0)
            .map_err(present_err);
        self.ctx.restore();

        headline.and(prompt)
    }
}

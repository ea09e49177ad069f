//! Canvas-2d render collaborator
//!
//! Draws the striped arena, every entity in its tint, and a dim overlay once
//! the session is over. Reads simulation state only; the "Game Over" label
//! itself is DOM text owned by the driver.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::{GamePhase, GameState};

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn draw(&self, state: &GameState) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        self.draw_stripes(state.tuning.stripe_width as f64, width, height);

        for obstacle in &state.obstacles {
            self.ctx.set_fill_style_str(obstacle.tint.as_css());
            self.ctx.fill_rect(
                obstacle.pos.x as f64,
                obstacle.pos.y as f64,
                obstacle.size.x as f64,
                obstacle.size.y as f64,
            );
        }

        for enemy in &state.enemies {
            self.draw_circle(enemy.pos.x, enemy.pos.y, enemy.radius, enemy.tint.as_css());
        }
        self.draw_circle(
            state.player.pos.x,
            state.player.pos.y,
            state.player.radius,
            state.player.tint.as_css(),
        );

        if state.phase == GamePhase::GameOver {
            self.ctx.set_fill_style_str("rgba(0, 0, 0, 0.55)");
            self.ctx.fill_rect(0.0, 0.0, width, height);
        }
    }

    /// Alternating fixed-width vertical bands, white on black
    fn draw_stripes(&self, stripe_width: f64, width: f64, height: f64) {
        self.ctx.set_fill_style_str("black");
        self.ctx.fill_rect(0.0, 0.0, width, height);

        self.ctx.set_fill_style_str("white");
        let mut x = 0.0;
        let mut band = 0u32;
        while x < width {
            if band % 2 == 0 {
                self.ctx.fill_rect(x, 0.0, stripe_width, height);
            }
            x += stripe_width;
            band += 1;
        }
    }

    fn draw_circle(&self, x: f32, y: f32, radius: f32, css: &str) {
        self.ctx.set_fill_style_str(css);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(x as f64, y as f64, radius as f64, 0.0, std::f64::consts::TAU);
        self.ctx.fill();
    }
}

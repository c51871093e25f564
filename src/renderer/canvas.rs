//! Canvas2D presenter for the browser build

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlElement};

use super::frame::FrameView;
use super::shapes::{Shape, obstacle_shape};
use super::Presenter;

const GROUND_COLOR: &str = "#0055ff";
const SPIKE_COLOR: &str = "#ff0000";
const BLOCK_COLOR: &str = "#fff";
const ORB_COLOR: &str = "#ffff00";
const PLAYER_FILL: &str = "#00ffff";
const PLAYER_OUTLINE: &str = "#fff";

pub struct CanvasPresenter {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    /// Optional DOM element whose width tracks course progress
    progress_bar: Option<HtmlElement>,
}

impl CanvasPresenter {
    pub fn new(
        ctx: CanvasRenderingContext2d,
        width: f64,
        height: f64,
        progress_bar: Option<HtmlElement>,
    ) -> Self {
        Self {
            ctx,
            width,
            height,
            progress_bar,
        }
    }

    fn draw(&self, frame: &FrameView<'_>) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let tuning = frame.tuning();
        ctx.clear_rect(0.0, 0.0, self.width, self.height);

        ctx.set_fill_style_str(GROUND_COLOR);
        ctx.fill_rect(0.0, tuning.ground_y as f64, self.width, 2.0);

        for obstacle in frame.visible_obstacles() {
            match obstacle_shape(&obstacle, tuning) {
                Shape::Triangle([a, b, c]) => {
                    ctx.set_fill_style_str(SPIKE_COLOR);
                    ctx.begin_path();
                    ctx.move_to(a.x as f64, a.y as f64);
                    ctx.line_to(b.x as f64, b.y as f64);
                    ctx.line_to(c.x as f64, c.y as f64);
                    ctx.fill();
                }
                Shape::Rect { min, size } => {
                    ctx.set_fill_style_str(BLOCK_COLOR);
                    ctx.fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
                }
                Shape::Ring { center, radius } => {
                    ctx.set_stroke_style_str(ORB_COLOR);
                    ctx.set_line_width(3.0);
                    ctx.begin_path();
                    ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    )?;
                    ctx.stroke();
                }
            }
        }

        // Player, rotated about its center
        let entity = frame.entity();
        let (pivot, angle) = frame.player_transform();
        let (w, h) = (entity.size.x as f64, entity.size.y as f64);
        ctx.save();
        ctx.translate(pivot.x as f64, pivot.y as f64)?;
        ctx.rotate(angle as f64)?;
        ctx.set_fill_style_str(PLAYER_FILL);
        ctx.fill_rect(-w / 2.0, -h / 2.0, w, h);
        ctx.set_stroke_style_str(PLAYER_OUTLINE);
        ctx.set_line_width(1.0);
        ctx.stroke_rect(-w / 2.0, -h / 2.0, w, h);
        ctx.restore();

        if let Some(bar) = &self.progress_bar {
            let percent = frame.progress() * 100.0;
            bar.style().set_property("width", &format!("{percent}%"))?;
        }
        Ok(())
    }
}

impl Presenter for CanvasPresenter {
    fn present(&mut self, frame: &FrameView<'_>) {
        if let Err(e) = self.draw(frame) {
            log::warn!("Render error: {:?}", e);
        }
    }
}

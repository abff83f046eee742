use pinchable_label::{AttributedText, LabelSize, TextMeasurer};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Browser font metrics through an offscreen 2D canvas.
pub struct CanvasMeasurer {
    ctx: CanvasRenderingContext2d,
    family: String,
}

impl CanvasMeasurer {
    pub fn new(family: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let canvas = document
            .create_element("canvas")
            .ok()?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            family: family.to_string(),
        })
    }
}

impl TextMeasurer for CanvasMeasurer {
    fn measure(&self, text: &AttributedText) -> LabelSize {
        let mut width = 0.0;
        let mut height: f64 = 0.0;
        for run in &text.runs {
            self.ctx
                .set_font(&format!("{}px {}", run.font_size, self.family));
            let advance = self
                .ctx
                .measure_text(&run.text)
                .map(|m| m.width())
                .unwrap_or(0.0);
            width += advance + run.kern * run.text.chars().count() as f64;
            height = height.max(run.font_size * 1.2);
        }
        LabelSize::new(width, height)
    }
}

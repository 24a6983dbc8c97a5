use web_sys::CanvasRenderingContext2d;

use crate::constants::{GLOW_SCALE, OVERLAY_BOTTOM_ALPHA};
use crate::starfield::Starfield;

const TAU: f64 = std::f64::consts::PI * 2.0;

/// Clear and repaint the whole surface for one frame.
pub fn draw(ctx: &CanvasRenderingContext2d, field: &Starfield) {
    let w = field.width();
    let h = field.height();

    ctx.clear_rect(0.0, 0.0, w, h);

    // vertical gradient overlay grounds the stars against the page background
    let overlay = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
    let _ = overlay.add_color_stop(0.0, "rgba(0,0,0,0)");
    let _ = overlay.add_color_stop(1.0, &format!("rgba(0,0,0,{})", OVERLAY_BOTTOM_ALPHA));
    ctx.set_fill_style_canvas_gradient(&overlay);
    ctx.fill_rect(0.0, 0.0, w, h);

    for star in field.stars() {
        let alpha = star.alpha.clamp(0.0, 1.0);

        // soft halo, fully transparent at the rim
        let glow = star.r * GLOW_SCALE;
        if let Ok(grad) = ctx.create_radial_gradient(star.x, star.y, 0.0, star.x, star.y, glow) {
            let _ = grad.add_color_stop(0.0, &white((alpha * 0.25).min(0.25)));
            let _ = grad.add_color_stop(0.5, &white((alpha * 0.06).min(0.06)));
            let _ = grad.add_color_stop(1.0, "rgba(255,255,255,0)");
            ctx.set_fill_style_canvas_gradient(&grad);
            ctx.begin_path();
            let _ = ctx.arc(star.x, star.y, glow, 0.0, TAU);
            ctx.fill();
        }

        // core
        ctx.set_fill_style_str(&white(alpha));
        ctx.begin_path();
        let _ = ctx.arc(star.x, star.y, star.r, 0.0, TAU);
        ctx.fill();
    }
}

fn white(alpha: f64) -> String {
    format!("rgba(255,255,255,{:.4})", alpha)
}

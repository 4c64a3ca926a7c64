use crate::foundation::core::{BezPath, Canvas, Rect, Vec2};
use crate::foundation::error::{SwatchError, SwatchResult};
use crate::texture::plan::{StrokeOp, StrokePlan};
use kurbo::Shape;
use smallvec::SmallVec;

/// Execute a [`StrokePlan`] on a `vello_cpu` context and read back opaque RGBA8.
///
/// Passes run strictly in plan order. Strokes crossing a canvas edge are repeated shifted by
/// the canvas size so the result tiles seamlessly.
pub(crate) fn rasterize(plan: &StrokePlan) -> SwatchResult<Vec<u8>> {
    let w: u16 = plan
        .canvas
        .width
        .try_into()
        .map_err(|_| SwatchError::render("texture width exceeds u16"))?;
    let h: u16 = plan
        .canvas
        .height
        .try_into()
        .map_err(|_| SwatchError::render("texture height exceeds u16"))?;
    if w == 0 || h == 0 {
        return Err(SwatchError::render("texture must be at least 1x1"));
    }

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    let bg = plan.background;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(w), f64::from(h)));

    for pass in &plan.passes {
        for op in &pass.strokes {
            stroke_wrapped(&mut ctx, op, plan.canvas);
        }
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);

    let mut out = pixmap.data_as_u8_slice().to_vec();
    if out.len() != plan.canvas.byte_len() {
        return Err(SwatchError::render("pixmap byte len mismatch"));
    }
    // The background fill is opaque; coverage rounding can leave stray 254s.
    for px in out.chunks_exact_mut(4) {
        px[3] = 255;
    }
    Ok(out)
}

fn stroke_wrapped(ctx: &mut vello_cpu::RenderContext, op: &StrokeOp, canvas: Canvas) {
    let c = op.color;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
    ctx.set_stroke(
        vello_cpu::kurbo::Stroke::new(op.width)
            .with_caps(vello_cpu::kurbo::Cap::Round)
            .with_join(vello_cpu::kurbo::Join::Round),
    );

    let cpu_path = bezpath_to_cpu(&op.path);
    for shift in wrap_offsets(&op.path, op.width, canvas) {
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((shift.x, shift.y)));
        ctx.stroke_path(&cpu_path);
    }
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
}

/// Canvas-sized shifts under which the stroked `path` overlaps the canvas.
///
/// Always contains `(0, 0)` when the unshifted stroke is visible.
pub(crate) fn wrap_offsets(path: &BezPath, width: f64, canvas: Canvas) -> SmallVec<[Vec2; 4]> {
    let cw = f64::from(canvas.width);
    let ch = f64::from(canvas.height);
    let bounds = path.bounding_box().inflate(width / 2.0 + 1.0, width / 2.0 + 1.0);
    let area = Rect::new(0.0, 0.0, cw, ch);

    let mut out = SmallVec::new();
    for dy in [0.0, -ch, ch] {
        for dx in [0.0, -cw, cw] {
            let s = bounds + Vec2::new(dx, dy);
            if s.x0 < area.x1 && s.x1 > area.x0 && s.y0 < area.y1 && s.y1 > area.y0 {
                out.push(Vec2::new(dx, dy));
            }
        }
    }
    out
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

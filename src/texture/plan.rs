use crate::foundation::core::{BezPath, Canvas, Point, Rgb8, Rgba8, Vec2};
use crate::strand::model::{Strand, average_color};
use crate::texture::geometry::{StitchGeometry, StitchLayout};

/// Brightness of the receding leg strokes.
pub const LEG_BRIGHTNESS: f64 = 0.8;
/// Brightness of the shadow duplicates drawn under legs and links.
pub const SHADOW_BRIGHTNESS: f64 = 0.5;
/// Brightness of the gaps between loops.
pub const BACKGROUND_BRIGHTNESS: f64 = 0.35;
/// Pixel offset of shadow duplicates (down and right).
pub const SHADOW_OFFSET: Vec2 = Vec2::new(1.0, 1.0);
/// Sub-pixel offset of the arc highlight (up and left).
pub const HIGHLIGHT_OFFSET: Vec2 = Vec2::new(-0.4, -0.4);
/// Highlight stroke width relative to the ply width.
pub const HIGHLIGHT_WIDTH: f64 = 0.35;
/// Highlight alpha.
pub const HIGHLIGHT_ALPHA: u8 = 70;
/// Horizontal lean of the legs per unit of twist intensity, in cell widths.
pub const LEG_TWIST_SKEW: f64 = 0.05;
/// Downward sag of the link between columns, in cell heights.
pub const LINK_SAG: f64 = 0.25;

/// The three draw passes, in the only order that produces the interlock illusion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PassKind {
    /// Leg curves behind everything else.
    Ascending,
    /// Sagging links between neighbouring columns.
    Connection,
    /// Loop tops in front, covering the tops of the legs.
    Arc,
}

impl PassKind {
    /// Back-to-front draw order.
    pub const ORDER: [PassKind; 3] = [PassKind::Ascending, PassKind::Connection, PassKind::Arc];
}

/// A single stroked curve.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeOp {
    /// Curve in canvas pixel space; may extend past the canvas and is wrapped when drawn.
    pub path: BezPath,
    /// Straight-alpha stroke color.
    pub color: Rgba8,
    /// Stroke width in pixels.
    pub width: f64,
}

/// Every stroke of one pass, in draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct PassPlan {
    /// Which pass this is.
    pub kind: PassKind,
    /// Strokes in draw order.
    pub strokes: Vec<StrokeOp>,
}

/// A complete, backend-agnostic description of a stitch texture.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokePlan {
    /// Raster size.
    pub canvas: Canvas,
    /// Fill color under all passes.
    pub background: Rgb8,
    /// Passes in [`PassKind::ORDER`].
    pub passes: [PassPlan; 3],
}

/// Anchor points of one stitch cell for one ply.
struct Cell {
    x0: f64,
    y0: f64,
    w: f64,
    h: f64,
    dx: f64,
}

impl Cell {
    fn at(&self, fx: f64, fy: f64) -> Point {
        Point::new(self.x0 + self.w * fx + self.dx, self.y0 + self.h * fy)
    }

    fn bottom(&self) -> Point {
        self.at(0.5, 1.0)
    }

    fn left_top(&self) -> Point {
        self.at(0.2, 0.2)
    }

    fn right_top(&self) -> Point {
        self.at(0.8, 0.2)
    }

    fn legs(&self, skew: f64) -> [BezPath; 2] {
        let mut left = BezPath::new();
        left.move_to(self.bottom());
        left.quad_to(self.at(0.1 + skew, 0.65), self.left_top());

        let mut right = BezPath::new();
        right.move_to(self.bottom());
        right.quad_to(self.at(0.9 + skew, 0.65), self.right_top());
        [left, right]
    }

    fn link(&self) -> BezPath {
        let mut p = BezPath::new();
        p.move_to(self.right_top());
        p.quad_to(self.at(1.0, 0.2 + LINK_SAG), self.at(1.2, 0.2));
        p
    }

    fn arc(&self) -> BezPath {
        let mut p = BezPath::new();
        p.move_to(self.left_top());
        p.curve_to(self.at(0.15, -0.35), self.at(0.85, -0.35), self.right_top());
        p
    }
}

fn translated(path: &BezPath, by: Vec2) -> BezPath {
    let mut p = path.clone();
    p.apply_affine(kurbo::Affine::translate(by));
    p
}

/// Lay out every stroke of the stitch texture.
///
/// Pure: the same strands, geometry and layout always produce the same plan.
pub fn plan_strokes(
    strands: &[Strand],
    geometry: &StitchGeometry,
    layout: &StitchLayout,
) -> StrokePlan {
    let scale = layout.scale(geometry);
    let ply_width = geometry.ply_width * scale;
    let offsets = geometry.ply_offsets(strands);

    let mut ascending = Vec::new();
    let mut connection = Vec::new();
    let mut arc = Vec::new();

    for row in 0..layout.rows {
        for col in 0..layout.columns {
            for (strand, &dx) in strands.iter().zip(offsets.iter()) {
                let cell = Cell {
                    x0: f64::from(col) * layout.cell_width,
                    y0: f64::from(row) * layout.cell_height,
                    w: layout.cell_width,
                    h: layout.cell_height,
                    dx: dx * scale,
                };
                let shadow = strand.color.scaled(SHADOW_BRIGHTNESS).with_alpha(255);

                for leg in cell.legs(strand.twist_intensity * LEG_TWIST_SKEW) {
                    ascending.push(StrokeOp {
                        path: translated(&leg, SHADOW_OFFSET),
                        color: shadow,
                        width: ply_width,
                    });
                    ascending.push(StrokeOp {
                        path: leg,
                        color: strand.color.scaled(LEG_BRIGHTNESS).with_alpha(255),
                        width: ply_width,
                    });
                }

                let link = cell.link();
                connection.push(StrokeOp {
                    path: translated(&link, SHADOW_OFFSET),
                    color: shadow,
                    width: ply_width,
                });
                connection.push(StrokeOp {
                    path: link,
                    color: strand.color.with_alpha(255),
                    width: ply_width,
                });

                let top = cell.arc();
                let highlight = translated(&top, HIGHLIGHT_OFFSET);
                arc.push(StrokeOp {
                    path: top,
                    color: strand.color.with_alpha(255),
                    width: ply_width,
                });
                arc.push(StrokeOp {
                    path: highlight,
                    color: Rgb8::new(255, 255, 255).with_alpha(HIGHLIGHT_ALPHA),
                    width: ply_width * HIGHLIGHT_WIDTH,
                });
            }
        }
    }

    StrokePlan {
        canvas: layout.canvas,
        background: average_color(strands).scaled(BACKGROUND_BRIGHTNESS),
        passes: [
            PassPlan {
                kind: PassKind::Ascending,
                strokes: ascending,
            },
            PassPlan {
                kind: PassKind::Connection,
                strokes: connection,
            },
            PassPlan {
                kind: PassKind::Arc,
                strokes: arc,
            },
        ],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/plan.rs"]
mod tests;

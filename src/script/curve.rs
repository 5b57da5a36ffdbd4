use super::point::PointId;
use super::tag::{session_handle, Tag};

session_handle! {
    /// Handle to a curve registered in a [`Geometry`](super::Geometry).
    CurveId, CurveKey
}

/// The shape of a curve, described by the points it passes through or is
/// controlled by.
#[derive(Debug, Clone)]
pub enum CurveShape {
    /// A straight segment between two points.
    Line([PointId; 2]),
    /// A B-spline over an ordered list of control points.
    BSpline(Vec<PointId>),
}

impl CurveShape {
    /// The referenced points, in the order they appear in the script.
    #[must_use]
    pub fn points(&self) -> &[PointId] {
        match self {
            Self::Line(ends) => ends,
            Self::BSpline(control) => control,
        }
    }

    fn keyword(&self) -> &'static str {
        match self {
            Self::Line(_) => "Line",
            Self::BSpline(_) => "BSpline",
        }
    }
}

/// Data associated with a curve entity.
///
/// A curve starts at its first referenced point and ends at its last one.
#[derive(Debug, Clone)]
pub struct CurveData {
    tag: Tag,
    shape: CurveShape,
    code: String,
}

impl CurveData {
    /// `point_tags` are the tags of `shape.points()`, in the same order.
    pub(crate) fn new(tag: Tag, shape: CurveShape, point_tags: &[Tag]) -> Self {
        let code = format!(
            "{}\n{}({tag}) = {{{}}};",
            tag.binding(),
            shape.keyword(),
            join_tags(point_tags.iter().map(ToString::to_string)),
        );
        Self { tag, shape, code }
    }

    #[must_use]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    #[must_use]
    pub fn shape(&self) -> &CurveShape {
        &self.shape
    }

    /// First point of the curve.
    #[must_use]
    pub fn start(&self) -> PointId {
        self.shape.points()[0]
    }

    /// Last point of the curve.
    #[must_use]
    pub fn end(&self) -> PointId {
        let points = self.shape.points();
        points[points.len() - 1]
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Joins rendered tags into the body of a `{...}` list.
pub(crate) fn join_tags(tags: impl Iterator<Item = String>) -> String {
    tags.collect::<Vec<_>>().join(", ")
}

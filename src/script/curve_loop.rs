use super::curve::{join_tags, CurveId};
use super::tag::{session_handle, Tag};

session_handle! {
    /// Handle to a curve loop registered in a [`Geometry`](super::Geometry).
    CurveLoopId, CurveLoopKey
}

/// A curve with orientation information within a curve loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientedCurve {
    /// The curve identifier.
    pub curve: CurveId,
    /// If `true`, the curve is traversed from its start to its end.
    /// If `false`, it is traversed in reverse and rendered with a `-` sign.
    pub forward: bool,
}

impl OrientedCurve {
    /// Creates a new oriented curve.
    #[must_use]
    pub fn new(curve: CurveId, forward: bool) -> Self {
        Self { curve, forward }
    }

    /// The curve in its natural direction.
    #[must_use]
    pub fn forward(curve: CurveId) -> Self {
        Self::new(curve, true)
    }

    /// The curve traversed end to start.
    #[must_use]
    pub fn reversed(curve: CurveId) -> Self {
        Self::new(curve, false)
    }
}

impl From<CurveId> for OrientedCurve {
    fn from(curve: CurveId) -> Self {
        Self::forward(curve)
    }
}

/// Data associated with a curve loop.
///
/// A curve loop is a closed, ordered sequence of oriented curves bounding a
/// surface.
#[derive(Debug, Clone)]
pub struct CurveLoopData {
    tag: Tag,
    curves: Vec<OrientedCurve>,
    code: String,
}

impl CurveLoopData {
    /// `curve_tags` are the tags of `curves`, in the same order.
    pub(crate) fn new(tag: Tag, curves: Vec<OrientedCurve>, curve_tags: &[Tag]) -> Self {
        let signed = curves.iter().zip(curve_tags).map(|(oc, t)| {
            if oc.forward {
                t.to_string()
            } else {
                format!("-{t}")
            }
        });
        let code = format!(
            "{}\nLine Loop({tag}) = {{{}}};",
            tag.binding(),
            join_tags(signed)
        );
        Self { tag, curves, code }
    }

    #[must_use]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    #[must_use]
    pub fn curves(&self) -> &[OrientedCurve] {
        &self.curves
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

use super::curve::join_tags;
use super::curve_loop::CurveLoopId;
use super::tag::{session_handle, Tag};

session_handle! {
    /// Handle to a surface registered in a [`Geometry`](super::Geometry).
    SurfaceId, SurfaceKey
}

/// A flat surface bounded by an outer curve loop, with optional holes.
#[derive(Debug, Clone)]
pub struct SurfaceData {
    tag: Tag,
    outer: CurveLoopId,
    holes: Vec<CurveLoopId>,
    code: String,
}

impl SurfaceData {
    /// `loop_tags` holds the outer loop's tag followed by the hole tags.
    pub(crate) fn new(
        tag: Tag,
        outer: CurveLoopId,
        holes: Vec<CurveLoopId>,
        loop_tags: &[Tag],
    ) -> Self {
        let code = format!(
            "{}\nPlane Surface({tag}) = {{{}}};",
            tag.binding(),
            join_tags(loop_tags.iter().map(ToString::to_string))
        );
        Self {
            tag,
            outer,
            holes,
            code,
        }
    }

    #[must_use]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    #[must_use]
    pub fn outer(&self) -> CurveLoopId {
        self.outer
    }

    #[must_use]
    pub fn holes(&self) -> &[CurveLoopId] {
        &self.holes
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

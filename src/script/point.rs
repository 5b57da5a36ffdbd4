use crate::math::Point3;

use super::tag::{session_handle, Tag};

session_handle! {
    /// Handle to a point registered in a [`Geometry`](super::Geometry).
    PointId, PointKey
}

/// A geometric point, optionally carrying a characteristic mesh length.
#[derive(Debug, Clone)]
pub struct PointData {
    tag: Tag,
    position: Point3,
    lcar: Option<f64>,
    code: String,
}

impl PointData {
    pub(crate) fn new(tag: Tag, position: Point3, lcar: Option<f64>) -> Self {
        let coords = match lcar {
            Some(lcar) => format!(
                "{:?}, {:?}, {:?}, {lcar:?}",
                position.x, position.y, position.z
            ),
            None => format!("{:?}, {:?}, {:?}", position.x, position.y, position.z),
        };
        let code = format!("{}\nPoint({tag}) = {{{coords}}};", tag.binding());
        Self {
            tag,
            position,
            lcar,
            code,
        }
    }

    #[must_use]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    #[must_use]
    pub fn position(&self) -> &Point3 {
        &self.position
    }

    /// Target element size near this point, if one was given.
    #[must_use]
    pub fn lcar(&self) -> Option<f64> {
        self.lcar
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

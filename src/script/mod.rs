pub mod curve;
pub mod curve_loop;
pub mod point;
pub mod surface;
pub mod tag;

pub use curve::{CurveData, CurveId, CurveShape};
pub use curve_loop::{CurveLoopData, CurveLoopId, OrientedCurve};
pub use point::{PointData, PointId};
pub use surface::{SurfaceData, SurfaceId};
pub use tag::{EntityKind, Tag};

use curve::CurveKey;
use curve_loop::CurveLoopKey;
use point::PointKey;
use surface::SurfaceKey;

use slotmap::SlotMap;
use tracing::debug;

use crate::error::ValidationError;
use crate::math::{is_planar, Point3, PLANARITY_TOLERANCE};
use tag::{SessionId, TagCounters};

/// Minimum number of control points a B-spline needs, exclusive.
const BSPLINE_MIN_POINTS: usize = 3;

/// A registered entity of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Point(PointId),
    Curve(CurveId),
    CurveLoop(CurveLoopId),
    Surface(SurfaceId),
}

impl EntityRef {
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Point(_) => EntityKind::Point,
            Self::Curve(_) => EntityKind::Curve,
            Self::CurveLoop(_) => EntityKind::CurveLoop,
            Self::Surface(_) => EntityKind::Surface,
        }
    }
}

macro_rules! entity_handle {
    ($id:ty, $variant:ident, $kind:expr) => {
        impl From<$id> for EntityRef {
            fn from(id: $id) -> Self {
                Self::$variant(id)
            }
        }

        impl TryFrom<EntityRef> for $id {
            type Error = ValidationError;

            fn try_from(entity: EntityRef) -> Result<Self, Self::Error> {
                match entity {
                    EntityRef::$variant(id) => Ok(id),
                    other => Err(ValidationError::WrongKind {
                        expected: $kind.name(),
                        found: other.kind().name(),
                    }),
                }
            }
        }
    };
}

entity_handle!(PointId, Point, EntityKind::Point);
entity_handle!(CurveId, Curve, EntityKind::Curve);
entity_handle!(CurveLoopId, CurveLoop, EntityKind::CurveLoop);
entity_handle!(SurfaceId, Surface, EntityKind::Surface);

/// One entry of the emission order.
#[derive(Debug, Clone)]
enum Fragment {
    Entity(EntityRef),
    Raw(String),
}

/// A script-building session.
///
/// Owns every entity created through it, the per-kind id counters, and the
/// order in which entities were registered. Entities reference each other
/// through typed handles issued by this session, so a dependency always
/// exists before anything that refers to it and construction order is a
/// valid emission order.
///
/// Every handle records the session that issued it; passing it to another
/// session fails with [`ValidationError::UnknownEntity`].
#[derive(Debug)]
pub struct Geometry {
    session: SessionId,
    tags: TagCounters,
    points: SlotMap<PointKey, PointData>,
    curves: SlotMap<CurveKey, CurveData>,
    curve_loops: SlotMap<CurveLoopKey, CurveLoopData>,
    surfaces: SlotMap<SurfaceKey, SurfaceData>,
    order: Vec<Fragment>,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new()
    }
}

impl Geometry {
    /// Creates a new, empty session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: SessionId::unique(),
            tags: TagCounters::default(),
            points: SlotMap::with_key(),
            curves: SlotMap::with_key(),
            curve_loops: SlotMap::with_key(),
            surfaces: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Returns the full script: every registered fragment, in registration
    /// order, joined by newlines.
    #[must_use]
    pub fn get_code(&self) -> String {
        self.order
            .iter()
            .map(|fragment| match fragment {
                Fragment::Raw(code) => code.as_str(),
                Fragment::Entity(entity) => self.code_of(*entity),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Iterates over the registered entities in registration order.
    pub fn entities(&self) -> impl Iterator<Item = EntityRef> + '_ {
        self.order.iter().filter_map(|fragment| match fragment {
            Fragment::Entity(entity) => Some(*entity),
            Fragment::Raw(_) => None,
        })
    }

    /// Number of registered fragments, raw code included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Appends a verbatim fragment, e.g. a mesh option statement.
    pub fn add_raw_code(&mut self, code: impl Into<String>) {
        self.order.push(Fragment::Raw(code.into()));
    }

    fn code_of(&self, entity: EntityRef) -> &str {
        // `order` only holds handles this session issued, and arenas never
        // remove entries, so indexing cannot miss.
        match entity {
            EntityRef::Point(id) => self.points[id.key].code(),
            EntityRef::Curve(id) => self.curves[id.key].code(),
            EntityRef::CurveLoop(id) => self.curve_loops[id.key].code(),
            EntityRef::Surface(id) => self.surfaces[id.key].code(),
        }
    }

    fn register(&mut self, entity: EntityRef, tag: Tag) {
        debug!(%tag, "registered {}", tag.kind().name());
        self.order.push(Fragment::Entity(entity));
    }

    // --- Point operations ---

    /// Adds a point without a characteristic length.
    pub fn add_point(&mut self, position: Point3) -> PointId {
        self.insert_point(position, None)
    }

    /// Adds a point whose neighbourhood should be meshed with elements of
    /// size `lcar`.
    pub fn add_point_with_lcar(&mut self, position: Point3, lcar: f64) -> PointId {
        self.insert_point(position, Some(lcar))
    }

    fn insert_point(&mut self, position: Point3, lcar: Option<f64>) -> PointId {
        let tag = self.tags.issue(EntityKind::Point);
        let id = PointId {
            key: self.points.insert(PointData::new(tag, position, lcar)),
            session: self.session,
        };
        self.register(id.into(), tag);
        id
    }

    /// Returns the point data, or an error if `id` is not from this session.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownEntity`] if the point is not registered.
    pub fn point(&self, id: PointId) -> Result<&PointData, ValidationError> {
        self.points
            .get(id.key)
            .filter(|_| id.session == self.session)
            .ok_or(ValidationError::UnknownEntity("point"))
    }

    // --- Curve operations ---

    /// Adds a straight line from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if either point is not registered in this session,
    /// or if both ends are the same point.
    pub fn add_line(&mut self, start: PointId, end: PointId) -> Result<CurveId, ValidationError> {
        let point_tags = self.point_tags(&[start, end])?;
        if start == end {
            return Err(ValidationError::DegenerateLine(point_tags[0].to_string()));
        }
        Ok(self.insert_curve(CurveShape::Line([start, end]), &point_tags))
    }

    /// Adds a B-spline through the control points `points`, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than four points are given or any point is
    /// not registered in this session.
    pub fn add_bspline(&mut self, points: &[PointId]) -> Result<CurveId, ValidationError> {
        if points.len() <= BSPLINE_MIN_POINTS {
            return Err(ValidationError::TooFewPoints {
                entity: "bspline",
                min: BSPLINE_MIN_POINTS,
                got: points.len(),
            });
        }
        let point_tags = self.point_tags(points)?;
        Ok(self.insert_curve(CurveShape::BSpline(points.to_vec()), &point_tags))
    }

    fn insert_curve(&mut self, shape: CurveShape, point_tags: &[Tag]) -> CurveId {
        let tag = self.tags.issue(EntityKind::Curve);
        let id = CurveId {
            key: self.curves.insert(CurveData::new(tag, shape, point_tags)),
            session: self.session,
        };
        self.register(id.into(), tag);
        id
    }

    /// Returns the curve data, or an error if `id` is not from this session.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownEntity`] if the curve is not registered.
    pub fn curve(&self, id: CurveId) -> Result<&CurveData, ValidationError> {
        self.curves
            .get(id.key)
            .filter(|_| id.session == self.session)
            .ok_or(ValidationError::UnknownEntity("curve"))
    }

    fn point_tags(&self, points: &[PointId]) -> Result<Vec<Tag>, ValidationError> {
        points
            .iter()
            .map(|&id| self.point(id).map(PointData::tag))
            .collect()
    }

    // --- Curve loop operations ---

    /// Adds a closed loop of oriented curves.
    ///
    /// # Errors
    ///
    /// Returns an error if `curves` is empty, any curve is not registered in
    /// this session, or consecutive curves do not meet end to start
    /// (including the last curve back to the first).
    pub fn add_curve_loop(
        &mut self,
        curves: &[OrientedCurve],
    ) -> Result<CurveLoopId, ValidationError> {
        if curves.is_empty() {
            return Err(ValidationError::EmptyCurveLoop);
        }

        let mut curve_tags = Vec::with_capacity(curves.len());
        let mut ends = Vec::with_capacity(curves.len());
        for oc in curves {
            let data = self.curve(oc.curve)?;
            curve_tags.push(data.tag());
            ends.push(if oc.forward {
                (data.start(), data.end())
            } else {
                (data.end(), data.start())
            });
        }

        for (i, &(_, end)) in ends.iter().enumerate() {
            let (next_start, _) = ends[(i + 1) % ends.len()];
            if end != next_start {
                return Err(ValidationError::OpenCurveLoop {
                    end: self.point(end)?.tag().to_string(),
                    start: self.point(next_start)?.tag().to_string(),
                });
            }
        }

        let tag = self.tags.issue(EntityKind::CurveLoop);
        let id = CurveLoopId {
            key: self
                .curve_loops
                .insert(CurveLoopData::new(tag, curves.to_vec(), &curve_tags)),
            session: self.session,
        };
        self.register(id.into(), tag);
        Ok(id)
    }

    /// Returns the curve loop data, or an error if `id` is not from this
    /// session.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownEntity`] if the loop is not registered.
    pub fn curve_loop(&self, id: CurveLoopId) -> Result<&CurveLoopData, ValidationError> {
        self.curve_loops
            .get(id.key)
            .filter(|_| id.session == self.session)
            .ok_or(ValidationError::UnknownEntity("curve loop"))
    }

    // --- Surface operations ---

    /// Adds a plane surface bounded by `outer`, with `holes` cut out of it.
    ///
    /// # Errors
    ///
    /// Returns an error if any loop is not registered in this session, or if
    /// the points of all loops do not lie in one plane.
    pub fn add_plane_surface(
        &mut self,
        outer: CurveLoopId,
        holes: &[CurveLoopId],
    ) -> Result<SurfaceId, ValidationError> {
        let mut loop_tags = Vec::with_capacity(holes.len() + 1);
        let mut positions = Vec::new();
        for &loop_id in std::iter::once(&outer).chain(holes) {
            let data = self.curve_loop(loop_id)?;
            loop_tags.push(data.tag());
            for oc in data.curves() {
                for &point in self.curve(oc.curve)?.shape().points() {
                    positions.push(*self.point(point)?.position());
                }
            }
        }

        if !is_planar(&positions, PLANARITY_TOLERANCE) {
            return Err(ValidationError::NotPlanar);
        }

        let tag = self.tags.issue(EntityKind::Surface);
        let id = SurfaceId {
            key: self
                .surfaces
                .insert(SurfaceData::new(tag, outer, holes.to_vec(), &loop_tags)),
            session: self.session,
        };
        self.register(id.into(), tag);
        Ok(id)
    }

    /// Returns the surface data, or an error if `id` is not from this
    /// session.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownEntity`] if the surface is not registered.
    pub fn surface(&self, id: SurfaceId) -> Result<&SurfaceData, ValidationError> {
        self.surfaces
            .get(id.key)
            .filter(|_| id.session == self.session)
            .ok_or(ValidationError::UnknownEntity("surface"))
    }
}

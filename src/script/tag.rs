use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// The kinds of id-bearing entities a script can bind.
///
/// Each kind has its own counter and its own placeholder token in the
/// script language, so `p0` and `l0` may coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Point,
    Curve,
    CurveLoop,
    Surface,
}

impl EntityKind {
    const COUNT: usize = 4;

    /// Prefix of the symbolic ids issued for this kind.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Point => "p",
            Self::Curve => "l",
            Self::CurveLoop => "ll",
            Self::Surface => "s",
        }
    }

    /// Script token that allocates the next free id of this kind.
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Point => "newp",
            Self::Curve => "newl",
            Self::CurveLoop => "newll",
            Self::Surface => "news",
        }
    }

    /// Human-readable name used in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Curve => "curve",
            Self::CurveLoop => "curve loop",
            Self::Surface => "surface",
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::Point => 0,
            Self::Curve => 1,
            Self::CurveLoop => 2,
            Self::Surface => 3,
        }
    }
}

/// Symbolic identifier of an entity inside a generated script, e.g. `p3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    kind: EntityKind,
    index: usize,
}

impl Tag {
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Position of this tag in its kind's issue order.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The `<tag> = <placeholder>;` statement that binds this tag.
    #[must_use]
    pub fn binding(&self) -> String {
        format!("{self} = {};", self.kind.placeholder())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.index)
    }
}

/// Per-kind, monotonically increasing id counters of one session.
#[derive(Debug, Default, Clone)]
pub(crate) struct TagCounters {
    next: [usize; EntityKind::COUNT],
}

impl TagCounters {
    /// Issues the next tag of `kind`. Tags are never reclaimed.
    pub(crate) fn issue(&mut self, kind: EntityKind) -> Tag {
        let slot = &mut self.next[kind.slot()];
        let tag = Tag {
            kind,
            index: *slot,
        };
        *slot += 1;
        tag
    }
}

/// Identity of one [`Geometry`](super::Geometry) session, carried by every
/// handle it issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SessionId(u64);

impl SessionId {
    /// Returns a token no other session in this process holds.
    pub(crate) fn unique() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Declares a public entity handle pairing a private arena key with the
/// session that issued it.
macro_rules! session_handle {
    ($(#[$meta:meta])* $id:ident, $key:ident) => {
        slotmap::new_key_type! {
            pub(crate) struct $key;
        }

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $id {
            pub(crate) key: $key,
            pub(crate) session: $crate::script::tag::SessionId,
        }
    };
}
pub(crate) use session_handle;

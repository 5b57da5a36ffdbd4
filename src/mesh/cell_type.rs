use std::fmt;

/// Element types a mesh decoder may report, named as meshio names them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellType {
    Vertex,
    Line,
    Line3,
    Triangle,
    Triangle6,
    Quad,
    Quad8,
    Quad9,
    Tetra,
    Tetra10,
    Hexahedron,
    Hexahedron20,
    Hexahedron27,
    Wedge,
    Pyramid,
    PentaPrism,
    HexaPrism,
    /// A type this crate does not classify.
    Other(String),
}

impl CellType {
    /// Parses a decoder's cell-type name. Unknown names are kept verbatim.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "vertex" => Self::Vertex,
            "line" => Self::Line,
            "line3" => Self::Line3,
            "triangle" => Self::Triangle,
            "triangle6" => Self::Triangle6,
            "quad" => Self::Quad,
            "quad8" => Self::Quad8,
            "quad9" => Self::Quad9,
            "tetra" => Self::Tetra,
            "tetra10" => Self::Tetra10,
            "hexahedron" => Self::Hexahedron,
            "hexahedron20" => Self::Hexahedron20,
            "hexahedron27" => Self::Hexahedron27,
            "wedge" => Self::Wedge,
            "pyramid" => Self::Pyramid,
            "penta_prism" => Self::PentaPrism,
            "hexa_prism" => Self::HexaPrism,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Vertex => "vertex",
            Self::Line => "line",
            Self::Line3 => "line3",
            Self::Triangle => "triangle",
            Self::Triangle6 => "triangle6",
            Self::Quad => "quad",
            Self::Quad8 => "quad8",
            Self::Quad9 => "quad9",
            Self::Tetra => "tetra",
            Self::Tetra10 => "tetra10",
            Self::Hexahedron => "hexahedron",
            Self::Hexahedron20 => "hexahedron20",
            Self::Hexahedron27 => "hexahedron27",
            Self::Wedge => "wedge",
            Self::Pyramid => "pyramid",
            Self::PentaPrism => "penta_prism",
            Self::HexaPrism => "hexa_prism",
            Self::Other(name) => name,
        }
    }

    /// Topological dimension of the element, `None` for unclassified types.
    #[must_use]
    pub fn dimension(&self) -> Option<u8> {
        match self {
            Self::Vertex => Some(0),
            Self::Line | Self::Line3 => Some(1),
            Self::Triangle | Self::Triangle6 | Self::Quad | Self::Quad8 | Self::Quad9 => Some(2),
            Self::Tetra
            | Self::Tetra10
            | Self::Hexahedron
            | Self::Hexahedron20
            | Self::Hexahedron27
            | Self::Wedge
            | Self::Pyramid
            | Self::PentaPrism
            | Self::HexaPrism => Some(3),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

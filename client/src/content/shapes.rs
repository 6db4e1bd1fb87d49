//! Decorative floating-shape tables.
//!
//! Each page hands one of these tables to `FloatingShapes`, which treats the
//! entries as opaque render parameters: a shape kind, a scene position, a
//! size, a color, and a float speed.

/// Scene units per percent of the backdrop when projecting to the page.
const UNITS_TO_PERCENT: f32 = 8.0;
/// Float cycle length, in seconds, at speed 1.0.
const BASE_CYCLE_SECS: f32 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Box,
    Sphere,
    Torus,
    Octahedron,
    Icosahedron,
    Cone,
}

impl ShapeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Box => "shape--box",
            Self::Sphere => "shape--sphere",
            Self::Torus => "shape--torus",
            Self::Octahedron => "shape--octahedron",
            Self::Icosahedron => "shape--icosahedron",
            Self::Cone => "shape--cone",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingShape {
    pub kind: ShapeKind,
    /// Scene coordinates; `z` only affects depth ordering and blur.
    pub position: [f32; 3],
    /// Edge length in rem.
    pub size: f32,
    pub color: &'static str,
    pub speed: f32,
}

impl FloatingShape {
    /// Project the scene position onto the backdrop as `(left%, top%)`.
    pub fn screen_position(&self) -> (f32, f32) {
        let [x, y, _] = self.position;
        let left = (50.0 + x * UNITS_TO_PERCENT).clamp(0.0, 100.0);
        let top = (50.0 - y * UNITS_TO_PERCENT).clamp(0.0, 100.0);
        (left, top)
    }

    /// Seconds per float cycle; faster shapes cycle sooner.
    pub fn cycle_secs(&self) -> f32 {
        BASE_CYCLE_SECS / self.speed.max(0.1)
    }

    /// Shapes further back are drawn behind and softer.
    pub fn depth(&self) -> i32 {
        // z is a small scene coordinate, so truncation is fine.
        #[allow(clippy::cast_possible_truncation)]
        let z = self.position[2].round() as i32;
        10 + z
    }
}

const fn shape(kind: ShapeKind, position: [f32; 3], size: f32, color: &'static str, speed: f32) -> FloatingShape {
    FloatingShape {
        kind,
        position,
        size,
        color,
        speed,
    }
}

pub const HOME: [FloatingShape; 3] = [
    shape(ShapeKind::Box, [-2.0, 1.0, 0.0], 3.0, "#1e90ff", 2.0),
    shape(ShapeKind::Sphere, [2.0, -1.0, 0.0], 2.0, "#60a5fa", 1.5),
    shape(ShapeKind::Box, [0.0, 2.0, -1.0], 2.0, "#3b82f6", 3.0),
];

pub const ABOUT: [FloatingShape; 4] = [
    shape(ShapeKind::Sphere, [-4.0, 2.0, 0.0], 2.5, "#3B82F6", 1.5),
    shape(ShapeKind::Octahedron, [4.0, 2.0, -1.0], 2.0, "#8B5CF6", 2.0),
    shape(ShapeKind::Torus, [-3.0, -2.0, -2.0], 2.5, "#F59E0B", 1.0),
    shape(ShapeKind::Icosahedron, [3.0, -2.0, 0.0], 2.0, "#10B981", 2.5),
];

pub const SERVICES: [FloatingShape; 6] = [
    shape(ShapeKind::Sphere, [4.0, 1.0, 0.0], 2.5, "#3B82F6", 1.5),
    shape(ShapeKind::Box, [-4.0, 1.0, 0.0], 2.5, "#F59E0B", 2.0),
    shape(ShapeKind::Torus, [0.0, -2.0, 3.0], 3.0, "#10B981", 1.0),
    shape(ShapeKind::Octahedron, [3.0, 0.0, -3.0], 2.0, "#EF4444", 2.5),
    shape(ShapeKind::Icosahedron, [-3.0, 0.0, -3.0], 2.0, "#8B5CF6", 1.5),
    shape(ShapeKind::Cone, [0.0, 4.0, 0.0], 2.0, "#EC4899", 3.0),
];

pub const PRODUCTS: [FloatingShape; 6] = [
    shape(ShapeKind::Box, [6.0, 2.0, 0.0], 3.0, "#3B82F6", 1.5),
    shape(ShapeKind::Box, [-6.0, 2.0, 0.0], 2.0, "#8B5CF6", 2.0),
    shape(ShapeKind::Sphere, [0.0, -2.0, 5.0], 2.5, "#10B981", 1.0),
    shape(ShapeKind::Torus, [4.0, 0.0, -4.0], 2.5, "#EF4444", 2.5),
    shape(ShapeKind::Octahedron, [-4.0, 0.0, -4.0], 2.0, "#F59E0B", 1.5),
    shape(ShapeKind::Cone, [0.0, 5.0, -2.0], 2.0, "#EC4899", 3.0),
];

pub const CONTACT: [FloatingShape; 2] = [
    shape(ShapeKind::Sphere, [-5.0, 3.0, -1.0], 2.5, "#1e90ff", 1.5),
    shape(ShapeKind::Box, [5.0, -3.0, 0.0], 2.0, "#60a5fa", 2.0),
];

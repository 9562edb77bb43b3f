//! Weight-space geometry: a triangle whose vertices stand for the three
//! weight axes, with barycentric mapping between points and weight splits.
//!
//! Coordinates are screen-style (y grows downward). The default layout puts
//! Skills at the top, Compensation bottom-left and Culture bottom-right.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ranking::weights::{MatchWeights, WeightAxis};

const DEFAULT_CENTER: Point = Point { x: 150.0, y: 150.0 };
const DEFAULT_RADIUS: f64 = 120.0;
pub const CENTROID_SNAP_RADIUS: f64 = 12.0;
pub const VERTEX_SNAP_RADIUS: f64 = 18.0;

/// Tolerance for boundary tests, in squared layout units.
const EPSILON: f64 = 1e-6;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("triangle vertices are collinear")]
    DegenerateTriangle,

    #[error("point coordinates must be finite")]
    NonFinitePoint,

    #[error("invalid snap radii: {0}")]
    InvalidSnapRadius(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn ensure_finite(self) -> Result<Self, GeometryError> {
        if self.x.is_finite() && self.y.is_finite() {
            Ok(self)
        } else {
            Err(GeometryError::NonFinitePoint)
        }
    }
}

/// Signed doubled area of triangle (a, b, c).
fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Closest point to `p` on segment `a..b`.
fn project_onto_segment(p: Point, a: Point, b: Point) -> Point {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return a;
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / length_sq).clamp(0.0, 1.0);
    Point::new(a.x + t * dx, a.y + t * dy)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TriangleLayout {
    skills: Point,
    compensation: Point,
    culture: Point,
    centroid: Point,
    centroid_snap_radius: f64,
    vertex_snap_radius: f64,
}

impl Default for TriangleLayout {
    /// Equilateral triangle centred on (150, 150) with circumradius 120.
    fn default() -> Self {
        let half_base = DEFAULT_RADIUS * 30f64.to_radians().cos();
        let base_y = DEFAULT_CENTER.y + DEFAULT_RADIUS / 2.0;
        Self {
            skills: Point::new(DEFAULT_CENTER.x, DEFAULT_CENTER.y - DEFAULT_RADIUS),
            compensation: Point::new(DEFAULT_CENTER.x - half_base, base_y),
            culture: Point::new(DEFAULT_CENTER.x + half_base, base_y),
            centroid: DEFAULT_CENTER,
            centroid_snap_radius: CENTROID_SNAP_RADIUS,
            vertex_snap_radius: VERTEX_SNAP_RADIUS,
        }
    }
}

impl TriangleLayout {
    pub fn new(
        skills: Point,
        compensation: Point,
        culture: Point,
        centroid_snap_radius: f64,
        vertex_snap_radius: f64,
    ) -> Result<Self, GeometryError> {
        for vertex in [skills, compensation, culture] {
            vertex.ensure_finite()?;
        }
        if cross(skills, compensation, culture).abs() < EPSILON {
            return Err(GeometryError::DegenerateTriangle);
        }

        let centroid = Point::new(
            (skills.x + compensation.x + culture.x) / 3.0,
            (skills.y + compensation.y + culture.y) / 3.0,
        );

        for radius in [centroid_snap_radius, vertex_snap_radius] {
            if !radius.is_finite() || radius < 0.0 {
                return Err(GeometryError::InvalidSnapRadius(format!(
                    "{radius} is not a non-negative finite radius"
                )));
            }
        }
        // A snapped vertex must not fall inside the centroid zone, and vice versa.
        let nearest_vertex = [skills, compensation, culture]
            .into_iter()
            .map(|v| v.distance_to(centroid))
            .fold(f64::INFINITY, f64::min);
        if centroid_snap_radius >= nearest_vertex || vertex_snap_radius >= nearest_vertex {
            return Err(GeometryError::InvalidSnapRadius(format!(
                "radii must be smaller than the centroid-to-vertex distance {nearest_vertex:.2}"
            )));
        }

        Ok(Self {
            skills,
            compensation,
            culture,
            centroid,
            centroid_snap_radius,
            vertex_snap_radius,
        })
    }

    pub fn vertex(&self, axis: WeightAxis) -> Point {
        match axis {
            WeightAxis::Skills => self.skills,
            WeightAxis::Compensation => self.compensation,
            WeightAxis::Culture => self.culture,
        }
    }

    pub fn centroid(&self) -> Point {
        self.centroid
    }

    pub fn centroid_snap_radius(&self) -> f64 {
        self.centroid_snap_radius
    }

    pub fn vertex_snap_radius(&self) -> f64 {
        self.vertex_snap_radius
    }

    /// Convex combination of the vertices. An all-zero split maps to the centroid.
    pub fn weights_to_point(&self, weights: &MatchWeights) -> Point {
        let Some([ws, wc, wu]) = weights.normalized() else {
            return self.centroid;
        };
        Point::new(
            ws * self.skills.x + wc * self.compensation.x + wu * self.culture.x,
            ws * self.skills.y + wc * self.compensation.y + wu * self.culture.y,
        )
    }

    /// Barycentric coordinates of `point` (clamped into the triangle first) as
    /// whole percentages summing to exactly 100.
    pub fn point_to_weights(&self, point: Point) -> MatchWeights {
        let p = self.clamp_to_triangle(point);
        let total = cross(self.skills, self.compensation, self.culture).abs();

        // Each axis owns the sub-triangle opposite its vertex.
        let skills = cross(p, self.compensation, self.culture).abs() / total;
        let compensation = cross(p, self.culture, self.skills).abs() / total;
        let culture = cross(p, self.skills, self.compensation).abs() / total;

        MatchWeights::new(skills, compensation, culture).rounded()
    }

    /// Closed containment test: boundary points count as inside.
    pub fn is_inside_triangle(&self, p: Point) -> bool {
        let d1 = cross(self.skills, self.compensation, p);
        let d2 = cross(self.compensation, self.culture, p);
        let d3 = cross(self.culture, self.skills, p);

        let has_negative = d1 < -EPSILON || d2 < -EPSILON || d3 < -EPSILON;
        let has_positive = d1 > EPSILON || d2 > EPSILON || d3 > EPSILON;
        !(has_negative && has_positive)
    }

    /// Points outside move to the nearest point on the boundary.
    pub fn clamp_to_triangle(&self, p: Point) -> Point {
        if !p.x.is_finite() || !p.y.is_finite() {
            return self.centroid;
        }
        if self.is_inside_triangle(p) {
            return p;
        }

        [
            (self.skills, self.compensation),
            (self.compensation, self.culture),
            (self.culture, self.skills),
        ]
        .into_iter()
        .map(|(a, b)| project_onto_segment(p, a, b))
        .min_by(|a, b| p.distance_to(*a).total_cmp(&p.distance_to(*b)))
        .unwrap_or(self.centroid)
    }

    /// Release-time snapping: centroid first, then the nearest vertex.
    pub fn apply_snap(&self, p: Point) -> Point {
        if p.distance_to(self.centroid) <= self.centroid_snap_radius {
            return self.centroid;
        }
        WeightAxis::ALL
            .into_iter()
            .map(|axis| self.vertex(axis))
            .filter(|v| p.distance_to(*v) <= self.vertex_snap_radius)
            .min_by(|a, b| p.distance_to(*a).total_cmp(&p.distance_to(*b)))
            .unwrap_or(p)
    }
}

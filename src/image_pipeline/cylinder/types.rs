//! Cylinder geometry types

/// Physical description of the print cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderGeometry {
    /// Multiplier from millimeters of surface travel to pixels
    pub mm_to_pixel_ratio: f64,
    /// Cylinder diameter in millimeters
    pub diameter_mm: f64,
}

impl CylinderGeometry {
    pub fn new(mm_to_pixel_ratio: f64, diameter_mm: f64) -> Self {
        Self {
            mm_to_pixel_ratio,
            diameter_mm,
        }
    }

    pub fn circumference_mm(&self) -> f64 {
        std::f64::consts::PI * self.diameter_mm
    }

    /// Surface distance travelled by a rotation of `angle_degrees`.
    pub fn arc_length_mm(&self, angle_degrees: f64) -> f64 {
        let radians = angle_degrees.to_radians();
        radians * (self.circumference_mm() / std::f64::consts::TAU)
    }
}

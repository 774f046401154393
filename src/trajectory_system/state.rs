use crate::utils::vector2d::Vector2D;

/// Kinematic condition of the body at one instant, in normalized units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl State {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        State { x, y, vx, vy }
    }

    pub fn from_vectors(position: Vector2D, velocity: Vector2D) -> Self {
        State::new(position.x, position.y, velocity.x, velocity.y)
    }

    pub fn position(&self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }

    pub fn velocity(&self) -> Vector2D {
        Vector2D::new(self.vx, self.vy)
    }

    pub fn radius(&self) -> f64 {
        self.position().magnitude()
    }

    pub fn speed(&self) -> f64 {
        self.velocity().magnitude()
    }

    /// Specific mechanical energy `½|v|² − μ/r` for gravitational parameter `mu = G·M`.
    pub fn specific_energy(&self, mu: f64) -> f64 {
        0.5 * self.velocity().magnitude_squared() - mu / self.radius()
    }

    /// Specific angular momentum about the origin.
    pub fn angular_momentum(&self) -> f64 {
        self.position().cross(&self.velocity())
    }

    pub fn is_finite(&self) -> bool {
        self.position().is_finite() && self.velocity().is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circular_orbit_energy() {
        // v = sqrt(mu / r) gives E = -mu / (2r)
        let r = 1.5_f64;
        let state = State::new(r, 0.0, 0.0, (1.0 / r).sqrt());
        assert_relative_eq!(state.specific_energy(1.0), -1.0 / (2.0 * r), epsilon = 1e-12);
        assert_relative_eq!(state.angular_momentum(), r * (1.0 / r).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_vector_accessors() {
        let state = State::from_vectors(Vector2D::new(3.0, 4.0), Vector2D::new(0.0, -2.0));
        assert_eq!(state.radius(), 5.0);
        assert_eq!(state.speed(), 2.0);
        assert!(state.is_finite());
        assert!(!State::new(f64::NAN, 0.0, 0.0, 0.0).is_finite());
    }
}

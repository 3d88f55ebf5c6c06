//! Looping flight paths for cruising enemies.
//!
//! A [`FlightPath`] moves an entity along a [`Curve`] by writing its
//! [`MapPosition`] every frame. The path parameter `t` runs from 0 to 1 in
//! `duration` seconds and loops forever; with `yoyo` it runs back to 0 in
//! another `duration` before looping.
//!
//! # Related
//!
//! - [`crate::systems::enemy::flight_path_system`] – advances paths and moves entities

use bevy_ecs::prelude::Component;

use crate::components::mapposition::MapPosition;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    /// Arc of an ellipse, swept from `start_deg` to `end_deg`.
    Ellipse {
        center: MapPosition,
        rx: f32,
        ry: f32,
        start_deg: f32,
        end_deg: f32,
    },
    CubicBezier {
        p0: MapPosition,
        p1: MapPosition,
        p2: MapPosition,
        p3: MapPosition,
    },
}

impl Curve {
    /// Full circle around `center`, starting and ending at angle 0.
    pub fn circle(center: MapPosition, radius: f32) -> Self {
        Curve::Ellipse {
            center,
            rx: radius,
            ry: radius,
            start_deg: 360.0,
            end_deg: 0.0,
        }
    }

    /// Point on the curve at `t` in [0, 1].
    pub fn point_at(&self, t: f32) -> MapPosition {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Curve::Ellipse {
                center,
                rx,
                ry,
                start_deg,
                end_deg,
            } => {
                let angle = (start_deg + (end_deg - start_deg) * t).to_radians();
                MapPosition::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
            }
            Curve::CubicBezier { p0, p1, p2, p3 } => {
                let u = 1.0 - t;
                let b0 = u * u * u;
                let b1 = 3.0 * u * u * t;
                let b2 = 3.0 * u * t * t;
                let b3 = t * t * t;
                MapPosition::new(
                    b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
                    b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
                )
            }
        }
    }
}

#[derive(Component, Clone, Debug, PartialEq)]
pub struct FlightPath {
    pub curve: Curve,
    /// Seconds for `t` to go from 0 to 1.
    pub duration: f32,
    pub yoyo: bool,
    pub elapsed: f32,
}

impl FlightPath {
    pub fn new(curve: Curve, duration: f32) -> Self {
        FlightPath {
            curve,
            duration,
            yoyo: false,
            elapsed: 0.0,
        }
    }

    pub fn with_yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    /// Current path parameter in [0, 1].
    pub fn t(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        if self.yoyo {
            let phase = self.elapsed % (self.duration * 2.0);
            if phase > self.duration {
                return 1.0 - (phase - self.duration) / self.duration;
            }
            return phase / self.duration;
        }
        (self.elapsed % self.duration) / self.duration
    }

    pub fn position(&self) -> MapPosition {
        self.curve.point_at(self.t())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn weave(origin: MapPosition) -> Curve {
        Curve::CubicBezier {
            p0: origin,
            p1: origin.offset(100.0, 20.0),
            p2: origin.offset(-100.0, 80.0),
            p3: origin.offset(0.0, 100.0),
        }
    }

    #[test]
    fn test_circle_points() {
        let circle = Curve::circle(MapPosition::new(100.0, 50.0), 20.0);
        let start = circle.point_at(0.0);
        assert!(approx_eq(start.x, 120.0) && approx_eq(start.y, 50.0));
        let half = circle.point_at(0.5);
        assert!(approx_eq(half.x, 80.0) && approx_eq(half.y, 50.0));
        let quarter = circle.point_at(0.25);
        // 270 degrees, y grows downwards
        assert!(approx_eq(quarter.x, 100.0) && approx_eq(quarter.y, 30.0));
    }

    #[test]
    fn test_bezier_endpoints_and_midpoint() {
        let curve = weave(MapPosition::new(200.0, 300.0));
        assert_eq!(curve.point_at(0.0), MapPosition::new(200.0, 300.0));
        let end = curve.point_at(1.0);
        assert!(approx_eq(end.x, 200.0) && approx_eq(end.y, 400.0));
        let mid = curve.point_at(0.5);
        assert!(approx_eq(mid.x, 200.0));
        assert!(approx_eq(mid.y, 300.0 + 0.375 * 20.0 + 0.375 * 80.0 + 0.125 * 100.0));
    }

    #[test]
    fn test_path_loops() {
        let mut path = FlightPath::new(Curve::circle(MapPosition::default(), 20.0), 3.0);
        path.elapsed = 1.5;
        assert!(approx_eq(path.t(), 0.5));
        path.elapsed = 4.5;
        assert!(approx_eq(path.t(), 0.5));
    }

    #[test]
    fn test_yoyo_path_returns() {
        let mut path = FlightPath::new(weave(MapPosition::default()), 3.0).with_yoyo();
        path.elapsed = 3.0;
        assert!(approx_eq(path.t(), 1.0));
        path.elapsed = 4.5;
        assert!(approx_eq(path.t(), 0.5));
        path.elapsed = 6.0;
        assert!(approx_eq(path.t(), 0.0));
        let pos = path.position();
        assert!(approx_eq(pos.x, 0.0) && approx_eq(pos.y, 0.0));
    }
}

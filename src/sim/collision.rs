//! Road departure check
//!
//! The drivable band is centered on the origin and has a fixed half-width. The
//! car is out as soon as either of its sides crosses a road edge.

/// Result of a bounds check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsCheck {
    pub car_left: f32,
    pub car_right: f32,
    pub road_left: f32,
    pub road_right: f32,
}

impl BoundsCheck {
    pub fn new(car_x: f32, car_half_width: f32, road_half_width: f32) -> Self {
        Self {
            car_left: car_x - car_half_width,
            car_right: car_x + car_half_width,
            road_left: -road_half_width,
            road_right: road_half_width,
        }
    }

    /// True when the car overhangs either edge. Touching an edge is still on the road.
    pub fn off_road(&self) -> bool {
        self.car_left < self.road_left || self.car_right > self.road_right
    }
}

/// Whether a car centered at `car_x` has left the road
pub fn off_road(car_x: f32, car_half_width: f32, road_half_width: f32) -> bool {
    BoundsCheck::new(car_x, car_half_width, road_half_width).off_road()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAR: f32 = 1.5;
    const ROAD: f32 = 15.0;

    #[test]
    fn test_centered_car_is_on_road() {
        assert!(!off_road(0.0, CAR, ROAD));
    }

    #[test]
    fn test_exact_edge_is_on_road() {
        assert!(!off_road(ROAD - CAR, CAR, ROAD));
        assert!(!off_road(-(ROAD - CAR), CAR, ROAD));
    }

    #[test]
    fn test_any_overhang_is_off_road() {
        for eps in [1e-3f32, 0.01, 0.5, 10.0] {
            assert!(off_road(ROAD - CAR + eps, CAR, ROAD), "right +{eps}");
            assert!(off_road(-(ROAD - CAR) - eps, CAR, ROAD), "left -{eps}");
        }
    }

    #[test]
    fn test_bounds_values() {
        let check = BoundsCheck::new(2.0, CAR, ROAD);
        assert_eq!(check.car_left, 0.5);
        assert_eq!(check.car_right, 3.5);
        assert_eq!(check.road_left, -15.0);
        assert_eq!(check.road_right, 15.0);
        assert!(!check.off_road());
    }
}

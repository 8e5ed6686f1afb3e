//! Piecewise-linear range mapping.
//!
//! Maps an input through a list of `(input, output)` control points, clamping
//! to the first/last output outside the covered range.

#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    points: Vec<(f64, f64)>,
}

impl Keyframes {
    /// Builds keyframes from points in any order, sorting them by input.
    pub fn sorted(points: impl Into<Vec<(f64, f64)>>) -> Self {
        let mut points = points.into();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { points }
    }

    pub fn sample(&self, input: f64) -> f64 {
        let (Some(&(first_in, first_out)), Some(&(last_in, last_out))) =
            (self.points.first(), self.points.last())
        else {
            return 0.0;
        };

        if input.is_nan() || input <= first_in {
            return first_out;
        }
        if input >= last_in {
            return last_out;
        }

        for pair in self.points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if input <= x1 {
                if x1 == x0 {
                    return y1;
                }
                let t = (input - x0) / (x1 - x0);
                return y0 + (y1 - y0) * t;
            }
        }
        last_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn empty_samples_zero() {
        assert_eq!(Keyframes::sorted(Vec::<(f64, f64)>::new()).sample(0.3), 0.0);
    }

    #[test]
    fn clamps_outside_range() {
        let k = Keyframes::sorted(vec![(0.0, 0.0), (0.5, 30.0)]);
        assert_eq!(k.sample(-1.0), 0.0);
        assert_eq!(k.sample(0.9), 30.0);
        assert_eq!(k.sample(f64::NAN), 0.0);
    }

    #[test]
    fn interpolates_between_points() {
        let k = Keyframes::sorted(vec![(0.0, 1.0), (0.3, 0.7), (0.5, 0.0)]);
        assert!(approx(k.sample(0.15), 0.85));
        assert!(approx(k.sample(0.3), 0.7));
        assert!(approx(k.sample(0.4), 0.35));
    }

    #[test]
    fn sorted_orders_points() {
        let k = Keyframes::sorted(vec![(0.5, 0.0), (0.0, 1.0)]);
        assert!(approx(k.sample(0.25), 0.5));
    }

    #[test]
    fn single_point_is_constant() {
        let k = Keyframes::sorted(vec![(0.2, 4.0)]);
        assert_eq!(k.sample(0.0), 4.0);
        assert_eq!(k.sample(1.0), 4.0);
    }
}

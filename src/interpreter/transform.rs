use super::environment::Environment;

/// Maps a raw `(x, y)` pair to device space: scale, then rotate, then translate by the origin.
///
/// The rotation adds both cross terms (`x' = x·cosθ + y·sinθ`, `y' = y·cosθ + x·sinθ`).
/// This is not the conventional rotation matrix and is kept as the language defines it.
pub fn transform(x: f64, y: f64, env: &Environment) -> (f64, f64) {
    let x = x * env.scale.0;
    let y = y * env.scale.1;

    let (sin, cos) = env.rotation.sin_cos();
    let rotated_x = x * cos + y * sin;
    let rotated_y = y * cos + x * sin;

    (rotated_x + env.origin.0, rotated_y + env.origin.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};

    #[test]
    fn defaults_are_identity() {
        let env = Environment::new();
        for (x, y) in [(0.0, 0.0), (1.5, -2.25), (-1e9, 3e-7), (123.0, 456.0)] {
            assert_eq!(transform(x, y, &env), (x, y));
        }
    }

    #[test]
    fn scale_then_translate() {
        let env = Environment { scale: (2.0, 3.0), origin: (10.0, 20.0), ..Environment::new() };
        assert_eq!(transform(1.0, 1.0, &env), (12.0, 23.0));
    }

    #[test]
    fn rotation_adds_both_cross_terms() {
        let env = Environment { rotation: FRAC_PI_2, ..Environment::new() };
        let (x, y) = transform(1.0, 0.0, &env);
        // a conventional rotation would give (0, 1); here y' = y·cos + x·sin as well
        assert_approx_eq!(x, 0.0);
        assert_approx_eq!(y, 1.0);

        let (x, y) = transform(0.0, 1.0, &env);
        // conventional would be (-1, 0)
        assert_approx_eq!(x, 1.0);
        assert_approx_eq!(y, 0.0);

        let env = Environment { rotation: FRAC_PI_4, ..Environment::new() };
        let (x, y) = transform(1.0, 1.0, &env);
        assert_approx_eq!(x, SQRT_2);
        assert_approx_eq!(y, SQRT_2);
    }

    #[test]
    fn rotation_happens_before_translation() {
        let env = Environment { rotation: FRAC_PI_2, origin: (100.0, 50.0), scale: (2.0, 2.0), ..Environment::new() };
        let (x, y) = transform(0.0, 1.0, &env);
        assert_approx_eq!(x, 102.0);
        assert_approx_eq!(y, 50.0);
    }
}

use std::io::Write;

/// Standard gravity (m/s^2)
pub const G: f64 = 9.81;

/// Message emitted when the inputs fail validation.
pub const INVALID_INPUT_MSG: &str =
    "Please ensure all values given are positive and incline is between 0 and 90";

/// Final linear speed of a uniform disk after rolling without slipping
/// from rest down an incline of vertical drop `height`.
///
/// Energy balance: m*g*h = 1/2*m*v^2 + 1/2*I*w^2, with I = 1/2*m*r^2 for a
/// uniform disk and w = v/r, so every term carries v^2 and the equation is
/// the quadratic A*v^2 - C = 0 with A = 3/4*m and C = m*g*h.
///
/// `length`, `incline`, `friction` and `radius` are validated but drop out
/// of the balance (`mass` and `radius` cancel algebraically). Returns
/// `None` on invalid input instead of a sentinel speed.
pub fn final_disk_speed(
    height: f64,
    length: f64,
    incline: f64,
    mass: f64,
    friction: f64,
    radius: f64,
) -> Option<f64> {
    if height <= 0.0
        || length <= 0.0
        || incline <= 0.0
        || incline >= 90.0
        || mass <= 0.0
        || friction <= 0.0
        || radius <= 0.0
    {
        return None;
    }

    let moment = 0.5 * mass * radius * radius;

    // Both kinetic terms are coefficients of v^2
    let rotational = 0.5 * moment / (radius * radius);
    let translational = 0.5 * mass;

    let gravity = mass * G * height;

    positive_root(translational + rotational, gravity)
}

/// Same computation, but reports the validation diagnostic to `sink`
/// (once, only on the invalid path).
pub fn final_disk_speed_with_diagnostics<W: Write>(
    height: f64,
    length: f64,
    incline: f64,
    mass: f64,
    friction: f64,
    radius: f64,
    sink: &mut W,
) -> Option<f64> {
    let speed = final_disk_speed(height, length, incline, mass, friction, radius);
    if speed.is_none() {
        let _ = writeln!(sink, "{INVALID_INPUT_MSG}");
    }
    speed
}

/// Positive root of the quadratic [A, 0, -C] in v. With no linear term the
/// roots are +/-sqrt(C/A), so take the closed form directly, guarded
/// against degenerate coefficients.
fn positive_root(a: f64, c: f64) -> Option<f64> {
    if a <= 0.0 || c <= 0.0 {
        return None;
    }
    let v = (c / a).sqrt();
    (v > 0.0).then_some(v)
}

/// Potential energy at the top of the incline: m*g*h (joules).
pub fn potential_energy(mass: f64, height: f64) -> f64 {
    mass * G * height
}

/// Translational kinetic energy at the bottom: 1/2*m*v^2 (joules).
pub fn translational_energy(mass: f64, speed: f64) -> f64 {
    0.5 * mass * speed * speed
}

/// Rotational kinetic energy at the bottom: 1/2*I*w^2 = 1/4*m*v^2 (joules).
pub fn rotational_energy(mass: f64, speed: f64) -> f64 {
    0.25 * mass * speed * speed
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solve(height: f64) -> Option<f64> {
        final_disk_speed(height, 10.0, 30.0, 2.0, 0.3, 0.5)
    }

    #[test]
    fn worked_example() {
        let v = solve(5.0).unwrap();
        assert_relative_eq!(v, (4.0 * G * 5.0 / 3.0).sqrt(), max_relative = 1e-12);
        assert_relative_eq!(v, 8.0870, max_relative = 1e-4);
    }

    #[test]
    fn closed_form_over_valid_heights() {
        for height in [0.01, 1.0, 5.0, 123.456] {
            let v = solve(height).unwrap();
            assert!(v >= 0.0);
            assert_relative_eq!(v, (2.0 * G * height / 1.5).sqrt(), max_relative = 1e-12);
        }
    }

    #[test]
    fn mass_and_radius_cancel() {
        // Looks like a bug, is algebra: A = 3/4*m and C = m*g*h share the
        // mass factor, and radius drops out of the rotational term.
        let baseline = solve(5.0).unwrap();
        for (mass, radius) in [(0.001, 0.01), (2.0, 0.5), (70.0, 3.0)] {
            let v = final_disk_speed(5.0, 10.0, 30.0, mass, 0.3, radius).unwrap();
            assert_relative_eq!(v, baseline, max_relative = 1e-12);
        }
    }

    #[test]
    fn length_incline_friction_do_not_matter() {
        let baseline = solve(5.0).unwrap();
        let v = final_disk_speed(5.0, 500.0, 89.0, 2.0, 0.99, 0.5).unwrap();
        assert_relative_eq!(v, baseline, max_relative = 1e-12);
    }

    #[test]
    fn rejects_nonpositive_inputs() {
        for bad in [0.0, -1.0] {
            assert_eq!(final_disk_speed(bad, 10.0, 30.0, 2.0, 0.3, 0.5), None);
            assert_eq!(final_disk_speed(5.0, bad, 30.0, 2.0, 0.3, 0.5), None);
            assert_eq!(final_disk_speed(5.0, 10.0, bad, 2.0, 0.3, 0.5), None);
            assert_eq!(final_disk_speed(5.0, 10.0, 30.0, bad, 0.3, 0.5), None);
            assert_eq!(final_disk_speed(5.0, 10.0, 30.0, 2.0, bad, 0.5), None);
            assert_eq!(final_disk_speed(5.0, 10.0, 30.0, 2.0, 0.3, bad), None);
        }
    }

    #[test]
    fn incline_boundaries() {
        assert_eq!(final_disk_speed(2.0, 10.0, 0.0, 2.0, 0.3, 0.5), None);
        assert_eq!(final_disk_speed(2.0, 10.0, 90.0, 2.0, 0.3, 0.5), None);
        assert_eq!(final_disk_speed(2.0, 10.0, 95.0, 2.0, 0.3, 0.5), None);
        assert!(final_disk_speed(2.0, 10.0, 0.0001, 2.0, 0.3, 0.5).is_some());
        assert!(final_disk_speed(2.0, 10.0, 89.9999, 2.0, 0.3, 0.5).is_some());
    }

    #[test]
    fn idempotent() {
        assert_eq!(solve(7.25), solve(7.25));
    }

    #[test]
    fn diagnostic_only_on_invalid_path() {
        let mut sink = Vec::new();
        let v = final_disk_speed_with_diagnostics(5.0, 10.0, 30.0, 2.0, 0.3, 0.5, &mut sink);
        assert!(v.is_some());
        assert!(sink.is_empty());

        let v = final_disk_speed_with_diagnostics(0.0, 10.0, 30.0, 2.0, 0.3, 0.5, &mut sink);
        assert_eq!(v, None);
        assert_eq!(
            String::from_utf8(sink).unwrap(),
            format!("{INVALID_INPUT_MSG}\n")
        );
    }

    #[test]
    fn energy_accounting_balances() {
        let mass = 2.0;
        let height = 5.0;
        let v = final_disk_speed(height, 10.0, 30.0, mass, 0.3, 0.5).unwrap();
        let kinetic = translational_energy(mass, v) + rotational_energy(mass, v);
        assert_relative_eq!(kinetic, potential_energy(mass, height), max_relative = 1e-12);
    }
}

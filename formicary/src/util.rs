use once_cell::sync::Lazy;

const TABLE_SIZE: usize = 512;

/// Precomputed sine/cosine pairs for equally spaced angles around the circle.
static SIN_COS_TABLE: Lazy<[(f32, f32); TABLE_SIZE]> = Lazy::new(|| {
    let mut table = [(0.0f32, 0.0f32); TABLE_SIZE];
    let step = std::f32::consts::TAU / TABLE_SIZE as f32;
    for (i, entry) in table.iter_mut().enumerate() {
        let angle = i as f32 * step;
        *entry = (angle.sin(), angle.cos());
    }
    table
});

/// Table-lookup sine and cosine. Angles outside [0, TAU) are normalized with
/// rem_euclid, so negative and large angles are fine.
#[inline(always)]
pub fn fast_sin_cos(angle: f32) -> (f32, f32) {
    let frac = angle.rem_euclid(std::f32::consts::TAU) / std::f32::consts::TAU;
    let idx = ((frac * TABLE_SIZE as f32) as usize) % TABLE_SIZE;
    SIN_COS_TABLE[idx]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn close_to_the_real_thing_around_the_circle() {
        let mut angle = -2.0 * PI;
        while angle < 4.0 * PI {
            let (s, c) = fast_sin_cos(angle);
            assert!((s - angle.sin()).abs() < 0.02, "sin off at {}", angle);
            assert!((c - angle.cos()).abs() < 0.02, "cos off at {}", angle);
            angle += 0.1;
        }
    }

    #[test]
    fn zero_angle_is_exact() {
        let (s, c) = fast_sin_cos(0.0);
        assert_eq!(s, 0.0);
        assert_eq!(c, 1.0);
    }
}

//! Layout of the decorative background shapes.
//!
//! Values come from a low-discrepancy sequence instead of a random source so that the
//! server-rendered markup and the hydrated page agree.

const GOLDEN: f64 = 0.618_033_988_749_895;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingShape {
    /// Diameter in px, 20..80.
    pub size: f64,
    /// Percent of the viewport, 0..100.
    pub top: f64,
    pub left: f64,
    /// Seconds per animation cycle, 10..30.
    pub duration: f64,
    /// Seconds before the animation starts, 0..5.
    pub delay: f64,
    /// Drifts right (`true`) or left while floating; also picks the gradient.
    pub drifts_right: bool,
}

fn frac(x: f64) -> f64 {
    x - x.floor()
}

fn sample(index: usize, channel: usize) -> f64 {
    frac((index + 1) as f64 * GOLDEN + channel as f64 * 0.137)
}

pub fn floating_shapes(count: usize) -> Vec<FloatingShape> {
    (0..count)
        .map(|i| FloatingShape {
            size: sample(i, 0) * 60.0 + 20.0,
            top: sample(i, 1) * 100.0,
            left: sample(i, 2) * 100.0,
            duration: sample(i, 3) * 20.0 + 10.0,
            delay: sample(i, 4) * 5.0,
            drifts_right: i % 2 == 0,
        })
        .collect()
}

impl FloatingShape {
    pub fn gradient(&self) -> &'static str {
        if self.drifts_right {
            "linear-gradient(to right, #06b6d4, #3b82f6)"
        } else {
            "linear-gradient(to right, #06b6d4, #8b5cf6)"
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {:.1}px; height: {:.1}px; top: {:.1}%; left: {:.1}%; background: {}; animation-duration: {:.1}s; animation-delay: {:.1}s;",
            self.size,
            self.size,
            self.top,
            self.left,
            self.gradient(),
            self.duration,
            self.delay
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes_within_ranges() {
        let shapes = floating_shapes(8);
        assert_eq!(shapes.len(), 8);
        for s in &shapes {
            assert!((20.0..80.0).contains(&s.size));
            assert!((0.0..100.0).contains(&s.top));
            assert!((0.0..100.0).contains(&s.left));
            assert!((10.0..30.0).contains(&s.duration));
            assert!((0.0..5.0).contains(&s.delay));
        }
    }

    #[test]
    fn test_shapes_are_stable() {
        assert_eq!(floating_shapes(8), floating_shapes(8));
        assert!(floating_shapes(2)[0].drifts_right);
        assert!(!floating_shapes(2)[1].drifts_right);
    }
}

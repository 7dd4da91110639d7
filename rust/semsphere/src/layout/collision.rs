//! CollisionResolver - deterministic jitter for words that land on the same spot
//!
//! State lives for exactly one plot pass. Points are quantized to a fixed
//! number of decimals; the Nth arrival at an occupied key is pushed out
//! along a 60°-step circle and raised by N steps.

use std::collections::{HashMap, HashSet};

use super::strategy::Point3;

type Key = (i64, i64, i64);

/// A placed point and how many jitter steps it took to free it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    pub position: Point3,
    /// 0 when the original point was free
    pub collision_index: u32,
}

#[derive(Debug, Clone)]
pub struct CollisionResolver {
    scale: f64,
    jitter_radius: f64,
    jitter_step: f64,
    /// Arrivals per original key
    arrivals: HashMap<Key, u32>,
    /// Keys already taken by a resolved point
    claimed: HashSet<Key>,
    collisions: usize,
}

impl CollisionResolver {
    /// `jitter_step` is floored at one quantum so every step rises to a new key.
    pub fn new(quantize_decimals: u32, jitter_radius: f64, jitter_step: f64) -> Self {
        let scale = 10f64.powi(quantize_decimals as i32);
        Self {
            scale,
            jitter_radius,
            jitter_step: jitter_step.max(1.0 / scale),
            arrivals: HashMap::new(),
            claimed: HashSet::new(),
            collisions: 0,
        }
    }

    fn key(&self, p: Point3) -> Key {
        (
            (p[0] * self.scale).round() as i64,
            (p[1] * self.scale).round() as i64,
            (p[2] * self.scale).round() as i64,
        )
    }

    /// Offset for the Nth collision at a point
    pub fn jittered(&self, p: Point3, n: u32) -> Point3 {
        if n == 0 {
            return p;
        }
        let angle = (n as f64 * 60.0).to_radians();
        [
            p[0] + angle.cos() * self.jitter_radius,
            p[1] + n as f64 * self.jitter_step,
            p[2] + angle.sin() * self.jitter_radius,
        ]
    }

    /// Claim a free spot for `point`.
    ///
    /// Starts at the arrival count for the point's key and keeps stepping
    /// while the candidate is already claimed, so no two resolved points
    /// ever share a key.
    pub fn resolve(&mut self, point: Point3) -> Resolved {
        let origin = self.key(point);
        let mut n = self.arrivals.get(&origin).copied().unwrap_or(0);

        let (position, key) = loop {
            let candidate = self.jittered(point, n);
            let key = self.key(candidate);
            if !self.claimed.contains(&key) {
                break (candidate, key);
            }
            n += 1;
        };

        self.arrivals.insert(origin, n + 1);
        self.claimed.insert(key);
        if n > 0 {
            self.collisions += 1;
        }

        Resolved {
            position,
            collision_index: n,
        }
    }

    /// Number of points that needed jitter so far
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    pub fn claimed(&self) -> usize {
        self.claimed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> CollisionResolver {
        CollisionResolver::new(3, 0.3, 0.1)
    }

    #[test]
    fn test_free_point_is_untouched() {
        let mut r = resolver();
        let res = r.resolve([4.0, 0.0, 0.0]);
        assert_eq!(res.position, [4.0, 0.0, 0.0]);
        assert_eq!(res.collision_index, 0);
        assert_eq!(r.collisions(), 0);
    }

    #[test]
    fn test_second_arrival_is_jittered() {
        let mut r = resolver();
        r.resolve([4.0, 0.0, 0.0]);
        let res = r.resolve([4.0, 0.0, 0.0]);
        assert_eq!(res.collision_index, 1);
        let expected = [4.0 + 0.15, 0.1, 0.3 * 60f64.to_radians().sin()];
        for i in 0..3 {
            assert!((res.position[i] - expected[i]).abs() < 1e-12);
        }
        assert_eq!(r.collisions(), 1);
    }

    #[test]
    fn test_near_points_share_a_key() {
        let mut r = resolver();
        r.resolve([1.0, 2.0, 3.0]);
        let res = r.resolve([1.0001, 2.0, 3.0]);
        assert_eq!(res.collision_index, 1);
    }

    #[test]
    fn test_many_arrivals_never_overlap() {
        let mut r = resolver();
        let mut keys = HashSet::new();
        for _ in 0..50 {
            let res = r.resolve([0.0, 0.0, 0.0]);
            assert!(keys.insert(r.key(res.position)));
        }
        assert_eq!(r.claimed(), 50);
        assert_eq!(r.collisions(), 49);
    }

    #[test]
    fn test_flat_step_still_terminates() {
        // Without a rise the 60° ring repeats after six arrivals
        let mut r = CollisionResolver::new(3, 0.3, 0.0);
        let mut keys = HashSet::new();
        for n in 0..12 {
            let res = r.resolve([4.0, 0.0, 0.0]);
            assert_eq!(res.collision_index, n);
            assert!(keys.insert(r.key(res.position)));
        }
        assert_eq!(r.collisions(), 11);
    }

    #[test]
    fn test_jitter_onto_claimed_spot_steps_again() {
        let mut r = resolver();
        let origin = [0.0, 0.0, 0.0];
        // Pre-claim where the first jitter would land
        let first_jitter = r.jittered(origin, 1);
        r.resolve(first_jitter);
        r.resolve(origin);
        let res = r.resolve(origin);
        assert_eq!(res.collision_index, 2);
    }

    #[test]
    fn test_same_order_same_offsets() {
        let points = [[1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
        let run = || {
            let mut r = resolver();
            points.iter().map(|&p| r.resolve(p)).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}

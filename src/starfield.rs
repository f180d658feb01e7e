//! Star positions for the decorative galaxy background.
//!
//! Layout is deterministic per canvas id so a resize redraws the same sky.

use rand::{rngs::SmallRng, Rng, SeedableRng};

const PIXELS_PER_STAR: f64 = 6000.0;
const MIN_STARS: usize = 40;
const MAX_STARS: usize = 400;
const MAX_LINKS_PER_STAR: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub alpha: f64,
}

/// FNV-1a, so the same canvas id gives the same sky on every load.
pub fn seed_for(id: &str) -> u64 {
    id.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

pub fn star_count(width: f64, height: f64) -> usize {
    let area = (width * height).max(0.0);
    ((area / PIXELS_PER_STAR) as usize).clamp(MIN_STARS, MAX_STARS)
}

/// Scatters stars over a `width` x `height` pixel area.
pub fn star_field(seed: u64, width: f64, height: f64) -> Vec<Star> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..star_count(width, height))
        .map(|_| Star {
            x: rng.random_range(0.0..1.0) * width,
            y: rng.random_range(0.0..1.0) * height,
            radius: rng.random_range(0.3..1.6),
            alpha: rng.random_range(0.2..1.0),
        })
        .collect()
}

/// Pairs of star indices to join with a line.
///
/// Each star links to at most its two nearest neighbours closer than
/// `max_distance`; pairs are reported once with the lower index first.
pub fn constellation_edges(stars: &[Star], max_distance: f64) -> Vec<(usize, usize)> {
    let max_sq = max_distance * max_distance;
    let mut edges = Vec::new();
    for (i, a) in stars.iter().enumerate() {
        let mut near = stars
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(j, b)| (j, (a.x - b.x).powi(2) + (a.y - b.y).powi(2)))
            .filter(|&(_, d)| d < max_sq)
            .collect::<Vec<_>>();
        near.sort_by(|l, r| l.1.total_cmp(&r.1));
        for (j, _) in near.into_iter().take(MAX_LINKS_PER_STAR) {
            let edge = (i.min(j), i.max(j));
            if !edges.contains(&edge) {
                edges.push(edge);
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(x: f64, y: f64) -> Star {
        Star {
            x,
            y,
            radius: 1.0,
            alpha: 1.0,
        }
    }

    #[test]
    fn test_same_seed_same_sky() {
        let seed = seed_for("homeCanvas");
        assert_eq!(star_field(seed, 1280.0, 720.0), star_field(seed, 1280.0, 720.0));
        assert_ne!(seed, seed_for("aboutCanvas"));
    }

    #[test]
    fn test_stars_stay_on_canvas() {
        for star in star_field(seed_for("projectsCanvas"), 390.0, 844.0) {
            assert!((0.0..390.0).contains(&star.x));
            assert!((0.0..844.0).contains(&star.y));
            assert!(star.radius > 0.0);
            assert!(star.alpha > 0.0 && star.alpha <= 1.0);
        }
    }

    #[test]
    fn test_star_count_is_bounded() {
        assert_eq!(star_count(0.0, 0.0), MIN_STARS);
        assert_eq!(star_count(1280.0, 720.0), 153);
        assert_eq!(star_count(7680.0, 4320.0), MAX_STARS);
    }

    #[test]
    fn test_edges_respect_distance() {
        let stars = [star(0.0, 0.0), star(10.0, 0.0), star(500.0, 500.0)];
        assert_eq!(constellation_edges(&stars, 50.0), vec![(0, 1)]);
        assert!(constellation_edges(&stars, 5.0).is_empty());
    }

    #[test]
    fn test_edges_limited_per_star() {
        let stars = [
            star(0.0, 0.0),
            star(1.0, 0.0),
            star(2.0, 0.0),
            star(3.0, 0.0),
            star(4.0, 0.0),
        ];
        let edges = constellation_edges(&stars, 100.0);
        for (a, b) in &edges {
            assert!(a < b);
        }
        // the middle star picks its two closest neighbours only
        let from_middle = [(1, 2), (2, 3)];
        assert!(from_middle.iter().all(|e| edges.contains(e)));
        assert!(!edges.contains(&(0, 4)));
    }
}

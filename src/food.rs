use std::collections::HashSet;

use rand::Rng;
use rand::seq::IteratorRandom;

use crate::{GameConfig, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub pos: Point,
}

impl Food {
    pub fn new(pos: Point) -> Self {
        Self { pos }
    }

    /// Move the food to a free interior cell. Returns false, leaving the
    /// food where it was, if the interior is completely occupied.
    pub fn relocate<R: Rng>(
        &mut self,
        cfg: &GameConfig,
        occupied: impl IntoIterator<Item = Point>,
        rng: &mut R,
    ) -> bool {
        match free_spot(cfg, occupied, rng) {
            Some(pos) => {
                self.pos = pos;
                true
            }
            None => false,
        }
    }
}

/// Picks a uniformly random interior cell (never on the border ring) that is
/// not in `occupied`. Returns `None` when no such cell exists.
pub fn free_spot<R: Rng>(
    cfg: &GameConfig,
    occupied: impl IntoIterator<Item = Point>,
    rng: &mut R,
) -> Option<Point> {
    let taken: HashSet<Point> = occupied.into_iter().collect();
    (1..cfg.height - 1)
        .flat_map(|y| (1..cfg.width - 1).map(move |x| Point::new(x, y)))
        .filter(|p| !taken.contains(p))
        .choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn never_on_border_nor_occupied() {
        let cfg = GameConfig { width: 6, height: 5 };
        let occupied = vec![Point::new(1, 1), Point::new(2, 1), Point::new(3, 2)];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let p = free_spot(&cfg, occupied.iter().copied(), &mut rng).unwrap();
            assert!(!cfg.on_border(p), "{p:?} is on the border");
            assert!(!occupied.contains(&p), "{p:?} is occupied");
        }
    }

    #[test]
    fn finds_the_last_free_cell() {
        // 3x3 interior on a 5x5 board, all but (3,3) taken.
        let cfg = GameConfig { width: 5, height: 5 };
        let occupied: Vec<Point> = (1..4)
            .flat_map(|y| (1..4).map(move |x| Point::new(x, y)))
            .filter(|&p| p != Point::new(3, 3))
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(free_spot(&cfg, occupied, &mut rng), Some(Point::new(3, 3)));
    }

    #[test]
    fn full_interior_yields_nothing() {
        let cfg = GameConfig { width: 3, height: 3 };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(free_spot(&cfg, [Point::new(1, 1)], &mut rng), None);

        let mut food = Food::new(Point::new(1, 1));
        assert!(!food.relocate(&cfg, [Point::new(1, 1)], &mut rng));
        assert_eq!(food.pos, Point::new(1, 1));
    }

    #[test]
    fn covers_the_whole_interior() {
        let cfg = GameConfig { width: 4, height: 4 };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let seen: HashSet<Point> = (0..200)
            .filter_map(|_| free_spot(&cfg, std::iter::empty(), &mut rng))
            .collect();
        assert_eq!(seen.len(), 4);
    }
}

use std::collections::VecDeque;

use crate::{Direction, Point};

/// One body cell and the direction it was travelling when last advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub pos: Point,
    pub dir: Direction,
}

/// Body is stored tail (front) to head (back) and is never empty.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Segment>,
    dir: Direction,
    /// Number of upcoming moves that append a segment instead of shifting.
    growth: u32,
}

impl Snake {
    /// A one-segment snake at `pos` heading `dir`.
    pub fn new(pos: Point, dir: Direction) -> Self {
        Self {
            body: VecDeque::from([Segment { pos, dir }]),
            dir,
            growth: 0,
        }
    }

    pub fn head(&self) -> &Segment {
        self.body.back().expect("snake is non-empty")
    }

    /// Every segment except the head, tail first.
    pub fn tail(&self) -> impl Iterator<Item = &Segment> {
        self.body.iter().take(self.body.len() - 1)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Direction the next move will take.
    pub fn direction(&self) -> Direction {
        self.dir
    }

    pub fn pending_growth(&self) -> u32 {
        self.growth
    }

    pub fn set_pending_growth(&mut self, moves: u32) {
        self.growth = moves;
    }

    /// Advance one cell. No bounds checking happens here.
    pub fn move_step(&mut self) {
        let dir = self.dir;
        let head = self.body.back_mut().expect("snake is non-empty");
        head.dir = dir;
        let next = Segment {
            pos: head.pos.step(dir),
            dir,
        };

        if self.growth > 0 {
            self.growth -= 1;
        } else {
            self.body.pop_front();
        }
        self.body.push_back(next);
    }

    /// Change course unless `dir` would reverse the head onto the neck.
    /// Returns whether the change was accepted.
    pub fn redirect(&mut self, dir: Direction) -> bool {
        if dir.is_opposite(self.head().dir) {
            return false;
        }
        self.dir = dir;
        true
    }
}

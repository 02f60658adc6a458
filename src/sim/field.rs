//! Static blocks and the swept collision query against them

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::segments_intersect;
use crate::consts::MIN_SWEEP_SPEED;

/// Fill colors a generated block can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockColor {
    Red,
    Green,
    Blue,
    Orange,
    Black,
}

/// Palette the layout generator draws from, uniformly at random
pub const PALETTE: [BlockColor; 5] = [
    BlockColor::Red,
    BlockColor::Green,
    BlockColor::Blue,
    BlockColor::Orange,
    BlockColor::Black,
];

/// Which edge of a block a swept path crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

/// A static destructible block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub color: BlockColor,
}

impl Block {
    pub fn new(id: u32, pos: Vec2, size: Vec2, color: BlockColor) -> Self {
        assert!(
            size.x > 0.0 && size.y > 0.0,
            "block must have positive dimensions, got {size}"
        );
        Self { id, pos, size, color }
    }

    /// Corners in clockwise order from top-left
    fn corners(&self) -> [Vec2; 4] {
        [
            self.pos,
            self.pos + Vec2::new(self.size.x, 0.0),
            self.pos + self.size,
            self.pos + Vec2::new(0.0, self.size.y),
        ]
    }
}

/// One edge crossing found by a swept query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweptHit {
    pub block: u32,
    pub side: Side,
}

/// Owns the live block set and answers swept collision queries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockField {
    blocks: Vec<Block>,
}

impl BlockField {
    /// Install a freshly generated block set, replacing any prior one
    pub fn replace(&mut self, blocks: Vec<Block>) {
        debug_assert!(
            {
                let mut ids: Vec<u32> = blocks.iter().map(|b| b.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "duplicate block ids in generated layout"
        );
        self.blocks = blocks;
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Remove a block from the live set and return it.
    ///
    /// Destroying a block that is not present is a broken invariant
    /// (double-destroy) and panics.
    pub fn take(&mut self, id: u32) -> Block {
        let idx = self
            .blocks
            .iter()
            .position(|b| b.id == id)
            .unwrap_or_else(|| panic!("destroying block {id} not in live set"));
        self.blocks.remove(idx)
    }

    /// Find every block edge the ball's travel segment for this tick
    /// crosses.
    ///
    /// The segment runs from `pos` to `pos + vel*dt` plus one radius of
    /// padding in the direction of travel, so the circle's leading edge
    /// is accounted for. Edges are tested in TOP/RIGHT/BOTTOM/LEFT order
    /// per block, blocks in layout order, which makes the result order
    /// deterministic. Callers act on the first hit only.
    ///
    /// A near-zero velocity has no usable travel direction; the query
    /// returns no hits rather than guessing an offset.
    pub fn query_swept(&self, pos: Vec2, vel: Vec2, radius: f32, dt: f32) -> Vec<SweptHit> {
        let speed = vel.length();
        if speed < MIN_SWEEP_SPEED {
            return Vec::new();
        }

        let target = pos + vel * dt + vel / speed * radius;
        let mut hits = Vec::new();

        for block in &self.blocks {
            let [tl, tr, br, bl] = block.corners();
            let edges = [
                (tl, tr, Side::Top),
                (tr, br, Side::Right),
                (br, bl, Side::Bottom),
                (tl, bl, Side::Left),
            ];

            for (a, b, side) in edges {
                if segments_intersect(a, b, pos, target) {
                    hits.push(SweptHit { block: block.id, side });
                }
            }
        }

        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_block_field() -> BlockField {
        let mut field = BlockField::default();
        field.replace(vec![Block::new(
            1,
            Vec2::new(100.0, 100.0),
            Vec2::new(50.0, 25.0),
            BlockColor::Red,
        )]);
        field
    }

    #[test]
    #[should_panic(expected = "positive dimensions")]
    fn test_degenerate_block_rejected() {
        let _ = Block::new(0, Vec2::ZERO, Vec2::new(10.0, 0.0), BlockColor::Red);
    }

    #[test]
    fn test_swept_single_top_hit() {
        let field = single_block_field();

        // Ball above the block moving straight down; padded segment ends
        // inside the block, crossing only its top edge
        let hits = field.query_swept(Vec2::new(120.0, 80.0), Vec2::new(0.0, 200.0), 5.0, 0.1);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0], SweptHit { block: 1, side: Side::Top });
    }

    #[test]
    fn test_swept_pass_through_reports_both_edges() {
        let field = single_block_field();

        // Fast enough to cross the whole block: top edge first, then bottom
        let hits = field.query_swept(Vec2::new(120.0, 80.0), Vec2::new(0.0, 800.0), 5.0, 0.1);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].side, Side::Top);
        assert_eq!(hits[1].side, Side::Bottom);
    }

    #[test]
    fn test_swept_near_zero_velocity_is_empty() {
        let field = single_block_field();
        let hits = field.query_swept(Vec2::new(120.0, 80.0), Vec2::new(0.0, 1e-5), 5.0, 0.1);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_swept_miss() {
        let field = single_block_field();
        // Travels down well left of the block
        let hits = field.query_swept(Vec2::new(20.0, 80.0), Vec2::new(0.0, 200.0), 5.0, 0.1);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_take_removes_block() {
        let mut field = single_block_field();
        let block = field.take(1);
        assert_eq!(block.id, 1);
        assert!(field.is_empty());
    }

    #[test]
    #[should_panic(expected = "not in live set")]
    fn test_double_destroy_panics() {
        let mut field = single_block_field();
        field.take(1);
        field.take(1);
    }
}

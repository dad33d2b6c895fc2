//! Shapes module - polyomino definitions and the offered-shape inventory
//!
//! A [`Shape`] is a binary matrix of at most 4x4 cells packed into a `u16`
//! bitmask (bit `row * 4 + col`). Shapes have no position of their own; they
//! are always evaluated against an anchor on the board.
//!
//! [`ShapeCatalog`] draws [`OfferedShape`]s at random and hands each one a
//! fresh [`ShapeId`], so two offers with identical shape and colour remain
//! distinguishable.

use std::fmt;

use arrayvec::ArrayVec;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{EngineError, Result};
use crate::types::{ColorTag, ShapeKind, MAX_OFFERED_SHAPES, MAX_SHAPE_SIDE};

/// The offered inventory. Fixed capacity, so refills never allocate.
pub type OfferedSet = ArrayVec<OfferedShape, MAX_OFFERED_SHAPES>;

/// Immutable binary matrix, top-left cell is the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    bits: u16,
    height: u8,
    width: u8,
}

impl Shape {
    /// Canonical shape for a catalog entry
    pub fn from_kind(kind: ShapeKind) -> Self {
        Self::pack(kind.rows())
    }

    /// Build a shape from rows of 0/1 values. Rows may differ in length; missing
    /// trailing cells count as 0.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self> {
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        if rows.len() > MAX_SHAPE_SIDE || width > MAX_SHAPE_SIDE {
            return Err(EngineError::ShapeTooLarge {
                rows: rows.len(),
                cols: width,
            });
        }
        Ok(Self::pack(rows))
    }

    fn pack(rows: &[&[u8]]) -> Self {
        let mut bits = 0u16;
        let mut width = 0usize;
        for (r, row) in rows.iter().take(MAX_SHAPE_SIDE).enumerate() {
            width = width.max(row.len().min(MAX_SHAPE_SIDE));
            for (c, &value) in row.iter().take(MAX_SHAPE_SIDE).enumerate() {
                if value != 0 {
                    bits |= 1 << (r * MAX_SHAPE_SIDE + c);
                }
            }
        }
        Self {
            bits,
            height: rows.len().min(MAX_SHAPE_SIDE) as u8,
            width: width as u8,
        }
    }

    /// Matrix rows
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Matrix columns
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Whether matrix cell (row, col) is a 1
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < MAX_SHAPE_SIDE
            && col < MAX_SHAPE_SIDE
            && self.bits & (1 << (row * MAX_SHAPE_SIDE + col)) != 0
    }

    /// Offsets of the 1-cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height())
            .flat_map(move |r| (0..self.width()).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.contains(r, c))
    }

    /// Number of 1-cells; also the score for removing this shape
    pub fn cell_count(&self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// The catalog entry with this exact matrix, if any
    pub fn kind(&self) -> Option<ShapeKind> {
        ShapeKind::ALL
            .into_iter()
            .find(|&kind| Shape::from_kind(kind) == *self)
    }
}

impl From<ShapeKind> for Shape {
    fn from(kind: ShapeKind) -> Self {
        Shape::from_kind(kind)
    }
}

/// All eight catalog shapes, in catalog order
pub fn standard_catalog() -> Vec<Shape> {
    ShapeKind::ALL.into_iter().map(Shape::from_kind).collect()
}

/// Identity of one offer, independent of its shape and colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u32);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferedShape {
    pub id: ShapeId,
    pub shape: Shape,
    pub color: ColorTag,
}

/// Draws offers from a fixed set of shapes and palette.
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
    palette: Vec<ColorTag>,
    /// Next id to hand out; monotonic for the catalog's lifetime
    next_id: u32,
}

impl ShapeCatalog {
    pub fn new(shapes: Vec<Shape>, palette: Vec<ColorTag>) -> Self {
        Self {
            shapes,
            palette,
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Wrap an explicit shape/colour as a new offer with a fresh id.
    pub fn offer(&mut self, shape: Shape, color: ColorTag) -> OfferedShape {
        OfferedShape {
            id: self.allocate_id(),
            shape,
            color,
        }
    }

    /// Independently draw `count` offers (capped at the inventory capacity):
    /// shape uniform over the catalog, colour uniform over the palette.
    pub fn draw_shapes<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> OfferedSet {
        let mut drawn = OfferedSet::new();
        for _ in 0..count.min(MAX_OFFERED_SHAPES) {
            let Some(&shape) = self.shapes.choose(rng) else {
                break;
            };
            let color = self
                .palette
                .choose(rng)
                .copied()
                .unwrap_or(ColorTag::Yellow);
            let offer = self.offer(shape, color);
            drawn.push(offer);
        }
        drawn
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::new(standard_catalog(), ColorTag::PALETTE.to_vec())
    }
}

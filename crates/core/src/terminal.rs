//! Terminal-state detection.
//!
//! The game is over when no offered shape has a legal anchor anywhere on the
//! board. The scan is exhaustive (offers x rows x cols x shape cells) and stops
//! at the first legal placement it finds.

use crate::grid::Grid;
use crate::placement::legal_anchors;
use crate::shapes::{OfferedShape, ShapeId};

/// A legal (offer, anchor) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub id: ShapeId,
    pub row: usize,
    pub col: usize,
}

/// First legal placement in offer order, then row-major anchor order.
pub fn first_legal_placement(offered: &[OfferedShape], grid: &Grid) -> Option<Placement> {
    offered.iter().find_map(|offer| {
        legal_anchors(&offer.shape, grid)
            .next()
            .map(|(row, col)| Placement {
                id: offer.id,
                row,
                col,
            })
    })
}

/// True iff no offered shape can be removed anywhere. An empty offer list is
/// terminal.
pub fn is_terminal(offered: &[OfferedShape], grid: &Grid) -> bool {
    first_legal_placement(offered, grid).is_none()
}

/// Every legal placement across all offers. Used by autoplay to rank moves.
pub fn all_legal_placements<'a>(
    offered: &'a [OfferedShape],
    grid: &'a Grid,
) -> impl Iterator<Item = Placement> + 'a {
    offered.iter().flat_map(move |offer| {
        legal_anchors(&offer.shape, grid).map(move |(row, col)| Placement {
            id: offer.id,
            row,
            col,
        })
    })
}

/// Whether a specific offer has any legal anchor.
pub fn has_legal_anchor(offer: &OfferedShape, grid: &Grid) -> bool {
    legal_anchors(&offer.shape, grid).next().is_some()
}

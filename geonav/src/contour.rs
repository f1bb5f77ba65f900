//! Contour is a sequence of positions: a line or a polygon ring.
//!
//! A ring is considered closed when its first and last positions are exactly the same. Algorithms that need a closed
//! ring (point-in-ring tests, distance to polygon edges) do not copy or modify the input: they iterate with
//! [`Contour::iter_points_closing`] or [`Contour::iter_segments_closing`], which yield the first position once more
//! at the end of an unclosed ring.

use crate::position::Position;
use crate::segment::Segment;

/// Sequence of positions. See module level documentation for details.
pub trait Contour {
    /// Positions of the contour.
    fn points(&self) -> &[Position];

    /// Whether the first and the last positions are the same. Empty contours are treated as closed.
    fn is_closed(&self) -> bool {
        let points = self.points();
        points.first() == points.last()
    }

    /// Iterates over positions of the contour, repeating the first one at the end if the contour is not closed.
    fn iter_points_closing(&self) -> ContourPointsIterator<'_> {
        ContourPointsIterator::new(self.points(), !self.is_closed())
    }

    /// Iterates over segments between consecutive positions.
    fn iter_segments(&self) -> ContourSegmentIterator<'_> {
        ContourSegmentIterator::new(ContourPointsIterator::new(self.points(), false))
    }

    /// Same as [`Contour::iter_segments`] but adds the segment from the last position back to the first one if the
    /// contour is not closed.
    fn iter_segments_closing(&self) -> ContourSegmentIterator<'_> {
        ContourSegmentIterator::new(self.iter_points_closing())
    }
}

impl Contour for [Position] {
    fn points(&self) -> &[Position] {
        self
    }
}

impl Contour for Vec<Position> {
    fn points(&self) -> &[Position] {
        self
    }
}

/// Iterator of contour positions.
#[derive(Debug, Clone)]
pub struct ContourPointsIterator<'a> {
    points_iter: std::slice::Iter<'a, Position>,
    closing_point: Option<&'a Position>,
}

impl<'a> ContourPointsIterator<'a> {
    fn new(points: &'a [Position], add_closing: bool) -> Self {
        Self {
            points_iter: points.iter(),
            closing_point: if add_closing { points.first() } else { None },
        }
    }
}

impl<'a> Iterator for ContourPointsIterator<'a> {
    type Item = &'a Position;

    fn next(&mut self) -> Option<Self::Item> {
        self.points_iter.next().or_else(|| self.closing_point.take())
    }
}

/// Iterator of contour segments.
#[derive(Debug, Clone)]
pub struct ContourSegmentIterator<'a> {
    points_iter: ContourPointsIterator<'a>,
    prev_point: Option<&'a Position>,
}

impl<'a> ContourSegmentIterator<'a> {
    fn new(points_iter: ContourPointsIterator<'a>) -> Self {
        Self {
            points_iter,
            prev_point: None,
        }
    }
}

impl<'a> Iterator for ContourSegmentIterator<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let next_point = self.points_iter.next()?;
        let prev_point = self.prev_point.replace(next_point);

        match prev_point {
            Some(prev) => Some(Segment(prev, next_point)),
            None => self.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_ring() -> Vec<Position> {
        vec![
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
            Position::new(1.0, 1.0),
        ]
    }

    #[test]
    fn iter_points_closing() {
        let ring = open_ring();
        assert!(!ring.is_closed());
        assert_eq!(ring.iter_points_closing().count(), 4);
        assert_eq!(
            ring.iter_points_closing().last(),
            Some(&Position::new(0.0, 0.0))
        );
        assert_eq!(ring.len(), 3);

        let mut closed = open_ring();
        closed.push(Position::new(0.0, 0.0));
        assert!(closed.is_closed());
        assert_eq!(closed.iter_points_closing().count(), 4);

        let empty: Vec<Position> = vec![];
        assert_eq!(empty.iter_points_closing().count(), 0);
    }

    #[test]
    fn iter_segments() {
        let single = vec![Position::new(0.0, 0.0)];
        assert_eq!(single.iter_segments().count(), 0);

        let ring = open_ring();
        assert_eq!(ring.iter_segments().count(), 2);
        assert_eq!(ring.iter_segments_closing().count(), 3);
        assert_eq!(
            ring.iter_segments_closing().last(),
            Some(Segment(&Position::new(1.0, 1.0), &Position::new(0.0, 0.0)))
        );
    }
}

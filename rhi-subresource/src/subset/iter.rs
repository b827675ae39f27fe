use super::{view::ViewSubresourceSubset, SubresourceSubset};
use crate::calc_subresource;
use std::{iter::FusedIterator, ops::Range};

/// Iterates over the contiguous ranges of linear subresource indices of a
/// [`ViewSubresourceSubset`].
///
/// One range is returned for each (array slice, plane) pair of the subset, covering the mip
/// levels of the subset at that array slice and plane. Array slices vary fastest, then planes.
///
/// ```
/// # use rhi_subresource::{view::ResourceShape, SubresourceSubset, ViewSubresourceSubset};
/// let shape = ResourceShape::new(3, 2, 2);
/// let subset = ViewSubresourceSubset::from_parts(SubresourceSubset::new(1, 3, 0, 2, 0, 2), shape);
///
/// for range in &subset {
///     for subresource in range {
///         // Transition `subresource`.
///     }
/// }
///
/// assert_eq!(subset.iter().collect::<Vec<_>>(), [1..3, 4..6, 7..9, 10..12]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubresourceRangeIterator {
    begin_mip: u32,
    mip_count: u32,
    begin_array: u32,
    array_count: u32,
    begin_plane: u32,
    mip_levels: u32,
    array_slices: u32,

    // Pair positions `front..back`, counting array slices within planes.
    front: u32,
    back: u32,
}

impl SubresourceRangeIterator {
    pub(crate) fn new(subset: &SubresourceSubset, mip_levels: u8, array_slices: u16) -> Self {
        let array_count = u32::from(subset.end_array - subset.begin_array);
        let plane_count = u32::from(subset.end_plane - subset.begin_plane);
        let back = if subset.is_empty() {
            0
        } else {
            array_count * plane_count
        };

        SubresourceRangeIterator {
            begin_mip: subset.begin_mip.into(),
            mip_count: u32::from(subset.end_mip - subset.begin_mip),
            begin_array: subset.begin_array.into(),
            array_count,
            begin_plane: subset.begin_plane.into(),
            mip_levels: mip_levels.into(),
            array_slices: array_slices.into(),
            front: 0,
            back,
        }
    }

    fn range_at(&self, position: u32) -> Range<u32> {
        let array_slice = self.begin_array + position % self.array_count;
        let plane_slice = self.begin_plane + position / self.array_count;
        let start = calc_subresource(
            self.begin_mip,
            array_slice,
            plane_slice,
            self.mip_levels,
            self.array_slices,
        );

        start..start + self.mip_count
    }
}

impl Iterator for SubresourceRangeIterator {
    type Item = Range<u32>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let range = self.range_at(self.front);
            self.front += 1;
            Some(range)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.back - self.front) as usize;
        (len, Some(len))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let remaining = self.back - self.front;
        self.front += u32::try_from(n).map_or(remaining, |n| n.min(remaining));
        self.next()
    }
}

impl DoubleEndedIterator for SubresourceRangeIterator {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.range_at(self.back))
        } else {
            None
        }
    }
}

impl ExactSizeIterator for SubresourceRangeIterator {}

impl FusedIterator for SubresourceRangeIterator {}

impl IntoIterator for &ViewSubresourceSubset {
    type Item = Range<u32>;
    type IntoIter = SubresourceRangeIterator;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

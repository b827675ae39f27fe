//! The subresources covered by a view, as three half-open index ranges.

use crate::{
    format::{plane_slice_from_view_format, Format},
    view::{
        DepthStencilViewDesc, DepthStencilViewDimension, DsvPlaneFlags, RenderTargetViewDesc,
        RenderTargetViewDimension, ShaderResourceViewDesc, ShaderResourceViewDimension,
        UnorderedAccessViewDesc, UnorderedAccessViewDimension, CUBE_FACES,
    },
};
use std::ops::Range;

pub mod iter;
pub mod view;

/// A set of subresources of an image resource: a range of mip levels, a range of array slices
/// and a range of planes.
///
/// Every range is half-open and `begin <= end` always holds. A subset where any range is empty
/// covers no subresources.
///
/// For 3D views built from a descriptor, the array range holds depth (W) slices rather than array
/// slices; [`ViewSubresourceSubset`] collapses it, since a 3D resource has a single array slice.
///
/// [`ViewSubresourceSubset`]: crate::ViewSubresourceSubset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubresourceSubset {
    pub(crate) begin_mip: u8,
    pub(crate) end_mip: u8,
    pub(crate) begin_array: u16,
    pub(crate) end_array: u16,
    pub(crate) begin_plane: u8,
    pub(crate) end_plane: u8,
}

impl Default for SubresourceSubset {
    /// Returns the subset of a single subresource, mip 0 of array slice 0 of plane 0.
    #[inline]
    fn default() -> Self {
        Self {
            begin_mip: 0,
            end_mip: 1,
            begin_array: 0,
            end_array: 1,
            begin_plane: 0,
            end_plane: 1,
        }
    }
}

impl SubresourceSubset {
    /// Returns a subset from its raw bounds.
    ///
    /// # Panics
    ///
    /// - Panics if any `begin_*` is greater than the matching `end_*`.
    #[inline]
    pub const fn new(
        begin_mip: u8,
        end_mip: u8,
        begin_array: u16,
        end_array: u16,
        begin_plane: u8,
        end_plane: u8,
    ) -> Self {
        assert!(begin_mip <= end_mip);
        assert!(begin_array <= end_array);
        assert!(begin_plane <= end_plane);

        Self {
            begin_mip,
            end_mip,
            begin_array,
            end_array,
            begin_plane,
            end_plane,
        }
    }

    /// Returns the subset that covers nothing, with every bound set to zero.
    #[inline]
    pub const fn empty() -> Self {
        Self::new(0, 0, 0, 0, 0, 0)
    }

    /// Returns the subset covered by a buffer view. Buffers have a single subresource.
    #[inline]
    pub const fn buffer() -> Self {
        Self::new(0, 1, 0, 1, 0, 1)
    }

    /// Returns the subset covered by a shader-resource view on a resource of `resource_format`.
    ///
    /// For the dimensions without an explicit plane slice, the plane is selected by the view
    /// format. A mip level count of [`ALL_MIPS`] extends the mip range as far as it can go.
    ///
    /// [`ALL_MIPS`]: crate::view::ALL_MIPS
    pub fn from_srv(desc: &ShaderResourceViewDesc, resource_format: Format) -> Self {
        let view_plane =
            || single_plane(plane_slice_from_view_format(resource_format, desc.format).into());
        let mut subset = Self::default();

        match desc.dimension {
            ShaderResourceViewDimension::Buffer => (),
            ShaderResourceViewDimension::Texture1D {
                most_detailed_mip,
                mip_levels,
            } => {
                subset.set_mips(mip_range(most_detailed_mip, mip_levels));
                subset.set_planes(view_plane());
            }
            ShaderResourceViewDimension::Texture1DArray {
                most_detailed_mip,
                mip_levels,
                first_array_slice,
                array_size,
            } => {
                subset.set_mips(mip_range(most_detailed_mip, mip_levels));
                subset.set_arrays(array_range(first_array_slice, array_size));
                subset.set_planes(view_plane());
            }
            ShaderResourceViewDimension::Texture2D {
                most_detailed_mip,
                mip_levels,
                plane_slice,
            } => {
                subset.set_mips(mip_range(most_detailed_mip, mip_levels));
                subset.set_planes(single_plane(plane_slice));
            }
            ShaderResourceViewDimension::Texture2DArray {
                most_detailed_mip,
                mip_levels,
                first_array_slice,
                array_size,
                plane_slice,
            } => {
                subset.set_mips(mip_range(most_detailed_mip, mip_levels));
                subset.set_arrays(array_range(first_array_slice, array_size));
                subset.set_planes(single_plane(plane_slice));
            }
            ShaderResourceViewDimension::Texture2DMS => {
                subset.set_planes(view_plane());
            }
            ShaderResourceViewDimension::Texture2DMSArray {
                first_array_slice,
                array_size,
            } => {
                subset.set_arrays(array_range(first_array_slice, array_size));
                subset.set_planes(view_plane());
            }
            ShaderResourceViewDimension::Texture3D {
                most_detailed_mip,
                mip_levels,
            } => {
                // Every depth slice.
                subset.set_mips(mip_range(most_detailed_mip, mip_levels));
                subset.set_arrays(0..u16::MAX);
            }
            ShaderResourceViewDimension::TextureCube {
                most_detailed_mip,
                mip_levels,
            } => {
                subset.set_mips(mip_range(most_detailed_mip, mip_levels));
                subset.set_arrays(array_range(0, CUBE_FACES));
                subset.set_planes(view_plane());
            }
            ShaderResourceViewDimension::TextureCubeArray {
                most_detailed_mip,
                mip_levels,
                first_2d_array_face,
                num_cubes,
            } => {
                subset.set_mips(mip_range(most_detailed_mip, mip_levels));
                subset.set_arrays(array_range(
                    first_2d_array_face,
                    num_cubes.saturating_mul(CUBE_FACES),
                ));
                subset.set_planes(view_plane());
            }
        }

        subset
    }

    /// Returns the subset covered by an unordered-access view.
    pub fn from_uav(desc: &UnorderedAccessViewDesc) -> Self {
        let mut subset = Self::default();

        match desc.dimension {
            UnorderedAccessViewDimension::Buffer => (),
            UnorderedAccessViewDimension::Texture1D { mip_slice } => {
                subset.set_mips(single_mip(mip_slice));
            }
            UnorderedAccessViewDimension::Texture1DArray {
                mip_slice,
                first_array_slice,
                array_size,
            } => {
                subset.set_mips(single_mip(mip_slice));
                subset.set_arrays(array_range(first_array_slice, array_size));
            }
            UnorderedAccessViewDimension::Texture2D {
                mip_slice,
                plane_slice,
            } => {
                subset.set_mips(single_mip(mip_slice));
                subset.set_planes(single_plane(plane_slice));
            }
            UnorderedAccessViewDimension::Texture2DArray {
                mip_slice,
                first_array_slice,
                array_size,
                plane_slice,
            } => {
                subset.set_mips(single_mip(mip_slice));
                subset.set_arrays(array_range(first_array_slice, array_size));
                subset.set_planes(single_plane(plane_slice));
            }
            UnorderedAccessViewDimension::Texture3D {
                mip_slice,
                first_w_slice,
                w_size,
            } => {
                subset.set_mips(single_mip(mip_slice));
                subset.set_arrays(array_range(first_w_slice, w_size));
            }
        }

        subset
    }

    /// Returns the subset covered by a render-target view.
    pub fn from_rtv(desc: &RenderTargetViewDesc) -> Self {
        let mut subset = Self::default();

        match desc.dimension {
            RenderTargetViewDimension::Buffer | RenderTargetViewDimension::Texture2DMS => (),
            RenderTargetViewDimension::Texture1D { mip_slice } => {
                subset.set_mips(single_mip(mip_slice));
            }
            RenderTargetViewDimension::Texture1DArray {
                mip_slice,
                first_array_slice,
                array_size,
            } => {
                subset.set_mips(single_mip(mip_slice));
                subset.set_arrays(array_range(first_array_slice, array_size));
            }
            RenderTargetViewDimension::Texture2D {
                mip_slice,
                plane_slice,
            } => {
                subset.set_mips(single_mip(mip_slice));
                subset.set_planes(single_plane(plane_slice));
            }
            RenderTargetViewDimension::Texture2DArray {
                mip_slice,
                first_array_slice,
                array_size,
                plane_slice,
            } => {
                subset.set_mips(single_mip(mip_slice));
                subset.set_arrays(array_range(first_array_slice, array_size));
                subset.set_planes(single_plane(plane_slice));
            }
            RenderTargetViewDimension::Texture2DMSArray {
                first_array_slice,
                array_size,
            } => {
                subset.set_arrays(array_range(first_array_slice, array_size));
            }
            RenderTargetViewDimension::Texture3D {
                mip_slice,
                first_w_slice,
                w_size,
            } => {
                subset.set_mips(single_mip(mip_slice));
                subset.set_arrays(array_range(first_w_slice, w_size));
            }
        }

        subset
    }

    /// Returns the subset covered by a depth-stencil view on a resource of `resource_format`.
    ///
    /// The view covers every plane of the resource, unless the resource has two planes and
    /// `planes` selects only one of them.
    pub fn from_dsv(
        desc: &DepthStencilViewDesc,
        resource_format: Format,
        planes: DsvPlaneFlags,
    ) -> Self {
        let mut subset = Self::default();
        subset.set_planes(0..resource_format.plane_count());

        match desc.dimension {
            DepthStencilViewDimension::Texture2DMS => (),
            DepthStencilViewDimension::Texture1D { mip_slice }
            | DepthStencilViewDimension::Texture2D { mip_slice } => {
                subset.set_mips(single_mip(mip_slice));
            }
            DepthStencilViewDimension::Texture1DArray {
                mip_slice,
                first_array_slice,
                array_size,
            }
            | DepthStencilViewDimension::Texture2DArray {
                mip_slice,
                first_array_slice,
                array_size,
            } => {
                subset.set_mips(single_mip(mip_slice));
                subset.set_arrays(array_range(first_array_slice, array_size));
            }
            DepthStencilViewDimension::Texture2DMSArray {
                first_array_slice,
                array_size,
            } => {
                subset.set_arrays(array_range(first_array_slice, array_size));
            }
        }

        if subset.end_plane == 2 && !planes.contains(DsvPlaneFlags::DEPTH_AND_STENCIL) {
            if planes.intersects(DsvPlaneFlags::DEPTH) {
                subset.set_planes(0..1);
            } else if planes.intersects(DsvPlaneFlags::STENCIL) {
                subset.set_planes(1..2);
            }
        }

        subset
    }

    /// Returns the range of mip levels.
    #[inline]
    pub fn mip_range(&self) -> Range<u8> {
        self.begin_mip..self.end_mip
    }

    /// Returns the range of array slices.
    #[inline]
    pub fn array_range(&self) -> Range<u16> {
        self.begin_array..self.end_array
    }

    /// Returns the range of planes.
    #[inline]
    pub fn plane_range(&self) -> Range<u8> {
        self.begin_plane..self.end_plane
    }

    /// Returns whether the subset covers no subresources.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin_mip == self.end_mip
            || self.begin_array == self.end_array
            || self.begin_plane == self.end_plane
    }

    /// Returns whether `self` and `other` are guaranteed to have no subresource in common.
    ///
    /// This is the case when they are disjoint along at least one of the three axes.
    #[inline]
    pub fn does_not_overlap(&self, other: &Self) -> bool {
        self.end_array <= other.begin_array
            || other.end_array <= self.begin_array
            || self.end_mip <= other.begin_mip
            || other.end_mip <= self.begin_mip
            || self.end_plane <= other.begin_plane
            || other.end_plane <= self.begin_plane
    }

    fn set_mips(&mut self, mips: Range<u8>) {
        self.begin_mip = mips.start;
        self.end_mip = mips.end;
    }

    fn set_arrays(&mut self, arrays: Range<u16>) {
        self.begin_array = arrays.start;
        self.end_array = arrays.end;
    }

    fn set_planes(&mut self, planes: Range<u8>) {
        self.begin_plane = planes.start;
        self.end_plane = planes.end;
    }
}

/// Returns whether `a` and `b` are guaranteed to have no subresource in common.
///
/// See [`SubresourceSubset::does_not_overlap`].
#[inline]
pub fn does_not_overlap(a: &SubresourceSubset, b: &SubresourceSubset) -> bool {
    a.does_not_overlap(b)
}

// Descriptor fields are 32-bit, subset bounds are not. Out-of-range values saturate so that a
// bogus descriptor still yields `begin <= end`.

fn mip_range(most_detailed_mip: u32, mip_levels: u32) -> Range<u8> {
    let begin = most_detailed_mip.min(u8::MAX.into());
    let end = begin.saturating_add(mip_levels).min(u8::MAX.into());

    begin as u8..end as u8
}

fn single_mip(mip_slice: u32) -> Range<u8> {
    let begin = mip_slice.min(u32::from(u8::MAX) - 1) as u8;

    begin..begin + 1
}

fn array_range(first_array_slice: u32, array_size: u32) -> Range<u16> {
    let begin = first_array_slice.min(u16::MAX.into());
    let end = begin.saturating_add(array_size).min(u16::MAX.into());

    begin as u16..end as u16
}

fn single_plane(plane_slice: u32) -> Range<u8> {
    let begin = plane_slice.min(u32::from(u8::MAX) - 1) as u8;

    begin..begin + 1
}

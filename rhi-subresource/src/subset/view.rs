use super::{iter::SubresourceRangeIterator, SubresourceSubset};
use crate::{
    calc_subresource,
    format::Format,
    view::{
        raw::{
            RawDepthStencilViewDesc, RawRenderTargetViewDesc, RawShaderResourceViewDesc,
            RawUnorderedAccessViewDesc, RawViewDescError,
        },
        DepthStencilViewDesc, DsvPlaneFlags, RenderTargetViewDesc, RenderTargetViewDimension,
        ResourceShape, ShaderResourceViewDesc, ShaderResourceViewDimension,
        UnorderedAccessViewDesc, UnorderedAccessViewDimension, ViewDesc, ALL_MIPS,
    },
    ALL_SUBRESOURCES,
};
use smallvec::SmallVec;
use std::ops::Range;

/// The subresources covered by a view, together with the shape of the resource it is created
/// on.
///
/// The descriptor constructors *reduce* the subset: when a view covers every subresource of its
/// resource, the three ranges are replaced by a single mip range `0..subresource_count` over
/// array slice 0 and plane 0. Both forms describe the same subresources, but comparing two reduced
/// subsets is cheaper, and the reduced form iterates as a single range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewSubresourceSubset {
    subset: SubresourceSubset,
    mip_levels: u8,
    array_slices: u16,
    plane_count: u8,
    most_detailed_mip: u8,
    view_array_size: u16,
}

impl ViewSubresourceSubset {
    /// Returns a `ViewSubresourceSubset` from a subset and the shape of its resource, as is.
    ///
    /// Unlike the descriptor constructors, this does not reduce the subset; call
    /// [`reduce`](Self::reduce) for that.
    #[inline]
    pub fn from_parts(subset: SubresourceSubset, shape: ResourceShape) -> Self {
        ViewSubresourceSubset {
            subset,
            mip_levels: shape.mip_levels,
            array_slices: shape.array_size,
            plane_count: shape.plane_count,
            most_detailed_mip: subset.begin_mip,
            view_array_size: subset.end_array - subset.begin_array,
        }
    }

    /// Returns the subset covered by a buffer view.
    #[inline]
    pub fn buffer() -> Self {
        Self::from_parts(SubresourceSubset::buffer(), ResourceShape::new(1, 1, 1))
    }

    /// Returns the subset covering the single subresource at linear index `subresource`.
    ///
    /// [`ALL_SUBRESOURCES`] selects the whole resource. Any other index past the end of the
    /// resource gives an empty subset.
    pub fn from_subresource(subresource: u32, shape: ResourceShape) -> Self {
        let mip_levels = u32::from(shape.mip_levels);
        let slice_count = mip_levels * u32::from(shape.array_size);

        let subset = if subresource < shape.subresource_count() {
            let plane_slice = (subresource / slice_count) as u8;
            let array_slice = (subresource % slice_count / mip_levels) as u16;
            let mip_slice = (subresource % mip_levels) as u8;

            SubresourceSubset::new(
                mip_slice,
                mip_slice + 1,
                array_slice,
                array_slice + 1,
                plane_slice,
                plane_slice + 1,
            )
        } else if subresource == ALL_SUBRESOURCES {
            SubresourceSubset::new(
                0,
                shape.mip_levels,
                0,
                shape.array_size,
                0,
                shape.plane_count,
            )
        } else {
            SubresourceSubset::empty()
        };

        Self::from_parts(subset, shape).reduce()
    }

    /// Returns the subset covered by a shader-resource view.
    pub fn from_srv(
        desc: &ShaderResourceViewDesc,
        shape: ResourceShape,
        resource_format: Format,
    ) -> Self {
        let mut subset = SubresourceSubset::from_srv(desc, resource_format);

        if let ShaderResourceViewDimension::Texture3D { .. } = desc.dimension {
            debug_assert_eq!(subset.begin_array, 0);
            subset.end_array = 1;
        }

        if let Some((_, ALL_MIPS)) = desc.dimension.mips() {
            subset.end_mip = shape.mip_levels.max(subset.begin_mip);
        }

        Self::from_parts(subset, shape).reduce()
    }

    /// Returns the subset covered by an unordered-access view.
    pub fn from_uav(desc: &UnorderedAccessViewDesc, shape: ResourceShape) -> Self {
        let mut subset = SubresourceSubset::from_uav(desc);

        if let UnorderedAccessViewDimension::Texture3D { .. } = desc.dimension {
            subset.begin_array = 0;
            subset.end_array = 1;
        }

        Self::from_parts(subset, shape).reduce()
    }

    /// Returns the subset covered by a render-target view.
    pub fn from_rtv(desc: &RenderTargetViewDesc, shape: ResourceShape) -> Self {
        let mut subset = SubresourceSubset::from_rtv(desc);

        if let RenderTargetViewDimension::Texture3D { .. } = desc.dimension {
            subset.begin_array = 0;
            subset.end_array = 1;
        }

        Self::from_parts(subset, shape).reduce()
    }

    /// Returns the subset covered by a depth-stencil view, restricted to `planes`.
    pub fn from_dsv(
        desc: &DepthStencilViewDesc,
        shape: ResourceShape,
        resource_format: Format,
        planes: DsvPlaneFlags,
    ) -> Self {
        let subset = SubresourceSubset::from_dsv(desc, resource_format, planes);

        Self::from_parts(subset, shape).reduce()
    }

    /// Returns the subset covered by any kind of view. `planes` is only used by depth-stencil
    /// views.
    pub fn from_view(
        desc: &ViewDesc,
        shape: ResourceShape,
        resource_format: Format,
        planes: DsvPlaneFlags,
    ) -> Self {
        match desc {
            ViewDesc::Buffer => Self::buffer(),
            ViewDesc::ShaderResource(desc) => Self::from_srv(desc, shape, resource_format),
            ViewDesc::UnorderedAccess(desc) => Self::from_uav(desc, shape),
            ViewDesc::RenderTarget(desc) => Self::from_rtv(desc, shape),
            ViewDesc::DepthStencil(desc) => Self::from_dsv(desc, shape, resource_format, planes),
        }
    }

    /// Returns the subset covered by a raw shader-resource view descriptor.
    ///
    /// # Panics
    ///
    /// - In debug builds, panics if the dimension or the format of `desc` is not recognized. In
    ///   release builds the error is logged, and the view is treated as covering nothing.
    pub fn from_raw_srv(
        desc: &RawShaderResourceViewDesc,
        shape: ResourceShape,
        resource_format: Format,
    ) -> Self {
        match ShaderResourceViewDesc::try_from(desc) {
            Ok(desc) => Self::from_srv(&desc, shape, resource_format),
            Err(err) => Self::corrupt_descriptor(err, shape),
        }
    }

    /// Returns the subset covered by a raw unordered-access view descriptor.
    ///
    /// # Panics
    ///
    /// - In debug builds, panics if the dimension or the format of `desc` is not recognized.
    pub fn from_raw_uav(desc: &RawUnorderedAccessViewDesc, shape: ResourceShape) -> Self {
        match UnorderedAccessViewDesc::try_from(desc) {
            Ok(desc) => Self::from_uav(&desc, shape),
            Err(err) => Self::corrupt_descriptor(err, shape),
        }
    }

    /// Returns the subset covered by a raw render-target view descriptor.
    ///
    /// # Panics
    ///
    /// - In debug builds, panics if the dimension or the format of `desc` is not recognized.
    pub fn from_raw_rtv(desc: &RawRenderTargetViewDesc, shape: ResourceShape) -> Self {
        match RenderTargetViewDesc::try_from(desc) {
            Ok(desc) => Self::from_rtv(&desc, shape),
            Err(err) => Self::corrupt_descriptor(err, shape),
        }
    }

    /// Returns the subset covered by a raw depth-stencil view descriptor, restricted to `planes`.
    ///
    /// # Panics
    ///
    /// - In debug builds, panics if the dimension or the format of `desc` is not recognized.
    pub fn from_raw_dsv(
        desc: &RawDepthStencilViewDesc,
        shape: ResourceShape,
        resource_format: Format,
        planes: DsvPlaneFlags,
    ) -> Self {
        match DepthStencilViewDesc::try_from(desc) {
            Ok(desc) => Self::from_dsv(&desc, shape, resource_format, planes),
            Err(err) => Self::corrupt_descriptor(err, shape),
        }
    }

    fn corrupt_descriptor(err: RawViewDescError, shape: ResourceShape) -> Self {
        if cfg!(debug_assertions) {
            panic!("{}", err);
        }

        log::error!("{}, the view covers no subresources", err);

        Self::from_parts(SubresourceSubset::empty(), shape)
    }

    /// Collapses a subset that covers the whole resource into a single mip range.
    ///
    /// Nothing happens if the subset does not cover the whole resource, or if the resource has
    /// `u8::MAX` subresources or more, since the collapsed range would not fit in the mip bounds.
    pub fn reduce(mut self) -> Self {
        if self.covers_all_axes() {
            let end_subresource = calc_subresource(
                0,
                0,
                self.subset.end_plane.into(),
                self.mip_levels.into(),
                self.array_slices.into(),
            );

            if end_subresource < u8::MAX.into() {
                self.subset = SubresourceSubset::new(0, end_subresource as u8, 0, 1, 0, 1);
            } else {
                log::trace!(
                    "not reducing a whole-resource subset of {} subresources",
                    end_subresource,
                );
            }
        }

        self
    }

    fn covers_all_axes(&self) -> bool {
        let s = &self.subset;

        s.begin_mip == 0
            && s.end_mip == self.mip_levels
            && s.begin_array == 0
            && s.end_array == self.array_slices
            && s.begin_plane == 0
            && s.end_plane == self.plane_count
    }

    fn is_reduced_whole_resource(&self) -> bool {
        let s = &self.subset;
        let subresource_count = self.shape().subresource_count();

        subresource_count < u8::MAX.into()
            && s.begin_mip == 0
            && u32::from(s.end_mip) == subresource_count
            && s.begin_array == 0
            && s.end_array == 1
            && s.begin_plane == 0
            && s.end_plane == 1
    }

    /// Returns whether the subset covers every subresource of the resource, in either the
    /// reduced or the three-range form.
    #[inline]
    pub fn is_whole_resource(&self) -> bool {
        self.covers_all_axes() || self.is_reduced_whole_resource()
    }

    /// Returns the linear index of the first subresource covered.
    #[inline]
    pub fn min_subresource(&self) -> u32 {
        let s = &self.subset;

        calc_subresource(
            s.begin_mip.into(),
            s.begin_array.into(),
            s.begin_plane.into(),
            self.mip_levels.into(),
            self.array_slices.into(),
        )
    }

    /// Returns the linear index of the last subresource covered.
    ///
    /// For an empty subset, this is the same as [`min_subresource`](Self::min_subresource).
    #[inline]
    pub fn max_subresource(&self) -> u32 {
        self.iter()
            .next_back()
            .map_or_else(|| self.min_subresource(), |range| range.end - 1)
    }

    /// Returns one past the linear index of the last subresource covered, which is the end of
    /// the last range returned by [`iter`](Self::iter).
    ///
    /// For an empty subset, this is the same as [`min_subresource`](Self::min_subresource).
    #[inline]
    pub fn end_subresource(&self) -> u32 {
        self.iter()
            .next_back()
            .map_or_else(|| self.min_subresource(), |range| range.end)
    }

    /// Returns the most detailed mip level of the view, as given by its descriptor.
    #[inline]
    pub fn most_detailed_mip(&self) -> u8 {
        self.most_detailed_mip
    }

    /// Returns the number of array slices of the view, as given by its descriptor.
    #[inline]
    pub fn view_array_size(&self) -> u16 {
        self.view_array_size
    }

    /// Returns the number of array slices of the resource.
    #[inline]
    pub fn array_size(&self) -> u32 {
        self.array_slices.into()
    }

    /// Returns the number of mip levels of the resource.
    #[inline]
    pub fn mip_levels(&self) -> u8 {
        self.mip_levels
    }

    /// Returns the number of planes of the resource.
    #[inline]
    pub fn plane_count(&self) -> u8 {
        self.plane_count
    }

    /// Returns the shape of the resource.
    #[inline]
    pub fn shape(&self) -> ResourceShape {
        ResourceShape::new(self.mip_levels, self.array_slices, self.plane_count)
    }

    /// Returns the underlying subset, possibly in reduced form.
    #[inline]
    pub fn subset(&self) -> &SubresourceSubset {
        &self.subset
    }

    /// Returns an iterator over the contiguous ranges of linear subresource indices covered.
    #[inline]
    pub fn iter(&self) -> SubresourceRangeIterator {
        SubresourceRangeIterator::new(&self.subset, self.mip_levels, self.array_slices)
    }

    /// Returns the ranges of [`iter`](Self::iter), with adjacent ranges merged.
    pub fn coalesced_ranges(&self) -> SmallVec<[Range<u32>; 8]> {
        let mut ranges: SmallVec<[Range<u32>; 8]> = SmallVec::new();

        for range in self.iter() {
            match ranges.last_mut() {
                Some(last) if last.end == range.start => last.end = range.end,
                _ => ranges.push(range),
            }
        }

        ranges
    }

    /// Returns whether the subresource at linear index `subresource` is covered.
    pub fn contains(&self, subresource: u32) -> bool {
        self.iter().any(|range| range.contains(&subresource))
    }

    /// Returns the number of subresources covered.
    #[inline]
    pub fn len(&self) -> u32 {
        self.iter().len() as u32 * u32::from(self.subset.end_mip - self.subset.begin_mip)
    }

    /// Returns whether no subresources are covered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subset.is_empty()
    }

    /// Returns whether `self` and `other` are guaranteed to have no subresource in common.
    ///
    /// Both subsets must belong to the same resource. Either of them may be in reduced form.
    /// An empty subset overlaps nothing.
    #[inline]
    pub fn does_not_overlap(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return true;
        }

        self.unreduced().does_not_overlap(&other.unreduced())
    }

    /// Returns the subset in three-range form, undoing [`reduce`](Self::reduce).
    fn unreduced(&self) -> SubresourceSubset {
        if self.is_reduced_whole_resource() {
            SubresourceSubset::new(0, self.mip_levels, 0, self.array_slices, 0, self.plane_count)
        } else {
            self.subset
        }
    }
}

impl From<ViewSubresourceSubset> for SubresourceSubset {
    #[inline]
    fn from(val: ViewSubresourceSubset) -> Self {
        val.subset
    }
}

#[cfg(test)]
mod tests {
    use super::ViewSubresourceSubset;
    use crate::{
        format::Format,
        view::{
            raw::{RawRenderTargetViewDesc, RawShaderResourceViewDesc},
            DepthStencilViewDesc, DepthStencilViewDimension, DepthStencilViewFlags, DsvPlaneFlags,
            RenderTargetViewDesc, RenderTargetViewDimension, ResourceShape,
            ShaderResourceViewDesc, ShaderResourceViewDimension, UnorderedAccessViewDesc,
            UnorderedAccessViewDimension, ViewDesc, ALL_MIPS,
        },
        SubresourceSubset, ALL_SUBRESOURCES,
    };

    fn texture2d_srv(
        most_detailed_mip: u32,
        mip_levels: u32,
        first_array_slice: u32,
        array_size: u32,
    ) -> ShaderResourceViewDesc {
        ShaderResourceViewDesc {
            format: Format::R8G8B8A8_UNORM,
            dimension: ShaderResourceViewDimension::Texture2DArray {
                most_detailed_mip,
                mip_levels,
                first_array_slice,
                array_size,
                plane_slice: 0,
            },
        }
    }

    #[test]
    fn partial_srv() {
        let shape = ResourceShape::new(4, 6, 1);
        let subset = ViewSubresourceSubset::from_srv(
            &texture2d_srv(1, 2, 2, 3),
            shape,
            Format::R8G8B8A8_UNORM,
        );

        assert_eq!(subset.subset().mip_range(), 1..3);
        assert_eq!(subset.subset().array_range(), 2..5);
        assert_eq!(subset.subset().plane_range(), 0..1);
        assert_eq!(subset.min_subresource(), 9);
        assert_eq!(subset.max_subresource(), 18);
        assert_eq!(subset.end_subresource(), 19);
        assert_eq!(subset.most_detailed_mip(), 1);
        assert_eq!(subset.view_array_size(), 3);
        assert_eq!(subset.array_size(), 6);
        assert_eq!(subset.len(), 6);
        assert!(!subset.is_whole_resource());
    }

    #[test]
    fn whole_resource_is_reduced() {
        let shape = ResourceShape::new(4, 1, 1);
        let desc = ShaderResourceViewDesc {
            format: Format::R8G8B8A8_UNORM,
            dimension: ShaderResourceViewDimension::Texture2D {
                most_detailed_mip: 0,
                mip_levels: 4,
                plane_slice: 0,
            },
        };
        let subset = ViewSubresourceSubset::from_srv(&desc, shape, Format::R8G8B8A8_UNORM);

        assert_eq!(*subset.subset(), SubresourceSubset::new(0, 4, 0, 1, 0, 1));
        assert!(subset.is_whole_resource());
        assert_eq!(subset.iter().collect::<Vec<_>>(), [0..4]);
    }

    #[test]
    fn reduction_collapses_arrays_and_planes() {
        let shape = ResourceShape::new(3, 4, 2);
        let subset = ViewSubresourceSubset::from_parts(
            SubresourceSubset::new(0, 3, 0, 4, 0, 2),
            shape,
        );

        assert!(subset.is_whole_resource());
        assert_eq!(subset.iter().len(), 8);

        let reduced = subset.reduce();
        assert_eq!(*reduced.subset(), SubresourceSubset::new(0, 24, 0, 1, 0, 1));
        assert!(reduced.is_whole_resource());
        assert_eq!(reduced.iter().collect::<Vec<_>>(), [0..24]);
        assert_eq!(reduced.len(), subset.len());
        assert_eq!(reduced.coalesced_ranges().as_slice(), subset.coalesced_ranges().as_slice());

        // Idempotent.
        assert_eq!(reduced.reduce(), reduced);
    }

    #[test]
    fn reduction_skipped_when_too_large() {
        let shape = ResourceShape::new(15, 17, 1);
        let subset = ViewSubresourceSubset::from_parts(
            SubresourceSubset::new(0, 15, 0, 17, 0, 1),
            shape,
        );
        let reduced = subset.reduce();

        assert_eq!(reduced, subset);
        assert!(reduced.is_whole_resource());
        assert_eq!(reduced.len(), 255);
    }

    #[test]
    fn partial_subset_with_matching_product_is_not_whole() {
        // 2 * 3 == 3 * 2, but mips 0..2 of arrays 0..3 is not the whole of a (3, 2) resource.
        let shape = ResourceShape::new(3, 2, 1);
        let subset = ViewSubresourceSubset::from_parts(
            SubresourceSubset::new(0, 2, 0, 3, 0, 1),
            shape,
        );

        assert!(!subset.is_whole_resource());
    }

    #[test]
    fn srv_all_mips() {
        let shape = ResourceShape::new(5, 2, 1);
        let subset = ViewSubresourceSubset::from_srv(
            &texture2d_srv(2, ALL_MIPS, 0, 2),
            shape,
            Format::R8G8B8A8_UNORM,
        );
        assert_eq!(subset.subset().mip_range(), 2..5);

        let subset = ViewSubresourceSubset::from_srv(
            &texture2d_srv(0, ALL_MIPS, 0, 2),
            shape,
            Format::R8G8B8A8_UNORM,
        );
        assert!(subset.is_whole_resource());
        assert_eq!(*subset.subset(), SubresourceSubset::new(0, 10, 0, 1, 0, 1));
    }

    #[test]
    fn texture3d_views_have_one_array_slice() {
        let shape = ResourceShape::new(3, 1, 1);

        let srv = ShaderResourceViewDesc {
            format: Format::R16_FLOAT,
            dimension: ShaderResourceViewDimension::Texture3D {
                most_detailed_mip: 1,
                mip_levels: 2,
            },
        };
        let subset = ViewSubresourceSubset::from_srv(&srv, shape, Format::R16_FLOAT);
        assert_eq!(subset.subset().array_range(), 0..1);
        assert_eq!(subset.view_array_size(), 1);
        assert_eq!(subset.iter().collect::<Vec<_>>(), [1..3]);

        let uav = UnorderedAccessViewDesc {
            format: Format::R16_FLOAT,
            dimension: UnorderedAccessViewDimension::Texture3D {
                mip_slice: 2,
                first_w_slice: 4,
                w_size: 4,
            },
        };
        let subset = ViewSubresourceSubset::from_uav(&uav, shape);
        assert_eq!(subset.subset().array_range(), 0..1);
        assert_eq!(subset.iter().collect::<Vec<_>>(), [2..3]);

        let rtv = RenderTargetViewDesc {
            format: Format::R16_FLOAT,
            dimension: RenderTargetViewDimension::Texture3D {
                mip_slice: 0,
                first_w_slice: 0,
                w_size: 16,
            },
        };
        let subset = ViewSubresourceSubset::from_rtv(&rtv, shape);
        assert_eq!(subset.subset().array_range(), 0..1);
        assert_eq!(subset.min_subresource(), 0);
        assert_eq!(subset.max_subresource(), 0);
    }

    #[test]
    fn stencil_only_dsv() {
        let shape = ResourceShape::from_format(2, 3, Format::R24G8_TYPELESS);
        let desc = DepthStencilViewDesc {
            format: Format::D24_UNORM_S8_UINT,
            flags: DepthStencilViewFlags::empty(),
            dimension: DepthStencilViewDimension::Texture2DArray {
                mip_slice: 0,
                first_array_slice: 0,
                array_size: 3,
            },
        };

        let stencil = ViewSubresourceSubset::from_dsv(
            &desc,
            shape,
            Format::R24G8_TYPELESS,
            DsvPlaneFlags::STENCIL,
        );
        assert_eq!(stencil.subset().plane_range(), 1..2);
        assert_eq!(stencil.iter().collect::<Vec<_>>(), [6..7, 8..9, 10..11]);

        let depth = ViewSubresourceSubset::from_dsv(
            &desc,
            shape,
            Format::R24G8_TYPELESS,
            DsvPlaneFlags::DEPTH,
        );
        assert!(stencil.does_not_overlap(&depth));

        let both = ViewSubresourceSubset::from_dsv(
            &desc,
            shape,
            Format::R24G8_TYPELESS,
            DsvPlaneFlags::DEPTH_AND_STENCIL,
        );
        assert!(!both.does_not_overlap(&stencil));
        assert_eq!(both.len(), 6);
    }

    #[test]
    fn single_subresources() {
        let shape = ResourceShape::new(3, 4, 2);

        let subset = ViewSubresourceSubset::from_subresource(17, shape);
        assert_eq!(*subset.subset(), SubresourceSubset::new(2, 3, 1, 2, 1, 2));
        assert_eq!(subset.iter().collect::<Vec<_>>(), [17..18]);
        assert_eq!(subset.min_subresource(), 17);
        assert_eq!(subset.max_subresource(), 17);
        assert!(subset.contains(17));
        assert!(!subset.contains(16));

        let subset = ViewSubresourceSubset::from_subresource(ALL_SUBRESOURCES, shape);
        assert!(subset.is_whole_resource());
        assert_eq!(subset.len(), 24);

        let subset = ViewSubresourceSubset::from_subresource(24, shape);
        assert!(subset.is_empty());
        assert_eq!(subset.len(), 0);
        assert_eq!(subset.iter().next(), None);
        assert_eq!(subset.min_subresource(), subset.max_subresource());
    }

    #[test]
    fn reduced_subsets_overlap_their_parts() {
        let shape = ResourceShape::new(2, 2, 1);
        let whole = ViewSubresourceSubset::from_subresource(ALL_SUBRESOURCES, shape);
        let last = ViewSubresourceSubset::from_subresource(3, shape);

        assert_eq!(*whole.subset(), SubresourceSubset::new(0, 4, 0, 1, 0, 1));
        assert!(!whole.does_not_overlap(&last));
        assert!(!last.does_not_overlap(&whole));
        assert!(!whole.does_not_overlap(&whole));

        let shape = ResourceShape::new(1, 1, 2);
        let whole = ViewSubresourceSubset::from_subresource(ALL_SUBRESOURCES, shape);
        let stencil = ViewSubresourceSubset::from_subresource(1, shape);

        assert_eq!(*whole.subset(), SubresourceSubset::new(0, 2, 0, 1, 0, 1));
        assert_eq!(*stencil.subset(), SubresourceSubset::new(0, 1, 0, 1, 1, 2));
        assert!(!whole.does_not_overlap(&stencil));
        assert!(!stencil.does_not_overlap(&whole));
    }

    #[test]
    fn empty_subsets_overlap_nothing() {
        let shape = ResourceShape::new(4, 4, 1);
        let empty = ViewSubresourceSubset::from_parts(
            SubresourceSubset::new(1, 1, 0, 4, 0, 1),
            shape,
        );
        let whole = ViewSubresourceSubset::from_subresource(ALL_SUBRESOURCES, shape);

        assert!(empty.does_not_overlap(&whole));
        assert!(whole.does_not_overlap(&empty));
    }

    #[test]
    fn coalesced_ranges() {
        let shape = ResourceShape::new(4, 3, 2);

        let all_mips = ViewSubresourceSubset::from_parts(
            SubresourceSubset::new(0, 4, 0, 3, 1, 2),
            shape,
        );
        assert_eq!(all_mips.iter().len(), 3);
        assert_eq!(all_mips.coalesced_ranges().as_slice(), [12..24]);

        let some_mips = ViewSubresourceSubset::from_parts(
            SubresourceSubset::new(1, 3, 0, 3, 0, 1),
            shape,
        );
        assert_eq!(some_mips.coalesced_ranges().as_slice(), [1..3, 5..7, 9..11]);
    }

    #[test]
    fn buffer_and_view_dispatch() {
        let buffer = ViewSubresourceSubset::buffer();
        assert!(buffer.is_whole_resource());
        assert_eq!(buffer.iter().collect::<Vec<_>>(), [0..1]);
        assert_eq!(
            ViewSubresourceSubset::from_view(
                &ViewDesc::Buffer,
                ResourceShape::new(1, 1, 1),
                Format::UNKNOWN,
                DsvPlaneFlags::empty(),
            ),
            buffer
        );

        let shape = ResourceShape::new(4, 6, 1);
        let desc = texture2d_srv(1, 2, 2, 3);
        assert_eq!(
            ViewSubresourceSubset::from_view(
                &desc.into(),
                shape,
                Format::R8G8B8A8_UNORM,
                DsvPlaneFlags::empty(),
            ),
            ViewSubresourceSubset::from_srv(&desc, shape, Format::R8G8B8A8_UNORM)
        );
    }

    #[test]
    fn raw_descriptors() {
        let shape = ResourceShape::new(4, 6, 1);
        let desc = texture2d_srv(1, 2, 2, 3);
        let raw = RawShaderResourceViewDesc::from(&desc);

        assert_eq!(
            ViewSubresourceSubset::from_raw_srv(&raw, shape, Format::R8G8B8A8_UNORM),
            ViewSubresourceSubset::from_srv(&desc, shape, Format::R8G8B8A8_UNORM)
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    fn corrupt_raw_descriptor_panics() {
        let raw = RawRenderTargetViewDesc {
            format: 28,
            view_dimension: 99,
            union: [0; 4],
        };

        assert_should_panic!("corrupt resource type 99 on render target view", {
            ViewSubresourceSubset::from_raw_rtv(&raw, ResourceShape::new(1, 1, 1));
        });
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn corrupt_raw_descriptor_is_empty() {
        let raw = RawRenderTargetViewDesc {
            format: 28,
            view_dimension: 99,
            union: [0; 4],
        };
        let subset = ViewSubresourceSubset::from_raw_rtv(&raw, ResourceShape::new(1, 1, 1));

        assert_eq!(*subset.subset(), SubresourceSubset::empty());
        assert!(subset.is_empty());
    }
}

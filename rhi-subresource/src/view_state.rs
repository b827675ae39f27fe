//! Per-view subresource state kept alongside a view object.
//!
//! A state tracker often needs more than the subset of a view. A depth-stencil view can have its
//! depth and stencil planes in different states, so it keeps a subset for each plane as well as
//! the combined one. A shader-resource view of a depth/stencil resource reads a single plane, and
//! the tracker needs to know which.

use crate::{
    format::{plane_slice_from_view_format, Format},
    view::{DepthStencilViewDesc, DsvPlaneFlags, ResourceShape, ShaderResourceViewDesc},
    ViewSubresourceSubset,
};

/// The subsets of a depth-stencil view: both planes, the depth plane only, and the stencil plane
/// only if the view's format has one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepthStencilViewSubsets {
    combined: ViewSubresourceSubset,
    depth_only: ViewSubresourceSubset,
    stencil_only: Option<ViewSubresourceSubset>,
}

impl DepthStencilViewSubsets {
    /// Builds the subsets of a depth-stencil view on a resource of `resource_format`.
    ///
    /// Every depth-stencil view has depth data; `has_stencil` tells whether its format also has
    /// stencil data.
    pub fn new(
        desc: &DepthStencilViewDesc,
        shape: ResourceShape,
        resource_format: Format,
        has_stencil: bool,
    ) -> Self {
        let subset = |planes| ViewSubresourceSubset::from_dsv(desc, shape, resource_format, planes);

        DepthStencilViewSubsets {
            combined: subset(DsvPlaneFlags::DEPTH_AND_STENCIL),
            depth_only: subset(DsvPlaneFlags::DEPTH),
            stencil_only: has_stencil.then(|| subset(DsvPlaneFlags::STENCIL)),
        }
    }

    /// Returns the subset covering every plane of the view.
    #[inline]
    pub fn combined(&self) -> &ViewSubresourceSubset {
        &self.combined
    }

    /// Returns the subset covering the depth plane only.
    #[inline]
    pub fn depth_only(&self) -> &ViewSubresourceSubset {
        &self.depth_only
    }

    /// Returns the subset covering the stencil plane, or `None` if the view has no stencil data.
    #[inline]
    pub fn stencil_only(&self) -> Option<&ViewSubresourceSubset> {
        self.stencil_only.as_ref()
    }

    /// Always `true`.
    #[inline]
    pub fn has_depth(&self) -> bool {
        true
    }

    /// Returns whether the view has stencil data.
    #[inline]
    pub fn has_stencil(&self) -> bool {
        self.stencil_only.is_some()
    }
}

/// Which plane of a depth/stencil resource a shader-resource view reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShaderResourcePlanes {
    contains_depth_plane: bool,
    contains_stencil_plane: bool,
}

impl ShaderResourcePlanes {
    /// Returns the planes read by a shader-resource view on a resource of `resource_format`.
    ///
    /// Both are `false` if the resource is not a depth/stencil resource.
    pub fn new(desc: &ShaderResourceViewDesc, resource_format: Format) -> Self {
        if !resource_format.is_depth_stencil() {
            return Self::default();
        }

        let plane_slice = plane_slice_from_view_format(resource_format, desc.format);

        ShaderResourcePlanes {
            contains_depth_plane: plane_slice == 0,
            contains_stencil_plane: plane_slice == 1,
        }
    }

    /// Returns whether the view reads one of the planes of a depth/stencil resource.
    #[inline]
    pub fn is_depth_stencil(&self) -> bool {
        self.contains_depth_plane || self.contains_stencil_plane
    }

    /// Returns whether the view reads the depth plane.
    #[inline]
    pub fn contains_depth_plane(&self) -> bool {
        self.contains_depth_plane
    }

    /// Returns whether the view reads the stencil plane.
    #[inline]
    pub fn contains_stencil_plane(&self) -> bool {
        self.contains_stencil_plane
    }
}

//! Resource view descriptors.
//!
//! A resource view describes how the GPU must interpret a resource, and which part of it is
//! accessed. Direct3D 12 has four kinds of texture views, each with its own descriptor:
//!
//! - [`ShaderResourceViewDesc`] for reading from shaders; covers a range of mip levels.
//! - [`UnorderedAccessViewDesc`] for reading and writing from shaders; covers a single mip level.
//! - [`RenderTargetViewDesc`] for color attachments; covers a single mip level.
//! - [`DepthStencilViewDesc`] for depth/stencil attachments; covers a single mip level and, unless
//!   restricted, both planes of a depth/stencil resource.
//!
//! Each descriptor carries a dimension enum whose variants only hold the fields that are
//! meaningful for that dimension. The [`raw`] module contains bit-exact mirrors of the API
//! structs, for descriptors coming straight from the graphics API.
//!
//! The resource a view is created on is described by a [`ResourceShape`].

use crate::{
    format::{plane_slice_from_view_format, Format},
    ValidationError,
};

pub mod raw;

/// Passing this value as the mip level count of a shader-resource view selects every mip level
/// from the most detailed one down to the least detailed one of the resource.
pub const ALL_MIPS: u32 = u32::MAX;

/// The number of faces of a cube map.
pub const CUBE_FACES: u32 = 6;

/// The extent of an image resource, in subresources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceShape {
    /// The number of mip levels of the resource.
    pub mip_levels: u8,

    /// The number of array slices of the resource. For 3D resources this is 1, since depth
    /// slices are not separate subresources.
    pub array_size: u16,

    /// The number of planes of the resource's format, 1 or 2.
    pub plane_count: u8,
}

impl ResourceShape {
    #[inline]
    pub const fn new(mip_levels: u8, array_size: u16, plane_count: u8) -> Self {
        Self {
            mip_levels,
            array_size,
            plane_count,
        }
    }

    /// Returns the shape of a resource of `format`, taking the plane count from the format.
    #[inline]
    pub const fn from_format(mip_levels: u8, array_size: u16, format: Format) -> Self {
        Self::new(mip_levels, array_size, format.plane_count())
    }

    /// Returns the total number of subresources in the resource.
    #[inline]
    pub const fn subresource_count(self) -> u32 {
        self.mip_levels as u32 * self.array_size as u32 * self.plane_count as u32
    }

    pub fn validate(&self) -> Result<(), Box<ValidationError>> {
        let &Self {
            mip_levels,
            array_size,
            plane_count,
        } = self;

        if mip_levels == 0 {
            return Err(ValidationError::new("mip_levels", "is zero"));
        }

        if array_size == 0 {
            return Err(ValidationError::new("array_size", "is zero"));
        }

        if !(1..=2).contains(&plane_count) {
            return Err(ValidationError::new("plane_count", "is not 1 or 2"));
        }

        Ok(())
    }
}

d3d12_bitflags! {
    /// Selects the planes of a depth/stencil resource that a depth-stencil view subset covers.
    ///
    /// This only has an effect on two-plane resources. When both flags, or none, are set, the
    /// subset covers every plane of the resource.
    DsvPlaneFlags
    impl {
        /// Both the depth and the stencil plane.
        pub const DEPTH_AND_STENCIL: Self = Self(0x3);
    }
    = ViewSubresourceSubsetFlags(u32);

    /// The depth plane, plane 0.
    DEPTH = 0x1,

    /// The stencil plane, plane 1.
    STENCIL = 0x2,
}

d3d12_bitflags! {
    /// Read-only flags of a depth-stencil view.
    DepthStencilViewFlags = D3D12_DSV_FLAGS(u32);

    /// The depth plane is bound read-only.
    READ_ONLY_DEPTH = 0x1,

    /// The stencil plane is bound read-only.
    READ_ONLY_STENCIL = 0x2,
}

/// Any kind of resource view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewDesc {
    /// A view of a buffer. Buffers have a single subresource.
    Buffer,
    ShaderResource(ShaderResourceViewDesc),
    UnorderedAccess(UnorderedAccessViewDesc),
    RenderTarget(RenderTargetViewDesc),
    DepthStencil(DepthStencilViewDesc),
}

impl ViewDesc {
    /// Returns the format of the view, or `None` for buffer views.
    pub fn format(&self) -> Option<Format> {
        match self {
            ViewDesc::Buffer => None,
            ViewDesc::ShaderResource(desc) => Some(desc.format),
            ViewDesc::UnorderedAccess(desc) => Some(desc.format),
            ViewDesc::RenderTarget(desc) => Some(desc.format),
            ViewDesc::DepthStencil(desc) => Some(desc.format),
        }
    }

    pub fn validate(
        &self,
        shape: ResourceShape,
        resource_format: Format,
    ) -> Result<(), Box<ValidationError>> {
        match self {
            ViewDesc::Buffer => Ok(()),
            ViewDesc::ShaderResource(desc) => desc.validate(shape, resource_format),
            ViewDesc::UnorderedAccess(desc) => desc.validate(shape),
            ViewDesc::RenderTarget(desc) => desc.validate(shape),
            ViewDesc::DepthStencil(desc) => desc.validate(shape),
        }
    }
}

impl From<ShaderResourceViewDesc> for ViewDesc {
    #[inline]
    fn from(val: ShaderResourceViewDesc) -> Self {
        ViewDesc::ShaderResource(val)
    }
}

impl From<UnorderedAccessViewDesc> for ViewDesc {
    #[inline]
    fn from(val: UnorderedAccessViewDesc) -> Self {
        ViewDesc::UnorderedAccess(val)
    }
}

impl From<RenderTargetViewDesc> for ViewDesc {
    #[inline]
    fn from(val: RenderTargetViewDesc) -> Self {
        ViewDesc::RenderTarget(val)
    }
}

impl From<DepthStencilViewDesc> for ViewDesc {
    #[inline]
    fn from(val: DepthStencilViewDesc) -> Self {
        ViewDesc::DepthStencil(val)
    }
}

/// Describes a shader-resource view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShaderResourceViewDesc {
    /// The format of the view. On a multi-planar resource, this selects the plane for the
    /// dimensions that have no explicit plane slice.
    pub format: Format,

    pub dimension: ShaderResourceViewDimension,
}

/// The dimension of a shader-resource view, and the subresources it covers.
///
/// `mip_levels` can be [`ALL_MIPS`] to select every mip level starting at `most_detailed_mip`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShaderResourceViewDimension {
    Buffer,
    Texture1D {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    Texture1DArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2D {
        most_detailed_mip: u32,
        mip_levels: u32,
        plane_slice: u32,
    },
    Texture2DArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_array_slice: u32,
        array_size: u32,
        plane_slice: u32,
    },
    Texture2DMS,
    Texture2DMSArray {
        first_array_slice: u32,
        array_size: u32,
    },
    Texture3D {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    TextureCube {
        most_detailed_mip: u32,
        mip_levels: u32,
    },
    TextureCubeArray {
        most_detailed_mip: u32,
        mip_levels: u32,
        first_2d_array_face: u32,
        num_cubes: u32,
    },
}

impl ShaderResourceViewDimension {
    /// Returns the most detailed mip level and the mip level count, for the dimensions that
    /// have them.
    pub const fn mips(&self) -> Option<(u32, u32)> {
        match *self {
            Self::Texture1D {
                most_detailed_mip,
                mip_levels,
            }
            | Self::Texture1DArray {
                most_detailed_mip,
                mip_levels,
                ..
            }
            | Self::Texture2D {
                most_detailed_mip,
                mip_levels,
                ..
            }
            | Self::Texture2DArray {
                most_detailed_mip,
                mip_levels,
                ..
            }
            | Self::Texture3D {
                most_detailed_mip,
                mip_levels,
            }
            | Self::TextureCube {
                most_detailed_mip,
                mip_levels,
            }
            | Self::TextureCubeArray {
                most_detailed_mip,
                mip_levels,
                ..
            } => Some((most_detailed_mip, mip_levels)),
            Self::Buffer | Self::Texture2DMS | Self::Texture2DMSArray { .. } => None,
        }
    }
}

impl ShaderResourceViewDesc {
    pub fn validate(
        &self,
        shape: ResourceShape,
        resource_format: Format,
    ) -> Result<(), Box<ValidationError>> {
        let &Self { format, dimension } = self;

        match dimension {
            ShaderResourceViewDimension::Buffer => return Ok(()),
            ShaderResourceViewDimension::Texture1D {
                most_detailed_mip,
                mip_levels,
            }
            | ShaderResourceViewDimension::Texture3D {
                most_detailed_mip,
                mip_levels,
            } => {
                validate_mip_range(most_detailed_mip, mip_levels, shape)?;
            }
            ShaderResourceViewDimension::Texture1DArray {
                most_detailed_mip,
                mip_levels,
                first_array_slice,
                array_size,
            } => {
                validate_mip_range(most_detailed_mip, mip_levels, shape)?;
                validate_array_range(first_array_slice, array_size, shape)?;
            }
            ShaderResourceViewDimension::Texture2D {
                most_detailed_mip,
                mip_levels,
                plane_slice,
            } => {
                validate_mip_range(most_detailed_mip, mip_levels, shape)?;
                validate_plane_slice(plane_slice, shape)?;
                validate_plane_matches_format(plane_slice, resource_format, format)?;
            }
            ShaderResourceViewDimension::Texture2DArray {
                most_detailed_mip,
                mip_levels,
                first_array_slice,
                array_size,
                plane_slice,
            } => {
                validate_mip_range(most_detailed_mip, mip_levels, shape)?;
                validate_array_range(first_array_slice, array_size, shape)?;
                validate_plane_slice(plane_slice, shape)?;
                validate_plane_matches_format(plane_slice, resource_format, format)?;
            }
            ShaderResourceViewDimension::Texture2DMS => (),
            ShaderResourceViewDimension::Texture2DMSArray {
                first_array_slice,
                array_size,
            } => {
                validate_array_range(first_array_slice, array_size, shape)?;
            }
            ShaderResourceViewDimension::TextureCube {
                most_detailed_mip,
                mip_levels,
            } => {
                validate_mip_range(most_detailed_mip, mip_levels, shape)?;

                if u32::from(shape.array_size) < CUBE_FACES {
                    return Err(ValidationError::new(
                        "",
                        "is `TextureCube`, but the resource has fewer than 6 array slices",
                    )
                    .add_context("dimension"));
                }
            }
            ShaderResourceViewDimension::TextureCubeArray {
                most_detailed_mip,
                mip_levels,
                first_2d_array_face,
                num_cubes,
            } => {
                validate_mip_range(most_detailed_mip, mip_levels, shape)?;

                if num_cubes == 0 {
                    return Err(
                        ValidationError::new("num_cubes", "is zero").add_context("dimension")
                    );
                }

                if u64::from(first_2d_array_face) + u64::from(num_cubes) * u64::from(CUBE_FACES)
                    > u64::from(shape.array_size)
                {
                    return Err(ValidationError::new(
                        "num_cubes",
                        "`first_2d_array_face + num_cubes * 6` is greater than the array size of \
                        the resource",
                    )
                    .add_context("dimension"));
                }
            }
        }

        Ok(())
    }
}

/// Describes an unordered-access view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnorderedAccessViewDesc {
    pub format: Format,
    pub dimension: UnorderedAccessViewDimension,
}

/// The dimension of an unordered-access view, and the subresources it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnorderedAccessViewDimension {
    Buffer,
    Texture1D {
        mip_slice: u32,
    },
    Texture1DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2D {
        mip_slice: u32,
        plane_slice: u32,
    },
    Texture2DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
        plane_slice: u32,
    },
    /// `first_w_slice` and `w_size` select depth slices, which are not separate subresources.
    Texture3D {
        mip_slice: u32,
        first_w_slice: u32,
        w_size: u32,
    },
}

impl UnorderedAccessViewDesc {
    pub fn validate(&self, shape: ResourceShape) -> Result<(), Box<ValidationError>> {
        match self.dimension {
            UnorderedAccessViewDimension::Buffer => (),
            UnorderedAccessViewDimension::Texture1D { mip_slice }
            | UnorderedAccessViewDimension::Texture3D { mip_slice, .. } => {
                validate_mip_slice(mip_slice, shape)?;
            }
            UnorderedAccessViewDimension::Texture1DArray {
                mip_slice,
                first_array_slice,
                array_size,
            } => {
                validate_mip_slice(mip_slice, shape)?;
                validate_array_range(first_array_slice, array_size, shape)?;
            }
            UnorderedAccessViewDimension::Texture2D {
                mip_slice,
                plane_slice,
            } => {
                validate_mip_slice(mip_slice, shape)?;
                validate_plane_slice(plane_slice, shape)?;
            }
            UnorderedAccessViewDimension::Texture2DArray {
                mip_slice,
                first_array_slice,
                array_size,
                plane_slice,
            } => {
                validate_mip_slice(mip_slice, shape)?;
                validate_array_range(first_array_slice, array_size, shape)?;
                validate_plane_slice(plane_slice, shape)?;
            }
        }

        Ok(())
    }
}

/// Describes a render-target view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderTargetViewDesc {
    pub format: Format,
    pub dimension: RenderTargetViewDimension,
}

/// The dimension of a render-target view, and the subresources it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderTargetViewDimension {
    Buffer,
    Texture1D {
        mip_slice: u32,
    },
    Texture1DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2D {
        mip_slice: u32,
        plane_slice: u32,
    },
    Texture2DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
        plane_slice: u32,
    },
    Texture2DMS,
    Texture2DMSArray {
        first_array_slice: u32,
        array_size: u32,
    },
    /// `first_w_slice` and `w_size` select depth slices, which are not separate subresources.
    Texture3D {
        mip_slice: u32,
        first_w_slice: u32,
        w_size: u32,
    },
}

impl RenderTargetViewDesc {
    pub fn validate(&self, shape: ResourceShape) -> Result<(), Box<ValidationError>> {
        match self.dimension {
            RenderTargetViewDimension::Buffer | RenderTargetViewDimension::Texture2DMS => (),
            RenderTargetViewDimension::Texture1D { mip_slice }
            | RenderTargetViewDimension::Texture3D { mip_slice, .. } => {
                validate_mip_slice(mip_slice, shape)?;
            }
            RenderTargetViewDimension::Texture1DArray {
                mip_slice,
                first_array_slice,
                array_size,
            } => {
                validate_mip_slice(mip_slice, shape)?;
                validate_array_range(first_array_slice, array_size, shape)?;
            }
            RenderTargetViewDimension::Texture2D {
                mip_slice,
                plane_slice,
            } => {
                validate_mip_slice(mip_slice, shape)?;
                validate_plane_slice(plane_slice, shape)?;
            }
            RenderTargetViewDimension::Texture2DArray {
                mip_slice,
                first_array_slice,
                array_size,
                plane_slice,
            } => {
                validate_mip_slice(mip_slice, shape)?;
                validate_array_range(first_array_slice, array_size, shape)?;
                validate_plane_slice(plane_slice, shape)?;
            }
            RenderTargetViewDimension::Texture2DMSArray {
                first_array_slice,
                array_size,
            } => {
                validate_array_range(first_array_slice, array_size, shape)?;
            }
        }

        Ok(())
    }
}

/// Describes a depth-stencil view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepthStencilViewDesc {
    pub format: Format,
    pub flags: DepthStencilViewFlags,
    pub dimension: DepthStencilViewDimension,
}

/// The dimension of a depth-stencil view, and the subresources it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DepthStencilViewDimension {
    Texture1D {
        mip_slice: u32,
    },
    Texture1DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2D {
        mip_slice: u32,
    },
    Texture2DArray {
        mip_slice: u32,
        first_array_slice: u32,
        array_size: u32,
    },
    Texture2DMS,
    Texture2DMSArray {
        first_array_slice: u32,
        array_size: u32,
    },
}

impl DepthStencilViewDesc {
    /// Returns the planes that the view can write to, given the format of the resource.
    pub fn writable_planes(&self, resource_format: Format) -> DsvPlaneFlags {
        let mut planes = DsvPlaneFlags::empty();

        if !self.flags.intersects(DepthStencilViewFlags::READ_ONLY_DEPTH) {
            planes |= DsvPlaneFlags::DEPTH;
        }

        if resource_format.has_stencil()
            && !self.flags.intersects(DepthStencilViewFlags::READ_ONLY_STENCIL)
        {
            planes |= DsvPlaneFlags::STENCIL;
        }

        planes
    }

    pub fn validate(&self, shape: ResourceShape) -> Result<(), Box<ValidationError>> {
        match self.dimension {
            DepthStencilViewDimension::Texture2DMS => (),
            DepthStencilViewDimension::Texture1D { mip_slice }
            | DepthStencilViewDimension::Texture2D { mip_slice } => {
                validate_mip_slice(mip_slice, shape)?;
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
                validate_mip_slice(mip_slice, shape)?;
                validate_array_range(first_array_slice, array_size, shape)?;
            }
            DepthStencilViewDimension::Texture2DMSArray {
                first_array_slice,
                array_size,
            } => {
                validate_array_range(first_array_slice, array_size, shape)?;
            }
        }

        Ok(())
    }
}

fn validate_mip_range(
    most_detailed_mip: u32,
    mip_levels: u32,
    shape: ResourceShape,
) -> Result<(), Box<ValidationError>> {
    if mip_levels == 0 {
        return Err(ValidationError::new("mip_levels", "is zero").add_context("dimension"));
    }

    if most_detailed_mip >= u32::from(shape.mip_levels) {
        return Err(ValidationError::new(
            "most_detailed_mip",
            "is not less than the number of mip levels of the resource",
        )
        .add_context("dimension"));
    }

    if mip_levels != ALL_MIPS
        && u64::from(most_detailed_mip) + u64::from(mip_levels) > u64::from(shape.mip_levels)
    {
        return Err(ValidationError::new(
            "mip_levels",
            "`most_detailed_mip + mip_levels` is greater than the number of mip levels of the \
            resource",
        )
        .add_context("dimension"));
    }

    Ok(())
}

fn validate_mip_slice(mip_slice: u32, shape: ResourceShape) -> Result<(), Box<ValidationError>> {
    if mip_slice >= u32::from(shape.mip_levels) {
        return Err(ValidationError::new(
            "mip_slice",
            "is not less than the number of mip levels of the resource",
        )
        .add_context("dimension"));
    }

    Ok(())
}

fn validate_array_range(
    first_array_slice: u32,
    array_size: u32,
    shape: ResourceShape,
) -> Result<(), Box<ValidationError>> {
    if array_size == 0 {
        return Err(ValidationError::new("array_size", "is zero").add_context("dimension"));
    }

    if u64::from(first_array_slice) + u64::from(array_size) > u64::from(shape.array_size) {
        return Err(ValidationError::new(
            "array_size",
            "`first_array_slice + array_size` is greater than the array size of the resource",
        )
        .add_context("dimension"));
    }

    Ok(())
}

fn validate_plane_slice(
    plane_slice: u32,
    shape: ResourceShape,
) -> Result<(), Box<ValidationError>> {
    if plane_slice >= u32::from(shape.plane_count) {
        return Err(ValidationError::new(
            "plane_slice",
            "is not less than the number of planes of the resource",
        )
        .add_context("dimension"));
    }

    Ok(())
}

fn validate_plane_matches_format(
    plane_slice: u32,
    resource_format: Format,
    view_format: Format,
) -> Result<(), Box<ValidationError>> {
    if resource_format.is_planar()
        && plane_slice != u32::from(plane_slice_from_view_format(resource_format, view_format))
    {
        return Err(ValidationError::new(
            "plane_slice",
            "does not match the plane selected by the view format",
        )
        .add_context("dimension"));
    }

    Ok(())
}

//! Subresource ranges covered by Direct3D 12 resource views.
//!
//! A GPU image resource is made of *subresources*: one per combination of mip level, array slice
//! and plane. A resource view (shader-resource, unordered-access, render-target or depth-stencil)
//! only exposes some of them. Barrier and resource-state trackers need to know exactly which ones,
//! so they can tell whether two views alias and which per-subresource states a transition touches.
//!
//! # Overview
//!
//! - [`SubresourceSubset`] holds the three half-open ranges (mips, array slices, planes) a view
//!   covers. It is built from a view descriptor, see the [`view`] module.
//! - [`ViewSubresourceSubset`] adds the shape of the owning resource. When a view covers the whole
//!   resource, the subset is *reduced* to a single linear range so that comparing two of them is
//!   cheap.
//! - [`SubresourceRangeIterator`] walks a `ViewSubresourceSubset` and yields the contiguous ranges
//!   of linear subresource indices it covers, one per (array slice, plane) pair.
//! - [`does_not_overlap`] tells whether two subsets are guaranteed to be disjoint.
//!
//! Linear subresource indices follow the Direct3D 12 convention, see [`calc_subresource`].
//!
//! ```
//! use rhi_subresource::{
//!     format::Format,
//!     view::{ResourceShape, ShaderResourceViewDesc, ShaderResourceViewDimension},
//!     ViewSubresourceSubset,
//! };
//!
//! let shape = ResourceShape::new(4, 6, 1);
//! let desc = ShaderResourceViewDesc {
//!     format: Format::R8G8B8A8_UNORM,
//!     dimension: ShaderResourceViewDimension::Texture2DArray {
//!         most_detailed_mip: 1,
//!         mip_levels: 2,
//!         first_array_slice: 2,
//!         array_size: 3,
//!         plane_slice: 0,
//!     },
//! };
//! let subset = ViewSubresourceSubset::from_srv(&desc, shape, Format::R8G8B8A8_UNORM);
//!
//! assert_eq!(subset.min_subresource(), 9);
//! assert_eq!(subset.max_subresource(), 18);
//! assert_eq!(subset.iter().collect::<Vec<_>>(), [9..11, 13..15, 17..19]);
//! ```

pub use self::subset::{
    does_not_overlap, iter::SubresourceRangeIterator, view::ViewSubresourceSubset,
    SubresourceSubset,
};
use std::{
    borrow::Cow,
    error::Error,
    fmt::{Debug, Display, Error as FmtError, Formatter},
};

#[macro_use]
mod macros;
#[macro_use]
mod tests;
pub mod format;
mod subset;
pub mod view;
pub mod view_state;

/// Passing this value as a subresource index selects every subresource of a resource.
pub const ALL_SUBRESOURCES: u32 = 0xffff_ffff;

/// Returns the linear index of the subresource at `mip_slice`, `array_slice` and `plane_slice`,
/// in a resource with `mip_levels` mip levels and `array_size` array slices.
///
/// Mip levels vary fastest, then array slices, then planes.
#[inline]
pub const fn calc_subresource(
    mip_slice: u32,
    array_slice: u32,
    plane_slice: u32,
    mip_levels: u32,
    array_size: u32,
) -> u32 {
    mip_slice + array_slice * mip_levels + plane_slice * mip_levels * array_size
}

/// A problem found while validating a view descriptor or a resource shape.
#[derive(Clone, Default)]
pub struct ValidationError {
    /// The context in which the problem exists, usually the path of the offending field.
    pub context: Cow<'static, str>,

    /// A description of the problem.
    pub problem: Cow<'static, str>,
}

impl ValidationError {
    pub(crate) fn new(
        context: impl Into<Cow<'static, str>>,
        problem: impl Into<Cow<'static, str>>,
    ) -> Box<Self> {
        Box::new(Self {
            context: context.into(),
            problem: problem.into(),
        })
    }

    pub(crate) fn add_context(
        mut self: Box<Self>,
        context: impl Into<Cow<'static, str>>,
    ) -> Box<Self> {
        let context: Cow<'static, str> = context.into();

        if self.context.is_empty() {
            self.context = context;
        } else {
            self.context = format!("{}.{}", context, self.context).into();
        }

        self
    }
}

impl Debug for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        if self.context.is_empty() {
            write!(f, "{}", self.problem)
        } else {
            write!(f, "{}: {}", self.context, self.problem)
        }
    }
}

impl Error for ValidationError {}

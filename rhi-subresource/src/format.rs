//! DXGI formats, as far as subresource addressing is concerned.
//!
//! A format is mostly used to describe the texel data of an image. For subresource tracking, the
//! only property that matters is how many *planes* a format has, and which plane a view format
//! selects when a view is created on a multi-planar resource.
//!
//! # Planar formats
//!
//! ## Depth/stencil formats
//!
//! The combined depth/stencil formats (`D24_UNORM_S8_UINT`, `D32_FLOAT_S8X24_UINT` and their
//! typeless parents) store depth and stencil in two separate planes. Plane 0 holds the depth data
//! and plane 1 holds the stencil data. Each plane is a separate set of subresources, so a view that
//! reads only the stencil data does not alias a view that writes only the depth data.
//!
//! A shader-resource view selects the plane through its format: for a `R24G8_TYPELESS` resource,
//! `R24_UNORM_X8_TYPELESS` reads the depth plane and `X24_TYPELESS_G8_UINT` reads the stencil
//! plane.
//!
//! ## Video formats
//!
//! The 4:2:0 and 4:2:2 video formats (`NV12`, `P010`, `P016`, `NV11`, `OPAQUE_420`, `P208`) store
//! luma in plane 0 and interleaved chroma in plane 1. A view with a single-component format
//! selects the luma plane, a view with a two-component format selects the chroma plane.

dxgi_enum! {
    /// A texel format.
    Format
    impl {
        /// Returns the number of planes a resource of this format has.
        ///
        /// This is 2 for the combined depth/stencil formats and the two-plane video formats, and
        /// 1 for everything else.
        pub const fn plane_count(self) -> u8 {
            match self {
                Format::R32G8X24_TYPELESS
                | Format::D32_FLOAT_S8X24_UINT
                | Format::R24G8_TYPELESS
                | Format::D24_UNORM_S8_UINT
                | Format::NV12
                | Format::P010
                | Format::P016
                | Format::OPAQUE_420
                | Format::NV11
                | Format::P208 => 2,
                _ => 1,
            }
        }

        /// Returns whether this format has more than one plane.
        #[inline]
        pub const fn is_planar(self) -> bool {
            self.plane_count() > 1
        }

        /// Returns whether a resource of this format holds depth data, and possibly stencil data.
        pub const fn is_depth_stencil(self) -> bool {
            matches!(
                self,
                Format::R32G8X24_TYPELESS
                    | Format::D32_FLOAT_S8X24_UINT
                    | Format::R24G8_TYPELESS
                    | Format::D24_UNORM_S8_UINT
                    | Format::D32_FLOAT
                    | Format::D16_UNORM
            )
        }

        /// Returns whether a resource of this format has a stencil plane.
        pub const fn has_stencil(self) -> bool {
            matches!(
                self,
                Format::R32G8X24_TYPELESS
                    | Format::D32_FLOAT_S8X24_UINT
                    | Format::R24G8_TYPELESS
                    | Format::D24_UNORM_S8_UINT
            )
        }
    }
    = DXGI_FORMAT(u32);

    UNKNOWN = 0,
    R32G32B32A32_TYPELESS = 1,
    R32G32B32A32_FLOAT = 2,
    R32G32B32A32_UINT = 3,
    R32G32B32A32_SINT = 4,
    R32G32B32_TYPELESS = 5,
    R32G32B32_FLOAT = 6,
    R32G32B32_UINT = 7,
    R32G32B32_SINT = 8,
    R16G16B16A16_TYPELESS = 9,
    R16G16B16A16_FLOAT = 10,
    R16G16B16A16_UNORM = 11,
    R16G16B16A16_UINT = 12,
    R16G16B16A16_SNORM = 13,
    R16G16B16A16_SINT = 14,
    R32G32_TYPELESS = 15,
    R32G32_FLOAT = 16,
    R32G32_UINT = 17,
    R32G32_SINT = 18,
    /// Typeless parent of the 32-bit depth, 8-bit stencil family.
    R32G8X24_TYPELESS = 19,
    D32_FLOAT_S8X24_UINT = 20,
    /// Reads the depth plane of a `R32G8X24_TYPELESS` resource.
    R32_FLOAT_X8X24_TYPELESS = 21,
    /// Reads the stencil plane of a `R32G8X24_TYPELESS` resource.
    X32_TYPELESS_G8X24_UINT = 22,
    R10G10B10A2_TYPELESS = 23,
    R10G10B10A2_UNORM = 24,
    R10G10B10A2_UINT = 25,
    R11G11B10_FLOAT = 26,
    R8G8B8A8_TYPELESS = 27,
    R8G8B8A8_UNORM = 28,
    R8G8B8A8_UNORM_SRGB = 29,
    R8G8B8A8_UINT = 30,
    R8G8B8A8_SNORM = 31,
    R8G8B8A8_SINT = 32,
    R16G16_TYPELESS = 33,
    R16G16_FLOAT = 34,
    R16G16_UNORM = 35,
    R16G16_UINT = 36,
    R16G16_SNORM = 37,
    R16G16_SINT = 38,
    R32_TYPELESS = 39,
    D32_FLOAT = 40,
    R32_FLOAT = 41,
    R32_UINT = 42,
    R32_SINT = 43,
    /// Typeless parent of the 24-bit depth, 8-bit stencil family.
    R24G8_TYPELESS = 44,
    D24_UNORM_S8_UINT = 45,
    /// Reads the depth plane of a `R24G8_TYPELESS` resource.
    R24_UNORM_X8_TYPELESS = 46,
    /// Reads the stencil plane of a `R24G8_TYPELESS` resource.
    X24_TYPELESS_G8_UINT = 47,
    R8G8_TYPELESS = 48,
    R8G8_UNORM = 49,
    R8G8_UINT = 50,
    R8G8_SNORM = 51,
    R8G8_SINT = 52,
    R16_TYPELESS = 53,
    R16_FLOAT = 54,
    D16_UNORM = 55,
    R16_UNORM = 56,
    R16_UINT = 57,
    R16_SNORM = 58,
    R16_SINT = 59,
    R8_TYPELESS = 60,
    R8_UNORM = 61,
    R8_UINT = 62,
    R8_SNORM = 63,
    R8_SINT = 64,
    A8_UNORM = 65,
    BC1_TYPELESS = 70,
    BC1_UNORM = 71,
    BC1_UNORM_SRGB = 72,
    BC2_TYPELESS = 73,
    BC2_UNORM = 74,
    BC2_UNORM_SRGB = 75,
    BC3_TYPELESS = 76,
    BC3_UNORM = 77,
    BC3_UNORM_SRGB = 78,
    BC4_TYPELESS = 79,
    BC4_UNORM = 80,
    BC4_SNORM = 81,
    BC5_TYPELESS = 82,
    BC5_UNORM = 83,
    BC5_SNORM = 84,
    B8G8R8A8_UNORM = 87,
    B8G8R8X8_UNORM = 88,
    B8G8R8A8_TYPELESS = 90,
    B8G8R8A8_UNORM_SRGB = 91,
    BC6H_TYPELESS = 94,
    BC6H_UF16 = 95,
    BC6H_SF16 = 96,
    BC7_TYPELESS = 97,
    BC7_UNORM = 98,
    BC7_UNORM_SRGB = 99,
    NV12 = 103,
    P010 = 104,
    P016 = 105,
    /// `DXGI_FORMAT_420_OPAQUE`.
    OPAQUE_420 = 106,
    NV11 = 110,
    P208 = 130,
}

/// Returns the plane of a `resource_format` resource that a view of `view_format` accesses.
///
/// Single-plane resources always return 0. For multi-planar resources, the view format selects
/// the plane; a view format that does not name a specific plane returns 0.
pub const fn plane_slice_from_view_format(resource_format: Format, view_format: Format) -> u8 {
    match resource_format {
        Format::R24G8_TYPELESS | Format::D24_UNORM_S8_UINT => match view_format {
            Format::X24_TYPELESS_G8_UINT => 1,
            _ => 0,
        },
        Format::R32G8X24_TYPELESS | Format::D32_FLOAT_S8X24_UINT => match view_format {
            Format::X32_TYPELESS_G8X24_UINT => 1,
            _ => 0,
        },
        Format::NV12 | Format::NV11 | Format::OPAQUE_420 => match view_format {
            Format::R8G8_TYPELESS
            | Format::R8G8_UNORM
            | Format::R8G8_UINT
            | Format::R8G8_SNORM
            | Format::R8G8_SINT => 1,
            _ => 0,
        },
        Format::P010 | Format::P016 | Format::P208 => match view_format {
            Format::R16G16_TYPELESS
            | Format::R16G16_FLOAT
            | Format::R16G16_UNORM
            | Format::R16G16_UINT
            | Format::R16G16_SNORM
            | Format::R16G16_SINT => 1,
            _ => 0,
        },
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::{plane_slice_from_view_format, Format};

    #[test]
    fn plane_counts() {
        assert_eq!(Format::R8G8B8A8_UNORM.plane_count(), 1);
        assert_eq!(Format::D32_FLOAT.plane_count(), 1);
        assert_eq!(Format::D16_UNORM.plane_count(), 1);
        assert_eq!(Format::R24G8_TYPELESS.plane_count(), 2);
        assert_eq!(Format::D24_UNORM_S8_UINT.plane_count(), 2);
        assert_eq!(Format::R32G8X24_TYPELESS.plane_count(), 2);
        assert_eq!(Format::NV12.plane_count(), 2);
        assert!(Format::P010.is_planar());
        assert!(!Format::BC7_UNORM.is_planar());
    }

    #[test]
    fn depth_stencil_planes() {
        assert_eq!(
            plane_slice_from_view_format(Format::R24G8_TYPELESS, Format::R24_UNORM_X8_TYPELESS),
            0
        );
        assert_eq!(
            plane_slice_from_view_format(Format::R24G8_TYPELESS, Format::X24_TYPELESS_G8_UINT),
            1
        );
        assert_eq!(
            plane_slice_from_view_format(
                Format::R32G8X24_TYPELESS,
                Format::R32_FLOAT_X8X24_TYPELESS
            ),
            0
        );
        assert_eq!(
            plane_slice_from_view_format(
                Format::D32_FLOAT_S8X24_UINT,
                Format::X32_TYPELESS_G8X24_UINT
            ),
            1
        );
    }

    #[test]
    fn video_planes() {
        assert_eq!(plane_slice_from_view_format(Format::NV12, Format::R8_UNORM), 0);
        assert_eq!(plane_slice_from_view_format(Format::NV12, Format::R8G8_UNORM), 1);
        assert_eq!(plane_slice_from_view_format(Format::P010, Format::R16_UNORM), 0);
        assert_eq!(plane_slice_from_view_format(Format::P016, Format::R16G16_UINT), 1);
    }

    #[test]
    fn single_plane_resources_use_plane_zero() {
        assert_eq!(
            plane_slice_from_view_format(Format::R8G8B8A8_TYPELESS, Format::R8G8B8A8_UNORM_SRGB),
            0
        );
        assert_eq!(
            plane_slice_from_view_format(Format::R8G8B8A8_UNORM, Format::X24_TYPELESS_G8_UINT),
            0
        );
    }

    #[test]
    fn raw_round_trip() {
        assert_eq!(u32::from(Format::D24_UNORM_S8_UINT), 45);
        assert_eq!(Format::try_from(46u32), Ok(Format::R24_UNORM_X8_TYPELESS));
        assert_eq!(Format::try_from(66u32), Err(()));
        assert_eq!(Format::try_from(106u32), Ok(Format::OPAQUE_420));
    }
}

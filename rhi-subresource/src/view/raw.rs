//! Bit-exact mirrors of the Direct3D 12 view descriptor structs.
//!
//! The API structs hold a dimension tag followed by a union of per-dimension members. Here the
//! union is stored as an array of 32-bit words; every texture member of the unions is made of
//! consecutive `UINT` (or `FLOAT`) fields, so word `n` is the `n`th field of the member selected
//! by the tag. Buffer members start with a 64-bit `FirstElement`, stored in words 0 and 1.
//!
//! Converting a raw descriptor into its typed counterpart checks the dimension tag and the
//! format, and fails with a [`RawViewDescError`] if either is not recognized.

use super::{
    DepthStencilViewDesc, DepthStencilViewDimension, DepthStencilViewFlags, RenderTargetViewDesc,
    RenderTargetViewDimension, ShaderResourceViewDesc, ShaderResourceViewDimension,
    UnorderedAccessViewDesc, UnorderedAccessViewDimension,
};
use crate::format::Format;
use bytemuck::{Pod, Zeroable};
use std::{
    error::Error,
    fmt::{Display, Error as FmtError, Formatter},
};

/// `D3D12_DEFAULT_SHADER_4_COMPONENT_MAPPING`.
pub const DEFAULT_SHADER_4_COMPONENT_MAPPING: u32 = 0x1688;

dxgi_enum! {
    /// The dimension tag of a shader-resource view.
    SrvDimension = D3D12_SRV_DIMENSION(u32);

    UNKNOWN = 0,
    BUFFER = 1,
    TEXTURE1D = 2,
    TEXTURE1DARRAY = 3,
    TEXTURE2D = 4,
    TEXTURE2DARRAY = 5,
    TEXTURE2DMS = 6,
    TEXTURE2DMSARRAY = 7,
    TEXTURE3D = 8,
    TEXTURECUBE = 9,
    TEXTURECUBEARRAY = 10,
    RAYTRACING_ACCELERATION_STRUCTURE = 11,
}

dxgi_enum! {
    /// The dimension tag of an unordered-access view.
    UavDimension = D3D12_UAV_DIMENSION(u32);

    UNKNOWN = 0,
    BUFFER = 1,
    TEXTURE1D = 2,
    TEXTURE1DARRAY = 3,
    TEXTURE2D = 4,
    TEXTURE2DARRAY = 5,
    TEXTURE3D = 8,
}

dxgi_enum! {
    /// The dimension tag of a render-target view.
    RtvDimension = D3D12_RTV_DIMENSION(u32);

    UNKNOWN = 0,
    BUFFER = 1,
    TEXTURE1D = 2,
    TEXTURE1DARRAY = 3,
    TEXTURE2D = 4,
    TEXTURE2DARRAY = 5,
    TEXTURE2DMS = 6,
    TEXTURE2DMSARRAY = 7,
    TEXTURE3D = 8,
}

dxgi_enum! {
    /// The dimension tag of a depth-stencil view.
    DsvDimension = D3D12_DSV_DIMENSION(u32);

    UNKNOWN = 0,
    TEXTURE1D = 1,
    TEXTURE1DARRAY = 2,
    TEXTURE2D = 3,
    TEXTURE2DARRAY = 4,
    TEXTURE2DMS = 5,
    TEXTURE2DMSARRAY = 6,
}

/// Mirrors `D3D12_SHADER_RESOURCE_VIEW_DESC`.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct RawShaderResourceViewDesc {
    pub format: u32,
    pub view_dimension: u32,
    pub shader_4_component_mapping: u32,
    /// Padding before the 8-byte aligned union.
    pub _padding: u32,
    pub union: [u32; 6],
}

/// Mirrors `D3D12_UNORDERED_ACCESS_VIEW_DESC`.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct RawUnorderedAccessViewDesc {
    pub format: u32,
    pub view_dimension: u32,
    pub union: [u32; 8],
}

/// Mirrors `D3D12_RENDER_TARGET_VIEW_DESC`.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct RawRenderTargetViewDesc {
    pub format: u32,
    pub view_dimension: u32,
    pub union: [u32; 4],
}

/// Mirrors `D3D12_DEPTH_STENCIL_VIEW_DESC`.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct RawDepthStencilViewDesc {
    pub format: u32,
    pub view_dimension: u32,
    pub flags: u32,
    pub union: [u32; 3],
}

/// Error that can happen when converting a raw view descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawViewDescError {
    /// The dimension tag is not a known dimension for this kind of view.
    UnknownDimension { view: &'static str, value: u32 },

    /// The format is not a known format.
    UnknownFormat { value: u32 },
}

impl Error for RawViewDescError {}

impl Display for RawViewDescError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        match *self {
            Self::UnknownDimension { view, value } => {
                write!(f, "corrupt resource type {} on {}", value, view)
            }
            Self::UnknownFormat { value } => write!(f, "unknown format {}", value),
        }
    }
}

fn format_from_raw(value: u32) -> Result<Format, RawViewDescError> {
    Format::try_from(value).map_err(|_| RawViewDescError::UnknownFormat { value })
}

impl TryFrom<&RawShaderResourceViewDesc> for ShaderResourceViewDesc {
    type Error = RawViewDescError;

    fn try_from(raw: &RawShaderResourceViewDesc) -> Result<Self, Self::Error> {
        let u = raw.union;
        let dimension = match SrvDimension::try_from(raw.view_dimension) {
            Ok(SrvDimension::BUFFER | SrvDimension::RAYTRACING_ACCELERATION_STRUCTURE) => {
                ShaderResourceViewDimension::Buffer
            }
            Ok(SrvDimension::TEXTURE1D) => ShaderResourceViewDimension::Texture1D {
                most_detailed_mip: u[0],
                mip_levels: u[1],
            },
            Ok(SrvDimension::TEXTURE1DARRAY) => ShaderResourceViewDimension::Texture1DArray {
                most_detailed_mip: u[0],
                mip_levels: u[1],
                first_array_slice: u[2],
                array_size: u[3],
            },
            Ok(SrvDimension::TEXTURE2D) => ShaderResourceViewDimension::Texture2D {
                most_detailed_mip: u[0],
                mip_levels: u[1],
                plane_slice: u[2],
            },
            Ok(SrvDimension::TEXTURE2DARRAY) => ShaderResourceViewDimension::Texture2DArray {
                most_detailed_mip: u[0],
                mip_levels: u[1],
                first_array_slice: u[2],
                array_size: u[3],
                plane_slice: u[4],
            },
            Ok(SrvDimension::TEXTURE2DMS) => ShaderResourceViewDimension::Texture2DMS,
            Ok(SrvDimension::TEXTURE2DMSARRAY) => ShaderResourceViewDimension::Texture2DMSArray {
                first_array_slice: u[0],
                array_size: u[1],
            },
            Ok(SrvDimension::TEXTURE3D) => ShaderResourceViewDimension::Texture3D {
                most_detailed_mip: u[0],
                mip_levels: u[1],
            },
            Ok(SrvDimension::TEXTURECUBE) => ShaderResourceViewDimension::TextureCube {
                most_detailed_mip: u[0],
                mip_levels: u[1],
            },
            Ok(SrvDimension::TEXTURECUBEARRAY) => ShaderResourceViewDimension::TextureCubeArray {
                most_detailed_mip: u[0],
                mip_levels: u[1],
                first_2d_array_face: u[2],
                num_cubes: u[3],
            },
            Ok(SrvDimension::UNKNOWN) | Err(()) => {
                return Err(RawViewDescError::UnknownDimension {
                    view: "shader resource view",
                    value: raw.view_dimension,
                })
            }
        };

        Ok(ShaderResourceViewDesc {
            format: format_from_raw(raw.format)?,
            dimension,
        })
    }
}

impl From<&ShaderResourceViewDesc> for RawShaderResourceViewDesc {
    fn from(desc: &ShaderResourceViewDesc) -> Self {
        let (view_dimension, union) = match desc.dimension {
            ShaderResourceViewDimension::Buffer => (SrvDimension::BUFFER, [0; 6]),
            ShaderResourceViewDimension::Texture1D {
                most_detailed_mip,
                mip_levels,
            } => (
                SrvDimension::TEXTURE1D,
                [most_detailed_mip, mip_levels, 0, 0, 0, 0],
            ),
            ShaderResourceViewDimension::Texture1DArray {
                most_detailed_mip,
                mip_levels,
                first_array_slice,
                array_size,
            } => (
                SrvDimension::TEXTURE1DARRAY,
                [most_detailed_mip, mip_levels, first_array_slice, array_size, 0, 0],
            ),
            ShaderResourceViewDimension::Texture2D {
                most_detailed_mip,
                mip_levels,
                plane_slice,
            } => (
                SrvDimension::TEXTURE2D,
                [most_detailed_mip, mip_levels, plane_slice, 0, 0, 0],
            ),
            ShaderResourceViewDimension::Texture2DArray {
                most_detailed_mip,
                mip_levels,
                first_array_slice,
                array_size,
                plane_slice,
            } => (
                SrvDimension::TEXTURE2DARRAY,
                [
                    most_detailed_mip,
                    mip_levels,
                    first_array_slice,
                    array_size,
                    plane_slice,
                    0,
                ],
            ),
            ShaderResourceViewDimension::Texture2DMS => (SrvDimension::TEXTURE2DMS, [0; 6]),
            ShaderResourceViewDimension::Texture2DMSArray {
                first_array_slice,
                array_size,
            } => (
                SrvDimension::TEXTURE2DMSARRAY,
                [first_array_slice, array_size, 0, 0, 0, 0],
            ),
            ShaderResourceViewDimension::Texture3D {
                most_detailed_mip,
                mip_levels,
            } => (
                SrvDimension::TEXTURE3D,
                [most_detailed_mip, mip_levels, 0, 0, 0, 0],
            ),
            ShaderResourceViewDimension::TextureCube {
                most_detailed_mip,
                mip_levels,
            } => (
                SrvDimension::TEXTURECUBE,
                [most_detailed_mip, mip_levels, 0, 0, 0, 0],
            ),
            ShaderResourceViewDimension::TextureCubeArray {
                most_detailed_mip,
                mip_levels,
                first_2d_array_face,
                num_cubes,
            } => (
                SrvDimension::TEXTURECUBEARRAY,
                [most_detailed_mip, mip_levels, first_2d_array_face, num_cubes, 0, 0],
            ),
        };

        RawShaderResourceViewDesc {
            format: desc.format.into(),
            view_dimension: view_dimension.into(),
            shader_4_component_mapping: DEFAULT_SHADER_4_COMPONENT_MAPPING,
            _padding: 0,
            union,
        }
    }
}

impl TryFrom<&RawUnorderedAccessViewDesc> for UnorderedAccessViewDesc {
    type Error = RawViewDescError;

    fn try_from(raw: &RawUnorderedAccessViewDesc) -> Result<Self, Self::Error> {
        let u = raw.union;
        let dimension = match UavDimension::try_from(raw.view_dimension) {
            Ok(UavDimension::BUFFER) => UnorderedAccessViewDimension::Buffer,
            Ok(UavDimension::TEXTURE1D) => {
                UnorderedAccessViewDimension::Texture1D { mip_slice: u[0] }
            }
            Ok(UavDimension::TEXTURE1DARRAY) => UnorderedAccessViewDimension::Texture1DArray {
                mip_slice: u[0],
                first_array_slice: u[1],
                array_size: u[2],
            },
            Ok(UavDimension::TEXTURE2D) => UnorderedAccessViewDimension::Texture2D {
                mip_slice: u[0],
                plane_slice: u[1],
            },
            Ok(UavDimension::TEXTURE2DARRAY) => UnorderedAccessViewDimension::Texture2DArray {
                mip_slice: u[0],
                first_array_slice: u[1],
                array_size: u[2],
                plane_slice: u[3],
            },
            Ok(UavDimension::TEXTURE3D) => UnorderedAccessViewDimension::Texture3D {
                mip_slice: u[0],
                first_w_slice: u[1],
                w_size: u[2],
            },
            Ok(UavDimension::UNKNOWN) | Err(()) => {
                return Err(RawViewDescError::UnknownDimension {
                    view: "unordered access view",
                    value: raw.view_dimension,
                })
            }
        };

        Ok(UnorderedAccessViewDesc {
            format: format_from_raw(raw.format)?,
            dimension,
        })
    }
}

impl From<&UnorderedAccessViewDesc> for RawUnorderedAccessViewDesc {
    fn from(desc: &UnorderedAccessViewDesc) -> Self {
        let (view_dimension, words) = match desc.dimension {
            UnorderedAccessViewDimension::Buffer => (UavDimension::BUFFER, [0; 4]),
            UnorderedAccessViewDimension::Texture1D { mip_slice } => {
                (UavDimension::TEXTURE1D, [mip_slice, 0, 0, 0])
            }
            UnorderedAccessViewDimension::Texture1DArray {
                mip_slice,
                first_array_slice,
                array_size,
            } => (
                UavDimension::TEXTURE1DARRAY,
                [mip_slice, first_array_slice, array_size, 0],
            ),
            UnorderedAccessViewDimension::Texture2D {
                mip_slice,
                plane_slice,
            } => (UavDimension::TEXTURE2D, [mip_slice, plane_slice, 0, 0]),
            UnorderedAccessViewDimension::Texture2DArray {
                mip_slice,
                first_array_slice,
                array_size,
                plane_slice,
            } => (
                UavDimension::TEXTURE2DARRAY,
                [mip_slice, first_array_slice, array_size, plane_slice],
            ),
            UnorderedAccessViewDimension::Texture3D {
                mip_slice,
                first_w_slice,
                w_size,
            } => (
                UavDimension::TEXTURE3D,
                [mip_slice, first_w_slice, w_size, 0],
            ),
        };

        let mut union = [0; 8];
        union[..4].copy_from_slice(&words);

        RawUnorderedAccessViewDesc {
            format: desc.format.into(),
            view_dimension: view_dimension.into(),
            union,
        }
    }
}

impl TryFrom<&RawRenderTargetViewDesc> for RenderTargetViewDesc {
    type Error = RawViewDescError;

    fn try_from(raw: &RawRenderTargetViewDesc) -> Result<Self, Self::Error> {
        let u = raw.union;
        let dimension = match RtvDimension::try_from(raw.view_dimension) {
            Ok(RtvDimension::BUFFER) => RenderTargetViewDimension::Buffer,
            Ok(RtvDimension::TEXTURE1D) => RenderTargetViewDimension::Texture1D { mip_slice: u[0] },
            Ok(RtvDimension::TEXTURE1DARRAY) => RenderTargetViewDimension::Texture1DArray {
                mip_slice: u[0],
                first_array_slice: u[1],
                array_size: u[2],
            },
            Ok(RtvDimension::TEXTURE2D) => RenderTargetViewDimension::Texture2D {
                mip_slice: u[0],
                plane_slice: u[1],
            },
            Ok(RtvDimension::TEXTURE2DARRAY) => RenderTargetViewDimension::Texture2DArray {
                mip_slice: u[0],
                first_array_slice: u[1],
                array_size: u[2],
                plane_slice: u[3],
            },
            Ok(RtvDimension::TEXTURE2DMS) => RenderTargetViewDimension::Texture2DMS,
            Ok(RtvDimension::TEXTURE2DMSARRAY) => RenderTargetViewDimension::Texture2DMSArray {
                first_array_slice: u[0],
                array_size: u[1],
            },
            Ok(RtvDimension::TEXTURE3D) => RenderTargetViewDimension::Texture3D {
                mip_slice: u[0],
                first_w_slice: u[1],
                w_size: u[2],
            },
            Ok(RtvDimension::UNKNOWN) | Err(()) => {
                return Err(RawViewDescError::UnknownDimension {
                    view: "render target view",
                    value: raw.view_dimension,
                })
            }
        };

        Ok(RenderTargetViewDesc {
            format: format_from_raw(raw.format)?,
            dimension,
        })
    }
}

impl From<&RenderTargetViewDesc> for RawRenderTargetViewDesc {
    fn from(desc: &RenderTargetViewDesc) -> Self {
        let (view_dimension, union) = match desc.dimension {
            RenderTargetViewDimension::Buffer => (RtvDimension::BUFFER, [0; 4]),
            RenderTargetViewDimension::Texture1D { mip_slice } => {
                (RtvDimension::TEXTURE1D, [mip_slice, 0, 0, 0])
            }
            RenderTargetViewDimension::Texture1DArray {
                mip_slice,
                first_array_slice,
                array_size,
            } => (
                RtvDimension::TEXTURE1DARRAY,
                [mip_slice, first_array_slice, array_size, 0],
            ),
            RenderTargetViewDimension::Texture2D {
                mip_slice,
                plane_slice,
            } => (RtvDimension::TEXTURE2D, [mip_slice, plane_slice, 0, 0]),
            RenderTargetViewDimension::Texture2DArray {
                mip_slice,
                first_array_slice,
                array_size,
                plane_slice,
            } => (
                RtvDimension::TEXTURE2DARRAY,
                [mip_slice, first_array_slice, array_size, plane_slice],
            ),
            RenderTargetViewDimension::Texture2DMS => (RtvDimension::TEXTURE2DMS, [0; 4]),
            RenderTargetViewDimension::Texture2DMSArray {
                first_array_slice,
                array_size,
            } => (
                RtvDimension::TEXTURE2DMSARRAY,
                [first_array_slice, array_size, 0, 0],
            ),
            RenderTargetViewDimension::Texture3D {
                mip_slice,
                first_w_slice,
                w_size,
            } => (
                RtvDimension::TEXTURE3D,
                [mip_slice, first_w_slice, w_size, 0],
            ),
        };

        RawRenderTargetViewDesc {
            format: desc.format.into(),
            view_dimension: view_dimension.into(),
            union,
        }
    }
}

impl TryFrom<&RawDepthStencilViewDesc> for DepthStencilViewDesc {
    type Error = RawViewDescError;

    fn try_from(raw: &RawDepthStencilViewDesc) -> Result<Self, Self::Error> {
        let u = raw.union;
        let dimension = match DsvDimension::try_from(raw.view_dimension) {
            Ok(DsvDimension::TEXTURE1D) => DepthStencilViewDimension::Texture1D { mip_slice: u[0] },
            Ok(DsvDimension::TEXTURE1DARRAY) => DepthStencilViewDimension::Texture1DArray {
                mip_slice: u[0],
                first_array_slice: u[1],
                array_size: u[2],
            },
            Ok(DsvDimension::TEXTURE2D) => DepthStencilViewDimension::Texture2D { mip_slice: u[0] },
            Ok(DsvDimension::TEXTURE2DARRAY) => DepthStencilViewDimension::Texture2DArray {
                mip_slice: u[0],
                first_array_slice: u[1],
                array_size: u[2],
            },
            Ok(DsvDimension::TEXTURE2DMS) => DepthStencilViewDimension::Texture2DMS,
            Ok(DsvDimension::TEXTURE2DMSARRAY) => DepthStencilViewDimension::Texture2DMSArray {
                first_array_slice: u[0],
                array_size: u[1],
            },
            Ok(DsvDimension::UNKNOWN) | Err(()) => {
                return Err(RawViewDescError::UnknownDimension {
                    view: "depth stencil view",
                    value: raw.view_dimension,
                })
            }
        };

        Ok(DepthStencilViewDesc {
            format: format_from_raw(raw.format)?,
            flags: DepthStencilViewFlags::from_bits_truncate(raw.flags),
            dimension,
        })
    }
}

impl From<&DepthStencilViewDesc> for RawDepthStencilViewDesc {
    fn from(desc: &DepthStencilViewDesc) -> Self {
        let (view_dimension, union) = match desc.dimension {
            DepthStencilViewDimension::Texture1D { mip_slice } => {
                (DsvDimension::TEXTURE1D, [mip_slice, 0, 0])
            }
            DepthStencilViewDimension::Texture1DArray {
                mip_slice,
                first_array_slice,
                array_size,
            } => (
                DsvDimension::TEXTURE1DARRAY,
                [mip_slice, first_array_slice, array_size],
            ),
            DepthStencilViewDimension::Texture2D { mip_slice } => {
                (DsvDimension::TEXTURE2D, [mip_slice, 0, 0])
            }
            DepthStencilViewDimension::Texture2DArray {
                mip_slice,
                first_array_slice,
                array_size,
            } => (
                DsvDimension::TEXTURE2DARRAY,
                [mip_slice, first_array_slice, array_size],
            ),
            DepthStencilViewDimension::Texture2DMS => (DsvDimension::TEXTURE2DMS, [0; 3]),
            DepthStencilViewDimension::Texture2DMSArray {
                first_array_slice,
                array_size,
            } => (
                DsvDimension::TEXTURE2DMSARRAY,
                [first_array_slice, array_size, 0],
            ),
        };

        RawDepthStencilViewDesc {
            format: desc.format.into(),
            view_dimension: view_dimension.into(),
            flags: desc.flags.bits(),
            union,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        RawDepthStencilViewDesc, RawRenderTargetViewDesc, RawShaderResourceViewDesc,
        RawUnorderedAccessViewDesc, RawViewDescError,
    };
    use crate::{
        format::Format,
        view::{
            DepthStencilViewDesc, DepthStencilViewDimension, DepthStencilViewFlags,
            RenderTargetViewDesc, RenderTargetViewDimension, ShaderResourceViewDesc,
            ShaderResourceViewDimension, UnorderedAccessViewDesc, UnorderedAccessViewDimension,
        },
    };
    use std::mem::size_of;

    #[test]
    fn layouts_match_the_api() {
        assert_eq!(size_of::<RawShaderResourceViewDesc>(), 40);
        assert_eq!(size_of::<RawUnorderedAccessViewDesc>(), 40);
        assert_eq!(size_of::<RawRenderTargetViewDesc>(), 24);
        assert_eq!(size_of::<RawDepthStencilViewDesc>(), 24);
    }

    #[test]
    fn srv_from_bytes() {
        // Texture2DArray SRV of R8G8B8A8_UNORM, as laid out in memory by the API.
        let words: [u32; 10] = [28, 5, 0x1688, 0, 1, 2, 2, 3, 0, 0];
        let raw: RawShaderResourceViewDesc = bytemuck::cast(words);
        let desc = ShaderResourceViewDesc::try_from(&raw).unwrap();

        assert_eq!(
            desc,
            ShaderResourceViewDesc {
                format: Format::R8G8B8A8_UNORM,
                dimension: ShaderResourceViewDimension::Texture2DArray {
                    most_detailed_mip: 1,
                    mip_levels: 2,
                    first_array_slice: 2,
                    array_size: 3,
                    plane_slice: 0,
                },
            }
        );
        assert_eq!(RawShaderResourceViewDesc::from(&desc), raw);
    }

    #[test]
    fn srv_acceleration_structure_is_a_buffer() {
        let raw = RawShaderResourceViewDesc {
            view_dimension: 11,
            ..bytemuck::Zeroable::zeroed()
        };
        let desc = ShaderResourceViewDesc::try_from(&raw).unwrap();
        assert_eq!(desc.dimension, ShaderResourceViewDimension::Buffer);
        assert_eq!(desc.format, Format::UNKNOWN);
    }

    #[test]
    fn unknown_dimensions() {
        let raw = RawShaderResourceViewDesc {
            view_dimension: 0,
            ..bytemuck::Zeroable::zeroed()
        };
        assert_eq!(
            ShaderResourceViewDesc::try_from(&raw),
            Err(RawViewDescError::UnknownDimension {
                view: "shader resource view",
                value: 0,
            })
        );

        let raw = RawUnorderedAccessViewDesc {
            view_dimension: 6,
            ..bytemuck::Zeroable::zeroed()
        };
        assert!(UnorderedAccessViewDesc::try_from(&raw).is_err());

        let raw = RawRenderTargetViewDesc {
            view_dimension: 42,
            ..bytemuck::Zeroable::zeroed()
        };
        let err = RenderTargetViewDesc::try_from(&raw).unwrap_err();
        assert_eq!(err.to_string(), "corrupt resource type 42 on render target view");

        let raw = RawDepthStencilViewDesc {
            view_dimension: 7,
            ..bytemuck::Zeroable::zeroed()
        };
        assert!(DepthStencilViewDesc::try_from(&raw).is_err());
    }

    #[test]
    fn unknown_format() {
        let raw = RawRenderTargetViewDesc {
            format: 0xdead,
            view_dimension: 4,
            union: [0; 4],
        };
        assert_eq!(
            RenderTargetViewDesc::try_from(&raw),
            Err(RawViewDescError::UnknownFormat { value: 0xdead })
        );
    }

    #[test]
    fn uav_and_rtv_fields() {
        let uav = UnorderedAccessViewDesc {
            format: Format::R32_FLOAT,
            dimension: UnorderedAccessViewDimension::Texture3D {
                mip_slice: 1,
                first_w_slice: 4,
                w_size: 8,
            },
        };
        let raw = RawUnorderedAccessViewDesc::from(&uav);
        assert_eq!(raw.view_dimension, 8);
        assert_eq!(&raw.union[..3], &[1, 4, 8]);
        assert_eq!(UnorderedAccessViewDesc::try_from(&raw), Ok(uav));

        let rtv = RenderTargetViewDesc {
            format: Format::B8G8R8A8_UNORM,
            dimension: RenderTargetViewDimension::Texture2DMSArray {
                first_array_slice: 3,
                array_size: 2,
            },
        };
        let raw = RawRenderTargetViewDesc::from(&rtv);
        assert_eq!(raw.view_dimension, 7);
        assert_eq!(raw.union, [3, 2, 0, 0]);
        assert_eq!(RenderTargetViewDesc::try_from(&raw), Ok(rtv));
    }

    #[test]
    fn dsv_flags_survive() {
        let dsv = DepthStencilViewDesc {
            format: Format::D32_FLOAT_S8X24_UINT,
            flags: DepthStencilViewFlags::READ_ONLY_STENCIL,
            dimension: DepthStencilViewDimension::Texture2DArray {
                mip_slice: 0,
                first_array_slice: 1,
                array_size: 1,
            },
        };
        let raw = RawDepthStencilViewDesc::from(&dsv);
        assert_eq!(raw.flags, 2);
        assert_eq!(raw.view_dimension, 4);
        assert_eq!(DepthStencilViewDesc::try_from(&raw), Ok(dsv));
    }
}

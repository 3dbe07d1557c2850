/// Texture trait and texture info

/// Color format of an offscreen buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    #[default]
    R8G8B8A8_UNORM,
    R8G8B8A8_SRGB,
    B8G8R8A8_UNORM,
    R16G16B16A16_SFLOAT,
}

impl TextureFormat {
    /// Size of one pixel in bytes
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            TextureFormat::R8G8B8A8_UNORM
            | TextureFormat::R8G8B8A8_SRGB
            | TextureFormat::B8G8R8A8_UNORM => 4,
            TextureFormat::R16G16B16A16_SFLOAT => 8,
        }
    }
}

/// Texture dimensions and format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
}

impl TextureInfo {
    /// GPU memory used by one mip level
    pub fn byte_size(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.format.bytes_per_pixel() as u64
    }
}

/// Sampled texture trait
pub trait Texture: Send + Sync {
    /// Debug label (visible in GPU debuggers)
    fn label(&self) -> &str;

    /// Dimensions and format
    fn info(&self) -> &TextureInfo;
}

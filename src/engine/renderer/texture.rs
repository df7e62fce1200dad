// Texture storage: decoded images on the CPU, plus the GPU texture the canvas is uploaded to

use image::RgbaImage;
use std::collections::HashMap;

/// Handle to a decoded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(usize);

#[cfg(test)]
impl TextureHandle {
    /// Build a handle from a raw store index
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }
}

/// Decoded RGBA images addressed by handle, with name lookup for caching
#[derive(Debug, Default)]
pub struct TextureStore {
    textures: Vec<RgbaImage>,
    name_to_handle: HashMap<String, TextureHandle>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an image under `name`, returning its handle
    pub fn insert(&mut self, name: &str, image: RgbaImage) -> TextureHandle {
        let handle = TextureHandle(self.textures.len());
        self.textures.push(image);
        self.name_to_handle.insert(name.to_string(), handle);
        handle
    }

    /// Find a previously stored texture by name
    pub fn find(&self, name: &str) -> Option<TextureHandle> {
        self.name_to_handle.get(name).copied()
    }

    pub fn get(&self, handle: TextureHandle) -> Option<&RgbaImage> {
        self.textures.get(handle.0)
    }

    /// Width and height of a texture in pixels
    pub fn dimensions(&self, handle: TextureHandle) -> Option<(u32, u32)> {
        self.get(handle).map(|image| image.dimensions())
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }
}

/// A GPU texture the CPU canvas is copied into every frame
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub width: u32,
    pub height: u32,
}

impl GpuTexture {
    /// Create an empty, writable texture of the given size
    pub fn new(device: &wgpu::Device, width: u32, height: u32, label: Option<&str>) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        // Pixel art: no filtering when the canvas is scaled up
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
            width,
            height,
        }
    }

    /// Upload an image that has exactly this texture's dimensions
    pub fn write(&self, queue: &wgpu::Queue, image: &RgbaImage) {
        let size = wgpu::Extent3d {
            width: self.width,
            height: self.height,
            depth_or_array_layers: 1,
        };

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image.as_raw(),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.width),
                rows_per_image: Some(self.height),
            },
            size,
        );
    }

    pub fn matches(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }
}

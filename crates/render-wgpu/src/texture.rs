use crate::gpu::GpuError;
use playground_assets::TextureData;

/// A sampled 2D texture resident on the GPU.
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl GpuTexture {
    /// Upload `data` as a single-mip texture. Use an sRGB `format` for colour
    /// maps and a linear one for data maps such as specular intensity.
    pub fn from_data(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &TextureData,
        format: wgpu::TextureFormat,
        label: &str,
    ) -> Result<Self, GpuError> {
        let max = device.limits().max_texture_dimension_2d;
        if data.width > max || data.height > max {
            return Err(GpuError::TextureTooLarge {
                label: label.to_string(),
                width: data.width,
                height: data.height,
                max,
            });
        }

        let size = wgpu::Extent3d {
            width: data.width,
            height: data.height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &data.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(data.bytes_per_row()),
                rows_per_image: Some(data.height),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        tracing::debug!("uploaded texture {label} ({}x{})", data.width, data.height);

        Ok(Self { texture, view })
    }
}

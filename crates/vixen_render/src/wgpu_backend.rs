//! wgpu backend
//!
//! Owns the device, queue and window surface. A frame clears the surface to
//! the scene background and then lets an optional [`SurfaceOverlay`] draw on
//! top (the control panel). Scene meshes are not rasterized here, so the
//! camera only matters to backends that draw geometry.
//!
//! The surface is configured with the window's backing-store size
//! ([`RenderTargetSize::surface_size`]), not the clamped render scale.

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use vixen_core::{Error, Result};
use vixen_scene::{Camera, Scene};

use crate::backend::{RenderBackend, SurfaceOverlay};
use crate::settings::RendererSettings;
use crate::target::RenderTargetSize;

type SurfaceSource = Box<dyn Fn() -> wgpu::SurfaceTarget<'static> + Send + Sync>;

pub struct WgpuRenderer {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,

    /// `None` between dropping a lost surface and recreating it.
    surface: Option<wgpu::Surface<'static>>,
    instance: wgpu::Instance,
    surface_source: SurfaceSource,
    settings: RendererSettings,
    size: RenderTargetSize,
}

impl WgpuRenderer {
    pub async fn new<W>(window: W, settings: &RendererSettings, size: RenderTargetSize) -> Result<Self>
    where
        W: HasWindowHandle + HasDisplayHandle + Clone + Send + Sync + 'static,
    {
        let surface_source: SurfaceSource = Box::new(move || wgpu::SurfaceTarget::from(window.clone()));

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(surface_source())
            .map_err(|e| Error::SurfaceError(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| Error::AdapterRequestFailed(e.to_string()))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("vixen device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::Performance,
                ..Default::default()
            })
            .await
            .map_err(|e| Error::DeviceCreateFailed(e.to_string()))?;

        let (width, height) = size.surface_size();
        let mut config = surface
            .get_default_config(&adapter, width.max(1), height.max(1))
            .ok_or_else(|| Error::SurfaceError("Surface not supported by adapter".to_string()))?;

        config.present_mode = if settings.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };
        surface.configure(&device, &config);

        log::info!(
            "wgpu renderer ready: {}x{} {:?}, shadows {:?}",
            config.width,
            config.height,
            config.format,
            settings.shadows.enabled.then_some(settings.shadows.kind)
        );

        Ok(Self {
            device,
            queue,
            config,
            surface: Some(surface),
            instance,
            surface_source,
            settings: settings.clone(),
            size,
        })
    }

    #[must_use]
    pub fn color_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    #[must_use]
    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    fn reconfigure(&mut self) {
        let (width, height) = self.size.surface_size();
        if let Some(surface) = &self.surface
            && width > 0
            && height > 0
        {
            self.config.width = width;
            self.config.height = height;
            surface.configure(&self.device, &self.config);
        }
    }

    /// Drops the current surface before creating a new one for the window.
    fn recreate_surface(&mut self) -> Result<()> {
        self.surface = None;
        let surface = self
            .instance
            .create_surface((self.surface_source)())
            .map_err(|e| Error::SurfaceError(e.to_string()))?;
        self.surface = Some(surface);
        self.reconfigure();
        Ok(())
    }

    /// Next surface texture, or `None` when this frame should be skipped.
    /// Returns whether the texture is suboptimal alongside it.
    fn acquire(&mut self) -> Result<Option<(wgpu::SurfaceTexture, bool)>> {
        let Some(surface) = &self.surface else {
            self.recreate_surface()?;
            return Ok(None);
        };
        let status = surface.get_current_texture();
        match surface_action(&status) {
            SurfaceAction::Present { suboptimal } => match status {
                wgpu::CurrentSurfaceTexture::Success(output) | wgpu::CurrentSurfaceTexture::Suboptimal(output) => {
                    Ok(Some((output, suboptimal)))
                }
                _ => Ok(None),
            },
            SurfaceAction::Skip => {
                log::trace!("Skipping frame: {status:?}");
                Ok(None)
            }
            SurfaceAction::Reconfigure => {
                log::debug!("Surface outdated, reconfiguring");
                self.reconfigure();
                Ok(None)
            }
            SurfaceAction::Recreate => {
                log::warn!("Surface lost, recreating");
                self.recreate_surface()?;
                Ok(None)
            }
            SurfaceAction::Fail => Err(Error::SurfaceError(
                "validation error while acquiring the surface texture".to_string(),
            )),
        }
    }

    fn clear_color(&self, scene: &Scene) -> wgpu::Color {
        let bg = scene.background;
        let fallback = self.settings.clear_color;
        let pick = |scene_value: f32, i: usize| f64::from(if bg.w > 0.0 { scene_value } else { fallback[i] });
        wgpu::Color {
            r: pick(bg.x, 0),
            g: pick(bg.y, 1),
            b: pick(bg.z, 2),
            a: pick(bg.w, 3),
        }
    }
}

/// What a frame does with one surface acquire status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SurfaceAction {
    Present { suboptimal: bool },
    Skip,
    Reconfigure,
    Recreate,
    Fail,
}

fn surface_action(status: &wgpu::CurrentSurfaceTexture) -> SurfaceAction {
    match status {
        wgpu::CurrentSurfaceTexture::Success(_) => SurfaceAction::Present { suboptimal: false },
        wgpu::CurrentSurfaceTexture::Suboptimal(_) => SurfaceAction::Present { suboptimal: true },
        wgpu::CurrentSurfaceTexture::Timeout | wgpu::CurrentSurfaceTexture::Occluded => SurfaceAction::Skip,
        wgpu::CurrentSurfaceTexture::Outdated => SurfaceAction::Reconfigure,
        wgpu::CurrentSurfaceTexture::Lost => SurfaceAction::Recreate,
        wgpu::CurrentSurfaceTexture::Validation => SurfaceAction::Fail,
    }
}

impl RenderBackend for WgpuRenderer {
    fn resize(&mut self, size: RenderTargetSize) {
        self.size = size;
        self.reconfigure();
    }

    fn size(&self) -> RenderTargetSize {
        self.size
    }

    fn render(&mut self, scene: &Scene, _camera: &Camera, overlay: Option<&mut dyn SurfaceOverlay>) -> Result<()> {
        if self.size.is_empty() {
            return Ok(());
        }

        let Some((output, suboptimal)) = self.acquire()? else {
            return Ok(());
        };
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Frame Encoder"),
        });

        {
            let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clear Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color(scene)),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        if let Some(overlay) = overlay {
            overlay.record(&self.device, &self.queue, &mut encoder, &view, self.size);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        output.present();

        // configure panics while a surface texture is alive
        if suboptimal {
            self.reconfigure();
        }
        Ok(())
    }
}

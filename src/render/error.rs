use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("request_device failed: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("create_surface failed: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

impl RenderError {
    /// The renderer cannot continue and should be dropped.
    pub fn is_fatal(&self) -> bool {
        match self {
            RenderError::Surface(e) => matches!(e, wgpu::SurfaceError::OutOfMemory),
            _ => true,
        }
    }
}

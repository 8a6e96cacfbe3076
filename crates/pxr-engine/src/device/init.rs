/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB swapchain format when available.
    pub prefer_srgb: bool,

    /// Requested present mode. Unsupported modes fall back (see
    /// `surface::choose_present_mode`).
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference; unsupported values are replaced.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,

    /// Baseline limits. Texture dimensions are raised to whatever the
    /// adapter supports when the device is requested.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency (a hint).
    pub desired_maximum_frame_latency: u32,
}

impl GpuInit {
    /// Default settings with present mode picked from a vsync flag.
    pub fn with_vsync(vsync: bool) -> Self {
        Self {
            present_mode: if vsync {
                wgpu::PresentMode::Fifo
            } else {
                wgpu::PresentMode::Immediate
            },
            ..Self::default()
        }
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

use anyhow::Result;
use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = *formats.first()?;

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        if let Some(f) = preferred.into_iter().find(|f| formats.contains(f)) {
            return Some(f);
        }
    }

    Some(first)
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Picks a supported present mode for `requested`.
///
/// Tearing modes degrade `Immediate` → `Mailbox` → `Fifo`; `Fifo` is
/// guaranteed by every backend.
pub(crate) fn choose_present_mode(
    supported: &[wgpu::PresentMode],
    requested: wgpu::PresentMode,
) -> wgpu::PresentMode {
    use wgpu::PresentMode as P;

    let chain: &[P] = match requested {
        P::Immediate => &[P::Immediate, P::Mailbox],
        P::Mailbox => &[P::Mailbox, P::Immediate],
        P::FifoRelaxed => &[P::FifoRelaxed],
        P::AutoNoVsync => &[P::Immediate, P::Mailbox],
        _ => &[],
    };

    chain
        .iter()
        .copied()
        .find(|m| supported.contains(m))
        .unwrap_or(P::Fifo)
}

/// Fails when a swapchain of `size` would exceed the device texture limit.
pub(crate) fn check_fits(size: PhysicalSize<u32>, max_dim: u32) -> Result<()> {
    anyhow::ensure!(
        size.width <= max_dim && size.height <= max_dim,
        "window of {}x{} physical pixels exceeds the device texture limit of {max_dim}",
        size.width,
        size.height
    );
    Ok(())
}

/// Shrinks each dimension to at most `max_dim`.
pub(crate) fn clamp_to_limit(size: PhysicalSize<u32>, max_dim: u32) -> PhysicalSize<u32> {
    PhysicalSize::new(size.width.min(max_dim), size.height.min(max_dim))
}

pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;

    // wgpu rejects 0x0 configurations; wait for a real size.
    if new_size.width == 0 || new_size.height == 0 {
        return;
    }

    let max_dim = device.limits().max_texture_dimension_2d;
    let clamped = clamp_to_limit(new_size, max_dim);
    if clamped != new_size {
        log::warn!(
            "resize to {}x{} exceeds texture limit {max_dim}; swapchain clamped to {}x{}",
            new_size.width,
            new_size.height,
            clamped.width,
            clamped.height
        );
    }

    config.width = clamped.width;
    config.height = clamped.height;
    surface.configure(device, config);
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        // Timeout, Other
        _ => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::PresentMode as P;
    use wgpu::TextureFormat as F;

    #[test]
    fn vsync_always_fifo() {
        assert_eq!(choose_present_mode(&[P::Fifo, P::Immediate], P::Fifo), P::Fifo);
    }

    #[test]
    fn immediate_when_supported() {
        assert_eq!(choose_present_mode(&[P::Fifo, P::Immediate], P::Immediate), P::Immediate);
    }

    #[test]
    fn immediate_falls_back_to_mailbox_then_fifo() {
        assert_eq!(choose_present_mode(&[P::Fifo, P::Mailbox], P::Immediate), P::Mailbox);
        assert_eq!(choose_present_mode(&[P::Fifo], P::Immediate), P::Fifo);
    }

    #[test]
    fn srgb_format_preferred() {
        let formats = [F::Bgra8Unorm, F::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(F::Rgba8UnormSrgb));
        assert_eq!(choose_surface_format(&formats, false), Some(F::Bgra8Unorm));
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn alpha_mode_falls_back_to_first_supported() {
        use wgpu::CompositeAlphaMode as A;
        assert_eq!(choose_alpha_mode(&[A::Opaque], Some(A::PreMultiplied)), A::Opaque);
        assert_eq!(choose_alpha_mode(&[A::Opaque, A::PreMultiplied], Some(A::PreMultiplied)), A::PreMultiplied);
        assert_eq!(choose_alpha_mode(&[], None), A::Auto);
    }

    #[test]
    fn oversize_window_is_rejected() {
        assert!(check_fits(PhysicalSize::new(2560, 1920), 8192).is_ok());
        let err = check_fits(PhysicalSize::new(2560, 1920), 2048).unwrap_err();
        assert!(err.to_string().contains("2560x1920"));
        assert!(err.to_string().contains("2048"));
    }

    #[test]
    fn resize_is_clamped_to_limit() {
        assert_eq!(clamp_to_limit(PhysicalSize::new(9000, 100), 8192), PhysicalSize::new(8192, 100));
        assert_eq!(clamp_to_limit(PhysicalSize::new(640, 480), 8192), PhysicalSize::new(640, 480));
    }
}

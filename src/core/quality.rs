// Coarse quality flags derived once at startup from a device probe.

use super::constants::{
    DESKTOP_ORB_COUNT, DESKTOP_PARTICLE_COUNT, LOW_END_CORE_THRESHOLD, LOW_END_PIXEL_RATIO,
    MAX_PIXEL_RATIO, REDUCED_MOTION_TIME_SCALE, SMALL_ORB_COUNT, SMALL_PARTICLE_COUNT,
    SMALL_SCREEN_BREAKPOINT_PX,
};

/// Raw capability readings gathered by the platform layer.
#[derive(Clone, Debug, Default)]
pub struct DeviceProbe {
    pub prefers_reduced_motion: bool,
    /// Unmasked GPU renderer string, if the browser exposes it.
    pub gpu_renderer: Option<String>,
    /// Logical core count, if known.
    pub logical_cores: Option<u32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QualityFlags {
    pub reduced_motion: bool,
    pub low_end: bool,
}

impl QualityFlags {
    pub fn detect(probe: &DeviceProbe) -> Self {
        Self {
            reduced_motion: probe.prefers_reduced_motion,
            low_end: is_low_end(probe.gpu_renderer.as_deref(), probe.logical_cores),
        }
    }

    /// Particle count for a viewport of the given CSS width.
    pub fn particle_count(&self, viewport_width: f32) -> usize {
        if self.low_end || is_small_screen(viewport_width) {
            SMALL_PARTICLE_COUNT
        } else {
            DESKTOP_PARTICLE_COUNT
        }
    }

    pub fn orb_count(&self, viewport_width: f32) -> usize {
        if is_small_screen(viewport_width) {
            SMALL_ORB_COUNT
        } else {
            DESKTOP_ORB_COUNT
        }
    }

    pub fn max_pixel_ratio(&self) -> f32 {
        if self.low_end {
            LOW_END_PIXEL_RATIO
        } else {
            MAX_PIXEL_RATIO
        }
    }

    /// Global animation speed. Reduced motion slows everything to a crawl
    /// instead of skipping, so end states are still reached.
    pub fn animation_time_scale(&self) -> f32 {
        if self.reduced_motion {
            REDUCED_MOTION_TIME_SCALE
        } else {
            1.0
        }
    }

    /// Body classes announcing the flags to the stylesheet.
    pub fn body_classes(&self) -> impl Iterator<Item = &'static str> {
        [
            self.reduced_motion.then_some("reduced-motion"),
            self.low_end.then_some("low-end-device"),
        ]
        .into_iter()
        .flatten()
    }
}

#[inline]
pub fn is_small_screen(viewport_width: f32) -> bool {
    viewport_width < SMALL_SCREEN_BREAKPOINT_PX
}

/// Best-effort heuristic: no renderer string at all, an Intel HD integrated
/// part, or a known core count below the threshold.
pub fn is_low_end(gpu_renderer: Option<&str>, logical_cores: Option<u32>) -> bool {
    let weak_gpu = match gpu_renderer {
        None => true,
        Some(r) if r.trim().is_empty() => true,
        Some(r) => r.contains("Intel") && r.contains("HD"),
    };
    let few_cores = logical_cores.is_some_and(|c| c < LOW_END_CORE_THRESHOLD);
    weak_gpu || few_cores
}

pub mod clock;
pub mod constants;
pub mod ease;
pub mod events;
pub mod input;
pub mod quality;
pub mod scene;
pub mod scroll;
pub mod timeline;
pub mod trigger;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
pub static ORBS_WGSL: &str = include_str!("../../shaders/orbs.wgsl");
pub static WAVE_WGSL: &str = include_str!("../../shaders/wave.wgsl");

// Shared scene, input and animation tuning constants.
//
// Everything here is compile-time configuration; there is no runtime config
// file. Values are expressed per 60 Hz reference frame where the motion was
// authored that way and converted to dt-based rates by the consumers.

// Frame timing
pub const REFERENCE_FPS: f32 = 60.0; // rates below are tuned per frame at this rate
pub const MAX_FRAME_DT: f32 = 0.25; // clamp after long stalls (tab switch, debugger)
pub const TIME_RATE: f32 = 0.6; // scene time units per second (0.01 per reference frame)

// Pointer smoothing
pub const POINTER_LERP: f32 = 0.05; // fraction of the remaining distance closed per frame

// Viewport / quality breakpoints
pub const SMALL_SCREEN_BREAKPOINT_PX: f32 = 768.0;
pub const DESKTOP_PARTICLE_COUNT: usize = 3000;
pub const SMALL_PARTICLE_COUNT: usize = 1500;
pub const DESKTOP_ORB_COUNT: usize = 6;
pub const SMALL_ORB_COUNT: usize = 3;
pub const MAX_PIXEL_RATIO: f32 = 2.0;
pub const LOW_END_PIXEL_RATIO: f32 = 1.0;
pub const LOW_END_CORE_THRESHOLD: u32 = 4; // fewer logical cores than this is low end
pub const REDUCED_MOTION_TIME_SCALE: f32 = 0.01;

// Palette (#6d8bff brand blue, #5affe6 accent cyan, #a855f7 purple, #f0f4ff light)
pub const PALETTE: [[f32; 3]; 4] = [
    [0.427, 0.545, 1.0],
    [0.353, 1.0, 0.902],
    [0.659, 0.333, 0.969],
    [0.941, 0.957, 1.0],
];
pub const CLEAR_COLOR: [f32; 4] = [0.016, 0.027, 0.067, 0.0]; // #040711, transparent

// Particle field
pub const PARTICLE_RADIUS_MIN: f32 = 5.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 25.0; // radius in [5, 30)
pub const PARTICLE_SIZE_MIN: f32 = 0.01;
pub const PARTICLE_SIZE_SPAN: f32 = 0.03;
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.8;
pub const PARTICLE_SPEED_MIN: f32 = 0.1;
pub const PARTICLE_SPEED_SPAN: f32 = 0.3;
pub const PARTICLE_ROTATION_PER_FRAME: f32 = 0.001; // radians about Y
pub const PARTICLE_SCROLL_FACTOR: f32 = 0.001; // scroll px -> shader scroll uniform

// Orbs
pub const ORB_RADIUS: f32 = 0.15;
pub const ORB_OPACITY: f32 = 0.15;
pub const ORB_SPAWN_EXTENT: [f32; 3] = [20.0, 10.0, 15.0]; // box centred on origin
pub const ORB_SPEED_MIN: f32 = 0.3;
pub const ORB_SPEED_SPAN: f32 = 0.5;
pub const ORB_AMPLITUDE_MIN: f32 = 1.0;
pub const ORB_AMPLITUDE_SPAN: f32 = 2.0;
pub const ORB_Y_SPEED_RATIO: f32 = 0.7;
pub const ORB_Y_AMPLITUDE_RATIO: f32 = 0.5;
pub const ORB_COLORS: [[f32; 3]; 2] = [PALETTE[0], PALETTE[1]];
pub const ORB_SEGMENTS: u32 = 16;

// Wave plane
pub const WAVE_SIZE: f32 = 40.0;
pub const WAVE_SEGMENTS: u32 = 50;
pub const WAVE_Z: f32 = -10.0;
pub const WAVE_MOUSE_SCALE: f32 = 10.0; // pointer NDC -> plane units for the ripple

// Lights
pub const AMBIENT_LIGHT: [f32; 4] = [0.427, 0.545, 1.0, 0.3]; // rgb + intensity
pub const POINT_LIGHT_COLOR: [f32; 4] = [0.353, 1.0, 0.902, 0.8];
pub const POINT_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];
pub const POINT_LIGHT_RANGE: f32 = 50.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;
pub const CAMERA_Z: f32 = 15.0;
pub const CAMERA_DRIFT: f32 = 0.02; // per frame follow factor
pub const CAMERA_PARALLAX: [f32; 2] = [2.0, 1.0]; // pointer NDC -> camera offset

// Smooth scroll
pub const WHEEL_MULTIPLIER: f32 = 0.8;
pub const SCROLL_FRICTION: f32 = 0.1; // per frame lerp toward the wheel target
pub const SCROLL_SNAP_PX: f32 = 0.5;
pub const ANCHOR_SCROLL_DURATION: f32 = 1.5;

// Resize handling
pub const RESIZE_DEBOUNCE_MS: f64 = 100.0;

// Timeline animation
pub const ENTRANCE_DELAY: f32 = 0.3;
pub const HEADER_DELAY: f32 = 0.1;
pub const HEADER_DURATION: f32 = 1.5;
pub const HEADER_OFFSET_Y: f32 = -100.0;
pub const HERO_HIDDEN_Y: f32 = 60.0;
pub const CARD_HIDDEN_Y: f32 = 80.0;
pub const CARD_HIDDEN_ROTATION_X: f32 = 15.0;
pub const GALLERY_HIDDEN_Y: f32 = 100.0;
pub const CARD_REVEAL_DURATION: f32 = 1.2;
pub const CARD_REVEAL_STAGGER: f32 = 0.1;
pub const GALLERY_REVEAL_DURATION: f32 = 1.5;
pub const PARALLAX_TRAVEL_Y: f32 = -50.0;
pub const SCRUB_LAG_SEC: f32 = 1.0;
pub const BACK_OUT_OVERSHOOT: f32 = 1.4;

// Hover micro-interactions
pub const HOVER_IN_DURATION: f32 = 0.3;
pub const TILT_OUT_DURATION: f32 = 0.5; // slower settle than the tilt itself
pub const TILT_MAX_DEG: f32 = 10.0;
pub const BUTTON_HOVER_SCALE: f32 = 1.05;

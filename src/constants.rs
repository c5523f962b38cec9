// DOM hooks and browser wiring constants.
//
// Scene and animation tuning lives in `core::constants`; this file only names
// what the page markup and the browser APIs expect.

// Canvas the background scene renders into
pub const CANVAS_ID: &str = "bg";

// Hero entrance targets
pub const SEL_HERO_BADGE: &str = ".hero-badge";
pub const SEL_HEADLINE: &str = ".headline";
pub const SEL_SUBTITLE: &str = ".subtitle";
pub const SEL_CTA_GROUP: &str = ".cta-group";
pub const SEL_HEADER: &str = "header";

// Scroll-driven targets
pub const SEL_FEATURE_CARD: &str = ".feature-card";
pub const SEL_GALLERY: &str = ".gallery";
pub const SEL_LIQUID_GLASS: &str = ".liquid-glass";

// Hover targets
pub const SEL_BUTTON: &str = ".btn";

// In-page anchors handed to the smooth scroller
pub const SEL_ANCHOR: &str = "a[href^=\"#\"]";

// Body classes
pub const CLASS_NO_WEBGL: &str = "no-webgl";

// Media query for the reduced-motion preference
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// WEBGL_debug_renderer_info
pub const DEBUG_RENDERER_EXTENSION: &str = "WEBGL_debug_renderer_info";
pub const UNMASKED_RENDERER_WEBGL: u32 = 0x9246;

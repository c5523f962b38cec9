use crate::constants::{DEBUG_RENDERER_EXTENSION, REDUCED_MOTION_QUERY, UNMASKED_RENDERER_WEBGL};
use crate::core::quality::DeviceProbe;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Read the capability signals the quality heuristic needs. Any reading the
/// browser refuses to give is reported as unknown.
pub fn probe_device(window: &web::Window, document: &web::Document) -> DeviceProbe {
    DeviceProbe {
        prefers_reduced_motion: prefers_reduced_motion(window),
        gpu_renderer: gpu_renderer(document),
        logical_cores: logical_cores(window),
    }
}

fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Unmasked renderer string from a throwaway WebGL context. The scratch canvas
/// is never attached, so the real one stays free for the renderer.
fn gpu_renderer(document: &web::Document) -> Option<String> {
    let canvas = document
        .create_element("canvas")
        .ok()?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let gl = canvas
        .get_context("webgl")
        .ok()
        .flatten()?
        .dyn_into::<web::WebGlRenderingContext>()
        .ok()?;
    gl.get_extension(DEBUG_RENDERER_EXTENSION).ok().flatten()?;
    gl.get_parameter(UNMASKED_RENDERER_WEBGL)
        .ok()?
        .as_string()
        .filter(|s| !s.trim().is_empty())
}

fn logical_cores(window: &web::Window) -> Option<u32> {
    let n = window.navigator().hardware_concurrency();
    (n.is_finite() && n >= 1.0).then_some(n as u32)
}

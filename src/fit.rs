//! Aspect-fit scaling of a block of text into a target size.

use eframe::egui::Vec2;

/// Uniform scale that makes `natural` as large as possible inside `target`
/// while keeping its aspect ratio.
///
/// Width-bound when the source is wider (relative to its height) than the
/// target, height-bound otherwise. Returns `None` when either size is
/// degenerate, e.g. for empty text.
pub fn fit_scale(natural: Vec2, target: Vec2) -> Option<f32> {
    let valid = |v: Vec2| v.x.is_finite() && v.y.is_finite() && v.x > 0.0 && v.y > 0.0;
    if !valid(natural) || !valid(target) {
        return None;
    }

    let src_aspect = natural.x / natural.y;
    let dst_aspect = target.x / target.y;

    if src_aspect > dst_aspect {
        Some(target.x / natural.x)
    } else {
        Some(target.y / natural.y)
    }
}

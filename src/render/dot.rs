use crate::picture::{Color, Picture};

/// Fills a disc of `radius` pixels centred on `(x, y)`, one scan line per row, clipped to the picture.
///
/// Returns `false` without touching the picture when the point is not finite
/// or the disc lies entirely off the canvas.
pub fn draw_dot(picture: &mut Picture, x: f64, y: f64, radius: usize, color: &Color) -> bool {
    let reach = radius as f64 + 0.5;
    if !x.is_finite() || !y.is_finite()
        || x < -reach || y < -reach
        || x > picture.xres as f64 + reach || y > picture.yres as f64 + reach
    {
        return false;
    }

    let cx = x.round() as isize;
    let cy = y.round() as isize;
    let radius = radius as isize;

    for dy in -radius..=radius {
        let half_width = ((radius * radius - dy * dy) as f64).sqrt().floor() as isize;

        for dx in -half_width..=half_width {
            picture.plot(cx + dx, cy + dy, color);
        }
    }

    true
}

//! Label line-offset math (in `em` units, applied by the rendering layer).

/// Line height used for multi-line labels.
pub const LABEL_LINE_HEIGHT: f64 = 1.0;

/// Vertical offsets for `n` stacked node-label lines, centered on the node:
/// consecutive offsets one `line_height` apart, the stack shifted so its
/// middle sits at `base_dy`. E.g. `tspan_dy(0.2, 1.0, 2) == [-0.2, 0.8]`.
pub fn tspan_dy(base_dy: f64, line_height: f64, n: usize) -> Vec<f64> {
    let lower = if n % 2 != 0 {
        base_dy - (n / 2) as f64 * line_height
    } else {
        -(base_dy + (n as f64 / 2.0 - 1.0) * line_height)
    };
    (0..n).map(|i| lower + i as f64 * line_height).collect()
}

/// Vertical offsets for `n` wrapped edge-label lines, alternating above and
/// below the path: `edge_label_dy(-0.2, 1.0, 4) == [-0.2, 0.8, -1.2, 1.8]`.
/// Callers sort ascending before assigning lines top to bottom.
pub fn edge_label_dy(base_dy: f64, line_height: f64, n: usize) -> Vec<f64> {
    let up = base_dy;
    let down = line_height + base_dy;
    (0..n)
        .map(|i| {
            if i % 2 == 0 {
                -((i / 2) as f64 * line_height + up.abs())
            } else {
                (i / 2) as f64 * line_height + down
            }
        })
        .collect()
}

//! Plain geometry for the canvas charts, kept apart from plotters so it can be tested.

/// Angular extent of one donut slice, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSlice {
    pub index: usize,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl DonutSlice {
    pub fn sweep_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }
}

/// Split a full circle between `values`, leaving `padding_deg` of gap after each
/// slice. Starts at 0° (3 o'clock) and runs counter-clockwise. Non-positive values
/// get no slice.
pub fn donut_slices(values: &[f64], padding_deg: f64) -> Vec<DonutSlice> {
    let visible: Vec<(usize, f64)> = values
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, value)| *value > 0.0)
        .collect();
    let total: f64 = visible.iter().map(|(_, value)| value).sum();
    if visible.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    let padding = if visible.len() > 1 { padding_deg } else { 0.0 };
    let available = (360.0 - padding * visible.len() as f64).max(0.0);

    let mut cursor = 0.0;
    visible
        .into_iter()
        .map(|(index, value)| {
            let sweep = value / total * available;
            let slice = DonutSlice {
                index,
                start_deg: cursor,
                end_deg: cursor + sweep,
            };
            cursor += sweep + padding;
            slice
        })
        .collect()
}

/// Outline of a ring segment in canvas pixels (y grows downwards): outer arc
/// from start to end, then the inner arc back.
pub fn ring_segment(
    center: (i32, i32),
    inner_radius: f64,
    outer_radius: f64,
    slice: &DonutSlice,
) -> Vec<(i32, i32)> {
    let steps = (slice.sweep_deg().abs().ceil() as usize).max(1);
    let point = |radius: f64, deg: f64| {
        let rad = deg.to_radians();
        (
            center.0 + (radius * rad.cos()).round() as i32,
            center.1 - (radius * rad.sin()).round() as i32,
        )
    };
    let at = |i: usize| slice.start_deg + slice.sweep_deg() * i as f64 / steps as f64;

    let mut outline: Vec<(i32, i32)> = (0..=steps).map(|i| point(outer_radius, at(i))).collect();
    outline.extend((0..=steps).rev().map(|i| point(inner_radius, at(i))));
    outline
}

/// Top of the y axis: the smallest multiple of `step` at or above `max`
pub fn axis_ceiling(max: f64, step: f64) -> f64 {
    if max <= 0.0 || step <= 0.0 {
        return step.max(1.0);
    }
    (max / step).ceil() * step
}

/// Grid values from zero up to `ceiling` inclusive, `step` apart
pub fn axis_ticks(ceiling: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 {
        return vec![0.0];
    }
    let count = (ceiling / step).round().max(0.0) as usize;
    (0..=count).map(|k| k as f64 * step).collect()
}

/// Map a pointer offset in CSS pixels onto the canvas' own pixel grid, which
/// differs when the canvas is stretched by its stylesheet.
pub fn to_canvas_px(offset: i32, client_size: i32, canvas_size: u32) -> i32 {
    if client_size <= 0 {
        return offset;
    }
    (f64::from(offset) * f64::from(canvas_size) / f64::from(client_size)).round() as i32
}

/// Index of the entry in `xs` closest to `x`. Pointers further than half the
/// spacing between neighbours beyond either end get `None`.
pub fn nearest_index(xs: &[i32], x: i32) -> Option<usize> {
    let (first, last) = (*xs.first()?, *xs.last()?);
    let reach = if xs.len() > 1 {
        (last - first).abs() / (xs.len() as i32 - 1) / 2
    } else {
        0
    };
    if x < first.min(last) - reach || x > first.max(last) + reach {
        return None;
    }
    xs.iter()
        .enumerate()
        .min_by_key(|(_, px)| (**px - x).abs())
        .map(|(i, _)| i)
}

/// Angle of `point` around `center` in canvas pixels, in [0, 360), measured
/// counter-clockwise from 3 o'clock like [`donut_slices`].
pub fn angle_deg(center: (i32, i32), point: (i32, i32)) -> f64 {
    let dx = f64::from(point.0 - center.0);
    let dy = f64::from(center.1 - point.1);
    dy.atan2(dx).to_degrees().rem_euclid(360.0)
}

/// Category index of the slice under `point`. `None` in the hole, outside the
/// ring, or over the padding between slices.
pub fn slice_at(
    slices: &[DonutSlice],
    center: (i32, i32),
    inner_radius: f64,
    outer_radius: f64,
    point: (i32, i32),
) -> Option<usize> {
    let dx = f64::from(point.0 - center.0);
    let dy = f64::from(point.1 - center.1);
    let radius = dx.hypot(dy);
    if radius < inner_radius || radius > outer_radius {
        return None;
    }
    let angle = angle_deg(center, point);
    slices
        .iter()
        .find(|slice| angle >= slice.start_deg && angle <= slice.end_deg)
        .map(|slice| slice.index)
}

/// Dashes of `dash` pixels separated by `gap` pixels along a straight line.
/// The last dash is cut short at `to`.
pub fn dashed_segments(
    from: (i32, i32),
    to: (i32, i32),
    dash: f64,
    gap: f64,
) -> Vec<[(i32, i32); 2]> {
    let (dx, dy) = (f64::from(to.0 - from.0), f64::from(to.1 - from.1));
    let length = dx.hypot(dy);
    if length == 0.0 || dash <= 0.0 {
        return Vec::new();
    }
    let at = |distance: f64| {
        let t = distance / length;
        (
            from.0 + (dx * t).round() as i32,
            from.1 + (dy * t).round() as i32,
        )
    };

    let mut dashes = Vec::new();
    let mut start = 0.0;
    while start < length {
        let end = (start + dash).min(length);
        dashes.push([at(start), at(end)]);
        start = end + gap.max(0.0);
    }
    dashes
}

/// Monotone cubic curve through `points` (x strictly increasing), sampled
/// `samples_per_segment` times between neighbours. The curve never overshoots
/// the values of the two points it connects.
pub fn monotone_curve(points: &[(f64, f64)], samples_per_segment: usize) -> Vec<(f64, f64)> {
    if points.len() < 3 || samples_per_segment < 2 {
        return points.to_vec();
    }
    let n = points.len();
    let secants: Vec<f64> = points
        .windows(2)
        .map(|w| (w[1].1 - w[0].1) / (w[1].0 - w[0].0))
        .collect();

    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        let (s0, s1) = (secants[i - 1], secants[i]);
        let (h0, h1) = (points[i].0 - points[i - 1].0, points[i + 1].0 - points[i].0);
        let blended = (s0 * h1 + s1 * h0) / (h0 + h1);
        tangents[i] =
            (s0.signum() + s1.signum()) * s0.abs().min(s1.abs()).min(0.5 * blended.abs());
    }
    tangents[0] = (3.0 * secants[0] - tangents[1]) / 2.0;
    tangents[n - 1] = (3.0 * secants[n - 2] - tangents[n - 2]) / 2.0;

    let mut curve = Vec::with_capacity((n - 1) * samples_per_segment + 1);
    for i in 0..n - 1 {
        let ((x0, y0), (x1, y1)) = (points[i], points[i + 1]);
        let h = x1 - x0;
        for k in 0..samples_per_segment {
            let t = k as f64 / samples_per_segment as f64;
            let (t2, t3) = (t * t, t * t * t);
            let y = (2.0 * t3 - 3.0 * t2 + 1.0) * y0
                + (t3 - 2.0 * t2 + t) * h * tangents[i]
                + (-2.0 * t3 + 3.0 * t2) * y1
                + (t3 - t2) * h * tangents[i + 1];
            curve.push((x0 + h * t, y));
        }
    }
    curve.push(points[n - 1]);
    curve
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_slices_share_circle_with_padding() {
        let slices = donut_slices(&[2800.0, 1200.0, 1800.0, 800.0, 1500.0, 600.0], 5.0);
        assert_eq!(slices.len(), 6);

        let swept: f64 = slices.iter().map(|s| s.sweep_deg()).sum();
        assert!((swept - 330.0).abs() < 1e-9);

        // Food & Dining is 2800 / 8700 of the available arc
        assert!((slices[0].sweep_deg() - 2800.0 / 8700.0 * 330.0).abs() < 1e-9);
        assert!((slices[1].start_deg - (slices[0].end_deg + 5.0)).abs() < 1e-9);
    }

    #[wasm_bindgen_test]
    fn test_slices_skip_empty_values() {
        let slices = donut_slices(&[0.0, 10.0, -3.0], 5.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].index, 1);
        assert_eq!(slices[0].sweep_deg(), 360.0);

        assert!(donut_slices(&[], 5.0).is_empty());
        assert!(donut_slices(&[0.0, 0.0], 5.0).is_empty());
    }

    #[wasm_bindgen_test]
    fn test_ring_segment_endpoints() {
        let slice = DonutSlice {
            index: 0,
            start_deg: 0.0,
            end_deg: 90.0,
        };
        let outline = ring_segment((150, 150), 60.0, 100.0, &slice);
        assert_eq!(outline.first().copied(), Some((250, 150)));
        assert_eq!(outline[90], (150, 50));
        assert_eq!(outline[91], (150, 90));
        assert_eq!(outline.last().copied(), Some((210, 150)));
        assert_eq!(outline.len(), 182);
    }

    #[wasm_bindgen_test]
    fn test_axis_ceiling() {
        assert_eq!(axis_ceiling(67000.0, 20000.0), 80000.0);
        assert_eq!(axis_ceiling(60000.0, 20000.0), 60000.0);
        assert_eq!(axis_ceiling(0.0, 20000.0), 20000.0);
    }

    #[wasm_bindgen_test]
    fn test_axis_ticks() {
        assert_eq!(
            axis_ticks(80000.0, 20000.0),
            vec![0.0, 20000.0, 40000.0, 60000.0, 80000.0]
        );
        assert_eq!(axis_ticks(80000.0, 0.0), vec![0.0]);
    }

    #[wasm_bindgen_test]
    fn test_pointer_scaled_to_canvas() {
        // 800px canvas squeezed to 400 CSS pixels
        assert_eq!(to_canvas_px(100, 400, 800), 200);
        assert_eq!(to_canvas_px(150, 300, 300), 150);
        // Not laid out yet
        assert_eq!(to_canvas_px(42, 0, 800), 42);
    }

    #[wasm_bindgen_test]
    fn test_nearest_month_index() {
        let xs = [85, 225, 365, 505, 645, 785];
        assert_eq!(nearest_index(&xs, 85), Some(0));
        assert_eq!(nearest_index(&xs, 150), Some(0));
        assert_eq!(nearest_index(&xs, 160), Some(1));
        assert_eq!(nearest_index(&xs, 790), Some(5));
        // Left of the plot, beyond half a step
        assert_eq!(nearest_index(&xs, 10), None);
        assert_eq!(nearest_index(&xs, 860), None);
        assert_eq!(nearest_index(&[], 100), None);
        assert_eq!(nearest_index(&[300], 300), Some(0));
    }

    #[wasm_bindgen_test]
    fn test_angle_runs_counter_clockwise() {
        let center = (150, 150);
        assert_eq!(angle_deg(center, (250, 150)), 0.0);
        assert!((angle_deg(center, (150, 50)) - 90.0).abs() < 1e-9);
        assert!((angle_deg(center, (50, 150)) - 180.0).abs() < 1e-9);
        assert!((angle_deg(center, (150, 250)) - 270.0).abs() < 1e-9);
    }

    #[wasm_bindgen_test]
    fn test_slice_under_pointer() {
        let center = (150, 150);
        let slices = donut_slices(&[2800.0, 1200.0, 1800.0, 800.0, 1500.0, 600.0], 5.0);

        // Just above 3 o'clock on the ring: first slice
        assert_eq!(slice_at(&slices, center, 60.0, 100.0, (230, 140)), Some(0));
        // 12 o'clock is still inside Food & Dining, which spans about 106°
        assert_eq!(slice_at(&slices, center, 60.0, 100.0, (150, 70)), Some(0));
        // 9 o'clock falls in the third slice (Shopping)
        let third = &slices[2];
        assert!(third.start_deg <= 180.0 && 180.0 <= third.end_deg);
        assert_eq!(slice_at(&slices, center, 60.0, 100.0, (70, 150)), Some(2));
        // Hole and outside
        assert_eq!(slice_at(&slices, center, 60.0, 100.0, (160, 150)), None);
        assert_eq!(slice_at(&slices, center, 60.0, 100.0, (290, 150)), None);
        // Padding just below 3 o'clock, after the last slice
        assert_eq!(slice_at(&slices, center, 60.0, 100.0, (230, 153)), None);
    }

    #[wasm_bindgen_test]
    fn test_dashed_segments() {
        let dashes = dashed_segments((0, 10), (10, 10), 3.0, 3.0);
        assert_eq!(dashes, vec![[(0, 10), (3, 10)], [(6, 10), (9, 10)]]);

        let vertical = dashed_segments((5, 0), (5, 8), 3.0, 3.0);
        assert_eq!(vertical.last().copied(), Some([(5, 6), (5, 8)]));

        assert!(dashed_segments((1, 1), (1, 1), 3.0, 3.0).is_empty());
    }

    #[wasm_bindgen_test]
    fn test_monotone_curve_passes_through_points_without_overshoot() {
        let points: Vec<(f64, f64)> = [45000.0, 52000.0, 48000.0, 61000.0, 55000.0, 67000.0]
            .iter()
            .enumerate()
            .map(|(i, y)| (i as f64, *y))
            .collect();
        let curve = monotone_curve(&points, 10);
        assert_eq!(curve.len(), 51);

        for (i, point) in points.iter().enumerate() {
            let sampled = curve[i * 10];
            assert!((sampled.0 - point.0).abs() < 1e-9);
            assert!((sampled.1 - point.1).abs() < 1e-6);
        }

        for (segment, pair) in points.windows(2).enumerate() {
            let low = pair[0].1.min(pair[1].1) - 1e-6;
            let high = pair[0].1.max(pair[1].1) + 1e-6;
            for sampled in &curve[segment * 10..=segment * 10 + 10] {
                assert!(
                    (low..=high).contains(&sampled.1),
                    "segment {segment} overshoots at {sampled:?}"
                );
            }
        }
    }

    #[wasm_bindgen_test]
    fn test_monotone_curve_short_input_is_unchanged() {
        let line = [(0.0, 1.0), (1.0, 3.0)];
        assert_eq!(monotone_curve(&line, 10), line.to_vec());
    }
}

//! Pixel geometry for drawing the wheel on a canvas.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use crate::constants::{
    CENTER_BUTTON_RATIO, LABEL_RADIUS_RATIO, POINTER_BASE_OFFSET_PX, POINTER_HALF_WIDTH_PX,
    POINTER_TIP_OFFSET_PX, WHEEL_MARGIN_PX,
};
use crate::geometry::{selected_index, slice_angle};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Screen-space wedge of one slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceArc {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

impl SliceArc {
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Where a slice label goes and how far to rotate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    pub position: Point,
    pub rotation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerShape {
    pub tip: Point,
    pub left: Point,
    pub right: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    pub center: Point,
    pub radius: f64,
    pub slice_count: usize,
}

impl WheelLayout {
    pub fn new(width: f64, height: f64, slice_count: usize) -> Self {
        let cx = width / 2.0;
        let cy = height / 2.0;
        Self {
            center: Point { x: cx, y: cy },
            radius: (cx.min(cy) - WHEEL_MARGIN_PX).max(0.0),
            slice_count,
        }
    }

    pub fn slice_arc(&self, index: usize, angle: f64) -> SliceArc {
        let slice = slice_angle(self.slice_count);
        SliceArc {
            index,
            start: index as f64 * slice + angle,
            end: (index + 1) as f64 * slice + angle,
        }
    }

    /// Wedges for every slice, clockwise from `angle`.
    pub fn slice_arcs(&self, angle: f64) -> Vec<SliceArc> {
        (0..self.slice_count).map(|i| self.slice_arc(i, angle)).collect()
    }

    /// Wedge under the pointer, or `None` for an empty wheel.
    pub fn highlighted_arc(&self, angle: f64) -> Option<SliceArc> {
        if self.slice_count == 0 {
            return None;
        }
        Some(self.slice_arc(selected_index(angle, self.slice_count), angle))
    }

    pub fn label_anchor(&self, arc: &SliceArc) -> LabelAnchor {
        let mid = arc.mid();
        let r = self.radius * LABEL_RADIUS_RATIO;
        LabelAnchor {
            position: Point {
                x: self.center.x + r * mid.cos(),
                y: self.center.y + r * mid.sin(),
            },
            rotation: mid + FRAC_PI_2,
        }
    }

    pub fn center_button_radius(&self) -> f64 {
        self.radius * CENTER_BUTTON_RATIO
    }

    /// Whether a point in canvas pixels falls inside the center spin button.
    pub fn hits_center_button(&self, x: f64, y: f64) -> bool {
        let dx = x - self.center.x;
        let dy = y - self.center.y;
        (dx * dx + dy * dy).sqrt() <= self.center_button_radius()
    }

    /// Triangle at 12 o'clock pointing down at the rim.
    pub fn pointer(&self) -> PointerShape {
        let Point { x: cx, y: cy } = self.center;
        let r = self.radius;
        PointerShape {
            tip: Point { x: cx, y: cy - (r + POINTER_TIP_OFFSET_PX) },
            left: Point { x: cx - POINTER_HALF_WIDTH_PX, y: cy - (r + POINTER_BASE_OFFSET_PX) },
            right: Point { x: cx + POINTER_HALF_WIDTH_PX, y: cy - (r + POINTER_BASE_OFFSET_PX) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::POINTER_ANGLE;
    use crate::geometry::{normalize_angle, target_angle};

    #[test]
    fn test_layout_from_canvas_size() {
        let layout = WheelLayout::new(500.0, 500.0, 11);
        assert_eq!(layout.center, Point { x: 250.0, y: 250.0 });
        assert_eq!(layout.radius, 200.0);
        assert_eq!(layout.center_button_radius(), 50.0);
    }

    #[test]
    fn test_arcs_tile_the_circle() {
        let layout = WheelLayout::new(400.0, 300.0, 8);
        let arcs = layout.slice_arcs(0.7);
        assert_eq!(arcs.len(), 8);
        for pair in arcs.windows(2) {
            assert!((pair[0].end - pair[1].start).abs() < 1e-12);
        }
        let span = arcs[7].end - arcs[0].start;
        assert!((span - std::f64::consts::TAU).abs() < 1e-12);
    }

    #[test]
    fn test_highlighted_arc_contains_pointer() {
        let layout = WheelLayout::new(500.0, 500.0, 11);
        for index in 0..11 {
            let angle = target_angle(index, 11, 0.3, 6);
            let arc = layout.highlighted_arc(angle).unwrap();
            assert_eq!(arc.index, index);
            let rel = normalize_angle(POINTER_ANGLE - arc.start);
            assert!(rel < arc.end - arc.start);
        }
        assert!(WheelLayout::new(10.0, 10.0, 0).highlighted_arc(0.0).is_none());
    }

    #[test]
    fn test_center_button_hit_test() {
        let layout = WheelLayout::new(500.0, 500.0, 11);
        assert!(layout.hits_center_button(250.0, 250.0));
        assert!(layout.hits_center_button(300.0, 250.0));
        assert!(!layout.hits_center_button(301.0, 250.0));
    }

    #[test]
    fn test_pointer_sits_above_rim() {
        let layout = WheelLayout::new(500.0, 500.0, 11);
        let pointer = layout.pointer();
        assert_eq!(pointer.tip, Point { x: 250.0, y: 40.0 });
        assert_eq!(pointer.left.y, pointer.right.y);
        assert!(pointer.left.y < pointer.tip.y);
        assert!(pointer.left.y >= 0.0);
    }

    #[test]
    fn test_label_anchor_radius() {
        let layout = WheelLayout::new(500.0, 500.0, 4);
        let arc = layout.slice_arc(0, -std::f64::consts::FRAC_PI_4);
        let anchor = layout.label_anchor(&arc);
        assert!((anchor.position.x - (250.0 + 140.0)).abs() < 1e-9);
        assert!((anchor.position.y - 250.0).abs() < 1e-9);
        assert!((anchor.rotation - FRAC_PI_2).abs() < 1e-12);
    }
}

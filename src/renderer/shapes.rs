//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in playfield pixels.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Filled rectangle (two triangles)
pub fn rect(r: &Rect, color: [f32; 4], out: &mut Vec<Vertex>) {
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
    out.extend_from_slice(&[
        Vertex::new(l, t, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(rt, b, color),
    ]);
}

/// Rectangle outline of the given stroke width, drawn outside `r`
pub fn rect_outline(r: &Rect, width: f32, color: [f32; 4], out: &mut Vec<Vertex>) {
    let o = r.inflate(width);
    // Top and bottom bands span the full outer width
    rect(&Rect::new(o.left(), o.top(), o.size.x, width), color, out);
    rect(&Rect::new(o.left(), r.bottom(), o.size.x, width), color, out);
    // Side bands fill the gap between them
    rect(&Rect::new(o.left(), r.top(), width, r.size.y), color, out);
    rect(&Rect::new(r.right(), r.top(), width, r.size.y), color, out);
}

/// Filled circle as a triangle fan
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32, out: &mut Vec<Vertex>) {
    let step = TAU / segments as f32;
    let point = |i: u32| {
        let theta = i as f32 * step;
        center + Vec2::new(theta.cos(), theta.sin()) * radius
    };
    out.reserve(segments as usize * 3);
    for i in 0..segments {
        let (a, b) = (point(i), point(i + 1));
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(a.x, a.y, color));
        out.push(Vertex::new(b.x, b.y, color));
    }
}

/// Shift every vertex by `offset`
pub fn translate(vertices: &mut [Vertex], offset: Vec2) {
    for v in vertices {
        v.position[0] += offset.x;
        v.position[1] += offset.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_covers_corners() {
        let mut out = Vec::new();
        rect(&Rect::new(10.0, 20.0, 30.0, 40.0), WHITE, &mut out);
        assert_eq!(out.len(), 6);
        let xs: Vec<f32> = out.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_outline_is_four_bands() {
        let mut out = Vec::new();
        rect_outline(&Rect::new(0.0, 0.0, 10.0, 10.0), 2.0, WHITE, &mut out);
        assert_eq!(out.len(), 24);
        for v in &out {
            assert!((-2.0..=12.0).contains(&v.position[0]));
            assert!((-2.0..=12.0).contains(&v.position[1]));
        }
    }

    #[test]
    fn test_circle_radius() {
        let mut out = Vec::new();
        circle(Vec2::new(5.0, 5.0), 3.0, WHITE, 16, &mut out);
        assert_eq!(out.len(), 48);
        for v in &out {
            let d = Vec2::from(v.position).distance(Vec2::new(5.0, 5.0));
            assert!(d < 3.0 + 1e-4);
        }
    }

    #[test]
    fn test_translate() {
        let mut out = vec![Vertex::new(1.0, 2.0, WHITE)];
        translate(&mut out, Vec2::new(3.0, -1.0));
        assert_eq!(out[0].position, [4.0, 1.0]);
    }
}

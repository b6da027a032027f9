//! 颜色渐变
//!
//! `ColorGradient` 是一维色带，`LinearGradient` 把色带铺在表面上的一条线段上，
//! 线段外的点取端点颜色。

use glam::{Vec2, Vec4};

/// 颜色停止点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// 位置（0-1）
    pub offset: f32,
    /// 颜色（非预乘 RGBA，0-1）
    pub color: Vec4,
}

/// 颜色渐变
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGradient {
    /// 颜色停止点（按位置排序）
    pub stops: Vec<ColorStop>,
}

impl ColorGradient {
    pub fn new() -> Self {
        Self { stops: Vec::new() }
    }

    pub fn add_stop(mut self, offset: f32, color: Vec4) -> Self {
        self.stops.push(ColorStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        });
        self.stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        self
    }

    /// 采样颜色
    pub fn sample(&self, t: f32) -> Vec4 {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Vec4::ONE,
        };

        let t = t.clamp(0.0, 1.0);
        if t <= first.offset {
            return first.color;
        }

        // 找到两个相邻的停止点
        for pair in self.stops.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if t >= a.offset && t <= b.offset {
                let span = b.offset - a.offset;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }

        last.color
    }
}

impl Default for ColorGradient {
    fn default() -> Self {
        Self::new()
            .add_stop(0.0, Vec4::new(1.0, 1.0, 1.0, 1.0))
            .add_stop(1.0, Vec4::new(1.0, 1.0, 1.0, 0.0))
    }
}

/// 线性渐变
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    /// 偏移 0 所在的点
    pub start: Vec2,
    /// 偏移 1 所在的点
    pub end: Vec2,
    /// 色带
    pub ramp: ColorGradient,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            ramp: ColorGradient::new(),
        }
    }

    pub fn add_stop(mut self, offset: f32, color: Vec4) -> Self {
        self.ramp = self.ramp.add_stop(offset, color);
        self
    }

    /// 表面上某一点的颜色
    ///
    /// 起点和终点重合时渐变什么都不画（返回全透明）。
    pub fn color_at(&self, point: Vec2) -> Vec4 {
        let axis = self.end - self.start;
        let len_sq = axis.length_squared();
        if len_sq <= f32::EPSILON {
            return Vec4::ZERO;
        }
        let t = (point - self.start).dot(axis) / len_sq;
        self.ramp.sample(t)
    }
}

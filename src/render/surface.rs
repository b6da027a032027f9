//! 绘制表面抽象
//!
//! 动画核心只通过 [`DrawSurface`] 绘制：矩形填充、圆形填充、折线描边，
//! 以及纯色或线性渐变两种画笔。表面的尺寸由宿主维护，核心每帧读取。

use super::gradient::LinearGradient;
use glam::{Vec2, Vec4};

/// 合成模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// 普通 alpha 混合
    #[default]
    SourceOver,
    /// 加色混合（canvas 的 `lighter`）
    Lighter,
}

/// 画笔
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// 纯色（非预乘 RGBA，0-1）
    Solid(Vec4),
    /// 线性渐变
    Linear(LinearGradient),
}

impl Paint {
    /// 表面上某一点的颜色
    pub fn color_at(&self, point: Vec2) -> Vec4 {
        match self {
            Self::Solid(color) => *color,
            Self::Linear(gradient) => gradient.color_at(point),
        }
    }
}

/// 由 8 位 RGB 和 alpha 组成颜色
///
/// alpha 会被钳制到 `[0, 1]`，已经衰减到负值的粒子因此不会画出负颜色。
pub fn rgb8(rgb: [u8; 3], alpha: f32) -> Vec4 {
    Vec4::new(
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
        alpha.clamp(0.0, 1.0),
    )
}

/// 二维绘制表面
pub trait DrawSurface {
    /// 宽度（像素）
    fn width(&self) -> f32;

    /// 高度（像素）
    fn height(&self) -> f32;

    /// 改变尺寸；内容被清空
    fn resize(&mut self, width: u32, height: u32);

    /// 填充轴对齐矩形
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Vec4, blend: BlendMode);

    /// 填充圆形
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Vec4, blend: BlendMode);

    /// 沿折线描边；少于两个点时不画任何东西
    fn stroke_path(&mut self, points: &[Vec2], width: f32, paint: &Paint, blend: BlendMode);

    /// 整个表面的尺寸
    fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb8_normalizes_and_clamps() {
        let color = rgb8([255, 0, 51], 1.4);
        assert!((color.x - 1.0).abs() < f32::EPSILON);
        assert!(color.y.abs() < f32::EPSILON);
        assert!((color.z - 0.2).abs() < 1e-6);
        assert!((color.w - 1.0).abs() < f32::EPSILON);

        assert_eq!(rgb8([10, 10, 10], -0.01).w, 0.0);
    }

    #[test]
    fn test_solid_paint_is_uniform() {
        let paint = Paint::Solid(Vec4::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(paint.color_at(Vec2::ZERO), paint.color_at(Vec2::splat(99.0)));
    }
}

//! 记录型绘制表面
//!
//! 不产生像素，只按顺序记录每一次绘制调用。用于检查绘制顺序和参数，
//! 也可以作为无输出运行时的表面。

use super::surface::{BlendMode, DrawSurface, Paint};
use glam::{Vec2, Vec4};

/// 一次绘制调用
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: Vec4,
        blend: BlendMode,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Vec4,
        blend: BlendMode,
    },
    StrokePath {
        points: Vec<Vec2>,
        width: f32,
        paint: Paint,
        blend: BlendMode,
    },
}

/// 记录型表面
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// 已记录的绘制调用
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width as f32
    }

    fn height(&self) -> f32 {
        self.height as f32
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Vec4, blend: BlendMode) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            color,
            blend,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Vec4, blend: BlendMode) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
            blend,
        });
    }

    fn stroke_path(&mut self, points: &[Vec2], width: f32, paint: &Paint, blend: BlendMode) {
        self.commands.push(DrawCommand::StrokePath {
            points: points.to_vec(),
            width,
            paint: paint.clone(),
            blend,
        });
    }
}

//! 软件光栅化绘制表面
//!
//! 像素以预乘 alpha 的 RGBA f32 存储在 `image::Rgba32FImage` 中。圆和描边带
//! 一个像素宽的抗锯齿边缘；同一条折线的各段先合并覆盖率（取最大值）再混合一次，
//! 这样加色混合时折线的拐点不会出现亮斑。

use super::surface::{BlendMode, DrawSurface, Paint};
use crate::core::error::{RenderError, RenderResult};
use glam::{Vec2, Vec4};
use image::{ImageBuffer, ImageFormat, Rgba, Rgba32FImage, RgbaImage};
use std::path::Path;

const OPAQUE_BLACK: Rgba<f32> = Rgba([0.0, 0.0, 0.0, 1.0]);

/// 软件光栅化表面
pub struct RasterSurface {
    pixels: Rgba32FImage,
}

impl RasterSurface {
    /// 创建一个不透明黑色的表面
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidSize { width, height });
        }
        Ok(Self {
            pixels: Rgba32FImage::from_pixel(width, height, OPAQUE_BLACK),
        })
    }

    /// 读取一个像素（预乘 RGBA）
    pub fn pixel(&self, x: u32, y: u32) -> Option<Vec4> {
        self.pixels
            .get_pixel_checked(x, y)
            .map(|p| Vec4::new(p.0[0], p.0[1], p.0[2], p.0[3]))
    }

    /// 转换为 8 位非预乘图像
    pub fn to_rgba8(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.pixels.width(), self.pixels.height(), |x, y| {
            let [r, g, b, a] = self.pixels.get_pixel(x, y).0;
            let unpremultiply = if a > 0.0 { 1.0 / a } else { 0.0 };
            let to_u8 = |c: f32| ((c * unpremultiply).clamp(0.0, 1.0) * 255.0).round() as u8;
            Rgba([to_u8(r), to_u8(g), to_u8(b), (a.clamp(0.0, 1.0) * 255.0).round() as u8])
        })
    }

    /// 写出 PNG 快照
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        self.to_rgba8()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| RenderError::Snapshot {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
    }

    fn blend_pixel(&mut self, x: u32, y: u32, color: Vec4, coverage: f32, blend: BlendMode) {
        let alpha = color.w * coverage;
        if alpha <= 0.0 {
            return;
        }
        let src = [color.x * alpha, color.y * alpha, color.z * alpha, alpha];
        let dst = &mut self.pixels.get_pixel_mut(x, y).0;
        match blend {
            BlendMode::SourceOver => {
                for i in 0..4 {
                    dst[i] = src[i] + dst[i] * (1.0 - alpha);
                }
            }
            BlendMode::Lighter => {
                for i in 0..4 {
                    dst[i] = (src[i] + dst[i]).min(1.0);
                }
            }
        }
    }

    /// 把 `[lo, hi)` 裁剪到 `[0, limit)` 的像素区间
    fn span(lo: f32, hi: f32, limit: u32) -> Option<(u32, u32)> {
        let lo = lo.floor().max(0.0);
        let hi = hi.ceil().min(limit as f32);
        if !(lo < hi) {
            return None;
        }
        Some((lo as u32, hi as u32))
    }
}

/// 点到线段的距离
fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

impl DrawSurface for RasterSurface {
    fn width(&self) -> f32 {
        self.pixels.width() as f32
    }

    fn height(&self) -> f32 {
        self.pixels.height() as f32
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.pixels = Rgba32FImage::from_pixel(width.max(1), height.max(1), OPAQUE_BLACK);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Vec4, blend: BlendMode) {
        let end = origin + size;
        let (Some((x0, x1)), Some((y0, y1))) = (
            Self::span(origin.x.round(), end.x.round(), self.pixels.width()),
            Self::span(origin.y.round(), end.y.round(), self.pixels.height()),
        ) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend_pixel(x, y, color, 1.0, blend);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Vec4, blend: BlendMode) {
        if radius <= 0.0 {
            return;
        }
        let reach = radius + 1.0;
        let (Some((x0, x1)), Some((y0, y1))) = (
            Self::span(center.x - reach, center.x + reach, self.pixels.width()),
            Self::span(center.y - reach, center.y + reach, self.pixels.height()),
        ) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let coverage = (radius + 0.5 - p.distance(center)).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_pixel(x, y, color, coverage, blend);
                }
            }
        }
    }

    fn stroke_path(&mut self, points: &[Vec2], width: f32, paint: &Paint, blend: BlendMode) {
        if points.len() < 2 || width <= 0.0 {
            return;
        }
        let half = width * 0.5;
        let reach = half + 1.0;

        let (min, max) = points
            .iter()
            .fold((Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)), |(lo, hi), p| {
                (lo.min(*p), hi.max(*p))
            });
        let (Some((bx0, bx1)), Some((by0, by1))) = (
            Self::span(min.x - reach, max.x + reach, self.pixels.width()),
            Self::span(min.y - reach, max.y + reach, self.pixels.height()),
        ) else {
            return;
        };

        let stride = (bx1 - bx0) as usize;
        let mut coverage = vec![0.0f32; stride * (by1 - by0) as usize];

        for segment in points.windows(2) {
            let (a, b) = (segment[0], segment[1]);
            let (lo, hi) = (a.min(b), a.max(b));
            let (Some((x0, x1)), Some((y0, y1))) = (
                Self::span(lo.x - reach, hi.x + reach, self.pixels.width()),
                Self::span(lo.y - reach, hi.y + reach, self.pixels.height()),
            ) else {
                continue;
            };
            for y in y0..y1 {
                for x in x0..x1 {
                    let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                    let c = (half + 0.5 - distance_to_segment(p, a, b)).clamp(0.0, 1.0);
                    let slot = &mut coverage[(y - by0) as usize * stride + (x - bx0) as usize];
                    *slot = slot.max(c);
                }
            }
        }

        for y in by0..by1 {
            for x in bx0..bx1 {
                let c = coverage[(y - by0) as usize * stride + (x - bx0) as usize];
                if c > 0.0 {
                    let color = paint.color_at(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
                    self.blend_pixel(x, y, color, c, blend);
                }
            }
        }
    }
}

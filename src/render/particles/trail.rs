use glam::Vec2;
use std::collections::VecDeque;

/// 定长轨迹，超出容量时丢弃最旧的点
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, point: Vec2) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 最旧的点
    pub fn oldest(&self) -> Option<Vec2> {
        self.points.front().copied()
    }

    /// 最新的点
    pub fn newest(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    /// 从旧到新
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }

    /// 用于描边的点列；轨迹为空时退化为 `fallback` 一个点
    pub fn path_or(&self, fallback: Vec2) -> Vec<Vec2> {
        if self.points.is_empty() {
            vec![fallback]
        } else {
            self.points.iter().copied().collect()
        }
    }
}

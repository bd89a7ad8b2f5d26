//! 按松弛器排序的优先队列
//!
//! 最优距离先出队；距离相同时按入队顺序先进先出，
//! 保证同样的输入总是得到同样的出队顺序。

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::relaxer::DistanceRelaxer;

/// 队列项，按松弛器比较距离，用于 BinaryHeap 的最大堆实现最优优先
struct Ranked<'r, R: ?Sized, T> {
    distance: f64,
    sequence: u64,
    relaxer: &'r R,
    item: T,
}

impl<R: DistanceRelaxer + ?Sized, T> Ord for Ranked<'_, R, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // 反转比较：更优的距离、更早的序号排在堆顶
        self.relaxer
            .compare(other.distance, self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<R: DistanceRelaxer + ?Sized, T> PartialOrd for Ranked<'_, R, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: DistanceRelaxer + ?Sized, T> PartialEq for Ranked<'_, R, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<R: DistanceRelaxer + ?Sized, T> Eq for Ranked<'_, R, T> {}

/// 最优优先队列
pub struct RelaxedQueue<'r, R: ?Sized, T> {
    heap: BinaryHeap<Ranked<'r, R, T>>,
    relaxer: &'r R,
    next_sequence: u64,
}

impl<'r, R: DistanceRelaxer + ?Sized, T> RelaxedQueue<'r, R, T> {
    pub fn new(relaxer: &'r R) -> Self {
        Self {
            heap: BinaryHeap::new(),
            relaxer,
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, distance: f64, item: T) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Ranked {
            distance,
            sequence,
            relaxer: self.relaxer,
            item,
        });
    }

    /// 弹出距离最优的项
    pub fn pop(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|ranked| (ranked.distance, ranked.item))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

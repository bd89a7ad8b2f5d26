//! 距离松弛策略模块
//!
//! 定义路径权重如何合并、如何比较，以及合并运算的单位元。
//! 同一次计算中，反向最短路径树与偏离候选生成必须使用同一个松弛器，
//! 否则排序结果不再保证单调。

use std::cmp::Ordering;
use std::fmt;

/// 距离松弛器
///
/// 实现必须满足：
/// - `combine` 满足结合律，`initial_distance()` 是它的单位元；
/// - 单调性：`compare(combine(x, w), x)` 永远不会返回 `Less`，
///   即沿路径追加边不会让距离变得更优。
pub trait DistanceRelaxer: fmt::Debug {
    /// 合并运算的单位元
    fn initial_distance(&self) -> f64;

    /// 比较两个距离，`Less` 表示 `a` 更优
    fn compare(&self, a: f64, b: f64) -> Ordering;

    /// 合并两段路径的权重
    fn combine(&self, a: f64, b: f64) -> f64;

    fn is_better(&self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

impl<R: DistanceRelaxer + ?Sized> DistanceRelaxer for Box<R> {
    fn initial_distance(&self) -> f64 {
        (**self).initial_distance()
    }

    fn compare(&self, a: f64, b: f64) -> Ordering {
        (**self).compare(a, b)
    }

    fn combine(&self, a: f64, b: f64) -> f64 {
        (**self).combine(a, b)
    }
}

/// 加法合并、越小越优的最短距离语义（默认）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortestDistance;

impl DistanceRelaxer for ShortestDistance {
    fn initial_distance(&self) -> f64 {
        0.0
    }

    fn compare(&self, a: f64, b: f64) -> Ordering {
        a.total_cmp(&b)
    }

    fn combine(&self, a: f64, b: f64) -> f64 {
        a + b
    }
}

/// 乘法合并、越大越优的可靠性语义
///
/// 边权重是 `[0, 1]` 区间内的成功概率，路径权重是各边概率之积。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MostReliable;

impl DistanceRelaxer for MostReliable {
    fn initial_distance(&self) -> f64 {
        1.0
    }

    fn compare(&self, a: f64, b: f64) -> Ordering {
        b.total_cmp(&a)
    }

    fn combine(&self, a: f64, b: f64) -> f64 {
        a * b
    }
}

/// 由函数对和单位元常量组成的松弛器
#[derive(Clone, Copy)]
pub struct FnRelaxer {
    initial: f64,
    compare: fn(f64, f64) -> Ordering,
    combine: fn(f64, f64) -> f64,
}

impl FnRelaxer {
    pub fn new(
        initial: f64,
        compare: fn(f64, f64) -> Ordering,
        combine: fn(f64, f64) -> f64,
    ) -> Self {
        Self {
            initial,
            compare,
            combine,
        }
    }
}

impl fmt::Debug for FnRelaxer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRelaxer")
            .field("initial", &self.initial)
            .finish_non_exhaustive()
    }
}

impl DistanceRelaxer for FnRelaxer {
    fn initial_distance(&self) -> f64 {
        self.initial
    }

    fn compare(&self, a: f64, b: f64) -> Ordering {
        (self.compare)(a, b)
    }

    fn combine(&self, a: f64, b: f64) -> f64 {
        (self.combine)(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_distance() {
        let relaxer = ShortestDistance;
        assert_eq!(relaxer.initial_distance(), 0.0);
        assert_eq!(relaxer.combine(2.0, 3.5), 5.5);
        assert!(relaxer.is_better(1.0, 2.0));
        assert_eq!(relaxer.compare(2.0, 2.0), Ordering::Equal);
        assert_eq!(relaxer.combine(relaxer.initial_distance(), 4.0), 4.0);
    }

    #[test]
    fn test_most_reliable() {
        let relaxer = MostReliable;
        assert_eq!(relaxer.combine(0.5, 0.5), 0.25);
        assert!(relaxer.is_better(0.9, 0.5));
        assert_eq!(relaxer.combine(relaxer.initial_distance(), 0.3), 0.3);
        // 追加边不会让可靠性变高
        let x = 0.8;
        assert_ne!(relaxer.compare(relaxer.combine(x, 0.7), x), Ordering::Less);
    }

    #[test]
    fn test_fn_relaxer() {
        // 瓶颈语义：路径权重为最大边权，越小越优
        let relaxer = FnRelaxer::new(0.0, |a, b| a.total_cmp(&b), f64::max);
        assert_eq!(relaxer.combine(3.0, 1.0), 3.0);
        assert!(relaxer.is_better(1.0, 3.0));
        assert_eq!(relaxer.initial_distance(), 0.0);
        assert!(format!("{:?}", relaxer).starts_with("FnRelaxer"));
    }

    #[test]
    fn test_boxed_relaxer_delegates() {
        let boxed: Box<dyn DistanceRelaxer> = Box::new(MostReliable);
        assert_eq!(boxed.initial_distance(), 1.0);
        assert!(boxed.is_better(0.9, 0.1));
        assert_eq!(boxed.combine(0.5, 0.4), 0.2);
    }
}

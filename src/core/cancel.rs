//! 协作式取消标志
//!
//! 长时间运行的算法在循环迭代之间检查该标志，收到取消请求后尽快退出，
//! 已经得到的部分结果保持可用。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 可克隆的取消标志，克隆体之间共享同一状态
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    killed: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// 请求取消
    pub fn cancel(&self) {
        self.killed.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.killed.load(Ordering::SeqCst)
    }

    /// 清除取消状态，使标志可以被下一次计算复用
    pub fn reset(&self) {
        self.killed.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let token = CancelToken::new();
        let observer = token.clone();
        assert!(!observer.is_cancelled());

        token.cancel();
        assert!(observer.is_cancelled());

        observer.reset();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn test_cancel_from_other_thread() {
        let token = CancelToken::new();
        let remote = token.clone();
        std::thread::spawn(move || remote.cancel())
            .join()
            .expect("Thread should join in test");
        assert!(token.is_cancelled());
    }
}

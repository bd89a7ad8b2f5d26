//! 服务层模块
//!
//! 包含图算法服务

pub mod algorithm;

// 重新导出常用服务
pub use algorithm::*;

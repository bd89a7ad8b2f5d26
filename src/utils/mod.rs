// 工具模块 - 仅用于导出各个子模块，不包含具体实现

// 并查集模块
pub mod disjoint_set;
pub use disjoint_set::DisjointSet;

// DOT 输出模块
pub mod dot;
pub use dot::{escape_dot, to_dot};

// 日志模块
pub mod logging;

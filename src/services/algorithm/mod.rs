//! 算法模块
//!
//! 包含图相关算法实现

pub mod bfs;
pub mod connected_components;
pub mod dfs;
pub mod dijkstra;
pub mod queue;
pub mod ranked_shortest_path;
pub mod relaxer;

// 重新导出常用算法结构体
pub use bfs::Bfs;
pub use connected_components::ConnectedComponents;
pub use dfs::Dfs;
pub use dijkstra::{Dijkstra, ShortestPathTree};
pub use queue::RelaxedQueue;
pub use ranked_shortest_path::{
    CyclicCandidatePolicy, RankedPath, RankedShortestPath, RankedShortestPathBuilder,
    SearchOutcome, SearchPhase, SearchStats,
};
pub use relaxer::{DistanceRelaxer, FnRelaxer, MostReliable, ShortestDistance};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{GraphError, GraphResult};
use crate::services::algorithm::ranked_shortest_path::{CyclicCandidatePolicy, DEFAULT_PATH_COUNT};
use crate::services::algorithm::relaxer::{DistanceRelaxer, MostReliable, ShortestDistance};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub search: SearchConfig,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    /// false 时输出到 stderr
    pub to_file: bool,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "graphkit".to_string(),
            to_file: false,
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

/// 路径搜索的默认参数
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub path_count: usize,
    pub relaxer: RelaxerKind,
    pub cyclic_policy: CyclicCandidatePolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            path_count: DEFAULT_PATH_COUNT,
            relaxer: RelaxerKind::default(),
            cyclic_policy: CyclicCandidatePolicy::default(),
        }
    }
}

/// 内置松弛器
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RelaxerKind {
    /// 权重相加，越小越好
    #[default]
    Shortest,
    /// 概率相乘，越大越好
    Reliable,
}

impl RelaxerKind {
    pub fn build(self) -> Box<dyn DistanceRelaxer> {
        match self {
            RelaxerKind::Shortest => Box::new(ShortestDistance),
            RelaxerKind::Reliable => Box::new(MostReliable),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> GraphResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> GraphResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.search.path_count <= 1 {
            return Err(GraphError::Config(format!(
                "search.path_count 必须大于 1，当前为 {}",
                self.search.path_count
            )));
        }
        if self.log.level.trim().is_empty() {
            return Err(GraphError::Config("log.level 不能为空".to_string()));
        }
        if self.log.to_file {
            if self.log.file.trim().is_empty() {
                return Err(GraphError::Config("log.file 不能为空".to_string()));
            }
            if self.log.max_file_size == 0 || self.log.max_files == 0 {
                return Err(GraphError::Config(
                    "log.max_file_size 与 log.max_files 必须大于 0".to_string(),
                ));
            }
        }
        Ok(())
    }
}

//! 图核心模块
//!
//! 定义有向图容器及其不变式维护

mod digraph;

pub use digraph::Graph;

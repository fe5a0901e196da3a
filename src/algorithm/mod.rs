//! 图算法模块

mod bfs;
mod ford;
mod schedule;
mod toposort;
mod tsp;

pub use bfs::{PathFinder, PathResult};
pub use ford::{BellmanFord, WalkOutcome};
pub use schedule::{project_schedule, Schedule};
pub use toposort::topological_sort;
pub use tsp::{nearest_neighbour_cycle, TourResult};

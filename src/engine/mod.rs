//! Route planning over a network.

pub mod planner;

pub use planner::{Route, RouteMetric, RoutePlanner};

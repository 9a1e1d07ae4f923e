//! Query composition and execution.
//!
//! [`planner`] selects and parameterizes a feed-producing call from optional
//! filter and sort criteria; [`reader`] drains the resulting feed into an
//! ordered, in-memory sequence.

pub mod planner;
pub mod reader;

pub use planner::{QueryPlan, QueryShape};
pub use reader::drain;

//! Canvas force-graph view of a [`ResumeGraph`](crate::model::ResumeGraph).

mod component;
mod render;
pub mod scale;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use types::{GraphData, GraphLink, GraphNode};

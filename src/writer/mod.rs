//! C6/C7 Graph and Metrics Writers.

pub mod graph_writer;
pub mod metrics_writer;

pub use graph_writer::GraphWriter;
pub use metrics_writer::MetricsWriter;

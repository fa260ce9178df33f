pub mod path;
pub mod path_builder;
pub mod percentage_path_builder;
pub mod plain_path_builder;
pub mod presentation_line;
pub mod smoothing;
pub mod types;

pub use path::{ChartPath, PathCommand, PathPoint};
pub use path_builder::PathBuilder;
pub use percentage_path_builder::build_percentage_geometry;
pub use plain_path_builder::build_plain_geometry;
pub use presentation_line::{LineGeometry, PresentationLine};
pub use smoothing::{SmoothingFilter, SmoothingTuning};
pub use types::{AggregationMode, ChartData, Color, LineKind, RawSeries};

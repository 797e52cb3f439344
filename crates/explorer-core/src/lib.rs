// File: crates/explorer-core/src/lib.rs
// Summary: Core library entry point; exports the data-to-pixel pipeline and the interaction state machine.

pub mod transform;
pub mod table;
pub mod accessor;
pub mod axis;
pub mod series;
pub mod domain;
pub mod scale;
pub mod types;
pub mod geometry;
pub mod downsample;
pub mod chart;
pub mod view;
pub mod format;
pub mod listener;
pub mod config;
pub mod error;

pub use transform::{safe_log, Rescale, TransformConfig};
pub use table::{FileKind, Row, Table};
pub use accessor::{make_accessor, make_inverse, Accessor, TransformHandle};
pub use axis::{Axis, AxisRole, ScaleKind};
pub use series::{Series, SeriesId, SeriesSlot, SeriesStyle};
pub use domain::{max_data, min_data, DataSet, Extent};
pub use scale::{build_scale, Scale};
pub use types::PlotGeometry;
pub use geometry::{PixelPoint, PixelRect};
pub use downsample::reduced_rows;
pub use chart::{Chart, Frame};
pub use view::{Interaction, Tool};
pub use listener::ChartListener;
pub use config::ExplorerConfig;
pub use error::{GuardError, TableError};

use serde::{Deserialize, Serialize};

use crate::core::{PlotPoint, ProjectionContext, Series};
use crate::error::ChartResult;

/// One connected run of defined samples.
///
/// A path with a single vertex is an isolated sample surrounded by gaps and
/// renders as a move-only segment (a dot, not a line).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePath {
    /// Category indices covered by the run, in order.
    pub first_index: usize,
    pub last_index: usize,
    pub points: Vec<PlotPoint>,
}

impl LinePath {
    #[must_use]
    pub fn is_isolated(&self) -> bool {
        self.points.len() == 1
    }
}

/// Projects a series into gap-aware polylines.
///
/// A missing value ends the current path; no segment ever bridges a gap.
pub fn project_line_paths(series: &Series, ctx: &ProjectionContext) -> ChartResult<Vec<LinePath>> {
    let Some(indices) = ctx.render_indices() else {
        return Ok(Vec::new());
    };

    let mut paths = Vec::new();
    let mut current: Option<LinePath> = None;
    for index in indices {
        match series.value_at(index) {
            Some(value) => {
                let point = ctx.point(index, value)?;
                match current.as_mut() {
                    Some(path) => {
                        path.points.push(point);
                        path.last_index = index;
                    }
                    None => {
                        current = Some(LinePath {
                            first_index: index,
                            last_index: index,
                            points: vec![point],
                        });
                    }
                }
            }
            None => paths.extend(current.take()),
        }
    }
    paths.extend(current);

    Ok(paths)
}

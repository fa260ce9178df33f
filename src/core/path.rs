use serde::{Deserialize, Serialize};

/// Vertex in sample-index space: `x` is the sample index, `y` the
/// baseline-shifted value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl PathPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(PathPoint),
    LineTo(PathPoint),
    Close,
}

/// Deterministic path geometry handed to the rendering layer.
///
/// Open paths are polylines through the series. Closed paths are filled
/// polygons that start and end on the zero baseline and finish with an
/// explicit `Close`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartPath {
    commands: Vec<PathCommand>,
}

impl ChartPath {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Polyline through `points` in order.
    #[must_use]
    pub fn polyline(points: impl IntoIterator<Item = PathPoint>) -> Self {
        let mut commands: Vec<PathCommand> = Vec::new();
        for point in points {
            if commands.is_empty() {
                commands.push(PathCommand::MoveTo(point));
            } else {
                commands.push(PathCommand::LineTo(point));
            }
        }
        Self { commands }
    }

    /// Filled polygon: `(first.x, 0)`, the `points`, `(end_x, 0)`, close.
    ///
    /// `end_x` is where the fill returns to the baseline; series paths pass
    /// the sample count so the band spans the full last sample.
    #[must_use]
    pub fn filled(points: impl IntoIterator<Item = PathPoint>, end_x: f64) -> Self {
        let points: Vec<PathPoint> = points.into_iter().collect();
        let Some(first) = points.first().copied() else {
            return Self::empty();
        };

        let mut commands = Vec::with_capacity(points.len() + 3);
        commands.push(PathCommand::MoveTo(PathPoint::new(first.x, 0.0)));
        commands.extend(points.into_iter().map(PathCommand::LineTo));
        commands.push(PathCommand::LineTo(PathPoint::new(end_x, 0.0)));
        commands.push(PathCommand::Close);
        Self { commands }
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Vertices in drawing order, without the closing command.
    pub fn points(&self) -> impl Iterator<Item = PathPoint> + '_ {
        self.commands.iter().filter_map(|command| match command {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => Some(*point),
            PathCommand::Close => None,
        })
    }

    /// Same path with every `y` multiplied by `factor`.
    #[must_use]
    pub fn scaled_y(&self, factor: f64) -> Self {
        let scale = |point: PathPoint| PathPoint::new(point.x, point.y * factor);
        let commands = self
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::MoveTo(point) => PathCommand::MoveTo(scale(point)),
                PathCommand::LineTo(point) => PathCommand::LineTo(scale(point)),
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Self { commands }
    }
}

//! Pushes hourly series into chart widgets.

use crate::series::{HourlySeries, SeriesKind};

/// A single-dataset line chart owned by the view.
pub trait ChartSurface {
    /// Replace the label sequence and the dataset values wholesale.
    fn replace_data(&mut self, labels: &[String], values: &[Option<f64>]);

    /// Ask the widget to redraw with its current data.
    fn redraw(&mut self);
}

/// Replace a chart's data and redraw it. Lengths are not checked here; an
/// `HourlySeries` is aligned by construction.
pub fn present<C: ChartSurface>(chart: &mut C, labels: &[String], values: &[Option<f64>]) {
    chart.replace_data(labels, values);
    chart.redraw();
}

/// The height, direction and period charts. Updated in place, never recreated.
pub struct ForecastCharts<C> {
    pub height: C,
    pub direction: C,
    pub period: C,
}

impl<C: ChartSurface> ForecastCharts<C> {
    pub fn new(height: C, direction: C, period: C) -> Self {
        ForecastCharts {
            height,
            direction,
            period,
        }
    }

    pub fn chart_mut(&mut self, kind: SeriesKind) -> &mut C {
        match kind {
            SeriesKind::Height => &mut self.height,
            SeriesKind::Direction => &mut self.direction,
            SeriesKind::Period => &mut self.period,
        }
    }

    /// Update all three charts once from the same series.
    pub fn update(&mut self, series: &HourlySeries) {
        for kind in SeriesKind::ALL {
            present(self.chart_mut(kind), series.times(), series.values(kind));
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::ChartSurface;

    /// In-memory chart that records what it was given.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct RecordingChart {
        pub labels: Vec<String>,
        pub values: Vec<Option<f64>>,
        pub redraws: usize,
    }

    impl ChartSurface for RecordingChart {
        fn replace_data(&mut self, labels: &[String], values: &[Option<f64>]) {
            self.labels = labels.to_vec();
            self.values = values.to_vec();
        }

        fn redraw(&mut self) {
            self.redraws += 1;
        }
    }
}

//! Fans a settled forecast request out to the readout, map and charts.
//!
//! Every click takes a [`RequestTicket`]. Only the most recent ticket may
//! settle into the view; a response that arrives after a newer click is
//! dropped so the display always matches the last clicked point.

use log::{error, info, warn};

use crate::controller::{MapController, MapSurface};
use crate::coordinate::Coordinate;
use crate::error::{ForecastError, Result};
use crate::presenter::{ChartSurface, ForecastCharts};
use crate::reading::CurrentReadout;
use crate::response::{Forecast, ForecastOutcome};
use crate::safety::{SafetyAssessment, SafetyThresholds};

/// Text regions of the page: coordinate readout, readings table, safety
/// narrative and user notices.
pub trait ReadoutSurface {
    /// A request for `at` is in flight.
    fn show_pending(&mut self, at: &Coordinate);

    /// Coordinate readout and readings table for a successful response.
    fn show_current(&mut self, at: &Coordinate, readout: &CurrentReadout);

    fn show_assessment(&mut self, assessment: &SafetyAssessment);

    /// Blocking notice for a no-data result.
    fn show_notice(&mut self, message: &str);

    /// Transport or decoding failure. Nothing else on the page changes.
    fn show_failure(&mut self, error: &ForecastError);

    /// Remove a failure shown for an earlier request.
    fn clear_failure(&mut self);
}

/// Identifies one request from click to settlement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestTicket {
    sequence: u64,
    coordinate: Coordinate,
}

impl RequestTicket {
    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// What `settle` did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    NoData,
    Failed,
    /// A newer request was issued; the response was dropped.
    Superseded,
}

/// The page's widget state: map controller, the three charts and the readout.
pub struct ForecastView<M: MapSurface, C: ChartSurface, R: ReadoutSurface> {
    pub controller: MapController<M>,
    pub charts: ForecastCharts<C>,
    pub readout: R,
    thresholds: SafetyThresholds,
    latest: u64,
}

impl<M: MapSurface, C: ChartSurface, R: ReadoutSurface> ForecastView<M, C, R> {
    pub fn new(map: M, charts: ForecastCharts<C>, readout: R) -> Self {
        ForecastView::with_thresholds(map, charts, readout, SafetyThresholds::default())
    }

    pub fn with_thresholds(
        map: M,
        charts: ForecastCharts<C>,
        readout: R,
        thresholds: SafetyThresholds,
    ) -> Self {
        ForecastView {
            controller: MapController::new(map),
            charts,
            readout,
            thresholds,
            latest: 0,
        }
    }

    pub fn thresholds(&self) -> &SafetyThresholds {
        &self.thresholds
    }

    /// Handle a map click: capture the coordinate and open a request for it.
    pub fn click(&mut self, latitude: f64, longitude: f64) -> Result<RequestTicket> {
        let coordinate = self.controller.on_click(latitude, longitude)?;
        Ok(self.begin(coordinate))
    }

    /// Open a request for `coordinate`, superseding any in flight.
    pub fn begin(&mut self, coordinate: Coordinate) -> RequestTicket {
        self.latest += 1;
        info!("Requesting wind-wave data for {} (#{})", coordinate, self.latest);
        self.readout.show_pending(&coordinate);
        RequestTicket {
            sequence: self.latest,
            coordinate,
        }
    }

    pub fn is_latest(&self, ticket: &RequestTicket) -> bool {
        ticket.sequence == self.latest
    }

    /// Apply the result of a request if it is still the latest one.
    pub fn settle(
        &mut self,
        ticket: RequestTicket,
        result: Result<ForecastOutcome>,
    ) -> Settlement {
        if !self.is_latest(&ticket) {
            info!(
                "Dropping response #{} for {}: superseded by #{}",
                ticket.sequence, ticket.coordinate, self.latest
            );
            return Settlement::Superseded;
        }

        match result {
            Ok(ForecastOutcome::Data(forecast)) => {
                self.readout.clear_failure();
                self.apply(&ticket.coordinate, &forecast);
                info!(
                    "Applied {} hourly entries for {}",
                    forecast.hourly.len(),
                    ticket.coordinate
                );
                Settlement::Applied
            }
            Ok(outcome @ ForecastOutcome::NoData { .. }) => {
                let notice = outcome.notice().unwrap_or_default();
                warn!("No data for {}: {}", ticket.coordinate, notice);
                self.readout.clear_failure();
                self.readout.show_notice(notice);
                Settlement::NoData
            }
            Err(e) => {
                error!("Request for {} failed: {}", ticket.coordinate, e);
                self.readout.show_failure(&e);
                Settlement::Failed
            }
        }
    }

    // Order: table, marker, charts, analysis.
    fn apply(&mut self, at: &Coordinate, forecast: &Forecast) {
        self.readout.show_current(at, &forecast.current.to_readout());
        self.controller.place_marker(at);
        self.charts.update(&forecast.hourly);
        let assessment = SafetyAssessment::for_reading(&forecast.current, &self.thresholds);
        self.readout.show_assessment(&assessment);
    }
}

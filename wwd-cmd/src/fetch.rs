//! `fetch`: query the server for one coordinate and print what the map page
//! would show.

use anyhow::Context;
use log::info;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use wwd_core::client::ForecastClient;
use wwd_core::controller::MapSurface;
use wwd_core::coordinate::Coordinate;
use wwd_core::error::{ForecastError, Result};
use wwd_core::orchestrator::{ForecastView, ReadoutSurface, Settlement};
use wwd_core::presenter::{ChartSurface, ForecastCharts};
use wwd_core::reading::CurrentReadout;
use wwd_core::response::ForecastOutcome;
use wwd_core::safety::SafetyAssessment;
use wwd_core::series::{HourlySeries, SeriesKind, TIME_FORMAT};

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Lines printed by the terminal surfaces, in the order they were produced.
type Report = Rc<RefCell<Vec<String>>>;

struct TerminalMap {
    report: Report,
}

impl MapSurface for TerminalMap {
    type Marker = ();

    fn place_marker(&mut self, _at: &Coordinate, popup: &str) {
        let mut report = self.report.borrow_mut();
        report.push("Marker:".to_string());
        for line in popup.split("<br>") {
            report.push(format!("  {}", line));
        }
    }

    fn release_marker(&mut self, _marker: ()) {}
}

/// Summarises a series instead of drawing it.
struct TerminalChart {
    kind: SeriesKind,
    report: Report,
    summary: HourlySeries,
}

impl ChartSurface for TerminalChart {
    fn replace_data(&mut self, labels: &[String], values: &[Option<f64>]) {
        let values = Some(values.to_vec());
        self.summary = match self.kind {
            SeriesKind::Height => HourlySeries::new(labels.to_vec(), values, None, None),
            SeriesKind::Direction => HourlySeries::new(labels.to_vec(), None, values, None),
            SeriesKind::Period => HourlySeries::new(labels.to_vec(), None, None, values),
        };
    }

    fn redraw(&mut self) {
        let line = match self.summary.range(self.kind) {
            Some((lo, hi)) => format!(
                "{}: {} points, min {} {unit}, max {} {unit}",
                self.kind.label(),
                self.summary.len(),
                lo,
                hi,
                unit = self.kind.unit()
            ),
            None => format!("{}: {} points, no data", self.kind.label(), self.summary.len()),
        };
        self.report.borrow_mut().push(line);
    }
}

struct TerminalReadout {
    report: Report,
    failure: Option<ForecastError>,
}

impl ReadoutSurface for TerminalReadout {
    fn show_pending(&mut self, at: &Coordinate) {
        info!("Fetching wind-wave data for {}", at);
    }

    fn show_current(&mut self, at: &Coordinate, readout: &CurrentReadout) {
        let mut report = self.report.borrow_mut();
        report.push(format!("Latitude: {}", at.latitude_str()));
        report.push(format!("Longitude: {}", at.longitude_str()));
        if let Some(time) = &readout.time {
            report.push(format!("Time: {}", time));
        }
        report.push(format!("Wind Wave Height (m): {}", readout.height));
        report.push(format!("Wind Wave Direction (deg): {}", readout.direction));
        report.push(format!("Wind Wave Period (s): {}", readout.period));
        report.push(format!("Peak Period (s): {}", readout.peak_period));
    }

    fn show_assessment(&mut self, assessment: &SafetyAssessment) {
        let mut report = self.report.borrow_mut();
        report.push("Sailing safety:".to_string());
        for line in &assessment.lines {
            report.push(format!("  {}", line));
        }
    }

    fn show_notice(&mut self, message: &str) {
        self.report.borrow_mut().push(message.to_string());
    }

    fn show_failure(&mut self, error: &ForecastError) {
        self.failure = Some(error.clone());
    }

    fn clear_failure(&mut self) {
        self.failure = None;
    }
}

/// Outcome of rendering one response to text.
pub struct Rendered {
    pub settlement: Settlement,
    pub lines: Vec<String>,
    pub failure: Option<ForecastError>,
}

/// Run one settled request through a terminal view.
pub fn render(at: Coordinate, result: Result<ForecastOutcome>) -> Rendered {
    let report: Report = Rc::default();
    let chart = |kind| TerminalChart {
        kind,
        report: report.clone(),
        summary: HourlySeries::default(),
    };
    let mut view = ForecastView::new(
        TerminalMap {
            report: report.clone(),
        },
        ForecastCharts::new(
            chart(SeriesKind::Height),
            chart(SeriesKind::Direction),
            chart(SeriesKind::Period),
        ),
        TerminalReadout {
            report: report.clone(),
            failure: None,
        },
    );

    let ticket = view.begin(at);
    let settlement = view.settle(ticket, result);
    let failure = view.readout.failure.take();
    drop(view);
    let lines = report.take();
    Rendered {
        settlement,
        lines,
        failure,
    }
}

/// Write the hourly series as CSV with a header row; nulls are empty cells.
pub fn write_hourly_csv<W: std::io::Write>(writer: W, series: &HourlySeries) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut header = vec!["time"];
    header.extend(SeriesKind::ALL.iter().map(|k| k.column()));
    wtr.write_record(&header)?;

    let cell = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();
    for (i, time) in series.times().iter().enumerate() {
        wtr.write_record([
            time.clone(),
            cell(series.heights()[i]),
            cell(series.directions()[i]),
            cell(series.periods()[i]),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Fetch and print the forecast for one coordinate.
pub async fn run_fetch(
    latitude: f64,
    longitude: f64,
    server: &str,
    csv_path: Option<&str>,
) -> anyhow::Result<()> {
    let at = Coordinate::new(latitude, longitude)?;
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    let client = ForecastClient::with_client(http, server);

    let result = client.fetch(&at).await;

    if let (Ok(ForecastOutcome::Data(forecast)), Some(path)) = (&result, csv_path) {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path))?;
        write_hourly_csv(file, &forecast.hourly)?;
        info!("Wrote {} hourly rows to {}", forecast.hourly.len(), path);
        if let Some((first, last)) = forecast.hourly.time_span() {
            info!(
                "Forecast window {} to {}",
                first.format(TIME_FORMAT),
                last.format(TIME_FORMAT)
            );
        }
    }

    let rendered = render(at, result);
    for line in &rendered.lines {
        println!("{}", line);
    }
    match rendered.failure {
        Some(e) => Err(e).with_context(|| format!("Request to {} failed", client.endpoint())),
        None => Ok(()),
    }
}

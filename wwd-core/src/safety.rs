//! Rule-based sailing safety assessment.
//!
//! Three readings are checked against fixed thresholds and turned into a short
//! narrative: direction, then height, then period, then the overall verdict.
//! Direction is descriptive only. A missing height or period is reported as
//! unavailable and does not count against the verdict.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::direction::CompassDirection;
use crate::reading::WindWaveReading;

/// Limits a reading must respect to be considered safe for sailing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyThresholds {
    /// Heights strictly above this (meters) are dangerous.
    pub max_height_m: f64,
    /// Periods strictly below this (seconds) are turbulent.
    pub min_period_s: f64,
}

impl Default for SafetyThresholds {
    fn default() -> Self {
        SafetyThresholds {
            max_height_m: 2.0,
            min_period_s: 5.0,
        }
    }
}

/// A run of narrative text, optionally emphasized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Text(String),
    Strong(String),
}

impl Segment {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Text(s) | Segment::Strong(s) => s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Safe,
    Danger,
}

/// One sentence of the assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentLine {
    pub severity: Severity,
    pub segments: Vec<Segment>,
}

impl AssessmentLine {
    fn new(severity: Severity) -> Self {
        AssessmentLine {
            severity,
            segments: Vec::new(),
        }
    }

    fn text(mut self, s: impl Into<String>) -> Self {
        self.segments.push(Segment::Text(s.into()));
        self
    }

    fn strong(mut self, s: impl Into<String>) -> Self {
        self.segments.push(Segment::Strong(s.into()));
        self
    }
}

impl fmt::Display for AssessmentLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.as_str())?;
        }
        Ok(())
    }
}

/// Narrative plus verdict for one set of readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyAssessment {
    pub lines: Vec<AssessmentLine>,
    pub is_safe: bool,
}

impl SafetyAssessment {
    /// Assess the current conditions of a reading.
    pub fn for_reading(reading: &WindWaveReading, thresholds: &SafetyThresholds) -> Self {
        analyze(reading.height, reading.direction, reading.period, thresholds)
    }

    pub fn has_danger(&self) -> bool {
        self.lines.iter().any(|l| l.severity == Severity::Danger)
    }
}

impl fmt::Display for SafetyAssessment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Build the assessment: direction, height, period, overall. Never fails.
pub fn analyze(
    height: Option<f64>,
    direction: Option<f64>,
    period: Option<f64>,
    thresholds: &SafetyThresholds,
) -> SafetyAssessment {
    // Non-finite values compare false against both thresholds.
    let height = height.filter(|v| v.is_finite());
    let direction = direction.filter(|v| v.is_finite());
    let period = period.filter(|v| v.is_finite());

    let mut lines = Vec::with_capacity(4);
    let mut is_safe = true;

    lines.push(match direction {
        Some(degrees) => AssessmentLine::new(Severity::Info)
            .text("The wind is coming from the ")
            .strong(CompassDirection::from_degrees(degrees).name())
            .text(" direction."),
        None => AssessmentLine::new(Severity::Info).text("Wind direction data is not available."),
    });

    lines.push(match height {
        Some(h) if h > thresholds.max_height_m => {
            is_safe = false;
            AssessmentLine::new(Severity::Danger)
                .text("Warning: The wind wave height is ")
                .strong(format!("{} meters", h))
                .text(", which is considered dangerous for sailing.")
        }
        Some(h) => AssessmentLine::new(Severity::Safe)
            .text("The wind wave height of ")
            .strong(format!("{} meters", h))
            .text(" is safe for sailing."),
        None => AssessmentLine::new(Severity::Info).text("Wind wave height data is not available."),
    });

    lines.push(match period {
        Some(p) if p < thresholds.min_period_s => {
            is_safe = false;
            AssessmentLine::new(Severity::Danger)
                .strong("Caution:")
                .text(" The wind wave period is ")
                .strong(format!("{} seconds", p))
                .text(", indicating turbulent conditions.")
        }
        Some(p) => AssessmentLine::new(Severity::Safe)
            .text("The wind wave period of ")
            .strong(format!("{} seconds", p))
            .text(" is safe for sailing."),
        None => AssessmentLine::new(Severity::Info).text("Wind wave period data is not available."),
    });

    lines.push(if is_safe {
        AssessmentLine::new(Severity::Safe)
            .strong("Overall Result:")
            .text(" Conditions are safe for sailing.")
    } else {
        AssessmentLine::new(Severity::Danger)
            .strong("Overall Result:")
            .text(" Conditions are not safe for sailing.")
    });

    SafetyAssessment { lines, is_safe }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assess(h: Option<f64>, d: Option<f64>, p: Option<f64>) -> SafetyAssessment {
        analyze(h, d, p, &SafetyThresholds::default())
    }

    #[test]
    fn test_height_threshold_is_strict() {
        assert!(assess(Some(2.0), None, Some(6.0)).is_safe);
        assert!(!assess(Some(2.01), None, Some(6.0)).is_safe);
    }

    #[test]
    fn test_period_threshold_is_strict() {
        assert!(assess(Some(1.0), None, Some(5.0)).is_safe);
        assert!(!assess(Some(1.0), None, Some(4.99)).is_safe);
    }

    #[test]
    fn test_calm_easterly() {
        let a = assess(Some(1.5), Some(90.0), Some(6.0));
        let text = a.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "The wind is coming from the East direction.");
        assert_eq!(lines[1], "The wind wave height of 1.5 meters is safe for sailing.");
        assert_eq!(lines[2], "The wind wave period of 6 seconds is safe for sailing.");
        assert_eq!(lines[3], "Overall Result: Conditions are safe for sailing.");
        assert!(a.is_safe);
        assert!(!a.has_danger());
    }

    #[test]
    fn test_rough_sea_without_direction() {
        let a = assess(Some(3.0), None, Some(3.0));
        let text = a.to_string();
        assert!(text.contains("Wind direction data is not available."));
        assert!(text.contains(
            "Warning: The wind wave height is 3 meters, which is considered dangerous for sailing."
        ));
        assert!(text.contains(
            "Caution: The wind wave period is 3 seconds, indicating turbulent conditions."
        ));
        assert!(text.ends_with("Overall Result: Conditions are not safe for sailing."));
        assert!(!a.is_safe);
        assert_eq!(a.lines[1].severity, Severity::Danger);
        assert_eq!(a.lines[2].severity, Severity::Danger);
    }

    #[test]
    fn test_direction_does_not_affect_verdict() {
        assert!(assess(Some(1.0), Some(400.0), Some(8.0)).is_safe);
        let text = assess(Some(1.0), Some(400.0), Some(8.0)).to_string();
        assert!(text.starts_with("The wind is coming from the Unknown Direction direction."));
    }

    #[test]
    fn test_absent_readings_are_excluded_from_verdict() {
        let a = assess(None, None, None);
        assert!(a.is_safe);
        let text = a.to_string();
        assert!(text.contains("Wind wave height data is not available."));
        assert!(text.contains("Wind wave period data is not available."));

        assert!(!assess(None, None, Some(2.0)).is_safe);
        assert!(!assess(Some(2.5), None, None).is_safe);
    }

    #[test]
    fn test_non_finite_readings_are_not_available() {
        let a = assess(Some(f64::NAN), Some(f64::NAN), Some(f64::INFINITY));
        let text = a.to_string();
        assert!(text.contains("Wind direction data is not available."));
        assert!(text.contains("Wind wave height data is not available."));
        assert!(text.contains("Wind wave period data is not available."));
        assert!(!text.contains("NaN"));
        assert!(!assess(Some(3.0), None, Some(f64::NAN)).is_safe);
    }

    #[test]
    fn test_emphasis_on_values() {
        let a = assess(Some(3.0), Some(0.0), Some(4.0));
        assert_eq!(a.lines[0].segments[1], Segment::Strong("North".to_string()));
        assert_eq!(a.lines[1].segments[1], Segment::Strong("3 meters".to_string()));
        assert_eq!(a.lines[2].segments[0], Segment::Strong("Caution:".to_string()));
        assert_eq!(a.lines[3].severity, Severity::Danger);
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = SafetyThresholds {
            max_height_m: 1.0,
            min_period_s: 7.0,
        };
        let reading = WindWaveReading::new(Some(1.5), Some(90.0), Some(6.0));
        assert!(!SafetyAssessment::for_reading(&reading, &strict).is_safe);
        assert!(SafetyAssessment::for_reading(&reading, &SafetyThresholds::default()).is_safe);
    }
}

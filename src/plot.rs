//! Plot data source format: one `YYYYMMDD hours` line per point.

use crate::padding::ChartPoint;
use chrono::NaiveDate;
use std::fmt;
use std::io::{self, Write};
use thiserror::Error;

const DAY_FORMAT: &str = "%Y%m%d";

#[derive(Debug, Error)]
pub enum PlotDataError {
    #[error("line {line}: expected '<YYYYMMDD> <hours>', got '{content}'")]
    Malformed { line: usize, content: String },
    #[error("line {line}: invalid day '{value}': {source}")]
    Day {
        line: usize,
        value: String,
        source: chrono::ParseError,
    },
    #[error("line {line}: invalid hours '{value}': {source}")]
    Hours {
        line: usize,
        value: String,
        source: std::num::ParseIntError,
    },
}

struct PlotLine<'a>(&'a ChartPoint);

impl fmt::Display for PlotLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.0.day.format(DAY_FORMAT), self.0.hours)
    }
}

pub fn write_plot_data<W: Write>(writer: &mut W, points: &[ChartPoint]) -> io::Result<()> {
    for point in points {
        write!(writer, "{}", PlotLine(point))?;
    }
    Ok(())
}

pub fn plot_data_string(points: &[ChartPoint]) -> String {
    points.iter().map(|point| PlotLine(point).to_string()).collect()
}

pub fn parse_plot_data(input: &str) -> Result<Vec<ChartPoint>, PlotDataError> {
    let mut points = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut parts = trimmed.split_whitespace();
        let (Some(day), Some(hours), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(PlotDataError::Malformed {
                line,
                content: raw.to_string(),
            });
        };
        let day = NaiveDate::parse_from_str(day, DAY_FORMAT).map_err(|source| PlotDataError::Day {
            line,
            value: day.to_string(),
            source,
        })?;
        let hours = hours.parse::<u32>().map_err(|source| PlotDataError::Hours {
            line,
            value: hours.to_string(),
            source,
        })?;
        points.push(ChartPoint::new(day, hours));
    }
    Ok(points)
}

//! Table and JSON rendering of a [`SearchReport`].

use std::io::Write;

use serde::Serialize;

use bizfind_core::{AgeEstimate, BusinessRecord, NOT_AVAILABLE};

use crate::search::{FallbackReason, SearchReport};

/// `(header, column width)` in display order.
const COLUMNS: [(&str, usize); 9] = [
    ("Business Name", 32),
    ("Industry", 32),
    ("Business Age", 14),
    ("Owner Age", 11),
    ("Revenue", 9),
    ("Address", 40),
    ("Phone", 18),
    ("Website", 34),
    ("Source", 0),
];

/// Aggregate figures printed under the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Summary {
    pub total: usize,
    /// Mean over records with a known business age.
    pub average_business_age: Option<f64>,
    /// Mean over records with a known owner age.
    pub average_owner_age: Option<f64>,
}

impl Summary {
    pub(crate) fn from_records(records: &[BusinessRecord]) -> Self {
        Self {
            total: records.len(),
            average_business_age: average_years(
                records.iter().map(BusinessRecord::business_age),
            ),
            average_owner_age: average_years(records.iter().map(BusinessRecord::owner_age)),
        }
    }
}

fn average_years(ages: impl Iterator<Item = AgeEstimate>) -> Option<f64> {
    let (sum, count) = ages
        .filter_map(AgeEstimate::years)
        .fold((0.0_f64, 0_u32), |(sum, count), years| {
            (sum + f64::from(years), count + 1)
        });
    (count > 0).then(|| sum / f64::from(count))
}

/// Truncates `value` to fit a column of `width`, leaving one space of padding.
fn fit(value: &str, width: usize) -> String {
    if width == 0 || value.chars().count() < width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(4)).collect();
    format!("{kept}...")
}

/// `250` thousand USD renders as `"$250K"`.
fn format_revenue(thousands_usd: Option<u32>) -> String {
    thousands_usd.map_or_else(|| NOT_AVAILABLE.to_string(), |n| format!("${n}K"))
}

fn write_row<W: Write>(out: &mut W, cells: &[String; 9]) -> std::io::Result<()> {
    let mut line = String::new();
    for (cell, (_, width)) in cells.iter().zip(COLUMNS) {
        let cell = fit(cell, width);
        line.push_str(&format!("{cell:<width$}"));
    }
    writeln!(out, "{}", line.trim_end())
}

fn fallback_notice(reason: FallbackReason) -> String {
    format!("Notice: {reason}; showing sample data. Demo data only, not real businesses.")
}

/// Writes the result table followed by the summary lines.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub(crate) fn write_table<W: Write>(out: &mut W, report: &SearchReport) -> anyhow::Result<()> {
    if let Some(reason) = report.fallback {
        writeln!(out, "{}", fallback_notice(reason))?;
        writeln!(out)?;
    }

    if report.records.is_empty() {
        writeln!(out, "No businesses match industry {}.", report.industry)?;
    } else {
        write_row(out, &COLUMNS.map(|(header, _)| header.to_string()))?;
        for record in &report.records {
            write_row(
                out,
                &[
                    record.name().to_string(),
                    record.industry().to_string(),
                    record.business_age().to_string(),
                    record.owner_age().to_string(),
                    format_revenue(record.revenue_estimate()),
                    record.address().to_string(),
                    record.phone().unwrap_or(NOT_AVAILABLE).to_string(),
                    record.website().unwrap_or(NOT_AVAILABLE).to_string(),
                    record.source().to_string(),
                ],
            )?;
        }
    }

    let summary = Summary::from_records(&report.records);
    writeln!(out)?;
    writeln!(out, "Found {} businesses in {}", summary.total, report.location)?;
    match summary.average_business_age {
        Some(avg) => writeln!(out, "Average business age: {avg:.1} years")?,
        None => writeln!(out, "Average business age: n/a")?,
    }
    if let Some(avg) = summary.average_owner_age {
        writeln!(out, "Average owner age: {avg:.1} years")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonCoordinates {
    lat: f64,
    lon: f64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    location: &'a str,
    industry: String,
    coordinates: Option<JsonCoordinates>,
    fallback: Option<FallbackReason>,
    records: &'a [BusinessRecord],
    summary: Summary,
}

/// Writes the report as one pretty-printed JSON document.
///
/// # Errors
///
/// Returns an error if serialization or writing to `out` fails.
pub(crate) fn write_json<W: Write>(out: &mut W, report: &SearchReport) -> anyhow::Result<()> {
    let document = JsonReport {
        location: &report.location,
        industry: report.industry.to_string(),
        coordinates: report.coordinates.map(|c| JsonCoordinates {
            lat: c.lat,
            lon: c.lon,
        }),
        fallback: report.fallback,
        records: &report.records,
        summary: Summary::from_records(&report.records),
    };
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    Ok(())
}

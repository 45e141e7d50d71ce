//! Metrics reporter - output formatting and export
//!
//! Supports multiple output formats:
//! - Text (human-readable)
//! - JSON
//! - CSV

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::benchmark::BenchmarkResult;
use crate::config::OutputFormat;

const CSV_HEADER: &str =
    "pattern,sum,expected,lost_updates,latency_ms,interval_start_us,interval_end_us,threads";

/// Results reporter
pub struct MetricsReporter {
    format: OutputFormat,
    verbose: bool,
    header_printed: bool,
}

impl MetricsReporter {
    /// Create new reporter with specified format
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self {
            format,
            verbose,
            header_printed: false,
        }
    }

    /// Render one result to stdout
    pub fn report(&mut self, result: &BenchmarkResult) {
        let rendered = self.render(result);
        print!("{}", rendered);
    }

    /// Render one result in the configured format
    pub fn render(&mut self, result: &BenchmarkResult) -> String {
        match self.format {
            OutputFormat::Text => self.render_text(result),
            OutputFormat::Json => format!("{}\n", result_json(result)),
            OutputFormat::Csv => {
                let mut out = String::new();
                if !self.header_printed {
                    out.push_str(CSV_HEADER);
                    out.push('\n');
                    self.header_printed = true;
                }
                out.push_str(&csv_row(result));
                out.push('\n');
                out
            }
        }
    }

    /// Human-readable block
    fn render_text(&self, result: &BenchmarkResult) -> String {
        let mut out = format!(
            "\n{}:\nSum:           {}\nLatency:       {:.3} ms\n",
            result.pattern.title(),
            result.sum,
            result.latency_ms()
        );

        if self.verbose {
            if let Some(spread) = result.task_spread() {
                out.push_str(&format!(
                    "Tasks:         {} (span us: min={} p50={} max={})\n",
                    spread.tasks, spread.min_us, spread.p50_us, spread.max_us
                ));
            }
            if result.pattern.is_concurrent() && result.expected != result.sum {
                out.push_str(&format!(
                    "Expected:      {} ({} lost updates)\n",
                    format_count(result.expected),
                    format_count(result.lost_updates())
                ));
            }
        }

        out
    }
}

/// JSON object for one result
pub fn result_json(result: &BenchmarkResult) -> serde_json::Value {
    serde_json::json!({
        "pattern": result.pattern.as_str(),
        "sum": result.sum,
        "expected": result.expected,
        "lost_updates": result.lost_updates(),
        "latency_ms": result.latency_ms(),
        "interval_start_us": result.interval_start.as_micros_f64(),
        "interval_end_us": result.interval_end.as_micros_f64(),
        "threads": result.tasks.len().max(1),
        "tasks": result.tasks.iter().map(|t| {
            serde_json::json!({
                "task_id": t.task_id,
                "range": [t.range.start, t.range.end],
                "start_us": t.start.as_micros_f64(),
                "end_us": t.end.as_micros_f64(),
                "contribution": t.local_contribution
            })
        }).collect::<Vec<_>>()
    })
}

/// CSV row for one result (columns as in `CSV_HEADER`)
pub fn csv_row(result: &BenchmarkResult) -> String {
    format!(
        "{},{},{},{},{:.3},{:.3},{:.3},{}",
        result.pattern.as_str(),
        result.sum,
        result.expected,
        result.lost_updates(),
        result.latency_ms(),
        result.interval_start.as_micros_f64(),
        result.interval_end.as_micros_f64(),
        result.tasks.len().max(1)
    )
}

/// Benchmark results collection for export
#[derive(Debug)]
pub struct BenchmarkResults<'a> {
    /// All pattern results
    pub results: &'a [BenchmarkResult],
    /// Configuration summary
    pub config_summary: String,
}

impl<'a> BenchmarkResults<'a> {
    /// Create new results collection
    pub fn new(config_summary: &str, results: &'a [BenchmarkResult]) -> Self {
        Self {
            results,
            config_summary: config_summary.to_string(),
        }
    }

    /// Export all results to JSON
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "config": self.config_summary,
            "results": self.results.iter().map(result_json).collect::<Vec<_>>()
        })
    }

    /// Write all results to JSON file
    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        let mut file = File::create(path)?;
        let body = serde_json::to_string_pretty(&self.to_json())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(file, "{}", body)?;
        Ok(())
    }

    /// Write all results to CSV file
    pub fn write_csv(&self, path: &Path) -> io::Result<()> {
        let mut file = File::create(path)?;

        writeln!(file, "{}", CSV_HEADER)?;
        for result in self.results {
            writeln!(file, "{}", csv_row(result))?;
        }

        Ok(())
    }
}

/// Format large numbers with thousands separators
/// Examples: 1,234,567 or 987,654
pub fn format_count(value: u64) -> String {
    let s = value.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Timestamp;
    use crate::workload::Pattern;

    fn sample() -> BenchmarkResult {
        BenchmarkResult::single(
            Pattern::Sequential,
            Timestamp::from_micros(1_000),
            Timestamp::from_micros(2_250),
            1000,
        )
    }

    #[test]
    fn test_text_output() {
        let mut reporter = MetricsReporter::new(OutputFormat::Text, false);
        let out = reporter.render(&sample());
        assert_eq!(
            out,
            "\nSequential Access:\nSum:           1000\nLatency:       1.250 ms\n"
        );
    }

    #[test]
    fn test_verbose_race_shows_lost_updates() {
        let mut result = sample();
        result.pattern = Pattern::Race;
        result.sum = 900;
        result.expected = 1000;

        let mut reporter = MetricsReporter::new(OutputFormat::Text, true);
        let out = reporter.render(&result);
        assert!(out.contains("Expected:      1,000 (100 lost updates)"));
    }

    #[test]
    fn test_csv_header_once() {
        let mut reporter = MetricsReporter::new(OutputFormat::Csv, false);
        let first = reporter.render(&sample());
        let second = reporter.render(&sample());
        assert!(first.starts_with("pattern,"));
        assert!(!second.starts_with("pattern,"));
        assert_eq!(second, "sequential,1000,1000,0,1.250,1000.000,2250.000,1\n");
    }

    #[test]
    fn test_json_fields() {
        let json = result_json(&sample());
        assert_eq!(json["pattern"], "sequential");
        assert_eq!(json["sum"], 1000);
        assert_eq!(json["latency_ms"], 1.25);
    }

    #[test]
    fn test_write_files() {
        let results = vec![sample()];
        let export = BenchmarkResults::new("test config", &results);
        let dir = std::env::temp_dir();
        let json_path = dir.join(format!("memaccess-bench-{}.json", std::process::id()));
        let csv_path = dir.join(format!("memaccess-bench-{}.csv", std::process::id()));

        export.write_json(&json_path).unwrap();
        export.write_csv(&csv_path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json["config"], "test config");
        assert_eq!(json["results"].as_array().unwrap().len(), 1);

        let csv = std::fs::read_to_string(&csv_path).unwrap();
        assert_eq!(csv.lines().count(), 2);

        std::fs::remove_file(json_path).ok();
        std::fs::remove_file(csv_path).ok();
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(123), "123");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_count(10_000_000), "10,000,000");
    }
}

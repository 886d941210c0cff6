//! Timing and result reporting shared by the benchmark drivers
//!
//! Text reports use aligned `key\t= value` lines so runs can be compared
//! by eye or with `grep`; `--json` emits the same fields as one object.

use crate::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

/// Run `kernel` `iters` times and return the elapsed wall-clock seconds.
pub fn time_iterations<F: FnMut()>(iters: usize, mut kernel: F) -> f64 {
    let start = Instant::now();
    for _ in 0..iters {
        kernel();
    }
    start.elapsed().as_secs_f64()
}

/// One reported quantity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportField {
    /// Field name
    pub key: &'static str,
    /// Machine-readable value
    pub value: Value,
    /// Text rendering
    #[serde(skip)]
    pub text: String,
}

/// Execution report of one benchmark run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    /// Benchmark name
    pub benchmark: &'static str,
    /// Timed section, in seconds
    pub time_secs: f64,
    /// Extra fields in print order
    pub fields: Vec<ReportField>,
}

impl BenchReport {
    /// Start a report for `benchmark` with its timed section.
    pub fn new(benchmark: &'static str, time_secs: f64) -> Self {
        Self {
            benchmark,
            time_secs,
            fields: Vec::new(),
        }
    }

    /// Add an integer field.
    pub fn int(mut self, key: &'static str, value: u64) -> Self {
        self.fields.push(ReportField {
            key,
            value: Value::from(value),
            text: value.to_string(),
        });
        self
    }

    /// Add a float field printed with `precision` decimals.
    pub fn float(mut self, key: &'static str, value: f64, precision: usize) -> Self {
        self.fields.push(ReportField {
            key,
            value: Value::from(value),
            text: format!("{value:.precision$}"),
        });
        self
    }

    /// Add a float field printed in scientific notation.
    pub fn sci(mut self, key: &'static str, value: f64, precision: usize) -> Self {
        self.fields.push(ReportField {
            key,
            value: Value::from(value),
            text: format!("{value:.precision$e}"),
        });
        self
    }

    /// Add a float field printed in its shortest exact form.
    pub fn plain(mut self, key: &'static str, value: f64) -> Self {
        self.fields.push(ReportField {
            key,
            value: Value::from(value),
            text: value.to_string(),
        });
        self
    }

    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&ReportField> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Render as aligned `key\t= value` lines.
    pub fn to_text(&self) -> String {
        let mut out = format!("time (s)= {:.6}\n", self.time_secs);
        for field in &self.fields {
            let pad = if field.key.len() < 8 { "\t" } else { "" };
            out.push_str(&format!("{}{}= {}\n", field.key, pad, field.text));
        }
        out
    }

    /// Render as a JSON object.
    pub fn to_json(&self) -> Result<String> {
        let mut map = serde_json::Map::new();
        map.insert("benchmark".into(), Value::from(self.benchmark));
        map.insert("time_secs".into(), Value::from(self.time_secs));
        for field in &self.fields {
            map.insert(field.key.into(), field.value.clone());
        }
        Ok(serde_json::to_string_pretty(&Value::Object(map))?)
    }

    /// Print to stdout in the requested format.
    pub fn emit(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", self.to_json()?);
        } else {
            print!("{}", self.to_text());
        }
        Ok(())
    }
}

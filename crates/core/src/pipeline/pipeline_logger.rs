use std::collections::HashMap;

/// Cross-cutting logger for grouping pipeline events.
///
/// Lets callers observe stage timings and batch statistics without the use
/// case knowing where the output goes.
pub trait PipelineLogger: Send {
    /// Record how long a named pipeline stage took.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record a point-in-time metric (e.g. detection or group count).
    fn metric(&mut self, name: &str, value: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Records stage timings and metrics and reports them through `log`
/// once the run completes.
///
/// Stages are reported in the order they were first timed.
#[derive(Default)]
pub struct SummaryPipelineLogger {
    stage_order: Vec<String>,
    timings: HashMap<String, Vec<f64>>,
    metrics: HashMap<String, f64>,
    messages: Vec<String>,
}

impl SummaryPipelineLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the formatted summary string, or `None` if nothing was timed.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() {
            return None;
        }

        let total_ms: f64 = self.timings.values().flatten().sum();
        let mut lines = vec![format!("Grouping summary ({total_ms:.1}ms total):")];

        for stage in &self.stage_order {
            let stage_ms: f64 = self.timings[stage].iter().sum();
            let pct = if total_ms > 0.0 {
                stage_ms / total_ms * 100.0
            } else {
                0.0
            };
            lines.push(format!("  {stage:12}: {stage_ms:8.2}ms  ({pct:5.1}%)"));
        }

        let mut metric_names: Vec<_> = self.metrics.keys().collect();
        metric_names.sort();
        for name in metric_names {
            lines.push(format!("  {name}: {}", self.metrics[name]));
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }

    pub fn metric_value(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl PipelineLogger for SummaryPipelineLogger {
    fn timing(&mut self, stage: &str, duration_ms: f64) {
        if !self.timings.contains_key(stage) {
            self.stage_order.push(stage.to_string());
        }
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics.insert(name.to_string(), value);
    }

    fn info(&mut self, message: &str) {
        self.messages.push(message.to_string());
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullPipelineLogger;
        logger.timing("similarity", 5.0);
        logger.metric("groups", 3.0);
        logger.info("hello");
        logger.summary();
    }

    #[test]
    fn test_timing_records_values() {
        let mut logger = SummaryPipelineLogger::new();
        logger.timing("clustering", 20.0);
        logger.timing("clustering", 30.0);
        logger.timing("assembly", 5.0);

        let clustering = logger.timings_for("clustering").unwrap();
        assert_eq!(clustering.len(), 2);
        assert!((clustering[1] - 30.0).abs() < f64::EPSILON);
        assert_eq!(logger.timings_for("assembly").unwrap().len(), 1);
        assert!(logger.timings_for("similarity").is_none());
    }

    #[test]
    fn test_metric_keeps_latest_value() {
        let mut logger = SummaryPipelineLogger::new();
        logger.metric("groups", 3.0);
        logger.metric("groups", 4.0);
        assert_eq!(logger.metric_value("groups"), Some(4.0));
    }

    #[test]
    fn test_info_records_messages() {
        let mut logger = SummaryPipelineLogger::new();
        logger.info("first");
        logger.info("second");
        assert_eq!(logger.messages(), &["first", "second"]);
    }

    #[test]
    fn test_summary_none_without_timings() {
        let mut logger = SummaryPipelineLogger::new();
        logger.metric("groups", 1.0);
        assert!(logger.summary_string().is_none());
    }

    #[test]
    fn test_summary_lists_stages_in_first_seen_order() {
        let mut logger = SummaryPipelineLogger::new();
        logger.timing("similarity", 10.0);
        logger.timing("clustering", 30.0);
        logger.timing("assembly", 10.0);
        logger.metric("detections", 4.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("Grouping summary (50.0ms total)"));
        let sim = summary.find("similarity").unwrap();
        let clu = summary.find("clustering").unwrap();
        let asm = summary.find("assembly").unwrap();
        assert!(sim < clu && clu < asm);
        assert!(summary.contains("60.0%"));
        assert!(summary.contains("detections: 4"));
    }
}

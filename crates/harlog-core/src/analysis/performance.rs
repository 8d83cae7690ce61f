use super::{Analyzer, PerformanceStats, PhaseStats, SlowRequest};
use crate::Result;
use crate::har::{Har, applicable};

pub struct PerformanceAnalyzer {
    top_n: usize,
}

impl PerformanceAnalyzer {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }
}

impl Default for PerformanceAnalyzer {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Analyzer for PerformanceAnalyzer {
    type Output = PerformanceStats;

    fn analyze(&self, har: &Har) -> Result<Self::Output> {
        tracing::debug!("Analyzing HAR performance statistics");

        let entries = &har.log.entries;

        if entries.is_empty() {
            return Ok(PerformanceStats {
                total_time: 0.0,
                average_time: 0.0,
                median_time: 0.0,
                slowest_requests: vec![],
                phases: vec![],
            });
        }

        let total_time: f64 = entries.iter().map(|e| e.time).sum();
        let average_time = total_time / entries.len() as f64;

        let mut times: Vec<f64> = entries.iter().map(|e| e.time).collect();
        times.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let median_time = if times.len().is_multiple_of(2) {
            let mid = times.len() / 2;
            (times[mid - 1] + times[mid]) / 2.0
        } else {
            times[times.len() / 2]
        };

        let mut slow_requests: Vec<_> = entries
            .iter()
            .map(|e| SlowRequest {
                url: e.request.url.clone(),
                time: e.time,
                method: e.request.method.clone(),
                status: e.response.status,
            })
            .collect();

        slow_requests.sort_by(|a, b| b.time.partial_cmp(&a.time).unwrap());
        slow_requests.truncate(self.top_n);

        let phases = phase_breakdown(har);

        tracing::info!(
            "Performance analysis complete: avg={:.2}ms, median={:.2}ms",
            average_time,
            median_time
        );

        Ok(PerformanceStats {
            total_time,
            average_time,
            median_time,
            slowest_requests: slow_requests,
            phases,
        })
    }
}

/// Per-phase aggregates across all entries, honoring the -1 sentinel.
fn phase_breakdown(har: &Har) -> Vec<PhaseStats> {
    const PHASES: [&str; 7] = ["blocked", "dns", "connect", "ssl", "send", "wait", "receive"];

    PHASES
        .iter()
        .map(|&phase| {
            let values = har.log.entries.iter().filter_map(|e| {
                let t = &e.timings;
                match phase {
                    "blocked" => applicable(t.blocked),
                    "dns" => applicable(t.dns),
                    "connect" => applicable(t.connect),
                    "ssl" => applicable(t.ssl),
                    "send" => applicable(Some(t.send)),
                    "wait" => applicable(Some(t.wait)),
                    _ => applicable(Some(t.receive)),
                }
            });

            let mut samples = 0usize;
            let mut total = 0.0f64;
            for value in values {
                samples += 1;
                total += value;
            }

            PhaseStats {
                phase: phase.to_string(),
                samples,
                total,
                average: if samples == 0 {
                    0.0
                } else {
                    total / samples as f64
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::har::HarReader;

    fn sample_har() -> Har {
        let json = r#"{
            "log": {
                "version": "1.2",
                "creator": {"name": "test", "version": "1.0"},
                "entries": [
                    {
                        "startedDateTime": "2024-03-01T10:00:00.000Z",
                        "time": 150.0,
                        "request": {
                            "method": "GET", "url": "https://api.example.com/a",
                            "httpVersion": "HTTP/1.1",
                            "cookies": [], "headers": [], "queryString": [],
                            "headersSize": -1, "bodySize": -1
                        },
                        "response": {
                            "status": 200, "statusText": "OK", "httpVersion": "HTTP/1.1",
                            "cookies": [], "headers": [],
                            "content": {"size": 10, "mimeType": "text/plain"},
                            "redirectURL": "", "headersSize": -1, "bodySize": 10
                        },
                        "cache": {},
                        "timings": {"dns": -1, "send": 0.0, "wait": 120.0, "receive": 30.0}
                    },
                    {
                        "startedDateTime": "2024-03-01T10:00:01.000Z",
                        "time": 64.0,
                        "request": {
                            "method": "GET", "url": "https://api.example.com/b",
                            "httpVersion": "HTTP/1.1",
                            "cookies": [], "headers": [], "queryString": [],
                            "headersSize": -1, "bodySize": -1
                        },
                        "response": {
                            "status": 200, "statusText": "OK", "httpVersion": "HTTP/1.1",
                            "cookies": [], "headers": [],
                            "content": {"size": 10, "mimeType": "text/plain"},
                            "redirectURL": "", "headersSize": -1, "bodySize": 10
                        },
                        "cache": {},
                        "timings": {"dns": 4.0, "send": 1.0, "wait": 50.0, "receive": 9.0}
                    }
                ]
            }
        }"#;
        HarReader::from_str(json).unwrap()
    }

    #[test]
    fn test_basic_statistics() {
        let stats = PerformanceAnalyzer::default().analyze(&sample_har()).unwrap();
        assert_eq!(stats.total_time, 214.0);
        assert_eq!(stats.average_time, 107.0);
        assert_eq!(stats.median_time, 107.0);
        assert_eq!(stats.slowest_requests[0].time, 150.0);
    }

    #[test]
    fn test_top_n_limits_slow_requests() {
        let stats = PerformanceAnalyzer::new(1).analyze(&sample_har()).unwrap();
        assert_eq!(stats.slowest_requests.len(), 1);
    }

    #[test]
    fn test_phase_breakdown_honors_sentinel() {
        let stats = PerformanceAnalyzer::default().analyze(&sample_har()).unwrap();
        let dns = stats.phases.iter().find(|p| p.phase == "dns").unwrap();
        // First entry's dns is -1 (not applicable), so only one sample counts
        assert_eq!(dns.samples, 1);
        assert_eq!(dns.total, 4.0);
        assert_eq!(dns.average, 4.0);

        let wait = stats.phases.iter().find(|p| p.phase == "wait").unwrap();
        assert_eq!(wait.samples, 2);
        assert_eq!(wait.total, 170.0);
    }

    #[test]
    fn test_empty_log() {
        let json = r#"{
            "log": {
                "version": "1.2",
                "creator": {"name": "test", "version": "1.0"},
                "entries": []
            }
        }"#;
        let har = HarReader::from_str(json).unwrap();
        let stats = PerformanceAnalyzer::default().analyze(&har).unwrap();
        assert_eq!(stats.total_time, 0.0);
        assert!(stats.phases.is_empty());
    }
}

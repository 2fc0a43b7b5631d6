//! Rewriter trait and the pipeline that runs rewriters in order

use killmail_domain::Report;
use tracing::debug;

/// A correction pass over a parsed report
///
/// Each rewriter detects one known data-entry mistake and fixes the affected
/// participants in place. Rewriters are independent of each other and can be
/// combined in any order through a [`RewritePipeline`].
pub trait Rewriter {
    /// Stable identifier, used in summaries and logs
    fn name(&self) -> &str;

    /// Apply the correction, returning how many participants were changed
    fn rewrite(&self, report: &mut Report) -> usize;
}

/// Corrections made by one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Rewriter name and the number of participants it changed
    pub corrections: Vec<(String, usize)>,
}

impl RewriteSummary {
    /// Total number of corrections across all rewriters
    pub fn total(&self) -> usize {
        self.corrections.iter().map(|(_, count)| count).sum()
    }

    /// Corrections made by the named rewriter
    pub fn count_for(&self, name: &str) -> usize {
        self.corrections
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, count)| count)
            .sum()
    }
}

/// Ordered list of rewriters
#[derive(Default)]
pub struct RewritePipeline {
    rewriters: Vec<Box<dyn Rewriter>>,
}

impl RewritePipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rewriter
    pub fn with<R: Rewriter + 'static>(mut self, rewriter: R) -> Self {
        self.rewriters.push(Box::new(rewriter));
        self
    }

    /// Number of rewriters
    pub fn len(&self) -> usize {
        self.rewriters.len()
    }

    /// True when no rewriters are configured
    pub fn is_empty(&self) -> bool {
        self.rewriters.is_empty()
    }

    /// Names of the rewriters, in run order
    pub fn names(&self) -> Vec<&str> {
        self.rewriters.iter().map(|r| r.name()).collect()
    }

    /// Run every rewriter over the report in place
    pub fn rewrite(&self, report: &mut Report) -> RewriteSummary {
        let mut summary = RewriteSummary::default();
        for rewriter in &self.rewriters {
            let count = rewriter.rewrite(report);
            debug!("Rewriter {} corrected {} participants", rewriter.name(), count);
            summary.corrections.push((rewriter.name().to_string(), count));
        }
        summary
    }

    /// Run every rewriter, taking and returning the report by value
    pub fn apply(&self, mut report: Report) -> (Report, RewriteSummary) {
        let summary = self.rewrite(&mut report);
        (report, summary)
    }
}

impl std::fmt::Debug for RewritePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewritePipeline")
            .field("rewriters", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use killmail_domain::{Participant, VictimDetails};

    struct UppercaseCorp;

    impl Rewriter for UppercaseCorp {
        fn name(&self) -> &str {
            "uppercase_corp"
        }

        fn rewrite(&self, report: &mut Report) -> usize {
            let mut changed = 0;
            for p in report.participants_mut() {
                let upper = p.corporation.to_uppercase();
                if upper != p.corporation {
                    p.corporation = upper;
                    changed += 1;
                }
            }
            changed
        }
    }

    fn report() -> Report {
        let mut victim = Participant::victim("Victim", VictimDetails::default());
        victim.corporation = "Frontier Miners".to_string();
        Report::new("2008.07.21 14:32", victim)
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = RewritePipeline::new();
        assert!(pipeline.is_empty());

        let (rewritten, summary) = pipeline.apply(report());
        assert_eq!(rewritten, report());
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn test_pipeline_runs_in_order_and_counts() {
        let pipeline = RewritePipeline::new().with(UppercaseCorp).with(UppercaseCorp);
        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.names(), vec!["uppercase_corp", "uppercase_corp"]);

        let (rewritten, summary) = pipeline.apply(report());
        assert_eq!(rewritten.victim.corporation, "FRONTIER MINERS");
        assert_eq!(
            summary.corrections,
            vec![("uppercase_corp".to_string(), 1), ("uppercase_corp".to_string(), 0)]
        );
        assert_eq!(summary.count_for("uppercase_corp"), 1);
        assert_eq!(summary.count_for("missing"), 0);
    }

    #[test]
    fn test_debug_lists_names() {
        let pipeline = RewritePipeline::new().with(UppercaseCorp);
        assert_eq!(
            format!("{:?}", pipeline),
            "RewritePipeline { rewriters: [\"uppercase_corp\"] }"
        );
    }
}

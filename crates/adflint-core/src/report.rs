//! Rendering findings into the final report.
//!
//! The report is plain text on stdout, grouped by subject: one header per
//! pipeline or trigger, detail lines indented beneath it. Logging carries
//! the load-time noise; the report carries only findings.

use crate::issue::Issue;
use crate::resource::ResourceKind;

/// The outcome of one validation run.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Findings in report order: pipelines by name, then triggers by name,
    /// declaration order within each subject.
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Render the report as the text printed to stdout.
    ///
    /// Consecutive findings for one subject share a single `Kind 'name':`
    /// header. The checker emits findings in per-subject runs, so every
    /// subject appears exactly once.
    pub fn render(&self) -> String {
        if self.issues.is_empty() {
            return "No validation issues found.\n".to_string();
        }

        let mut out = String::from("Validation issues found:\n");
        let mut current: Option<(ResourceKind, &str)> = None;

        for issue in &self.issues {
            let subject = (issue.subject_kind, issue.subject_name.as_str());
            if current != Some(subject) {
                out.push_str(&format!(
                    "\n{} '{}':\n",
                    issue.subject_kind, issue.subject_name
                ));
                current = Some(subject);
            }
            out.push_str(&format!("  {}\n", issue.detail_line()));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_report_render_is_stable() {
        let report = ValidationReport::default();
        assert!(!report.has_issues());
        assert_eq!(report.render(), "No validation issues found.\n");
    }

    #[test]
    fn test_report_groups_consecutive_findings_per_subject() {
        let issues = vec![
            Issue::missing(
                ResourceKind::Pipeline,
                "parent",
                "run-child",
                "child",
                vec!["req".to_string()],
            ),
            Issue::redundant(
                ResourceKind::Pipeline,
                "parent",
                "run-child",
                "child",
                vec!["opt".to_string()],
            ),
            Issue::unresolved(ResourceKind::Trigger, "nightly", "nightly", "ghost"),
        ];
        let report = ValidationReport::new(issues);

        let expected = "\
Validation issues found:

Pipeline 'parent':
  Activity 'run-child': missing required parameters: ['req']
  Activity 'run-child': redundant parameters matching default values: ['opt']

Trigger 'nightly':
  Pipeline 'ghost' not found for trigger.
";
        assert_eq!(report.render(), expected);
    }

    #[test]
    fn test_report_repeats_header_for_each_subject() {
        let issues = vec![
            Issue::unresolved(ResourceKind::Pipeline, "a", "run", "ghost"),
            Issue::unresolved(ResourceKind::Pipeline, "b", "run", "ghost"),
        ];
        let report = ValidationReport::new(issues);

        let expected = "\
Validation issues found:

Pipeline 'a':
  Activity 'run': child pipeline 'ghost' not found.

Pipeline 'b':
  Activity 'run': child pipeline 'ghost' not found.
";
        assert_eq!(report.render(), expected);
    }
}

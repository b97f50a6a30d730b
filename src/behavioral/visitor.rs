//! Visitor: operations over the employee structure live in visitors, so a
//! new operation (the score summary) needs no change to `Engineer` or
//! `Manager`.

use crate::transcript::Transcript;

pub trait Employee {
    fn accept(&self, visitor: &mut dyn EmployeeVisitor);
}

pub trait EmployeeVisitor {
    fn visit_engineer(&mut self, engineer: &Engineer);
    fn visit_manager(&mut self, manager: &Manager);
}

#[derive(Debug, Clone)]
pub struct Engineer {
    name: String,
    code_quality: u32,
}

impl Engineer {
    pub fn new(name: impl Into<String>, code_quality: u32) -> Self {
        Self {
            name: name.into(),
            code_quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code_quality(&self) -> u32 {
        self.code_quality
    }
}

impl Employee for Engineer {
    fn accept(&self, visitor: &mut dyn EmployeeVisitor) {
        visitor.visit_engineer(self);
    }
}

#[derive(Debug, Clone)]
pub struct Manager {
    name: String,
    team_performance: u32,
}

impl Manager {
    pub fn new(name: impl Into<String>, team_performance: u32) -> Self {
        Self {
            name: name.into(),
            team_performance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team_performance(&self) -> u32 {
        self.team_performance
    }
}

impl Employee for Manager {
    fn accept(&self, visitor: &mut dyn EmployeeVisitor) {
        visitor.visit_manager(self);
    }
}

/// Writes one review line per employee.
#[derive(Debug, Default)]
pub struct AnnualReviewVisitor {
    reviews: Vec<String>,
}

impl AnnualReviewVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_reviews(self) -> Vec<String> {
        self.reviews
    }
}

impl EmployeeVisitor for AnnualReviewVisitor {
    fn visit_engineer(&mut self, engineer: &Engineer) {
        self.reviews.push(format!(
            "Reviewing code quality for engineer {}: {}",
            engineer.name(),
            engineer.code_quality()
        ));
    }

    fn visit_manager(&mut self, manager: &Manager) {
        self.reviews.push(format!(
            "Reviewing team performance for manager {}: {}",
            manager.name(),
            manager.team_performance()
        ));
    }
}

/// Averages the review score (code quality or team performance).
#[derive(Debug, Default)]
pub struct ScoreSummaryVisitor {
    total: u64,
    count: u64,
}

impl ScoreSummaryVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total as f64 / self.count as f64)
    }

    fn record(&mut self, score: u32) {
        self.total += u64::from(score);
        self.count += 1;
    }
}

impl EmployeeVisitor for ScoreSummaryVisitor {
    fn visit_engineer(&mut self, engineer: &Engineer) {
        self.record(engineer.code_quality());
    }

    fn visit_manager(&mut self, manager: &Manager) {
        self.record(manager.team_performance());
    }
}

pub fn demo() -> Transcript {
    let employees: Vec<Box<dyn Employee>> = vec![
        Box::new(Engineer::new("Alice", 85)),
        Box::new(Engineer::new("Bob", 90)),
        Box::new(Manager::new("Charlie", 75)),
    ];

    let mut review = AnnualReviewVisitor::new();
    let mut summary = ScoreSummaryVisitor::new();
    for employee in &employees {
        employee.accept(&mut review);
        employee.accept(&mut summary);
    }

    let mut out: Transcript = review.into_reviews().into_iter().collect();
    if let Some(average) = summary.average() {
        out.push(format!("Average review score: {average:.1}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_nobody() {
        assert_eq!(ScoreSummaryVisitor::new().average(), None);
    }

    #[test]
    fn test_summary_average() {
        let mut summary = ScoreSummaryVisitor::new();
        Engineer::new("a", 80).accept(&mut summary);
        Manager::new("b", 91).accept(&mut summary);
        assert_eq!(summary.average(), Some(85.5));
    }

    #[test]
    fn test_demo_output() {
        assert_eq!(
            demo().lines(),
            [
                "Reviewing code quality for engineer Alice: 85",
                "Reviewing code quality for engineer Bob: 90",
                "Reviewing team performance for manager Charlie: 75",
                "Average review score: 83.3",
            ]
        );
    }
}

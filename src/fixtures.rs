use crate::models::{Report, ReportId, ReportStatus};

pub const DEFAULT_COUNT: u32 = 100;
pub const DEFAULT_YEAR: i32 = 2024;

const DESCRIPTIONS: &[&str] = &[
    "Detailed quarterly financial summary for Q1.",
    "Operations efficiency report focused on logistical improvements.",
    "Compliance audit results and recommendation findings.",
    "Market analysis report detailing regional sector performance.",
    "Customer feedback synthesis and service improvement plan.",
    "Risk assessment for Q3 investments and mitigation strategies.",
];

/// Synthetic report list: ids `1..=count`, day `id % 28 + 1`,
/// month `id % 12 + 1`, in the given year.
pub fn generate_reports(count: u32, year: i32) -> Vec<Report> {
    (1..=count).map(|id| fixture_report(id, year)).collect()
}

fn fixture_report(id: ReportId, year: i32) -> Report {
    let day = id % 28 + 1;
    let month = id % 12 + 1;
    let idx = id as usize;
    Report::new(
        id,
        format!("Operations Report {id}"),
        DESCRIPTIONS[idx % DESCRIPTIONS.len()],
        format!("{year}-{month:02}-{day:02}"),
        ReportStatus::ALL[idx % ReportStatus::ALL.len()],
        format!("/reports/report{id}.pdf"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_hundred_unique_valid_reports() {
        let reports = generate_reports(DEFAULT_COUNT, DEFAULT_YEAR);
        assert_eq!(reports.len(), 100);
        let ids: Vec<u32> = reports.iter().map(|r| r.id()).collect();
        assert_eq!(ids, (1..=100).collect::<Vec<_>>());
        assert!(reports.iter().all(|r| r.parsed_date().is_some()));
        assert!(reports.iter().all(|r| !r.is_selected()));
    }

    #[test]
    fn test_fixture_shape() {
        let reports = generate_reports(12, 2024);
        let r5 = &reports[4];
        assert_eq!(r5.id(), 5);
        assert_eq!(r5.name(), "Operations Report 5");
        assert_eq!(r5.date(), "2024-06-06");
        assert_eq!(r5.status(), ReportStatus::Failed);
        assert_eq!(r5.url(), "/reports/report5.pdf");
        assert_eq!(r5.description(), DESCRIPTIONS[5]);

        let r12 = &reports[11];
        assert_eq!(r12.date(), "2024-01-13");
        assert_eq!(r12.status(), ReportStatus::Processed);
    }
}

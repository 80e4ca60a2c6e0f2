//! Report catalog business logic.
//!
//! Generating a report records a catalog entry describing a snapshot of one
//! collection; producing the report document itself is left to the
//! presentation layer. The catalog is kept newest first.

use crate::{
    core::{
        events::EVENTS,
        finance::TRANSACTIONS,
        members::MEMBERS,
        staff::STAFF,
        store::{CollectionStore, next_id},
    },
    entities::{Report, ReportKind},
    errors::Result,
    storage::Storage,
};
use chrono::NaiveDate;
use tracing::info;

/// Collection name for the report catalog
pub const REPORTS: &str = "reports";

/// Collection a report of `kind` is generated from.
#[must_use]
pub const fn source_collection(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::Financial => TRANSACTIONS,
        ReportKind::Members => MEMBERS,
        ReportKind::Staff => STAFF,
        ReportKind::Events => EVENTS,
    }
}

/// Records a new report of `kind` generated on `today` at the front of the catalog.
///
/// The period is the month of `today` (e.g. "June 2024") and the size is the
/// stored size of the source collection at this moment.
pub async fn generate_report<S: Storage>(
    store: &CollectionStore<S>,
    kind: ReportKind,
    today: NaiveDate,
) -> Result<Report> {
    let size_bytes = store.stored_size(source_collection(kind)).await;

    let mut reports: Vec<Report> = store.load(REPORTS).await;
    let report = Report {
        id: next_id(&reports),
        name: format!("{} Report", kind.label()),
        generated_date: today,
        kind,
        period: today.format("%B %Y").to_string(),
        size_bytes,
    };
    reports.insert(0, report.clone());
    store.save(REPORTS, &reports).await?;

    info!(id = report.id, kind = kind.label(), size_bytes, "Generated report");
    Ok(report)
}

/// The report catalog, newest first.
pub async fn list_reports<S: Storage>(store: &CollectionStore<S>) -> Vec<Report> {
    store.load(REPORTS).await
}

/// Reports of one kind, or all reports when `kind` is `None`.
#[must_use]
pub fn filter_reports(reports: &[Report], kind: Option<ReportKind>) -> Vec<&Report> {
    reports
        .iter()
        .filter(|r| kind.is_none_or(|k| r.kind == k))
        .collect()
}

/// Deletes a catalog entry by id. Returns whether an entry was removed.
pub async fn delete_report<S: Storage>(store: &CollectionStore<S>, id: i64) -> Result<bool> {
    let removed = store.remove_by_id::<Report>(REPORTS, id).await?;
    info!(id, removed, "Deleted report");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::members::add_member;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_generate_report_describes_snapshot() -> Result<()> {
        let store = setup_memory_store();
        add_member(&store, sample_member("Ada", "Lovelace")).await?;
        let members_size = store.stored_size(MEMBERS).await;

        let report = generate_report(&store, ReportKind::Members, date(2024, 6, 15)).await?;

        assert_eq!(report.id, 1);
        assert_eq!(report.name, "Members Report");
        assert_eq!(report.period, "June 2024");
        assert_eq!(report.generated_date, date(2024, 6, 15));
        assert_eq!(report.size_bytes, members_size);
        assert!(report.size_bytes > 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_report_of_empty_collection_has_zero_size() -> Result<()> {
        let store = setup_memory_store();
        let report = generate_report(&store, ReportKind::Events, date(2024, 6, 15)).await?;
        assert_eq!(report.size_bytes, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_catalog_is_newest_first() -> Result<()> {
        let store = setup_memory_store();
        generate_report(&store, ReportKind::Financial, date(2024, 5, 31)).await?;
        generate_report(&store, ReportKind::Staff, date(2024, 6, 30)).await?;

        let reports = list_reports(&store).await;
        assert_eq!(
            reports.iter().map(|r| (r.id, r.kind)).collect::<Vec<_>>(),
            vec![(2, ReportKind::Staff), (1, ReportKind::Financial)]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_report() -> Result<()> {
        let store = setup_memory_store();
        let report = generate_report(&store, ReportKind::Financial, date(2024, 6, 1)).await?;
        assert!(delete_report(&store, report.id).await?);
        assert!(list_reports(&store).await.is_empty());
        Ok(())
    }

    #[test]
    fn test_filter_reports_by_kind() {
        let reports = vec![
            report_record(1, ReportKind::Financial),
            report_record(2, ReportKind::Members),
            report_record(3, ReportKind::Financial),
        ];

        let financial = filter_reports(&reports, Some(ReportKind::Financial));
        assert_eq!(financial.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(filter_reports(&reports, Some(ReportKind::Events)).is_empty());
        assert_eq!(filter_reports(&reports, None).len(), 3);
    }

    #[test]
    fn test_formatted_size() {
        let mut report = report_record(1, ReportKind::Staff);
        report.size_bytes = 512;
        assert_eq!(report.formatted_size(), "512 B");
        report.size_bytes = 2048;
        assert_eq!(report.formatted_size(), "2.0 KB");
        report.size_bytes = 3 * 1024 * 1024 + 200 * 1024;
        assert_eq!(report.formatted_size(), "3.2 MB");
    }
}

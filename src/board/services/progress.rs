//! Persisting derived member progress.

use super::BoardService;
use crate::board::error::BoardError;
use crate::store::DocumentStore;
use crate::team::domain::{MemberId, TeamMember};
use crate::team::progress::compute_member_progress;
use mockable::Clock;

/// Outcome of one progress sync.
#[derive(Debug, Default)]
pub struct ProgressSyncReport {
    /// Members whose progress or status was written.
    pub updated: Vec<MemberId>,
    /// Members whose stored values were already current.
    pub unchanged: usize,
    /// Members not yet known to the store.
    pub skipped: usize,
    /// Members whose write failed and was rolled back.
    pub failed: Vec<(MemberId, BoardError)>,
}

impl ProgressSyncReport {
    /// Returns `true` when every write succeeded.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

impl<S, C> BoardService<S, C>
where
    S: DocumentStore,
    C: Clock + Send + Sync,
{
    /// Recomputes every member's progress and writes the changed ones.
    ///
    /// Each member is written independently. A failed write is rolled back
    /// and logged, and the remaining members are still processed.
    pub async fn sync_member_progress(&self) -> ProgressSyncReport {
        let (progress, current) = {
            let state = self.read_state();
            (
                compute_member_progress(state.members(), state.tasks()),
                state.members().to_vec(),
            )
        };

        let mut report = ProgressSyncReport::default();
        for (entry, member) in progress.iter().zip(&current) {
            let Some(id) = entry.member_id.clone() else {
                report.skipped += 1;
                continue;
            };
            let patch = entry.patch();
            if patch.is_noop_for(member) {
                report.unchanged += 1;
                continue;
            }
            match self.apply_then_persist::<TeamMember>(&id, patch).await {
                Ok(_) => report.updated.push(id),
                Err(err) => {
                    tracing::warn!(
                        member = %entry.name,
                        error = %err,
                        "failed to persist member progress"
                    );
                    report.failed.push((id, err));
                }
            }
        }
        tracing::debug!(
            updated = report.updated.len(),
            unchanged = report.unchanged,
            failed = report.failed.len(),
            "member progress synced"
        );
        report
    }
}

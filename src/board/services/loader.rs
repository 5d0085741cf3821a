//! Initial load and one-time migration of legacy task records.

use super::{BoardService, ProgressSyncReport};
use crate::board::state::BoardState;
use crate::store::{DocumentId, DocumentStore, EntityKind, StoredDocument};
use crate::task::domain::{TaskDocument, TaskId};
use crate::team::domain::{MemberDocument, MemberId, TeamMember};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Outcome of [`BoardService::load`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of tasks loaded.
    pub tasks: usize,
    /// Number of members loaded.
    pub members: usize,
    /// Records that could not be read and were left out.
    pub skipped: Vec<(EntityKind, DocumentId)>,
    /// Collections that could not be fetched and were loaded empty.
    pub unavailable: Vec<EntityKind>,
    /// Legacy task records rewritten into canonical shape.
    pub migrated: usize,
    /// Legacy task records whose rewrite failed. They are migrated again on
    /// the next load.
    pub migration_failures: usize,
    /// Outcome of the progress sync that ends the load.
    pub progress: ProgressSyncReport,
}

impl<S, C> BoardService<S, C>
where
    S: DocumentStore,
    C: Clock + Send + Sync,
{
    /// Replaces the board with the store's contents.
    ///
    /// Members are fetched first, then tasks. A collection that cannot be
    /// fetched loads as empty and the other is still loaded. Legacy task
    /// records are normalized in memory and written back in canonical shape.
    /// The load ends with a progress sync.
    pub async fn load(&self) -> LoadReport {
        let mut report = LoadReport::default();
        let now = self.clock.utc();

        let member_records = self.fetch(EntityKind::TeamMember, &mut report).await;
        let members: Vec<TeamMember> = member_records
            .into_iter()
            .filter_map(|stored| read_member(stored, now, &mut report))
            .collect();

        let task_records = self.fetch(EntityKind::Task, &mut report).await;
        let mut migrations = Vec::new();
        let mut tasks = Vec::with_capacity(task_records.len());
        for stored in task_records {
            let document = match TaskDocument::from_document(&stored.document) {
                Ok(parsed) => parsed,
                Err(err) => {
                    tracing::warn!(id = %stored.id, error = %err, "skipping unreadable task record");
                    report.skipped.push((EntityKind::Task, stored.id));
                    continue;
                }
            };
            if document.needs_migration() {
                migrations.push((
                    stored.id.clone(),
                    document.migration_patch(self.config.default_priority),
                ));
            }
            tasks.push(document.into_task(
                Some(TaskId::from(stored.id)),
                self.config.default_priority,
                now,
            ));
        }

        report.tasks = tasks.len();
        report.members = members.len();
        self.replace_state(BoardState::new(tasks, members));
        tracing::info!(tasks = report.tasks, members = report.members, "board loaded");

        for (id, patch) in migrations {
            match self.store.update(EntityKind::Task, &id, patch).await {
                Ok(()) => report.migrated += 1,
                Err(err) => {
                    tracing::warn!(id = %id, error = %err, "failed to migrate legacy task record");
                    report.migration_failures += 1;
                }
            }
        }

        report.progress = self.sync_member_progress().await;
        report
    }

    async fn fetch(&self, kind: EntityKind, report: &mut LoadReport) -> Vec<StoredDocument> {
        match self.store.list_all(kind).await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(kind = %kind, error = %err, "failed to fetch records, loading none");
                report.unavailable.push(kind);
                Vec::new()
            }
        }
    }
}

fn read_member(
    stored: StoredDocument,
    now: DateTime<Utc>,
    report: &mut LoadReport,
) -> Option<TeamMember> {
    let member = MemberDocument::from_document(&stored.document)
        .ok()
        .and_then(|document| document.into_member(MemberId::from(stored.id.clone()), now));
    if member.is_none() {
        tracing::warn!(id = %stored.id, "skipping unreadable member record");
        report.skipped.push((EntityKind::TeamMember, stored.id));
    }
    member
}

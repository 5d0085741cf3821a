//! Per-member completion ratio and activity status.

use crate::store::LocalKey;
use crate::task::domain::Task;
use crate::task::query::rounded_percentage;
use crate::team::domain::{MemberId, MemberName, MemberPatch, MemberStatus, TeamMember};
use serde::Serialize;

/// Derived progress of one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProgress {
    /// Store identifier of the member, if persisted.
    pub member_id: Option<MemberId>,
    /// In-memory identity of the member.
    #[serde(skip)]
    pub key: LocalKey,
    /// Display name.
    pub name: MemberName,
    /// Number of tasks naming this member as assignee.
    pub assigned: usize,
    /// Number of those tasks that are deployed.
    pub done: usize,
    /// `done / assigned` as a rounded percentage, `0` without tasks.
    pub progress: u8,
    /// Derived activity status.
    pub status: MemberStatus,
}

impl MemberProgress {
    /// Returns the patch that writes these values onto the member record.
    #[must_use]
    pub fn patch(&self) -> MemberPatch {
        MemberPatch::new().with_progress(self.progress, self.status)
    }
}

/// Derives the activity status from assigned and deployed task counts.
///
/// First match wins: tasks but none deployed is busy, all deployed is
/// online, no tasks is offline, and anything in between is in progress.
#[must_use]
pub const fn derive_status(assigned: usize, done: usize) -> MemberStatus {
    if assigned > 0 && done == 0 {
        MemberStatus::Busy
    } else if assigned > 0 && done >= assigned {
        MemberStatus::Online
    } else if assigned == 0 {
        MemberStatus::Offline
    } else {
        MemberStatus::InProgress
    }
}

/// Computes progress for every member, in member order.
///
/// Tasks are joined to members by assignee name. Tasks naming nobody on the
/// team count for no one.
#[must_use]
pub fn compute_member_progress(members: &[TeamMember], tasks: &[Task]) -> Vec<MemberProgress> {
    members
        .iter()
        .map(|member| {
            let name = member.name().as_str();
            let (assigned, done) = tasks
                .iter()
                .filter(|task| task.is_assigned_to(name))
                .fold((0_usize, 0_usize), |(assigned, done), task| {
                    (assigned + 1, done + usize::from(task.completed()))
                });
            MemberProgress {
                member_id: member.id().cloned(),
                key: member.local_key(),
                name: member.name().clone(),
                assigned,
                done,
                progress: rounded_percentage(done, assigned),
                status: derive_status(assigned, done),
            }
        })
        .collect()
}

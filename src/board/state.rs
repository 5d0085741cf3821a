//! The in-memory collections and the optimistic apply step.

use crate::board::error::{BoardError, BoardResult};
use crate::store::{Document, DocumentId, EntityKind, LocalKey};
use crate::task::domain::{Task, TaskId, TaskPatch};
use crate::team::domain::{MemberId, MemberPatch, TeamMember};
use chrono::{DateTime, Utc};
use std::fmt;

/// A record kind the board edits optimistically.
///
/// Implemented for [`Task`] and [`TeamMember`] so that one apply, persist
/// and rollback path serves both collections.
pub trait TrackedRecord: Clone + Send + Sync + 'static {
    /// Store identifier type.
    type Id: Clone + PartialEq + fmt::Display + Send + Sync;
    /// Partial change type.
    type Patch: Clone + Send + Sync;

    /// Store collection of the kind.
    const KIND: EntityKind;

    /// Returns the store identifier, if persisted.
    fn record_id(&self) -> Option<&Self::Id>;

    /// Returns the in-memory identity.
    fn key(&self) -> LocalKey;

    /// Returns the raw document identifier.
    fn document_id(id: &Self::Id) -> &DocumentId;

    /// Records this identifier on a freshly created record.
    fn set_id(&mut self, id: DocumentId);

    /// Returns the collection holding this kind.
    fn collection(state: &BoardState) -> &[Self];

    /// Returns the collection holding this kind, mutably.
    fn collection_mut(state: &mut BoardState) -> &mut Vec<Self>;

    /// Rejects patches that would leave the record invalid.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing the problem.
    fn check_patch(&self, patch: &Self::Patch) -> BoardResult<()>;

    /// Writes `patch` and returns the values it replaced.
    fn apply_patch(&mut self, patch: &Self::Patch) -> Self::Patch;

    /// Restores `previous` wherever the record still holds `applied`.
    fn revert_patch(&mut self, applied: &Self::Patch, previous: &Self::Patch);

    /// Moves the fields of a failed patch's `previous` that `later` also
    /// wrote into `fallback`, the fallback patch of `later`.
    fn hand_down(previous: &mut Self::Patch, later: &Self::Patch, fallback: &mut Self::Patch);

    /// Drops the fields of `previous` that a later stored patch wrote.
    fn supersede(previous: &mut Self::Patch, later: &Self::Patch);

    /// Returns the unconfirmed patches of this kind, oldest first.
    fn in_flight_mut(state: &mut BoardState) -> &mut Vec<InFlight<Self::Id, Self::Patch>>;

    /// Adds the modification time to a patch.
    fn stamp(patch: Self::Patch, at: DateTime<Utc>) -> Self::Patch;

    /// Returns the partial store document of a patch.
    fn patch_document(patch: &Self::Patch) -> Document;

    /// Returns the full store document of the record.
    fn document(&self) -> Document;
}

impl TrackedRecord for Task {
    type Id = TaskId;
    type Patch = TaskPatch;

    const KIND: EntityKind = EntityKind::Task;

    fn record_id(&self) -> Option<&TaskId> {
        self.id()
    }

    fn key(&self) -> LocalKey {
        self.local_key()
    }

    fn document_id(id: &TaskId) -> &DocumentId {
        id.as_document_id()
    }

    fn set_id(&mut self, id: DocumentId) {
        self.assign_id(TaskId::from(id));
    }

    fn collection(state: &BoardState) -> &[Self] {
        &state.tasks
    }

    fn collection_mut(state: &mut BoardState) -> &mut Vec<Self> {
        &mut state.tasks
    }

    fn check_patch(&self, patch: &TaskPatch) -> BoardResult<()> {
        patch.check(self).map_err(BoardError::from)
    }

    fn apply_patch(&mut self, patch: &TaskPatch) -> TaskPatch {
        patch.apply_to(self)
    }

    fn revert_patch(&mut self, applied: &TaskPatch, previous: &TaskPatch) {
        applied.revert(self, previous);
    }

    fn hand_down(previous: &mut TaskPatch, later: &TaskPatch, fallback: &mut TaskPatch) {
        previous.hand_down(later, fallback);
    }

    fn supersede(previous: &mut TaskPatch, later: &TaskPatch) {
        previous.supersede(later);
    }

    fn in_flight_mut(state: &mut BoardState) -> &mut Vec<InFlight<TaskId, TaskPatch>> {
        &mut state.in_flight_tasks
    }

    fn stamp(patch: TaskPatch, at: DateTime<Utc>) -> TaskPatch {
        patch.touched_at(at)
    }

    fn patch_document(patch: &TaskPatch) -> Document {
        patch.to_document()
    }

    fn document(&self) -> Document {
        self.to_document()
    }
}

impl TrackedRecord for TeamMember {
    type Id = MemberId;
    type Patch = MemberPatch;

    const KIND: EntityKind = EntityKind::TeamMember;

    fn record_id(&self) -> Option<&MemberId> {
        self.id()
    }

    fn key(&self) -> LocalKey {
        self.local_key()
    }

    fn document_id(id: &MemberId) -> &DocumentId {
        id.as_document_id()
    }

    fn set_id(&mut self, id: DocumentId) {
        self.assign_id(MemberId::from(id));
    }

    fn collection(state: &BoardState) -> &[Self] {
        &state.members
    }

    fn collection_mut(state: &mut BoardState) -> &mut Vec<Self> {
        &mut state.members
    }

    fn check_patch(&self, _patch: &MemberPatch) -> BoardResult<()> {
        Ok(())
    }

    fn apply_patch(&mut self, patch: &MemberPatch) -> MemberPatch {
        patch.apply_to(self)
    }

    fn revert_patch(&mut self, applied: &MemberPatch, previous: &MemberPatch) {
        applied.revert(self, previous);
    }

    fn hand_down(previous: &mut MemberPatch, later: &MemberPatch, fallback: &mut MemberPatch) {
        previous.hand_down(later, fallback);
    }

    fn supersede(previous: &mut MemberPatch, later: &MemberPatch) {
        previous.supersede(later);
    }

    fn in_flight_mut(state: &mut BoardState) -> &mut Vec<InFlight<MemberId, MemberPatch>> {
        &mut state.in_flight_members
    }

    fn stamp(patch: MemberPatch, at: DateTime<Utc>) -> MemberPatch {
        patch.touched_at(at)
    }

    fn patch_document(patch: &MemberPatch) -> Document {
        patch.to_document()
    }

    fn document(&self) -> Document {
        self.to_document()
    }
}

/// Handle of one unconfirmed patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ticket(u64);

/// A patch shown on the board whose store write has not answered yet.
///
/// `previous` holds the value each written field falls back to should the
/// write fail. Entries of one record form a chain: a failing entry passes
/// its fallbacks to the next newer entry writing the same field, so the
/// last failure lands on the last durable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlight<I, P> {
    ticket: Ticket,
    id: I,
    applied: P,
    previous: P,
}

/// Tasks and members as currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    tasks: Vec<Task>,
    members: Vec<TeamMember>,
    in_flight_tasks: Vec<InFlight<TaskId, TaskPatch>>,
    in_flight_members: Vec<InFlight<MemberId, MemberPatch>>,
    next_ticket: u64,
}

impl BoardState {
    /// Creates a state from loaded collections.
    #[must_use]
    pub const fn new(tasks: Vec<Task>, members: Vec<TeamMember>) -> Self {
        Self {
            tasks,
            members,
            in_flight_tasks: Vec::new(),
            in_flight_members: Vec::new(),
            next_ticket: 0,
        }
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the members in display order.
    #[must_use]
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// Returns the record with the given store identifier.
    #[must_use]
    pub fn find<R: TrackedRecord>(&self, id: &R::Id) -> Option<&R> {
        R::collection(self)
            .iter()
            .find(|record| record.record_id() == Some(id))
    }

    fn find_mut<R: TrackedRecord>(&mut self, id: &R::Id) -> Option<&mut R> {
        R::collection_mut(self)
            .iter_mut()
            .find(|record| record.record_id() == Some(id))
    }

    /// Applies `patch` to the record and returns the values it replaced.
    ///
    /// Nothing changes when the record is missing or rejects the patch.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] for an unknown identifier, or the
    /// record's validation error.
    pub fn apply<R: TrackedRecord>(&mut self, id: &R::Id, patch: &R::Patch) -> BoardResult<R::Patch> {
        let record = self
            .find_mut::<R>(id)
            .ok_or_else(|| BoardError::NotFound {
                kind: R::KIND,
                id: R::document_id(id).clone(),
            })?;
        record.check_patch(patch)?;
        Ok(record.apply_patch(patch))
    }

    /// Applies `patch` like [`BoardState::apply`] and keeps it as
    /// unconfirmed until [`BoardState::settle`] or [`BoardState::roll_back`].
    pub(crate) fn track<R: TrackedRecord>(
        &mut self,
        id: &R::Id,
        patch: &R::Patch,
    ) -> BoardResult<Ticket> {
        let previous = self.apply::<R>(id, patch)?;
        let ticket = Ticket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        R::in_flight_mut(self).push(InFlight {
            ticket,
            id: id.clone(),
            applied: patch.clone(),
            previous,
        });
        Ok(ticket)
    }

    /// Marks a tracked patch as stored. Older unconfirmed patches of the
    /// record no longer restore the fields it wrote.
    pub(crate) fn settle<R: TrackedRecord>(&mut self, ticket: Ticket) {
        let in_flight = R::in_flight_mut(self);
        let Some(position) = in_flight.iter().position(|entry| entry.ticket == ticket) else {
            return;
        };
        let settled = in_flight.remove(position);
        for earlier in in_flight
            .iter_mut()
            .take(position)
            .filter(|entry| entry.id == settled.id)
        {
            R::supersede(&mut earlier.previous, &settled.applied);
        }
    }

    /// Undoes a tracked patch whose write failed.
    ///
    /// Fields a newer unconfirmed patch also wrote keep the newer value and
    /// hand their fallback on to it. Returns `false` when the patch or the
    /// record is no longer known, as after a reload.
    pub(crate) fn roll_back<R: TrackedRecord>(&mut self, ticket: Ticket) -> bool {
        let in_flight = R::in_flight_mut(self);
        let Some(position) = in_flight.iter().position(|entry| entry.ticket == ticket) else {
            return false;
        };
        let InFlight {
            id,
            applied,
            mut previous,
            ..
        } = in_flight.remove(position);
        for later in in_flight
            .iter_mut()
            .skip(position)
            .filter(|entry| entry.id == id)
        {
            R::hand_down(&mut previous, &later.applied, &mut later.previous);
        }
        self.revert::<R>(&id, &applied, &previous)
    }

    /// Undoes an earlier [`BoardState::apply`]. Returns `false` when the
    /// record has since been removed.
    pub(crate) fn revert<R: TrackedRecord>(
        &mut self,
        id: &R::Id,
        applied: &R::Patch,
        previous: &R::Patch,
    ) -> bool {
        self.find_mut::<R>(id).is_some_and(|record| {
            record.revert_patch(applied, previous);
            true
        })
    }

    /// Appends a record.
    pub(crate) fn insert<R: TrackedRecord>(&mut self, record: R) {
        R::collection_mut(self).push(record);
    }

    /// Re-inserts a removed record at its former position, or at the end
    /// when the collection has shrunk since.
    pub(crate) fn insert_at<R: TrackedRecord>(&mut self, index: usize, record: R) {
        let collection = R::collection_mut(self);
        let position = index.min(collection.len());
        collection.insert(position, record);
    }

    /// Records the store identifier of a freshly created record. Returns a
    /// copy of the record, or `None` when it has been removed meanwhile.
    pub(crate) fn assign_id<R: TrackedRecord>(&mut self, key: LocalKey, id: DocumentId) -> Option<R> {
        R::collection_mut(self)
            .iter_mut()
            .find(|record| record.key() == key)
            .map(|record| {
                record.set_id(id);
                record.clone()
            })
    }

    /// Removes the record with the given local key, returning it together
    /// with its former position.
    pub(crate) fn remove_by_key<R: TrackedRecord>(&mut self, key: LocalKey) -> Option<(usize, R)> {
        let collection = R::collection_mut(self);
        let index = collection
            .iter()
            .position(|record| record.key() == key)?;
        Some((index, collection.remove(index)))
    }
}

//! Merging of imported placeholder users into the real accounts sharing their nickname.

use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{registration::RegistrationRepository, slot::SlotRepository, user::UserRepository},
    error::AppError,
    model::user::User,
};

/// A user sharing a nickname with at least one other user.
#[derive(Debug, Clone)]
pub struct DuplicateUser {
    pub user: User,
    pub assigned_slots: u64,
    pub registrations: u64,
}

/// What happens to one group of users sharing a nickname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Exactly one real user; the imported users can be folded into it.
    Mergeable { target: Uuid, sources: Vec<Uuid> },
    /// The imported users were folded into the target and deleted.
    Merged { target: Uuid, sources: Vec<Uuid> },
    /// More than one real user; needs manual review.
    MultipleReal,
    /// Only imported users; nothing to merge into.
    AllImported,
}

impl MergeOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::MultipleReal | Self::AllImported)
    }
}

#[derive(Debug, Clone)]
pub struct DuplicateGroup {
    pub nickname: String,
    pub users: Vec<DuplicateUser>,
    pub outcome: MergeOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct MergeReport {
    pub groups: Vec<DuplicateGroup>,
}

impl MergeReport {
    /// Imported users merged, or mergeable when nothing was applied.
    pub fn merged_users(&self) -> usize {
        self.groups
            .iter()
            .map(|g| match &g.outcome {
                MergeOutcome::Mergeable { sources, .. } | MergeOutcome::Merged { sources, .. } => {
                    sources.len()
                }
                _ => 0,
            })
            .sum()
    }

    pub fn skipped_groups(&self) -> usize {
        self.groups.iter().filter(|g| g.outcome.is_skipped()).count()
    }
}

/// Counts of what a single merge moved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeCounts {
    pub slots: u64,
    pub registrations: u64,
    pub dropped_registrations: u64,
}

pub struct MergeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MergeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds users sharing a nickname and optionally merges them.
    ///
    /// # Arguments
    /// - `apply` - Perform mergeable merges; otherwise only report them
    ///
    /// # Returns
    /// - `Ok(MergeReport)` - One entry per duplicated nickname
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn merge_duplicates(&self, apply: bool) -> Result<MergeReport, AppError> {
        let user_repo = UserRepository::new(self.db);
        let slot_repo = SlotRepository::new(self.db);
        let registration_repo = RegistrationRepository::new(self.db);

        let mut report = MergeReport::default();

        for (nickname, users) in user_repo.get_duplicate_nicknames().await? {
            let mut entries = Vec::with_capacity(users.len());
            for user in users {
                entries.push(DuplicateUser {
                    assigned_slots: slot_repo.count_assigned(user.uid).await?,
                    registrations: registration_repo.get_by_user(user.uid).await?.len() as u64,
                    user,
                });
            }

            let mut outcome = classify(&entries);
            if apply {
                if let MergeOutcome::Mergeable { target, sources } = outcome {
                    let target_user = entries
                        .iter()
                        .map(|e| &e.user)
                        .find(|u| u.uid == target)
                        .cloned()
                        .ok_or_else(|| AppError::InternalError("Merge target vanished".into()))?;
                    let source_users: Vec<User> = entries
                        .iter()
                        .map(|e| e.user.clone())
                        .filter(|u| sources.contains(&u.uid))
                        .collect();

                    self.merge(&target_user, &source_users).await?;
                    outcome = MergeOutcome::Merged { target, sources };
                }
            }

            report.groups.push(DuplicateGroup {
                nickname,
                users: entries,
                outcome,
            });
        }

        Ok(report)
    }

    /// Folds `sources` into `target` in one transaction and deletes them.
    ///
    /// Slot assignments and registrations move to the target; registrations the target
    /// already holds for the same slot are dropped. The first source community is
    /// carried over when the target has none.
    pub async fn merge(&self, target: &User, sources: &[User]) -> Result<MergeCounts, AppError> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        let slot_repo = SlotRepository::new(&txn);
        let registration_repo = RegistrationRepository::new(&txn);

        let mut counts = MergeCounts::default();
        let mut target_community = target.community_uid();

        for source in sources {
            match (source.community_uid(), target_community) {
                (Some(community_uid), None) => {
                    user_repo.set_community(target.uid, Some(community_uid)).await?;
                    target_community = Some(community_uid);
                }
                (Some(source_community), Some(kept)) if source_community != kept => {
                    tracing::warn!(
                        "Imported user {} has a different community, keeping {}",
                        source.uid,
                        kept
                    );
                }
                _ => {}
            }

            counts.slots += slot_repo.reassign_user(source.uid, target.uid).await?;

            for registration in registration_repo.get_by_user(source.uid).await? {
                let duplicate = registration_repo
                    .find_by_user_and_slot(target.uid, registration.slot_uid)
                    .await?
                    .is_some();

                if duplicate {
                    registration_repo.delete(registration.uid).await?;
                    counts.dropped_registrations += 1;
                } else {
                    registration_repo.set_user(registration, target.uid).await?;
                    counts.registrations += 1;
                }
            }

            user_repo.delete(source.uid).await?;
            tracing::info!("Merged imported user {} into {}", source.uid, target.uid);
        }

        txn.commit().await?;

        Ok(counts)
    }
}

fn classify(entries: &[DuplicateUser]) -> MergeOutcome {
    let (imported, real): (Vec<&User>, Vec<&User>) = entries
        .iter()
        .map(|e| &e.user)
        .partition(|u| u.is_imported());

    match real.as_slice() {
        [target] if !imported.is_empty() => MergeOutcome::Mergeable {
            target: target.uid,
            sources: imported.iter().map(|u| u.uid).collect(),
        },
        [] => MergeOutcome::AllImported,
        _ => MergeOutcome::MultipleReal,
    }
}

//! Slot registrations and their confirmation by mission editors.

use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{registration::RegistrationRepository, slot::SlotRepository},
    error::AppError,
    model::{
        notification::SLOT_ASSIGNED,
        page::{PageParams, Paginated},
        registration::Registration,
        user::User,
    },
    service::slot::{notify_slot, SlotService},
};

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the registrations for a slot, oldest first.
    pub async fn list(
        &self,
        mission_uid: Uuid,
        slot_uid: Uuid,
        page: PageParams,
    ) -> Result<Paginated<Registration>, AppError> {
        SlotService::new(self.db)
            .find_slot(mission_uid, slot_uid)
            .await?;

        Ok(RegistrationRepository::new(self.db)
            .get_by_slot_paginated(slot_uid, page)
            .await?)
    }

    /// Registers `user` for a slot.
    ///
    /// # Arguments
    /// - `mission_uid` - Mission owning the slot
    /// - `slot_uid` - Slot to register for
    /// - `user` - Registering user
    /// - `comment` - Optional note for the mission editors
    ///
    /// # Returns
    /// - `Ok(Registration)` - The pending registration
    /// - `Err(AppError::BadRequest)` - Already registered or the slot is blocked
    /// - `Err(AppError::Forbidden)` - The slot is restricted to another community
    /// - `Err(AppError::NotFound)` - Unknown slot
    pub async fn register(
        &self,
        mission_uid: Uuid,
        slot_uid: Uuid,
        user: &User,
        comment: Option<String>,
    ) -> Result<Registration, AppError> {
        let slot = SlotService::new(self.db)
            .find_slot(mission_uid, slot_uid)
            .await?;

        if slot.blocked {
            return Err(AppError::BadRequest(
                "Slot is blocked and does not accept registrations".to_string(),
            ));
        }
        if let Some(restricted) = slot.restricted_community_uid {
            if user.community_uid() != Some(restricted) {
                return Err(AppError::Forbidden(
                    "Slot is restricted to another community".to_string(),
                ));
            }
        }

        let duplicate = || AppError::BadRequest("Already registered for this slot".to_string());
        let registration_repo = RegistrationRepository::new(self.db);
        if registration_repo
            .find_by_user_and_slot(user.uid, slot_uid)
            .await?
            .is_some()
        {
            return Err(duplicate());
        }

        let comment = comment.filter(|c| !c.trim().is_empty());
        let created = registration_repo
            .create(None, user.uid, slot_uid, comment)
            .await
            .map_err(|e| AppError::on_unique_violation(e, duplicate))?;

        tracing::debug!("User {} registered for slot {}", user.uid, slot_uid);

        Ok(Registration {
            uid: created.uid,
            slot_uid: created.slot_uid,
            user: user.summary(),
            comment: created.comment,
            created_at: created.created_at,
        })
    }

    /// Confirms or keeps a registration pending.
    ///
    /// Confirming assigns the slot to the registrant, deletes the registration and
    /// notifies the registrant unless `suppress_notifications` is set.
    ///
    /// # Returns
    /// - `Ok((Registration, bool))` - The registration and whether it was confirmed
    /// - `Err(AppError::BadRequest)` - Confirming a slot that is already assigned
    /// - `Err(AppError::NotFound)` - Unknown slot or registration
    pub async fn update(
        &self,
        mission: &entity::mission::Model,
        slot_uid: Uuid,
        registration_uid: Uuid,
        confirmed: bool,
        suppress_notifications: bool,
    ) -> Result<(Registration, bool), AppError> {
        let slot = SlotService::new(self.db)
            .find_slot(mission.uid, slot_uid)
            .await?;
        let registration = self.find(slot_uid, registration_uid).await?;

        if !confirmed {
            return Ok((registration, false));
        }
        if slot.assignee_uid.is_some() {
            return Err(AppError::BadRequest("Slot is already assigned".to_string()));
        }

        let user_uid = registration.user.uid;

        let txn = self.db.begin().await?;
        let updated = SlotRepository::new(&txn)
            .set_assignee(slot_uid, Some(user_uid))
            .await?;
        RegistrationRepository::new(&txn)
            .delete(registration_uid)
            .await?;
        if !suppress_notifications {
            notify_slot(&txn, user_uid, SLOT_ASSIGNED, mission, &updated).await?;
        }
        txn.commit().await?;

        tracing::info!(
            "Confirmed registration {} assigning user {} to slot {}",
            registration_uid,
            user_uid,
            slot_uid
        );

        Ok((registration, true))
    }

    /// Deletes a registration.
    ///
    /// # Arguments
    /// - `actor_uid` - Caller deleting the registration
    /// - `can_manage` - Whether the caller may delete other users' registrations
    ///
    /// # Returns
    /// - `Ok(())` - Registration deleted
    /// - `Err(AppError::Forbidden)` - Someone else's registration and `can_manage` is false
    pub async fn delete(
        &self,
        mission_uid: Uuid,
        slot_uid: Uuid,
        registration_uid: Uuid,
        actor_uid: Uuid,
        can_manage: bool,
    ) -> Result<(), AppError> {
        SlotService::new(self.db)
            .find_slot(mission_uid, slot_uid)
            .await?;
        let registration = self.find(slot_uid, registration_uid).await?;

        if registration.user.uid != actor_uid && !can_manage {
            return Err(AppError::Forbidden(
                "Cannot delete another user's registration".to_string(),
            ));
        }

        RegistrationRepository::new(self.db)
            .delete(registration_uid)
            .await?;

        Ok(())
    }

    async fn find(&self, slot_uid: Uuid, registration_uid: Uuid) -> Result<Registration, AppError> {
        match RegistrationRepository::new(self.db)
            .find_hydrated(registration_uid)
            .await?
        {
            Some(registration) if registration.slot_uid == slot_uid => Ok(registration),
            _ => Err(AppError::NotFound("Registration not found".to_string())),
        }
    }
}

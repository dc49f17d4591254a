use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::mission::MissionAccess;

pub struct MissionAccessRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MissionAccessRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Grants access to a user or a community; exactly one should be set.
    pub async fn create(
        &self,
        mission_uid: Uuid,
        user_uid: Option<Uuid>,
        community_uid: Option<Uuid>,
    ) -> Result<MissionAccess, DbErr> {
        let now = Utc::now();
        let entity = entity::mission_access::ActiveModel {
            uid: ActiveValue::Set(Uuid::new_v4()),
            mission_uid: ActiveValue::Set(mission_uid),
            user_uid: ActiveValue::Set(user_uid),
            community_uid: ActiveValue::Set(community_uid),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(MissionAccess::from_entity(entity))
    }

    pub async fn get_by_mission(&self, mission_uid: Uuid) -> Result<Vec<MissionAccess>, DbErr> {
        let entities = entity::prelude::MissionAccess::find()
            .filter(entity::mission_access::Column::MissionUid.eq(mission_uid))
            .order_by_asc(entity::mission_access::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MissionAccess::from_entity).collect())
    }

    pub async fn find_by_uid(&self, uid: Uuid) -> Result<Option<MissionAccess>, DbErr> {
        let entity = entity::prelude::MissionAccess::find_by_id(uid)
            .one(self.db)
            .await?;

        Ok(entity.map(MissionAccess::from_entity))
    }

    pub async fn delete(&self, uid: Uuid) -> Result<(), DbErr> {
        entity::prelude::MissionAccess::delete_by_id(uid)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Uids of missions granting access to the user directly or through their community.
    pub async fn get_mission_uids_for(
        &self,
        user_uid: Uuid,
        community_uid: Option<Uuid>,
    ) -> Result<Vec<Uuid>, DbErr> {
        let uids: Vec<Uuid> = entity::prelude::MissionAccess::find()
            .select_only()
            .column(entity::mission_access::Column::MissionUid)
            .filter(grantee_condition(user_uid, community_uid))
            .distinct()
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(uids)
    }

    /// Whether the user has an access grant for the mission.
    pub async fn has_access(
        &self,
        mission_uid: Uuid,
        user_uid: Uuid,
        community_uid: Option<Uuid>,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::MissionAccess::find()
            .filter(entity::mission_access::Column::MissionUid.eq(mission_uid))
            .filter(grantee_condition(user_uid, community_uid))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

fn grantee_condition(user_uid: Uuid, community_uid: Option<Uuid>) -> Condition {
    let mut condition =
        Condition::any().add(entity::mission_access::Column::UserUid.eq(user_uid));
    if let Some(community_uid) = community_uid {
        condition = condition.add(entity::mission_access::Column::CommunityUid.eq(community_uid));
    }

    condition
}

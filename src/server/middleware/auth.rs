use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{permission::PermissionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{mission::MissionViewer, user::User},
    state::AppState,
    util::{
        jwt::Claims,
        permission::{PermissionTree, WILDCARD},
    },
};

/// Permission granting every mission-level operation.
pub const ADMIN_MISSION: &str = "admin.mission";
pub const ADMIN_COMMUNITY: &str = "admin.community";
pub const ADMIN_USER: &str = "admin.user";
pub const ADMIN_PERMISSION: &str = "admin.permission";
pub const ADMIN_SLOT_TEMPLATE: &str = "admin.slotTemplate";
pub const MISSION_IMPORT: &str = "mission.import";
pub const SLOT_ASSIGN: &str = "mission.slot.assign";

/// Claims of the request's bearer token, `None` when absent or invalid.
///
/// Accepts `Authorization: Bearer <jwt>` and the legacy `Authorization: JWT <jwt>`.
/// Invalid tokens are treated like a missing one, so routes that only optionally
/// authenticate keep working for anonymous callers.
#[derive(Debug, Clone, Default)]
pub struct AuthToken(pub Option<Claims>);

impl FromRequestParts<AppState> for AuthToken {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .and_then(|token| state.jwt.decode(token));

        Ok(Self(claims))
    }
}

/// Strips the `Bearer ` or `JWT ` scheme from an Authorization header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();

    if token.is_empty() {
        return None;
    }

    if scheme.eq_ignore_ascii_case("bearer") || scheme.eq_ignore_ascii_case("jwt") {
        Some(token)
    } else {
        None
    }
}

/// Access requirement checked by [`AuthGuard::require`].
#[derive(Debug, Clone)]
pub enum Permission {
    /// Holds any of the given permission strings.
    Any(Vec<String>),
    /// `community.{slug}.leader` or `admin.community`.
    CommunityLeader(String),
    /// Leader, `community.{slug}.recruitment` or `admin.community`.
    CommunityRecruitment(String),
    /// Mission creator, `mission.{slug}.creator`, `mission.{slug}.editor` or `admin.mission`.
    MissionEditor { slug: String, creator_uid: Uuid },
    /// Mission editor, `mission.slot.assign` or `admin.*`.
    SlotAssigner { slug: String, creator_uid: Uuid },
    /// Acting on the given user's own record, or holding the permission.
    SelfOr(Uuid, String),
}

/// Authenticated caller with the permissions loaded from the database.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub permissions: Vec<String>,
}

impl CurrentUser {
    pub fn uid(&self) -> Uuid {
        self.user.uid
    }

    /// Whether the caller holds any of `targets`, global bypasses included.
    pub fn has_permission(&self, targets: &[&str]) -> bool {
        !self.permissions.is_empty()
            && PermissionTree::parse(&self.permissions).has_permission(targets)
    }

    pub fn is_mission_editor(&self, slug: &str, creator_uid: Uuid) -> bool {
        self.user.uid == creator_uid
            || self.has_permission(&[
                &format!("mission.{}.creator", slug),
                &format!("mission.{}.editor", slug),
                ADMIN_MISSION,
            ])
    }

    pub fn can_assign_slots(&self, slug: &str, creator_uid: Uuid) -> bool {
        self.is_mission_editor(slug, creator_uid) || self.has_permission(&[SLOT_ASSIGN, "admin.*"])
    }

    pub fn is_community_leader(&self, slug: &str) -> bool {
        self.has_permission(&[&format!("community.{}.leader", slug), ADMIN_COMMUNITY])
    }

    /// Visibility context for mission queries.
    ///
    /// Editor grants go through the permission tree, so `mission.{slug}.*` counts
    /// for that slug and a slug-level wildcard such as `mission.*.editor` sees every
    /// mission like `admin.mission` does.
    pub fn viewer(&self) -> MissionViewer {
        let tree = PermissionTree::parse(&self.permissions);
        let edits = |slug: &str| {
            tree.has_permission(&[
                format!("mission.{}.creator", slug),
                format!("mission.{}.editor", slug),
            ])
        };
        let is_admin = !self.permissions.is_empty()
            && (tree.has_permission(&[ADMIN_MISSION]) || edits(WILDCARD));

        let mut editable_slugs: Vec<String> = Vec::new();
        if !is_admin {
            for permission in &self.permissions {
                let permission = permission.to_lowercase();
                let Some(slug) = permission
                    .strip_prefix("mission.")
                    .and_then(|rest| rest.split('.').next())
                else {
                    continue;
                };
                if slug != WILDCARD && !editable_slugs.iter().any(|s| s == slug) && edits(slug) {
                    editable_slugs.push(slug.to_string());
                }
            }
        }

        MissionViewer {
            user_uid: Some(self.user.uid),
            community_uid: self.user.community_uid(),
            is_admin,
            editable_slugs,
        }
    }

    fn satisfies(&self, permission: &Permission) -> bool {
        match permission {
            Permission::Any(targets) => {
                let targets: Vec<&str> = targets.iter().map(String::as_str).collect();
                self.has_permission(&targets)
            }
            Permission::CommunityLeader(slug) => self.is_community_leader(slug),
            Permission::CommunityRecruitment(slug) => self.has_permission(&[
                &format!("community.{}.leader", slug),
                &format!("community.{}.recruitment", slug),
                ADMIN_COMMUNITY,
            ]),
            Permission::MissionEditor { slug, creator_uid } => {
                self.is_mission_editor(slug, *creator_uid)
            }
            Permission::SlotAssigner { slug, creator_uid } => {
                self.can_assign_slots(slug, *creator_uid)
            }
            Permission::SelfOr(uid, target) => {
                self.user.uid == *uid || self.has_permission(&[target.as_str()])
            }
        }
    }
}

/// Visibility context for an optional caller.
pub fn viewer_of(user: Option<&CurrentUser>) -> MissionViewer {
    user.map(CurrentUser::viewer)
        .unwrap_or_else(MissionViewer::anonymous)
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    token: &'a AuthToken,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, token: &'a AuthToken) -> Self {
        Self { db, token }
    }

    /// Resolves the token to an active user.
    ///
    /// # Returns
    /// - `Ok(CurrentUser)` - Caller with permissions freshly read from the database
    /// - `Err(AuthError::MissingToken)` - No valid token on the request
    /// - `Err(AuthError::UserNotFound)` - Token user no longer exists
    /// - `Err(AuthError::UserDeactivated)` - Token user was deactivated
    pub async fn authenticate(&self) -> Result<CurrentUser, AppError> {
        let Some(claims) = &self.token.0 else {
            return Err(AuthError::MissingToken.into());
        };
        let uid = claims.user.uid;

        let Some(user) = UserRepository::new(self.db).find_by_uid(uid).await? else {
            return Err(AuthError::UserNotFound(uid).into());
        };
        if !user.active {
            return Err(AuthError::UserDeactivated(uid).into());
        }

        let permissions = PermissionRepository::new(self.db).get_strings(uid).await?;

        Ok(CurrentUser { user, permissions })
    }

    /// Like [`Self::authenticate`] but yields `None` for anonymous callers and for
    /// tokens whose user vanished or was deactivated.
    pub async fn optional(&self) -> Result<Option<CurrentUser>, AppError> {
        match self.authenticate().await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::AuthErr(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Authenticates and checks that every requirement is met.
    ///
    /// # Arguments
    /// - `permissions` - Requirements, all of which must hold
    ///
    /// # Returns
    /// - `Ok(CurrentUser)` - Caller satisfying every requirement
    /// - `Err(AuthError::AccessDenied)` - A requirement failed
    /// - `Err(AppError)` - Authentication failed, see [`Self::authenticate`]
    pub async fn require(&self, permissions: &[Permission]) -> Result<CurrentUser, AppError> {
        let user = self.authenticate().await?;

        for permission in permissions {
            if !user.satisfies(permission) {
                return Err(AuthError::AccessDenied(
                    user.uid(),
                    format!("missing required permission {:?}", permission),
                )
                .into());
            }
        }

        Ok(user)
    }
}

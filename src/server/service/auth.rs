//! Token issuing and account management for the authenticated caller.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{permission::PermissionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, UpdateUserParams, User},
    service::steam::SteamService,
    util::jwt::JwtKeys,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Signs a token for `user` carrying their current permissions.
    pub async fn issue_token(&self, user: &User) -> Result<String, AppError> {
        let permissions = PermissionRepository::new(self.db)
            .get_strings(user.uid)
            .await?;

        self.jwt.issue(user.to_token_dto(), permissions)
    }

    /// Logs in the owner of `steam_id`, creating the user on first login.
    ///
    /// # Arguments
    /// - `steam_id` - Verified Steam ID from the OpenID callback
    /// - `steam` - Used to look up the nickname of a first-time user
    ///
    /// # Returns
    /// - `Ok((String, User))` - Fresh token and the logged in user
    /// - `Err(AuthError::UserDeactivated)` - The account has been deactivated
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(
        &self,
        steam_id: &str,
        steam: &SteamService<'_>,
    ) -> Result<(String, User), AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = match user_repo.find_by_steam_id(steam_id).await? {
            Some(user) => {
                if !user.active {
                    return Err(AuthError::UserDeactivated(user.uid).into());
                }
                user
            }
            None => {
                let nickname = steam.player_nickname(steam_id).await;
                self.register(steam_id, nickname).await?
            }
        };

        let token = self.issue_token(&user).await?;

        Ok((token, user))
    }

    /// Creates a new user for a first-time Steam login.
    pub async fn register(&self, steam_id: &str, nickname: String) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .create(CreateUserParams {
                uid: None,
                nickname,
                steam_id: steam_id.to_string(),
                community_uid: None,
            })
            .await?;

        tracing::info!("Registered user {} for Steam ID {}", user.uid, steam_id);

        Ok(user)
    }

    /// Re-issues a token with the user's current profile and permissions.
    ///
    /// # Returns
    /// - `Ok((String, User))` - Fresh token and the user
    /// - `Err(AuthError::UserNotFound)` - The user has been deleted
    /// - `Err(AuthError::UserDeactivated)` - The user has been deactivated
    pub async fn refresh(&self, uid: Uuid) -> Result<(String, User), AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_uid(uid).await? else {
            return Err(AuthError::UserNotFound(uid).into());
        };
        if !user.active {
            return Err(AuthError::UserDeactivated(uid).into());
        }

        let token = self.issue_token(&user).await?;

        Ok((token, user))
    }

    /// Returns the user together with their permission strings.
    pub async fn account(&self, uid: Uuid) -> Result<(User, Vec<String>), AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_uid(uid).await? else {
            return Err(AuthError::UserNotFound(uid).into());
        };
        let permissions = PermissionRepository::new(self.db).get_strings(uid).await?;

        Ok((user, permissions))
    }

    /// Changes the caller's nickname and re-issues their token.
    pub async fn update_account(
        &self,
        uid: Uuid,
        nickname: String,
    ) -> Result<(String, User, Vec<String>), AppError> {
        let nickname = nickname.trim().to_string();
        if nickname.is_empty() {
            return Err(AppError::BadRequest("Nickname must not be empty".to_string()));
        }

        let Some(user) = UserRepository::new(self.db)
            .update(
                uid,
                UpdateUserParams {
                    nickname: Some(nickname),
                    active: None,
                },
            )
            .await?
        else {
            return Err(AuthError::UserNotFound(uid).into());
        };

        let permissions = PermissionRepository::new(self.db).get_strings(uid).await?;
        let token = self.jwt.issue(user.to_token_dto(), permissions.clone())?;

        Ok((token, user, permissions))
    }

    /// Deletes the caller's account after they confirmed it by repeating their nickname.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::Conflict)` - The nickname does not match the stored one
    /// - `Err(AuthError::UserNotFound)` - The user no longer exists
    pub async fn delete_account(&self, uid: Uuid, nickname: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_uid(uid).await? else {
            return Err(AuthError::UserNotFound(uid).into());
        };
        if user.nickname != nickname {
            return Err(AppError::Conflict(
                "Nickname does not match the account".to_string(),
            ));
        }

        user_repo.delete(uid).await?;
        tracing::info!("User {} deleted their account", uid);

        Ok(())
    }
}

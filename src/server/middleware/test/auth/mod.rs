use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, AuthToken, Permission},
    util::jwt::JwtKeys,
};
use jsonwebtoken::Algorithm;
use test_utils::{builder::TestBuilder, factory};

mod authenticate;
mod require;
mod viewer;

fn keys() -> JwtKeys {
    JwtKeys::new(
        "guard-test-secret",
        Algorithm::HS256,
        "https://slotlist.test",
        "https://slotlist.test",
        3600,
    )
}

/// Signs a token for the user row and decodes it the way the extractor does.
fn token_for(user: &entity::user::Model) -> AuthToken {
    let keys = keys();
    let token = keys
        .issue(
            crate::model::auth::TokenUserDto {
                uid: user.uid,
                nickname: user.nickname.clone(),
                steam_id: user.steam_id.clone(),
                community: None,
                active: user.active,
            },
            vec![],
        )
        .unwrap();

    AuthToken(keys.decode(&token))
}

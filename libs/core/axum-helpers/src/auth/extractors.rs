use super::jwt::{AuthError, JwtClaims, Role};
use crate::errors::AppError;
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Authenticated caller. Rejects with 401 when no verified claims are present.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub roles: Vec<String>,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.roles
            .iter()
            .any(|r| r.eq_ignore_ascii_case(&Role::Admin.to_string()))
    }
}

impl TryFrom<&JwtClaims> for CurrentUser {
    type Error = AuthError;

    fn try_from(claims: &JwtClaims) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidSubject)?;
        Ok(Self {
            id,
            roles: claims.roles.clone(),
        })
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<JwtClaims>()
            .ok_or_else(|| AppError::from(AuthError::MissingToken).into_response())?;

        CurrentUser::try_from(claims).map_err(|e| AppError::from(e).into_response())
    }
}

/// Authenticated caller holding the `admin` role; 403 for everyone else.
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            tracing::info!(user_id = %user.id, "Admin route denied");
            return Err(AppError::Forbidden(
                "Chỉ quản trị viên mới được thực hiện thao tác này".to_string(),
            )
            .into_response());
        }
        Ok(AdminUser(user))
    }
}

/// Users API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use roster_core::{
    types::{CreateUser, UpdateUser, User, UserId},
    RosterError,
};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<i64>,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(req: CreateUserRequest) -> Self {
        CreateUser::new(
            req.name.unwrap_or_default(),
            req.email.unwrap_or_default(),
            req.phone,
        )
    }
}

/// Partial update; every field is optional
///
/// `phone: null` clears the stored number, an absent `phone` keeps it.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub phone: Option<Option<i64>>,
}

impl UpdateUserRequest {
    /// Reject fields that are present but empty
    pub fn validate(&self) -> Result<()> {
        let empty: Vec<&str> = [("name", &self.name), ("email", &self.email)]
            .into_iter()
            .filter(|(_, value)| value.as_deref() == Some(""))
            .map(|(field, _)| field)
            .collect();

        if empty.is_empty() {
            Ok(())
        } else {
            Err(RosterError::validation(format!(
                "fields must not be empty: {}",
                empty.join(", ")
            ))
            .into())
        }
    }

    /// Merge onto the stored user; absent fields keep their stored values
    pub fn apply_to(self, existing: &User) -> UpdateUser {
        let mut update = UpdateUser::from(existing);
        if let Some(name) = self.name {
            update.name = name;
        }
        if let Some(email) = self.email {
            update.email = email;
        }
        if let Some(phone) = self.phone {
            update.phone = phone;
        }
        update
    }
}

fn explicit_null<'de, D>(deserializer: D) -> std::result::Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

fn json_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))
}

// Non-integer ids have no route, same as an unknown id
fn user_id(id: std::result::Result<Path<UserId>, PathRejection>) -> Result<UserId> {
    id.map(|Path(id)| id)
        .map_err(|_| ServerError::NotFound("User not found".to_string()))
}

/// POST /users
/// Create a new user
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>)> {
    let new_user = CreateUser::from(json_body(payload)?);
    new_user.validate()?;

    let user = app_state.store.create_user(new_user).await?;
    tracing::info!(user_id = user.id, "created user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users
/// Get all users
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.store.get_all_users().await?;
    tracing::debug!(count = users.len(), "listed users");
    Ok(Json(users))
}

/// GET /users/:id
/// Get a single user
pub async fn get_user(
    id: std::result::Result<Path<UserId>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let id = user_id(id)?;
    let user = app_state
        .store
        .get_user(id)
        .await?
        .ok_or(RosterError::UserNotFound(id))?;

    Ok(Json(user))
}

/// PUT /users/:id
/// Replace the provided fields of a user
pub async fn update_user(
    id: std::result::Result<Path<UserId>, PathRejection>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<User>> {
    let id = user_id(id)?;
    let req = json_body(payload)?;
    req.validate()?;

    let existing = app_state
        .store
        .get_user(id)
        .await?
        .ok_or(RosterError::UserNotFound(id))?;

    let user = app_state
        .store
        .update_user(id, req.apply_to(&existing))
        .await?;
    tracing::info!(user_id = id, "updated user");

    Ok(Json(user))
}

/// DELETE /users/:id
/// Delete a user
pub async fn delete_user(
    id: std::result::Result<Path<UserId>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    let id = user_id(id)?;
    app_state.store.delete_user(id).await?;
    tracing::info!(user_id = id, "deleted user");

    Ok(StatusCode::NO_CONTENT)
}

//! Users API handlers.
//!
//! ```text
//! GET    /users
//! POST   /user?username=..&age=..   {"id":1,"username":"UrbanUser","age":24}
//! PUT    /user/{id}?username=..&age=..
//! DELETE /user/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Age, User, UserId, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{map_user_validation_error, parse_user_id};

/// Request body for `POST /user`.
///
/// Example JSON:
/// `{"id":1,"username":"UrbanUser","age":24}`
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UserRequest {
    /// Caller-chosen identifier, 0 or greater; must not already be registered.
    #[schema(example = 1, minimum = 0)]
    pub id: i64,
    /// Username, 5 to 20 characters.
    #[schema(example = "UrbanUser")]
    pub username: String,
    /// Age in years, 18 to 120.
    #[schema(example = 24)]
    pub age: i64,
}

/// Optional query fields overriding the `POST /user` body.
#[derive(Debug, Clone, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProfileOverrides {
    /// Replaces `username` from the body when present.
    #[param(example = "UrbanUser")]
    pub username: Option<String>,
    /// Replaces `age` from the body when present.
    #[param(example = 24)]
    pub age: Option<i64>,
}

/// Query fields required by `PUT /user/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProfileParams {
    /// New username, 5 to 20 characters.
    #[param(example = "UpdatedUser")]
    pub username: String,
    /// New age in years, 18 to 120.
    #[param(example = 30)]
    pub age: i64,
}

/// Merge the create body with explicit query overrides.
///
/// Each override that is present replaces the matching body field; the
/// identifier always comes from the body. Validation runs on the merged
/// result.
pub fn merge_create_request(body: UserRequest, overrides: ProfileOverrides) -> UserRequest {
    UserRequest {
        id: body.id,
        username: overrides.username.unwrap_or(body.username),
        age: overrides.age.unwrap_or(body.age),
    }
}

impl TryFrom<UserRequest> for User {
    type Error = crate::domain::Error;

    fn try_from(value: UserRequest) -> Result<Self, Self::Error> {
        let id = parse_user_id(value.id)?;
        User::try_from_parts(id.get(), value.username, value.age)
            .map_err(map_user_validation_error)
    }
}

fn parse_profile(params: ProfileParams) -> ApiResult<(Username, Age)> {
    let username = Username::new(params.username).map_err(map_user_validation_error)?;
    let age = Age::new(params.age).map_err(map_user_validation_error)?;
    Ok((username, age))
}

/// List every registered user in insertion order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_registry::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Registered users", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users))
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/user",
    request_body = UserRequest,
    params(ProfileOverrides),
    responses(
        (status = 201, description = "User registered", body = UserSchema),
        (status = 400, description = "Identifier already registered", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/user")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
    overrides: web::Query<ProfileOverrides>,
) -> ApiResult<HttpResponse> {
    let request = merge_create_request(payload.into_inner(), overrides.into_inner());
    let user = User::try_from(request)?;
    let created = state.users_command.create_user(user).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Replace the username and age of an existing user.
#[utoipa::path(
    put,
    path = "/user/{id}",
    params(
        ("id" = i64, Path, description = "Identifier of the user to update, 0 or greater"),
        ProfileParams
    ),
    responses(
        (status = 200, description = "User updated", body = UserSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/user/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    params: web::Query<ProfileParams>,
) -> ApiResult<web::Json<User>> {
    let id: UserId = parse_user_id(path.into_inner())?;
    let (username, age) = parse_profile(params.into_inner())?;
    let updated = state.users_command.update_user(id, username, age).await?;
    Ok(web::Json(updated))
}

/// Remove a user and return the removed record.
#[utoipa::path(
    delete,
    path = "/user/{id}",
    params(
        ("id" = i64, Path, description = "Identifier of the user to delete, 0 or greater")
    ),
    responses(
        (status = 200, description = "User deleted", body = UserSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/user/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(path.into_inner())?;
    let removed = state.users_command.delete_user(id).await?;
    Ok(web::Json(removed))
}

#[cfg(test)]
mod tests;

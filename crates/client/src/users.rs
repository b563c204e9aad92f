//! Users resource client

use crate::error::ApiResult;
use crate::http::{ApiResponse, HttpClient};
use crate::model::{User, UserPatch};

/// Client for the `/users` resource
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: HttpClient,
}

impl UsersClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// GET /users
    pub async fn list(&self) -> ApiResult<ApiResponse> {
        self.http.get("/users").await
    }

    /// GET /users/{id}
    pub async fn get(&self, id: u64) -> ApiResult<ApiResponse> {
        self.http.get(&format!("/users/{id}")).await
    }

    /// POST /users
    pub async fn create(&self, user: &User) -> ApiResult<ApiResponse> {
        self.http.post("/users", user).await
    }

    /// PUT /users/{id}
    pub async fn replace(&self, id: u64, user: &User) -> ApiResult<ApiResponse> {
        self.http.put(&format!("/users/{id}"), user).await
    }

    /// PATCH /users/{id}
    pub async fn update(&self, id: u64, patch: &UserPatch) -> ApiResult<ApiResponse> {
        self.http.patch(&format!("/users/{id}"), patch).await
    }

    /// DELETE /users/{id}
    pub async fn delete(&self, id: u64) -> ApiResult<ApiResponse> {
        self.http.delete(&format!("/users/{id}")).await
    }

    /// GET /users?username={username}
    pub async fn by_username(&self, username: &str) -> ApiResult<ApiResponse> {
        self.http
            .get_query("/users", &[("username", username.to_string())])
            .await
    }

    /// Number of users the service currently reports.
    pub async fn count(&self) -> ApiResult<usize> {
        let users: Vec<User> = self.list().await?.json()?;
        Ok(users.len())
    }
}

//! Posts resource client
//!
//! Binds the `/posts` prefix to one method per remote operation. Every
//! method issues exactly one HTTP call through the injected transport
//! and returns the raw response; status policy stays with the caller.

use crate::error::ApiResult;
use crate::http::{ApiResponse, HttpClient};
use crate::model::{Post, PostPatch};

/// Client for the `/posts` resource
#[derive(Debug, Clone)]
pub struct PostsClient {
    http: HttpClient,
}

impl PostsClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// GET /posts
    pub async fn list(&self) -> ApiResult<ApiResponse> {
        self.http.get("/posts").await
    }

    /// GET /posts/{id}
    pub async fn get(&self, id: u64) -> ApiResult<ApiResponse> {
        self.http.get(&format!("/posts/{id}")).await
    }

    /// POST /posts
    pub async fn create(&self, post: &Post) -> ApiResult<ApiResponse> {
        self.http.post("/posts", post).await
    }

    /// PUT /posts/{id}
    pub async fn replace(&self, id: u64, post: &Post) -> ApiResult<ApiResponse> {
        self.http.put(&format!("/posts/{id}"), post).await
    }

    /// PATCH /posts/{id}
    pub async fn update(&self, id: u64, patch: &PostPatch) -> ApiResult<ApiResponse> {
        self.http.patch(&format!("/posts/{id}"), patch).await
    }

    /// DELETE /posts/{id}
    pub async fn delete(&self, id: u64) -> ApiResult<ApiResponse> {
        self.http.delete(&format!("/posts/{id}")).await
    }

    /// GET /posts?userId={user_id}
    pub async fn by_user(&self, user_id: u64) -> ApiResult<ApiResponse> {
        self.http
            .get_query("/posts", &[("userId", user_id.to_string())])
            .await
    }

    /// GET /posts/{id}/comments
    pub async fn comments(&self, post_id: u64) -> ApiResult<ApiResponse> {
        self.http.get(&format!("/posts/{post_id}/comments")).await
    }

    /// Number of posts the service currently reports. The one derived
    /// operation: decodes the listing and returns its length.
    pub async fn count(&self) -> ApiResult<usize> {
        let posts: Vec<Post> = self.list().await?.json()?;
        Ok(posts.len())
    }
}

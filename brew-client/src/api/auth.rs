//! Auth and account endpoints

use shared::client::{LoginRequest, LoginResponse, RegisterRequest};
use shared::models::{User, UserUpdate};

use super::CafeClient;
use crate::error::ClientResult;

impl CafeClient {
    /// POST /api/auth/login
    ///
    /// Does not store the returned token; the caller decides whether to
    /// attach it (`set_token`) and persist the session.
    pub async fn login(
        &self,
        username_or_email: &str,
        password: &str,
    ) -> ClientResult<LoginResponse> {
        let req = LoginRequest {
            username_or_email: username_or_email.to_string(),
            password: password.to_string(),
        };
        let resp: LoginResponse = self.http().post("/api/auth/login", &req).await?;
        tracing::debug!(user_id = resp.id, role = %resp.role, "login succeeded");
        Ok(resp)
    }

    /// POST /api/auth/register (customer self-registration)
    pub async fn register(&self, req: &RegisterRequest) -> ClientResult<String> {
        self.http().post_for_text("/api/auth/register", req).await
    }

    /// POST /api/auth/register/staff (admin only)
    pub async fn register_staff(&self, req: &RegisterRequest) -> ClientResult<String> {
        self.http()
            .post_for_text("/api/auth/register/staff", req)
            .await
    }

    /// GET /api/auth/:id
    pub async fn user(&self, id: i64) -> ClientResult<User> {
        self.http().get(&format!("/api/auth/{}", id)).await
    }

    /// GET /api/auth/all (staff/admin)
    pub async fn all_users(&self) -> ClientResult<Vec<User>> {
        self.http().get("/api/auth/all").await
    }

    /// GET /api/auth/staff (admin)
    pub async fn all_staff(&self) -> ClientResult<Vec<User>> {
        self.http().get("/api/auth/staff").await
    }

    /// PUT /api/auth/user/update/:id (admin)
    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> ClientResult<String> {
        self.http()
            .put_for_text(&format!("/api/auth/user/update/{}", id), update)
            .await
    }

    /// DELETE /api/auth/user/delete/:id (admin)
    pub async fn delete_user(&self, id: i64) -> ClientResult<()> {
        self.http()
            .delete(&format!("/api/auth/user/delete/{}", id))
            .await
    }
}

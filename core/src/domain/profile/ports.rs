use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dosha::Dosha,
    profile::{entities::UserProfile, value_objects::UpsertProfileInput},
};

/// Repository trait for per-user dosha profiles
#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn get_by_user_id(
        &self,
        user_id: String,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;

    /// Creates the user's profile or updates its dosha, as one atomic step.
    /// An existing profile keeps its `id` and `created_at`.
    fn upsert(
        &self,
        user_id: String,
        dosha: Option<Dosha>,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}

pub trait ProfileService: Send + Sync {
    fn get_profile(
        &self,
        user_id: String,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn upsert_profile(
        &self,
        input: UpsertProfileInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}

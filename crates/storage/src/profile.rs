//! User profile and onboarding-flag records.

use coach_core::UserProfile;
use sqlx::SqlitePool;

use crate::kv;
use crate::Result;

/// Document key for the user profile.
pub const PROFILE_KEY: &str = "userProfile_growthpath";

/// Document key for the onboarding-complete flag.
pub const ONBOARDING_KEY: &str = "onboardingComplete_growthpath";

/// Load the stored profile.
///
/// Fields absent from the stored document fill with onboarding defaults,
/// and notification settings merge against the default set; both happen in
/// the profile's serde defaults, so an old document reads as a complete,
/// current profile.
pub async fn load_profile(pool: &SqlitePool) -> Result<Option<UserProfile>> {
    kv::get_document(pool, PROFILE_KEY).await
}

/// Store the whole profile document.
pub async fn save_profile(pool: &SqlitePool, profile: &UserProfile) -> Result<()> {
    kv::put_document(pool, PROFILE_KEY, profile).await
}

/// Whether onboarding has completed.
pub async fn is_onboarding_complete(pool: &SqlitePool) -> Result<bool> {
    Ok(kv::get_raw(pool, ONBOARDING_KEY).await?.as_deref() == Some("true"))
}

/// Store the initial profile and mark onboarding complete.
pub async fn complete_onboarding(pool: &SqlitePool, profile: &UserProfile) -> Result<()> {
    save_profile(pool, profile).await?;
    kv::put_raw(pool, ONBOARDING_KEY, "true").await?;
    tracing::info!("Onboarding complete for {}", profile.display_name());
    Ok(())
}

//! Composition root — wires concrete outbound adapters into service instances.
//!
//! This is the ONLY place that imports concrete outbound adapters and provider types.

use std::sync::Arc;

use avatars::{AdorableAvatars, Gravatar};
use sqlx::PgPool;

use crate::{
    adapters::outbound::{
        postgres::{
            PostgresActivityRepository, PostgresContactFieldLookup, PostgresContactRepository,
        },
        providers::{AdorableUrls, GravatarUrls},
    },
    config::AvatarSettings,
    domain::services::{ActivityServiceImpl, AvatarServiceImpl},
};

/// Postgres-backed avatar service with the configured providers.
pub fn avatar_service(
    pool: PgPool,
    settings: &AvatarSettings,
) -> AvatarServiceImpl<
    PostgresContactRepository,
    PostgresContactFieldLookup,
    AdorableUrls,
    GravatarUrls,
> {
    let adorable = AdorableUrls::new(AdorableAvatars::new(settings.adorable_base_url.clone()));
    let gravatar = GravatarUrls::new(Gravatar::new(settings.gravatar_base_url.clone()));

    AvatarServiceImpl::new(
        Arc::new(PostgresContactRepository::new(pool.clone())),
        Arc::new(PostgresContactFieldLookup::new(pool)),
        Arc::new(adorable),
        Arc::new(gravatar),
        settings.size,
    )
}

/// Postgres-backed activity service.
pub fn activity_service(pool: PgPool) -> ActivityServiceImpl<PostgresActivityRepository> {
    ActivityServiceImpl::new(Arc::new(PostgresActivityRepository::new(pool)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ports::inbound::{
            ActivityService, AvatarService, DestroyActivityRequest, RefreshAvatarsRequest,
        },
        ActivityError, AvatarError,
    };
    use sqlx::postgres::PgConnectOptions;

    fn lazy_pool() -> PgPool {
        PgPool::connect_lazy_with(PgConnectOptions::new())
    }

    fn settings() -> AvatarSettings {
        AvatarSettings {
            adorable_base_url: "https://api.adorable.io".to_string(),
            gravatar_base_url: "https://secure.gravatar.com".to_string(),
            size: 200,
        }
    }

    #[tokio::test]
    async fn wired_avatar_service_validates_before_touching_the_database() {
        let service = avatar_service(lazy_pool(), &settings());

        let err = service
            .refresh_from_internet(RefreshAvatarsRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AvatarError::Validation(_)));
    }

    #[tokio::test]
    async fn wired_activity_service_validates_before_touching_the_database() {
        let service = activity_service(lazy_pool());

        let err = service
            .destroy_activity(DestroyActivityRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ActivityError::Validation(_)));
    }
}

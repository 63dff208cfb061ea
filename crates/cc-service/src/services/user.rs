//! User service
//!
//! Handles the current account and its community memberships.

use cc_core::entities::User;
use cc_core::{DomainError, RecordId};
use tracing::{instrument, warn};

use crate::dto::{CurrentUserResponse, MembershipResponse, MembershipWithCommunity};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get current authenticated user
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: RecordId) -> ServiceResult<CurrentUserResponse> {
        let user = self.get_user_entity(user_id).await?;
        Ok(CurrentUserResponse::from(&user))
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: RecordId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    /// Communities the user belongs to, newest membership first
    #[instrument(skip(self))]
    pub async fn memberships(&self, user_id: RecordId) -> ServiceResult<Vec<MembershipResponse>> {
        let memberships = self.ctx.membership_repo().memberships_for_user(user_id).await?;

        let mut responses = Vec::with_capacity(memberships.len());
        for membership in memberships {
            let Some(community) = self
                .ctx
                .community_repo()
                .find_by_id(membership.community_id)
                .await?
            else {
                warn!(community_id = %membership.community_id, "Membership points at a missing community");
                continue;
            };
            responses.push(MembershipResponse::from(MembershipWithCommunity {
                membership,
                community,
            }));
        }

        Ok(responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{fake_context, seed_community, seed_user};
    use cc_core::entities::{AccessRole, CommunityMember, ReviewStatus, Zone};

    #[tokio::test]
    async fn test_current_user() {
        let ctx = fake_context();
        let user = seed_user(&ctx, "kavya", AccessRole::Moderator).await;

        let me = UserService::new(&ctx).get_current_user(user.id).await.unwrap();
        assert_eq!(me.username, "kavya");
        assert_eq!(me.role, AccessRole::Moderator);

        let err = UserService::new(&ctx)
            .get_current_user(RecordId::new(404))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_memberships_carry_community_details() {
        let ctx = fake_context();
        let user = seed_user(&ctx, "arjun", AccessRole::Member).await;
        let community =
            seed_community(&ctx, "Delhi Gophers", Zone::Northern, ReviewStatus::Approved, &user)
                .await;
        ctx.membership_repo()
            .add(&CommunityMember::admin(community.id, user.id))
            .await
            .unwrap();

        let memberships = UserService::new(&ctx).memberships(user.id).await.unwrap();
        assert_eq!(memberships.len(), 1);
        assert_eq!(memberships[0].community_name, "Delhi Gophers");
        assert_eq!(memberships[0].zone, Zone::Northern);
        assert!(memberships[0].is_admin);
    }
}

//! Domain Value Objects
//!
//! Immutable value types for the release domain.

use std::fmt;

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

/// Approval state of a release
///
/// Draft -> HigherLevelReview -> Approved, with send-back to Draft
/// allowed from both later states. Publishing is a separate act and
/// freezes the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    #[default]
    Draft,
    HigherLevelReview,
    Approved,
}

impl ApprovalStatus {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        use ApprovalStatus::*;
        match self {
            Draft => "draft",
            HigherLevelReview => "higher_level_review",
            Approved => "approved",
        }
    }

    /// Whether moving to `next` is a legal transition
    #[inline]
    pub const fn can_transition_to(&self, next: ApprovalStatus) -> bool {
        use ApprovalStatus::*;
        matches!(
            (*self, next),
            (Draft, HigherLevelReview)
                | (HigherLevelReview, Approved)
                | (HigherLevelReview, Draft)
                | (Approved, Draft)
        )
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-release role grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseRole {
    /// May view the unpublished release
    Viewer,
    /// May edit content and submit for review
    Contributor,
    /// May approve or send back
    Approver,
}

impl ReleaseRole {
    #[inline]
    pub const fn can_edit_content(&self) -> bool {
        use ReleaseRole::*;
        matches!(self, Contributor | Approver)
    }

    #[inline]
    pub const fn can_approve(&self) -> bool {
        matches!(self, ReleaseRole::Approver)
    }
}

/// Platform-wide role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalRole {
    #[default]
    Analyst,
    Admin,
}

impl GlobalRole {
    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, GlobalRole::Admin)
    }
}

/// Identity of the caller, passed into every use case
#[derive(Debug, Clone, Copy)]
pub struct Requester {
    pub user_id: UserId,
    pub global_role: GlobalRole,
}

impl Requester {
    pub fn analyst(user_id: UserId) -> Self {
        Self {
            user_id,
            global_role: GlobalRole::Analyst,
        }
    }

    pub fn admin(user_id: UserId) -> Self {
        Self {
            user_id,
            global_role: GlobalRole::Admin,
        }
    }
}

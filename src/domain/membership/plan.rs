//! Membership plan fee and duration tables.
//!
//! Each plan maps to a fixed provisioning fee, a cheaper extension fee
//! (renewal discount), and a day duration. Unknown plan input resolves to
//! the six-month default rather than rejecting; callers are told when the
//! fallback applied so they can log it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Cents;

/// A membership plan with fixed fee and duration tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipPlan {
    #[serde(rename = "6 months")]
    SixMonths,
    #[serde(rename = "1 year")]
    OneYear,
    #[serde(rename = "2 years")]
    TwoYears,
}

/// Outcome of resolving raw plan input.
///
/// `fallback_applied` is true when the input did not name a known plan and
/// the default policy was used instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanResolution {
    pub plan: MembershipPlan,
    pub fallback_applied: bool,
}

impl MembershipPlan {
    /// All known plans.
    pub const ALL: [MembershipPlan; 3] = [
        MembershipPlan::SixMonths,
        MembershipPlan::OneYear,
        MembershipPlan::TwoYears,
    ];

    /// The plan used when input names no known plan.
    pub const DEFAULT: MembershipPlan = MembershipPlan::SixMonths;

    /// Parses a plan from its wire label, rejecting unknown input.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "6 months" => Some(MembershipPlan::SixMonths),
            "1 year" => Some(MembershipPlan::OneYear),
            "2 years" => Some(MembershipPlan::TwoYears),
            _ => None,
        }
    }

    /// Resolves raw plan input, falling back to [`Self::DEFAULT`] on
    /// unknown values.
    pub fn resolve(input: &str) -> PlanResolution {
        match Self::parse(input) {
            Some(plan) => PlanResolution {
                plan,
                fallback_applied: false,
            },
            None => PlanResolution {
                plan: Self::DEFAULT,
                fallback_applied: true,
            },
        }
    }

    /// The wire/storage label for this plan.
    pub fn label(&self) -> &'static str {
        match self {
            MembershipPlan::SixMonths => "6 months",
            MembershipPlan::OneYear => "1 year",
            MembershipPlan::TwoYears => "2 years",
        }
    }

    /// Fee charged when a member is first provisioned.
    pub fn provision_fee(&self) -> Cents {
        match self {
            MembershipPlan::SixMonths => Cents::new(5000),
            MembershipPlan::OneYear => Cents::new(9000),
            MembershipPlan::TwoYears => Cents::new(16000),
        }
    }

    /// Fee charged when an existing membership is extended.
    ///
    /// Extensions are intentionally cheaper than initial provisioning.
    pub fn extension_fee(&self) -> Cents {
        match self {
            MembershipPlan::SixMonths => Cents::new(4000),
            MembershipPlan::OneYear => Cents::new(7500),
            MembershipPlan::TwoYears => Cents::new(13000),
        }
    }

    /// Subscription duration in days.
    pub fn duration_days(&self) -> i64 {
        match self {
            MembershipPlan::SixMonths => 180,
            MembershipPlan::OneYear => 365,
            MembershipPlan::TwoYears => 730,
        }
    }
}

impl fmt::Display for MembershipPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

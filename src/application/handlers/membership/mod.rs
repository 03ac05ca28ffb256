//! Membership lifecycle command and query handlers.

mod cancel_membership;
mod extend_membership;
mod get_member_history;
mod list_members;
mod list_transactions;
mod provision_member;

pub use cancel_membership::{CancelMembershipCommand, CancelMembershipHandler, CancelMembershipResult};
pub use extend_membership::{ExtendMembershipCommand, ExtendMembershipHandler, ExtendMembershipResult};
pub use get_member_history::{GetMemberHistoryHandler, GetMemberHistoryQuery};
pub use list_members::{ListMembersHandler, ListMembersQuery};
pub use list_transactions::{ListTransactionsHandler, ListTransactionsQuery};
pub use provision_member::{ProvisionMemberCommand, ProvisionMemberHandler, ProvisionMemberResult};

//! ListMembersHandler - Query handler for the member roster.

use std::sync::Arc;

use crate::domain::membership::{Member, MembershipError};
use crate::ports::MemberRepository;

/// Query for all members.
#[derive(Debug, Clone, Default)]
pub struct ListMembersQuery {}

/// Handler returning the full member roster.
pub struct ListMembersHandler {
    repository: Arc<dyn MemberRepository>,
}

impl ListMembersHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: ListMembersQuery) -> Result<Vec<Member>, MembershipError> {
        Ok(self.repository.list_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, MemberId, Timestamp};
    use crate::domain::membership::{MembershipPlan, Transaction};
    use async_trait::async_trait;

    struct MockMemberRepository {
        members: Vec<Member>,
    }

    #[async_trait]
    impl MemberRepository for MockMemberRepository {
        async fn create(
            &self,
            _member: &Member,
            _transaction: &Transaction,
        ) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(
            &self,
            _member: &Member,
            _transaction: &Transaction,
        ) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &MemberId) -> Result<Option<Member>, DomainError> {
            Ok(None)
        }

        async fn list_all(&self) -> Result<Vec<Member>, DomainError> {
            Ok(self.members.clone())
        }
    }

    #[tokio::test]
    async fn returns_all_members() {
        let members: Vec<Member> = (0..3)
            .map(|i| {
                Member::provision(
                    MemberId::new(),
                    format!("G{}", i),
                    format!("Member {}", i),
                    format!("m{}@x.com", i),
                    MembershipPlan::SixMonths,
                    Timestamp::now(),
                )
            })
            .collect();

        let repo = Arc::new(MockMemberRepository {
            members: members.clone(),
        });
        let handler = ListMembersHandler::new(repo);

        let result = handler.handle(ListMembersQuery::default()).await.unwrap();
        assert_eq!(result, members);
    }
}

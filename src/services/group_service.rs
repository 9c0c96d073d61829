//! Group service layer.

use super::SharedSession;
use async_trait::async_trait;
use tracing::info;

/// Group service trait.
#[async_trait]
pub trait GroupService: Send + Sync {
    /// All group names in insertion order.
    async fn list_groups(&self) -> Vec<String>;

    /// Add a group directly. Blank and existing names are ignored; returns whether
    /// the group was added.
    async fn add_group(&self, name: &str) -> bool;
}

/// Default implementation of GroupService.
pub struct GroupServiceImpl {
    session: SharedSession,
}

impl GroupServiceImpl {
    /// Create a new group service.
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl GroupService for GroupServiceImpl {
    async fn list_groups(&self) -> Vec<String> {
        self.session.read().await.store().groups().to_vec()
    }

    async fn add_group(&self, name: &str) -> bool {
        let added = self.session.write().await.add_group(name);
        if added {
            info!(group = %name.trim(), "Group added");
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::share;
    use crate::store::{ContactStore, Session};

    #[tokio::test]
    async fn test_add_group_preserves_order() {
        let session = Session::new(ContactStore::with_groups(["Friends", "Work"]));
        let service = GroupServiceImpl::new(share(session));

        assert!(service.add_group("Family").await);
        assert!(!service.add_group("Work").await);
        assert!(!service.add_group("").await);
        assert_eq!(service.list_groups().await, ["Friends", "Work", "Family"]);
    }
}

use async_trait::async_trait;
use vesta_core::ClientResult;

use crate::models::Category;

/// Remote catalog facet access. Category listing is the one unauthenticated
/// call in the client.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn list_categories(&self) -> ClientResult<Vec<Category>>;
}

/// Fetch categories for the filter bar, degrading to an empty facet list on
/// failure. Category data is decorative; a missing facet bar is not worth a
/// user-facing notice.
pub async fn load_categories(service: &dyn CatalogService) -> Vec<Category> {
    match service.list_categories().await {
        Ok(categories) => categories,
        Err(err) => {
            tracing::warn!("failed to fetch categories: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vesta_core::ClientError;

    struct FailingCatalog;

    #[async_trait]
    impl CatalogService for FailingCatalog {
        async fn list_categories(&self) -> ClientResult<Vec<Category>> {
            Err(ClientError::Transport("connection refused".to_string()))
        }
    }

    struct StaticCatalog;

    #[async_trait]
    impl CatalogService for StaticCatalog {
        async fn list_categories(&self) -> ClientResult<Vec<Category>> {
            Ok(vec![Category {
                id: 1,
                name: "Shirts".to_string(),
            }])
        }
    }

    #[tokio::test]
    async fn test_categories_degrade_to_empty_on_failure() {
        let categories = load_categories(&FailingCatalog).await;
        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn test_categories_pass_through_on_success() {
        let categories = load_categories(&StaticCatalog).await;
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Shirts");
    }
}

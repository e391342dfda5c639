//! `ProductStore` conformance test suite, generated per backend.
//!
//! ## Coverage
//!
//! - insert assigns identity and timestamps, and persists what it returns
//! - get distinguishes present from absent
//! - list is insertion-ordered, before and after removals
//! - update replaces business fields only (id and `created_at` survive)
//! - remove is idempotent
//! - concurrent inserts from spawned tasks all land

/// Generate a full `ProductStore` conformance test suite.
///
/// `$factory` must be an expression that evaluates to an instance
/// implementing `ProductStore + Clone + Send + Sync + 'static`. It is
/// re-evaluated for each test to ensure isolation.
#[macro_export]
macro_rules! product_store_tests {
    ($factory:expr) => {
        mod product_store_contract_tests {
            use super::*;
            use catalog::core::store::ProductStore;
            use uuid::Uuid;

            // ==================================================================
            // Insert & Get
            // ==================================================================

            #[tokio::test]
            async fn test_insert_and_get() {
                let store = $factory;

                let stored = store
                    .insert(fields("Wireless Headphones", 99.99, "Electronics", true))
                    .await
                    .unwrap();
                assert_eq!(stored.name, "Wireless Headphones");
                assert_eq!(stored.price, 99.99);
                assert_eq!(stored.category, "Electronics");
                assert!(stored.in_stock);
                assert_eq!(stored.created_at, stored.updated_at);

                let retrieved = store.get(&stored.id).await.unwrap();
                assert_eq!(
                    retrieved,
                    Some(stored),
                    "insert must persist exactly what it returns"
                );
            }

            #[tokio::test]
            async fn test_insert_assigns_distinct_ids() {
                let store = $factory;

                let first = store.insert(named_fields("First")).await.unwrap();
                let second = store.insert(named_fields("Second")).await.unwrap();

                assert_ne!(first.id, second.id);
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let store = $factory;

                let result = store.get(&Uuid::new_v4()).await.unwrap();
                assert!(
                    result.is_none(),
                    "getting a nonexistent product should return None"
                );
            }

            // ==================================================================
            // List
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty() {
                let store = $factory;

                let all = store.list().await.unwrap();
                assert!(all.is_empty(), "list on an empty store should be empty");
            }

            #[tokio::test]
            async fn test_list_insertion_order() {
                let store = $factory;

                for name in ["First", "Second", "Third"] {
                    store.insert(named_fields(name)).await.unwrap();
                }

                let names: Vec<String> = store
                    .list()
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|p| p.name)
                    .collect();
                assert_eq!(names, ["First", "Second", "Third"]);
            }

            #[tokio::test]
            async fn test_list_order_survives_removal() {
                let store = $factory;

                store.insert(named_fields("First")).await.unwrap();
                let second = store.insert(named_fields("Second")).await.unwrap();
                store.insert(named_fields("Third")).await.unwrap();

                store.remove(&second.id).await.unwrap();

                let names: Vec<String> = store
                    .list()
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|p| p.name)
                    .collect();
                assert_eq!(names, ["First", "Third"]);
            }

            // ==================================================================
            // Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_replaces_business_fields_only() {
                let store = $factory;

                let stored = store
                    .insert(fields("Ergonomic Office Chair", 199.50, "Furniture", true))
                    .await
                    .unwrap();

                let updated = store
                    .update(
                        &stored.id,
                        fields("Ergonomic Office Chair", 150.00, "Furniture", false),
                    )
                    .await
                    .unwrap();

                assert_eq!(updated.id, stored.id);
                assert_eq!(updated.created_at, stored.created_at);
                assert_eq!(updated.price, 150.00);
                assert!(!updated.in_stock);
                assert!(
                    updated.updated_at >= stored.updated_at,
                    "update must bump updated_at"
                );

                let retrieved = store.get(&stored.id).await.unwrap();
                assert_eq!(retrieved, Some(updated));
            }

            #[tokio::test]
            async fn test_update_nonexistent_errors() {
                let store = $factory;

                let result = store.update(&Uuid::new_v4(), named_fields("Ghost")).await;
                assert!(result.is_err(), "updating a missing product must fail");
            }

            // ==================================================================
            // Remove
            // ==================================================================

            #[tokio::test]
            async fn test_remove_then_get_none() {
                let store = $factory;

                let stored = store.insert(named_fields("Doomed")).await.unwrap();
                store.remove(&stored.id).await.unwrap();

                assert!(store.get(&stored.id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_remove_nonexistent_is_ok() {
                let store = $factory;

                let result = store.remove(&Uuid::new_v4()).await;
                assert!(result.is_ok(), "remove is idempotent");
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_inserts_all_land() {
                let store = $factory;

                let mut handles = Vec::new();
                for i in 0..10 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        store.insert(named_fields(&format!("Product {i}"))).await
                    }));
                }

                for handle in handles {
                    handle.await.unwrap().unwrap();
                }

                let all = store.list().await.unwrap();
                assert_eq!(all.len(), 10);
            }
        }
    };
}

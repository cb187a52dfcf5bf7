//! Tests for built-in sources

use super::*;
use crate::engine::PageFetcher;
use crate::pagination::{Cursor, PageResult};

type MemoryResult = PageResult<u32, usize, ()>;

// ============================================================================
// InMemorySource Tests
// ============================================================================

#[tokio::test]
async fn test_memory_source_pages_through_items() {
    let source: InMemorySource<u32> = InMemorySource::new(vec![1, 2, 3, 4, 5]);
    assert_eq!(source.len(), 5);
    assert!(!source.is_empty());

    let first: Cursor<usize> = Cursor::new(2).unwrap();
    let result: MemoryResult = source.fetch(first).await.unwrap();
    assert_eq!(
        result,
        PageResult::success_with_last_page(
            vec![1, 2],
            Cursor::try_new(Some(2), 2).unwrap(),
            false
        )
    );

    let result: MemoryResult = source
        .fetch(Cursor::try_new(Some(4), 2).unwrap())
        .await
        .unwrap();
    assert_eq!(
        result,
        PageResult::success_with_last_page(vec![5], Cursor::try_new(Some(5), 2).unwrap(), true)
    );
}

#[tokio::test]
async fn test_memory_source_past_the_end() {
    let source: InMemorySource<u32> = InMemorySource::new(vec![1, 2]);
    let result: MemoryResult = source
        .fetch(Cursor::try_new(Some(10), 3).unwrap())
        .await
        .unwrap();

    match result {
        PageResult::Success { items, cursor, .. } => {
            assert!(items.is_empty());
            assert_eq!(cursor.value(), Some(&2));
        }
        PageResult::Failure { .. } => panic!("Expected Success"),
    }
}

#[tokio::test]
async fn test_memory_source_empty() {
    let source: InMemorySource<u32> = InMemorySource::default();
    assert!(source.is_empty());

    let result: MemoryResult = source.fetch(Cursor::new(3).unwrap()).await.unwrap();
    assert!(matches!(result, PageResult::Success { ref items, .. } if items.is_empty()));
}

// ============================================================================
// ScriptedSource Tests
// ============================================================================

#[tokio::test]
async fn test_scripted_source_replays_in_order() {
    let first: Cursor<String> = Cursor::new(2).unwrap();
    let source: ScriptedSource<&str, String, String> = ScriptedSource::new()
        .then(PageResult::success(vec!["a"], first.update_cursor("a".into())))
        .then(PageResult::failure(first.clone(), "down".to_string()));
    assert_eq!(source.remaining(), 2);

    let result = source.fetch(first.clone()).await.unwrap();
    assert!(result.is_success());

    let result = source.fetch(first.update_cursor("a".into())).await.unwrap();
    assert!(result.is_failure());
    assert_eq!(source.remaining(), 0);

    let requests = source.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].is_first_page());
    assert_eq!(requests[1].value().map(String::as_str), Some("a"));
}

#[tokio::test]
async fn test_scripted_source_faults() {
    let source: ScriptedSource<&str, String, String> =
        ScriptedSource::new().then_fault("socket closed");

    let err = source.fetch(Cursor::new(1).unwrap()).await.unwrap_err();
    assert!(err.is_fault());
    assert!(err.to_string().contains("socket closed"));

    // exhausted script is a fault too
    let err = source.fetch(Cursor::new(1).unwrap()).await.unwrap_err();
    assert!(err.to_string().contains("script exhausted"));
}

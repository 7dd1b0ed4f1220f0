mod common;

use common::create_test_pool;

use gs_db::GroupRepository;

use googletest::prelude::*;

#[tokio::test]
async fn given_empty_group_when_checking_membership_then_false() {
    let pool = create_test_pool().await;
    let repo = GroupRepository::new(pool);

    let result = repo.is_member("group-a", "user-1").await.unwrap();

    assert_that!(result, eq(false));
}

#[tokio::test]
async fn given_added_member_when_checking_membership_then_true() {
    // Given
    let pool = create_test_pool().await;
    let repo = GroupRepository::new(pool);

    // When
    repo.add_member("group-a", "user-1").await.unwrap();

    // Then
    assert_that!(repo.is_member("group-a", "user-1").await.unwrap(), eq(true));
    assert_that!(
        repo.is_member("group-a", "user-2").await.unwrap(),
        eq(false)
    );
    assert_that!(
        repo.is_member("group-b", "user-1").await.unwrap(),
        eq(false)
    );
}

#[tokio::test]
async fn given_member_added_twice_when_listing_then_single_entry() {
    // Given: Idempotent set-to-true semantics
    let pool = create_test_pool().await;
    let repo = GroupRepository::new(pool);

    // When
    repo.add_member("group-a", "user-1").await.unwrap();
    repo.add_member("group-a", "user-1").await.unwrap();
    repo.add_member("group-a", "user-2").await.unwrap();

    // Then
    let members = repo.members("group-a").await.unwrap();
    assert_that!(members, elements_are![eq("user-1"), eq("user-2")]);
}

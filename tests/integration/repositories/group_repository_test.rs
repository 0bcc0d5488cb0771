// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_app;
use blogstore::domain::models::group::Group;
use blogstore::domain::repositories::group_repository::GroupRepository;
use blogstore::domain::repositories::RepositoryError;
use blogstore::infrastructure::repositories::group_repo_impl::GroupRepositoryImpl;
use uuid::Uuid;

/// 测试群组的CRUD操作
///
/// 验证GroupRepository的创建、读取、更新和删除功能是否正常。
#[tokio::test]
async fn test_group_crud_operations() {
    let app = create_test_app().await;
    let repo = GroupRepositoryImpl::new(app.db_pool.clone());

    let group = Group::new("Rustaceans", "rustaceans", "A group about Rust");

    // Create
    repo.create(&group).await.unwrap();

    // Read
    let found = repo.find_by_id(group.id).await.unwrap().unwrap();
    assert_eq!(found.title, "Rustaceans");
    assert_eq!(found.slug, "rustaceans");

    // Read by slug
    let by_slug = repo.find_by_slug("rustaceans").await.unwrap().unwrap();
    assert_eq!(by_slug.id, group.id);

    // Update
    let mut updated = found;
    updated.description = "All things Rust".to_string();
    repo.update(&updated).await.unwrap();

    let found_after_update = repo.find_by_id(group.id).await.unwrap().unwrap();
    assert_eq!(found_after_update.description, "All things Rust");

    // Delete
    repo.delete(group.id).await.unwrap();
    assert!(repo.find_by_id(group.id).await.unwrap().is_none());
}

/// 测试slug的全局唯一性
///
/// 插入两个相同slug的群组时，第二次插入以唯一约束冲突失败。
#[tokio::test]
async fn test_duplicate_slug_is_rejected() {
    let app = create_test_app().await;
    let repo = GroupRepositoryImpl::new(app.db_pool.clone());

    let first = Group::new("First", "shared-slug", "");
    let second = Group::new("Second", "shared-slug", "");

    repo.create(&first).await.unwrap();
    let err = repo.create(&second).await.unwrap_err();

    assert!(matches!(err, RepositoryError::UniqueViolation(_)));

    // A different slug still goes through
    let third = Group::new("Third", "other-slug", "");
    repo.create(&third).await.unwrap();
}

/// 测试群组列表查询
#[tokio::test]
async fn test_group_list() {
    let app = create_test_app().await;
    let repo = GroupRepositoryImpl::new(app.db_pool.clone());

    for (title, slug) in [("B group", "b-group"), ("A group", "a-group")] {
        repo.create(&Group::new(title, slug, "")).await.unwrap();
    }

    let groups = repo.list().await.unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].title, "A group");
    assert_eq!(groups[1].title, "B group");
}

/// 测试删除不存在的群组
#[tokio::test]
async fn test_delete_missing_group_is_not_found() {
    let app = create_test_app().await;
    let repo = GroupRepositoryImpl::new(app.db_pool.clone());

    let err = repo.delete(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

/// 测试更新不存在的群组
///
/// 更新和删除对缺失记录报告相同的错误。
#[tokio::test]
async fn test_update_missing_group_is_not_found() {
    let app = create_test_app().await;
    let repo = GroupRepositoryImpl::new(app.db_pool.clone());

    let ghost = Group::new("Ghost", "ghost", "never inserted");
    let err = repo.update(&ghost).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

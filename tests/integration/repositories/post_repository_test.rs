// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_test_app, seed_post, seed_user};
use blogstore::domain::models::group::Group;
use blogstore::domain::models::post::Post;
use blogstore::domain::repositories::group_repository::GroupRepository;
use blogstore::domain::repositories::post_repository::PostRepository;
use blogstore::domain::repositories::RepositoryError;
use blogstore::infrastructure::repositories::group_repo_impl::GroupRepositoryImpl;
use blogstore::infrastructure::repositories::post_repo_impl::PostRepositoryImpl;
use chrono::{Duration, Utc};
use uuid::Uuid;

/// 测试帖子的CRUD操作
#[tokio::test]
async fn test_post_crud_operations() {
    let app = create_test_app().await;
    let repo = PostRepositoryImpl::new(app.db_pool.clone());
    let author = seed_user(&app, "alice").await;

    let post = Post::new("Hello world", author.id, None);
    repo.create(&post).await.unwrap();

    let found = repo.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(found.text, "Hello world");
    assert_eq!(found.author_id, author.id);
    assert!(found.group_id.is_none());

    // Update text and image
    let mut updated = found;
    updated.text = "Hello again".to_string();
    updated.image = Some("posts/cover.png".to_string());
    repo.update(&updated).await.unwrap();

    let found_after_update = repo.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(found_after_update.text, "Hello again");
    assert_eq!(found_after_update.image.as_deref(), Some("posts/cover.png"));

    // Delete
    repo.delete(post.id).await.unwrap();
    assert!(repo.find_by_id(post.id).await.unwrap().is_none());
}

/// 测试发布时间不可变
///
/// 更新帖子时，存储层不写发布时间列，创建时分配的值保持不变。
#[tokio::test]
async fn test_pub_date_is_immutable_on_update() {
    let app = create_test_app().await;
    let repo = PostRepositoryImpl::new(app.db_pool.clone());
    let author = seed_user(&app, "alice").await;

    let post = seed_post(&app, "original", author.id, None).await;

    let mut tampered = post.clone();
    tampered.text = "edited".to_string();
    tampered.pub_date = (Utc::now() + Duration::days(30)).into();
    repo.update(&tampered).await.unwrap();

    let found = repo.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(found.text, "edited");
    assert_eq!(found.pub_date, post.pub_date);
}

/// 测试更新不存在的帖子
#[tokio::test]
async fn test_update_missing_post_is_not_found() {
    let app = create_test_app().await;
    let repo = PostRepositoryImpl::new(app.db_pool.clone());

    let ghost = Post::new("never inserted", Uuid::new_v4(), None);
    let err = repo.update(&ghost).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

/// 测试缺失作者的引用完整性
///
/// 引用不存在的作者插入帖子时，以外键约束冲突失败。
#[tokio::test]
async fn test_post_with_missing_author_is_rejected() {
    let app = create_test_app().await;
    let repo = PostRepositoryImpl::new(app.db_pool.clone());

    let post = Post::new("orphan", Uuid::new_v4(), None);
    let err = repo.create(&post).await.unwrap_err();

    assert!(matches!(err, RepositoryError::ForeignKeyViolation(_)));
}

/// 测试帖子的默认排序
///
/// 列表查询按发布时间升序返回（最早在前）。
#[tokio::test]
async fn test_posts_are_listed_ascending_by_pub_date() {
    let app = create_test_app().await;
    let repo = PostRepositoryImpl::new(app.db_pool.clone());
    let author = seed_user(&app, "alice").await;

    let mut newest = Post::new("newest", author.id, None);
    newest.pub_date = Utc::now().into();
    let mut oldest = Post::new("oldest", author.id, None);
    oldest.pub_date = (Utc::now() - Duration::minutes(10)).into();
    let mut middle = Post::new("middle", author.id, None);
    middle.pub_date = (Utc::now() - Duration::minutes(5)).into();

    // Insert out of order
    repo.create(&newest).await.unwrap();
    repo.create(&oldest).await.unwrap();
    repo.create(&middle).await.unwrap();

    let posts = repo.list().await.unwrap();
    let texts: Vec<&str> = posts.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["oldest", "middle", "newest"]);
}

/// 测试删除群组时帖子的群组引用置空
///
/// 帖子在群组删除后保留，只有群组引用变为空。
#[tokio::test]
async fn test_deleting_group_nulls_post_reference() {
    let app = create_test_app().await;
    let post_repo = PostRepositoryImpl::new(app.db_pool.clone());
    let group_repo = GroupRepositoryImpl::new(app.db_pool.clone());
    let author = seed_user(&app, "alice").await;

    let group = Group::new("Rustaceans", "rustaceans", "");
    group_repo.create(&group).await.unwrap();

    let post = seed_post(&app, "grouped post", author.id, Some(group.id)).await;

    group_repo.delete(group.id).await.unwrap();

    let found = post_repo.find_by_id(post.id).await.unwrap().unwrap();
    assert!(found.group_id.is_none());
    assert_eq!(found.text, "grouped post");
}

/// 测试按作者和按群组的列表查询
#[tokio::test]
async fn test_posts_filtered_by_author_and_group() {
    let app = create_test_app().await;
    let post_repo = PostRepositoryImpl::new(app.db_pool.clone());
    let group_repo = GroupRepositoryImpl::new(app.db_pool.clone());
    let alice = seed_user(&app, "alice").await;
    let bob = seed_user(&app, "bob").await;

    let group = Group::new("Rustaceans", "rustaceans", "");
    group_repo.create(&group).await.unwrap();

    seed_post(&app, "by alice", alice.id, Some(group.id)).await;
    seed_post(&app, "by bob", bob.id, None).await;

    let alice_posts = post_repo.list_by_author(alice.id).await.unwrap();
    assert_eq!(alice_posts.len(), 1);
    assert_eq!(alice_posts[0].text, "by alice");

    let group_posts = post_repo.list_by_group(group.id).await.unwrap();
    assert_eq!(group_posts.len(), 1);
    assert_eq!(group_posts[0].author_id, alice.id);
}

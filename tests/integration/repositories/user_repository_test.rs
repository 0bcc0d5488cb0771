// Copyright (c) 2025 blogstore contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_test_app, seed_post, seed_user};
use blogstore::domain::models::comment::Comment;
use blogstore::domain::models::follow::Follow;
use blogstore::domain::models::user::User;
use blogstore::domain::repositories::comment_repository::CommentRepository;
use blogstore::domain::repositories::follow_repository::FollowRepository;
use blogstore::domain::repositories::post_repository::PostRepository;
use blogstore::domain::repositories::user_repository::UserRepository;
use blogstore::domain::repositories::RepositoryError;
use blogstore::infrastructure::repositories::comment_repo_impl::CommentRepositoryImpl;
use blogstore::infrastructure::repositories::follow_repo_impl::FollowRepositoryImpl;
use blogstore::infrastructure::repositories::post_repo_impl::PostRepositoryImpl;
use blogstore::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;

/// 测试用户的创建与查找
#[tokio::test]
async fn test_user_create_and_find() {
    let app = create_test_app().await;
    let repo = UserRepositoryImpl::new(app.db_pool.clone());

    let user = User::new("alice");
    repo.create(&user).await.unwrap();

    let by_id = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(by_id.username, "alice");

    let by_name = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(by_name.id, user.id);

    assert!(repo.find_by_username("nobody").await.unwrap().is_none());
}

/// 测试用户名唯一性
#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let app = create_test_app().await;
    let repo = UserRepositoryImpl::new(app.db_pool.clone());

    repo.create(&User::new("alice")).await.unwrap();
    let err = repo.create(&User::new("alice")).await.unwrap_err();

    assert!(matches!(err, RepositoryError::UniqueViolation(_)));
}

/// 测试删除用户时的级联删除
///
/// 删除用户后，其帖子、评论以及作为关注者或被关注者的
/// 关注记录全部被移除；其他用户的数据不受影响。
#[tokio::test]
async fn test_deleting_user_cascades_everywhere() {
    let app = create_test_app().await;
    let user_repo = UserRepositoryImpl::new(app.db_pool.clone());
    let post_repo = PostRepositoryImpl::new(app.db_pool.clone());
    let comment_repo = CommentRepositoryImpl::new(app.db_pool.clone());
    let follow_repo = FollowRepositoryImpl::new(app.db_pool.clone());

    let alice = seed_user(&app, "alice").await;
    let bob = seed_user(&app, "bob").await;

    let alice_post = seed_post(&app, "by alice", alice.id, None).await;
    let bob_post = seed_post(&app, "by bob", bob.id, None).await;

    // Alice comments on Bob's post, Bob comments on Alice's
    let alice_comment = Comment::new("from alice", alice.id, bob_post.id);
    comment_repo.create(&alice_comment).await.unwrap();
    let bob_comment = Comment::new("from bob", bob.id, alice_post.id);
    comment_repo.create(&bob_comment).await.unwrap();

    // Follows in both directions
    follow_repo
        .create(&Follow::new(alice.id, bob.id))
        .await
        .unwrap();
    follow_repo
        .create(&Follow::new(bob.id, alice.id))
        .await
        .unwrap();

    user_repo.delete(alice.id).await.unwrap();

    // Alice's post is gone, and with it Bob's comment on it
    assert!(post_repo.find_by_id(alice_post.id).await.unwrap().is_none());
    assert!(comment_repo
        .find_by_id(bob_comment.id)
        .await
        .unwrap()
        .is_none());

    // Alice's comment on Bob's post is gone, Bob's post survives
    assert!(comment_repo
        .find_by_id(alice_comment.id)
        .await
        .unwrap()
        .is_none());
    assert!(post_repo.find_by_id(bob_post.id).await.unwrap().is_some());

    // Follow records referencing Alice are gone in both directions
    assert!(!follow_repo.exists(alice.id, bob.id).await.unwrap());
    assert!(!follow_repo.exists(bob.id, alice.id).await.unwrap());

    // Bob himself is untouched
    assert!(user_repo.find_by_id(bob.id).await.unwrap().is_some());
}

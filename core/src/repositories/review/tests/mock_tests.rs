//! Tests for the mock review repository implementation

use hs_shared::Pagination;
use uuid::Uuid;

use crate::domain::entities::review::{NewReview, RatingScope, Review, ReviewFilter};
use crate::repositories::review::MockReviewRepository;
use crate::repositories::ReviewRepository;

fn review(user_id: Uuid, branch_id: Option<Uuid>, room_id: Option<Uuid>, rating: i32) -> Review {
    Review::new(NewReview {
        user_id,
        branch_id,
        room_id,
        rating,
        comment: None,
    })
}

#[tokio::test]
async fn test_average_ignores_deleted_reviews() {
    let repo = MockReviewRepository::new();
    let room = Uuid::new_v4();
    let user = Uuid::new_v4();

    repo.create(review(user, None, Some(room), 4)).await.unwrap();
    repo.create(review(user, None, Some(room), 2)).await.unwrap();
    let mut gone = review(user, None, Some(room), 5);
    gone.mark_deleted();
    repo.create(gone).await.unwrap();

    assert_eq!(repo.average_rating(RatingScope::Room(room)).await.unwrap(), 3.0);
}

#[tokio::test]
async fn test_average_of_empty_scope_is_zero() {
    let repo = MockReviewRepository::new();
    repo.create(review(Uuid::new_v4(), None, Some(Uuid::new_v4()), 5))
        .await
        .unwrap();

    assert_eq!(repo.average_rating(RatingScope::Rooms(Vec::new())).await.unwrap(), 0.0);
    assert_eq!(
        repo.average_rating(RatingScope::Branch(Uuid::new_v4())).await.unwrap(),
        0.0
    );
}

#[tokio::test]
async fn test_filters_combine() {
    let repo = MockReviewRepository::new();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let branch = Uuid::new_v4();

    repo.create(review(alice, Some(branch), None, 5)).await.unwrap();
    repo.create(review(bob, Some(branch), None, 3)).await.unwrap();
    repo.create(review(alice, None, Some(Uuid::new_v4()), 1)).await.unwrap();

    let filter = ReviewFilter {
        user_id: Some(alice),
        branch_id: Some(branch),
        room_id: None,
    };
    let listed = repo.list(filter, Pagination::default()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].review.rating, 5);
    assert_eq!(repo.count(filter).await.unwrap(), 1);
    assert_eq!(repo.count(ReviewFilter::default()).await.unwrap(), 3);
}

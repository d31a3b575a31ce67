// tests/repository_tests.rs

use chrono::{Duration, Utc};
use quiz_engine::{
    db,
    repositories::{
        completion_repository,
        quiz_repository::{self, NewQuiz},
        user_repository,
    },
};
use sqlx::SqlitePool;

async fn setup() -> SqlitePool {
    let pool = db::connect_in_memory().await.expect("Failed to open database");
    db::migrate(&pool).await.expect("Failed to migrate database");
    pool
}

fn new_quiz(author_id: i64, title: &str) -> NewQuiz {
    NewQuiz {
        title: title.to_string(),
        text: "text".to_string(),
        options: vec!["a".to_string(), "b".to_string()],
        answer: vec![1],
        author_id,
    }
}

#[tokio::test]
async fn user_names_are_unique() {
    let pool = setup().await;

    let user = user_repository::create(&pool, "a@mail.org", "hash").await.unwrap();
    assert_eq!(user.name, "a@mail.org");

    let found = user_repository::find_by_name(&pool, "a@mail.org").await.unwrap().unwrap();
    assert_eq!(found.id, user.id);
    assert!(user_repository::find_by_name(&pool, "b@mail.org").await.unwrap().is_none());

    let err = user_repository::create(&pool, "a@mail.org", "other").await.unwrap_err();
    assert!(user_repository::is_duplicate_name(&err));
}

#[tokio::test]
async fn quiz_lists_and_answers_round_trip_through_json_columns() {
    let pool = setup().await;
    let author = user_repository::create(&pool, "a@mail.org", "hash").await.unwrap();

    let created = quiz_repository::create(&pool, new_quiz(author.id, "first")).await.unwrap();
    let stored = quiz_repository::find_by_id(&pool, created.id).await.unwrap().unwrap();

    assert_eq!(stored.options.0, vec!["a", "b"]);
    assert_eq!(stored.answer.0, vec![1]);
    assert_eq!(stored.author_id, author.id);
    assert!(quiz_repository::find_by_id(&pool, created.id + 1).await.unwrap().is_none());
}

#[tokio::test]
async fn quiz_pages_follow_insertion_order() {
    let pool = setup().await;
    let author = user_repository::create(&pool, "a@mail.org", "hash").await.unwrap();

    for i in 0..15 {
        quiz_repository::create(&pool, new_quiz(author.id, &format!("quiz {}", i)))
            .await
            .unwrap();
    }

    assert_eq!(quiz_repository::count(&pool).await.unwrap(), 15);

    let second = quiz_repository::find_page(&pool, 10).await.unwrap();
    let titles: Vec<&str> = second.iter().map(|q| q.title.as_str()).collect();
    assert_eq!(titles, ["quiz 10", "quiz 11", "quiz 12", "quiz 13", "quiz 14"]);
}

#[tokio::test]
async fn completions_are_ordered_newest_first() {
    let pool = setup().await;
    let user = user_repository::create(&pool, "a@mail.org", "hash").await.unwrap();
    let x = quiz_repository::create(&pool, new_quiz(user.id, "x")).await.unwrap();
    let y = quiz_repository::create(&pool, new_quiz(user.id, "y")).await.unwrap();

    let earlier = Utc::now() - Duration::minutes(5);
    completion_repository::create(&pool, y.id, user.id, Utc::now()).await.unwrap();
    completion_repository::create(&pool, x.id, user.id, earlier).await.unwrap();

    let page = completion_repository::find_page_by_user(&pool, user.id, 0).await.unwrap();
    let quiz_ids: Vec<i64> = page.iter().map(|c| c.quiz_id).collect();
    assert_eq!(quiz_ids, [y.id, x.id]);
    assert_eq!(completion_repository::count_by_user(&pool, user.id).await.unwrap(), 2);
}

#[tokio::test]
async fn deleting_a_quiz_with_completions_needs_the_purge_first() {
    let pool = setup().await;
    let user = user_repository::create(&pool, "a@mail.org", "hash").await.unwrap();
    let quiz = quiz_repository::create(&pool, new_quiz(user.id, "q")).await.unwrap();
    completion_repository::create(&pool, quiz.id, user.id, Utc::now()).await.unwrap();

    // Foreign keys forbid leaving completions behind.
    assert!(quiz_repository::delete(&pool, quiz.id).await.is_err());

    let mut tx = pool.begin().await.unwrap();
    assert_eq!(completion_repository::delete_all_by_quiz(&mut *tx, quiz.id).await.unwrap(), 1);
    assert_eq!(quiz_repository::delete(&mut *tx, quiz.id).await.unwrap(), 1);
    tx.commit().await.unwrap();

    assert!(quiz_repository::find_by_id(&pool, quiz.id).await.unwrap().is_none());
    assert_eq!(completion_repository::count_by_quiz(&pool, quiz.id).await.unwrap(), 0);
}

#[tokio::test]
async fn rolled_back_delete_leaves_everything_in_place() {
    let pool = setup().await;
    let user = user_repository::create(&pool, "a@mail.org", "hash").await.unwrap();
    let quiz = quiz_repository::create(&pool, new_quiz(user.id, "q")).await.unwrap();
    completion_repository::create(&pool, quiz.id, user.id, Utc::now()).await.unwrap();

    let mut tx = pool.begin().await.unwrap();
    completion_repository::delete_all_by_quiz(&mut *tx, quiz.id).await.unwrap();
    quiz_repository::delete(&mut *tx, quiz.id).await.unwrap();
    tx.rollback().await.unwrap();

    assert!(quiz_repository::find_by_id(&pool, quiz.id).await.unwrap().is_some());
    assert_eq!(completion_repository::count_by_quiz(&pool, quiz.id).await.unwrap(), 1);
}

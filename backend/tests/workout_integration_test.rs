//! Integration tests for workout session endpoints

mod common;

use axum::http::{header, StatusCode};
use chrono::{Duration, Utc};
use common::{workout_body, TestApp};

const DATE: &str = "2025-08-18T09:30:00Z";

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_session_returns_sets_in_order() {
    let app = TestApp::new().await;
    let (_, token) = app.register_and_login().await;

    let sets = [("Squat", 5, 100.0), ("Bench", 8, 60.0), ("Row", 10, 50.5)];
    let response = app
        .post_auth("/workouts", &token, workout_body(DATE, &sets))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_i64().unwrap();
    assert_eq!(
        response.headers[header::LOCATION],
        format!("/workouts/{}", id).as_str()
    );

    let returned = response.body["sets"].as_array().unwrap();
    assert_eq!(returned.len(), 3);
    for (set, (name, reps, _)) in returned.iter().zip(sets.iter()) {
        assert_eq!(set["exerciseName"], *name);
        assert_eq!(set["reps"], *reps);
        assert!(set["id"].as_i64().is_some());
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_created_location_resolves() {
    let app = TestApp::new().await;
    let (_, token) = app.register_and_login().await;

    let created = app
        .post_auth("/workouts", &token, workout_body(DATE, &[("Deadlift", 3, 140.0)]))
        .await;
    let location = created.headers[header::LOCATION].to_str().unwrap().to_string();

    let fetched = app.get_auth(&location, &token).await;

    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_session_without_sets() {
    let app = TestApp::new().await;
    let (_, token) = app.register_and_login().await;

    let response = app.post_auth("/workouts", &token, workout_body(DATE, &[])).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["sets"].as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_invalid_set_rejected_and_nothing_stored() {
    let app = TestApp::new().await;
    let (_, token) = app.register_and_login().await;

    let response = app
        .post_auth(
            "/workouts",
            &token,
            workout_body(DATE, &[("Squat", 5, 100.0), ("Bench", -3, 60.0)]),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let listed = app.get_auth("/workouts", &token).await;
    assert!(listed.body.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_is_newest_first_and_isolated() {
    let app = TestApp::new().await;
    let (_, alice) = app.register_and_login().await;
    let (_, bob) = app.register_and_login().await;

    let older = (Utc::now() - Duration::days(2)).to_rfc3339();
    let newer = Utc::now().to_rfc3339();
    app.post_auth("/workouts", &alice, workout_body(&older, &[("Squat", 5, 100.0)]))
        .await;
    app.post_auth(
        "/workouts",
        &alice,
        workout_body(
            &newer,
            &[("Bench", 5, 70.0), ("Overhead Press", 6, 40.0), ("Dip", 12, 0.0)],
        ),
    )
    .await;
    app.post_auth("/workouts", &bob, workout_body(&newer, &[("Curl", 12, 15.0)]))
        .await;

    let alice_list = app.get_auth("/workouts", &alice).await;
    let sessions = alice_list.body.as_array().unwrap();
    assert_eq!(sessions.len(), 2);
    let newest_sets: Vec<_> = sessions[0]["sets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|set| set["exerciseName"].as_str().unwrap())
        .collect();
    assert_eq!(newest_sets, ["Bench", "Overhead Press", "Dip"]);
    assert_eq!(sessions[1]["sets"].as_array().unwrap().len(), 1);
    assert_eq!(sessions[1]["sets"][0]["exerciseName"], "Squat");

    let bob_list = app.get_auth("/workouts", &bob).await;
    let sessions = bob_list.body.as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["sets"][0]["exerciseName"], "Curl");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_foreign_session_looks_missing() {
    let app = TestApp::new().await;
    let (_, alice) = app.register_and_login().await;
    let (_, bob) = app.register_and_login().await;

    let created = app
        .post_auth("/workouts", &alice, workout_body(DATE, &[("Squat", 5, 100.0)]))
        .await;
    let path = format!("/workouts/{}", created.body["id"]);

    let missing = app.delete_auth("/workouts/999999999", &bob).await;
    let foreign = app.delete_auth(&path, &bob).await;
    assert_eq!(foreign.status, StatusCode::NOT_FOUND);
    assert_eq!(foreign.body, missing.body);
    assert_eq!(
        foreign.body["error"]["message"],
        "Workout session not found or you do not have permission to delete it."
    );

    let foreign_get = app.get_auth(&path, &bob).await;
    assert_eq!(foreign_get.status, StatusCode::NOT_FOUND);

    // Still there for its owner
    let own = app.get_auth(&path, &alice).await;
    assert_eq!(own.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_removes_session_and_sets() {
    let app = TestApp::new().await;
    let (_, token) = app.register_and_login().await;

    let created = app
        .post_auth(
            "/workouts",
            &token,
            workout_body(DATE, &[("Squat", 5, 100.0), ("Lunge", 10, 20.0)]),
        )
        .await;
    let id = created.body["id"].as_i64().unwrap();

    let deleted = app.delete_auth(&format!("/workouts/{}", id), &token).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM set_logs WHERE workout_session_id = $1")
            .bind(id)
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(remaining, 0);

    let again = app.delete_auth(&format!("/workouts/{}", id), &token).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_expired_token_rejected() {
    let app = TestApp::new().await;
    let (username, token) = app.register_and_login().await;
    let claims = app.state.jwt().verify(&token).unwrap();

    let expired = app
        .state
        .jwt()
        .issue_at(claims.user_id().unwrap(), &username, Utc::now() - Duration::hours(25))
        .unwrap();

    let response = app.get_auth("/workouts", &expired).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

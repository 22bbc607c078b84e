//! Integration tests for the portal endpoints.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use http_body_util::BodyExt;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait};
use serde_json::{Value, json};
use teamx::config::Config;
use teamx::entities::{
    assignments, content, group_members, group_names, past_videos, services, status,
    user_registrations, users, video_distribution,
};
use tower::ServiceExt;

fn test_config() -> Config {
    let db_path = std::env::temp_dir().join(format!("teamx-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.database.url = Some(format!("sqlite:{}?mode=rwc", db_path.display()));
    config.security.argon2_memory_cost_kib = 1024;
    config.security.argon2_time_cost = 1;
    config
}

async fn spawn_app() -> (Router, DatabaseConnection) {
    let config = test_config();
    let url = config.database.url.clone().unwrap();

    let state = teamx::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");

    let db = Database::connect(url).await.expect("Failed to open test db");
    seed(&db).await;

    (teamx::api::router(state), db)
}

fn user(id: &str, last: &str, first: &str, email: &str, password_hash: &str) -> users::Model {
    users::Model {
        user_id: id.to_string(),
        last_name: last.to_string(),
        first_name: first.to_string(),
        last_name_kana: "カナ".to_string(),
        first_name_kana: "カナ".to_string(),
        email: email.to_string(),
        phone_number: "090-0000-0000".to_string(),
        password_hash: password_hash.to_string(),
    }
}

fn video(id: &str, service_id: &str, title: &str) -> past_videos::Model {
    let at = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
    past_videos::Model {
        video_id: id.to_string(),
        service_id: service_id.to_string(),
        video_title: title.to_string(),
        video_link: format!("https://videos.example.com/{id}"),
        attachment_1_link: Some("https://files.example.com/slides.pdf".to_string()),
        attachment_2_link: None,
        attachment_3_link: None,
        attachment_4_link: None,
        attachment_5_link: None,
        created_at: at,
        last_updated: at,
    }
}

fn assignment(
    id: &str,
    group_id: &str,
    content_id: &str,
    deadline: Option<chrono::DateTime<Utc>>,
) -> assignments::Model {
    assignments::Model {
        assignment_id: id.to_string(),
        group_id: group_id.to_string(),
        content_id: content_id.to_string(),
        assignment_name: format!("Assignment {id}"),
        deadline,
        description: None,
        url: None,
        notes: None,
        required: true,
        duration: Some(90),
    }
}

/// Two services. Alice (u1) shares g1 with Hanako and g2 with Jiro; g3 has no
/// Alice; g4 is in the other service.
async fn seed(db: &DatabaseConnection) {
    let legacy_hash = bcrypt::hash("legacy-pass", 4).unwrap();

    services::Entity::insert_many([
        services::Model {
            service_id: "svc1".to_string(),
            service_name: "Bootcamp".to_string(),
        },
        services::Model {
            service_id: "svc2".to_string(),
            service_name: "Mentoring".to_string(),
        },
    ]
    .map(Into::<services::ActiveModel>::into))
    .exec_without_returning(db)
    .await
    .unwrap();

    users::Entity::insert_many(
        [
            user("u1", "鈴木", "アリス", "alice@example.com", "unused"),
            user("u2", "山田", "花子", "hanako@example.com", "unused"),
            user("u3", "佐藤", "次郎", "jiro@example.com", "unused"),
            user("u4", "田中", "一郎", "legacy@example.com", &legacy_hash),
        ]
        .map(Into::<users::ActiveModel>::into),
    )
    .exec_without_returning(db)
    .await
    .unwrap();

    status::Entity::insert(status::ActiveModel::from(status::Model {
        status_id: "st1".to_string(),
        service_id: "svc1".to_string(),
        status_name: "Active".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 4, 1),
        end_date: NaiveDate::from_ymd_opt(2025, 3, 31),
    }))
    .exec_without_returning(db)
    .await
    .unwrap();

    user_registrations::Entity::insert_many(
        [
            user_registrations::Model {
                registration_id: "r1".to_string(),
                user_id: "u1".to_string(),
                service_id: "svc1".to_string(),
                status_level: Some(2),
                status_id: Some("st1".to_string()),
            },
            user_registrations::Model {
                registration_id: "r2".to_string(),
                user_id: "u1".to_string(),
                service_id: "svc2".to_string(),
                status_level: None,
                status_id: None,
            },
        ]
        .map(Into::<user_registrations::ActiveModel>::into),
    )
    .exec_without_returning(db)
    .await
    .unwrap();

    content::Entity::insert_many(
        [
            content::Model {
                content_id: "c1".to_string(),
                service_id: "svc1".to_string(),
                content_name: "Intro".to_string(),
                content_url: Some("https://content.example.com/intro".to_string()),
                category: Some("video".to_string()),
                duration: Some(61),
            },
            content::Model {
                content_id: "c2".to_string(),
                service_id: "svc1".to_string(),
                content_name: "Reading".to_string(),
                content_url: None,
                category: None,
                duration: Some(0),
            },
        ]
        .map(Into::<content::ActiveModel>::into),
    )
    .exec_without_returning(db)
    .await
    .unwrap();

    group_names::Entity::insert_many(
        [
            ("g1", "svc1", "Team A"),
            ("g2", "svc1", "Team B"),
            ("g3", "svc1", "Team C"),
            ("g4", "svc2", "Team D"),
        ]
        .map(|(group_id, service_id, group_name)| {
            group_names::ActiveModel::from(group_names::Model {
                group_id: group_id.to_string(),
                service_id: service_id.to_string(),
                group_name: group_name.to_string(),
            })
        }),
    )
    .exec_without_returning(db)
    .await
    .unwrap();

    group_members::Entity::insert_many(
        [
            ("g1", "u1"),
            ("g1", "u2"),
            ("g2", "u1"),
            ("g2", "u3"),
            ("g3", "u2"),
            ("g3", "u3"),
            ("g4", "u1"),
            ("g4", "u2"),
        ]
        .map(|(group_id, user_id)| {
            group_members::ActiveModel::from(group_members::Model {
                group_id: group_id.to_string(),
                user_id: user_id.to_string(),
            })
        }),
    )
    .exec_without_returning(db)
    .await
    .unwrap();

    past_videos::Entity::insert_many(
        [
            video("v1", "svc1", "Week 1"),
            video("v2", "svc1", "Week 2"),
            video("v3", "svc2", "Kickoff"),
        ]
        .map(Into::<past_videos::ActiveModel>::into),
    )
    .exec_without_returning(db)
    .await
    .unwrap();

    video_distribution::Entity::insert_many(
        [("g1", "v1"), ("g1", "v2"), ("g3", "ghost")].map(|(group_id, video_id)| {
            video_distribution::ActiveModel::from(video_distribution::Model {
                group_id: group_id.to_string(),
                video_id: video_id.to_string(),
            })
        }),
    )
    .exec_without_returning(db)
    .await
    .unwrap();

    let now = Utc::now();
    assignments::Entity::insert_many(
        [
            assignment("a1", "g1", "c1", Some(now - Duration::days(30))),
            assignment("a2", "g1", "c2", Some(now + Duration::days(30))),
            assignment("a3", "g1", "missing-content", None),
        ]
        .map(Into::<assignments::ActiveModel>::into),
    )
    .exec_without_returning(db)
    .await
    .unwrap();
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(app: &Router, uri: &str, payload: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn sorted_by(mut rows: Vec<Value>, key: &str) -> Vec<Value> {
    rows.sort_by(|a, b| a[key].as_str().cmp(&b[key].as_str()));
    rows
}

#[tokio::test]
async fn test_register_then_login() {
    let (app, _db) = spawn_app().await;

    let new_user = json!({
        "last_name": "高橋",
        "first_name": "愛",
        "last_name_kana": "タカハシ",
        "first_name_kana": "アイ",
        "email": "ai@example.com",
        "phone_number": "080-1111-2222",
        "password": "correct horse"
    });

    let (status, body) = post_json(&app, "/register", &new_user).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User registered successfully.");
    let user_id = body["user_id"].as_str().expect("user_id should be set");
    assert!(uuid::Uuid::parse_str(user_id).is_ok());

    let (status, body) = post_json(
        &app,
        "/login",
        &json!({"email": "ai@example.com", "password": "correct horse"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], user_id);
    assert_eq!(body["last_name"], "高橋");
    assert!(body.get("password_hash").is_none());
    assert!(body.get("password").is_none());
}

fn new_user_body(email: &str, password: &str) -> Value {
    json!({
        "last_name": "鈴木",
        "first_name": "アリス",
        "last_name_kana": "スズキ",
        "first_name_kana": "アリス",
        "email": email,
        "phone_number": "090-0000-0000",
        "password": password
    })
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let (app, _db) = spawn_app().await;

    let (_, first) = post_json(&app, "/register", &new_user_body("dup@example.com", "first")).await;
    assert!(first["user_id"].is_string());

    let (status, body) =
        post_json(&app, "/register", &new_user_body("dup@example.com", "second")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "dup@example.com already registered", "user_id": null})
    );

    // The existing account is untouched
    let (_, body) = post_json(
        &app,
        "/login",
        &json!({"email": "dup@example.com", "password": "first"}),
    )
    .await;
    assert_eq!(body["user_id"], first["user_id"]);

    let (_, body) = post_json(
        &app,
        "/login",
        &json!({"email": "dup@example.com", "password": "second"}),
    )
    .await;
    assert_eq!(body, json!(false));
}

#[tokio::test]
async fn test_register_requires_email() {
    let (app, _db) = spawn_app().await;

    let (status, body) = post_json(&app, "/register", &new_user_body("  ", "pw")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Email is required");
}

#[tokio::test]
async fn test_login_failures_return_false() {
    let (app, _db) = spawn_app().await;

    let (status, body) = post_json(
        &app,
        "/login",
        &json!({"email": "legacy@example.com", "password": "wrong"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(false));

    let (_, body) = post_json(
        &app,
        "/login",
        &json!({"email": "nobody@example.com", "password": "whatever"}),
    )
    .await;
    assert_eq!(body, json!(false));

    // Seeded with a non-hash value
    let (_, body) = post_json(
        &app,
        "/login",
        &json!({"email": "alice@example.com", "password": "unused"}),
    )
    .await;
    assert_eq!(body, json!(false));
}

#[tokio::test]
async fn test_login_with_legacy_bcrypt_hash() {
    let (app, _db) = spawn_app().await;

    let (status, body) = post_json(
        &app,
        "/login",
        &json!({"email": "legacy@example.com", "password": "legacy-pass"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], "u4");
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_blank_credentials_return_false() {
    let (app, _db) = spawn_app().await;

    let (_, registered) = post_json(&app, "/register", &new_user_body("x@example.com", "pw")).await;
    assert!(registered["user_id"].is_string());

    let (status, body) = post_json(
        &app,
        "/login",
        &json!({"email": "x@example.com", "password": ""}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(false));

    let (status, body) = post_json(&app, "/login", &json!({"email": "", "password": "pw"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(false));
}

#[tokio::test]
async fn test_get_status() {
    let (app, _db) = spawn_app().await;

    let (status, body) = get_json(&app, "/getstatus/st1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status_name": "Active",
            "start_date": "2024-04-01",
            "end_date": "2025-03-31",
            "service_id": "svc1",
            "service_name": "Bootcamp"
        })
    );

    let (status, body) = get_json(&app, "/getstatus/nope").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
}

#[tokio::test]
async fn test_get_service() {
    let (app, _db) = spawn_app().await;

    let (_, body) = get_json(&app, "/getservice/svc2").await;
    assert_eq!(body["service_name"], "Mentoring");

    let (_, body) = get_json(&app, "/getservice/nope").await;
    assert!(body.is_null());
}

#[tokio::test]
async fn test_get_user_status_keeps_registrations_without_status() {
    let (app, _db) = spawn_app().await;

    let (status, body) = get_json(&app, "/getuserstatus/u1").await;
    assert_eq!(status, StatusCode::OK);

    let rows = sorted_by(body.as_array().unwrap().clone(), "registration_id");
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0]["status_name"], "Active");
    assert_eq!(rows[0]["service_name"], "Bootcamp");
    assert_eq!(rows[0]["status_level"], 2);

    assert_eq!(rows[1]["service_id"], "svc2");
    assert!(rows[1]["status_id"].is_null());
    assert!(rows[1]["status_name"].is_null());

    let (_, body) = get_json(&app, "/getuserstatus/u3").await;
    assert!(body.is_null());
}

#[tokio::test]
async fn test_get_contents_durations_in_minutes() {
    let (app, _db) = spawn_app().await;

    let (status, body) = get_json(&app, "/getcontents/svc1").await;
    assert_eq!(status, StatusCode::OK);

    let rows = sorted_by(body.as_array().unwrap().clone(), "content_id");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["duration"], "2");
    assert_eq!(rows[1]["duration"], "0");

    let (_, body) = get_json(&app, "/getcontents/svc2").await;
    assert!(body.is_null());
}

#[tokio::test]
async fn test_my_groups_excludes_self() {
    let (app, _db) = spawn_app().await;

    let (status, body) = post_json(
        &app,
        "/mygroup",
        &json!({"user_id": "u1", "service_id": "svc1"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let groups = sorted_by(body.as_array().unwrap().clone(), "group_id");
    assert_eq!(
        groups,
        vec![
            json!({"group_id": "g1", "group_name": "Team A", "full_name": ["山田花子"]}),
            json!({"group_id": "g2", "group_name": "Team B", "full_name": ["佐藤次郎"]}),
        ]
    );

    let (_, body) = post_json(
        &app,
        "/mygroup",
        &json!({"user_id": "u4", "service_id": "svc1"}),
    )
    .await;
    assert!(body.is_null());
}

#[tokio::test]
async fn test_lecture_data_in_display_timezone() {
    let (app, _db) = spawn_app().await;

    let (status, body) = get_json(&app, "/getlecturedata/svc1").await;
    assert_eq!(status, StatusCode::OK);

    let rows = sorted_by(body.as_array().unwrap().clone(), "video_id");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["created_at"], "2024-04-01T09:00:00+09:00");
    assert_eq!(rows[0]["last_updated"], "2024-04-01T09:00:00+09:00");
    assert_eq!(rows[0]["attachment_1_link"], "https://files.example.com/slides.pdf");
}

#[tokio::test]
async fn test_my_lecture() {
    let (app, _db) = spawn_app().await;

    let (_, body) = get_json(&app, "/getmylecture/g1").await;
    let rows = sorted_by(body.as_array().unwrap().clone(), "video_id");
    let ids: Vec<&str> = rows.iter().map(|r| r["video_id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["v1", "v2"]);

    let (status, body) = get_json(&app, "/getmylecture/g2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"video_id": null}));

    // Distributed id with no matching video row
    let (_, body) = get_json(&app, "/getmylecture/g3").await;
    assert_eq!(body, json!({"video_id": null}));
}

#[tokio::test]
async fn test_my_assignments_with_content() {
    let (app, _db) = spawn_app().await;

    let (status, body) = get_json(&app, "/getmyassignment/g1").await;
    assert_eq!(status, StatusCode::OK);

    let rows = sorted_by(body.as_array().unwrap().clone(), "assignment_id");
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0]["content_details"]["content_name"], "Intro");
    assert_eq!(rows[0]["content_details"]["duration"], "2");
    assert_eq!(rows[0]["duration"], 90);
    assert!(rows[0]["deadline"].as_str().unwrap().ends_with("+09:00"));

    assert!(rows[2]["deadline"].is_null());
    assert!(rows[2].get("content_details").is_none());
}

#[tokio::test]
async fn test_my_assignments_deadline_filter() {
    let (app, _db) = spawn_app().await;

    let (_, body) = get_json(&app, "/getmyassignment-deadline/g1").await;
    let rows = sorted_by(body.as_array().unwrap().clone(), "assignment_id");
    let ids: Vec<&str> = rows
        .iter()
        .map(|r| r["assignment_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["a2", "a3"]);
}

#[tokio::test]
async fn test_assignments_empty_group_is_empty_list() {
    let (app, _db) = spawn_app().await;

    let (status, body) = get_json(&app, "/getmyassignment/g2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (_, body) = get_json(&app, "/getmyassignment-deadline/g2").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_database_failures_collapse_to_empty_shapes() {
    let (app, db) = spawn_app().await;

    db.execute_unprepared(
        "PRAGMA foreign_keys = OFF; \
         DROP TABLE Content; \
         DROP TABLE Assignments; \
         DROP TABLE VideoDistribution; \
         DROP TABLE GroupMembers; \
         DROP TABLE UserRegistrations; \
         DROP TABLE Users;",
    )
    .await
    .unwrap();

    let (status, body) = get_json(&app, "/getcontents/svc1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let (_, body) = get_json(&app, "/getmyassignment/g1").await;
    assert_eq!(body, json!([]));

    let (_, body) = get_json(&app, "/getmyassignment-deadline/g1").await;
    assert_eq!(body, json!([]));

    let (_, body) = get_json(&app, "/getmylecture/g1").await;
    assert_eq!(body, json!({"video_id": null}));

    let (status, body) = post_json(&app, "/register", &new_user_body("new@example.com", "pw")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "new@example.com already registered", "user_id": null})
    );

    let (status, body) = post_json(
        &app,
        "/login",
        &json!({"email": "legacy@example.com", "password": "legacy-pass"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(false));

    // Tables still present keep answering
    let (_, body) = get_json(&app, "/getstatus/st1").await;
    assert_eq!(body["status_name"], "Active");
}

#[tokio::test]
async fn test_failed_child_queries() {
    let (app, db) = spawn_app().await;

    db.execute_unprepared("DROP TABLE Content; DROP TABLE PastVideos;")
        .await
        .unwrap();

    // Assignments still load; their content cannot be attached
    let (_, body) = get_json(&app, "/getmyassignment/g1").await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.get("content_details").is_none()));

    // Ids were found but the video fetch failed
    let (status, body) = get_json(&app, "/getmylecture/g1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let (_, body) = get_json(&app, "/getlecturedata/svc1").await;
    assert!(body.is_null());
}

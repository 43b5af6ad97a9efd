use actix_web::test;
use contamina::protocol::GameSummary;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{assert_error_code, assert_problem_details_structure, read_envelope};
use crate::support::create_test_app;
use crate::support::game_setup::{
    as_player, create_game, create_game_raw, get_game, get_game_raw, join_raw, lobby, start_raw,
    started_game, test_state,
};

#[actix_web::test]
async fn create_game_returns_created_envelope() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let resp = create_game_raw(&app, "moonbase", "alice", Some("hunter2")).await;
    let summary: GameSummary = read_envelope(resp, 201).await;

    assert_eq!(summary.name, "moonbase");
    assert_eq!(summary.owner, "alice");
    assert_eq!(summary.players, vec!["alice"]);
    assert!(summary.password, "password flag should be set");
    assert!(summary.current_round.is_none());
    assert!(summary.enemies.is_empty());
}

#[actix_web::test]
async fn create_game_never_echoes_password() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let resp = create_game_raw(&app, "quiet", "alice", Some("hunter2")).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["password"], true);
    assert!(!body.to_string().contains("hunter2"));
}

#[actix_web::test]
async fn create_game_validates_lengths() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let resp = create_game_raw(&app, "ab", "alice", None).await;
    assert_problem_details_structure(
        resp,
        400,
        "INVALID_GAME_NAME",
        "name must be between 3 and 20 characters",
    )
    .await;

    let resp = create_game_raw(&app, "moonbase", "a-very-long-owner-name-here", None).await;
    assert_error_code(resp, 400, "INVALID_PLAYER_NAME").await;

    let resp = create_game_raw(&app, "moonbase", "alice", Some("pw")).await;
    assert_error_code(resp, 400, "INVALID_PASSWORD").await;
}

#[actix_web::test]
async fn create_game_rejects_malformed_json() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_code(resp, 400, "BAD_REQUEST").await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(json!({ "name": "moonbase" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(
        resp,
        400,
        "BAD_REQUEST",
        "Invalid JSON: wrong types or missing fields",
    )
    .await;
}

#[actix_web::test]
async fn duplicate_game_name_conflicts() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    create_game(&app, "moonbase", "alice", None).await;
    let resp = create_game_raw(&app, "moonbase", "bob", None).await;
    assert_error_code(resp, 409, "GAME_NAME_TAKEN").await;
}

#[actix_web::test]
async fn join_adds_player_and_rejects_duplicates() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let game = create_game(&app, "moonbase", "alice", None).await;

    let resp = join_raw(&app, game.id, "bob", None).await;
    let summary: GameSummary = read_envelope(resp, 200).await;
    assert_eq!(summary.players, vec!["alice", "bob"]);

    let resp = join_raw(&app, game.id, "bob", None).await;
    assert_error_code(resp, 409, "ALREADY_JOINED").await;
}

#[actix_web::test]
async fn join_protected_game_needs_password() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let game = create_game(&app, "vault", "alice", Some("s3cret")).await;

    let resp = join_raw(&app, game.id, "bob", None).await;
    assert_error_code(resp, 401, "INVALID_CREDENTIALS").await;

    let resp = join_raw(&app, game.id, "bob", Some("wrong")).await;
    assert_error_code(resp, 401, "INVALID_CREDENTIALS").await;

    let resp = join_raw(&app, game.id, "bob", Some("s3cret")).await;
    assert_eq!(resp.status().as_u16(), 200);
}

#[actix_web::test]
async fn padded_credentials_are_trimmed_on_create() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let resp = create_game_raw(&app, "  harbor ", " owner1 ", Some(" secret ")).await;
    let summary: GameSummary = read_envelope(resp, 201).await;
    assert_eq!(summary.name, "harbor");
    assert_eq!(summary.owner, "owner1");

    let req = as_player(
        test::TestRequest::get().uri(&format!("/api/games/{}", summary.id)),
        "owner1",
    )
    .insert_header(("password", " secret "))
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let resp = join_raw(&app, summary.id, "bob", Some("secret")).await;
    assert_eq!(resp.status().as_u16(), 200);
}

#[actix_web::test]
async fn join_full_game_conflicts() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let game_id = lobby(&app, "crowded", 10).await;

    let resp = join_raw(&app, game_id, "player11", None).await;
    assert_error_code(resp, 409, "GAME_FULL").await;
}

#[actix_web::test]
async fn join_unknown_game_is_not_found() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let missing = Uuid::new_v4();

    let resp = join_raw(&app, missing, "bob", None).await;
    assert_problem_details_structure(
        resp,
        404,
        "GAME_NOT_FOUND",
        &format!("Game {missing} not found"),
    )
    .await;
}

#[actix_web::test]
async fn get_game_is_member_only() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let game = create_game(&app, "moonbase", "alice", None).await;

    let summary = get_game(&app, game.id, "alice").await;
    assert_eq!(summary.id, game.id);

    let resp = get_game_raw(&app, game.id, "mallory").await;
    assert_error_code(resp, 403, "NOT_A_MEMBER").await;
}

#[actix_web::test]
async fn start_requires_owner_and_enough_players() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let game_id = lobby(&app, "tiny", 4).await;

    let resp = start_raw(&app, game_id, "player2").await;
    assert_eq!(resp.status().as_u16(), 403);
    assert!(resp.headers().contains_key("x-trace-id"));

    let resp = start_raw(&app, game_id, "player1").await;
    assert_eq!(resp.status().as_u16(), 428);

    let resp = join_raw(&app, game_id, "player5", None).await;
    assert_eq!(resp.status().as_u16(), 200);

    let resp = start_raw(&app, game_id, "player1").await;
    assert_eq!(resp.status().as_u16(), 200);
    let body = test::read_body(resp).await;
    assert!(body.is_empty(), "HEAD start should not carry a body");

    let summary = get_game(&app, game_id, "player1").await;
    assert_eq!(summary.status, contamina::domain::GameStatus::Rounds);
    assert!(summary.current_round.is_some());
}

#[actix_web::test]
async fn start_twice_and_join_after_start_conflict() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let game_id = started_game(&app, "running", 5).await;

    let resp = start_raw(&app, game_id, "player1").await;
    assert_eq!(resp.status().as_u16(), 409);

    let resp = join_raw(&app, game_id, "latecomer", None).await;
    assert_error_code(resp, 409, "ALREADY_STARTED").await;
}

#[actix_web::test]
async fn search_filters_and_paginates() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    for name in ["alpha-one", "alpha-two", "beta-three"] {
        create_game(&app, name, "owner", None).await;
    }
    let running = started_game(&app, "alpha-live", 5).await;

    let search = |uri: &str| test::TestRequest::get().uri(uri).to_request();

    let resp = test::call_service(&app, search("/api/games")).await;
    let all: Vec<GameSummary> = read_envelope(resp, 200).await;
    let names: Vec<_> = all.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["alpha-one", "alpha-two", "beta-three", "alpha-live"]);
    assert!(all.iter().all(|g| g.enemies.is_empty()));

    let resp = test::call_service(&app, search("/api/games?name=ALPHA")).await;
    let alphas: Vec<GameSummary> = read_envelope(resp, 200).await;
    assert_eq!(alphas.len(), 3);

    let resp = test::call_service(&app, search("/api/games?status=rounds")).await;
    let live: Vec<GameSummary> = read_envelope(resp, 200).await;
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].id, running);

    let resp = test::call_service(&app, search("/api/games?page=1&limit=2")).await;
    let page: Vec<GameSummary> = read_envelope(resp, 200).await;
    let names: Vec<_> = page.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["beta-three", "alpha-live"]);
}

#[actix_web::test]
async fn search_rejects_bad_parameters() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/api/games?status=paused")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_code(resp, 400, "INVALID_GAME_STATUS").await;

    let req = test::TestRequest::get().uri("/api/games?limit=0").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_code(resp, 400, "INVALID_PAGINATION").await;

    let req = test::TestRequest::get().uri("/api/games?page=abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_code(resp, 400, "INVALID_PAGINATION").await;
}

#[actix_web::test]
async fn enemies_only_visible_to_enemies() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let game_id = started_game(&app, "secrets", 7).await;

    let mut enemy_views = 0;
    for i in 1..=7 {
        let player = format!("player{i}");
        let view = get_game(&app, game_id, &player).await;
        if view.enemies.contains(&player) {
            enemy_views += 1;
            assert_eq!(view.enemies.len(), 3);
        } else {
            assert!(view.enemies.is_empty(), "{player} should not see enemies");
        }
    }
    assert_eq!(enemy_views, 3);

    let req = as_player(test::TestRequest::get().uri("/api/games?name=secrets"), "player1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let listed: Vec<GameSummary> = read_envelope(resp, 200).await;
    assert!(listed[0].enemies.is_empty());
}

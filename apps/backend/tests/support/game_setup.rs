//! HTTP-level helpers for driving a game through the public routes.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::Method;
use actix_web::{test, Error};
use contamina::protocol::{GameSummary, RoundDetail};
use contamina::state::app_state::AppState;
use contamina::build_state;
use serde_json::json;
use uuid::Uuid;

use crate::common::read_envelope;

/// Fresh in-memory state with deterministic game seeds.
pub fn test_state() -> AppState {
    build_state()
        .with_fixed_seeds(42)
        .build()
        .expect("build test state")
}

/// `player1..playerN`.
pub fn player_names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("player{i}")).collect()
}

pub fn as_player(req: test::TestRequest, player: &str) -> test::TestRequest {
    req.insert_header(("player", player))
}

pub async fn create_game_raw<S>(
    app: &S,
    name: &str,
    owner: &str,
    password: Option<&str>,
) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let body = match password {
        Some(p) => json!({ "name": name, "owner": owner, "password": p }),
        None => json!({ "name": name, "owner": owner }),
    };
    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

pub async fn create_game<S>(app: &S, name: &str, owner: &str, password: Option<&str>) -> GameSummary
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    read_envelope(create_game_raw(app, name, owner, password).await, 201).await
}

pub async fn join_raw<S>(
    app: &S,
    game_id: Uuid,
    player: &str,
    password: Option<&str>,
) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let mut req = as_player(
        test::TestRequest::put().uri(&format!("/api/games/{game_id}")),
        player,
    );
    if let Some(p) = password {
        req = req.insert_header(("password", p));
    }
    test::call_service(app, req.to_request()).await
}

/// Lobby with `player1..playerN`; player1 owns it.
pub async fn lobby<S>(app: &S, name: &str, n: usize) -> Uuid
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let players = player_names(n);
    let game = create_game(app, name, &players[0], None).await;
    for player in &players[1..] {
        let resp = join_raw(app, game.id, player, None).await;
        assert_eq!(resp.status().as_u16(), 200, "join {player}");
    }
    game.id
}

pub async fn start_raw<S>(app: &S, game_id: Uuid, player: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = as_player(
        test::TestRequest::default()
            .method(Method::HEAD)
            .uri(&format!("/api/games/{game_id}/start")),
        player,
    )
    .to_request();
    test::call_service(app, req).await
}

/// Lobby of `n` players, started by player1.
pub async fn started_game<S>(app: &S, name: &str, n: usize) -> Uuid
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let game_id = lobby(app, name, n).await;
    let resp = start_raw(app, game_id, "player1").await;
    assert_eq!(resp.status().as_u16(), 200, "start game");
    game_id
}

pub async fn get_game_raw<S>(app: &S, game_id: Uuid, player: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = as_player(
        test::TestRequest::get().uri(&format!("/api/games/{game_id}")),
        player,
    )
    .to_request();
    test::call_service(app, req).await
}

pub async fn get_game<S>(app: &S, game_id: Uuid, player: &str) -> GameSummary
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    read_envelope(get_game_raw(app, game_id, player).await, 200).await
}

pub async fn get_round<S>(app: &S, game_id: Uuid, round_id: Uuid, player: &str) -> RoundDetail
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = as_player(
        test::TestRequest::get().uri(&format!("/api/games/{game_id}/rounds/{round_id}")),
        player,
    )
    .to_request();
    read_envelope(test::call_service(app, req).await, 200).await
}

pub async fn list_rounds<S>(app: &S, game_id: Uuid, player: &str) -> Vec<RoundDetail>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = as_player(
        test::TestRequest::get().uri(&format!("/api/games/{game_id}/rounds")),
        player,
    )
    .to_request();
    read_envelope(test::call_service(app, req).await, 200).await
}

/// The round the game currently points at.
pub async fn current_round<S>(app: &S, game_id: Uuid) -> RoundDetail
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let game = get_game(app, game_id, "player1").await;
    let round_id = game.current_round.expect("game should have a current round");
    get_round(app, game_id, round_id, "player1").await
}

/// Split players into (citizens, enemies) by asking each member for their view.
pub async fn roster<S>(app: &S, game_id: Uuid, n: usize) -> (Vec<String>, Vec<String>)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let players = player_names(n);
    let mut enemies = Vec::new();
    for player in &players {
        let view = get_game(app, game_id, player).await;
        if !view.enemies.is_empty() {
            enemies = view.enemies;
            break;
        }
    }
    let citizens = players
        .into_iter()
        .filter(|p| !enemies.contains(p))
        .collect();
    (citizens, enemies)
}

pub async fn propose_raw<S>(
    app: &S,
    game_id: Uuid,
    round_id: Uuid,
    player: &str,
    group: &[String],
) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = as_player(
        test::TestRequest::patch().uri(&format!("/api/games/{game_id}/rounds/{round_id}")),
        player,
    )
    .set_json(json!({ "group": group }))
    .to_request();
    test::call_service(app, req).await
}

pub async fn vote_raw<S>(
    app: &S,
    game_id: Uuid,
    round_id: Uuid,
    player: &str,
    approve: bool,
) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = as_player(
        test::TestRequest::post().uri(&format!("/api/games/{game_id}/rounds/{round_id}")),
        player,
    )
    .set_json(json!({ "vote": approve }))
    .to_request();
    test::call_service(app, req).await
}

pub async fn act_raw<S>(
    app: &S,
    game_id: Uuid,
    round_id: Uuid,
    player: &str,
    collaborate: bool,
) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = as_player(
        test::TestRequest::put().uri(&format!("/api/games/{game_id}/rounds/{round_id}")),
        player,
    )
    .set_json(json!({ "action": collaborate }))
    .to_request();
    test::call_service(app, req).await
}

/// Every player votes the same way on the current proposal.
pub async fn vote_all<S>(app: &S, game_id: Uuid, round_id: Uuid, n: usize, approve: bool)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    for player in player_names(n) {
        let resp = vote_raw(app, game_id, round_id, &player, approve).await;
        assert_eq!(resp.status().as_u16(), 200, "vote by {player}");
    }
}

/// Leader proposes `group`, everybody approves, each member plays `collaborate`.
pub async fn play_mission<S>(
    app: &S,
    game_id: Uuid,
    n: usize,
    group: &[String],
    collaborate: impl Fn(&str) -> bool,
) -> RoundDetail
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let round = current_round(app, game_id).await;
    let resp = propose_raw(app, game_id, round.id, &round.leader, group).await;
    assert_eq!(resp.status().as_u16(), 200, "propose by {}", round.leader);
    vote_all(app, game_id, round.id, n, true).await;
    for member in group {
        let resp = act_raw(app, game_id, round.id, member, collaborate(member)).await;
        assert_eq!(resp.status().as_u16(), 200, "action by {member}");
    }
    get_round(app, game_id, round.id, "player1").await
}

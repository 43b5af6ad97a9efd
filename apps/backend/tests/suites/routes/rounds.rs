use actix_web::test;
use contamina::domain::{required_group_size, RoundResult, RoundStatus};
use contamina::protocol::RoundDetail;
use serde_json::json;

use crate::common::{assert_error_code, read_envelope};
use crate::support::create_test_app;
use crate::support::game_setup::{
    act_raw, as_player, current_round, get_round, list_rounds, lobby, propose_raw, roster,
    started_game, test_state, vote_raw,
};

#[actix_web::test]
async fn lobby_has_no_rounds() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let game_id = lobby(&app, "waiting", 3).await;

    assert!(list_rounds(&app, game_id, "player1").await.is_empty());
}

#[actix_web::test]
async fn first_round_waits_on_leader() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let game_id = started_game(&app, "opening", 5).await;

    let rounds = list_rounds(&app, game_id, "player3").await;
    assert_eq!(rounds.len(), 1);
    let round = &rounds[0];
    assert_eq!(round.round_no, 1);
    assert_eq!(round.status, RoundStatus::WaitingOnLeader);
    assert_eq!(round.result, RoundResult::None);
    assert!(round.group.is_empty());
    assert!(round.leader.starts_with("player"));
}

#[actix_web::test]
async fn propose_returns_round_in_voting() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let game_id = started_game(&app, "proposal", 5).await;
    let round = current_round(&app, game_id).await;
    let group: Vec<String> = vec!["player1".into(), "player2".into()];

    let resp = propose_raw(&app, game_id, round.id, &round.leader, &group).await;
    let detail: RoundDetail = read_envelope(resp, 200).await;
    assert_eq!(detail.status, RoundStatus::Voting);
    assert_eq!(detail.group, group);
}

#[actix_web::test]
async fn propose_rejects_non_leader_and_bad_groups() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let game_id = started_game(&app, "bad-groups", 5).await;
    let round = current_round(&app, game_id).await;
    let other = (1..=5)
        .map(|i| format!("player{i}"))
        .find(|p| *p != round.leader)
        .unwrap();
    let pair: Vec<String> = vec!["player1".into(), "player2".into()];

    let resp = propose_raw(&app, game_id, round.id, &other, &pair).await;
    assert_error_code(resp, 403, "NOT_LEADER").await;

    let trio: Vec<String> = vec!["player1".into(), "player2".into(), "player3".into()];
    let resp = propose_raw(&app, game_id, round.id, &round.leader, &trio).await;
    assert_error_code(resp, 400, "INVALID_GROUP_SIZE").await;

    let twins: Vec<String> = vec!["player1".into(), "player1".into()];
    let resp = propose_raw(&app, game_id, round.id, &round.leader, &twins).await;
    assert_error_code(resp, 400, "DUPLICATE_GROUP_MEMBER").await;

    let stranger: Vec<String> = vec!["player1".into(), "mallory".into()];
    let resp = propose_raw(&app, game_id, round.id, &round.leader, &stranger).await;
    assert_error_code(resp, 400, "UNKNOWN_GROUP_MEMBER").await;

    let resp = propose_raw(&app, game_id, round.id, &round.leader, &[]).await;
    assert_error_code(resp, 400, "INVALID_GROUP_SIZE").await;

    let resp = propose_raw(&app, game_id, round.id, &round.leader, &pair).await;
    assert_eq!(resp.status().as_u16(), 200);
    let resp = propose_raw(&app, game_id, round.id, &round.leader, &pair).await;
    assert_error_code(resp, 409, "GROUP_ALREADY_PROPOSED").await;
}

#[actix_web::test]
async fn vote_before_proposal_is_phase_mismatch() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let game_id = started_game(&app, "early-vote", 5).await;
    let round = current_round(&app, game_id).await;

    let resp = vote_raw(&app, game_id, round.id, "player1", true).await;
    assert_error_code(resp, 428, "PHASE_MISMATCH").await;
}

#[actix_web::test]
async fn double_vote_conflicts_and_votes_are_recorded() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let game_id = started_game(&app, "double-vote", 5).await;
    let round = current_round(&app, game_id).await;
    let pair: Vec<String> = vec!["player1".into(), "player2".into()];
    propose_raw(&app, game_id, round.id, &round.leader, &pair).await;

    let resp = vote_raw(&app, game_id, round.id, "player3", false).await;
    let detail: RoundDetail = read_envelope(resp, 200).await;
    assert_eq!(detail.votes, vec![false]);

    let resp = vote_raw(&app, game_id, round.id, "player3", true).await;
    assert_error_code(resp, 409, "ALREADY_VOTED").await;
}

#[actix_web::test]
async fn vote_body_must_be_boolean() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let game_id = started_game(&app, "typed-vote", 5).await;
    let round = current_round(&app, game_id).await;

    let req = as_player(
        test::TestRequest::post().uri(&format!("/api/games/{game_id}/rounds/{}", round.id)),
        "player1",
    )
    .set_json(json!({ "vote": "yes" }))
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_code(resp, 400, "BAD_REQUEST").await;
}

#[actix_web::test]
async fn action_rules_are_enforced() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let game_id = started_game(&app, "actions", 5).await;
    let (citizens, enemies) = roster(&app, game_id, 5).await;
    let round = current_round(&app, game_id).await;

    // one citizen, one enemy on the mission
    let group = vec![citizens[0].clone(), enemies[0].clone()];
    let outsider = citizens[1].clone();

    let resp = act_raw(&app, game_id, round.id, &citizens[0], true).await;
    assert_error_code(resp, 428, "PHASE_MISMATCH").await;

    propose_raw(&app, game_id, round.id, &round.leader, &group).await;
    for i in 1..=5 {
        vote_raw(&app, game_id, round.id, &format!("player{i}"), true).await;
    }
    let detail = get_round(&app, game_id, round.id, "player1").await;
    assert_eq!(detail.status, RoundStatus::WaitingOnGroup);

    let resp = act_raw(&app, game_id, round.id, &outsider, true).await;
    assert_error_code(resp, 403, "NOT_IN_GROUP").await;

    let resp = act_raw(&app, game_id, round.id, &citizens[0], false).await;
    assert_error_code(resp, 403, "SABOTAGE_NOT_ALLOWED").await;

    let resp = act_raw(&app, game_id, round.id, &citizens[0], true).await;
    assert_eq!(resp.status().as_u16(), 200);
    let resp = act_raw(&app, game_id, round.id, &citizens[0], true).await;
    assert_error_code(resp, 409, "ALREADY_ACTED").await;

    let resp = act_raw(&app, game_id, round.id, &enemies[0], false).await;
    let detail: RoundDetail = read_envelope(resp, 200).await;
    assert_eq!(detail.status, RoundStatus::Ended);
    assert_eq!(detail.result, RoundResult::Enemies);
}

#[actix_web::test]
async fn round_routes_are_member_only() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let game_id = started_game(&app, "private", 5).await;
    let round = current_round(&app, game_id).await;
    let size = required_group_size(5, 1).unwrap();
    let group: Vec<String> = (1..=size).map(|i| format!("player{i}")).collect();

    let req = as_player(
        test::TestRequest::get().uri(&format!("/api/games/{game_id}/rounds")),
        "mallory",
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_code(resp, 403, "NOT_A_MEMBER").await;

    let resp = propose_raw(&app, game_id, round.id, "mallory", &group).await;
    assert_error_code(resp, 403, "NOT_A_MEMBER").await;

    let resp = vote_raw(&app, game_id, round.id, "mallory", true).await;
    assert_error_code(resp, 403, "NOT_A_MEMBER").await;
}

use std::time::Duration;

use pretty_assertions::assert_eq;
use recipe_form_engine::{
    BodyMode, FailureKind, InstructionsPayload, RecipePayload, RecipeResponse, ReqwestSubmitter,
    SubmitRequest, SubmitSettings, Submitter,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> SubmitSettings {
    SubmitSettings {
        server_url: server.uri(),
        ..SubmitSettings::default()
    }
}

fn request() -> SubmitRequest {
    SubmitRequest {
        company: "Nabisco".to_string(),
        ingredients: "tomato, salt".to_string(),
    }
}

async fn mount_body(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(
            ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/json"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn posts_json_and_decodes_recipe() {
    recipe_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "company": "Nabisco",
            "ingredients": "tomato, salt"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Tomato Soup",
            "tagline": "Warm & simple",
            "ingredients": ["tomato", "salt"],
            "instructions": ["Boil", "Blend"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let submitter = ReqwestSubmitter::new(settings_for(&server));
    let response = submitter.submit(1, &request()).await.expect("submit ok");

    assert_eq!(
        response,
        RecipeResponse::Recipe(RecipePayload {
            name: "Tomato Soup".to_string(),
            tagline: "Warm & simple".to_string(),
            ingredients: vec!["tomato".to_string(), "salt".to_string()],
            instructions: InstructionsPayload::Steps(vec![
                "Boil".to_string(),
                "Blend".to_string()
            ]),
        })
    );
}

#[tokio::test]
async fn whole_body_mode_decodes_text_instructions() {
    let server = MockServer::start().await;
    mount_body(
        &server,
        200,
        r#"{"name":"Toast","tagline":"Crunchy","ingredients":["bread"],"instructions":"Toast it."}"#,
    )
    .await;

    let settings = SubmitSettings {
        body_mode: BodyMode::Whole,
        ..settings_for(&server)
    };
    let response = ReqwestSubmitter::new(settings)
        .submit(2, &request())
        .await
        .expect("submit ok");

    match response {
        RecipeResponse::Recipe(recipe) => assert_eq!(
            recipe.instructions,
            InstructionsPayload::Text("Toast it.".to_string())
        ),
        other => panic!("expected recipe, got {other:?}"),
    }
}

#[tokio::test]
async fn backend_error_payload_is_not_a_transport_failure() {
    let server = MockServer::start().await;
    mount_body(&server, 200, r#"{"error":"unknown company"}"#).await;

    let response = ReqwestSubmitter::new(settings_for(&server))
        .submit(3, &request())
        .await
        .expect("submit ok");

    assert_eq!(
        response,
        RecipeResponse::Error {
            error: "unknown company".to_string()
        }
    );
}

#[tokio::test]
async fn non_success_status_fails_even_with_error_body() {
    let server = MockServer::start().await;
    mount_body(&server, 400, r#"{"error":"Invalid company."}"#).await;

    let err = ReqwestSubmitter::new(settings_for(&server))
        .submit(4, &request())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(400));
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    mount_body(&server, 200, r#"{"name":"Tomato Soup","tagline":"#).await;

    let err = ReqwestSubmitter::new(settings_for(&server))
        .submit(5, &request())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn partial_recipe_is_rejected() {
    let server = MockServer::start().await;
    mount_body(&server, 200, r#"{"name":"Tomato Soup","tagline":"Warm"}"#).await;

    let err = ReqwestSubmitter::new(settings_for(&server))
        .submit(6, &request())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    mount_body(&server, 200, r#"{"error":"this body is longer than the cap"}"#).await;

    let settings = SubmitSettings {
        max_bytes: 10,
        ..settings_for(&server)
    };
    let err = ReqwestSubmitter::new(settings)
        .submit(7, &request())
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 10, .. }
    ));
}

#[tokio::test]
async fn slow_response_times_out_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string(r#"{"error":"late"}"#),
        )
        .mount(&server)
        .await;

    let settings = SubmitSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..settings_for(&server)
    };
    let err = ReqwestSubmitter::new(settings)
        .submit(8, &request())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn unreachable_server_is_a_network_failure() {
    let settings = SubmitSettings {
        server_url: "http://127.0.0.1:1".to_string(),
        ..SubmitSettings::default()
    };
    let err = ReqwestSubmitter::new(settings)
        .submit(9, &request())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Network);
}

#[tokio::test]
async fn invalid_server_url_is_reported() {
    let settings = SubmitSettings {
        server_url: "not a url".to_string(),
        ..SubmitSettings::default()
    };
    let err = ReqwestSubmitter::new(settings)
        .submit(10, &request())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

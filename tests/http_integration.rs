//! Integration tests for the Code Engine client using wiremock
//!
//! These tests run operations against mocked endpoints and check the
//! requests that reach the wire: paths, query parameters, headers and
//! bodies, plus how responses and errors come back.

use codeengine::{
    AllowedOutboundDestination, AllowedOutboundDestinationPrototype, AppPatch, AppPrototype,
    BearerTokenAuthenticator, ClientConfig, CodeEngineClient, ConfigMapData, ConfigMapReplace,
    Error, ListOptions, NoAuthAuthenticator, SecretData, SecretFormat, SecretPrototype,
    SshSecretData,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::{json, Value};
use wiremock::matchers::{bearer_token, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VERSION: &str = "2025-03-29";

/// Route client logs to the test output; `RUST_LOG=codeengine=debug` shows requests
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn client_for(server: &MockServer) -> CodeEngineClient {
    init_tracing();
    let config = ClientConfig::new().with_service_url(format!("{}/v2", server.uri()));
    CodeEngineClient::new(config, NoAuthAuthenticator).expect("client should build")
}

fn app_json(name: &str) -> Value {
    json!({
        "entity_tag": "2386231540",
        "image_reference": "icr.io/codeengine/helloworld",
        "managed_domain_mappings": "local_public",
        "name": name,
        "run_arguments": [],
        "run_commands": [],
        "run_env_variables": [],
        "run_volume_mounts": [],
        "scale_cpu_limit": "1",
        "scale_ephemeral_storage_limit": "400M",
        "scale_max_instances": 10,
        "scale_memory_limit": "4G",
        "scale_min_instances": 0,
        "scale_request_timeout": 300,
        "status": "ready"
    })
}

mod request_tests {
    use super::*;

    /// GET builds the path from its arguments and sends only `version`
    #[tokio::test]
    async fn test_get_app_path_and_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/projects/p1/apps/a1"))
            .and(query_param("version", VERSION))
            .respond_with(ResponseTemplate::new(200).set_body_json(app_json("a1")))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .get_app("p1", "a1")
            .await
            .expect("Request should succeed");

        assert_eq!(response.status, 200);
        assert_eq!(response.result.name, "a1");
        assert_eq!(response.result.scale_max_instances, 10);

        let requests = server.received_requests().await.unwrap();
        let pairs: Vec<_> = requests[0].url.query_pairs().collect();
        assert_eq!(pairs.len(), 1);
    }

    /// Every request carries the analytics header and asks for JSON
    #[tokio::test]
    async fn test_default_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/projects/p1/apps/a1"))
            .and(header("accept", "application/json"))
            .and(header(
                "x-ibmcloud-sdk-analytics",
                "service_name=code_engine;service_version=V2;operation_id=get_app",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(app_json("a1")))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .get_app("p1", "a1")
            .await
            .expect("Request should succeed");

        let requests = server.received_requests().await.unwrap();
        let user_agent = requests[0].headers.get("user-agent").unwrap();
        assert!(user_agent.to_str().unwrap().starts_with("codeengine-rust/"));
    }

    /// Updates are merge patches guarded by If-Match
    #[tokio::test]
    async fn test_update_app_merge_patch() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/v2/projects/p1/apps/a1"))
            .and(header("content-type", "application/merge-patch+json"))
            .and(header("if-match", "2386231540"))
            .and(body_json(json!({"scale_min_instances": 1})))
            .respond_with(ResponseTemplate::new(200).set_body_json(app_json("a1")))
            .expect(1)
            .mount(&server)
            .await;

        let patch = AppPatch {
            scale_min_instances: Some(1),
            ..Default::default()
        };
        client_for(&server)
            .update_app("p1", "a1", "2386231540", &patch)
            .await
            .expect("Request should succeed");
    }

    /// An empty If-Match fails before anything is sent
    #[tokio::test]
    async fn test_empty_if_match_sends_nothing() {
        let server = MockServer::start().await;

        let err = client_for(&server)
            .update_app("p1", "a1", "", &AppPatch::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MissingArgument("if_match")));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    /// Empty path arguments fail before anything is sent
    #[tokio::test]
    async fn test_empty_path_argument_sends_nothing() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let err = client.get_app("", "a1").await.unwrap_err();
        assert!(matches!(err, Error::MissingArgument("project_id")));

        let err = client.delete_secret("p1", "").await.unwrap_err();
        assert!(matches!(err, Error::MissingArgument("name")));

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    /// Required body fields are checked client side
    #[tokio::test]
    async fn test_create_app_requires_image() {
        let server = MockServer::start().await;

        let err = client_for(&server)
            .create_app("p1", &AppPrototype::new("", "my-app"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MissingArgument("image_reference")));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    /// Create sends the prototype without unset fields
    #[tokio::test]
    async fn test_create_app_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/projects/p1/apps"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "image_reference": "icr.io/codeengine/helloworld",
                "name": "my-app"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(app_json("my-app")))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .create_app(
                "p1",
                &AppPrototype::new("icr.io/codeengine/helloworld", "my-app"),
            )
            .await
            .expect("Request should succeed");

        assert_eq!(response.status, 201);
    }

    /// Deletes do not ask for JSON and decode no body
    #[tokio::test]
    async fn test_delete_does_not_request_json() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v2/projects/p1/apps/a1"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .delete_app("p1", "a1")
            .await
            .expect("Request should succeed");

        assert_eq!(response.status, 202);
        let requests = server.received_requests().await.unwrap();
        // The transport may add its own `*/*` default
        let accept = requests[0].headers.get("accept").and_then(|v| v.to_str().ok());
        assert_ne!(accept, Some("application/json"));
    }

    /// Path segments are percent-escaped
    #[tokio::test]
    async fn test_path_segments_escaped() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/projects/p1/config_maps/my%20config"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "entity_tag": "1",
                "name": "my config"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .get_config_map("p1", "my config")
            .await
            .expect("Request should succeed");

        assert_eq!(response.result.name, "my config");
    }

    /// List options and filters become query parameters
    #[tokio::test]
    async fn test_list_job_runs_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/projects/p1/job_runs"))
            .and(query_param("job_name", "nightly"))
            .and(query_param("limit", "5"))
            .and(query_param("start", "abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "job_runs": [],
                "limit": 5
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = ListOptions::new().with_limit(5).with_start("abc");
        let response = client_for(&server)
            .list_job_runs("p1", Some("nightly"), &options)
            .await
            .expect("Request should succeed");

        assert!(response.result.job_runs.is_empty());
    }

    /// Config maps are replaced with PUT
    #[tokio::test]
    async fn test_replace_config_map() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v2/projects/p1/config_maps/settings"))
            .and(header("if-match", "7"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"data": {"MODE": "prod"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "entity_tag": "8",
                "name": "settings",
                "data": {"MODE": "prod"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut data = ConfigMapData::new();
        data.insert("MODE".to_string(), "prod".to_string());
        let response = client_for(&server)
            .replace_config_map("p1", "settings", "7", &ConfigMapReplace { data: Some(data) })
            .await
            .expect("Request should succeed");

        assert_eq!(response.result.entity_tag, "8");
    }

    /// Config map keys keep the order the server sent them in
    #[tokio::test]
    async fn test_config_map_data_order_from_wire() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/projects/p1/config_maps/settings"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"entity_tag":"1","name":"settings","data":{"zeta":"1","mid":"2","alpha":"3"}}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .get_config_map("p1", "settings")
            .await
            .expect("Request should succeed");

        let keys: Vec<&str> = response
            .result
            .data
            .as_ref()
            .map(|data| data.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys, vec!["zeta", "mid", "alpha"]);
    }

    /// Secret data comes back as the shape its format names
    #[tokio::test]
    async fn test_secret_round_trip() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/projects/p1/secrets"))
            .and(body_json(json!({
                "format": "ssh_auth",
                "name": "git",
                "data": {"ssh_key": "KEY"}
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "entity_tag": "1",
                "name": "git",
                "format": "ssh_auth",
                "data": {"ssh_key": "KEY"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let prototype = SecretPrototype::with_data("git", SshSecretData::new("KEY"));
        let secret = client_for(&server)
            .create_secret("p1", &prototype)
            .await
            .expect("Request should succeed")
            .into_result();

        assert_eq!(secret.format, Some(SecretFormat::SshAuth));
        match secret.data {
            Some(SecretData::Ssh(data)) => assert_eq!(data.ssh_key, "KEY"),
            other => panic!("unexpected data: {other:?}"),
        }
    }

    /// Destinations dispatch on their `type`
    #[tokio::test]
    async fn test_create_allowed_outbound_destination() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/projects/p1/allowed_outbound_destinations"))
            .and(body_json(json!({
                "type": "cidr_block",
                "name": "vpc",
                "cidr_block": "10.0.0.0/16"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "type": "cidr_block",
                "name": "vpc",
                "cidr_block": "10.0.0.0/16",
                "entity_tag": "1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .create_allowed_outbound_destination(
                "p1",
                &AllowedOutboundDestinationPrototype::cidr_block("vpc", "10.0.0.0/16"),
            )
            .await
            .expect("Request should succeed");

        let AllowedOutboundDestination::CidrBlock(destination) = response.result;
        assert_eq!(destination.cidr_block, "10.0.0.0/16");
    }
}

mod auth_and_header_tests {
    use super::*;

    /// Bearer authenticator sets the Authorization header
    #[tokio::test]
    async fn test_bearer_token_sent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/projects"))
            .and(bearer_token("test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "limit": 100,
                "projects": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig::new().with_service_url(format!("{}/v2", server.uri()));
        let client = CodeEngineClient::new(
            config,
            BearerTokenAuthenticator::new("test-token").unwrap(),
        )
        .unwrap();

        client
            .list_projects(&ListOptions::new())
            .await
            .expect("Request should succeed");
    }

    /// No-auth sends no Authorization header
    #[tokio::test]
    async fn test_noauth_sends_no_authorization() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/function_runtimes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "function_runtimes": [{"id": "nodejs-20", "family": "nodejs"}]
            })))
            .mount(&server)
            .await;

        client_for(&server)
            .list_function_runtimes()
            .await
            .expect("Request should succeed");

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    /// Configured headers go out; with_headers overrides them per clone
    #[tokio::test]
    async fn test_with_headers_overrides_configured() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/projects/p1/egress_ips"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "private": ["10.0.0.1"],
                "public": ["1.2.3.4"]
            })))
            .mount(&server)
            .await;

        let config = ClientConfig::new()
            .with_service_url(format!("{}/v2", server.uri()))
            .with_header("X-Team", "platform")
            .unwrap();
        let client = CodeEngineClient::new(config, NoAuthAuthenticator).unwrap();

        let mut extra = HeaderMap::new();
        extra.insert(
            HeaderName::from_static("x-team"),
            HeaderValue::from_static("override"),
        );

        client.get_project_egress_ips("p1").await.unwrap();
        client.with_headers(extra).get_project_egress_ips("p1").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].headers.get("x-team").unwrap(), "platform");
        assert_eq!(requests[1].headers.get("x-team").unwrap(), "override");
    }
}

mod error_tests {
    use super::*;

    /// Non-2xx responses surface status and the service's message
    #[tokio::test]
    async fn test_404_maps_to_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/projects/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{"code": "not_found", "message": "Project 'missing' not found"}],
                "status_code": 404,
                "trace": "ce-1234"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).get_project("missing").await.unwrap_err();

        assert!(err.is_not_found());
        match err {
            Error::Api {
                status,
                message,
                body,
                ..
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Project 'missing' not found");
                assert_eq!(body.unwrap()["trace"], "ce-1234");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    /// Stale entity tags come back as 412
    #[tokio::test]
    async fn test_412_precondition_failed() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/v2/projects/p1/jobs/j1"))
            .respond_with(ResponseTemplate::new(412))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .update_job("p1", "j1", "old", &Default::default())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(412));
        assert!(err.to_string().contains("Precondition failed"));
    }

    /// A 2xx body missing required fields fails to decode
    #[tokio::test]
    async fn test_malformed_success_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/projects/p1/apps/a1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "a1"})))
            .mount(&server)
            .await;

        let err = client_for(&server).get_app("p1", "a1").await.unwrap_err();

        match err {
            Error::Deserialize { model, source } => {
                assert_eq!(model, "App");
                assert!(source.to_string().contains("entity_tag"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    /// Connection failures are transport errors
    #[tokio::test]
    async fn test_connection_refused() {
        // Reserve a free port, then release it so nothing listens there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        init_tracing();
        let config = ClientConfig::new().with_service_url(format!("http://127.0.0.1:{port}/v2"));
        let client = CodeEngineClient::new(config, NoAuthAuthenticator).unwrap();

        let err = client.get_project("p1").await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}

//! End-to-end tests for the query pipeline
//!
//! Tests cover:
//! - Message fields to relay reply through the real EMT adapter
//! - Locale selection from the profile store
//! - API error envelopes and transport failures

use std::io::Write;
use std::sync::Arc;

use application::{ApplicationError, HandlerRegistry, LocaleResolver, QueryService};
use domain::{MessageFields, Query};
use infrastructure::{EmtApiAdapter, InMemoryUserProfileStore};
use integration_emt::EmtConfig;
use tempfile::NamedTempFile;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Pipeline {
    service: QueryService,
    profiles: InMemoryUserProfileStore,
    // Keeps the credential file alive for the adapter's lifetime
    _credentials: NamedTempFile,
}

fn pipeline(base_url: &str) -> Pipeline {
    let mut credentials = NamedTempFile::new().unwrap();
    writeln!(credentials, "WEB.SERV.test").unwrap();
    writeln!(credentials, "secret-key").unwrap();

    let config = EmtConfig {
        base_url: base_url.to_string(),
        credentials_path: credentials.path().to_path_buf(),
        ..EmtConfig::for_testing()
    };

    let profiles = InMemoryUserProfileStore::new();
    let service = QueryService::new(
        Arc::new(EmtApiAdapter::from_config(&config).unwrap()),
        LocaleResolver::new(Arc::new(profiles.clone()), "en"),
        HandlerRegistry::new().unwrap(),
    );

    Pipeline {
        service,
        profiles,
        _credentials: credentials,
    }
}

fn fields(pairs: &[(&str, &str)]) -> MessageFields {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

mod query_pipeline_tests {
    use super::*;

    #[tokio::test]
    async fn stop_arrivals_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/geo/GetArriveStop.php"))
            .and(body_string_contains("idStop=71"))
            .and(body_string_contains("cultureInfo=EN"))
            .and(body_string_contains("idClient=WEB.SERV.test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "arrives": {
                    "lineId": "27",
                    "destination": "Pinar",
                    "busTimeLeft": 95,
                    "busDistance": 450
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let pipeline = pipeline(&server.uri());
        let query = Query::from_fields(&fields(&[
            ("tag", "geo-arrive-stop"),
            ("sender", "alice"),
            ("src", "xmpp"),
            ("stop", "71"),
        ]))
        .unwrap();

        let reply = pipeline.service.handle(query).await.unwrap().unwrap();

        assert_eq!(reply.dst, "relay");
        assert_eq!(reply.to, "alice");
        assert_eq!(reply.relayto.as_deref(), Some("xmpp"));
        assert_eq!(
            reply.msg,
            "- 27: Pinar\nTime left: 1 mins 35 sec\nBus distance: 450 m\n\n"
        );
    }

    #[tokio::test]
    async fn spanish_user_gets_spanish_calendar() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bus/GetCalendar.php"))
            .and(body_string_contains("SelectDateBegin=01%2F02%2F2024"))
            .and(body_string_contains("SelectDateEnd=02%2F02%2F2024"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "resultCode": 0,
                "resultDescription": "OK",
                "resultValues": [
                    {"dayOfWeek": "J", "date": "01/02/2024 00:00:00", "dayType": "LA"},
                    {"dayOfWeek": "V", "date": "02/02/2024 00:00:00", "dayType": "V"}
                ]
            })))
            .mount(&server)
            .await;

        let pipeline = pipeline(&server.uri());
        pipeline.profiles.set_locale("bob", "es");
        let query = Query::from_fields(&fields(&[
            ("tag", "bus-calendar"),
            ("sender", "bob"),
            ("sdate", "01-02-2024"),
            ("edate", "02-02-2024"),
        ]))
        .unwrap();

        let reply = pipeline.service.handle(query).await.unwrap().unwrap();

        assert_eq!(
            reply.msg,
            "- Jueves 01/02/2024: Laborable\n- Viernes 02/02/2024: Viernes\n"
        );
    }

    #[tokio::test]
    async fn stop_list_sends_piped_nodes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bus/GetNodesLines.php"))
            .and(body_string_contains("Nodes=71%7C72"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "resultCode": 0,
                "resultValues": [
                    {"node": 71, "name": "SOL", "lines": ["27/1", "5/2"]},
                    {"node": "72", "name": "CIBELES", "lines": "27/1"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let pipeline = pipeline(&server.uri());
        let query = Query::from_fields(&fields(&[
            ("tag", "bus-nodes-lines"),
            ("sender", "alice"),
            ("stops", "71 72"),
        ]))
        .unwrap();

        let reply = pipeline.service.handle(query).await.unwrap().unwrap();

        assert_eq!(reply.msg, "- 71: SOL (27/1 5/2)\n- 72: CIBELES (27/1)\n");
    }

    #[tokio::test]
    async fn api_error_is_reported_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bus/GetRouteLines.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "resultCode": 4,
                "resultDescription": "Line does not exist"
            })))
            .mount(&server)
            .await;

        let pipeline = pipeline(&server.uri());
        let query = Query::from_fields(&fields(&[
            ("tag", "bus-route-lines"),
            ("sender", "alice"),
            ("date", "01/02/2024"),
            ("line", "999"),
        ]))
        .unwrap();

        let reply = pipeline.service.handle(query).await.unwrap().unwrap();

        assert_eq!(reply.msg, "ERROR: Line does not exist");
    }

    #[tokio::test]
    async fn geo_bare_array_is_incorrect_values() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/geo/GetStopsFromStop.php"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;

        let pipeline = pipeline(&server.uri());
        pipeline.profiles.set_locale("bob", "es");
        let query = Query::from_fields(&fields(&[
            ("tag", "geo-stops-from-stop"),
            ("sender", "bob"),
            ("stop", "71"),
            ("radius", "200"),
        ]))
        .unwrap();

        let reply = pipeline.service.handle(query).await.unwrap().unwrap();

        assert_eq!(reply.msg, "Valores incorrectos");
    }

    #[tokio::test]
    async fn no_sender_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let pipeline = pipeline(&server.uri());
        let query =
            Query::from_fields(&fields(&[("tag", "geo-arrive-stop"), ("stop", "71")])).unwrap();

        assert!(pipeline.service.handle(query).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn server_error_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let pipeline = pipeline(&server.uri());
        let query = Query::from_fields(&fields(&[
            ("tag", "geo-arrive-stop"),
            ("sender", "alice"),
            ("stop", "71"),
        ]))
        .unwrap();

        let result = pipeline.service.handle(query).await;

        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }
}

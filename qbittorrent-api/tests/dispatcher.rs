use httpmock::prelude::*;
use qbittorrent_api::types::TorrentListOptions;
use qbittorrent_api::{ClientConfig, Expect, QbitClient, QbitError, Request};

fn client(server: &MockServer) -> QbitClient {
    QbitClient::new(server.base_url()).unwrap()
}

#[test]
fn one_call_is_one_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/app/version");
        then.status(200).body("v4.6.2");
    });

    client(&server).app().version().unwrap();
    mock.assert();
}

#[test]
fn text_body_is_returned_verbatim() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/app/defaultSavePath");
        then.status(200).body("  /home/user/Downloads \n");
    });

    let path = client(&server).app().default_save_path().unwrap();
    assert_eq!(path, "  /home/user/Downloads \n");
}

#[test]
fn non_200_status_carries_body_as_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v2/torrents/createCategory");
        then.status(409).body("Category name is already in use");
    });

    let err = client(&server)
        .torrents()
        .create_category(&qbittorrent_api::types::Category::new("movies", ""))
        .unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.to_string(), "Category name is already in use");
}

#[test]
fn malformed_json_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/sync/maindata");
        then.status(200).body(r#"{"rid":"#);
    });

    let err = client(&server).sync().main_data(0).unwrap_err();
    assert!(matches!(err, QbitError::Decode(_)));
}

#[test]
fn requests_carry_referer() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/app/webapiVersion")
            .header("referer", server.base_url());
        then.status(200).body("2.9.3");
    });

    assert_eq!(client(&server).app().webapi_version().unwrap(), "2.9.3");
    mock.assert();
}

#[test]
fn trailing_slash_in_address_is_ignored() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/app/version");
        then.status(200).body("v5.0.0");
    });

    let client = QbitClient::with_config(ClientConfig::new(format!("{}/", server.base_url())))
        .unwrap();
    assert_eq!(client.app().version().unwrap(), "v5.0.0");
    mock.assert();
}

#[test]
fn debug_echo_leaves_bodies_intact() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/app/version");
        then.status(200).body(" v4.6.2 \n");
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/torrents/info");
        then.status(200).body(r#"[{"hash":"8c21","name":"debian.iso"}]"#);
    });

    let config = ClientConfig::new(server.base_url()).debug(true);
    let client = QbitClient::with_config(config).unwrap();
    assert_eq!(client.app().version().unwrap(), " v4.6.2 \n");
    let torrents = client.torrents().info(&TorrentListOptions::default()).unwrap();
    assert_eq!(torrents.len(), 1);
    assert_eq!(torrents[0].hash, "8c21");
    assert_eq!(torrents[0].name, "debian.iso");
}

#[test]
fn login_cookie_is_sent_on_later_calls() {
    let server = MockServer::start();
    let login = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v2/auth/login")
            .body("username=admin&password=adminadmin");
        then.status(200)
            .header("set-cookie", "SID=abc; path=/")
            .body("Ok.");
    });
    let version = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/app/version")
            .header("cookie", "SID=abc");
        then.status(200).body("v4.6.2");
    });

    let client = client(&server);
    assert_eq!(client.cookie_header(), None);
    assert_eq!(client.auth().login("admin", "adminadmin").unwrap(), "Ok.");
    assert_eq!(client.cookie_header().as_deref(), Some("SID=abc"));
    assert_eq!(client.app().version().unwrap(), "v4.6.2");
    login.assert();
    version.assert();
}

#[test]
fn failed_login_is_not_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v2/auth/login");
        then.status(200).body("Fails.");
    });

    let client = client(&server);
    assert_eq!(client.auth().login("admin", "wrong").unwrap(), "Fails.");
    assert_eq!(client.cookie_header(), None);
}

#[test]
fn banned_login_is_forbidden() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v2/auth/login");
        then.status(403)
            .body("Your IP address has been banned after too many failed authentication attempts.");
    });

    let err = client(&server).auth().login("admin", "x").unwrap_err();
    assert_eq!(err.status(), Some(403));
}

#[test]
fn raw_send_decodes_either_way() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/torrents/tags");
        then.status(200).body(r#"["linux","iso"]"#);
    });

    let client = client(&server);
    let tags: Vec<String> = client
        .send(Request::get("/torrents/tags"), Expect::Json)
        .unwrap()
        .into_json()
        .unwrap();
    assert_eq!(tags, ["linux", "iso"]);

    let raw = client
        .send::<Vec<String>>(Request::get("/torrents/tags"), Expect::Text)
        .unwrap()
        .into_text()
        .unwrap();
    assert_eq!(raw, r#"["linux","iso"]"#);
}

#[test]
fn unreachable_server_is_an_http_error() {
    let client = QbitClient::with_config(
        ClientConfig::new("http://127.0.0.1:9").timeout(std::time::Duration::from_secs(2)),
    )
    .unwrap();
    let err = client.app().version().unwrap_err();
    assert!(matches!(err, QbitError::Http(_)));
}

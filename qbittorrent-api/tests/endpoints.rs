use httpmock::prelude::*;
use qbittorrent_api::types::{
    LogOptions, LogType, Preferences, RssItem, RssRule, SearchOptions, SearchPlugins,
    SearchState, SpeedLimitsMode,
};
use qbittorrent_api::{QbitClient, QbitError};

fn client(server: &MockServer) -> QbitClient {
    QbitClient::new(server.base_url()).unwrap()
}

#[test]
fn log_options_are_sent_as_query() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/log/main")
            .query_param("normal", "true")
            .query_param("info", "true")
            .query_param("warning", "false")
            .query_param("critical", "true")
            .query_param("last_known_id", "-1");
        then.status(200).body(
            r#"[{"id":0,"message":"started","timestamp":1700000000,"type":1},
                {"id":1,"message":"disk full","timestamp":1700000001,"type":8}]"#,
        );
    });

    let options = LogOptions {
        warning: false,
        ..LogOptions::default()
    };
    let entries = client(&server).log().main(&options).unwrap();
    mock.assert();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].kind, LogType::Critical);
}

#[test]
fn set_preferences_sends_only_set_fields() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v2/app/setPreferences")
            .body("json=%7B%22dl_limit%22%3A0%7D");
        then.status(200);
    });

    let prefs = Preferences {
        dl_limit: Some(0),
        ..Preferences::default()
    };
    client(&server).app().set_preferences(&prefs).unwrap();
    mock.assert();
}

#[test]
fn speed_limits_mode_is_parsed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/transfer/speedLimitsMode");
        then.status(200).body("1");
    });

    let mode = client(&server).transfer().speed_limits_mode().unwrap();
    assert_eq!(mode, SpeedLimitsMode::Alternative);
}

#[test]
fn unknown_speed_limits_mode_is_rejected() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/transfer/speedLimitsMode");
        then.status(200).body("maybe");
    });

    let err = client(&server).transfer().speed_limits_mode().unwrap_err();
    assert!(matches!(err, QbitError::UnexpectedResponse(_)));
}

#[test]
fn global_limit_is_a_number() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/transfer/downloadLimit");
        then.status(200).body("1048576");
    });

    assert_eq!(client(&server).transfer().download_limit().unwrap(), 1_048_576);
}

#[test]
fn ban_peers_joins_with_pipe() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v2/transfer/banPeers")
            .body("peers=10.0.0.1%3A6881%7C10.0.0.2%3A51413");
        then.status(200);
    });

    client(&server)
        .transfer()
        .ban_peers(&["10.0.0.1:6881", "10.0.0.2:51413"])
        .unwrap();
    mock.assert();
}

#[test]
fn sync_peers_query() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/sync/torrentPeers")
            .query_param("hash", "8c21")
            .query_param("rid", "3");
        then.status(200).body(
            r#"{"rid":4,"full_update":false,"peers":{"10.0.0.1:6881":{"client":"qBittorrent/4.6.2","progress":1}}}"#,
        );
    });

    let peers = client(&server).sync().torrent_peers("8c21", 3).unwrap();
    mock.assert();
    assert_eq!(peers.rid, 4);
    assert_eq!(peers.peers["10.0.0.1:6881"].client, "qBittorrent/4.6.2");
}

#[test]
fn rss_tree_and_rules() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/rss/items")
            .query_param("withData", "false");
        then.status(200).body(
            r#"{"Linux":{"Debian":{"uid":"{1}","url":"https://example.org/debian.xml"}}}"#,
        );
    });
    let set_rule = server.mock(|when, then| {
        when.method(POST).path("/api/v2/rss/setRule");
        then.status(200);
    });

    let client = client(&server);
    let items = client.rss().items(false).unwrap();
    let RssItem::Folder(linux) = &items["Linux"] else {
        panic!("Linux should be a folder");
    };
    assert_eq!(
        linux["Debian"].as_feed().unwrap().url,
        "https://example.org/debian.xml"
    );

    let rule = RssRule {
        enabled: true,
        must_contain: "netinst".into(),
        ..RssRule::default()
    };
    client.rss().set_rule("debian", &rule).unwrap();
    set_rule.assert();
}

#[test]
fn search_lifecycle() {
    let server = MockServer::start();
    let start = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v2/search/start")
            .body("pattern=debian&plugins=all&category=all");
        then.status(200).body(r#"{"id":12345}"#);
    });
    let status = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/search/status")
            .query_param("id", "12345");
        then.status(200)
            .body(r#"[{"id":12345,"status":"Stopped","total":2}]"#);
    });
    let delete = server.mock(|when, then| {
        when.method(POST).path("/api/v2/search/delete").body("id=12345");
        then.status(200);
    });

    let client = client(&server);
    let options = SearchOptions::new("debian").plugins(SearchPlugins::All);
    let job = client.search().start(&options).unwrap();
    assert_eq!(job.id, 12345);

    let statuses = client.search().status(Some(job.id)).unwrap();
    assert_eq!(statuses[0].status, SearchState::Stopped);
    assert_eq!(statuses[0].total, 2);

    client.search().delete(job.id).unwrap();
    start.assert();
    status.assert();
    delete.assert();
}

#[test]
fn too_many_searches_is_conflict() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v2/search/start");
        then.status(409).body("");
    });

    let err = client(&server)
        .search()
        .start(&SearchOptions::new("x"))
        .unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.to_string(), "");
}

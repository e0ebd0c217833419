#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use eventboard::config::{
    Config, ObservabilityConfig, ServerConfig, SessionConfig, StorageConfig,
};
use http_body_util::BodyExt;
use temp_dir::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub config: Config,
    pub dir: TempDir,
}

pub fn test_config(dir: &TempDir) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        },
        storage: StorageConfig {
            users_path: dir.child("data.json").to_string_lossy().into_owned(),
            events_path: dir.child("events.json").to_string_lossy().into_owned(),
        },
        session: SessionConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_string(),
            issuer: "eventboard".to_string(),
            audience: "eventboard".to_string(),
            expiration_days: 7,
        },
        observability: ObservabilityConfig::default(),
    }
}

pub async fn create_test_app() -> TestApp {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let router = eventboard::create_app(config.clone()).await;

    TestApp {
        router,
        config,
        dir,
    }
}

impl TestApp {
    /// Reopens the data files, as a restarted server would.
    pub async fn restart(self) -> TestApp {
        let router = eventboard::create_app(self.config.clone()).await;

        TestApp { router, ..self }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        self.send(builder.body(Body::from(body.to_owned())).unwrap())
            .await
    }

    pub async fn register(&self, username: &str, password: &str) -> serde_json::Value {
        let response = self
            .post(
                "/register",
                &format!(r#"{{"username":"{username}","password":"{password}"}}"#),
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        json(response).await
    }

    /// Logs in and returns the `name=value` pair of the session cookie.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post(
                "/login",
                &format!(r#"{{"username":"{username}","password":"{password}"}}"#),
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        session_cookie(&response).unwrap()
    }

    pub async fn events(&self) -> Vec<serde_json::Value> {
        let response = self.get("/events", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        serde_json::from_value(json(response).await).unwrap()
    }
}

pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("session_token="))
        .and_then(|value| value.split(';').next())
        .map(str::to_owned)
}

pub async fn text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&text(response).await).unwrap()
}

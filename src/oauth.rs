//! One-shot OAuth helper behind `clickup-mcp get-token`.
//!
//! Runs a loopback HTTP server: `/` redirects the browser to ClickUp's
//! authorize page with a random state, `/callback` checks the state,
//! exchanges the code for an access token and shuts the server down.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Redirect,
    routing::get,
};
use miette::{IntoDiagnostic, miette};
use rand::Rng;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::sync::Notify;

use crate::config::DEFAULT_BASE_URL;

const AUTHORIZE_URL: &str = "https://app.clickup.com/api";

struct Flow {
    client_id: String,
    client_secret: String,
    authorize_url: String,
    expected_state: String,
    http: reqwest::Client,
    token: std::sync::Mutex<Option<String>>,
    done: Notify,
}

#[derive(Deserialize)]
struct CallbackParams {
    code: Option<String>,
    state: Option<String>,
}

pub async fn get_token(client_id: String, client_secret: String, port: u16) -> miette::Result<()> {
    let expected_state = format!("{:032x}", rand::rng().random::<u128>());
    let redirect_uri = format!("http://localhost:{port}/callback");
    let authorize_url = reqwest::Url::parse_with_params(
        AUTHORIZE_URL,
        [
            ("client_id", client_id.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
            ("state", expected_state.as_str()),
        ],
    )
    .into_diagnostic()?
    .to_string();

    let flow = Arc::new(Flow {
        client_id,
        client_secret,
        authorize_url,
        expected_state,
        http: reqwest::Client::new(),
        token: std::sync::Mutex::new(None),
        done: Notify::new(),
    });

    let app = Router::new()
        .route("/", get(index))
        .route("/callback", get(callback))
        .with_state(Arc::clone(&flow));

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .into_diagnostic()?;
    println!("Open http://localhost:{port}/ in your browser to authorize the app.");

    let shutdown = Arc::clone(&flow);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.done.notified().await })
        .await
        .into_diagnostic()?;

    let token = flow
        .token
        .lock()
        .map_err(|_| miette!("token state poisoned"))?
        .take()
        .ok_or_else(|| miette!("authorization did not complete"))?;
    println!("Access token: {token}");
    println!("Export it with: export CLICKUP_API_TOKEN={token}");
    Ok(())
}

async fn index(State(flow): State<Arc<Flow>>) -> Redirect {
    Redirect::temporary(&flow.authorize_url)
}

async fn callback(State(flow): State<Arc<Flow>>, Query(params): Query<CallbackParams>) -> String {
    if params.state.as_deref() != Some(flow.expected_state.as_str()) {
        flow.done.notify_one();
        return "State mismatch; authorization aborted.".to_string();
    }
    let Some(code) = params.code else {
        flow.done.notify_one();
        return "Missing authorization code.".to_string();
    };

    let message = match exchange(&flow, &code).await {
        Ok(token) => {
            if let Ok(mut slot) = flow.token.lock() {
                *slot = Some(token);
            }
            "Authorized. You can close this window and return to the terminal.".to_string()
        }
        Err(e) => format!("Token exchange failed: {e}"),
    };
    flow.done.notify_one();
    message
}

async fn exchange(flow: &Flow, code: &str) -> Result<String, String> {
    let response = flow
        .http
        .post(format!("{DEFAULT_BASE_URL}/v2/oauth/token"))
        .json(&json!({
            "client_id": flow.client_id,
            "client_secret": flow.client_secret,
            "code": code,
        }))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let status = response.status();
    let body: Value = response.json().await.map_err(|e| e.to_string())?;
    if !status.is_success() {
        return Err(format!("HTTP {status}: {body}"));
    }
    body.get("access_token")
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| format!("no access_token in response: {body}"))
}

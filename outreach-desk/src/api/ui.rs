//! UI Routes - HTML page and client script for the outreach desk
//!
//! Single-page web UI (vanilla ES6+, no frameworks) driving the JSON API.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::AppState;

// Embed the client script at compile time
const APP_JS: &str = include_str!("../../static/app.js");

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_page))
        .route("/static/app.js", get(serve_app_js))
}

/// GET /static/app.js
async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "application/javascript"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        APP_JS,
    )
        .into_response()
}

/// Root page - Outreach Desk Home
async fn root_page() -> impl IntoResponse {
    Html(concat!(
        r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Outreach Desk</title>
    <style>
        body {
            font-family: system-ui, -apple-system, sans-serif;
            max-width: 960px;
            margin: 40px auto;
            padding: 20px;
            line-height: 1.6;
        }
        h1 {
            color: #333;
            border-bottom: 2px solid #0066cc;
            padding-bottom: 10px;
        }
        section {
            margin: 24px 0;
            padding: 16px;
            border: 1px solid #ddd;
            border-radius: 6px;
        }
        textarea {
            width: 100%;
            font-family: ui-monospace, monospace;
            font-size: 13px;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            font-size: 14px;
        }
        th, td {
            border: 1px solid #ccc;
            padding: 4px 8px;
            text-align: left;
        }
        .button {
            display: inline-block;
            padding: 8px 16px;
            background: #0066cc;
            color: white;
            border: none;
            border-radius: 4px;
            cursor: pointer;
            margin: 6px 4px 6px 0;
        }
        .button:hover { background: #0052a3; }
        .status { color: #555; font-size: 14px; }
    </style>
</head>
<body>
    <h1>Outreach Desk</h1>
    <p>Load customer workbooks, rank customers, draft outreach letters, and
    record follow-ups. <a href="/api/guide-template">Download the guide template</a>.</p>

    <section>
        <h2>1. Load customer data</h2>
        <p>One workbook path per line (first sheet of each is read, in order):</p>
        <textarea id="workbookPaths" rows="3" placeholder="/data/customers-2026.xlsx"></textarea>
        <br>
        <button id="btnLoad" class="button">Load workbooks</button>
        <span id="loadStatus" class="status"></span>
    </section>

    <section>
        <h2>2. Analyze &amp; prioritize</h2>
        <button id="btnAnalyze" class="button">Analyze</button>
        <span id="analyzeStatus" class="status"></span>
        <textarea id="analysisSummary" rows="12" readonly></textarea>
        <table id="priorityTable">
            <thead>
                <tr><th></th><th>#</th><th>Name</th><th>Org</th><th>Field</th>
                <th>Interest</th><th>Budget</th><th>Score</th></tr>
            </thead>
            <tbody id="priorityBody"></tbody>
        </table>
    </section>

    <section>
        <h2>3. Draft outreach letter</h2>
        <label>Segment label: <input id="segmentLabel" type="text" size="40"></label>
        <br>
        <button id="btnLetter" class="button">Generate letter</button>
        <span id="letterStatus" class="status"></span>
        <textarea id="letterDraft" rows="18" readonly></textarea>
    </section>

    <section>
        <h2>4. Record follow-up</h2>
        <label>Customer: <input id="followupCustomer" type="text"></label>
        <label>Reaction: <input id="followupReaction" type="text"></label>
        <label>Next date: <input id="followupNextDate" type="date"></label>
        <br>
        <label>Memo: <input id="followupMemo" type="text" size="60"></label>
        <br>
        <button id="btnSaveFollowup" class="button">Save follow-up</button>
        <button id="btnClearFollowup" class="button">Clear form</button>
        <span id="followupStatus" class="status"></span>
        <table id="followupTable">
            <thead>
                <tr><th>When</th><th>Customer</th><th>Reaction</th><th>Next date</th><th>Memo</th></tr>
            </thead>
            <tbody id="followupBody"></tbody>
        </table>
    </section>

    <p><small>outreach-desk v"#,
        env!("CARGO_PKG_VERSION"),
        r#"</small></p>
    <script src="/static/app.js"></script>
</body>
</html>
"#,
    ))
}

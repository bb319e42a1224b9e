use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use mockito::{Matcher, Server};
use tokio::sync::{mpsc, oneshot};

use prospect_console::api::models::{CompanyEntry, Report, SearchResponse};
use prospect_console::dashboard::Dashboard;
use prospect_console::present::report_text::ReportBlock;
use prospect_console::state::{Completion, LaneStatus};
use prospect_console::transform::catalog::COMPANY_FINANCIAL_OPPORTUNITIES;
use prospect_console::utils::error::{ApiError, UNREACHABLE_MESSAGE};
use prospect_console::{ClientConfig, HttpApiClient, OpportunityApi, SearchKind};

type SearchGate = oneshot::Receiver<Result<SearchResponse, ApiError>>;
type ReportGate = oneshot::Receiver<Result<Report, ApiError>>;

/// Fake backend whose calls resolve only when the test releases their gate.
struct GatedApi {
    search_gates: Mutex<VecDeque<SearchGate>>,
    report_gates: Mutex<VecDeque<ReportGate>>,
    started: mpsc::UnboundedSender<String>,
}

impl GatedApi {
    fn new(
        search_gates: Vec<SearchGate>,
        report_gates: Vec<ReportGate>,
    ) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (started, started_rx) = mpsc::unbounded_channel();
        (
            Self {
                search_gates: Mutex::new(search_gates.into()),
                report_gates: Mutex::new(report_gates.into()),
                started,
            },
            started_rx,
        )
    }
}

#[async_trait]
impl OpportunityApi for GatedApi {
    async fn search(&self, query: &str, kind: SearchKind) -> Result<SearchResponse, ApiError> {
        let gate = self.search_gates.lock().unwrap().pop_front().expect("unexpected search call");
        self.started.send(format!("{}:{}", kind, query)).unwrap();
        gate.await.expect("search gate dropped")
    }

    async fn generate_report(&self, person_name: &str, company_name: &str) -> Result<Report, ApiError> {
        let gate = self.report_gates.lock().unwrap().pop_front().expect("unexpected report call");
        self.started.send(format!("report:{}:{}", person_name, company_name)).unwrap();
        gate.await.expect("report gate dropped")
    }
}

fn companies(names: &[&str]) -> SearchResponse {
    SearchResponse {
        companies: Some(
            names
                .iter()
                .map(|n| CompanyEntry {
                    name: Some(n.to_string()),
                    ..Default::default()
                })
                .collect(),
        ),
        ..Default::default()
    }
}

fn report(text: &str) -> Report {
    serde_json::from_value(serde_json::json!({
        "llm_response": text,
        "report_generated": "2024-01-01T00:00:00Z",
        "data_sources": ["SEC"]
    }))
    .unwrap()
}

#[tokio::test]
async fn acme_company_search_over_http() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/opportunities/search")
        .match_body(Matcher::Json(serde_json::json!({"query": "Acme", "search_type": "company"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"companies":[{"name":"Acme Corp","ticker":"ACM"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = HttpApiClient::new(ClientConfig::with_base_url(server.url())).unwrap();
    let dash = Dashboard::new(client);
    dash.set_query(SearchKind::Company, "Acme").await;
    assert_eq!(dash.submit_search(SearchKind::Company).await, Ok(Completion::Applied));
    mock.assert_async().await;

    let state = dash.snapshot().await;
    let results = state.company.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Acme Corp");
    assert_eq!(results[0].title, "Company");
    assert_eq!(results[0].financial_opportunities.len(), 3);
    assert_eq!(results[0].financial_opportunities, COMPANY_FINANCIAL_OPPORTUNITIES.to_vec());
    assert_eq!(results[0].ceo_name.as_deref(), Some("Unknown"));
    assert_eq!(results[0].ticker.as_deref(), Some("ACM"));
}

#[tokio::test]
async fn report_splits_bullets_and_paragraphs_over_http() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/opportunities/generate-report")
        .match_body(Matcher::Json(serde_json::json!({
            "person_name": "Jane Doe",
            "company_name": "Acme Corp"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"llm_response":"• Point one\nSecond paragraph","report_generated":"2024-01-01T00:00:00Z","data_sources":["SEC"]}"#,
        )
        .create_async()
        .await;

    let client = HttpApiClient::new(ClientConfig::with_base_url(server.url())).unwrap();
    let dash = Dashboard::new(client);
    dash.request_report("Jane Doe", "Acme Corp").await.unwrap();

    let state = dash.snapshot().await;
    assert_eq!(
        state.report.blocks(),
        vec![
            ReportBlock::Bullet("• Point one".to_string()),
            ReportBlock::Paragraph("Second paragraph".to_string()),
        ]
    );
    assert_eq!(state.report.report().unwrap().data_sources, vec!["SEC".to_string()]);
}

#[tokio::test]
async fn unreachable_backend_reports_fixed_message() {
    let client = HttpApiClient::new(ClientConfig::with_base_url("http://127.0.0.1:9")).unwrap();
    let dash = Dashboard::new(client);
    dash.set_query(SearchKind::Person, "Tim Cook").await;
    dash.submit_search(SearchKind::Person).await.unwrap();

    let state = dash.snapshot().await;
    assert_eq!(state.person.status(), LaneStatus::Failure);
    assert_eq!(state.person.error(), Some(UNREACHABLE_MESSAGE));
}

#[tokio::test]
async fn logically_later_search_wins_over_later_arrival() {
    let (tx_first, rx_first) = oneshot::channel();
    let (tx_second, rx_second) = oneshot::channel();
    let (api, mut started) = GatedApi::new(vec![rx_first, rx_second], vec![]);
    let dash = Dashboard::new(api);

    dash.set_query(SearchKind::Company, "Acme").await;
    let first = dash.submit_search(SearchKind::Company);
    let driver = async {
        assert_eq!(started.recv().await.as_deref(), Some("company:Acme"));
        dash.set_query(SearchKind::Company, "Acme Corp").await;
        tx_second.send(Ok(companies(&["Newer Inc"]))).unwrap();
        let second = dash.submit_search(SearchKind::Company).await;
        // Slow first response arrives only after the second has been applied
        tx_first.send(Ok(companies(&["Older Inc"]))).unwrap();
        second
    };

    let (first, second) = tokio::join!(first, driver);
    assert_eq!(second, Ok(Completion::Applied));
    assert_eq!(first, Ok(Completion::Stale));

    let state = dash.snapshot().await;
    assert_eq!(state.company.status(), LaneStatus::Success);
    assert_eq!(state.company.results().len(), 1);
    assert_eq!(state.company.results()[0].name, "Newer Inc");
}

#[tokio::test]
async fn lanes_progress_independently() {
    let (tx_company, rx_company) = oneshot::channel();
    let (tx_person, rx_person) = oneshot::channel();
    let (tx_report, rx_report) = oneshot::channel();
    let (api, mut started) = GatedApi::new(vec![rx_company, rx_person], vec![rx_report]);
    let dash = Dashboard::new(api);

    dash.set_query(SearchKind::Company, "Globex").await;
    dash.set_query(SearchKind::Person, "Hank Scorpio").await;

    let company = dash.submit_search(SearchKind::Company);
    let rest = async {
        assert_eq!(started.recv().await.as_deref(), Some("company:Globex"));

        // Person lane fails while the company lane is still loading
        tx_person
            .send(Err(ApiError::Server {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                message: "Search failed: person index offline".into(),
            }))
            .unwrap();
        dash.submit_search(SearchKind::Person).await.unwrap();
        let mid = dash.snapshot().await;
        assert_eq!(mid.company.status(), LaneStatus::Loading);
        assert_eq!(mid.person.error(), Some("Search failed: person index offline"));

        tx_report.send(Ok(report("Hello"))).unwrap();
        dash.request_report("Hank Scorpio", "Globex").await.unwrap();

        tx_company.send(Ok(companies(&["Globex Corporation"]))).unwrap();
    };
    let (company, ()) = tokio::join!(company, rest);
    assert_eq!(company, Ok(Completion::Applied));

    let state = dash.snapshot().await;
    assert_eq!(state.company.results()[0].name, "Globex Corporation");
    assert!(state.company.error().is_none());
    assert_eq!(state.person.status(), LaneStatus::Failure);
    assert_eq!(state.report.status(), LaneStatus::Success);
}

#[tokio::test]
async fn report_button_disabled_while_loading() {
    let (tx, rx) = oneshot::channel();
    let (api, mut started) = GatedApi::new(vec![], vec![rx]);
    let dash = Dashboard::new(api);

    let first = dash.request_report("Jane Doe", "Acme Corp");
    let driver = async {
        started.recv().await;
        let state = dash.snapshot().await;
        assert!(!state.report.is_submit_enabled());
        assert!(state.report.report().is_none());
        let again = dash.request_report("Jane Doe", "Acme Corp").await;
        tx.send(Ok(report("• Done"))).unwrap();
        again
    };
    let (first, again) = tokio::join!(first, driver);
    assert!(again.is_err());
    assert_eq!(first, Ok(Completion::Applied));

    dash.close_report().await;
    let state = dash.snapshot().await;
    assert!(!state.report.is_open());
    assert!(state.report.report().is_none());
}

//! External payment process: state transitions, repeat and cancellation.

mod common;

use common::{MockTransport, Reply, client};
use money_api_client::{
    ApiClient, Process, ProcessState,
    error::Error,
    methods::{
        payment_params::PhoneParams, request_external_payment::RequestExternalPaymentRequest,
    },
    model::{CardType, MoneySource, Status},
    net::DefaultHostsProvider,
    process::ExternalPaymentProcess,
};

const CONTRACT: &str =
    r#"{"status": "success", "request_id": "req-1", "contract_amount": "100.00"}"#;
const AUTH_REQUIRED: &str = r#"{"status": "ext_auth_required",
    "acs_uri": "https://bank.example.com/3ds", "acs_params": {"cps_context_id": "ctx"}}"#;
const PENDING: &str = r#"{"status": "in_progress", "next_retry": 5000}"#;
const PAID: &str = r#"{"status": "success", "invoice_id": "inv-1",
    "money_source": {"type": "VISA", "id": "card-1", "pan_fragment": "4444****1111"}}"#;

fn payment() -> RequestExternalPaymentRequest {
    let phone = PhoneParams::new("79001234567", "100.00".parse().unwrap()).unwrap();
    RequestExternalPaymentRequest::from_payment_params("instance-1", &phone).unwrap()
}

fn process(
    client: &ApiClient<MockTransport>,
) -> ExternalPaymentProcess<'_, MockTransport, DefaultHostsProvider> {
    ExternalPaymentProcess::new(
        client,
        payment(),
        "https://shop.example.com/ok",
        "https://shop.example.com/fail",
    )
    .unwrap()
}

#[tokio::test]
async fn test_full_payment_flow() {
    let client = client(MockTransport::with_bodies([CONTRACT, AUTH_REQUIRED, PENDING, PAID]));
    let mut process = process(&client);
    assert_eq!(process.state(), ProcessState::NotStarted);

    assert!(!process.proceed().await.unwrap());
    assert_eq!(process.state(), ProcessState::InProgress);
    assert_eq!(process.request_payment().unwrap().request_id.as_deref(), Some("req-1"));

    assert!(!process.proceed().await.unwrap());
    assert_eq!(process.state(), ProcessState::InProgress);
    assert_eq!(process.acs_uri(), Some("https://bank.example.com/3ds"));

    assert!(!process.proceed().await.unwrap());
    assert_eq!(process.next_retry(), Some(5000));

    assert!(process.proceed().await.unwrap());
    assert_eq!(process.state(), ProcessState::Completed);
    let paid = process.process_payment().unwrap();
    assert_eq!(paid.invoice_id.as_deref(), Some("inv-1"));
    match &paid.money_source {
        Some(MoneySource::Card(card)) => assert_eq!(card.card_type, CardType::Visa),
        other => panic!("expected a saved card, got {other:?}"),
    }

    let sent = client.transport().requests();
    assert_eq!(sent.len(), 4);
    assert!(sent[0].url.as_str().ends_with("/request-external-payment"));
    assert_eq!(sent[0].params.get("pattern_id"), Some("phone-topup"));
    assert!(sent[1].url.as_str().ends_with("/process-external-payment"));
    assert_eq!(sent[1].params.get("request_id"), Some("req-1"));
    assert_eq!(sent[1].params.get("instance_id"), Some("instance-1"));
    assert_eq!(sent[1].params.get("ext_auth_fail_uri"), Some("https://shop.example.com/fail"));
}

#[tokio::test]
async fn test_refused_contract_fails_process() {
    let refused = r#"{"status": "refused", "error": "payee_not_found"}"#;
    let client = client(MockTransport::with_bodies([refused]));
    let mut process = process(&client);

    assert!(!process.proceed().await.unwrap());
    assert_eq!(process.state(), ProcessState::Failed);
    assert_eq!(process.request_payment().unwrap().status, Status::Refused);

    assert!(matches!(process.proceed().await, Err(Error::InvalidState(_))));
    assert!(matches!(process.repeat().await, Err(Error::InvalidState(_))));
    assert_eq!(client.transport().request_count(), 1);
}

#[tokio::test]
async fn test_proceed_after_completion_is_invalid() {
    let client = client(MockTransport::with_bodies([CONTRACT, PAID]));
    let mut process = process(&client);
    process.proceed().await.unwrap();
    process.proceed().await.unwrap();

    assert!(matches!(process.proceed().await, Err(Error::InvalidState(_))));
    assert_eq!(process.state(), ProcessState::Completed);
    assert_eq!(client.transport().request_count(), 2);
}

#[tokio::test]
async fn test_repeat_before_any_step_is_invalid() {
    let client = client(MockTransport::default());
    let mut process = process(&client);

    assert!(matches!(process.repeat().await, Err(Error::InvalidState(_))));
    assert_eq!(process.state(), ProcessState::NotStarted);
    assert_eq!(client.transport().request_count(), 0);
}

#[tokio::test]
async fn test_repeat_resends_same_step() {
    let client = client(MockTransport::with_bodies([CONTRACT, PENDING, PENDING]));
    let mut process = process(&client).with_money_source("tok", "123");
    process.proceed().await.unwrap();
    process.proceed().await.unwrap();

    assert!(!process.repeat().await.unwrap());
    assert_eq!(process.state(), ProcessState::InProgress);

    let sent = client.transport().requests();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[1], sent[2]);
    assert_eq!(sent[2].params.get("money_source_token"), Some("tok"));
    assert_eq!(sent[2].params.get("csc"), Some("123"));
}

#[tokio::test]
async fn test_transport_error_leaves_state_unchanged() {
    let client =
        client(MockTransport::new([Reply::Body(CONTRACT.to_owned()), Reply::Status(502)]));
    let mut process = process(&client);
    process.proceed().await.unwrap();

    assert!(matches!(process.proceed().await, Err(Error::UnexpectedStatus(502))));
    assert_eq!(process.state(), ProcessState::InProgress);
    assert!(process.process_payment().is_none());
}

#[tokio::test]
async fn test_repeat_after_failed_execution_retries_execution() {
    let client = client(MockTransport::new([
        Reply::Body(CONTRACT.to_owned()),
        Reply::Status(502),
        Reply::Body(PAID.to_owned()),
    ]));
    let mut process = process(&client);
    process.proceed().await.unwrap();
    assert!(matches!(process.proceed().await, Err(Error::UnexpectedStatus(502))));

    assert!(process.repeat().await.unwrap());
    assert_eq!(process.state(), ProcessState::Completed);

    let sent = client.transport().requests();
    assert_eq!(sent.len(), 3);
    assert!(sent[2].url.as_str().ends_with("/process-external-payment"));
    assert_eq!(sent[1], sent[2]);
}

#[tokio::test]
async fn test_repeat_after_failed_contract_retries_contract() {
    let client =
        client(MockTransport::new([Reply::Status(503), Reply::Body(CONTRACT.to_owned())]));
    let mut process = process(&client);
    assert!(matches!(process.proceed().await, Err(Error::UnexpectedStatus(503))));
    assert_eq!(process.state(), ProcessState::NotStarted);

    assert!(!process.repeat().await.unwrap());
    assert_eq!(process.state(), ProcessState::InProgress);

    let sent = client.transport().requests();
    assert_eq!(sent.len(), 2);
    assert!(sent[1].url.as_str().ends_with("/request-external-payment"));
}

#[tokio::test]
async fn test_contract_without_request_id_is_decode_error() {
    let client = client(MockTransport::with_bodies([r#"{"status": "success"}"#]));
    let mut process = process(&client);

    assert!(matches!(process.proceed().await, Err(Error::Decode(_))));
    assert_eq!(process.state(), ProcessState::NotStarted);
}

#[tokio::test]
async fn test_cancelled_step_has_no_effect() {
    let client = client(MockTransport::new([Reply::Pending]));
    let mut process = process(&client);

    let (step, handle) = process.proceed_cancellable();
    let (result, ()) = tokio::join!(step, async {
        tokio::task::yield_now().await;
        handle.cancel();
    });

    assert!(matches!(result, Err(Error::Cancelled)));
    assert_eq!(process.state(), ProcessState::NotStarted);
    assert!(process.request_payment().is_none());
    assert_eq!(client.transport().request_count(), 1);
}

#[tokio::test]
async fn test_cancel_after_completion_is_noop() {
    let client = client(MockTransport::with_bodies([CONTRACT]));
    let mut process = process(&client);

    let (step, handle) = process.proceed_cancellable();
    let finished = step.await.unwrap();
    handle.cancel();

    assert!(!finished);
    assert!(handle.is_cancelled());
    assert_eq!(process.state(), ProcessState::InProgress);
}

#[tokio::test]
async fn test_cancelled_repeat_keeps_previous_response() {
    let client = client(MockTransport::new([Reply::Body(CONTRACT.to_owned()), Reply::Pending]));
    let mut process = process(&client);
    process.proceed().await.unwrap();

    let (step, handle) = process.repeat_cancellable();
    handle.cancel();
    assert!(matches!(step.await, Err(Error::Cancelled)));
    assert_eq!(process.request_payment().unwrap().request_id.as_deref(), Some("req-1"));
    assert_eq!(process.state(), ProcessState::InProgress);
}

use receiptgen_runtime::{HostContextAdapter, HostPlatform, SubmissionController};
use receiptgen_testing::{MockGenerationService, RecordingHost};
use receiptgen_types::{
    HostIdentity, ReceiptRequest, SubmissionPhase, SubmissionResult, TemplateType, UserId,
};
use std::sync::Arc;
use std::time::Duration;

fn snapshot() -> ReceiptRequest {
    ReceiptRequest {
        template_type: TemplateType::Receive,
        merchant_name: "DEFT BARBER".to_string(),
        receiver_id: "0857•••5875".to_string(),
        amount: "40000".to_string(),
        date: "16 Okt 2026".to_string(),
        time: "15:55".to_string(),
    }
}

fn identity() -> HostIdentity {
    HostIdentity {
        user_id: Some(UserId::Numeric(279058397)),
        theme_background: None,
    }
}

#[tokio::test]
async fn second_submit_while_submitting_is_ignored() {
    let service = MockGenerationService::success(5).held().into_arc();
    let controller = Arc::new(SubmissionController::new(service.clone(), None));

    let first = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit(&snapshot(), &identity()).await }
    });

    service.wait_started().await;
    assert_eq!(controller.phase(), SubmissionPhase::Submitting);

    let second = controller.submit(&snapshot(), &identity()).await;
    assert_eq!(second, None);
    assert_eq!(service.call_count(), 1);

    service.release();
    let first = first.await.unwrap();
    assert_eq!(first, Some(SubmissionResult::Success { quota: Some(5) }));
    assert_eq!(controller.phase(), SubmissionPhase::Idle);

    // Idle again: the next submission goes out
    service.release();
    let third = controller.submit(&snapshot(), &identity()).await;
    assert!(third.is_some());
    assert_eq!(service.call_count(), 2);
}

#[tokio::test]
async fn dropping_an_in_flight_submit_returns_to_idle() {
    let service = MockGenerationService::success(5).held().into_arc();
    let controller = Arc::new(SubmissionController::new(service.clone(), None));

    let in_flight = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit(&snapshot(), &identity()).await }
    });
    service.wait_started().await;
    assert_eq!(controller.phase(), SubmissionPhase::Submitting);

    in_flight.abort();
    assert!(in_flight.await.unwrap_err().is_cancelled());
    assert_eq!(controller.phase(), SubmissionPhase::Idle);
}

#[tokio::test]
async fn invalid_submission_during_idle_does_not_block_the_next_one() {
    let service = MockGenerationService::success(3).into_arc();
    let controller = SubmissionController::new(service.clone(), None);

    let mut empty = snapshot();
    empty.amount.clear();
    let rejected = controller.submit(&empty, &identity()).await.unwrap();
    assert_eq!(rejected.kind(), "invalid");

    let accepted = controller.submit(&snapshot(), &identity()).await.unwrap();
    assert!(accepted.is_success());
    assert_eq!(service.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn success_schedules_close_after_two_seconds() {
    let service = MockGenerationService::success(5).into_arc();
    let host = Arc::new(RecordingHost::new().with_user(UserId::Numeric(279058397)));
    let controller = SubmissionController::new(service, Some(host.clone()));

    let result = controller.submit(&snapshot(), &identity()).await;
    assert_eq!(result, Some(SubmissionResult::Success { quota: Some(5) }));

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert_eq!(host.close_calls(), 0);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(host.close_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn failures_never_close_the_host() {
    let host = Arc::new(RecordingHost::new());

    for service in [
        MockGenerationService::failure("Kuota habis", Some(0)),
        MockGenerationService::transport_error("connection refused"),
    ] {
        let controller = SubmissionController::new(service.into_arc(), Some(host.clone()));
        let result = controller.submit(&snapshot(), &identity()).await.unwrap();
        assert!(!result.is_success());
    }

    tokio::time::sleep(Duration::from_millis(10_000)).await;
    assert_eq!(host.close_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_pending_close() {
    let service = MockGenerationService::success(5).into_arc();
    let host = Arc::new(RecordingHost::new());
    let controller = SubmissionController::new(service, Some(host.clone()));

    controller.submit(&snapshot(), &identity()).await;
    tokio::time::sleep(Duration::from_millis(500)).await;
    controller.shutdown();

    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert_eq!(host.close_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_controller_cancels_pending_close() {
    let service = MockGenerationService::success(5).into_arc();
    let host = Arc::new(RecordingHost::new());
    let controller = SubmissionController::new(service, Some(host.clone()));

    controller.submit(&snapshot(), &identity()).await;
    drop(controller);

    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert_eq!(host.close_calls(), 0);
}

#[test]
fn host_identity_drives_the_request_user() {
    let host = Arc::new(
        RecordingHost::new()
            .with_user(UserId::Numeric(11))
            .with_theme("#212121"),
    );
    let adapter = HostContextAdapter::new(Some(host.clone() as Arc<dyn HostPlatform>));

    let identity = adapter.resolve(Some("https://mini.app/?user_id=99"));

    assert_eq!(identity.user_id, Some(UserId::Numeric(11)));
    assert_eq!(identity.theme_background.as_deref(), Some("#212121"));
    assert_eq!(host.ready_calls(), 1);
    assert_eq!(host.expand_calls(), 1);
    assert_eq!(host.close_calls(), 0);
}

#[tokio::test]
async fn request_carries_resolved_identity() {
    let service = MockGenerationService::success(1).into_arc();
    let controller = SubmissionController::new(service.clone(), None);
    let identity = HostContextAdapter::new(None).resolve(Some("user_id=abc123"));

    controller.submit(&snapshot(), &identity).await;

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].user_id, UserId::Text("abc123".to_string()));
    assert_eq!(requests[0].chat_id, UserId::Text("abc123".to_string()));
    assert_eq!(requests[0].receipt, snapshot());
}

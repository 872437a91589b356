use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use sluice_core::domain::{Phase, Stage};
use sluice_core::impls::{ChannelProgressSink, NoopProgressSink};
use sluice_core::{AppBuilder, BatchSpec, RequestHandler, TaskSpec};
use tokio::time::Instant;

fn scenario() -> BatchSpec {
    BatchSpec::new(vec![
        TaskSpec::new("A", 1200, 800),
        TaskSpec::new("B", 800, 400),
        TaskSpec::new("C", 2000, 1500),
        TaskSpec::new("D", 1500, 0).failing(),
        TaskSpec::new("E", 1000, 1200),
    ])
}

#[tokio::test(start_paused = true)]
async fn mixed_batch_returns_200_with_ordered_results() {
    let handler = AppBuilder::new()
        .batch(scenario())
        .progress_sink(Arc::new(NoopProgressSink))
        .build()
        .unwrap();

    let started = Instant::now();
    let env = handler.handle(&json!({})).await;
    let elapsed = started.elapsed();

    assert_eq!(env.status_code, 200);
    assert_eq!(env.headers["Content-Type"], "application/json");
    assert_eq!(
        env.body_json().unwrap(),
        json!({
            "results": [
                { "name": "A", "status": "success" },
                { "name": "B", "status": "success" },
                { "name": "C", "status": "success" },
                { "name": "D", "status": "failed", "error": "Network Failed (404 Not Found)" },
                { "name": "E", "status": "success" }
            ]
        })
    );

    // C is the longest task at 3500ms; the sum of all tasks is 10400ms
    assert!(elapsed >= Duration::from_millis(3500));
    assert!(elapsed < Duration::from_millis(4000));
}

#[tokio::test(start_paused = true)]
async fn repeated_invocations_agree_on_statuses() {
    let handler = AppBuilder::new()
        .batch(scenario())
        .progress_sink(Arc::new(NoopProgressSink))
        .build()
        .unwrap();

    let first = handler.handle(&json!({})).await;
    for _ in 0..3 {
        let again = handler.handle(&json!({})).await;
        assert_eq!(again.status_code, first.status_code);
        assert_eq!(again.body_json().unwrap(), first.body_json().unwrap());
    }
}

#[tokio::test(start_paused = true)]
async fn progress_events_cover_every_task() {
    let (sink, mut rx) = ChannelProgressSink::new();
    let handler = AppBuilder::new()
        .batch(scenario())
        .progress_sink(Arc::new(sink))
        .build()
        .unwrap();

    handler.handle(&json!({})).await;

    let mut per_task: HashMap<String, Vec<(Stage, Phase)>> = HashMap::new();
    let mut batch_ids = Vec::new();
    while let Ok(event) = rx.try_recv() {
        batch_ids.push(event.batch_id);
        per_task
            .entry(event.task)
            .or_default()
            .push((event.stage, event.phase));
    }

    assert_eq!(per_task.len(), 5);
    assert!(batch_ids.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(
        per_task["D"],
        vec![(Stage::Acquire, Phase::Started), (Stage::Acquire, Phase::Failed)]
    );
    assert_eq!(
        per_task["A"],
        vec![
            (Stage::Acquire, Phase::Started),
            (Stage::Acquire, Phase::Completed),
            (Stage::Transform, Phase::Started),
            (Stage::Transform, Phase::Completed),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn batch_loaded_from_json_runs_the_same() {
    let json = r#"
    {
      "tasks": [
        { "name": "A", "acquire_ms": 1200, "transform_ms": 800 },
        { "name": "D", "acquire_ms": 1500, "transform_ms": 0, "force_failure": true }
      ]
    }"#;
    let handler = AppBuilder::new()
        .batch(BatchSpec::from_json_str(json).unwrap())
        .progress_sink(Arc::new(NoopProgressSink))
        .build()
        .unwrap();

    let body = handler.handle(&json!({})).await.body_json().unwrap();
    assert_eq!(body["results"][0]["status"], "success");
    assert_eq!(body["results"][1]["status"], "failed");
}

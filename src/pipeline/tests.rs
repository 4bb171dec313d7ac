#![cfg(test)]

use super::*;
use crate::option::Optional;
use crate::util::counter::CallCounter;
use crate::util::panic::assert_panics;

fn format_bool(value: bool) -> String {
    value.to_string()
}

#[tokio::test]
async fn test_single_stage() {
    let counter = CallCounter::new();
    let mut pipeline = Pipeline::new(counter.wrap(|x: i32| x != 0));

    pipeline.send(Optional::present(1)).await.expect("pipeline should be open");
    assert_eq!(pipeline.recv().await, Some(Optional::present(true)));
    assert_eq!(counter.count(), 1);

    pipeline.send(Optional::absent()).await.expect("pipeline should be open");
    assert_eq!(pipeline.recv().await, Some(Optional::absent()));
    assert_eq!(counter.count(), 1, "An absent item shouldn't invoke the transformation.");

    pipeline.send(Optional::present(0)).await.expect("pipeline should be open");
    assert_eq!(pipeline.recv().await, Some(Optional::present(false)));
}

#[tokio::test]
async fn test_chained_stages() {
    let mut pipeline = Pipeline::new(|x: i32| x != 0).then(format_bool);

    pipeline.send(Optional::present(1)).await.expect("pipeline should be open");
    assert_eq!(pipeline.recv().await, Some(Optional::present(String::from("true"))));

    pipeline.send(Optional::absent()).await.expect("pipeline should be open");
    assert_eq!(pipeline.recv().await, Some(Optional::absent()));

    assert!(pipeline.drain().await.expect("stages should finish cleanly").is_empty());
}

#[tokio::test]
async fn test_order_preserved() {
    let pipeline = Pipeline::with_cap(128, |x: u32| x * 3).then(|x: u32| x + 1);
    assert_eq!(pipeline.cap(), 128, "Attached stages should keep the pipeline's capacity.");
    let inputs: Vec<_> = (0..100_u32)
        .map(|i| {
            if i % 7 == 0 {
                Optional::absent()
            } else {
                Optional::present(i)
            }
        })
        .collect();

    for item in inputs.iter().copied() {
        pipeline.send(item).await.expect("pipeline should be open");
    }

    let outputs = pipeline.drain().await.expect("stages should finish cleanly");
    let expected: Vec<_> = inputs.into_iter().map(|o| o.map(|x| x * 3 + 1)).collect();
    assert_eq!(outputs, expected, "Outputs should match inputs one for one, in order.");
}

#[tokio::test]
async fn test_back_pressure() {
    let (sink, mut source) = Pipeline::with_cap(1, |x: usize| x).split();

    let producer = tokio::spawn(async move {
        for i in 0..50 {
            sink.send(Optional::present(i)).await.expect("pipeline should be open");
        }
    });

    for i in 0..50 {
        assert_eq!(source.recv().await, Some(Optional::present(i)));
    }

    producer.await.expect("producer should finish");
    assert_eq!(source.recv().await, None, "Dropping the sink should close the output.");
}

#[tokio::test]
async fn test_close_and_drain() {
    let mut pipeline = Pipeline::new(|x: i32| x * 2);

    for i in 1..=3 {
        pipeline.send(Optional::present(i)).await.expect("pipeline should be open");
    }
    pipeline.close();

    assert!(
        matches!(pipeline.send(Optional::present(4)).await, Err(PipelineError::Closed(_))),
        "Sending after close should fail."
    );

    assert_eq!(pipeline.recv().await, Some(Optional::present(2)));
    assert_eq!(
        pipeline.drain().await.expect("stages should finish cleanly"),
        [Optional::present(4), Optional::present(6)],
        "Items sent before closing should still come out."
    );
}

#[tokio::test]
async fn test_output_closes_after_input() {
    let mut pipeline = Pipeline::new(|x: i32| x).then(|x: i32| x);

    pipeline.send(Optional::present(1)).await.expect("pipeline should be open");
    pipeline.close();

    assert_eq!(pipeline.recv().await, Some(Optional::present(1)));
    assert_eq!(pipeline.recv().await, None);
    assert_eq!(pipeline.recv().await, None);
}

#[tokio::test]
async fn test_stage_panic() {
    let pipeline = Pipeline::new(|x: i32| {
        if x < 0 {
            panic!("negative input");
        }
        x
    });

    for i in [1, 2, -1] {
        pipeline.send(Optional::present(i)).await.expect("pipeline should be open");
    }

    let error = pipeline.drain().await.expect_err("the stage should have panicked");
    assert!(matches!(error.error, PipelineError::StageFailed(_)));
    assert_eq!(
        error.recovered,
        [Optional::present(1), Optional::present(2)],
        "Outputs produced before the panic should still be returned."
    );
}

#[test]
fn test_blocking() {
    let runtime = tokio::runtime::Runtime::new().expect("runtime should start");
    let mut pipeline = {
        let _guard = runtime.enter();
        Pipeline::new(|x: i32| x + 1).then(|x: i32| x.to_string())
    };

    pipeline.send_blocking(Optional::present(1)).expect("pipeline should be open");
    pipeline.send_blocking(Optional::absent()).expect("pipeline should be open");
    pipeline.close();

    assert_eq!(pipeline.recv_blocking(), Some(Optional::present(String::from("2"))));
    assert_eq!(pipeline.recv_blocking(), Some(Optional::absent()));
    assert_eq!(pipeline.recv_blocking(), None);
}

#[test]
fn test_zero_cap() {
    assert_panics!({ Pipeline::<i32, i32>::with_cap(0, |x| x) });
}

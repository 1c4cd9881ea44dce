use super::*;

#[tokio::test(start_paused = true)]
async fn completes_before_deadline() {
    let result = with_deadline(Duration::from_secs(10), async { 42 }).await;
    assert_eq!(result, Ok(42));
}

#[tokio::test(start_paused = true)]
async fn slow_future_completes_inside_deadline() {
    let result = with_deadline(Duration::from_secs(10), async {
        tokio::time::sleep(Duration::from_secs(9)).await;
        "done"
    })
    .await;
    assert_eq!(result, Ok("done"));
}

#[tokio::test(start_paused = true)]
async fn pending_future_times_out() {
    let result = with_deadline(Duration::from_secs(10), std::future::pending::<()>()).await;
    assert_eq!(result, Err(DeadlineElapsed(Duration::from_secs(10))));
}

#[tokio::test(start_paused = true)]
async fn timed_out_future_is_dropped() {
    struct DropFlag(std::sync::Arc<std::sync::atomic::AtomicBool>);
    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.store(true, std::sync::atomic::Ordering::SeqCst);
        }
    }

    let dropped = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
    let flag = DropFlag(dropped.clone());
    let result = with_deadline(Duration::from_secs(1), async move {
        let _flag = flag;
        std::future::pending::<()>().await;
    })
    .await;

    assert!(result.is_err());
    assert!(dropped.load(std::sync::atomic::Ordering::SeqCst));
}

#[test]
fn elapsed_message_names_the_limit() {
    assert_eq!(DeadlineElapsed(Duration::from_secs(10)).to_string(), "deadline of 10000ms elapsed");
}

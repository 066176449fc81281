#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use time::{Duration, PrimitiveDateTime, macros::datetime};
use todo_service::services::Clock;
use tokio::net::TcpListener;

pub const START: PrimitiveDateTime = datetime!(2026-02-20 14:00:00);

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("todo_service=debug")
            .with_test_writer()
            .init();
    });
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct MockClock {
    now: Mutex<PrimitiveDateTime>,
}

impl MockClock {
    pub fn new(start: PrimitiveDateTime) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Moves the clock forward by `by`
    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }

    pub fn current(&self) -> PrimitiveDateTime {
        *self.now.lock().unwrap()
    }
}

impl Clock for MockClock {
    fn now(&self) -> PrimitiveDateTime {
        self.current()
    }
}

/// Spawns the application and returns its address and controllable clock.
///
/// Returned address format: `http://127.0.0.1:8492/api/v1`
pub async fn spawn_app() -> (String, Arc<MockClock>) {
    init_tracing_once();

    let clock = Arc::new(MockClock::new(START));
    let clock_cloned: Arc<dyn Clock> = Arc::clone(&clock) as Arc<dyn Clock>;

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let app = todo_service::app_with_clock(clock_cloned);
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}/api/v1");
    (address, clock)
}

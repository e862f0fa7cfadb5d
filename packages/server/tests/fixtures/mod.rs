//! Test server fixture.
//!
//! Runs the real router on a dedicated thread with its own runtime, bound to
//! a fixed local port, and stops it when dropped.

use std::sync::{Arc, mpsc};

use relay_server::{
    domain::DEFAULT_HISTORY_WINDOW,
    ui::{serve, state::AppState},
};
use tokio::{net::TcpListener, sync::oneshot};

pub struct TestServer {
    port: u16,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn start(port: u16) -> Self {
        Self::start_with_window(port, DEFAULT_HISTORY_WINDOW)
    }

    pub fn start_with_window(port: u16, history_window: usize) -> Self {
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (ready_tx, ready_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
                .expect("Failed to build test runtime");
            runtime.block_on(async move {
                let listener = TcpListener::bind(("127.0.0.1", port))
                    .await
                    .expect("Failed to bind test port");
                ready_tx.send(()).expect("Failed to signal readiness");

                let state = Arc::new(AppState::in_memory(history_window));
                serve(listener, state, async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("Test server failed");
            });
        });

        ready_rx.recv().expect("Test server failed to start");

        Self {
            port,
            shutdown: Some(shutdown_tx),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

#![allow(dead_code)]

use mockingbird_core::bundle::MANIFEST_FILE;
use mockingbird_core::{InterceptError, ProtocolClient, Request, ResponseHead};
use std::fs;
use std::path::Path;
use std::sync::Once;
use tempfile::TempDir;
use url::Url;

static INIT: Once = Once::new();

/// Route `tracing` output through the test harness.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Write a bundle directory holding `manifest` and the given body files.
pub fn write_bundle(manifest: &str, files: &[(&str, &[u8])]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(MANIFEST_FILE), manifest).unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

pub fn get(url: &str) -> Request {
    Request::get(Url::parse(url).unwrap())
}

pub fn path_str(path: &Path) -> String {
    path.display().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Response(ResponseHead),
    Data(Vec<u8>),
    Finished,
    Failed(InterceptError),
}

/// Host client that records every callback in order.
#[derive(Debug, Default)]
pub struct RecordingClient {
    pub events: Vec<Event>,
}

impl RecordingClient {
    pub fn head(&self) -> Option<&ResponseHead> {
        self.events.iter().find_map(|event| match event {
            Event::Response(head) => Some(head),
            _ => None,
        })
    }

    pub fn body(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Data(data) => Some(data.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    pub fn failure(&self) -> Option<&InterceptError> {
        self.events.iter().find_map(|event| match event {
            Event::Failed(error) => Some(error),
            _ => None,
        })
    }

    /// Number of terminal callbacks received.
    pub fn terminal_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::Finished | Event::Failed(_)))
            .count()
    }
}

impl ProtocolClient for RecordingClient {
    fn did_receive_response(&mut self, response: ResponseHead) {
        self.events.push(Event::Response(response));
    }

    fn did_load_data(&mut self, data: &[u8]) {
        self.events.push(Event::Data(data.to_vec()));
    }

    fn did_finish_loading(&mut self) {
        self.events.push(Event::Finished);
    }

    fn did_fail(&mut self, error: InterceptError) {
        self.events.push(Event::Failed(error));
    }
}

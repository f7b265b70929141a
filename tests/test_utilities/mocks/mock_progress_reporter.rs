use sbom_verify::prelude::*;
use std::sync::{Arc, Mutex};

/// One `report_progress` call: files finished, total files, last finished file name
pub type ProgressStep = (usize, usize, Option<String>);

/// ProgressReporter that keeps warnings, progress steps and plain messages apart
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
    warnings: Arc<Mutex<Vec<String>>>,
    steps: Arc<Mutex<Vec<ProgressStep>>>,
    completion: Arc<Mutex<Option<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn steps(&self) -> Vec<ProgressStep> {
        self.steps.lock().unwrap().clone()
    }

    pub fn completion(&self) -> Option<String> {
        self.completion.lock().unwrap().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.steps
            .lock()
            .unwrap()
            .push((current, total, message.map(str::to_string)));
    }

    fn report_error(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        *self.completion.lock().unwrap() = Some(message.to_string());
    }
}

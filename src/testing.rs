//! Test doubles shared by unit and integration tests.

use std::sync::{Arc, Mutex};

use crate::{
    config::Thresholds,
    context::Context,
    lang::LangCode,
    statistical::{CandidateSet, StatisticalDetector},
};

/// Statistical detector that answers with a fixed code and records every call.
#[derive(Default)]
pub struct RecordingDetector {
    answer: Option<LangCode>,
    calls: Mutex<Vec<(CandidateSet, String)>>,
}

impl RecordingDetector {
    pub fn answering(answer: Option<&str>) -> Self {
        Self {
            answer: answer.and_then(LangCode::parse),
            calls: Mutex::default(),
        }
    }

    pub fn calls(&self) -> Vec<(CandidateSet, String)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

impl StatisticalDetector for RecordingDetector {
    fn classify(&self, sample: &str, candidates: CandidateSet) -> Option<LangCode> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((candidates, sample.to_string()));
        }
        self.answer
    }
}

/// Default thresholds with a [`RecordingDetector`]; the detector handle is
/// returned for call inspection.
pub fn recording_context(answer: Option<&str>) -> (Context, Arc<RecordingDetector>) {
    let detector = Arc::new(RecordingDetector::answering(answer));
    let ctx = Context::new(Thresholds::default(), detector.clone());
    (ctx, detector)
}

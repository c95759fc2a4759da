//! Mock analyzer and imager for orchestrator tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use storyboard_core::{AnalysisRequest, AnalysisResult, ImagePayload, ImageRequest};
use storyboard_error::{
    AnalysisError, AnalysisErrorKind, ImageError, ImageErrorKind, StoryboardResult,
};
use storyboard_interface::{Analyzer, Imager};

/// Called with the zero-based call number before the mock answers.
pub type CallHook = Arc<dyn Fn(usize) + Send + Sync>;

/// Behavior configuration for mock imager responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return an image
    Success,
    /// Always fail with the given error
    Error(ImageErrorKind),
    /// Return a sequence of responses, one per call
    Sequence(Vec<MockResponse>),
}

/// A single mock imager response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return an image
    Success,
    /// Fail with the given error
    Error(ImageErrorKind),
}

/// Mock analyzer returning a fixed result or a fixed failure.
pub struct MockAnalyzer {
    response: Result<AnalysisResult, AnalysisErrorKind>,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<AnalysisRequest>>>,
    hook: Option<CallHook>,
}

impl MockAnalyzer {
    /// Always succeed with `result`.
    pub fn new_success(result: AnalysisResult) -> Self {
        Self {
            response: Ok(result),
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            hook: None,
        }
    }

    /// Always fail with `error`.
    pub fn new_error(error: AnalysisErrorKind) -> Self {
        Self {
            response: Err(error),
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            hook: None,
        }
    }

    /// Run `hook` before answering.
    #[allow(dead_code)]
    pub fn with_hook(mut self, hook: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.hook = Some(Arc::new(hook));
        self
    }

    /// Number of times analyze() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Every request received, in order.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<AnalysisRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Analyzer for MockAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest) -> StoryboardResult<AnalysisResult> {
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        let call = {
            let mut count = self.call_count.lock().unwrap();
            *count += 1;
            *count - 1
        };
        self.requests.lock().unwrap().push(request.clone());
        if let Some(hook) = &self.hook {
            hook(call);
        }
        match &self.response {
            Ok(result) => Ok(result.clone()),
            Err(kind) => Err(AnalysisError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-analyzer"
    }
}

/// Mock imager with scripted responses, a call counter and an optional hook.
pub struct MockImager {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<ImageRequest>>>,
    hook: Option<CallHook>,
}

impl MockImager {
    /// Always return an image.
    pub fn new_success() -> Self {
        Self::new_with_behavior(MockBehavior::Success)
    }

    /// Always fail.
    #[allow(dead_code)]
    pub fn new_error(error: ImageErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Answer call N with `responses[N]`; calls past the end fail.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Create a mock imager with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            hook: None,
        }
    }

    /// Run `hook` at the start of every call.
    #[allow(dead_code)]
    pub fn with_hook(mut self, hook: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.hook = Some(Arc::new(hook));
        self
    }

    /// Number of times render() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Every request received, in order.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<ImageRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_response(&self, call: usize) -> StoryboardResult<ImagePayload> {
        let response = match &self.behavior {
            MockBehavior::Success => MockResponse::Success,
            MockBehavior::Error(kind) => MockResponse::Error(kind.clone()),
            MockBehavior::Sequence(responses) => match responses.get(call) {
                Some(response) => response.clone(),
                None => MockResponse::Error(ImageErrorKind::Request(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    call + 1,
                    responses.len()
                ))),
            },
        };
        match response {
            MockResponse::Success => Ok(frame(call)),
            MockResponse::Error(kind) => Err(ImageError::new(kind).into()),
        }
    }
}

/// The image the mock returns for call number `call`.
pub fn frame(call: usize) -> ImagePayload {
    ImagePayload::from_bytes("image/png", format!("frame-{call}").as_bytes())
        .expect("valid mock image")
}

#[async_trait]
impl Imager for MockImager {
    async fn render(&self, request: &ImageRequest) -> StoryboardResult<ImagePayload> {
        let call = {
            let mut count = self.call_count.lock().unwrap();
            let current = *count;
            *count += 1;
            current
        };
        self.requests.lock().unwrap().push(request.clone());
        if let Some(hook) = &self.hook {
            hook(call);
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        self.next_response(call)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-imager"
    }
}

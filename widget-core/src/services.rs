//! Capabilities the conversation waits on, and their simulated stand-ins.
//!
//! The state machine only relies on each call eventually resolving. The
//! simulated services sleep on an injected [`Timer`] and never fail.

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use shared_types::VideoId;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::conversation::PendingQuestion;
use crate::picker::{ResponsePicker, UniformPicker};

pub const SIMULATED_ANALYSIS_DELAY: Duration = Duration::from_millis(3000);
pub const SIMULATED_ANSWER_DELAY: Duration = Duration::from_millis(1500);

pub const RESPONSE_POOL: [&str; 4] = [
    "Based on the video content, here's what I can tell you...",
    "That's an interesting question about the video. From what I analyzed...",
    "The video discusses this topic in detail. Let me explain...",
    "Great question! The video covers this aspect around the middle section...",
];

pub const DEMO_DISCLAIMER: &str = " This is a simulated response for demonstration purposes.";

/// Runtime-specific sleep. gloo timers in the browser, tokio in tests.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

pub type SharedTimer = Rc<dyn Timer>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoAnalysis {
    pub video_id: VideoId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
}

#[async_trait(?Send)]
pub trait VideoAnalysisService {
    async fn analyze(&self, video_id: &VideoId) -> VideoAnalysis;
}

#[async_trait(?Send)]
pub trait QuestionAnsweringService {
    async fn answer(&self, question: &PendingQuestion) -> Answer;
}

pub struct SimulatedVideoAnalysis {
    timer: SharedTimer,
    delay: Duration,
}

impl SimulatedVideoAnalysis {
    pub fn new(timer: SharedTimer) -> Self {
        Self::with_delay(timer, SIMULATED_ANALYSIS_DELAY)
    }

    pub fn with_delay(timer: SharedTimer, delay: Duration) -> Self {
        Self { timer, delay }
    }
}

#[async_trait(?Send)]
impl VideoAnalysisService for SimulatedVideoAnalysis {
    async fn analyze(&self, video_id: &VideoId) -> VideoAnalysis {
        self.timer.sleep(self.delay).await;
        VideoAnalysis {
            video_id: video_id.clone(),
        }
    }
}

pub struct SimulatedQuestionAnswering {
    timer: SharedTimer,
    delay: Duration,
    picker: RefCell<Box<dyn ResponsePicker>>,
}

impl SimulatedQuestionAnswering {
    pub fn new(timer: SharedTimer) -> Self {
        Self::with_picker(timer, Box::new(UniformPicker))
    }

    pub fn with_picker(timer: SharedTimer, picker: Box<dyn ResponsePicker>) -> Self {
        Self {
            timer,
            delay: SIMULATED_ANSWER_DELAY,
            picker: RefCell::new(picker),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn canned_reply(&self) -> String {
        let index = self.picker.borrow_mut().pick(RESPONSE_POOL.len());
        let base = RESPONSE_POOL.get(index).copied().unwrap_or(RESPONSE_POOL[0]);
        format!("{base}{DEMO_DISCLAIMER}")
    }
}

#[async_trait(?Send)]
impl QuestionAnsweringService for SimulatedQuestionAnswering {
    async fn answer(&self, question: &PendingQuestion) -> Answer {
        self.timer.sleep(self.delay).await;
        tracing::debug!(video_id = %question.video_id, "simulated answer ready");
        Answer {
            text: self.canned_reply(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::SequencePicker;
    use futures::FutureExt;
    use tokio::time::Instant;

    struct TokioTimer;

    impl Timer for TokioTimer {
        fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
            tokio::time::sleep(duration).boxed_local()
        }
    }

    fn assert_elapsed(started: Instant, expected_ms: u64) {
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(expected_ms));
        assert!(elapsed < Duration::from_millis(expected_ms + 5));
    }

    fn question() -> PendingQuestion {
        PendingQuestion {
            video_id: VideoId("dQw4w9WgXcQ".to_string()),
            question: "What is this about?".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn analysis_takes_three_seconds() {
        let service = SimulatedVideoAnalysis::new(Rc::new(TokioTimer));
        let started = Instant::now();
        let analysis = service.analyze(&VideoId("dQw4w9WgXcQ".into())).await;
        assert_elapsed(started, 3000);
        assert_eq!(analysis.video_id.as_str(), "dQw4w9WgXcQ");
    }

    #[tokio::test(start_paused = true)]
    async fn answers_come_from_pool_with_disclaimer() {
        let service = SimulatedQuestionAnswering::with_picker(
            Rc::new(TokioTimer),
            Box::new(SequencePicker::new([2, 0])),
        );
        let started = Instant::now();
        let first = service.answer(&question()).await;
        assert_elapsed(started, 1500);
        assert_eq!(
            first.text,
            "The video discusses this topic in detail. Let me explain... This is a simulated \
             response for demonstration purposes."
        );

        let second = service.answer(&question()).await;
        assert!(second.text.starts_with(RESPONSE_POOL[0]));
        assert!(second.text.ends_with(DEMO_DISCLAIMER));
    }

    #[tokio::test(start_paused = true)]
    async fn default_picker_stays_in_pool() {
        let service = SimulatedQuestionAnswering::new(Rc::new(TokioTimer))
            .with_delay(Duration::from_millis(1));
        for _ in 0..20 {
            let answer = service.answer(&question()).await;
            let base = answer.text.strip_suffix(DEMO_DISCLAIMER).unwrap();
            assert!(RESPONSE_POOL.contains(&base));
        }
    }
}

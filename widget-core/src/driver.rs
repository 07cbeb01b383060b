//! Couples the conversation state machine to its async capabilities.
//!
//! Submissions mutate state synchronously and hand back a completion future
//! for the caller to spawn on its event loop. Completions re-check the
//! driver's liveness flag before touching state, so a widget torn down
//! mid-delay is never written to.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use shared_types::ConversationPhase;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::conversation::Conversation;
use crate::error::WidgetError;
use crate::services::{
    QuestionAnsweringService, SharedTimer, SimulatedQuestionAnswering, SimulatedVideoAnalysis,
    VideoAnalysisService,
};

pub type Completion = LocalBoxFuture<'static, ()>;

/// Shared, single-threaded access to the conversation state.
pub trait ConversationHandle: Clone + 'static {
    fn read<R>(&self, f: impl FnOnce(&Conversation) -> R) -> R;
    fn update<R>(&self, f: impl FnOnce(&mut Conversation) -> R) -> R;
}

impl ConversationHandle for Rc<RefCell<Conversation>> {
    fn read<R>(&self, f: impl FnOnce(&Conversation) -> R) -> R {
        f(&self.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut Conversation) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

pub struct ConversationDriver<H> {
    handle: H,
    analysis: Rc<dyn VideoAnalysisService>,
    answers: Rc<dyn QuestionAnsweringService>,
    alive: Rc<Cell<bool>>,
}

impl<H: ConversationHandle> ConversationDriver<H> {
    pub fn new(
        handle: H,
        analysis: Rc<dyn VideoAnalysisService>,
        answers: Rc<dyn QuestionAnsweringService>,
    ) -> Self {
        Self {
            handle,
            analysis,
            answers,
            alive: Rc::new(Cell::new(true)),
        }
    }

    /// Driver backed by the timer-based fakes.
    pub fn simulated(handle: H, timer: SharedTimer) -> Self {
        Self::new(
            handle,
            Rc::new(SimulatedVideoAnalysis::new(timer.clone())),
            Rc::new(SimulatedQuestionAnswering::new(timer)),
        )
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Stop applying completions. Outstanding futures resolve as no-ops.
    pub fn shutdown(&self) {
        self.alive.set(false);
    }

    /// Errors synchronously on an unparseable reference. `Ok(None)` means the
    /// submission was ignored because the phase is past input.
    pub fn submit_video_reference(&self, raw: &str) -> Result<Option<Completion>, WidgetError> {
        let Some(video_id) = self.handle.update(|c| c.begin_analysis(raw))? else {
            return Ok(None);
        };

        let handle = self.handle.clone();
        let analysis = self.analysis.clone();
        let alive = self.alive.clone();
        Ok(Some(
            async move {
                let result = analysis.analyze(&video_id).await;
                if !alive.get() {
                    tracing::warn!(%video_id, "analysis finished after widget shutdown");
                    return;
                }
                handle.update(|c| c.complete_analysis(result));
            }
            .boxed_local(),
        ))
    }

    /// `None` when the question was blank or the phase is not chat.
    pub fn submit_question(&self, text: &str) -> Option<Completion> {
        let pending = self.handle.update(|c| c.begin_question(text))?;

        let handle = self.handle.clone();
        let answers = self.answers.clone();
        let alive = self.alive.clone();
        Some(
            async move {
                let answer = answers.answer(&pending).await;
                if !alive.get() {
                    tracing::warn!("answer finished after widget shutdown");
                    return;
                }
                handle.update(|c| c.complete_answer(answer));
            }
            .boxed_local(),
        )
    }

    /// Route a keyboard submission by phase.
    pub fn submit(&self, text: &str) -> Result<Option<Completion>, WidgetError> {
        match self.handle.read(Conversation::phase) {
            ConversationPhase::Input => self.submit_video_reference(text),
            ConversationPhase::Processing | ConversationPhase::Chat => {
                Ok(self.submit_question(text))
            }
        }
    }
}

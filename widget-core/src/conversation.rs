//! Phase state machine and message log, independent of any async runtime.
//!
//! Each user operation is split into a synchronous `begin_*` step, applied
//! when the user submits, and a `complete_*` step applied when the matching
//! capability call resolves. The driver wires the two together.

use chrono::{DateTime, Utc};
use shared_types::{ChatMessage, ConversationPhase, Sender, VideoId};

use crate::error::WidgetError;
use crate::services::{Answer, VideoAnalysis};
use crate::video_ref::extract_video_id;

pub fn seed_message(video_id: &VideoId) -> String {
    format!(
        "Great! I've analyzed the YouTube video (ID: {video_id}). I'm now ready to answer any \
         questions you have about this video's content, themes, or details. What would you like \
         to know?"
    )
}

/// A question accepted in chat phase whose answer is still outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuestion {
    pub video_id: VideoId,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conversation {
    phase: ConversationPhase,
    video_id: Option<VideoId>,
    messages: Vec<ChatMessage>,
    pending_answers: usize,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ConversationPhase {
        self.phase
    }

    pub fn video_id(&self) -> Option<&VideoId> {
        self.video_id.as_ref()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while at least one answer is outstanding.
    pub fn is_typing(&self) -> bool {
        self.pending_answers > 0
    }

    pub fn pending_answers(&self) -> usize {
        self.pending_answers
    }

    /// Validate `raw` and move to processing.
    ///
    /// Returns `Ok(None)` outside the input phase. An unparseable reference
    /// leaves the phase and log untouched.
    pub fn begin_analysis(&mut self, raw: &str) -> Result<Option<VideoId>, WidgetError> {
        if self.phase != ConversationPhase::Input {
            tracing::warn!(phase = ?self.phase, "video reference ignored outside input phase");
            return Ok(None);
        }
        let video_id = extract_video_id(raw).ok_or_else(|| WidgetError::InvalidVideoReference {
            input: raw.to_string(),
        })?;

        tracing::debug!(%video_id, "video analysis started");
        self.phase = ConversationPhase::Processing;
        self.video_id = Some(video_id.clone());
        Ok(Some(video_id))
    }

    /// Enter chat and seed the log. Only the first completion while processing counts.
    pub fn complete_analysis(&mut self, analysis: VideoAnalysis) -> bool {
        self.complete_analysis_at(analysis, Utc::now())
    }

    pub fn complete_analysis_at(&mut self, analysis: VideoAnalysis, now: DateTime<Utc>) -> bool {
        if self.phase != ConversationPhase::Processing {
            tracing::warn!(phase = ?self.phase, "stale analysis result dropped");
            return false;
        }
        self.phase = ConversationPhase::Chat;
        self.push_message(Sender::Assistant, seed_message(&analysis.video_id), now);
        tracing::debug!(video_id = %analysis.video_id, "conversation ready");
        true
    }

    /// Append the user's question and raise the typing indicator.
    ///
    /// Returns `None` outside chat phase or when `text` is blank.
    pub fn begin_question(&mut self, text: &str) -> Option<PendingQuestion> {
        self.begin_question_at(text, Utc::now())
    }

    pub fn begin_question_at(&mut self, text: &str, now: DateTime<Utc>) -> Option<PendingQuestion> {
        if self.phase != ConversationPhase::Chat {
            tracing::warn!(phase = ?self.phase, "question ignored outside chat phase");
            return None;
        }
        if text.trim().is_empty() {
            return None;
        }
        let video_id = self.video_id.clone()?;

        self.push_message(Sender::User, text, now);
        self.pending_answers += 1;
        Some(PendingQuestion {
            video_id,
            question: text.to_string(),
        })
    }

    pub fn complete_answer(&mut self, answer: Answer) {
        self.complete_answer_at(answer, Utc::now());
    }

    pub fn complete_answer_at(&mut self, answer: Answer, now: DateTime<Utc>) {
        self.push_message(Sender::Assistant, answer.text, now);
        self.pending_answers = self.pending_answers.saturating_sub(1);
    }

    fn push_message(&mut self, sender: Sender, content: impl Into<String>, now: DateTime<Utc>) {
        let timestamp = match self.messages.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        };
        self.messages
            .push(ChatMessage::new(sender, content, timestamp));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn vid() -> VideoId {
        VideoId("dQw4w9WgXcQ".to_string())
    }

    fn chatting() -> Conversation {
        let mut conversation = Conversation::new();
        conversation.begin_analysis("dQw4w9WgXcQ").unwrap();
        conversation.complete_analysis(VideoAnalysis { video_id: vid() });
        conversation
    }

    #[test]
    fn valid_reference_enters_processing_immediately() {
        let mut conversation = Conversation::new();
        let id = conversation.begin_analysis("dQw4w9WgXcQ").unwrap();
        assert_eq!(id, Some(vid()));
        assert_eq!(conversation.phase(), ConversationPhase::Processing);
        assert!(conversation.messages().is_empty());
    }

    #[test]
    fn invalid_reference_changes_nothing() {
        let mut conversation = Conversation::new();
        let err = conversation.begin_analysis("not a valid id").unwrap_err();
        assert_eq!(
            err,
            WidgetError::InvalidVideoReference {
                input: "not a valid id".to_string()
            }
        );
        assert_eq!(conversation.phase(), ConversationPhase::Input);
        assert!(conversation.messages().is_empty());
        assert!(conversation.video_id().is_none());
    }

    #[test]
    fn reference_ignored_after_input_phase() {
        let mut conversation = chatting();
        assert_eq!(conversation.begin_analysis("aaaaaaaaaaa"), Ok(None));
        assert_eq!(conversation.video_id(), Some(&vid()));
        assert_eq!(conversation.phase(), ConversationPhase::Chat);
    }

    #[test]
    fn analysis_seeds_exactly_one_message() {
        let conversation = chatting();
        assert_eq!(conversation.phase(), ConversationPhase::Chat);
        assert_eq!(conversation.messages().len(), 1);
        let seed = &conversation.messages()[0];
        assert_eq!(seed.sender, Sender::Assistant);
        assert!(seed.content.contains("(ID: dQw4w9WgXcQ)"));
    }

    #[test]
    fn duplicate_analysis_result_is_dropped() {
        let mut conversation = chatting();
        assert!(!conversation.complete_analysis(VideoAnalysis { video_id: vid() }));
        assert_eq!(conversation.messages().len(), 1);
    }

    #[test]
    fn blank_questions_are_ignored() {
        let mut conversation = chatting();
        assert!(conversation.begin_question("").is_none());
        assert!(conversation.begin_question("   \t\n").is_none());
        assert_eq!(conversation.messages().len(), 1);
        assert!(!conversation.is_typing());
    }

    #[test]
    fn questions_ignored_before_chat() {
        let mut conversation = Conversation::new();
        assert!(conversation.begin_question("hello?").is_none());
        conversation.begin_analysis("dQw4w9WgXcQ").unwrap();
        assert!(conversation.begin_question("hello?").is_none());
        assert!(conversation.messages().is_empty());
    }

    #[test]
    fn question_appends_user_message_and_types() {
        let mut conversation = chatting();
        let pending = conversation.begin_question("What is this about?").unwrap();
        assert_eq!(pending.question, "What is this about?");
        assert_eq!(pending.video_id, vid());
        assert_eq!(conversation.messages().len(), 2);
        assert_eq!(conversation.messages()[1].sender, Sender::User);
        assert!(conversation.is_typing());

        conversation.complete_answer(Answer {
            text: "Here you go.".to_string(),
        });
        assert_eq!(conversation.messages().len(), 3);
        assert_eq!(conversation.messages()[2].sender, Sender::Assistant);
        assert!(!conversation.is_typing());
    }

    #[test]
    fn typing_stays_on_until_last_answer() {
        let mut conversation = chatting();
        conversation.begin_question("one").unwrap();
        conversation.begin_question("two").unwrap();
        conversation.complete_answer(Answer { text: "a".into() });
        assert!(conversation.is_typing());
        conversation.complete_answer(Answer { text: "b".into() });
        assert!(!conversation.is_typing());
    }

    #[test]
    fn timestamps_never_go_backwards() {
        let mut conversation = chatting();
        let later = Utc::now() + Duration::seconds(30);
        conversation.begin_question_at("first", later).unwrap();
        conversation.complete_answer_at(
            Answer {
                text: "answer".into(),
            },
            later - Duration::seconds(10),
        );

        let stamps: Vec<_> = conversation.messages().iter().map(|m| m.timestamp).collect();
        assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(stamps[2], later);
    }
}

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// One single-choice step of the quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub key: &'static str,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Question(usize),
    Summary,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("'{label}' is not an option for {key}")]
    UnknownOption { key: &'static str, label: String },
    #[error("quiz is already complete")]
    AlreadyComplete,
    #[error("already at the first question")]
    AtFirstQuestion,
}

/// Answers keyed by question, kept in the order the questions were declared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizAnswers {
    entries: Vec<(&'static str, &'static str)>,
}

impl QuizAnswers {
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn record(&mut self, position: usize, key: &'static str, value: &'static str) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
            return;
        }
        let at = position.min(self.entries.len());
        self.entries.insert(at, (key, value));
    }
}

impl Serialize for QuizAnswers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Linear walk through a fixed question list.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizFlow {
    questions: &'static [Question],
    step: Step,
    answers: QuizAnswers,
}

impl QuizFlow {
    pub fn new(questions: &'static [Question]) -> Self {
        let step = if questions.is_empty() {
            Step::Summary
        } else {
            Step::Question(0)
        };
        Self {
            questions,
            step,
            answers: QuizAnswers::default(),
        }
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match self.step {
            Step::Question(index) => self.questions.get(index),
            Step::Summary => None,
        }
    }

    /// (1-based position, total) of the current question; total/total at the summary.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.questions.len();
        match self.step {
            Step::Question(index) => (index + 1, total),
            Step::Summary => (total, total),
        }
    }

    /// Records `label` for the current question and moves forward.
    pub fn select(&mut self, label: &str) -> Result<Step, QuizError> {
        let Step::Question(index) = self.step else {
            return Err(QuizError::AlreadyComplete);
        };
        let question = &self.questions[index];
        let chosen = question
            .options
            .iter()
            .copied()
            .find(|option| *option == label)
            .ok_or_else(|| QuizError::UnknownOption {
                key: question.key,
                label: label.to_string(),
            })?;

        self.answers.record(index, question.key, chosen);
        self.step = if index + 1 < self.questions.len() {
            Step::Question(index + 1)
        } else {
            Step::Summary
        };
        Ok(self.step)
    }

    /// Steps back one question. Recorded answers stay.
    pub fn back(&mut self) -> Result<Step, QuizError> {
        match self.step {
            Step::Summary => Err(QuizError::AlreadyComplete),
            Step::Question(0) => Err(QuizError::AtFirstQuestion),
            Step::Question(index) => {
                self.step = Step::Question(index - 1);
                Ok(self.step)
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.questions);
    }

    /// `key: value; key: value` in question order.
    pub fn summary_text(&self) -> String {
        self.questions
            .iter()
            .filter_map(|q| self.answers.get(q.key).map(|value| format!("{}: {}", q.key, value)))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Remembers the last step a flow was seen at, so each completion is handed off once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompletionLatch {
    last_step: Option<Step>,
}

impl CompletionLatch {
    /// Summary text when `flow` has just arrived at the summary with something answered.
    pub fn observe(&mut self, flow: &QuizFlow) -> Option<String> {
        let step = flow.step();
        let arrived = step == Step::Summary && self.last_step != Some(step);
        self.last_step = Some(step);
        (arrived && !flow.answers().is_empty()).then(|| flow.summary_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static SAMPLE: &[Question] = &[
        Question {
            key: "budget",
            prompt: "Бюджет",
            options: &["до $1k", "$1k-$5k"],
        },
        Question {
            key: "niche",
            prompt: "Ниша",
            options: &["E-com", "SaaS", "EdTech"],
        },
    ];

    #[test]
    fn test_opens_on_first_question_with_no_answers() {
        let flow = QuizFlow::new(SAMPLE);
        assert_eq!(flow.step(), Step::Question(0));
        assert!(flow.answers().is_empty());
        assert_eq!(flow.current_question().map(|q| q.key), Some("budget"));
        assert_eq!(flow.progress(), (1, 2));
    }

    #[test]
    fn test_full_walk_reaches_summary() {
        let mut flow = QuizFlow::new(SAMPLE);
        let mut visited = vec![flow.step()];
        visited.push(flow.select("$1k-$5k").unwrap());
        visited.push(flow.select("SaaS").unwrap());

        assert_eq!(
            visited,
            vec![Step::Question(0), Step::Question(1), Step::Summary]
        );
        assert_eq!(flow.step(), Step::Summary);
        assert_eq!(flow.summary_text(), "budget: $1k-$5k; niche: SaaS");
    }

    #[test]
    fn test_every_key_answered_once_from_its_options() {
        let mut flow = QuizFlow::new(SAMPLE);
        for question in SAMPLE {
            flow.select(question.options[question.options.len() - 1]).unwrap();
        }
        assert_eq!(flow.answers().len(), SAMPLE.len());
        for question in SAMPLE {
            let answer = flow.answers().get(question.key).unwrap();
            assert!(question.options.contains(&answer));
        }
    }

    #[test]
    fn test_rejects_unknown_option_without_moving() {
        let mut flow = QuizFlow::new(SAMPLE);
        let err = flow.select("$1m").unwrap_err();
        assert_eq!(
            err,
            QuizError::UnknownOption {
                key: "budget",
                label: "$1m".to_string()
            }
        );
        assert_eq!(flow.step(), Step::Question(0));
        assert!(flow.answers().is_empty());
    }

    #[test]
    fn test_back_keeps_answers() {
        let mut flow = QuizFlow::new(SAMPLE);
        flow.select("до $1k").unwrap();
        assert_eq!(flow.back(), Ok(Step::Question(0)));
        assert_eq!(flow.answers().get("budget"), Some("до $1k"));

        flow.select("$1k-$5k").unwrap();
        assert_eq!(flow.answers().get("budget"), Some("$1k-$5k"));
        assert_eq!(flow.answers().len(), 1);
    }

    #[test]
    fn test_back_is_bounded() {
        let mut flow = QuizFlow::new(SAMPLE);
        assert_eq!(flow.back(), Err(QuizError::AtFirstQuestion));

        flow.select("до $1k").unwrap();
        flow.select("E-com").unwrap();
        assert_eq!(flow.back(), Err(QuizError::AlreadyComplete));
        assert_eq!(flow.select("SaaS"), Err(QuizError::AlreadyComplete));
        assert_eq!(flow.step(), Step::Summary);
    }

    #[test]
    fn test_reset_clears_previous_session() {
        let mut flow = QuizFlow::new(SAMPLE);
        flow.select("до $1k").unwrap();
        flow.select("EdTech").unwrap();
        flow.reset();

        assert_eq!(flow, QuizFlow::new(SAMPLE));
        assert_eq!(flow.summary_text(), "");
    }

    #[test]
    fn test_answers_serialize_in_question_order() {
        let mut flow = QuizFlow::new(SAMPLE);
        flow.select("$1k-$5k").unwrap();
        flow.select("SaaS").unwrap();

        let value = serde_json::to_value(flow.answers()).unwrap();
        assert_eq!(value, json!({ "budget": "$1k-$5k", "niche": "SaaS" }));
        let text = serde_json::to_string(flow.answers()).unwrap();
        assert!(text.find("budget").unwrap() < text.find("niche").unwrap());
    }

    fn complete(flow: &mut QuizFlow) {
        flow.select("$1k-$5k").unwrap();
        flow.select("SaaS").unwrap();
    }

    #[test]
    fn test_latch_fires_on_reaching_summary() {
        let mut latch = CompletionLatch::default();
        let mut flow = QuizFlow::new(SAMPLE);
        assert_eq!(latch.observe(&flow), None);

        flow.select("$1k-$5k").unwrap();
        assert_eq!(latch.observe(&flow), None);

        flow.select("SaaS").unwrap();
        assert_eq!(
            latch.observe(&flow).as_deref(),
            Some("budget: $1k-$5k; niche: SaaS")
        );
    }

    #[test]
    fn test_latch_stays_quiet_while_summary_persists() {
        let mut latch = CompletionLatch::default();
        let mut flow = QuizFlow::new(SAMPLE);
        latch.observe(&flow);
        complete(&mut flow);

        assert!(latch.observe(&flow).is_some());
        assert_eq!(latch.observe(&flow), None);
        assert_eq!(latch.observe(&flow), None);
    }

    #[test]
    fn test_latch_fires_again_after_reset() {
        let mut latch = CompletionLatch::default();
        let mut flow = QuizFlow::new(SAMPLE);
        complete(&mut flow);
        assert!(latch.observe(&flow).is_some());

        flow.reset();
        assert_eq!(latch.observe(&flow), None);
        complete(&mut flow);
        assert!(latch.observe(&flow).is_some());
    }

    #[test]
    fn test_latch_ignores_quiz_without_questions() {
        static NONE: &[Question] = &[];
        let mut latch = CompletionLatch::default();
        assert_eq!(latch.observe(&QuizFlow::new(NONE)), None);
    }

    #[test]
    fn test_empty_question_list_is_already_summary() {
        static NONE: &[Question] = &[];
        let flow = QuizFlow::new(NONE);
        assert_eq!(flow.step(), Step::Summary);
        assert_eq!(flow.progress(), (0, 0));
    }
}

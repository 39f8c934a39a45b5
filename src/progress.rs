//! Survey progression rules.
//!
//! One respondent's attempt moves through four conceptual states: no survey
//! chosen, chosen but not started, in progress with `n` answers recorded,
//! and completed. Progress is never stored explicitly; it is always derived
//! from the length of the recorded answer sequence, so the next question to
//! show is exactly `answers.len()`.
//!
//! The functions here are pure: the web layer maps their verdicts onto
//! renders and redirects. Out-of-order requests are never errors; the
//! respondent is steered back to the index they should be on.

/// Verdict for a request to display the question at a given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionPage {
    /// The request matches the respondent's progress; render this index.
    Render(usize),
    /// No attempt is in progress; send the respondent to survey selection.
    ToSelection,
    /// Every question is already answered; send the respondent to the summary.
    ToFinish,
    /// Out-of-order request; send the respondent to the index they belong on.
    ToIndex(usize),
}

/// Decide what a `GET /questions/<requested>` should do.
///
/// `answered` is `None` when the session has no answer sequence at all,
/// which means the respondent never confirmed starting a survey.
pub fn resolve_question_request(
    answered: Option<usize>,
    total: usize,
    requested: usize,
) -> QuestionPage {
    let Some(answered) = answered else {
        return QuestionPage::ToSelection;
    };
    if answered >= total {
        return QuestionPage::ToFinish;
    }
    if requested != answered {
        return QuestionPage::ToIndex(answered);
    }
    QuestionPage::Render(requested)
}

/// Verdict for where to send the respondent after an accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterAnswer {
    /// More questions remain; continue at this index.
    NextQuestion(usize),
    /// The sequence is full; move on to the completion summary.
    Finished,
}

/// Decide where to go once `answered` answers have been recorded.
pub fn after_answer(answered: usize, total: usize) -> AfterAnswer {
    if answered >= total {
        AfterAnswer::Finished
    } else {
        AfterAnswer::NextQuestion(answered)
    }
}

/// Whether a recorded answer sequence is a complete response to `total`
/// questions. The finish view refuses to render partial or overlong
/// sequences (a tampered session could hold either).
pub fn is_complete(answered: usize, total: usize) -> bool {
    answered == total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_answer_sequence_goes_to_selection() {
        assert_eq!(
            resolve_question_request(None, 3, 0),
            QuestionPage::ToSelection
        );
        assert_eq!(
            resolve_question_request(None, 3, 2),
            QuestionPage::ToSelection
        );
    }

    #[test]
    fn matching_index_renders() {
        assert_eq!(resolve_question_request(Some(0), 3, 0), QuestionPage::Render(0));
        assert_eq!(resolve_question_request(Some(2), 3, 2), QuestionPage::Render(2));
    }

    #[test]
    fn mismatched_index_redirects_to_true_progress() {
        // Jumping ahead
        assert_eq!(resolve_question_request(Some(0), 3, 1), QuestionPage::ToIndex(0));
        assert_eq!(resolve_question_request(Some(0), 3, 2), QuestionPage::ToIndex(0));
        // Going back
        assert_eq!(resolve_question_request(Some(2), 3, 0), QuestionPage::ToIndex(2));
        // Index past the end of the survey
        assert_eq!(resolve_question_request(Some(1), 3, 99), QuestionPage::ToIndex(1));
    }

    #[test]
    fn fully_answered_survey_goes_to_finish() {
        assert_eq!(resolve_question_request(Some(3), 3, 0), QuestionPage::ToFinish);
        assert_eq!(resolve_question_request(Some(3), 3, 3), QuestionPage::ToFinish);
        // Oversized sequences (tampered session) also land on finish, where
        // the completeness check takes over.
        assert_eq!(resolve_question_request(Some(5), 3, 1), QuestionPage::ToFinish);
    }

    #[test]
    fn answers_advance_one_question_at_a_time() {
        assert_eq!(after_answer(1, 3), AfterAnswer::NextQuestion(1));
        assert_eq!(after_answer(2, 3), AfterAnswer::NextQuestion(2));
    }

    #[test]
    fn final_answer_finishes_the_survey() {
        assert_eq!(after_answer(3, 3), AfterAnswer::Finished);
        assert_eq!(after_answer(4, 3), AfterAnswer::Finished);
    }

    #[test]
    fn completeness_requires_exact_length() {
        assert!(is_complete(3, 3));
        assert!(!is_complete(2, 3));
        assert!(!is_complete(4, 3));
        assert!(is_complete(0, 0));
    }
}

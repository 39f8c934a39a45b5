use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use minijinja::context;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::models::Answer;
use crate::progress::{self, AfterAnswer, QuestionPage};

use super::{flash, templates, AppError, AppState};

/// Session key holding the in-progress answer sequence.
const RESPONSES_KEY: &str = "storage";
/// Session key holding the active survey id.
const CURRENT_SURVEY_KEY: &str = "current_survey";

/// How long a completion marker keeps a survey locked, in seconds. Short on
/// purpose: it is a replay guard, not durable completion tracking.
const COMPLETION_TTL_SECS: i64 = 60;

fn completed_cookie_name(survey_id: &str) -> String {
    format!("completed_{survey_id}")
}

fn render(state: &AppState, name: &str, ctx: minijinja::Value) -> Result<Html<String>, AppError> {
    let template = state.templates.get_template(name)?;
    Ok(Html(template.render(ctx)?))
}

fn question_url(index: usize) -> String {
    format!("/questions/{index}")
}

// ============================================================
// Survey selection
// ============================================================

/// `GET /` — list every survey in the catalog.
pub async fn choose_survey(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let surveys: Vec<_> = state.catalog.iter().collect();
    render(
        &state,
        templates::CHOOSE_SURVEY,
        context! { surveys => surveys },
    )
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectSurveyForm {
    pub survey_code: String,
}

/// `POST /` — pick a survey.
///
/// A live completion cookie short-circuits to the already-done view without
/// touching session state, so a survey cannot be restarted within the
/// replay-guard window.
pub async fn select_survey(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Form(form): Form<SelectSurveyForm>,
) -> Result<Response, AppError> {
    if jar.get(&completed_cookie_name(&form.survey_code)).is_some() {
        let html = render(&state, templates::ALREADY_DONE, context! {})?;
        return Ok(html.into_response());
    }

    let survey = state
        .catalog
        .get(&form.survey_code)
        .ok_or_else(|| AppError::UnknownSurvey(form.survey_code.clone()))?;

    session.insert(CURRENT_SURVEY_KEY, &form.survey_code).await?;

    let html = render(&state, templates::START_SURVEY, context! { survey => survey })?;
    Ok(html.into_response())
}

// ============================================================
// Progression
// ============================================================

/// `POST /begin` — confirm the start of the chosen survey.
///
/// Always resets the answer sequence to empty, even if another attempt was
/// in progress. Starting over is a deliberate reset, never a resume.
pub async fn begin_survey(session: Session) -> Result<Redirect, AppError> {
    session.insert(RESPONSES_KEY, Vec::<Answer>::new()).await?;
    Ok(Redirect::to(&question_url(0)))
}

/// `GET /questions/{question_id}` — show the question at that index.
///
/// Only the index equal to the number of recorded answers renders; anything
/// else redirects to where the respondent actually is.
pub async fn show_question(
    State(state): State<AppState>,
    session: Session,
    Path(question_id): Path<usize>,
) -> Result<Response, AppError> {
    let answers: Option<Vec<Answer>> = session.get(RESPONSES_KEY).await?;
    let Some(survey_id) = session.get::<String>(CURRENT_SURVEY_KEY).await? else {
        return Ok(Redirect::to("/").into_response());
    };
    let survey = state
        .catalog
        .get(&survey_id)
        .ok_or_else(|| AppError::UnknownSurvey(survey_id.clone()))?;

    let answered = answers.map(|a| a.len());
    match progress::resolve_question_request(answered, survey.question_count(), question_id) {
        QuestionPage::ToSelection => Ok(Redirect::to("/").into_response()),
        QuestionPage::ToFinish => Ok(Redirect::to("/finish").into_response()),
        QuestionPage::ToIndex(current) => {
            flash::set(&session, format!("Invalid question id: {question_id}")).await?;
            Ok(Redirect::to(&question_url(current)).into_response())
        }
        QuestionPage::Render(index) => {
            let question = &survey.questions[index];
            let flash = flash::take(&session).await?;
            let html = render(
                &state,
                templates::QUESTION,
                context! {
                    question_num => index,
                    question => question,
                    allow_text => question.allows_text(),
                    flash => flash,
                },
            )?;
            Ok(html.into_response())
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerForm {
    pub answer: String,
    #[serde(default)]
    pub text: String,
}

/// `POST /answer` — record an answer and move on.
///
/// The session value is replaced wholesale: read, clone, append, write back.
pub async fn record_answer(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AnswerForm>,
) -> Result<Response, AppError> {
    let Some(mut answers) = session.get::<Vec<Answer>>(RESPONSES_KEY).await? else {
        return Ok(Redirect::to("/").into_response());
    };
    let Some(survey_id) = session.get::<String>(CURRENT_SURVEY_KEY).await? else {
        return Ok(Redirect::to("/").into_response());
    };
    let survey = state
        .catalog
        .get(&survey_id)
        .ok_or_else(|| AppError::UnknownSurvey(survey_id.clone()))?;

    answers.push(Answer {
        choice: form.answer,
        text: form.text,
    });
    session.insert(RESPONSES_KEY, &answers).await?;

    match progress::after_answer(answers.len(), survey.question_count()) {
        AfterAnswer::Finished => Ok(Redirect::to("/finish").into_response()),
        AfterAnswer::NextQuestion(next) => Ok(Redirect::to(&question_url(next)).into_response()),
    }
}

// ============================================================
// Completion
// ============================================================

#[derive(Serialize)]
struct SummaryRow<'a> {
    prompt: &'a str,
    choice: &'a str,
    text: &'a str,
}

/// `GET /finish` — render the completion summary and set the replay-guard
/// cookie. Re-entrant: re-rendering re-sets the cookie.
///
/// The answer sequence is re-validated against the question count first, so
/// a tampered or partial session redirects instead of rendering a bogus
/// summary.
pub async fn finish_survey(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let Some(survey_id) = session.get::<String>(CURRENT_SURVEY_KEY).await? else {
        return Ok(Redirect::to("/").into_response());
    };
    let Some(answers) = session.get::<Vec<Answer>>(RESPONSES_KEY).await? else {
        return Ok(Redirect::to("/").into_response());
    };
    let survey = state
        .catalog
        .get(&survey_id)
        .ok_or_else(|| AppError::UnknownSurvey(survey_id.clone()))?;

    if !progress::is_complete(answers.len(), survey.question_count()) {
        // Short sequence: resume at the true index. Overlong sequence can
        // only come from tampering; start over.
        let target = if answers.len() < survey.question_count() {
            question_url(answers.len())
        } else {
            "/".to_string()
        };
        return Ok(Redirect::to(&target).into_response());
    }

    let rows: Vec<SummaryRow> = survey
        .questions
        .iter()
        .zip(&answers)
        .map(|(question, answer)| SummaryRow {
            prompt: &question.prompt,
            choice: &answer.choice,
            text: &answer.text,
        })
        .collect();

    let html = render(
        &state,
        templates::FINISH,
        context! { survey => survey, responses => rows },
    )?;

    let cookie = Cookie::build((completed_cookie_name(&survey_id), "yes"))
        .path("/")
        .max_age(time::Duration::seconds(COMPLETION_TTL_SECS))
        .build();

    Ok((jar.add(cookie), html).into_response())
}

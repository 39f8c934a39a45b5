//! The template environment, compiled once at startup.
//!
//! Templates are embedded in the binary so the server has no runtime file
//! dependencies beyond an optional catalog file.

use minijinja::Environment;

pub const CHOOSE_SURVEY: &str = "choose_survey.html";
pub const START_SURVEY: &str = "start_survey.html";
pub const QUESTION: &str = "question.html";
pub const FINISH: &str = "finish.html";
pub const ALREADY_DONE: &str = "already_done.html";

pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(CHOOSE_SURVEY, include_str!("../../templates/choose_survey.html"))?;
    env.add_template(START_SURVEY, include_str!("../../templates/start_survey.html"))?;
    env.add_template(QUESTION, include_str!("../../templates/question.html"))?;
    env.add_template(FINISH, include_str!("../../templates/finish.html"))?;
    env.add_template(ALREADY_DONE, include_str!("../../templates/already_done.html"))?;
    Ok(env)
}

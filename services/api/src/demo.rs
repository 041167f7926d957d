use crate::infra::{build_engine, InMemoryContactChannel};
use clap::{Args, ValueEnum};
use sale_readiness::assessment::report::views::ReportView;
use sale_readiness::assessment::{
    AnswerDomain, AnswerImporter, AssessmentConfig, AssessmentEngine, AssessmentService,
    AssessmentState, CategoryId, ContactSubmission, QuestionKey, QuestionTemplate,
};
use sale_readiness::config::AppConfig;
use sale_readiness::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

/// Canned owner answer patterns for the walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum DemoProfile {
    /// Well-prepared business with a couple of soft spots
    Strong,
    /// Owner unsure about most of the preparation work
    Weak,
    /// Solid operation whose books are not ready for a buyer
    FinancialGap,
}

impl DemoProfile {
    fn answer_for(self, question: &QuestionTemplate) -> &'static str {
        match self {
            DemoProfile::Strong => match question.domain {
                AnswerDomain::Ternary if question.key == QuestionKey::Licenses => "dont_know",
                AnswerDomain::Ternary => "yes",
                AnswerDomain::FivePoint => "good",
            },
            DemoProfile::Weak => match question.domain {
                AnswerDomain::Ternary => "dont_know",
                AnswerDomain::FivePoint => "poor",
            },
            DemoProfile::FinancialGap => match (question.category, question.domain) {
                (CategoryId::Financial, AnswerDomain::Ternary) => "no",
                (CategoryId::Financial, AnswerDomain::FivePoint) => "very_poor",
                (_, AnswerDomain::Ternary) => "yes",
                (_, AnswerDomain::FivePoint) => "excellent",
            },
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Owner profile used to answer the questionnaire
    #[arg(long, value_enum, default_value_t = DemoProfile::Strong)]
    pub(crate) profile: DemoProfile,
    /// Forward the result to the in-memory contact inbox using this e-mail
    #[arg(long)]
    pub(crate) email: Option<String>,
    /// Name used for the contact request
    #[arg(long, default_value = "Demo Owner")]
    pub(crate) name: String,
    /// Mobile number used for the contact request
    #[arg(long, default_value = "050-0000000")]
    pub(crate) mobile: String,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Answer file; `.json` is read as an object, anything else as CSV
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Score even when questions are unanswered (they count as zero)
    #[arg(long)]
    pub(crate) force: bool,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let engine = build_engine(&AssessmentConfig::default())?;
    let catalog = engine.catalog();

    println!("Sale readiness questionnaire ({} questions)", catalog.len());
    let mut current = None;
    for (index, question) in catalog.questions().iter().enumerate() {
        if current != Some(question.category) {
            println!("\n{}", question.category.label());
            current = Some(question.category);
        }
        let options: Vec<String> = question
            .options
            .iter()
            .map(|option| format!("{} ({})", option.token, option.label))
            .collect();
        println!("{:>2}. [{}] {}", index + 1, question.key, question.prompt);
        println!("    {}", options.join(" | "));
    }

    Ok(())
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        force,
        json,
    } = args;

    let config = AppConfig::load()?;
    let engine = build_engine(&config.assessment)?;
    let answers = AnswerImporter::from_path(answers)?;

    let missing = answers.missing(engine.catalog());
    let report = if force {
        engine.assess_forced(&answers)
    } else {
        engine.assess(&answers)?
    };
    let view = report.to_view();

    if json {
        let rendered = serde_json::to_string_pretty(&view).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        if !missing.is_empty() {
            println!(
                "Note: {} unanswered question(s) scored as zero",
                missing.len()
            );
        }
        render_report(&view);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        profile,
        email,
        name,
        mobile,
    } = args;

    let engine = Arc::new(build_engine(&AssessmentConfig::default())?);

    println!("Sale readiness demo ({profile:?} profile)");
    let state = walk_questionnaire(&engine, profile, |state, question, token| {
        println!(
            "[{:>3}%] {} -> {}",
            state.progress_pct(&engine),
            question.prompt,
            token
        );
    })?;

    let Some(report) = state.report() else {
        println!("Questionnaire did not finish; no report produced");
        return Ok(());
    };
    render_report(&report.to_view());

    let Some(email) = email else {
        return Ok(());
    };

    println!("\nContact request");
    let inbox = Arc::new(InMemoryContactChannel::default());
    let service = AssessmentService::new(engine, inbox.clone());
    let submission = ContactSubmission::for_report(name, mobile, email, report);
    match service.submit_contact(submission) {
        Ok(receipt) => println!("- {}", receipt.message),
        Err(err) => {
            println!("- Contact request rejected: {}", err);
            return Ok(());
        }
    }
    for received in inbox.received() {
        println!(
            "- Inbox: {} <{}> score {} at {}",
            received.submission.full_name,
            received.submission.email,
            received.submission.assessment_score,
            received.received_at.to_rfc3339()
        );
    }

    Ok(())
}

/// Answers every question with the profile's token, reporting each step.
fn walk_questionnaire<F>(
    engine: &AssessmentEngine,
    profile: DemoProfile,
    mut on_answer: F,
) -> Result<AssessmentState, AppError>
where
    F: FnMut(&AssessmentState, &QuestionTemplate, &str),
{
    let mut state = AssessmentState::new();
    while let Some(question) = state.current_question(engine) {
        let token = profile.answer_for(question);
        state = state.answer(engine, token)?;
        on_answer(&state, question, token);
    }
    Ok(state)
}

pub(crate) fn render_report(view: &ReportView) {
    println!(
        "\nReadiness score: {}% ({})",
        view.overall_score, view.tier_label
    );
    println!("Assessment: {}", view.verbal_assessment);
    println!("Readiness level: {}", view.readiness_level);

    println!("\nCategory scores");
    for entry in &view.categories {
        println!(
            "- {}: {:.1} / 5 ({}%)",
            entry.category_label, entry.score, entry.percent
        );
        for line in &entry.analysis {
            println!("    {}", line);
        }
    }

    println!("\nRecommendations");
    for (index, recommendation) in view.recommendations.iter().enumerate() {
        println!("{:>2}. {}", index + 1, recommendation);
    }
}

use crate::infra::{load_submission, parse_rating, resolve_rubric};
use crate::render::{flag_name, render_breakdown, render_questionnaire, render_result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use idea_score::config::AppConfig;
use idea_score::error::AppError;
use idea_score::payload;
use idea_score::questionnaire::{IdeaSubmission, SubmissionError, ValidationIssue};
use idea_score::scoring::{AnswerField, Answers, ScoringEngine};
use idea_score::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "idea-score",
    about = "Score a SaaS idea from nine 1-5 self-assessment ratings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score an idea from rating flags or an answers file
    Score(ScoreArgs),
    /// Render a result link produced by `score --format link`
    Decode(DecodeArgs),
    /// List the evaluation questions grouped by wizard step
    Questions,
    /// Print the active scoring rubric as JSON
    Rubric(RubricArgs),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Link,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RatingArgs {
    /// How painful is the problem you solve?
    #[arg(long, value_parser = parse_rating)]
    pub(crate) problem_severity: Option<u8>,
    /// How clearly defined is your ideal customer profile?
    #[arg(long, value_parser = parse_rating)]
    pub(crate) audience_clarity: Option<u8>,
    /// Do buyers already pay for alternatives?
    #[arg(long, value_parser = parse_rating)]
    pub(crate) willingness_to_pay: Option<u8>,
    /// How much pricing power do you have? (defaults to 3)
    #[arg(long, value_parser = parse_rating)]
    pub(crate) pricing_leverage: Option<u8>,
    /// How crowded is your exact niche? (5 = many strong incumbents)
    #[arg(long, value_parser = parse_rating)]
    pub(crate) competition_density: Option<u8>,
    /// How clear is your differentiation vs. top tools?
    #[arg(long, value_parser = parse_rating)]
    pub(crate) differentiation_clarity: Option<u8>,
    /// How easy is it to reach your ideal customer?
    #[arg(long, value_parser = parse_rating)]
    pub(crate) reachability: Option<u8>,
    /// Organic potential (SEO / communities / virality)
    #[arg(long, value_parser = parse_rating)]
    pub(crate) organic_potential: Option<u8>,
    /// How fast can you ship an MVP? (5 = under two weeks)
    #[arg(long, value_parser = parse_rating)]
    pub(crate) mvp_feasibility: Option<u8>,
    /// Expected usage frequency
    #[arg(long, value_parser = parse_rating)]
    pub(crate) recurring_use: Option<u8>,
    /// The ideal customer profile is narrow and specific
    #[arg(long)]
    pub(crate) icp_specific: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[command(flatten)]
    pub(crate) ratings: RatingArgs,
    /// One or two sentences describing the idea
    #[arg(long)]
    pub(crate) idea: Option<String>,
    /// JSON file holding an idea submission or bare answers; flags override its values
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Rubric JSON overriding IDEA_SCORE_RUBRIC
    #[arg(long)]
    pub(crate) rubric: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Include the base score and triggered bonuses/penalties
    #[arg(long)]
    pub(crate) breakdown: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DecodeArgs {
    /// Result link, query string, or bare `data` payload
    pub(crate) link: String,
    /// Output format (`link` re-emits the share message)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct RubricArgs {
    /// Rubric JSON overriding IDEA_SCORE_RUBRIC
    #[arg(long)]
    pub(crate) rubric: Option<PathBuf>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "idea scorer ready");

    match cli.command {
        Command::Score(args) => run_score(&config, args),
        Command::Decode(args) => run_decode(&config, args),
        Command::Questions => {
            print!("{}", render_questionnaire());
            Ok(())
        }
        Command::Rubric(args) => {
            let rubric = resolve_rubric(&config, args.rubric)?;
            println!("{}", serde_json::to_string_pretty(&rubric)?);
            Ok(())
        }
    }
}

fn run_score(config: &AppConfig, args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        ratings,
        idea,
        answers,
        rubric,
        format,
        breakdown,
    } = args;

    let engine = ScoringEngine::try_new(resolve_rubric(config, rubric)?)?;
    let mut submission = match answers {
        Some(path) => load_submission(&path)?,
        None => {
            let issues = ratings.missing_issues();
            if !issues.is_empty() {
                return Err(SubmissionError { issues }.into());
            }
            IdeaSubmission {
                idea: String::new(),
                answers: Answers::uniform(0),
            }
        }
    };
    if let Some(idea) = idea {
        submission.idea = idea;
    }
    ratings.apply(&mut submission.answers);

    // The idea text is optional on the command line; ratings are not.
    if let Err(err) = submission.validate() {
        let issues: Vec<_> = err
            .issues
            .into_iter()
            .filter(|issue| issue.field != "idea" || !submission.idea.is_empty())
            .collect();
        if !issues.is_empty() {
            return Err(SubmissionError { issues }.into());
        }
    }

    let result = engine.evaluate(&submission.answers)?;
    info!(score = result.score, verdict = %result.verdict, "idea scored");

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Link => {
            println!("{}", payload::result_link(&config.scoring.base_url, &result)?)
        }
        OutputFormat::Text => {
            print!("{}", render_result(&result));
            if breakdown {
                print!("{}", render_breakdown(&engine.breakdown(&submission.answers)));
            }
            println!(
                "\nShare: {}",
                payload::result_link(&config.scoring.base_url, &result)?
            );
        }
    }

    Ok(())
}

fn run_decode(config: &AppConfig, args: DecodeArgs) -> Result<(), AppError> {
    let result = payload::decode_link(&args.link)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Link => {
            let url = payload::result_link(&config.scoring.base_url, &result)?;
            let message = payload::ShareMessage::for_result(&result, url);
            println!("{}", serde_json::to_string_pretty(&message)?);
        }
        OutputFormat::Text => print!("{}", render_result(&result)),
    }

    Ok(())
}

impl RatingArgs {
    fn flags(&self) -> [(AnswerField, Option<u8>); 10] {
        use AnswerField::*;

        [
            (ProblemSeverity, self.problem_severity),
            (AudienceClarity, self.audience_clarity),
            (WillingnessToPay, self.willingness_to_pay),
            (PricingLeverage, self.pricing_leverage),
            (CompetitionDensity, self.competition_density),
            (DifferentiationClarity, self.differentiation_clarity),
            (Reachability, self.reachability),
            (OrganicPotential, self.organic_potential),
            (MvpFeasibility, self.mvp_feasibility),
            (RecurringUse, self.recurring_use),
        ]
    }

    fn apply(&self, answers: &mut Answers) {
        for (field, value) in self.flags() {
            if let Some(value) = value {
                answers.set(field, value);
            }
        }
        if self.icp_specific {
            answers.icp_specific = true;
        }
    }

    /// Required ratings that were not passed as flags. Pricing leverage is optional.
    fn missing_issues(&self) -> Vec<ValidationIssue> {
        self.flags()
            .into_iter()
            .filter(|(field, value)| value.is_none() && *field != AnswerField::PricingLeverage)
            .map(|(field, _)| ValidationIssue {
                field: field.key(),
                message: format!("Missing required rating (--{}).", flag_name(field.key())),
            })
            .collect()
    }
}

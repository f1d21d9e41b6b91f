// Wuxing report binary
//
// Usage: WUXING_BIRTH=1990-10-25-14 cargo run --features cli --bin wuxing_report
//
// Optional: WUXING_WEIGHTS, WUXING_OBSERVATION, WUXING_QUESTIONNAIRE (JSON file paths)

use anyhow::{bail, Context};
use std::fs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wuxing_engine::{
    AssessmentRequest, BirthInput, DailyObservation, PostnatalInput, QuestionnaireAnswers,
    WuxingScorer,
};

fn parse_birth(value: &str) -> anyhow::Result<BirthInput> {
    let parts: Vec<&str> = value.split('-').collect();
    let [year, month, day, hour] = parts.as_slice() else {
        bail!("WUXING_BIRTH must look like YYYY-MM-DD-HH, got {:?}", value);
    };
    Ok(BirthInput::new(
        year.parse().context("birth year")?,
        month.parse().context("birth month")?,
        day.parse().context("birth day")?,
        hour.parse().context("birth hour")?,
    ))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wuxing_engine=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let birth = std::env::var("WUXING_BIRTH").context("WUXING_BIRTH is not set")?;
    let birth = parse_birth(&birth)?;

    let postnatal = match (
        std::env::var("WUXING_OBSERVATION").ok(),
        std::env::var("WUXING_QUESTIONNAIRE").ok(),
    ) {
        (Some(_), Some(_)) => {
            bail!("Set only one of WUXING_OBSERVATION and WUXING_QUESTIONNAIRE")
        }
        (Some(path), None) => Some(PostnatalInput::Observation(
            read_json::<DailyObservation>(&path)?,
        )),
        (None, Some(path)) => Some(PostnatalInput::Questionnaire(
            read_json::<QuestionnaireAnswers>(&path)?,
        )),
        (None, None) => None,
    };

    tracing::info!("Configuration:");
    tracing::info!("  Birth: {:?}", birth);
    tracing::info!(
        "  Postnatal: {}",
        match &postnatal {
            Some(PostnatalInput::Observation(_)) => "observation",
            Some(PostnatalInput::Questionnaire(_)) => "questionnaire",
            None => "none",
        }
    );

    let scorer = WuxingScorer::from_env().context("Failed to load scoring weights")?;
    let report = scorer.assess_full(&AssessmentRequest {
        birth,
        postnatal,
        current_season: None,
    })?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

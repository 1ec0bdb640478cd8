//! `democrm-demo`
//!
//! Command-line front end over the generator and the chat assistant.
//!
//! ```bash
//! democrm-demo summary
//! democrm-demo --seed 5 --contacts 100 dataset
//! democrm-demo --chat-delay-ms 0 chat "Zeig mir die Pipeline" "Top Leads?"
//! ```

use std::io::Write;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};

use democrm_chatbot::{ChatConfig, ChatError, ChatHandle, ChatService, seed_history, templates};
use democrm_mockdata::{Dataset, DealStage, GeneratorConfig, MockDataGenerator, format_eur};

#[derive(Debug, Parser)]
#[command(name = "democrm-demo")]
#[command(about = "Generate demo CRM data and talk to the canned assistant", long_about = None)]
pub struct Cli {
    /// Seed for reproducible datasets (random when unset)
    #[arg(long, global = true, env = "DEMOCRM_SEED")]
    pub seed: Option<u64>,

    /// Number of contacts to generate
    #[arg(long, global = true, env = "DEMOCRM_CONTACTS")]
    pub contacts: Option<u32>,

    /// Number of timeline activities to generate
    #[arg(long, global = true, env = "DEMOCRM_ACTIVITIES")]
    pub activities: Option<u32>,

    /// Artificial delay before each assistant reply
    #[arg(long, global = true, env = "DEMOCRM_CHAT_DELAY_MS")]
    pub chat_delay_ms: Option<u64>,

    /// Defaults to `summary`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the full generated dataset as JSON
    Dataset,
    /// Print pipeline totals and the top deals
    Summary,
    /// Send messages to the assistant and print its replies
    Chat {
        #[arg(required = true, num_args = 1..)]
        messages: Vec<String>,
    },
}

impl Cli {
    /// Generator defaults with any flags (or their env vars) applied.
    pub fn generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        config.seed = self.seed;
        if let Some(count) = self.contacts {
            config.contact_count = count;
        }
        if let Some(count) = self.activities {
            config.activity_count = count;
        }
        config
    }

    pub fn chat_config(&self) -> ChatConfig {
        let mut config = ChatConfig::default();
        if let Some(ms) = self.chat_delay_ms {
            config.response_delay_ms = ms;
        }
        config
    }
}

/// Execute the parsed command, writing user-facing output to `out`.
pub async fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    match cli.command.clone().unwrap_or(Command::Summary) {
        Command::Dataset => {
            let dataset = generate(cli.generator_config())?;
            serde_json::to_writer_pretty(&mut *out, &dataset).context("serialize dataset")?;
            writeln!(out)?;
        }
        Command::Summary => write_summary(&generate(cli.generator_config())?, out)?,
        Command::Chat { messages } => {
            let (handle, worker) = ChatService::new(cli.chat_config())
                .with_history(seed_history(Utc::now()))
                .start();
            let result = chat(&handle, &messages, out).await;
            handle.shutdown();
            worker.await.context("chat worker panicked")?;
            result?;
        }
    }
    Ok(())
}

fn generate(config: GeneratorConfig) -> anyhow::Result<Dataset> {
    tracing::info!(seed = ?config.seed, contacts = config.contact_count, "generating dataset");

    let mut generator =
        MockDataGenerator::from_config(config).context("invalid generator configuration")?;
    generator
        .generate_dataset()
        .context("failed to generate dataset")
}

fn write_summary(dataset: &Dataset, out: &mut impl Write) -> std::io::Result<()> {
    let pipeline = &dataset.pipeline;

    writeln!(out, "Kontakte:    {}", dataset.contacts.len())?;
    writeln!(out, "Workflows:   {}", dataset.workflows.len())?;
    writeln!(out, "Aktivitäten: {}", dataset.activities.len())?;
    writeln!(out)?;

    for stage in DealStage::ALL {
        writeln!(
            out,
            "{:<12} {:>2} Deals  {:>18}",
            stage.label(),
            pipeline.stage(stage).len(),
            format_eur(pipeline.stage_total(stage))
        )?;
    }
    writeln!(
        out,
        "{:<12} {:>2} Deals  {:>18}",
        "Gesamt",
        pipeline.len(),
        format_eur(pipeline.total_value())
    )?;
    writeln!(out)?;

    writeln!(out, "Top-Deals:")?;
    for deal in pipeline.top_deals(3) {
        writeln!(
            out,
            "  {} ({}, {}%) {}",
            deal.title,
            format_eur(deal.value),
            deal.probability,
            deal.stage
        )?;
    }

    if let Some(activity) = dataset.activities.first() {
        writeln!(out)?;
        writeln!(out, "Letzte Aktivität: {} ({})", activity.content, activity.timestamp_text)?;
    }
    Ok(())
}

/// Greet, then send each message in turn. Blank messages are skipped.
pub async fn chat(handle: &ChatHandle, messages: &[String], out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}\n", templates::GREETING)?;

    for text in messages {
        let reply = match handle.send(text.as_str()).await {
            Ok(reply) => reply,
            Err(ChatError::EmptyMessage) => {
                tracing::debug!("skipping blank message");
                continue;
            }
            Err(err) => return Err(err).with_context(|| format!("chat turn for `{text}` failed")),
        };
        writeln!(out, "> {}", reply.user)?;
        writeln!(out, "{}\n", reply.bot.unwrap_or_default())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("democrm-demo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_generator_defaults() {
        let cli = parse(&["--seed", "5", "--contacts", "40", "dataset"]);
        assert_eq!(cli.command, Some(Command::Dataset));

        let config = cli.generator_config();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.contact_count, 40);
        assert_eq!(config.activity_count, GeneratorConfig::default().activity_count);
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = parse(&["chat", "hallo", "--chat-delay-ms", "0"]);
        assert_eq!(cli.chat_config().response_delay_ms, 0);
        assert_eq!(
            cli.command,
            Some(Command::Chat {
                messages: vec!["hallo".to_string()]
            })
        );
    }

    #[test]
    fn chat_requires_a_message_and_unknown_flags_fail() {
        assert!(Cli::try_parse_from(["democrm-demo", "chat"]).is_err());
        assert!(Cli::try_parse_from(["democrm-demo", "--bogus"]).is_err());
        assert!(Cli::try_parse_from(["democrm-demo", "--seed", "abc"]).is_err());
    }

    #[test]
    fn summary_lists_every_stage() {
        let config = parse(&["--seed", "3"]).generator_config();
        let mut out = Vec::new();
        write_summary(&generate(config).unwrap(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        for stage in DealStage::ALL {
            assert!(text.contains(stage.label()));
        }
        assert!(text.contains("Gesamt       19 Deals"));
    }

    #[tokio::test(start_paused = true)]
    async fn chat_greets_and_skips_blank_messages() {
        let (handle, _worker) = ChatService::new(ChatConfig::default()).start();
        let messages = vec!["   ".to_string(), "pipeline".to_string()];
        let mut out = Vec::new();

        chat(&handle, &messages, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(templates::GREETING));
        assert!(text.contains("> pipeline\n"));
        assert!(text.contains(templates::PIPELINE_SUMMARY));
        assert_eq!(text.matches("> ").count(), 1);
        assert_eq!(handle.transcript().await.len(), 1);
    }
}

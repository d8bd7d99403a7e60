//! `badging simulate`
//!
//! Each simulated frame runs on its own worker thread: it opens a channel,
//! posts its bind to the UI queue and sends the script. The main thread acts
//! as the UI thread, running queued binds and pumping the services.

use anyhow::{anyhow, bail, Context, Result};
use badging_core::{BadgeConfig, BadgeHandlers, BadgeValue, BrowsingContextId, FrameIdentity};
use badging_effects::{CatalogLocalization, LabelIconBadger, TracingBadMessageHandler};
use badging_service::{
    badge_channel, ui_task_queue, BadgeRequest, BadgeServiceFactory, FrameBindRequest,
};
use clap::Args;
use std::sync::Arc;
use std::thread;

#[derive(Args)]
pub struct SimulateCommand {
    /// Calls separated by `;` or newlines: `set N`, `flag`, `clear`
    pub script: String,

    /// Number of frames that each replay the script
    #[arg(long, default_value = "1")]
    pub frames: u32,

    /// Browsing context the frames belong to
    #[arg(long, default_value = "1")]
    pub context: u64,
}

/// Parse one script line.
pub fn parse_step(step: &str) -> Result<BadgeRequest> {
    let mut words = step.split_whitespace();
    let request = match (words.next(), words.next()) {
        (Some("set"), Some(count)) => {
            let count = count
                .parse()
                .with_context(|| format!("bad count in '{step}'"))?;
            BadgeRequest::SetBadge(BadgeValue::Number(count))
        }
        (Some("flag"), None) => BadgeRequest::SetBadge(BadgeValue::Flag),
        (Some("clear"), None) => BadgeRequest::ClearBadge,
        _ => bail!("unrecognized step '{step}'"),
    };
    if words.next().is_some() {
        bail!("trailing input in '{step}'");
    }
    Ok(request)
}

/// Parse a whole script, skipping blank steps.
pub fn parse_script(script: &str) -> Result<Vec<BadgeRequest>> {
    script
        .split([';', '\n'])
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(parse_step)
        .collect()
}

pub fn handle_simulate_command(cmd: SimulateCommand, config: BadgeConfig) -> Result<()> {
    let requests = parse_script(&cmd.script)?;
    if requests.is_empty() {
        bail!("script has no steps");
    }

    let localization = Arc::new(CatalogLocalization::for_config(&config));
    let icon = LabelIconBadger::new(
        localization.clone(),
        config.max_badge_content,
        |label: Option<String>| match label {
            Some(label) => println!("badge: {label}"),
            None => println!("badge: (none)"),
        },
    );
    let bad_messages = Arc::new(TracingBadMessageHandler::new());
    let handlers = BadgeHandlers::new(Arc::new(icon), bad_messages.clone(), localization);

    let mut factory = BadgeServiceFactory::new(config, handlers);
    let (sender, mut queue) = ui_task_queue::<BadgeServiceFactory>();
    let context = BrowsingContextId::new(cmd.context);

    for index in 0..cmd.frames {
        let frame_number = i32::try_from(index + 1).context("too many frames")?;
        let frame = FrameIdentity::new(frame_number, 1);
        let sender = sender.clone();
        let script = requests.clone();

        // Frames run one after another so the output order is stable
        thread::spawn(move || -> badging_core::Result<()> {
            let (remote, receiver) = badge_channel();
            sender.post_bind(FrameBindRequest::new(frame, context, receiver))?;
            for request in script {
                remote.send(request)?;
            }
            Ok(())
        })
        .join()
        .map_err(|_| anyhow!("frame {frame} worker panicked"))??;

        queue.run_pending(&mut factory);
        let report = factory.pump_all();
        tracing::info!(
            %frame,
            delivered = report.delivered,
            rejected = report.rejected,
            revoked = report.revoked.len(),
            "frame replayed"
        );
    }

    let label = factory
        .service(context)
        .and_then(|service| service.badge_label())
        .unwrap_or_else(|| "(none)".to_string());
    println!("final: {label}");
    if bad_messages.total_reports() > 0 {
        println!("bad messages: {}", bad_messages.total_reports());
    }
    Ok(())
}

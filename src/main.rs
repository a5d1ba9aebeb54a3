// SPDX-License-Identifier: MPL-2.0
//! Demo: drives a toast queue through a deal submission and prints every
//! broadcast the way a renderer would receive it.

use std::path::PathBuf;
use std::time::Duration;
use toast_queue::config;
use toast_queue::{ToastAction, ToastFields, ToastPatch, Toaster, Variant};
use tracing_subscriber::EnvFilter;

/// Longest the demo waits for pending removals before exiting.
const MAX_FINAL_WAIT: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> toast_queue::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Ignoring invalid --config value");
        None
    });
    let limit: Option<usize> = args.opt_value_from_str("--limit").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Ignoring invalid --limit value");
        None
    });
    let remove_delay_ms: Option<u64> = args.opt_value_from_str("--remove-delay").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Ignoring invalid --remove-delay value");
        None
    });

    let mut settings = match config_path {
        Some(path) => config::load_from_path(&path)?,
        None => config::load()?,
    };
    if limit.is_some() {
        settings.toast.limit = limit;
    }
    if remove_delay_ms.is_some() {
        settings.toast.remove_delay_ms = remove_delay_ms;
    }

    let toaster = Toaster::from_settings(&settings.toast);
    tracing::info!(
        limit = toaster.limit().value(),
        remove_delay_ms = toaster.remove_delay().as_millis(),
        "Toast queue ready"
    );

    let subscription = toaster.subscribe(|toasts| {
        let rendered: Vec<String> = toasts
            .iter()
            .map(|t| {
                format!(
                    "#{} {}{}",
                    t.id(),
                    t.title().unwrap_or("(untitled)"),
                    if t.is_visible() { "" } else { " [closing]" }
                )
            })
            .collect();
        tracing::info!(toasts = ?rendered, "render");
    });

    let pending = toaster.show(
        ToastFields::titled("Generating description")
            .description("Asking the assistant for a suggestion...")
            .hint("spinner", "true"),
    );
    tokio::time::sleep(Duration::from_millis(200)).await;
    pending.update(
        ToastPatch::new()
            .title("Suggestion ready")
            .clear_description()
            .hint("spinner", "false"),
    );

    let submitted = toaster.show(
        ToastFields::titled("Deal submitted")
            .description("Your listing will appear shortly.")
            .action(ToastAction::new("Undo", "Undo deal submission")),
    );
    tokio::time::sleep(Duration::from_millis(200)).await;
    submitted.set_open(false);

    toaster.show(ToastFields::titled("Price looks unusual").variant(Variant::Destructive));
    toaster.dismiss(None);
    let wait = (toaster.remove_delay().as_duration() + Duration::from_millis(50)).min(MAX_FINAL_WAIT);
    tokio::time::sleep(wait).await;

    tracing::info!(
        remaining = toaster.len(),
        pending_removals = toaster.pending_removals(),
        "Demo finished"
    );
    subscription.unsubscribe();
    Ok(())
}

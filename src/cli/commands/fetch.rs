//! Fetch command - fetch one document and print it

use crate::cli::args::FetchArgs;
use crate::config::Config;
use crate::error::DocdexResult;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Execute the fetch command.
///
/// The store never fails outward, so this prints either the rendered
/// document or one of the fallback documents.
pub async fn execute(args: FetchArgs, config: &Config) -> DocdexResult<()> {
    let store = super::build_store(config, args.base);

    let label = if args.path.is_empty() {
        "index".to_string()
    } else {
        args.path.clone()
    };
    let pb = create_progress_bar(&format!("Fetching {}...", label));

    let doc = store.get_document(&args.path).await;
    pb.finish_and_clear();

    debug!("resolved document id: {}", doc.id);
    println!("{}", doc.contents);
    Ok(())
}

fn create_progress_bar(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

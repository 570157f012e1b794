//! Follow command - print the document for each navigation path on stdin

use crate::cli::args::FollowArgs;
use crate::config::Config;
use crate::error::{DocdexError, DocdexResult};
use crate::feed;
use console::style;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

/// Execute the follow command.
///
/// Each stdin line is a navigation path; the document feed switches to the
/// latest path, so typing ahead skips superseded fetches. Ends when stdin
/// closes, after draining the last in-flight document.
pub async fn execute(args: FollowArgs, config: &Config) -> DocdexResult<()> {
    let store = super::build_store(config, args.base);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    let Some(first) = next_path(&mut lines).await? else {
        return Ok(());
    };
    let (tx, paths) = watch::channel(first);
    let mut docs = feed::follow(store, paths);

    loop {
        tokio::select! {
            changed = docs.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
                print_current(&mut docs);
            }
            line = next_path(&mut lines) => {
                match line? {
                    Some(path) => {
                        if tx.send(path).is_err() {
                            return Ok(());
                        }
                    }
                    None => break,
                }
            }
        }
    }

    // Stdin closed: let the feed publish the final document, then stop
    drop(tx);
    while docs.changed().await.is_ok() {
        print_current(&mut docs);
    }

    Ok(())
}

async fn next_path(
    lines: &mut tokio::io::Lines<BufReader<tokio::io::Stdin>>,
) -> DocdexResult<Option<String>> {
    let line = lines
        .next_line()
        .await
        .map_err(|e| DocdexError::io("reading navigation path from stdin", e))?;
    Ok(line.map(|l| l.trim().to_string()))
}

fn print_current(docs: &mut watch::Receiver<Option<crate::document::Document>>) {
    if let Some(doc) = docs.borrow_and_update().clone() {
        println!("{}", style(format!("── {} ──", doc.id)).cyan().bold());
        println!("{}", doc.contents);
    }
}

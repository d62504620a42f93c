//! System status dashboard command.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Display system status: document/chat/message counts and storage info.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let stats = state.lifecycle.stats().await?;

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "documents": stats.documents,
            "chats": stats.chats,
            "messages": stats.messages,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} AsisLegal v{}",
        style("⚖").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("  {}", style("── Library ──").dim());
    println!("  Documents: {}", style(stats.documents).bold());
    println!("  Chats:     {}", style(stats.chats).bold());
    println!("  Messages:  {}", style(stats.messages).bold());
    println!();

    println!("  {}", style("── System ──").dim());
    println!("  Data dir: {}", style(state.data_dir.display()).dim());
    println!("  Database: {}", style("SQLite (WAL mode)").dim());
    println!();

    Ok(())
}

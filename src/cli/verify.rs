//! Verify command - recompute an integrity proof

use crate::scoring::verify_proof;
use anyhow::{Context, Result};
use chrono::DateTime;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub fn run(file: Option<&Path>) -> Result<()> {
    let text = match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let verified = verify_proof(&text).context("Proof verification failed")?;
    debug!("Verified preimage of {} bytes", verified.code.len());

    let when = DateTime::from_timestamp(verified.timestamp, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| verified.timestamp.to_string());
    println!("OK {}", verified.digest);
    println!("  Score:   {}", verified.score);
    println!("  Verdict: {}", verified.verdict);
    println!("  Issued:  {when}");
    Ok(())
}

use std::path::Path;

use appdeploy::config::ConfigWarning;

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// Config warnings as NDJSON `warning` events.
pub fn emit_config_warnings(warnings: &[ConfigWarning]) -> std::io::Result<()> {
    for w in warnings {
        emit_json(serde_json::json!({
            "event": "warning",
            "kind": "unknown_config_key",
            "key": w.key,
            "file": w.file.display().to_string(),
            "line": w.line,
            "suggestion": w.suggestion,
        }))?;
    }
    Ok(())
}

/// Write a single NDJSON event to stdout.
pub fn emit_json(event: serde_json::Value) -> std::io::Result<()> {
    use std::io::Write;

    let mut out = std::io::stdout().lock();
    let line = serde_json::to_string(&event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

use bactwin::config::ConfigWarning;
use bactwin::CompileResult;

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

pub fn config_warning_events(command: &str, warnings: &[ConfigWarning]) -> Vec<serde_json::Value> {
    warnings
        .iter()
        .map(|w| {
            serde_json::json!({
                "event": "warning",
                "command": command,
                "kind": "unknown_config_key",
                "key": w.key,
                "file": w.file,
                "line": w.line,
                "suggestion": w.suggestion,
            })
        })
        .collect()
}

/// Human summary of a compile or check run.
pub fn render_summary(title: &str, result: &CompileResult, locale: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", title));
    if let Some(locale) = locale {
        out.push_str(&format!("  Locale:     {}\n", locale));
    }
    out.push_str(&format!("  Properties: {}\n", result.property_count));
    out.push_str(&format!("  Objects:    {}\n", result.object_count));
    for path in &result.written {
        out.push_str(&format!("  ✓ {}\n", path.display()));
    }
    out
}

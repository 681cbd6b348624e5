use console::Style;

// ── Styles ──────────────────────────────────────────────────────────────────

pub fn style_success() -> Style {
    Style::new().green()
}

pub fn style_error() -> Style {
    Style::new().red()
}

pub fn style_info() -> Style {
    Style::new().cyan()
}

pub fn style_bold() -> Style {
    Style::new().bold()
}

pub fn style_dim() -> Style {
    Style::new().dim()
}

// ── Display helpers ─────────────────────────────────────────────────────────

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("  {} {}", style_success().apply_to("✓"), msg);
}

/// Print an error message with a hint.
pub fn print_error(msg: &str, hint: Option<&str>) {
    eprintln!("  {} {}", style_error().apply_to("Error:"), msg);
    if let Some(h) = hint {
        eprintln!(
            "  {} {}",
            style_dim().apply_to("Hint:"),
            style_dim().apply_to(h)
        );
    }
}

/// Print an informational line.
pub fn print_info(label: &str, value: &str) {
    println!(
        "  {}: {}",
        style_bold().apply_to(label),
        style_info().apply_to(value)
    );
}

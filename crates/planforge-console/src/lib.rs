//! Colorful console output for selector events.
//!
//! Provides a custom `tracing` layer that formats search events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Search and sweep start/end
//! - **DEBUG**: Progress every 65,536 nodes, plan found, unreachable budgets
//! - **TRACE**: Rejected leaves
//!
//! The default filter is `planforge_solver=info`; set `RUST_LOG` to
//! override it.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SEARCH_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "planforge_solver=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the PlanForge banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PlanConsoleLayer)
            .try_init();
    });
}

// Marks the start of a search for elapsed time tracking.
fn mark_search_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SEARCH_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since search start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SEARCH_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 ____  _             _____
|  _ \| | __ _ _ __ |  ___|__  _ __ __ _  ___
| |_) | |/ _` | '_ \| |_ / _ \| '__/ _` |/ _ \
|  __/| | (_| | | | |  _| (_) | | | (_| |  __/
|_|   |_|\__,_|_| |_|_|  \___/|_|  \__, |\___|
                                   |___/
"#;

    let version_line = format!(
        "             v{} - Exact-Budget Coverage Selector\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats selector events with colors.
pub struct PlanConsoleLayer;

impl<S: Subscriber> Layer<S> for PlanConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // Accept events from selector modules
        if !target.starts_with("planforge_solver") && !target.starts_with("planforge::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    outcome: Option<String>,
    item_order: Option<String>,
    pruning: Option<String>,
    item_count: Option<u64>,
    budget: Option<i64>,
    total_cost: Option<i64>,
    remaining: Option<i64>,
    required_categories: Option<u64>,
    required_groups: Option<u64>,
    selected: Option<u64>,
    nodes: Option<u64>,
    leaves: Option<u64>,
    depth: Option<u64>,
    pending: Option<u64>,
    budget_prunes: Option<u64>,
    feasibility_prunes: Option<u64>,
    budgets: Option<u64>,
    found: Option<u64>,
    speed: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "outcome" => self.outcome = Some(s),
            "item_order" => self.item_order = Some(s),
            "pruning" => self.pruning = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "item_count" => self.item_count = Some(value),
            "required_categories" => self.required_categories = Some(value),
            "required_groups" => self.required_groups = Some(value),
            "selected" => self.selected = Some(value),
            "nodes" => self.nodes = Some(value),
            "leaves" => self.leaves = Some(value),
            "depth" => self.depth = Some(value),
            "pending" => self.pending = Some(value),
            "budget_prunes" => self.budget_prunes = Some(value),
            "feasibility_prunes" => self.feasibility_prunes = Some(value),
            "budgets" => self.budgets = Some(value),
            "found" => self.found = Some(value),
            "speed" => self.speed = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "budget" => self.budget = Some(value),
            "total_cost" => self.total_cost = Some(value),
            "remaining" => self.remaining = Some(value),
            _ => self.record_u64(field, value as u64),
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "outcome" => self.outcome = Some(value.to_string()),
            "item_order" => self.item_order = Some(value.to_string()),
            "pruning" => self.pruning = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "search_start" => format_search_start(v),
        "search_end" => format_search_end(v),
        "budget_unreachable" => format_budget_unreachable(v),
        "progress" => format_progress(v),
        "plan_found" => format_plan_found(v),
        "leaf" => format_leaf(v, level),
        "sweep_start" => format_sweep_start(v),
        "sweep_end" => format_sweep_end(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_search_start(v: &EventVisitor) -> String {
    mark_search_start();
    let items = v.item_count.unwrap_or(0);
    let budget = v.budget.unwrap_or(0);
    let categories = v.required_categories.unwrap_or(0);
    let groups = v.required_groups.unwrap_or(0);

    let mut output = format!(
        "{} {} Searching │ {} items │ budget {} │ {} categories │ {} groups │ space {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        items.to_formatted_string(&Locale::en).bright_yellow(),
        budget.to_formatted_string(&Locale::en).bright_yellow(),
        categories.to_formatted_string(&Locale::en).bright_yellow(),
        groups.to_formatted_string(&Locale::en).bright_yellow(),
        search_space(items).bright_magenta()
    );

    if let Some(ref order) = v.item_order {
        output.push_str(&format!(" │ {}", order.white()));
    }
    if let Some(ref pruning) = v.pruning {
        output.push_str(&format!(" │ {}", pruning.white()));
    }

    output
}

fn format_search_end(v: &EventVisitor) -> String {
    let outcome = v.outcome.as_deref().unwrap_or("unknown");
    let nodes = v.nodes.unwrap_or(0);
    let leaves = v.leaves.unwrap_or(0);
    let speed = v.speed.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    let status = match outcome {
        "found" => "PLAN FOUND".bright_green().bold().to_string(),
        "no_solution" => "NO SOLUTION".bright_yellow().bold().to_string(),
        _ => "CANCELLED".bright_red().bold().to_string(),
    };

    let mut output = format!(
        "{} {} Search complete │ {} │ {} │ {} nodes │ {} leaves │ {} nodes/s",
        format_elapsed(),
        "■".bright_cyan().bold(),
        status,
        format_duration_ms(duration).yellow(),
        nodes.to_formatted_string(&Locale::en).white(),
        leaves.to_formatted_string(&Locale::en).white(),
        speed
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
    );

    if let Some(selected) = v.selected {
        if outcome == "found" {
            output.push_str(&format!(
                " │ {} selected",
                selected.to_formatted_string(&Locale::en).bright_yellow()
            ));
        }
    }

    let budget_prunes = v.budget_prunes.unwrap_or(0);
    let feasibility_prunes = v.feasibility_prunes.unwrap_or(0);
    if budget_prunes > 0 || feasibility_prunes > 0 {
        output.push_str(&format!(
            " │ pruned {} budget / {} feasibility",
            budget_prunes.to_formatted_string(&Locale::en).white(),
            feasibility_prunes.to_formatted_string(&Locale::en).white(),
        ));
    }

    output
}

fn format_budget_unreachable(v: &EventVisitor) -> String {
    let budget = v.budget.unwrap_or(0);
    let total = v.total_cost.unwrap_or(0);

    format!(
        "{} {} Budget {} exceeds catalog total {}",
        format_elapsed(),
        "!".bright_yellow().bold(),
        budget.to_formatted_string(&Locale::en).bright_yellow(),
        total.to_formatted_string(&Locale::en).white(),
    )
}

fn format_progress(v: &EventVisitor) -> String {
    let nodes = v.nodes.unwrap_or(0);
    let depth = v.depth.unwrap_or(0);
    let pending = v.pending.unwrap_or(0);
    let speed = v.speed.unwrap_or(0);

    format!(
        "{} {} {:>12} nodes │ depth {:>6} │ {:>8} pending │ {:>12}/s",
        format_elapsed(),
        "⚡".bright_cyan(),
        nodes.to_formatted_string(&Locale::en).white(),
        depth.to_formatted_string(&Locale::en).white(),
        pending.to_formatted_string(&Locale::en).white(),
        speed
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
    )
}

fn format_plan_found(v: &EventVisitor) -> String {
    let selected = v.selected.unwrap_or(0);
    let nodes = v.nodes.unwrap_or(0);

    format!(
        "{} {} Plan with {} items after {} nodes",
        format_elapsed(),
        "✓".bright_green(),
        selected.to_formatted_string(&Locale::en).bright_yellow(),
        nodes.to_formatted_string(&Locale::en).white(),
    )
}

fn format_leaf(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let remaining = v.remaining.unwrap_or(0);
    let selected = v.selected.unwrap_or(0);

    format!(
        "{} {} Leaf │ {} selected │ {} remaining",
        format_elapsed(),
        "✗".bright_red(),
        selected.to_formatted_string(&Locale::en).bright_black(),
        remaining.to_formatted_string(&Locale::en).bright_black(),
    )
}

fn format_sweep_start(v: &EventVisitor) -> String {
    mark_search_start();
    let budgets = v.budgets.unwrap_or(0);
    let items = v.item_count.unwrap_or(0);

    format!(
        "{} {} Sweeping {} budgets │ {} items",
        format_elapsed(),
        "▶".bright_blue(),
        budgets.to_formatted_string(&Locale::en).bright_yellow(),
        items.to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_sweep_end(v: &EventVisitor) -> String {
    let found = v.found.unwrap_or(0);

    format!(
        "{} {} Sweep complete │ {} plans found",
        format_elapsed(),
        "◀".bright_blue(),
        found.to_formatted_string(&Locale::en).bright_green(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

// Size of the include/exclude tree over `items` items.
fn search_space(items: u64) -> String {
    if items < 20 {
        return (1u64 << items).to_formatted_string(&Locale::en);
    }
    format!("2^{}", items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1_500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_search_space() {
        assert_eq!(search_space(0), "1");
        assert_eq!(search_space(4), "16");
        assert_eq!(search_space(26), "2^26");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("other".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor, Level::INFO).is_empty());
    }

    #[test]
    fn test_leaf_only_at_trace() {
        let visitor = EventVisitor {
            event: Some("leaf".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor, Level::DEBUG).is_empty());
        assert!(!format_event(&visitor, Level::TRACE).is_empty());
    }
}

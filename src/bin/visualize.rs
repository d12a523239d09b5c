//! sk-visualize - PNG charts for SK frequency router benchmarks.

use sk_router_report::app;
use sk_router_report::cli::VisualizeArgs;

fn main() {
    let args = VisualizeArgs::parse_args();
    std::process::exit(app::run_tool(&args));
}

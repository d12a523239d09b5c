//! sk-dashboard - HTML dashboard for SK frequency router benchmarks.

use sk_router_report::app;
use sk_router_report::cli::DashboardArgs;

fn main() {
    let args = DashboardArgs::parse_args();
    std::process::exit(app::run_tool(&args));
}

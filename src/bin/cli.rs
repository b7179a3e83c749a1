use chrono::NaiveDate;
use std::io::{self, Write};
use std::str::FromStr;
use workload_chart::config::{self, AppConfig};
use workload_chart::{
    ChartData, PlanningSnapshot, ReportingInterval, SeriesKind, TaskNode, export_chart_to_csv,
    load_snapshot_from_json, plot_data_string, save_snapshot_to_json,
};

fn print_help() {
    println!(
        "Commands:\n  help                                        Show this help\n  load <json_path>                            Load a planning snapshot\n  save <json_path>                            Save the current snapshot\n  orders                                      List orders\n  tasks <order_id>                            Show top-level task trees of an order\n  chart <order_id> <start> <finish>           Show the three load series (YYYY-MM-DD)\n  plot <order_id> <series> <start> <finish>   Print plot data (order|resources|capacity)\n  export <order_id> <start> <finish> <csv>    Export the chart series to CSV\n  quit|exit                                   Exit"
    );
}

fn parse_date(s: Option<&str>) -> Option<NaiveDate> {
    s.and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
}

fn parse_interval(start: Option<&str>, finish: Option<&str>) -> Option<ReportingInterval> {
    let (Some(start), Some(finish)) = (parse_date(start), parse_date(finish)) else {
        println!("Dates must be YYYY-MM-DD.");
        return None;
    };
    match ReportingInterval::new(start, finish) {
        Ok(interval) => Some(interval),
        Err(err) => {
            println!("{err}");
            None
        }
    }
}

fn render_tree(node: &TaskNode, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&format!("[{}] {}", node.id, node.name));
    if node.milestone {
        out.push_str(" (milestone)");
    }
    out.push('\n');
    for child in &node.children {
        render_tree(child, depth + 1, out);
    }
}

fn render_chart(chart: &ChartData) -> String {
    let mut out = format!(
        "Interval {} .. {}, max hours {}\n",
        chart.interval.start(),
        chart.interval.finish(),
        chart.max_hours
    );
    for kind in SeriesKind::ALL {
        out.push_str(&format!("# {kind}\n"));
        out.push_str(&plot_data_string(chart.series(kind)));
    }
    out
}

fn build_chart(
    snapshot: &PlanningSnapshot,
    order: Option<&str>,
    start: Option<&str>,
    finish: Option<&str>,
) -> Option<ChartData> {
    let Some(order_id) = order.and_then(|v| v.parse::<i32>().ok()) else {
        println!("Order id must be an integer.");
        return None;
    };
    let interval = parse_interval(start, finish)?;
    match snapshot.chart_for_order(order_id, &interval) {
        Ok(chart) => Some(chart),
        Err(err) => {
            println!("{err}");
            None
        }
    }
}

fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    config::init_tracing(&config.log_filter);

    let mut snapshot = match &config.snapshot_path {
        Some(path) => match load_snapshot_from_json(path) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                println!("Failed to load {}: {err}", path.display());
                PlanningSnapshot::new()
            }
        },
        None => PlanningSnapshot::new(),
    };

    println!("Workload Chart (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "load" => match parts.next() {
                Some(path) => match load_snapshot_from_json(path) {
                    Ok(loaded) => {
                        snapshot = loaded;
                        println!(
                            "Snapshot loaded from {path}: {} orders, {} resources, {} assignments.",
                            snapshot.orders.len(),
                            snapshot.resources.len(),
                            snapshot.assignments.len()
                        );
                    }
                    Err(err) => println!("Failed to load {path}: {err}"),
                },
                None => println!("Usage: load <json_path>"),
            },
            "save" => match parts.next() {
                Some(path) => match save_snapshot_to_json(&snapshot, path) {
                    Ok(()) => println!("Snapshot saved to {path}."),
                    Err(err) => println!("Failed to save {path}: {err}"),
                },
                None => println!("Usage: save <json_path>"),
            },
            "orders" => {
                if snapshot.orders.is_empty() {
                    println!("No orders loaded.");
                }
                for order in &snapshot.orders {
                    println!("{:>6}  {}  ({} tasks)", order.id, order.name, order.tasks.len());
                }
            }
            "tasks" => {
                let Some(order_id) = parts.next().and_then(|v| v.parse::<i32>().ok()) else {
                    println!("Usage: tasks <order_id>");
                    continue;
                };
                match snapshot.planning_state(order_id) {
                    Ok(state) => {
                        let mut out = String::new();
                        for node in &state.top_level {
                            render_tree(node, 0, &mut out);
                        }
                        print!("{out}");
                    }
                    Err(err) => println!("{err}"),
                }
            }
            "chart" => {
                let (order, start, finish) = (parts.next(), parts.next(), parts.next());
                if let Some(chart) = build_chart(&snapshot, order, start, finish) {
                    print!("{}", render_chart(&chart));
                }
            }
            "plot" => {
                let order = parts.next();
                let kind = match parts.next().map(SeriesKind::from_str) {
                    Some(Ok(kind)) => kind,
                    Some(Err(err)) => {
                        println!("{err}");
                        continue;
                    }
                    None => {
                        println!("Usage: plot <order_id> <series> <start> <finish>");
                        continue;
                    }
                };
                let (start, finish) = (parts.next(), parts.next());
                if let Some(chart) = build_chart(&snapshot, order, start, finish) {
                    print!("{}", plot_data_string(chart.series(kind)));
                }
            }
            "export" => {
                let (order, start, finish) = (parts.next(), parts.next(), parts.next());
                let Some(path) = parts.next() else {
                    println!("Usage: export <order_id> <start> <finish> <csv_path>");
                    continue;
                };
                if let Some(chart) = build_chart(&snapshot, order, start, finish) {
                    match export_chart_to_csv(&chart, path) {
                        Ok(()) => println!("Chart exported to {path}."),
                        Err(err) => println!("Failed to export {path}: {err}"),
                    }
                }
            }
            other => println!("Unknown command '{other}'. Type 'help'."),
        }
    }
}

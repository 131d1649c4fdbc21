//! `snapshot` subcommand: the dashboard as the web app would show it for a
//! given filter set and panel order, printed as text.

use chrono::Local;
use clap::Args;
use eda_core::format::{abbreviate_to_millions, percentage_of};
use eda_core::views::{ChartSpec, PieChart, NO_DATA};
use eda_core::{
    Dashboard, DashboardApi, DashboardConfig, DashboardPhase, Facet, FilterOption, HttpApi,
    PanelId, PanelOrder, RefreshOutcome, Vocabulary,
};
use log::{info, warn};
use serde_json::Value;
use std::io;

#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Brand to include (repeatable)
    #[arg(long)]
    pub brand: Vec<String>,

    /// Pack type to include (repeatable)
    #[arg(long)]
    pub pack_type: Vec<String>,

    /// PPG to include (repeatable)
    #[arg(long)]
    pub ppg: Vec<String>,

    /// Channel to include (repeatable)
    #[arg(long)]
    pub channel: Vec<String>,

    /// Year to include (repeatable)
    #[arg(long)]
    pub year: Vec<String>,

    /// Month number 1-12 to include (repeatable)
    #[arg(long)]
    pub month: Vec<String>,

    /// Panel ids to put first, comma separated (e.g. monthly_line,sales_vertical)
    #[arg(long, value_delimiter = ',')]
    pub order: Vec<PanelId>,

    /// Number of pie slices before the rest is merged into "Others"
    #[arg(long)]
    pub max_slices: Option<usize>,

    /// Write the brand share slices to this CSV file
    #[arg(long)]
    pub csv: Option<String>,
}

impl SnapshotArgs {
    /// Raw command line values per facet, in query order.
    fn facet_values(&self) -> [(Facet, &[String]); 6] {
        [
            (Facet::Brand, self.brand.as_slice()),
            (Facet::PackType, self.pack_type.as_slice()),
            (Facet::Ppg, self.ppg.as_slice()),
            (Facet::Channel, self.channel.as_slice()),
            (Facet::Year, self.year.as_slice()),
            (Facet::Month, self.month.as_slice()),
        ]
    }
}

pub async fn run_snapshot(mut config: DashboardConfig, args: SnapshotArgs) -> anyhow::Result<()> {
    if let Some(max_slices) = args.max_slices {
        config.max_slices = max_slices;
    }
    let api = HttpApi::new(config.clone());
    let mut dashboard = Dashboard::new(config);

    info!("Loading dashboard from {}", dashboard.config().api_base);
    let initial = dashboard.start(&api).await;
    if let DashboardPhase::Error(err) = dashboard.phase() {
        anyhow::bail!("{}", err);
    }
    report(initial);

    // Only the last selection's refresh is awaited; the earlier tickets are
    // superseded and never fetched.
    let mut pending = None;
    for (facet, raw) in args.facet_values() {
        if raw.is_empty() {
            continue;
        }
        let items = resolve_options(dashboard.filters().vocabulary(), facet, raw);
        pending = dashboard.set_selection(facet, items).or(pending);
    }
    if let Some(ticket) = pending {
        info!("Fetching chart data for {}", ticket.query.to_query_string());
        let result = api.fetch_chart_data(&ticket.query).await;
        report(Some(dashboard.chart_data_received(ticket, result)));
    }

    for (active, over) in planned_moves(dashboard.panels(), &args.order) {
        dashboard.reorder_panels(active, over);
    }

    println!(
        "EDA dashboard snapshot taken {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    if dashboard.cache().is_stale() {
        println!("(showing the last successful data; the latest refresh failed)");
    }
    for view in dashboard.render() {
        println!();
        println!("== {} ==", view.title);
        for line in describe(&view.chart) {
            println!("  {}", line);
        }
    }

    if let Some(path) = args.csv.as_deref() {
        let pie = dashboard.render().into_iter().find_map(|view| match view.chart {
            ChartSpec::Pie(pie) => Some(pie),
            _ => None,
        });
        if let Some(pie) = pie {
            let file = std::fs::File::create(path)?;
            write_slices(file, &pie)?;
            info!("Wrote {} brand share slices to {}", pie.slices.len(), path);
        }
    }

    Ok(())
}

fn report(outcome: Option<RefreshOutcome>) {
    match outcome {
        Some(RefreshOutcome::Failed(err)) => warn!("{}", err),
        Some(RefreshOutcome::Superseded) => info!("Refresh superseded by a newer one"),
        Some(RefreshOutcome::Applied) | None => {}
    }
}

/// Map command line values onto vocabulary options so labels (month names)
/// carry over. Values the vocabulary does not know are sent as-is.
fn resolve_options(vocabulary: &Vocabulary, facet: Facet, raw: &[String]) -> Vec<FilterOption> {
    raw.iter()
        .map(|value| {
            let value = value.trim();
            vocabulary
                .options(facet)
                .iter()
                .find(|option| option.value.as_param() == value)
                .cloned()
                .unwrap_or_else(|| match (facet, value.parse::<i64>()) {
                    (Facet::Month, Ok(month)) => FilterOption::month(month),
                    (Facet::Year, Ok(year)) => FilterOption::plain(year),
                    _ => FilterOption::plain(value),
                })
        })
        .collect()
}

/// Reorders that bring `wanted` to the front of `current`, in that order.
/// Repeated ids count once, at their first position.
fn planned_moves(current: &PanelOrder, wanted: &[PanelId]) -> Vec<(PanelId, PanelId)> {
    let mut unique: Vec<PanelId> = Vec::with_capacity(wanted.len());
    for &id in wanted {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }

    let mut order = current.clone();
    let mut moves = Vec::new();
    for (slot, &active) in unique.iter().enumerate() {
        let Some(&over) = order.as_slice().get(slot) else {
            break;
        };
        if order.reorder(active, over) {
            moves.push((active, over));
        }
    }
    moves
}

/// Text rendering of one panel's chart.
fn describe(chart: &ChartSpec) -> Vec<String> {
    if chart.is_empty() {
        return vec![NO_DATA.to_string()];
    }
    let cell = |value: Option<&Value>| value.map(abbreviate_to_millions).unwrap_or_default();
    let category = |value: Option<&Value>| match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    match chart {
        ChartSpec::Bar(bar) => bar
            .rows
            .iter()
            .map(|row| {
                let values = bar
                    .series
                    .iter()
                    .map(|series| format!("{}={}", series.key, cell(row.get(&series.key))))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{}: {}", category(row.get(&bar.category_key)), values)
            })
            .collect(),
        ChartSpec::Line(line) => line
            .rows
            .iter()
            .map(|row| {
                format!(
                    "{}: {}",
                    category(row.get(&line.x_key)),
                    cell(row.get(&line.value_key))
                )
            })
            .collect(),
        ChartSpec::Pie(pie) => {
            let mut lines: Vec<String> = pie.slices.iter().map(|s| s.label.clone()).collect();
            lines.push(format!("Total: {}", pie.center_label));
            lines
        }
    }
}

/// Brand share slices as CSV: name, value, share.
fn write_slices<W: io::Write>(writer: W, pie: &PieChart) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["name", "value", "share"])?;
    for slice in &pie.slices {
        wtr.write_record([
            slice.name.clone(),
            slice.value.to_string(),
            percentage_of(slice.value, pie.total),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

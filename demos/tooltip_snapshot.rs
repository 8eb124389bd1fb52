use std::rc::Rc;

use chart_point_snapshot::api::{PointSnapshot, SnapshotConfig};
use chart_point_snapshot::core::{
    ChartHandle, ChartPointContext, ChartPointRecord, FormattedSeries, OpaqueHandle, PointCache,
    PointValueFormat, SeriesHandle,
};
use chart_point_snapshot::telemetry::init_default_tracing;

struct DemoChart {
    title: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = init_default_tracing();

    let chart = Rc::new(DemoChart {
        title: "Monthly revenue".to_owned(),
    });
    let series = Rc::new(FormattedSeries::new("Revenue"));
    let mut cache = PointCache::new();
    for (index, value) in [120.0, 135.5, 128.25].into_iter().enumerate() {
        let context =
            ChartPointContext::new(ChartHandle::new(&chart), SeriesHandle::new(&series), index);
        cache.insert(ChartPointRecord::new(context).with_values(value, index as f64));
    }

    // Pointer hovers the second point; the UI asks for a snapshot.
    let point = cache.get(1).ok_or("missing hovered point")?;
    let live = PointSnapshot::new(point)?;
    let frozen = PointSnapshot::with_config(point, SnapshotConfig::frozen())?;

    // Visuals are attached after layout.
    cache.update(1, |record| {
        record.context.visual = Some(OpaqueHandle::new("column#1"));
    });

    series.set_value_format(PointValueFormat::new(0));
    series.set_data_label_formatter(Rc::new(|point: &ChartPointRecord| {
        format!("${:.0}", point.primary_value)
    }));

    let chart_title = live
        .context()
        .chart_handle()
        .downcast::<DemoChart>()?
        .map(|chart| chart.title.clone())
        .unwrap_or_default();
    println!("chart: {chart_title}");
    println!("live tooltip:   {}", live.tooltip_text()?);
    println!("live label:     {}", live.data_label_text()?);
    println!("frozen tooltip: {}", frozen.tooltip_text()?);
    println!("frozen label:   {}", frozen.data_label_text()?);

    let mut live = live;
    live.refresh_position()?;
    println!("visual attached: {}", live.context().visual().is_some());

    cache.clear();
    println!("{}", live.to_view().to_json_contract_v1_pretty()?);

    Ok(())
}

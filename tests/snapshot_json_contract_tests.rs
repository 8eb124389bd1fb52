use std::rc::Rc;

use chart_point_snapshot::api::{
    POINT_SNAPSHOT_JSON_SCHEMA_V1, PointSnapshot, PointSnapshotJsonContractV1, PointSnapshotView,
    SnapshotConfig, TextCapturePolicy,
};
use chart_point_snapshot::core::{
    ChartHandle, ChartPoint, ChartPointContext, ChartPointRecord, FormattedSeries, OpaqueHandle,
    SeriesHandle, StackedValue,
};

fn stacked_view(series: &Rc<FormattedSeries>) -> PointSnapshotView {
    let context = ChartPointContext::new(ChartHandle::detached(), SeriesHandle::new(series), 4)
        .with_visual(OpaqueHandle::new("column#4"));
    let point = ChartPoint::new(
        ChartPointRecord::new(context)
            .with_values(5.0, 4.0)
            .with_stacked(StackedValue {
                start: 5.0,
                end: 10.0,
                total: 10.0,
                ..StackedValue::default()
            }),
    );
    PointSnapshot::new(&point).expect("snapshot").to_view()
}

#[test]
fn view_resolves_texts_and_flags() {
    let series = Rc::new(FormattedSeries::new("B"));
    let view = stacked_view(&series);

    assert_eq!(view.index, 4);
    assert!(view.has_visual);
    assert!(!view.has_label);
    assert!(!view.has_data_source);
    assert_eq!(view.text_policy, TextCapturePolicy::Live);
    assert_eq!(view.tooltip_text.as_deref(), Some("B: 5.00 (50%)"));
    assert_eq!(view.data_label_text.as_deref(), Some("5.00"));
}

#[test]
fn view_json_contract_roundtrip() {
    let series = Rc::new(FormattedSeries::new("B"));
    let view = stacked_view(&series);

    let json = view
        .to_json_contract_v1_pretty()
        .expect("contract should serialize");
    let payload: PointSnapshotJsonContractV1 =
        serde_json::from_str(&json).expect("contract json should deserialize");
    assert_eq!(payload.schema_version, POINT_SNAPSHOT_JSON_SCHEMA_V1);

    let restored = PointSnapshotView::from_json_compat_str(&json).expect("compat parse");
    assert_eq!(restored, view);
}

#[test]
fn compat_parser_accepts_bare_view() {
    let series = Rc::new(FormattedSeries::new("B"));
    let view = stacked_view(&series);

    let json = view.to_json_pretty().expect("view should serialize");
    let restored = PointSnapshotView::from_json_compat_str(&json).expect("compat parse");

    assert_eq!(restored, view);
}

#[test]
fn compat_parser_rejects_unknown_schema_version() {
    let series = Rc::new(FormattedSeries::new("B"));
    let payload = PointSnapshotJsonContractV1 {
        schema_version: 99,
        snapshot: stacked_view(&series),
    };
    let json = serde_json::to_string(&payload).expect("serialize payload");

    let err = PointSnapshotView::from_json_compat_str(&json).expect_err("unknown version");
    assert!(
        err.to_string()
            .contains("unsupported point snapshot schema version: 99")
    );
}

#[test]
fn compat_parser_rejects_garbage() {
    let err = PointSnapshotView::from_json_compat_str("{\"primary_value\": \"x\"}")
        .expect_err("malformed payload");
    assert!(err.to_string().starts_with("invalid data:"));
}

#[test]
fn snapshot_config_json_roundtrip() {
    let config = SnapshotConfig::new().with_text_policy(TextCapturePolicy::Frozen);

    let json = config.to_json_pretty().expect("config should serialize");
    let restored = SnapshotConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
    assert_eq!(restored, SnapshotConfig::frozen());
}

#[test]
fn frozen_view_survives_series_teardown() {
    let series = Rc::new(FormattedSeries::new("C"));
    let context = ChartPointContext::new(ChartHandle::detached(), SeriesHandle::new(&series), 0);
    let point = ChartPoint::new(ChartPointRecord::new(context).with_values(1.0, 0.0));
    let snapshot =
        PointSnapshot::with_config(&point, SnapshotConfig::frozen()).expect("snapshot");

    drop(series);
    drop(point);
    let view = snapshot.to_view();

    assert_eq!(view.text_policy, TextCapturePolicy::Frozen);
    assert_eq!(view.tooltip_text.as_deref(), Some("C: 1.00"));
    assert_eq!(view.data_label_text.as_deref(), Some("1.00"));
}

#[test]
fn non_finite_scalars_survive_contract_roundtrip() {
    let series = Rc::new(FormattedSeries::new("N"));
    let context = ChartPointContext::new(ChartHandle::detached(), SeriesHandle::new(&series), 2);
    let point = ChartPoint::new(
        ChartPointRecord::new(context)
            .with_values(f64::NAN, f64::INFINITY)
            .with_extra_values(f64::NEG_INFINITY, 1.5, -0.0)
            .with_stacked(StackedValue {
                total: f64::NAN,
                ..StackedValue::default()
            })
            .into_null(),
    );
    let view = PointSnapshot::new(&point).expect("snapshot").to_view();

    let json = view
        .to_json_contract_v1_pretty()
        .expect("contract should serialize");
    assert!(json.contains("\"NaN\""));
    let restored = PointSnapshotView::from_json_compat_str(&json).expect("compat parse");

    assert!(restored.is_null);
    assert!(restored.primary_value.is_nan());
    assert_eq!(restored.secondary_value, f64::INFINITY);
    assert_eq!(restored.tertiary_value, f64::NEG_INFINITY);
    assert_eq!(restored.quaternary_value, 1.5);
    assert_eq!(restored.quinary_value.to_bits(), (-0.0f64).to_bits());
    let stacked = restored.stacked.expect("stacked");
    assert!(stacked.total.is_nan());
    assert_eq!(stacked.end, 0.0);
    assert_eq!(restored.index, 2);
    assert_eq!(restored.tooltip_text.as_deref(), Some("N: -"));
    assert_eq!(restored.data_label_text.as_deref(), Some(""));

    let bare = view.to_json_pretty().expect("view should serialize");
    let restored = PointSnapshotView::from_json_compat_str(&bare).expect("bare parse");
    assert!(restored.primary_value.is_nan());
}

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, warn};

use hsk_cli::logging::redact_value;
use hsk_cli::report::{
    ColorReport, DateReport, StorageReport, ValidateReport, ValueReport, color_report,
    date_report, date_report_with_pattern, validate_report, value_report,
};
use hsk_model::{DirectoryType, FieldKind, FieldValue, ValueKind};
use hsk_storage::{documents_dir, ensure_storage_directory};

use crate::cli::{
    BucketArg, ColorArgs, DateArgs, FieldKindArg, StorageArgs, ValidateArgs, ValueArgs,
    ValueKindArg,
};

pub fn run_validate(args: &ValidateArgs) -> ValidateReport {
    let kind = field_kind(args.kind);
    debug!(kind = %kind, value = redact_value(&args.value), "checking field value");
    let report = validate_report(kind, &args.value);
    if !report.accepted {
        warn!(kind = %kind, "value rejected by the field rule");
    }
    report
}

pub fn run_value(args: &ValueArgs) -> Result<ValueReport> {
    let json: serde_json::Value =
        serde_json::from_str(&args.json).context("parse JSON payload")?;
    let value = FieldValue::from(json);
    debug!(kind = ?value.kind(), "decoded payload value");
    Ok(value_report(&value, args.expect.map(value_kind)))
}

pub fn run_date(args: &DateArgs) -> Result<DateReport> {
    if let Some(pattern) = &args.format {
        let report = date_report_with_pattern(pattern, &args.value)?;
        return Ok(report);
    }
    let report = date_report(&args.value, args.stripped);
    if report.canonical.is_none() {
        warn!(
            input = redact_value(&args.value),
            "date did not match the expected form"
        );
    }
    Ok(report)
}

pub fn run_color(args: &ColorArgs) -> ColorReport {
    let report = color_report(&args.hex, args.alpha);
    if report.fallback {
        warn!(input = %args.hex, "undecodable color, gray fallback used");
    }
    report
}

pub fn run_storage(args: &StorageArgs) -> Result<StorageReport> {
    let bucket = bucket_kind(args.bucket);
    let root = args
        .root
        .clone()
        .or_else(documents_dir)
        .ok_or_else(|| anyhow!("no documents directory on this host; pass --root"))?;
    let path = ensure_storage_directory(&root, bucket)
        .with_context(|| format!("resolve {bucket} bucket under {}", root.display()))?;
    info!(bucket = %bucket, path = %path.display(), "storage directory ready");
    Ok(StorageReport { bucket, root, path })
}

fn field_kind(arg: FieldKindArg) -> FieldKind {
    match arg {
        FieldKindArg::Phone => FieldKind::Phone,
        FieldKindArg::Name => FieldKind::Name,
        FieldKindArg::Email => FieldKind::Email,
        FieldKindArg::Password => FieldKind::Password,
    }
}

fn value_kind(arg: ValueKindArg) -> ValueKind {
    match arg {
        ValueKindArg::Bool => ValueKind::Bool,
        ValueKindArg::Int => ValueKind::Int,
        ValueKindArg::Float => ValueKind::Float,
        ValueKindArg::Text => ValueKind::Text,
        ValueKindArg::Date => ValueKind::Date,
        ValueKindArg::Mapping => ValueKind::Mapping,
        ValueKindArg::Sequence => ValueKind::Sequence,
    }
}

fn bucket_kind(arg: BucketArg) -> DirectoryType {
    match arg {
        BucketArg::Study => DirectoryType::Study,
        BucketArg::Gateway => DirectoryType::Gateway,
    }
}

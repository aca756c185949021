use crate::domain::model::{InboundRecord, OutboundRecord};
use crate::domain::ports::RecordTransform;
use futures::stream::{self, StreamExt};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;

/// 對單筆 record 執行 transform。失敗（錯誤或 panic）只會記錄在這筆 record 上，永不外拋。
pub async fn dispatch(
    skill_name: &str,
    record: InboundRecord,
    transform: &dyn RecordTransform,
) -> OutboundRecord {
    let InboundRecord { record_id, data } = record;

    let outcome = AssertUnwindSafe(transform.transform(&record_id, &data))
        .catch_unwind()
        .await;

    match outcome {
        Ok(Ok(output)) => {
            tracing::debug!(
                "{} - record '{}' produced {} fields, {} warnings",
                skill_name,
                record_id,
                output.data.len(),
                output.warnings.len()
            );
            OutboundRecord::success(record_id, output.data, output.warnings)
        }
        Ok(Err(err)) => {
            tracing::warn!("{} - record '{}' failed: {}", skill_name, record_id, err);
            let message = record_error_message(skill_name, &err.message);
            OutboundRecord::failure(record_id, err.partial_data, message)
        }
        Err(panic) => {
            let description = panic_description(panic.as_ref());
            tracing::warn!(
                "{} - record '{}' panicked: {}",
                skill_name,
                record_id,
                description
            );
            let message = record_error_message(skill_name, &description);
            OutboundRecord::failure(record_id, Default::default(), message)
        }
    }
}

/// Dispatches every record of a batch, yielding outcomes in input order.
/// `concurrency` of 1 processes records one after another.
pub async fn dispatch_all(
    skill_name: &str,
    records: Vec<InboundRecord>,
    transform: &dyn RecordTransform,
    concurrency: usize,
) -> Vec<OutboundRecord> {
    stream::iter(records)
        .map(|record| dispatch(skill_name, record, transform))
        .buffered(concurrency.max(1))
        .collect()
        .await
}

fn record_error_message(skill_name: &str, description: &str) -> String {
    format!(
        "{} - Error processing the request record : {}",
        skill_name, description
    )
}

fn panic_description(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("unexpected fault: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("unexpected fault: {}", message)
    } else {
        "unexpected fault".to_string()
    }
}

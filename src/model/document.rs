//! Persisted record shapes for the schedule blob.
//!
//! The store serializes work orders as `{docId, docType, data}` envelopes
//! with camelCase fields and ISO date strings, so blobs written by earlier
//! versions of the schedule stay readable.

use serde::{Deserialize, Serialize};

use crate::layout::calendar;
use crate::model::{WorkOrder, WorkOrderStatus};

pub const WORK_ORDER_DOC_TYPE: &str = "workOrder";

/// Envelope for one persisted work order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderDocument {
    pub doc_id: String,
    pub doc_type: String,
    pub data: WorkOrderData,
}

/// Payload of a persisted work order; dates travel as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderData {
    pub name: String,
    pub work_center_id: String,
    pub status: WorkOrderStatus,
    pub start_date: String,
    pub end_date: String,
}

impl WorkOrderDocument {
    pub fn from_order(order: &WorkOrder) -> Self {
        Self {
            doc_id: order.id.clone(),
            doc_type: WORK_ORDER_DOC_TYPE.to_string(),
            data: WorkOrderData {
                name: order.name.clone(),
                work_center_id: order.work_center_id.clone(),
                status: order.status,
                start_date: calendar::to_iso(order.start_date),
                end_date: calendar::to_iso(order.end_date),
            },
        }
    }

    /// Rehydrate the domain order. `None` when the envelope has the wrong
    /// document type or either date string fails to parse; the store treats
    /// any such record as blob corruption.
    pub fn to_order(&self) -> Option<WorkOrder> {
        if self.doc_type != WORK_ORDER_DOC_TYPE {
            return None;
        }
        Some(WorkOrder {
            id: self.doc_id.clone(),
            name: self.data.name.clone(),
            work_center_id: self.data.work_center_id.clone(),
            status: self.data.status,
            start_date: calendar::parse_iso(&self.data.start_date)?,
            end_date: calendar::parse_iso(&self.data.end_date)?,
        })
    }
}

//! Snapshot ring formatting implementations

use ferry_primitives::{buf::Buf32, snapshot::Snapshot};

use super::{
    helpers::{porcelain_field, porcelain_optional},
    traits::Formattable,
};

/// A single committed snapshot
#[derive(serde::Serialize)]
pub(crate) struct SnapshotInfo<'a> {
    pub slot: u32,
    pub snapshot: &'a Snapshot,
}

/// State of the whole ring
#[derive(serde::Serialize)]
pub(crate) struct SnapshotsSummaryInfo {
    pub capacity: u32,
    pub first_epoch: Option<u64>,
    pub head_epoch: Option<u64>,
    pub oldest_resident_epoch: Option<u64>,
    pub resident_count: u64,
    pub head_state_root: Option<Buf32>,
    pub all_resident_present: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreadable_epochs: Vec<u64>,
}

impl Formattable for SnapshotInfo<'_> {
    fn format_porcelain(&self) -> String {
        let s = self.snapshot;
        [
            porcelain_field("epoch", s.epoch),
            porcelain_field("slot", self.slot),
            porcelain_field("height", s.height),
            porcelain_field("chain_id", s.chain_id),
            porcelain_field("prev_root", format!("{:?}", s.prev_root)),
            porcelain_field("tx_root", format!("{:?}", s.tx_root)),
            porcelain_field("state_root", format!("{:?}", s.state_root)),
            porcelain_field("header_root", format!("{:?}", s.header_root)),
            porcelain_field("committed_at", s.committed_at),
        ]
        .join("\n")
    }
}

impl Formattable for SnapshotsSummaryInfo {
    fn format_porcelain(&self) -> String {
        let mut output = vec![
            porcelain_field("capacity", self.capacity),
            porcelain_optional("first_epoch", self.first_epoch),
            porcelain_optional("head_epoch", self.head_epoch),
            porcelain_optional("oldest_resident_epoch", self.oldest_resident_epoch),
            porcelain_field("resident_count", self.resident_count),
            porcelain_optional(
                "head_state_root",
                self.head_state_root.map(|r| format!("{r:?}")),
            ),
            porcelain_field("all_resident_present", self.all_resident_present),
        ];

        for epoch in &self.unreadable_epochs {
            output.push(porcelain_field("unreadable_epoch", epoch));
        }

        output.join("\n")
    }
}

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One prize on the wheel. Position in the table decides its angular slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub weight: i32,
    pub color: String,
}

impl Slice {
    pub fn new(label: impl Into<String>, weight: i32, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            weight,
            color: color.into(),
        }
    }

    /// Weight as used by the sampler. Negative weights count as zero.
    pub fn effective_weight(&self) -> u64 {
        self.weight.max(0) as u64
    }
}

/// 10 vouchers plus a special prize that can never be won.
pub static DEFAULT_SLICES: Lazy<Vec<Slice>> = Lazy::new(|| {
    vec![
        Slice::new("Voucher 100k", 10, "#ec4899"),
        Slice::new("Voucher 200k", 10, "#3b82f6"),
        Slice::new("Voucher 300k", 10, "#10b981"),
        Slice::new("Voucher 400k", 10, "#f59e0b"),
        Slice::new("Voucher 500k", 10, "#8b5cf6"),
        Slice::new("Voucher 600k", 10, "#f43f5e"),
        Slice::new("Voucher 700k", 10, "#06b6d4"),
        Slice::new("Voucher 800k", 10, "#ea580c"),
        Slice::new("Voucher 900k", 10, "#65a30d"),
        Slice::new("Voucher 1 TRIỆU", 10, "#dc2626"),
        Slice::new("GIẢI ĐẶC BIỆT", 0, "#6b7280"),
    ]
});

pub fn total_weight(slices: &[Slice]) -> u64 {
    slices.iter().map(Slice::effective_weight).sum()
}

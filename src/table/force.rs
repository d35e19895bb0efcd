use super::QuantityTable;

/// 힘 변환표.
pub fn table() -> QuantityTable {
    QuantityTable::new("Force", &["N", "lbf", "dynes"])
        .edge("N", "lbf", 0.224809)
        .edge("N", "dynes", 1e5)
        .edge("lbf", "N", 4.44822)
        .edge("lbf", "dynes", 4.44822e5)
        .edge("dynes", "N", 1e-5)
        .edge("dynes", "lbf", 2.24809e-6)
}

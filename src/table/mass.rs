use super::QuantityTable;

/// 질량 변환표. kg이 가장 많은 간선을 가지며 tonne은 kg을 거쳐야 닿는 단위가 있다.
pub fn table() -> QuantityTable {
    QuantityTable::new("Mass", &["kg", "g", "metric ton (tonne)", "lbm", "oz"])
        .edge("kg", "g", 1000.0)
        .edge("kg", "metric ton (tonne)", 0.001)
        .edge("kg", "lbm", 2.20462)
        .edge("kg", "oz", 35.27392)
        .edge("g", "kg", 0.001)
        .edge("g", "lbm", 0.00220462)
        .edge("g", "oz", 0.03527392)
        .edge("metric ton (tonne)", "kg", 1000.0)
        .edge("metric ton (tonne)", "lbm", 2204.62)
        .edge("lbm", "kg", 0.453592)
        .edge("lbm", "g", 453.592)
        .edge("lbm", "oz", 16.0)
        .edge("oz", "kg", 0.0283495)
        .edge("oz", "lbm", 0.0625)
}

use super::QuantityTable;

/// 밀도 변환표. 세 단위가 서로 완전히 연결되어 있다.
pub fn table() -> QuantityTable {
    QuantityTable::new("Density", &["g/cm³", "kg/m³", "lbm/ft³"])
        .edge("g/cm³", "kg/m³", 1000.0)
        .edge("g/cm³", "lbm/ft³", 62.42796)
        .edge("kg/m³", "g/cm³", 0.001)
        .edge("kg/m³", "lbm/ft³", 0.06242796)
        .edge("lbm/ft³", "g/cm³", 0.0160185)
        .edge("lbm/ft³", "kg/m³", 16.0185)
}

use super::QuantityTable;

/// 동력 변환표. ft·lbf/s는 W -> ft·lbf/s 간선의 도착점으로만 등장한다.
pub fn table() -> QuantityTable {
    QuantityTable::new("Power", &["W", "hp", "Btu/s", "ft·lbf/s"])
        .edge("W", "hp", 0.00134102)
        .edge("W", "Btu/s", 9.486e-4)
        .edge("W", "ft·lbf/s", 0.73756)
        .edge("hp", "W", 745.7)
        .edge("hp", "Btu/s", 0.706787)
        .edge("Btu/s", "W", 1055.06)
        .edge("Btu/s", "hp", 1.41485)
}

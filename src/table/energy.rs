use super::QuantityTable;

/// 에너지 변환표. ergs는 J -> ergs 간선의 도착점으로만 등장하므로
/// 역방향 탐색으로만 변환할 수 있다.
pub fn table() -> QuantityTable {
    QuantityTable::new("Energy", &["J", "kWh", "cal", "Btu", "ergs"])
        .edge("J", "ergs", 1e7)
        .edge("J", "cal", 0.23901)
        .edge("J", "Btu", 9.486e-4)
        .edge("J", "kWh", 2.77778e-7)
        .edge("kWh", "J", 3.6e6)
        .edge("kWh", "cal", 860420.0)
        .edge("kWh", "Btu", 3412.14)
        .edge("cal", "J", 4.184)
        .edge("cal", "kWh", 1.16279e-6)
        .edge("cal", "Btu", 0.00396567)
        .edge("Btu", "J", 1055.06)
        .edge("Btu", "cal", 252.164)
}

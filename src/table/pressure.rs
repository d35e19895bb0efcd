use super::QuantityTable;

/// 압력 변환표. atm이 허브 역할을 하고 일부 역방향 간선은 빠져 있다 (예: Pa -> kPa).
/// 정/역방향 계수가 정확히 역수가 아닌 쌍이 있으나 기재된 값을 그대로 따른다.
pub fn table() -> QuantityTable {
    QuantityTable::new(
        "Pressure",
        &["atm", "Pa", "kPa", "bar", "psi", "mmHg", "inHg"],
    )
    .edge("atm", "Pa", 101325.0)
    .edge("atm", "kPa", 101.325)
    .edge("atm", "bar", 1.01325)
    .edge("atm", "psi", 14.6959)
    .edge("atm", "mmHg", 760.0)
    .edge("atm", "inHg", 29.9213)
    .edge("Pa", "atm", 9.86923e-6)
    .edge("Pa", "bar", 1e-5)
    .edge("Pa", "psi", 0.000145038)
    .edge("Pa", "mmHg", 0.00750062)
    .edge("kPa", "atm", 0.00986923)
    .edge("kPa", "Pa", 1000.0)
    .edge("kPa", "psi", 0.145038)
    .edge("bar", "atm", 0.986923)
    .edge("bar", "Pa", 100000.0)
    .edge("bar", "psi", 14.5038)
    .edge("psi", "atm", 0.068046)
    .edge("psi", "Pa", 6894.76)
    .edge("psi", "bar", 0.0689476)
    .edge("mmHg", "atm", 0.00131579)
    .edge("mmHg", "Pa", 133.322)
    .edge("mmHg", "inHg", 0.0393701)
    .edge("inHg", "atm", 0.0334211)
    .edge("inHg", "mmHg", 25.4)
}

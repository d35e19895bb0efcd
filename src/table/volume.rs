use super::QuantityTable;

/// 체적 변환표. in³는 ft³를 거쳐야 나머지 단위에 닿는다.
pub fn table() -> QuantityTable {
    QuantityTable::new(
        "Volume",
        &[
            "m³",
            "L",
            "cm³",
            "mL",
            "ft³",
            "gal (UK)",
            "gal (US)",
            "qt",
            "in³",
        ],
    )
    .edge("m³", "L", 1000.0)
    .edge("m³", "cm³", 1e6)
    .edge("m³", "mL", 1e6)
    .edge("m³", "ft³", 35.3147)
    .edge("L", "m³", 0.001)
    .edge("L", "gal (UK)", 0.219969)
    .edge("L", "gal (US)", 0.264172)
    .edge("L", "qt", 1.05669)
    .edge("cm³", "m³", 1e-6)
    .edge("mL", "m³", 1e-6)
    .edge("ft³", "m³", 0.0283168)
    .edge("ft³", "in³", 1728.0)
    .edge("gal (UK)", "L", 4.54609)
    .edge("gal (UK)", "gal (US)", 1.20095)
    .edge("gal (US)", "L", 3.78541)
    .edge("gal (US)", "gal (UK)", 0.832674)
    .edge("qt", "L", 0.946353)
    .edge("qt", "gal (US)", 0.25)
    .edge("in³", "ft³", 0.000578704)
}

use super::QuantityTable;

/// 길이 변환표. microns/angstroms는 m으로만, in/yard는 ft로만 연결된다.
pub fn table() -> QuantityTable {
    QuantityTable::new(
        "Length",
        &[
            "m",
            "cm",
            "mm",
            "microns (µm)",
            "angstroms (Å)",
            "ft",
            "in",
            "yard",
            "mile",
        ],
    )
    .edge("m", "cm", 100.0)
    .edge("m", "mm", 1000.0)
    .edge("m", "microns (µm)", 1e6)
    .edge("m", "angstroms (Å)", 1e10)
    .edge("m", "ft", 3.28084)
    .edge("m", "mile", 0.000621371)
    .edge("cm", "m", 0.01)
    .edge("cm", "ft", 0.0328084)
    .edge("mm", "m", 0.001)
    .edge("mm", "ft", 0.00328084)
    .edge("microns (µm)", "m", 1e-6)
    .edge("angstroms (Å)", "m", 1e-10)
    .edge("ft", "m", 0.3048)
    .edge("ft", "in", 12.0)
    .edge("ft", "yard", 0.333333)
    .edge("ft", "mile", 0.000189394)
    .edge("in", "ft", 0.0833333)
    .edge("in", "cm", 2.54)
    .edge("yard", "ft", 3.0)
    .edge("mile", "m", 1609.34)
}

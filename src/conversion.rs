use std::collections::{HashMap, VecDeque};

use crate::table::{ConversionTable, QuantityTable};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 물리량 이름
    UnknownQuantity(String),
    /// 해당 물리량에 없는 단위 이름
    UnknownUnit { quantity: String, unit: String },
    /// 정/역방향 간선을 모두 따라가도 도달할 수 없는 단위쌍
    NoPath {
        quantity: String,
        from: String,
        to: String,
    },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownQuantity(q) => write!(f, "알 수 없는 물리량: {q}"),
            ConversionError::UnknownUnit { quantity, unit } => {
                write!(f, "알 수 없는 단위: {unit} (물리량: {quantity})")
            }
            ConversionError::NoPath { quantity, from, to } => {
                write!(f, "변환 경로 없음: {from} -> {to} (물리량: {quantity})")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 사용자 입력 한 건에 해당하는 변환 요청. 셸이 만들어 즉시 소비한다.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub quantity: String,
    pub from_unit: String,
    pub to_unit: String,
    pub value: f64,
}

impl ConversionRequest {
    pub fn execute(&self, table: &ConversionTable) -> Result<f64, ConversionError> {
        convert(
            table,
            &self.quantity,
            &self.from_unit,
            &self.to_unit,
            self.value,
        )
    }
}

/// 값을 변환한다. 부호나 0에 대한 제한은 없다 (표시 정책은 셸의 몫).
pub fn convert(
    table: &ConversionTable,
    quantity: &str,
    from: &str,
    to: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    Ok(value * resolve_factor(table, quantity, from, to)?)
}

/// `from -> to` 변환 계수를 구한다.
///
/// 우선순위: 동일 단위(항상 1) > 직접 간선 > 역방향 간선의 역수 > 경로 탐색.
/// 표에는 정/역방향이 정확히 역수가 아닌 쌍이 있으므로, 기재된 직접
/// 계수를 역수 유도값보다 항상 우선한다.
pub fn resolve_factor(
    table: &ConversionTable,
    quantity: &str,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    let qt = table
        .quantity(quantity)
        .ok_or_else(|| ConversionError::UnknownQuantity(quantity.to_string()))?;
    for unit in [from, to] {
        if !qt.contains_unit(unit) {
            return Err(ConversionError::UnknownUnit {
                quantity: quantity.to_string(),
                unit: unit.to_string(),
            });
        }
    }
    if from == to {
        return Ok(1.0);
    }
    if let Some(factor) = qt.direct_factor(from, to) {
        return Ok(factor);
    }
    if let Some(reverse) = qt.direct_factor(to, from) {
        return Ok(1.0 / reverse);
    }
    search_factor(qt, from, to).ok_or_else(|| ConversionError::NoPath {
        quantity: quantity.to_string(),
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// 정방향 + 역방향 간선을 합친 그래프에서 최소 홉 경로의 누적 계수를 구한다.
///
/// 같은 깊이에서는 정방향 간선을 역방향보다 먼저, 각 그룹 안에서는 단위 이름
/// 오름차순으로 확장한다. 최초 방문이 곧 확정이므로 동률 경로가 여럿이어도
/// 결과는 항상 같다. 정방향 이동은 계수를 곱하고 역방향 이동은 나눈다.
fn search_factor(qt: &QuantityTable, from: &str, to: &str) -> Option<f64> {
    let mut factor: HashMap<&str, f64> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    factor.insert(from, 1.0);
    queue.push_back(from);

    while let Some(unit) = queue.pop_front() {
        let acc = factor[unit];
        for (next, f) in qt.forward_neighbors(unit) {
            if !factor.contains_key(next) {
                let value = acc * f;
                if next == to {
                    return Some(value);
                }
                factor.insert(next, value);
                queue.push_back(next);
            }
        }
        for (next, f) in qt.reverse_neighbors(unit) {
            if !factor.contains_key(next) {
                let value = acc / f;
                if next == to {
                    return Some(value);
                }
                factor.insert(next, value);
                queue.push_back(next);
            }
        }
    }
    None
}

/// 단위 변환기에서 다루는 물리량 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Flow,
    Flux,
    Pressure,
    Temperature,
}

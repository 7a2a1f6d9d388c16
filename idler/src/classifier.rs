use utility::faas::types::model::FunctionStatus;
use utility::SCALE_ZERO_LABEL;

/// what a pass makes of one function before looking at its replicas
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// not opted in to scale to zero
    Ineligible,
    /// opted in, but the metrics map has no rate for it this pass
    NoData,
    /// opted in and invoked during the window
    Active(f64),
    /// opted in and not invoked during the window
    Idle,
}

/// a function is managed by the idler only when its scale-zero label is
/// exactly "1" or "true"
pub fn is_eligible(function: &FunctionStatus) -> bool {
    matches!(function.label(SCALE_ZERO_LABEL), Some("1") | Some("true"))
}

/// classifies `function` given its summed rate, `None` meaning no data
pub fn classify(function: &FunctionStatus, rate: Option<f64>) -> Classification {
    if !is_eligible(function) {
        return Classification::Ineligible;
    }
    match rate {
        None => Classification::NoData,
        Some(rate) if rate == 0.0 => Classification::Idle,
        Some(rate) => Classification::Active(rate),
    }
}

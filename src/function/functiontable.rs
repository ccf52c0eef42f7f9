use crate::function::realfunction::FunctionCode;

// ─────────────────────────────────────────────────────────────────────────────
// FunctionTable
// ─────────────────────────────────────────────────────────────────────────────
//
// One entry per FunctionCode, stored in code order so that
// FUNCTION_TABLE[code - 1] is the entry for that code.
//
// `evaluate` returns None outside the function's domain; the caller turns that
// into a DomainError carrying the offending x.

pub struct FunctionEntry {
    code: FunctionCode,
    formula: &'static str,
    evaluate: fn(f64) -> Option<f64>
}

impl FunctionEntry {
    pub fn code(&self) -> FunctionCode {
        self.code
    }

    pub fn formula(&self) -> &'static str {
        self.formula
    }

    pub fn evaluate(&self, x: f64) -> Option<f64> {
        (self.evaluate)(x)
    }
}

fn square(x: f64) -> Option<f64> {
    Some(x * x)
}

fn sine(x: f64) -> Option<f64> {
    Some(x.sin())
}

fn arctangent(x: f64) -> Option<f64> {
    Some(x.atan())
}

fn cube(x: f64) -> Option<f64> {
    Some(x * x * x)
}

fn square_root(x: f64) -> Option<f64> {
    if x < 0.0 {
        None
    } else {
        Some(x.sqrt())
    }
}

fn natural_log(x: f64) -> Option<f64> {
    if x <= 0.0 {
        None
    } else {
        Some(x.ln())
    }
}

pub static FUNCTION_TABLE: [FunctionEntry; 6] = [
    FunctionEntry { code: FunctionCode::Square, formula: "x * x", evaluate: square },
    FunctionEntry { code: FunctionCode::Sine, formula: "sin(x)", evaluate: sine },
    FunctionEntry { code: FunctionCode::Arctangent, formula: "arctan(x)", evaluate: arctangent },
    FunctionEntry { code: FunctionCode::Cube, formula: "x * x * x", evaluate: cube },
    FunctionEntry { code: FunctionCode::SquareRoot, formula: "sqrt(x)", evaluate: square_root },
    FunctionEntry { code: FunctionCode::NaturalLog, formula: "ln(x)", evaluate: natural_log }
];

pub fn entry(code: FunctionCode) -> &'static FunctionEntry {
    &FUNCTION_TABLE[(code as usize) - 1]
}
